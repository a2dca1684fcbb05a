use std::time::Duration;

use crate::model::PersonId;

/// Outcome of a solve attempt, refined beyond a plain optimal/infeasible split
/// so callers can tell a proven result from one cut short by a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// Search exhausted the tree; `best` (if any) is provably optimal.
    Optimal,
    /// The deadline was hit with an incumbent already found; it may not be optimal.
    Feasible,
    /// The root relaxation itself has no solution; no schedule is possible.
    Infeasible,
    /// The deadline was hit before any feasible schedule was found.
    OutOfTime,
}

/// Counters describing how a solve attempt spent its time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveStats {
    pub explored_nodes: u64,
    pub lp_solve_time: Duration,
    pub elapsed: Duration,
}

/// A materialized assignment of people to days.
///
/// Each cell is `1` (scheduled), `0` (not scheduled), or `-1` (undecided --
/// only possible before a solve has run, or for a person-day a solve never
/// needed to fix).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    people: Vec<PersonId>,
    horizon: usize,
    cells: Vec<i8>,
}

impl Schedule {
    /// Builds a schedule with every cell undecided.
    pub fn undecided(people: Vec<PersonId>, horizon: usize) -> Self {
        let cells = vec![-1i8; people.len() * horizon];
        Self { people, horizon, cells }
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    pub fn people(&self) -> &[PersonId] {
        &self.people
    }

    fn index(&self, person_idx: usize, day: usize) -> usize {
        assert!(day < self.horizon, "day {day} out of range for horizon {}", self.horizon);
        person_idx * self.horizon + day
    }

    pub fn get(&self, person_idx: usize, day: usize) -> i8 {
        self.cells[self.index(person_idx, day)]
    }

    pub fn set(&mut self, person_idx: usize, day: usize, value: i8) {
        let idx = self.index(person_idx, day);
        self.cells[idx] = value;
    }

    /// Total number of person-days scheduled, i.e. the solve's objective value.
    pub fn objective(&self) -> i64 {
        self.cells.iter().filter(|&&v| v == 1).count() as i64
    }

    /// Renders the schedule the way it's written to disk: one row per person,
    /// `uid,v1,v2,...,vn`, in the person order the schedule was built with.
    pub fn to_csv_string(&self) -> String {
        let mut out = String::new();
        for (person_idx, uid) in self.people.iter().enumerate() {
            out.push_str(uid);
            for day in 0..self.horizon {
                out.push(',');
                out.push_str(&self.get(person_idx, day).to_string());
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undecided_schedule_is_all_unset() {
        let schedule = Schedule::undecided(vec!["alice".into(), "bob".into()], 3);
        assert_eq!(schedule.objective(), 0);
        assert_eq!(schedule.get(0, 0), -1);
        assert_eq!(schedule.get(1, 2), -1);
    }

    #[test]
    fn objective_counts_scheduled_cells_only() {
        let mut schedule = Schedule::undecided(vec!["alice".into()], 2);
        schedule.set(0, 0, 1);
        schedule.set(0, 1, 0);
        assert_eq!(schedule.objective(), 1);
    }

    #[test]
    fn csv_round_trip_shape() {
        let mut schedule = Schedule::undecided(vec!["alice".into(), "bob".into()], 2);
        schedule.set(0, 0, 1);
        schedule.set(0, 1, 0);
        schedule.set(1, 0, 0);
        schedule.set(1, 1, 1);
        assert_eq!(schedule.to_csv_string(), "alice,1,0\nbob,0,1\n");
    }
}
