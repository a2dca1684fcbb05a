use shiftsched_core::{Model, Schedule};

use crate::lp::Lp;

/// Converts a solved variable assignment (aligned with `lp.var_names`) into
/// a people x days schedule. Only `Schedule_*` variables are read; `Synergy_*`
/// variables are coupling artifacts of the LP and never materialize directly.
pub fn materialize(model: &Model, lp: &Lp, assignment: &[f64]) -> Schedule {
    let mut schedule =
        Schedule::undecided(model.people.iter().map(|p| p.uid.clone()).collect(), model.horizon);

    for (person_idx, person) in model.people.iter().enumerate() {
        for day in 1..=model.horizon {
            if let Some(var) = lp.variable_index(&Lp::schedule_var_name(&person.uid, day)) {
                schedule.set(person_idx, day - 1, assignment[var].round() as i8);
            }
        }
    }

    schedule
}
