use shiftsched_core::{Model, SetConstraintKind};

use crate::lp::{Lp, LpConstraint, Sense};

/// A single branchable decision atom. Deliberately a closed sum type rather
/// than a class hierarchy: exactly three shapes exist, and every consumer
/// (the engine, logging) wants to match on all of them.
#[derive(Debug, Clone, PartialEq)]
pub enum BranchingOption {
    /// Fix `Schedule_{uid}_{day}` to 0 or 1.
    PersonDay { uid: String, day: usize },
    /// Fix `Synergy_{sid}_{day}` to 0 or 1.
    SynergyDay { sid: String, day: usize },
    /// Bisect a department's `[lo, hi]` headcount window for one day.
    DeptDay { sid: String, day: usize, lo: u32, hi: u32 },
}

/// Enumerates every branching option live at the root: one `PersonDay` per
/// (person, day), one `SynergyDay` per (synergy set, day), and one `DeptDay`
/// per (department, day) seeded with that department's own bounds.
pub fn root_options(model: &Model) -> Vec<BranchingOption> {
    let mut options = Vec::new();

    for person in &model.people {
        for day in 1..=model.horizon {
            options.push(BranchingOption::PersonDay { uid: person.uid.clone(), day });
        }
    }

    for constraint in &model.constraints {
        match constraint.kind {
            SetConstraintKind::Department { lo, .. } => {
                let hi = constraint.effective_upper_bound().expect("department always has one");
                for day in 1..=model.horizon {
                    options.push(BranchingOption::DeptDay {
                        sid: constraint.sid.clone(),
                        day,
                        lo,
                        hi,
                    });
                }
            }
            SetConstraintKind::Synergy { .. } => {
                for day in 1..=model.horizon {
                    options.push(BranchingOption::SynergyDay { sid: constraint.sid.clone(), day });
                }
            }
        }
    }

    options
}

/// Materializes the children of branching on `option`, given the parent
/// node's already-solved LP and the sibling options still live for this
/// node (i.e. every root option minus the one just picked).
///
/// Returns each child's own `Lp` (a clone of the parent's, with one
/// additional constraint) paired with the branching options still live at
/// that child.
pub fn branch(
    parent_lp: &Lp,
    option: &BranchingOption,
    remaining: &[BranchingOption],
) -> Vec<(Lp, Vec<BranchingOption>)> {
    match option {
        BranchingOption::PersonDay { uid, day } => {
            branch_fix_variable(parent_lp, &Lp::schedule_var_name(uid, *day), remaining)
        }
        BranchingOption::SynergyDay { sid, day } => {
            branch_fix_variable(parent_lp, &Lp::synergy_var_name(sid, *day), remaining)
        }
        BranchingOption::DeptDay { sid, day, lo, hi } => {
            branch_dept_day(parent_lp, sid, *day, *lo, *hi, remaining)
        }
    }
}

fn branch_fix_variable(
    parent_lp: &Lp,
    var_name: &str,
    remaining: &[BranchingOption],
) -> Vec<(Lp, Vec<BranchingOption>)> {
    let Some(var) = parent_lp.variable_index(var_name) else {
        // Variable doesn't exist in this LP shape; nothing to fix. Shouldn't
        // happen since every Schedule/Synergy variable is always created,
        // but branching on a no-op atom degenerates harmlessly rather than
        // panicking.
        return vec![(parent_lp.clone(), remaining.to_vec())];
    };

    [0.0, 1.0]
        .into_iter()
        .map(|value| {
            let mut lp = parent_lp.clone();
            lp.add_constraint(LpConstraint {
                name: format!("{var_name}_fixed_{value}"),
                terms: vec![(var, 1.0)],
                sense: Sense::Eq,
                rhs: value,
            });
            (lp, remaining.to_vec())
        })
        .collect()
}

fn branch_dept_day(
    parent_lp: &Lp,
    sid: &str,
    day: usize,
    lo: u32,
    hi: u32,
    remaining: &[BranchingOption],
) -> Vec<(Lp, Vec<BranchingOption>)> {
    if hi <= lo {
        // Interval has already collapsed; this atom yields no children.
        return Vec::new();
    }

    let mid = lo + (hi - lo) / 2;

    let ub_name = format!("{sid}_UB_day_{day}");
    let lb_name = format!("{sid}_LB_day_{day}");

    let lower_half = {
        // [lo, mid]: tighten the upper bound to mid. If the department had
        // no upper bound at all, transpose the lower-bound constraint's
        // terms with a Le sense instead -- the member set is identical.
        let template = parent_lp
            .root_constraint(&ub_name)
            .or_else(|| parent_lp.root_constraint(&lb_name))
            .expect("every department has at least a lower-bound constraint");
        let mut lp = parent_lp.clone();
        lp.add_constraint(LpConstraint {
            name: format!("{ub_name}_le_{mid}"),
            terms: template.terms.clone(),
            sense: Sense::Le,
            rhs: f64::from(mid),
        });
        let mut options = remaining.to_vec();
        options.push(BranchingOption::DeptDay { sid: sid.to_string(), day, lo, hi: mid });
        (lp, options)
    };

    let upper_half = {
        let template = parent_lp
            .root_constraint(&lb_name)
            .expect("every department has a lower-bound constraint");
        let mut lp = parent_lp.clone();
        lp.add_constraint(LpConstraint {
            name: format!("{lb_name}_ge_{}", mid + 1),
            terms: template.terms.clone(),
            sense: Sense::Ge,
            rhs: f64::from(mid + 1),
        });
        let mut options = remaining.to_vec();
        options.push(BranchingOption::DeptDay { sid: sid.to_string(), day, lo: mid + 1, hi });
        (lp, options)
    };

    vec![lower_half, upper_half]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build;
    use shiftsched_core::{Model, Person, SetConstraint};

    fn dept_model() -> Model {
        let people = vec![
            Person::new("A", vec![true, true]),
            Person::new("B", vec![true, true]),
            Person::new("C", vec![true, true]),
        ];
        let sets = vec![SetConstraint::new(
            "dept",
            vec!["A".into(), "B".into(), "C".into()],
            SetConstraintKind::Department { lo: 0, hi: Some(2) },
        )];
        Model::new(2, people, sets).unwrap()
    }

    #[test]
    fn root_options_covers_every_person_day_and_dept_day() {
        let model = dept_model();
        let options = root_options(&model);
        let person_days = options.iter().filter(|o| matches!(o, BranchingOption::PersonDay { .. })).count();
        let dept_days = options.iter().filter(|o| matches!(o, BranchingOption::DeptDay { .. })).count();
        assert_eq!(person_days, 3 * 2);
        assert_eq!(dept_days, 2);
    }

    #[test]
    fn person_day_branch_yields_two_fixed_children() {
        let model = dept_model();
        let lp = build::build(&model);
        let option = BranchingOption::PersonDay { uid: "A".into(), day: 1 };
        let children = branch(&lp, &option, &[]);
        assert_eq!(children.len(), 2);
        let var = lp.variable_index("Schedule_A_1").unwrap();
        let rhses: Vec<f64> = children[0]
            .0
            .constraints
            .iter()
            .chain(children[1].0.constraints.iter())
            .filter(|c| c.terms == vec![(var, 1.0)])
            .map(|c| c.rhs)
            .collect();
        assert_eq!(rhses, vec![0.0, 1.0]);
    }

    #[test]
    fn dept_day_branch_bisects_the_interval() {
        let model = dept_model();
        let lp = build::build(&model);
        let option = BranchingOption::DeptDay { sid: "dept".into(), day: 1, lo: 0, hi: 2 };
        let children = branch(&lp, &option, &[]);
        assert_eq!(children.len(), 2);

        let lower_opt = children[0].1.last().unwrap().clone();
        let upper_opt = children[1].1.last().unwrap().clone();
        assert_eq!(lower_opt, BranchingOption::DeptDay { sid: "dept".into(), day: 1, lo: 0, hi: 1 });
        assert_eq!(upper_opt, BranchingOption::DeptDay { sid: "dept".into(), day: 1, lo: 2, hi: 2 });
    }

    #[test]
    fn dept_day_branch_on_collapsed_interval_has_no_children() {
        let model = dept_model();
        let lp = build::build(&model);
        let option = BranchingOption::DeptDay { sid: "dept".into(), day: 1, lo: 1, hi: 1 };
        assert!(branch(&lp, &option, &[]).is_empty());
    }
}
