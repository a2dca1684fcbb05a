use shiftsched_core::{Model, SetConstraintKind};

use crate::lp::{Lp, LpConstraint, Sense};

fn dept_ub_name(sid: &str, day: usize) -> String {
    format!("{sid}_UB_day_{day}")
}

fn dept_lb_name(sid: &str, day: usize) -> String {
    format!("{sid}_LB_day_{day}")
}

/// Builds the canonical LP relaxation for a model: continuous `Schedule` and
/// `Synergy` variables, availability caps, department bounds, and synergy
/// coupling constraints, all created in deterministic order.
///
/// Variables are created first (people x days, then synergy sets x days),
/// then constraints (availability, then each set constraint's own bounds in
/// input order) -- mirroring the order the original LP builder uses, so the
/// named constraints this function emits are exactly the ones `catalog`
/// expects to find by name when branching on a department bound.
pub fn build(model: &Model) -> Lp {
    let mut lp = Lp::new();

    for person in &model.people {
        for day in 1..=model.horizon {
            lp.add_variable(Lp::schedule_var_name(&person.uid, day));
        }
    }
    for constraint in model.synergy_constraints() {
        for day in 1..=model.horizon {
            lp.add_variable(Lp::synergy_var_name(&constraint.sid, day));
        }
    }

    lp.objective = model
        .people
        .iter()
        .flat_map(|person| (1..=model.horizon).map(move |day| Lp::schedule_var_name(&person.uid, day)))
        .map(|name| (lp.variable_index(&name).expect("just created"), 1.0))
        .collect();

    for person in &model.people {
        for day in 1..=model.horizon {
            if !person.is_available(day - 1) {
                let var = lp.variable_index(&Lp::schedule_var_name(&person.uid, day)).unwrap();
                lp.add_constraint(LpConstraint {
                    name: format!("{}_avail_day_{day}", person.uid),
                    terms: vec![(var, 1.0)],
                    sense: Sense::Le,
                    rhs: 0.0,
                });
            }
        }
    }

    for constraint in &model.constraints {
        match constraint.kind {
            SetConstraintKind::Department { .. } => {
                let member_vars = |day: usize| -> Vec<(usize, f64)> {
                    constraint
                        .members
                        .iter()
                        .map(|uid| (lp.variable_index(&Lp::schedule_var_name(uid, day)).unwrap(), 1.0))
                        .collect()
                };

                if let Some(hi) = constraint.effective_upper_bound() {
                    for day in 1..=model.horizon {
                        lp.add_root_constraint(LpConstraint {
                            name: dept_ub_name(&constraint.sid, day),
                            terms: member_vars(day),
                            sense: Sense::Le,
                            rhs: f64::from(hi),
                        });
                    }
                }
                for day in 1..=model.horizon {
                    lp.add_root_constraint(LpConstraint {
                        name: dept_lb_name(&constraint.sid, day),
                        terms: member_vars(day),
                        sense: Sense::Ge,
                        rhs: f64::from(constraint.lower_bound()),
                    });
                }
            }
            SetConstraintKind::Synergy { lo } => {
                let y_vars: Vec<(usize, f64)> = (1..=model.horizon)
                    .map(|day| {
                        (lp.variable_index(&Lp::synergy_var_name(&constraint.sid, day)).unwrap(), 1.0)
                    })
                    .collect();
                lp.add_constraint(LpConstraint {
                    name: format!("{}_count", constraint.sid),
                    terms: y_vars,
                    sense: Sense::Ge,
                    rhs: f64::from(lo),
                });

                for day in 1..=model.horizon {
                    let y_var = lp.variable_index(&Lp::synergy_var_name(&constraint.sid, day)).unwrap();
                    let mut terms: Vec<(usize, f64)> = constraint
                        .members
                        .iter()
                        .map(|uid| (lp.variable_index(&Lp::schedule_var_name(uid, day)).unwrap(), 1.0))
                        .collect();
                    terms.push((y_var, -(constraint.members.len() as f64)));
                    lp.add_constraint(LpConstraint {
                        name: format!("{}_sync_day_{day}", constraint.sid),
                        terms,
                        sense: Sense::Ge,
                        rhs: 0.0,
                    });
                }
            }
        }
    }

    lp
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiftsched_core::{Person, SetConstraint};

    #[test]
    fn trivial_model_has_one_schedule_variable() {
        let model = Model::new(1, vec![Person::new("A", vec![true])], vec![]).unwrap();
        let lp = build(&model);
        assert_eq!(lp.var_names, vec!["Schedule_A_1"]);
        assert_eq!(lp.objective, vec![(0, 1.0)]);
        assert!(lp.constraints.is_empty());
    }

    #[test]
    fn unavailable_day_gets_a_capping_constraint() {
        let model = Model::new(2, vec![Person::new("A", vec![false, true])], vec![]).unwrap();
        let lp = build(&model);
        assert_eq!(lp.constraints.len(), 1);
        assert_eq!(lp.constraints[0].name, "A_avail_day_1");
        assert_eq!(lp.constraints[0].sense, Sense::Le);
        assert_eq!(lp.constraints[0].rhs, 0.0);
    }

    #[test]
    fn department_constraint_emits_named_bounds_per_day() {
        let people = vec![Person::new("A", vec![true, true]), Person::new("B", vec![true, true])];
        let sets = vec![SetConstraint::new(
            "dept",
            vec!["A".into(), "B".into()],
            SetConstraintKind::Department { lo: 0, hi: Some(1) },
        )];
        let model = Model::new(2, people, sets).unwrap();
        let lp = build(&model);

        assert!(lp.root_constraint("dept_UB_day_1").is_some());
        assert!(lp.root_constraint("dept_UB_day_2").is_some());
        assert!(lp.root_constraint("dept_LB_day_1").is_some());
        let ub = lp.root_constraint("dept_UB_day_1").unwrap();
        assert_eq!(ub.rhs, 1.0);
        assert_eq!(ub.terms.len(), 2);
    }

    #[test]
    fn unbounded_department_has_no_ub_constraint() {
        let people = vec![Person::new("A", vec![true])];
        let sets = vec![SetConstraint::new(
            "dept",
            vec!["A".into()],
            SetConstraintKind::Department { lo: 0, hi: None },
        )];
        let model = Model::new(1, people, sets).unwrap();
        let lp = build(&model);
        assert!(lp.root_constraint("dept_UB_day_1").is_none());
        assert!(lp.root_constraint("dept_LB_day_1").is_some());
    }

    #[test]
    fn synergy_constraint_emits_count_and_coupling_constraints() {
        let people = vec![Person::new("A", vec![true, true]), Person::new("B", vec![true, true])];
        let sets = vec![SetConstraint::new(
            "team",
            vec!["A".into(), "B".into()],
            SetConstraintKind::Synergy { lo: 2 },
        )];
        let model = Model::new(2, people, sets).unwrap();
        let lp = build(&model);

        assert!(lp.variable_index("Synergy_team_1").is_some());
        assert!(lp.constraints.iter().any(|c| c.name == "team_count" && c.rhs == 2.0));
        let coupling = lp.constraints.iter().find(|c| c.name == "team_sync_day_1").unwrap();
        assert_eq!(coupling.sense, Sense::Ge);
        assert_eq!(coupling.rhs, 0.0);
    }
}
