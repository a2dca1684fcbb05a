use shiftsched_core::{Model, Person, SetConstraint, SetConstraintKind, SolveStatus};
use shiftsched_solver::{solve, LpOracle};

fn person(uid: &str, available: &[bool]) -> Person {
    Person::new(uid, available.to_vec())
}

#[test]
fn trivial_one_person_one_day() {
    let model = Model::new(1, vec![person("A", &[true])], vec![]).unwrap();
    let (status, schedule, _) = solve(&model, None, Some(1)).unwrap();
    assert_eq!(status, SolveStatus::Optimal);
    let schedule = schedule.unwrap();
    assert_eq!(schedule.objective(), 1);
    assert_eq!(schedule.to_csv_string(), "A,1\n");
}

#[test]
fn zero_objective_model_is_optimal_with_an_empty_schedule() {
    // A single person who is never available has a feasible root LP whose
    // best attainable objective is 0. This must still report Optimal with an
    // all-zero schedule, not "no schedule" -- the root LP itself is feasible,
    // it's just that no person-day can ever be worked.
    let model = Model::new(1, vec![person("A", &[false])], vec![]).unwrap();
    let (status, schedule, _) = solve(&model, None, Some(1)).unwrap();
    assert_eq!(status, SolveStatus::Optimal);
    let schedule = schedule.unwrap();
    assert_eq!(schedule.objective(), 0);
    assert_eq!(schedule.to_csv_string(), "A,0\n");
}

#[test]
fn unavailable_day_is_never_scheduled() {
    let model = Model::new(2, vec![person("A", &[false, true])], vec![]).unwrap();
    let (status, schedule, _) = solve(&model, None, Some(1)).unwrap();
    assert_eq!(status, SolveStatus::Optimal);
    let schedule = schedule.unwrap();
    assert_eq!(schedule.objective(), 1);
    assert_eq!(schedule.to_csv_string(), "A,0,1\n");
}

#[test]
fn department_cap_limits_one_person_per_day() {
    let people =
        vec![person("A", &[true, true]), person("B", &[true, true]), person("C", &[true, true])];
    let sets = vec![SetConstraint::new(
        "dept",
        vec!["A".into(), "B".into(), "C".into()],
        SetConstraintKind::Department { lo: 0, hi: Some(1) },
    )];
    let model = Model::new(2, people, sets).unwrap();
    let (status, schedule, _) = solve(&model, None, Some(1)).unwrap();
    assert_eq!(status, SolveStatus::Optimal);
    let schedule = schedule.unwrap();
    assert_eq!(schedule.objective(), 2);
    for day in 0..2 {
        let scheduled_today: i32 =
            (0..3).map(|p| i32::from(schedule.get(p, day) == 1)).sum();
        assert_eq!(scheduled_today, 1);
    }
}

#[test]
fn department_floor_infeasible_on_availability() {
    let people = vec![person("A", &[false]), person("B", &[false])];
    let sets = vec![SetConstraint::new(
        "dept",
        vec!["A".into(), "B".into()],
        SetConstraintKind::Department { lo: 1, hi: Some(2) },
    )];
    let model = Model::new(1, people, sets).unwrap();
    let (status, schedule, _) = solve(&model, None, Some(1)).unwrap();
    assert_eq!(status, SolveStatus::Infeasible);
    assert!(schedule.is_none());
}

#[test]
fn synergy_requires_joint_presence_on_enough_days() {
    let people = vec![person("A", &[true, true, true]), person("B", &[true, true, true])];
    let sets = vec![SetConstraint::new(
        "team",
        vec!["A".into(), "B".into()],
        SetConstraintKind::Synergy { lo: 2 },
    )];
    let model = Model::new(3, people, sets).unwrap();
    let (status, schedule, _) = solve(&model, None, Some(1)).unwrap();
    assert_eq!(status, SolveStatus::Optimal);
    let schedule = schedule.unwrap();
    assert!(schedule.objective() >= 4);

    let both_present_days =
        (0..3).filter(|&d| schedule.get(0, d) == 1 && schedule.get(1, d) == 1).count();
    assert!(both_present_days >= 2);
}

#[test]
fn time_limit_yields_feasible_or_out_of_time_with_valid_schedule() {
    let horizon = 10;
    let mut people = Vec::new();
    for i in 0..12 {
        people.push(person(&format!("P{i}"), &vec![true; horizon]));
    }
    let mut sets = Vec::new();
    for d in 0..4 {
        let members: Vec<String> = people.iter().skip(d * 3).take(3).map(|p| p.uid.clone()).collect();
        sets.push(SetConstraint::new(
            format!("dept{d}"),
            members,
            SetConstraintKind::Department { lo: 1, hi: Some(1) },
        ));
    }
    let model = Model::new(horizon, people, sets).unwrap();

    let (status, schedule, _) =
        solve(&model, Some(std::time::Duration::from_micros(1)), Some(7)).unwrap();

    assert!(matches!(status, SolveStatus::Feasible | SolveStatus::OutOfTime));
    if status == SolveStatus::Feasible {
        let schedule = schedule.unwrap();
        for d in 0..4 {
            let members: Vec<usize> = (d * 3..d * 3 + 3).collect();
            for day in 0..horizon {
                let count: i32 = members.iter().map(|&p| i32::from(schedule.get(p, day) == 1)).sum();
                assert!((1..=1).contains(&count));
            }
        }
    }
}

#[test]
fn root_lp_relaxation_upper_bounds_the_returned_objective() {
    let people = vec![person("A", &[true, true]), person("B", &[true, true])];
    let sets = vec![SetConstraint::new(
        "dept",
        vec!["A".into(), "B".into()],
        SetConstraintKind::Department { lo: 0, hi: Some(1) },
    )];
    let model = Model::new(2, people, sets).unwrap();

    let lp = shiftsched_solver::build(&model);
    let root = shiftsched_solver::GoodLpOracle.solve(&lp);

    let (status, schedule, _) = solve(&model, None, Some(3)).unwrap();
    assert_eq!(status, SolveStatus::Optimal);
    let schedule = schedule.unwrap();

    assert!(root.objective + 1e-6 >= schedule.objective() as f64);
}

#[test]
fn pruning_never_misses_a_better_integer_solution() {
    let people = vec![
        person("A", &[true, true]),
        person("B", &[true, true]),
        person("C", &[true, true]),
    ];
    let sets = vec![SetConstraint::new(
        "dept",
        vec!["A".into(), "B".into(), "C".into()],
        SetConstraintKind::Department { lo: 0, hi: Some(1) },
    )];
    let model = Model::new(2, people, sets).unwrap();

    let (status, schedule, _) = solve(&model, None, Some(42)).unwrap();
    assert_eq!(status, SolveStatus::Optimal);
    let schedule = schedule.unwrap();

    // Brute force over all 2^6 person-day assignments: at most one of the
    // three people may work each day, so pruning must not have settled for
    // less than the true optimum of 2 (one person-day per day).
    let mut best = 0i64;
    for mask in 0u32..64 {
        let bits: Vec<i64> = (0..6).map(|i| i64::from((mask >> i) & 1)).collect();
        let fits = (0..2).all(|day| (0..3).map(|p| bits[p * 2 + day]).sum::<i64>() <= 1);
        if fits {
            best = best.max(bits.iter().sum());
        }
    }

    assert_eq!(schedule.objective(), best);
}
