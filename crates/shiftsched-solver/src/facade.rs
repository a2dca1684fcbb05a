use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use shiftsched_core::{Model, Schedule, SolveStats, SolveStatus};

use crate::build;
use crate::catalog;
use crate::engine;
use crate::errors::SolverError;
use crate::materialize;
use crate::oracle::GoodLpOracle;

/// Builds the LP, drives the branch-and-bound engine to completion or
/// deadline, and returns the refined status, the best schedule found (if
/// any), and counters describing the search.
///
/// `seed` selects the RNG used to pick branching atoms; the same model, time
/// limit, and seed always explore the same tree in the same order.
pub fn solve(
    model: &Model,
    time_limit: Option<Duration>,
    seed: Option<u64>,
) -> Result<(SolveStatus, Option<Schedule>, SolveStats), SolverError> {
    let lp = build::build(model);
    let root_options = catalog::root_options(model);
    let deadline = time_limit.map(|limit| Instant::now() + limit);
    let rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let start = Instant::now();
    let result = engine::run(lp.clone(), root_options, &GoodLpOracle, deadline, rng)?;
    let elapsed = start.elapsed();

    let status = if result.timed_out {
        if result.best_value > 0.0 {
            SolveStatus::Feasible
        } else {
            SolveStatus::OutOfTime
        }
    } else if result.root_infeasible {
        SolveStatus::Infeasible
    } else {
        SolveStatus::Optimal
    };

    // A status of Optimal/Feasible always yields a schedule, even when the
    // best attainable objective is 0 and no incumbent ever beat the initial
    // best_value -- that's the all-zero schedule, not "no schedule".
    let schedule = match (&status, &result.best_assignment) {
        (SolveStatus::Infeasible | SolveStatus::OutOfTime, _) => None,
        (_, Some(assignment)) => Some(materialize::materialize(model, &lp, assignment)),
        (_, None) => {
            let zeros = vec![0.0; lp.num_vars()];
            Some(materialize::materialize(model, &lp, &zeros))
        }
    };

    let stats = SolveStats {
        explored_nodes: result.explored_nodes,
        lp_solve_time: result.lp_solve_time,
        elapsed,
    };

    tracing::info!(
        status = ?status,
        best_value = result.best_value,
        explored_nodes = result.explored_nodes,
        elapsed_s = elapsed.as_secs_f64(),
        lp_solve_s = result.lp_solve_time.as_secs_f64(),
        "branch-and-bound search finished"
    );

    Ok((status, schedule, stats))
}
