use std::time::{Duration, Instant};

use rand::Rng;

use crate::catalog::{self, BranchingOption};
use crate::errors::SolverError;
use crate::lp::{Lp, Sense};
use crate::oracle::{LpOracle, OracleStatus};

/// Tolerance for treating a floating-point LP value as integral or as
/// satisfying a constraint after rounding. Integrality is a zero-tolerance
/// notion conceptually; this epsilon only absorbs floating-point noise from
/// the oracle, not genuine fractionality.
const EPS: f64 = 1e-6;

struct BnbNode {
    lp: Lp,
    branching_options: Vec<BranchingOption>,
}

pub struct EngineResult {
    pub best_value: f64,
    pub best_assignment: Option<Vec<f64>>,
    pub explored_nodes: u64,
    pub lp_solve_time: Duration,
    pub root_infeasible: bool,
    pub timed_out: bool,
}

/// Runs the depth-first branch-and-bound search from `root_lp`, exploring
/// nodes in a stack (last branched, first explored) and pruning any node
/// whose LP bound cannot beat the current incumbent.
pub fn run(
    root_lp: Lp,
    root_options: Vec<BranchingOption>,
    oracle: &dyn LpOracle,
    deadline: Option<Instant>,
    mut rng: impl Rng,
) -> Result<EngineResult, SolverError> {
    let mut stack = vec![BnbNode { lp: root_lp, branching_options: root_options }];

    let mut best_value = 0.0f64;
    let mut best_assignment: Option<Vec<f64>> = None;
    let mut explored_nodes = 0u64;
    let mut lp_solve_time = Duration::ZERO;
    let mut root_infeasible = false;
    let mut is_root = true;

    while let Some(node) = stack.pop() {
        if let Some(dl) = deadline {
            if Instant::now() >= dl {
                return Ok(EngineResult {
                    best_value,
                    best_assignment,
                    explored_nodes,
                    lp_solve_time,
                    root_infeasible,
                    timed_out: true,
                });
            }
        }

        explored_nodes += 1;
        let solve_start = Instant::now();
        let result = oracle.solve(&node.lp);
        lp_solve_time += solve_start.elapsed();

        if is_root {
            root_infeasible = result.status == OracleStatus::Infeasible;
            is_root = false;
        }

        match result.status {
            OracleStatus::Infeasible | OracleStatus::Unbounded => continue,
            OracleStatus::Undefined => return Err(SolverError::OracleUndefined),
            OracleStatus::Optimal => {}
        }

        let lp_value = result.objective;

        if let Some(feasible) = feasible_value_and_assignment(&node.lp, &result.assignment) {
            if feasible.0 > best_value {
                best_value = feasible.0;
                best_assignment = Some(feasible.1);
            }
        }

        if lp_value <= best_value + EPS {
            continue;
        }

        if node.branching_options.is_empty() {
            continue;
        }

        let pick = rng.gen_range(0..node.branching_options.len());
        let mut remaining = node.branching_options.clone();
        let option = remaining.remove(pick);

        for (child_lp, child_options) in catalog::branch(&node.lp, &option, &remaining) {
            stack.push(BnbNode { lp: child_lp, branching_options: child_options });
        }
    }

    Ok(EngineResult {
        best_value,
        best_assignment,
        explored_nodes,
        lp_solve_time,
        root_infeasible,
        timed_out: false,
    })
}

fn is_integral(assignment: &[f64]) -> bool {
    assignment.iter().all(|&v| (v - v.round()).abs() <= EPS)
}

fn round_to_nearest(assignment: &[f64]) -> Vec<f64> {
    assignment.iter().map(|&v| if v <= 0.5 { 0.0 } else { 1.0 }).collect()
}

fn satisfies_all(lp: &Lp, values: &[f64]) -> bool {
    lp.constraints.iter().all(|c| {
        let lhs: f64 = c.terms.iter().map(|&(idx, coeff)| coeff * values[idx]).sum();
        match c.sense {
            Sense::Le => lhs <= c.rhs + EPS,
            Sense::Ge => lhs >= c.rhs - EPS,
            Sense::Eq => (lhs - c.rhs).abs() <= EPS,
        }
    })
}

fn objective_value(lp: &Lp, values: &[f64]) -> f64 {
    lp.objective.iter().map(|&(idx, coeff)| coeff * values[idx]).sum()
}

/// If the LP solution is already integral, it's directly feasible. Otherwise
/// try the rounding heuristic: round every value to its nearer integer and
/// accept it only if it still satisfies every constraint in this node's LP.
fn feasible_value_and_assignment(lp: &Lp, assignment: &[f64]) -> Option<(f64, Vec<f64>)> {
    if is_integral(assignment) {
        return Some((objective_value(lp, assignment), assignment.to_vec()));
    }

    let rounded = round_to_nearest(assignment);
    if satisfies_all(lp, &rounded) {
        Some((objective_value(lp, &rounded), rounded))
    } else {
        None
    }
}
