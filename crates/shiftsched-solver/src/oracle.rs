use good_lp::{default_solver, Expression, ProblemVariables, ResolutionError, Solution, SolverModel, Variable};

use crate::lp::{Lp, Sense};

/// Status of an LP relaxation solve, matching the oracle contract: a narrow
/// four-way outcome independent of whichever solver backend answers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleStatus {
    Optimal,
    Infeasible,
    Unbounded,
    Undefined,
}

#[derive(Debug, Clone)]
pub struct OracleResult {
    pub status: OracleStatus,
    pub objective: f64,
    /// Aligned with `Lp::var_names`; empty unless `status == Optimal`.
    pub assignment: Vec<f64>,
}

/// A pluggable LP relaxation solver. The engine never depends on a concrete
/// backend, only on this narrow contract -- the actual mixed-integer
/// structure of the scheduling problem never reaches the oracle, only the
/// relaxed continuous LP for one branch-and-bound node at a time.
pub trait LpOracle {
    fn solve(&self, lp: &Lp) -> OracleResult;
}

/// The default oracle: translates `Lp` into a fresh `good_lp` problem and
/// solves it with the `microlp` backend. No state is kept across calls --
/// every node gets its own from-scratch translation, since `good_lp`
/// exposes no incremental re-solve primitive worth building around here.
pub struct GoodLpOracle;

impl LpOracle for GoodLpOracle {
    fn solve(&self, lp: &Lp) -> OracleResult {
        let mut vars = ProblemVariables::new();
        let columns: Vec<Variable> =
            (0..lp.num_vars()).map(|_| vars.add(good_lp::variable().min(0.0).max(1.0))).collect();

        let objective = linear_expr(&columns, &lp.objective);
        let mut problem = vars.maximise(objective).using(default_solver);

        for constraint in &lp.constraints {
            let expr = linear_expr(&columns, &constraint.terms);
            problem = match constraint.sense {
                Sense::Le => problem.with(expr.leq(constraint.rhs)),
                Sense::Ge => problem.with(expr.geq(constraint.rhs)),
                Sense::Eq => problem.with(expr.eq(constraint.rhs)),
            };
        }

        match problem.solve() {
            Ok(solution) => {
                let assignment: Vec<f64> = columns.iter().map(|&v| solution.value(v)).collect();
                let objective = lp
                    .objective
                    .iter()
                    .map(|&(idx, coeff)| coeff * assignment[idx])
                    .sum();
                OracleResult { status: OracleStatus::Optimal, objective, assignment }
            }
            Err(ResolutionError::Infeasible) => {
                OracleResult { status: OracleStatus::Infeasible, objective: 0.0, assignment: Vec::new() }
            }
            Err(ResolutionError::Unbounded) => {
                OracleResult { status: OracleStatus::Unbounded, objective: 0.0, assignment: Vec::new() }
            }
            Err(_) => OracleResult { status: OracleStatus::Undefined, objective: 0.0, assignment: Vec::new() },
        }
    }
}

fn linear_expr(columns: &[Variable], terms: &[(usize, f64)]) -> Expression {
    let mut expr = Expression::from(0.0);
    for &(idx, coeff) in terms {
        expr += columns[idx] * coeff;
    }
    expr
}
