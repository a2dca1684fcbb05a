use thiserror::Error;

/// Errors surfaced by the branch-and-bound engine itself, as opposed to
/// outcomes (`Infeasible`, `OutOfTime`, ...) reported through `SolveStatus`.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("LP oracle returned an undefined status solving node LP")]
    OracleUndefined,
}
