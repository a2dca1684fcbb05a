//! # shiftsched-solver
//!
//! Branch-and-bound solver for the office scheduling model. A `Model` is
//! translated into a continuous LP relaxation (`lp`), the relaxation is
//! solved by a pluggable `LpOracle` (`oracle`), and a depth-first
//! branch-and-bound engine (`engine`) explores the tree of integrality
//! decisions, pruning by the LP bound and tracking the best integer
//! schedule found (`materialize`). `facade::solve` ties these together
//! behind a single entry point.

mod build;
mod catalog;
mod engine;
mod errors;
mod lp;
mod materialize;
mod oracle;

pub mod facade;

pub use build::build;
pub use catalog::BranchingOption;
pub use errors::SolverError;
pub use facade::solve;
pub use lp::{Lp, LpConstraint, Sense};
pub use oracle::{GoodLpOracle, LpOracle, OracleResult, OracleStatus};
