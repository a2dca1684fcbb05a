//! # shiftsched-core
//!
//! Domain model for the office scheduling problem: people and their
//! availability, department and synergy set constraints, and the
//! materialized schedule that a solve produces.
//!
//! This crate provides:
//! - Domain types: `Person`, `SetConstraint`, `Model`
//! - `Schedule`, the materialized assignment of people to days
//! - `ModelError`, raised when the invariants of a model are violated
//!
//! ## Example
//!
//! ```rust
//! use shiftsched_core::{Model, Person, SetConstraint, SetConstraintKind};
//!
//! let people = vec![
//!     Person::new("alice", vec![true, true, false]),
//!     Person::new("bob", vec![true, false, true]),
//! ];
//! let sets = vec![SetConstraint::new(
//!     "sales",
//!     vec!["alice".into(), "bob".into()],
//!     SetConstraintKind::Department { lo: 1, hi: Some(1) },
//! )];
//! let model = Model::new(3, people, sets).unwrap();
//! assert_eq!(model.horizon, 3);
//! ```

mod model;
mod schedule;

pub use model::{Model, ModelError, Person, PersonId, SetConstraint, SetConstraintKind, SetId};
pub use schedule::{Schedule, SolveStats, SolveStatus};
