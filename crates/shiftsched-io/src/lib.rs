//! # shiftsched-io
//!
//! CSV parsing and writing for the office scheduling domain model.
//!
//! The wire format pairs two files: a people CSV (`uid,a_1,...,a_D,[sid,...]`)
//! and a set-constraints CSV (`sid,1,lo,hi` for departments, `sid,2,lo` for
//! synergy groups). Set membership is driven entirely by the trailing
//! enrollment columns on the people CSV; the set-constraints CSV carries no
//! member list of its own.

mod error;
mod parse;
mod write;

pub use error::ParseError;
pub use parse::parse_model;
pub use write::write_schedule;
