use thiserror::Error;

/// Errors raised while parsing the people/set-constraints CSV pair.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("reading {path}: {source}")]
    Io { path: String, #[source] source: std::io::Error },

    #[error("{context}: {source}")]
    Csv { context: String, #[source] source: csv::Error },

    #[error("sets row {row}: expected at least 3 fields, got {actual}")]
    SetsRowTooShort { row: usize, actual: usize },

    #[error("sets row {row}: unknown constraint type code {code} (0 = uninitialized is rejected)")]
    UnknownConstraintType { row: usize, code: i64 },

    #[error("sets row {row}: invalid integer field {field:?}")]
    InvalidInteger { row: usize, field: String },

    #[error(
        "people row {row}: expected at least {expected} fields for {num_days} days, got {actual}"
    )]
    PeopleRowTooShort { row: usize, expected: usize, actual: usize, num_days: usize },

    #[error("people row {row}: availability entry {entry:?} is not 0 or 1")]
    InvalidAvailability { row: usize, entry: String },

    #[error("people row {row}: enrolls in unknown set id {sid:?}")]
    UnknownSetEnrollment { row: usize, sid: String },

    #[error(transparent)]
    Model(#[from] shiftsched_core::ModelError),
}
