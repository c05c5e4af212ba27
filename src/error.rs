//! Planning errors.
//!
//! Every stage fails fast on the first violation it detects; the
//! orchestrator (`planner::build_study_plan`) is the single boundary
//! that converts any of these into a failure envelope. No error here
//! is fatal to the hosting process.

use thiserror::Error;

/// Errors that can occur while building a study plan.
#[derive(Error, Debug)]
pub enum PlanError {
    /// A required top-level field is absent from the raw request.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A subject entry is structurally invalid (missing name/deadline,
    /// duplicate name, wrong JSON type).
    #[error("Invalid subject: {0}")]
    InvalidSubject(String),

    /// A difficulty string is present but unrecognized.
    ///
    /// A *missing* difficulty defaults to medium at extraction; an
    /// explicit invalid value is never coerced.
    #[error("Unknown difficulty level: '{0}' (expected easy, medium, or hard)")]
    InvalidDifficulty(String),

    /// A deadline is not a valid `YYYY-MM-DD` date.
    #[error("Invalid deadline date: {0}")]
    DateParse(#[from] chrono::ParseError),

    /// No subjects were supplied, so the total priority weight is zero
    /// and proportional allocation is undefined.
    #[error("Cannot allocate study hours: subject list is empty")]
    EmptySubjectList,

    /// The daily hour budget is zero, negative, or not a number.
    #[error("available_hours_per_day must be a positive number, got {0}")]
    InvalidHours(f64),
}

/// Result alias used throughout the crate.
pub type Result<T, E = PlanError> = std::result::Result<T, E>;
