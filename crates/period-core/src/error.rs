//! Error types for the period algebra
//!
//! Two outcome channels are kept apart:
//! - `Err(PeriodError)` for ill-defined requests (bad edges, bad text, unsupported cuts)
//! - `Ok(None)` / `None` for well-defined requests whose answer is empty

use thiserror::Error;

use crate::Edge;

/// Period algebra errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PeriodError {
    // Validation errors
    #[error("'start' must be '<' (before) 'end': '{start}' >= '{end}'")]
    NotChronological { start: String, end: String },

    #[error("Can't mix naive ({naive}) and aware ({aware}) edges")]
    MixedAwareness { naive: Edge, aware: Edge },

    // Text errors
    #[error("Invalid isoformat string: '{0}'")]
    InvalidIso(String),

    #[error("Separator '{sep}' not found in '{input}'")]
    MissingSeparator { input: String, sep: String },

    #[error("period data '{input}' does not match time format '{format}' with separator '{sep}'")]
    PatternMismatch {
        input: String,
        format: String,
        sep: String,
    },

    #[error("Invalid time format: '{0}'")]
    InvalidPattern(String),

    // Arithmetic errors
    #[error("Cut requires a shared edge: {period} and {other} have none")]
    UnsupportedCut { period: String, other: String },

    #[error("Timestamp out of range")]
    OutOfRange,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid scale factor: {0}")]
    InvalidFactor(f64),
}

/// Result type for period operations
pub type PeriodResult<T> = Result<T, PeriodError>;
