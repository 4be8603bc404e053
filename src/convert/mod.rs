pub mod duration;
pub mod text;
pub mod timestamp;

pub use duration::{duration_to_seconds, sum_durations};
pub use text::{format_full_name, format_zip};
pub use timestamp::to_eastern_rfc3339;

use thiserror::Error;

/// Row-local conversion failure. Carries the offending field name so the
/// diagnostic log can point an operator at the bad value; never fatal to the
/// run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} field {reason}")]
pub struct ParseFailure {
    pub field: &'static str,
    pub reason: String,
}

impl ParseFailure {
    pub fn new(field: &'static str, reason: impl Into<String>) -> ParseFailure {
        ParseFailure {
            field,
            reason: reason.into(),
        }
    }
}
