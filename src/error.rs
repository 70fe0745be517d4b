//! Error types for progress bar operations.

use thiserror::Error;

/// Errors surfaced to the caller of a progress bar operation.
///
/// Rendering failures never show up here. The spinner task has nobody to
/// report to and stops quietly; caller-driven redraws log and carry on.
#[derive(Error, Debug)]
pub enum ProgressError {
    #[error("{name} must be positive, got {value}")]
    InvalidArgument { name: &'static str, value: i64 },

    #[error("terminal environment unavailable: {reason}")]
    EnvironmentUnavailable { reason: String },
}

impl ProgressError {
    pub(crate) fn invalid(name: &'static str, value: i64) -> Self {
        ProgressError::InvalidArgument { name, value }
    }

    /// True for errors caused by a rejected bound or delta.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ProgressError::InvalidArgument { .. })
    }
}

pub type Result<T> = std::result::Result<T, ProgressError>;
