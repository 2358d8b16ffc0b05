//! Planner error types
//!
//! The only failure the planner knows about is a draft that is missing a
//! required field at submission time.

use thiserror::Error;

/// Reasons a draft cannot be committed
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    /// Name is absent or empty
    #[error("Missing name")]
    MissingName,

    /// Calories are absent or zero
    #[error("Missing calories")]
    MissingCalories,
}

/// Result type alias for draft validation and submission
pub type DraftResult<T> = Result<T, DraftError>;
