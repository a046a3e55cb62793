//! Error types for the datebook ecosystem.

use thiserror::Error;

/// Errors from constructing or parsing a [`crate::Date`].
///
/// The `Display` form of each variant is the exact line the command loop
/// prints, so callers render these with no extra formatting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The text did not match `<integer>-<integer>-<integer>`.
    #[error("Wrong date format: {0}")]
    WrongFormat(String),

    #[error("Month value is invalid: {0}")]
    InvalidMonth(i32),

    #[error("Day value is invalid: {0}")]
    InvalidDay(i32),
}

/// Errors from parsing one command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error(transparent)]
    Date(#[from] DateError),

    #[error("Unknown command: {0}")]
    Unknown(String),
}
