//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::session::SessionError;

/// Errors emitted by `AttemptService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AttemptError {
    #[error("attempt already submitted")]
    AlreadySubmitted,
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Errors emitted while building an `AttemptConfig`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AttemptConfigError {
    #[error("question time limit must be between 5 and 600 seconds")]
    InvalidQuestionTime,
}
