use thiserror::Error;

use crate::model::{MediaError, ParseIdError, QuestionError, QuizSetError};
use crate::session::SessionError;

/// Any validation or session failure this crate can produce.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    ParseId(#[from] ParseIdError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Media(#[from] MediaError),
    #[error(transparent)]
    QuizSet(#[from] QuizSetError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
