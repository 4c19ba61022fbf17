mod answer;
mod ids;
mod media;
mod mode;
mod question;
mod quiz_set;

pub use answer::AnswerInput;
pub use ids::{ParseIdError, QuestionId, QuizSetId};
pub use media::{DEFAULT_HIT_TOLERANCE, HotspotTarget, MediaError, MediaKind, MediaRef, MediaUri};
pub use mode::QuizMode;
pub use question::{Difficulty, Question, QuestionDraft, QuestionError, QuestionType};
pub use quiz_set::{QuizSet, QuizSetError};
