#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod score;
pub mod session;
pub mod time;

pub use error::Error;
pub use time::{Clock, fixed_clock, fixed_now};

pub use model::{
    AnswerInput, Difficulty, HotspotTarget, MediaError, MediaKind, MediaRef, MediaUri,
    ParseIdError, Question, QuestionDraft, QuestionError, QuestionId, QuestionType, QuizMode,
    QuizSet, QuizSetError, QuizSetId,
};

pub use score::{PerformanceBand, ScoreSummary};
pub use session::{Session, SessionError, SessionStatus};
