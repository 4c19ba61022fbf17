#![forbid(unsafe_code)]

pub mod attempt;
pub mod error;

pub use quiz_core::Clock;

pub use error::{AttemptConfigError, AttemptError};

pub use attempt::{
    AttemptBuilder, AttemptConfig, AttemptPlan, AttemptProgress, AttemptService, Countdown,
    CountdownEvent, QuestionPaletteItem, TimeExpiry,
};
