mod config;
mod countdown;
mod plan;
mod progress;
mod service;
mod view;

// Public API of the attempt subsystem.
pub use crate::error::{AttemptConfigError, AttemptError};
pub use config::{AttemptConfig, MAX_QUESTION_TIME_SECS, MIN_QUESTION_TIME_SECS};
pub use countdown::{Countdown, CountdownEvent};
pub use plan::{AttemptBuilder, AttemptPlan};
pub use progress::AttemptProgress;
pub use service::{AttemptService, TimeExpiry};
pub use view::{QuestionPaletteItem, palette_for};
