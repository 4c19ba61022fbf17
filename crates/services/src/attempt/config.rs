use std::time::Duration;

use crate::error::AttemptConfigError;

/// Lower bound for the per-question time limit, in seconds.
pub const MIN_QUESTION_TIME_SECS: u32 = 5;
/// Upper bound for the per-question time limit, in seconds.
pub const MAX_QUESTION_TIME_SECS: u32 = 600;

const DEFAULT_QUESTION_TIME_SECS: u32 = 30;

/// Per-attempt options chosen alongside the quiz and mode.
///
/// The time limit only matters in timed modes; untimed attempts carry it
/// around unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptConfig {
    question_time_secs: u32,
    shuffle_questions: bool,
}

impl AttemptConfig {
    /// Create a config with a validated per-question time limit.
    ///
    /// # Errors
    ///
    /// Returns `AttemptConfigError::InvalidQuestionTime` when the limit falls
    /// outside 5..=600 seconds.
    pub fn new(
        question_time_secs: u32,
        shuffle_questions: bool,
    ) -> Result<Self, AttemptConfigError> {
        if !(MIN_QUESTION_TIME_SECS..=MAX_QUESTION_TIME_SECS).contains(&question_time_secs) {
            return Err(AttemptConfigError::InvalidQuestionTime);
        }
        Ok(Self {
            question_time_secs,
            shuffle_questions,
        })
    }

    // Accessors

    #[must_use]
    pub fn question_time_secs(&self) -> u32 {
        self.question_time_secs
    }

    #[must_use]
    pub fn shuffle_questions(&self) -> bool {
        self.shuffle_questions
    }

    /// Time limit as a [`Duration`] ready for the countdown.
    #[must_use]
    pub fn question_time_limit(&self) -> Duration {
        Duration::from_secs(u64::from(self.question_time_secs))
    }
}

impl Default for AttemptConfig {
    fn default() -> Self {
        Self {
            question_time_secs: DEFAULT_QUESTION_TIME_SECS,
            shuffle_questions: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_thirty_seconds_without_shuffle() {
        let config = AttemptConfig::default();
        assert_eq!(config.question_time_secs(), 30);
        assert!(!config.shuffle_questions());
    }

    #[test]
    fn new_accepts_the_bounds() {
        assert!(AttemptConfig::new(MIN_QUESTION_TIME_SECS, false).is_ok());
        assert!(AttemptConfig::new(MAX_QUESTION_TIME_SECS, true).is_ok());
    }

    #[test]
    fn new_rejects_out_of_range_limits() {
        assert!(matches!(
            AttemptConfig::new(4, false),
            Err(AttemptConfigError::InvalidQuestionTime)
        ));
        assert!(matches!(
            AttemptConfig::new(601, false),
            Err(AttemptConfigError::InvalidQuestionTime)
        ));
    }

    #[test]
    fn question_time_limit_converts_to_duration() {
        let config = AttemptConfig::new(90, false).unwrap();
        assert_eq!(config.question_time_limit(), Duration::from_secs(90));
    }
}
