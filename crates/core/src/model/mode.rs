use serde::{Deserialize, Serialize};
use std::fmt;

/// How a quiz attempt is run.
///
/// Modes share the same engine semantics; they differ only in what the
/// embedding layer is allowed to expose. `Practice` is the default, `Test`
/// and `Zen` change presentation only, and `Challenger` locks backward
/// navigation and runs a per-question countdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuizMode {
    #[default]
    Practice,
    Test,
    Zen,
    Challenger,
}

impl QuizMode {
    /// Whether moving to an earlier question may be offered to the user.
    ///
    /// The session transitions themselves never consult this; callers gate
    /// the retreat operation with it.
    #[must_use]
    pub fn allows_back_navigation(&self) -> bool {
        !matches!(self, QuizMode::Challenger)
    }

    /// Whether each question runs under a countdown.
    #[must_use]
    pub fn is_timed(&self) -> bool {
        matches!(self, QuizMode::Challenger)
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            QuizMode::Practice => "PRACTICE",
            QuizMode::Test => "TEST",
            QuizMode::Zen => "ZEN",
            QuizMode::Challenger => "CHALLENGER",
        }
    }
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_practice() {
        assert_eq!(QuizMode::default(), QuizMode::Practice);
    }

    #[test]
    fn test_back_navigation_locked_only_in_challenger() {
        assert!(QuizMode::Practice.allows_back_navigation());
        assert!(QuizMode::Test.allows_back_navigation());
        assert!(QuizMode::Zen.allows_back_navigation());
        assert!(!QuizMode::Challenger.allows_back_navigation());
    }

    #[test]
    fn test_only_challenger_is_timed() {
        assert!(QuizMode::Challenger.is_timed());
        assert!(!QuizMode::Practice.is_timed());
        assert!(!QuizMode::Test.is_timed());
        assert!(!QuizMode::Zen.is_timed());
    }

    #[test]
    fn test_display_uses_wire_names() {
        assert_eq!(QuizMode::Challenger.to_string(), "CHALLENGER");
    }
}
