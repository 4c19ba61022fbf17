use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a Question
///
/// Question ids are opaque strings so imported material can keep whatever
/// identifiers it shipped with; freshly authored questions mint UUIDs via
/// [`QuestionId::generate`].
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(String);

impl QuestionId {
    /// Creates a `QuestionId` from an existing identifier string.
    ///
    /// # Errors
    ///
    /// Returns `ParseIdError` if the string is empty after trimming.
    pub fn new(id: impl Into<String>) -> Result<Self, ParseIdError> {
        let raw = id.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ParseIdError {
                kind: "QuestionId".to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Mints a fresh random identifier for newly authored questions.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the underlying string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Unique identifier for a QuizSet
///
/// Assigned by whatever store holds the quiz library, which is why
/// [`QuizSet`](crate::model::QuizSet) carries it as an `Option`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuizSetId(u64);

impl QuizSetId {
    /// Creates a new `QuizSetId`
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying u64 value
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({:?})", self.0)
    }
}

impl fmt::Debug for QuizSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuizSetId({})", self.0)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for QuizSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── FromStr Implementations ───────────────────────────────────────────────────

/// Error type for parsing ID from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for QuestionId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionId::new(s)
    }
}

impl FromStr for QuizSetId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(QuizSetId::new)
            .map_err(|_| ParseIdError {
                kind: "QuizSetId".to_string(),
            })
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_id_display() {
        let id = QuestionId::new("q1").unwrap();
        assert_eq!(id.to_string(), "q1");
    }

    #[test]
    fn test_question_id_trims_whitespace() {
        let id = QuestionId::new("  q-42  ").unwrap();
        assert_eq!(id.as_str(), "q-42");
    }

    #[test]
    fn test_question_id_rejects_empty() {
        assert!(QuestionId::new("").is_err());
        assert!(QuestionId::new("   ").is_err());
    }

    #[test]
    fn test_question_id_from_str() {
        let id: QuestionId = "intro-3".parse().unwrap();
        assert_eq!(id, QuestionId::new("intro-3").unwrap());
    }

    #[test]
    fn test_question_id_generate_is_unique() {
        let a = QuestionId::generate();
        let b = QuestionId::generate();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn test_quiz_set_id_display() {
        let id = QuizSetId::new(99);
        assert_eq!(id.to_string(), "99");
    }

    #[test]
    fn test_quiz_set_id_from_str() {
        let id: QuizSetId = "456".parse().unwrap();
        assert_eq!(id, QuizSetId::new(456));
    }

    #[test]
    fn test_quiz_set_id_from_str_invalid() {
        let result = "not-a-number".parse::<QuizSetId>();
        assert!(result.is_err());
    }

    #[test]
    fn test_id_roundtrip() {
        let original = QuizSetId::new(42);
        let serialized = original.to_string();
        let deserialized: QuizSetId = serialized.parse().unwrap();
        assert_eq!(original, deserialized);
    }
}
