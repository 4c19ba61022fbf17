use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::media::{HotspotTarget, MediaRef};

//
// ─── QUESTION VOCABULARY ───────────────────────────────────────────────────────
//

/// The answering surface a question presents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// Pick exactly one of the listed options.
    #[default]
    McqSingle,
    /// Pick any subset of the listed options.
    McqMulti,
    /// True or False.
    TrueFalse,
    /// Free-typed answer compared against the accepted strings.
    FillBlank,
    /// Pair each option item with one of a separate set of match texts.
    Match,
    /// Options accompanied by an audio, video, or image asset.
    Media,
    /// Click a region of an image.
    Hotspot,
}

impl QuestionType {
    /// Kinds whose `options` list enumerates the selectable answers.
    ///
    /// `Match` is excluded: its options are the left-hand items and its
    /// correct answers the right-hand texts, so the two sets are disjoint.
    #[must_use]
    pub fn is_choice_based(&self) -> bool {
        matches!(
            self,
            QuestionType::McqSingle | QuestionType::McqMulti | QuestionType::TrueFalse
        )
    }
}

/// Author-assigned difficulty rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Unvalidated question input, as it arrives from an editor or importer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionDraft {
    /// `None` mints a fresh id during validation.
    pub id: Option<QuestionId>,
    pub kind: QuestionType,
    pub text: String,
    /// Empty means the kind renders without an option list.
    pub options: Vec<String>,
    pub correct_answers: Vec<String>,
    pub explanation: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub tags: Vec<String>,
    pub media: Option<MediaRef>,
    pub hotspot_target: Option<HotspotTarget>,
}

impl QuestionDraft {
    #[must_use]
    pub fn new(kind: QuestionType, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            ..Self::default()
        }
    }

    /// Validate the draft into a well-formed [`Question`].
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` if the text is blank after
    /// trimming, `QuestionError::NoCorrectAnswers` if no correct answer is
    /// declared, and `QuestionError::AnswerNotInOptions` when a choice-based
    /// kind lists options that do not cover every correct answer.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(QuestionError::EmptyText);
        }

        if self.correct_answers.is_empty() {
            return Err(QuestionError::NoCorrectAnswers);
        }

        if self.kind.is_choice_based() && !self.options.is_empty() {
            for answer in &self.correct_answers {
                if !self.options.contains(answer) {
                    return Err(QuestionError::AnswerNotInOptions {
                        answer: answer.clone(),
                    });
                }
            }
        }

        let id = match self.id {
            Some(id) => id,
            None => QuestionId::generate(),
        };

        let explanation = self
            .explanation
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());

        Ok(Question {
            id,
            kind: self.kind,
            text: text.to_string(),
            options: self.options,
            correct_answers: self.correct_answers,
            explanation,
            difficulty: self.difficulty,
            tags: self.tags,
            media: self.media,
            hotspot_target: self.hotspot_target,
        })
    }
}

/// One quiz item. Construct through [`QuestionDraft::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    id: QuestionId,
    kind: QuestionType,
    text: String,
    options: Vec<String>,
    correct_answers: Vec<String>,
    explanation: Option<String>,
    difficulty: Option<Difficulty>,
    tags: Vec<String>,
    media: Option<MediaRef>,
    hotspot_target: Option<HotspotTarget>,
}

impl Question {
    // Accessors

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> QuestionType {
        self.kind
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answers(&self) -> &[String] {
        &self.correct_answers
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn media(&self) -> Option<&MediaRef> {
        self.media.as_ref()
    }

    #[must_use]
    pub fn hotspot_target(&self) -> Option<HotspotTarget> {
        self.hotspot_target
    }
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("a question must declare at least one correct answer")]
    NoCorrectAnswers,

    #[error("correct answer {answer:?} is not among the listed options")]
    AnswerNotInOptions { answer: String },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
