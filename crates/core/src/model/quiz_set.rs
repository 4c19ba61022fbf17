use chrono::{DateTime, Utc};
use std::collections::HashSet;
use thiserror::Error;

use crate::model::ids::{QuestionId, QuizSetId};
use crate::model::question::Question;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum QuizSetError {
    #[error("quiz title cannot be empty")]
    EmptyTitle,

    #[error("a quiz needs at least one question")]
    NoQuestions,

    #[error("duplicate question id: {0}")]
    DuplicateQuestionId(QuestionId),
}

//
// ─── QUIZ SET ──────────────────────────────────────────────────────────────────
//

/// A titled, ordered collection of questions.
///
/// The id is assigned by whatever store holds the quiz library, so freshly
/// authored sets carry `None` until saved.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSet {
    id: Option<QuizSetId>,
    title: String,
    description: Option<String>,
    questions: Vec<Question>,
    created_at: DateTime<Utc>,
}

impl QuizSet {
    /// Creates a new quiz set.
    ///
    /// # Errors
    ///
    /// Returns `QuizSetError::EmptyTitle` if the title is empty or
    /// whitespace-only, `QuizSetError::NoQuestions` for an empty question
    /// list, and `QuizSetError::DuplicateQuestionId` when two questions share
    /// an id.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        questions: Vec<Question>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, QuizSetError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(QuizSetError::EmptyTitle);
        }

        if questions.is_empty() {
            return Err(QuizSetError::NoQuestions);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id().clone()) {
                return Err(QuizSetError::DuplicateQuestionId(question.id().clone()));
            }
        }

        let description = description
            .map(|d| d.trim().to_owned())
            .filter(|d| !d.is_empty());

        Ok(Self {
            id: None,
            title: title.trim().to_owned(),
            description,
            questions,
            created_at,
        })
    }

    /// Attaches the store-assigned id.
    #[must_use]
    pub fn with_id(mut self, id: QuizSetId) -> Self {
        self.id = Some(id);
        self
    }

    // Accessors

    #[must_use]
    pub fn id(&self) -> Option<QuizSetId> {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn question_by_id(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::question::{QuestionDraft, QuestionType};
    use crate::time::fixed_now;

    fn build_question(id: &str) -> Question {
        QuestionDraft {
            id: Some(QuestionId::new(id).unwrap()),
            kind: QuestionType::FillBlank,
            text: format!("question {id}"),
            correct_answers: vec!["yes".to_string()],
            ..QuestionDraft::default()
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn quiz_set_rejects_empty_title() {
        let err = QuizSet::new("   ", None, vec![build_question("q1")], fixed_now()).unwrap_err();
        assert_eq!(err, QuizSetError::EmptyTitle);
    }

    #[test]
    fn quiz_set_rejects_empty_question_list() {
        let err = QuizSet::new("Geography", None, Vec::new(), fixed_now()).unwrap_err();
        assert_eq!(err, QuizSetError::NoQuestions);
    }

    #[test]
    fn quiz_set_rejects_duplicate_question_ids() {
        let questions = vec![build_question("q1"), build_question("q1")];
        let err = QuizSet::new("Geography", None, questions, fixed_now()).unwrap_err();
        assert_eq!(
            err,
            QuizSetError::DuplicateQuestionId(QuestionId::new("q1").unwrap())
        );
    }

    #[test]
    fn quiz_set_trims_title_and_description() {
        let set = QuizSet::new(
            "  Geography  ",
            Some("  capitals of Europe  ".into()),
            vec![build_question("q1")],
            fixed_now(),
        )
        .unwrap();

        assert_eq!(set.title(), "Geography");
        assert_eq!(set.description(), Some("capitals of Europe"));
    }

    #[test]
    fn quiz_set_filters_empty_description() {
        let set = QuizSet::new(
            "Geography",
            Some("   ".into()),
            vec![build_question("q1")],
            fixed_now(),
        )
        .unwrap();

        assert_eq!(set.description(), None);
    }

    #[test]
    fn quiz_set_starts_without_id() {
        let set = QuizSet::new("Geography", None, vec![build_question("q1")], fixed_now()).unwrap();
        assert_eq!(set.id(), None);

        let set = set.with_id(QuizSetId::new(7));
        assert_eq!(set.id(), Some(QuizSetId::new(7)));
    }

    #[test]
    fn quiz_set_question_lookup() {
        let set = QuizSet::new(
            "Geography",
            None,
            vec![build_question("q1"), build_question("q2")],
            fixed_now(),
        )
        .unwrap();

        let q2 = QuestionId::new("q2").unwrap();
        assert_eq!(set.question_by_id(&q2).unwrap().id(), &q2);
        assert!(set.question_by_id(&QuestionId::new("q9").unwrap()).is_none());
        assert_eq!(set.question_count(), 2);
    }
}
