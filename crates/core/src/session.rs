use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

use crate::model::{AnswerInput, Question, QuestionId, QuizMode};
use crate::score::ScoreSummary;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("a session needs at least one question")]
    Empty,
}

//
// ─── STATUS ────────────────────────────────────────────────────────────────────
//

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Not yet started. [`Session::begin`] skips straight past this.
    Idle,
    InProgress,
    Completed,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run through a quiz, as an immutable value.
///
/// Every transition borrows the session and returns a new one; the caller
/// replaces the value it holds. Out-of-range navigation is absorbed rather
/// than rejected: `advance` at the last question, `retreat` at the first and
/// `jump_to` past the end all return a session equal to the input, so callers
/// never need to range-check before invoking them. Use [`Session::can_advance`]
/// and [`Session::can_retreat`] when a refused move has to be distinguished.
///
/// The mode is carried for [`Session::allows_back_navigation`]; the
/// transitions themselves never consult it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    question_ids: Vec<QuestionId>,
    current_index: usize,
    answers: HashMap<QuestionId, Vec<String>>,
    review: HashSet<QuestionId>,
    status: SessionStatus,
    mode: QuizMode,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Starts a session over the given questions, positioned at the first
    /// one with nothing answered or flagged.
    ///
    /// `started_at` should come from the services layer clock.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` for an empty question list. This is the
    /// only fallible path; every other operation is total.
    pub fn begin(
        questions: &[Question],
        mode: QuizMode,
        started_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            question_ids: questions.iter().map(|q| q.id().clone()).collect(),
            current_index: 0,
            answers: HashMap::new(),
            review: HashSet::new(),
            status: SessionStatus::InProgress,
            mode,
            started_at,
            ended_at: None,
        })
    }

    /// Records the user's selection for a question, replacing any prior one.
    /// A single answer is stored as a one-element list.
    #[must_use]
    pub fn record_answer(&self, question_id: &QuestionId, input: impl Into<AnswerInput>) -> Self {
        let mut next = self.clone();
        next.answers
            .insert(question_id.clone(), input.into().into_selections());
        next
    }

    /// Moves to the next question; unchanged when already at the last one.
    #[must_use]
    pub fn advance(&self) -> Self {
        if !self.can_advance() {
            return self.clone();
        }
        let mut next = self.clone();
        next.current_index += 1;
        next
    }

    /// Moves to the previous question; unchanged when already at the first.
    ///
    /// Callers gate this with [`Session::allows_back_navigation`]; the
    /// transition itself stays permissive.
    #[must_use]
    pub fn retreat(&self) -> Self {
        if !self.can_retreat() {
            return self.clone();
        }
        let mut next = self.clone();
        next.current_index -= 1;
        next
    }

    /// Jumps to an arbitrary question; out-of-range indices are absorbed.
    #[must_use]
    pub fn jump_to(&self, index: usize) -> Self {
        if index >= self.question_ids.len() {
            return self.clone();
        }
        let mut next = self.clone();
        next.current_index = index;
        next
    }

    /// Flags a question for later review, or clears the flag if set.
    /// Toggling twice restores the original session.
    #[must_use]
    pub fn toggle_review(&self, question_id: &QuestionId) -> Self {
        let mut next = self.clone();
        if !next.review.remove(question_id) {
            next.review.insert(question_id.clone());
        }
        next
    }

    /// Marks the session finished. Completing a completed session keeps the
    /// original end time.
    #[must_use]
    pub fn complete(&self, at: DateTime<Utc>) -> Self {
        if self.status == SessionStatus::Completed {
            return self.clone();
        }
        let mut next = self.clone();
        next.status = SessionStatus::Completed;
        next.ended_at = Some(at);
        next
    }

    /// Scores this session against a question list. See
    /// [`ScoreSummary::from_session`].
    #[must_use]
    pub fn score(&self, questions: &[Question], completed_at: DateTime<Utc>) -> ScoreSummary {
        ScoreSummary::from_session(self, questions, completed_at)
    }

    // Accessors

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Id of the question at the current position.
    ///
    /// The index always stays within bounds (sessions start at 0 over a
    /// non-empty list and transitions never leave the range).
    #[must_use]
    pub fn current_question_id(&self) -> &QuestionId {
        &self.question_ids[self.current_index]
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.question_ids.len()
    }

    #[must_use]
    pub fn question_ids(&self) -> &[QuestionId] {
        &self.question_ids
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.current_index + 1 < self.question_ids.len()
    }

    #[must_use]
    pub fn can_retreat(&self) -> bool {
        self.current_index > 0
    }

    #[must_use]
    pub fn answer_for(&self, question_id: &QuestionId) -> Option<&[String]> {
        self.answers.get(question_id).map(Vec::as_slice)
    }

    /// Whether anything has been recorded for the question, including an
    /// empty selection list.
    #[must_use]
    pub fn is_answered(&self, question_id: &QuestionId) -> bool {
        self.answers.contains_key(question_id)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_marked_for_review(&self, question_id: &QuestionId) -> bool {
        self.review.contains(question_id)
    }

    #[must_use]
    pub fn review_count(&self) -> usize {
        self.review.len()
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    /// Whether the embedding layer may offer backward navigation.
    #[must_use]
    pub fn allows_back_navigation(&self) -> bool {
        self.mode.allows_back_navigation()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{QuestionDraft, QuestionType};
    use crate::time::fixed_now;
    use chrono::Duration;

    fn qid(s: &str) -> QuestionId {
        QuestionId::new(s).unwrap()
    }

    fn build_questions(n: usize) -> Vec<Question> {
        (1..=n)
            .map(|i| {
                QuestionDraft {
                    id: Some(qid(&format!("q{i}"))),
                    kind: QuestionType::FillBlank,
                    text: format!("question {i}"),
                    correct_answers: vec!["yes".to_string()],
                    ..QuestionDraft::default()
                }
                .validate()
                .unwrap()
            })
            .collect()
    }

    fn build_session(n: usize) -> Session {
        Session::begin(&build_questions(n), QuizMode::Practice, fixed_now()).unwrap()
    }

    #[test]
    fn fresh_session_starts_at_first_question() {
        let session = build_session(3);

        assert_eq!(session.current_index(), 0);
        assert_eq!(session.current_question_id(), &qid("q1"));
        assert_eq!(session.total_questions(), 3);
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.review_count(), 0);
        assert_eq!(session.status(), SessionStatus::InProgress);
        assert_eq!(session.started_at(), fixed_now());
        assert_eq!(session.ended_at(), None);
    }

    #[test]
    fn begin_rejects_empty_question_list() {
        let err = Session::begin(&[], QuizMode::Practice, fixed_now()).unwrap_err();
        assert_eq!(err, SessionError::Empty);
    }

    #[test]
    fn record_answer_wraps_single_string() {
        let session = build_session(2).record_answer(&qid("q1"), "A");
        assert_eq!(session.answer_for(&qid("q1")), Some(&["A".to_string()][..]));
    }

    #[test]
    fn record_answer_replaces_prior_selection() {
        let session = build_session(2)
            .record_answer(&qid("q1"), "A")
            .record_answer(&qid("q1"), vec!["B", "C"]);

        assert_eq!(
            session.answer_for(&qid("q1")),
            Some(&["B".to_string(), "C".to_string()][..])
        );
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn transitions_leave_the_original_untouched() {
        let before = build_session(3);
        let after = before.record_answer(&qid("q1"), "A").advance();

        assert_eq!(before.current_index(), 0);
        assert_eq!(before.answered_count(), 0);
        assert_eq!(after.current_index(), 1);
        assert_eq!(after.answered_count(), 1);
    }

    #[test]
    fn advance_stops_at_last_question() {
        let session = build_session(3).advance().advance();
        assert_eq!(session.current_index(), 2);

        let again = session.advance();
        assert_eq!(again, session);
    }

    #[test]
    fn retreat_stops_at_first_question() {
        let session = build_session(3);
        assert_eq!(session.retreat(), session);

        let moved = session.advance().retreat();
        assert_eq!(moved.current_index(), 0);
    }

    #[test]
    fn jump_to_out_of_range_is_identity() {
        let session = build_session(3);
        assert_eq!(session.jump_to(3), session);
        assert_eq!(session.jump_to(99), session);
    }

    #[test]
    fn jump_to_moves_to_index() {
        let session = build_session(3).jump_to(2);
        assert_eq!(session.current_index(), 2);
        assert_eq!(session.current_question_id(), &qid("q3"));
    }

    #[test]
    fn toggle_review_twice_restores_original() {
        let session = build_session(3);
        let flagged = session.toggle_review(&qid("q2"));

        assert!(flagged.is_marked_for_review(&qid("q2")));
        assert_eq!(flagged.toggle_review(&qid("q2")), session);
    }

    #[test]
    fn boundary_predicates_track_position() {
        let session = build_session(2);
        assert!(session.can_advance());
        assert!(!session.can_retreat());

        let at_end = session.advance();
        assert!(!at_end.can_advance());
        assert!(at_end.can_retreat());
    }

    #[test]
    fn complete_sets_status_and_end_time() {
        let end = fixed_now() + Duration::seconds(90);
        let session = build_session(2).complete(end);

        assert_eq!(session.status(), SessionStatus::Completed);
        assert_eq!(session.ended_at(), Some(end));
    }

    #[test]
    fn completing_twice_keeps_first_end_time() {
        let first = fixed_now() + Duration::seconds(90);
        let later = fixed_now() + Duration::seconds(500);
        let session = build_session(2).complete(first).complete(later);

        assert_eq!(session.ended_at(), Some(first));
    }

    #[test]
    fn challenger_session_blocks_back_navigation() {
        let questions = build_questions(2);
        let challenger =
            Session::begin(&questions, QuizMode::Challenger, fixed_now()).unwrap();
        let practice = Session::begin(&questions, QuizMode::Practice, fixed_now()).unwrap();

        assert!(!challenger.allows_back_navigation());
        assert!(practice.allows_back_navigation());
    }

    #[test]
    fn answers_for_unknown_ids_are_still_stored() {
        // the engine does not police ids; scoring walks the question list
        let session = build_session(2).record_answer(&qid("stray"), "X");
        assert!(session.is_answered(&qid("stray")));
        assert_eq!(session.answered_count(), 1);
    }
}
