use quiz_core::session::{Session, SessionStatus};

/// Aggregated view of attempt progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptProgress {
    pub total: usize,
    pub answered: usize,
    pub flagged: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

impl AttemptProgress {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        let total = session.total_questions();
        let answered = session.answered_count();
        Self {
            total,
            answered,
            flagged: session.review_count(),
            remaining: total.saturating_sub(answered),
            is_complete: session.status() == SessionStatus::Completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{QuestionDraft, QuestionId, QuestionType, QuizMode};
    use quiz_core::time::fixed_now;

    fn build_session() -> Session {
        let questions: Vec<_> = (1..=3)
            .map(|i| {
                QuestionDraft {
                    id: Some(QuestionId::new(format!("q{i}")).unwrap()),
                    kind: QuestionType::FillBlank,
                    text: format!("question {i}"),
                    correct_answers: vec!["yes".to_string()],
                    ..QuestionDraft::default()
                }
                .validate()
                .unwrap()
            })
            .collect();
        Session::begin(&questions, QuizMode::Practice, fixed_now()).unwrap()
    }

    #[test]
    fn progress_counts_answers_and_flags() {
        let q1 = QuestionId::new("q1").unwrap();
        let q2 = QuestionId::new("q2").unwrap();
        let session = build_session()
            .record_answer(&q1, "yes")
            .toggle_review(&q2);

        let progress = AttemptProgress::from_session(&session);
        assert_eq!(progress.total, 3);
        assert_eq!(progress.answered, 1);
        assert_eq!(progress.flagged, 1);
        assert_eq!(progress.remaining, 2);
        assert!(!progress.is_complete);
    }

    #[test]
    fn progress_reports_completion() {
        let session = build_session().complete(fixed_now());
        let progress = AttemptProgress::from_session(&session);
        assert!(progress.is_complete);
        assert_eq!(progress.remaining, 3);
    }
}
