use chrono::{DateTime, Utc};

use crate::model::Question;
use crate::session::Session;

//
// ─── PERFORMANCE BAND ──────────────────────────────────────────────────────────
//

/// Coarse classification of a final score, for feedback surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceBand {
    /// 90 and above.
    Exceptional,
    /// 75 to 89.
    Excellent,
    /// 50 to 74.
    Good,
    /// Below 50.
    NeedsWork,
}

impl PerformanceBand {
    #[must_use]
    pub fn from_score(score: u32) -> Self {
        if score >= 90 {
            PerformanceBand::Exceptional
        } else if score >= 75 {
            PerformanceBand::Excellent
        } else if score >= 50 {
            PerformanceBand::Good
        } else {
            PerformanceBand::NeedsWork
        }
    }
}

//
// ─── SCORE SUMMARY ─────────────────────────────────────────────────────────────
//

/// Aggregate result of a finished quiz session.
///
/// Computed once at submission time; never stored on the session itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSummary {
    score: u32,
    correct: u32,
    incorrect: u32,
    not_attempted: u32,
    total_questions: u32,
    average_seconds_per_question: f64,
    longest_streak: u32,
}

impl ScoreSummary {
    /// Grades a session against a question list.
    ///
    /// Questions are graded in the order of `questions` (the quiz's own
    /// order, not the session's traversal order). A missing or empty
    /// selection counts as not attempted; otherwise the selection and the
    /// question's correct answers are compared as multisets, so multi-select
    /// answers match in any order. Ids recorded on the session but absent
    /// from `questions` are ignored.
    ///
    /// This is a total function: mismatched inputs degrade to zero counts
    /// rather than failing.
    #[must_use]
    pub fn from_session(
        session: &Session,
        questions: &[Question],
        completed_at: DateTime<Utc>,
    ) -> Self {
        let mut correct = 0_u32;
        let mut incorrect = 0_u32;
        let mut not_attempted = 0_u32;
        let mut streak = 0_u32;
        let mut longest_streak = 0_u32;

        for question in questions {
            let attempted = session
                .answer_for(question.id())
                .filter(|given| !given.is_empty());

            match attempted {
                None => {
                    not_attempted = not_attempted.saturating_add(1);
                    streak = 0;
                }
                Some(given) => {
                    if selections_match(given, question.correct_answers()) {
                        correct = correct.saturating_add(1);
                        streak = streak.saturating_add(1);
                        longest_streak = longest_streak.max(streak);
                    } else {
                        incorrect = incorrect.saturating_add(1);
                        streak = 0;
                    }
                }
            }
        }

        let total_questions = u32::try_from(questions.len()).unwrap_or(u32::MAX);

        let score = if total_questions == 0 {
            0
        } else {
            (f64::from(correct) / f64::from(total_questions) * 100.0).round() as u32
        };

        let average_seconds_per_question = if total_questions == 0 {
            0.0
        } else {
            let elapsed_ms = (completed_at - session.started_at()).num_milliseconds().max(0);
            let avg = elapsed_ms as f64 / 1000.0 / f64::from(total_questions);
            (avg * 10.0).round() / 10.0
        };

        Self {
            score,
            correct,
            incorrect,
            not_attempted,
            total_questions,
            average_seconds_per_question,
            longest_streak,
        }
    }

    // Accessors

    /// Rounded percentage of correct answers, 0 to 100.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    #[must_use]
    pub fn not_attempted(&self) -> u32 {
        self.not_attempted
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    /// Seconds spent per question on average, rounded to one decimal.
    #[must_use]
    pub fn average_seconds_per_question(&self) -> f64 {
        self.average_seconds_per_question
    }

    /// Longest run of consecutive correct answers, counted in quiz order.
    #[must_use]
    pub fn longest_streak(&self) -> u32 {
        self.longest_streak
    }

    #[must_use]
    pub fn band(&self) -> PerformanceBand {
        PerformanceBand::from_score(self.score)
    }
}

/// Order-independent comparison of a selection against the accepted answers.
fn selections_match(given: &[String], correct: &[String]) -> bool {
    if given.len() != correct.len() {
        return false;
    }
    let mut given = given.to_vec();
    let mut correct = correct.to_vec();
    given.sort_unstable();
    correct.sort_unstable();
    given == correct
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
