use rand::rng;
use rand::seq::SliceRandom;

use quiz_core::model::{Question, QuizSet};

/// Resolved question order for one attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct AttemptPlan {
    questions: Vec<Question>,
}

impl AttemptPlan {
    /// Questions in traversal order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Total number of questions in this plan.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Returns true when the plan holds no questions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub(crate) fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}

/// Resolves the traversal order for one attempt over a quiz set.
pub struct AttemptBuilder<'a> {
    quiz: &'a QuizSet,
    shuffle: bool,
}

impl<'a> AttemptBuilder<'a> {
    #[must_use]
    pub fn new(quiz: &'a QuizSet) -> Self {
        Self {
            quiz,
            shuffle: false,
        }
    }

    /// Enable or disable shuffling of the question order.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Build a plan over the quiz's questions.
    ///
    /// Shuffling only changes what the taker sees in which order; scoring
    /// always runs against the quiz's own order.
    #[must_use]
    pub fn build(self) -> AttemptPlan {
        let mut questions: Vec<Question> = self.quiz.questions().to_vec();
        if self.shuffle {
            let mut rng = rng();
            questions.as_mut_slice().shuffle(&mut rng);
        }
        AttemptPlan { questions }
    }
}
