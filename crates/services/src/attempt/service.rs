use std::fmt;

use chrono::{DateTime, Utc};
use log::{debug, info};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use quiz_core::Clock;
use quiz_core::model::{AnswerInput, Question, QuizMode, QuizSet};
use quiz_core::score::ScoreSummary;
use quiz_core::session::Session;

use super::config::AttemptConfig;
use super::countdown::{Countdown, CountdownEvent};
use super::plan::AttemptBuilder;
use super::progress::AttemptProgress;
use super::view::{QuestionPaletteItem, palette_for};
use crate::error::AttemptError;

//
// ─── TIME EXPIRY ───────────────────────────────────────────────────────────────
//

/// What handling a countdown expiry did to the attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeExpiry {
    /// Moved on to the next question.
    Advanced,
    /// The timed-out question was the last one; the attempt is submitted.
    Submitted,
    /// The expiry came from a countdown that has since been replaced; the
    /// attempt is unchanged.
    Ignored,
}

//
// ─── ATTEMPT ───────────────────────────────────────────────────────────────────
//

/// One live run through a quiz: the active quiz set, its mode and options,
/// the session value, and the score once submitted.
///
/// This is the single holder of attempt state; the embedding shell creates
/// one per run and passes it down instead of keeping globals. Intent methods
/// replace the held [`Session`] with the value the engine transition returns,
/// so the engine itself stays purely functional.
pub struct AttemptService {
    clock: Clock,
    quiz: QuizSet,
    mode: QuizMode,
    config: AttemptConfig,
    questions: Vec<Question>,
    session: Session,
    summary: Option<ScoreSummary>,
    countdown: Option<Countdown>,
    generation: u64,
    events: Option<UnboundedSender<CountdownEvent>>,
    pending_events: Option<UnboundedReceiver<CountdownEvent>>,
}

impl AttemptService {
    /// Start an attempt over the given quiz.
    ///
    /// Shuffling is resolved here, once; a traversal order picked at start
    /// stays fixed for the whole run. In timed modes this must be called from
    /// within a tokio runtime, because the per-question countdown spawns a
    /// task straight away.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError::Session` if the session cannot start. A
    /// validated [`QuizSet`] always carries at least one question, so this
    /// does not fire for quizzes built through the usual path.
    pub fn begin(
        clock: Clock,
        quiz: QuizSet,
        mode: QuizMode,
        config: AttemptConfig,
    ) -> Result<Self, AttemptError> {
        let plan = AttemptBuilder::new(&quiz)
            .with_shuffle(config.shuffle_questions())
            .build();
        let session = Session::begin(plan.questions(), mode, clock.now())?;

        let (events, pending_events) = if mode.is_timed() {
            let (tx, rx) = mpsc::unbounded_channel();
            (Some(tx), Some(rx))
        } else {
            (None, None)
        };

        let mut attempt = Self {
            clock,
            quiz,
            mode,
            config,
            questions: plan.into_questions(),
            session,
            summary: None,
            countdown: None,
            generation: 0,
            events,
            pending_events,
        };
        attempt.rearm_countdown();

        info!(
            "attempt started: mode={mode}, questions={}",
            attempt.session.total_questions()
        );
        Ok(attempt)
    }

    /// Record a selection for the question currently shown.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError::AlreadySubmitted` once the attempt has been
    /// submitted.
    pub fn answer_current(&mut self, input: impl Into<AnswerInput>) -> Result<(), AttemptError> {
        if self.summary.is_some() {
            return Err(AttemptError::AlreadySubmitted);
        }
        let id = self.session.current_question_id().clone();
        self.session = self.session.record_answer(&id, input);
        Ok(())
    }

    /// Flag or unflag the current question for review.
    ///
    /// Ignored after submission.
    pub fn toggle_review_current(&mut self) {
        if self.summary.is_some() {
            return;
        }
        let id = self.session.current_question_id().clone();
        self.session = self.session.toggle_review(&id);
    }

    /// Move to the next question. At the last question, and after
    /// submission, this does nothing.
    pub fn advance(&mut self) {
        if self.summary.is_some() {
            return;
        }
        let before = self.session.current_index();
        self.session = self.session.advance();
        if self.session.current_index() != before {
            self.rearm_countdown();
        }
    }

    /// Move to the previous question. At the first question, in modes that
    /// lock backward navigation, and after submission, this does nothing.
    pub fn retreat(&mut self) {
        if self.summary.is_some() {
            return;
        }
        if !self.session.allows_back_navigation() {
            debug!("retreat ignored: {} locks back navigation", self.mode);
            return;
        }
        let before = self.session.current_index();
        self.session = self.session.retreat();
        if self.session.current_index() != before {
            self.rearm_countdown();
        }
    }

    /// Jump straight to a question by its traversal index. Out-of-range
    /// indices, and any jump after submission, do nothing.
    pub fn jump_to(&mut self, index: usize) {
        if self.summary.is_some() {
            return;
        }
        let before = self.session.current_index();
        self.session = self.session.jump_to(index);
        if self.session.current_index() != before {
            self.rearm_countdown();
        }
    }

    /// Submit the attempt: score it against the quiz's own question order,
    /// close the session, and stop any running countdown.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError::AlreadySubmitted` on a second call; the first
    /// summary stays in place.
    pub fn submit(&mut self) -> Result<&ScoreSummary, AttemptError> {
        if self.summary.is_some() {
            return Err(AttemptError::AlreadySubmitted);
        }

        let now = self.clock.now();
        let summary = self.session.score(self.quiz.questions(), now);
        self.session = self.session.complete(now);
        self.countdown = None;

        info!(
            "attempt submitted: score={}, correct={}/{}",
            summary.score(),
            summary.correct(),
            summary.total_questions()
        );
        Ok(self.summary.insert(summary))
    }

    /// Start the same quiz over: fresh session, fresh traversal order, no
    /// summary. With shuffling enabled the order is drawn again.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError::Session` if the fresh session cannot start,
    /// which the quiz set's own validation normally rules out.
    pub fn retry(&mut self) -> Result<(), AttemptError> {
        let plan = AttemptBuilder::new(&self.quiz)
            .with_shuffle(self.config.shuffle_questions())
            .build();
        let session = Session::begin(plan.questions(), self.mode, self.clock.now())?;

        self.questions = plan.into_questions();
        self.session = session;
        self.summary = None;
        self.rearm_countdown();

        info!("attempt restarted: mode={}", self.mode);
        Ok(())
    }

    /// React to a countdown expiry: move past the timed-out question, or
    /// submit when it was the last one.
    ///
    /// The countdown only reports expiry on its event channel; the event
    /// consumer calls this with the generation the event carried. Replacing
    /// a countdown cannot recall events it already queued, so an expiry
    /// overtaken by navigation or a retry no longer matches the current
    /// generation and comes back as [`TimeExpiry::Ignored`].
    ///
    /// # Errors
    ///
    /// Returns `AttemptError::AlreadySubmitted` once the attempt has been
    /// submitted.
    pub fn time_expired(&mut self, generation: u64) -> Result<TimeExpiry, AttemptError> {
        if self.summary.is_some() {
            return Err(AttemptError::AlreadySubmitted);
        }
        if generation != self.generation {
            debug!("expiry of countdown generation {generation} ignored: superseded");
            return Ok(TimeExpiry::Ignored);
        }

        if self.session.can_advance() {
            self.session = self.session.advance();
            self.rearm_countdown();
            debug!(
                "countdown expired: advanced to question {}",
                self.session.current_index()
            );
            Ok(TimeExpiry::Advanced)
        } else {
            self.submit()?;
            debug!("countdown expired at the last question: submitted");
            Ok(TimeExpiry::Submitted)
        }
    }

    /// Receiver for countdown events. Present in timed modes, `None`
    /// otherwise, and taken at most once.
    pub fn take_countdown_events(&mut self) -> Option<UnboundedReceiver<CountdownEvent>> {
        self.pending_events.take()
    }

    // Replaces whatever countdown is running with a fresh one for the
    // current question. Each arming takes the next generation, so events
    // queued by the replaced countdown no longer match. No-op for untimed
    // modes and submitted attempts.
    fn rearm_countdown(&mut self) {
        self.countdown = None;
        if self.summary.is_some() {
            return;
        }
        let Some(events) = self.events.clone() else {
            return;
        };
        self.generation += 1;
        self.countdown = Some(Countdown::start(
            self.generation,
            self.config.question_time_limit(),
            events,
        ));
        debug!(
            "countdown generation {} armed for question {}",
            self.generation,
            self.session.current_index()
        );
    }

    // Accessors

    /// Current time according to the attempt's clock, for display surfaces.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    #[must_use]
    pub fn quiz(&self) -> &QuizSet {
        &self.quiz
    }

    #[must_use]
    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    #[must_use]
    pub fn config(&self) -> AttemptConfig {
        self.config
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The question at the current traversal position.
    ///
    /// The session keeps its index within bounds, so this is total.
    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.session.current_index()]
    }

    /// Questions in the traversal order of this run.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn summary(&self) -> Option<&ScoreSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.summary.is_some()
    }

    /// Returns a snapshot of the attempt's progress.
    #[must_use]
    pub fn progress(&self) -> AttemptProgress {
        AttemptProgress::from_session(&self.session)
    }

    /// Palette entries for every question, in traversal order.
    #[must_use]
    pub fn palette(&self) -> Vec<QuestionPaletteItem> {
        palette_for(&self.session)
    }

    #[must_use]
    pub fn has_active_countdown(&self) -> bool {
        self.countdown.as_ref().is_some_and(|c| !c.is_finished())
    }

    /// Generation of the most recently armed countdown. Events stamped
    /// with an older generation are stale. Zero until a countdown has been
    /// armed, so always zero in untimed modes.
    #[must_use]
    pub fn countdown_generation(&self) -> u64 {
        self.generation
    }
}

impl fmt::Debug for AttemptService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttemptService")
            .field("mode", &self.mode)
            .field("questions_len", &self.questions.len())
            .field("current_index", &self.session.current_index())
            .field("submitted", &self.summary.is_some())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
