use std::fmt;

use crate::error::{LoadFailure, SessionError};
use crate::model::{CategoryId, PreparedQuestion};

use super::progress::{AnswerOutcome, FinalScore, LoadResolution, QuestionProgress};
use super::ticket::{AnswerTicket, Generation, LoadTicket};

//
// ─── STATES & OPERATIONS ───────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizState {
    /// No questions loaded; waiting for a category.
    Start,
    /// Questions loaded and at least one is still unanswered.
    InProgress,
    /// Every question has been answered.
    Complete,
}

impl fmt::Display for QuizState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QuizState::Start => "at the start screen",
            QuizState::InProgress => "in progress",
            QuizState::Complete => "complete",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    StartQuiz,
    SubmitAnswer,
    GoBack,
    PlayAgain,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::StartQuiz => "start quiz",
            Operation::SubmitAnswer => "submit answer",
            Operation::GoBack => "go back",
            Operation::PlayAgain => "play again",
        };
        f.write_str(label)
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One quiz attempt: loaded questions, position, score and lifecycle state.
///
/// The session is synchronous. Fetching questions happens outside; the caller
/// asks for a `LoadTicket` with [`Session::begin_start`], performs the fetch, and
/// hands the result back through [`Session::finish_start`]. Any reset bumps the
/// generation so results belonging to an abandoned run are dropped.
pub struct Session {
    state: QuizState,
    questions: Vec<PreparedQuestion>,
    current: usize,
    score: usize,
    generation: Generation,
    pending: Option<LoadTicket>,
    last_error: Option<LoadFailure>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: QuizState::Start,
            questions: Vec::new(),
            current: 0,
            score: 0,
            generation: Generation::default(),
            pending: None,
            last_error: None,
        }
    }

    /// Begin loading a quiz for `category`.
    ///
    /// Calling this again while a load is pending replaces that load; the older
    /// ticket will be discarded when it comes back.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` unless the session is at `Start`.
    pub fn begin_start(&mut self, category: CategoryId) -> Result<LoadTicket, SessionError> {
        self.require(Operation::StartQuiz, QuizState::Start)?;

        self.generation = self.generation.next();
        let ticket = LoadTicket::new(self.generation, category);
        self.pending = Some(ticket);
        self.last_error = None;
        Ok(ticket)
    }

    /// Apply the result of the load identified by `ticket`.
    ///
    /// A ticket that is no longer the pending one resolves to
    /// `LoadResolution::Discarded` and leaves the session untouched.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Load` when the fetch failed or produced no questions.
    /// The session stays at `Start` with the failure recorded in `last_error`.
    pub fn finish_start(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<PreparedQuestion>, LoadFailure>,
    ) -> Result<LoadResolution, SessionError> {
        if self.pending != Some(ticket) {
            return Ok(LoadResolution::Discarded);
        }
        self.pending = None;

        let questions = match result {
            Ok(questions) if !questions.is_empty() => questions,
            Ok(_) => return Err(self.fail_load(LoadFailure::NoQuestionsAvailable)),
            Err(failure) => return Err(self.fail_load(failure)),
        };

        let total = questions.len();
        self.questions = questions;
        self.current = 0;
        self.score = 0;
        self.state = QuizState::InProgress;
        Ok(LoadResolution::Started { total })
    }

    /// Ticket for answering the current question, if one is open.
    #[must_use]
    pub fn answer_ticket(&self) -> Option<AnswerTicket> {
        (self.state == QuizState::InProgress)
            .then(|| AnswerTicket::new(self.generation, self.current))
    }

    /// Submit `answer` for the question named by `ticket`.
    ///
    /// Each ticket is accepted at most once: after a successful submission the
    /// session has moved on and the same ticket no longer matches.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` outside `InProgress`.
    /// Returns `SessionError::StaleAnswer` when the ticket names another question
    /// or an earlier run.
    pub fn submit_answer(
        &mut self,
        ticket: AnswerTicket,
        answer: &str,
    ) -> Result<AnswerOutcome, SessionError> {
        self.require(Operation::SubmitAnswer, QuizState::InProgress)?;

        let expected = AnswerTicket::new(self.generation, self.current);
        if ticket != expected {
            return Err(SessionError::StaleAnswer {
                expected,
                submitted: ticket,
            });
        }

        let question = self
            .questions
            .get(self.current)
            .ok_or(SessionError::InvalidTransition {
                operation: Operation::SubmitAnswer,
                state: self.state,
            })?;

        let correct = question.is_correct(answer);
        let correct_answer = question.correct_answer().to_string();
        if correct {
            self.score += 1;
        }

        self.current += 1;
        if self.current >= self.questions.len() {
            self.state = QuizState::Complete;
        }

        Ok(AnswerOutcome {
            correct,
            correct_answer,
            score: self.score,
            is_complete: self.is_complete(),
        })
    }

    /// Abandon the running quiz, or cancel a pending load, and return to `Start`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` when there is nothing to leave.
    pub fn go_back(&mut self) -> Result<(), SessionError> {
        match self.state {
            QuizState::InProgress => {}
            QuizState::Start if self.pending.is_some() => {}
            state => {
                return Err(SessionError::InvalidTransition {
                    operation: Operation::GoBack,
                    state,
                });
            }
        }
        self.reset();
        Ok(())
    }

    /// Leave the end screen for a blank session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` unless the quiz is complete.
    pub fn play_again(&mut self) -> Result<(), SessionError> {
        self.require(Operation::PlayAgain, QuizState::Complete)?;
        self.reset();
        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        self.state
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// True while a question load is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn pending_load(&self) -> Option<LoadTicket> {
        self.pending
    }

    /// Failure of the most recent load, cleared by the next start or reset.
    #[must_use]
    pub fn last_error(&self) -> Option<LoadFailure> {
        self.last_error
    }

    #[must_use]
    pub fn questions(&self) -> &[PreparedQuestion] {
        &self.questions
    }

    /// Zero-based index of the next question to answer.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&PreparedQuestion> {
        if self.state == QuizState::InProgress {
            self.questions.get(self.current)
        } else {
            None
        }
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == QuizState::Complete
    }

    /// "Question n of N" data while the quiz runs.
    #[must_use]
    pub fn progress(&self) -> Option<QuestionProgress> {
        (self.state == QuizState::InProgress).then(|| QuestionProgress {
            number: self.current + 1,
            total: self.questions.len(),
        })
    }

    #[must_use]
    pub fn final_score(&self) -> Option<FinalScore> {
        self.is_complete().then(|| FinalScore {
            score: self.score,
            total: self.questions.len(),
        })
    }

    fn require(&self, operation: Operation, state: QuizState) -> Result<(), SessionError> {
        if self.state == state {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                operation,
                state: self.state,
            })
        }
    }

    fn fail_load(&mut self, failure: LoadFailure) -> SessionError {
        self.last_error = Some(failure);
        SessionError::Load(failure)
    }

    fn reset(&mut self) {
        self.generation = self.generation.next();
        self.state = QuizState::Start;
        self.questions.clear();
        self.current = 0;
        self.score = 0;
        self.pending = None;
        self.last_error = None;
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("generation", &self.generation)
            .field("pending", &self.pending)
            .field("last_error", &self.last_error)
            .finish()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
