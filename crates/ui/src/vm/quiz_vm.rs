use trivia_core::{
    AnswerOutcome, AnswerTicket, CategoryId, LoadFailure, LoadResolution, LoadTicket,
    PreparedQuestion, QuizState, Session, SessionError,
};

use super::html::sanitize_html;
use crate::views::ViewError;

/// How an answer button is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerStyle {
    /// No answer chosen yet.
    Idle,
    Correct,
    /// The chosen answer, when it was wrong.
    Incorrect,
    Dimmed,
}

impl AnswerStyle {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            AnswerStyle::Idle => "quiz-answer",
            AnswerStyle::Correct => "quiz-answer quiz-answer--correct",
            AnswerStyle::Incorrect => "quiz-answer quiz-answer--incorrect",
            AnswerStyle::Dimmed => "quiz-answer quiz-answer--dimmed",
        }
    }
}

/// A selection held back until the reveal delay has passed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingAnswer {
    pub ticket: AnswerTicket,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerChoice {
    /// Answer exactly as the source sent it; this is what gets submitted.
    pub answer: String,
    pub html: String,
    pub style: AnswerStyle,
}

/// Quiz session plus the reveal state the engine does not track.
#[derive(Debug, Default)]
pub struct QuizVm {
    session: Session,
    reveal: Option<PendingAnswer>,
}

impl QuizVm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        self.session.state()
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    #[must_use]
    pub fn load_error(&self) -> Option<ViewError> {
        self.session.last_error().map(ViewError::from_load_failure)
    }

    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` unless the quiz is at the start screen.
    pub fn begin_start(&mut self, category: CategoryId) -> Result<LoadTicket, SessionError> {
        self.session.begin_start(category)
    }

    /// # Errors
    ///
    /// Returns `SessionError::Load` when the load failed or produced no questions.
    pub fn finish_start(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<PreparedQuestion>, LoadFailure>,
    ) -> Result<LoadResolution, SessionError> {
        self.session.finish_start(ticket, result)
    }

    /// Lock in `answer` for the open question.
    ///
    /// Returns `None` when no question is open or an answer is already showing.
    pub fn select(&mut self, answer: &str) -> Option<PendingAnswer> {
        if self.reveal.is_some() {
            return None;
        }
        let ticket = self.session.answer_ticket()?;
        let pending = PendingAnswer {
            ticket,
            answer: answer.to_string(),
        };
        self.reveal = Some(pending.clone());
        Some(pending)
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.reveal.is_some()
    }

    /// Submit a selection made earlier through [`QuizVm::select`].
    ///
    /// # Errors
    ///
    /// Returns `SessionError` when the quiz has moved on since the selection.
    pub fn commit(&mut self, pending: &PendingAnswer) -> Result<AnswerOutcome, SessionError> {
        if self
            .reveal
            .as_ref()
            .is_some_and(|shown| shown.ticket == pending.ticket)
        {
            self.reveal = None;
        }
        self.session.submit_answer(pending.ticket, &pending.answer)
    }

    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` when there is nothing to leave.
    pub fn go_back(&mut self) -> Result<(), SessionError> {
        self.session.go_back()?;
        self.reveal = None;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` unless the quiz is complete.
    pub fn play_again(&mut self) -> Result<(), SessionError> {
        self.session.play_again()?;
        self.reveal = None;
        Ok(())
    }

    #[must_use]
    pub fn answer_style(&self, answer: &str) -> AnswerStyle {
        let (Some(shown), Some(question)) = (&self.reveal, self.session.current_question())
        else {
            return AnswerStyle::Idle;
        };
        if question.is_correct(answer) {
            AnswerStyle::Correct
        } else if shown.answer == answer {
            AnswerStyle::Incorrect
        } else {
            AnswerStyle::Dimmed
        }
    }

    #[must_use]
    pub fn question_html(&self) -> Option<String> {
        self.session
            .current_question()
            .map(|question| sanitize_html(question.text()))
    }

    #[must_use]
    pub fn answer_choices(&self) -> Vec<AnswerChoice> {
        self.session
            .current_question()
            .map(|question| {
                question
                    .answers()
                    .iter()
                    .map(|answer| AnswerChoice {
                        answer: answer.clone(),
                        html: sanitize_html(answer),
                        style: self.answer_style(answer),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn progress_label(&self) -> Option<String> {
        self.session
            .progress()
            .map(|progress| format!("Question {} of {}", progress.number, progress.total))
    }

    #[must_use]
    pub fn score_label(&self) -> Option<String> {
        self.session
            .final_score()
            .map(|score| format!("You scored {} out of {}!", score.score, score.total))
    }
}
