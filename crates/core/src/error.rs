use thiserror::Error;

use crate::session::{AnswerTicket, Operation, QuizState};

/// Coarse classification shared by every layer that reports quiz failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Network or parse failure while talking to the question source.
    SourceUnreachable,
    /// The source answered but had no usable questions for the request.
    NoQuestionsAvailable,
    /// An operation was invoked in a state that does not permit it.
    InvalidTransition,
}

/// Why a question load did not produce a playable quiz.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadFailure {
    #[error("no questions available for this category")]
    NoQuestionsAvailable,
    #[error("question source unreachable")]
    SourceUnreachable,
}

impl LoadFailure {
    #[must_use]
    pub fn kind(self) -> ErrorKind {
        match self {
            LoadFailure::NoQuestionsAvailable => ErrorKind::NoQuestionsAvailable,
            LoadFailure::SourceUnreachable => ErrorKind::SourceUnreachable,
        }
    }
}

/// Errors emitted by the quiz session state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("{operation} is not allowed while the quiz is {state}")]
    InvalidTransition {
        operation: Operation,
        state: QuizState,
    },

    #[error("answer for {submitted} rejected; the session expects {expected}")]
    StaleAnswer {
        expected: AnswerTicket,
        submitted: AnswerTicket,
    },

    #[error(transparent)]
    Load(#[from] LoadFailure),
}

impl SessionError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::InvalidTransition { .. } | SessionError::StaleAnswer { .. } => {
                ErrorKind::InvalidTransition
            }
            SessionError::Load(failure) => failure.kind(),
        }
    }
}
