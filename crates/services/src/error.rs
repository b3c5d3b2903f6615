//! Shared error types for the services crate.

use thiserror::Error;

use trivia_core::{ErrorKind, LoadFailure, SessionError};

/// Errors emitted by a `QuestionSource`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("question source has no results for this request (response code {code})")]
    NoResults { code: u8 },
    #[error("question source request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("question source returned an unreadable body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("question source unavailable: {0}")]
    Unavailable(String),
}

impl SourceError {
    /// Collapse the transport detail into the session-level failure.
    #[must_use]
    pub fn failure(&self) -> LoadFailure {
        match self {
            SourceError::NoResults { .. } => LoadFailure::NoQuestionsAvailable,
            SourceError::HttpStatus(_)
            | SourceError::Http(_)
            | SourceError::Decode(_)
            | SourceError::Unavailable(_) => LoadFailure::SourceUnreachable,
        }
    }
}

/// Errors emitted by `QuizLoopService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl QuizError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            QuizError::Source(err) => err.failure().kind(),
            QuizError::Session(err) => err.kind(),
        }
    }
}

/// Errors emitted while reading `QuizConfig`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid API base URL: {raw}")]
    InvalidUrl { raw: String },
    #[error("question amount must be between 1 and 50, got {raw}")]
    InvalidAmount { raw: String },
    #[error("unknown question type: {raw} (expected `multiple` or `boolean`)")]
    InvalidKind { raw: String },
    #[error("request timeout must be a positive number of seconds, got {raw}")]
    InvalidTimeout { raw: String },
}
