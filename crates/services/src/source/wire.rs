//! Open Trivia DB response shapes.
//!
//! The static source reads its bundled sample bank through the same types, so the
//! sample file doubles as a fixture of the real wire format.

use serde::Deserialize;
use trivia_core::{Category, RawQuestion};

use crate::config::QuestionKind;
use crate::error::SourceError;

/// `response_code` value for a successful question request.
pub(crate) const RESPONSE_OK: u8 = 0;

#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesResponse {
    trivia_categories: Vec<Category>,
}

impl CategoriesResponse {
    pub(crate) fn into_categories(self) -> Vec<Category> {
        self.trivia_categories
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuestionsResponse {
    response_code: u8,
    #[serde(default)]
    results: Vec<QuestionRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuestionRecord {
    #[serde(flatten)]
    question: RawQuestion,
    #[serde(rename = "type", default)]
    kind: QuestionKind,
    // Category display name; the sample bank is grouped by it.
    #[serde(default)]
    category: Option<String>,
}

impl QuestionRecord {
    pub(crate) fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub(crate) fn kind(&self) -> QuestionKind {
        self.kind
    }

    pub(crate) fn into_raw(self) -> RawQuestion {
        self.question
    }
}

impl QuestionsResponse {
    /// Unwrap the result list, treating any non-zero response code as "no results".
    pub(crate) fn into_records(self) -> Result<Vec<QuestionRecord>, SourceError> {
        if self.response_code != RESPONSE_OK {
            return Err(SourceError::NoResults {
                code: self.response_code,
            });
        }
        Ok(self.results)
    }

    pub(crate) fn into_questions(self) -> Result<Vec<RawQuestion>, SourceError> {
        Ok(self
            .into_records()?
            .into_iter()
            .map(QuestionRecord::into_raw)
            .collect())
    }
}
