use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::warn;
use trivia_core::{Category, CategoryId, RawQuestion};

use super::wire::{CategoriesResponse, QuestionsResponse};
use super::{QuestionQuery, QuestionSource};
use crate::config::QuestionKind;
use crate::error::SourceError;

const SAMPLE_BANK: &str = include_str!("sample_bank.json");

/// Failure a `StaticQuestionSource` reports instead of serving data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulatedFailure {
    /// Behave like a host that cannot be reached.
    Unreachable,
    /// Behave like Open Trivia DB answering with the given non-zero response code.
    NoResults(u8),
}

impl SimulatedFailure {
    fn to_error(self) -> SourceError {
        match self {
            SimulatedFailure::Unreachable => {
                SourceError::Unavailable("simulated outage".to_string())
            }
            SimulatedFailure::NoResults(code) => SourceError::NoResults { code },
        }
    }
}

/// In-memory question source with fixed categories and questions.
///
/// Serves at most `query.amount` questions of the requested kind per request,
/// in insertion order. Every handled query is recorded so callers can assert on
/// what was asked.
#[derive(Clone, Debug, Default)]
pub struct StaticQuestionSource {
    categories: Arc<Mutex<Vec<Category>>>,
    questions: Arc<Mutex<HashMap<CategoryId, Vec<(QuestionKind, RawQuestion)>>>>,
    failure: Arc<Mutex<Option<SimulatedFailure>>>,
    requests: Arc<Mutex<Vec<QuestionQuery>>>,
}

impl StaticQuestionSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Source preloaded with the bundled offline sample bank.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Decode` if the bundled bank cannot be parsed.
    pub fn sample() -> Result<Self, SourceError> {
        Self::from_bank(SAMPLE_BANK)
    }

    /// Source built from a bank in the wire format: a `trivia_categories` list
    /// next to a question response whose records name their category.
    ///
    /// Records naming an unlisted category are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Decode` if `body` is not a valid bank.
    pub fn from_bank(body: &str) -> Result<Self, SourceError> {
        let categories = serde_json::from_str::<CategoriesResponse>(body)?.into_categories();
        let records = serde_json::from_str::<QuestionsResponse>(body)?.into_records()?;

        let by_name: HashMap<&str, CategoryId> = categories
            .iter()
            .map(|category| (category.name(), category.id()))
            .collect();
        let mut grouped: HashMap<CategoryId, Vec<(QuestionKind, RawQuestion)>> = HashMap::new();
        for record in records {
            let Some(id) = record.category().and_then(|name| by_name.get(name)).copied() else {
                warn!(
                    category = record.category().unwrap_or("<none>"),
                    "skipping bank record with unlisted category"
                );
                continue;
            };
            grouped
                .entry(id)
                .or_default()
                .push((record.kind(), record.into_raw()));
        }

        let source = Self::new();
        for category in categories {
            let questions = grouped.remove(&category.id()).unwrap_or_default();
            source.store(category, questions)?;
        }
        Ok(source)
    }

    /// Add (or replace) a category together with its multiple-choice questions.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if an internal lock is poisoned.
    pub fn insert_category(
        &self,
        category: Category,
        questions: Vec<RawQuestion>,
    ) -> Result<(), SourceError> {
        self.insert_category_of_kind(category, QuestionKind::Multiple, questions)
    }

    /// Add (or replace) a category whose questions are all of `kind`.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if an internal lock is poisoned.
    pub fn insert_category_of_kind(
        &self,
        category: Category,
        kind: QuestionKind,
        questions: Vec<RawQuestion>,
    ) -> Result<(), SourceError> {
        let questions = questions.into_iter().map(|question| (kind, question)).collect();
        self.store(category, questions)
    }

    fn store(
        &self,
        category: Category,
        questions: Vec<(QuestionKind, RawQuestion)>,
    ) -> Result<(), SourceError> {
        let id = category.id();
        {
            let mut guard = lock(&self.categories)?;
            guard.retain(|existing| existing.id() != id);
            guard.push(category);
        }
        lock(&self.questions)?.insert(id, questions);
        Ok(())
    }

    /// Make every subsequent call fail, or clear the failure with `None`.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if an internal lock is poisoned.
    pub fn set_failure(&self, failure: Option<SimulatedFailure>) -> Result<(), SourceError> {
        *lock(&self.failure)? = failure;
        Ok(())
    }

    /// Question requests handled so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if an internal lock is poisoned.
    pub fn requests(&self) -> Result<Vec<QuestionQuery>, SourceError> {
        Ok(lock(&self.requests)?.clone())
    }

    fn check_failure(&self) -> Result<(), SourceError> {
        match *lock(&self.failure)? {
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<std::sync::MutexGuard<'_, T>, SourceError> {
    mutex
        .lock()
        .map_err(|e| SourceError::Unavailable(e.to_string()))
}

#[async_trait]
impl QuestionSource for StaticQuestionSource {
    async fn list_categories(&self) -> Result<Vec<Category>, SourceError> {
        self.check_failure()?;
        Ok(lock(&self.categories)?.clone())
    }

    async fn fetch_questions(&self, query: QuestionQuery) -> Result<Vec<RawQuestion>, SourceError> {
        lock(&self.requests)?.push(query);
        self.check_failure()?;

        let guard = lock(&self.questions)?;
        let served: Vec<RawQuestion> = guard
            .get(&query.category)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .filter(|(kind, _)| *kind == query.kind)
            .take(usize::from(query.amount))
            .map(|(_, question)| question.clone())
            .collect();
        if served.is_empty() {
            // Mirrors Open Trivia DB's "no results" answer.
            return Err(SourceError::NoResults { code: 1 });
        }
        Ok(served)
    }
}
