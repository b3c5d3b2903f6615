use std::sync::Arc;

use tracing::{info, warn};
use trivia_core::{Category, CategoryId, LoadFailure, LoadResolution, PreparedQuestion, Session};

use super::prepare::prepare_questions;
use crate::config::QuizConfig;
use crate::error::QuizError;
use crate::source::{QuestionQuery, QuestionSource};

/// Connects a `QuestionSource` to the quiz session engine.
///
/// The service owns no session state. Callers hold the `Session` and drive it,
/// so the UI can split a start into `begin_start`, this service's
/// `load_questions`, and `finish_start` across an await point.
#[derive(Clone)]
pub struct QuizLoopService {
    source: Arc<dyn QuestionSource>,
    config: QuizConfig,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>, config: QuizConfig) -> Self {
        Self { source, config }
    }

    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// Categories offered on the start screen.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Source` when the source cannot list categories.
    pub async fn list_categories(&self) -> Result<Vec<Category>, QuizError> {
        let categories = self.source.list_categories().await.map_err(|err| {
            warn!(error = %err, "failed to list categories");
            err
        })?;
        info!(count = categories.len(), "loaded categories");
        Ok(categories)
    }

    /// Fetch and prepare the questions for one quiz run.
    ///
    /// # Errors
    ///
    /// Returns `LoadFailure::NoQuestionsAvailable` when the source has nothing for
    /// the category or every record is unplayable, and
    /// `LoadFailure::SourceUnreachable` for transport or decode failures.
    pub async fn load_questions(
        &self,
        category: CategoryId,
    ) -> Result<Vec<PreparedQuestion>, LoadFailure> {
        let query = QuestionQuery {
            category,
            amount: self.config.amount(),
            kind: self.config.kind(),
        };
        let raw = self.source.fetch_questions(query).await.map_err(|err| {
            warn!(%category, error = %err, "failed to fetch questions");
            err.failure()
        })?;

        let received = raw.len();
        let prepared = prepare_questions(raw, &mut rand::rng());
        if prepared.is_empty() {
            warn!(%category, received, "no playable questions");
            return Err(LoadFailure::NoQuestionsAvailable);
        }
        info!(%category, count = prepared.len(), "prepared questions");
        Ok(prepared)
    }

    /// Start `session` on `category` in one step.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` when the session is not at the start screen or
    /// the load fails. A failed load leaves the session at `Start` with the
    /// failure recorded.
    pub async fn start_quiz(
        &self,
        session: &mut Session,
        category: CategoryId,
    ) -> Result<LoadResolution, QuizError> {
        let ticket = session.begin_start(category)?;
        let result = self.load_questions(category).await;
        Ok(session.finish_start(ticket, result)?)
    }
}

impl std::fmt::Debug for QuizLoopService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizLoopService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
