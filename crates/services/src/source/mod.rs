//! Question sources: the trait the quiz loop consumes plus its implementations.

mod opentdb;
mod wire;
mod static_source;

use async_trait::async_trait;
use trivia_core::{Category, CategoryId, RawQuestion};

use crate::config::QuestionKind;
use crate::error::SourceError;

pub use opentdb::OpenTdbClient;
pub use static_source::{SimulatedFailure, StaticQuestionSource};

/// Parameters of a single question request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct QuestionQuery {
    pub category: CategoryId,
    pub amount: u8,
    pub kind: QuestionKind,
}

/// Request/response source of categories and questions.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>, SourceError>;

    /// Fetch up to `query.amount` questions. May return fewer, or none.
    async fn fetch_questions(&self, query: QuestionQuery) -> Result<Vec<RawQuestion>, SourceError>;
}
