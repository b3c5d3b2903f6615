use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, warn};
use trivia_core::{Category, RawQuestion};
use url::Url;

use super::wire::{CategoriesResponse, QuestionsResponse};
use super::{QuestionQuery, QuestionSource};
use crate::config::QuizConfig;
use crate::error::SourceError;

const CATEGORIES_PATH: &str = "api_category.php";
const QUESTIONS_PATH: &str = "api.php";

/// HTTP client for the Open Trivia DB API.
#[derive(Clone, Debug)]
pub struct OpenTdbClient {
    client: Client,
    base_url: Url,
}

impl OpenTdbClient {
    /// Build a client with the configured base URL and request timeout.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Http` if the underlying HTTP client cannot be built.
    pub fn new(config: &QuizConfig) -> Result<Self, SourceError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url().clone(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, SourceError> {
        self.base_url
            .join(path)
            .map_err(|err| SourceError::Unavailable(err.to_string()))
    }

    /// URL of a question request, query string included.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if the endpoint cannot be joined to the base.
    pub fn questions_url(&self, query: QuestionQuery) -> Result<Url, SourceError> {
        let mut url = self.endpoint(QUESTIONS_PATH)?;
        url.query_pairs_mut()
            .append_pair("amount", &query.amount.to_string())
            .append_pair("category", &query.category.to_string())
            .append_pair("type", query.kind.as_query());
        Ok(url)
    }

    async fn get(&self, url: Url) -> Result<Response, SourceError> {
        debug!(%url, "requesting trivia endpoint");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, "trivia endpoint returned an error status");
            return Err(SourceError::HttpStatus(status));
        }
        Ok(response)
    }
}

#[async_trait]
impl QuestionSource for OpenTdbClient {
    async fn list_categories(&self) -> Result<Vec<Category>, SourceError> {
        let url = self.endpoint(CATEGORIES_PATH)?;
        let body: CategoriesResponse = self.get(url).await?.json().await?;
        Ok(body.into_categories())
    }

    async fn fetch_questions(&self, query: QuestionQuery) -> Result<Vec<RawQuestion>, SourceError> {
        let url = self.questions_url(query)?;
        let body: QuestionsResponse = self.get(url).await?.json().await?;
        body.into_questions()
    }
}
