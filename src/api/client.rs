// src/api/client.rs
//! HTTP client for the content-lake query endpoint.
//!
//! A thin wrapper around reqwest: it owns authentication and the
//! envelope/error handling for `GET /v{version}/data/query/{dataset}`,
//! and nothing else. Each page view issues its fetch exactly once —
//! there is no cache, retry loop, or connection pool beyond what
//! reqwest itself provides.

use super::parser::{
    self, parse_article, parse_post_summaries, parse_project_summaries,
    parse_sidebar_categories,
};
use super::queries;
use super::responses::{ErrorEnvelope, SidebarCategory};
use crate::constants::{CONTENT_LAKE_API_VERSION, ERROR_BODY_PREVIEW_LENGTH};
use crate::error::{AppError, ContentLakeErrorCode};
use crate::model::{Article, PostSummary, ProjectSummary};
use crate::types::{ApiToken, Dataset, DocumentSlug, ProjectId};
use serde_json::Value;

/// A thin wrapper around reqwest for content-lake queries.
#[derive(Clone)]
pub struct SanityHttpClient {
    client: reqwest::Client,
    query_url: String,
    token: Option<ApiToken>,
}

impl SanityHttpClient {
    /// Creates a client for one project/dataset pair.
    pub fn new(
        project_id: &ProjectId,
        dataset: &Dataset,
        token: Option<ApiToken>,
    ) -> Result<Self, AppError> {
        let query_url = format!(
            "https://{}.api.sanity.io/v{}/data/query/{}",
            project_id.as_str(),
            CONTENT_LAKE_API_VERSION,
            dataset.as_str()
        );

        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            query_url,
            token,
        })
    }

    /// Runs a GROQ query, returning the envelope's `result` value.
    ///
    /// `params` are GROQ parameters; values must already be
    /// JSON-encoded (`$slug` → `"my-post"` including quotes).
    pub async fn query(&self, groq: &str, params: &[(String, String)]) -> Result<Value, AppError> {
        log::debug!("GET {} ({} params)", self.query_url, params.len());

        let mut request = self.client.get(&self.query_url).query(&[("query", groq)]);
        for (name, value) in params {
            request = request.query(&[(name.as_str(), value.as_str())]);
        }
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.as_str());
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(classify_error_body(status.as_u16(), &body));
        }

        parser::parse_query_envelope(&body, &self.query_url)
    }
}

/// Maps an error response to the typed failure vocabulary, preferring
/// the endpoint's own description when the body parses.
fn classify_error_body(status: u16, body: &str) -> AppError {
    let code = ContentLakeErrorCode::from_http_status(status);

    let message = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => match envelope.error.error_type {
            Some(kind) => format!("{}: {}", kind, envelope.error.description),
            None => envelope.error.description,
        },
        Err(_) => {
            let preview: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
            format!("HTTP {}: {}", status, preview)
        }
    };

    AppError::ContentLakeService { code, message }
}

/// High-level fetch operations, one per page view.
pub struct SanityRepository {
    client: SanityHttpClient,
}

impl SanityRepository {
    pub fn new(client: SanityHttpClient) -> Self {
        Self { client }
    }

    /// Fetches one post with its full body.
    pub async fn fetch_post(&self, slug: &DocumentSlug) -> Result<Article, AppError> {
        self.fetch_document(queries::POST_BY_SLUG, slug).await
    }

    /// Fetches one project as an article (description as the body).
    pub async fn fetch_project(&self, slug: &DocumentSlug) -> Result<Article, AppError> {
        self.fetch_document(queries::PROJECT_BY_SLUG, slug).await
    }

    async fn fetch_document(
        &self,
        groq: &str,
        slug: &DocumentSlug,
    ) -> Result<Article, AppError> {
        let params = vec![("$slug".to_string(), serde_json::to_string(slug.as_str())?)];
        let result = self.client.query(groq, &params).await?;

        parse_article(result)?.ok_or_else(|| AppError::DocumentNotFound {
            slug: slug.as_str().to_string(),
        })
    }

    /// Fetches the post collection, newest first.
    pub async fn fetch_post_summaries(&self) -> Result<Vec<PostSummary>, AppError> {
        let result = self.client.query(queries::POST_SUMMARIES, &[]).await?;
        parse_post_summaries(result)
    }

    /// Fetches the featured-project collection.
    pub async fn fetch_project_summaries(&self) -> Result<Vec<ProjectSummary>, AppError> {
        let result = self.client.query(queries::PROJECT_SUMMARIES, &[]).await?;
        parse_project_summaries(result)
    }

    /// Fetches everything the blog listing view needs in one round:
    /// sidebar categories and post summaries, concurrently.
    pub async fn fetch_listing_bundle(
        &self,
    ) -> Result<(Vec<SidebarCategory>, Vec<PostSummary>), AppError> {
        let categories = async {
            let result = self.client.query(queries::USED_CATEGORIES, &[]).await?;
            parse_sidebar_categories(result)
        };
        let posts = async {
            let result = self.client.query(queries::POST_SUMMARIES, &[]).await?;
            parse_post_summaries(result)
        };

        futures::try_join!(categories, posts)
    }
}
