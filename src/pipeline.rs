// src/pipeline.rs
//! Pipeline capability traits — abstract the three stages of the
//! content-to-page pipeline.
//!
//! Each trait describes a single capability, enabling testing each
//! stage in isolation.

use crate::error::AppError;
use crate::formatting::RenderedPage;
use crate::model::Article;
use crate::output::OutputReport;
use crate::types::DocumentSlug;

/// Retrieves a full document from the content source by slug.
#[async_trait::async_trait]
pub trait ContentSource {
    async fn fetch(&self, slug: &DocumentSlug) -> Result<Article, AppError>;
}

/// Transforms an Article into a RenderedPage.
pub trait PageComposer {
    fn compose(&self, article: &Article) -> Result<RenderedPage, AppError>;
}

/// Delivers a rendered page to its destinations.
pub trait ArtifactDelivery {
    fn deliver(&self, page: RenderedPage) -> Result<OutputReport, AppError>;
}
