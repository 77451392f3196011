mod block;
pub mod blocks;
mod summary;

pub use block::ContentBlock;
pub use blocks::*;
pub use summary::{
    Category, ImageRef, ListRecord, PostSummary, ProjectLinks, ProjectSummary,
};

use crate::types::DocumentSlug;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A full article document: a blog post or project detail page body.
///
/// This is what the page pipeline fetches by slug — the body carries
/// the ordered block sequence the normalizer and renderer consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub slug: DocumentSlug,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_image: Option<ImageRef>,
    #[serde(default)]
    pub body: Vec<ContentBlock>,
}

impl Article {
    /// Returns a human-readable display title for this document.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }
}
