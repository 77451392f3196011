// src/model/summary.rs
//! Listing-view projections of full documents.
//!
//! Summaries are what the List Engine consumes: title, excerpt, image,
//! categories. They are immutable within one listing session — the
//! collection is fetched once per page view and never mutated.

use crate::types::DocumentSlug;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A category reference carried by a summary record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    pub slug: DocumentSlug,
}

/// Hero/main image projection: resolved URL plus alt text.
#[allow(dead_code)] // Fields read by library consumers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ImageRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Blog post summary, newest-first as delivered by the content lake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    pub slug: DocumentSlug,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_image: Option<ImageRef>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

/// External links attached to a project.
#[allow(dead_code)] // Fields read by library consumers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
}

/// Featured project summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub slug: DocumentSlug,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_image: Option<ImageRef>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// What the List Engine needs from a summary record.
///
/// Posts and projects both flow through the same search/filter/paginate
/// pipeline; this trait is the seam between them.
pub trait ListRecord {
    /// Display title — the primary search field.
    fn title(&self) -> &str;

    /// Secondary search text (excerpt or short description).
    fn search_text(&self) -> Option<&str>;

    /// Categories this record belongs to.
    fn categories(&self) -> &[Category];
}

impl ListRecord for PostSummary {
    fn title(&self) -> &str {
        &self.title
    }

    fn search_text(&self) -> Option<&str> {
        self.excerpt.as_deref()
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }
}

impl ListRecord for ProjectSummary {
    fn title(&self) -> &str {
        &self.title
    }

    fn search_text(&self) -> Option<&str> {
        self.short_description.as_deref()
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }
}
