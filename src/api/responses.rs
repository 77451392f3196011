// src/api/responses.rs
//! Wire types for the content-lake query endpoint.
//!
//! The query endpoint wraps every result in a `{query, result, ms}`
//! envelope and reports failures as an `{error: {...}}` body. Raw
//! summary records deserialize here and convert into the domain model
//! via [`ToDomain`]; records missing their identity fields are dropped
//! with a warning instead of failing the whole collection.

use crate::model::{Category, ImageRef, PostSummary, ProjectLinks, ProjectSummary};
use crate::types::DocumentSlug;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// Successful query envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryEnvelope {
    #[serde(default)]
    pub result: Option<Value>,
    /// Server-side execution time; logged, never acted on.
    #[serde(default)]
    pub ms: Option<u64>,
}

/// Error body returned by the query endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ContentLakeError,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentLakeError {
    pub description: String,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
}

/// Trait for converting wire types to domain types.
pub trait ToDomain<T> {
    fn to_domain(self) -> Option<T>;
}

// --- Raw wire shapes (mirror the GROQ projections in queries.rs) ---

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawAsset {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawImage {
    #[serde(default)]
    pub asset: Option<RawAsset>,
    #[serde(default)]
    pub alt: Option<String>,
}

impl RawImage {
    fn into_image_ref(self) -> ImageRef {
        ImageRef {
            url: self.asset.and_then(|a| a.url),
            alt: self.alt,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCategory {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

impl ToDomain<Category> for RawCategory {
    fn to_domain(self) -> Option<Category> {
        Some(Category {
            title: self.title?,
            slug: DocumentSlug::from_trusted(self.slug?),
        })
    }
}

/// Category record for the listing sidebar (title-sorted upstream).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSidebarCategory {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Sidebar category converted to the domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarCategory {
    pub title: String,
    pub slug: DocumentSlug,
    pub description: Option<String>,
}

impl ToDomain<SidebarCategory> for RawSidebarCategory {
    fn to_domain(self) -> Option<SidebarCategory> {
        Some(SidebarCategory {
            title: self.title?,
            slug: DocumentSlug::from_trusted(self.slug?),
            description: self.description,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPostSummary {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub main_image: Option<RawImage>,
    #[serde(default)]
    pub categories: Option<Vec<RawCategory>>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl ToDomain<PostSummary> for RawPostSummary {
    fn to_domain(self) -> Option<PostSummary> {
        Some(PostSummary {
            title: self.title?,
            slug: DocumentSlug::from_trusted(self.slug?),
            excerpt: self.excerpt,
            main_image: self.main_image.map(RawImage::into_image_ref),
            categories: convert_categories(self.categories),
            published_at: self.published_at,
        })
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawLinks {
    #[serde(default)]
    pub live: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProjectSummary {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub main_image: Option<RawImage>,
    #[serde(default)]
    pub technologies: Option<Vec<String>>,
    #[serde(default)]
    pub links: Option<RawLinks>,
    #[serde(default)]
    pub categories: Option<Vec<RawCategory>>,
}

impl ToDomain<ProjectSummary> for RawProjectSummary {
    fn to_domain(self) -> Option<ProjectSummary> {
        let links = self.links.unwrap_or_default();
        Some(ProjectSummary {
            title: self.title?,
            slug: DocumentSlug::from_trusted(self.slug?),
            short_description: self.short_description,
            main_image: self.main_image.map(RawImage::into_image_ref),
            technologies: self.technologies.unwrap_or_default(),
            links: ProjectLinks {
                live: links.live,
                github: links.github,
                demo: links.demo,
            },
            categories: convert_categories(self.categories),
        })
    }
}

fn convert_categories(raw: Option<Vec<RawCategory>>) -> Vec<Category> {
    raw.unwrap_or_default()
        .into_iter()
        .filter_map(ToDomain::to_domain)
        .collect()
}

/// Converts a collection of raw records, dropping the ones missing
/// identity fields and logging how many were dropped.
pub fn convert_collection<R, T>(raw: Vec<R>, kind: &str) -> Vec<T>
where
    R: ToDomain<T>,
{
    let total = raw.len();
    let converted: Vec<T> = raw.into_iter().filter_map(ToDomain::to_domain).collect();

    let dropped = total - converted.len();
    if dropped > 0 {
        log::warn!("Dropped {} of {} {} records missing title or slug", dropped, total, kind);
    }

    converted
}
