// src/types/ids.rs
//! Identifier newtypes for content-lake documents and blocks.

use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Authoring-time block key (`_key` in the content lake).
///
/// Opaque to the pipeline: it identifies a block across edits for
/// reconciliation purposes but is never used as an in-page anchor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct BlockKey(String);

impl BlockKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[allow(dead_code)] // Used by library consumers
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// URL path segment identifying a document (post or project).
///
/// The content lake stores slugs as `{ "current": "..." }`; parsing
/// flattens that to the inner string. Validated to the URL-safe
/// alphabet the studio's slugifier emits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DocumentSlug(String);

impl DocumentSlug {
    /// Validates and wraps a slug string.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let slug = input.trim();

        if slug.is_empty() {
            return Err(ValidationError::InvalidSlug {
                slug: input.to_string(),
                reason: "slug cannot be empty".to_string(),
            });
        }

        if !slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(ValidationError::InvalidSlug {
                slug: input.to_string(),
                reason: "slug may only contain lowercase letters, digits, and hyphens"
                    .to_string(),
            });
        }

        Ok(Self(slug.to_string()))
    }

    /// Wraps an already-validated slug (internal use by the parser).
    pub(crate) fn from_trusted(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for DocumentSlug {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_trusted(value))
    }
}
