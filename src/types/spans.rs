// src/types/spans.rs
//! Inline span model for portable-text blocks.
//!
//! A text-bearing block carries an ordered sequence of spans. Each span
//! has plain text plus the decorator marks the author applied in the
//! studio. Link annotations are resolved from the block's mark
//! definitions at parse time, so downstream consumers never see raw
//! mark keys.

use super::ValidatedUrl;
use serde::{Deserialize, Serialize};

/// Decorator marks applied to a span, as declared in the studio schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SpanMarks {
    #[serde(default)]
    pub strong: bool,
    #[serde(default)]
    pub em: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub code: bool,
    #[serde(default)]
    pub highlight: bool,
}

impl SpanMarks {
    /// Whether any decorator is set.
    pub fn any(&self) -> bool {
        self.strong || self.em || self.underline || self.code || self.highlight
    }
}

/// One inline span: a run of text with uniform styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InlineSpan {
    /// Authoring-time span key. Identity fallback only.
    #[serde(default)]
    pub key: String,
    pub text: String,
    #[serde(default)]
    pub marks: SpanMarks,
    /// Resolved link annotation, if the span carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<ValidatedUrl>,
}

impl InlineSpan {
    /// A bare span with no marks, for construction in tests and fixtures.
    #[allow(dead_code)] // Used by library consumers and tests
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// Concatenates span texts with no separator.
///
/// This is the text a heading contributes to its anchor slug and to the
/// table of contents. The absence of a separator matches how the site
/// has always derived anchors; changing it would move every anchor id.
pub fn concat_span_text(spans: &[InlineSpan]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}

/// Concatenates span texts with a single space between spans.
///
/// This is the text the reading-time estimator tokenizes. The separator
/// differs from [`concat_span_text`] on purpose: word counting must not
/// fuse the last word of one span with the first word of the next.
pub fn join_span_text(spans: &[InlineSpan]) -> String {
    spans
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
