use crate::types::{BlockKey, InlineSpan, ValidatedUrl, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Heading depth, 1 through 4, as authored in the studio (`h1`..`h4`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub fn new(level: u8) -> Result<Self, ValidationError> {
        if (1..=4).contains(&level) {
            Ok(Self(level))
        } else {
            Err(ValidationError::InvalidHeadingLevel(level))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "h{}", self.0)
    }
}

/// Paragraph block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ParagraphBlock {
    pub key: BlockKey,
    pub spans: Vec<InlineSpan>,
}

/// Heading block, levels 1-4.
///
/// `anchor_id` is absent as authored; the normalizer computes it for
/// levels 1-3. Level-4 headings never receive one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingBlock {
    pub key: BlockKey,
    pub level: HeadingLevel,
    pub spans: Vec<InlineSpan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_id: Option<String>,
}

/// Block quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BlockquoteBlock {
    pub key: BlockKey,
    pub spans: Vec<InlineSpan>,
}

/// Image block with its content-lake asset reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ImageBlock {
    pub key: BlockKey,
    /// Opaque asset reference (e.g. `image-abc123-1200x700-png`).
    /// Resolving it to a URL is the image service's concern.
    pub asset_ref: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Code sample block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CodeBlock {
    pub key: BlockKey,
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub source: String,
}

/// Callout tone, as declared in the studio schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CalloutTone {
    #[default]
    Info,
    Warning,
    Success,
    Error,
}

impl CalloutTone {
    /// Parse a tone string; unrecognized tones fall back to `Info`,
    /// matching how the site renders them.
    pub fn parse_or_default(tone: &str) -> Self {
        match tone {
            "warning" => Self::Warning,
            "success" => Self::Success,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    #[allow(dead_code)] // Used by library consumers
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Callout box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CalloutBlock {
    pub key: BlockKey,
    pub tone: CalloutTone,
    pub body: String,
}

/// Embedded video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoEmbedBlock {
    pub key: BlockKey,
    pub url: ValidatedUrl,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// One table row of plain-text cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TableRow {
    #[serde(default)]
    pub key: String,
    pub cells: Vec<String>,
}

/// Table block. The first row is rendered as the header row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TableBlock {
    pub key: BlockKey,
    pub rows: Vec<TableRow>,
}

/// Display-mode LaTeX formula
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MathBlock {
    pub key: BlockKey,
    pub formula: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Inline LaTeX formula
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MathInlineBlock {
    pub key: BlockKey,
    pub formula: String,
}

/// Fallback for block types this pipeline doesn't recognize.
///
/// New studio block types land here (skipped, logged) instead of
/// failing the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UnknownBlock {
    pub key: BlockKey,
    pub block_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_level_bounds() {
        assert!(HeadingLevel::new(0).is_err());
        assert!(HeadingLevel::new(5).is_err());
        assert_eq!(HeadingLevel::new(3).unwrap().get(), 3);
        assert_eq!(HeadingLevel::new(1).unwrap().to_string(), "h1");
    }

    #[test]
    fn callout_tone_falls_back_to_info() {
        assert_eq!(CalloutTone::parse_or_default("warning"), CalloutTone::Warning);
        assert_eq!(CalloutTone::parse_or_default("shouting"), CalloutTone::Info);
    }
}
