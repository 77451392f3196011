use super::blocks::*;
use crate::types::{BlockKey, InlineSpan};
use serde::{Deserialize, Serialize};

/// Macro to reduce boilerplate in ContentBlock enum methods
macro_rules! match_all_blocks {
    ($self:expr, $pattern:pat => $result:expr) => {
        match $self {
            ContentBlock::Paragraph($pattern) => $result,
            ContentBlock::Heading($pattern) => $result,
            ContentBlock::Blockquote($pattern) => $result,
            ContentBlock::Image($pattern) => $result,
            ContentBlock::Code($pattern) => $result,
            ContentBlock::Callout($pattern) => $result,
            ContentBlock::VideoEmbed($pattern) => $result,
            ContentBlock::Table($pattern) => $result,
            ContentBlock::Math($pattern) => $result,
            ContentBlock::MathInline($pattern) => $result,
            ContentBlock::Unknown($pattern) => $result,
        }
    };
}

/// ContentBlock represents one unit of authored rich content.
///
/// The sequence order of blocks is the authoritative document order;
/// every transform in the pipeline preserves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContentBlock {
    Paragraph(ParagraphBlock),
    Heading(HeadingBlock),
    Blockquote(BlockquoteBlock),
    Image(ImageBlock),
    Code(CodeBlock),
    Callout(CalloutBlock),
    VideoEmbed(VideoEmbedBlock),
    Table(TableBlock),
    Math(MathBlock),
    MathInline(MathInlineBlock),
    Unknown(UnknownBlock),
}

impl ContentBlock {
    /// Get the block's authoring-time key
    #[allow(dead_code)] // Used by library consumers
    pub fn key(&self) -> &BlockKey {
        match_all_blocks!(self, b => &b.key)
    }

    /// Get block type name
    #[allow(dead_code)] // Used by library consumers
    pub fn block_type(&self) -> &'static str {
        match self {
            ContentBlock::Paragraph(_) => "paragraph",
            ContentBlock::Heading(_) => "heading",
            ContentBlock::Blockquote(_) => "blockquote",
            ContentBlock::Image(_) => "image",
            ContentBlock::Code(_) => "codeBlock",
            ContentBlock::Callout(_) => "callout",
            ContentBlock::VideoEmbed(_) => "videoEmbed",
            ContentBlock::Table(_) => "table",
            ContentBlock::Math(_) => "latex",
            ContentBlock::MathInline(_) => "latexInline",
            ContentBlock::Unknown(_) => "unknown",
        }
    }

    /// Inline text spans, for the block kinds that carry them.
    ///
    /// Paragraphs, headings, and block quotes contribute to word counts;
    /// every other kind returns `None` and is skipped by the metrics.
    pub fn inline_spans(&self) -> Option<&[InlineSpan]> {
        match self {
            ContentBlock::Paragraph(b) => Some(&b.spans),
            ContentBlock::Heading(b) => Some(&b.spans),
            ContentBlock::Blockquote(b) => Some(&b.spans),
            _ => None,
        }
    }

    /// The heading payload, if this block is a heading.
    pub fn as_heading(&self) -> Option<&HeadingBlock> {
        match self {
            ContentBlock::Heading(b) => Some(b),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InlineSpan;

    #[test]
    fn key_accessor_reaches_every_variant() {
        let block = ContentBlock::Callout(CalloutBlock {
            key: BlockKey::new("k1"),
            tone: CalloutTone::Warning,
            body: "careful".to_string(),
        });
        assert_eq!(block.key().as_str(), "k1");
        assert_eq!(block.block_type(), "callout");
    }

    #[test]
    fn only_text_blocks_expose_spans() {
        let para = ContentBlock::Paragraph(ParagraphBlock {
            key: BlockKey::new("p"),
            spans: vec![InlineSpan::plain("hello")],
        });
        assert!(para.inline_spans().is_some());

        let img = ContentBlock::Image(ImageBlock {
            key: BlockKey::new("i"),
            asset_ref: "image-abc-100x100-png".to_string(),
            alt: None,
            caption: None,
        });
        assert!(img.inline_spans().is_none());
    }
}
