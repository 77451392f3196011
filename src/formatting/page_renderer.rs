// src/formatting/page_renderer.rs
//! Block rendering engine — converts normalized content blocks to
//! markdown.
//!
//! Rendering consumes the normalizer's output: heading anchors are
//! already attached, and unknown blocks have already been flagged.
//! One bad block renders as nothing rather than poisoning the page.

use super::span_renderer::render_spans;
use crate::constants::CHARS_PER_BLOCK_ESTIMATE;
use crate::error::AppError;
use crate::model::{
    CalloutBlock, CalloutTone, CodeBlock, ContentBlock, HeadingBlock, ImageBlock, MathBlock,
    TableBlock, VideoEmbedBlock,
};
use std::fmt::Write;

/// Renders a normalized block sequence into markdown.
pub fn render_blocks(blocks: &[ContentBlock]) -> Result<String, AppError> {
    let estimated_capacity = blocks.len() * CHARS_PER_BLOCK_ESTIMATE;
    let mut output = String::with_capacity(estimated_capacity);

    log::debug!("Rendering {} blocks", blocks.len());

    for block in blocks {
        match block {
            ContentBlock::Paragraph(p) => {
                let text = render_spans(&p.spans);
                if !text.is_empty() {
                    writeln!(output, "{}\n", text)?;
                }
            }
            ContentBlock::Heading(h) => render_heading(&mut output, h)?,
            ContentBlock::Blockquote(q) => {
                writeln!(output, "> {}\n", render_spans(&q.spans))?;
            }
            ContentBlock::Image(img) => render_image(&mut output, img)?,
            ContentBlock::Code(code) => render_code(&mut output, code)?,
            ContentBlock::Callout(callout) => render_callout(&mut output, callout)?,
            ContentBlock::VideoEmbed(video) => render_video(&mut output, video)?,
            ContentBlock::Table(table) => render_table(&mut output, table)?,
            ContentBlock::Math(math) => render_math(&mut output, math)?,
            ContentBlock::MathInline(math) => {
                writeln!(output, "${}$\n", math.formula)?;
            }
            ContentBlock::Unknown(u) => {
                log::debug!("Skipping unknown block '{}' during render", u.block_type);
            }
        }
    }

    Ok(output)
}

fn render_heading(output: &mut String, heading: &HeadingBlock) -> Result<(), AppError> {
    let hashes = "#".repeat(heading.level.get() as usize);
    let text = render_spans(&heading.spans);

    // Pandoc-style attribute keeps the anchor id addressable in
    // markdown output.
    match &heading.anchor_id {
        Some(anchor) => writeln!(output, "{} {} {{#{}}}\n", hashes, text, anchor)?,
        None => writeln!(output, "{} {}\n", hashes, text)?,
    }
    Ok(())
}

fn render_image(output: &mut String, image: &ImageBlock) -> Result<(), AppError> {
    let alt = image.alt.as_deref().unwrap_or("Image");
    writeln!(output, "![{}]({})", alt, image.asset_ref)?;
    if let Some(caption) = &image.caption {
        writeln!(output, "*{}*", caption)?;
    }
    writeln!(output)?;
    Ok(())
}

fn render_code(output: &mut String, code: &CodeBlock) -> Result<(), AppError> {
    if let Some(filename) = &code.filename {
        writeln!(output, "`{}`", filename)?;
    }
    writeln!(output, "```{}", code.language)?;
    writeln!(output, "{}", code.source)?;
    writeln!(output, "```\n")?;
    Ok(())
}

fn render_callout(output: &mut String, callout: &CalloutBlock) -> Result<(), AppError> {
    let (icon, label) = match callout.tone {
        CalloutTone::Info => ("ℹ️", "Info"),
        CalloutTone::Warning => ("⚠️", "Warning"),
        CalloutTone::Success => ("✅", "Success"),
        CalloutTone::Error => ("🚫", "Error"),
    };
    writeln!(output, "> {} **{}:** {}\n", icon, label, callout.body)?;
    Ok(())
}

fn render_video(output: &mut String, video: &VideoEmbedBlock) -> Result<(), AppError> {
    let label = video.caption.as_deref().unwrap_or("Video");
    writeln!(output, "[▶ {}]({})\n", label, video.url.as_str())?;
    Ok(())
}

fn render_table(output: &mut String, table: &TableBlock) -> Result<(), AppError> {
    let Some((header, body)) = table.rows.split_first() else {
        return Ok(());
    };

    writeln!(output, "| {} |", render_cells(&header.cells))?;
    writeln!(
        output,
        "|{}|",
        header.cells.iter().map(|_| "----").collect::<Vec<_>>().join("|")
    )?;
    for row in body {
        writeln!(output, "| {} |", render_cells(&row.cells))?;
    }
    writeln!(output)?;
    Ok(())
}

fn render_cells(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| cell.replace('|', "\\|"))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn render_math(output: &mut String, math: &MathBlock) -> Result<(), AppError> {
    writeln!(output, "$$\n{}\n$$", math.formula.trim())?;
    if let Some(caption) = &math.caption {
        writeln!(output, "*{}*", caption)?;
    }
    writeln!(output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::blocks::*;
    use crate::types::{BlockKey, InlineSpan, ValidatedUrl};
    use pretty_assertions::assert_eq;

    fn key() -> BlockKey {
        BlockKey::new("k")
    }

    #[test]
    fn anchored_heading_carries_its_id() {
        let blocks = vec![ContentBlock::Heading(HeadingBlock {
            key: key(),
            level: HeadingLevel::new(2).unwrap(),
            spans: vec![InlineSpan::plain("Deep Dive")],
            anchor_id: Some("deep-dive".to_string()),
        })];
        let output = render_blocks(&blocks).unwrap();
        assert_eq!(output, "## Deep Dive {#deep-dive}\n\n");
    }

    #[test]
    fn level_four_heading_renders_without_anchor() {
        let blocks = vec![ContentBlock::Heading(HeadingBlock {
            key: key(),
            level: HeadingLevel::new(4).unwrap(),
            spans: vec![InlineSpan::plain("Aside")],
            anchor_id: None,
        })];
        assert_eq!(render_blocks(&blocks).unwrap(), "#### Aside\n\n");
    }

    #[test]
    fn code_block_fences_with_language_and_filename() {
        let blocks = vec![ContentBlock::Code(CodeBlock {
            key: key(),
            language: "rust".to_string(),
            filename: Some("main.rs".to_string()),
            source: "fn main() {}".to_string(),
        })];
        let output = render_blocks(&blocks).unwrap();
        assert_eq!(output, "`main.rs`\n```rust\nfn main() {}\n```\n\n");
    }

    #[test]
    fn callout_tone_drives_the_label() {
        let blocks = vec![ContentBlock::Callout(CalloutBlock {
            key: key(),
            tone: CalloutTone::Warning,
            body: "mind the gap".to_string(),
        })];
        let output = render_blocks(&blocks).unwrap();
        assert_eq!(output, "> ⚠️ **Warning:** mind the gap\n\n");
    }

    #[test]
    fn table_renders_header_separator_and_body() {
        let blocks = vec![ContentBlock::Table(TableBlock {
            key: key(),
            rows: vec![
                TableRow {
                    key: "r0".to_string(),
                    cells: vec!["Name".to_string(), "Value".to_string()],
                },
                TableRow {
                    key: "r1".to_string(),
                    cells: vec!["pipe".to_string(), "a|b".to_string()],
                },
            ],
        })];
        let output = render_blocks(&blocks).unwrap();
        assert_eq!(
            output,
            "| Name | Value |\n|----|----|\n| pipe | a\\|b |\n\n"
        );
    }

    #[test]
    fn empty_table_renders_nothing() {
        let blocks = vec![ContentBlock::Table(TableBlock {
            key: key(),
            rows: Vec::new(),
        })];
        assert_eq!(render_blocks(&blocks).unwrap(), "");
    }

    #[test]
    fn unknown_blocks_render_nothing() {
        let blocks = vec![ContentBlock::Unknown(UnknownBlock {
            key: key(),
            block_type: "carousel".to_string(),
        })];
        assert_eq!(render_blocks(&blocks).unwrap(), "");
    }

    #[test]
    fn math_block_uses_display_fences() {
        let blocks = vec![ContentBlock::Math(MathBlock {
            key: key(),
            formula: "E = mc^2".to_string(),
            caption: None,
        })];
        assert_eq!(render_blocks(&blocks).unwrap(), "$$\nE = mc^2\n$$\n\n");
    }

    #[test]
    fn video_prefers_caption_as_label() {
        let blocks = vec![ContentBlock::VideoEmbed(VideoEmbedBlock {
            key: key(),
            url: ValidatedUrl::parse("https://youtu.be/xyz").unwrap(),
            caption: Some("Demo run".to_string()),
        })];
        assert_eq!(
            render_blocks(&blocks).unwrap(),
            "[▶ Demo run](https://youtu.be/xyz)\n\n"
        );
    }

    #[test]
    fn empty_paragraph_renders_nothing() {
        let blocks = vec![ContentBlock::Paragraph(ParagraphBlock {
            key: key(),
            spans: Vec::new(),
        })];
        assert_eq!(render_blocks(&blocks).unwrap(), "");
    }
}
