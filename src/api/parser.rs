// src/api/parser.rs
//! Converts content-lake JSON into the domain model.
//!
//! Portable-text payloads are dynamically shaped, so block parsing
//! works over `serde_json::Value` with an explicit fallback: a block
//! with an unexpected variant tag or a missing required field becomes
//! `ContentBlock::Unknown` (skipped downstream, logged here) instead of
//! failing the document. Flat summary records deserialize through the
//! wire types in `responses.rs`.

use super::responses::{
    convert_collection, QueryEnvelope, RawImage, RawPostSummary, RawProjectSummary,
    RawSidebarCategory, SidebarCategory,
};
use crate::error::AppError;
use crate::model::{
    blocks::*, Article, ContentBlock, PostSummary, ProjectSummary,
};
use crate::types::{BlockKey, DocumentSlug, InlineSpan, SpanMarks, ValidatedUrl};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// Parses the `result` out of a successful query envelope body.
pub fn parse_query_envelope(body: &str, url: &str) -> Result<Value, AppError> {
    let envelope: QueryEnvelope = serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse envelope from {}: {}", url, e);
        AppError::MalformedResponse(format!("query envelope: {}", e))
    })?;

    if let Some(ms) = envelope.ms {
        log::debug!("Content lake answered in {}ms", ms);
    }

    Ok(envelope.result.unwrap_or(Value::Null))
}

// --- Summary collections ---

/// A null/absent collection is empty, never an error.
pub fn parse_post_summaries(result: Value) -> Result<Vec<PostSummary>, AppError> {
    if result.is_null() {
        return Ok(Vec::new());
    }
    let raw: Vec<RawPostSummary> = serde_json::from_value(result)?;
    Ok(convert_collection(raw, "post"))
}

pub fn parse_project_summaries(result: Value) -> Result<Vec<ProjectSummary>, AppError> {
    if result.is_null() {
        return Ok(Vec::new());
    }
    let raw: Vec<RawProjectSummary> = serde_json::from_value(result)?;
    Ok(convert_collection(raw, "project"))
}

pub fn parse_sidebar_categories(result: Value) -> Result<Vec<SidebarCategory>, AppError> {
    if result.is_null() {
        return Ok(Vec::new());
    }
    let raw: Vec<RawSidebarCategory> = serde_json::from_value(result)?;
    Ok(convert_collection(raw, "category"))
}

// --- Full documents ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArticle {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    excerpt: Option<String>,
    #[serde(default)]
    main_image: Option<RawImage>,
    #[serde(default)]
    body: Option<Value>,
}

/// Parses a single-document query result.
///
/// Returns `Ok(None)` when the document does not exist (`null` result)
/// so the caller can report a distinguishable not-found failure.
pub fn parse_article(result: Value) -> Result<Option<Article>, AppError> {
    if result.is_null() {
        return Ok(None);
    }

    let raw: RawArticle = serde_json::from_value(result)?;
    let slug = raw
        .slug
        .ok_or_else(|| AppError::MalformedResponse("document missing slug".to_string()))?;

    let body = raw.body.map(|b| parse_blocks(&b)).unwrap_or_default();

    Ok(Some(Article {
        slug: DocumentSlug::from_trusted(slug),
        title: raw.title.unwrap_or_default(),
        published_at: raw.published_at,
        excerpt: raw.excerpt,
        main_image: raw.main_image.map(|img| crate::model::ImageRef {
            url: img.asset.and_then(|a| a.url),
            alt: img.alt,
        }),
        body,
    }))
}

// --- Portable-text blocks ---

/// Parses an ordered block array. A non-array value parses as empty.
pub fn parse_blocks(value: &Value) -> Vec<ContentBlock> {
    match value.as_array() {
        Some(items) => items.iter().map(parse_block).collect(),
        None => {
            if !value.is_null() {
                log::warn!("Document body is not an array; treating as empty");
            }
            Vec::new()
        }
    }
}

/// Parses one block. Never fails: anything unrecognized or missing a
/// required field degrades to `ContentBlock::Unknown`.
pub fn parse_block(value: &Value) -> ContentBlock {
    let key = BlockKey::new(str_field(value, "_key").unwrap_or_default());
    let block_type = match str_field(value, "_type") {
        Some(t) => t,
        None => {
            log::debug!("Block without _type; keeping as unknown");
            return unknown(key, "missing");
        }
    };

    match block_type {
        "block" => parse_text_block(value, key),
        "image" => parse_image_block(value, key),
        "codeBlock" => parse_code_block(value, key),
        "callout" => ContentBlock::Callout(CalloutBlock {
            key,
            tone: CalloutTone::parse_or_default(str_field(value, "tone").unwrap_or("info")),
            body: str_field(value, "body").unwrap_or_default().to_string(),
        }),
        "videoEmbed" => parse_video_block(value, key),
        "table" => ContentBlock::Table(TableBlock {
            key,
            rows: parse_table_rows(value.get("rows")),
        }),
        "latex" => match str_field(value, "formula") {
            Some(formula) => ContentBlock::Math(MathBlock {
                key,
                formula: formula.to_string(),
                caption: str_field(value, "caption").map(str::to_string),
            }),
            None => degraded(key, block_type, "missing formula"),
        },
        "latexInline" => match str_field(value, "formula") {
            Some(formula) => ContentBlock::MathInline(MathInlineBlock {
                key,
                formula: formula.to_string(),
            }),
            None => degraded(key, block_type, "missing formula"),
        },
        other => {
            log::debug!("Unrecognized block type '{}'; keeping as unknown", other);
            unknown(key, other)
        }
    }
}

/// Text blocks: the `style` field selects paragraph, heading, or quote.
fn parse_text_block(value: &Value, key: BlockKey) -> ContentBlock {
    let spans = parse_spans(value.get("children"), value.get("markDefs"));

    match str_field(value, "style").unwrap_or("normal") {
        "h1" | "h2" | "h3" | "h4" => {
            let style = str_field(value, "style").unwrap_or("h1");
            // The digit is guaranteed by the match arm.
            let level = style[1..].parse::<u8>().ok().and_then(|n| HeadingLevel::new(n).ok());
            match level {
                Some(level) => ContentBlock::Heading(HeadingBlock {
                    key,
                    level,
                    spans,
                    anchor_id: None,
                }),
                None => degraded(key, "block", "bad heading style"),
            }
        }
        "blockquote" => ContentBlock::Blockquote(BlockquoteBlock { key, spans }),
        _ => ContentBlock::Paragraph(ParagraphBlock { key, spans }),
    }
}

fn parse_image_block(value: &Value, key: BlockKey) -> ContentBlock {
    match value.get("asset").and_then(|a| a.get("_ref")).and_then(Value::as_str) {
        Some(asset_ref) => ContentBlock::Image(ImageBlock {
            key,
            asset_ref: asset_ref.to_string(),
            alt: str_field(value, "alt").map(str::to_string),
            caption: str_field(value, "caption").map(str::to_string),
        }),
        None => degraded(key, "image", "missing asset reference"),
    }
}

fn parse_code_block(value: &Value, key: BlockKey) -> ContentBlock {
    match str_field(value, "code") {
        Some(source) => ContentBlock::Code(CodeBlock {
            key,
            // The studio defaults new code blocks to javascript; mirror
            // that for payloads authored before the language picker.
            language: str_field(value, "language").unwrap_or("javascript").to_string(),
            filename: str_field(value, "filename").map(str::to_string),
            source: source.to_string(),
        }),
        None => degraded(key, "codeBlock", "missing code"),
    }
}

fn parse_video_block(value: &Value, key: BlockKey) -> ContentBlock {
    let parsed = str_field(value, "url").and_then(|u| ValidatedUrl::parse(u).ok());
    match parsed {
        Some(url) => ContentBlock::VideoEmbed(VideoEmbedBlock {
            key,
            url,
            caption: str_field(value, "caption").map(str::to_string),
        }),
        None => degraded(key, "videoEmbed", "missing or invalid url"),
    }
}

fn parse_table_rows(rows: Option<&Value>) -> Vec<TableRow> {
    rows.and_then(Value::as_array)
        .map(|rows| {
            rows.iter()
                .map(|row| TableRow {
                    key: str_field(row, "_key").unwrap_or_default().to_string(),
                    cells: row
                        .get("cells")
                        .and_then(Value::as_array)
                        .map(|cells| {
                            cells
                                .iter()
                                .map(|c| c.as_str().unwrap_or_default().to_string())
                                .collect()
                        })
                        .unwrap_or_default(),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Parses span children, resolving link annotations from the block's
/// mark definitions. Non-span children are skipped.
fn parse_spans(children: Option<&Value>, mark_defs: Option<&Value>) -> Vec<InlineSpan> {
    let Some(children) = children.and_then(Value::as_array) else {
        return Vec::new();
    };

    children
        .iter()
        .filter(|child| str_field(child, "_type") == Some("span"))
        .map(|child| {
            let mut marks = SpanMarks::default();
            let mut link = None;

            if let Some(applied) = child.get("marks").and_then(Value::as_array) {
                for mark in applied.iter().filter_map(Value::as_str) {
                    match mark {
                        "strong" => marks.strong = true,
                        "em" => marks.em = true,
                        "underline" => marks.underline = true,
                        "code" => marks.code = true,
                        "highlight" => marks.highlight = true,
                        annotation_key => {
                            if link.is_none() {
                                link = resolve_link(mark_defs, annotation_key);
                            }
                        }
                    }
                }
            }

            InlineSpan {
                key: str_field(child, "_key").unwrap_or_default().to_string(),
                text: str_field(child, "text").unwrap_or_default().to_string(),
                marks,
                link,
            }
        })
        .collect()
}

/// Looks up a link annotation by its mark-definition key.
fn resolve_link(mark_defs: Option<&Value>, annotation_key: &str) -> Option<ValidatedUrl> {
    let defs = mark_defs?.as_array()?;
    let def = defs
        .iter()
        .find(|d| str_field(d, "_key") == Some(annotation_key))?;

    if str_field(def, "_type") != Some("link") {
        return None;
    }

    str_field(def, "href").and_then(|href| ValidatedUrl::parse(href).ok())
}

fn str_field<'a>(value: &'a Value, field: &str) -> Option<&'a str> {
    value.get(field).and_then(Value::as_str)
}

fn unknown(key: BlockKey, block_type: &str) -> ContentBlock {
    ContentBlock::Unknown(UnknownBlock {
        key,
        block_type: block_type.to_string(),
    })
}

fn degraded(key: BlockKey, block_type: &str, reason: &str) -> ContentBlock {
    log::warn!("Skipping malformed {} block: {}", block_type, reason);
    unknown(key, block_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn heading_styles_parse_to_levels() {
        let block = parse_block(&json!({
            "_type": "block",
            "_key": "h1",
            "style": "h2",
            "children": [{"_type": "span", "text": "Title"}]
        }));
        let heading = block.as_heading().unwrap();
        assert_eq!(heading.level.get(), 2);
        assert_eq!(heading.spans[0].text, "Title");
        assert_eq!(heading.anchor_id, None);
    }

    #[test]
    fn normal_style_and_missing_style_parse_to_paragraph() {
        for block in [
            parse_block(&json!({"_type": "block", "style": "normal", "children": []})),
            parse_block(&json!({"_type": "block", "children": []})),
        ] {
            assert_eq!(block.block_type(), "paragraph");
        }
    }

    #[test]
    fn decorator_marks_and_links_resolve() {
        let block = parse_block(&json!({
            "_type": "block",
            "style": "normal",
            "markDefs": [{"_key": "m1", "_type": "link", "href": "https://example.com/docs"}],
            "children": [
                {"_type": "span", "text": "bold", "marks": ["strong"]},
                {"_type": "span", "text": "linked", "marks": ["m1", "em"]}
            ]
        }));

        let spans = block.inline_spans().unwrap();
        assert!(spans[0].marks.strong);
        assert!(spans[0].link.is_none());
        assert!(spans[1].marks.em);
        assert_eq!(
            spans[1].link.as_ref().map(|u| u.as_str()),
            Some("https://example.com/docs")
        );
    }

    #[test]
    fn unknown_block_type_fails_closed() {
        let block = parse_block(&json!({"_type": "threeDCarousel", "_key": "x"}));
        match block {
            ContentBlock::Unknown(u) => assert_eq!(u.block_type, "threeDCarousel"),
            other => panic!("expected unknown, got {:?}", other),
        }
    }

    #[test]
    fn image_without_asset_ref_degrades_to_unknown() {
        let block = parse_block(&json!({"_type": "image", "_key": "img", "alt": "a chart"}));
        assert_eq!(block.block_type(), "unknown");

        let ok = parse_block(&json!({
            "_type": "image",
            "asset": {"_ref": "image-abc-1200x700-png"},
            "caption": "A chart"
        }));
        assert_eq!(ok.block_type(), "image");
    }

    #[test]
    fn code_block_defaults_language() {
        let block = parse_block(&json!({
            "_type": "codeBlock",
            "code": "fn main() {}",
            "filename": "main.rs"
        }));
        match block {
            ContentBlock::Code(code) => {
                assert_eq!(code.language, "javascript");
                assert_eq!(code.filename.as_deref(), Some("main.rs"));
            }
            other => panic!("expected code, got {:?}", other),
        }
    }

    #[test]
    fn table_rows_parse_with_missing_cells() {
        let block = parse_block(&json!({
            "_type": "table",
            "rows": [
                {"_key": "r0", "cells": ["Name", "Value"]},
                {"_key": "r1"}
            ]
        }));
        match block {
            ContentBlock::Table(table) => {
                assert_eq!(table.rows[0].cells, vec!["Name", "Value"]);
                assert!(table.rows[1].cells.is_empty());
            }
            other => panic!("expected table, got {:?}", other),
        }
    }

    #[test]
    fn article_null_result_is_none() {
        assert!(parse_article(Value::Null).unwrap().is_none());
    }

    #[test]
    fn article_parses_body_blocks() {
        let article = parse_article(json!({
            "title": "Hello",
            "slug": "hello",
            "body": [
                {"_type": "block", "style": "h1", "children": [{"_type": "span", "text": "Top"}]},
                {"_type": "mysteryWidget"}
            ]
        }))
        .unwrap()
        .unwrap();

        assert_eq!(article.title, "Hello");
        assert_eq!(article.body.len(), 2);
        assert_eq!(article.body[0].block_type(), "heading");
        assert_eq!(article.body[1].block_type(), "unknown");
    }

    #[test]
    fn null_collection_parses_as_empty() {
        assert!(parse_post_summaries(Value::Null).unwrap().is_empty());
        assert!(parse_project_summaries(Value::Null).unwrap().is_empty());
    }

    #[test]
    fn summary_records_missing_identity_are_dropped() {
        let result = json!([
            {"title": "Kept", "slug": "kept", "categories": [{"title": "X", "slug": "x"}]},
            {"title": "No slug at all"}
        ]);
        let posts = parse_post_summaries(result).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug.as_str(), "kept");
        assert_eq!(posts[0].categories[0].title, "X");
    }
}
