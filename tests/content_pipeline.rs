// tests/content_pipeline.rs
//! End-to-end tests for the content pipeline: parse → normalize →
//! metrics → render, over fixture JSON shaped like real content-lake
//! payloads.

use pretty_assertions::assert_eq;
use sanity2page::{
    estimate_reading_minutes, extract_outline, heading_anchor, normalize, parse_article,
    parse_blocks, render_blocks,
};
use serde_json::json;

fn fixture_body() -> serde_json::Value {
    json!([
        {
            "_type": "block",
            "_key": "b1",
            "style": "h1",
            "children": [{"_type": "span", "_key": "s1", "text": "Why Rust?"}]
        },
        {
            "_type": "block",
            "_key": "b2",
            "style": "normal",
            "children": [
                {"_type": "span", "_key": "s2", "text": "Memory safety ", "marks": []},
                {"_type": "span", "_key": "s3", "text": "without", "marks": ["em"]},
                {"_type": "span", "_key": "s4", "text": " garbage collection.", "marks": []}
            ]
        },
        {
            "_type": "block",
            "_key": "b3",
            "style": "h2",
            "children": [{"_type": "span", "_key": "s5", "text": "The Borrow Checker"}]
        },
        {
            "_type": "codeBlock",
            "_key": "b4",
            "language": "rust",
            "filename": "ownership.rs",
            "code": "let a = String::new();\nlet b = a;"
        },
        {
            "_type": "block",
            "_key": "b5",
            "style": "h4",
            "children": [{"_type": "span", "_key": "s6", "text": "A Footnote Heading"}]
        },
        {
            "_type": "spinningCube",
            "_key": "b6"
        }
    ])
}

#[test]
fn pipeline_preserves_document_order() {
    let blocks = normalize(parse_blocks(&fixture_body()));
    let types: Vec<_> = blocks.iter().map(|b| b.block_type()).collect();
    assert_eq!(
        types,
        vec!["heading", "paragraph", "heading", "codeBlock", "heading", "unknown"]
    );
}

#[test]
fn outline_and_anchors_agree_end_to_end() {
    let blocks = normalize(parse_blocks(&fixture_body()));
    let outline = extract_outline(&blocks);

    // h4 and the unknown block are excluded; order is document order.
    let entries: Vec<_> = outline
        .iter()
        .map(|a| (a.level.get(), a.text.as_str(), a.id.as_str()))
        .collect();
    assert_eq!(
        entries,
        vec![(1, "Why Rust?", "why-rust-"), (2, "The Borrow Checker", "the-borrow-checker")]
    );

    // Every outline id equals the anchor the normalizer attached.
    let anchored: Vec<_> = blocks
        .iter()
        .filter_map(|b| b.as_heading())
        .filter_map(|h| h.anchor_id.as_deref())
        .collect();
    assert_eq!(
        anchored,
        outline.iter().map(|a| a.id.as_str()).collect::<Vec<_>>()
    );
}

#[test]
fn slug_is_pure_and_anchor_safe() {
    for text in ["Why Rust?", "", "Üñïçödé Everywhere", "double  spaces"] {
        let first = heading_anchor(text);
        let second = heading_anchor(text);
        assert_eq!(first, second);
        assert!(first
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }
}

#[test]
fn reading_time_counts_only_text_blocks() {
    let blocks = normalize(parse_blocks(&fixture_body()));
    // 13 words across headings and the paragraph; code and unknown
    // blocks contribute nothing. Well under a minute, so the floor
    // applies.
    assert_eq!(estimate_reading_minutes(&blocks), 1);
}

#[test]
fn rendered_page_carries_anchors_and_skips_unknown() {
    let blocks = normalize(parse_blocks(&fixture_body()));
    let markdown = render_blocks(&blocks).unwrap();

    assert!(markdown.contains("# Why Rust? {#why-rust-}"));
    assert!(markdown.contains("## The Borrow Checker {#the-borrow-checker}"));
    assert!(markdown.contains("#### A Footnote Heading\n"));
    assert!(!markdown.contains("A Footnote Heading {#"));
    assert!(markdown.contains("```rust"));
    assert!(markdown.contains("*without*"));
    assert!(!markdown.contains("spinningCube"));
}

#[test]
fn missing_document_body_is_empty_not_fatal() {
    let article = parse_article(json!({
        "title": "Bodyless",
        "slug": "bodyless"
    }))
    .unwrap()
    .unwrap();

    assert!(article.body.is_empty());
    assert_eq!(estimate_reading_minutes(&article.body), 1);
    assert!(extract_outline(&article.body).is_empty());
    assert_eq!(render_blocks(&article.body).unwrap(), "");
}

#[test]
fn four_hundred_word_fixture_reads_in_two_minutes() {
    let words = vec!["word"; 400].join(" ");
    let body = json!([
        {
            "_type": "block",
            "_key": "long",
            "style": "normal",
            "children": [{"_type": "span", "text": words}]
        }
    ]);
    let blocks = normalize(parse_blocks(&body));
    assert_eq!(estimate_reading_minutes(&blocks), 2);
}
