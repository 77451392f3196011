// tests/parsing_fallbacks.rs
//! Fallback behavior for malformed and partial content-lake payloads:
//! nothing in the parser may take the whole page down.

use pretty_assertions::assert_eq;
use sanity2page::{
    parse_article, parse_block, parse_blocks, parse_post_summaries, parse_query_envelope,
    parse_sidebar_categories, ContentBlock,
};
use serde_json::json;

#[test]
fn envelope_with_result_parses() {
    let body = r#"{"query": "*[_type == \"post\"]", "result": [{"title": "A"}], "ms": 12}"#;
    let result = parse_query_envelope(body, "test://query").unwrap();
    assert!(result.is_array());
}

#[test]
fn envelope_without_result_is_null() {
    let result = parse_query_envelope(r#"{"ms": 3}"#, "test://query").unwrap();
    assert!(result.is_null());
}

#[test]
fn garbage_envelope_is_a_malformed_response_error() {
    let error = parse_query_envelope("<html>gateway timeout</html>", "test://query");
    assert!(error.is_err());
}

#[test]
fn every_malformed_block_degrades_to_unknown() {
    let cases = vec![
        json!({"_key": "no-type"}),
        json!({"_type": "image", "_key": "no-asset"}),
        json!({"_type": "codeBlock", "_key": "no-code", "language": "rust"}),
        json!({"_type": "videoEmbed", "_key": "bad-url", "url": "not a url"}),
        json!({"_type": "latex", "_key": "no-formula", "caption": "lonely caption"}),
        json!({"_type": "latexInline", "_key": "no-formula-2"}),
        json!({"_type": "futureWidget", "_key": "from-tomorrow"}),
    ];

    for case in &cases {
        let block = parse_block(case);
        assert!(
            matches!(block, ContentBlock::Unknown(_)),
            "expected unknown for {}",
            case
        );
    }
}

#[test]
fn one_bad_block_never_blanks_the_document() {
    let body = json!([
        {"_type": "block", "_key": "ok", "style": "normal",
         "children": [{"_type": "span", "text": "still here"}]},
        {"_type": "image", "_key": "broken"},
        {"_type": "block", "_key": "ok2", "style": "h2",
         "children": [{"_type": "span", "text": "And here"}]}
    ]);

    let blocks = parse_blocks(&body);
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[0].block_type(), "paragraph");
    assert_eq!(blocks[1].block_type(), "unknown");
    assert_eq!(blocks[2].block_type(), "heading");
}

#[test]
fn non_span_children_are_skipped() {
    let block = parse_block(&json!({
        "_type": "block",
        "style": "normal",
        "children": [
            {"_type": "span", "text": "kept"},
            {"_type": "inlineWidget", "payload": 42},
            {"_type": "span", "text": "also kept"}
        ]
    }));

    let spans = block.inline_spans().unwrap();
    let texts: Vec<_> = spans.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["kept", "also kept"]);
}

#[test]
fn dangling_mark_keys_resolve_to_no_link() {
    let block = parse_block(&json!({
        "_type": "block",
        "style": "normal",
        "markDefs": [],
        "children": [{"_type": "span", "text": "text", "marks": ["missing-def"]}]
    }));

    let spans = block.inline_spans().unwrap();
    assert!(spans[0].link.is_none());
    assert!(!spans[0].marks.any());
}

#[test]
fn invalid_link_href_resolves_to_no_link() {
    let block = parse_block(&json!({
        "_type": "block",
        "style": "normal",
        "markDefs": [{"_key": "m1", "_type": "link", "href": "::not-a-url::"}],
        "children": [{"_type": "span", "text": "text", "marks": ["m1"]}]
    }));

    let spans = block.inline_spans().unwrap();
    assert!(spans[0].link.is_none());
}

#[test]
fn summaries_tolerate_partial_records() {
    let result = json!([
        {
            "title": "Complete",
            "slug": "complete",
            "excerpt": "has everything",
            "mainImage": {"asset": {"url": "https://cdn.example.com/a.png"}, "alt": "hero"},
            "categories": [{"title": "Systems", "slug": "systems"}],
            "publishedAt": "2024-06-01T08:00:00Z"
        },
        {
            "title": "Bare",
            "slug": "bare"
        },
        {
            "excerpt": "no identity, dropped"
        },
        {
            "title": "Null categories",
            "slug": "null-categories",
            "categories": null
        }
    ]);

    let posts = parse_post_summaries(result).unwrap();
    let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["complete", "bare", "null-categories"]);

    assert_eq!(
        posts[0].main_image.as_ref().and_then(|i| i.url.as_deref()),
        Some("https://cdn.example.com/a.png")
    );
    assert!(posts[1].excerpt.is_none());
    assert!(posts[1].categories.is_empty());
    assert!(posts[2].categories.is_empty());
}

#[test]
fn category_records_missing_slug_are_dropped_from_summaries() {
    let result = json!([
        {
            "title": "Post",
            "slug": "post",
            "categories": [
                {"title": "Valid", "slug": "valid"},
                {"title": "No slug"}
            ]
        }
    ]);

    let posts = parse_post_summaries(result).unwrap();
    assert_eq!(posts[0].categories.len(), 1);
    assert_eq!(posts[0].categories[0].slug.as_str(), "valid");
}

#[test]
fn sidebar_categories_parse_with_optional_description() {
    let result = json!([
        {"title": "Systems", "slug": "systems", "description": "Kernels and allocators"},
        {"title": "Frontend", "slug": "frontend"}
    ]);

    let categories = parse_sidebar_categories(result).unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(
        categories[0].description.as_deref(),
        Some("Kernels and allocators")
    );
    assert!(categories[1].description.is_none());
}

#[test]
fn absent_document_is_distinguishable_from_empty() {
    // null → the document does not exist.
    assert!(parse_article(serde_json::Value::Null).unwrap().is_none());

    // Present but bodyless → an empty document, not a failure.
    let article = parse_article(json!({"title": "T", "slug": "t"}))
        .unwrap()
        .unwrap();
    assert!(article.body.is_empty());
}
