// src/output/feed.rs
//! RSS 2.0 feed generation for the post collection.
//!
//! Pure text composition: the caller fetches the summaries, this
//! renders the channel. Posts without a publish date still appear,
//! just without a `pubDate` element.

use crate::constants::CHARS_PER_FEED_ITEM_ESTIMATE;
use crate::error::AppError;
use crate::model::PostSummary;
use std::fmt::Write;

/// Channel-level feed metadata.
#[derive(Debug, Clone)]
pub struct FeedChannel {
    pub title: String,
    pub site_url: String,
    pub description: String,
}

/// Renders the RSS 2.0 document for a post collection.
///
/// Items appear in collection order (newest first upstream). All
/// author-controlled text is XML-escaped.
pub fn render_rss(channel: &FeedChannel, posts: &[PostSummary]) -> Result<String, AppError> {
    let mut feed = String::with_capacity(posts.len() * CHARS_PER_FEED_ITEM_ESTIMATE + 512);

    writeln!(feed, r#"<?xml version="1.0" encoding="UTF-8" ?>"#)?;
    writeln!(feed, r#"<rss version="2.0">"#)?;
    writeln!(feed, "  <channel>")?;
    writeln!(feed, "    <title>{}</title>", xml_escape(&channel.title))?;
    writeln!(feed, "    <link>{}</link>", xml_escape(&channel.site_url))?;
    writeln!(
        feed,
        "    <description>{}</description>",
        xml_escape(&channel.description)
    )?;

    for post in posts {
        writeln!(feed, "    <item>")?;
        writeln!(feed, "      <title>{}</title>", xml_escape(&post.title))?;
        writeln!(
            feed,
            "      <link>{}/blog/{}</link>",
            xml_escape(&channel.site_url),
            post.slug
        )?;
        writeln!(
            feed,
            "      <description>{}</description>",
            xml_escape(post.excerpt.as_deref().unwrap_or_default())
        )?;
        if let Some(published_at) = post.published_at {
            writeln!(feed, "      <pubDate>{}</pubDate>", published_at.to_rfc2822())?;
        }
        writeln!(feed, "    </item>")?;
    }

    writeln!(feed, "  </channel>")?;
    writeln!(feed, "</rss>")?;

    log::info!("Rendered RSS feed: {} items, {} bytes", posts.len(), feed.len());
    Ok(feed)
}

/// Escapes the five XML-significant characters.
fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
