// src/formatting/template.rs
//! Composes the final article page from in-memory pipeline outputs.
//!
//! The handlebars template owns the page skeleton (title, byline,
//! table of contents, body); this module prepares the data and drives
//! the render.

use super::page_renderer::render_blocks;
use crate::config::PipelineConfig;
use crate::content::{estimate_reading_minutes, extract_outline, normalize};
use crate::error::AppError;
use crate::model::Article;
use handlebars::Handlebars;
use serde_json::json;

/// A fully rendered page, ready for delivery.
#[derive(Debug, Clone)]
pub struct RenderedPage(String);

impl RenderedPage {
    pub fn new(content: String) -> Self {
        Self(content)
    }

    #[allow(dead_code)] // Used by library consumers
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[allow(dead_code)] // Used by library consumers
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[allow(dead_code)] // Used by library consumers
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Renders an article into a page using the configured template.
///
/// Runs the whole content pipeline: normalize → outline + reading time
/// → body markdown → template.
pub fn render_article_page(
    article: &Article,
    config: &PipelineConfig,
) -> Result<RenderedPage, AppError> {
    log::info!("Composing page for '{}'", article.display_title());

    let template_engine = load_template(config)?;

    let body = normalize(article.body.clone());
    let outline = extract_outline(&body);
    let reading_minutes = estimate_reading_minutes(&body);
    let body_markdown = render_blocks(&body)?;

    let data = json!({
        "title": article.display_title(),
        "published_at": article
            .published_at
            .map(|date| date.format("%B %-d, %Y").to_string()),
        "reading_minutes": reading_minutes,
        "excerpt": article.excerpt,
        "outline": outline,
        "body": body_markdown,
    });

    let page = template_engine
        .render(config.template_name(), &data)
        .map_err(|e| AppError::TemplateRenderError {
            name: config.template_name().to_string(),
            message: e.to_string(),
        })?;

    log::info!(
        "Page composed: {} bytes, {} outline entries, {} min read",
        page.len(),
        outline_len_for_log(&data),
        reading_minutes
    );

    Ok(RenderedPage::new(page))
}

fn outline_len_for_log(data: &serde_json::Value) -> usize {
    data.get("outline")
        .and_then(|o| o.as_array())
        .map(|a| a.len())
        .unwrap_or(0)
}

/// Loads and registers the handlebars template from the configured path.
fn load_template(config: &PipelineConfig) -> Result<Handlebars<'static>, AppError> {
    let template_path = config.template_path();
    let template_content =
        std::fs::read_to_string(&template_path).map_err(|e| AppError::TemplateNotFound {
            path: template_path.display().to_string(),
            source: e,
        })?;

    let mut handlebars = Handlebars::new();
    handlebars
        .register_template_string(config.template_name(), &template_content)
        .map_err(|e| AppError::TemplateRenderError {
            name: config.template_name().to_string(),
            message: e.to_string(),
        })?;

    Ok(handlebars)
}
