// src/main.rs

// Modules defined in the crate
mod api;
mod config;
mod constants;
mod content;
mod error;
mod formatting;
mod listing;
mod model;
mod output;
mod pipeline;
mod types;

// Specific imports
use crate::api::{SanityHttpClient, SanityRepository};
use crate::config::{Command, CommandLineInput, DocumentKind, PipelineConfig};
use crate::error::{classify_fetch_failure, AppError};
use crate::listing::{
    build_visible_list, category_counts, CategoryFilter, FuzzyIndex, ListQueryState,
};
use crate::model::{Article, ListRecord, PostSummary, ProjectSummary};
use crate::output::{deliver, DeliveryTarget, FeedChannel, OutputPlan, OutputReport};
use crate::pipeline::{ArtifactDelivery, ContentSource, PageComposer};
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fmt::Write as _;
use std::fs;
use types::DocumentSlug;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("sanity2page.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Orchestrates the retrieval, composition, and delivery of one page.
struct SanityToPage<'a> {
    config: &'a PipelineConfig,
    repository: SanityRepository,
    kind: DocumentKind,
}

impl<'a> SanityToPage<'a> {
    fn new(config: &'a PipelineConfig, kind: DocumentKind) -> Result<Self, AppError> {
        let client = SanityHttpClient::new(
            &config.project_id,
            &config.dataset,
            config.token.clone(),
        )?;
        Ok(Self {
            config,
            repository: SanityRepository::new(client),
            kind,
        })
    }

    /// Delivers rendered content to the configured output (file or stdout).
    fn deliver_content(&self, content: String) -> Result<OutputReport, AppError> {
        let plan = match &self.config.output_file {
            Some(output_path) => OutputPlan::new().with_operation(DeliveryTarget::WriteFile {
                path: output_path.clone(),
                content,
            }),
            None => {
                OutputPlan::new().with_operation(DeliveryTarget::PrintToStdout { content })
            }
        };

        let report = deliver(plan)?;

        if !report.is_success() {
            return Err(AppError::DeliveryFailed {
                failures: report.failed.iter().map(|f| f.error.clone()).collect(),
            });
        }

        Ok(report)
    }

    /// Reports completion to the user with delivery confirmations.
    fn report_completion(&self, report: &OutputReport) {
        for completed in &report.completed {
            if let DeliveryTarget::WriteFile { path, .. } = &completed.operation {
                println!("✓ Saved to {}", path.display());
            }
        }
    }
}

#[async_trait::async_trait]
impl ContentSource for SanityToPage<'_> {
    async fn fetch(&self, slug: &DocumentSlug) -> Result<Article, AppError> {
        log::info!("Retrieving document '{}'", slug);

        let article = match self.kind {
            DocumentKind::Post => self.repository.fetch_post(slug).await?,
            DocumentKind::Project => self.repository.fetch_project(slug).await?,
        };

        log::info!(
            "Retrieved '{}' ({} blocks)",
            article.display_title(),
            article.body.len()
        );

        Ok(article)
    }
}

impl PageComposer for SanityToPage<'_> {
    fn compose(&self, article: &Article) -> Result<formatting::RenderedPage, AppError> {
        formatting::render_article_page(article, self.config)
    }
}

impl ArtifactDelivery for SanityToPage<'_> {
    fn deliver(&self, page: formatting::RenderedPage) -> Result<OutputReport, AppError> {
        self.deliver_content(page.into_string())
    }
}

/// Executes the three-stage page pipeline: fetch → compose → deliver.
async fn run_page(config: &PipelineConfig, slug: &str, project: bool) -> Result<(), AppError> {
    let slug = DocumentSlug::parse(slug)?;
    let kind = if project {
        DocumentKind::Project
    } else {
        DocumentKind::Post
    };

    let pipeline = SanityToPage::new(config, kind)?;

    let article = pipeline.fetch(&slug).await?;
    let page = pipeline.compose(&article)?;
    let report = pipeline.deliver(page)?;
    pipeline.report_completion(&report);

    Ok(())
}

/// Runs the listing view: fetch → search/filter/paginate → print.
async fn run_list(
    config: &PipelineConfig,
    search: &str,
    category: &str,
    pages: u32,
    projects: bool,
) -> Result<(), AppError> {
    let pipeline = SanityToPage::new(config, DocumentKind::Post)?;

    let mut state = ListQueryState::new().apply_search(search);
    if category != "all" {
        state = state.apply_category(CategoryFilter::Slug(DocumentSlug::parse(category)?));
    }

    let listing = if projects {
        let records = pipeline.repository.fetch_project_summaries().await?;
        render_listing(&records, state, pages, "projects", project_display)?
    } else {
        let (sidebar, records) = pipeline.repository.fetch_listing_bundle().await?;
        log::info!(
            "Listing bundle: {} posts, {} sidebar categories",
            records.len(),
            sidebar.len()
        );

        // The active category's description heads the listing, the way
        // the site shows it above the grid.
        let mut header = String::new();
        if category != "all" {
            if let Some(active) = sidebar.iter().find(|c| c.slug.as_str() == category) {
                writeln!(header, "Category: {}", active.title)?;
                if let Some(description) = &active.description {
                    writeln!(header, "  {}", description)?;
                }
                writeln!(header)?;
            }
        }

        let listing = render_listing(&records, state, pages, "posts", post_display)?;
        format!("{}{}", header, listing)
    };

    let report = pipeline.deliver_content(listing)?;
    pipeline.report_completion(&report);
    Ok(())
}

/// One listing line per record: title, slug, optional summary text.
fn post_display(post: &PostSummary) -> (&str, &str, Option<&str>) {
    (post.title.as_str(), post.slug.as_str(), post.excerpt.as_deref())
}

fn project_display(project: &ProjectSummary) -> (&str, &str, Option<&str>) {
    (
        project.title.as_str(),
        project.slug.as_str(),
        project.short_description.as_deref(),
    )
}

/// Builds the listing report text shared by posts and projects.
fn render_listing<T, F>(
    records: &[T],
    initial: ListQueryState,
    pages: u32,
    noun: &str,
    display: F,
) -> Result<String, AppError>
where
    T: ListRecord,
    F: Fn(&T) -> (&str, &str, Option<&str>),
{
    let index = FuzzyIndex::build(records);

    let mut state = initial;
    for _ in 0..pages {
        let visible = build_visible_list(records, &index, &state);
        state = state.load_more(visible.filtered_len);
    }
    let visible = build_visible_list(records, &index, &state);

    let mut out = String::new();

    let counts = category_counts(records);
    if !counts.is_empty() {
        writeln!(out, "Categories:")?;
        writeln!(out, "  all ({})", records.len())?;
        for (slug, entry) in &counts {
            writeln!(out, "  {} ({}) [{}]", entry.title, entry.count, slug)?;
        }
        writeln!(out)?;
    }

    if visible.is_empty_result() {
        writeln!(out, "No {} found.", noun)?;
        return Ok(out);
    }

    writeln!(
        out,
        "Showing {} of {} {}:",
        visible.items.len(),
        visible.filtered_len,
        noun
    )?;
    for record in visible.items.iter().copied() {
        let (title, slug, summary) = display(record);
        match summary {
            Some(summary) => writeln!(out, "  - {} [{}] — {}", title, slug, summary)?,
            None => writeln!(out, "  - {} [{}]", title, slug)?,
        }
    }

    if visible.has_more(&state) {
        writeln!(
            out,
            "  … {} more (re-run with --pages {})",
            visible.filtered_len - visible.items.len(),
            pages + 1
        )?;
    }

    Ok(out)
}

/// Renders the RSS feed for the post collection.
async fn run_feed(config: &PipelineConfig) -> Result<(), AppError> {
    let pipeline = SanityToPage::new(config, DocumentKind::Post)?;

    let posts = pipeline.repository.fetch_post_summaries().await?;
    let channel = FeedChannel {
        title: config.site_title.clone(),
        site_url: config.site_url.clone(),
        description: config.site_description.clone(),
    };
    let feed = output::render_rss(&channel, &posts)?;

    let report = pipeline.deliver_content(feed)?;
    pipeline.report_completion(&report);
    Ok(())
}

async fn execute_command(command: &Command, config: &PipelineConfig) -> Result<(), AppError> {
    match command {
        Command::Page { slug, project, .. } => run_page(config, slug, *project).await,
        Command::List {
            search,
            category,
            pages,
            projects,
        } => run_list(config, search, category, *pages, *projects).await,
        Command::Feed => run_feed(config).await,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = PipelineConfig::resolve(&cli)?;

    if let Err(error) = execute_command(&cli.command, &config).await {
        log::error!("Pipeline failed: {}", error);
        eprintln!("✗ {}", classify_fetch_failure(&error));
        std::process::exit(1);
    }

    Ok(())
}
