// src/config.rs
use crate::error::AppError;
use crate::types::{ApiToken, Dataset, ProjectId};
use clap::{Parser, Subcommand};
use std::default::Default;
use std::path::PathBuf;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    #[command(subcommand)]
    pub command: Command,

    /// Output file for the rendered artifact (defaults to stdout)
    #[arg(short, long, global = true)]
    pub output_file: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render one document as a markdown page
    Page {
        /// Document slug (e.g. "my-first-post")
        slug: String,

        /// Treat the slug as a project instead of a post
        #[arg(long, default_value_t = false)]
        project: bool,

        /// Template name under ./templates, without the .hbs extension
        #[arg(long, default_value = "article")]
        template: String,
    },

    /// Print the filtered listing view
    List {
        /// Fuzzy search text
        #[arg(short, long, default_value = "")]
        search: String,

        /// Category slug to narrow to ("all" disables narrowing)
        #[arg(short, long, default_value = "all")]
        category: String,

        /// How many extra pages to load beyond the first
        #[arg(long, default_value_t = 0)]
        pages: u32,

        /// List featured projects instead of posts
        #[arg(long, default_value_t = false)]
        projects: bool,
    },

    /// Render the RSS feed for the post collection
    Feed,
}

/// Which document collection a slug is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentKind {
    #[default]
    Post,
    Project,
}

/// Resolved pipeline configuration — validated and ready to drive all
/// three stages.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub project_id: ProjectId,
    pub dataset: Dataset,
    pub token: Option<ApiToken>,
    pub output_file: Option<PathBuf>,
    pub verbose: bool,
    /// Template name for page rendering.
    template: String,
    /// Channel metadata for feed rendering.
    pub site_title: String,
    pub site_url: String,
    pub site_description: String,
}

impl PipelineConfig {
    /// Resolves a complete pipeline configuration from CLI input and
    /// environment.
    pub fn resolve(cli: &CommandLineInput) -> Result<Self, AppError> {
        let project_id_str = std::env::var("SANITY_PROJECT_ID").map_err(|_| {
            AppError::MissingConfiguration(
                "SANITY_PROJECT_ID environment variable not set".to_string(),
            )
        })?;
        let project_id = ProjectId::new(project_id_str)?;

        let dataset_str =
            std::env::var("SANITY_DATASET").unwrap_or_else(|_| "production".to_string());
        let dataset = Dataset::new(dataset_str)?;

        let token = match std::env::var("SANITY_API_TOKEN") {
            Ok(value) if !value.is_empty() => Some(ApiToken::new(value)?),
            _ => None,
        };

        let template = match &cli.command {
            Command::Page { template, .. } => template.clone(),
            _ => "article".to_string(),
        };

        Ok(PipelineConfig {
            project_id,
            dataset,
            token,
            output_file: cli.output_file.as_ref().map(PathBuf::from),
            verbose: cli.verbose,
            template,
            site_title: std::env::var("SITE_TITLE")
                .unwrap_or_else(|_| "Engineering Notes".to_string()),
            site_url: std::env::var("SITE_URL")
                .unwrap_or_else(|_| "https://example.com".to_string()),
            site_description: std::env::var("SITE_DESCRIPTION").unwrap_or_else(|_| {
                "Thoughts on software engineering, design, and tech.".to_string()
            }),
        })
    }

    pub fn template_name(&self) -> &str {
        &self.template
    }

    /// Returns the full template path.
    pub fn template_path(&self) -> PathBuf {
        PathBuf::from("./templates").join(format!("{}.hbs", self.template))
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            project_id: ProjectId::new("demo123").expect("default project id should be valid"),
            dataset: Dataset::new("production").expect("default dataset should be valid"),
            token: None,
            output_file: None,
            verbose: false,
            template: "article".to_string(),
            site_title: "Engineering Notes".to_string(),
            site_url: "https://example.com".to_string(),
            site_description: "Thoughts on software engineering, design, and tech.".to_string(),
        }
    }
}
