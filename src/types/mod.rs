use thiserror::Error;

mod domain_types;
mod ids;
mod spans;

pub use domain_types::*;
pub use ids::*;
pub use spans::*;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid document slug: {slug} - {reason}")]
    InvalidSlug { slug: String, reason: String },

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Invalid heading level: {0}, expected 1..=4")]
    InvalidHeadingLevel(u8),

    #[error("Invalid project id: {reason}")]
    InvalidProjectId { reason: String },

    #[error("Invalid dataset name: {name} - {reason}")]
    InvalidDataset { name: String, reason: String },

    #[error("Invalid API token format: {reason}")]
    InvalidApiToken { reason: String },
}
