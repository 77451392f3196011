// src/error.rs
//! Application error types with structured error handling.
//!
//! Error types form the vocabulary for failure modes in the system.
//! Each error variant tells the story of what went wrong and where,
//! so callers can render a precise empty/error state instead of
//! guessing from strings.

use std::fmt;
use thiserror::Error;

/// Content-lake API error codes as a typed vocabulary.
///
/// Instead of matching against magic strings or raw status codes, the
/// failure modes the query endpoint can report are encoded in the type
/// system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentLakeErrorCode {
    /// The GROQ query itself was rejected
    BadQuery,
    /// Token is missing, invalid, or expired
    Unauthorized,
    /// Token lacks permission for this dataset
    Forbidden,
    /// Project or dataset does not exist
    NotFound,
    /// API rate limit exceeded
    RateLimited,
    /// Content-lake internal server error
    InternalError,
    /// HTTP status code fallback when the error body is unparseable
    HttpStatus(u16),
}

impl ContentLakeErrorCode {
    /// Classify an HTTP status from the query endpoint.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => Self::BadQuery,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            500..=599 => Self::InternalError,
            other => Self::HttpStatus(other),
        }
    }

    /// Whether this error is transient and worth retrying by hand.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::InternalError)
    }

    /// Whether this error means the resource simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl fmt::Display for ContentLakeErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadQuery => write!(f, "bad_query"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::NotFound => write!(f, "not_found"),
            Self::RateLimited => write!(f, "rate_limited"),
            Self::InternalError => write!(f, "internal_error"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Content lake returned an error ({code}): {message}")]
    ContentLakeService {
        code: ContentLakeErrorCode,
        message: String,
    },

    #[error("Document not found: {slug}")]
    DocumentNotFound { slug: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template file not found at {path}: {source}")]
    TemplateNotFound {
        path: String,
        source: std::io::Error,
    },

    #[error("Template render error for template {name}: {message}")]
    TemplateRenderError { name: String, message: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Output delivery failed: {}", failures.join(", "))]
    DeliveryFailed { failures: Vec<String> },

    #[error("Internal error: {message}")]
    InternalError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error(transparent)]
    ValidationError(#[from] crate::types::ValidationError),
}

// Allow converting from anyhow::Error, preserving error chain
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError {
            message: err.to_string(),
            source: None,
        }
    }
}

impl From<std::fmt::Error> for AppError {
    fn from(err: std::fmt::Error) -> Self {
        AppError::InternalError {
            message: "Formatting error".to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

/// Domain vocabulary for why a content fetch failed.
///
/// This is not an error type — it's a classification of the failure
/// reason, enabling a precise user-facing message (missing document vs.
/// credentials vs. transient outage) without stringly-typed dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// The requested document does not exist in the dataset.
    DocumentMissing,
    /// Credentials are missing or rejected.
    AccessDenied { reason: String },
    /// The content lake is rate limiting or down; retry later.
    Transient,
    /// Some other failure occurred.
    Other { cause: String },
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DocumentMissing => write!(f, "document not found in dataset"),
            Self::AccessDenied { reason } => write!(f, "access denied: {}", reason),
            Self::Transient => write!(f, "content lake temporarily unavailable"),
            Self::Other { cause } => write!(f, "{}", cause),
        }
    }
}

/// Classifies a fetch error into a domain-specific failure reason.
///
/// Pure function over the error structure; the caller decides how to
/// surface each class.
pub fn classify_fetch_failure(error: &AppError) -> FetchFailure {
    match error {
        AppError::DocumentNotFound { .. } => FetchFailure::DocumentMissing,
        AppError::ContentLakeService { code, message } => {
            if code.is_not_found() {
                FetchFailure::DocumentMissing
            } else if matches!(
                code,
                ContentLakeErrorCode::Unauthorized | ContentLakeErrorCode::Forbidden
            ) {
                FetchFailure::AccessDenied {
                    reason: message.clone(),
                }
            } else if code.is_retryable() {
                FetchFailure::Transient
            } else {
                FetchFailure::Other {
                    cause: error.to_string(),
                }
            }
        }
        _ => FetchFailure::Other {
            cause: error.to_string(),
        },
    }
}

/// Result type alias for convenience
#[allow(dead_code)]
pub type Result<T, E = AppError> = std::result::Result<T, E>;
