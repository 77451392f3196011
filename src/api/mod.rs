// src/api/mod.rs
//! Content-lake access: HTTP client, GROQ queries, and JSON parsing.
//!
//! The rest of the pipeline treats this module as an opaque data
//! source: it hands back typed domain values or a typed error, never
//! raw JSON.

pub mod client;
pub mod parser;
pub mod queries;
pub mod responses;

pub use client::{SanityHttpClient, SanityRepository};
pub use responses::SidebarCategory;
