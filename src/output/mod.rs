// src/output/mod.rs
//! Output handling with clear separation of planning and execution.
//!
//! Plans are data; `deliver` is the one place I/O happens. The RSS
//! feed renderer lives here too — it produces an artifact, not page
//! content.

mod feed;
mod types;
mod writer;

pub use feed::{render_rss, FeedChannel};
pub use types::{DeliveryTarget, OutputPlan, OutputReport};
pub use writer::deliver;
