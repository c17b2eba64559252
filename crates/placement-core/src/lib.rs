//! Placement analytics pipeline.
//!
//! Wires ingestion, column resolution and aggregation into a single
//! synchronous, request-scoped call. Every failure comes back as an
//! [`AnalyticsError`] whose `Display` text is fit for the user.

pub mod aggregate;
pub mod error;
pub mod pipeline;

pub use aggregate::aggregate;
pub use error::{AnalyticsError, Result};
pub use pipeline::{AnalyticsReport, analyze_file, analyze_table, analyze_upload};
