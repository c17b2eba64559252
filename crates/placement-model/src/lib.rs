//! Data model for the placement analytics pipeline.
//!
//! All types here are request-scoped values: an upload is parsed into an
//! [`UploadedTable`], its headers are bound to roles in a [`ColumnBinding`],
//! and the aggregation produces an [`AggregationResult`] that the presenter
//! flattens into a [`ChartSeries`].

pub mod aggregate;
pub mod binding;
pub mod chart;
pub mod error;
pub mod options;
pub mod table;

pub use aggregate::{AggregationResult, CountRow, MeanRow};
pub use binding::{ColumnBinding, ColumnRole};
pub use chart::ChartSeries;
pub use error::{ModelError, Result};
pub use options::{
    AnalyticsOptions, DEFAULT_MAX_ROWS, DEFAULT_MAX_UPLOAD_BYTES, KeyNormalization,
};
pub use table::{CellValue, UploadedTable};
