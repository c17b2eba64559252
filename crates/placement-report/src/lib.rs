//! Presentation of placement analytics results.
//!
//! - **Tables**: row objects keyed by the upload's own column names
//! - **View**: the request-boundary result-or-error shape
//! - **Export**: long-format CSV of the summary tables

mod export;
mod tables;
mod view;

pub use export::write_summary_csv;
pub use tables::{COUNT_COLUMN, ColumnsView, TablesView};
pub use view::AnalyticsView;
