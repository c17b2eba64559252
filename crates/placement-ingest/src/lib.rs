//! Upload ingestion for placement analytics.
//!
//! Turns an uploaded file (declared name + bytes) into an
//! [`UploadedTable`](placement_model::UploadedTable).
//!
//! # Features
//!
//! - **Format detection**: by extension only (`.csv`, `.xlsx`, `.xlsm`,
//!   `.xls`, `.ods`)
//! - **CSV**: parsed with polars, native column types inferred
//! - **Workbooks**: first worksheet parsed with calamine
//! - **Limits**: upload size and row count ceilings
//!
//! # Example
//!
//! ```ignore
//! use placement_ingest::read_upload;
//! use placement_model::AnalyticsOptions;
//!
//! let table = read_upload("results.csv", &bytes, &AnalyticsOptions::default())?;
//! ```

mod csv;
mod error;
mod format;
mod header;
mod upload;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === Format Detection ===
pub use format::{TableFormat, WorkbookKind};

// === Readers ===
pub use csv::{any_to_cell, read_csv_bytes};
pub use header::normalize_header;
pub use upload::{check_upload_size, read_table_file, read_upload};
pub use workbook::{data_to_cell, read_workbook_bytes};
