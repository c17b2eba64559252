//! Error types for upload ingestion.

use std::path::PathBuf;

use thiserror::Error;

use crate::format::TableFormat;

/// Errors that can occur while turning an upload into a table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Format Errors ===
    /// File name does not end in a supported tabular extension.
    #[error("unsupported file format: {file_name} (expected .csv, .xlsx, .xlsm, .xls or .ods)")]
    UnsupportedFormat { file_name: String },

    // === Parsing Errors ===
    /// File claims a supported format but could not be parsed.
    #[error("failed to parse {format} file: {message}")]
    Parse {
        format: TableFormat,
        message: String,
    },

    /// Workbook opened but contains no worksheet.
    #[error("workbook contains no worksheet")]
    NoWorksheet,

    // === Limits ===
    /// Upload exceeds the configured byte ceiling.
    #[error("file too large: {size} bytes (limit {max_size} bytes)")]
    FileTooLarge { size: u64, max_size: u64 },

    /// Table exceeds the configured row ceiling.
    #[error("too many rows: more than {limit} data rows")]
    TooManyRows { limit: usize },

    // === File System Errors ===
    /// Failed to read a local file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IngestError {
    pub(crate) fn parse(format: TableFormat, message: impl ToString) -> Self {
        Self::Parse {
            format,
            message: message.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
