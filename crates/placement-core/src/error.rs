//! Error types for the analytics pipeline.

use thiserror::Error;

use placement_ingest::IngestError;
use placement_map::ResolveError;

/// Every way an analytics request can fail.
///
/// All variants are user-facing: the request boundary renders the
/// `Display` text in place of results.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// The request carried no file.
    #[error("no file selected")]
    NoFile,

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// A bound column is absent from the table it was applied to.
    #[error("column '{column}' not found in table")]
    ColumnNotFound { column: String },
}

impl AnalyticsError {
    /// Stable machine-readable category, used in logs and JSON output.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoFile => "no_file",
            Self::Ingest(IngestError::UnsupportedFormat { .. }) => "unsupported_format",
            Self::Ingest(IngestError::Parse { .. } | IngestError::NoWorksheet) => "parse_error",
            Self::Ingest(IngestError::FileTooLarge { .. } | IngestError::TooManyRows { .. }) => {
                "limit_exceeded"
            }
            Self::Ingest(IngestError::FileRead { .. }) => "read_error",
            Self::Resolve(ResolveError::MissingRequiredColumn { .. }) => "missing_required_column",
            Self::ColumnNotFound { .. } => "column_not_found",
        }
    }
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;
