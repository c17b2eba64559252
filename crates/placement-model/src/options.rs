//! Tuning knobs for one analytics request.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::table::CellValue;

/// Upper bound on data rows accepted from one upload.
pub const DEFAULT_MAX_ROWS: usize = 100_000;

/// Upper bound on upload size (20 MB).
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;

/// How grouping keys are normalized before comparison.
///
/// The default compares typed cell values exactly, so `"Tel Aviv "` and
/// `"Tel Aviv"` are different sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyNormalization {
    #[default]
    Exact,
    /// Trim surrounding whitespace from text keys.
    Trim,
    /// Trim, then lowercase text keys.
    TrimCaseFold,
}

impl KeyNormalization {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Trim => "trim",
            Self::TrimCaseFold => "trim-case-fold",
        }
    }

    /// Applies the normalization to one key cell.
    ///
    /// Only text is touched; text that trims to nothing becomes empty.
    pub fn apply(&self, value: &CellValue) -> CellValue {
        match (self, value) {
            (Self::Exact, _) | (_, CellValue::Empty | CellValue::Bool(_)) => value.clone(),
            (_, CellValue::Int(_) | CellValue::Float(_)) => value.clone(),
            (Self::Trim, CellValue::Text(text)) => CellValue::text(text.trim()),
            (Self::TrimCaseFold, CellValue::Text(text)) => {
                CellValue::text(text.trim().to_lowercase())
            }
        }
    }
}

impl fmt::Display for KeyNormalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyNormalization {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "trim" => Ok(Self::Trim),
            "trim-case-fold" | "trim_case_fold" => Ok(Self::TrimCaseFold),
            _ => Err(ModelError::InvalidOption {
                option: "key normalization",
                value: value.to_string(),
                expected: "exact, trim, trim-case-fold",
            }),
        }
    }
}

/// Limits and policies for one analytics run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsOptions {
    pub max_rows: usize,
    pub max_upload_bytes: u64,
    #[serde(default)]
    pub key_normalization: KeyNormalization,
}

impl Default for AnalyticsOptions {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            key_normalization: KeyNormalization::default(),
        }
    }
}

impl AnalyticsOptions {
    #[must_use]
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    #[must_use]
    pub fn with_max_upload_bytes(mut self, max_upload_bytes: u64) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }

    #[must_use]
    pub fn with_key_normalization(mut self, mode: KeyNormalization) -> Self {
        self.key_normalization = mode;
        self
    }
}
