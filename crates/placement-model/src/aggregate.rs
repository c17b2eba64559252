//! Aggregated summary tables produced from an uploaded table.

use serde::{Deserialize, Serialize};

use crate::table::CellValue;

/// Number of rows sharing one grouping key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountRow {
    pub key: CellValue,
    pub count: usize,
}

impl CountRow {
    pub fn new(key: impl Into<CellValue>, count: usize) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

/// Mean score for one site key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeanRow {
    pub key: CellValue,
    pub mean: f64,
    /// Number of numeric score values behind `mean`.
    pub samples: usize,
}

/// The three summary tables, each sorted by its aggregate, descending.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregationResult {
    pub by_site: Vec<CountRow>,
    pub by_field: Vec<CountRow>,
    /// Empty when the table has no score column.
    pub score_avg: Vec<MeanRow>,
}

impl AggregationResult {
    pub fn is_empty(&self) -> bool {
        self.by_site.is_empty() && self.by_field.is_empty() && self.score_avg.is_empty()
    }

    /// Rows that carried a site value.
    pub fn grouped_rows(&self) -> usize {
        self.by_site.iter().map(|row| row.count).sum()
    }
}
