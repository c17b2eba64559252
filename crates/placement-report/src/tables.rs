//! Table-dictionary form of the summary tables.
//!
//! Rows are JSON objects keyed by the real column names of the upload, so a
//! template can render them the same way whatever aliases the file used.

use serde::Serialize;
use serde_json::{Map, Value};

use placement_model::{AggregationResult, CellValue, ColumnBinding, CountRow, MeanRow};

/// Name of the aggregate column in count tables.
pub const COUNT_COLUMN: &str = "count";

/// Column names shown as table headings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnsView {
    pub site: String,
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
}

/// The three summary tables as lists of row objects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TablesView {
    pub cols: ColumnsView,
    pub by_site: Vec<Map<String, Value>>,
    pub by_field: Vec<Map<String, Value>>,
    pub score_avg: Vec<Map<String, Value>>,
}

impl TablesView {
    pub fn from_result(binding: &ColumnBinding, result: &AggregationResult) -> Self {
        let score_column = binding.score_column.clone();
        let mean_column = score_column.as_deref().unwrap_or("score");
        Self {
            cols: ColumnsView {
                site: binding.site_column.clone(),
                field: binding.field_column.clone(),
                score: score_column.clone(),
            },
            by_site: count_rows(&binding.site_column, &result.by_site),
            by_field: count_rows(&binding.field_column, &result.by_field),
            score_avg: result
                .score_avg
                .iter()
                .map(|row| mean_row(&binding.site_column, mean_column, row))
                .collect(),
        }
    }
}

fn count_rows(column: &str, rows: &[CountRow]) -> Vec<Map<String, Value>> {
    rows.iter()
        .map(|row| {
            let mut object = Map::new();
            object.insert(column.to_string(), cell_json(&row.key));
            object.insert(COUNT_COLUMN.to_string(), Value::from(row.count));
            object
        })
        .collect()
}

fn mean_row(site_column: &str, mean_column: &str, row: &MeanRow) -> Map<String, Value> {
    let mut object = Map::new();
    object.insert(site_column.to_string(), cell_json(&row.key));
    object.insert(mean_column.to_string(), Value::from(row.mean));
    object
}

fn cell_json(value: &CellValue) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}
