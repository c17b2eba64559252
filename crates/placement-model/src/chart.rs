//! Flattened chart data for charting widgets.

use serde::{Deserialize, Serialize};

use crate::aggregate::AggregationResult;

/// Four label/value pairs, each index-aligned with its source table.
///
/// `site`, `field` and `avg` mirror `by_site`, `by_field` and `score_avg`;
/// `samples` carries the number of scored rows behind each average.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSeries {
    pub site_labels: Vec<String>,
    pub site_values: Vec<usize>,
    pub field_labels: Vec<String>,
    pub field_values: Vec<usize>,
    pub avg_labels: Vec<String>,
    pub avg_values: Vec<f64>,
    pub samples_labels: Vec<String>,
    pub samples_values: Vec<usize>,
}

impl ChartSeries {
    /// Flattens the summary tables into chart pairs.
    ///
    /// Labels are the display form of each key and values are copied as is,
    /// in the row order of the source table.
    pub fn from_result(result: &AggregationResult) -> Self {
        let mut series = Self::default();
        for row in &result.by_site {
            series.site_labels.push(row.key.to_string());
            series.site_values.push(row.count);
        }
        for row in &result.by_field {
            series.field_labels.push(row.key.to_string());
            series.field_values.push(row.count);
        }
        for row in &result.score_avg {
            series.avg_labels.push(row.key.to_string());
            series.avg_values.push(row.mean);
            series.samples_labels.push(row.key.to_string());
            series.samples_values.push(row.samples);
        }
        series
    }

    /// True when every label sequence matches its value sequence in length.
    pub fn is_aligned(&self) -> bool {
        self.site_labels.len() == self.site_values.len()
            && self.field_labels.len() == self.field_values.len()
            && self.avg_labels.len() == self.avg_values.len()
            && self.samples_labels.len() == self.samples_values.len()
    }
}
