//! Grouping and aggregation over an uploaded table.

use std::collections::BTreeMap;

use placement_model::{
    AggregationResult, CellValue, ColumnBinding, CountRow, KeyNormalization, MeanRow,
    UploadedTable,
};

use crate::error::{AnalyticsError, Result};

/// Hashable identity of a grouping key.
///
/// Floats compare by bit pattern with `-0.0` folded into `0.0`; an integer
/// and a float with the same magnitude stay distinct keys, as do `1` and
/// `"1"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum GroupKey {
    Bool(bool),
    Int(i64),
    Float(u64),
    Text(String),
}

impl GroupKey {
    fn from_cell(value: &CellValue) -> Option<Self> {
        match value {
            CellValue::Empty => None,
            CellValue::Bool(v) => Some(Self::Bool(*v)),
            CellValue::Int(v) => Some(Self::Int(*v)),
            CellValue::Float(v) => {
                let v = if *v == 0.0 { 0.0 } else { *v };
                Some(Self::Float(v.to_bits()))
            }
            CellValue::Text(v) => Some(Self::Text(v.clone())),
        }
    }
}

/// Per-key accumulator for one site or field.
#[derive(Debug, Default)]
struct Tally {
    count: usize,
    score_sum: f64,
    score_samples: usize,
}

/// Groups in first-encountered order.
#[derive(Debug, Default)]
struct Groups {
    index: BTreeMap<GroupKey, usize>,
    entries: Vec<(CellValue, Tally)>,
}

impl Groups {
    fn tally(&mut self, key: CellValue) -> Option<&mut Tally> {
        let group_key = GroupKey::from_cell(&key)?;
        let slot = match self.index.get(&group_key) {
            Some(slot) => *slot,
            None => {
                let slot = self.entries.len();
                self.index.insert(group_key, slot);
                self.entries.push((key, Tally::default()));
                slot
            }
        };
        Some(&mut self.entries[slot].1)
    }

    fn into_counts(self) -> Vec<CountRow> {
        let mut rows: Vec<CountRow> = self
            .entries
            .into_iter()
            .map(|(key, tally)| CountRow {
                key,
                count: tally.count,
            })
            .collect();
        // Stable: ties keep first-encountered order.
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        rows
    }

    fn means(&self) -> Vec<MeanRow> {
        let mut rows: Vec<MeanRow> = self
            .entries
            .iter()
            .filter(|(_, tally)| tally.score_samples > 0)
            .map(|(key, tally)| MeanRow {
                key: key.clone(),
                mean: tally.score_sum / tally.score_samples as f64,
                samples: tally.score_samples,
            })
            .collect();
        rows.sort_by(|a, b| b.mean.total_cmp(&a.mean));
        rows
    }
}

fn column_index(table: &UploadedTable, column: &str) -> Result<usize> {
    table
        .column_index(column)
        .ok_or_else(|| AnalyticsError::ColumnNotFound {
            column: column.to_string(),
        })
}

/// Builds the three summary tables for a bound table.
///
/// - `by_site` / `by_field`: rows per key, count descending.
/// - `score_avg`: mean of numeric scores per site, mean descending; empty
///   when the binding has no score column.
///
/// Rows with an empty key are not counted. Score cells that are empty or
/// non-numeric are left out of both the sum and the sample count.
pub fn aggregate(
    table: &UploadedTable,
    binding: &ColumnBinding,
    normalization: KeyNormalization,
) -> Result<AggregationResult> {
    let site_idx = column_index(table, &binding.site_column)?;
    let field_idx = column_index(table, &binding.field_column)?;
    let score_idx = binding
        .score_column
        .as_deref()
        .map(|column| column_index(table, column))
        .transpose()?;

    let mut sites = Groups::default();
    let mut fields = Groups::default();

    for row in table.rows() {
        if let Some(site) = sites.tally(normalization.apply(&row[site_idx])) {
            site.count += 1;
            if let Some(score) = score_idx.and_then(|idx| row[idx].as_number()) {
                site.score_sum += score;
                site.score_samples += 1;
            }
        }
        if let Some(field) = fields.tally(normalization.apply(&row[field_idx])) {
            field.count += 1;
        }
    }

    let score_avg = if score_idx.is_some() {
        sites.means()
    } else {
        Vec::new()
    };

    Ok(AggregationResult {
        by_site: sites.into_counts(),
        by_field: fields.into_counts(),
        score_avg,
    })
}
