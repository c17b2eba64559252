//! One analytics request, end to end: ingest, resolve, aggregate.

use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use tracing::{info, info_span};

use placement_ingest::{read_table_file, read_upload};
use placement_map::resolve_columns;
use placement_model::{AggregationResult, AnalyticsOptions, ColumnBinding, UploadedTable};

use crate::aggregate::aggregate;
use crate::error::{AnalyticsError, Result};

/// Outcome of a successful analytics run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub file_name: String,
    pub row_count: usize,
    pub binding: ColumnBinding,
    pub result: AggregationResult,
}

/// Resolves columns and aggregates an already parsed table.
pub fn analyze_table(
    table: &UploadedTable,
    options: &AnalyticsOptions,
) -> Result<(ColumnBinding, AggregationResult)> {
    let binding = resolve_columns(table.headers())?;
    let result = aggregate(table, &binding, options.key_normalization)?;
    Ok((binding, result))
}

/// Runs the pipeline over an uploaded file held in memory.
///
/// An empty file name means no file was attached to the request.
pub fn analyze_upload(
    file_name: &str,
    bytes: &[u8],
    options: &AnalyticsOptions,
) -> Result<AnalyticsReport> {
    if file_name.trim().is_empty() {
        return Err(AnalyticsError::NoFile);
    }
    let span = info_span!("analytics", file = %file_name);
    let _guard = span.enter();
    let start = Instant::now();

    let table = read_upload(file_name, bytes, options)?;
    finish(file_name, &table, options, start)
}

/// Runs the pipeline over a local file.
pub fn analyze_file(path: &Path, options: &AnalyticsOptions) -> Result<AnalyticsReport> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string();
    let span = info_span!("analytics", file = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = read_table_file(path, options)?;
    finish(&file_name, &table, options, start)
}

fn finish(
    file_name: &str,
    table: &UploadedTable,
    options: &AnalyticsOptions,
    start: Instant,
) -> Result<AnalyticsReport> {
    let (binding, result) = analyze_table(table, options)?;
    info!(
        rows = table.row_count(),
        sites = result.by_site.len(),
        fields = result.by_field.len(),
        scored_sites = result.score_avg.len(),
        field_fallback = binding.field_is_fallback(),
        duration_ms = start.elapsed().as_millis(),
        "analytics complete"
    );
    Ok(AnalyticsReport {
        file_name: file_name.to_string(),
        row_count: table.row_count(),
        binding,
        result,
    })
}
