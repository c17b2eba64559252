//! Entry points: uploaded bytes or a local file to an [`UploadedTable`].

use std::path::Path;
use std::time::Instant;

use placement_model::{AnalyticsOptions, UploadedTable};

use crate::csv::read_csv_bytes;
use crate::error::{IngestError, Result};
use crate::format::TableFormat;
use crate::workbook::read_workbook_bytes;

/// Parses an uploaded file held fully in memory.
///
/// The format comes from `file_name`'s extension. Size and row ceilings come
/// from `options`.
pub fn read_upload(
    file_name: &str,
    bytes: &[u8],
    options: &AnalyticsOptions,
) -> Result<UploadedTable> {
    let format = TableFormat::from_file_name(file_name)?;
    check_upload_size(bytes.len() as u64, options.max_upload_bytes)?;

    let start = Instant::now();
    let table = match format {
        TableFormat::Csv => read_csv_bytes(bytes, options.max_rows)?,
        TableFormat::Workbook(kind) => read_workbook_bytes(bytes, kind, options.max_rows)?,
    };
    tracing::debug!(
        %format,
        bytes = bytes.len(),
        rows = table.row_count(),
        columns = table.column_count(),
        duration_ms = start.elapsed().as_millis(),
        "upload parsed"
    );
    Ok(table)
}

/// Reads a table from a local file, applying the same checks as an upload.
pub fn read_table_file(path: &Path, options: &AnalyticsOptions) -> Result<UploadedTable> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    // Reject by extension before touching the file system.
    TableFormat::from_file_name(file_name)?;

    let metadata = std::fs::metadata(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    check_upload_size(metadata.len(), options.max_upload_bytes)?;

    let bytes = std::fs::read(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    read_upload(file_name, &bytes, options)
}

/// Check an upload size against a limit.
pub fn check_upload_size(size: u64, max_size: u64) -> Result<()> {
    if size > max_size {
        return Err(IngestError::FileTooLarge { size, max_size });
    }
    Ok(())
}
