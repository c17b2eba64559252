//! Workbook parsing through calamine.

use std::io::{Cursor, Read, Seek};

use calamine::{Data, Ods, Range, Reader, Xls, Xlsx};

use placement_model::{CellValue, UploadedTable};

use crate::error::{IngestError, Result};
use crate::format::{TableFormat, WorkbookKind};
use crate::header::normalize_header;

/// Parses the first worksheet of a workbook into a typed table.
///
/// The first row of the used range is the header. Fully blank rows are
/// skipped; error cells (`#N/A`, `#DIV/0!`) read as empty.
pub fn read_workbook_bytes(
    bytes: &[u8],
    kind: WorkbookKind,
    max_rows: usize,
) -> Result<UploadedTable> {
    let cursor = Cursor::new(bytes);
    let range = match kind {
        WorkbookKind::Xlsx => first_sheet::<Xlsx<_>, _>(cursor, kind)?,
        WorkbookKind::Xls => first_sheet::<Xls<_>, _>(cursor, kind)?,
        WorkbookKind::Ods => first_sheet::<Ods<_>, _>(cursor, kind)?,
    };
    range_to_table(&range, max_rows)
}

fn first_sheet<R, RS>(reader: RS, kind: WorkbookKind) -> Result<Range<Data>>
where
    RS: Read + Seek,
    R: Reader<RS>,
    R::Error: std::fmt::Display,
{
    let format = TableFormat::Workbook(kind);
    let mut workbook = R::new(reader).map_err(|e| IngestError::parse(format, e))?;
    workbook
        .worksheet_range_at(0)
        .ok_or(IngestError::NoWorksheet)?
        .map_err(|e| IngestError::parse(format, e))
}

fn range_to_table(range: &Range<Data>, max_rows: usize) -> Result<UploadedTable> {
    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(UploadedTable::default());
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| normalize_header(&cell.to_string()))
        .collect();

    let mut data = Vec::new();
    for row in rows {
        let cells: Vec<CellValue> = row.iter().map(data_to_cell).collect();
        if cells.iter().all(CellValue::is_empty) {
            continue;
        }
        if data.len() == max_rows {
            return Err(IngestError::TooManyRows { limit: max_rows });
        }
        data.push(cells);
    }

    Ok(UploadedTable::new(headers, data))
}

/// Converts a calamine cell to a typed cell.
pub fn data_to_cell(value: &Data) -> CellValue {
    match value {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(v) => CellValue::Int(*v),
        Data::Float(v) => CellValue::Float(*v),
        Data::String(s) => CellValue::text(s.as_str()),
        other => CellValue::text(other.to_string()),
    }
}
