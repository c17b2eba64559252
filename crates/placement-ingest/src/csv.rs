//! CSV parsing through polars.

use std::borrow::Cow;
use std::io::Cursor;

use encoding_rs::WINDOWS_1255;
use polars::prelude::{AnyValue, CsvReadOptions, DataFrame, SerReader};

use placement_model::{CellValue, UploadedTable};

use crate::error::{IngestError, Result};
use crate::format::TableFormat;
use crate::header::normalize_header;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parses CSV bytes into a typed table.
///
/// The first row is the header. Column types are inferred by polars over
/// every row, so a column of whole numbers becomes [`CellValue::Int`] and a
/// column with any non-numeric cell stays text, wherever that cell sits. Input that is not valid UTF-8 is decoded as Windows-1255, the
/// legacy encoding of Hebrew spreadsheet exports.
pub fn read_csv_bytes(bytes: &[u8], max_rows: usize) -> Result<UploadedTable> {
    let data = decode_csv(bytes).into_owned();
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .with_n_rows(Some(max_rows.saturating_add(1)))
        .into_reader_with_file_handle(Cursor::new(data))
        .finish()
        .map_err(|e| IngestError::parse(TableFormat::Csv, e))?;

    if df.height() > max_rows {
        return Err(IngestError::TooManyRows { limit: max_rows });
    }

    dataframe_to_table(&df)
}

fn decode_csv(bytes: &[u8]) -> Cow<'_, [u8]> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if std::str::from_utf8(bytes).is_ok() {
        return Cow::Borrowed(bytes);
    }
    let (text, _, had_errors) = WINDOWS_1255.decode(bytes);
    tracing::debug!(had_errors, "CSV is not UTF-8, decoded as windows-1255");
    Cow::Owned(text.into_owned().into_bytes())
}

fn dataframe_to_table(df: &DataFrame) -> Result<UploadedTable> {
    let columns = df.get_columns();
    let headers: Vec<String> = columns
        .iter()
        .map(|column| normalize_header(column.name().as_str()))
        .collect();

    let mut rows = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let mut row = Vec::with_capacity(columns.len());
        for column in columns {
            let value = column
                .get(idx)
                .map_err(|e| IngestError::parse(TableFormat::Csv, e))?;
            row.push(any_to_cell(value));
        }
        rows.push(row);
    }

    Ok(UploadedTable::new(headers, rows))
}

/// Converts a Polars AnyValue to a typed cell.
pub fn any_to_cell(value: AnyValue<'_>) -> CellValue {
    match value {
        AnyValue::Null => CellValue::Empty,
        AnyValue::Boolean(b) => CellValue::Bool(b),
        AnyValue::Int8(v) => CellValue::Int(i64::from(v)),
        AnyValue::Int16(v) => CellValue::Int(i64::from(v)),
        AnyValue::Int32(v) => CellValue::Int(i64::from(v)),
        AnyValue::Int64(v) => CellValue::Int(v),
        AnyValue::UInt8(v) => CellValue::Int(i64::from(v)),
        AnyValue::UInt16(v) => CellValue::Int(i64::from(v)),
        AnyValue::UInt32(v) => CellValue::Int(i64::from(v)),
        AnyValue::UInt64(v) => {
            i64::try_from(v).map_or(CellValue::Float(v as f64), CellValue::Int)
        }
        AnyValue::Float32(v) => CellValue::Float(f64::from(v)),
        AnyValue::Float64(v) => CellValue::Float(v),
        AnyValue::String(s) => CellValue::text(s),
        AnyValue::StringOwned(s) => CellValue::text(s.as_str()),
        other => CellValue::text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infers_native_types() {
        let table = read_csv_bytes(b"Site,Field,Score\nA,X,80\nB,Y,72.5\n", 10).unwrap();
        assert_eq!(table.headers(), ["Site", "Field", "Score"]);
        assert_eq!(table.cell(0, "Site"), Some(&CellValue::text("A")));
        assert_eq!(table.cell(0, "Score"), Some(&CellValue::Float(80.0)));
        assert_eq!(table.cell(1, "Score"), Some(&CellValue::Float(72.5)));
    }

    #[test]
    fn test_integer_column_stays_integer() {
        let table = read_csv_bytes(b"Site,Score\nA,80\nB,90\n", 10).unwrap();
        assert_eq!(table.cell(1, "Score"), Some(&CellValue::Int(90)));
    }

    #[test]
    fn test_missing_values_are_empty() {
        let table = read_csv_bytes(b"Site,Score\nA,\n,90\n", 10).unwrap();
        assert_eq!(table.cell(0, "Score"), Some(&CellValue::Empty));
        assert_eq!(table.cell(1, "Site"), Some(&CellValue::Empty));
    }

    #[test]
    fn test_header_only() {
        let table = read_csv_bytes(b"Site,Field,Score\n", 10).unwrap();
        assert_eq!(table.column_count(), 3);
        assert!(table.is_empty());
    }

    #[test]
    fn test_bom_is_stripped() {
        let table = read_csv_bytes(b"\xEF\xBB\xBFSite,Score\nA,1\n", 10).unwrap();
        assert_eq!(table.headers(), ["Site", "Score"]);
    }

    #[test]
    fn test_windows_1255_fallback() {
        // "אתר" encoded as windows-1255
        let mut bytes = vec![0xE0, 0xFA, 0xF8];
        bytes.extend_from_slice(b",Score\nA,1\n");
        let table = read_csv_bytes(&bytes, 10).unwrap();
        assert_eq!(table.headers()[0], "אתר");
    }

    #[test]
    fn test_late_text_cell_keeps_column_as_text() {
        let mut csv = String::from("Site,Score\n");
        for i in 0..150 {
            csv.push_str(&format!("{},80\n", 100 + i % 3));
        }
        csv.push_str("Haifa,n/a\n");
        let table = read_csv_bytes(csv.as_bytes(), 1_000).unwrap();
        assert_eq!(table.row_count(), 151);
        assert_eq!(table.cell(0, "Site"), Some(&CellValue::text("100")));
        assert_eq!(table.cell(150, "Site"), Some(&CellValue::text("Haifa")));
        assert_eq!(table.cell(150, "Score"), Some(&CellValue::text("n/a")));
        assert_eq!(table.cell(0, "Score").and_then(CellValue::as_number), Some(80.0));
    }

    #[test]
    fn test_row_ceiling() {
        let err = read_csv_bytes(b"Site\nA\nB\nC\n", 2).unwrap_err();
        assert!(matches!(err, IngestError::TooManyRows { limit: 2 }));
        assert!(read_csv_bytes(b"Site\nA\nB\n", 2).is_ok());
    }

    #[test]
    fn test_empty_input_is_parse_error() {
        let err = read_csv_bytes(b"", 10).unwrap_err();
        assert!(matches!(
            err,
            IngestError::Parse {
                format: TableFormat::Csv,
                ..
            }
        ));
    }
}
