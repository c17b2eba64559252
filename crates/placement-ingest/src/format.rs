//! Extension-based format detection.
//!
//! The format is decided from the declared file name only; the bytes are
//! never sniffed.

use std::fmt;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Workbook container handled by calamine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkbookKind {
    /// Office Open XML (`.xlsx`, `.xlsm`).
    Xlsx,
    /// Legacy binary Excel (`.xls`).
    Xls,
    /// OpenDocument spreadsheet (`.ods`).
    Ods,
}

/// Serialization of an uploaded table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Workbook(WorkbookKind),
}

impl TableFormat {
    /// Detects the format from a declared file name.
    ///
    /// The extension match is case-insensitive.
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let extension = Path::new(file_name.trim())
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("xlsx" | "xlsm") => Ok(Self::Workbook(WorkbookKind::Xlsx)),
            Some("xls") => Ok(Self::Workbook(WorkbookKind::Xls)),
            Some("ods") => Ok(Self::Workbook(WorkbookKind::Ods)),
            _ => Err(IngestError::UnsupportedFormat {
                file_name: file_name.to_string(),
            }),
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Workbook(_) => "workbook",
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_supported_extensions() {
        assert_eq!(TableFormat::from_file_name("results.csv").unwrap(), TableFormat::Csv);
        assert_eq!(
            TableFormat::from_file_name("Results.XLSX").unwrap(),
            TableFormat::Workbook(WorkbookKind::Xlsx)
        );
        assert_eq!(
            TableFormat::from_file_name("macro.xlsm").unwrap(),
            TableFormat::Workbook(WorkbookKind::Xlsx)
        );
        assert_eq!(
            TableFormat::from_file_name("old.xls").unwrap(),
            TableFormat::Workbook(WorkbookKind::Xls)
        );
        assert_eq!(
            TableFormat::from_file_name("calc.ods").unwrap(),
            TableFormat::Workbook(WorkbookKind::Ods)
        );
    }

    #[test]
    fn rejects_other_extensions() {
        for name in ["notes.txt", "results", "results.csv.bak", ""] {
            let err = TableFormat::from_file_name(name).unwrap_err();
            assert!(matches!(err, IngestError::UnsupportedFormat { .. }), "{name}");
        }
    }
}
