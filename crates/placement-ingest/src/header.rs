//! Header cleanup shared by the CSV and workbook readers.

/// Normalizes a header value: strips a UTF-8 BOM and surrounding whitespace.
///
/// Inner whitespace is kept so aliases like `"מקום הכשרה"` still match.
pub fn normalize_header(value: &str) -> String {
    value.trim().trim_matches('\u{feff}').trim().to_string()
}
