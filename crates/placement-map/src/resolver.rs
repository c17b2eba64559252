//! Header list to [`ColumnBinding`] resolution.

use placement_model::{ColumnBinding, ColumnRole};

use crate::aliases::aliases_for;
use crate::error::ResolveError;

/// Finds the first alias of `role` that appears in `headers`.
///
/// Iterates the alias list, not the headers, so alias priority decides
/// between two matching columns regardless of their position in the table.
pub fn find_column(headers: &[String], role: ColumnRole) -> Option<String> {
    aliases_for(role)
        .iter()
        .find(|alias| headers.iter().any(|header| header == *alias))
        .map(|alias| (*alias).to_string())
}

/// Binds headers to the site, field and score roles.
///
/// A missing site column is an error. A missing field column falls back to
/// the site column; a missing score column leaves the score unbound.
pub fn resolve_columns(headers: &[String]) -> Result<ColumnBinding, ResolveError> {
    let site_column = find_column(headers, ColumnRole::Site).ok_or_else(|| {
        ResolveError::MissingRequiredColumn {
            role: ColumnRole::Site,
            expected: aliases_for(ColumnRole::Site).join(", "),
        }
    })?;
    let field_column =
        find_column(headers, ColumnRole::Field).unwrap_or_else(|| site_column.clone());
    let score_column = find_column(headers, ColumnRole::Score);

    tracing::debug!(
        site = %site_column,
        field = %field_column,
        score = score_column.as_deref().unwrap_or("-"),
        "columns resolved"
    );

    Ok(ColumnBinding {
        site_column,
        field_column,
        score_column,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn resolves_english_headers() {
        let binding = resolve_columns(&headers(&["Site", "Field", "Score"])).unwrap();
        assert_eq!(binding.site_column, "Site");
        assert_eq!(binding.field_column, "Field");
        assert_eq!(binding.score_column.as_deref(), Some("Score"));
    }

    #[test]
    fn alias_order_beats_table_order() {
        // "Site" appears first in the table, but the Hebrew alias ranks higher.
        let binding = resolve_columns(&headers(&["Site", "מקום הכשרה"])).unwrap();
        assert_eq!(binding.site_column, "מקום הכשרה");
    }

    #[test]
    fn field_falls_back_to_site() {
        let binding = resolve_columns(&headers(&["Placement", "Score"])).unwrap();
        assert_eq!(binding.field_column, "Placement");
        assert!(binding.field_is_fallback());
    }

    #[test]
    fn score_is_optional() {
        let binding = resolve_columns(&headers(&["Site", "Field"])).unwrap();
        assert_eq!(binding.score_column, None);
    }

    #[test]
    fn missing_site_is_error() {
        let err = resolve_columns(&headers(&["Name", "Value"])).unwrap_err();
        assert_eq!(err.role(), ColumnRole::Site);
        assert!(err.to_string().starts_with("missing required site column"));
    }

    #[test]
    fn matching_is_exact() {
        assert!(resolve_columns(&headers(&["site", "SITE "])).is_err());
    }
}
