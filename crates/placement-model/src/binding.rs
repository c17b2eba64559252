//! Resolved column roles for an uploaded table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic role a header can play in the analytics pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    /// Placement location or organization. Required.
    Site,
    /// Subject-matter specialization. Falls back to the site column.
    Field,
    /// Numeric match-quality percentage. Optional.
    Score,
}

impl ColumnRole {
    pub const ALL: [ColumnRole; 3] = [Self::Site, Self::Field, Self::Score];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Site => "site",
            Self::Field => "field",
            Self::Score => "score",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header names bound to each role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnBinding {
    pub site_column: String,
    pub field_column: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_column: Option<String>,
}

impl ColumnBinding {
    /// Binding with only a site column; field falls back to site, no score.
    pub fn site_only(site_column: impl Into<String>) -> Self {
        let site_column = site_column.into();
        Self {
            field_column: site_column.clone(),
            site_column,
            score_column: None,
        }
    }

    /// True when no field-like header was found and the site column is reused.
    pub fn field_is_fallback(&self) -> bool {
        self.field_column == self.site_column
    }

    pub fn column_for(&self, role: ColumnRole) -> Option<&str> {
        match role {
            ColumnRole::Site => Some(&self.site_column),
            ColumnRole::Field => Some(&self.field_column),
            ColumnRole::Score => self.score_column.as_deref(),
        }
    }
}
