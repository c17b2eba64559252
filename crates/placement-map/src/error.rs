//! Error types for column resolution.

use placement_model::ColumnRole;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No header matched any alias of a required role.
    #[error("missing required {role} column (expected one of: {expected})")]
    MissingRequiredColumn { role: ColumnRole, expected: String },
}

impl ResolveError {
    pub fn role(&self) -> ColumnRole {
        match self {
            Self::MissingRequiredColumn { role, .. } => *role,
        }
    }
}
