//! Fixed header alias lists, institutional language first.
//!
//! Order matters: resolution walks each list front to back and the first
//! alias present in the upload wins.

use placement_model::ColumnRole;

pub const SITE_ALIASES: &[&str] = &[
    "מקום הכשרה",
    "מוסד הכשרה",
    "שם המקום",
    "Site",
    "Placement Site",
    "Training Site",
    "Placement",
];

pub const FIELD_ALIASES: &[&str] = &[
    "תחום התמחות",
    "תחום",
    "התמחות",
    "Field",
    "Specialization",
    "Field of Specialization",
];

pub const SCORE_ALIASES: &[&str] = &[
    "ציון",
    "אחוז התאמה",
    "ציון התאמה",
    "Score",
    "Match Score",
    "Match %",
    "Match Percentage",
];

/// Aliases recognized for one role, in priority order.
pub fn aliases_for(role: ColumnRole) -> &'static [&'static str] {
    match role {
        ColumnRole::Site => SITE_ALIASES,
        ColumnRole::Field => FIELD_ALIASES,
        ColumnRole::Score => SCORE_ALIASES,
    }
}

/// Every role with its aliases, for display.
pub fn aliases() -> [(ColumnRole, &'static [&'static str]); 3] {
    ColumnRole::ALL.map(|role| (role, aliases_for(role)))
}
