//! Site-wide maintenance gate.

use serde::Serialize;

use crate::config::{ConfigProvider, maintenance_enabled};

/// Path prefixes that stay reachable during maintenance.
pub const MAINTENANCE_OPEN_PREFIXES: [&str; 2] = ["/lecturer", "/login"];

/// Response served instead of a blocked page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaintenanceNotice {
    pub status: u16,
    pub title: &'static str,
    pub message: &'static str,
}

impl Default for MaintenanceNotice {
    fn default() -> Self {
        Self {
            status: 503,
            title: "האתר סגור כרגע",
            message: "הגישה לטופס סטודנטים הוגבלה זמנית.",
        }
    }
}

/// Returns a notice when `path` must be blocked, `None` to let it through.
///
/// The flag is read on every call.
pub fn maintenance_gate(config: &dyn ConfigProvider, path: &str) -> Option<MaintenanceNotice> {
    if MAINTENANCE_OPEN_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
    {
        return None;
    }
    if !maintenance_enabled(config) {
        return None;
    }
    tracing::debug!(path, "request blocked by maintenance mode");
    Some(MaintenanceNotice::default())
}
