//! Lecturer dashboard counters.

use serde::Serialize;
use tracing::{info, warn};

use crate::config::{GCP_CREDS, GCP_CREDS_2};
use crate::error::PortalError;
use crate::sheets::SheetSource;

pub const STUDENT_SHEET: &str = "שאלון סטודנטים";
pub const MENTOR_SHEET: &str = "מיפוי מדריכים";

/// Headline numbers shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub registered_students: usize,
    pub registered_mentors: usize,
    /// Placeholder until placements are tracked.
    pub success_rate: String,
    pub placements_done: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// One-shot message for the next page view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub notices: Vec<Notice>,
}

/// Reads both sheet counters.
///
/// A failing source contributes zero and an error notice; the dashboard
/// itself always renders.
pub fn collect_dashboard_stats(
    students: &dyn SheetSource,
    mentors: &dyn SheetSource,
) -> Dashboard {
    let mut notices = Vec::new();
    let registered_students =
        count_rows(students, STUDENT_SHEET, "students", GCP_CREDS, &mut notices);
    let registered_mentors =
        count_rows(mentors, MENTOR_SHEET, "mentors", GCP_CREDS_2, &mut notices);
    Dashboard {
        stats: DashboardStats {
            registered_students,
            registered_mentors,
            success_rate: "0%".to_string(),
            placements_done: 0,
        },
        notices,
    }
}

fn count_rows(
    source: &dyn SheetSource,
    title: &str,
    label: &str,
    credentials_var: &str,
    notices: &mut Vec<Notice>,
) -> usize {
    match source.row_count(title) {
        Ok(rows) => {
            info!(sheet = label, rows, "sheet rows counted");
            rows
        }
        Err(error) => {
            warn!(sheet = label, %error, "sheet unavailable, counting zero");
            let message = match error {
                PortalError::SheetNotFound { .. } => {
                    format!("could not find the {label} sheet '{title}'")
                }
                _ => format!(
                    "failed to read the {label} sheet; check the permissions for {credentials_var}"
                ),
            };
            notices.push(Notice::error(message));
            0
        }
    }
}
