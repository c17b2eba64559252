//! Request-boundary view: results or a single error message, never both.

use serde::Serialize;

use placement_core::{AnalyticsError, AnalyticsReport};
use placement_model::ChartSeries;

use crate::tables::TablesView;

/// What the analytics page renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalyticsView {
    Results {
        tables: TablesView,
        charts: ChartSeries,
    },
    Failed {
        error: String,
        error_kind: &'static str,
    },
}

impl AnalyticsView {
    /// Converts a pipeline outcome into something renderable.
    ///
    /// Failures are logged and reduced to their user-facing message.
    pub fn from_outcome(outcome: Result<AnalyticsReport, AnalyticsError>) -> Self {
        match outcome {
            Ok(report) => Self::from_report(&report),
            Err(error) => {
                tracing::warn!(kind = error.kind(), %error, "analytics request failed");
                Self::Failed {
                    error: error.to_string(),
                    error_kind: error.kind(),
                }
            }
        }
    }

    pub fn from_report(report: &AnalyticsReport) -> Self {
        Self::Results {
            tables: TablesView::from_result(&report.binding, &report.result),
            charts: ChartSeries::from_result(&report.result),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Results { .. } => None,
            Self::Failed { error, .. } => Some(error),
        }
    }
}
