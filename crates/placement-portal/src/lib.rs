//! Portal services around the analytics pipeline.
//!
//! Settings come from a [`ConfigProvider`] at call time; the sign-in flow
//! keeps accounts in an injectable [`UserStore`]; dashboard counters come
//! from a [`SheetSource`].

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod maintenance;
pub mod sheets;

pub use auth::{AuthState, InMemoryUserStore, LecturerSession, UserStore, register};
pub use config::{ConfigProvider, EnvConfig, PortalSettings, StaticConfig};
pub use dashboard::{
    Dashboard, DashboardStats, MENTOR_SHEET, Notice, NoticeLevel, STUDENT_SHEET,
    collect_dashboard_stats,
};
pub use error::{PortalError, Result};
pub use maintenance::{MAINTENANCE_OPEN_PREFIXES, MaintenanceNotice, maintenance_gate};
pub use sheets::{AuthorizedSheets, LocalSheets, ServiceAccount, SheetSource};
