//! Column resolution for placement analytics.
//!
//! Maps the headers of an uploaded table onto the site, field and score
//! roles through fixed alias lists (Hebrew and English variants).

pub mod aliases;
pub mod error;
pub mod resolver;

pub use aliases::{FIELD_ALIASES, SCORE_ALIASES, SITE_ALIASES, aliases, aliases_for};
pub use error::ResolveError;
pub use resolver::{find_column, resolve_columns};
