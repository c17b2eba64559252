//! Runtime settings read through a pluggable provider.
//!
//! Values are looked up at call time, so a changed environment takes effect
//! on the next request.

use std::collections::BTreeMap;

use placement_model::{AnalyticsOptions, KeyNormalization};

use crate::error::{PortalError, Result};

pub const MAINTENANCE_MODE: &str = "MAINTENANCE_MODE";
pub const LECTURER_SECRET: &str = "LECTURER_SECRET";
pub const GCP_CREDS: &str = "GCP_CREDS";
pub const GCP_CREDS_2: &str = "GCP_CREDS_2";
pub const INSTITUTION_EMAIL_SUFFIX: &str = "INSTITUTION_EMAIL_SUFFIX";
pub const ANALYTICS_MAX_ROWS: &str = "ANALYTICS_MAX_ROWS";
pub const ANALYTICS_KEY_NORMALIZATION: &str = "ANALYTICS_KEY_NORMALIZATION";

pub const DEFAULT_EMAIL_SUFFIX: &str = "@zefat.ac.il";

/// Source of string settings.
pub trait ConfigProvider {
    fn get(&self, key: &str) -> Option<String>;

    /// Like [`get`](Self::get), with empty values treated as unset.
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|value| !value.trim().is_empty())
    }
}

/// Reads the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfig;

impl ConfigProvider for EnvConfig {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed key/value map, mostly for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticConfig {
    values: BTreeMap<String, String>,
}

impl StaticConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }
}

impl ConfigProvider for StaticConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Snapshot of every portal setting.
#[derive(Debug, Clone, PartialEq)]
pub struct PortalSettings {
    pub maintenance_mode: bool,
    /// `None` means no secret is configured; secret checks then always fail.
    pub lecturer_secret: Option<String>,
    pub institution_email_suffix: String,
    pub analytics: AnalyticsOptions,
}

impl PortalSettings {
    pub fn load(config: &dyn ConfigProvider) -> Result<Self> {
        Ok(Self {
            maintenance_mode: maintenance_enabled(config),
            lecturer_secret: config.get_non_empty(LECTURER_SECRET),
            institution_email_suffix: config
                .get_non_empty(INSTITUTION_EMAIL_SUFFIX)
                .map(|suffix| suffix.trim().to_string())
                .unwrap_or_else(|| DEFAULT_EMAIL_SUFFIX.to_string()),
            analytics: analytics_options(config)?,
        })
    }
}

/// Only the exact value `"1"` turns maintenance mode on.
pub fn maintenance_enabled(config: &dyn ConfigProvider) -> bool {
    config.get(MAINTENANCE_MODE).as_deref() == Some("1")
}

/// Analytics ceilings and key handling, defaults for unset keys.
pub fn analytics_options(config: &dyn ConfigProvider) -> Result<AnalyticsOptions> {
    let mut options = AnalyticsOptions::default();
    if let Some(raw) = config.get_non_empty(ANALYTICS_MAX_ROWS) {
        let max_rows = raw
            .trim()
            .parse::<usize>()
            .map_err(|err| PortalError::InvalidSetting {
                key: ANALYTICS_MAX_ROWS,
                value: raw.clone(),
                reason: err.to_string(),
            })?;
        options = options.with_max_rows(max_rows);
    }
    if let Some(raw) = config.get_non_empty(ANALYTICS_KEY_NORMALIZATION) {
        let normalization = raw
            .parse::<KeyNormalization>()
            .map_err(|err| PortalError::InvalidSetting {
                key: ANALYTICS_KEY_NORMALIZATION,
                value: raw.clone(),
                reason: err.to_string(),
            })?;
        options = options.with_key_normalization(normalization);
    }
    Ok(options)
}
