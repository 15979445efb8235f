//! Picker configuration.
//!
//! The host may narrow every selection to an explicit set of levels through
//! the `SDK_REGISTRY_ENABLED_SDKS` environment variable, e.g.
//! `SDK_REGISTRY_ENABLED_SDKS=28,33,34`.

use std::collections::BTreeSet;
use std::env::{self, VarError};

use sdk_api::ApiLevel;

use crate::ConfigError;

/// Environment variable holding the comma-separated enabled levels.
pub const ENABLED_SDKS_VAR: &str = "SDK_REGISTRY_ENABLED_SDKS";

/// Settings applied to every [`SdkPicker`](crate::SdkPicker) selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PickerConfig {
    /// When set, only these levels survive selection.
    pub enabled: Option<BTreeSet<ApiLevel>>,
}

impl PickerConfig {
    /// Read the configuration from the process environment.
    ///
    /// An unset or blank variable means no filter.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_var(env::var(ENABLED_SDKS_VAR))
    }

    fn from_var(value: Result<String, VarError>) -> Result<Self, ConfigError> {
        match value {
            Ok(value) => Self::parse_enabled(&value),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(raw)) => Err(ConfigError::InvalidApiLevel {
                var: ENABLED_SDKS_VAR,
                entry: raw.to_string_lossy().into_owned(),
            }),
        }
    }

    /// Parse a comma-separated list of levels. Blank entries are skipped.
    pub fn parse_enabled(value: &str) -> Result<Self, ConfigError> {
        let mut enabled = BTreeSet::new();
        for entry in value.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let raw: u32 = entry.parse().map_err(|_| ConfigError::InvalidApiLevel {
                var: ENABLED_SDKS_VAR,
                entry: entry.to_owned(),
            })?;
            enabled.insert(ApiLevel::new(raw));
        }

        if enabled.is_empty() {
            return Ok(Self::default());
        }
        tracing::debug!(count = enabled.len(), "restricting selection to enabled SDKs");
        Ok(PickerConfig {
            enabled: Some(enabled),
        })
    }

    /// Restrict selection to `levels`.
    pub fn with_enabled(levels: impl IntoIterator<Item = ApiLevel>) -> Self {
        PickerConfig {
            enabled: Some(levels.into_iter().collect()),
        }
    }

    /// Whether `api_level` passes the enabled filter.
    pub fn is_enabled(&self, api_level: ApiLevel) -> bool {
        match &self.enabled {
            Some(enabled) => enabled.contains(&api_level),
            None => true,
        }
    }
}
