//! Selection of the SDKs a test run targets.
//!
//! A request names SDKs by integer level or by one of three markers
//! resolved against the application's declared levels:
//!
//! ```text
//! Oldest -> app min     Target -> app target     Newest -> app max
//! ```
//!
//! # Precedence
//!
//! 1. `min_sdk` / `max_sdk` bounds: every known SDK in the range
//! 2. `all`: every known SDK between the app's min and max
//! 3. no explicit SDKs: the app's target SDK
//! 4. explicit SDKs, each looked up individually
//!
//! The result is then deduplicated, sorted, and filtered by
//! [`PickerConfig::enabled`].

use std::sync::Arc;

use sdk_api::{ApiLevel, SdkRef};

use crate::{PickError, PickerConfig, SdkRegistry};

/// A level as written in a test request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SdkSpec {
    /// An explicit level.
    Level(ApiLevel),
    /// The application's minimum level.
    Oldest,
    /// The application's maximum level.
    Newest,
    /// The application's target level.
    Target,
}

impl From<ApiLevel> for SdkSpec {
    fn from(level: ApiLevel) -> Self {
        SdkSpec::Level(level)
    }
}

/// Levels declared by the application under test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppSdk {
    pub min: ApiLevel,
    pub target: ApiLevel,
    /// Defaults to the newest known SDK when absent.
    pub max: Option<ApiLevel>,
}

/// What a test asks to run against.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SdkRequest {
    pub sdks: Vec<SdkSpec>,
    /// Run against every known SDK the application allows.
    pub all: bool,
    pub min_sdk: Option<SdkSpec>,
    pub max_sdk: Option<SdkSpec>,
}

/// App levels after clamping to the registry's known range.
#[derive(Clone, Copy, Debug)]
struct AppLevels {
    min: ApiLevel,
    target: ApiLevel,
    max: ApiLevel,
}

impl AppLevels {
    fn decode(self, spec: Option<SdkSpec>, default: ApiLevel) -> ApiLevel {
        match spec {
            None => default,
            Some(SdkSpec::Level(level)) => level,
            Some(SdkSpec::Oldest) => self.min,
            Some(SdkSpec::Newest) => self.max,
            Some(SdkSpec::Target) => self.target,
        }
    }
}

/// Picks SDKs from a shared registry.
#[derive(Debug)]
pub struct SdkPicker {
    registry: Arc<SdkRegistry>,
    config: PickerConfig,
}

impl SdkPicker {
    pub fn new(registry: Arc<SdkRegistry>, config: PickerConfig) -> Self {
        SdkPicker { registry, config }
    }

    pub fn registry(&self) -> &Arc<SdkRegistry> {
        &self.registry
    }

    /// Select the SDKs `request` targets for an application declaring `app`.
    ///
    /// Explicitly requested levels that are not registered come back as
    /// [`SdkRef::Unknown`]; callers reject them when verifying support.
    pub fn select(&self, request: &SdkRequest, app: &AppSdk) -> Result<Vec<SdkRef>, PickError> {
        let mut selected = self.configured(request, app)?;
        selected.sort();
        selected.dedup();
        selected.retain(|sdk| self.config.is_enabled(sdk.api_level()));

        tracing::debug!(
            selected = selected.len(),
            filtered = self.config.enabled.is_some(),
            "selected SDKs"
        );
        Ok(selected)
    }

    fn configured(&self, request: &SdkRequest, app: &AppSdk) -> Result<Vec<SdkRef>, PickError> {
        let (Some(min_known), Some(max_known)) =
            (self.registry.min_known(), self.registry.max_known())
        else {
            return Err(PickError::EmptyRegistry);
        };
        let levels = AppLevels {
            min: app.min.max(min_known.api_level()),
            target: app.target.max(min_known.api_level()),
            max: app.max.unwrap_or(max_known.api_level()),
        };

        if request.min_sdk.is_some() || request.max_sdk.is_some() {
            let min = levels.decode(request.min_sdk, levels.min);
            let max = levels.decode(request.max_sdk, levels.max);
            // A single explicit bound past the app's own range selects nothing.
            if min > max && (request.min_sdk.is_none() || request.max_sdk.is_none()) {
                return Ok(Vec::new());
            }
            return self.range(min, max);
        }

        if request.all {
            return self.range(levels.min, levels.max);
        }

        if request.sdks.is_empty() {
            if levels.target < levels.min {
                return Err(PickError::TargetBelowMin {
                    target: levels.target,
                    min: levels.min,
                });
            }
            if levels.target > levels.max {
                return Err(PickError::TargetAboveMax {
                    target: levels.target,
                    max: levels.max,
                });
            }
            return Ok(vec![self.registry.get(levels.target)]);
        }

        Ok(request
            .sdks
            .iter()
            .map(|&spec| self.registry.get(levels.decode(Some(spec), levels.target)))
            .collect())
    }

    fn range(&self, min: ApiLevel, max: ApiLevel) -> Result<Vec<SdkRef>, PickError> {
        if min > max {
            return Err(PickError::InvertedRange { min, max });
        }
        Ok(self.registry.known_between(min, max))
    }
}
