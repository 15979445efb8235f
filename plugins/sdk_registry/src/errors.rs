//! Error types for building and querying the registry.

use std::convert::Infallible;

use sdk_api::ApiLevel;

/// Failure while building an [`SdkRegistry`](crate::SdkRegistry).
///
/// `E` is the source's own error type; a source that cannot fail uses the
/// default [`Infallible`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError<E = Infallible> {
    /// Two descriptors claimed the same level.
    #[error("duplicate SDKs for API level {api_level}")]
    DuplicateApiLevel { api_level: ApiLevel },

    /// The source failed to produce descriptors.
    #[error(transparent)]
    Source(E),
}

/// The registry holds no supported SDK, so there is no runtime to pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no supported SDK available ({known} known)")]
pub struct NoSupportedSdk {
    /// Number of known (but unsupported) descriptors.
    pub known: usize,
}

/// Failure while selecting the SDKs a test run targets.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PickError {
    #[error("no SDKs are registered")]
    EmptyRegistry,

    #[error("sdk={min} must be <= maxSdk={max}")]
    InvertedRange { min: ApiLevel, max: ApiLevel },

    #[error("Package targetSdkVersion={target} < minSdkVersion={min}")]
    TargetBelowMin { target: ApiLevel, min: ApiLevel },

    #[error("Package targetSdkVersion={target} > maxSdkVersion={max}")]
    TargetAboveMax { target: ApiLevel, max: ApiLevel },
}

/// Malformed picker configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid API level `{entry}` in {var}")]
    InvalidApiLevel { var: &'static str, entry: String },
}
