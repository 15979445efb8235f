//! Handle returned by every registry lookup.

use std::cmp::Ordering;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::{ApiLevel, Sdk, UnknownSdk, UnsupportedSdk};

/// Either a registered descriptor or the placeholder for a lookup miss.
///
/// Equality and ordering use `(api_level, is_known)`, so sorting a mix of
/// handles orders them by level. Use [`SdkRef::same_as`] for identity.
#[derive(Clone, Debug)]
pub enum SdkRef {
    /// A descriptor stored in the registry.
    Known(Arc<dyn Sdk>),
    /// No descriptor is registered for this level.
    Unknown(UnknownSdk),
}

impl SdkRef {
    /// `false` only for the lookup-miss placeholder.
    #[inline]
    pub fn is_known(&self) -> bool {
        matches!(self, SdkRef::Known(_))
    }

    pub fn api_level(&self) -> ApiLevel {
        self.as_sdk().api_level()
    }

    pub fn is_supported(&self) -> bool {
        self.as_sdk().is_supported()
    }

    pub fn android_version(&self) -> Option<&str> {
        self.as_sdk().android_version()
    }

    pub fn android_code_name(&self) -> Option<&str> {
        self.as_sdk().android_code_name()
    }

    pub fn jar_path(&self) -> Option<&Path> {
        self.as_sdk().jar_path()
    }

    pub fn unsupported_message(&self) -> String {
        self.as_sdk().unsupported_message()
    }

    /// See [`Sdk::verify_supported`].
    pub fn verify_supported(&self, test_name: &str) -> Result<(), UnsupportedSdk> {
        self.as_sdk().verify_supported(test_name)
    }

    /// The stored descriptor, if this is not a placeholder.
    pub fn as_known(&self) -> Option<&Arc<dyn Sdk>> {
        match self {
            SdkRef::Known(sdk) => Some(sdk),
            SdkRef::Unknown(_) => None,
        }
    }

    /// Whether this handle points at exactly `sdk` (pointer identity).
    pub fn same_as(&self, sdk: &Arc<dyn Sdk>) -> bool {
        self.as_known().is_some_and(|known| Arc::ptr_eq(known, sdk))
    }

    /// View either variant through the shared capability set.
    pub fn as_sdk(&self) -> &dyn Sdk {
        match self {
            SdkRef::Known(sdk) => sdk.as_ref(),
            SdkRef::Unknown(unknown) => unknown,
        }
    }

    fn sort_key(&self) -> (ApiLevel, bool) {
        (self.api_level(), self.is_known())
    }
}

impl From<Arc<dyn Sdk>> for SdkRef {
    fn from(sdk: Arc<dyn Sdk>) -> Self {
        SdkRef::Known(sdk)
    }
}

impl From<UnknownSdk> for SdkRef {
    fn from(sdk: UnknownSdk) -> Self {
        SdkRef::Unknown(sdk)
    }
}

impl PartialEq for SdkRef {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for SdkRef {}

impl PartialOrd for SdkRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SdkRef {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl fmt::Display for SdkRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdkRef::Known(sdk) => write!(f, "SDK {}", sdk.api_level()),
            SdkRef::Unknown(sdk) => write!(f, "unknown SDK {}", sdk.api_level()),
        }
    }
}

#[cfg(test)]
mod tests;
