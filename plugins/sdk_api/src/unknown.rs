//! Placeholder returned for lookups of unregistered levels.

use std::path::Path;

use crate::{ApiLevel, Sdk};

/// Descriptor for a level the registry has never heard of.
///
/// Never stored in a registry. Every accessor besides the level returns a
/// placeholder that callers must treat as non-authoritative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnknownSdk {
    api_level: ApiLevel,
}

impl UnknownSdk {
    /// Create a placeholder for `api_level`.
    pub const fn new(api_level: ApiLevel) -> Self {
        UnknownSdk { api_level }
    }
}

impl Sdk for UnknownSdk {
    fn api_level(&self) -> ApiLevel {
        self.api_level
    }

    fn android_version(&self) -> Option<&str> {
        None
    }

    fn android_code_name(&self) -> Option<&str> {
        None
    }

    fn jar_path(&self) -> Option<&Path> {
        None
    }

    fn is_supported(&self) -> bool {
        false
    }

    fn unsupported_message(&self) -> String {
        format!("API level {} is not available", self.api_level)
    }
}
