//! The descriptor capability set.

use std::fmt;
use std::path::Path;

use crate::{ApiLevel, UnsupportedSdk};

/// A runtime SDK descriptor supplied by the host.
///
/// The registry only ever reads [`Sdk::api_level`] and [`Sdk::is_supported`];
/// the remaining accessors are passed through to callers untouched.
pub trait Sdk: fmt::Debug + Send + Sync {
    /// The level this descriptor is registered under.
    fn api_level(&self) -> ApiLevel;

    /// Human-facing platform version, e.g. `"14"`.
    fn android_version(&self) -> Option<&str>;

    /// Platform code name, e.g. `"UpsideDownCake"`.
    fn android_code_name(&self) -> Option<&str>;

    /// Location of the backing artifact, if it has been resolved.
    fn jar_path(&self) -> Option<&Path>;

    /// Whether this SDK can be used in the current environment.
    fn is_supported(&self) -> bool;

    /// Why this SDK cannot be used. Only meaningful when unsupported.
    fn unsupported_message(&self) -> String {
        format!("API level {} is not supported", self.api_level())
    }

    /// Fail with [`UnsupportedSdk`] if this SDK cannot run `test_name`.
    fn verify_supported(&self, test_name: &str) -> Result<(), UnsupportedSdk> {
        if self.is_supported() {
            return Ok(());
        }
        Err(UnsupportedSdk {
            api_level: self.api_level(),
            test_name: test_name.to_owned(),
            message: self.unsupported_message(),
        })
    }
}
