//! Errors raised by descriptors.

use crate::ApiLevel;

/// A test asked for an SDK that cannot run in this environment.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Failed to create a runtime for {test_name}: {message}")]
pub struct UnsupportedSdk {
    /// Level of the rejected SDK.
    pub api_level: ApiLevel,
    /// Name of the test that requested it.
    pub test_name: String,
    /// The descriptor's own explanation.
    pub message: String,
}
