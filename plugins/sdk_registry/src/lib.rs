//! Registry of runtime SDKs.
//!
//! The host builds one [`SdkRegistry`] at startup from an
//! [`SdkSource`](sdk_api::SdkSource) and shares it as `Arc<SdkRegistry>`
//! with every component that resolves or enumerates runtime targets.
//!
//! # Architecture
//!
//! ```text
//! SdkSource ──(once)──► SdkRegistry ──► get / max_supported / supported
//!                            │
//!                            └──► SdkPicker (+ PickerConfig) ──► select
//! ```
//!
//! # Lifecycle
//!
//! A registry is either still being built (inside [`SdkRegistry::new`]) or
//! ready. Construction either returns a fully indexed, immutable registry or
//! an error; there is no half-built state and nothing to reset.

mod collection;
mod config;
mod errors;
mod picker;

use std::sync::Once;

pub use collection::SdkRegistry;
pub use config::{PickerConfig, ENABLED_SDKS_VAR};
pub use errors::{BuildError, ConfigError, NoSupportedSdk, PickError};
pub use picker::{AppSdk, SdkPicker, SdkRequest, SdkSpec};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=sdk_registry=debug`. Leaves an already-installed global
/// subscriber in place.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
