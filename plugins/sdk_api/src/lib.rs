//! Runtime SDK descriptors and the source that supplies them.
//!
//! An SDK is one runtime target variant, identified by an integer
//! [`ApiLevel`]. Descriptors are provided by the host through an
//! [`SdkSource`] and consumed read-only by the registry.
//!
//! # Architecture
//!
//! ```text
//! SdkSource::sdks()  ->  Vec<Arc<dyn Sdk>>
//!                             │
//!                             ▼
//!                     SdkRef::Known(..)     (stored descriptor)
//!                     SdkRef::Unknown(..)   (placeholder for a lookup miss)
//! ```
//!
//! Callers always receive an [`SdkRef`]; [`SdkRef::is_known`] tells a real
//! descriptor apart from the placeholder.

mod api_level;
mod errors;
mod sdk;
mod sdk_ref;
mod source;
mod unknown;

pub use api_level::ApiLevel;
pub use errors::UnsupportedSdk;
pub use sdk::Sdk;
pub use sdk_ref::SdkRef;
pub use source::SdkSource;
pub use unknown::UnknownSdk;
