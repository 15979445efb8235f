//! The external collaborator that supplies descriptors.

use std::convert::Infallible;
use std::sync::Arc;

use crate::Sdk;

/// Supplies the full, unordered set of SDK descriptors.
///
/// A registry calls [`SdkSource::sdks`] exactly once, while it is being
/// built. Returned levels must be unique.
pub trait SdkSource {
    /// Failure while producing descriptors. Passed through to the caller
    /// building the registry as-is.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Produce every descriptor this source knows about.
    fn sdks(&self) -> Result<Vec<Arc<dyn Sdk>>, Self::Error>;
}

/// Any infallible closure producing descriptors is a source.
impl<F> SdkSource for F
where
    F: Fn() -> Vec<Arc<dyn Sdk>>,
{
    type Error = Infallible;

    fn sdks(&self) -> Result<Vec<Arc<dyn Sdk>>, Self::Error> {
        Ok(self())
    }
}
