//! Validated, indexed collection of SDK descriptors.
//!
//! # Design
//!
//! - Built once from an [`SdkSource`]; the source is never consulted again
//! - `FxHashMap` index for level lookup, sorted `Vec`s for ordered views
//! - No mutation API: a built registry can be shared freely as
//!   `Arc<SdkRegistry>`

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use sdk_api::{ApiLevel, Sdk, SdkRef, SdkSource, UnknownSdk};

use crate::{BuildError, NoSupportedSdk};

/// Registry of every SDK known to the host.
///
/// Lookups never fail: a level with no registered descriptor yields
/// [`SdkRef::Unknown`].
pub struct SdkRegistry {
    /// Descriptors indexed by level.
    by_level: FxHashMap<ApiLevel, Arc<dyn Sdk>>,

    /// All descriptors, ascending by level.
    known: Vec<Arc<dyn Sdk>>,

    /// Supported descriptors, ascending by level.
    supported: Vec<Arc<dyn Sdk>>,
}

impl SdkRegistry {
    /// Pull every descriptor from `source` and index it.
    ///
    /// The source is called exactly once. Fails if two descriptors share a
    /// level or if the source itself fails; no registry is produced then.
    pub fn new<S>(source: &S) -> Result<Self, BuildError<S::Error>>
    where
        S: SdkSource + ?Sized,
    {
        let sdks = source.sdks().map_err(BuildError::Source)?;
        Self::index(sdks)
    }

    /// Index an already-resolved set of descriptors.
    pub fn from_sdks(sdks: Vec<Arc<dyn Sdk>>) -> Result<Self, BuildError> {
        Self::index(sdks)
    }

    fn index<E>(sdks: Vec<Arc<dyn Sdk>>) -> Result<Self, BuildError<E>> {
        let mut by_level: FxHashMap<ApiLevel, Arc<dyn Sdk>> = FxHashMap::default();
        by_level.reserve(sdks.len());

        for sdk in sdks {
            let api_level = sdk.api_level();
            if by_level.insert(api_level, sdk).is_some() {
                tracing::warn!(api_level = api_level.raw(), "duplicate SDK descriptors");
                return Err(BuildError::DuplicateApiLevel { api_level });
            }
        }

        let mut known: Vec<Arc<dyn Sdk>> = by_level.values().cloned().collect();
        known.sort_by_key(|sdk| sdk.api_level());

        let supported: Vec<Arc<dyn Sdk>> = known
            .iter()
            .filter(|sdk| sdk.is_supported())
            .cloned()
            .collect();

        tracing::debug!(
            known = known.len(),
            supported = supported.len(),
            "built SDK registry"
        );
        if supported.is_empty() {
            tracing::warn!(known = known.len(), "no supported SDKs registered");
        }

        Ok(SdkRegistry {
            by_level,
            known,
            supported,
        })
    }

    /// Look up the descriptor for `api_level`.
    ///
    /// Returns the stored descriptor, or a fresh [`UnknownSdk`] placeholder
    /// when the level is not registered.
    pub fn get(&self, api_level: ApiLevel) -> SdkRef {
        if let Some(sdk) = self.by_level.get(&api_level) {
            return SdkRef::Known(Arc::clone(sdk));
        }
        tracing::trace!(api_level = api_level.raw(), "lookup of unregistered SDK");
        SdkRef::Unknown(UnknownSdk::new(api_level))
    }

    /// The supported SDK with the highest level.
    pub fn max_supported(&self) -> Result<SdkRef, NoSupportedSdk> {
        self.supported
            .last()
            .map(|sdk| SdkRef::Known(Arc::clone(sdk)))
            .ok_or(NoSupportedSdk {
                known: self.known.len(),
            })
    }

    /// Supported SDKs, ascending by level.
    ///
    /// The returned vector is a copy; changing it does not affect the registry.
    pub fn supported(&self) -> Vec<SdkRef> {
        to_refs(&self.supported)
    }

    /// Every registered SDK, supported or not, ascending by level.
    pub fn known(&self) -> Vec<SdkRef> {
        to_refs(&self.known)
    }

    /// Registered SDKs with `min <= level <= max`, ascending.
    pub fn known_between(&self, min: ApiLevel, max: ApiLevel) -> Vec<SdkRef> {
        if min > max {
            return Vec::new();
        }
        let start = self.known.partition_point(|sdk| sdk.api_level() < min);
        let end = self.known.partition_point(|sdk| sdk.api_level() <= max);
        to_refs(&self.known[start..end])
    }

    /// The registered SDK with the lowest level.
    pub fn min_known(&self) -> Option<SdkRef> {
        self.known.first().map(|sdk| SdkRef::Known(Arc::clone(sdk)))
    }

    /// The registered SDK with the highest level.
    pub fn max_known(&self) -> Option<SdkRef> {
        self.known.last().map(|sdk| SdkRef::Known(Arc::clone(sdk)))
    }

    #[inline]
    pub fn contains(&self, api_level: ApiLevel) -> bool {
        self.by_level.contains_key(&api_level)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.known.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}

fn to_refs(sdks: &[Arc<dyn Sdk>]) -> Vec<SdkRef> {
    sdks.iter()
        .map(|sdk| SdkRef::Known(Arc::clone(sdk)))
        .collect()
}

impl fmt::Debug for SdkRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let levels = |sdks: &[Arc<dyn Sdk>]| -> Vec<u32> {
            sdks.iter().map(|sdk| sdk.api_level().raw()).collect()
        };
        f.debug_struct("SdkRegistry")
            .field("known", &levels(&self.known))
            .field("supported", &levels(&self.supported))
            .finish()
    }
}
