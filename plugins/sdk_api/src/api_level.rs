//! Integer API level identifying an SDK.

use std::fmt;

/// Integer identifier naming one runtime target variant.
///
/// Ordering follows the numeric value, so sorted collections of levels
/// run from oldest to newest.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiLevel(u32);

impl ApiLevel {
    /// Create an API level from its numeric value.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        ApiLevel(raw)
    }

    /// Get the numeric value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for ApiLevel {
    #[inline]
    fn from(raw: u32) -> Self {
        ApiLevel(raw)
    }
}

impl fmt::Display for ApiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_numerically() {
        let mut levels = vec![ApiLevel::new(30), ApiLevel::new(9), ApiLevel::new(21)];
        levels.sort();
        assert_eq!(
            levels,
            vec![ApiLevel::new(9), ApiLevel::new(21), ApiLevel::new(30)]
        );
    }

    #[test]
    fn displays_bare_number() {
        assert_eq!(ApiLevel::new(1234).to_string(), "1234");
        assert_eq!(ApiLevel::from(7).raw(), 7);
    }
}
