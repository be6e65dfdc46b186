//! Release ordinal.
//!
//! Versions refer to the latest patch of the respective release unless a
//! patch suffix is present (1.16.1 and 1.19.2 shifted generation mid-release
//! and get their own ordinals). Ordering is meaningful: most generation
//! behavior is gated on version ranges.

use serde::{Deserialize, Serialize};

/// Supported releases, oldest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[allow(missing_docs)]
pub enum McVersion {
    B1_7,
    B1_8,
    V1_0,
    V1_1,
    V1_2,
    V1_3,
    V1_4,
    V1_5,
    V1_6,
    V1_7,
    V1_8,
    V1_9,
    V1_10,
    V1_11,
    V1_12,
    V1_13,
    V1_14,
    V1_15,
    V1_16_1,
    V1_16,
    V1_17,
    V1_18,
    V1_19_2,
    V1_19,
    V1_20,
    V1_21,
}

impl McVersion {
    /// Newest supported release.
    pub const NEWEST: Self = Self::V1_21;

    /// Whether this release generates overworld biomes through the layered
    /// cascade.
    #[inline]
    #[must_use]
    pub fn is_layered(self) -> bool {
        (Self::B1_8..=Self::V1_17).contains(&self)
    }

    /// Whether this release generates overworld biomes through the climate
    /// noise pipeline.
    #[inline]
    #[must_use]
    pub fn is_climate(self) -> bool {
        self >= Self::V1_18
    }

    /// Whether this release uses the Beta-era 2D climate biomes.
    #[inline]
    #[must_use]
    pub fn is_beta_climate(self) -> bool {
        self <= Self::B1_7
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_release_history() {
        assert!(McVersion::B1_7 < McVersion::B1_8);
        assert!(McVersion::V1_16_1 < McVersion::V1_16);
        assert!(McVersion::V1_19_2 < McVersion::V1_19);
        assert!(McVersion::V1_17 < McVersion::V1_18);
    }

    #[test]
    fn pipeline_classification_is_total() {
        for v in [
            McVersion::B1_7,
            McVersion::B1_8,
            McVersion::V1_12,
            McVersion::V1_17,
            McVersion::V1_18,
            McVersion::NEWEST,
        ] {
            let kinds =
                u8::from(v.is_layered()) + u8::from(v.is_climate()) + u8::from(v.is_beta_climate());
            assert_eq!(kinds, 1, "{v:?} must belong to exactly one pipeline");
        }
    }
}
