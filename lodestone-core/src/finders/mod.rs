//! Seed finding: structure-region algebra, quad-structure candidates, the
//! all-biomes sieve, strongholds and end gateways.
//!
//! Rare seeds are found by testing the cheapest conditions first; biome
//! checks are expensive and run last, after the PRNG algebra has ruled out
//! the vast majority of candidates.

pub mod compact;
pub mod gateway;
pub mod quad;
pub mod stronghold;

use lodestone_utils::random::legacy_random::MASK48;
use lodestone_utils::random::{LegacyRandom, Random};
use serde::{Deserialize, Serialize};

/// Linear region-to-seed factor for the x direction.
pub const REGION_SEED_X: i64 = 341873128712;
/// Linear region-to-seed factor for the z direction.
pub const REGION_SEED_Z: i64 = 132897987541;

/// A block position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pos {
    /// Block x.
    pub x: i32,
    /// Block z.
    pub z: i32,
}

/// A 3D block position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pos3 {
    /// Block x.
    pub x: i32,
    /// Block y.
    pub y: i32,
    /// Block z.
    pub z: i32,
}

/// How a structure's in-region position is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosStyle {
    /// Two uniform draws.
    Linear,
    /// Two triangular draws, averaged (large structures).
    Triangular,
    /// One attempt per chunk.
    Chunk,
}

/// Region-grid placement parameters of a structure type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureConfig {
    /// Seed salt.
    pub salt: u64,
    /// Region edge in chunks.
    pub region_size: i32,
    /// Chunks of the region eligible for the attempt.
    pub chunk_range: i32,
    /// Draw style.
    pub style: PosStyle,
}

impl StructureConfig {
    const fn new(salt: u64, region_size: i32, chunk_range: i32, style: PosStyle) -> Self {
        Self {
            salt,
            region_size,
            chunk_range,
            style,
        }
    }
}

/// Shared feature salt of the pre-1.13 scattered structures.
pub const FEATURE_CONFIG: StructureConfig =
    StructureConfig::new(14357617, 32, 24, PosStyle::Linear);
/// Desert pyramids (1.13+).
pub const DESERT_PYRAMID_CONFIG: StructureConfig =
    StructureConfig::new(14357617, 32, 24, PosStyle::Linear);
/// Igloos (1.13+).
pub const IGLOO_CONFIG: StructureConfig = StructureConfig::new(14357618, 32, 24, PosStyle::Linear);
/// Jungle pyramids (1.13+).
pub const JUNGLE_PYRAMID_CONFIG: StructureConfig =
    StructureConfig::new(14357619, 32, 24, PosStyle::Linear);
/// Swamp huts (1.13+).
pub const SWAMP_HUT_CONFIG: StructureConfig =
    StructureConfig::new(14357620, 32, 24, PosStyle::Linear);
/// Pillager outposts.
pub const OUTPOST_CONFIG: StructureConfig =
    StructureConfig::new(165745296, 32, 24, PosStyle::Linear);
/// Villages.
pub const VILLAGE_CONFIG: StructureConfig =
    StructureConfig::new(10387312, 32, 24, PosStyle::Linear);
/// Ocean monuments.
pub const MONUMENT_CONFIG: StructureConfig =
    StructureConfig::new(10387313, 32, 27, PosStyle::Triangular);
/// Woodland mansions.
pub const MANSION_CONFIG: StructureConfig =
    StructureConfig::new(10387319, 80, 60, PosStyle::Triangular);
/// Buried treasure.
pub const TREASURE_CONFIG: StructureConfig = StructureConfig::new(10387320, 1, 1, PosStyle::Chunk);
/// End gateways (1.16+).
pub const END_GATEWAY_CONFIG: StructureConfig =
    StructureConfig::new(40013, 1, 1, PosStyle::Chunk);
/// End gateways (1.13 – 1.15).
pub const END_GATEWAY_CONFIG_115: StructureConfig =
    StructureConfig::new(30000, 1, 1, PosStyle::Chunk);

/// The 48-bit seed governing structure placement in region `(rx, rz)`.
#[inline]
#[must_use]
pub fn region_seed(seed: u64, salt: u64, rx: i32, rz: i32) -> u64 {
    (i64::from(rx)
        .wrapping_mul(REGION_SEED_X)
        .wrapping_add(i64::from(rz).wrapping_mul(REGION_SEED_Z)) as u64)
        .wrapping_add(seed)
        .wrapping_add(salt)
}

/// Translate a base seed so its structure constellation moves by
/// `(drx, drz)` regions.
#[inline]
#[must_use]
pub fn move_structure(base: u64, drx: i32, drz: i32) -> u64 {
    base.wrapping_sub(i64::from(drx).wrapping_mul(REGION_SEED_X) as u64)
        .wrapping_sub(i64::from(drz).wrapping_mul(REGION_SEED_Z) as u64)
        & MASK48
}

/// Block position of the structure attempt in region `(rx, rz)`.
#[must_use]
pub fn structure_pos(sc: StructureConfig, seed: u64, rx: i32, rz: i32) -> Pos {
    match sc.style {
        PosStyle::Linear => {
            let mut rng = LegacyRandom::from_seed(region_seed(seed, sc.salt, rx, rz));
            let cx = rng.next_i32_bounded(sc.chunk_range);
            let cz = rng.next_i32_bounded(sc.chunk_range);
            Pos {
                x: (rx * sc.region_size + cx) << 4,
                z: (rz * sc.region_size + cz) << 4,
            }
        }
        PosStyle::Triangular => {
            let mut rng = LegacyRandom::from_seed(region_seed(seed, sc.salt, rx, rz));
            let cx = (rng.next_i32_bounded(sc.chunk_range) + rng.next_i32_bounded(sc.chunk_range))
                / 2;
            let cz = (rng.next_i32_bounded(sc.chunk_range) + rng.next_i32_bounded(sc.chunk_range))
                / 2;
            Pos {
                x: (rx * sc.region_size + cx) << 4,
                z: (rz * sc.region_size + cz) << 4,
            }
        }
        PosStyle::Chunk => Pos {
            x: (rx * sc.region_size) << 4,
            z: (rz * sc.region_size) << 4,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_translation_moves_the_constellation() {
        let seed = 0x00DE_AD48_1234;
        let p0 = structure_pos(SWAMP_HUT_CONFIG, seed, 0, 0);
        let moved = move_structure(seed, 3, -2);
        let p1 = structure_pos(SWAMP_HUT_CONFIG, moved, 3, -2);
        assert_eq!(p1.x - p0.x, 3 * 32 * 16);
        assert_eq!(p1.z - p0.z, -2 * 32 * 16);
    }

    #[test]
    fn positions_stay_in_the_eligible_band() {
        for seed in [0u64, 1, 99999, 0xFFFF_FFFF] {
            for r in -3..3 {
                let p = structure_pos(FEATURE_CONFIG, seed, r, -r);
                let cx = (p.x >> 4) - r * 32;
                assert!((0..24).contains(&cx), "chunk x {cx}");
            }
        }
    }

    #[test]
    fn triangular_positions_bias_toward_the_middle() {
        let mut acc = 0i64;
        const N: u64 = 512;
        for seed in 0..N {
            let p = structure_pos(MONUMENT_CONFIG, seed, 0, 0);
            acc += i64::from(p.x >> 4);
        }
        let mean = acc as f64 / N as f64;
        assert!((mean - 13.0).abs() < 2.0, "mean chunk {mean}");
    }
}
