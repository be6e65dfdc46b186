//! Stronghold positions: the angular ring schedule and the biome-snapped
//! final locations.

use lodestone_registry::biomes::biome_data;
use lodestone_registry::{BiomeId, McVersion, biome_exists, is_oceanic};
use lodestone_utils::random::{LegacyRandom, Random};

use crate::generator::Generator;
use crate::{BiomeCache, GenError, Range};

use super::Pos;

const PI: f64 = std::f64::consts::PI;

/// Whether a biome can host a stronghold: land with positive terrain height
/// for the legacy versions, any overworld land for 1.18+.
#[must_use]
pub fn is_stronghold_biome(mc: McVersion, id: BiomeId) -> bool {
    if !biome_exists(mc, id) {
        return false;
    }
    if mc >= McVersion::V1_18 {
        use lodestone_registry::biome_id::RIVER;
        return !is_oceanic(id) && id != RIVER;
    }
    biome_data(id).is_some_and(|d| d.height > 0.0)
}

/// A pseudo-random in-area biome position: scans the 1:4 cells of the
/// square around the center and reservoir-samples the matching cells.
pub fn find_biome_position(
    g: &Generator,
    cache: &mut BiomeCache,
    rng: &mut LegacyRandom,
    center_x: i32,
    center_z: i32,
    range: i32,
    valid: impl Fn(BiomeId) -> bool,
) -> Result<Option<Pos>, GenError> {
    if range <= 0 {
        return Err(GenError::InvalidArgument("search range must be positive"));
    }
    let x1 = (center_x - range) >> 2;
    let z1 = (center_z - range) >> 2;
    let x2 = (center_x + range) >> 2;
    let z2 = (center_z + range) >> 2;
    let width = x2 - x1 + 1;
    let height = z2 - z1 + 1;

    let r = Range::area(4, x1, z1, width, height);
    cache.ensure_len(g.min_cache_size(&r));
    g.gen_biomes(cache, r)?;

    let mut out = None;
    let mut found = 0;
    for (i, &id) in cache.ids(&r).iter().enumerate() {
        if !valid(id) {
            continue;
        }
        if found == 0 || rng.next_i32_bounded(found + 1) == 0 {
            out = Some(Pos {
                x: (x1 + i as i32 % width) << 2,
                z: (z1 + i as i32 / width) << 2,
            });
        }
        found += 1;
    }
    Ok(out)
}

/// Iterator over a world's strongholds, in generation order.
///
/// The first ring holds 3 strongholds at third-turn angular steps; 1.9+
/// continues outward through 128 strongholds with growing ring sizes. Each
/// call to [`StrongholdIter::next_stronghold`] biome-snaps the next
/// approximate position through the provided generator.
#[derive(Debug, Clone)]
pub struct StrongholdIter {
    /// Accurate position of the current stronghold.
    pub pos: Pos,
    /// Approximate position (±112 blocks) of the next stronghold.
    pub next_approx: Pos,
    /// Stronghold index counter.
    pub index: i32,
    ring_num: i32,
    ring_max: i32,
    ring_idx: i32,
    angle: f64,
    dist: f64,
    rng: LegacyRandom,
    mc: McVersion,
}

impl StrongholdIter {
    /// Seed the iterator and compute the first approximate position.
    #[must_use]
    pub fn new(mc: McVersion, seed: u64) -> Self {
        let mut rng = LegacyRandom::from_seed(seed);
        let angle = 2.0 * PI * rng.next_f64();
        let dist = if mc >= McVersion::V1_9 {
            4.0 * 32.0 + (rng.next_f64() - 0.5) * 32.0 * 2.5
        } else {
            (1.25 + rng.next_f64()) * 32.0
        };

        let next_approx = Pos {
            x: ((angle.cos() * dist).round() as i32) * 16 + 8,
            z: ((angle.sin() * dist).round() as i32) * 16 + 8,
        };

        Self {
            pos: Pos::default(),
            next_approx,
            index: 0,
            ring_num: 0,
            ring_max: 3,
            ring_idx: 0,
            angle,
            dist,
            rng,
            mc,
        }
    }

    /// Total strongholds this version generates.
    #[must_use]
    pub fn count(&self) -> i32 {
        if self.mc >= McVersion::V1_9 { 128 } else { 3 }
    }

    /// Snap the next stronghold to a valid biome and advance the ring
    /// schedule; the generator must be seeded for the overworld of the same
    /// seed. Returns the position, or `None` once all strongholds are
    /// exhausted.
    pub fn next_stronghold(&mut self, g: &Generator) -> Result<Option<Pos>, GenError> {
        if self.index >= self.count() {
            return Ok(None);
        }

        let mc = self.mc;
        let mut cache = BiomeCache::default();
        let snapped = find_biome_position(
            g,
            &mut cache,
            &mut self.rng,
            self.next_approx.x,
            self.next_approx.z,
            112,
            |id| is_stronghold_biome(mc, id),
        )?;
        self.pos = snapped.unwrap_or(self.next_approx);

        // advance the ring schedule
        self.ring_idx += 1;
        self.angle += 2.0 * PI / f64::from(self.ring_max);

        if self.ring_idx == self.ring_max {
            self.ring_num += 1;
            self.ring_idx = 0;
            self.ring_max += 2 * self.ring_max / (self.ring_num + 1);
            if self.ring_max > 128 - self.index {
                self.ring_max = 128 - self.index;
            }
            self.angle += self.rng.next_f64() * PI * 2.0;
        }

        if self.mc >= McVersion::V1_9 {
            self.dist = 4.0 * 32.0
                + 6.0 * f64::from(self.ring_num) * 32.0
                + (self.rng.next_f64() - 0.5) * 32.0 * 2.5;
        } else {
            self.dist = (1.25 + self.rng.next_f64()) * 32.0;
        }

        self.next_approx = Pos {
            x: ((self.angle.cos() * self.dist).round() as i32) * 16 + 8,
            z: ((self.angle.sin() * self.dist).round() as i32) * 16 + 8,
        };
        self.index += 1;

        Ok(Some(self.pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_one_has_three_equal_steps() {
        let mut it = StrongholdIter::new(McVersion::V1_13, 1);
        let a0 = it.angle;
        // the ring schedule advances by 2*pi/3 for the first three
        let step = 2.0 * PI / f64::from(it.ring_max);
        assert!((step - 2.0 * PI / 3.0).abs() < 1e-12);
        assert!(a0.is_finite());
    }

    #[test]
    fn first_approx_is_deterministic() {
        let a = StrongholdIter::new(McVersion::V1_13, 1);
        let b = StrongholdIter::new(McVersion::V1_13, 1);
        assert_eq!(a.next_approx, b.next_approx);
        // ring-1 distance lies in [4*32 - 40, 4*32 + 40] chunks
        let d = f64::from(a.next_approx.x / 16).hypot(f64::from(a.next_approx.z / 16));
        assert!((88.0..=168.1).contains(&d), "distance {d}");
    }

    #[test]
    fn stronghold_biomes_are_land() {
        use lodestone_registry::biome_id::{DEEP_OCEAN, MOUNTAINS, OCEAN, PLAINS, RIVER};
        assert!(is_stronghold_biome(McVersion::V1_13, PLAINS));
        assert!(is_stronghold_biome(McVersion::V1_13, MOUNTAINS));
        assert!(!is_stronghold_biome(McVersion::V1_13, OCEAN));
        assert!(!is_stronghold_biome(McVersion::V1_13, DEEP_OCEAN));
        assert!(!is_stronghold_biome(McVersion::V1_13, RIVER));
    }
}
