//! Quad-structure seed finding.
//!
//! Four structures share a farm's activation area when the attempts of four
//! touching regions land next to the shared corner. Positions depend only on
//! the low 48 seed bits and are linear in the region coordinates, so
//! candidates found near the origin translate everywhere; the modular
//! arithmetic of the position PRNG further restricts viable bases to a small
//! set of low-20-bit residues.

use std::sync::atomic::{AtomicBool, Ordering};

use lodestone_registry::McVersion;
use lodestone_registry::biome_id::SWAMP;
use lodestone_utils::random::legacy_random::{MASK48, first_int24, second_int24};
use tracing::debug;

use crate::BiomeCache;
use crate::generator::{Dimension, Generator, GeneratorFlags};
use crate::layers::{get_chunk_seed, get_layer_salt, get_start_seed, mc_first_int};

use super::{FEATURE_CONFIG, Pos, SWAMP_HUT_CONFIG, StructureConfig, move_structure, region_seed, structure_pos};

/// Lower 20 bits of the very best constellations (structure salt must be
/// subtracted before use).
pub const LOW20_QUAD_IDEAL: [u64; 3] = [0x43F18, 0xC751A, 0xF520A];

/// Lower 20 bits of the classic quad constellations.
pub const LOW20_QUAD_CLASSIC: [u64; 4] = [0x43F18, 0x79A0A, 0xC751A, 0xF520A];

/// Constellations fitting a (7+1, 7+43+1, 9+1) fall-damage farm volume.
pub const LOW20_QUAD_HUT_NORMAL: [u64; 10] = [
    0x43F18, 0x65118, 0x75618, 0x79A0A, 0x89718, 0x9371A, 0xA5A08, 0xB5E18, 0xC751A, 0xF520A,
];

/// Constellations fitting a (7+1, 7+1, 9+1) farm volume without drop chute.
pub const LOW20_QUAD_HUT_BARELY: [u64; 28] = [
    0x1272D, 0x17908, 0x367B9, 0x43F18, 0x487C9, 0x487CE, 0x50AA7, 0x647B5, 0x65118, 0x75618,
    0x79A0A, 0x89718, 0x9371A, 0x967EC, 0xA3D0A, 0xA5918, 0xA591D, 0xA5A08, 0xB5E18, 0xC6749,
    0xC6D9A, 0xC751A, 0xD7108, 0xD717A, 0xE2739, 0xE9918, 0xEE1C4, 0xF520A,
];

/// Constellation quality band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadConstellation {
    /// Only the very best constellations.
    Ideal,
    /// The classic set.
    Classic,
    /// Fall-damage farm constellations.
    HutNormal,
    /// Any constellation that still fits a farm volume.
    HutBarely,
}

impl QuadConstellation {
    /// The low-20-bit residues of this band.
    #[must_use]
    pub fn low20(self) -> &'static [u64] {
        match self {
            Self::Ideal => &LOW20_QUAD_IDEAL,
            Self::Classic => &LOW20_QUAD_CLASSIC,
            Self::HutNormal => &LOW20_QUAD_HUT_NORMAL,
            Self::HutBarely => &LOW20_QUAD_HUT_BARELY,
        }
    }
}

// direction checks: each corner region must place its attempt in the chunk
// band next to the shared corner

fn check_br(out: &mut [Pos; 4], x: i32, z: i32, seed: u64, salt: u64, upper: i32) -> bool {
    let s = region_seed(seed, salt, x, z);
    let px = first_int24(s);
    if px >= upper {
        let pz = second_int24(s);
        if pz >= upper {
            out[0] = Pos {
                x: (x * 32 + px) * 16,
                z: (z * 32 + pz) * 16,
            };
            return true;
        }
    }
    false
}

fn check_bl(out: &mut [Pos; 4], x: i32, z: i32, seed: u64, salt: u64, lower: i32, upper: i32) -> bool {
    let s = region_seed(seed, salt, x, z);
    let px = first_int24(s);
    if px <= lower {
        let pz = second_int24(s);
        if pz >= upper {
            out[1] = Pos {
                x: (x * 32 + px) * 16,
                z: (z * 32 + pz) * 16,
            };
            return true;
        }
    }
    false
}

fn check_tr(out: &mut [Pos; 4], x: i32, z: i32, seed: u64, salt: u64, lower: i32, upper: i32) -> bool {
    let s = region_seed(seed, salt, x, z);
    let px = first_int24(s);
    if px >= upper {
        let pz = second_int24(s);
        if pz <= lower {
            out[2] = Pos {
                x: (x * 32 + px) * 16,
                z: (z * 32 + pz) * 16,
            };
            return true;
        }
    }
    false
}

fn check_tl(out: &mut [Pos; 4], x: i32, z: i32, seed: u64, salt: u64, lower: i32) -> bool {
    let s = region_seed(seed, salt, x, z);
    let px = first_int24(s);
    if px <= lower {
        let pz = second_int24(s);
        if pz <= lower {
            out[3] = Pos {
                x: (x * 32 + px) * 16,
                z: (z * 32 + pz) * 16,
            };
            return true;
        }
    }
    false
}

/// Whether `seed` places the four attempts of the regions sharing the corner
/// of `(rx, rz)` and `(rx+1, rz+1)` within `quality` chunks of that corner;
/// fills the block positions on success.
#[must_use]
pub fn is_quad_base(sc: StructureConfig, seed: u64, rx: i32, rz: i32, quality: i32, pos: &mut [Pos; 4]) -> bool {
    let lower = quality;
    let upper = 23 - quality;
    check_br(pos, rx, rz, seed, sc.salt, upper)
        && check_bl(pos, rx + 1, rz, seed, sc.salt, lower, upper)
        && check_tr(pos, rx, rz + 1, seed, sc.salt, lower, upper)
        && check_tl(pos, rx + 1, rz + 1, seed, sc.salt, lower)
}

/// A quad-structure candidate: the 48-bit base and the four block positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadCandidate {
    /// 48-bit base seed.
    pub base: u64,
    /// Structure block positions (BR of the NW region first).
    pub pos: [Pos; 4],
}

/// Scan base seeds from `start_seed` upward for the next one placing four
/// attempts around any region corner within `region_radius` of the origin.
/// The returned base is translated so its constellation sits at the origin
/// corner; positions are checked with the pre-1.13 shared feature salt.
#[must_use]
pub fn find_quad_candidate(start_seed: u64, region_radius: i32, quality: i32) -> QuadCandidate {
    let sc = FEATURE_CONFIG;
    let mut pos = [Pos::default(); 4];
    let mut seed = start_seed & MASK48;
    loop {
        for rz in -region_radius..region_radius {
            for rx in -region_radius..region_radius {
                if is_quad_base(sc, seed, rx, rz, quality, &mut pos) {
                    let base = move_structure(seed, -rx, -rz);
                    let ok = is_quad_base(sc, base, 0, 0, quality, &mut pos);
                    debug_assert!(ok, "translation must preserve the constellation");
                    return QuadCandidate { base, pos };
                }
            }
        }
        seed = (seed + 1) & MASK48;
    }
}

/// Brute-force the 48-bit base space for quad constellations of `sc`,
/// restricted to the low-20-bit residues of `set`. Work is partitioned over
/// `threads` scoped workers; `stop` cancels cooperatively between buckets.
#[must_use]
pub fn search_quad_bases(
    sc: StructureConfig,
    set: QuadConstellation,
    quality: i32,
    threads: usize,
    stop: &AtomicBool,
) -> Vec<u64> {
    const HI_BITS: u64 = 1 << 28;
    let threads = threads.max(1) as u64;
    let lows = set.low20();

    let mut results: Vec<u64> = std::thread::scope(|scope| {
        let mut handles = Vec::new();
        for t in 0..threads {
            let lo_list = lows;
            let handle = scope.spawn(move || {
                let mut found = Vec::new();
                let mut pos = [Pos::default(); 4];
                let begin = HI_BITS * t / threads;
                let end = HI_BITS * (t + 1) / threads;
                for hi in begin..end {
                    if hi & 0xFFFF == 0 && stop.load(Ordering::Relaxed) {
                        break;
                    }
                    for &low in lo_list {
                        let base = ((hi << 20) | low).wrapping_sub(sc.salt) & MASK48;
                        if is_quad_base(sc, base, 0, 0, quality, &mut pos) {
                            found.push(base);
                        }
                    }
                }
                found
            });
            handles.push(handle);
        }
        handles
            .into_iter()
            .flat_map(|h| h.join().expect("quad search worker panicked"))
            .collect()
    });

    results.sort_unstable();
    debug!(count = results.len(), "quad base search finished");
    results
}

/// A fully validated quad-hut seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadHutSeed {
    /// Full 64-bit world seed.
    pub seed: u64,
    /// The four hut block positions.
    pub pos: [Pos; 4],
}

/// Sweep the 16 high bits of a quad base translated to the region corner
/// `(reg_x, reg_z)`, returning the seeds whose huts all land in swamp.
///
/// Early exits follow the PRNG algebra: the biome-layer chunk seed must be
/// able to produce the swamp pick at the south-east 1:256 cell, and a base
/// that shows no hits by extension 0xfff with a weak neighborhood score is
/// abandoned.
#[must_use]
pub fn find_quad_hut_seeds(
    mc: McVersion,
    candidate: u64,
    reg_x: i32,
    reg_z: i32,
    limit: usize,
) -> Vec<QuadHutSeed> {
    let sc = if mc >= McVersion::V1_13 {
        SWAMP_HUT_CONFIG
    } else {
        FEATURE_CONFIG
    };
    let base = move_structure(candidate, reg_x, reg_z);

    let qpos = [
        structure_pos(sc, base, reg_x, reg_z),
        structure_pos(sc, base, reg_x, reg_z + 1),
        structure_pos(sc, base, reg_x + 1, reg_z),
        structure_pos(sc, base, reg_x + 1, reg_z + 1),
    ];

    let area_x = (reg_x << 1) + 1;
    let area_z = (reg_z << 1) + 1;
    let ls_biome = get_layer_salt(200);

    // The swamp pick is independent of the surroundings, and the "mod 6"
    // draw has a period pattern of ~3 over the high seed bits, so a few
    // probes decide whether this base can produce swamps here at all.
    let mut probe_hit = false;
    for j in 0..5u64 {
        let seed = base.wrapping_add((j + 0x53) << 48);
        let ss = get_start_seed(seed, ls_biome);
        let cs = get_chunk_seed(ss, area_x + 1, area_z + 1);
        if mc_first_int(cs, 6) == 5 {
            probe_hit = true;
            break;
        }
    }
    if !probe_hit {
        return Vec::new();
    }

    let mut g = Generator::new(mc, GeneratorFlags::NONE);
    let mut sieve = Generator::new(mc, GeneratorFlags::NONE);
    let mut sieve_cache = BiomeCache::default();
    let mut point_cache = BiomeCache::default();
    let mut hits = Vec::new();

    for j in 0..0x10000u64 {
        let seed = base.wrapping_add(j << 48);

        let ss = get_start_seed(seed, ls_biome);
        let cs = get_chunk_seed(ss, area_x + 1, area_z + 1);
        if mc_first_int(cs, 6) != 5 {
            continue;
        }

        // few hits so far: gauge the neighborhood's swamp potential before
        // committing to the remaining extensions
        if hits.is_empty() && (j & 0xFFF) == 0xFFF {
            let mut swpc = 0;
            for (dx, dz) in [(0, 1), (1, 0), (0, 0)] {
                let cs = get_chunk_seed(ss, area_x + dx, area_z + dz);
                swpc += i32::from(mc_first_int(cs, 6) == 5);
            }
            if swpc < if j > 0x1000 { 2 } else { 1 } {
                break;
            }
        }

        // dismiss seeds without a swamp at the 1:256 south-east cell
        if let Some(stack) = sieve.layer_stack_mut() {
            let entry = stack.entry_256;
            stack.set_seed_sub(entry, seed);
            let need = stack.min_cache_size(entry, 1, 1);
            sieve_cache.ensure_len(need);
            let out = sieve_cache.as_mut_slice();
            stack.gen_area(entry, out, (reg_x << 1) + 2, (reg_z << 1) + 2, 1, 1);
            if out[0] != SWAMP {
                continue;
            }
        }

        // full biome validation at the four hut centers
        g.apply_seed(Dimension::Overworld, seed);
        let mut ok = true;
        for p in &qpos {
            let id = g
                .biome_at_cached(&mut point_cache, 4, (p.x + 8) / 4, 0, (p.z + 8) / 4)
                .unwrap_or(lodestone_registry::NONE);
            if id != SWAMP {
                ok = false;
                break;
            }
        }
        if !ok {
            continue;
        }

        hits.push(QuadHutSeed { seed, pos: qpos });
        if hits.len() >= limit {
            break;
        }
    }

    hits
}

/// Validate one full seed: all four huts of the candidate translated to
/// `(reg_x, reg_z)` sit in swamp at 1:4.
#[must_use]
pub fn quad_hut_viable(mc: McVersion, seed: u64, reg_x: i32, reg_z: i32) -> bool {
    let sc = if mc >= McVersion::V1_13 {
        SWAMP_HUT_CONFIG
    } else {
        FEATURE_CONFIG
    };
    let mut g = Generator::new(mc, GeneratorFlags::NONE);
    g.apply_seed(Dimension::Overworld, seed);
    let mut cache = BiomeCache::default();
    for (dx, dz) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
        let p = structure_pos(sc, seed, reg_x + dx, reg_z + dz);
        let id = g
            .biome_at_cached(&mut cache, 4, (p.x + 8) / 4, 0, (p.z + 8) / 4)
            .unwrap_or(lodestone_registry::NONE);
        if id != SWAMP {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_low20_residues_are_quad_bases() {
        // every residue of the classic table admits a quad layout for some
        // high bits; verify the checks accept the canonical example
        let mut pos = [Pos::default(); 4];
        let mut found = false;
        for hi in 0..2048u64 {
            let base = ((hi << 20) | 0x43F18).wrapping_sub(FEATURE_CONFIG.salt) & MASK48;
            if is_quad_base(FEATURE_CONFIG, base, 0, 0, 2, &mut pos) {
                found = true;
                break;
            }
        }
        assert!(found, "no quad base in the first 2048 high extensions");
    }

    #[test]
    fn candidate_positions_hug_the_region_corner() {
        let c = find_quad_candidate(0, 1, 2);
        // all four huts lie within a 512-block square around the corner
        let min_x = c.pos.iter().map(|p| p.x).min().expect("4 positions");
        let max_x = c.pos.iter().map(|p| p.x).max().expect("4 positions");
        let min_z = c.pos.iter().map(|p| p.z).min().expect("4 positions");
        let max_z = c.pos.iter().map(|p| p.z).max().expect("4 positions");
        assert!(max_x - min_x <= 512, "x spread {}", max_x - min_x);
        assert!(max_z - min_z <= 512, "z spread {}", max_z - min_z);
    }

    #[test]
    fn translation_consistency() {
        let c = find_quad_candidate(0, 1, 1);
        let moved = move_structure(c.base, 5, -7);
        let mut pos = [Pos::default(); 4];
        assert!(is_quad_base(FEATURE_CONFIG, moved, 5, -7, 1, &mut pos));
        for (a, b) in pos.iter().zip(c.pos.iter()) {
            assert_eq!(a.x - b.x, 5 * 512);
            assert_eq!(a.z - b.z, -7 * 512);
        }
    }
}
