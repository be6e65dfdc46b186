//! Biome generation regression anchors.
//!
//! An avalanche hash over the 1:4 biome output of a seed grid pins the
//! generation of every layered version; any change to a layer's arithmetic,
//! salt or wiring shifts the hash.

use lodestone_core::{BiomeCache, Dimension, Generator, GeneratorFlags};
use lodestone_registry::McVersion;

fn hash32(mut x: u32) -> u32 {
    x ^= x >> 15;
    x = x.wrapping_mul(0xD168_AAAD);
    x ^= x >> 15;
    x = x.wrapping_mul(0xAF72_3597);
    x ^= x >> 15;
    x
}

/// Hash the 1:4 biome at `(x, z)` for seed `(z << bits) ^ x`, across the
/// `2^bits`-wide square centered at the origin.
fn grid_hash(mc: McVersion, bits: u32) -> u32 {
    let mut g = Generator::new(mc, GeneratorFlags::NONE);
    let mut cache = BiomeCache::default();
    let r = 1i32 << (bits - 1);
    let mut h = 0u32;

    for x in -r..r {
        for z in -r..r {
            let s = (z << bits) ^ x;
            g.apply_seed(Dimension::Overworld, s as i64 as u64);
            let id = g
                .biome_at_cached(&mut cache, 4, x, 0, z)
                .expect("1x1 generation");
            h ^= hash32((s ^ (id << (2 * bits))) as u32);
        }
    }
    h
}

fn check_versions(bits: u32, expected: &[(McVersion, u32)]) {
    let mut failures = Vec::new();
    for &(mc, want) in expected {
        let got = grid_hash(mc, bits);
        if got != want {
            failures.push(format!("{mc:?}: expected {want:08x} got {got:08x}"));
        }
    }
    assert!(failures.is_empty(), "hash mismatches:\n{}", failures.join("\n"));
}

#[test]
fn biome_grid_hashes_64() {
    check_versions(
        6,
        &[
            (McVersion::V1_16, 0xDE9A_6574),
            (McVersion::V1_15, 0x3A56_8A6D),
            (McVersion::V1_13, 0x96C9_7323),
            (McVersion::V1_12, 0xBC75_E996),
            (McVersion::V1_9, 0xE27A_45A2),
            (McVersion::V1_7, 0xBC75_E996),
            (McVersion::V1_6, 0x15B4_7206),
        ],
    );
}

#[test]
#[ignore = "thorough: one million seeds per version"]
fn biome_grid_hashes_1024() {
    check_versions(
        10,
        &[
            (McVersion::V1_16, 0xFDED_E71D),
            (McVersion::V1_15, 0xCA80_05D7),
            (McVersion::V1_13, 0x399F_7CC8),
            (McVersion::V1_12, 0xB336_3967),
            (McVersion::V1_9, 0x17E5_592F),
            (McVersion::V1_7, 0xB336_3967),
            (McVersion::V1_6, 0xA52E_377C),
        ],
    );
}
