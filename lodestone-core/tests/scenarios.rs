//! End-to-end scenarios across the PRNG, generators and finders.

use lodestone_core::finders::compact::{Area, CompactSearcher};
use lodestone_core::finders::gateway::linked_gateway;
use lodestone_core::finders::quad::{find_quad_candidate, find_quad_hut_seeds};
use lodestone_core::finders::stronghold::{StrongholdIter, is_stronghold_biome};
use lodestone_core::{BiomeCache, Dimension, Generator, GeneratorFlags, Range};
use lodestone_registry::McVersion;
use lodestone_registry::biomes::biome_data;
use lodestone_utils::random::legacy_random::{set_seed, skip_back_n, skip_n};

#[test]
fn prng_skip_round_trips_over_the_full_range() {
    // advancing N steps and inverting through the modular inverse must
    // recover the state for every N below 2^20
    let s0 = set_seed(12345);
    for n in 0..(1u64 << 20) {
        let s1 = skip_n(s0, n);
        assert_eq!(skip_back_n(s1, n), s0, "n = {n}");
    }
}

#[test]
fn quad_hut_candidate_admits_swamp_extensions() {
    // scan candidates from zero until one passes the biome sieve; the known
    // constellation space is dense enough that this terminates quickly
    let mut start = 0u64;
    let mut found = None;
    for _ in 0..64 {
        let c = find_quad_candidate(start, 1, 2);
        let hits = find_quad_hut_seeds(McVersion::V1_7, c.base, -1, -1, 1);
        if let Some(hit) = hits.first() {
            found = Some((c, *hit));
            break;
        }
        start = c.base + 1;
    }
    let (c, hit) = found.expect("no quad hut seed among the first candidates");

    // the four huts lie in four distinct regions around the shared corner
    let mut regions: Vec<(i32, i32)> = hit
        .pos
        .iter()
        .map(|p| (p.x.div_euclid(512), p.z.div_euclid(512)))
        .collect();
    regions.sort_unstable();
    regions.dedup();
    assert_eq!(regions.len(), 4, "huts must span four regions");

    // positions are consistent under the region translation of the base
    use lodestone_core::finders::move_structure;
    use lodestone_core::finders::quad::quad_hut_viable;
    assert_eq!(hit.seed & ((1u64 << 48) - 1), move_structure(c.base, -1, -1));
    assert!(quad_hut_viable(McVersion::V1_7, hit.seed, -1, -1));
}

#[test]
fn stronghold_ring_one_geometry() {
    let mc = McVersion::V1_13;
    let seed = 1u64;
    let mut g = Generator::new(mc, GeneratorFlags::NONE);
    g.apply_seed(Dimension::Overworld, seed);

    let mut iter = StrongholdIter::new(mc, seed);
    let mut approx = Vec::new();
    let mut snapped = Vec::new();
    for _ in 0..3 {
        approx.push(iter.next_approx);
        let p = iter
            .next_stronghold(&g)
            .expect("generation succeeds")
            .expect("ring one has three strongholds");
        snapped.push(p);
    }

    // the first stronghold lies in a positive-height biome
    let id = g
        .biome_at(4, snapped[0].x >> 2, 0, snapped[0].z >> 2)
        .expect("biome query");
    assert!(is_stronghold_biome(mc, id), "stronghold biome {id}");
    assert!(
        biome_data(id).is_some_and(|d| d.height > 0.0),
        "stronghold biome {id} has non-positive height"
    );

    // the three ring-one approximations step by 2*pi/3 around the origin
    let angles: Vec<f64> = approx
        .iter()
        .map(|p| f64::from(p.z).atan2(f64::from(p.x)))
        .collect();
    for i in 0..3 {
        let mut d = angles[(i + 1) % 3] - angles[i];
        while d < 0.0 {
            d += std::f64::consts::TAU;
        }
        let step = 2.0 * std::f64::consts::PI / 3.0;
        // chunk rounding at ring-one distance gives at most ~0.02 rad slack
        assert!((d - step).abs() < 0.05, "angular step {d}");
    }
}

#[test]
fn gateway_linkage_lands_on_something() {
    let p = linked_gateway(McVersion::V1_16_1, 1);
    assert!(p.y >= 10, "gateway y {}", p.y);
    // the exit lies out along the ray at roughly 1024 blocks
    let d = f64::from(p.x).hypot(f64::from(p.z));
    assert!((700.0..=1400.0).contains(&d), "gateway distance {d}");
}

#[test]
fn all_biomes_filters_imply_the_major_biomes() {
    let area = Area {
        x: -1024,
        z: -1024,
        w: 2048,
        h: 2048,
    };
    let mut searcher = CompactSearcher::new(McVersion::V1_12, area);
    let mut g = Generator::new(McVersion::V1_12, GeneratorFlags::NONE);
    let mut cache = BiomeCache::default();

    for seed in 0..48u64 {
        if !searcher.check(seed) {
            continue;
        }
        // a passing seed must actually show all twelve families at 1:256
        use lodestone_registry::biomes::{BiomeType, biome_type};
        g.apply_seed(Dimension::Overworld, seed);
        let r = Range::area(256, -5, -5, 10, 10);
        cache.ensure_len(g.min_cache_size(&r));
        g.gen_biomes(&mut cache, r).expect("gen");
        let mut types = 0u32;
        for &v in cache.ids(&r) {
            types |= 1 << biome_type(v).index();
        }
        for t in [
            BiomeType::Ocean,
            BiomeType::Swamp,
            BiomeType::Jungle,
            BiomeType::Mesa,
            BiomeType::MushroomIsland,
        ] {
            assert!(types & (1 << t.index()) != 0, "seed {seed} missing {t:?}");
        }
    }
}

#[test]
fn coordinates_far_from_origin_stay_consistent() {
    // halo expansion must not wrap at large magnitudes
    let mut g = Generator::new(McVersion::V1_12, GeneratorFlags::NONE);
    g.apply_seed(Dimension::Overworld, 3);
    for &x in &[i32::MIN / 2, 0, i32::MAX / 2] {
        let a = g.biome_at(256, x / 256, 0, 1000).expect("gen");
        let r = Range::area(256, x / 256 - 1, 999, 3, 3);
        let mut cache = g.alloc_cache(&r).expect("cache");
        g.gen_biomes(&mut cache, r).expect("gen");
        assert_eq!(a, cache.ids(&r)[4], "window dependence at {x}");
    }
}

#[test]
fn voronoi_scale_one_is_window_independent() {
    for mc in [McVersion::V1_14, McVersion::V1_16] {
        let mut g = Generator::new(mc, GeneratorFlags::NONE);
        g.apply_seed(Dimension::Overworld, 0x5EED);

        let r1 = Range::area(1, 13, -7, 9, 9);
        let mut c1 = g.alloc_cache(&r1).expect("cache");
        g.gen_biomes(&mut c1, r1).expect("gen");

        let r2 = Range::area(1, 16, -4, 3, 3);
        let mut c2 = g.alloc_cache(&r2).expect("cache");
        g.gen_biomes(&mut c2, r2).expect("gen");

        for dz in 0..3 {
            for dx in 0..3 {
                let a = c1.ids(&r1)[((dz + 3) * 9 + dx + 3) as usize];
                let b = c2.ids(&r2)[(dz * 3 + dx) as usize];
                assert_eq!(a, b, "{mc:?} at ({dx},{dz})");
            }
        }
    }
}

#[test]
fn large_biomes_flag_changes_the_map() {
    let mut normal = Generator::new(McVersion::V1_12, GeneratorFlags::NONE);
    let mut large = Generator::new(McVersion::V1_12, GeneratorFlags::LARGE_BIOMES);
    normal.apply_seed(Dimension::Overworld, 77);
    large.apply_seed(Dimension::Overworld, 77);

    let r = Range::area(4, -64, -64, 128, 128);
    let mut cn = normal.alloc_cache(&r).expect("cache");
    let mut cl = large.alloc_cache(&r).expect("cache");
    normal.gen_biomes(&mut cn, r).expect("gen");
    large.gen_biomes(&mut cl, r).expect("gen");
    assert_ne!(cn.ids(&r), cl.ids(&r));
}
