#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lodestone_core::finders::quad::{QuadConstellation, is_quad_base};
use lodestone_core::finders::{FEATURE_CONFIG, Pos};
use lodestone_core::{Dimension, Generator, GeneratorFlags, Range};
use lodestone_registry::McVersion;
use std::hint::black_box;

// ── legacy cascade ──────────────────────────────────────────────────────────

fn bench_legacy_region(c: &mut Criterion) {
    let mut group = c.benchmark_group("legacy_1_4_region");
    for mc in [McVersion::V1_7, McVersion::V1_12, McVersion::V1_16] {
        let mut g = Generator::new(mc, GeneratorFlags::NONE);
        g.apply_seed(Dimension::Overworld, 0x5EED);
        let r = Range::area(4, -64, -64, 128, 128);
        let mut cache = g.alloc_cache(&r).expect("cache");

        group.bench_with_input(BenchmarkId::from_parameter(format!("{mc:?}")), &r, |b, &r| {
            b.iter(|| {
                g.gen_biomes(&mut cache, black_box(r)).expect("gen");
            });
        });
    }
    group.finish();
}

fn bench_voronoi_block_scale(c: &mut Criterion) {
    let mut g = Generator::new(McVersion::V1_16, GeneratorFlags::NONE);
    g.apply_seed(Dimension::Overworld, 0x5EED);
    let r = Range::area(1, -32, -32, 64, 64);
    let mut cache = g.alloc_cache(&r).expect("cache");

    c.bench_function("voronoi_1_1_region", |b| {
        b.iter(|| {
            g.gen_biomes(&mut cache, black_box(r)).expect("gen");
        });
    });
}

// ── modern climate ──────────────────────────────────────────────────────────

fn bench_modern_region(c: &mut Criterion) {
    let mut g = Generator::new(McVersion::V1_18, GeneratorFlags::NONE);
    g.apply_seed(Dimension::Overworld, 0x5EED);
    let r = Range::area(4, -32, -32, 64, 64);
    let mut cache = g.alloc_cache(&r).expect("cache");

    c.bench_function("modern_1_4_region", |b| {
        b.iter(|| {
            g.gen_biomes(&mut cache, black_box(r)).expect("gen");
        });
    });
}

fn bench_modern_seeding(c: &mut Criterion) {
    c.bench_function("modern_apply_seed", |b| {
        let mut g = Generator::new(McVersion::V1_18, GeneratorFlags::NONE);
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            g.apply_seed(Dimension::Overworld, black_box(seed));
        });
    });
}

// ── seed finding ────────────────────────────────────────────────────────────

fn bench_quad_base_check(c: &mut Criterion) {
    c.bench_function("quad_base_check", |b| {
        let mut pos = [Pos::default(); 4];
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(is_quad_base(FEATURE_CONFIG, black_box(seed), 0, 0, 1, &mut pos));
        });
    });
}

fn bench_low20_scan(c: &mut Criterion) {
    // one high-bit stripe over the classic constellation residues
    c.bench_function("quad_low20_stripe", |b| {
        let mut pos = [Pos::default(); 4];
        b.iter(|| {
            let mut found = 0u32;
            for hi in 0..4096u64 {
                for &low in QuadConstellation::Classic.low20() {
                    let base = ((hi << 20) | low).wrapping_sub(FEATURE_CONFIG.salt)
                        & ((1u64 << 48) - 1);
                    found += u32::from(is_quad_base(FEATURE_CONFIG, base, 0, 0, 1, &mut pos));
                }
            }
            black_box(found)
        });
    });
}

criterion_group!(
    benches,
    bench_legacy_region,
    bench_voronoi_block_scale,
    bench_modern_region,
    bench_modern_seeding,
    bench_quad_base_check,
    bench_low20_scan,
);
criterion_main!(benches);
