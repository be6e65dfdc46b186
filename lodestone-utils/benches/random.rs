#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use lodestone_utils::random::legacy_random::{first_int24, second_int24, skip_n};
use lodestone_utils::random::{LegacyRandom, Random, Xoroshiro};
use std::hint::black_box;

fn bench_legacy(c: &mut Criterion) {
    c.bench_function("legacy_next_int", |b| {
        let mut rng = LegacyRandom::from_seed(0x5EED);
        b.iter(|| black_box(rng.next_i32_bounded(black_box(24))));
    });

    c.bench_function("legacy_skip_64k", |b| {
        let mut s = 0x1234_5678u64;
        b.iter(|| {
            s = skip_n(black_box(s), 0x10000);
            black_box(s)
        });
    });

    c.bench_function("legacy_int24_pair", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(first_int24(seed) + second_int24(seed))
        });
    });
}

fn bench_xoroshiro(c: &mut Criterion) {
    c.bench_function("xoroshiro_next_long", |b| {
        let mut xr = Xoroshiro::from_seed(0x5EED);
        b.iter(|| black_box(xr.next_long()));
    });

    c.bench_function("xoroshiro_next_int", |b| {
        let mut xr = Xoroshiro::from_seed(0x5EED);
        b.iter(|| black_box(xr.next_i32_bounded(black_box(299_999))));
    });
}

criterion_group!(benches, bench_legacy, bench_xoroshiro);
criterion_main!(benches);
