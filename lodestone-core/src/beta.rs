//! Beta-era (≤ Beta 1.7) biome generation: 2D simplex-octave temperature
//! and rainfall looked up through the era's threshold table, plus the
//! sea-level surface sampler that classifies oceans.

use lodestone_registry::BiomeId;
use lodestone_registry::biome_id::{
    DESERT, FOREST, FROZEN_OCEAN, OCEAN, PLAINS, RAINFOREST, SAVANNA, SEASONAL_FOREST,
    SHRUBLAND, SNOWY_TUNDRA, SWAMP, TAIGA,
};
use lodestone_utils::noise::Octave;
use lodestone_utils::random::LegacyRandom;
use rustc_hash::FxHashMap;

use crate::Range;

/// Beta climate state: temperature, rainfall and the shared fuzz octaves.
#[derive(Debug, Clone, Default)]
pub struct BiomeNoiseBeta {
    temperature: Octave,
    rainfall: Octave,
    fuzz: Octave,
}

impl BiomeNoiseBeta {
    /// Seed the three climate stacks from their fixed seed multiples.
    pub fn set_seed(&mut self, seed: u64) {
        let mut rng = LegacyRandom::from_seed(seed.wrapping_mul(9871));
        self.temperature = Octave::new_beta(&mut rng, 4, 0.02500000037252903, 0.25, 0.55, 2.0);
        let mut rng = LegacyRandom::from_seed(seed.wrapping_mul(39811));
        self.rainfall = Octave::new_beta(
            &mut rng,
            4,
            0.05000000074505806,
            1.0 / 3.0,
            0.55,
            2.0,
        );
        let mut rng = LegacyRandom::from_seed(seed.wrapping_mul(543_321));
        self.fuzz = Octave::new_beta(&mut rng, 2, 0.25, 0.588235294117647, 0.5, 2.0);
    }

    /// Climate `(temperature, rainfall)` at block coordinates, both clamped
    /// to `[0, 1]`.
    #[must_use]
    pub fn climate(&self, x: i32, z: i32) -> (f64, f64) {
        let fx = f64::from(x);
        let fz = f64::from(z);
        let f = self.fuzz.sample_beta_biome(fx, fz) * 1.1 + 0.5;

        let mut t = (self.temperature.sample_beta_biome(fx, fz) * 0.15 + 0.7) * 0.99 + f * 0.01;
        t = 1.0 - (1.0 - t) * (1.0 - t);
        t = t.clamp(0.0, 1.0);

        let mut h = (self.rainfall.sample_beta_biome(fx, fz) * 0.15 + 0.5) * 0.998 + f * 0.002;
        h = h.clamp(0.0, 1.0);

        (t, h)
    }

    /// Biome at block coordinates, ignoring oceans.
    #[must_use]
    pub fn biome_at(&self, x: i32, z: i32) -> BiomeId {
        let (t, h) = self.climate(x, z);
        old_beta_biome(t as f32, h as f32)
    }

    /// Generate a range. When `snb` is given, cells below sea level become
    /// (frozen) ocean; pass `None` to skip the surface sampling
    /// (`NO_BETA_OCEAN`).
    pub fn gen_scaled(&self, snb: Option<&SurfaceNoiseBeta>, out: &mut [i32], r: Range) {
        let mut columns = ColumnCache::default();
        let mut o = 0;
        for j in 0..r.sz {
            for i in 0..r.sx {
                let (bx, bz) = match r.scale {
                    1 => (r.x + i, r.z + j),
                    4 => ((r.x + i) * 4 + 2, (r.z + j) * 4 + 2),
                    s => {
                        let mid = s >> 1;
                        ((r.x + i) * s + mid, (r.z + j) * s + mid)
                    }
                };
                let (t, h) = self.climate(bx, bz);
                out[o] = match snb {
                    Some(snb) if !snb.is_solid_at_sea_level(self, &mut columns, bx, bz) => {
                        if t < 0.5 { FROZEN_OCEAN } else { OCEAN }
                    }
                    _ => old_beta_biome(t as f32, h as f32),
                };
                o += 1;
            }
        }
        // overworld has no vertical noise: expand 2D into 3D
        let layer = (r.sx * r.sz) as usize;
        for k in 1..r.sy_eff() as usize {
            out.copy_within(0..layer, k * layer);
        }
    }
}

/// The Beta temperature/rainfall threshold table, with the era's 1/63
/// quantization.
#[must_use]
pub fn old_beta_biome(t: f32, h: f32) -> BiomeId {
    // the era indexes a 64x64 lookup table; reproduce its quantization
    let t = (t * 63.0) as i32 as f32 / 63.0;
    let h = (h * 63.0) as i32 as f32 / 63.0;

    let h = h * t;
    if t < 0.1 {
        return SNOWY_TUNDRA;
    }
    if h < 0.2 {
        if t < 0.5 {
            return SNOWY_TUNDRA;
        }
        return if t < 0.95 { SAVANNA } else { DESERT };
    }
    if h > 0.5 && t < 0.7 {
        return SWAMP;
    }
    if t < 0.5 {
        return TAIGA;
    }
    if t < 0.97 {
        return if h < 0.35 { SHRUBLAND } else { FOREST };
    }
    if h < 0.45 {
        return PLAINS;
    }
    if h < 0.9 {
        return SEASONAL_FOREST;
    }
    RAINFOREST
}

// ── Beta surface noise ──────────────────────────────────────────────────────

/// One column's sea-level noise samples (4-block cell, planes 7 and 8).
#[derive(Debug, Clone, Copy)]
struct SeaLevelColumn {
    scale: f64,
    depth: f64,
    min: [f64; 2],
    max: [f64; 2],
    main: [f64; 2],
}

type ColumnCache = FxHashMap<(i32, i32), SeaLevelColumn>;

/// The Beta terrain octaves needed for the sea-level classifier.
#[derive(Debug, Clone)]
pub struct SurfaceNoiseBeta {
    oct_min: Octave,
    oct_max: Octave,
    oct_main: Octave,
    oct_scale: Octave,
    oct_depth: Octave,
}

impl SurfaceNoiseBeta {
    /// Seed the terrain octaves in generation order, skipping the two
    /// 4-octave stacks the classifier never reads.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = LegacyRandom::from_seed(seed);
        let oct_min = Octave::new_beta(&mut rng, 16, 684.412, 0.5, 1.0, 2.0);
        let oct_max = Octave::new_beta(&mut rng, 16, 684.412, 0.5, 1.0, 2.0);
        let oct_main = Octave::new_beta(&mut rng, 8, 684.412 / 80.0, 0.5, 1.0, 2.0);
        rng.consume_count(262 * 8);
        let oct_scale = Octave::new_beta(&mut rng, 10, 1.121, 0.5, 1.0, 2.0);
        let oct_depth = Octave::new_beta(&mut rng, 16, 200.0, 0.5, 1.0, 2.0);
        Self {
            oct_min,
            oct_max,
            oct_main,
            oct_scale,
            oct_depth,
        }
    }

    fn column(&self, bnb: &BiomeNoiseBeta, cx: i32, cz: i32) -> SeaLevelColumn {
        let (t, h) = bnb.climate(cx * 4, cz * 4);

        let mut humi = 1.0 - h * t;
        humi *= humi;
        humi *= humi;
        humi = 1.0 - humi;

        let fx = f64::from(cx);
        let fz = f64::from(cz);

        let mut scale =
            (self.oct_scale.sample_amp(fx, 0.0, fz, 0.0, 0.0, true) + 256.0) / 512.0;
        scale *= humi;
        if scale > 1.0 {
            scale = 1.0;
        }

        let mut depth = self.oct_depth.sample_amp(fx, 0.0, fz, 0.0, 0.0, true) / 8000.0;
        if depth < 0.0 {
            depth = -depth * 0.3;
        }
        depth = depth * 3.0 - 2.0;
        if depth < 0.0 {
            depth /= 2.0;
            if depth < -1.0 {
                depth = -1.0;
            }
            depth /= 1.4;
            depth /= 2.0;
            scale = 0.0;
        } else {
            if depth > 1.0 {
                depth = 1.0;
            }
            depth /= 8.0;
        }
        if scale < 0.0 {
            scale = 0.0;
        }
        scale += 0.5;
        depth = depth * 17.0 / 16.0;
        let depth = 17.0 / 2.0 + depth * 4.0;

        let mut min = [0.0; 2];
        let mut max = [0.0; 2];
        let mut main = [0.0; 2];
        self.oct_min.sample_beta_terrain(&mut min, fx, fz, false, 0.0);
        self.oct_max.sample_beta_terrain(&mut max, fx, fz, false, 0.0);
        self.oct_main.sample_beta_terrain(&mut main, fx, fz, true, 0.0);

        SeaLevelColumn {
            scale,
            depth,
            min,
            max,
            main,
        }
    }

    fn density(col: &SeaLevelColumn, plane: usize) -> f64 {
        let y = f64::from(7 + plane as i32);
        let mut fall = (y - col.depth) * 12.0 / col.scale;
        if fall < 0.0 {
            fall *= 4.0;
        }
        let lo = col.min[plane] / 512.0;
        let hi = col.max[plane] / 512.0;
        let t = (col.main[plane] / 10.0 + 1.0) / 2.0;
        let v = if t < 0.0 {
            lo
        } else if t > 1.0 {
            hi
        } else {
            lo + (hi - lo) * t
        };
        v - fall
    }

    /// Whether the terrain at block `(x, z)` is solid at the block below sea
    /// level, interpolated from the four surrounding noise columns.
    fn is_solid_at_sea_level(
        &self,
        bnb: &BiomeNoiseBeta,
        cache: &mut ColumnCache,
        x: i32,
        z: i32,
    ) -> bool {
        let cx = x >> 2;
        let cz = z >> 2;
        let dx = f64::from(x & 3) / 4.0;
        let dz = f64::from(z & 3) / 4.0;

        let mut col = |cx: i32, cz: i32| {
            *cache
                .entry((cx, cz))
                .or_insert_with(|| self.column(bnb, cx, cz))
        };
        let c00 = col(cx, cz);
        let c10 = col(cx + 1, cz);
        let c01 = col(cx, cz + 1);
        let c11 = col(cx + 1, cz + 1);

        // density at block y = 63: 7/8 of the way between planes 7 and 8
        let dy = 7.0 / 8.0;
        let d = |c: &SeaLevelColumn| {
            Self::density(c, 0) + (Self::density(c, 1) - Self::density(c, 0)) * dy
        };
        let v0 = d(&c00) + (d(&c10) - d(&c00)) * dx;
        let v1 = d(&c01) + (d(&c11) - d(&c01)) * dx;
        v0 + (v1 - v0) * dz > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_table_extremes() {
        assert_eq!(old_beta_biome(0.0, 0.5), SNOWY_TUNDRA);
        assert_eq!(old_beta_biome(1.0, 0.05), DESERT);
        assert_eq!(old_beta_biome(1.0, 1.0), RAINFOREST);
        assert_eq!(old_beta_biome(0.6, 0.9), SWAMP);
        assert_eq!(old_beta_biome(0.4, 0.6), TAIGA);
    }

    #[test]
    fn climate_is_deterministic_and_clamped() {
        let mut a = BiomeNoiseBeta::default();
        a.set_seed(8675309);
        for i in 0..64 {
            let (t, h) = a.climate(i * 31, -i * 13);
            assert!((0.0..=1.0).contains(&t));
            assert!((0.0..=1.0).contains(&h));
        }
    }

    #[test]
    fn ocean_path_produces_oceans_somewhere() {
        let mut bnb = BiomeNoiseBeta::default();
        bnb.set_seed(1);
        let snb = SurfaceNoiseBeta::new(1);
        let r = Range::area(4, -64, -64, 128, 128);
        let mut out = vec![0; r.volume()];
        bnb.gen_scaled(Some(&snb), &mut out, r);
        assert!(
            out.iter().any(|&b| b == OCEAN || b == FROZEN_OCEAN),
            "a 512-block beta area should touch an ocean"
        );
    }
}
