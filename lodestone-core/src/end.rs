//! End biome generation (1.9+) and the approximate End surface height used
//! for gateway placement.
//!
//! Biome choice is spatial: the central island inside chunk radius 64 is
//! always the main end biome; outside, an island-falloff elevation scanned
//! over a 25x25 chunk neighborhood picks highlands, midlands, barrens or
//! small islands. The elevation noise is a simplex permutation seeded by the
//! world seed after skipping 17292 outputs.

use lodestone_registry::BiomeId;
use lodestone_registry::biome_id::{
    END_BARRENS, END_HIGHLANDS, END_MIDLANDS, SMALL_END_ISLANDS, THE_END,
};
use lodestone_registry::version::McVersion;
use lodestone_utils::math::{clamped_lerp, lerp3, maintain_precision};
use lodestone_utils::noise::{Octave, Perlin};
use lodestone_utils::random::LegacyRandom;

use crate::Range;
use crate::layers::voronoi_access_3d;

/// The island threshold compares a double against the float literal -0.9,
/// which promotes to -0.8999999761581421, not -0.9.
const ISLAND_THRESHOLD: f64 = -0.9_f32 as f64;

/// End biome noise state.
#[derive(Debug, Clone)]
pub struct EndNoise {
    perlin: Option<Perlin>,
    mc: McVersion,
}

impl EndNoise {
    /// Unseeded state for a release.
    #[must_use]
    pub fn new(mc: McVersion) -> Self {
        Self { perlin: None, mc }
    }

    /// Seed the island noise: skip 17292 outputs, then build the simplex
    /// permutation.
    pub fn set_seed(&mut self, seed: u64) {
        let mut rng = LegacyRandom::from_seed(seed);
        rng.consume_count(17292);
        self.perlin = Some(Perlin::new(&mut rng));
    }

    fn noise(&self) -> &Perlin {
        self.perlin.as_ref().expect("end noise must be seeded")
    }

    /// Island-falloff elevation at section coordinates (blocks / 8),
    /// scanning a `(2*range+1)²` chunk neighborhood (range 12 by default).
    #[must_use]
    pub fn height_value(&self, section_x: i32, section_z: i32, range: i32) -> f32 {
        let range = if range == 0 { 12 } else { range };
        let noise = self.noise();

        let chunk_x = section_x / 2;
        let chunk_z = section_z / 2;
        let sub_x = section_x % 2;
        let sub_z = section_z % 2;

        // integer multiply then float cast, wrapping like Java int math
        let dist_sq = section_x
            .wrapping_mul(section_x)
            .wrapping_add(section_z.wrapping_mul(section_z));
        let dist = (dist_sq as f32).sqrt();
        let mut h = (100.0_f32 - dist * 8.0).clamp(-100.0, 80.0);

        for zo in -range..=range {
            for xo in -range..=range {
                let cx = i64::from(chunk_x) + i64::from(xo);
                let cz = i64::from(chunk_z) + i64::from(zo);
                if cx * cx + cz * cz > 4096
                    && noise.sample_simplex2d(cx as f64, cz as f64) < ISLAND_THRESHOLD
                {
                    let island_size =
                        ((cx as f32).abs() * 3439.0 + (cz as f32).abs() * 147.0) % 13.0 + 9.0;
                    let xd = sub_x as f32 - (xo * 2) as f32;
                    let zd = sub_z as f32 - (zo * 2) as f32;
                    let v = (100.0_f32 - (xd * xd + zd * zd).sqrt() * island_size)
                        .clamp(-100.0, 80.0);
                    h = h.max(v);
                }
            }
        }

        h
    }

    /// End biome at chunk coordinates.
    #[must_use]
    pub fn biome_at_chunk(&self, chunk_x: i32, chunk_z: i32) -> BiomeId {
        if self.mc <= McVersion::V1_8 {
            return THE_END;
        }
        if i64::from(chunk_x) * i64::from(chunk_x) + i64::from(chunk_z) * i64::from(chunk_z)
            <= 4096
        {
            return THE_END;
        }

        let h = self.height_value(chunk_x * 2 + 1, chunk_z * 2 + 1, 0);
        if h > 40.0 {
            END_HIGHLANDS
        } else if h >= 0.0 {
            END_MIDLANDS
        } else if h < -20.0 {
            SMALL_END_ISLANDS
        } else {
            END_BARRENS
        }
    }

    /// End biome at 1:4 cell coordinates.
    #[inline]
    #[must_use]
    pub fn biome_at(&self, quart_x: i32, quart_z: i32) -> BiomeId {
        self.biome_at_chunk(quart_x >> 2, quart_z >> 2)
    }

    /// Generate a range; 1:1 goes through the 3D voronoi with `sha`.
    pub fn gen_scaled(&self, out: &mut [i32], r: Range, sha: u64) {
        let sy = r.sy_eff();

        if self.mc <= McVersion::V1_8 {
            out[..r.volume()].fill(THE_END);
            return;
        }

        if r.scale == 1 {
            let s = crate::climate::voronoi_src_range(r);
            let vol = r.volume();
            let mut idx = vol;
            for _k in 0..s.sy_eff() {
                for j in 0..s.sz {
                    for i in 0..s.sx {
                        out[idx] = self.biome_at(s.x + i, s.z + j);
                        idx += 1;
                    }
                }
            }
            let mut o = 0;
            for k in 0..sy {
                for j in 0..r.sz {
                    for i in 0..r.sx {
                        let (x4, y4, z4) = voronoi_access_3d(sha, r.x + i, r.y + k, r.z + j);
                        let si = (y4 - s.y) * s.sx * s.sz + (z4 - s.z) * s.sx + (x4 - s.x);
                        out[o] = out[vol + si as usize];
                        o += 1;
                    }
                }
            }
            return;
        }

        let mut o = 0;
        for _k in 0..sy {
            for j in 0..r.sz {
                for i in 0..r.sx {
                    let id = match r.scale {
                        4 => self.biome_at(r.x + i, r.z + j),
                        16 => self.biome_at_chunk(r.x + i, r.z + j),
                        s => {
                            let mid = s >> 1;
                            self.biome_at_chunk(
                                ((r.x + i) * s + mid) >> 4,
                                ((r.z + j) * s + mid) >> 4,
                            )
                        }
                    };
                    out[o] = id;
                    o += 1;
                }
            }
        }
    }
}

// ── End surface height ──────────────────────────────────────────────────────

/// The min/max/main octave stacks that shape End (and legacy overworld)
/// terrain density.
#[derive(Debug, Clone)]
pub struct SurfaceNoise {
    xz_scale: f64,
    y_scale: f64,
    xz_factor: f64,
    y_factor: f64,
    oct_min: Octave,
    oct_max: Octave,
    oct_main: Octave,
}

impl SurfaceNoise {
    /// Seed the End surface noise.
    #[must_use]
    pub fn end(seed: u64) -> Self {
        let mut rng = LegacyRandom::from_seed(seed);
        let oct_min = Octave::new_legacy(&mut rng, -15, 16);
        let oct_max = Octave::new_legacy(&mut rng, -15, 16);
        let oct_main = Octave::new_legacy(&mut rng, -7, 8);
        Self {
            xz_scale: 2.0,
            y_scale: 1.0,
            xz_factor: 80.0,
            y_factor: 160.0,
            oct_min,
            oct_max,
            oct_main,
        }
    }

    /// Blended min/max/main density at cell coordinates.
    #[must_use]
    pub fn sample(&self, x: i32, y: i32, z: i32) -> f64 {
        let xz_scale = 684.412 * self.xz_scale;
        let y_scale = 684.412 * self.y_scale;
        let xz_step = xz_scale / self.xz_factor;
        let y_step = y_scale / self.y_factor;

        let mut v_min = 0.0;
        let mut v_max = 0.0;
        let mut v_main = 0.0;
        let mut persist = 1.0;

        for i in 0..16 {
            let dx = maintain_precision(f64::from(x) * xz_scale * persist);
            let dy = maintain_precision(f64::from(y) * y_scale * persist);
            let dz = maintain_precision(f64::from(z) * xz_scale * persist);
            let sy = y_scale * persist;
            let ty = f64::from(y) * sy;

            v_min += self.oct_min.octaves()[i].sample(dx, dy, dz, sy, ty) / persist;
            v_max += self.oct_max.octaves()[i].sample(dx, dy, dz, sy, ty) / persist;

            if i < 8 {
                let mx = maintain_precision(f64::from(x) * xz_step * persist);
                let my = maintain_precision(f64::from(y) * y_step * persist);
                let mz = maintain_precision(f64::from(z) * xz_step * persist);
                v_main += self.oct_main.octaves()[i].sample(
                    mx,
                    my,
                    mz,
                    y_step * persist,
                    f64::from(y) * y_step * persist,
                ) / persist;
            }
            persist /= 2.0;
        }

        clamped_lerp(0.5 + 0.05 * v_main, v_min / 512.0, v_max / 512.0)
    }
}

/// Sample one End noise column over y cells `y0..=y1` (4-block cells) at
/// section coordinates (8-block horizontal cells).
pub fn sample_noise_column_end(
    column: &mut [f64],
    sn: &SurfaceNoise,
    en: &EndNoise,
    x: i32,
    z: i32,
    y0: i32,
    y1: i32,
) {
    let depth = f64::from(en.height_value(x, z, 0)) - 8.0;
    for y in y0..=y1 {
        let mut noise = sn.sample(x, y, z);
        noise += depth;
        noise = clamped_lerp(f64::from(32 + 46 - y) / 64.0, -3000.0, noise);
        noise = clamped_lerp(f64::from(y - 1) / 7.0, -30.0, noise);
        column[(y - y0) as usize] = noise;
    }
}

/// Highest block with positive density, from the four surrounding columns.
#[allow(clippy::too_many_arguments)]
#[must_use]
pub fn get_surface_height(
    ncol00: &[f64],
    ncol01: &[f64],
    ncol10: &[f64],
    ncol11: &[f64],
    cell_y0: i32,
    cell_y1: i32,
    blocks_per_cell: i32,
    dx: f64,
    dz: f64,
) -> i32 {
    for cell_y in (cell_y0..cell_y1).rev() {
        let i = (cell_y - cell_y0) as usize;
        let v000 = ncol00[i];
        let v001 = ncol01[i];
        let v100 = ncol10[i];
        let v101 = ncol11[i];
        let v010 = ncol00[i + 1];
        let v011 = ncol01[i + 1];
        let v110 = ncol10[i + 1];
        let v111 = ncol11[i + 1];

        for y in (0..blocks_per_cell).rev() {
            let dy = f64::from(y) / f64::from(blocks_per_cell);
            // interpolation order is y, x, z
            let noise = lerp3(dy, dx, dz, v000, v010, v100, v110, v001, v011, v101, v111);
            if noise > 0.0 {
                return cell_y * blocks_per_cell + y;
            }
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn central_island_is_the_end() {
        let mut en = EndNoise::new(McVersion::V1_16_1);
        en.set_seed(1);
        assert_eq!(en.biome_at_chunk(0, 0), THE_END);
        assert_eq!(en.biome_at_chunk(60, 20), THE_END);
        assert_eq!(en.biome_at(10, -10), THE_END);
    }

    #[test]
    fn pre_1_9_is_uniform() {
        let mut en = EndNoise::new(McVersion::V1_8);
        en.set_seed(1);
        assert_eq!(en.biome_at_chunk(1000, 1000), THE_END);
    }

    #[test]
    fn outer_rim_uses_the_thresholds() {
        let mut en = EndNoise::new(McVersion::V1_16_1);
        en.set_seed(1);
        // far outside the central island every biome id is an end id
        for cx in [65, 100, 200, -150] {
            let id = en.biome_at_chunk(cx, 70);
            assert!(
                [END_HIGHLANDS, END_MIDLANDS, END_BARRENS, SMALL_END_ISLANDS].contains(&id),
                "got {id}"
            );
        }
    }

    #[test]
    fn surface_height_is_within_the_column() {
        let mut en = EndNoise::new(McVersion::V1_16_1);
        en.set_seed(1);
        let sn = SurfaceNoise::end(1);
        let mut cols = [[0.0; 33]; 4];
        for (ci, col) in cols.iter_mut().enumerate() {
            let cx = 130 + ((ci as i32) >> 1);
            let cz = ci as i32 & 1;
            sample_noise_column_end(col, &sn, &en, cx, cz, 0, 32);
        }
        let h = get_surface_height(&cols[0], &cols[1], &cols[2], &cols[3], 0, 32, 4, 0.5, 0.5);
        assert!((0..=128).contains(&h));
    }
}
