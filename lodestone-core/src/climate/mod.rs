//! The 1.18+ climate biome pipeline: six double-Perlin climate fields, a
//! spline-derived depth axis and the nearest-leaf decision tree.

pub mod spline;
pub mod tree;

use lodestone_registry::{BiomeId, McVersion};
use lodestone_utils::climate::{
    NP_CONTINENTALNESS, NP_DEPTH, NP_EROSION, NP_HUMIDITY, NP_MAX, NP_SHIFT, NP_TEMPERATURE,
    NP_WEIRDNESS, TargetPoint,
};
use lodestone_utils::noise::DoublePerlin;
use lodestone_utils::random::Xoroshiro;

use crate::Range;
use crate::layers::voronoi_access_3d;
use spline::SplineStack;
use tree::{BiomeTree, overworld_tree};

/// Suppress the lateral shift jitter when sampling.
pub const SAMPLE_NO_SHIFT: u32 = 1 << 0;

/// md5 "minecraft:offset"
const MD5_OFFSET: [u64; 2] = [0x080518CF6AF25384, 0x3F3DFB40A54FEBD5];
/// md5 "minecraft:temperature" / "minecraft:temperature_large"
const MD5_TEMPERATURE: [[u64; 2]; 2] = [
    [0x5C7E6B29735F0D7F, 0xF7D86F1BBC734988],
    [0x944B0073EDF549DB, 0x4FF44347E9D22B96],
];
/// md5 "minecraft:vegetation" / "minecraft:vegetation_large"
const MD5_VEGETATION: [[u64; 2]; 2] = [
    [0x81BB4D22E8DC168E, 0xF1C8B4BEA16303CD],
    [0x71B8AB943DBD5301, 0xBB63DDCF39FF7A2B],
];
/// md5 "minecraft:continentalness" / "minecraft:continentalness_large"
const MD5_CONTINENTALNESS: [[u64; 2]; 2] = [
    [0x83886C9D0AE3A662, 0xAFA638A61B42E8AD],
    [0x9A3F51A113FCE8DC, 0xEE2DBD157E5DCDAD],
];
/// md5 "minecraft:erosion" / "minecraft:erosion_large"
const MD5_EROSION: [[u64; 2]; 2] = [
    [0xD02491E6058F6FD8, 0x4792512C94C17A80],
    [0x8C984B1F8702A951, 0xEAD7B1F92BAE535F],
];
/// md5 "minecraft:ridge"
const MD5_RIDGE: [u64; 2] = [0xEFC8EF4D36102B34, 0x1BEEEB324A0F24EA];

/// Overworld climate sampler for 1.18+.
pub struct BiomeNoise {
    climate: [DoublePerlin; NP_MAX],
    spline: SplineStack,
    tree: &'static BiomeTree,
    /// When `>= 0`, sampling returns only this climate axis scaled by 10000.
    pub nptype: i32,
    mc: McVersion,
}

impl BiomeNoise {
    /// Prepare the sampler (spline arena and tree reference); climates are
    /// seeded by [`Self::set_seed`].
    #[must_use]
    pub fn new(mc: McVersion) -> Self {
        Self {
            climate: Default::default(),
            spline: SplineStack::overworld(),
            tree: overworld_tree(mc),
            nptype: -1,
            mc,
        }
    }

    /// Seed all six climate fields. `large` multiplies the horizontal
    /// wavelengths of the four terrain climates by four.
    pub fn set_seed(&mut self, seed: u64, large: bool) {
        let mut xr = Xoroshiro::from_seed(seed);
        let xlo = xr.next_long();
        let xhi = xr.next_long();
        let li = usize::from(large);

        let mut init = |md5: [u64; 2], amp: &[f64], omin: i32| -> DoublePerlin {
            let mut pxr = Xoroshiro::from_state(xlo ^ md5[0], xhi ^ md5[1]);
            DoublePerlin::new_xoroshiro(&mut pxr, amp, omin, -1)
        };

        self.climate[NP_SHIFT] = init(MD5_OFFSET, &[1.0, 1.0, 1.0, 0.0], -3);
        self.climate[NP_TEMPERATURE] = init(
            MD5_TEMPERATURE[li],
            &[1.5, 0.0, 1.0, 0.0, 0.0, 0.0],
            if large { -12 } else { -10 },
        );
        self.climate[NP_HUMIDITY] = init(
            MD5_VEGETATION[li],
            &[1.0, 1.0, 0.0, 0.0, 0.0, 0.0],
            if large { -10 } else { -8 },
        );
        self.climate[NP_CONTINENTALNESS] = init(
            MD5_CONTINENTALNESS[li],
            &[1.0, 1.0, 2.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0],
            if large { -11 } else { -9 },
        );
        self.climate[NP_EROSION] = init(
            MD5_EROSION[li],
            &[1.0, 1.0, 0.0, 1.0, 1.0],
            if large { -11 } else { -9 },
        );
        self.climate[NP_WEIRDNESS] = init(MD5_RIDGE, &[1.0, 2.0, 1.0, 0.0, 0.0, 0.0], -7);
    }

    /// Sample the climate 6-vector and classify it.
    ///
    /// `(x, z)` are 1:4 cell coordinates and `y` the 1:4 vertical cell. The
    /// quantized readings are written to `np` when given; `dat` is the
    /// per-worker warm-start for the tree walk.
    pub fn sample(
        &self,
        np: Option<&mut [i64; NP_MAX]>,
        x: i32,
        y: i32,
        z: i32,
        dat: &mut Option<usize>,
        flags: u32,
    ) -> BiomeId {
        if self.nptype >= 0 {
            let v = self.sample_single_axis(x, y, z);
            if let Some(np) = np {
                np.fill(0);
            }
            return v as BiomeId;
        }

        let mut px = f64::from(x);
        let mut pz = f64::from(z);
        if flags & SAMPLE_NO_SHIFT == 0 {
            px += self.climate[NP_SHIFT].sample(f64::from(x), 0.0, f64::from(z)) * 4.0;
            pz += self.climate[NP_SHIFT].sample(f64::from(z), f64::from(x), 0.0) * 4.0;
        }

        let c = self.climate[NP_CONTINENTALNESS].sample(px, 0.0, pz) as f32;
        let e = self.climate[NP_EROSION].sample(px, 0.0, pz) as f32;
        let w = self.climate[NP_WEIRDNESS].sample(px, 0.0, pz) as f32;

        // fold weirdness into the "peaks and valleys" ridge input
        let ridges = -3.0 * ((w.abs() - 0.6666667).abs() - 0.33333334);
        let off = f64::from(self.spline.evaluate([c, e, ridges, w]) + 0.015);
        let d = (1.0 - f64::from(y << 2) / 128.0 - 83.0 / 160.0 + off) as f32;

        let t = self.climate[NP_TEMPERATURE].sample(px, 0.0, pz) as f32;
        let h = self.climate[NP_HUMIDITY].sample(px, 0.0, pz) as f32;

        let target = TargetPoint::new([
            quant(t),
            quant(h),
            quant(c),
            quant(e),
            quant(d),
            quant(w),
        ]);
        if let Some(out) = np {
            *out = target.np;
        }
        self.tree.lookup_cached(&target, dat)
    }

    fn sample_single_axis(&self, x: i32, y: i32, z: i32) -> i64 {
        let px = f64::from(x);
        let pz = f64::from(z);
        let axis = self.nptype as usize;
        let v = if axis == NP_DEPTH {
            let c = self.climate[NP_CONTINENTALNESS].sample(px, 0.0, pz) as f32;
            let e = self.climate[NP_EROSION].sample(px, 0.0, pz) as f32;
            let w = self.climate[NP_WEIRDNESS].sample(px, 0.0, pz) as f32;
            let ridges = -3.0 * ((w.abs() - 0.6666667).abs() - 0.33333334);
            let off = f64::from(self.spline.evaluate([c, e, ridges, w]) + 0.015);
            ((1.0 - f64::from(y << 2) / 128.0 - 83.0 / 160.0 + off) as f32).into()
        } else {
            self.climate[axis].sample(px, 0.0, pz)
        };
        (10000.0 * v) as i64
    }

    /// The release this sampler was prepared for.
    #[must_use]
    pub fn mc(&self) -> McVersion {
        self.mc
    }

    /// Generate a range. `sha` is required for 1:1 voronoi resolution;
    /// `flags` are the sampling flags (e.g. [`SAMPLE_NO_SHIFT`]).
    pub fn gen_scaled(&self, out: &mut [i32], r: Range, sha: u64, flags: u32) {
        let sy = r.sy_eff();
        let mut dat = None;

        if r.scale == 1 {
            let s = voronoi_src_range(r);
            let vol = r.volume();
            let mut idx = vol;
            for k in 0..s.sy_eff() {
                for j in 0..s.sz {
                    for i in 0..s.sx {
                        out[idx] =
                            self.sample(None, s.x + i, s.y + k, s.z + j, &mut dat, flags);
                        idx += 1;
                    }
                }
            }
            let mut o = 0;
            for k in 0..sy {
                for j in 0..r.sz {
                    for i in 0..r.sx {
                        let (x4, y4, z4) =
                            voronoi_access_3d(sha, r.x + i, r.y + k, r.z + j);
                        let si = (y4 - s.y) * s.sx * s.sz + (z4 - s.z) * s.sx + (x4 - s.x);
                        out[o] = out[vol + si as usize];
                        o += 1;
                    }
                }
            }
            return;
        }

        let mid = r.scale >> 1;
        let mut o = 0;
        for k in 0..sy {
            for j in 0..r.sz {
                for i in 0..r.sx {
                    let (px, pz) = if r.scale == 4 {
                        (r.x + i, r.z + j)
                    } else {
                        (
                            ((r.x + i) * r.scale + mid) >> 2,
                            ((r.z + j) * r.scale + mid) >> 2,
                        )
                    };
                    out[o] = self.sample(None, px, r.y + k, pz, &mut dat, flags);
                    o += 1;
                }
            }
        }
    }
}

#[inline]
fn quant(v: f32) -> i64 {
    (10000.0f32 * v) as i64
}

/// The 1:4 source range a 1:1 voronoi query reads from.
#[must_use]
pub fn voronoi_src_range(r: Range) -> Range {
    debug_assert!(r.scale == 1);
    let x = r.x - 2;
    let z = r.z - 2;
    let ty = r.y - 2;
    let sx = ((x + r.sx) >> 2) - (x >> 2) + 2;
    let sz = ((z + r.sz) >> 2) - (z >> 2) + 2;
    let sy = ((ty + r.sy_eff()) >> 2) - (ty >> 2) + 2;
    Range {
        scale: 4,
        x: x >> 2,
        z: z >> 2,
        sx,
        sz,
        y: ty >> 2,
        sy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn climates_are_seed_deterministic() {
        let mut a = BiomeNoise::new(McVersion::V1_18);
        let mut b = BiomeNoise::new(McVersion::V1_18);
        a.set_seed(1, false);
        b.set_seed(1, false);
        let mut da = None;
        let mut db = None;
        for i in 0..16 {
            let x = i * 37;
            let z = -i * 11;
            assert_eq!(
                a.sample(None, x, 16, z, &mut da, 0),
                b.sample(None, x, 16, z, &mut db, 0)
            );
        }
    }

    #[test]
    fn large_biomes_change_the_fields() {
        let mut a = BiomeNoise::new(McVersion::V1_18);
        let mut b = BiomeNoise::new(McVersion::V1_18);
        a.set_seed(1, false);
        b.set_seed(1, true);
        let mut differs = false;
        let mut da = None;
        let mut db = None;
        for i in 0..32 {
            if a.sample(None, i * 100, 16, 0, &mut da, 0)
                != b.sample(None, i * 100, 16, 0, &mut db, 0)
            {
                differs = true;
                break;
            }
        }
        assert!(differs, "large-biome seeding must alter the climate");
    }

    #[test]
    fn shift_flag_changes_samples_somewhere() {
        let mut bn = BiomeNoise::new(McVersion::V1_18);
        bn.set_seed(3, false);
        let mut np_a = [0i64; NP_MAX];
        let mut np_b = [0i64; NP_MAX];
        let mut dat = None;
        let mut differs = false;
        for i in 0..64 {
            bn.sample(Some(&mut np_a), i * 13, 16, i * 7, &mut dat, 0);
            bn.sample(Some(&mut np_b), i * 13, 16, i * 7, &mut dat, SAMPLE_NO_SHIFT);
            if np_a != np_b {
                differs = true;
                break;
            }
        }
        assert!(differs);
    }

    #[test]
    fn voronoi_src_range_covers_the_query() {
        let r = Range {
            scale: 1,
            x: -17,
            z: 33,
            sx: 19,
            sz: 5,
            y: 60,
            sy: 3,
        };
        let s = voronoi_src_range(r);
        assert_eq!(s.scale, 4);
        // every voronoi cell the query can touch lies within the source
        assert!(s.x <= (r.x - 2) >> 2);
        assert!(s.x + s.sx > ((r.x + r.sx - 1 - 2) >> 2) + 1);
        assert!(s.y <= (r.y - 2) >> 2);
    }
}
