//! Improved Perlin noise with Minecraft's exact initialization and
//! sampling, plus the 2D simplex sampler and the Beta-era terrain column
//! sampler that share its permutation table.

use crate::math::{floor, lerp, maintain_precision};
use crate::random::Random;

/// Gradient dot product over the 16 symbolic edge vectors.
#[inline]
#[must_use]
pub fn indexed_lerp(idx: u8, a: f64, b: f64, c: f64) -> f64 {
    match idx & 0xF {
        0 => a + b,
        1 => -a + b,
        2 => a - b,
        3 => -a - b,
        4 => a + c,
        5 => -a + c,
        6 => a - c,
        7 => -a - c,
        8 => b + c,
        9 => -b + c,
        10 => b - c,
        11 => -b - c,
        12 => a + b,
        13 => -b + c,
        14 => -a + b,
        15 => -b - c,
        _ => unreachable!(),
    }
}

#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// A single gradient-noise generator.
///
/// Initialization consumes three doubles for the lattice offsets and a
/// Fisher-Yates shuffle of `[0..255]`; the second half of the table mirrors
/// the first so both byte-wrapped and widened indexing agree.
#[derive(Clone)]
pub struct Perlin {
    d: [u8; 512],
    /// Lattice x offset.
    pub a: f64,
    /// Lattice y offset.
    pub b: f64,
    /// Lattice z offset.
    pub c: f64,
    /// Amplitude applied by the owning octave stack.
    pub amplitude: f64,
    /// Lacunarity applied by the owning octave stack.
    pub lacunarity: f64,
    // cached hash/fade for the height-invariant (y = 0) case
    d2: f64,
    h2: u8,
    t2: f64,
}

impl std::fmt::Debug for Perlin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Perlin")
            .field("a", &self.a)
            .field("b", &self.b)
            .field("c", &self.c)
            .field("amplitude", &self.amplitude)
            .field("lacunarity", &self.lacunarity)
            .finish_non_exhaustive()
    }
}

impl Perlin {
    /// Initialize from a random source, consuming values in the game's order.
    pub fn new<R: Random>(rng: &mut R) -> Self {
        let a = rng.next_f64() * 256.0;
        let b = rng.next_f64() * 256.0;
        let c = rng.next_f64() * 256.0;

        let mut d = [0u8; 512];
        for (i, v) in d.iter_mut().enumerate().take(256) {
            *v = i as u8;
        }
        for i in 0..256usize {
            let j = rng.next_i32_bounded(256 - i as i32) as usize + i;
            d.swap(i, j);
        }
        for i in 0..256usize {
            d[i + 256] = d[i];
        }

        let i2 = b.floor();
        let d2 = b - i2;
        Self {
            d,
            a,
            b,
            c,
            amplitude: 1.0,
            lacunarity: 1.0,
            d2,
            h2: i2 as i32 as u8,
            t2: fade(d2),
        }
    }

    /// Sample at `(x, y, z)`.
    ///
    /// `y == 0.0` is a sentinel: it selects the pre-computed height-invariant
    /// hash and fade rather than the numerical coordinate zero. `yamp`/`ymin`
    /// reproduce the game's vertical clamping when non-zero.
    #[must_use]
    pub fn sample(&self, x: f64, y: f64, z: f64, yamp: f64, ymin: f64) -> f64 {
        let (mut d2, h2, t2);
        if y == 0.0 {
            d2 = self.d2;
            h2 = self.h2;
            t2 = self.t2;
        } else {
            let yy = y + self.b;
            let i2 = yy.floor();
            d2 = yy - i2;
            h2 = i2 as i32 as u8;
            t2 = fade(d2);
        }

        let xx = x + self.a;
        let zz = z + self.c;
        let i1 = xx.floor();
        let i3 = zz.floor();
        let d1 = xx - i1;
        let d3 = zz - i3;
        let h1 = i1 as i32 as u8;
        let h3 = i3 as i32 as u8;

        let t1 = fade(d1);
        let t3 = fade(d3);

        if yamp != 0.0 {
            let yclamp = if ymin < d2 { ymin } else { d2 };
            d2 -= (yclamp / yamp).floor() * yamp;
        }

        let idx = &self.d;
        let a1 = idx[h1 as usize].wrapping_add(h2);
        let b1 = idx[h1 as usize + 1].wrapping_add(h2);
        let a2 = idx[a1 as usize].wrapping_add(h3);
        let b2 = idx[b1 as usize].wrapping_add(h3);
        let a3 = idx[a1 as usize + 1].wrapping_add(h3);
        let b3 = idx[b1 as usize + 1].wrapping_add(h3);

        let l1 = indexed_lerp(idx[a2 as usize], d1, d2, d3);
        let l2 = indexed_lerp(idx[b2 as usize], d1 - 1.0, d2, d3);
        let l3 = indexed_lerp(idx[a3 as usize], d1, d2 - 1.0, d3);
        let l4 = indexed_lerp(idx[b3 as usize], d1 - 1.0, d2 - 1.0, d3);
        let l5 = indexed_lerp(idx[a2 as usize + 1], d1, d2, d3 - 1.0);
        let l6 = indexed_lerp(idx[b2 as usize + 1], d1 - 1.0, d2, d3 - 1.0);
        let l7 = indexed_lerp(idx[a3 as usize + 1], d1, d2 - 1.0, d3 - 1.0);
        let l8 = indexed_lerp(idx[b3 as usize + 1], d1 - 1.0, d2 - 1.0, d3 - 1.0);

        let l1 = lerp(t1, l1, l2);
        let l3 = lerp(t1, l3, l4);
        let l5 = lerp(t1, l5, l6);
        let l7 = lerp(t1, l7, l8);

        let l1 = lerp(t2, l1, l3);
        let l5 = lerp(t2, l5, l7);

        lerp(t3, l1, l5)
    }

    /// 2D simplex sample over the same permutation, used by the Beta climate
    /// octaves and the End island noise.
    #[must_use]
    pub fn sample_simplex2d(&self, x: f64, y: f64) -> f64 {
        const SKEW: f64 = 0.5 * (1.732_050_807_568_877_2 - 1.0);
        const UNSKEW: f64 = (3.0 - 1.732_050_807_568_877_2) / 6.0;

        let hf = (x + y) * SKEW;
        let hx = floor(x + hf);
        let hz = floor(y + hf);
        let mhxz = f64::from(hx + hz) * UNSKEW;
        let x0 = x - (f64::from(hx) - mhxz);
        let y0 = y - (f64::from(hz) - mhxz);
        let offx = i32::from(x0 > y0);
        let offz = 1 - offx;
        let x1 = x0 - f64::from(offx) + UNSKEW;
        let y1 = y0 - f64::from(offz) + UNSKEW;
        let x2 = x0 - 1.0 + 2.0 * UNSKEW;
        let y2 = y0 - 1.0 + 2.0 * UNSKEW;

        let d = &self.d;
        let gi0 = i32::from(d[(0xFF & hz) as usize]);
        let gi1 = i32::from(d[(0xFF & (hz + offz)) as usize]);
        let gi2 = i32::from(d[(0xFF & (hz + 1)) as usize]);
        let gi0 = d[(0xFF & (gi0 + hx)) as usize];
        let gi1 = d[(0xFF & (gi1 + hx + offx)) as usize];
        let gi2 = d[(0xFF & (gi2 + hx + 1)) as usize];

        let mut t = 0.0;
        t += Self::simplex_grad(gi0 % 12, x0, y0, 0.0, 0.5);
        t += Self::simplex_grad(gi1 % 12, x1, y1, 0.0, 0.5);
        t += Self::simplex_grad(gi2 % 12, x2, y2, 0.0, 0.5);
        70.0 * t
    }

    #[inline]
    fn simplex_grad(idx: u8, x: f64, y: f64, z: f64, d: f64) -> f64 {
        let con = d - x * x - y * y - z * z;
        if con < 0.0 {
            return 0.0;
        }
        let con = con * con;
        con * con * indexed_lerp(idx, x, y, z)
    }

    /// Beta terrain column sampler: accumulates into `v[0]`/`v[1]` the noise
    /// for the two vertically adjacent cells at cell-y 7 and 8, reusing
    /// lattice rows when consecutive y cells hash identically.
    pub fn sample_beta17_terrain(&self, v: &mut [f64; 2], x: f64, z: f64, y_lac_amp: f64) {
        let mut l1 = 0.0;
        let mut l3 = 0.0;
        let mut l5 = 0.0;
        let mut l7 = 0.0;

        let xx = x + self.a;
        let zz = z + self.c;
        let idx = &self.d;
        let i1 = (xx.floor() as i32) & 0xFF;
        let i3 = (zz.floor() as i32) & 0xFF;
        let d1 = xx - xx.floor();
        let d3 = zz - zz.floor();
        let t1 = fade(d1);
        let t3 = fade(d3);

        // find the last y cell before 8 whose lattice row differs from its
        // predecessor, so the row blend is only recomputed when needed
        let mut gen_flag = -1i32;
        let mut yic = 0i32;
        let mut gf_copy = 0i32;
        for yi in 0..=7i32 {
            let d2 = f64::from(yi) * self.lacunarity * y_lac_amp + self.b;
            let i2 = (d2.floor() as i32) & 0xFF;
            if yi == 0 || i2 != gen_flag {
                yic = yi;
                gf_copy = gen_flag;
                gen_flag = i2;
            }
        }
        gen_flag = gf_copy;

        for yi in yic..=8i32 {
            let mut d2 = f64::from(yi) * self.lacunarity * y_lac_amp + self.b;
            let i2 = d2.floor() as i32;
            d2 -= f64::from(i2);
            let t2 = fade(d2);
            let i2 = i2 & 0xFF;

            if yi == 0 || i2 != gen_flag {
                gen_flag = i2;
                let a1 = i32::from(idx[i1 as usize]) + i2;
                let b1 = i32::from(idx[i1 as usize + 1]) + i2;
                let a2 = i32::from(idx[a1 as usize]) + i3;
                let a3 = i32::from(idx[a1 as usize + 1]) + i3;
                let b2 = i32::from(idx[b1 as usize]) + i3;
                let b3 = i32::from(idx[b1 as usize + 1]) + i3;

                let m1 = indexed_lerp(idx[a2 as usize], d1, d2, d3);
                let l2 = indexed_lerp(idx[b2 as usize], d1 - 1.0, d2, d3);
                let m3 = indexed_lerp(idx[a3 as usize], d1, d2 - 1.0, d3);
                let l4 = indexed_lerp(idx[b3 as usize], d1 - 1.0, d2 - 1.0, d3);
                let m5 = indexed_lerp(idx[a2 as usize + 1], d1, d2, d3 - 1.0);
                let l6 = indexed_lerp(idx[b2 as usize + 1], d1 - 1.0, d2, d3 - 1.0);
                let m7 = indexed_lerp(idx[a3 as usize + 1], d1, d2 - 1.0, d3 - 1.0);
                let l8 = indexed_lerp(idx[b3 as usize + 1], d1 - 1.0, d2 - 1.0, d3 - 1.0);

                l1 = lerp(t1, m1, l2);
                l3 = lerp(t1, m3, l4);
                l5 = lerp(t1, m5, l6);
                l7 = lerp(t1, m7, l8);
            }

            if yi >= 7 {
                let n1 = lerp(t2, l1, l3);
                let n5 = lerp(t2, l5, l7);
                v[(yi - 7) as usize] += lerp(t3, n1, n5) * self.amplitude;
            }
        }
    }

    /// Sample with coordinates pre-multiplied by this generator's lacunarity
    /// and reduced for precision; helper for octave stacks.
    #[inline]
    #[must_use]
    pub(crate) fn sample_scaled(&self, x: f64, y: f64, z: f64) -> f64 {
        let lf = self.lacunarity;
        let ax = maintain_precision(x * lf);
        let ay = maintain_precision(y * lf);
        let az = maintain_precision(z * lf);
        self.sample(ax, ay, az, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::LegacyRandom;

    #[test]
    fn init_consumes_expected_draws() {
        // 3 doubles (2 draws each) + 256 shuffle draws: the next double of a
        // parallel generator skipped by 262 must line up.
        let mut a = LegacyRandom::from_seed(1);
        let mut b = LegacyRandom::from_seed(1);
        let _ = Perlin::new(&mut a);
        b.consume_count(262);
        #[allow(clippy::float_cmp)]
        {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }

    #[test]
    fn y_zero_uses_cached_plane() {
        let mut rng = LegacyRandom::from_seed(42);
        let p = Perlin::new(&mut rng);
        // a denormal y is absorbed by b, so the recomputed path must agree
        // bit-for-bit with the cached sentinel path
        let cached = p.sample(1.5, 0.0, 2.5, 0.0, 0.0);
        let recomputed = p.sample(1.5, 1e-300, 2.5, 0.0, 0.0);
        #[allow(clippy::float_cmp)]
        {
            assert_eq!(cached, recomputed);
        }
    }

    #[test]
    fn deterministic_for_same_seed() {
        let mut r1 = LegacyRandom::from_seed(9001);
        let mut r2 = LegacyRandom::from_seed(9001);
        let p1 = Perlin::new(&mut r1);
        let p2 = Perlin::new(&mut r2);
        for i in 0..32 {
            let x = f64::from(i) * 0.7;
            let z = f64::from(i) * 1.3;
            #[allow(clippy::float_cmp)]
            {
                assert_eq!(p1.sample(x, 0.0, z, 0.0, 0.0), p2.sample(x, 0.0, z, 0.0, 0.0));
                assert_eq!(p1.sample_simplex2d(x, z), p2.sample_simplex2d(x, z));
            }
        }
    }

    #[test]
    fn sample_range_is_bounded() {
        let mut rng = LegacyRandom::from_seed(7);
        let p = Perlin::new(&mut rng);
        for i in 0..200 {
            let v = p.sample(f64::from(i) * 0.37, f64::from(i) * 0.11, f64::from(i) * 0.53, 0.0, 0.0);
            assert!(v.abs() <= 2.0, "perlin out of range: {v}");
        }
    }
}
