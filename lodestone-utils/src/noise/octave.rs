//! Octave stacks of [`Perlin`] generators at geometric amplitudes and
//! lacunarities, with the three seeding schemes the game has used: the legacy
//! LCG walk, the Beta-era explicit multipliers, and the 1.18+ per-octave
//! xoroshiro derivation from MD5 constants.

use smallvec::SmallVec;

use crate::math::maintain_precision;
use crate::noise::Perlin;
use crate::random::{LegacyRandom, Xoroshiro};

/// Per-octave xoroshiro seed constants: the two halves of `md5("octave_N")`
/// for N in -12..=0.
pub const MD5_OCTAVE_N: [[u64; 2]; 13] = [
    [0xB198DE63A8012672, 0x7B84CAD43EF7B5A8], // md5 "octave_-12"
    [0x0FD787BFBC403EC3, 0x74A4A31CA21B48B8], // md5 "octave_-11"
    [0x36D326EED40EFEB2, 0x5BE9CE18223C636A], // md5 "octave_-10"
    [0x082FE255F8BE6631, 0x4E96119E22DEDC81], // md5 "octave_-9"
    [0x0EF68EC68504005E, 0x48B6BF93A2789640], // md5 "octave_-8"
    [0xF11268128982754F, 0x257A1D670430B0AA], // md5 "octave_-7"
    [0xE51C98CE7D1DE664, 0x5F9478A733040C45], // md5 "octave_-6"
    [0x6D7B49E7E429850A, 0x2E3063C622A24777], // md5 "octave_-5"
    [0xBD90D5377BA1B762, 0xC07317D419A7548D], // md5 "octave_-4"
    [0x53D39C6752DAC858, 0xBCD1C5A80AB65B3E], // md5 "octave_-3"
    [0xB4A24D7A84E7677B, 0x023FF9668E89B5C4], // md5 "octave_-2"
    [0xDFFA22B534C5F608, 0xB9B67517D3665CA9], // md5 "octave_-1"
    [0xD50708086CEF4D7C, 0x6E1651ECC7F43309], // md5 "octave_0"
];

const LACUNA_INI: [f64; 13] = [
    1.0,
    1.0 / 2.0,
    1.0 / 4.0,
    1.0 / 8.0,
    1.0 / 16.0,
    1.0 / 32.0,
    1.0 / 64.0,
    1.0 / 128.0,
    1.0 / 256.0,
    1.0 / 512.0,
    1.0 / 1024.0,
    1.0 / 2048.0,
    1.0 / 4096.0,
];

const PERSIST_INI: [f64; 10] = [
    0.0,
    1.0,
    2.0 / 3.0,
    4.0 / 7.0,
    8.0 / 15.0,
    16.0 / 31.0,
    32.0 / 63.0,
    64.0 / 127.0,
    128.0 / 255.0,
    256.0 / 511.0,
];

/// A stack of Perlin octaves.
#[derive(Debug, Clone, Default)]
pub struct Octave {
    octaves: SmallVec<[Perlin; 2]>,
}

impl Octave {
    /// Legacy (LCG-seeded) initialization for octaves `omin..omin+len`, where
    /// `omin + len <= 1` and the omitted octaves above `len` advance the
    /// generator by their full consumption (262 draws each).
    #[must_use]
    pub fn new_legacy(rng: &mut LegacyRandom, omin: i32, len: i32) -> Self {
        debug_assert!(len >= 1 && omin + len <= 1, "unsupported octave range");
        let end = omin + len - 1;
        let mut persist = 1.0 / ((1i64 << len) - 1) as f64;
        let mut lacuna = 2f64.powi(end);

        let mut octaves = SmallVec::with_capacity(len as usize);
        let mut i = 0;
        if end == 0 {
            let mut p = Perlin::new(rng);
            p.amplitude = persist;
            p.lacunarity = lacuna;
            octaves.push(p);
            persist *= 2.0;
            lacuna *= 0.5;
            i = 1;
        } else {
            rng.consume_count((-end) as u64 * 262);
        }

        for _ in i..len {
            let mut p = Perlin::new(rng);
            p.amplitude = persist;
            p.lacunarity = lacuna;
            octaves.push(p);
            persist *= 2.0;
            lacuna *= 0.5;
        }

        Self { octaves }
    }

    /// Beta-era initialization with explicit multipliers per octave.
    #[must_use]
    pub fn new_beta(
        rng: &mut LegacyRandom,
        octcnt: i32,
        mut lac: f64,
        lac_mul: f64,
        mut persist: f64,
        persist_mul: f64,
    ) -> Self {
        let mut octaves = SmallVec::with_capacity(octcnt as usize);
        for _ in 0..octcnt {
            let mut p = Perlin::new(rng);
            p.amplitude = persist;
            p.lacunarity = lac;
            octaves.push(p);
            persist *= persist_mul;
            lac *= lac_mul;
        }
        Self { octaves }
    }

    /// 1.18+ initialization: two xoroshiro draws fork the world random, and
    /// each non-zero amplitude octave gets its own generator XORed with the
    /// matching [`MD5_OCTAVE_N`] constant. `nmax > 0` caps the octave count
    /// (used when a double-perlin splits one buffer between its halves).
    #[must_use]
    pub fn new_xoroshiro(xr: &mut Xoroshiro, amplitudes: &[f64], omin: i32, nmax: i32) -> Self {
        let mut lacuna = LACUNA_INI[(-omin) as usize];
        let mut persist = PERSIST_INI[amplitudes.len()];
        let xlo = xr.next_long();
        let xhi = xr.next_long();

        let mut octaves = SmallVec::new();
        for (i, &amp) in amplitudes.iter().enumerate() {
            if nmax > 0 && octaves.len() as i32 == nmax {
                break;
            }
            if amp != 0.0 {
                let md5 = MD5_OCTAVE_N[(12 + omin) as usize + i];
                let mut pxr = Xoroshiro::from_state(xlo ^ md5[0], xhi ^ md5[1]);
                let mut p = Perlin::new(&mut pxr);
                p.amplitude = amp * persist;
                p.lacunarity = lacuna;
                octaves.push(p);
            }
            lacuna *= 2.0;
            persist *= 0.5;
        }
        Self { octaves }
    }

    /// Number of live octaves.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.octaves.len()
    }

    /// Whether the stack is empty (all amplitudes were zero).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.octaves.is_empty()
    }

    /// The octave generators, lowest frequency first.
    #[inline]
    #[must_use]
    pub fn octaves(&self) -> &[Perlin] {
        &self.octaves
    }

    /// Amplitude-weighted sum over all octaves at `(x, y, z)`.
    #[must_use]
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let mut v = 0.0;
        for p in &self.octaves {
            v += p.amplitude * p.sample_scaled(x, y, z);
        }
        v
    }

    /// Sum with vertical clamping, optionally substituting each octave's
    /// height-invariant plane for the y coordinate (`ydefault`).
    #[must_use]
    pub fn sample_amp(&self, x: f64, y: f64, z: f64, yamp: f64, ymin: f64, ydefault: bool) -> f64 {
        let mut v = 0.0;
        for p in &self.octaves {
            let lf = p.lacunarity;
            let ax = maintain_precision(x * lf);
            let ay = if ydefault { -p.b } else { maintain_precision(y * lf) };
            let az = maintain_precision(z * lf);
            v += p.amplitude * p.sample(ax, ay, az, yamp * lf, ymin * lf);
        }
        v
    }

    /// Beta-era 2D climate sample: simplex per octave with the lattice
    /// offsets folded into the coordinates.
    #[must_use]
    pub fn sample_beta_biome(&self, x: f64, z: f64) -> f64 {
        let mut v = 0.0;
        for p in &self.octaves {
            let lf = p.lacunarity;
            let ax = maintain_precision(x * lf) + p.a;
            let az = maintain_precision(z * lf) + p.b;
            v += p.amplitude * p.sample_simplex2d(ax, az);
        }
        v
    }

    /// Beta-era terrain column sample for the two sea-level cells.
    /// `lacmin` skips octaves above that lacunarity when non-zero.
    pub fn sample_beta_terrain(&self, v: &mut [f64; 2], x: f64, z: f64, y_half: bool, lacmin: f64) {
        v[0] = 0.0;
        v[1] = 0.0;
        for p in &self.octaves {
            let lf = p.lacunarity;
            if lacmin != 0.0 && lf > lacmin {
                continue;
            }
            let ax = maintain_precision(x * lf);
            let az = maintain_precision(z * lf);
            p.sample_beta17_terrain(v, ax, az, if y_half { 0.5 } else { 1.0 });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn md5_constants_match_digests() {
        for (i, pair) in MD5_OCTAVE_N.iter().enumerate() {
            let name = format!("octave_{}", i as i32 - 12);
            let digest = md5::compute(name.as_bytes());
            let lo = u64::from_be_bytes(digest.0[0..8].try_into().expect("8 bytes"));
            let hi = u64::from_be_bytes(digest.0[8..16].try_into().expect("8 bytes"));
            assert_eq!([lo, hi], *pair, "constant mismatch for {name}");
        }
    }

    #[test]
    fn legacy_init_skips_match_explicit_init() {
        // an (omin=-2, len=1) stack must leave the rng where a full
        // (omin=-2, len=3) stack leaves it after its first two octaves
        let mut r1 = LegacyRandom::from_seed(5);
        let _ = Octave::new_legacy(&mut r1, -2, 1);
        let mut r2 = LegacyRandom::from_seed(5);
        r2.consume_count(2 * 262);
        let _ = Perlin::new(&mut r2);
        assert_eq!(r1, r2);
    }

    #[test]
    fn xoroshiro_init_counts_nonzero_amplitudes() {
        let mut xr = Xoroshiro::from_seed(11);
        let oct = Octave::new_xoroshiro(&mut xr, &[1.0, 0.0, 1.0, 2.0], -4, -1);
        assert_eq!(oct.len(), 3);
    }

    #[test]
    fn sample_is_deterministic() {
        let mut r1 = LegacyRandom::from_seed(31337);
        let mut r2 = LegacyRandom::from_seed(31337);
        let a = Octave::new_legacy(&mut r1, -7, 2);
        let b = Octave::new_legacy(&mut r2, -7, 2);
        #[allow(clippy::float_cmp)]
        {
            assert_eq!(a.sample(123.0, 0.0, -456.0), b.sample(123.0, 0.0, -456.0));
        }
    }
}
