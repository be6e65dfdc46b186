//! The version-dispatched generator façade.

use lodestone_registry::biome_id::NETHER_WASTES;
use lodestone_registry::{BiomeId, McVersion};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::beta::{BiomeNoiseBeta, SurfaceNoiseBeta};
use crate::climate::{BiomeNoise, voronoi_src_range};
use crate::end::EndNoise;
use crate::layers::{LayerId, LayerKind, LayerStack, voronoi_sha};
use crate::nether::NetherNoise;
use crate::{BiomeCache, GenError, Range};

/// World dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// The nether (`-1`).
    Nether,
    /// The overworld (`0`).
    Overworld,
    /// The end (`+1`).
    End,
}

/// Generator behavior flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeneratorFlags(pub u32);

impl GeneratorFlags {
    /// No flags.
    pub const NONE: Self = Self(0);
    /// Multiply the horizontal wavelengths of the overworld by four.
    pub const LARGE_BIOMES: Self = Self(1);
    /// Substitute the ocean-mix chain at coarse scales so deep ocean
    /// variants can be observed there (1.13+).
    pub const FORCE_OCEAN_VARIANTS: Self = Self(2);
    /// Skip the Beta sea-level sampling; Beta maps then carry no oceans.
    pub const NO_BETA_OCEAN: Self = Self(4);
    /// Skip the lateral shift jitter of the 1.18+ climate sampling.
    pub const SAMPLE_NO_SHIFT: Self = Self(8);

    /// Whether all bits of `other` are set.
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for GeneratorFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Overworld pipeline variant.
enum Pipeline {
    /// Layered cascade (Beta 1.8 – 1.17).
    Legacy {
        stack: LayerStack,
        /// Caller-installed scale-0 entry.
        custom_entry: Option<LayerId>,
    },
    /// Climate noise (1.18+).
    Modern(Box<BiomeNoise>),
    /// Beta climate (≤ Beta 1.7).
    Beta(BiomeNoiseBeta),
}

/// A seeded, version-dispatched biome generator.
///
/// One generator serves one dimension at a time; `apply_seed` rewrites the
/// per-layer salts, so workers must own private instances.
pub struct Generator {
    mc: McVersion,
    flags: GeneratorFlags,
    dim: Dimension,
    seed: u64,
    sha: u64,
    pipeline: Pipeline,
    nether: NetherNoise,
    end: EndNoise,
}

impl Generator {
    /// Configure the pipelines for a version. The generator is unseeded
    /// until [`Self::apply_seed`].
    #[must_use]
    pub fn new(mc: McVersion, flags: GeneratorFlags) -> Self {
        let pipeline = if mc.is_layered() {
            let mut stack = LayerStack::setup(mc, flags.contains(GeneratorFlags::LARGE_BIOMES));
            if flags.contains(GeneratorFlags::FORCE_OCEAN_VARIANTS) && mc >= McVersion::V1_13 {
                let [ocean_temp_256, zoom_64_ocean, zoom_16_ocean] =
                    stack.ocean_chain.expect("1.13+ stacks carry the ocean chain");
                let e16 = stack.entry_16;
                let e64 = stack.entry_64;
                let e256 = stack.entry_256;
                stack.entry_16 = stack.push_layer(
                    LayerKind::OceanMixMod,
                    1,
                    0,
                    0,
                    Some(e16),
                    Some(zoom_16_ocean),
                );
                stack.entry_64 = stack.push_layer(
                    LayerKind::OceanMixMod,
                    1,
                    0,
                    0,
                    Some(e64),
                    Some(zoom_64_ocean),
                );
                stack.entry_256 = stack.push_layer(
                    LayerKind::OceanMixMod,
                    1,
                    0,
                    0,
                    Some(e256),
                    Some(ocean_temp_256),
                );
            }
            Pipeline::Legacy {
                stack,
                custom_entry: None,
            }
        } else if mc.is_climate() {
            Pipeline::Modern(Box::new(BiomeNoise::new(mc)))
        } else {
            Pipeline::Beta(BiomeNoiseBeta::default())
        };

        debug!(?mc, flags = flags.0, "generator configured");
        Self {
            mc,
            flags,
            dim: Dimension::Overworld,
            seed: 0,
            sha: 0,
            pipeline,
            nether: NetherNoise::default(),
            end: EndNoise::new(mc),
        }
    }

    /// The configured version.
    #[must_use]
    pub fn mc(&self) -> McVersion {
        self.mc
    }

    /// The configured flags.
    #[must_use]
    pub fn flags(&self) -> GeneratorFlags {
        self.flags
    }

    /// The seeded dimension.
    #[must_use]
    pub fn dim(&self) -> Dimension {
        self.dim
    }

    /// The applied world seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The voronoi SHA salt (1.15+; 0 before).
    #[must_use]
    pub fn sha(&self) -> u64 {
        self.sha
    }

    /// The layer stack (legacy versions only).
    #[must_use]
    pub fn layer_stack(&self) -> Option<&LayerStack> {
        match &self.pipeline {
            Pipeline::Legacy { stack, .. } => Some(stack),
            _ => None,
        }
    }

    /// Mutable layer stack access for finder sieves that reseed sub-graphs.
    #[must_use]
    pub fn layer_stack_mut(&mut self) -> Option<&mut LayerStack> {
        match &mut self.pipeline {
            Pipeline::Legacy { stack, .. } => Some(stack),
            _ => None,
        }
    }

    /// The climate sampler (1.18+ only).
    #[must_use]
    pub fn biome_noise(&self) -> Option<&BiomeNoise> {
        match &self.pipeline {
            Pipeline::Modern(bn) => Some(bn),
            _ => None,
        }
    }

    /// Mutable climate sampler access, e.g. to restrict sampling to a single
    /// climate axis for visualisation.
    #[must_use]
    pub fn biome_noise_mut(&mut self) -> Option<&mut BiomeNoise> {
        match &mut self.pipeline {
            Pipeline::Modern(bn) => Some(bn),
            _ => None,
        }
    }

    /// The End noise (seeded for the End dimension).
    #[must_use]
    pub fn end_noise(&self) -> Option<&EndNoise> {
        matches!(self.dim, Dimension::End).then_some(&self.end)
    }

    /// Install a scale-0 entry layer for the legacy cascade.
    pub fn set_custom_entry(&mut self, id: LayerId) {
        if let Pipeline::Legacy { custom_entry, .. } = &mut self.pipeline {
            *custom_entry = Some(id);
        }
    }

    /// Seed the generator for a dimension; descends the layer graph (or the
    /// climate fields) deriving every per-layer salt.
    pub fn apply_seed(&mut self, dim: Dimension, seed: u64) {
        self.dim = dim;
        self.seed = seed;
        self.sha = if self.mc >= McVersion::V1_15 {
            voronoi_sha(seed)
        } else {
            0
        };

        match (&mut self.pipeline, dim) {
            (Pipeline::Legacy { stack, .. }, Dimension::Overworld) => {
                stack.set_seed(seed, self.sha);
            }
            (Pipeline::Modern(bn), Dimension::Overworld) => {
                bn.set_seed(seed, self.flags.contains(GeneratorFlags::LARGE_BIOMES));
            }
            (Pipeline::Beta(bnb), Dimension::Overworld) => bnb.set_seed(seed),
            (_, Dimension::Nether) => {
                if self.mc >= McVersion::V1_16_1 {
                    self.nether.set_seed(seed);
                }
            }
            (_, Dimension::End) => {
                if self.mc >= McVersion::V1_9 {
                    self.end.set_seed(seed);
                }
            }
        }
        debug!(seed, ?dim, "seed applied");
    }

    /// The entry layer serving a scale (legacy overworld only). Scale 0
    /// requires a previously installed custom entry.
    pub fn layer_for_scale(&self, scale: i32) -> Result<LayerId, GenError> {
        let Pipeline::Legacy {
            stack,
            custom_entry,
        } = &self.pipeline
        else {
            return Err(GenError::UnsupportedVersion);
        };
        match scale {
            0 => custom_entry.ok_or(GenError::UnsupportedScale(0)),
            1 => Ok(stack.entry_1),
            4 => Ok(stack.entry_4),
            16 => Ok(stack.entry_16),
            64 => Ok(stack.entry_64),
            256 => Ok(stack.entry_256),
            s => Err(GenError::UnsupportedScale(s)),
        }
    }

    fn check_noise_scale(scale: i32) -> Result<(), GenError> {
        match scale {
            1 | 4 | 16 | 64 | 256 => Ok(()),
            s => Err(GenError::UnsupportedScale(s)),
        }
    }

    /// Minimum cache length for a range; the single source of truth for
    /// buffer sizing.
    #[must_use]
    pub fn min_cache_size(&self, r: &Range) -> usize {
        let mut len = r.volume();

        match (&self.pipeline, self.dim) {
            (Pipeline::Legacy { stack, .. }, Dimension::Overworld) => {
                if let Ok(entry) = self.layer_for_scale(r.scale) {
                    let len2d = stack.min_cache_size(entry, r.sx, r.sz);
                    len += len2d - (r.sx * r.sz) as usize;
                }
            }
            _ => {
                if r.scale == 1 {
                    // temporary copy of the voronoi source
                    let s = voronoi_src_range(*r);
                    len += s.volume();
                }
            }
        }
        len
    }

    /// Allocate a cache sized for `r`.
    pub fn alloc_cache(&self, r: &Range) -> Result<BiomeCache, GenError> {
        r.validate()?;
        let len = self.min_cache_size(r);
        if len == 0 {
            return Err(GenError::AllocationFailed);
        }
        Ok(BiomeCache::with_len(len))
    }

    /// Generate the biomes of `r` into `cache`.
    ///
    /// Output cells are indexed `out[i_y*sx*sz + i_z*sx + i_x]`; the cache
    /// must hold at least [`Self::min_cache_size`] entries.
    pub fn gen_biomes(&self, cache: &mut BiomeCache, r: Range) -> Result<(), GenError> {
        r.validate()?;
        let need = self.min_cache_size(&r);
        if cache.len() < need {
            return Err(GenError::InvalidRange("cache smaller than the range needs"));
        }
        let out = cache.as_mut_slice();

        match (&self.pipeline, self.dim) {
            (Pipeline::Legacy { stack, .. }, Dimension::Overworld) => {
                let entry = self.layer_for_scale(r.scale)?;
                stack.gen_area(entry, out, r.x, r.z, r.sx, r.sz);
                // the legacy overworld has no vertical noise: expand 2D to 3D
                let layer = (r.sx * r.sz) as usize;
                for k in 1..r.sy_eff() as usize {
                    out.copy_within(0..layer, k * layer);
                }
                Ok(())
            }
            (Pipeline::Modern(bn), Dimension::Overworld) => {
                Self::check_noise_scale(r.scale)?;
                let flags = if self.flags.contains(GeneratorFlags::SAMPLE_NO_SHIFT) {
                    crate::climate::SAMPLE_NO_SHIFT
                } else {
                    0
                };
                bn.gen_scaled(out, r, self.sha, flags);
                Ok(())
            }
            (Pipeline::Beta(bnb), Dimension::Overworld) => {
                Self::check_noise_scale(r.scale)?;
                if self.flags.contains(GeneratorFlags::NO_BETA_OCEAN) {
                    bnb.gen_scaled(None, out, r);
                } else {
                    let snb = SurfaceNoiseBeta::new(self.seed);
                    bnb.gen_scaled(Some(&snb), out, r);
                }
                Ok(())
            }
            (_, Dimension::Nether) => {
                Self::check_noise_scale(r.scale)?;
                if self.mc < McVersion::V1_16_1 {
                    out[..r.volume()].fill(NETHER_WASTES);
                } else {
                    self.nether.gen_scaled(out, r, self.sha);
                }
                Ok(())
            }
            (_, Dimension::End) => {
                Self::check_noise_scale(r.scale)?;
                if self.mc <= McVersion::B1_8 {
                    return Err(GenError::UnsupportedVersion);
                }
                self.end.gen_scaled(out, r, self.sha);
                Ok(())
            }
        }
    }

    /// Convenience 1x1x1 query; allocates and releases a minimal cache.
    pub fn biome_at(&self, scale: i32, x: i32, y: i32, z: i32) -> Result<BiomeId, GenError> {
        let r = Range {
            scale,
            x,
            z,
            sx: 1,
            sz: 1,
            y,
            sy: 1,
        };
        let mut cache = self.alloc_cache(&r)?;
        self.gen_biomes(&mut cache, r)?;
        Ok(cache.ids(&r)[0])
    }

    /// Like [`Self::biome_at`] but reusing a caller cache across queries.
    pub fn biome_at_cached(
        &self,
        cache: &mut BiomeCache,
        scale: i32,
        x: i32,
        y: i32,
        z: i32,
    ) -> Result<BiomeId, GenError> {
        let r = Range {
            scale,
            x,
            z,
            sx: 1,
            sz: 1,
            y,
            sy: 1,
        };
        cache.ensure_len(self.min_cache_size(&r));
        self.gen_biomes(cache, r)?;
        Ok(cache.ids(&r)[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_scale_is_reported() {
        let mut g = Generator::new(McVersion::V1_12, GeneratorFlags::NONE);
        g.apply_seed(Dimension::Overworld, 1);
        assert_eq!(g.layer_for_scale(2).unwrap_err(), GenError::UnsupportedScale(2));
        assert_eq!(g.layer_for_scale(0).unwrap_err(), GenError::UnsupportedScale(0));
        assert!(g.layer_for_scale(256).is_ok());
    }

    #[test]
    fn invalid_range_is_reported() {
        let mut g = Generator::new(McVersion::V1_12, GeneratorFlags::NONE);
        g.apply_seed(Dimension::Overworld, 1);
        let r = Range::area(4, 0, 0, 0, 4);
        let mut cache = BiomeCache::with_len(64);
        assert!(matches!(
            g.gen_biomes(&mut cache, r),
            Err(GenError::InvalidRange(_))
        ));
    }

    #[test]
    fn point_query_is_window_independent() {
        for mc in [McVersion::V1_7, McVersion::V1_13, McVersion::V1_16] {
            let mut g = Generator::new(mc, GeneratorFlags::NONE);
            g.apply_seed(Dimension::Overworld, 0x1234_5678);

            let r1 = Range::area(4, -8, -8, 17, 17);
            let mut c1 = g.alloc_cache(&r1).expect("cache");
            g.gen_biomes(&mut c1, r1).expect("gen");

            let r2 = Range::area(4, 0, 0, 3, 3);
            let mut c2 = g.alloc_cache(&r2).expect("cache");
            g.gen_biomes(&mut c2, r2).expect("gen");

            for dz in 0..3 {
                for dx in 0..3 {
                    let a = c1.ids(&r1)[((dz + 8) * 17 + dx + 8) as usize];
                    let b = c2.ids(&r2)[(dz * 3 + dx) as usize];
                    assert_eq!(a, b, "{mc:?} at ({dx},{dz})");
                }
            }
        }
    }

    #[test]
    fn tiling_matches_single_window() {
        let mut g = Generator::new(McVersion::V1_12, GeneratorFlags::NONE);
        g.apply_seed(Dimension::Overworld, 42);

        let full = Range::area(16, -6, -6, 12, 12);
        let mut cf = g.alloc_cache(&full).expect("cache");
        g.gen_biomes(&mut cf, full).expect("gen");

        for tz in 0..2 {
            for tx in 0..2 {
                let tile = Range::area(16, -6 + tx * 6, -6 + tz * 6, 6, 6);
                let mut ct = g.alloc_cache(&tile).expect("cache");
                g.gen_biomes(&mut ct, tile).expect("gen");
                for j in 0..6 {
                    for i in 0..6 {
                        let a = cf.ids(&full)[((tz * 6 + j) * 12 + tx * 6 + i) as usize];
                        let b = ct.ids(&tile)[(j * 6 + i) as usize];
                        assert_eq!(a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn nether_is_uniform_before_1_16() {
        let mut g = Generator::new(McVersion::V1_15, GeneratorFlags::NONE);
        g.apply_seed(Dimension::Nether, 9);
        assert_eq!(g.biome_at(4, 100, 0, 100).expect("gen"), NETHER_WASTES);
    }

    #[test]
    fn end_rejects_beta_versions() {
        let mut g = Generator::new(McVersion::B1_8, GeneratorFlags::NONE);
        g.apply_seed(Dimension::End, 9);
        assert_eq!(g.biome_at(4, 0, 0, 0).unwrap_err(), GenError::UnsupportedVersion);
    }

    #[test]
    fn forced_ocean_variants_change_coarse_entries() {
        let g = Generator::new(McVersion::V1_16, GeneratorFlags::FORCE_OCEAN_VARIANTS);
        let stack = g.layer_stack().expect("legacy");
        assert_eq!(stack.layer(stack.entry_256).kind, LayerKind::OceanMixMod);
        assert_eq!(stack.layer(stack.entry_16).kind, LayerKind::OceanMixMod);
    }
}
