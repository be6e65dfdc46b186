//! The legacy layered biome cascade (Beta 1.8 – 1.17).
//!
//! Layers are pure cell transforms over rectangular int arrays, composed into
//! a per-version DAG rooted at a 1:4096 continent layer. The graph has
//! diamond dependencies (the river/hills noise chain joins back at river-mix
//! and hills), so layers live in an arena indexed by [`LayerId`] and refer to
//! their parents by index.
//!
//! A layer draws per-cell random numbers from a position-dependent chunk
//! seed derived from its `start_seed`; the drawing state never escapes a
//! cell, which is what makes rectangle queries window-independent.

mod ops_biome;
mod ops_land;
mod ops_ocean;
mod ops_river;
mod voronoi;

pub use voronoi::{voronoi_access_3d, voronoi_sha};

use lodestone_registry::McVersion;
use lodestone_utils::noise::Perlin;
use lodestone_utils::random::LegacyRandom;

// ── chunk-seed arithmetic ───────────────────────────────────────────────────

const STEP_MUL: u64 = 6364136223846793005;
const STEP_ADD: u64 = 1442695040888963407;

/// Sentinel salt: the layer's `start_salt` is the per-seed SHA of the world
/// seed (1.15+ voronoi).
pub const LAYER_INIT_SHA: u64 = u64::MAX;

/// One self-multiplying mix round: `s*(s*M + A) + salt`.
#[inline]
#[must_use]
pub const fn mc_step_seed(s: u64, salt: u64) -> u64 {
    s.wrapping_mul(s.wrapping_mul(STEP_MUL).wrapping_add(STEP_ADD))
        .wrapping_add(salt)
}

/// First value drawn from a chunk seed, in `[0, bound)`.
#[inline]
#[must_use]
pub const fn mc_first_int(s: u64, bound: i32) -> i32 {
    let mut ret = (((s as i64) >> 24) % bound as i64) as i32;
    if ret < 0 {
        ret += bound;
    }
    ret
}

/// Whether the first value drawn from a chunk seed is zero.
#[inline]
#[must_use]
pub const fn mc_first_is_zero(s: u64, bound: i32) -> bool {
    ((s as i64) >> 24) % bound as i64 == 0
}

/// Position-dependent chunk seed for a layer's `start_seed`.
#[inline]
#[must_use]
pub const fn get_chunk_seed(ss: u64, x: i32, z: i32) -> u64 {
    let mut cs = ss.wrapping_add(x as u64);
    cs = mc_step_seed(cs, z as u64);
    cs = mc_step_seed(cs, x as u64);
    mc_step_seed(cs, z as u64)
}

/// Layer salt from a numeric salt base: three self-multiplying rounds.
#[inline]
#[must_use]
pub const fn get_layer_salt(salt: u64) -> u64 {
    let mut ls = mc_step_seed(salt, salt);
    ls = mc_step_seed(ls, salt);
    mc_step_seed(ls, salt)
}

/// Start salt from the world seed and a layer salt.
#[inline]
#[must_use]
pub const fn get_start_salt(ws: u64, ls: u64) -> u64 {
    let mut st = mc_step_seed(ws, ls);
    st = mc_step_seed(st, ls);
    mc_step_seed(st, ls)
}

/// Start seed from the world seed and a layer salt.
#[inline]
#[must_use]
pub const fn get_start_seed(ws: u64, ls: u64) -> u64 {
    mc_step_seed(get_start_salt(ws, ls), 0)
}

// ── the layer arena ─────────────────────────────────────────────────────────

/// Index of a layer in its stack's arena.
pub type LayerId = usize;

/// The cell-transform operator a layer applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum LayerKind {
    /// Bernoulli 1-in-10 island seed at 1:4096, origin forced to land.
    Continent,
    /// 2x upscale choosing the diagonal child uniformly among the parents.
    ZoomFuzzy,
    /// 2x upscale with majority vote, falling back to a uniform pick.
    Zoom,
    /// Cellular land growth/erosion, Beta 1.8 rules.
    LandB18,
    /// Cellular land growth/erosion, release 1.0–1.6 rules.
    Land16,
    /// Cellular land growth/erosion, 1.7+ rules (preserves freezing cells).
    Land,
    /// Regrows isolated patches of ocean into land.
    Island,
    /// 1.0–1.6 snow marker (1-in-5 snowy tundra).
    Snow16,
    /// 1.7+ temperature bands: warm/cold/freezing split.
    Snow,
    /// Warm cells adjacent to cold/freezing become lush.
    Cool,
    /// Freezing cells adjacent to warm/lush become cold.
    Heat,
    /// Rare mutation marker in the high nibble, 1-in-13.
    Special,
    /// Mushroom fields on isolated ocean cells, 1-in-100.
    Mushroom,
    /// Ocean cells surrounded by ocean become deep ocean.
    DeepOcean,
    /// Temperature bands (or Beta/1.6 land values) to categorical biomes.
    Biome,
    /// Jungle to bamboo jungle, 1-in-10 (1.14+).
    Bamboo,
    /// Smooths illegal biome adjacencies.
    BiomeEdge,
    /// River-noise init: land cells get a random class.
    Noise,
    /// Hill/mutation variants driven by the noise chain.
    Hills,
    /// Plains to sunflower plains, 1-in-57.
    Sunflower,
    /// Marks river cells where the reduced class differs from a neighbor.
    River,
    /// Axis-aligned median filter.
    Smooth,
    /// Extra rivers inside swamp and jungle (1.0–1.6).
    SwampRiver,
    /// Beaches and shore biomes between land and ocean.
    Shore,
    /// Overlays the river chain onto the biome chain.
    RiverMix,
    /// Warm/lukewarm/cold/frozen ocean noise (1.13+).
    OceanTemp,
    /// Replaces ocean cells with their temperature variant (1.13+).
    OceanMix,
    /// Ocean-mix variant that re-derives deep ocean variants at coarse
    /// scales (`FORCE_OCEAN_VARIANTS`).
    OceanMixMod,
    /// Final 4x zoom with LCG-jittered cell centers (pre-1.15).
    Voronoi114,
    /// Final 4x zoom with the SHA-salted position hash (1.15+).
    Voronoi,
}

/// A bound layer node.
#[derive(Debug, Clone)]
pub struct Layer {
    /// Operator.
    pub kind: LayerKind,
    /// Version the stack was built for.
    pub mc: McVersion,
    /// Coordinate magnification relative to the parent (1, 2 or 4).
    pub zoom: i8,
    /// Halo cells required from the parent before zooming.
    pub edge: i8,
    /// Blocks per cell at this layer; assigned by the stack builder.
    pub scale: i32,
    /// Salt derived from the salt base; 0 and [`LAYER_INIT_SHA`] are
    /// special.
    pub layer_salt: u64,
    /// Seed-derived salt, set by [`LayerStack::set_seed`].
    pub start_salt: u64,
    /// Seed-derived chunk-seed base, set by [`LayerStack::set_seed`].
    pub start_seed: u64,
    /// First parent.
    pub p: Option<LayerId>,
    /// Second parent (river-mix, hills, ocean-mix).
    pub p2: Option<LayerId>,
}

/// A per-version stack of bound layers with cached entry points.
#[derive(Debug, Clone)]
pub struct LayerStack {
    layers: Vec<Layer>,
    /// Perlin hook for the ocean temperature layer (1.13+).
    pub(crate) ocean_rnd: Option<Perlin>,
    /// Entry at scale 1:1 (voronoi resolution).
    pub entry_1: LayerId,
    /// Entry at scale 1:4 (biome resolution).
    pub entry_4: LayerId,
    /// Entry at scale 1:16.
    pub entry_16: LayerId,
    /// Entry at scale 1:64.
    pub entry_64: LayerId,
    /// Entry at scale 1:256.
    pub entry_256: LayerId,
    /// Ocean temperature chain handles at scales 256/64/16 (1.13+), for the
    /// forced ocean-variant rewiring.
    pub ocean_chain: Option<[LayerId; 3]>,
}

struct StackBuilder {
    layers: Vec<Layer>,
    mc: McVersion,
}

impl StackBuilder {
    fn push(
        &mut self,
        kind: LayerKind,
        zoom: i8,
        edge: i8,
        salt_base: u64,
        p: Option<LayerId>,
        p2: Option<LayerId>,
    ) -> LayerId {
        let layer_salt = if salt_base == 0 || salt_base == LAYER_INIT_SHA {
            salt_base
        } else {
            get_layer_salt(salt_base)
        };
        self.layers.push(Layer {
            kind,
            mc: self.mc,
            zoom,
            edge,
            scale: 0,
            layer_salt,
            start_salt: 0,
            start_seed: 0,
            p,
            p2,
        });
        self.layers.len() - 1
    }
}

impl LayerStack {
    /// Build the per-version stack. `large_biomes` inserts the extra zoom
    /// pair (ignored before 1.3, where the option did not exist).
    #[must_use]
    pub fn setup(mc: McVersion, mut large_biomes: bool) -> Self {
        use LayerKind as K;
        if mc < McVersion::V1_3 {
            large_biomes = false;
        }

        let mut b = StackBuilder {
            layers: Vec::with_capacity(64),
            mc,
        };

        // head: continents, climate bands and the 1:256 biome assignment
        //                      kind            zoom edge salt   parents
        let (mut p, noise_256, biome_256);
        let mut bamboo_256 = None;
        if mc == McVersion::B1_8 {
            p = b.push(K::Continent, 1, 0, 1, None, None);
            p = b.push(K::ZoomFuzzy, 2, 3, 2000, Some(p), None);
            p = b.push(K::LandB18, 1, 2, 1, Some(p), None);
            p = b.push(K::Zoom, 2, 3, 2001, Some(p), None);
            p = b.push(K::LandB18, 1, 2, 2, Some(p), None);
            p = b.push(K::Zoom, 2, 3, 2002, Some(p), None);
            p = b.push(K::LandB18, 1, 2, 3, Some(p), None);
            p = b.push(K::Zoom, 2, 3, 2003, Some(p), None);
            p = b.push(K::LandB18, 1, 2, 3, Some(p), None);
            p = b.push(K::Zoom, 2, 3, 2004, Some(p), None);
            let land_256 = b.push(K::LandB18, 1, 2, 3, Some(p), None);
            biome_256 = b.push(K::Biome, 1, 0, 200, Some(land_256), None);
            p = b.push(K::Zoom, 2, 3, 1000, Some(biome_256), None);
            p = b.push(K::Zoom, 2, 3, 1001, Some(p), None);
            noise_256 = b.push(K::Noise, 1, 0, 100, Some(land_256), None);
        } else if mc <= McVersion::V1_6 {
            p = b.push(K::Continent, 1, 0, 1, None, None);
            p = b.push(K::ZoomFuzzy, 2, 3, 2000, Some(p), None);
            p = b.push(K::Land16, 1, 2, 1, Some(p), None);
            p = b.push(K::Zoom, 2, 3, 2001, Some(p), None);
            p = b.push(K::Land16, 1, 2, 2, Some(p), None);
            p = b.push(K::Snow16, 1, 2, 2, Some(p), None);
            p = b.push(K::Zoom, 2, 3, 2002, Some(p), None);
            p = b.push(K::Land16, 1, 2, 3, Some(p), None);
            p = b.push(K::Zoom, 2, 3, 2003, Some(p), None);
            p = b.push(K::Land16, 1, 2, 4, Some(p), None);
            let mushroom_256 = b.push(K::Mushroom, 1, 2, 5, Some(p), None);
            biome_256 = b.push(K::Biome, 1, 0, 200, Some(mushroom_256), None);
            p = b.push(K::Zoom, 2, 3, 1000, Some(biome_256), None);
            p = b.push(K::Zoom, 2, 3, 1001, Some(p), None);
            noise_256 = b.push(K::Noise, 1, 0, 100, Some(mushroom_256), None);
        } else {
            p = b.push(K::Continent, 1, 0, 1, None, None);
            p = b.push(K::ZoomFuzzy, 2, 3, 2000, Some(p), None);
            p = b.push(K::Land, 1, 2, 1, Some(p), None);
            p = b.push(K::Zoom, 2, 3, 2001, Some(p), None);
            p = b.push(K::Land, 1, 2, 2, Some(p), None);
            p = b.push(K::Land, 1, 2, 50, Some(p), None);
            p = b.push(K::Land, 1, 2, 70, Some(p), None);
            p = b.push(K::Island, 1, 2, 2, Some(p), None);
            p = b.push(K::Snow, 1, 2, 2, Some(p), None);
            p = b.push(K::Land, 1, 2, 3, Some(p), None);
            p = b.push(K::Cool, 1, 2, 2, Some(p), None);
            p = b.push(K::Heat, 1, 2, 2, Some(p), None);
            p = b.push(K::Special, 1, 2, 3, Some(p), None);
            p = b.push(K::Zoom, 2, 3, 2002, Some(p), None);
            p = b.push(K::Zoom, 2, 3, 2003, Some(p), None);
            p = b.push(K::Land, 1, 2, 4, Some(p), None);
            p = b.push(K::Mushroom, 1, 2, 5, Some(p), None);
            let deep_ocean_256 = b.push(K::DeepOcean, 1, 2, 4, Some(p), None);
            biome_256 = b.push(K::Biome, 1, 0, 200, Some(deep_ocean_256), None);
            let mut bm = biome_256;
            if mc >= McVersion::V1_14 {
                bm = b.push(K::Bamboo, 1, 0, 1001, Some(bm), None);
                bamboo_256 = Some(bm);
            }
            p = b.push(K::Zoom, 2, 3, 1000, Some(bm), None);
            p = b.push(K::Zoom, 2, 3, 1001, Some(p), None);
            p = b.push(K::BiomeEdge, 1, 2, 1000, Some(p), None);
            noise_256 = b.push(K::Noise, 1, 0, 100, Some(deep_ocean_256), None);
        }
        let biome_chain_64 = p;

        // noise chain zoomed for the hills layer; pre-1.13 these zoom layers
        // carry no salt
        let hills_noise_64 = if mc <= McVersion::V1_0 {
            None
        } else {
            let (s1, s2) = if mc <= McVersion::V1_12 { (0, 0) } else { (1000, 1001) };
            let q = b.push(K::Zoom, 2, 3, s1, Some(noise_256), None);
            Some(b.push(K::Zoom, 2, 3, s2, Some(q), None))
        };

        // tail: hills, shore and the final shape layers
        let (smooth_4, entry_64_cand, entry_16_cand, large_16, large_64, large_256);
        if mc <= McVersion::V1_0 {
            // no hills; the shore slot runs at 1:32
            p = b.push(K::Zoom, 2, 3, 1000, Some(biome_chain_64), None);
            let land_kind = if mc == McVersion::B1_8 { K::LandB18 } else { K::Land16 };
            p = b.push(land_kind, 1, 2, 3, Some(p), None);
            p = b.push(K::Shore, 1, 2, 1000, Some(p), None);
            p = b.push(K::Zoom, 2, 3, 1001, Some(p), None);
            let zoom_16 = p;
            p = b.push(K::Zoom, 2, 3, 1002, Some(p), None);
            p = b.push(K::Zoom, 2, 3, 1003, Some(p), None);
            smooth_4 = b.push(K::Smooth, 1, 2, 1000, Some(p), None);
            entry_16_cand = zoom_16;
            entry_64_cand = biome_chain_64;
            large_16 = zoom_16;
            large_64 = biome_chain_64;
            large_256 = biome_256;
        } else if mc <= McVersion::V1_6 {
            let hills = b.push(
                K::Hills,
                1,
                2,
                1000,
                Some(biome_chain_64),
                hills_noise_64,
            );
            p = b.push(K::Zoom, 2, 3, 1000, Some(hills), None);
            p = b.push(K::Land16, 1, 2, 3, Some(p), None);
            p = b.push(K::Zoom, 2, 3, 1001, Some(p), None);
            p = b.push(K::Shore, 1, 2, 1000, Some(p), None);
            let swamp_river_16 = b.push(K::SwampRiver, 1, 0, 1000, Some(p), None);
            p = b.push(K::Zoom, 2, 3, 1002, Some(swamp_river_16), None);
            p = b.push(K::Zoom, 2, 3, 1003, Some(p), None);
            let zoom_4 = p;
            if large_biomes {
                p = b.push(K::Zoom, 2, 3, 1004, Some(p), None);
                p = b.push(K::Zoom, 2, 3, 1005, Some(p), None);
            }
            smooth_4 = b.push(K::Smooth, 1, 2, 1000, Some(p), None);
            entry_16_cand = swamp_river_16;
            entry_64_cand = hills;
            large_16 = zoom_4;
            large_64 = swamp_river_16;
            large_256 = hills;
        } else {
            let hills = b.push(
                K::Hills,
                1,
                2,
                1000,
                Some(biome_chain_64),
                hills_noise_64,
            );
            let sunflower_64 = b.push(K::Sunflower, 1, 0, 1001, Some(hills), None);
            p = b.push(K::Zoom, 2, 3, 1000, Some(sunflower_64), None);
            p = b.push(K::Land, 1, 2, 3, Some(p), None);
            p = b.push(K::Zoom, 2, 3, 1001, Some(p), None);
            let shore_16 = b.push(K::Shore, 1, 2, 1000, Some(p), None);
            p = b.push(K::Zoom, 2, 3, 1002, Some(shore_16), None);
            p = b.push(K::Zoom, 2, 3, 1003, Some(p), None);
            let zoom_4 = p;
            if large_biomes {
                p = b.push(K::Zoom, 2, 3, 1004, Some(p), None);
                p = b.push(K::Zoom, 2, 3, 1005, Some(p), None);
            }
            smooth_4 = b.push(K::Smooth, 1, 2, 1000, Some(p), None);
            entry_16_cand = shore_16;
            entry_64_cand = sunflower_64;
            large_16 = zoom_4;
            large_64 = shore_16;
            large_256 = sunflower_64;
        }

        // river chain
        let river_src = noise_256;
        p = b.push(K::Zoom, 2, 3, 1000, Some(river_src), None);
        p = b.push(K::Zoom, 2, 3, 1001, Some(p), None);
        if mc >= McVersion::V1_7 {
            p = b.push(K::Zoom, 2, 3, 1000, Some(p), None);
            p = b.push(K::Zoom, 2, 3, 1001, Some(p), None);
            p = b.push(K::Zoom, 2, 3, 1002, Some(p), None);
            p = b.push(K::Zoom, 2, 3, 1003, Some(p), None);
            if large_biomes && mc == McVersion::V1_7 {
                p = b.push(K::Zoom, 2, 3, 1004, Some(p), None);
                p = b.push(K::Zoom, 2, 3, 1005, Some(p), None);
            }
        } else {
            p = b.push(K::Zoom, 2, 3, 1002, Some(p), None);
            p = b.push(K::Zoom, 2, 3, 1003, Some(p), None);
            p = b.push(K::Zoom, 2, 3, 1004, Some(p), None);
            p = b.push(K::Zoom, 2, 3, 1005, Some(p), None);
            if large_biomes && mc >= McVersion::V1_3 {
                p = b.push(K::Zoom, 2, 3, 1006, Some(p), None);
                p = b.push(K::Zoom, 2, 3, 1007, Some(p), None);
            }
        }
        p = b.push(K::River, 1, 2, 1, Some(p), None);
        let smooth_4_river = b.push(K::Smooth, 1, 2, 1000, Some(p), None);

        let river_mix_4 = b.push(K::RiverMix, 1, 0, 100, Some(smooth_4), Some(smooth_4_river));

        // ocean variants (1.13+) and the final voronoi zoom
        let (entry_1, entry_4);
        let mut ocean_chain = None;
        if mc <= McVersion::V1_12 {
            entry_4 = river_mix_4;
            entry_1 = b.push(K::Voronoi114, 4, 3, 10, Some(river_mix_4), None);
        } else {
            let ocean_temp_256 = b.push(K::OceanTemp, 1, 0, 2, None, None);
            p = b.push(K::Zoom, 2, 3, 2001, Some(ocean_temp_256), None);
            let zoom_64_ocean = b.push(K::Zoom, 2, 3, 2002, Some(p), None);
            p = b.push(K::Zoom, 2, 3, 2003, Some(zoom_64_ocean), None);
            let zoom_16_ocean = b.push(K::Zoom, 2, 3, 2004, Some(p), None);
            p = b.push(K::Zoom, 2, 3, 2005, Some(zoom_16_ocean), None);
            p = b.push(K::Zoom, 2, 3, 2006, Some(p), None);
            let ocean_4 = p;
            let ocean_mix_4 =
                b.push(K::OceanMix, 1, 17, 100, Some(river_mix_4), Some(ocean_4));
            entry_4 = ocean_mix_4;
            entry_1 = if mc <= McVersion::V1_14 {
                b.push(K::Voronoi114, 4, 3, 10, Some(ocean_mix_4), None)
            } else {
                b.push(K::Voronoi, 4, 3, LAYER_INIT_SHA, Some(ocean_mix_4), None)
            };
            ocean_chain = Some([ocean_temp_256, zoom_64_ocean, zoom_16_ocean]);
        }

        let (entry_16, entry_64, entry_256) = if large_biomes {
            (large_16, large_64, large_256)
        } else if mc >= McVersion::V1_1 {
            let e256 = if mc <= McVersion::V1_14 {
                biome_256
            } else {
                bamboo_256.unwrap_or(biome_256)
            };
            (entry_16_cand, entry_64_cand, e256)
        } else {
            (entry_16_cand, entry_64_cand, biome_256)
        };

        let mut stack = Self {
            layers: b.layers,
            ocean_rnd: None,
            entry_1,
            entry_4,
            entry_16,
            entry_64,
            entry_256,
            ocean_chain,
        };
        stack.assign_scale(entry_1, 1);
        stack
    }

    fn assign_scale(&mut self, id: LayerId, scale: i32) {
        self.layers[id].scale = scale;
        let child_scale = scale * i32::from(self.layers[id].zoom);
        if let Some(p) = self.layers[id].p {
            self.assign_scale(p, child_scale);
        }
        if let Some(p2) = self.layers[id].p2 {
            self.assign_scale(p2, child_scale);
        }
    }

    /// All layers, in construction (topological) order.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// One layer.
    #[must_use]
    pub fn layer(&self, id: LayerId) -> &Layer {
        &self.layers[id]
    }

    /// Append a custom layer (used for the forced ocean-variant chains and
    /// caller-installed scale-0 entries); returns its id.
    pub fn push_layer(
        &mut self,
        kind: LayerKind,
        zoom: i8,
        edge: i8,
        salt_base: u64,
        p: Option<LayerId>,
        p2: Option<LayerId>,
    ) -> LayerId {
        let mc = self.layers.first().map_or(McVersion::NEWEST, |l| l.mc);
        let mut b = StackBuilder {
            layers: std::mem::take(&mut self.layers),
            mc,
        };
        let id = b.push(kind, zoom, edge, salt_base, p, p2);
        self.layers = b.layers;
        if let Some(p) = p {
            self.layers[id].scale = self.layers[p].scale;
        }
        id
    }

    /// Seed every layer from the world seed; `sha` is the voronoi salt used
    /// by [`LAYER_INIT_SHA`] layers.
    pub fn set_seed(&mut self, world_seed: u64, sha: u64) {
        for l in &mut self.layers {
            match l.layer_salt {
                0 => {
                    // pre-1.13 zoom layers of the hills chain carry no salt
                    l.start_salt = 0;
                    l.start_seed = 0;
                }
                LAYER_INIT_SHA => {
                    l.start_salt = sha;
                    l.start_seed = 0;
                }
                ls => {
                    l.start_salt = get_start_salt(world_seed, ls);
                    l.start_seed = mc_step_seed(l.start_salt, 0);
                }
            }
        }
        if self.layers.iter().any(|l| l.kind == LayerKind::OceanTemp) {
            let mut rng = LegacyRandom::from_seed(world_seed);
            self.ocean_rnd = Some(Perlin::new(&mut rng));
        } else {
            self.ocean_rnd = None;
        }
    }

    /// Seed only the sub-graph reachable from `entry`; the cheap per-seed
    /// path for finder sieves that never descend to the ocean or voronoi
    /// layers.
    pub fn set_seed_sub(&mut self, entry: LayerId, world_seed: u64) {
        let mut pending = vec![entry];
        while let Some(id) = pending.pop() {
            let (p, p2) = (self.layers[id].p, self.layers[id].p2);
            let l = &mut self.layers[id];
            match l.layer_salt {
                0 | LAYER_INIT_SHA => {
                    l.start_salt = 0;
                    l.start_seed = 0;
                }
                ls => {
                    l.start_salt = get_start_salt(world_seed, ls);
                    l.start_seed = mc_step_seed(l.start_salt, 0);
                }
            }
            pending.extend(p);
            pending.extend(p2);
        }
    }

    // ── generation ─────────────────────────────────────────────────────────

    /// Generate the `w*h` rectangle of layer `id` into `out[..w*h]`, using
    /// the tail of `out` as scratch. `out` must hold at least
    /// [`LayerStack::min_cache_size`] entries for this rectangle.
    pub fn gen_area(&self, id: LayerId, out: &mut [i32], x: i32, z: i32, w: i32, h: i32) {
        out[..(w * h) as usize].fill(0);
        self.get_map(id, out, x, z, w, h);
    }

    pub(crate) fn get_map(&self, id: LayerId, out: &mut [i32], x: i32, z: i32, w: i32, h: i32) {
        use LayerKind as K;
        let l = &self.layers[id];
        match l.kind {
            K::Continent => ops_land::map_continent(l, out, x, z, w, h),
            K::ZoomFuzzy => ops_land::map_zoom(self, l, out, x, z, w, h, true),
            K::Zoom => ops_land::map_zoom(self, l, out, x, z, w, h, false),
            K::LandB18 => ops_land::map_land_b18(self, l, out, x, z, w, h),
            K::Land16 => ops_land::map_land16(self, l, out, x, z, w, h),
            K::Land => ops_land::map_land(self, l, out, x, z, w, h),
            K::Island => ops_land::map_island(self, l, out, x, z, w, h),
            K::Snow16 => ops_land::map_snow16(self, l, out, x, z, w, h),
            K::Snow => ops_land::map_snow(self, l, out, x, z, w, h),
            K::Cool => ops_land::map_cool(self, l, out, x, z, w, h),
            K::Heat => ops_land::map_heat(self, l, out, x, z, w, h),
            K::Special => ops_land::map_special(self, l, out, x, z, w, h),
            K::Mushroom => ops_land::map_mushroom(self, l, out, x, z, w, h),
            K::DeepOcean => ops_land::map_deep_ocean(self, l, out, x, z, w, h),
            K::Biome => ops_biome::map_biome(self, l, out, x, z, w, h),
            K::Bamboo => ops_biome::map_bamboo(self, l, out, x, z, w, h),
            K::BiomeEdge => ops_biome::map_biome_edge(self, l, out, x, z, w, h),
            K::Noise => ops_biome::map_noise(self, l, out, x, z, w, h),
            K::Hills => ops_biome::map_hills(self, l, out, x, z, w, h),
            K::Sunflower => ops_biome::map_sunflower(self, l, out, x, z, w, h),
            K::River => ops_river::map_river(self, l, out, x, z, w, h),
            K::Smooth => ops_river::map_smooth(self, l, out, x, z, w, h),
            K::SwampRiver => ops_river::map_swamp_river(self, l, out, x, z, w, h),
            K::Shore => ops_river::map_shore(self, l, out, x, z, w, h),
            K::RiverMix => ops_river::map_river_mix(self, l, out, x, z, w, h),
            K::OceanTemp => ops_ocean::map_ocean_temp(self, l, out, x, z, w, h),
            K::OceanMix => ops_ocean::map_ocean_mix(self, l, out, x, z, w, h),
            K::OceanMixMod => ops_ocean::map_ocean_mix_mod(self, l, out, x, z, w, h),
            K::Voronoi114 => voronoi::map_voronoi_114(self, l, out, x, z, w, h),
            K::Voronoi => voronoi::map_voronoi(self, l, out, x, z, w, h),
        }
    }

    // ── cache sizing ───────────────────────────────────────────────────────

    fn get_max_area(
        &self,
        id: Option<LayerId>,
        mut area_x: i64,
        mut area_z: i64,
        max_x: &mut i64,
        max_z: &mut i64,
        siz: &mut i64,
    ) {
        let Some(id) = id else { return };
        let l = &self.layers[id];

        area_x += i64::from(l.edge);
        area_z += i64::from(l.edge);

        // multi-layers and zoom-layers use a temporary copy of their parent
        // area in the tail of the cache
        if l.p2.is_some() || l.zoom != 1 {
            *siz += area_x * area_z;
        }

        if area_x > *max_x {
            *max_x = area_x;
        }
        if area_z > *max_z {
            *max_z = area_z;
        }

        match l.zoom {
            2 => {
                area_x >>= 1;
                area_z >>= 1;
            }
            4 => {
                area_x >>= 2;
                area_z >>= 2;
            }
            _ => {}
        }

        self.get_max_area(l.p, area_x, area_z, max_x, max_z, siz);
        if l.p2.is_some() {
            self.get_max_area(l.p2, area_x, area_z, max_x, max_z, siz);
        }
    }

    /// Minimum cache length for a `sx`-by-`sz` query entering at layer `id`.
    #[must_use]
    pub fn min_cache_size(&self, id: LayerId, sx: i32, sz: i32) -> usize {
        let mut max_x = i64::from(sx);
        let mut max_z = i64::from(sz);
        let mut siz = 0i64;
        self.get_max_area(
            Some(id),
            i64::from(sx),
            i64::from(sz),
            &mut max_x,
            &mut max_z,
            &mut siz,
        );
        (siz + max_x * max_z) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_seed_draw_and_step_compose() {
        let ls = get_layer_salt(200);
        let ss = get_start_seed(12345, ls);
        let cs = get_chunk_seed(ss, 3, -7);
        let v0 = mc_first_int(cs, 6);
        assert!((0..6).contains(&v0));
        let cs2 = mc_step_seed(cs, get_start_salt(12345, ls));
        let v1 = mc_first_int(cs2, 6);
        assert!((0..6).contains(&v1));
    }

    #[test]
    fn first_int_is_nonnegative() {
        for s in [0u64, 1, u64::MAX, 0x8000_0000_0000_0000] {
            for m in [2, 6, 10, 13, 57, 299_999, 1024] {
                let v = mc_first_int(s, m);
                assert!((0..m).contains(&v), "s={s:#x} m={m} v={v}");
            }
        }
    }

    #[test]
    fn stacks_build_for_every_layered_version() {
        use McVersion as V;
        for mc in [
            V::B1_8,
            V::V1_0,
            V::V1_1,
            V::V1_6,
            V::V1_7,
            V::V1_12,
            V::V1_13,
            V::V1_14,
            V::V1_15,
            V::V1_16,
            V::V1_17,
        ] {
            let s = LayerStack::setup(mc, false);
            assert_eq!(s.layer(s.entry_1).scale, 1, "{mc:?}");
            assert_eq!(s.layer(s.entry_4).scale, 4, "{mc:?}");
            assert_eq!(s.layer(s.entry_16).scale, 16, "{mc:?}");
            assert_eq!(s.layer(s.entry_64).scale, 64, "{mc:?}");
            assert_eq!(s.layer(s.entry_256).scale, 256, "{mc:?}");
        }
    }

    #[test]
    fn large_biomes_shift_the_entry_scales() {
        let s = LayerStack::setup(McVersion::V1_7, true);
        assert_eq!(s.layer(s.entry_16).scale, 16);
        assert_eq!(s.layer(s.entry_64).scale, 64);
        assert_eq!(s.layer(s.entry_256).scale, 256);
    }

    #[test]
    fn seeding_is_per_layer_deterministic() {
        let mut a = LayerStack::setup(McVersion::V1_12, false);
        let mut b = LayerStack::setup(McVersion::V1_12, false);
        a.set_seed(42, 0);
        b.set_seed(42, 0);
        for (la, lb) in a.layers().iter().zip(b.layers()) {
            assert_eq!(la.start_salt, lb.start_salt);
            assert_eq!(la.start_seed, lb.start_seed);
        }
    }
}
