//! Static per-version data: the release ordinal, the biome id space,
//! per-version biome metadata, the render palette, and the 1.18+ climate
//! parameter lists.
//!
//! Everything here is immutable after program start and is read by worker
//! threads without synchronization.

pub mod biome_id;
pub mod biomes;
pub mod climate_params;
pub mod colors;
pub mod version;

pub use biomes::{
    are_similar, biome_exists, can_be_neighbors, get_category, get_mutated, is_deep_ocean,
    is_mesa, is_oceanic, is_overworld, is_shallow_ocean, is_snowy, temp_category,
};
pub use version::McVersion;

/// Biome identifier; `-1` denotes "none".
pub type BiomeId = i32;

/// The "no biome" value.
pub const NONE: BiomeId = -1;
