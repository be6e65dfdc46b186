//! Per-version biome metadata: existence, dimension membership, categories,
//! mutation pairing, temperature/height records, and the classification
//! predicates the layer cascade and the seed finders consult.

use std::sync::LazyLock;

use crate::biome_id::*;
use crate::version::McVersion;
use crate::{BiomeId, NONE};

/// Broad biome family used by the legacy cascade and the compact-biomes
/// filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum BiomeType {
    Ocean,
    Plains,
    Desert,
    Hills,
    Forest,
    Taiga,
    Swamp,
    River,
    Hell,
    Sky,
    Snow,
    MushroomIsland,
    Beach,
    Jungle,
    StoneBeach,
    Savanna,
    Mesa,
}

/// Number of [`BiomeType`] values.
pub const BTYPE_NUM: usize = 17;

impl BiomeType {
    /// Dense index for bitset/array use.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Temperature band used by edge-transition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum TempCategory {
    Oceanic,
    Warm,
    Lush,
    Cold,
    Freezing,
    Unknown,
}

/// One biome's static record.
#[derive(Debug, Clone, Copy)]
pub struct BiomeData {
    /// Id, or `NONE` for unassigned slots.
    pub id: BiomeId,
    /// Broad family.
    pub ty: BiomeType,
    /// Base temperature.
    pub temp: f64,
    /// Terrain height parameter (pre-1.18 semantics).
    pub height: f64,
    /// Temperature band.
    pub temp_cat: TempCategory,
}

const H_DEFAULT: f64 = 0.1;
const H_SHALLOW_WATERS: f64 = -0.5;
const H_OCEANS: f64 = -1.0;
const H_DEEP_OCEANS: f64 = -1.8;
const H_LOW_PLAINS: f64 = 0.125;
const H_MID_PLAINS: f64 = 0.2;
const H_LOW_HILLS: f64 = 0.45;
const H_HIGH_PLATEAUS: f64 = 1.5;
const H_MID_HILLS: f64 = 1.0;
const H_SHORES: f64 = 0.0;
const H_ROCKY_WATERS: f64 = 0.1;
const H_LOW_ISLANDS: f64 = 0.2;
const H_PARTIALLY_SUBMERGED: f64 = -0.2;

static BIOME_DATA: LazyLock<[BiomeData; 256]> = LazyLock::new(|| {
    let mut t = [BiomeData {
        id: NONE,
        ty: BiomeType::Sky,
        temp: 0.5,
        height: H_DEFAULT,
        temp_cat: TempCategory::Unknown,
    }; 256];

    let mut add = |id: BiomeId, cat: TempCategory, ty: BiomeType, temp: f64, height: f64| {
        t[id as usize] = BiomeData {
            id,
            ty,
            temp,
            height,
            temp_cat: cat,
        };
    };

    use BiomeType as B;
    use TempCategory as C;
    add(OCEAN, C::Oceanic, B::Ocean, 0.5, H_OCEANS);
    add(PLAINS, C::Lush, B::Plains, 0.8, H_DEFAULT);
    add(DESERT, C::Warm, B::Desert, 2.0, H_LOW_PLAINS);
    add(MOUNTAINS, C::Lush, B::Hills, 0.2, H_MID_HILLS);
    add(FOREST, C::Lush, B::Forest, 0.7, H_DEFAULT);
    add(TAIGA, C::Lush, B::Taiga, 0.25, H_MID_PLAINS);
    add(SWAMP, C::Lush, B::Swamp, 0.8, H_PARTIALLY_SUBMERGED);
    add(RIVER, C::Lush, B::River, 0.5, H_SHALLOW_WATERS);
    add(NETHER_WASTES, C::Warm, B::Hell, 2.0, H_DEFAULT);
    add(THE_END, C::Lush, B::Sky, 0.5, H_DEFAULT);
    add(FROZEN_OCEAN, C::Oceanic, B::Ocean, 0.0, H_OCEANS);
    add(FROZEN_RIVER, C::Cold, B::River, 0.0, H_SHALLOW_WATERS);
    add(SNOWY_TUNDRA, C::Cold, B::Snow, 0.0, H_LOW_PLAINS);
    add(SNOWY_MOUNTAINS, C::Cold, B::Snow, 0.0, H_LOW_HILLS);
    add(MUSHROOM_FIELDS, C::Lush, B::MushroomIsland, 0.9, H_LOW_ISLANDS);
    add(MUSHROOM_FIELD_SHORE, C::Lush, B::MushroomIsland, 0.9, H_SHORES);
    add(BEACH, C::Lush, B::Beach, 0.8, H_SHORES);
    add(DESERT_HILLS, C::Warm, B::Desert, 2.0, H_LOW_HILLS);
    add(WOODED_HILLS, C::Lush, B::Forest, 0.7, H_LOW_HILLS);
    add(TAIGA_HILLS, C::Lush, B::Taiga, 0.25, H_LOW_HILLS);
    add(MOUNTAIN_EDGE, C::Lush, B::Hills, 0.2, H_MID_HILLS);
    add(JUNGLE, C::Lush, B::Jungle, 0.95, H_DEFAULT);
    add(JUNGLE_HILLS, C::Lush, B::Jungle, 0.95, H_LOW_HILLS);
    add(JUNGLE_EDGE, C::Lush, B::Jungle, 0.95, H_DEFAULT);
    add(DEEP_OCEAN, C::Oceanic, B::Ocean, 0.5, H_DEEP_OCEANS);
    add(STONE_SHORE, C::Lush, B::StoneBeach, 0.2, H_ROCKY_WATERS);
    add(SNOWY_BEACH, C::Cold, B::Beach, 0.05, H_SHORES);
    add(BIRCH_FOREST, C::Lush, B::Forest, 0.6, H_DEFAULT);
    add(BIRCH_FOREST_HILLS, C::Lush, B::Forest, 0.6, H_LOW_HILLS);
    add(DARK_FOREST, C::Lush, B::Forest, 0.7, H_DEFAULT);
    add(SNOWY_TAIGA, C::Cold, B::Taiga, -0.5, H_MID_PLAINS);
    add(SNOWY_TAIGA_HILLS, C::Cold, B::Taiga, -0.5, H_LOW_HILLS);
    add(GIANT_TREE_TAIGA, C::Lush, B::Taiga, 0.3, H_MID_PLAINS);
    add(GIANT_TREE_TAIGA_HILLS, C::Lush, B::Taiga, 0.3, H_LOW_HILLS);
    add(WOODED_MOUNTAINS, C::Lush, B::Hills, 0.2, H_MID_HILLS);
    add(SAVANNA, C::Warm, B::Savanna, 1.2, H_LOW_PLAINS);
    add(SAVANNA_PLATEAU, C::Warm, B::Savanna, 1.0, H_HIGH_PLATEAUS);
    add(BADLANDS, C::Warm, B::Mesa, 2.0, H_DEFAULT);
    add(WOODED_BADLANDS_PLATEAU, C::Warm, B::Mesa, 2.0, H_HIGH_PLATEAUS);
    add(BADLANDS_PLATEAU, C::Warm, B::Mesa, 2.0, H_HIGH_PLATEAUS);
    // 1.13 end islands and ocean variants
    add(SMALL_END_ISLANDS, C::Lush, B::Sky, 0.5, H_DEFAULT);
    add(END_MIDLANDS, C::Lush, B::Sky, 0.5, H_DEFAULT);
    add(END_HIGHLANDS, C::Lush, B::Sky, 0.5, H_DEFAULT);
    add(END_BARRENS, C::Lush, B::Sky, 0.5, H_DEFAULT);
    add(WARM_OCEAN, C::Oceanic, B::Ocean, 0.5, H_OCEANS);
    add(LUKEWARM_OCEAN, C::Oceanic, B::Ocean, 0.5, H_OCEANS);
    add(COLD_OCEAN, C::Oceanic, B::Ocean, 0.5, H_OCEANS);
    add(DEEP_WARM_OCEAN, C::Oceanic, B::Ocean, 0.5, H_DEEP_OCEANS);
    add(DEEP_LUKEWARM_OCEAN, C::Oceanic, B::Ocean, 0.5, H_DEEP_OCEANS);
    add(DEEP_COLD_OCEAN, C::Oceanic, B::Ocean, 0.5, H_DEEP_OCEANS);
    add(DEEP_FROZEN_OCEAN, C::Oceanic, B::Ocean, 0.5, H_DEEP_OCEANS);
    // Beta era
    add(SEASONAL_FOREST, C::Lush, B::Forest, 0.7, H_DEFAULT);
    add(RAINFOREST, C::Lush, B::Jungle, 0.95, H_DEFAULT);
    add(SHRUBLAND, C::Lush, B::Plains, 0.8, H_DEFAULT);
    add(THE_VOID, C::Unknown, B::Sky, 0.5, 0.0);
    // 1.14
    add(BAMBOO_JUNGLE, C::Lush, B::Jungle, 0.95, H_DEFAULT);
    add(BAMBOO_JUNGLE_HILLS, C::Lush, B::Jungle, 0.95, H_LOW_HILLS);
    // 1.16 nether
    add(SOUL_SAND_VALLEY, C::Warm, B::Hell, 2.0, H_DEFAULT);
    add(CRIMSON_FOREST, C::Warm, B::Hell, 2.0, H_DEFAULT);
    add(WARPED_FOREST, C::Warm, B::Hell, 2.0, H_DEFAULT);
    add(BASALT_DELTAS, C::Warm, B::Hell, 2.0, H_DEFAULT);
    // 1.17 caves
    add(DRIPSTONE_CAVES, C::Lush, B::Hills, 0.8, H_DEFAULT);
    add(LUSH_CAVES, C::Lush, B::Hills, 0.5, H_DEFAULT);
    // 1.18 mountain set
    add(MEADOW, C::Lush, B::Plains, 0.5, H_MID_PLAINS);
    add(GROVE, C::Cold, B::Forest, -0.2, H_LOW_HILLS);
    add(SNOWY_SLOPES, C::Cold, B::Snow, -0.3, H_LOW_HILLS);
    add(JAGGED_PEAKS, C::Cold, B::Hills, -0.7, H_MID_HILLS);
    add(FROZEN_PEAKS, C::Cold, B::Hills, -0.7, H_MID_HILLS);
    add(STONY_PEAKS, C::Lush, B::Hills, 1.0, H_MID_HILLS);
    // 1.19+
    add(DEEP_DARK, C::Lush, B::Hills, 0.8, H_DEFAULT);
    add(MANGROVE_SWAMP, C::Lush, B::Swamp, 0.8, H_PARTIALLY_SUBMERGED);
    add(CHERRY_GROVE, C::Lush, B::Plains, 0.5, H_LOW_HILLS);
    add(PALE_GARDEN, C::Lush, B::Forest, 0.7, H_DEFAULT);

    // mutated variants copy their parent record
    let mutated = [
        PLAINS,
        DESERT,
        MOUNTAINS,
        FOREST,
        TAIGA,
        SWAMP,
        SNOWY_TUNDRA,
        JUNGLE,
        JUNGLE_EDGE,
        BIRCH_FOREST,
        BIRCH_FOREST_HILLS,
        DARK_FOREST,
        SNOWY_TAIGA,
        GIANT_TREE_TAIGA,
        GIANT_TREE_TAIGA_HILLS,
        WOODED_MOUNTAINS,
        SAVANNA,
        SAVANNA_PLATEAU,
        BADLANDS,
        WOODED_BADLANDS_PLATEAU,
        BADLANDS_PLATEAU,
    ];
    for base in mutated {
        let mut data = t[base as usize];
        data.id = base + 128;
        t[(base + 128) as usize] = data;
    }

    t
});

/// Record for an id, if the slot is assigned (ignoring version gates).
#[inline]
#[must_use]
pub fn biome_data(id: BiomeId) -> Option<&'static BiomeData> {
    let d = &BIOME_DATA[(id & 0xFF) as usize];
    (d.id != NONE).then_some(d)
}

/// Broad family of an id (mutations share their parent's).
#[inline]
#[must_use]
pub fn biome_type(id: BiomeId) -> BiomeType {
    BIOME_DATA[(id & 0xFF) as usize].ty
}

/// Temperature band of an id.
#[inline]
#[must_use]
pub fn temp_category(id: BiomeId) -> TempCategory {
    BIOME_DATA[(id & 0xFF) as usize].temp_cat
}

/// Terrain height parameter (pre-1.18 semantics).
#[inline]
#[must_use]
pub fn biome_height(id: BiomeId) -> f64 {
    BIOME_DATA[(id & 0xFF) as usize].height
}

/// Whether the id slot is assigned at all (version-independent).
#[inline]
#[must_use]
pub fn slot_exists(id: BiomeId) -> bool {
    (0..=255).contains(&id) && BIOME_DATA[id as usize].id != NONE
}

/// Whether `id` exists in release `mc`.
#[must_use]
#[allow(clippy::match_same_arms)]
pub fn biome_exists(mc: McVersion, id: BiomeId) -> bool {
    use McVersion as V;
    if mc >= V::V1_18 {
        if (SOUL_SAND_VALLEY..=BASALT_DELTAS).contains(&id) {
            return true;
        }
        if (SMALL_END_ISLANDS..=END_BARRENS).contains(&id) {
            return true;
        }
        if id == PALE_GARDEN {
            return mc >= V::V1_21;
        }
        if id == CHERRY_GROVE {
            return mc >= V::V1_20;
        }
        if id == DEEP_DARK || id == MANGROVE_SWAMP {
            return mc >= V::V1_19_2;
        }
        return matches!(
            id,
            OCEAN
                | PLAINS
                | DESERT
                | MOUNTAINS
                | FOREST
                | TAIGA
                | SWAMP
                | RIVER
                | NETHER_WASTES
                | THE_END
                | FROZEN_OCEAN
                | FROZEN_RIVER
                | SNOWY_TUNDRA
                | MUSHROOM_FIELDS
                | BEACH
                | JUNGLE
                | JUNGLE_EDGE
                | DEEP_OCEAN
                | STONE_SHORE
                | SNOWY_BEACH
                | BIRCH_FOREST
                | DARK_FOREST
                | SNOWY_TAIGA
                | GIANT_TREE_TAIGA
                | WOODED_MOUNTAINS
                | SAVANNA
                | SAVANNA_PLATEAU
                | BADLANDS
                | WOODED_BADLANDS_PLATEAU
                | WARM_OCEAN
                | LUKEWARM_OCEAN
                | COLD_OCEAN
                | DEEP_WARM_OCEAN
                | DEEP_LUKEWARM_OCEAN
                | DEEP_COLD_OCEAN
                | DEEP_FROZEN_OCEAN
                | SUNFLOWER_PLAINS
                | GRAVELLY_MOUNTAINS
                | FLOWER_FOREST
                | ICE_SPIKES
                | TALL_BIRCH_FOREST
                | GIANT_SPRUCE_TAIGA
                | SHATTERED_SAVANNA
                | ERODED_BADLANDS
                | BAMBOO_JUNGLE
                | DRIPSTONE_CAVES
                | LUSH_CAVES
                | MEADOW
                | GROVE
                | SNOWY_SLOPES
                | STONY_PEAKS
                | JAGGED_PEAKS
                | FROZEN_PEAKS
        );
    }

    if mc <= V::B1_7 {
        return matches!(
            id,
            PLAINS
                | DESERT
                | FOREST
                | TAIGA
                | SWAMP
                | SNOWY_TUNDRA
                | SAVANNA
                | SEASONAL_FOREST
                | RAINFOREST
                | SHRUBLAND
                // areas below sea level are treated as oceans
                | OCEAN
                | FROZEN_OCEAN
        );
    }

    if mc <= V::B1_8
        && matches!(
            id,
            FROZEN_OCEAN
                | FROZEN_RIVER
                | SNOWY_TUNDRA
                | MUSHROOM_FIELDS
                | MUSHROOM_FIELD_SHORE
                | THE_END
        )
    {
        return false;
    }
    if mc <= V::V1_0
        && matches!(
            id,
            SNOWY_MOUNTAINS | BEACH | DESERT_HILLS | WOODED_HILLS | TAIGA_HILLS | MOUNTAIN_EDGE
        )
    {
        return false;
    }

    if (OCEAN..=MOUNTAIN_EDGE).contains(&id) {
        return true;
    }
    if (JUNGLE..=JUNGLE_HILLS).contains(&id) {
        return mc >= V::V1_2;
    }
    if (JUNGLE_EDGE..=BADLANDS_PLATEAU).contains(&id) {
        return mc >= V::V1_7;
    }
    if (SMALL_END_ISLANDS..=END_BARRENS).contains(&id) {
        return mc >= V::V1_9;
    }
    if (WARM_OCEAN..=DEEP_FROZEN_OCEAN).contains(&id) {
        return mc >= V::V1_13;
    }

    match id {
        THE_VOID => mc >= V::V1_9,
        SUNFLOWER_PLAINS
        | DESERT_LAKES
        | GRAVELLY_MOUNTAINS
        | FLOWER_FOREST
        | TAIGA_MOUNTAINS
        | SWAMP_HILLS
        | ICE_SPIKES
        | MODIFIED_JUNGLE
        | MODIFIED_JUNGLE_EDGE
        | TALL_BIRCH_FOREST
        | TALL_BIRCH_HILLS
        | DARK_FOREST_HILLS
        | SNOWY_TAIGA_MOUNTAINS
        | GIANT_SPRUCE_TAIGA
        | GIANT_SPRUCE_TAIGA_HILLS
        | MODIFIED_GRAVELLY_MOUNTAINS
        | SHATTERED_SAVANNA
        | SHATTERED_SAVANNA_PLATEAU
        | ERODED_BADLANDS
        | MODIFIED_WOODED_BADLANDS_PLATEAU
        | MODIFIED_BADLANDS_PLATEAU => mc >= V::V1_7,
        BAMBOO_JUNGLE | BAMBOO_JUNGLE_HILLS => mc >= V::V1_14,
        SOUL_SAND_VALLEY | CRIMSON_FOREST | WARPED_FOREST | BASALT_DELTAS => mc >= V::V1_16_1,
        DRIPSTONE_CAVES | LUSH_CAVES => mc >= V::V1_17,
        _ => false,
    }
}

/// Whether `id` can appear in the overworld of release `mc`.
#[must_use]
pub fn is_overworld(mc: McVersion, id: BiomeId) -> bool {
    use McVersion as V;
    if !biome_exists(mc, id) {
        return false;
    }
    if (SMALL_END_ISLANDS..=END_BARRENS).contains(&id) {
        return false;
    }
    if (SOUL_SAND_VALLEY..=BASALT_DELTAS).contains(&id) {
        return false;
    }
    match id {
        NETHER_WASTES | THE_END | DEEP_WARM_OCEAN | THE_VOID => false,
        FROZEN_OCEAN => mc <= V::V1_6 || mc >= V::V1_13,
        MOUNTAIN_EDGE => mc <= V::V1_6,
        TALL_BIRCH_FOREST => mc <= V::V1_8 || mc >= V::V1_11,
        DRIPSTONE_CAVES | LUSH_CAVES => mc >= V::V1_18,
        _ => true,
    }
}

/// The mutated partner of a base biome, or `NONE`.
#[must_use]
pub fn get_mutated(mc: McVersion, id: BiomeId) -> BiomeId {
    use McVersion as V;
    match id {
        PLAINS => SUNFLOWER_PLAINS,
        DESERT => DESERT_LAKES,
        MOUNTAINS => GRAVELLY_MOUNTAINS,
        FOREST => FLOWER_FOREST,
        TAIGA => TAIGA_MOUNTAINS,
        SWAMP => SWAMP_HILLS,
        SNOWY_TUNDRA => ICE_SPIKES,
        JUNGLE => MODIFIED_JUNGLE,
        JUNGLE_EDGE => MODIFIED_JUNGLE_EDGE,
        // emulate MC-98995
        BIRCH_FOREST => {
            if (V::V1_9..=V::V1_10).contains(&mc) {
                TALL_BIRCH_HILLS
            } else {
                TALL_BIRCH_FOREST
            }
        }
        BIRCH_FOREST_HILLS => {
            if (V::V1_9..=V::V1_10).contains(&mc) {
                NONE
            } else {
                TALL_BIRCH_HILLS
            }
        }
        DARK_FOREST => DARK_FOREST_HILLS,
        SNOWY_TAIGA => SNOWY_TAIGA_MOUNTAINS,
        GIANT_TREE_TAIGA => GIANT_SPRUCE_TAIGA,
        GIANT_TREE_TAIGA_HILLS => GIANT_SPRUCE_TAIGA_HILLS,
        WOODED_MOUNTAINS => MODIFIED_GRAVELLY_MOUNTAINS,
        SAVANNA => SHATTERED_SAVANNA,
        SAVANNA_PLATEAU => SHATTERED_SAVANNA_PLATEAU,
        BADLANDS => ERODED_BADLANDS,
        WOODED_BADLANDS_PLATEAU => MODIFIED_WOODED_BADLANDS_PLATEAU,
        BADLANDS_PLATEAU => MODIFIED_BADLANDS_PLATEAU,
        _ => NONE,
    }
}

/// The category id used for similarity grouping; `NONE` if uncategorized.
#[must_use]
pub fn get_category(mc: McVersion, id: BiomeId) -> BiomeId {
    match id {
        BEACH | SNOWY_BEACH => BEACH,
        DESERT | DESERT_HILLS | DESERT_LAKES => DESERT,
        MOUNTAINS | MOUNTAIN_EDGE | WOODED_MOUNTAINS | GRAVELLY_MOUNTAINS
        | MODIFIED_GRAVELLY_MOUNTAINS => MOUNTAINS,
        FOREST | WOODED_HILLS | BIRCH_FOREST | BIRCH_FOREST_HILLS | DARK_FOREST
        | FLOWER_FOREST | TALL_BIRCH_FOREST | TALL_BIRCH_HILLS | DARK_FOREST_HILLS => FOREST,
        SNOWY_TUNDRA | SNOWY_MOUNTAINS | ICE_SPIKES => SNOWY_TUNDRA,
        JUNGLE | JUNGLE_HILLS | JUNGLE_EDGE | MODIFIED_JUNGLE | MODIFIED_JUNGLE_EDGE
        | BAMBOO_JUNGLE | BAMBOO_JUNGLE_HILLS => JUNGLE,
        BADLANDS | ERODED_BADLANDS | MODIFIED_WOODED_BADLANDS_PLATEAU
        | MODIFIED_BADLANDS_PLATEAU => BADLANDS,
        WOODED_BADLANDS_PLATEAU | BADLANDS_PLATEAU => {
            if mc <= McVersion::V1_15 {
                BADLANDS
            } else {
                BADLANDS_PLATEAU
            }
        }
        MUSHROOM_FIELDS | MUSHROOM_FIELD_SHORE => MUSHROOM_FIELDS,
        STONE_SHORE => STONE_SHORE,
        OCEAN | FROZEN_OCEAN | DEEP_OCEAN | WARM_OCEAN | LUKEWARM_OCEAN | COLD_OCEAN
        | DEEP_WARM_OCEAN | DEEP_LUKEWARM_OCEAN | DEEP_COLD_OCEAN | DEEP_FROZEN_OCEAN => OCEAN,
        PLAINS | SUNFLOWER_PLAINS => PLAINS,
        RIVER | FROZEN_RIVER => RIVER,
        SAVANNA | SAVANNA_PLATEAU | SHATTERED_SAVANNA | SHATTERED_SAVANNA_PLATEAU => SAVANNA,
        SWAMP | SWAMP_HILLS => SWAMP,
        TAIGA | TAIGA_HILLS | SNOWY_TAIGA | SNOWY_TAIGA_HILLS | GIANT_TREE_TAIGA
        | GIANT_TREE_TAIGA_HILLS | TAIGA_MOUNTAINS | SNOWY_TAIGA_MOUNTAINS
        | GIANT_SPRUCE_TAIGA | GIANT_SPRUCE_TAIGA_HILLS => TAIGA,
        NETHER_WASTES | SOUL_SAND_VALLEY | CRIMSON_FOREST | WARPED_FOREST | BASALT_DELTAS => {
            NETHER_WASTES
        }
        _ => NONE,
    }
}

/// Category-level similarity; the badlands plateaus form their own family
/// up to 1.15.
#[must_use]
pub fn are_similar(mc: McVersion, id1: BiomeId, id2: BiomeId) -> bool {
    if id1 == id2 {
        return true;
    }
    if mc <= McVersion::V1_15
        && (id1 == WOODED_BADLANDS_PLATEAU || id1 == BADLANDS_PLATEAU)
    {
        return id2 == WOODED_BADLANDS_PLATEAU || id2 == BADLANDS_PLATEAU;
    }
    get_category(mc, id1) == get_category(mc, id2)
}

/// Neighbor compatibility for the biome-edge smoothing: similar biomes, any
/// lush biome, or matching temperature bands.
#[must_use]
pub fn can_be_neighbors(mc: McVersion, id1: BiomeId, id2: BiomeId) -> bool {
    if are_similar(mc, id1, id2) {
        return true;
    }
    if !slot_exists(id1) || !slot_exists(id2) {
        return false;
    }
    let t1 = temp_category(id1);
    if t1 == TempCategory::Lush {
        return true;
    }
    let t2 = temp_category(id2);
    t2 == TempCategory::Lush || t1 == t2
}

/// Any badlands family member.
#[inline]
#[must_use]
pub fn is_mesa(id: BiomeId) -> bool {
    matches!(
        id,
        BADLANDS
            | ERODED_BADLANDS
            | MODIFIED_WOODED_BADLANDS_PLATEAU
            | MODIFIED_BADLANDS_PLATEAU
            | WOODED_BADLANDS_PLATEAU
            | BADLANDS_PLATEAU
    )
}

/// Non-deep ocean variants.
#[inline]
#[must_use]
pub fn is_shallow_ocean(id: BiomeId) -> bool {
    matches!(
        id,
        OCEAN | FROZEN_OCEAN | WARM_OCEAN | LUKEWARM_OCEAN | COLD_OCEAN
    )
}

/// Deep ocean variants.
#[inline]
#[must_use]
pub fn is_deep_ocean(id: BiomeId) -> bool {
    matches!(
        id,
        DEEP_OCEAN | DEEP_WARM_OCEAN | DEEP_LUKEWARM_OCEAN | DEEP_COLD_OCEAN | DEEP_FROZEN_OCEAN
    )
}

/// Any ocean variant.
#[inline]
#[must_use]
pub fn is_oceanic(id: BiomeId) -> bool {
    is_shallow_ocean(id) || is_deep_ocean(id)
}

/// Snow-covered biomes.
#[inline]
#[must_use]
pub fn is_snowy(id: BiomeId) -> bool {
    matches!(
        id,
        FROZEN_OCEAN
            | FROZEN_RIVER
            | SNOWY_TUNDRA
            | SNOWY_MOUNTAINS
            | SNOWY_BEACH
            | SNOWY_TAIGA
            | SNOWY_TAIGA_HILLS
            | ICE_SPIKES
            | SNOWY_TAIGA_MOUNTAINS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frozen_ocean_gates_follow_the_layer_rework() {
        assert!(is_overworld(McVersion::V1_6, FROZEN_OCEAN));
        assert!(!is_overworld(McVersion::V1_7, FROZEN_OCEAN));
        assert!(!is_overworld(McVersion::V1_12, FROZEN_OCEAN));
        assert!(is_overworld(McVersion::V1_13, FROZEN_OCEAN));
    }

    #[test]
    fn mutation_pairing_round_trips() {
        assert_eq!(get_mutated(McVersion::V1_12, PLAINS), SUNFLOWER_PLAINS);
        assert_eq!(get_mutated(McVersion::V1_12, BADLANDS), ERODED_BADLANDS);
        // MC-98995: birch forest mutation was crossed over in 1.9/1.10
        assert_eq!(get_mutated(McVersion::V1_9, BIRCH_FOREST), TALL_BIRCH_HILLS);
        assert_eq!(get_mutated(McVersion::V1_9, BIRCH_FOREST_HILLS), NONE);
        assert_eq!(get_mutated(McVersion::V1_12, BIRCH_FOREST), TALL_BIRCH_FOREST);
    }

    #[test]
    fn plateau_similarity_changes_in_1_16() {
        assert!(are_similar(
            McVersion::V1_15,
            WOODED_BADLANDS_PLATEAU,
            BADLANDS_PLATEAU
        ));
        assert!(are_similar(McVersion::V1_15, BADLANDS_PLATEAU, BADLANDS));
        assert!(!are_similar(McVersion::V1_16, BADLANDS_PLATEAU, BADLANDS));
    }

    #[test]
    fn ocean_classes() {
        assert!(is_shallow_ocean(WARM_OCEAN));
        assert!(!is_shallow_ocean(DEEP_OCEAN));
        assert!(is_deep_ocean(DEEP_FROZEN_OCEAN));
        assert!(is_oceanic(FROZEN_OCEAN));
        assert!(!is_oceanic(RIVER));
    }

    #[test]
    fn mutation_records_copy_parent() {
        let base = biome_data(SWAMP).expect("swamp exists");
        let m = biome_data(SWAMP_HILLS).expect("swamp hills exists");
        assert_eq!(m.id, SWAMP + 128);
        assert!((m.height - base.height).abs() < f64::EPSILON);
    }

    #[test]
    fn bamboo_gate() {
        assert!(!biome_exists(McVersion::V1_13, BAMBOO_JUNGLE));
        assert!(biome_exists(McVersion::V1_14, BAMBOO_JUNGLE));
    }
}
