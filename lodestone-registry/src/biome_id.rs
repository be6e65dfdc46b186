//! The compact biome id space.
//!
//! Ids below 128 are base biomes; `id + 128` marks the mutated variant of a
//! base biome where one exists. Later releases renamed many of these; the
//! constants carry the modern names with aliases for ids that were renamed
//! in place.

#![allow(missing_docs)]

use crate::BiomeId;

pub const OCEAN: BiomeId = 0;
pub const PLAINS: BiomeId = 1;
pub const DESERT: BiomeId = 2;
pub const MOUNTAINS: BiomeId = 3;
pub const FOREST: BiomeId = 4;
pub const TAIGA: BiomeId = 5;
pub const SWAMP: BiomeId = 6;
pub const RIVER: BiomeId = 7;
pub const NETHER_WASTES: BiomeId = 8;
pub const THE_END: BiomeId = 9;
pub const FROZEN_OCEAN: BiomeId = 10;
pub const FROZEN_RIVER: BiomeId = 11;
pub const SNOWY_TUNDRA: BiomeId = 12;
pub const SNOWY_MOUNTAINS: BiomeId = 13;
pub const MUSHROOM_FIELDS: BiomeId = 14;
pub const MUSHROOM_FIELD_SHORE: BiomeId = 15;
pub const BEACH: BiomeId = 16;
pub const DESERT_HILLS: BiomeId = 17;
pub const WOODED_HILLS: BiomeId = 18;
pub const TAIGA_HILLS: BiomeId = 19;
pub const MOUNTAIN_EDGE: BiomeId = 20;
pub const JUNGLE: BiomeId = 21;
pub const JUNGLE_HILLS: BiomeId = 22;
pub const JUNGLE_EDGE: BiomeId = 23;
pub const DEEP_OCEAN: BiomeId = 24;
pub const STONE_SHORE: BiomeId = 25;
pub const SNOWY_BEACH: BiomeId = 26;
pub const BIRCH_FOREST: BiomeId = 27;
pub const BIRCH_FOREST_HILLS: BiomeId = 28;
pub const DARK_FOREST: BiomeId = 29;
pub const SNOWY_TAIGA: BiomeId = 30;
pub const SNOWY_TAIGA_HILLS: BiomeId = 31;
pub const GIANT_TREE_TAIGA: BiomeId = 32;
pub const GIANT_TREE_TAIGA_HILLS: BiomeId = 33;
pub const WOODED_MOUNTAINS: BiomeId = 34;
pub const SAVANNA: BiomeId = 35;
pub const SAVANNA_PLATEAU: BiomeId = 36;
pub const BADLANDS: BiomeId = 37;
pub const WOODED_BADLANDS_PLATEAU: BiomeId = 38;
pub const BADLANDS_PLATEAU: BiomeId = 39;
// 1.13
pub const SMALL_END_ISLANDS: BiomeId = 40;
pub const END_MIDLANDS: BiomeId = 41;
pub const END_HIGHLANDS: BiomeId = 42;
pub const END_BARRENS: BiomeId = 43;
pub const WARM_OCEAN: BiomeId = 44;
pub const LUKEWARM_OCEAN: BiomeId = 45;
pub const COLD_OCEAN: BiomeId = 46;
pub const DEEP_WARM_OCEAN: BiomeId = 47;
pub const DEEP_LUKEWARM_OCEAN: BiomeId = 48;
pub const DEEP_COLD_OCEAN: BiomeId = 49;
pub const DEEP_FROZEN_OCEAN: BiomeId = 50;
// Alpha 1.2 - Beta 1.7
pub const SEASONAL_FOREST: BiomeId = 51;
pub const RAINFOREST: BiomeId = 52;
pub const SHRUBLAND: BiomeId = 53;

pub const THE_VOID: BiomeId = 127;

// mutated variants
pub const SUNFLOWER_PLAINS: BiomeId = PLAINS + 128;
pub const DESERT_LAKES: BiomeId = DESERT + 128;
pub const GRAVELLY_MOUNTAINS: BiomeId = MOUNTAINS + 128;
pub const FLOWER_FOREST: BiomeId = FOREST + 128;
pub const TAIGA_MOUNTAINS: BiomeId = TAIGA + 128;
pub const SWAMP_HILLS: BiomeId = SWAMP + 128;
pub const ICE_SPIKES: BiomeId = SNOWY_TUNDRA + 128;
pub const MODIFIED_JUNGLE: BiomeId = JUNGLE + 128;
pub const MODIFIED_JUNGLE_EDGE: BiomeId = JUNGLE_EDGE + 128;
pub const TALL_BIRCH_FOREST: BiomeId = BIRCH_FOREST + 128;
pub const TALL_BIRCH_HILLS: BiomeId = BIRCH_FOREST_HILLS + 128;
pub const DARK_FOREST_HILLS: BiomeId = DARK_FOREST + 128;
pub const SNOWY_TAIGA_MOUNTAINS: BiomeId = SNOWY_TAIGA + 128;
pub const GIANT_SPRUCE_TAIGA: BiomeId = GIANT_TREE_TAIGA + 128;
pub const GIANT_SPRUCE_TAIGA_HILLS: BiomeId = GIANT_TREE_TAIGA_HILLS + 128;
pub const MODIFIED_GRAVELLY_MOUNTAINS: BiomeId = WOODED_MOUNTAINS + 128;
pub const SHATTERED_SAVANNA: BiomeId = SAVANNA + 128;
pub const SHATTERED_SAVANNA_PLATEAU: BiomeId = SAVANNA_PLATEAU + 128;
pub const ERODED_BADLANDS: BiomeId = BADLANDS + 128;
pub const MODIFIED_WOODED_BADLANDS_PLATEAU: BiomeId = WOODED_BADLANDS_PLATEAU + 128;
pub const MODIFIED_BADLANDS_PLATEAU: BiomeId = BADLANDS_PLATEAU + 128;
// 1.14
pub const BAMBOO_JUNGLE: BiomeId = 168;
pub const BAMBOO_JUNGLE_HILLS: BiomeId = 169;
// 1.16
pub const SOUL_SAND_VALLEY: BiomeId = 170;
pub const CRIMSON_FOREST: BiomeId = 171;
pub const WARPED_FOREST: BiomeId = 172;
pub const BASALT_DELTAS: BiomeId = 173;
// 1.17
pub const DRIPSTONE_CAVES: BiomeId = 174;
pub const LUSH_CAVES: BiomeId = 175;
// 1.18
pub const MEADOW: BiomeId = 177;
pub const GROVE: BiomeId = 178;
pub const SNOWY_SLOPES: BiomeId = 179;
pub const JAGGED_PEAKS: BiomeId = 180;
pub const FROZEN_PEAKS: BiomeId = 181;
pub const STONY_PEAKS: BiomeId = 182;
pub const OLD_GROWTH_BIRCH_FOREST: BiomeId = TALL_BIRCH_FOREST;
pub const OLD_GROWTH_PINE_TAIGA: BiomeId = GIANT_TREE_TAIGA;
pub const OLD_GROWTH_SPRUCE_TAIGA: BiomeId = GIANT_SPRUCE_TAIGA;
pub const SNOWY_PLAINS: BiomeId = SNOWY_TUNDRA;
pub const SPARSE_JUNGLE: BiomeId = JUNGLE_EDGE;
pub const STONY_SHORE: BiomeId = STONE_SHORE;
pub const WINDSWEPT_HILLS: BiomeId = MOUNTAINS;
pub const WINDSWEPT_FOREST: BiomeId = WOODED_MOUNTAINS;
pub const WINDSWEPT_GRAVELLY_HILLS: BiomeId = GRAVELLY_MOUNTAINS;
pub const WINDSWEPT_SAVANNA: BiomeId = SHATTERED_SAVANNA;
pub const WOODED_BADLANDS: BiomeId = WOODED_BADLANDS_PLATEAU;
// 1.19
pub const DEEP_DARK: BiomeId = 183;
pub const MANGROVE_SWAMP: BiomeId = 184;
// 1.20
pub const CHERRY_GROVE: BiomeId = 185;
// 1.21
pub const PALE_GARDEN: BiomeId = 186;
