//! Biome render palette (the AMIDST coloring scheme).

use std::sync::LazyLock;

use crate::BiomeId;
use crate::biome_id::*;

/// 256-entry RGB palette indexed by biome id.
pub type Palette = [[u8; 3]; 256];

fn set(p: &mut Palette, id: BiomeId, r: u8, g: u8, b: u8) {
    p[id as usize] = [r, g, b];
}

/// Mutated biomes lighten their parent by 40 per channel, saturating.
fn set_mutation(p: &mut Palette, mutated: BiomeId, parent: BiomeId) {
    let src = p[parent as usize];
    p[mutated as usize] = [
        src[0].saturating_add(40),
        src[1].saturating_add(40),
        src[2].saturating_add(40),
    ];
}

static PALETTE: LazyLock<Palette> = LazyLock::new(|| {
    let mut p: Palette = [[0, 0, 0]; 256];

    set(&mut p, OCEAN, 0, 0, 112);
    set(&mut p, PLAINS, 141, 179, 96);
    set(&mut p, DESERT, 250, 148, 24);
    set(&mut p, MOUNTAINS, 96, 96, 96);
    set(&mut p, FOREST, 5, 102, 33);
    set(&mut p, TAIGA, 11, 102, 89);
    set(&mut p, SWAMP, 7, 249, 178);
    set(&mut p, RIVER, 0, 0, 255);
    set(&mut p, NETHER_WASTES, 255, 0, 0);
    set(&mut p, THE_END, 128, 128, 255);
    set(&mut p, FROZEN_OCEAN, 112, 112, 214);
    set(&mut p, FROZEN_RIVER, 160, 160, 255);
    set(&mut p, SNOWY_TUNDRA, 255, 255, 255);
    set(&mut p, SNOWY_MOUNTAINS, 160, 160, 160);
    set(&mut p, MUSHROOM_FIELDS, 255, 0, 255);
    set(&mut p, MUSHROOM_FIELD_SHORE, 160, 0, 255);
    set(&mut p, BEACH, 250, 222, 85);
    set(&mut p, DESERT_HILLS, 210, 95, 18);
    set(&mut p, WOODED_HILLS, 34, 85, 28);
    set(&mut p, TAIGA_HILLS, 22, 57, 51);
    set(&mut p, MOUNTAIN_EDGE, 114, 120, 154);
    set(&mut p, JUNGLE, 83, 123, 9);
    set(&mut p, JUNGLE_HILLS, 44, 66, 5);
    set(&mut p, JUNGLE_EDGE, 98, 139, 23);
    set(&mut p, DEEP_OCEAN, 0, 0, 48);
    set(&mut p, STONE_SHORE, 162, 162, 132);
    set(&mut p, SNOWY_BEACH, 250, 240, 192);
    set(&mut p, BIRCH_FOREST, 48, 116, 68);
    set(&mut p, BIRCH_FOREST_HILLS, 31, 95, 50);
    set(&mut p, DARK_FOREST, 64, 81, 26);
    set(&mut p, SNOWY_TAIGA, 49, 85, 74);
    set(&mut p, SNOWY_TAIGA_HILLS, 36, 63, 54);
    set(&mut p, GIANT_TREE_TAIGA, 89, 102, 81);
    set(&mut p, GIANT_TREE_TAIGA_HILLS, 69, 79, 62);
    set(&mut p, WOODED_MOUNTAINS, 80, 112, 80);
    set(&mut p, SAVANNA, 189, 178, 95);
    set(&mut p, SAVANNA_PLATEAU, 167, 157, 100);
    set(&mut p, BADLANDS, 217, 69, 21);
    set(&mut p, WOODED_BADLANDS_PLATEAU, 176, 151, 101);
    set(&mut p, BADLANDS_PLATEAU, 202, 140, 101);

    set(&mut p, SMALL_END_ISLANDS, 75, 75, 171);
    set(&mut p, END_MIDLANDS, 140, 140, 190);
    set(&mut p, END_HIGHLANDS, 180, 180, 132);
    set(&mut p, END_BARRENS, 110, 110, 158);
    set(&mut p, WARM_OCEAN, 0, 0, 172);
    set(&mut p, LUKEWARM_OCEAN, 0, 0, 144);
    set(&mut p, COLD_OCEAN, 32, 32, 112);
    set(&mut p, DEEP_WARM_OCEAN, 0, 0, 80);
    set(&mut p, DEEP_LUKEWARM_OCEAN, 0, 0, 64);
    set(&mut p, DEEP_COLD_OCEAN, 32, 32, 56);
    set(&mut p, DEEP_FROZEN_OCEAN, 64, 64, 144);

    set(&mut p, SEASONAL_FOREST, 47, 116, 86);
    set(&mut p, RAINFOREST, 83, 123, 9);
    set(&mut p, SHRUBLAND, 141, 179, 96);

    set(&mut p, THE_VOID, 0, 0, 0);

    set_mutation(&mut p, SUNFLOWER_PLAINS, PLAINS);
    set_mutation(&mut p, DESERT_LAKES, DESERT);
    set_mutation(&mut p, GRAVELLY_MOUNTAINS, MOUNTAINS);
    set_mutation(&mut p, FLOWER_FOREST, FOREST);
    set_mutation(&mut p, TAIGA_MOUNTAINS, TAIGA);
    set_mutation(&mut p, SWAMP_HILLS, SWAMP);
    set(&mut p, ICE_SPIKES, 180, 220, 220);
    set_mutation(&mut p, MODIFIED_JUNGLE, JUNGLE);
    set_mutation(&mut p, MODIFIED_JUNGLE_EDGE, JUNGLE_EDGE);
    set_mutation(&mut p, TALL_BIRCH_FOREST, BIRCH_FOREST);
    set_mutation(&mut p, TALL_BIRCH_HILLS, BIRCH_FOREST_HILLS);
    set_mutation(&mut p, DARK_FOREST_HILLS, DARK_FOREST);
    set_mutation(&mut p, SNOWY_TAIGA_MOUNTAINS, SNOWY_TAIGA);
    set_mutation(&mut p, GIANT_SPRUCE_TAIGA, GIANT_TREE_TAIGA);
    set_mutation(&mut p, GIANT_SPRUCE_TAIGA_HILLS, GIANT_TREE_TAIGA_HILLS);
    set_mutation(&mut p, MODIFIED_GRAVELLY_MOUNTAINS, WOODED_MOUNTAINS);
    set_mutation(&mut p, SHATTERED_SAVANNA, SAVANNA);
    set_mutation(&mut p, SHATTERED_SAVANNA_PLATEAU, SAVANNA_PLATEAU);
    set_mutation(&mut p, ERODED_BADLANDS, BADLANDS);
    set_mutation(&mut p, MODIFIED_WOODED_BADLANDS_PLATEAU, WOODED_BADLANDS_PLATEAU);
    set_mutation(&mut p, MODIFIED_BADLANDS_PLATEAU, BADLANDS_PLATEAU);

    set(&mut p, BAMBOO_JUNGLE, 118, 142, 20);
    set(&mut p, BAMBOO_JUNGLE_HILLS, 59, 71, 10);

    set(&mut p, SOUL_SAND_VALLEY, 82, 41, 33);
    set(&mut p, CRIMSON_FOREST, 221, 8, 8);
    set(&mut p, WARPED_FOREST, 73, 144, 123);
    set(&mut p, BASALT_DELTAS, 104, 95, 112);

    set(&mut p, DRIPSTONE_CAVES, 78, 48, 4);
    set(&mut p, LUSH_CAVES, 40, 60, 0);

    set(&mut p, MEADOW, 96, 164, 69);
    set(&mut p, GROVE, 71, 114, 108);
    set(&mut p, SNOWY_SLOPES, 196, 196, 196);
    set(&mut p, JAGGED_PEAKS, 220, 220, 200);
    set(&mut p, FROZEN_PEAKS, 176, 179, 206);
    set(&mut p, STONY_PEAKS, 123, 143, 116);
    set(&mut p, DEEP_DARK, 3, 31, 41);
    set(&mut p, MANGROVE_SWAMP, 44, 112, 90);
    set(&mut p, CHERRY_GROVE, 255, 145, 192);
    set(&mut p, PALE_GARDEN, 170, 175, 165);

    p
});

/// The biome render palette.
#[must_use]
pub fn biome_colors() -> &'static Palette {
    &PALETTE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutation_lightening_saturates() {
        let p = biome_colors();
        assert_eq!(p[SUNFLOWER_PLAINS as usize], [181, 219, 136]);
        // snowy tundra is 255,255,255 but ice spikes has an explicit color
        assert_eq!(p[ICE_SPIKES as usize], [180, 220, 220]);
    }

    #[test]
    fn base_colors_present() {
        let p = biome_colors();
        assert_eq!(p[OCEAN as usize], [0, 0, 112]);
        assert_eq!(p[SWAMP as usize], [7, 249, 178]);
    }
}
