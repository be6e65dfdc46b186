//! Biome assignment, edge smoothing, the river-noise init and the hills
//! layer.

use lodestone_registry::biome_id::*;
use lodestone_registry::biomes::{BiomeType, biome_type};
use lodestone_registry::{McVersion, are_similar, biome_exists, can_be_neighbors};

use super::{Layer, LayerStack, get_chunk_seed, mc_first_int, mc_first_is_zero, mc_step_seed};

#[inline]
fn idx(x: i32, z: i32, w: i32) -> usize {
    (x + z * w) as usize
}

const OLD_BIOMES: [i32; 6] = [DESERT, FOREST, MOUNTAINS, SWAMP, PLAINS, TAIGA];
const WARM_BIOMES: [i32; 6] = [DESERT, DESERT, DESERT, SAVANNA, SAVANNA, PLAINS];
const LUSH_BIOMES: [i32; 6] = [FOREST, DARK_FOREST, MOUNTAINS, PLAINS, BIRCH_FOREST, SWAMP];
const COLD_BIOMES: [i32; 4] = [FOREST, MOUNTAINS, TAIGA, PLAINS];
const SNOW_BIOMES: [i32; 4] = [SNOWY_TUNDRA, SNOWY_TUNDRA, SNOWY_TUNDRA, SNOWY_TAIGA];

/// Maps temperature-band cells (or the Beta/1.6 land values) to categorical
/// biomes, routing special-marked cells to the rare variants.
pub(super) fn map_biome(
    stack: &LayerStack,
    l: &Layer,
    out: &mut [i32],
    x: i32,
    z: i32,
    w: i32,
    h: i32,
) {
    stack.get_map(l.p.expect("biome layer requires a parent"), out, x, z, w, h);

    let ss = l.start_seed;
    let mc = l.mc;

    if mc <= McVersion::B1_8 {
        // Beta 1.8: plain land cells become one of the six original biomes
        for j in 0..h {
            for i in 0..w {
                let o = idx(i, j, w);
                let id = out[o];
                if id == 0 {
                    continue;
                }
                let cs = get_chunk_seed(ss, i + x, j + z);
                out[o] = OLD_BIOMES[mc_first_int(cs, 6) as usize];
            }
        }
        return;
    }

    if mc <= McVersion::V1_6 {
        // snow-marked cells stay frozen unless the pick lands on taiga
        for j in 0..h {
            for i in 0..w {
                let o = idx(i, j, w);
                let id = out[o];
                if id == 0 || id == MUSHROOM_FIELDS {
                    continue;
                }
                let cs = get_chunk_seed(ss, i + x, j + z);
                let v = OLD_BIOMES[mc_first_int(cs, 6) as usize];
                out[o] = if id == 1 {
                    v
                } else if v == TAIGA {
                    v
                } else {
                    SNOWY_TUNDRA
                };
            }
        }
        return;
    }

    // 1.7+: temperature bands with the special marker in the high nibble
    for j in 0..h {
        for i in 0..w {
            let o = idx(i, j, w);
            let mut id = out[o];
            let has_high_bit = (id & 0xF00) != 0;
            id &= !0xF00;

            if biome_type(id) == BiomeType::Ocean || id == MUSHROOM_FIELDS {
                out[o] = id;
                continue;
            }

            let cs = get_chunk_seed(ss, i + x, j + z);
            out[o] = match id {
                1 => {
                    // warm
                    if has_high_bit {
                        if mc_first_is_zero(cs, 3) {
                            BADLANDS_PLATEAU
                        } else {
                            WOODED_BADLANDS_PLATEAU
                        }
                    } else {
                        WARM_BIOMES[mc_first_int(cs, 6) as usize]
                    }
                }
                2 => {
                    // lush
                    if has_high_bit {
                        JUNGLE
                    } else {
                        LUSH_BIOMES[mc_first_int(cs, 6) as usize]
                    }
                }
                3 => {
                    // cold
                    if has_high_bit {
                        GIANT_TREE_TAIGA
                    } else {
                        COLD_BIOMES[mc_first_int(cs, 4) as usize]
                    }
                }
                4 => SNOW_BIOMES[mc_first_int(cs, 4) as usize],
                _ => MUSHROOM_FIELDS,
            };
        }
    }
}

/// 1.14+: jungle cells become bamboo jungle 1 in 10.
pub(super) fn map_bamboo(
    stack: &LayerStack,
    l: &Layer,
    out: &mut [i32],
    x: i32,
    z: i32,
    w: i32,
    h: i32,
) {
    stack.get_map(l.p.expect("bamboo layer requires a parent"), out, x, z, w, h);

    let ss = l.start_seed;
    for j in 0..h {
        for i in 0..w {
            let o = idx(i, j, w);
            if out[o] != JUNGLE {
                continue;
            }
            let cs = get_chunk_seed(ss, i + x, j + z);
            if mc_first_is_zero(cs, 10) {
                out[o] = BAMBOO_JUNGLE;
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn replace_edge_if_necessary(
    mc: McVersion,
    out: &mut [i32],
    o: usize,
    v10: i32,
    v21: i32,
    v01: i32,
    v12: i32,
    id: i32,
    base: i32,
    edge: i32,
) -> bool {
    if !are_similar(mc, id, base) {
        return false;
    }
    out[o] = if can_be_neighbors(mc, v10, base)
        && can_be_neighbors(mc, v21, base)
        && can_be_neighbors(mc, v01, base)
        && can_be_neighbors(mc, v12, base)
    {
        id
    } else {
        edge
    };
    true
}

#[allow(clippy::too_many_arguments)]
fn replace_edge(
    mc: McVersion,
    out: &mut [i32],
    o: usize,
    v10: i32,
    v21: i32,
    v01: i32,
    v12: i32,
    id: i32,
    base: i32,
    edge: i32,
) -> bool {
    if id != base {
        return false;
    }
    out[o] = if are_similar(mc, v10, base)
        && are_similar(mc, v21, base)
        && are_similar(mc, v01, base)
        && are_similar(mc, v12, base)
    {
        id
    } else {
        edge
    };
    true
}

/// Smooths illegal adjacencies: plateau rims, mega taiga rims, desert beside
/// snow and swamp beside the hot or frozen biomes.
pub(super) fn map_biome_edge(
    stack: &LayerStack,
    l: &Layer,
    out: &mut [i32],
    x: i32,
    z: i32,
    w: i32,
    h: i32,
) {
    let px = x - 1;
    let pz = z - 1;
    let pw = w + 2;

    stack.get_map(l.p.expect("biome-edge layer requires a parent"), out, px, pz, pw, h + 2);

    let mc = l.mc;
    for j in 0..h {
        for i in 0..w {
            let v11 = out[idx(i + 1, j + 1, pw)];
            let v10 = out[idx(i + 1, j, pw)];
            let v21 = out[idx(i + 2, j + 1, pw)];
            let v01 = out[idx(i, j + 1, pw)];
            let v12 = out[idx(i + 1, j + 2, pw)];
            let o = idx(i, j, w);

            if !replace_edge_if_necessary(mc, out, o, v10, v21, v01, v12, v11, MOUNTAINS, MOUNTAIN_EDGE)
                && !replace_edge(mc, out, o, v10, v21, v01, v12, v11, WOODED_BADLANDS_PLATEAU, BADLANDS)
                && !replace_edge(mc, out, o, v10, v21, v01, v12, v11, BADLANDS_PLATEAU, BADLANDS)
                && !replace_edge(mc, out, o, v10, v21, v01, v12, v11, GIANT_TREE_TAIGA, TAIGA)
            {
                if v11 == DESERT {
                    out[o] = if v10 != SNOWY_TUNDRA
                        && v21 != SNOWY_TUNDRA
                        && v01 != SNOWY_TUNDRA
                        && v12 != SNOWY_TUNDRA
                    {
                        v11
                    } else {
                        WOODED_MOUNTAINS
                    };
                } else if v11 == SWAMP {
                    let near_hostile = [v10, v21, v01, v12]
                        .iter()
                        .any(|&v| v == DESERT || v == SNOWY_TAIGA || v == SNOWY_TUNDRA);
                    if near_hostile {
                        out[o] = PLAINS;
                    } else {
                        let near_jungle =
                            [v10, v21, v01, v12].iter().any(|&v| v == JUNGLE);
                        out[o] = if near_jungle { JUNGLE_EDGE } else { v11 };
                    }
                } else {
                    out[o] = v11;
                }
            }
        }
    }
}

/// River-noise init: land cells get a random class; 1.6 and earlier use a
/// two-value class, 1.7+ a wide one.
pub(super) fn map_noise(
    stack: &LayerStack,
    l: &Layer,
    out: &mut [i32],
    x: i32,
    z: i32,
    w: i32,
    h: i32,
) {
    stack.get_map(l.p.expect("noise layer requires a parent"), out, x, z, w, h);

    let modulus = if l.mc <= McVersion::V1_6 { 2 } else { 299_999 };
    let ss = l.start_seed;
    for j in 0..h {
        for i in 0..w {
            let o = idx(i, j, w);
            out[o] = if out[o] > 0 {
                let cs = get_chunk_seed(ss, i + x, j + z);
                mc_first_int(cs, modulus) + 2
            } else {
                0
            };
        }
    }
}

/// Hill and mutation variants, driven by the river-noise chain: a noise
/// value of 1 mod 29 forces a mutation, 0 mod 29 upgrades an accepted hill
/// to its mutated form, and otherwise hills appear with chance 1/3 when at
/// least three neighbors agree with the center.
pub(super) fn map_hills(
    stack: &LayerStack,
    l: &Layer,
    out: &mut [i32],
    x: i32,
    z: i32,
    w: i32,
    h: i32,
) {
    let px = x - 1;
    let pz = z - 1;
    let pw = w + 2;
    let ph = h + 2;

    let p1 = l.p.expect("hills layer requires a parent");
    let p2 = l.p2.expect("hills layer requires two parents");

    stack.get_map(p1, out, px, pz, pw, ph);
    let buf: Vec<i32> = out[..(pw * ph) as usize].to_vec();
    stack.get_map(p2, out, px, pz, pw, ph);

    let st = l.start_salt;
    let ss = l.start_seed;
    let mc = l.mc;

    for j in 0..h {
        for i in 0..w {
            let mut cs = get_chunk_seed(ss, i + x, j + z);
            let a11 = buf[idx(i + 1, j + 1, pw)]; // biome chain
            let b11 = out[idx(i + 1, j + 1, pw)]; // noise chain
            let o = idx(i, j, w);

            if mc <= McVersion::V1_6 {
                // no noise-driven mutations yet: plain 1/3 hills
                if !mc_first_is_zero(cs, 3) {
                    out[o] = a11;
                    continue;
                }
                let hill_id = match a11 {
                    DESERT => DESERT_HILLS,
                    FOREST => WOODED_HILLS,
                    TAIGA => TAIGA_HILLS,
                    PLAINS => FOREST,
                    SNOWY_TUNDRA => SNOWY_MOUNTAINS,
                    JUNGLE => JUNGLE_HILLS,
                    _ => a11,
                };
                out[o] = if hill_id == a11 {
                    a11
                } else {
                    let a10 = buf[idx(i + 1, j, pw)];
                    let a21 = buf[idx(i + 2, j + 1, pw)];
                    let a01 = buf[idx(i, j + 1, pw)];
                    let a12 = buf[idx(i + 1, j + 2, pw)];
                    let equals = [a10, a21, a01, a12].iter().filter(|&&v| v == a11).count();
                    if equals >= 3 { hill_id } else { a11 }
                };
                continue;
            }

            let var12 = (b11 - 2) % 29 == 0;

            if a11 != 0 && b11 >= 2 && (b11 - 2) % 29 == 1 && a11 < 128 {
                out[o] = if biome_exists(mc, a11 + 128) { a11 + 128 } else { a11 };
                continue;
            }

            let r3 = mc_first_is_zero(cs, 3);
            cs = mc_step_seed(cs, st);
            if !r3 && !var12 {
                out[o] = a11;
                continue;
            }

            let mut hill_id = a11;
            match a11 {
                DESERT => hill_id = DESERT_HILLS,
                FOREST => hill_id = WOODED_HILLS,
                BIRCH_FOREST => hill_id = BIRCH_FOREST_HILLS,
                DARK_FOREST => hill_id = PLAINS,
                TAIGA => hill_id = TAIGA_HILLS,
                GIANT_TREE_TAIGA => hill_id = GIANT_TREE_TAIGA_HILLS,
                SNOWY_TAIGA => hill_id = SNOWY_TAIGA_HILLS,
                PLAINS => {
                    hill_id = if mc_first_is_zero(cs, 3) { WOODED_HILLS } else { FOREST };
                }
                SNOWY_TUNDRA => hill_id = SNOWY_MOUNTAINS,
                JUNGLE => hill_id = JUNGLE_HILLS,
                BAMBOO_JUNGLE => hill_id = BAMBOO_JUNGLE_HILLS,
                OCEAN => hill_id = DEEP_OCEAN,
                MOUNTAINS => hill_id = WOODED_MOUNTAINS,
                SAVANNA => hill_id = SAVANNA_PLATEAU,
                _ => {
                    if are_similar(mc, a11, WOODED_BADLANDS_PLATEAU) {
                        hill_id = BADLANDS;
                    } else if a11 == DEEP_OCEAN {
                        let r = mc_first_is_zero(cs, 3);
                        cs = mc_step_seed(cs, st);
                        if r {
                            hill_id = if mc_first_is_zero(cs, 2) { PLAINS } else { FOREST };
                        }
                    }
                }
            }

            if var12 && hill_id != a11 {
                hill_id = if biome_exists(mc, hill_id + 128) { hill_id + 128 } else { a11 };
            }

            if hill_id == a11 {
                out[o] = a11;
            } else {
                let a10 = buf[idx(i + 1, j, pw)];
                let a21 = buf[idx(i + 2, j + 1, pw)];
                let a01 = buf[idx(i, j + 1, pw)];
                let a12 = buf[idx(i + 1, j + 2, pw)];
                let equals = [a10, a21, a01, a12]
                    .iter()
                    .filter(|&&v| are_similar(mc, v, a11))
                    .count();
                out[o] = if equals >= 3 { hill_id } else { a11 };
            }
        }
    }
}

/// 1.7+: plains become sunflower plains 1 in 57.
pub(super) fn map_sunflower(
    stack: &LayerStack,
    l: &Layer,
    out: &mut [i32],
    x: i32,
    z: i32,
    w: i32,
    h: i32,
) {
    let px = x - 1;
    let pz = z - 1;
    let pw = w + 2;

    stack.get_map(l.p.expect("sunflower layer requires a parent"), out, px, pz, pw, h + 2);

    let ss = l.start_seed;
    for j in 0..h {
        for i in 0..w {
            let v11 = out[idx(i + 1, j + 1, pw)];
            let cs = get_chunk_seed(ss, i + x, j + z);
            let o = idx(i, j, w);
            if mc_first_is_zero(cs, 57) && v11 == PLAINS {
                out[o] = SUNFLOWER_PLAINS;
            } else {
                out[o] = v11;
            }
        }
    }
}
