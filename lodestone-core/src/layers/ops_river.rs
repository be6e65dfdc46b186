//! River carving, smoothing, shores and the river-mix join.

use lodestone_registry::biome_id::*;
use lodestone_registry::biomes::{BiomeType, biome_type, slot_exists};
use lodestone_registry::{McVersion, is_oceanic, is_snowy};

use super::{Layer, LayerStack, get_chunk_seed, mc_first_is_zero};

#[inline]
fn idx(x: i32, z: i32, w: i32) -> usize {
    (x + z * w) as usize
}

#[inline]
fn reduce_id(id: i32) -> i32 {
    if id >= 2 { 2 + (id & 1) } else { id }
}

/// Marks a river cell where the reduced noise class differs from any
/// orthogonal neighbor.
pub(super) fn map_river(
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

    stack.get_map(l.p.expect("river layer requires a parent"), out, px, pz, pw, h + 2);

    for j in 0..h {
        for i in 0..w {
            let v01 = reduce_id(out[idx(i, j + 1, pw)]);
            let v21 = reduce_id(out[idx(i + 2, j + 1, pw)]);
            let v10 = reduce_id(out[idx(i + 1, j, pw)]);
            let v12 = reduce_id(out[idx(i + 1, j + 2, pw)]);
            let v11 = reduce_id(out[idx(i + 1, j + 1, pw)]);

            out[idx(i, j, w)] = if v11 == v01 && v11 == v10 && v11 == v21 && v11 == v12 {
                -1
            } else {
                RIVER
            };
        }
    }
}

/// Axis-aligned median filter.
pub(super) fn map_smooth(
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

    stack.get_map(l.p.expect("smooth layer requires a parent"), out, px, pz, pw, h + 2);

    let ss = l.start_seed;
    for j in 0..h {
        for i in 0..w {
            let mut v11 = out[idx(i + 1, j + 1, pw)];
            let v10 = out[idx(i + 1, j, pw)];
            let v21 = out[idx(i + 2, j + 1, pw)];
            let v01 = out[idx(i, j + 1, pw)];
            let v12 = out[idx(i + 1, j + 2, pw)];

            if v01 == v21 && v10 == v12 {
                let cs = get_chunk_seed(ss, i + x, j + z);
                v11 = if mc_first_is_zero(cs, 2) { v01 } else { v10 };
            } else {
                if v01 == v21 {
                    v11 = v01;
                }
                if v10 == v12 {
                    v11 = v10;
                }
            }

            out[idx(i, j, w)] = v11;
        }
    }
}

/// 1.0–1.6: extra rivers inside swamp (1/6) and jungle (1/8).
pub(super) fn map_swamp_river(
    stack: &LayerStack,
    l: &Layer,
    out: &mut [i32],
    x: i32,
    z: i32,
    w: i32,
    h: i32,
) {
    stack.get_map(l.p.expect("swamp-river layer requires a parent"), out, x, z, w, h);

    let ss = l.start_seed;
    for j in 0..h {
        for i in 0..w {
            let o = idx(i, j, w);
            let v = out[o];
            if v != SWAMP && v != JUNGLE && v != JUNGLE_HILLS {
                continue;
            }
            let cs = get_chunk_seed(ss, i + x, j + z);
            if (v == SWAMP && mc_first_is_zero(cs, 6)) || (v != SWAMP && mc_first_is_zero(cs, 8)) {
                out[o] = RIVER;
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn replace_ocean(
    out: &mut [i32],
    o: usize,
    v10: i32,
    v21: i32,
    v01: i32,
    v12: i32,
    id: i32,
    replace_id: i32,
) -> bool {
    if is_oceanic(id) {
        return false;
    }
    out[o] = if !is_oceanic(v10) && !is_oceanic(v21) && !is_oceanic(v01) && !is_oceanic(v12) {
        id
    } else {
        replace_id
    };
    true
}

/// "Jungle, forest, taiga or oceanic": the neighbor classes a jungle tile
/// tolerates before decaying into jungle edge.
fn is_biome_jfto(id: i32) -> bool {
    if slot_exists(id) && biome_type(id) == BiomeType::Jungle {
        return true;
    }
    id == FOREST || id == TAIGA || is_oceanic(id)
}

/// Injects beaches, stone shores and mushroom shores between land and
/// ocean, with the rules of the stack's version.
pub(super) fn map_shore(
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

    stack.get_map(l.p.expect("shore layer requires a parent"), out, px, pz, pw, h + 2);

    let mc = l.mc;
    for j in 0..h {
        for i in 0..w {
            let v11 = out[idx(i + 1, j + 1, pw)];
            let v10 = out[idx(i + 1, j, pw)];
            let v21 = out[idx(i + 2, j + 1, pw)];
            let v01 = out[idx(i, j + 1, pw)];
            let v12 = out[idx(i + 1, j + 2, pw)];
            let o = idx(i, j, w);
            let any_ocean =
                v10 == OCEAN || v21 == OCEAN || v01 == OCEAN || v12 == OCEAN;

            if mc <= McVersion::V1_0 {
                // mushroom shores only; beaches are not biomes yet
                out[o] = if v11 == MUSHROOM_FIELDS && any_ocean {
                    MUSHROOM_FIELD_SHORE
                } else {
                    v11
                };
                continue;
            }

            if mc <= McVersion::V1_6 {
                out[o] = if v11 == MUSHROOM_FIELDS {
                    if any_ocean { MUSHROOM_FIELD_SHORE } else { v11 }
                } else if v11 == MOUNTAINS {
                    if any_ocean { MOUNTAIN_EDGE } else { v11 }
                } else if v11 != OCEAN && v11 != RIVER && v11 != SWAMP {
                    if any_ocean { BEACH } else { v11 }
                } else {
                    v11
                };
                continue;
            }

            // 1.7+
            let var10 = if slot_exists(v11) { v11 } else { 0 };

            if v11 == MUSHROOM_FIELDS {
                out[o] = if any_ocean { MUSHROOM_FIELD_SHORE } else { v11 };
            } else if var10 < 128 && biome_type(var10) == BiomeType::Jungle {
                if is_biome_jfto(v10) && is_biome_jfto(v21) && is_biome_jfto(v01) && is_biome_jfto(v12)
                {
                    if !is_oceanic(v10) && !is_oceanic(v21) && !is_oceanic(v01) && !is_oceanic(v12) {
                        out[o] = v11;
                    } else {
                        out[o] = BEACH;
                    }
                } else {
                    out[o] = JUNGLE_EDGE;
                }
            } else if v11 != MOUNTAINS && v11 != WOODED_MOUNTAINS && v11 != MOUNTAIN_EDGE {
                if is_snowy(var10) {
                    replace_ocean(out, o, v10, v21, v01, v12, v11, SNOWY_BEACH);
                } else if v11 != BADLANDS && v11 != WOODED_BADLANDS_PLATEAU {
                    if v11 != OCEAN && v11 != DEEP_OCEAN && v11 != RIVER && v11 != SWAMP {
                        if !is_oceanic(v10)
                            && !is_oceanic(v21)
                            && !is_oceanic(v01)
                            && !is_oceanic(v12)
                        {
                            out[o] = v11;
                        } else {
                            out[o] = BEACH;
                        }
                    } else {
                        out[o] = v11;
                    }
                } else if !is_oceanic(v10)
                    && !is_oceanic(v21)
                    && !is_oceanic(v01)
                    && !is_oceanic(v12)
                {
                    if biome_type(v10) == BiomeType::Mesa
                        && biome_type(v21) == BiomeType::Mesa
                        && biome_type(v01) == BiomeType::Mesa
                        && biome_type(v12) == BiomeType::Mesa
                    {
                        out[o] = v11;
                    } else {
                        out[o] = DESERT;
                    }
                } else {
                    out[o] = v11;
                }
            } else {
                replace_ocean(out, o, v10, v21, v01, v12, v11, STONE_SHORE);
            }
        }
    }
}

/// Overlays the river chain onto the biome chain: frozen river over snow,
/// suppressed inside mushroom islands and oceans.
pub(super) fn map_river_mix(
    stack: &LayerStack,
    l: &Layer,
    out: &mut [i32],
    x: i32,
    z: i32,
    w: i32,
    h: i32,
) {
    let p1 = l.p.expect("river-mix layer requires a parent");
    let p2 = l.p2.expect("river-mix layer requires two parents");
    let len = (w * h) as usize;

    stack.get_map(p1, out, x, z, w, h);
    let buf: Vec<i32> = out[..len].to_vec();
    stack.get_map(p2, out, x, z, w, h);

    for (o, &b) in buf.iter().enumerate() {
        if b != OCEAN && b != DEEP_OCEAN {
            if out[o] == RIVER {
                if b == SNOWY_TUNDRA {
                    out[o] = FROZEN_RIVER;
                } else if b == MUSHROOM_FIELDS || b == MUSHROOM_FIELD_SHORE {
                    out[o] = MUSHROOM_FIELD_SHORE;
                } else {
                    out[o] &= 255;
                }
            } else {
                out[o] = b;
            }
        } else {
            out[o] = b;
        }
    }
}
