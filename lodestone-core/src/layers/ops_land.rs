//! Continent seeding, zooming, land growth/erosion and the 1:1024 climate
//! band operators.
//!
//! Cell values at these scales are not biome ids yet: 0 is ocean, 1 warm
//! land, 2 lush, 3 cold, 4 freezing, plus the special marker in the high
//! nibble. The land operators only distinguish ocean (0), land (non-zero)
//! and the freezing band (4).

use lodestone_registry::biome_id::{DEEP_OCEAN, MUSHROOM_FIELDS, SNOWY_TUNDRA};

use super::{Layer, LayerStack, get_chunk_seed, mc_first_int, mc_first_is_zero, mc_step_seed};

#[inline]
fn idx(x: i32, z: i32, w: i32) -> usize {
    (x + z * w) as usize
}

/// Bernoulli 1-in-10 land at 1:4096; the origin cell is forced to land.
pub(super) fn map_continent(l: &Layer, out: &mut [i32], x: i32, z: i32, w: i32, h: i32) {
    let ss = l.start_seed;
    for j in 0..h {
        for i in 0..w {
            let cs = get_chunk_seed(ss, x + i, z + j);
            out[idx(i, j, w)] = i32::from(mc_first_is_zero(cs, 10));
        }
    }
    if x > -w && x <= 0 && z > -h && z <= 0 {
        out[idx(-x, -z, w)] = 1;
    }
}

/// Majority vote over four corners, falling back to a uniform pick.
fn select_mode_or_random(cs: u64, a1: i32, a2: i32, a3: i32, a4: i32) -> i32 {
    let rnd = match mc_first_int(cs, 4) {
        0 => a1,
        1 => a2,
        2 => a3,
        _ => a4,
    };

    if a2 == a3 && a3 == a4 {
        return a2;
    }
    if a1 == a2 && a1 == a3 {
        return a1;
    }
    if a1 == a2 && a1 == a4 {
        return a1;
    }
    if a1 == a3 && a1 == a4 {
        return a1;
    }
    if a1 == a2 && a3 != a4 {
        return a1;
    }
    if a1 == a3 && a2 != a4 {
        return a1;
    }
    if a1 == a4 && a2 != a3 {
        return a1;
    }
    if a2 == a3 && a1 != a4 {
        return a2;
    }
    if a2 == a4 && a1 != a3 {
        return a2;
    }
    if a3 == a4 && a1 != a2 {
        return a3;
    }
    rnd
}

/// Bit-exact 2x upscale. The fuzzy variant (used right above the continent
/// layer) picks the diagonal child uniformly; the plain variant uses the
/// majority vote.
#[allow(clippy::too_many_arguments)]
pub(super) fn map_zoom(
    stack: &LayerStack,
    l: &Layer,
    out: &mut [i32],
    x: i32,
    z: i32,
    w: i32,
    h: i32,
    fuzzy: bool,
) {
    let px = x >> 1;
    let pz = z >> 1;
    let pw = (w >> 1) + 2;
    let ph = (h >> 1) + 2;

    stack.get_map(l.p.expect("zoom layer requires a parent"), out, px, pz, pw, ph);

    let new_w = (pw - 1) << 1;
    let buf_off = (pw * ph) as usize;

    let st = l.start_salt;
    let ss = l.start_seed;

    for j in 0..ph - 1 {
        let mut bi = ((j << 1) * new_w) as usize + buf_off;
        let mut a = out[idx(0, j, pw)];
        let mut b = out[idx(0, j + 1, pw)];

        for i in 0..pw - 1 {
            let mut cs = get_chunk_seed(ss, (i + px) << 1, (j + pz) << 1);
            let a1 = out[idx(i + 1, j, pw)];
            let b1 = out[idx(i + 1, j + 1, pw)];

            out[bi] = a;
            out[bi + new_w as usize] = if mc_first_is_zero(cs, 2) { a } else { b };
            cs = mc_step_seed(cs, st);
            bi += 1;
            out[bi] = if mc_first_is_zero(cs, 2) { a } else { a1 };
            cs = mc_step_seed(cs, st);
            out[bi + new_w as usize] = if fuzzy {
                match mc_first_int(cs, 4) {
                    0 => a,
                    1 => a1,
                    2 => b,
                    _ => b1,
                }
            } else {
                select_mode_or_random(cs, a, a1, b, b1)
            };
            bi += 1;

            a = a1;
            b = b1;
        }
    }

    for j in 0..h {
        let src = buf_off + ((j + (z & 1)) * new_w + (x & 1)) as usize;
        out.copy_within(src..src + w as usize, (j * w) as usize);
    }
}

/// Shared body of the land growth/erosion operators. `keep` names the cell
/// value that survives growth and erosion: the freezing band for 1.7+, the
/// snowy tundra marker for 1.0–1.6, nothing for Beta 1.8.
#[allow(clippy::too_many_arguments)]
fn map_land_impl(
    stack: &LayerStack,
    l: &Layer,
    out: &mut [i32],
    x: i32,
    z: i32,
    w: i32,
    h: i32,
    keep: Option<i32>,
) {
    let px = x - 1;
    let pz = z - 1;
    let pw = w + 2;

    stack.get_map(l.p.expect("land layer requires a parent"), out, px, pz, pw, h + 2);

    let st = l.start_salt;
    let ss = l.start_seed;

    for j in 0..h {
        for i in 0..w {
            let v00 = out[idx(i, j, pw)];
            let v20 = out[idx(i + 2, j, pw)];
            let v02 = out[idx(i, j + 2, pw)];
            let v22 = out[idx(i + 2, j + 2, pw)];
            let v11 = out[idx(i + 1, j + 1, pw)];

            let o = idx(i, j, w);
            if v11 == 0 && (v00 != 0 || v20 != 0 || v02 != 0 || v22 != 0) {
                let mut cs = get_chunk_seed(ss, i + x, j + z);
                let mut v = 1;
                let mut inc = 1;

                if v00 != 0 {
                    if mc_first_is_zero(cs, inc) {
                        v = v00;
                    }
                    inc += 1;
                    cs = mc_step_seed(cs, st);
                }
                if v20 != 0 {
                    if mc_first_is_zero(cs, inc) {
                        v = v20;
                    }
                    inc += 1;
                    cs = mc_step_seed(cs, st);
                }
                if v02 != 0 {
                    if mc_first_is_zero(cs, inc) {
                        v = v02;
                    }
                    inc += 1;
                    cs = mc_step_seed(cs, st);
                }
                if v22 != 0 {
                    if mc_first_is_zero(cs, inc) {
                        v = v22;
                    }
                    cs = mc_step_seed(cs, st);
                }

                if mc_first_is_zero(cs, 3) {
                    out[o] = v;
                } else if keep == Some(v) {
                    out[o] = v;
                } else {
                    out[o] = 0;
                }
            } else if v11 > 0 && (v00 == 0 || v20 == 0 || v02 == 0 || v22 == 0) {
                let cs = get_chunk_seed(ss, i + x, j + z);
                if mc_first_is_zero(cs, 5) {
                    out[o] = if keep == Some(v11) { v11 } else { 0 };
                } else {
                    out[o] = v11;
                }
            } else {
                out[o] = v11;
            }
        }
    }
}

/// Land growth/erosion, Beta 1.8 rules (no snow value exists yet).
pub(super) fn map_land_b18(
    stack: &LayerStack,
    l: &Layer,
    out: &mut [i32],
    x: i32,
    z: i32,
    w: i32,
    h: i32,
) {
    map_land_impl(stack, l, out, x, z, w, h, None);
}

/// Land growth/erosion, 1.0–1.6 rules: the snowy tundra marker survives.
pub(super) fn map_land16(
    stack: &LayerStack,
    l: &Layer,
    out: &mut [i32],
    x: i32,
    z: i32,
    w: i32,
    h: i32,
) {
    map_land_impl(stack, l, out, x, z, w, h, Some(SNOWY_TUNDRA));
}

/// Land growth/erosion, 1.7+ rules: the freezing band survives.
pub(super) fn map_land(
    stack: &LayerStack,
    l: &Layer,
    out: &mut [i32],
    x: i32,
    z: i32,
    w: i32,
    h: i32,
) {
    map_land_impl(stack, l, out, x, z, w, h, Some(4));
}

/// Regrows half of the cells that are completely surrounded by ocean.
pub(super) fn map_island(
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

    stack.get_map(l.p.expect("island layer requires a parent"), out, px, pz, pw, h + 2);

    let ss = l.start_seed;
    for j in 0..h {
        for i in 0..w {
            let v11 = out[idx(i + 1, j + 1, pw)];
            let o = idx(i, j, w);
            out[o] = v11;

            if out[idx(i + 1, j, pw)] != 0 {
                continue;
            }
            if out[idx(i + 2, j + 1, pw)] != 0 {
                continue;
            }
            if out[idx(i, j + 1, pw)] != 0 {
                continue;
            }
            if out[idx(i + 1, j + 2, pw)] != 0 {
                continue;
            }

            if v11 == 0 {
                let cs = get_chunk_seed(ss, i + x, j + z);
                if mc_first_is_zero(cs, 2) {
                    out[o] = 1;
                }
            }
        }
    }
}

/// 1.0–1.6 snow: land cells become snowy tundra 1 in 5.
pub(super) fn map_snow16(
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

    stack.get_map(l.p.expect("snow layer requires a parent"), out, px, pz, pw, h + 2);

    let ss = l.start_seed;
    for j in 0..h {
        for i in 0..w {
            let v11 = out[idx(i + 1, j + 1, pw)];
            out[idx(i, j, w)] = if v11 == 0 {
                0
            } else {
                let cs = get_chunk_seed(ss, i + x, j + z);
                if mc_first_is_zero(cs, 5) { SNOWY_TUNDRA } else { 1 }
            };
        }
    }
}

/// 1.7+ temperature split: freezing 1/6, cold 1/3, warm otherwise.
pub(super) fn map_snow(
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

    stack.get_map(l.p.expect("snow layer requires a parent"), out, px, pz, pw, h + 2);

    let ss = l.start_seed;
    for j in 0..h {
        for i in 0..w {
            let v11 = out[idx(i + 1, j + 1, pw)];
            out[idx(i, j, w)] = if v11 == 0 {
                0
            } else {
                let cs = get_chunk_seed(ss, i + x, j + z);
                match mc_first_int(cs, 6) {
                    0 => 4,
                    1 => 3,
                    _ => 1,
                }
            };
        }
    }
}

/// Warm cells bordering cold/freezing become lush.
pub(super) fn map_cool(
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

    stack.get_map(l.p.expect("cool layer requires a parent"), out, px, pz, pw, h + 2);

    for j in 0..h {
        for i in 0..w {
            let mut v11 = out[idx(i + 1, j + 1, pw)];
            if v11 == 1 {
                let v10 = out[idx(i + 1, j, pw)];
                let v21 = out[idx(i + 2, j + 1, pw)];
                let v01 = out[idx(i, j + 1, pw)];
                let v12 = out[idx(i + 1, j + 2, pw)];
                if [v10, v21, v01, v12].iter().any(|&v| v == 3 || v == 4) {
                    v11 = 2;
                }
            }
            out[idx(i, j, w)] = v11;
        }
    }
}

/// Freezing cells bordering warm/lush become cold.
pub(super) fn map_heat(
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

    stack.get_map(l.p.expect("heat layer requires a parent"), out, px, pz, pw, h + 2);

    for j in 0..h {
        for i in 0..w {
            let mut v11 = out[idx(i + 1, j + 1, pw)];
            if v11 == 4 {
                let v10 = out[idx(i + 1, j, pw)];
                let v21 = out[idx(i + 2, j + 1, pw)];
                let v01 = out[idx(i, j + 1, pw)];
                let v12 = out[idx(i + 1, j + 2, pw)];
                if [v10, v21, v01, v12].iter().any(|&v| v == 1 || v == 2) {
                    v11 = 3;
                }
            }
            out[idx(i, j, w)] = v11;
        }
    }
}

/// Rare mutation marker: 1 in 13 land cells get a band 1..15 in the high
/// nibble.
pub(super) fn map_special(
    stack: &LayerStack,
    l: &Layer,
    out: &mut [i32],
    x: i32,
    z: i32,
    w: i32,
    h: i32,
) {
    stack.get_map(l.p.expect("special layer requires a parent"), out, x, z, w, h);

    let st = l.start_salt;
    let ss = l.start_seed;
    for j in 0..h {
        for i in 0..w {
            let o = idx(i, j, w);
            let mut v = out[o];
            if v == 0 {
                continue;
            }
            let mut cs = get_chunk_seed(ss, i + x, j + z);
            if mc_first_is_zero(cs, 13) {
                cs = mc_step_seed(cs, st);
                v |= ((1 + mc_first_int(cs, 15)) << 8) & 0xF00;
                out[o] = v;
            }
        }
    }
}

/// Mushroom fields on cells fully surrounded by ocean, 1 in 100.
pub(super) fn map_mushroom(
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

    stack.get_map(l.p.expect("mushroom layer requires a parent"), out, px, pz, pw, h + 2);

    let ss = l.start_seed;
    for j in 0..h {
        for i in 0..w {
            let v11 = out[idx(i + 1, j + 1, pw)];

            if v11 == 0
                && out[idx(i, j, pw)] == 0
                && out[idx(i + 2, j, pw)] == 0
                && out[idx(i, j + 2, pw)] == 0
                && out[idx(i + 2, j + 2, pw)] == 0
            {
                let cs = get_chunk_seed(ss, i + x, j + z);
                if mc_first_is_zero(cs, 100) {
                    out[idx(i, j, w)] = MUSHROOM_FIELDS;
                    continue;
                }
            }

            out[idx(i, j, w)] = v11;
        }
    }
}

/// Ocean cells with more than three ocean neighbors become deep ocean.
pub(super) fn map_deep_ocean(
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

    stack.get_map(l.p.expect("deep-ocean layer requires a parent"), out, px, pz, pw, h + 2);

    for j in 0..h {
        for i in 0..w {
            let v11 = out[idx(i + 1, j + 1, pw)];
            let mut oceans = 0;

            if out[idx(i + 1, j, pw)] == 0 {
                oceans += 1;
            }
            if out[idx(i + 2, j + 1, pw)] == 0 {
                oceans += 1;
            }
            if out[idx(i, j + 1, pw)] == 0 {
                oceans += 1;
            }
            if out[idx(i + 1, j + 2, pw)] == 0 {
                oceans += 1;
            }

            out[idx(i, j, w)] = if v11 == 0 && oceans > 3 { DEEP_OCEAN } else { v11 };
        }
    }
}
