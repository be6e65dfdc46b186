//! Ocean temperature classification and the ocean-mix join (1.13+).

use lodestone_registry::biome_id::*;
use lodestone_registry::is_oceanic;

use super::{Layer, LayerStack};

#[inline]
fn idx(x: i32, z: i32, w: i32) -> usize {
    (x + z * w) as usize
}

/// Warm/lukewarm/cold/frozen ocean bands from a dedicated Perlin sampled at
/// 1/8 cell frequency.
pub(super) fn map_ocean_temp(
    stack: &LayerStack,
    _l: &Layer,
    out: &mut [i32],
    x: i32,
    z: i32,
    w: i32,
    h: i32,
) {
    let rnd = stack
        .ocean_rnd
        .as_ref()
        .expect("ocean temperature requires the seeded noise hook");

    for j in 0..h {
        for i in 0..w {
            let tmp = rnd.sample(
                f64::from(i + x) / 8.0,
                f64::from(j + z) / 8.0,
                0.0,
                0.0,
                0.0,
            );
            out[idx(i, j, w)] = if tmp > 0.4 {
                WARM_OCEAN
            } else if tmp > 0.2 {
                LUKEWARM_OCEAN
            } else if tmp < -0.4 {
                FROZEN_OCEAN
            } else if tmp < -0.2 {
                COLD_OCEAN
            } else {
                OCEAN
            };
        }
    }
}

/// Replaces ocean cells of the land chain with their temperature variant.
/// Warm and frozen oceans moderate to lukewarm/cold when land lies within
/// 8 cells; deep oceans promote to their deep variant.
pub(super) fn map_ocean_mix(
    stack: &LayerStack,
    l: &Layer,
    out: &mut [i32],
    x: i32,
    z: i32,
    w: i32,
    h: i32,
) {
    let p1 = l.p.expect("ocean-mix layer requires a parent");
    let p2 = l.p2.expect("ocean-mix layer requires two parents");

    let land_x = x - 8;
    let land_z = z - 8;
    let land_w = w + 17;
    let land_h = h + 17;

    stack.get_map(p1, out, land_x, land_z, land_w, land_h);
    let land: Vec<i32> = out[..(land_w * land_h) as usize].to_vec();
    stack.get_map(p2, out, x, z, w, h);

    for j in 0..h {
        for i in 0..w {
            let land_id = land[idx(i + 8, j + 8, land_w)];
            let o = idx(i, j, w);

            if !is_oceanic(land_id) {
                out[o] = land_id;
                continue;
            }

            let mut ocean_id = out[o];

            if ocean_id == WARM_OCEAN || ocean_id == FROZEN_OCEAN {
                'scan: for ii in (-8..=8).step_by(4) {
                    for jj in (-8..=8).step_by(4) {
                        let nearby = land[idx(i + ii + 8, j + jj + 8, land_w)];
                        if !is_oceanic(nearby) {
                            ocean_id = if ocean_id == WARM_OCEAN {
                                LUKEWARM_OCEAN
                            } else {
                                COLD_OCEAN
                            };
                            break 'scan;
                        }
                    }
                }
            }

            if land_id == DEEP_OCEAN {
                ocean_id = match ocean_id {
                    LUKEWARM_OCEAN => DEEP_LUKEWARM_OCEAN,
                    OCEAN => DEEP_OCEAN,
                    COLD_OCEAN => DEEP_COLD_OCEAN,
                    FROZEN_OCEAN => DEEP_FROZEN_OCEAN,
                    other => other,
                };
            }

            out[o] = ocean_id;
        }
    }
}

/// `FORCE_OCEAN_VARIANTS`: re-derives the ocean variants (including deep
/// promotion) at coarse scales where the normal chain has no ocean join.
pub(super) fn map_ocean_mix_mod(
    stack: &LayerStack,
    l: &Layer,
    out: &mut [i32],
    x: i32,
    z: i32,
    w: i32,
    h: i32,
) {
    let p1 = l.p.expect("ocean-mix layer requires a parent");
    let p2 = l.p2.expect("ocean-mix layer requires two parents");
    let len = (w * h) as usize;

    stack.get_map(p2, out, x, z, w, h);
    let otyp: Vec<i32> = out[..len].to_vec();
    stack.get_map(p1, out, x, z, w, h);

    for (o, &ocean) in otyp.iter().enumerate() {
        let land_id = out[o];
        if !is_oceanic(land_id) {
            continue;
        }

        let mut ocean_id = ocean;
        if land_id == DEEP_OCEAN {
            ocean_id = match ocean_id {
                LUKEWARM_OCEAN => DEEP_LUKEWARM_OCEAN,
                OCEAN => DEEP_OCEAN,
                COLD_OCEAN => DEEP_COLD_OCEAN,
                FROZEN_OCEAN => DEEP_FROZEN_OCEAN,
                other => other,
            };
        }
        out[o] = ocean_id;
    }
}
