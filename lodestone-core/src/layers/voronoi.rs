//! The final 4x voronoi zoom: jittered cell centers give the only source of
//! 1:1 block-level biome variation.
//!
//! Pre-1.15 the jitter comes from the layer's chunk seeds; 1.15 replaced it
//! with a position hash salted by the SHA-256 of the world seed, which also
//! extends to the 3D cell lookup used by the noise-based dimensions.

use sha2::{Digest, Sha256};

use super::{Layer, LayerStack, get_chunk_seed, mc_first_int, mc_step_seed};

#[inline]
fn idx(x: i32, z: i32, w: i32) -> usize {
    (x + z * w) as usize
}

/// SHA-256 salt of a world seed: the first eight digest bytes of the
/// little-endian seed, read little-endian.
#[must_use]
pub fn voronoi_sha(seed: u64) -> u64 {
    let digest = Sha256::digest(seed.to_le_bytes());
    u64::from_le_bytes(digest[..8].try_into().expect("digest is 32 bytes"))
}

fn voronoi_cell(sha: u64, a: i32, b: i32, c: i32) -> (i32, i32, i32) {
    let mut s = sha;
    s = mc_step_seed(s, a as u64);
    s = mc_step_seed(s, b as u64);
    s = mc_step_seed(s, c as u64);
    s = mc_step_seed(s, a as u64);
    s = mc_step_seed(s, b as u64);
    s = mc_step_seed(s, c as u64);

    let x = (((s >> 24) & 1023) as i32 - 512) * 36;
    s = mc_step_seed(s, sha);
    let y = (((s >> 24) & 1023) as i32 - 512) * 36;
    s = mc_step_seed(s, sha);
    let z = (((s >> 24) & 1023) as i32 - 512) * 36;
    (x, y, z)
}

/// Map a 1:1 position to the 1:4 cell that owns it under the SHA-salted
/// jitter (fixed point, 10240 units per block).
#[must_use]
pub fn voronoi_access_3d(sha: u64, x: i32, y: i32, z: i32) -> (i32, i32, i32) {
    let x = x - 2;
    let y = y - 2;
    let z = z - 2;
    let px = x >> 2;
    let py = y >> 2;
    let pz = z >> 2;
    let dx = (x & 3) * 10240;
    let dy = (y & 3) * 10240;
    let dz = (z & 3) * 10240;

    let mut best = (px, py, pz);
    let mut dmin = u64::MAX;
    for i in 0..8 {
        let bx = i32::from(i & 4 != 0);
        let by = i32::from(i & 2 != 0);
        let bz = i32::from(i & 1 != 0);
        let cx = px + bx;
        let cy = py + by;
        let cz = pz + bz;

        let (mut rx, mut ry, mut rz) = voronoi_cell(sha, cx, cy, cz);
        rx += bx * 40960 - dx;
        ry += by * 40960 - dy;
        rz += bz * 40960 - dz;

        let d = (i64::from(rx) * i64::from(rx)
            + i64::from(ry) * i64::from(ry)
            + i64::from(rz) * i64::from(rz)) as u64;
        if d < dmin {
            dmin = d;
            best = (cx, cy, cz);
        }
    }
    best
}

/// Legacy voronoi (≤1.14): jitter drawn from the layer's chunk seeds in
/// 2D, expanding each parent cell into a 4x4 block.
pub(super) fn map_voronoi_114(
    stack: &LayerStack,
    l: &Layer,
    out: &mut [i32],
    x: i32,
    z: i32,
    w: i32,
    h: i32,
) {
    let x = x - 2;
    let z = z - 2;
    let px = x >> 2;
    let pz = z >> 2;
    let pw = ((x + w) >> 2) - px + 2;
    let ph = ((z + h) >> 2) - pz + 2;

    stack.get_map(l.p.expect("voronoi layer requires a parent"), out, px, pz, pw, ph);

    let new_w = (pw - 1) << 2;
    let buf_off = (pw * ph) as usize;
    let st = l.start_salt;
    let ss = l.start_seed;

    for j in 0..ph - 1 {
        let mut v00 = out[idx(0, j, pw)];
        let mut v01 = out[idx(0, j + 1, pw)];

        for i in 0..pw - 1 {
            // jitter of the four surrounding cell centers, in units of 1/1024
            let mut jitter = |cx: i32, cz: i32, off_x: f64, off_z: f64| -> (f64, f64) {
                let mut cs = get_chunk_seed(ss, cx << 2, cz << 2);
                let a = (f64::from(mc_first_int(cs, 1024)) / 1024.0 - 0.5) * 3.6 + off_x;
                cs = mc_step_seed(cs, st);
                let b = (f64::from(mc_first_int(cs, 1024)) / 1024.0 - 0.5) * 3.6 + off_z;
                (a, b)
            };

            let (da1, da2) = jitter(i + px, j + pz, 0.0, 0.0);
            let (db1, db2) = jitter(i + px + 1, j + pz, 4.0, 0.0);
            let (dc1, dc2) = jitter(i + px, j + pz + 1, 0.0, 4.0);
            let (dd1, dd2) = jitter(i + px + 1, j + pz + 1, 4.0, 4.0);

            let v10 = out[idx(i + 1, j, pw)] & 255;
            let v11 = out[idx(i + 1, j + 1, pw)] & 255;

            for jj in 0..4 {
                let mut bi = buf_off + (((j << 2) + jj) * new_w + (i << 2)) as usize;
                for ii in 0..4 {
                    let fi = f64::from(ii);
                    let fj = f64::from(jj);
                    let da = (fj - da2) * (fj - da2) + (fi - da1) * (fi - da1);
                    let db = (fj - db2) * (fj - db2) + (fi - db1) * (fi - db1);
                    let dc = (fj - dc2) * (fj - dc2) + (fi - dc1) * (fi - dc1);
                    let dd = (fj - dd2) * (fj - dd2) + (fi - dd1) * (fi - dd1);

                    out[bi] = if da < db && da < dc && da < dd {
                        v00
                    } else if db < da && db < dc && db < dd {
                        v10
                    } else if dc < da && dc < db && dc < dd {
                        v01
                    } else {
                        v11
                    };
                    bi += 1;
                }
            }

            v00 = v10;
            v01 = v11;
        }
    }

    for j in 0..h {
        let src = buf_off + ((j + (z & 3)) * new_w + (x & 3)) as usize;
        out.copy_within(src..src + w as usize, (j * w) as usize);
    }
}

/// 1.15+ voronoi: each 1:1 position hashes to its owning 1:4 cell.
pub(super) fn map_voronoi(
    stack: &LayerStack,
    l: &Layer,
    out: &mut [i32],
    x: i32,
    z: i32,
    w: i32,
    h: i32,
) {
    let x = x - 2;
    let z = z - 2;
    let px = x >> 2;
    let pz = z >> 2;
    let pw = ((x + w) >> 2) - px + 2;
    let ph = ((z + h) >> 2) - pz + 2;

    stack.get_map(l.p.expect("voronoi layer requires a parent"), out, px, pz, pw, ph);

    let buf_off = (pw * ph) as usize;
    let sha = l.start_salt;

    for j in 0..h {
        for i in 0..w {
            // the +2 bias removed above is reapplied by the access hash
            let (x4, _y4, z4) = voronoi_access_3d(sha, x + i + 2, 0, z + j + 2);
            out[buf_off + idx(i, j, w)] = out[idx(x4 - px, z4 - pz, pw)];
        }
    }

    out.copy_within(buf_off..buf_off + (w * h) as usize, 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha_follows_the_little_endian_contract() {
        // SHA-256 of eight zero bytes starts af5570f5a1810b7a...
        assert_eq!(voronoi_sha(0), 0x7A0B_81A1_F570_55AF);
        // ...and of 01 00 .. 00 starts 7c9fa136d4413fa6
        assert_eq!(voronoi_sha(1), 0xA63F_41D4_36A1_9F7C);
    }

    #[test]
    fn access_maps_into_neighbor_cells() {
        let sha = voronoi_sha(12345);
        for &(x, y, z) in &[(0, 0, 0), (17, 3, -12), (-1000, 16, 999)] {
            let (x4, y4, z4) = voronoi_access_3d(sha, x, y, z);
            assert!(((x - 2) >> 2..=((x - 2) >> 2) + 1).contains(&x4));
            assert!(((y - 2) >> 2..=((y - 2) >> 2) + 1).contains(&y4));
            assert!(((z - 2) >> 2..=((z - 2) >> 2) + 1).contains(&z4));
        }
    }
}
