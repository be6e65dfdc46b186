//! End gateway linkage: where the gateway spawned on the first dragon death
//! sends the player in the outer End.
//!
//! The first gateway is one of twenty hardcoded ring positions; its exit
//! links along the outward ray at radius ~1024, walking 16-block steps over
//! empty/non-empty chunks, then choosing the tallest terrain or small-island
//! block around the landing chunk (or conjuring an island if there is
//! nothing to stand on).

use lodestone_registry::biome_id::SMALL_END_ISLANDS;
use lodestone_registry::version::McVersion;
use lodestone_utils::random::{LegacyRandom, Random};

use crate::end::{EndNoise, SurfaceNoise, get_surface_height, sample_noise_column_end};

use super::{Pos, Pos3};

/// Empirical pad added to island radii for block-intersection tests.
const RD: f64 = 0.35;

const NULL_POS: Pos3 = Pos3 {
    x: -1,
    y: -1,
    z: -1,
};

/// The twenty possible first-gateway positions.
const GATEWAYS: [Pos; 20] = [
    Pos { x: 96, z: 0 },
    Pos { x: 91, z: 29 },
    Pos { x: 77, z: 56 },
    Pos { x: 56, z: 77 },
    Pos { x: 29, z: 91 },
    Pos { x: -1, z: 96 },
    Pos { x: -30, z: 91 },
    Pos { x: -57, z: 77 },
    Pos { x: -78, z: 56 },
    Pos { x: -92, z: 29 },
    Pos { x: -96, z: -1 },
    Pos { x: -92, z: -30 },
    Pos { x: -78, z: -57 },
    Pos { x: -57, z: -78 },
    Pos { x: -30, z: -92 },
    Pos { x: 0, z: -96 },
    Pos { x: 29, z: -92 },
    Pos { x: 56, z: -78 },
    Pos { x: 77, z: -57 },
    Pos { x: 91, z: -30 },
];

/// The first gateway spawned upon dragon death.
#[must_use]
pub fn main_gateway(lower48: u64) -> Pos {
    let mut rng = LegacyRandom::from_seed(lower48);
    GATEWAYS[rng.next_i32_bounded(20) as usize]
}

/// Population seed of a chunk (used by decoration randoms).
#[must_use]
pub fn pop_seed(world_seed: u64, x: i32, z: i32) -> u64 {
    let mut rng = LegacyRandom::from_seed(world_seed);
    let a = (rng.next_long() as u64) | 1;
    let b = (rng.next_long() as u64) | 1;
    (x as u64)
        .wrapping_mul(a)
        .wrapping_add((z as u64).wrapping_mul(b))
        ^ world_seed
}

/// A small end island: top-layer center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndIsland {
    /// Top-layer center.
    pub pos: Pos3,
    /// Top-layer radius.
    pub r: f64,
}

/// Up to two islands a chunk's decoration can spawn.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndIslandPair {
    /// Number of islands (0..=2).
    pub len: usize,
    /// The islands; only `len` entries are meaningful.
    pub islands: [Option<EndIsland>; 2],
}

struct BlockArea {
    min_x: i32,
    min_z: i32,
    max_x: i32,
    max_z: i32,
}

const FULL_AREA: BlockArea = BlockArea {
    min_x: i32::MIN,
    min_z: i32::MIN,
    max_x: i32::MAX,
    max_z: i32::MAX,
};

fn block_is_within_island(island: &EndIsland, x: i32, z: i32) -> bool {
    let r = island.r + RD;
    let dx = f64::from((island.pos.x - x).abs()) - 0.5;
    let dz = f64::from((island.pos.z - z).abs()) - 0.5;
    dx * dx + dz * dz <= r * r
}

fn island_intersects(island: &EndIsland, area: &BlockArea) -> bool {
    let fx = f64::from(island.pos.x);
    let fz = f64::from(island.pos.z);
    let can_x = fx + island.r + RD > f64::from(area.min_x) && fx - island.r - RD < f64::from(area.max_x);
    let can_z = fz + island.r + RD > f64::from(area.min_z) && fz - island.r - RD < f64::from(area.max_z);
    if !can_x || !can_z {
        return false;
    }

    // the island's circular shape: a center inside either axis range always
    // intersects; otherwise one of the corners must fall inside the circle
    if (island.pos.x > area.min_x && island.pos.x < area.max_x)
        || (island.pos.z > area.min_z && island.pos.z < area.max_z)
    {
        return true;
    }
    block_is_within_island(island, area.min_x, area.min_z)
        || block_is_within_island(island, area.min_x, area.max_z)
        || block_is_within_island(island, area.max_x, area.min_z)
        || block_is_within_island(island, area.max_x, area.max_z)
}

/// The small end islands a chunk decoration spawns (1/14 chance, second
/// island 1/4).
#[must_use]
pub fn generate_islands(en: &EndNoise, lower48: u64, block_x: i32, block_z: i32) -> EndIslandPair {
    let mut pair = EndIslandPair::default();

    let biome = en.biome_at((block_x >> 2) + 2, (block_z >> 2) + 2);
    if biome != SMALL_END_ISLANDS {
        return pair;
    }

    let mut rng = LegacyRandom::from_seed(pop_seed(lower48, block_x, block_z));
    if rng.next_i32_bounded(14) != 0 {
        return pair;
    }

    let mut first = EndIsland {
        pos: Pos3 {
            x: rng.next_i32_bounded(16) + block_x,
            y: rng.next_i32_bounded(16) + 55,
            z: rng.next_i32_bounded(16) + block_z,
        },
        r: 0.0,
    };
    pair.len = 1;

    let second = if rng.next_i32_bounded(4) == 0 {
        pair.len = 2;
        Some(Pos3 {
            x: rng.next_i32_bounded(16) + block_x,
            y: rng.next_i32_bounded(16) + 55,
            z: rng.next_i32_bounded(16) + block_z,
        })
    } else {
        None
    };

    first.r = f64::from(rng.next_i32_bounded(3)) + 4.0;

    let second = second.map(|pos| {
        // the first island's lower layers consume one draw per layer
        let mut r1 = first.r;
        while r1 > 0.5 {
            r1 -= f64::from(rng.next_i32_bounded(2)) + 0.5;
        }
        EndIsland {
            pos,
            r: f64::from(rng.next_i32_bounded(3)) + 4.0,
        }
    });

    pair.islands = [Some(first), second];
    pair
}

/// The block of an island the game's tallest-block scan reaches first.
fn top_priority_block(island: &EndIsland, area: &BlockArea) -> Pos3 {
    let d = (island.r + RD).ceil() as i32;
    let x0 = (island.pos.x - d).max(area.min_x);
    let z0 = (island.pos.z - d).max(area.min_z);
    let x1 = (island.pos.x + d).min(area.max_x);
    let z1 = (island.pos.z + d).min(area.max_z);

    for x in x0..=x1 {
        for z in z0..=z1 {
            if block_is_within_island(island, x, z) {
                return Pos3 {
                    x,
                    y: island.pos.y,
                    z,
                };
            }
        }
    }
    NULL_POS
}

fn any_island_intersects_chunk(pair: &EndIslandPair, chunk_x: i32, chunk_z: i32) -> bool {
    let area = BlockArea {
        min_x: chunk_x * 16,
        min_z: chunk_z * 16,
        max_x: chunk_x * 16 + 15,
        max_z: chunk_z * 16 + 15,
    };
    pair.islands[..pair.len]
        .iter()
        .flatten()
        .any(|i| island_intersects(i, &area))
}

fn chunk_has_island_blocks(en: &EndNoise, lower48: u64, chunk_x: i32, chunk_z: i32) -> bool {
    // the chunk's own decoration is the most likely hit
    if generate_islands(en, lower48, chunk_x * 16, chunk_z * 16).len > 0 {
        return true;
    }
    for cx in chunk_x - 1..=chunk_x + 1 {
        for cz in chunk_z - 1..=chunk_z + 1 {
            if cx == chunk_x && cz == chunk_z {
                continue;
            }
            let pair = generate_islands(en, lower48, cx * 16, cz * 16);
            if any_island_intersects_chunk(&pair, chunk_x, chunk_z) {
                return true;
            }
        }
    }
    false
}

/// The result of the game's `getTallestBlock` over small islands in a 33x33
/// area: highest island, ties to the smaller x then z priority block.
fn island_tallest_block(
    en: &EndNoise,
    lower48: u64,
    center: Pos3,
    min_height: i32,
) -> Pos3 {
    let area = BlockArea {
        min_x: center.x - 16,
        min_z: center.z - 16,
        max_x: center.x + 16,
        max_z: center.z + 16,
    };
    const MAX_R: i32 = 7;

    let mut islands: Vec<EndIsland> = Vec::new();
    let min_cx = (f64::from(area.min_x - MAX_R) / 16.0).floor() as i32;
    let min_cz = (f64::from(area.min_z - MAX_R) / 16.0).floor() as i32;
    let max_cx = (f64::from(area.max_x + MAX_R) / 16.0).floor() as i32;
    let max_cz = (f64::from(area.max_z + MAX_R) / 16.0).floor() as i32;

    for cx in min_cx..=max_cx {
        for cz in min_cz..=max_cz {
            let pair = generate_islands(en, lower48, cx * 16, cz * 16);
            for island in pair.islands[..pair.len].iter().flatten() {
                if island.pos.y >= min_height && island_intersects(island, &area) {
                    islands.push(*island);
                }
            }
        }
    }

    if islands.is_empty() {
        return NULL_POS;
    }

    let max_height = islands.iter().map(|i| i.pos.y).max().unwrap_or(0);
    let mut result = NULL_POS;
    for island in islands.iter().filter(|i| i.pos.y == max_height) {
        let top = top_priority_block(island, &area);
        if result.y == -1 || result.x > top.x || (result.x == top.x && result.z > top.z) {
            result = Pos3 {
                x: top.x,
                y: max_height,
                z: top.z,
            };
        }
    }
    result
}

// ── terrain columns ─────────────────────────────────────────────────────────

const REGION: usize = 6;

/// End terrain sampler with a 6x6 column scratch region.
pub struct EndTerrainNoise {
    sn: SurfaceNoise,
    en: EndNoise,
    cols: Box<[[[f64; 33]; REGION]; REGION]>,
    computed: [[bool; REGION]; REGION],
}

impl EndTerrainNoise {
    /// Seed the terrain and island noise for the lower 48 bits of a seed.
    #[must_use]
    pub fn new(mc: McVersion, lower48: u64) -> Self {
        let mut en = EndNoise::new(mc);
        en.set_seed(lower48);
        Self {
            sn: SurfaceNoise::end(lower48),
            en,
            cols: Box::new([[[0.0; 33]; REGION]; REGION]),
            computed: [[false; REGION]; REGION],
        }
    }

    fn sample_column(&mut self, cell_x: usize, cell_z: usize, min_x: i32, min_z: i32) {
        let mut col = [0.0; 33];
        sample_noise_column_end(
            &mut col,
            &self.sn,
            &self.en,
            cell_x as i32 + (min_x >> 3),
            cell_z as i32 + (min_z >> 3),
            0,
            32,
        );
        self.cols[cell_x][cell_z] = col;
        self.computed[cell_x][cell_z] = true;
    }

    fn ensure_columns(&mut self, cell_x: usize, cell_z: usize, min_x: i32, min_z: i32) {
        for dx in 0..=1 {
            for dz in 0..=1 {
                if !self.computed[cell_x + dx][cell_z + dz] {
                    self.sample_column(cell_x + dx, cell_z + dz, min_x, min_z);
                }
            }
        }
    }

    fn height_at(&self, cell_x: usize, cell_z: usize, x: i32, z: i32) -> i32 {
        let dx = f64::from(x & 7) / 8.0;
        let dz = f64::from(z & 7) / 8.0;
        get_surface_height(
            &self.cols[cell_x][cell_z],
            &self.cols[cell_x][cell_z + 1],
            &self.cols[cell_x + 1][cell_z],
            &self.cols[cell_x + 1][cell_z + 1],
            0,
            32,
            4,
            dx,
            dz,
        )
    }

    /// Whether the chunk contains any terrain block (optionally only
    /// counting height ≥ 30).
    pub fn chunk_has_terrain(&mut self, chunk_x: i32, chunk_z: i32, min_height_30: bool) -> bool {
        let min_x = chunk_x << 4;
        let min_z = chunk_z << 4;
        self.computed = [[false; REGION]; REGION];

        for x in min_x..=min_x + 15 {
            for z in min_z..=min_z + 15 {
                let cell_x = ((x >> 3) - (min_x >> 3)) as usize;
                let cell_z = ((z >> 3) - (min_z >> 3)) as usize;
                self.ensure_columns(cell_x, cell_z, min_x, min_z);
                let h = self.height_at(cell_x, cell_z, x, z);
                if h > 0 && (!min_height_30 || h >= 30) {
                    return true;
                }
            }
        }
        false
    }

    /// The tallest terrain block in the 33x33 area around `center`.
    pub fn terrain_tallest_block(&mut self, center: Pos3) -> Pos3 {
        let min_x = center.x - 16;
        let min_z = center.z - 16;
        for cx in 0..REGION {
            for cz in 0..REGION {
                self.sample_column(cx, cz, min_x, min_z);
            }
        }

        let mut best = NULL_POS;
        for x in min_x..=center.x + 16 {
            for z in min_z..=center.z + 16 {
                let cell_x = ((x >> 3) - (min_x >> 3)) as usize;
                let cell_z = ((z >> 3) - (min_z >> 3)) as usize;
                let h = self.height_at(cell_x, cell_z, x, z);
                if h > best.y {
                    best = Pos3 { x, y: h, z };
                }
            }
        }
        best
    }
}

/// Pack a block position into the game's 64-bit position encoding.
#[must_use]
pub fn pos_as_long(pos: Pos3) -> u64 {
    const PACKED_XZ: u32 = 26;
    const PACKED_Y: u32 = 64 - 2 * PACKED_XZ;
    const XZ_MASK: u64 = (1 << PACKED_XZ) - 1;
    const Y_MASK: u64 = (1 << PACKED_Y) - 1;

    let mut l = 0u64;
    l |= (pos.x as u64 & XZ_MASK) << (PACKED_XZ + PACKED_Y);
    l |= pos.y as u64 & Y_MASK;
    l | ((pos.z as u64 & XZ_MASK) << PACKED_Y)
}

/// The linked (outer-End) gateway position for the lower 48 seed bits.
#[must_use]
pub fn linked_gateway(mc: McVersion, lower48: u64) -> Pos3 {
    let main = main_gateway(lower48);
    let len = f64::from(main.x).hypot(f64::from(main.z));
    let nx = f64::from(main.x) / len;
    let nz = f64::from(main.z) / len;

    let mut gx = nx * 1024.0;
    let mut gz = nz * 1024.0;
    let ix = nx * 16.0;
    let iz = nz * 16.0;

    let mut en = EndNoise::new(mc);
    en.set_seed(lower48);
    let mut etn = EndTerrainNoise::new(mc, lower48);

    // walk toward the main island while the landing chunk has blocks
    for _ in 0..16 {
        let cx = (gx / 16.0).floor() as i32;
        let cz = (gz / 16.0).floor() as i32;
        if !chunk_has_island_blocks(&en, lower48, cx, cz) && !etn.chunk_has_terrain(cx, cz, false)
        {
            break;
        }
        gx -= ix;
        gz -= iz;
    }

    // then walk outward over empty chunks
    for _ in 0..16 {
        let cx = (gx / 16.0).floor() as i32;
        let cz = (gz / 16.0).floor() as i32;
        if chunk_has_island_blocks(&en, lower48, cx, cz) || etn.chunk_has_terrain(cx, cz, false) {
            break;
        }
        gx += ix;
        gz += iz;
    }

    let cx = (gx / 16.0).floor() as i32;
    let cz = (gz / 16.0).floor() as i32;
    let has_valid_spawn =
        chunk_has_island_blocks(&en, lower48, cx, cz) || etn.chunk_has_terrain(cx, cz, true);

    if !has_valid_spawn {
        // nothing to stand on: the game conjures an island at y 75 and puts
        // the gateway above its priority block
        let block = Pos3 {
            x: (gx + 0.5).floor() as i32,
            y: 75,
            z: (gz + 0.5).floor() as i32,
        };
        let mut rng = LegacyRandom::from_seed(pos_as_long(block));
        let island = EndIsland {
            pos: block,
            r: f64::from(rng.next_i32_bounded(3)) + 4.0,
        };
        let mut gateway = top_priority_block(&island, &FULL_AREA);
        gateway.y += 10;
        return gateway;
    }

    // search around the south-east block of the landing chunk
    let center = Pos3 {
        x: cx * 16 + 15,
        y: 0,
        z: cz * 16 + 15,
    };
    let surface_max = etn.terrain_tallest_block(center);
    let island_max = island_tallest_block(&en, lower48, center, surface_max.y);

    let choose_surface = surface_max.y > island_max.y
        || (surface_max.y == island_max.y
            && (surface_max.x < island_max.x
                || (surface_max.x == island_max.x && surface_max.z < island_max.z)));

    let mut gateway = if choose_surface { surface_max } else { island_max };
    gateway.y += 10;
    if gateway.y <= 10 {
        return NULL_POS;
    }
    gateway
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_gateway_is_on_the_ring() {
        for seed in 0..64u64 {
            let p = main_gateway(seed);
            let d = f64::from(p.x).hypot(f64::from(p.z));
            assert!((94.0..=98.0).contains(&d), "distance {d}");
        }
    }

    #[test]
    fn pop_seed_is_symmetric_under_chunk_translation_only() {
        let a = pop_seed(1, 0, 0);
        let b = pop_seed(1, 16, 0);
        assert_ne!(a, b);
        assert_eq!(pop_seed(1, 16, 0), pop_seed(1, 16, 0));
    }

    #[test]
    fn islands_only_in_small_islands_biome() {
        let mut en = EndNoise::new(McVersion::V1_16_1);
        en.set_seed(1);
        // the central island is never a small-islands biome
        let pair = generate_islands(&en, 1, 0, 0);
        assert_eq!(pair.len, 0);
    }

    #[test]
    fn pos_packing_matches_the_bit_layout() {
        let p = Pos3 { x: 1, y: 2, z: 3 };
        let l = pos_as_long(p);
        assert_eq!(l >> 38, 1);
        assert_eq!(l & 0xFFF, 2);
        assert_eq!((l >> 12) & 0x3FF_FFFF, 3);
    }
}
