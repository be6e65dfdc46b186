//! Nearest-leaf biome lookup over the climate parameter lists (1.18+).
//!
//! The tree is a flat array of 64-bit encoded nodes over a table of per-axis
//! interval rows. Every internal node's box is the union of its children;
//! lookup walks the children in stored order, pruning subtrees whose box
//! distance cannot beat the current best. Because the search is an exact
//! nearest-neighbour query with ties resolved to the earliest entry, results
//! do not depend on the grouping, only on the entry order.

use std::sync::LazyLock;

use lodestone_registry::climate_params::{ClimateEntry, overworld_params};
use lodestone_registry::{BiomeId, McVersion};
use lodestone_utils::climate::{NP_MAX, TargetPoint};
use rustc_hash::FxHashMap;

/// Children per internal node.
const FANOUT: usize = 6;

const LEAF_BIT: u64 = 1 << 31;

/// Interval row: `(min, max)` per axis.
type ParamRow = [i32; 2 * NP_MAX];

/// Compiled decision tree.
#[derive(Debug)]
pub struct BiomeTree {
    /// Encoded nodes: payload in bits 0..31 (leaf biome id or first child
    /// index), leaf flag in bit 31, parameter row in bits 32..48, child
    /// count in bits 48..64.
    nodes: Vec<u64>,
    /// Interval rows referenced by the nodes.
    param: Vec<ParamRow>,
    /// Root node index.
    root: usize,
}

#[inline]
const fn node_payload(node: u64) -> usize {
    (node & 0x7FFF_FFFF) as usize
}

#[inline]
const fn node_is_leaf(node: u64) -> bool {
    node & LEAF_BIT != 0
}

#[inline]
const fn node_param(node: u64) -> usize {
    ((node >> 32) & 0xFFFF) as usize
}

#[inline]
const fn node_count(node: u64) -> usize {
    (node >> 48) as usize
}

struct TreeBuilder {
    nodes: Vec<u64>,
    param: Vec<ParamRow>,
    row_index: FxHashMap<ParamRow, usize>,
}

impl TreeBuilder {
    fn intern(&mut self, row: ParamRow) -> usize {
        if let Some(&i) = self.row_index.get(&row) {
            return i;
        }
        self.param.push(row);
        let i = self.param.len() - 1;
        self.row_index.insert(row, i);
        i
    }

    fn union(a: &ParamRow, b: &ParamRow) -> ParamRow {
        let mut r = *a;
        for k in 0..NP_MAX {
            r[2 * k] = r[2 * k].min(b[2 * k]);
            r[2 * k + 1] = r[2 * k + 1].max(b[2 * k + 1]);
        }
        r
    }
}

impl BiomeTree {
    /// Compile a parameter list, keeping entry order as the tie-break order.
    #[must_use]
    pub fn compile(entries: &[ClimateEntry]) -> Self {
        assert!(!entries.is_empty(), "cannot compile an empty parameter list");
        let mut b = TreeBuilder {
            nodes: Vec::with_capacity(entries.len() * 2),
            param: Vec::new(),
            row_index: FxHashMap::default(),
        };

        // leaves, in entry order
        for (pp, biome) in entries {
            debug_assert!(pp.offset == 0, "non-zero offsets are not encoded");
            let mut row = [0i32; 2 * NP_MAX];
            for (k, par) in pp.par.iter().enumerate() {
                row[2 * k] = par.min as i32;
                row[2 * k + 1] = par.max as i32;
            }
            let param_row = b.intern(row) as u64;
            b.nodes
                .push((param_row << 32) | LEAF_BIT | (*biome as u32 as u64 & 0x7FFF_FFFF));
        }

        // group levels bottom-up; children stay contiguous so a parent is
        // (first_child, count)
        let mut level: Vec<usize> = (0..entries.len()).collect();
        while level.len() > 1 {
            let mut next = Vec::with_capacity(level.len().div_ceil(FANOUT));
            for chunk in level.chunks(FANOUT) {
                let mut row = b.row_of(chunk[0]);
                for &c in &chunk[1..] {
                    row = TreeBuilder::union(&row, &b.row_of(c));
                }
                let param_row = b.intern(row) as u64;
                let first = chunk[0] as u64;
                let count = chunk.len() as u64;
                b.nodes.push((count << 48) | (param_row << 32) | first);
                next.push(b.nodes.len() - 1);
            }
            level = next;
        }

        let root = level[0];
        Self {
            nodes: b.nodes,
            param: b.param,
            root,
        }
    }

    #[inline]
    fn node_dist(&self, node: u64, target: &TargetPoint) -> i64 {
        let row = &self.param[node_param(node)];
        let mut ds = 0i64;
        for k in 0..NP_MAX {
            let p = target.np[k];
            let lo = i64::from(row[2 * k]);
            let hi = i64::from(row[2 * k + 1]);
            let d = if p < lo {
                lo - p
            } else if p > hi {
                p - hi
            } else {
                0
            };
            ds += d * d;
        }
        ds
    }

    /// Nearest leaf's biome id. `cache` warm-starts the bound with the last
    /// result and is updated; callers keep one per worker.
    #[must_use]
    pub fn lookup_cached(&self, target: &TargetPoint, cache: &mut Option<usize>) -> BiomeId {
        let mut best_idx = usize::MAX;
        let mut best_dist = i64::MAX;
        if let Some(leaf) = *cache {
            let node = self.nodes[leaf];
            best_dist = self.node_dist(node, target);
            best_idx = leaf;
        }

        self.descend(self.root, target, &mut best_idx, &mut best_dist);

        debug_assert!(best_idx != usize::MAX);
        *cache = Some(best_idx);
        node_payload(self.nodes[best_idx]) as BiomeId
    }

    /// Nearest leaf's biome id, without warm start.
    #[must_use]
    pub fn lookup(&self, target: &TargetPoint) -> BiomeId {
        let mut cache = None;
        self.lookup_cached(target, &mut cache)
    }

    fn descend(&self, idx: usize, target: &TargetPoint, best_idx: &mut usize, best_dist: &mut i64) {
        let node = self.nodes[idx];
        if node_is_leaf(node) {
            // strict comparison: the earliest visited leaf keeps ties, and a
            // warm-start leaf keeps ties against everything
            let d = self.node_dist(node, target);
            if d < *best_dist {
                *best_dist = d;
                *best_idx = idx;
            }
            return;
        }
        let first = node_payload(node);
        let count = node_count(node);
        for c in first..first + count {
            let child = self.nodes[c];
            if self.node_dist(child, target) >= *best_dist {
                continue;
            }
            self.descend(c, target, best_idx, best_dist);
        }
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl TreeBuilder {
    fn row_of(&self, idx: usize) -> ParamRow {
        self.param[node_param(self.nodes[idx])]
    }
}

static TREE_1_18: LazyLock<BiomeTree> =
    LazyLock::new(|| BiomeTree::compile(overworld_params(McVersion::V1_18)));
static TREE_1_19: LazyLock<BiomeTree> =
    LazyLock::new(|| BiomeTree::compile(overworld_params(McVersion::V1_19)));

/// The compiled overworld tree for a 1.18+ release.
#[must_use]
pub fn overworld_tree(mc: McVersion) -> &'static BiomeTree {
    if mc >= McVersion::V1_19_2 {
        &TREE_1_19
    } else {
        &TREE_1_18
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_force(entries: &[ClimateEntry], t: &TargetPoint) -> BiomeId {
        entries
            .iter()
            .map(|(pp, b)| (pp.distance_sq(t), *b))
            .min_by_key(|&(d, _)| d)
            .map(|(_, b)| b)
            .expect("non-empty")
    }

    fn best_dist(entries: &[ClimateEntry], t: &TargetPoint) -> i64 {
        entries
            .iter()
            .map(|(pp, _)| pp.distance_sq(t))
            .min()
            .expect("non-empty")
    }

    fn dist_of(entries: &[ClimateEntry], t: &TargetPoint, biome: BiomeId) -> i64 {
        entries
            .iter()
            .filter(|&&(_, b)| b == biome)
            .map(|(pp, _)| pp.distance_sq(t))
            .min()
            .expect("biome present in list")
    }

    #[test]
    fn cold_lookup_matches_brute_force() {
        let entries = overworld_params(McVersion::V1_18);
        let tree = overworld_tree(McVersion::V1_18);
        // a pseudo-random walk over climate space
        let mut s: u64 = 0x2545_F491_4F6C_DD1D;
        for _ in 0..300 {
            let mut np = [0i64; NP_MAX];
            for v in &mut np {
                s = s.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                *v = ((s >> 33) % 24000) as i64 - 12000;
            }
            let t = TargetPoint::new(np);
            assert_eq!(tree.lookup(&t), brute_force(entries, &t), "target {np:?}");
        }
    }

    #[test]
    fn warm_lookup_is_still_a_nearest_neighbour() {
        let entries = overworld_params(McVersion::V1_18);
        let tree = overworld_tree(McVersion::V1_18);
        let mut cache = None;
        let mut s: u64 = 0x9E37_79B9_7F4A_7C15;
        for _ in 0..300 {
            let mut np = [0i64; NP_MAX];
            for v in &mut np {
                s = s.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                *v = ((s >> 33) % 24000) as i64 - 12000;
            }
            let t = TargetPoint::new(np);
            let id = tree.lookup_cached(&t, &mut cache);
            // the warm start may keep an equally-distant previous leaf, so
            // compare distances rather than ids
            assert_eq!(dist_of(entries, &t, id), best_dist(entries, &t));
        }
    }

    #[test]
    fn lookup_is_idempotent() {
        let tree = overworld_tree(McVersion::V1_18);
        let t = TargetPoint::new([1000, -2000, 3000, -1000, 0, 500]);
        let a = tree.lookup(&t);
        let b = tree.lookup(&t);
        assert_eq!(a, b);
    }

    #[test]
    fn leaf_centroid_returns_that_leaf() {
        let entries = overworld_params(McVersion::V1_18);
        let tree = overworld_tree(McVersion::V1_18);
        // a query at a leaf's own centroid must return that leaf's biome
        // (or an exactly co-located earlier entry with the same distance 0)
        for (pp, biome) in entries.iter().take(40) {
            let np: Vec<i64> = pp.par.iter().map(|p| (p.min + p.max) / 2).collect();
            let t = TargetPoint::new(np.try_into().expect("6 axes"));
            let found = tree.lookup(&t);
            let brute = brute_force(entries, &t);
            assert_eq!(found, brute);
            if brute == *biome {
                assert_eq!(found, *biome);
            }
        }
    }
}
