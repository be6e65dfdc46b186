//! The overworld terrain-offset spline (1.18+).
//!
//! A spline node interpolates between child splines indexed by breakpoints
//! on one climate axis; leaves are constants. The whole overworld tree fits
//! in a fixed arena (42 multipoint and 151 constant nodes), so the stack is
//! allocated once per generator and never grows.

/// Climate axis a spline node consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplineAxis {
    /// Continentalness.
    Continentalness,
    /// Erosion.
    Erosion,
    /// Folded weirdness ("peaks and valleys").
    Ridges,
    /// Raw weirdness.
    Weirdness,
}

impl SplineAxis {
    #[inline]
    fn index(self) -> usize {
        match self {
            Self::Continentalness => 0,
            Self::Erosion => 1,
            Self::Ridges => 2,
            Self::Weirdness => 3,
        }
    }
}

/// Index of a spline node in the arena; constants are tagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SplineRef {
    Multi(usize),
    Fix(usize),
}

const MAX_POINTS: usize = 12;

#[derive(Debug, Clone)]
struct SplineNode {
    axis: SplineAxis,
    len: usize,
    loc: [f32; MAX_POINTS],
    der: [f32; MAX_POINTS],
    val: [SplineRef; MAX_POINTS],
}

/// Arena-backed spline tree with fixed capacity.
#[derive(Debug, Clone)]
pub struct SplineStack {
    nodes: Vec<SplineNode>,
    fixed: Vec<f32>,
    root: SplineRef,
}

/// Capacity sufficient for the overworld spline.
const SPLINE_CAP: usize = 42;
/// Constant-leaf capacity sufficient for the overworld spline.
const FIX_CAP: usize = 151;

struct Builder {
    nodes: Vec<SplineNode>,
    fixed: Vec<f32>,
}

impl Builder {
    fn fix(&mut self, val: f32) -> SplineRef {
        debug_assert!(self.fixed.len() < FIX_CAP);
        self.fixed.push(val);
        SplineRef::Fix(self.fixed.len() - 1)
    }

    fn spline(&mut self, axis: SplineAxis) -> usize {
        debug_assert!(self.nodes.len() < SPLINE_CAP);
        self.nodes.push(SplineNode {
            axis,
            len: 0,
            loc: [0.0; MAX_POINTS],
            der: [0.0; MAX_POINTS],
            val: [SplineRef::Fix(0); MAX_POINTS],
        });
        self.nodes.len() - 1
    }

    fn add(&mut self, sp: usize, loc: f32, val: SplineRef, der: f32) {
        let node = &mut self.nodes[sp];
        debug_assert!(node.len < MAX_POINTS);
        node.loc[node.len] = loc;
        node.der[node.len] = der;
        node.val[node.len] = val;
        node.len += 1;
    }
}

/// Offset contribution of a weirdness/continentalness pair; the base of the
/// ridge splines.
fn offset_value(weirdness: f32, continentalness: f32) -> f32 {
    let f0 = 1.0 - (1.0 - continentalness) * 0.5;
    let f1 = 0.5 * (1.0 - continentalness);
    let f2 = (weirdness + 1.17) * 0.46082947;
    let off = f2 * f0 - f1;
    if weirdness < -0.7 {
        off.max(-0.2222)
    } else {
        off.max(0.0)
    }
}

/// Ridge spline for one continentalness level.
fn create_ridge_spline(b: &mut Builder, f: f32, bl: bool) -> usize {
    let sp = b.spline(SplineAxis::Ridges);

    let i = offset_value(-1.0, f);
    let k = offset_value(1.0, f);
    let l = 1.0 - (1.0 - f) * 0.5;
    let u = 0.5 * (1.0 - f);
    let l = u / (0.46082947 * l) - 1.17;

    if -0.65 < l && l < 1.0 {
        let u = offset_value(-0.65, f);
        let p = offset_value(-0.75, f);
        let q = (p - i) * 4.0;
        let r = offset_value(l, f);
        let s = (k - r) / (1.0 - l);

        let v_i = b.fix(i);
        let v_p = b.fix(p);
        let v_u = b.fix(u);
        let v_r1 = b.fix(r);
        let v_r2 = b.fix(r);
        let v_k = b.fix(k);
        b.add(sp, -1.0, v_i, q);
        b.add(sp, -0.75, v_p, 0.0);
        b.add(sp, -0.65, v_u, 0.0);
        b.add(sp, l - 0.01, v_r1, 0.0);
        b.add(sp, l, v_r2, s);
        b.add(sp, 1.0, v_k, s);
    } else {
        let u = (k - i) * 0.5;
        if bl {
            let v0 = b.fix(i.max(0.2));
            let v1 = b.fix(i + 0.5 * (k - i));
            b.add(sp, -1.0, v0, 0.0);
            b.add(sp, 0.0, v1, u);
        } else {
            let v0 = b.fix(i);
            b.add(sp, -1.0, v0, u);
        }
        let v_k = b.fix(k);
        b.add(sp, 1.0, v_k, u);
    }
    sp
}

/// Flat-offset ridge spline from five sampled heights.
fn create_flat_offset_spline(b: &mut Builder, f: f32, g: f32, h: f32, i: f32, j: f32, k: f32) -> usize {
    let sp = b.spline(SplineAxis::Ridges);

    let l = (0.5 * (g - f)).max(k);
    let m = 5.0 * (h - g);

    let v0 = b.fix(f);
    let v1 = b.fix(g);
    let v2 = b.fix(h);
    let v3 = b.fix(i);
    let v4 = b.fix(j);
    b.add(sp, -1.0, v0, l);
    b.add(sp, -0.4, v1, l.min(m));
    b.add(sp, 0.0, v2, m);
    b.add(sp, 0.4, v3, 2.0 * (i - h));
    b.add(sp, 1.0, v4, 0.7 * (j - i));
    sp
}

/// Erosion-indexed land spline for one continentalness band.
#[allow(clippy::many_single_char_names)]
fn create_land_spline(b: &mut Builder, f: f32, g: f32, h: f32, i: f32, j: f32, k: f32, bl: bool) -> usize {
    let sp1 = create_ridge_spline(b, 0.6 + i * (1.5 - 0.6), bl);
    let sp2 = create_ridge_spline(b, 0.6 + i * (1.0 - 0.6), bl);
    let sp3 = create_ridge_spline(b, i, bl);

    let ih = 0.5 * i;
    let sp4 = create_flat_offset_spline(b, f - 0.15, ih, ih, ih, i * 0.6, 0.5);
    let sp5 = create_flat_offset_spline(b, f, j * i, g * i, ih, i * 0.6, 0.5);
    let sp6 = create_flat_offset_spline(b, f, j, j, g, h, 0.5);
    let sp7 = create_flat_offset_spline(b, f, j, j, g, h, 0.5);

    let sp8 = b.spline(SplineAxis::Ridges);
    let v_f = b.fix(f);
    let v_h = b.fix(h + 0.07);
    b.add(sp8, -1.0, v_f, 0.0);
    b.add(sp8, -0.4, SplineRef::Multi(sp6), 0.0);
    b.add(sp8, 0.0, v_h, 0.0);

    let sp9 = create_flat_offset_spline(b, -0.02, k, k, g, h, 0.0);

    let sp = b.spline(SplineAxis::Erosion);
    b.add(sp, -0.85, SplineRef::Multi(sp1), 0.0);
    b.add(sp, -0.7, SplineRef::Multi(sp2), 0.0);
    b.add(sp, -0.4, SplineRef::Multi(sp3), 0.0);
    b.add(sp, -0.35, SplineRef::Multi(sp4), 0.0);
    b.add(sp, -0.1, SplineRef::Multi(sp5), 0.0);
    b.add(sp, 0.2, SplineRef::Multi(sp6), 0.0);
    if bl {
        b.add(sp, 0.4, SplineRef::Multi(sp7), 0.0);
        b.add(sp, 0.45, SplineRef::Multi(sp8), 0.0);
        b.add(sp, 0.55, SplineRef::Multi(sp8), 0.0);
        b.add(sp, 0.58, SplineRef::Multi(sp7), 0.0);
    }
    b.add(sp, 0.7, SplineRef::Multi(sp9), 0.0);
    sp
}

impl SplineStack {
    /// Build the overworld offset spline.
    #[must_use]
    pub fn overworld() -> Self {
        let mut b = Builder {
            nodes: Vec::with_capacity(SPLINE_CAP),
            fixed: Vec::with_capacity(FIX_CAP),
        };

        let sp1 = create_land_spline(&mut b, -0.15, 0.00, 0.0, 0.1, 0.00, -0.03, false);
        let sp2 = create_land_spline(&mut b, -0.10, 0.03, 0.1, 0.1, 0.01, -0.03, false);
        let sp3 = create_land_spline(&mut b, -0.10, 0.03, 0.1, 0.7, 0.01, -0.03, true);
        let sp4 = create_land_spline(&mut b, -0.05, 0.03, 0.1, 1.0, 0.01, 0.01, true);

        let sp = b.spline(SplineAxis::Continentalness);
        let v0 = b.fix(0.044);
        let v1 = b.fix(-0.2222);
        let v2 = b.fix(-0.2222);
        let v3 = b.fix(-0.12);
        let v4 = b.fix(-0.12);
        b.add(sp, -1.10, v0, 0.0);
        b.add(sp, -1.02, v1, 0.0);
        b.add(sp, -0.51, v2, 0.0);
        b.add(sp, -0.44, v3, 0.0);
        b.add(sp, -0.18, v4, 0.0);
        b.add(sp, -0.16, SplineRef::Multi(sp1), 0.0);
        b.add(sp, -0.15, SplineRef::Multi(sp1), 0.0);
        b.add(sp, -0.10, SplineRef::Multi(sp2), 0.0);
        b.add(sp, 0.25, SplineRef::Multi(sp3), 0.0);
        b.add(sp, 1.00, SplineRef::Multi(sp4), 0.0);

        Self {
            nodes: b.nodes,
            fixed: b.fixed,
            root: SplineRef::Multi(sp),
        }
    }

    /// Evaluate at `(continentalness, erosion, ridges, weirdness)`.
    #[must_use]
    pub fn evaluate(&self, vals: [f32; 4]) -> f32 {
        self.eval_ref(self.root, vals)
    }

    fn eval_ref(&self, r: SplineRef, vals: [f32; 4]) -> f32 {
        match r {
            SplineRef::Fix(i) => self.fixed[i],
            SplineRef::Multi(i) => self.eval_node(&self.nodes[i], vals),
        }
    }

    fn eval_node(&self, node: &SplineNode, vals: [f32; 4]) -> f32 {
        let f = vals[node.axis.index()];
        let len = node.len;

        // first breakpoint at or beyond the input
        let mut i = 0;
        while i < len && node.loc[i] < f {
            i += 1;
        }
        if i == 0 || i == len {
            let at = if i == 0 { 0 } else { len - 1 };
            let v = self.eval_ref(node.val[at], vals);
            return v + node.der[at] * (f - node.loc[at]);
        }

        // hermite blend between the two neighboring children
        let sp1 = node.val[i - 1];
        let sp2 = node.val[i];
        let g = node.loc[i - 1];
        let h = node.loc[i];
        let k = (f - g) / (h - g);
        let l = node.der[i - 1];
        let m = node.der[i];
        let n = self.eval_ref(sp1, vals);
        let o = self.eval_ref(sp2, vals);
        let p = l * (h - g) - (o - n);
        let q = -m * (h - g) + (o - n);
        let lerp_no = n + k * (o - n);
        let lerp_pq = p + k * (q - p);
        lerp_no + k * (1.0 - k) * lerp_pq
    }

    /// Number of multipoint nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_fits_the_fixed_caps() {
        let s = SplineStack::overworld();
        assert!(s.len() <= SPLINE_CAP, "{} multipoint nodes", s.len());
        assert!(s.fixed.len() <= FIX_CAP, "{} constants", s.fixed.len());
    }

    #[test]
    fn deep_ocean_offset_is_flat() {
        let s = SplineStack::overworld();
        // far offshore the offset is the constant -0.2222 shelf
        let v = s.evaluate([-0.8, 0.0, 0.0, 0.0]);
        assert!((v - (-0.2222)).abs() < 1e-5, "got {v}");
    }

    #[test]
    fn inland_offset_exceeds_coast() {
        let s = SplineStack::overworld();
        let coast = s.evaluate([-0.15, 0.0, 0.0, 0.0]);
        let far_inland = s.evaluate([0.8, -0.9, 0.5, 0.5]);
        assert!(far_inland > coast, "{far_inland} <= {coast}");
    }

    #[test]
    fn evaluation_is_continuous_across_breakpoints() {
        let s = SplineStack::overworld();
        for &c in &[-0.16f32, -0.10, 0.25] {
            let lo = s.evaluate([c - 1e-4, 0.0, 0.0, 0.0]);
            let hi = s.evaluate([c + 1e-4, 0.0, 0.0, 0.0]);
            assert!((lo - hi).abs() < 1e-2, "jump at {c}: {lo} vs {hi}");
        }
    }
}
