//! Fixed-point climate types for the 1.18+ biome lookup.
//!
//! Climate values are `f32`-truncated and scaled by 10000 into `i64`, in the
//! axis order temperature, humidity, continentalness, erosion, depth,
//! weirdness. The shift field shares the depth slot during sampling.

use serde::{Deserialize, Serialize};

/// Temperature axis index.
pub const NP_TEMPERATURE: usize = 0;
/// Humidity (vegetation) axis index.
pub const NP_HUMIDITY: usize = 1;
/// Continentalness axis index.
pub const NP_CONTINENTALNESS: usize = 2;
/// Erosion axis index.
pub const NP_EROSION: usize = 3;
/// Shift pseudo-climate; shares the depth slot.
pub const NP_SHIFT: usize = 4;
/// Depth axis index.
pub const NP_DEPTH: usize = 4;
/// Weirdness (ridges) axis index.
pub const NP_WEIRDNESS: usize = 5;
/// Number of climate axes.
pub const NP_MAX: usize = 6;

/// Quantize a climate value: truncate to `f32`, scale by 10000, truncate to
/// integer. The `f64 -> f32` round-trip is part of the contract.
#[inline]
#[must_use]
pub fn quantize_coord(v: f64) -> i64 {
    (v as f32 * 10000.0f32) as i64
}

/// A sampled climate point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TargetPoint {
    /// Fixed-point readings in axis order.
    pub np: [i64; NP_MAX],
}

impl TargetPoint {
    /// Build from already-quantized readings.
    #[inline]
    #[must_use]
    pub const fn new(np: [i64; NP_MAX]) -> Self {
        Self { np }
    }
}

/// A closed interval on one climate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Lower bound, inclusive.
    pub min: i64,
    /// Upper bound, inclusive.
    pub max: i64,
}

impl Parameter {
    /// Interval from quantized bounds.
    #[inline]
    #[must_use]
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Point interval at a quantized value.
    #[inline]
    #[must_use]
    pub fn point(v: f32) -> Self {
        let q = quantize_coord(f64::from(v));
        Self::new(q, q)
    }

    /// Interval spanning `[min, max]` given as floats.
    #[inline]
    #[must_use]
    pub fn span(min: f32, max: f32) -> Self {
        debug_assert!(min <= max);
        Self::new(quantize_coord(f64::from(min)), quantize_coord(f64::from(max)))
    }

    /// Smallest interval containing both inputs.
    #[inline]
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self::new(self.min.min(other.min), self.max.max(other.max))
    }

    /// Distance from a reading to this interval (0 inside).
    #[inline]
    #[must_use]
    pub const fn distance(self, v: i64) -> i64 {
        if v > self.max {
            v - self.max
        } else if v < self.min {
            self.min - v
        } else {
            0
        }
    }
}

/// A biome's climate volume: one interval per axis plus a constant offset
/// that acts as a seventh squared-distance term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterPoint {
    /// Intervals in axis order.
    pub par: [Parameter; NP_MAX],
    /// Rarity offset, added to the squared distance.
    pub offset: i64,
}

impl ParameterPoint {
    /// Build from per-axis intervals and an offset given in climate units.
    #[must_use]
    pub fn new(
        temperature: Parameter,
        humidity: Parameter,
        continentalness: Parameter,
        erosion: Parameter,
        depth: Parameter,
        weirdness: Parameter,
        offset: f32,
    ) -> Self {
        Self {
            par: [
                temperature,
                humidity,
                continentalness,
                erosion,
                depth,
                weirdness,
            ],
            offset: quantize_coord(f64::from(offset)),
        }
    }

    /// Squared distance from a target to this volume, including the offset
    /// term.
    #[inline]
    #[must_use]
    pub fn distance_sq(&self, target: &TargetPoint) -> i64 {
        let mut ds = self.offset * self.offset;
        for (par, &v) in self.par.iter().zip(target.np.iter()) {
            let d = par.distance(v);
            ds += d * d;
        }
        ds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_truncates_through_f32() {
        assert_eq!(quantize_coord(1.0), 10000);
        assert_eq!(quantize_coord(-0.2225), -2225);
        assert_eq!(quantize_coord(0.26666668), 2666);
        assert_eq!(quantize_coord(-0.9333334), -9333);
    }

    #[test]
    fn parameter_distance() {
        let p = Parameter::span(-0.2, 0.3);
        assert_eq!(p.distance(0), 0);
        assert_eq!(p.distance(3000), 0);
        assert_eq!(p.distance(4000), 1000);
        assert_eq!(p.distance(-2500), 500);
    }

    #[test]
    fn distance_sq_sums_axes_and_offset() {
        let pp = ParameterPoint::new(
            Parameter::point(0.0),
            Parameter::point(0.0),
            Parameter::point(0.0),
            Parameter::point(0.0),
            Parameter::point(0.0),
            Parameter::point(0.0),
            0.1,
        );
        let t = TargetPoint::new([1000, 0, 0, 0, 0, 0]);
        assert_eq!(pp.distance_sq(&t), 1000 * 1000 + 1000 * 1000);
    }
}
