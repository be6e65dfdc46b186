//! Query ranges and the caller-owned output cache.

use serde::{Deserialize, Serialize};

use crate::GenError;

/// A rectangular (or cuboid) biome query.
///
/// `scale` is the horizontal blocks-per-cell factor and should be one of 1,
/// 4, 16, 64 or 256; a value of 0 bypasses scaling and requires a manually
/// installed entry layer. `(x, z)` is the north-west corner in scaled
/// coordinates and `(sx, sz)` the horizontal extent. The vertical scale is
/// 1:1 iff `scale == 1` and 1:4 otherwise; `sy <= 0` is treated as 1.
///
/// Output volumes are indexed as `out[i_y*sx*sz + i_z*sx + i_x]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Range {
    /// Horizontal scale factor.
    pub scale: i32,
    /// North-west corner x.
    pub x: i32,
    /// North-west corner z.
    pub z: i32,
    /// Horizontal x extent; must be positive.
    pub sx: i32,
    /// Horizontal z extent; must be positive.
    pub sz: i32,
    /// Vertical position.
    pub y: i32,
    /// Vertical extent; values `<= 0` mean 1.
    pub sy: i32,
}

impl Range {
    /// A 2D area at the given scale.
    #[must_use]
    pub const fn area(scale: i32, x: i32, z: i32, sx: i32, sz: i32) -> Self {
        Self {
            scale,
            x,
            z,
            sx,
            sz,
            y: 0,
            sy: 0,
        }
    }

    /// Effective vertical extent.
    #[inline]
    #[must_use]
    pub const fn sy_eff(&self) -> i32 {
        if self.sy <= 0 { 1 } else { self.sy }
    }

    /// Number of output cells.
    #[inline]
    #[must_use]
    pub const fn volume(&self) -> usize {
        self.sx as usize * self.sz as usize * self.sy_eff() as usize
    }

    /// Validate the extents.
    pub(crate) fn validate(&self) -> Result<(), GenError> {
        if self.sx <= 0 || self.sz <= 0 {
            return Err(GenError::InvalidRange("extents must be positive"));
        }
        Ok(())
    }
}

/// A caller-owned biome id buffer.
///
/// Sized by the generator's `min_cache_size` and reused across adjacent
/// queries; the buffer is released when the cache is dropped, on every exit
/// path. Only the first [`Range::volume`] entries of a query are output
/// cells; the tail is scratch the generator uses internally.
#[derive(Debug, Clone, Default)]
pub struct BiomeCache {
    buf: Vec<i32>,
}

impl BiomeCache {
    /// Allocate a zeroed cache of `len` entries.
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        Self { buf: vec![0; len] }
    }

    /// Total capacity in entries, including internal scratch.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the cache holds no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The output cells of the last query over `r`.
    #[inline]
    #[must_use]
    pub fn ids(&self, r: &Range) -> &[i32] {
        &self.buf[..r.volume()]
    }

    /// Raw access for the generator.
    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.buf
    }

    /// Grow to at least `len` entries, keeping the allocation otherwise.
    pub fn ensure_len(&mut self, len: usize) {
        if self.buf.len() < len {
            self.buf.resize(len, 0);
        }
    }
}
