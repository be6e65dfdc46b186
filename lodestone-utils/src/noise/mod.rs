//! Gradient-noise stack matching Minecraft:
//!
//! - [`Perlin`] — improved Perlin noise with the exact permutation
//!   initialization, plus the 2D simplex sampler and the Beta terrain column
//!   sampler over the same table.
//! - [`Octave`] — amplitude/lacunarity stacks with legacy, Beta, and modern
//!   seeding schemes.
//! - [`DoublePerlin`] — paired stacks used by the 1.18+ climate fields.

mod double_perlin;
mod octave;
mod perlin;

pub use double_perlin::DoublePerlin;
pub use octave::{MD5_OCTAVE_N, Octave};
pub use perlin::{Perlin, indexed_lerp};
