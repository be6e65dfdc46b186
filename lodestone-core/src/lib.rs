//! Bit-exact reproduction of Minecraft's procedural biome
//! generation across historical releases, and the seed-finding machinery
//! built on top of it.
//!
//! The [`generator::Generator`] façade dispatches per version into one of
//! three pipelines:
//!
//! - the **layered cascade** (Beta 1.8 – 1.17): a DAG of pure cell
//!   transforms rooted at a 1:4096 island layer ([`layers`]),
//! - the **climate pipeline** (1.18+): multi-octave double-Perlin climate
//!   fields, a spline-derived depth, and a nearest-leaf decision tree
//!   ([`climate`]),
//! - the **Beta climate** (≤ Beta 1.7): 2D simplex-octave temperature and
//!   rainfall with an optional sea-level ocean classifier ([`beta`]).
//!
//! The Nether and the End have their own small pipelines ([`nether`],
//! [`end`]). The seed finders ([`finders`]) exploit the algebra of the
//! structure-region PRNG to enumerate candidate seeds and validate the
//! survivors through the biome pipelines.

pub mod beta;
pub mod climate;
pub mod end;
mod error;
pub mod finders;
pub mod generator;
pub mod layers;
pub mod nether;
mod range;

pub use error::GenError;
pub use generator::{Dimension, Generator, GeneratorFlags};
pub use range::{BiomeCache, Range};
