//! Error kinds surfaced at the public API boundary.

use thiserror::Error;

/// Failures of the generation and finder entry points.
///
/// Internal preconditions that the public API has already validated are
/// `debug_assert!`s, not error values; the core never aborts the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenError {
    /// The requested scale is not served by the generator's version, or
    /// scale 0 was requested without a manually installed entry layer.
    #[error("scale 1:{0} is not available for this generator")]
    UnsupportedScale(i32),

    /// The generator cannot serve this version/dimension pair.
    #[error("generation is not implemented for this version and dimension")]
    UnsupportedVersion,

    /// Cache allocation failed or the cache is too small for the range.
    #[error("cache allocation failed")]
    AllocationFailed,

    /// Non-positive extents or extents exceeding the supplied buffer.
    #[error("invalid range: {0}")]
    InvalidRange(&'static str),

    /// A caller-supplied argument is out of domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
