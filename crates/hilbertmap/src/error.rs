//! Error type shared by every module of the crate.

use std::result;

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = result::Result<T, Error>;

/// Failures raised while validating a configuration or mapping a curve.
///
/// Configuration variants are produced before any curve computation starts.
/// Precondition variants indicate a coordinate or distance outside the domain a
/// curve was built for; they are never silently wrapped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Block count outside the accepted set.
    #[error("invalid block count {0}: must be one of {{1, 8, 64, 512, 4096}}")]
    InvalidBlocks(u32),
    /// Unknown canvas construction method.
    #[error("invalid construction method '{0}': must be one of {{blocks, pixels}}")]
    InvalidMethod(String),
    /// Unknown projection policy.
    #[error("invalid projection '{0}': must be one of {{scaleD, scaleXYZ, d, xyz}}")]
    InvalidProjection(String),
    /// Axis selector that is not a permutation of the expected axes.
    #[error("invalid axis order '{selector}': expected a permutation of '{expected}'")]
    InvalidAxisOrder {
        /// Selector as supplied.
        selector: String,
        /// Axis letters the selector must permute.
        expected: &'static str,
    },
    /// Unknown pixel channel layout.
    #[error("invalid channel layout '{0}': must be one of {{rgb, rgba}}")]
    InvalidLayout(String),
    /// Canvas size that cannot hold any pixels.
    #[error("invalid canvas size {0}: must be positive")]
    InvalidCanvas(u32),
    /// Canvas whose pixel buffer cannot be addressed in memory.
    #[error("canvas size {0} is too large for a pixel buffer")]
    CanvasTooLarge(u32),
    /// Canvas size not evenly divisible by the block count.
    #[error("canvas size {size} is not divisible by block count {blocks}")]
    Indivisible {
        /// Canvas side in pixels.
        size: u32,
        /// Blocks per canvas side.
        blocks: u32,
    },
    /// Progress interval of zero.
    #[error("progress interval must be positive")]
    InvalidInterval,
    /// Grid coordinate outside a curve's domain.
    #[error("point {point:?} out of bounds for grid side {side}")]
    OutOfBounds {
        /// Offending coordinates.
        point: Vec<u32>,
        /// Exclusive per-axis upper bound.
        side: u32,
    },
    /// Distance beyond the last cell of a curve.
    #[error("distance {distance} out of range for curve length {length}")]
    DistanceOutOfRange {
        /// Offending distance.
        distance: u64,
        /// Number of cells on the curve.
        length: u32,
    },
    /// Grid shape a curve cannot be built for.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),
}
