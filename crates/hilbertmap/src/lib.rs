//! Colour maps built by composing two Hilbert curves.
//!
//! A square canvas is split into `blocks × blocks` blocks. Each block's
//! coordinates are linearised by a 2D Hilbert curve ([`Curve2D`]), and the
//! resulting distance is mapped back into the RGB cube by a 3D Hilbert curve
//! ([`Curve3D`]). Spatially close blocks therefore get colours that are close
//! along the 3D curve.
//!
//! ```
//! use hilbertmap::{MapOptions, NoProgress};
//!
//! let config = MapOptions {
//!     canvas_size: 64,
//!     ..MapOptions::default()
//! }
//! .validate()?;
//! let image = config.render(&mut NoProgress)?;
//! assert_eq!(image.as_bytes().len(), 64 * 64 * 3);
//! # Ok::<(), hilbertmap::error::Error>(())
//! ```

/// Axis-order selectors.
pub mod axes;
/// Per-run block colour memoisation.
pub mod cache;
/// Canvas and block geometry.
pub mod canvas;
/// Colour vectors.
pub mod color;
/// Validated run configuration.
pub mod config;
/// The 3D curve mapping distances to colours.
pub mod cube;
/// Space-filling curve implementations.
pub mod curves;
/// Error types used across the crate.
pub mod error;
/// Gray code helpers.
#[doc(hidden)]
pub mod ops;
/// The 2D curve linearising block coordinates.
pub mod plane;
/// N‑dimensional grid points.
pub mod point;
/// Progress observation.
pub mod progress;
/// Block colour projection.
pub mod projector;
/// Pixel buffer construction.
pub mod raster;
/// The `SpaceCurve` trait.
mod spacecurve;
/// Grid specification helpers.
pub mod spec;

pub use crate::{
    axes::AxisOrder,
    cache::{BlockColorCache, Memoize},
    canvas::{ACCEPTED_BLOCKS, BlockCount, Canvas},
    color::Color,
    config::{MapConfig, MapOptions},
    cube::Curve3D,
    plane::Curve2D,
    progress::{NoProgress, Progress},
    projector::{ColorProjector, Projection},
    raster::{ChannelLayout, Method, PixelBuffer, Rasterizer},
    spacecurve::SpaceCurve,
};
