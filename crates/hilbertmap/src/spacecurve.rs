//! The [`SpaceCurve`] trait implemented by every curve in the crate.

use std::fmt::Debug;

use crate::point::Point;

/// A bijection between the cells of a hypercube grid and `[0, length)`.
///
/// Implementations assume their inputs lie inside the grid they were built
/// for; range checks belong to the typed wrappers
/// ([`Curve2D`](crate::Curve2D), [`Curve3D`](crate::Curve3D)) that callers use.
pub trait SpaceCurve: Debug {
    /// Human-readable curve name.
    fn name(&self) -> &'static str;
    /// Short description of the curve.
    fn info(&self) -> &'static str;
    /// Number of cells on the curve.
    fn length(&self) -> u32;
    /// Number of axes.
    fn dimensions(&self) -> u32;
    /// Distance along the curve of the cell at `p`.
    fn index(&self, p: &Point) -> u32;
    /// Cell at distance `index`.
    fn point(&self, index: u32) -> Point;
}
