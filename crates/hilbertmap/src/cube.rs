//! The 3D curve that maps distances into the colour cube.

use crate::{
    SpaceCurve,
    axes::AxisOrder,
    color::Color,
    curves::hilbert::Hilbert,
    error::{Error, Result},
    point::Point,
};

/// A 3D Hilbert curve over a `2^order` cube.
#[derive(Debug, Clone)]
pub struct Curve3D {
    /// Underlying curve.
    curve: Hilbert,
    /// Binding of curve axes to colour axes.
    axes: AxisOrder<3>,
}

impl Curve3D {
    /// Build a curve of `order` with the given axis binding.
    pub fn new(order: u32, axes: AxisOrder<3>) -> Result<Self> {
        Ok(Self {
            curve: Hilbert::from_order(3, order)?,
            axes,
        })
    }

    /// Bits per axis.
    pub fn order(&self) -> u32 {
        self.curve.order()
    }

    /// Cells per axis.
    pub fn side(&self) -> u32 {
        self.curve.side()
    }

    /// Number of distances (`8^order`).
    pub fn length(&self) -> u32 {
        self.curve.length()
    }

    /// Axis binding.
    pub fn axes(&self) -> AxisOrder<3> {
        self.axes
    }

    /// Cube cell at distance `d`, with coordinates in `[0, side)`.
    pub fn point_from_distance(&self, d: u64) -> Result<[u32; 3]> {
        let length = self.length();
        let index = u32::try_from(d)
            .ok()
            .filter(|&i| i < length)
            .ok_or(Error::DistanceOutOfRange { distance: d, length })?;
        let p = self.curve.point(index);
        Ok(self.axes.scatter([p[0], p[1], p[2]]))
    }

    /// Distance of cube cell `point`; the inverse of
    /// [`point_from_distance`](Self::point_from_distance).
    pub fn distance(&self, point: [u32; 3]) -> Result<u32> {
        let side = self.side();
        if point.iter().any(|&c| c >= side) {
            return Err(Error::OutOfBounds {
                point: point.to_vec(),
                side,
            });
        }
        Ok(self.curve.index(&Point::from(self.axes.gather(point))))
    }

    /// Multiply every coordinate of `point` by `factor`.
    pub fn scale(point: [u32; 3], factor: f64) -> Color {
        Color::from(point).scale(factor)
    }
}
