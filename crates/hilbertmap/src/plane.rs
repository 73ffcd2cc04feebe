//! The 2D curve that linearises block coordinates.

use crate::{
    SpaceCurve,
    axes::AxisOrder,
    curves::hilbert::Hilbert,
    error::{Error, Result},
    point::Point,
};

/// A 2D Hilbert curve over a `2^order × 2^order` grid.
#[derive(Debug, Clone)]
pub struct Curve2D {
    /// Underlying curve.
    curve: Hilbert,
    /// Binding of grid axes to curve axes.
    axes: AxisOrder<2>,
}

impl Curve2D {
    /// Build a curve of `order` with the given axis binding.
    pub fn new(order: u32, axes: AxisOrder<2>) -> Result<Self> {
        Ok(Self {
            curve: Hilbert::from_order(2, order)?,
            axes,
        })
    }

    /// Cells per axis.
    pub fn side(&self) -> u32 {
        self.curve.side()
    }

    /// Number of distances (`4^order`).
    pub fn length(&self) -> u32 {
        self.curve.length()
    }

    /// Axis binding.
    pub fn axes(&self) -> AxisOrder<2> {
        self.axes
    }

    /// Distance of grid cell `(x, y)` along the curve.
    ///
    /// Coordinates outside `[0, side)` are rejected with
    /// [`Error::OutOfBounds`].
    pub fn distance(&self, x: u32, y: u32) -> Result<u32> {
        let side = self.side();
        if x >= side || y >= side {
            return Err(Error::OutOfBounds {
                point: vec![x, y],
                side,
            });
        }
        Ok(self.curve.index(&Point::from(self.axes.gather([x, y]))))
    }

    /// Grid cell at distance `d`; the inverse of [`distance`](Self::distance).
    pub fn point(&self, d: u32) -> Result<[u32; 2]> {
        let length = self.length();
        if d >= length {
            return Err(Error::DistanceOutOfRange {
                distance: u64::from(d),
                length,
            });
        }
        let p = self.curve.point(d);
        Ok(self.axes.scatter([p[0], p[1]]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_distance_zero() -> Result<()> {
        for order in 0..5 {
            for axes in ["xy", "yx"] {
                let c = Curve2D::new(order, axes.parse()?)?;
                assert_eq!(c.distance(0, 0)?, 0);
            }
        }
        Ok(())
    }

    #[test]
    fn out_of_bounds() -> Result<()> {
        let c = Curve2D::new(3, AxisOrder::identity())?;
        assert!(matches!(c.distance(8, 0), Err(Error::OutOfBounds { side: 8, .. })));
        assert!(c.distance(0, 8).is_err());
        assert!(matches!(c.point(64), Err(Error::DistanceOutOfRange { .. })));
        Ok(())
    }

    #[test]
    fn swapped_axes_transpose() -> Result<()> {
        let xy = Curve2D::new(3, "xy".parse()?)?;
        let yx = Curve2D::new(3, "yx".parse()?)?;
        for x in 0..8 {
            for y in 0..8 {
                assert_eq!(xy.distance(x, y)?, yx.distance(y, x)?);
            }
        }
        Ok(())
    }
}
