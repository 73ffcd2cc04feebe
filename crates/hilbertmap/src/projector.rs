//! Composition of the 2D and 3D curves into block colours.

use std::{fmt, str::FromStr};

use log::trace;

use crate::{
    axes::AxisOrder,
    canvas::BlockCount,
    color::Color,
    cube::Curve3D,
    error::{Error, Result},
    plane::Curve2D,
};

/// Order of the 3D curve spanning the full 8-bit colour cube.
pub const COLOR_CUBE_ORDER: u32 = 8;
/// Number of cells in the 8-bit colour cube (`256³`).
pub const COLOR_CUBE_LEN: u64 = 1 << (3 * COLOR_CUBE_ORDER);
/// Largest 8-bit channel value.
const CHANNEL_MAX: f64 = 255.0;

/// How the 2D distance range is reconciled with the 3D curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Projection {
    /// Stretch the 2D distance over the whole colour cube, then map it
    /// through an order-8 3D curve.
    ScaleDistance,
    /// Map the 2D distance through a just-large-enough 3D curve, then
    /// stretch the resulting vector to the channel range.
    ScaleVector,
}

impl Projection {
    /// Canonical name, used in output file names.
    pub fn name(self) -> &'static str {
        match self {
            Self::ScaleDistance => "scaleD",
            Self::ScaleVector => "scaleXYZ",
        }
    }
}

impl FromStr for Projection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "scaleD" | "d" => Ok(Self::ScaleDistance),
            "scaleXYZ" | "xyz" => Ok(Self::ScaleVector),
            other => Err(Error::InvalidProjection(other.to_string())),
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Smallest 3D order whose `8^order` distances cover `blocks²`.
fn vector_cube_order(blocks: BlockCount) -> u32 {
    (2 * blocks.order()).div_ceil(3)
}

/// Multiplier spreading `blocks²` distances over the colour cube.
fn distance_factor(blocks: BlockCount) -> u64 {
    COLOR_CUBE_LEN / blocks.total()
}

/// Multiplier stretching 3D coordinates to `[0, 255]`. A single-cell cube
/// has no span to stretch and gets a factor of zero.
fn vector_factor(blocks: BlockCount) -> f64 {
    let span = f64::from(blocks.count()).powf(2.0 / 3.0).round() - 1.0;
    if span > 0.0 { CHANNEL_MAX / span } else { 0.0 }
}

/// Computes the colour of a block from its coordinates.
///
/// The projector is immutable once built and every colour is a pure function
/// of the block coordinates and the configuration.
#[derive(Debug, Clone)]
pub struct ColorProjector {
    /// Curve linearising block coordinates.
    plane: Curve2D,
    /// Curve mapping distances to colours.
    cube: Curve3D,
    /// Active projection policy.
    projection: Projection,
    /// Blocks per canvas side.
    blocks: BlockCount,
    /// Distance multiplier for [`Projection::ScaleDistance`].
    distance_factor: u64,
    /// Vector multiplier for [`Projection::ScaleVector`].
    vector_factor: f64,
}

impl ColorProjector {
    /// Build a projector for `blocks × blocks` blocks.
    pub fn new(
        blocks: BlockCount,
        projection: Projection,
        order2: AxisOrder<2>,
        order3: AxisOrder<3>,
    ) -> Result<Self> {
        let plane = Curve2D::new(blocks.order(), order2)?;
        let cube_order = match projection {
            Projection::ScaleDistance => COLOR_CUBE_ORDER,
            Projection::ScaleVector => vector_cube_order(blocks),
        };
        let cube = Curve3D::new(cube_order, order3)?;
        let projector = Self {
            plane,
            cube,
            projection,
            blocks,
            distance_factor: distance_factor(blocks),
            vector_factor: vector_factor(blocks),
        };
        projector.check_domains()?;
        Ok(projector)
    }

    /// Ensure the 2D curve covers every block and that every 2D distance
    /// lands inside the 3D curve.
    fn check_domains(&self) -> Result<()> {
        if self.plane.side() < self.blocks.count() {
            return Err(Error::InvalidGrid(format!(
                "2D curve side {} cannot address {} blocks",
                self.plane.side(),
                self.blocks
            )));
        }
        let last = self.cube_distance(self.plane.length() - 1);
        if last >= u64::from(self.cube.length()) {
            return Err(Error::InvalidGrid(format!(
                "3D curve of order {} cannot address distance {last}",
                self.cube.order()
            )));
        }
        Ok(())
    }

    /// 3D distance that 2D distance `d` maps to under the active policy.
    fn cube_distance(&self, d: u32) -> u64 {
        match self.projection {
            Projection::ScaleDistance => u64::from(d) * self.distance_factor,
            Projection::ScaleVector => u64::from(d),
        }
    }

    /// Active projection policy.
    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Blocks per canvas side.
    pub fn blocks(&self) -> BlockCount {
        self.blocks
    }

    /// The 2D curve.
    pub fn plane(&self) -> &Curve2D {
        &self.plane
    }

    /// The 3D curve.
    pub fn cube(&self) -> &Curve3D {
        &self.cube
    }

    /// Multiplier applied to 2D distances under [`Projection::ScaleDistance`].
    pub fn distance_factor(&self) -> u64 {
        self.distance_factor
    }

    /// Multiplier applied to 3D vectors under [`Projection::ScaleVector`].
    pub fn vector_factor(&self) -> f64 {
        self.vector_factor
    }

    /// 2D curve distance of block `(x, y)`.
    pub fn distance(&self, x: u32, y: u32) -> Result<u32> {
        self.plane.distance(x, y)
    }

    /// Colour of block `(x, y)`.
    pub fn color(&self, x: u32, y: u32) -> Result<Color> {
        let d = self.plane.distance(x, y)?;
        let scaled = self.cube_distance(d);
        let xyz = self.cube.point_from_distance(scaled)?;
        let color = match self.projection {
            Projection::ScaleDistance => Color::from(xyz),
            Projection::ScaleVector => Curve3D::scale(xyz, self.vector_factor),
        };
        trace!("block ({x},{y}): d: {d}, scaled: {scaled}, xyz: {xyz:?}, color: {color}");
        Ok(color)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::canvas::ACCEPTED_BLOCKS;

    fn projector(blocks: u32, projection: Projection) -> ColorProjector {
        ColorProjector::new(
            BlockCount::try_from(blocks).unwrap(),
            projection,
            AxisOrder::identity(),
            AxisOrder::identity(),
        )
        .unwrap()
    }

    #[test]
    fn projection_names() {
        assert_eq!("d".parse::<Projection>(), Ok(Projection::ScaleDistance));
        assert_eq!("scaleD".parse::<Projection>(), Ok(Projection::ScaleDistance));
        assert_eq!("xyz".parse::<Projection>(), Ok(Projection::ScaleVector));
        assert_eq!("scaleXYZ".parse::<Projection>(), Ok(Projection::ScaleVector));
        assert_eq!(
            "scalexyz".parse::<Projection>(),
            Err(Error::InvalidProjection("scalexyz".into()))
        );
        assert_eq!(Projection::ScaleVector.to_string(), "scaleXYZ");
    }

    #[test]
    fn factors() {
        let cases = [
            (1, 0, 1 << 24),
            (8, 2, 1 << 18),
            (64, 4, 1 << 12),
            (512, 6, 64),
            (4096, 8, 1),
        ];
        for (blocks, order, dfactor) in cases {
            let b = BlockCount::try_from(blocks).unwrap();
            assert_eq!(vector_cube_order(b), order, "blocks {blocks}");
            assert_eq!(distance_factor(b), dfactor, "blocks {blocks}");
        }
        assert_eq!(vector_factor(BlockCount::try_from(1).unwrap()), 0.0);
        assert_eq!(vector_factor(BlockCount::try_from(8).unwrap()), 85.0);
        assert_eq!(vector_factor(BlockCount::try_from(64).unwrap()), 17.0);
        assert_eq!(vector_factor(BlockCount::try_from(4096).unwrap()), 1.0);
    }

    #[test]
    fn origin_anchor() -> Result<()> {
        for blocks in [1, 8, 64] {
            let d = projector(blocks, Projection::ScaleDistance);
            let v = projector(blocks, Projection::ScaleVector);
            assert_eq!(d.distance(0, 0)?, 0);
            assert_eq!(d.color(0, 0)?, Color::from(d.cube().point_from_distance(0)?));
            assert_eq!(
                v.color(0, 0)?,
                Curve3D::scale(v.cube().point_from_distance(0)?, v.vector_factor())
            );
        }
        Ok(())
    }

    #[test]
    fn colors_stay_in_channel_range() -> Result<()> {
        for projection in [Projection::ScaleDistance, Projection::ScaleVector] {
            let p = projector(64, projection);
            for y in 0..64 {
                for x in 0..64 {
                    for c in p.color(x, y)?.channels() {
                        assert!((0.0..=255.0 + 1e-9).contains(&c), "{c}");
                    }
                }
            }
        }
        Ok(())
    }

    #[test]
    fn vector_projection_is_injective() -> Result<()> {
        let p = projector(8, Projection::ScaleVector);
        let mut seen = HashSet::new();
        for y in 0..8 {
            for x in 0..8 {
                assert!(seen.insert(p.color(x, y)?.to_rgb8()));
            }
        }
        assert_eq!(seen.len(), 64);
        Ok(())
    }

    #[test]
    fn curves_fit_the_block_grid() -> Result<()> {
        for blocks in ACCEPTED_BLOCKS {
            let count = BlockCount::try_from(blocks)?;
            let d = ColorProjector::new(
                count,
                Projection::ScaleDistance,
                "yx".parse()?,
                "zxy".parse()?,
            )?;
            assert_eq!(d.projection(), Projection::ScaleDistance);
            assert_eq!(d.plane().side(), blocks);
            assert_eq!(d.plane().axes().to_string(), "yx");
            assert_eq!(d.cube().axes().to_string(), "zxy");
            assert_eq!(d.cube().order(), COLOR_CUBE_ORDER);
            assert_eq!(d.distance_factor() * count.total(), COLOR_CUBE_LEN);

            let v = projector(blocks, Projection::ScaleVector);
            assert_eq!(v.projection(), Projection::ScaleVector);
            assert_eq!(v.cube().order(), vector_cube_order(count));
            assert!(u64::from(v.cube().length()) >= count.total());
        }
        Ok(())
    }

    #[test]
    fn rejects_blocks_outside_grid() {
        let p = projector(8, Projection::ScaleVector);
        assert!(matches!(p.color(8, 0), Err(Error::OutOfBounds { .. })));
    }
}
