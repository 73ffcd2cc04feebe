use crate::{
    curves::{hilbert2, hilbertn},
    error, point,
    spacecurve::SpaceCurve,
    spec::GridSpec,
};

/// Internal dispatcher selecting the 2D or N-D Hilbert core.
#[derive(Debug, Clone, Copy)]
enum HilbertImpl {
    /// Optimised specialised 2D implementation.
    TwoD,
    /// Generic N-dimensional mapping.
    Nd,
}

/// An implementation of the Hilbert curve.
#[derive(Debug, Clone)]
pub struct Hilbert {
    /// Grid the curve fills.
    grid: GridSpec,
    /// Chooses between the 2D fast path and the generic N-D logic.
    mapper: HilbertImpl,
}

impl Hilbert {
    /// Construct a Hilbert curve filling a hypercube with `dimension` axes of
    /// `size` cells each. `size` must be a power of two and the curve length
    /// must fit in a `u32`.
    pub fn from_dimensions(dimension: u32, size: u32) -> error::Result<Self> {
        Self::from_grid(GridSpec::power_of_two(dimension, size)?)
    }

    /// Construct a Hilbert curve of `order` (`2^order` cells per axis).
    pub fn from_order(dimension: u32, order: u32) -> error::Result<Self> {
        Self::from_grid(GridSpec::from_order(dimension, order)?)
    }

    /// Construct a Hilbert curve over a validated grid.
    fn from_grid(grid: GridSpec) -> error::Result<Self> {
        grid.require_index_bits_lt(32)?;
        Ok(Self {
            grid,
            mapper: if grid.dimension() == 2 {
                HilbertImpl::TwoD
            } else {
                HilbertImpl::Nd
            },
        })
    }

    /// Bits per axis.
    pub fn order(&self) -> u32 {
        self.grid.order()
    }

    /// Cells per axis.
    pub fn side(&self) -> u32 {
        self.grid.side()
    }
}

impl SpaceCurve for Hilbert {
    fn name(&self) -> &'static str {
        "Hilbert"
    }

    fn info(&self) -> &'static str {
        "Continuous space-filling curve built from rotated and reflected\n\
        copies of itself; consecutive distances are always adjacent cells."
    }

    fn length(&self) -> u32 {
        self.grid.length()
    }

    fn dimensions(&self) -> u32 {
        self.grid.dimension()
    }

    fn index(&self, p: &point::Point) -> u32 {
        debug_assert_eq!(p.dimension(), self.dimensions(), "point dimension mismatch");
        debug_assert!(
            p.iter().all(|&c| c < self.side()),
            "point coordinate out of bounds"
        );
        match self.mapper {
            HilbertImpl::TwoD => hilbert2::index(self.order(), [p[0], p[1]]),
            HilbertImpl::Nd => hilbertn::index(self.dimensions(), self.order(), p),
        }
    }

    fn point(&self, index: u32) -> point::Point {
        debug_assert!(index < self.length(), "index out of bounds");
        match self.mapper {
            HilbertImpl::TwoD => point::Point::from(hilbert2::point(self.order(), index)),
            HilbertImpl::Nd => {
                point::Point::new(hilbertn::point(self.dimensions(), self.order(), index))
            }
        }
    }
}
