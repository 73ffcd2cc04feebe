//! Grid descriptions shared by curve constructors.

use crate::error::{Error, Result};

/// A hypercube grid with a power-of-two side length.
///
/// Every curve in this crate is built from a `GridSpec`, so the shape checks
/// live here rather than in each constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    /// Number of axes.
    dimension: u32,
    /// Cells per axis (`2^order`).
    side: u32,
    /// Bits per axis.
    order: u32,
}

impl GridSpec {
    /// Describe a grid with `dimension` axes of `side` cells each.
    ///
    /// `side` must be a power of two. A side of `1` is a valid order-0 grid
    /// containing a single cell.
    pub fn power_of_two(dimension: u32, side: u32) -> Result<Self> {
        if dimension == 0 {
            return Err(Error::InvalidGrid("dimension must be >= 1".into()));
        }
        if !side.is_power_of_two() {
            return Err(Error::InvalidGrid(format!(
                "side {side} is not a power of two"
            )));
        }
        Ok(Self {
            dimension,
            side,
            order: side.trailing_zeros(),
        })
    }

    /// Describe a grid from its order rather than its side length.
    pub fn from_order(dimension: u32, order: u32) -> Result<Self> {
        let side = 1u32
            .checked_shl(order)
            .ok_or_else(|| Error::InvalidGrid(format!("order {order} too large")))?;
        Self::power_of_two(dimension, side)
    }

    /// Fail unless a linear index over this grid fits in fewer than `bits` bits.
    pub fn require_index_bits_lt(&self, bits: u32) -> Result<()> {
        let needed = self.index_bits();
        if needed >= bits {
            return Err(Error::InvalidGrid(format!(
                "{}D grid of order {} needs {needed} index bits, limit is {}",
                self.dimension,
                self.order,
                bits - 1
            )));
        }
        Ok(())
    }

    /// Bits needed to address every cell.
    pub fn index_bits(&self) -> u32 {
        self.dimension * self.order
    }

    /// Number of axes.
    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    /// Cells per axis.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Bits per axis.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Total number of cells. Only meaningful once
    /// [`require_index_bits_lt(32)`](Self::require_index_bits_lt) has passed.
    pub fn length(&self) -> u32 {
        1u32 << self.index_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_of_two_sides() {
        let g = GridSpec::power_of_two(2, 8).unwrap();
        assert_eq!(g.order(), 3);
        assert_eq!(g.length(), 64);

        let g = GridSpec::power_of_two(3, 1).unwrap();
        assert_eq!(g.order(), 0);
        assert_eq!(g.length(), 1);

        assert!(GridSpec::power_of_two(2, 3).is_err());
        assert!(GridSpec::power_of_two(2, 0).is_err());
        assert!(GridSpec::power_of_two(0, 4).is_err());
    }

    #[test]
    fn index_bit_limit() {
        assert!(GridSpec::from_order(3, 8).unwrap().require_index_bits_lt(32).is_ok());
        assert!(GridSpec::from_order(2, 16).unwrap().require_index_bits_lt(32).is_err());
        assert!(GridSpec::from_order(2, 40).is_err());
    }
}
