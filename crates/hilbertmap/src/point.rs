//! Lightweight N‑dimensional grid point used by curve implementations.

use std::ops::Deref;

use smallvec::SmallVec;

/// Grid cell coordinates, one entry per axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point(pub SmallVec<[u32; 4]>);

impl Point {
    /// Create a new `Point` from its coordinates.
    pub fn new(coords: impl Into<SmallVec<[u32; 4]>>) -> Self {
        Self(coords.into())
    }

    /// Copy the coordinates into a fixed-size array.
    ///
    /// Returns `None` when the point does not have exactly `N` axes.
    pub fn to_array<const N: usize>(&self) -> Option<[u32; N]> {
        self.0.as_slice().try_into().ok()
    }

    /// Euclidean distance between two points of the same dimensionality.
    pub fn distance(&self, other: &Self) -> f64 {
        debug_assert_eq!(
            self.len(),
            other.len(),
            "Point::distance called with differing dimensions"
        );
        let total: u64 = self
            .iter()
            .zip(other.iter())
            .map(|(&a, &b)| u64::from(a.abs_diff(b)).pow(2))
            .sum();
        (total as f64).sqrt()
    }

    /// Number of axes.
    pub fn dimension(&self) -> u32 {
        self.0.len() as u32
    }
}

impl<const N: usize> From<[u32; N]> for Point {
    fn from(coords: [u32; N]) -> Self {
        Self(SmallVec::from_slice(&coords))
    }
}

impl Deref for Point {
    type Target = [u32];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_conversion() {
        let p = Point::from([1, 2, 3]);
        assert_eq!(p.dimension(), 3);
        assert_eq!(p.to_array::<3>(), Some([1, 2, 3]));
        assert_eq!(p.to_array::<2>(), None);
    }

    #[test]
    fn distance() {
        let a = Point::from([2, 2]);
        assert_eq!(a.distance(&Point::from([2, 1])), 1.0);
        assert_eq!(a.distance(&Point::from([0, 2])), 2.0);
        assert_eq!(a.distance(&a), 0.0);
        assert_eq!(Point::from([0, 0, 0]).distance(&Point::from([1, 2, 2])), 3.0);
    }
}
