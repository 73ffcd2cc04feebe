//! Generic N-dimensional Hilbert mapping.
//!
//! Follows the entry/direction formulation in Hamilton, "Compact Hilbert
//! Indices" (2006). Coordinates are consumed one bit level at a time, most
//! significant level first. Roughly an order of magnitude slower than the
//! specialised 2D mapping.

use smallvec::{SmallVec, smallvec};

use crate::ops;

/// Bitmask with the `width` least‑significant bits set.
#[inline]
fn mask(width: u32) -> u32 {
    1u32.checked_shl(width).map_or(u32::MAX, |v| v - 1)
}

/// Left rotation of the low `width` bits of `word`.
#[inline]
fn lrot(word: u32, shift: u32, width: u32) -> u32 {
    let shift = shift % width;
    let w = word & mask(width);
    if shift == 0 {
        return w;
    }
    ((w << shift) | (w >> (width - shift))) & mask(width)
}

/// Right rotation of the low `width` bits of `word`.
#[inline]
fn rrot(word: u32, shift: u32, width: u32) -> u32 {
    lrot(word, width - shift % width, width)
}

/// Count of trailing set bits within `width` bits.
#[inline]
fn tsb(word: u32, width: u32) -> u32 {
    (word & mask(width)).trailing_ones()
}

/// Map a label into the frame of the current sub-cube.
fn transform(entry: u32, direction: u32, width: u32, label: u32) -> u32 {
    rrot(label ^ entry, direction + 1, width)
}

/// Inverse of [`transform`].
fn itransform(entry: u32, direction: u32, width: u32, label: u32) -> u32 {
    lrot(label, direction + 1, width) ^ entry
}

/// Intra-cube direction for sub-cube `word`.
fn direction(word: u32, width: u32) -> u32 {
    match word & mask(width) {
        0 => 0,
        w if w.is_multiple_of(2) => tsb(w - 1, width) % width,
        w => tsb(w, width) % width,
    }
}

/// Entry corner of sub-cube `word`.
fn entry(word: u32) -> u32 {
    match word {
        0 => 0,
        w => ops::graycode(2 * ((w - 1) / 2)),
    }
}

/// Cell at `distance` along an N-D Hilbert curve.
pub fn point(dimension: u32, order: u32, distance: u32) -> SmallVec<[u32; 4]> {
    let mut entry_state = 0;
    let mut direction_state = 0;
    let mut coords: SmallVec<[u32; 4]> = smallvec![0; dimension as usize];
    for level in (0..order).rev() {
        let word = (distance >> (level * dimension)) & mask(dimension);
        let label = itransform(
            entry_state,
            direction_state,
            dimension,
            ops::graycode(word),
        );
        for (axis, coord) in coords.iter_mut().enumerate() {
            *coord |= ((label >> (dimension - axis as u32 - 1)) & 1) << level;
        }
        entry_state ^= lrot(entry(word), direction_state + 1, dimension);
        direction_state = (direction_state + direction(word, dimension) + 1) % dimension;
    }
    coords
}

/// Distance of `coords` along an N-D Hilbert curve.
pub fn index(dimension: u32, order: u32, coords: &[u32]) -> u32 {
    let mut acc = 0;
    let mut entry_state = 0;
    let mut direction_state = 0;
    for level in (0..order).rev() {
        let label = coords
            .iter()
            .enumerate()
            .fold(0, |label, (axis, &c)| {
                label | ((c >> level) & 1) << (dimension - axis as u32 - 1)
            });
        let word = ops::igraycode(transform(
            entry_state,
            direction_state,
            dimension,
            label,
        ));
        entry_state ^= lrot(entry(word), direction_state + 1, dimension);
        direction_state = (direction_state + direction(word, dimension) + 1) % dimension;
        acc = (acc << dimension) | word;
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse() {
        let order = 3;
        for dimension in 2..5 {
            for d in 0..1u32 << (dimension * order) {
                let p = point(dimension, order, d);
                assert_eq!(d, index(dimension, order, &p));
            }
        }
    }

    #[test]
    fn transform_examples() {
        // Worked example on p. 18 of Hamilton.
        assert_eq!(transform(0, 1, 2, 3), 3);
        assert_eq!(transform(3, 0, 2, 2), 2);
        assert_eq!(transform(3, 0, 2, 1), 1);
    }

    #[test]
    fn rotations() {
        fn rotpair(left: u32, right: u32, i: u32, width: u32) {
            assert_eq!(rrot(left, i, width), right);
            assert_eq!(lrot(right, i, width), left);
            assert_eq!(lrot(left, i, width), rrot(left, width - i, width));
        }
        rotpair(2, 1, 1, 2);
        rotpair(1, 2, 1, 2);
        rotpair(0, 0, 1, 2);
        rotpair(3, 3, 1, 2);
        rotpair(4, 2, 1, 3);
        rotpair(4, 1, 2, 3);
        rotpair(1, 2, 2, 3);
        rotpair(1, 1, 3, 3);
    }

    #[test]
    fn trailing_set_bits() {
        assert_eq!(tsb(1, 5), 1);
        assert_eq!(tsb(2, 5), 0);
        assert_eq!(tsb(3, 5), 2);
        assert_eq!(tsb(31, 5), 5);
        assert_eq!(tsb(0, 5), 0);
    }

    #[test]
    fn entry_and_direction() {
        assert_eq!(entry(0), 0);
        assert_eq!(entry(1), 0);
        assert_eq!(entry(3), 3);
        assert_eq!(direction(0, 3), 0);
        assert_eq!(direction(1, 3), 1);
        assert_eq!(direction(2, 3), 1);
        assert_eq!(direction(7, 3), 0);
    }
}
