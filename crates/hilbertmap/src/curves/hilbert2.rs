//! Specialised 2D Hilbert mapping.
//!
//! Walks the index two bits at a time through a four-state machine tracking
//! the entry corner and the traversal direction of the current quadrant.

use crate::ops;

/// Rotate the 2‑bit quadrant label.
#[inline]
fn rot2(label: u32) -> u32 {
    match label & 3 {
        1 => 2,
        2 => 1,
        other => other,
    }
}

/// Gray code limited to the low two bits.
#[inline]
fn gray2(word: u32) -> u32 {
    ops::graycode(word) & 3
}

/// Advance the entry/direction state after emitting quadrant `word`.
#[inline]
fn advance(word: u32, entry: &mut u32, direction: &mut u32) {
    if word == 3 {
        *entry = 3 - *entry;
    }
    if word == 0 || word == 3 {
        *direction ^= 1;
    }
}

/// Distance of `[x, y]` along a 2D Hilbert curve of `order`.
pub fn index(order: u32, [x, y]: [u32; 2]) -> u32 {
    let mut acc = 0;
    let mut entry = 0;
    let mut direction = 0;
    for bit in (0..order).rev() {
        let label = (((x >> bit) & 1) << 1 | ((y >> bit) & 1)) ^ entry;
        let word = match direction {
            0 => gray2(rot2(label)),
            _ => gray2(label),
        };
        advance(word, &mut entry, &mut direction);
        acc = (acc << 2) | word;
    }
    acc
}

/// Cell at `distance` along a 2D Hilbert curve of `order`.
pub fn point(order: u32, distance: u32) -> [u32; 2] {
    let mut entry = 0;
    let mut direction = 0;
    let mut x = 0;
    let mut y = 0;
    for bit in (0..order).rev() {
        let word = (distance >> (bit * 2)) & 3;
        let oriented = match direction {
            0 => rot2(gray2(word)),
            _ => gray2(word),
        };
        let label = oriented ^ entry;
        x |= ((label >> 1) & 1) << bit;
        y |= (label & 1) << bit;
        advance(word, &mut entry, &mut direction);
    }
    [x, y]
}
