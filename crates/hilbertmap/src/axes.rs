//! Axis-order selectors binding curve axes to grid or colour axes.

use std::{array, fmt, str::FromStr};

use crate::error::{Error, Result};

/// Axis letters in canonical order.
const LETTERS: &str = "xyz";

/// A permutation of the first `N` axes, written as axis letters (`"yx"`,
/// `"zxy"`, ...).
///
/// Letter `i` names the grid or colour axis bound to the curve's axis `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisOrder<const N: usize> {
    /// `perm[i]` is the outer axis bound to curve axis `i`.
    perm: [usize; N],
}

impl<const N: usize> AxisOrder<N> {
    /// The identity ordering (`"xy"` or `"xyz"`).
    pub fn identity() -> Self {
        Self {
            perm: array::from_fn(|i| i),
        }
    }

    /// Whether this is the identity ordering.
    pub fn is_identity(&self) -> bool {
        self.perm.iter().enumerate().all(|(i, &p)| i == p)
    }

    /// Reorder outer coordinates into curve axis order.
    pub fn gather<T: Copy>(&self, outer: [T; N]) -> [T; N] {
        self.perm.map(|p| outer[p])
    }

    /// Place curve-ordered coordinates back onto their outer axes.
    pub fn scatter<T: Copy>(&self, curve: [T; N]) -> [T; N] {
        let mut outer = curve;
        for (i, &p) in self.perm.iter().enumerate() {
            outer[p] = curve[i];
        }
        outer
    }

    /// Axis letters this selector must permute.
    fn expected() -> &'static str {
        &LETTERS[..N]
    }
}

impl<const N: usize> Default for AxisOrder<N> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<const N: usize> FromStr for AxisOrder<N> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidAxisOrder {
            selector: s.to_string(),
            expected: Self::expected(),
        };
        let letters = s.as_bytes();
        if letters.len() != N {
            return Err(invalid());
        }
        let mut perm = [0; N];
        let mut seen = [false; N];
        for (slot, letter) in perm.iter_mut().zip(letters) {
            let axis = Self::expected()
                .bytes()
                .position(|c| c == letter.to_ascii_lowercase())
                .ok_or_else(invalid)?;
            if seen[axis] {
                return Err(invalid());
            }
            seen[axis] = true;
            *slot = axis;
        }
        Ok(Self { perm })
    }
}

impl<const N: usize> fmt::Display for AxisOrder<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &p in &self.perm {
            write!(f, "{}", &LETTERS[p..=p])?;
        }
        Ok(())
    }
}
