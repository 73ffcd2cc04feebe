//! Colour vectors produced by the projector.

use std::fmt;

/// Red, green and blue components.
///
/// Components are kept as `f64` because vector scaling can produce
/// fractional values. Nothing here clamps; [`to_rgb8`](Self::to_rgb8) is the
/// only conversion to channel bytes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color(pub [f64; 3]);

impl Color {
    /// Colour from explicit components.
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self([red, green, blue])
    }

    /// Multiply every component by `factor`.
    pub fn scale(self, factor: f64) -> Self {
        Self(self.0.map(|c| c * factor))
    }

    /// Components as an array.
    pub fn channels(&self) -> [f64; 3] {
        self.0
    }

    /// Convert to 8-bit channels, truncating toward zero and saturating at
    /// `0` and `255`. NaN maps to `0`.
    pub fn to_rgb8(self) -> [u8; 3] {
        self.0.map(|c| c as u8)
    }
}

impl From<[u32; 3]> for Color {
    fn from(coords: [u32; 3]) -> Self {
        Self(coords.map(f64::from))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "[{r}, {g}, {b}]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_conversion() {
        assert_eq!(Color::new(0.0, 127.9, 255.0).to_rgb8(), [0, 127, 255]);
        assert_eq!(Color::new(-3.0, 300.0, f64::NAN).to_rgb8(), [0, 255, 0]);
    }

    #[test]
    fn scaling() {
        let c = Color::from([1, 2, 3]).scale(85.0);
        assert_eq!(c, Color::new(85.0, 170.0, 255.0));
        assert_eq!(c.to_string(), "[85, 170, 255]");
    }
}
