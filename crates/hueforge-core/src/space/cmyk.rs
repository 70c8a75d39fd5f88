//! CMYK transformation (naive, device-independent).
//!
//! Standard black-extraction formula over gamma-encoded sRGB; no ICC
//! profile is involved. Percent components at `f64` precision.

use crate::color::Color;

/// CMYK representation, each component a percent [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cmyk {
    /// Cyan percent
    pub c: f64,
    /// Magenta percent
    pub m: f64,
    /// Yellow percent
    pub y: f64,
    /// Key (black) percent
    pub k: f64,
}

impl Cmyk {
    /// Convert from sRGB color.
    ///
    /// # Examples
    ///
    /// ```
    /// use hueforge_core::color::Color;
    /// use hueforge_core::space::cmyk::Cmyk;
    ///
    /// let red = Cmyk::from_color(&Color::from_srgb8(255, 0, 0));
    /// assert!(red.c.abs() < 0.001);
    /// assert!((red.m - 100.0).abs() < 0.001);
    /// assert!((red.y - 100.0).abs() < 0.001);
    /// assert!(red.k.abs() < 0.001);
    /// ```
    #[must_use]
    pub fn from_color(color: &Color) -> Self {
        let [r, g, b] = color.srgb;
        let k = 1.0 - r.max(g).max(b);

        if (1.0 - k).abs() < f64::EPSILON {
            // Pure black: chromatic components are undefined, emit zeros
            return Self {
                c: 0.0,
                m: 0.0,
                y: 0.0,
                k: 100.0,
            };
        }

        Self {
            c: (1.0 - r - k) / (1.0 - k) * 100.0,
            m: (1.0 - g - k) / (1.0 - k) * 100.0,
            y: (1.0 - b - k) / (1.0 - k) * 100.0,
            k: k * 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black() {
        let black = Cmyk::from_color(&Color::from_srgb8(0, 0, 0));
        assert_eq!(black.c, 0.0);
        assert_eq!(black.m, 0.0);
        assert_eq!(black.y, 0.0);
        assert_eq!(black.k, 100.0);
    }

    #[test]
    fn test_white() {
        let white = Cmyk::from_color(&Color::from_srgb8(255, 255, 255));
        assert!(white.c.abs() < 0.001);
        assert!(white.m.abs() < 0.001);
        assert!(white.y.abs() < 0.001);
        assert!(white.k.abs() < 0.001);
    }

    #[test]
    fn test_mid_gray_is_pure_key() {
        let gray = Cmyk::from_color(&Color::from_srgb8(128, 128, 128));
        assert!(gray.c.abs() < 0.001);
        assert!(gray.m.abs() < 0.001);
        assert!(gray.y.abs() < 0.001);
        assert!((gray.k - 49.8).abs() < 0.5);
    }
}
