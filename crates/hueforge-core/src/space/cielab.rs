//! CIE L\*a\*b\* and LCh(ab) transformations, D65 illuminant.
//!
//! Display-oriented conversions through CIE XYZ. OKLab remains the working
//! space for all perceptual math; CIELAB is emitted only because the output
//! contract carries `lab`/`lch` format entries.

use crate::color::Color;

// D65 reference white (2° observer)
const XN: f64 = 95.047;
const YN: f64 = 100.0;
const ZN: f64 = 108.883;

const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

/// CIE L\*a\*b\* representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CieLab {
    /// Lightness L\* [0, 100]
    pub l: f64,
    /// Green-red axis a\*
    pub a: f64,
    /// Blue-yellow axis b\*
    pub b: f64,
}

/// CIE LCh(ab) representation: the cylindrical form of L\*a\*b\*.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CieLch {
    /// Lightness L\* [0, 100]
    pub l: f64,
    /// Chroma C\* ≥ 0
    pub c: f64,
    /// Hue angle in degrees [0, 360)
    pub h: f64,
}

impl CieLab {
    /// Convert from sRGB color via CIE XYZ (D65).
    ///
    /// # Examples
    ///
    /// ```
    /// use hueforge_core::color::Color;
    /// use hueforge_core::space::cielab::CieLab;
    ///
    /// let white = CieLab::from_color(&Color::from_srgb8(255, 255, 255));
    /// assert!((white.l - 100.0).abs() < 0.01);
    /// assert!(white.a.abs() < 0.01);
    /// assert!(white.b.abs() < 0.01);
    /// ```
    #[must_use]
    pub fn from_color(color: &Color) -> Self {
        let [r, g, b] = color.linear;

        // Linear sRGB → XYZ (D65), scaled to the 0-100 white point
        let x = (0.4124564 * r + 0.3575761 * g + 0.1804375 * b) * 100.0;
        let y = (0.2126729 * r + 0.7151522 * g + 0.0721750 * b) * 100.0;
        let z = (0.0193339 * r + 0.1191920 * g + 0.9503041 * b) * 100.0;

        let fx = lab_f(x / XN);
        let fy = lab_f(y / YN);
        let fz = lab_f(z / ZN);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Convert to the cylindrical LCh(ab) form.
    #[must_use]
    pub fn to_lch(&self) -> CieLch {
        let c = (self.a * self.a + self.b * self.b).sqrt();
        let h = self.b.atan2(self.a).to_degrees().rem_euclid(360.0);
        CieLch { l: self.l, c, h }
    }
}

impl CieLch {
    /// Convert from sRGB color.
    #[must_use]
    pub fn from_color(color: &Color) -> Self {
        CieLab::from_color(color).to_lch()
    }
}

fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black() {
        let black = CieLab::from_color(&Color::from_srgb8(0, 0, 0));
        assert!(black.l.abs() < 0.01);
        assert!(black.a.abs() < 0.01);
        assert!(black.b.abs() < 0.01);
    }

    #[test]
    fn golden_red() {
        // Canonical D65 values for sRGB red: L*≈53.2, a*≈80.1, b*≈67.2
        let red = CieLab::from_color(&Color::from_srgb8(255, 0, 0));
        assert!((red.l - 53.2).abs() < 0.5, "L: {}", red.l);
        assert!((red.a - 80.1).abs() < 1.0, "a: {}", red.a);
        assert!((red.b - 67.2).abs() < 1.0, "b: {}", red.b);
    }

    #[test]
    fn test_gray_is_neutral() {
        let gray = CieLab::from_color(&Color::from_srgb8(128, 128, 128));
        assert!(gray.a.abs() < 0.01);
        assert!(gray.b.abs() < 0.01);
        assert!((gray.l - 53.6).abs() < 0.5);
    }

    #[test]
    fn test_lch_of_red() {
        let lch = CieLch::from_color(&Color::from_srgb8(255, 0, 0));
        assert!((lch.c - 104.6).abs() < 1.5, "C: {}", lch.c);
        assert!((lch.h - 40.0).abs() < 1.5, "H: {}", lch.h);
    }
}
