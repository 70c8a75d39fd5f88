//! HSL and HSB (HSV) cylindrical sRGB transformations.
//!
//! These are *display* spaces, not perceptual ones: the namer, saturation
//! bias, and deduplication stages read HSL because its saturation/lightness
//! axes match the heuristics' tuning, while all distance math stays in OKLab.
//!
//! Components are kept at full `f64` precision here; the display format
//! builders round to the integer contract.

use crate::color::Color;

/// HSL representation: hue 0-360, saturation 0-100, lightness 0-100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees [0, 360)
    pub h: f64,
    /// Saturation percent [0, 100]
    pub s: f64,
    /// Lightness percent [0, 100]
    pub l: f64,
}

/// HSB (a.k.a. HSV) representation: hue 0-360, saturation 0-100,
/// brightness 0-100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    /// Hue in degrees [0, 360)
    pub h: f64,
    /// Saturation percent [0, 100]
    pub s: f64,
    /// Brightness percent [0, 100]
    pub b: f64,
}

impl Hsl {
    /// Convert from sRGB color.
    ///
    /// # Examples
    ///
    /// ```
    /// use hueforge_core::color::Color;
    /// use hueforge_core::space::hsl::Hsl;
    ///
    /// let red = Hsl::from_color(&Color::from_srgb8(255, 0, 0));
    /// assert!(red.h.abs() < 0.001);
    /// assert!((red.s - 100.0).abs() < 0.001);
    /// assert!((red.l - 50.0).abs() < 0.001);
    /// ```
    #[must_use]
    pub fn from_color(color: &Color) -> Self {
        let [r, g, b] = color.srgb;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let l = (max + min) / 2.0;

        let (h, s) = if delta.abs() < f64::EPSILON {
            (0.0, 0.0)
        } else {
            let s = if l > 0.5 {
                delta / (2.0 - max - min)
            } else {
                delta / (max + min)
            };
            (hue_from_channels(r, g, b, max, delta), s)
        };

        Self {
            h,
            s: s * 100.0,
            l: l * 100.0,
        }
    }

    /// Convert back to sRGB color.
    #[must_use]
    pub fn to_color(&self) -> Color {
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);

        if s.abs() < f64::EPSILON {
            return Color::from_srgb(l, l, l);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let h = self.h / 360.0;

        Color::from_srgb(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    }
}

impl Hsb {
    /// Convert from sRGB color.
    #[must_use]
    pub fn from_color(color: &Color) -> Self {
        let [r, g, b] = color.srgb;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let s = if max.abs() < f64::EPSILON {
            0.0
        } else {
            delta / max
        };
        let h = if delta.abs() < f64::EPSILON {
            0.0
        } else {
            hue_from_channels(r, g, b, max, delta)
        };

        Self {
            h,
            s: s * 100.0,
            b: max * 100.0,
        }
    }
}

/// Shared hue sector math for HSL/HSB (degrees in [0, 360)).
fn hue_from_channels(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    let h = if (max - r).abs() < f64::EPSILON {
        ((g - b) / delta).rem_euclid(6.0)
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    (h * 60.0).rem_euclid(360.0)
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primaries() {
        let red = Hsl::from_color(&Color::from_srgb8(255, 0, 0));
        assert!((red.h - 0.0).abs() < 0.01);

        let green = Hsl::from_color(&Color::from_srgb8(0, 255, 0));
        assert!((green.h - 120.0).abs() < 0.01);

        let blue = Hsl::from_color(&Color::from_srgb8(0, 0, 255));
        assert!((blue.h - 240.0).abs() < 0.01);
    }

    #[test]
    fn test_gray_has_no_saturation() {
        let gray = Hsl::from_color(&Color::from_srgb8(128, 128, 128));
        assert!(gray.s.abs() < 0.001);
        assert!((gray.l - 50.2).abs() < 0.5);
    }

    #[test]
    fn test_hsl_roundtrip() {
        for (r, g, b) in [(255u8, 0u8, 0u8), (12, 200, 99), (240, 240, 10), (7, 7, 7)] {
            let color = Color::from_srgb8(r, g, b);
            let [r2, g2, b2] = Hsl::from_color(&color).to_color().to_srgb8();
            assert!((i16::from(r2) - i16::from(r)).abs() <= 1, "{r} → {r2}");
            assert!((i16::from(g2) - i16::from(g)).abs() <= 1, "{g} → {g2}");
            assert!((i16::from(b2) - i16::from(b)).abs() <= 1, "{b} → {b2}");
        }
    }

    #[test]
    fn test_hsb_red() {
        let red = Hsb::from_color(&Color::from_srgb8(255, 0, 0));
        assert!((red.h - 0.0).abs() < 0.01);
        assert!((red.s - 100.0).abs() < 0.01);
        assert!((red.b - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_hsb_vs_hsl_lightness() {
        // Pure red: HSB brightness 100, HSL lightness 50
        let color = Color::from_srgb8(255, 0, 0);
        let hsb = Hsb::from_color(&color);
        let hsl = Hsl::from_color(&color);
        assert!(hsb.b > hsl.l);
    }
}
