//! Relative luminance per WCAG 2.x.
//!
//! Uses the ITU-R BT.709 coefficients over *linear* sRGB channels, as
//! defined in <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>.

use crate::color::Color;

/// WCAG relative luminance coefficients (BT.709).
pub const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Compute relative luminance Y in [0.0, 1.0].
///
/// # Examples
///
/// ```
/// use hueforge_core::color::Color;
/// use hueforge_core::luminance::relative_luminance;
///
/// assert_eq!(relative_luminance(&Color::from_srgb8(0, 0, 0)), 0.0);
/// assert!((relative_luminance(&Color::from_srgb8(255, 255, 255)) - 1.0).abs() < 1e-9);
/// ```
#[inline]
#[must_use]
pub fn relative_luminance(color: &Color) -> f64 {
    LUMINANCE_WEIGHTS[0] * color.linear[0]
        + LUMINANCE_WEIGHTS[1] * color.linear[1]
        + LUMINANCE_WEIGHTS[2] * color.linear[2]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_green_dominates() {
        let y_r = relative_luminance(&Color::from_srgb8(255, 0, 0));
        let y_g = relative_luminance(&Color::from_srgb8(0, 255, 0));
        let y_b = relative_luminance(&Color::from_srgb8(0, 0, 255));

        assert!(y_g > y_r && y_r > y_b);
        assert!((y_r - 0.2126).abs() < 1e-9);
        assert!((y_g - 0.7152).abs() < 1e-9);
        assert!((y_b - 0.0722).abs() < 1e-9);
    }

    #[test]
    fn test_monotone_in_gray() {
        let mut last = -1.0;
        for v in (0..=255).step_by(15) {
            let y = relative_luminance(&Color::from_srgb8(v as u8, v as u8, v as u8));
            assert!(y > last);
            last = y;
        }
    }
}
