//! WCAG 2.x contrast ratio implementation.
//!
//! Implements the contrast ratio algorithm as defined in
//! <https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio>, with the pass flags
//! the extraction output carries: 3:1 (AA large text), 4.5:1 (AA normal),
//! and 7:1 (AAA normal).

use hueforge_core::color::Color;
use hueforge_core::luminance::relative_luminance;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// WCAG threshold for AA large text.
pub const AA_LARGE: f64 = 3.0;
/// WCAG threshold for AA normal text.
pub const AA_NORMAL: f64 = 4.5;
/// WCAG threshold for AAA normal text.
pub const AAA_NORMAL: f64 = 7.0;

/// One contrast measurement with its pass flags.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContrastCheck {
    /// Contrast ratio, 1.0 (none) to 21.0 (black on white), 2 decimals
    pub ratio: f64,
    /// `ratio ≥ 3.0`
    pub passes_aa_large: bool,
    /// `ratio ≥ 4.5`
    pub passes_aa: bool,
    /// `ratio ≥ 7.0`
    pub passes_aaa: bool,
}

impl ContrastCheck {
    /// Evaluate the contrast between two colors.
    #[must_use]
    pub fn evaluate(a: &Color, b: &Color) -> Self {
        let ratio = (contrast_ratio(a, b) * 100.0).round() / 100.0;
        Self {
            ratio,
            passes_aa_large: ratio >= AA_LARGE,
            passes_aa: ratio >= AA_NORMAL,
            passes_aaa: ratio >= AAA_NORMAL,
        }
    }
}

/// The accessibility block attached to every extracted color.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Accessibility {
    /// Contrast of the color against pure white
    pub contrast_on_white: ContrastCheck,
    /// Contrast of the color against pure black
    pub contrast_on_black: ContrastCheck,
    /// Simplified luminance-delta score against the suggested text color
    pub apca: i32,
    /// `"#FFFFFF"` or `"#000000"`, whichever contrasts more
    pub suggested_text_color: String,
}

impl Accessibility {
    /// Build the full accessibility block for a color.
    ///
    /// # Examples
    ///
    /// ```
    /// use hueforge_core::color::Color;
    /// use hueforge_metrics::wcag::Accessibility;
    ///
    /// let a = Accessibility::evaluate(&Color::from_srgb8(0, 0, 128));
    /// assert_eq!(a.suggested_text_color, "#FFFFFF");
    /// assert!(a.contrast_on_white.ratio >= 1.0);
    /// assert!(a.contrast_on_black.ratio >= 1.0);
    /// ```
    #[must_use]
    pub fn evaluate(color: &Color) -> Self {
        let white = Color::from_srgb8(255, 255, 255);
        let black = Color::from_srgb8(0, 0, 0);

        let on_white = ContrastCheck::evaluate(color, &white);
        let on_black = ContrastCheck::evaluate(color, &black);
        let text = suggested_text_color(color);
        let text_color = if text == "#FFFFFF" { &white } else { &black };

        Self {
            contrast_on_white: on_white,
            contrast_on_black: on_black,
            apca: crate::lum_delta::luminance_delta(text_color, color),
            suggested_text_color: text,
        }
    }
}

/// WCAG 2.x contrast ratio between two colors, in [1.0, 21.0].
///
/// ```text
/// ratio = (L_lighter + 0.05) / (L_darker + 0.05)
/// ```
///
/// Symmetric: argument order does not matter.
///
/// # Examples
///
/// ```
/// use hueforge_core::color::Color;
/// use hueforge_metrics::wcag::contrast_ratio;
///
/// let black = Color::from_srgb8(0, 0, 0);
/// let white = Color::from_srgb8(255, 255, 255);
/// assert!((contrast_ratio(&black, &white) - 21.0).abs() < 0.01);
/// ```
#[inline]
#[must_use]
pub fn contrast_ratio(a: &Color, b: &Color) -> f64 {
    let ya = relative_luminance(a);
    let yb = relative_luminance(b);

    let (lighter, darker) = if ya > yb { (ya, yb) } else { (yb, ya) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Pick pure white or pure black as text color, whichever yields the
/// greater contrast ratio against `background`.
///
/// # Examples
///
/// ```
/// use hueforge_core::color::Color;
/// use hueforge_metrics::wcag::suggested_text_color;
///
/// assert_eq!(suggested_text_color(&Color::from_srgb8(10, 10, 10)), "#FFFFFF");
/// assert_eq!(suggested_text_color(&Color::from_srgb8(250, 250, 210)), "#000000");
/// ```
#[must_use]
pub fn suggested_text_color(background: &Color) -> String {
    let white = Color::from_srgb8(255, 255, 255);
    let black = Color::from_srgb8(0, 0, 0);

    if contrast_ratio(&white, background) >= contrast_ratio(&black, background) {
        "#FFFFFF".to_owned()
    } else {
        "#000000".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Golden values are from the WCAG 2.1 specification.

    #[test]
    fn test_black_on_white() {
        let ratio = contrast_ratio(
            &Color::from_srgb8(0, 0, 0),
            &Color::from_srgb8(255, 255, 255),
        );
        assert!((ratio - 21.0).abs() < 0.01, "Expected 21.0, got {ratio}");
    }

    #[test]
    fn test_identical_colors() {
        let gray = Color::from_srgb8(128, 128, 128);
        assert!((contrast_ratio(&gray, &gray) - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_red_on_white() {
        let ratio = contrast_ratio(
            &Color::from_srgb8(255, 0, 0),
            &Color::from_srgb8(255, 255, 255),
        );
        assert!((ratio - 3.99).abs() < 0.1, "Expected ~3.99, got {ratio}");
    }

    #[test]
    fn test_blue_on_white() {
        let ratio = contrast_ratio(
            &Color::from_srgb8(0, 0, 255),
            &Color::from_srgb8(255, 255, 255),
        );
        assert!((ratio - 8.59).abs() < 0.1, "Expected ~8.59, got {ratio}");
    }

    #[test]
    fn test_symmetry() {
        let a = Color::from_srgb8(100, 100, 100);
        let b = Color::from_srgb8(200, 200, 200);
        assert!((contrast_ratio(&a, &b) - contrast_ratio(&b, &a)).abs() < 0.001);
    }

    #[test]
    fn test_pass_flags() {
        let check = ContrastCheck::evaluate(
            &Color::from_srgb8(118, 118, 118),
            &Color::from_srgb8(255, 255, 255),
        );
        assert!(check.passes_aa_large);
        assert!(check.passes_aa);
        assert!(!check.passes_aaa);

        let strong = ContrastCheck::evaluate(
            &Color::from_srgb8(85, 85, 85),
            &Color::from_srgb8(255, 255, 255),
        );
        assert!(strong.passes_aaa);
    }

    #[test]
    fn test_suggested_text_maximizes_ratio() {
        for rgb in [(0u8, 0u8, 128u8), (255, 255, 0), (128, 128, 128), (20, 200, 50)] {
            let bg = Color::from_srgb8(rgb.0, rgb.1, rgb.2);
            let suggestion = suggested_text_color(&bg);
            let white = contrast_ratio(&Color::from_srgb8(255, 255, 255), &bg);
            let black = contrast_ratio(&Color::from_srgb8(0, 0, 0), &bg);
            if suggestion == "#FFFFFF" {
                assert!(white >= black);
            } else {
                assert!(black > white);
            }
        }
    }

    #[test]
    fn test_accessibility_block() {
        let a = Accessibility::evaluate(&Color::from_srgb8(30, 30, 30));
        assert_eq!(a.suggested_text_color, "#FFFFFF");
        assert!(a.contrast_on_black.ratio < a.contrast_on_white.ratio);
        assert!(a.apca > 80);
    }
}
