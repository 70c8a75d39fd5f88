//! Simplified luminance-delta contrast score.
//!
//! The output contract calls this field `apca`, but the metric is NOT the
//! published APCA-W3 algorithm: it is the simplified form
//! `round(|Y_text − Y_bg| · 100)` over WCAG relative luminance, carried
//! forward unchanged from the original output contract. Do not substitute
//! the full APCA formula here without a contract revision.

use hueforge_core::color::Color;
use hueforge_core::luminance::relative_luminance;

/// Simplified luminance delta in [0, 100].
///
/// # Examples
///
/// ```
/// use hueforge_core::color::Color;
/// use hueforge_metrics::lum_delta::luminance_delta;
///
/// let black = Color::from_srgb8(0, 0, 0);
/// let white = Color::from_srgb8(255, 255, 255);
/// assert_eq!(luminance_delta(&black, &white), 100);
/// assert_eq!(luminance_delta(&white, &white), 0);
/// ```
#[inline]
#[must_use]
pub fn luminance_delta(text: &Color, background: &Color) -> i32 {
    ((relative_luminance(text) - relative_luminance(background)).abs() * 100.0).round() as i32
}
