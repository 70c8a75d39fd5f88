//! Harmonic derivatives.
//!
//! Classic hue-wheel geometry on the OKLCh wheel: every harmony color holds
//! the parent's lightness and chroma and only rotates hue, so a harmony set
//! reads as the same "material" in a different hue.

use hueforge_core::space::oklch::Oklch;

use crate::extracted::DerivedColor;
use serde::{Deserialize, Serialize};

/// The four harmony relationships attached to every extracted color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmonySet {
    /// 180° rotation
    pub complementary: DerivedColor,
    /// ±30° rotations
    pub analogous: [DerivedColor; 2],
    /// 120° and 240° rotations
    pub triadic: [DerivedColor; 2],
    /// 150° and 210° rotations
    pub split_complementary: [DerivedColor; 2],
}

/// Build the harmony set for a base color.
///
/// # Examples
///
/// ```
/// use hueforge_core::color::Color;
/// use hueforge_core::space::oklch::Oklch;
/// use hueforge_palette::harmony::build_harmony;
///
/// let red = Oklch::from_color(&Color::from_srgb8(255, 0, 0));
/// let harmony = build_harmony(&red);
///
/// // Complement of red is cyan-ish
/// let comp = Color::from_hex(&harmony.complementary.hex).unwrap();
/// let [r, g, b] = comp.to_srgb8();
/// assert!(g > r && b > r);
/// ```
#[must_use]
pub fn build_harmony(base: &Oklch) -> HarmonySet {
    let rotate = |degrees: f64| DerivedColor::from_oklch(&base.rotate_hue(degrees));

    HarmonySet {
        complementary: rotate(180.0),
        analogous: [rotate(-30.0), rotate(30.0)],
        triadic: [rotate(120.0), rotate(240.0)],
        split_complementary: [rotate(150.0), rotate(210.0)],
    }
}
