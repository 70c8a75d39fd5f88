//! Color temperature classification.

use hueforge_core::space::hsl::Hsl;
use serde::{Deserialize, Serialize};

/// Saturation floor below which a color reads as achromatic and therefore
/// temperature-neutral regardless of its nominal hue.
const NEUTRAL_SATURATION: f64 = 12.0;

/// Warm / cool / neutral classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Temperature {
    /// Hue in [0°, 60°] ∪ [300°, 360°]
    Warm,
    /// Hue in [120°, 240°]
    Cool,
    /// Everything else, and all near-achromatic colors
    Neutral,
}

impl Temperature {
    /// Stable lowercase label (`warm` / `cool` / `neutral`).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Warm => "warm",
            Self::Cool => "cool",
            Self::Neutral => "neutral",
        }
    }
}

/// Classify a color's temperature from its HSL coordinates.
///
/// Near-achromatic colors (saturation ≤ 12) are always neutral: a gray's
/// nominal hue of 0° must not read as warm.
///
/// # Examples
///
/// ```
/// use hueforge_core::color::Color;
/// use hueforge_core::space::hsl::Hsl;
/// use hueforge_palette::temperature::{temperature_of, Temperature};
///
/// let red = Hsl::from_color(&Color::from_srgb8(255, 0, 0));
/// assert_eq!(temperature_of(&red), Temperature::Warm);
///
/// let blue = Hsl::from_color(&Color::from_srgb8(0, 0, 255));
/// assert_eq!(temperature_of(&blue), Temperature::Cool);
///
/// let gray = Hsl::from_color(&Color::from_srgb8(128, 128, 128));
/// assert_eq!(temperature_of(&gray), Temperature::Neutral);
/// ```
#[must_use]
pub fn temperature_of(hsl: &Hsl) -> Temperature {
    if hsl.s <= NEUTRAL_SATURATION {
        return Temperature::Neutral;
    }

    let h = hsl.h.rem_euclid(360.0);
    if h <= 60.0 || h >= 300.0 {
        Temperature::Warm
    } else if (120.0..=240.0).contains(&h) {
        Temperature::Cool
    } else {
        Temperature::Neutral
    }
}
