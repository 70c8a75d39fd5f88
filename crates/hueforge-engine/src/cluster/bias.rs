//! Saturation-biased resampling.
//!
//! Vivid pixels are numerically sparse but perceptually load-bearing:
//! without oversampling, k-means collapses a red accent into the
//! surrounding neutrals. Each pixel expands into 1–20 copies, weighted by
//! its HSL saturation tier and boosted for mid-lightness.

use hueforge_core::color::Color;
use hueforge_core::space::hsl::Hsl;
use hueforge_core::space::oklch::Oklab;

use crate::pixels::Rgb8;

/// Maximum copies one pixel may contribute.
const MAX_REPS: u32 = 20;

/// Copies a pixel contributes to the clustering input.
#[must_use]
pub fn repetitions(hsl: &Hsl) -> u32 {
    let s = hsl.s;
    let mut boost = if s > 75.0 {
        (s / 100.0).powf(1.5) * 12.0
    } else if s > 50.0 {
        (s / 100.0).powf(1.6) * 7.0
    } else if s > 25.0 {
        (s / 100.0).powf(1.3) * 2.5
    } else {
        0.3
    };

    if (20.0..=80.0).contains(&hsl.l) {
        boost *= 1.8;
    }

    (boost.round() as u32).clamp(1, MAX_REPS)
}

/// Expand pixels into saturation-weighted OKLab points.
#[must_use]
pub fn biased_oklab(pixels: &[Rgb8]) -> Vec<Oklab> {
    let mut points = Vec::with_capacity(pixels.len() * 2);

    for rgb in pixels {
        let color = Color::from_srgb8(rgb[0], rgb[1], rgb[2]);
        let reps = repetitions(&Hsl::from_color(&color));
        let oklab = Oklab::from_color(&color);
        for _ in 0..reps {
            points.push(oklab);
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsl_of(r: u8, g: u8, b: u8) -> Hsl {
        Hsl::from_color(&Color::from_srgb8(r, g, b))
    }

    #[test]
    fn test_gray_gets_single_copy() {
        assert_eq!(repetitions(&hsl_of(128, 128, 128)), 1);
    }

    #[test]
    fn test_vivid_mid_lightness_gets_many() {
        // Pure red: s = 100, l = 50 → 12 · 1.8 = 21.6 → clamped to 20
        assert_eq!(repetitions(&hsl_of(255, 0, 0)), 20);
    }

    #[test]
    fn test_tiers_are_monotone() {
        // More saturation never yields fewer copies at equal lightness
        let low = repetitions(&Hsl { h: 0.0, s: 30.0, l: 50.0 });
        let mid = repetitions(&Hsl { h: 0.0, s: 60.0, l: 50.0 });
        let high = repetitions(&Hsl { h: 0.0, s: 90.0, l: 50.0 });
        assert!(low <= mid && mid <= high);
        assert!(high > low);
    }

    #[test]
    fn test_extreme_lightness_no_boost() {
        let dark = repetitions(&Hsl { h: 0.0, s: 90.0, l: 10.0 });
        let mid = repetitions(&Hsl { h: 0.0, s: 90.0, l: 50.0 });
        assert!(dark < mid);
    }

    #[test]
    fn test_expansion_counts() {
        let pixels: Vec<Rgb8> = vec![[128, 128, 128], [255, 0, 0]];
        let points = biased_oklab(&pixels);
        assert_eq!(points.len(), 1 + 20);
    }
}
