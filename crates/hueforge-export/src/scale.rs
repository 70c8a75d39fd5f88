//! The uniform 11-step scale model all emitters consume.
//!
//! Steps follow the Tailwind / Material convention: 50 is the lightest,
//! 950 the darkest, 500 the extracted base. 100–400 are the color's four
//! tints (higher tint index → lighter → lower step number), 600–900 its
//! four shades, and the 50/950 endpoints extend the ladder by one further
//! adaptive half-step.

use hueforge_core::color::Color;
use hueforge_palette::extracted::{css_variable_name, ExtractedColor};
use hueforge_palette::scale::{extend_shade, extend_tint};

/// The scale steps, light to dark.
pub const SCALE_STEPS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// One color's tonal scale, ready for emission.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    /// Display name (deduplicated)
    pub name: String,
    /// Lowercase hyphenated slug of `name`
    pub slug: String,
    /// Name with spaces removed, for Swift/Kotlin identifiers
    pub ident: String,
    /// Base color (the 500 step)
    pub base: Color,
    /// `(step, hex)` pairs in `SCALE_STEPS` order
    pub steps: Vec<(u16, String)>,
}

impl ColorScale {
    /// Build the scale for one extracted color.
    #[must_use]
    pub fn from_color(color: &ExtractedColor) -> Self {
        let base_oklch = color.oklch();
        let base = base_oklch.to_color();

        let mut steps = Vec::with_capacity(SCALE_STEPS.len());
        steps.push((50, extend_tint(&base_oklch).to_color().to_hex()));
        // Tints are ordered base→light, the scale runs light→base
        for (step, tint) in [100u16, 200, 300, 400].iter().zip(color.tints.iter().rev()) {
            steps.push((*step, tint.hex.clone()));
        }
        steps.push((500, base.to_hex()));
        for (step, shade) in [600u16, 700, 800, 900].iter().zip(color.shades.iter()) {
            steps.push((*step, shade.hex.clone()));
        }
        steps.push((950, extend_shade(&base_oklch).to_color().to_hex()));

        Self {
            name: color.name.clone(),
            slug: slug_of(&color.name),
            ident: color.name.split_whitespace().collect(),
            base,
            steps,
        }
    }

    /// Hex of a given step, if present.
    #[must_use]
    pub fn hex(&self, step: u16) -> Option<&str> {
        self.steps
            .iter()
            .find(|(s, _)| *s == step)
            .map(|(_, hex)| hex.as_str())
    }
}

/// Lowercase hyphenated slug.
#[must_use]
pub fn slug_of(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Deduplicate palette names by appending `" 2"`, `" 3"`, …, updating each
/// record's CSS variable name to match.
///
/// The extraction pipeline already guarantees unique names through the
/// name tracker; this pass exists so manually assembled palettes export
/// safely too.
pub fn dedupe_names(palette: &mut [ExtractedColor]) {
    let mut seen = std::collections::HashSet::new();

    for color in palette.iter_mut() {
        if seen.insert(color.name.to_lowercase()) {
            continue;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{} {n}", color.name);
            if seen.insert(candidate.to_lowercase()) {
                color.name = candidate;
                color.metadata.css_variable_name = css_variable_name(&color.name);
                break;
            }
            n += 1;
        }
    }
}

/// Build scales for a whole palette. `base` steps are emitted even when a
/// color carries no tints/shades (the scale then holds only 50/500/950).
#[must_use]
pub fn build_scales(palette: &[ExtractedColor]) -> Vec<ColorScale> {
    palette.iter().map(ColorScale::from_color).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hueforge_core::space::oklch::Oklch;
    use hueforge_palette::extracted::{PaletteBuilder, Segment};

    fn sample_palette() -> Vec<ExtractedColor> {
        let mut builder = PaletteBuilder::new(true);
        vec![
            builder.build(&Color::from_srgb8(200, 40, 60), 0.5, Segment::Foreground, "x", 1),
            builder.build(&Color::from_srgb8(20, 90, 200), 0.3, Segment::Background, "y", 2),
        ]
    }

    #[test]
    fn test_scale_has_eleven_ordered_steps() {
        let palette = sample_palette();
        let scale = ColorScale::from_color(&palette[0]);
        let steps: Vec<u16> = scale.steps.iter().map(|(s, _)| *s).collect();
        assert_eq!(steps, SCALE_STEPS);
    }

    #[test]
    fn test_scale_runs_light_to_dark() {
        let palette = sample_palette();
        let scale = ColorScale::from_color(&palette[0]);
        let lightness: Vec<f64> = scale
            .steps
            .iter()
            .map(|(_, hex)| Oklch::from_color(&Color::from_hex(hex).unwrap()).l)
            .collect();
        for pair in lightness.windows(2) {
            assert!(
                pair[1] < pair[0] + 0.02,
                "scale not descending: {lightness:?}"
            );
        }
        // Ends genuinely spread apart
        assert!(lightness[0] - lightness[10] > 0.3);
    }

    #[test]
    fn test_500_is_base() {
        let palette = sample_palette();
        let scale = ColorScale::from_color(&palette[0]);
        assert_eq!(scale.hex(500).unwrap(), scale.base.to_hex());
    }

    #[test]
    fn test_dedupe_names() {
        let mut palette = sample_palette();
        let name = palette[0].name.clone();
        palette[1].name = name.clone();
        dedupe_names(&mut palette);
        assert_eq!(palette[0].name, name);
        assert_eq!(palette[1].name, format!("{name} 2"));
        assert!(palette[1]
            .metadata
            .css_variable_name
            .ends_with("-2"));
    }

    #[test]
    fn test_ident_has_no_spaces() {
        let mut palette = sample_palette();
        palette[0].name = "Deep Navy".to_owned();
        let scale = ColorScale::from_color(&palette[0]);
        assert_eq!(scale.ident, "DeepNavy");
        assert_eq!(scale.slug, "deep-navy");
    }
}
