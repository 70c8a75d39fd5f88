//! The externally visible color record and its builder.
//!
//! [`PaletteBuilder`] owns the per-extraction [`NameTracker`] and turns
//! each ranked cluster color into a full [`ExtractedColor`]: display
//! formats, accessibility block, tonal scale, harmony set, and metadata.

use hueforge_core::color::Color;
use hueforge_core::formats::{build_color_formats, ColorFormats, OklchValues};
use hueforge_core::space::hsl::Hsl;
use hueforge_core::space::oklch::Oklch;
use hueforge_metrics::css_named::nearest_css_color;
use hueforge_metrics::pantone::nearest_pantone;
use hueforge_metrics::wcag::Accessibility;
use serde::{Deserialize, Serialize};

use crate::harmony::{build_harmony, HarmonySet};
use crate::names::{NameTracker, Namer};
use crate::scale::{shades, tints};
use crate::temperature::{temperature_of, Temperature};

/// Which side of the foreground mask a color came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    /// Inside the composited foreground mask
    Foreground,
    /// Outside the mask (or the non-salient split)
    Background,
}

impl Segment {
    /// Stable lowercase label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Foreground => "foreground",
            Self::Background => "background",
        }
    }
}

/// Provenance of one extracted color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSource {
    /// Mask side
    pub segment: Segment,
    /// Dominant semantic category of that side, or `"unknown"`
    pub category: String,
    /// Share of the side's sampled pixels captured by this cluster
    pub pixel_coverage: f64,
    /// Extraction confidence for this color
    pub confidence: f64,
}

/// A color derived from a base (tint, shade, or harmony rotation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedColor {
    /// Uppercase `#RRGGBB`
    pub hex: String,
    /// OKLCh coordinates, display-rounded
    pub oklch: OklchValues,
}

impl DerivedColor {
    /// Build from OKLCh coordinates.
    #[must_use]
    pub fn from_oklch(oklch: &Oklch) -> Self {
        Self {
            hex: oklch.to_color().to_hex(),
            oklch: OklchValues {
                l: round4(oklch.l),
                c: round4(oklch.c),
                h: round2(oklch.h),
            },
        }
    }
}

/// Descriptive metadata attached to every extracted color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorMeta {
    /// Warm / cool / neutral
    pub temperature: Temperature,
    /// Nearest CSS named color keyword
    pub nearest_css_color: String,
    /// Nearest Pantone reference label
    pub pantone_approximation: String,
    /// `--color-<slug>` variable name
    pub css_variable_name: String,
}

/// The externally visible record for one palette color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedColor {
    /// `color_%03d`, assigned in weight order from 1
    pub id: String,
    /// Unique heuristic name
    pub name: String,
    /// Provenance
    pub source: ColorSource,
    /// Eight-format display record
    pub formats: ColorFormats,
    /// WCAG contrast and luminance-delta block
    pub accessibility: Accessibility,
    /// Four tints, strictly increasing lightness
    pub tints: Vec<DerivedColor>,
    /// Four shades, strictly decreasing lightness
    pub shades: Vec<DerivedColor>,
    /// Harmony rotations; absent when harmonies are disabled
    pub harmony: Option<HarmonySet>,
    /// Temperature, nearest named colors, CSS variable name
    pub metadata: ColorMeta,
}

impl ExtractedColor {
    /// The base OKLCh coordinates (from the display formats).
    #[must_use]
    pub fn oklch(&self) -> Oklch {
        Oklch::new(
            self.formats.oklch.values.l,
            self.formats.oklch.values.c,
            self.formats.oklch.values.h,
        )
    }
}

/// Builds `ExtractedColor` records for one extraction.
///
/// Owns the name tracker, so creating a new builder is what "resets" the
/// naming state between extractions.
#[derive(Debug)]
pub struct PaletteBuilder {
    tracker: NameTracker,
    generate_harmonies: bool,
}

impl PaletteBuilder {
    /// Fresh builder with an empty name tracker.
    #[must_use]
    pub fn new(generate_harmonies: bool) -> Self {
        Self {
            tracker: NameTracker::new(),
            generate_harmonies,
        }
    }

    /// Build the record for one ranked color.
    ///
    /// `index` is 1-based position in the weight-sorted palette.
    #[must_use]
    pub fn build(
        &mut self,
        color: &Color,
        weight: f64,
        segment: Segment,
        category: &str,
        index: usize,
    ) -> ExtractedColor {
        let hsl = Hsl::from_color(color);
        let oklch = Oklch::from_color(color);

        let name = Namer::name(&hsl, &mut self.tracker);
        let css_variable_name = css_variable_name(&name);

        let confidence = match segment {
            Segment::Foreground => 0.85 + 0.15 * weight,
            Segment::Background => 0.75 + 0.15 * weight,
        };

        ExtractedColor {
            id: format!("color_{index:03}"),
            name,
            source: ColorSource {
                segment,
                category: category.to_owned(),
                pixel_coverage: round4(weight),
                confidence: round4(confidence),
            },
            formats: build_color_formats(color),
            accessibility: Accessibility::evaluate(color),
            tints: tints(&oklch).iter().map(DerivedColor::from_oklch).collect(),
            shades: shades(&oklch).iter().map(DerivedColor::from_oklch).collect(),
            harmony: self.generate_harmonies.then(|| build_harmony(&oklch)),
            metadata: ColorMeta {
                temperature: temperature_of(&hsl),
                nearest_css_color: nearest_css_color(color).to_owned(),
                pantone_approximation: nearest_pantone(color).to_owned(),
                css_variable_name,
            },
        }
    }
}

/// `--color-<slug>`: lowercase, spaces collapsed to `-`.
#[must_use]
pub fn css_variable_name(name: &str) -> String {
    let slug = name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("--color-{slug}")
}

#[inline]
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[inline]
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
