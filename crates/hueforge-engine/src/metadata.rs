//! Extraction metadata: scores that summarize how good the palette is.

use hueforge_core::space::oklch::hue_difference;
use hueforge_palette::extracted::ExtractedColor;
use hueforge_palette::temperature::Temperature;
use serde::{Deserialize, Serialize};

use crate::segmentation::{MaskQuality, SegmentationMethod, SegmentationResult};

/// Segmentation summary carried in the metadata block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentationQuality {
    /// How the mask was produced
    pub method: SegmentationMethod,
    /// Coarse confidence bucket
    pub confidence: MaskQuality,
    /// Whether any foreground was detected
    pub foreground_detected: bool,
    /// Whether the luminance fallback was taken
    pub used_fallback: bool,
}

/// Overall extraction confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfidence {
    /// `round((seg_confidence + color_separation + naming_quality) / 3, 2)`
    pub overall: f64,
}

/// The metadata block of a [`ColorPaletteResult`](crate::extract::ColorPaletteResult).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    /// Wall-clock extraction duration
    pub processing_time_ms: u64,
    /// Normalized Shannon entropy of palette weights, [0, 1]
    pub color_diversity: f64,
    /// Mean pairwise OKLCh distance, clipped to [0, 1]
    pub color_separation: f64,
    /// Mean HSL saturation over the palette, 0–100
    pub average_saturation: f64,
    /// Mode of per-color temperature
    pub dominant_temperature: Temperature,
    /// `unique names / palette length`
    pub naming_quality: f64,
    /// Segmentation summary
    pub segmentation_quality: SegmentationQuality,
    /// Overall confidence
    pub extraction_confidence: ExtractionConfidence,
}

/// Assemble the metadata block.
#[must_use]
pub fn summarize(
    palette: &[ExtractedColor],
    seg: &SegmentationResult,
    processing_time_ms: u64,
) -> ExtractionMetadata {
    let separation = color_separation(palette);
    let naming = naming_quality(palette);

    ExtractionMetadata {
        processing_time_ms,
        color_diversity: round4(color_diversity(palette)),
        color_separation: round4(separation),
        average_saturation: round4(average_saturation(palette)),
        dominant_temperature: dominant_temperature(palette),
        naming_quality: round4(naming),
        segmentation_quality: SegmentationQuality {
            method: seg.method,
            confidence: seg.quality,
            foreground_detected: seg.mask.is_some(),
            used_fallback: seg.used_fallback,
        },
        extraction_confidence: ExtractionConfidence {
            overall: round2((seg.confidence + separation + naming) / 3.0),
        },
    }
}

/// Normalized Shannon entropy of the palette weights.
///
/// 1.0 means the weights are perfectly even; 0.0 a single color (or an
/// empty palette).
#[must_use]
pub fn color_diversity(palette: &[ExtractedColor]) -> f64 {
    if palette.len() < 2 {
        return 0.0;
    }

    let total: f64 = palette.iter().map(|c| c.source.pixel_coverage).sum();
    if total <= 0.0 {
        return 0.0;
    }

    let entropy: f64 = palette
        .iter()
        .map(|c| c.source.pixel_coverage / total)
        .filter(|p| *p > 0.0)
        .map(|p| -p * p.ln())
        .sum();

    entropy / (palette.len() as f64).ln()
}

/// Mean pairwise distance in OKLCh `{Δl, Δc, Δh/360}`, divided by 2 and
/// clipped to [0, 1].
#[must_use]
pub fn color_separation(palette: &[ExtractedColor]) -> f64 {
    if palette.len() < 2 {
        return 0.0;
    }

    let mut sum = 0.0;
    let mut pairs = 0usize;
    for (i, a) in palette.iter().enumerate() {
        for b in palette.iter().skip(i + 1) {
            let oa = a.oklch();
            let ob = b.oklch();
            let dl = oa.l - ob.l;
            let dc = oa.c - ob.c;
            let dh = hue_difference(oa.h, ob.h) / 360.0;
            sum += (dl * dl + dc * dc + dh * dh).sqrt();
            pairs += 1;
        }
    }

    (sum / pairs as f64 / 2.0).clamp(0.0, 1.0)
}

fn average_saturation(palette: &[ExtractedColor]) -> f64 {
    if palette.is_empty() {
        return 0.0;
    }
    palette
        .iter()
        .map(|c| f64::from(c.formats.hsl.values.s))
        .sum::<f64>()
        / palette.len() as f64
}

/// Mode of temperatures; ties resolve warm → cool → neutral.
fn dominant_temperature(palette: &[ExtractedColor]) -> Temperature {
    let count = |t: Temperature| {
        palette
            .iter()
            .filter(|c| c.metadata.temperature == t)
            .count()
    };
    let warm = count(Temperature::Warm);
    let cool = count(Temperature::Cool);
    let neutral = count(Temperature::Neutral);

    if warm >= cool && warm >= neutral && warm > 0 {
        Temperature::Warm
    } else if cool >= neutral && cool > 0 {
        Temperature::Cool
    } else {
        Temperature::Neutral
    }
}

fn naming_quality(palette: &[ExtractedColor]) -> f64 {
    if palette.is_empty() {
        return 0.0;
    }
    let unique = palette
        .iter()
        .map(|c| c.name.to_lowercase())
        .collect::<std::collections::HashSet<_>>()
        .len();
    unique as f64 / palette.len() as f64
}

#[inline]
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[inline]
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
