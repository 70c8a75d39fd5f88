//! The extraction orchestrator.
//!
//! Sequences the five stages strictly in order, checks the cancellation
//! token between stages, emits the partial palette through the optional
//! hook exactly once, and assembles the final result envelope.

use std::time::Instant;

use hueforge_export::emitters::{generate_exports, PaletteExports};
use hueforge_palette::extracted::{ExtractedColor, PaletteBuilder, Segment};
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::capabilities::{CancelToken, ImageDecoder, SegmentationProvider};
use crate::cluster::{cluster, ClusteredColor};
use crate::config::TuningConfig;
use crate::error::ExtractionError;
use crate::metadata::{summarize, ExtractionMetadata};
use crate::pixels::extract_pixels;
use crate::segmentation::{MaskQuality, SegmentationAdapter, SegmentationMethod};

/// Caller options. Everything has a default; `num_colors` outside 3–20 is
/// clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Requested palette size; adaptive when absent
    pub num_colors: Option<usize>,
    /// Include background-side colors in the palette
    pub include_background: bool,
    /// Attach harmony sets to each color
    pub generate_harmonies: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            num_colors: None,
            include_background: true,
            generate_harmonies: true,
        }
    }
}

/// Optional extraction callbacks.
///
/// `on_partial` fires once, the first time the accumulating palette
/// reaches the configured threshold (or once with the whole palette when
/// the threshold is never reached).
#[derive(Default)]
pub struct ExtractHooks<'a> {
    /// Partial-palette callback
    pub on_partial: Option<Box<dyn FnMut(&[ExtractedColor]) + 'a>>,
}

impl<'a> ExtractHooks<'a> {
    /// No callbacks.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Hook the partial-palette emission.
    #[must_use]
    pub fn with_partial(callback: impl FnMut(&[ExtractedColor]) + 'a) -> Self {
        Self {
            on_partial: Some(Box::new(callback)),
        }
    }

    fn emit(&mut self, prefix: &[ExtractedColor]) {
        if let Some(callback) = self.on_partial.as_mut() {
            callback(prefix);
        }
    }
}

impl std::fmt::Debug for ExtractHooks<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractHooks")
            .field("on_partial", &self.on_partial.is_some())
            .finish()
    }
}

/// Image dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Source image descriptor in the result envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceImage {
    /// Caller-provided filename
    pub filename: String,
    /// Decoded dimensions
    pub dimensions: Dimensions,
    /// ISO-8601 UTC timestamp of the extraction
    pub processed_at: String,
}

/// Segment percentages and categories in the result envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentsSummary {
    /// Foreground share, 0–100
    pub foreground_pct: f64,
    /// Background share, 0–100
    pub background_pct: f64,
    /// Scene categories from the semantic model
    pub categories: Vec<String>,
    /// How the mask was produced
    pub method: SegmentationMethod,
    /// Coarse mask quality
    pub quality: MaskQuality,
}

/// The complete extraction result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPaletteResult {
    /// `palette_<epoch_ms>`
    pub id: String,
    /// Source image descriptor
    pub source_image: SourceImage,
    /// Segmentation summary
    pub segments: SegmentsSummary,
    /// Ranked palette, weight-descending, ids from 1
    pub palette: Vec<ExtractedColor>,
    /// Developer-ready export artifacts
    pub exports: PaletteExports,
    /// Quality scores
    pub metadata: ExtractionMetadata,
}

/// The extraction engine over a pair of capabilities.
pub struct Extractor<'a> {
    provider: &'a dyn SegmentationProvider,
    decoder: &'a dyn ImageDecoder,
    config: TuningConfig,
}

impl std::fmt::Debug for Extractor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<'a> Extractor<'a> {
    /// Engine with default tuning.
    #[must_use]
    pub fn new(provider: &'a dyn SegmentationProvider, decoder: &'a dyn ImageDecoder) -> Self {
        Self::with_config(provider, decoder, TuningConfig::default())
    }

    /// Engine with explicit tuning.
    #[must_use]
    pub fn with_config(
        provider: &'a dyn SegmentationProvider,
        decoder: &'a dyn ImageDecoder,
        config: TuningConfig,
    ) -> Self {
        Self {
            provider,
            decoder,
            config,
        }
    }

    /// Run the full extraction pipeline.
    ///
    /// Deterministic: identical `(image, filename, opts)` with identical
    /// provider outputs produce byte-identical `palette` and `exports`.
    ///
    /// # Errors
    ///
    /// - [`ExtractionError::InvalidImage`] when decoding fails
    /// - [`ExtractionError::EmptyInput`] when no usable pixels remain
    /// - [`ExtractionError::Cancelled`] when `cancel` trips; no partial
    ///   is emitted in that case
    pub fn extract(
        &self,
        image: &[u8],
        filename: &str,
        opts: &ExtractOptions,
        hooks: &mut ExtractHooks<'_>,
        cancel: &CancelToken,
    ) -> Result<ColorPaletteResult, ExtractionError> {
        let start = Instant::now();
        self.check_cancel(cancel)?;

        // Stage 1: segmentation (infallible; degrades to fallback)
        let seg = SegmentationAdapter::new(self.provider, self.decoder, &self.config)
            .segment(image);
        debug!(method = ?seg.method, used_fallback = seg.used_fallback, "segmentation complete");
        self.check_cancel(cancel)?;

        // Stage 2: pixel extraction
        let pixels = extract_pixels(self.decoder, image, &seg, &self.config)?;
        self.check_cancel(cancel)?;

        // Stage 3: clustering (checks the token inside Lloyd iterations)
        let clusters = cluster(
            &pixels.foreground,
            &pixels.background,
            opts.num_colors,
            &self.config,
            cancel,
        )?;
        self.check_cancel(cancel)?;

        // Stage 4: combine, rank, and format
        let mut combined: Vec<(ClusteredColor, Segment)> = clusters
            .foreground
            .into_iter()
            .map(|c| (c, Segment::Foreground))
            .collect();
        if opts.include_background {
            combined.extend(
                clusters
                    .background
                    .into_iter()
                    .map(|c| (c, Segment::Background)),
            );
        }
        combined.sort_by(|a, b| {
            b.0.weight
                .partial_cmp(&a.0.weight)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        if combined.is_empty() {
            return Err(ExtractionError::EmptyInput(
                "clustering produced no colors".into(),
            ));
        }

        let fg_category = seg
            .categories
            .first()
            .cloned()
            .unwrap_or_else(|| String::from("unknown"));

        let mut builder = PaletteBuilder::new(opts.generate_harmonies);
        let mut palette: Vec<ExtractedColor> = Vec::with_capacity(combined.len());
        let mut partial_emitted = false;

        for (index, (clustered, segment)) in combined.iter().enumerate() {
            let category = match segment {
                Segment::Foreground => fg_category.as_str(),
                Segment::Background => "scene",
            };
            palette.push(builder.build(
                &clustered.color,
                clustered.weight,
                *segment,
                category,
                index + 1,
            ));

            if !partial_emitted && palette.len() == self.config.partial_color_count {
                debug!(count = palette.len(), "emitting partial palette");
                hooks.emit(&palette);
                partial_emitted = true;
            }
        }

        if !partial_emitted {
            hooks.emit(&palette);
        }

        // Stage 5: exports and metadata
        let exports = generate_exports(&palette);
        let elapsed_ms = start.elapsed().as_millis() as u64;
        let metadata = summarize(&palette, &seg, elapsed_ms);

        let (fg_pct, bg_pct) = match seg.mask.as_ref() {
            Some(mask) => (
                mask.foreground_percentage,
                100.0 - mask.foreground_percentage,
            ),
            None => {
                let total = (pixels.foreground.len() + pixels.background.len()) as f64;
                let fg = pixels.foreground.len() as f64 / total * 100.0;
                (fg, 100.0 - fg)
            }
        };

        let now = OffsetDateTime::now_utc();
        let result = ColorPaletteResult {
            id: format!("palette_{}", now.unix_timestamp_nanos() / 1_000_000),
            source_image: SourceImage {
                filename: filename.to_owned(),
                dimensions: Dimensions {
                    width: pixels.width,
                    height: pixels.height,
                },
                processed_at: now.format(&Rfc3339).unwrap_or_default(),
            },
            segments: SegmentsSummary {
                foreground_pct: round2(fg_pct),
                background_pct: round2(bg_pct),
                categories: seg.categories.clone(),
                method: seg.method,
                quality: seg.quality,
            },
            palette,
            exports,
            metadata,
        };

        info!(
            colors = result.palette.len(),
            elapsed_ms,
            diversity = result.metadata.color_diversity,
            "extraction complete"
        );
        Ok(result)
    }

    fn check_cancel(&self, cancel: &CancelToken) -> Result<(), ExtractionError> {
        if cancel.is_cancelled() {
            Err(ExtractionError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[inline]
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
