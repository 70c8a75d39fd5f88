//! Segmentation adapter.
//!
//! Calls the [`SegmentationProvider`] capability, classifies every
//! panoptic segment through the [`rules`] ladder, composites a binary
//! foreground mask (uncertain segments composite as foreground), scores
//! mask quality, and collects semantic scene categories. This stage never
//! fails: every failure path degrades to the luminance fallback.

pub mod rules;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::capabilities::{ImageDecoder, SegmentOut, SegmentationProvider};
use crate::config::TuningConfig;
use crate::error::CapabilityError;

pub use rules::{classify, RuleCtx, Verdict};

/// Mask binarization threshold: a mask pixel above this is foreground.
pub const MASK_THRESHOLD: u8 = 128;

/// How the mask (or its absence) was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentationMethod {
    /// Mask composited from panoptic segments
    Panoptic,
    /// Categories only (no mask contribution)
    Semantic,
    /// No usable mask; pixel stage decides by salience
    FallbackLuminance,
}

/// Coarse mask quality bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskQuality {
    /// Foreground coverage in a healthy range
    High,
    /// Usable but skewed coverage
    Medium,
    /// Degenerate coverage or fallback
    Low,
}

/// Composited binary foreground mask.
#[derive(Debug, Clone)]
pub struct ForegroundMask {
    /// Single-channel raster; a byte > 128 is foreground
    pub bytes: Vec<u8>,
    /// Mask width in pixels
    pub width: u32,
    /// Mask height in pixels
    pub height: u32,
    /// Percentage of foreground pixels, 0–100
    pub foreground_percentage: f64,
}

/// Result of the segmentation stage.
#[derive(Debug, Clone)]
pub struct SegmentationResult {
    /// Composited mask, absent when nothing was classified foreground
    pub mask: Option<ForegroundMask>,
    /// How the mask was produced
    pub method: SegmentationMethod,
    /// Coarse quality bucket
    pub quality: MaskQuality,
    /// Whether the luminance fallback was taken
    pub used_fallback: bool,
    /// Stage confidence in [0, 1]
    pub confidence: f64,
    /// Scene categories from the semantic model (may be empty)
    pub categories: Vec<String>,
}

impl SegmentationResult {
    fn fallback(confidence: f64, categories: Vec<String>) -> Self {
        Self {
            mask: None,
            method: SegmentationMethod::FallbackLuminance,
            quality: if confidence >= 0.5 {
                MaskQuality::Medium
            } else {
                MaskQuality::Low
            },
            used_fallback: true,
            confidence,
            categories,
        }
    }
}

/// Maximum categories reported from the semantic model.
const MAX_CATEGORIES: usize = 10;

/// The segmentation adapter. Borrows its capabilities; owns nothing.
pub struct SegmentationAdapter<'a> {
    provider: &'a dyn SegmentationProvider,
    decoder: &'a dyn ImageDecoder,
    config: &'a TuningConfig,
}

impl std::fmt::Debug for SegmentationAdapter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SegmentationAdapter").finish_non_exhaustive()
    }
}

impl<'a> SegmentationAdapter<'a> {
    /// New adapter over the given capabilities.
    #[must_use]
    pub fn new(
        provider: &'a dyn SegmentationProvider,
        decoder: &'a dyn ImageDecoder,
        config: &'a TuningConfig,
    ) -> Self {
        Self {
            provider,
            decoder,
            config,
        }
    }

    /// Run segmentation for an image. Infallible: failures degrade to the
    /// luminance fallback.
    #[must_use]
    pub fn segment(&self, image: &[u8]) -> SegmentationResult {
        let categories = self.semantic_categories(image);

        let segments = match self.panoptic_with_retry(image) {
            Ok(segments) => segments,
            Err(err) => {
                warn!(error = %err, "panoptic segmentation unavailable, using luminance fallback");
                return SegmentationResult::fallback(0.4, categories);
            }
        };

        let (width, height) = match self.decoder.metadata(image) {
            Ok(meta) => (meta.width, meta.height),
            Err(err) => {
                warn!(error = %err, "image metadata unavailable, using luminance fallback");
                return SegmentationResult::fallback(0.4, categories);
            }
        };

        self.composite(&segments, width, height, categories)
    }

    /// One call, one retry after a short wait.
    fn panoptic_with_retry(&self, image: &[u8]) -> Result<Vec<SegmentOut>, CapabilityError> {
        match self.provider.panoptic(image) {
            Ok(segments) => Ok(segments),
            Err(first) => {
                debug!(error = %first, "panoptic call failed, retrying once");
                std::thread::sleep(std::time::Duration::from_millis(
                    self.config.panoptic_retry_delay_ms,
                ));
                self.provider.panoptic(image)
            }
        }
    }

    /// Classify segments, OR-merge foreground/uncertain masks, score quality.
    fn composite(
        &self,
        segments: &[SegmentOut],
        width: u32,
        height: u32,
        categories: Vec<String>,
    ) -> SegmentationResult {
        let total = segments.len();
        let mean_score = if total == 0 {
            0.0
        } else {
            segments.iter().map(|s| s.score).sum::<f64>() / total as f64
        };

        // Rank by descending score for the top-3 fallback rule
        let mut ranked: Vec<usize> = (0..total).collect();
        ranked.sort_by(|&a, &b| {
            segments[b]
                .score
                .partial_cmp(&segments[a].score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let mut rank_of = vec![0usize; total];
        for (rank, &idx) in ranked.iter().enumerate() {
            rank_of[idx] = rank;
        }

        let size = (width as usize) * (height as usize);
        let mut composite = vec![0u8; size];
        let mut merged = 0usize;

        for (idx, segment) in segments.iter().enumerate() {
            let label = segment.label.to_lowercase();
            let ctx = RuleCtx {
                label: &label,
                score: segment.score,
                mean_score,
                rank: rank_of[idx],
                total,
            };
            let (verdict, rule) = classify(&ctx);
            debug!(label = %segment.label, score = segment.score, rule, ?verdict, "classified segment");

            if verdict == Verdict::Background {
                continue;
            }

            let Some(mask_png) = segment.mask.as_deref() else {
                continue;
            };

            match self.decoder.greyscale_resize(mask_png, width, height) {
                Ok(resized) if resized.len() == size => {
                    for (dst, src) in composite.iter_mut().zip(resized.iter()) {
                        if *src > MASK_THRESHOLD {
                            *dst = 255;
                        }
                    }
                    merged += 1;
                }
                Ok(_) => {
                    warn!(label = %segment.label, "segment mask has wrong dimensions, skipped");
                }
                Err(err) => {
                    // Recoverable mask_decode: the other segments still count
                    warn!(label = %segment.label, error = %err, "segment mask decode failed, skipped");
                }
            }
        }

        if merged == 0 {
            debug!("no foreground segments merged, luminance fallback");
            return SegmentationResult::fallback(0.5, categories);
        }

        let fg_count = composite.iter().filter(|&&b| b > MASK_THRESHOLD).count();
        let fg_pct = fg_count as f64 / size as f64 * 100.0;
        let (quality, confidence) = quality_for(fg_pct);

        SegmentationResult {
            mask: Some(ForegroundMask {
                bytes: composite,
                width,
                height,
                foreground_percentage: fg_pct,
            }),
            method: SegmentationMethod::Panoptic,
            quality,
            used_fallback: false,
            confidence,
            categories,
        }
    }

    /// Semantic labels over the image resized to fit 640; never fatal.
    fn semantic_categories(&self, image: &[u8]) -> Vec<String> {
        let resized = match self.decoder.resize_fit(image, self.config.semantic_fit) {
            Ok(resized) => resized,
            Err(err) => {
                debug!(error = %err, "resize for semantic call failed");
                return Vec::new();
            }
        };

        match self.provider.semantic(&resized) {
            Ok(segments) => {
                let mut seen = std::collections::HashSet::new();
                segments
                    .into_iter()
                    .filter(|s| seen.insert(s.label.to_lowercase()))
                    .map(|s| s.label)
                    .take(MAX_CATEGORIES)
                    .collect()
            }
            Err(err) => {
                debug!(error = %err, "semantic segmentation failed");
                Vec::new()
            }
        }
    }
}

/// Quality bucket and confidence from foreground coverage percentage.
fn quality_for(fg_pct: f64) -> (MaskQuality, f64) {
    if (5.0..=70.0).contains(&fg_pct) {
        (MaskQuality::High, 0.9)
    } else if (1.0..5.0).contains(&fg_pct) {
        (MaskQuality::Medium, 0.75)
    } else if fg_pct > 70.0 && fg_pct <= 90.0 {
        (MaskQuality::Medium, 0.8)
    } else {
        (MaskQuality::Low, 0.6)
    }
}
