//! Clustering stage.
//!
//! Each mask side (foreground, background) is clustered independently:
//! saturation-biased expansion, seeded k-means++ with 4× centroid
//! oversampling, then the pruning ladder (dedup → hue diversity → slice →
//! final cleanup → pool backfill). The two sides never share state, so
//! their results are independent of execution order.

pub mod bias;
mod kmeans;
mod refine;

use hueforge_core::color::Color;
use hueforge_core::space::oklch::Oklab;
use tracing::debug;

use crate::capabilities::CancelToken;
use crate::config::TuningConfig;
use crate::error::ExtractionError;
use crate::pixels::Rgb8;

use bias::biased_oklab;
use refine::{backfill, dedup, enforce_hue_diversity, final_cleanup, Candidate};

/// Bounds for the adaptive palette size.
const MIN_TARGET: usize = 5;
const MAX_TARGET: usize = 15;

/// Caller-requested color counts are clamped to this range.
const MIN_REQUESTED: usize = 3;
const MAX_REQUESTED: usize = 20;

/// Pixels sampled when estimating color variance.
const VARIANCE_SAMPLE_LIMIT: usize = 500;

/// One dominant color with its pixel share.
#[derive(Debug, Clone)]
pub struct ClusteredColor {
    /// Cluster mean rendered to sRGB
    pub color: Color,
    /// `cluster_pixels / side_pixels`, after merge accumulation
    pub weight: f64,
}

/// Output of the clustering stage.
#[derive(Debug, Clone)]
pub struct ClusterOutput {
    /// Dominant foreground colors, weight-descending
    pub foreground: Vec<ClusteredColor>,
    /// Dominant background colors, weight-descending
    pub background: Vec<ClusteredColor>,
}

/// Cluster both pixel sides.
///
/// # Errors
///
/// [`ExtractionError::Cancelled`] when the token trips mid-iteration.
pub fn cluster(
    foreground: &[Rgb8],
    background: &[Rgb8],
    requested: Option<usize>,
    config: &TuningConfig,
    cancel: &CancelToken,
) -> Result<ClusterOutput, ExtractionError> {
    let (fg_count, bg_count) = distribute_counts(foreground, background, requested);
    debug!(fg_count, bg_count, "clustering targets");

    Ok(ClusterOutput {
        foreground: cluster_side(foreground, fg_count, config, cancel)?,
        background: cluster_side(background, bg_count, config, cancel)?,
    })
}

/// Target color count and its fg/bg distribution.
fn distribute_counts(
    foreground: &[Rgb8],
    background: &[Rgb8],
    requested: Option<usize>,
) -> (usize, usize) {
    let target = match requested {
        Some(n) => n.clamp(MIN_REQUESTED, MAX_REQUESTED),
        None => adaptive_target(foreground, background),
    };

    let total = foreground.len() + background.len();
    let fg_share = if total == 0 {
        0.5
    } else {
        foreground.len() as f64 / total as f64
    };

    let fg_count = ((target as f64 * fg_share.max(0.3)).round() as usize).max(2);
    let bg_count = target.saturating_sub(fg_count).max(2);
    (fg_count, bg_count)
}

/// Estimate the palette size from color variance: flat images earn few
/// colors, busy images earn more.
fn adaptive_target(foreground: &[Rgb8], background: &[Rgb8]) -> usize {
    let total = foreground.len() + background.len();
    if total == 0 {
        return MIN_TARGET;
    }

    let step = (total / VARIANCE_SAMPLE_LIMIT).max(1);
    let sample: Vec<Oklab> = foreground
        .iter()
        .chain(background.iter())
        .step_by(step)
        .take(VARIANCE_SAMPLE_LIMIT)
        .map(|rgb| Oklab::from_color(&Color::from_srgb8(rgb[0], rgb[1], rgb[2])))
        .collect();

    let n = sample.len() as f64;
    let mean = sample.iter().fold(Oklab::new(0.0, 0.0, 0.0), |acc, p| {
        Oklab::new(acc.l + p.l / n, acc.a + p.a / n, acc.b + p.b / n)
    });
    let variance = sample.iter().map(|p| p.distance(&mean)).sum::<f64>() / n;

    let raw = if variance < 0.1 {
        5.0 + variance * 30.0
    } else if variance < 0.3 {
        8.0 + (variance - 0.1) * 20.0
    } else {
        12.0 + ((variance - 0.3) * 10.0).min(3.0)
    };

    (raw.round() as usize).clamp(MIN_TARGET, MAX_TARGET)
}

/// The full pruning ladder for one side.
fn cluster_side(
    pixels: &[Rgb8],
    count: usize,
    config: &TuningConfig,
    cancel: &CancelToken,
) -> Result<Vec<ClusteredColor>, ExtractionError> {
    if pixels.is_empty() {
        return Ok(Vec::new());
    }

    let points = biased_oklab(pixels);
    let total = points.len() as f64;

    let clusters = kmeans::kmeans(&points, count * config.oversample_factor, config, cancel)?;

    let candidates: Vec<Candidate> = clusters
        .iter()
        .map(|c| Candidate::new(c.centroid.to_color(), c.size as f64 / total))
        .collect();

    let mut deduped = dedup(candidates, config.dedup_threshold);
    // Merges grow weights, so re-rank before diversity selection
    deduped.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(std::cmp::Ordering::Equal));

    let (diverse, mut pool) = enforce_hue_diversity(deduped, config.min_hue_gap);

    let mut sliced = diverse;
    if sliced.len() > count {
        pool.extend(sliced.split_off(count));
    }

    let mut cleaned = final_cleanup(
        sliced,
        config.dedup_threshold,
        config.final_cleanup_channel_delta,
    );

    backfill(
        &mut cleaned,
        &pool,
        count.min(2),
        config.backfill_distance,
    );

    Ok(cleaned
        .into_iter()
        .map(|c| ClusteredColor {
            color: c.color,
            weight: c.weight,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixels(colors: &[(u8, u8, u8)], copies: usize) -> Vec<Rgb8> {
        colors
            .iter()
            .flat_map(|&(r, g, b)| std::iter::repeat([r, g, b]).take(copies))
            .collect()
    }

    #[test]
    fn test_two_color_image_yields_both() {
        let fg = pixels(&[(220, 30, 30)], 100);
        let bg = pixels(&[(30, 30, 220)], 100);
        let out = cluster(&fg, &bg, Some(4), &TuningConfig::default(), &CancelToken::new())
            .unwrap();

        assert!(!out.foreground.is_empty());
        assert!(!out.background.is_empty());

        let [r, _, _] = out.foreground[0].color.to_srgb8();
        assert!(r > 150, "foreground should be red-dominant");
        let [_, _, b] = out.background[0].color.to_srgb8();
        assert!(b > 150, "background should be blue-dominant");
    }

    #[test]
    fn test_weights_sum_at_most_one_per_side() {
        let fg = pixels(&[(220, 30, 30), (30, 220, 30), (240, 240, 30)], 60);
        let out = cluster(&fg, &[], Some(6), &TuningConfig::default(), &CancelToken::new())
            .unwrap();
        let sum: f64 = out.foreground.iter().map(|c| c.weight).sum();
        assert!(sum <= 1.0 + 1e-9, "weights sum {sum}");
    }

    #[test]
    fn test_weights_descending() {
        let fg = pixels(&[(220, 30, 30), (30, 220, 30)], 80);
        let out = cluster(&fg, &[], Some(4), &TuningConfig::default(), &CancelToken::new())
            .unwrap();
        for pair in out.foreground.windows(2) {
            assert!(pair[0].weight >= pair[1].weight - 1e-9);
        }
    }

    #[test]
    fn test_adaptive_count_grows_with_variance() {
        let flat = pixels(&[(100, 100, 100)], 300);
        let busy = pixels(
            &[
                (255, 0, 0),
                (0, 255, 0),
                (0, 0, 255),
                (255, 255, 0),
                (0, 255, 255),
                (255, 0, 255),
                (20, 20, 20),
                (230, 230, 230),
            ],
            40,
        );
        let flat_target = adaptive_target(&flat, &[]);
        let busy_target = adaptive_target(&busy, &[]);
        assert!(flat_target <= busy_target);
        assert!(flat_target >= MIN_TARGET);
        assert!(busy_target <= MAX_TARGET);
    }

    #[test]
    fn test_distribution_minimums() {
        let fg = pixels(&[(200, 0, 0)], 10);
        let bg = pixels(&[(0, 0, 200)], 990);
        // Tiny foreground still gets at least 30% of the budget and ≥ 2
        let (fg_count, bg_count) = distribute_counts(&fg, &bg, Some(10));
        assert!(fg_count >= 2);
        assert!(bg_count >= 2);
        assert!(fg_count >= 3, "30% floor of 10 → 3, got {fg_count}");
    }

    #[test]
    fn test_deterministic() {
        let fg = pixels(&[(220, 30, 30), (30, 220, 30), (30, 30, 220)], 50);
        let config = TuningConfig::default();
        let a = cluster(&fg, &[], None, &config, &CancelToken::new()).unwrap();
        let b = cluster(&fg, &[], None, &config, &CancelToken::new()).unwrap();
        assert_eq!(a.foreground.len(), b.foreground.len());
        for (x, y) in a.foreground.iter().zip(b.foreground.iter()) {
            assert_eq!(x.color.to_srgb8(), y.color.to_srgb8());
            assert_eq!(x.weight.to_bits(), y.weight.to_bits());
        }
    }

    #[test]
    fn test_empty_side_is_empty() {
        let fg = pixels(&[(220, 30, 30)], 50);
        let out = cluster(&fg, &[], Some(4), &TuningConfig::default(), &CancelToken::new())
            .unwrap();
        assert!(out.background.is_empty());
    }
}
