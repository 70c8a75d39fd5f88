//! Tuning configuration.
//!
//! Every named constant of the pipeline lives here so deployments can
//! tune behavior without code changes. The defaults are the production
//! values; tests occasionally shrink the sampling limits.

/// Pipeline tuning knobs, with production defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct TuningConfig {
    /// Maximum pixels sampled from the raster.
    pub max_samples: usize,
    /// Pixels at or below this mean brightness are dropped.
    pub min_brightness: f64,
    /// Pixels at or above this mean brightness are dropped.
    pub max_brightness: f64,
    /// Palette length at which the partial hook fires.
    pub partial_color_count: usize,
    /// Base perceptual deduplication threshold.
    pub dedup_threshold: f64,
    /// Minimum hue gap between accepted chromatic colors, degrees.
    pub min_hue_gap: f64,
    /// Minimum distance for pool backfill candidates.
    pub backfill_distance: f64,
    /// Channel delta for the stricter final cleanup pass.
    pub final_cleanup_channel_delta: f64,
    /// Lloyd convergence threshold per OKLab component.
    pub kmeans_epsilon: f64,
    /// Lloyd iteration cap.
    pub kmeans_max_iterations: usize,
    /// Centroid oversampling factor before pruning.
    pub oversample_factor: usize,
    /// Share of pixels the salience fallback marks as foreground.
    pub salience_foreground_share: f64,
    /// Below this share of foreground pixels the salience fallback kicks in.
    pub min_foreground_share: f64,
    /// The semantic call receives the image resized to fit inside this.
    pub semantic_fit: u32,
    /// Wait before the single panoptic retry, milliseconds.
    pub panoptic_retry_delay_ms: u64,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            max_samples: 5000,
            min_brightness: 15.0,
            max_brightness: 240.0,
            partial_color_count: 5,
            dedup_threshold: 0.35,
            min_hue_gap: 35.0,
            backfill_distance: 0.4,
            final_cleanup_channel_delta: 12.0,
            kmeans_epsilon: 1e-4,
            kmeans_max_iterations: 100,
            oversample_factor: 4,
            salience_foreground_share: 0.3,
            min_foreground_share: 0.05,
            semantic_fit: 640,
            panoptic_retry_delay_ms: 250,
        }
    }
}
