//! # Hueforge Engine
//!
//! The five-stage palette extraction pipeline:
//!
//! 1. **[`segmentation`]**: calls the [`SegmentationProvider`] capability,
//!    classifies segment labels through a priority rule ladder, composites
//!    a binary foreground mask and scores its quality
//! 2. **[`pixels`]**: deterministic raster sampling with brightness gating
//!    and mask tagging, plus the salience fallback split
//! 3. **[`cluster`]**: saturation-biased, seeded k-means++ in OKLab with
//!    perceptual deduplication, hue-diversity enforcement and pool backfill
//! 4. formatting via `hueforge-palette` (naming, scales, harmonies)
//! 5. export synthesis via `hueforge-export`
//!
//! [`Extractor::extract`](extract::Extractor::extract) sequences the
//! stages, emits a partial palette through the optional hook, honors the
//! cancellation token, and scores the result into extraction metadata.
//!
//! ## Determinism
//!
//! Given identical image bytes, provider outputs, and options, the palette
//! and every export artifact are byte-identical across runs. The only
//! wall-clock dependent fields are `processing_time_ms`, the result `id`,
//! and `processed_at`.
//!
//! ## Capabilities
//!
//! The engine performs no I/O of its own: image decoding and segmentation
//! are behind the [`ImageDecoder`] and [`SegmentationProvider`] traits,
//! which external collaborators implement. Both calls may block for
//! seconds; callers needing task-based concurrency wrap `extract` in a
//! blocking-task adapter.

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod capabilities;
pub mod cluster;
pub mod config;
pub mod error;
pub mod extract;
pub mod metadata;
pub mod pixels;
pub mod rng;
pub mod segmentation;

pub use capabilities::{
    CancelToken, ImageDecoder, ImageMeta, PngBytes, RawImage, SegmentOut, SegmentationProvider,
};
pub use cluster::{ClusterOutput, ClusteredColor};
pub use config::TuningConfig;
pub use error::{CapabilityError, ExtractionError};
pub use extract::{
    ColorPaletteResult, Dimensions, ExtractHooks, ExtractOptions, Extractor, SegmentsSummary,
    SourceImage,
};
pub use metadata::ExtractionMetadata;
pub use pixels::PixelSample;
pub use segmentation::{
    ForegroundMask, MaskQuality, SegmentationAdapter, SegmentationMethod, SegmentationResult,
};
