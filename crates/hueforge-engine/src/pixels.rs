//! Deterministic pixel extraction.
//!
//! Samples the raster at a fixed stride, gates out near-black and
//! near-white pixels, tags each kept pixel foreground/background through
//! the mask, and falls back to a salience split when the mask yields a
//! degenerate partition. No randomness anywhere: identical input bytes
//! produce the identical sample.

use tracing::{debug, warn};

use crate::capabilities::ImageDecoder;
use crate::config::TuningConfig;
use crate::error::ExtractionError;
use crate::segmentation::{SegmentationResult, MASK_THRESHOLD};

/// An 8-bit RGB sample.
pub type Rgb8 = [u8; 3];

/// Output of the pixel stage.
#[derive(Debug, Clone)]
pub struct PixelSample {
    /// Pixels tagged foreground
    pub foreground: Vec<Rgb8>,
    /// Pixels tagged background
    pub background: Vec<Rgb8>,
    /// Decoded image width
    pub width: u32,
    /// Decoded image height
    pub height: u32,
    /// Whether the salience split replaced the mask partition
    pub salience_split: bool,
}

/// Extract and split pixels for one image.
///
/// # Errors
///
/// - [`ExtractionError::InvalidImage`] when decoding fails
/// - [`ExtractionError::EmptyInput`] when no pixel survives the
///   brightness gate
pub fn extract_pixels(
    decoder: &dyn ImageDecoder,
    image: &[u8],
    seg: &SegmentationResult,
    config: &TuningConfig,
) -> Result<PixelSample, ExtractionError> {
    let raw = decoder
        .decode_raw(image)
        .map_err(|e| ExtractionError::InvalidImage(e.to_string()))?;

    let channels = raw.channels as usize;
    if channels < 3 {
        return Err(ExtractionError::InvalidImage(format!(
            "expected at least 3 channels, got {channels}"
        )));
    }

    let total = (raw.width as usize) * (raw.height as usize);
    if total == 0 || raw.data.len() < total * channels {
        return Err(ExtractionError::InvalidImage(
            "pixel buffer shorter than declared dimensions".into(),
        ));
    }

    // Resize the composited mask to the decoded dimensions when they differ.
    let mask = match seg.mask.as_ref() {
        Some(mask) if mask.width == raw.width && mask.height == raw.height => {
            Some(mask.bytes.clone())
        }
        Some(mask) => resample_mask(decoder, mask, raw.width, raw.height),
        None => None,
    };

    let sample_rate = (total / config.max_samples).max(1);
    let mut kept: Vec<(Rgb8, bool)> = Vec::with_capacity(total / sample_rate + 1);

    for i in (0..total).step_by(sample_rate) {
        let offset = i * channels;
        let rgb = [raw.data[offset], raw.data[offset + 1], raw.data[offset + 2]];
        let brightness =
            (f64::from(rgb[0]) + f64::from(rgb[1]) + f64::from(rgb[2])) / 3.0;
        if brightness <= config.min_brightness || brightness >= config.max_brightness {
            continue;
        }

        let is_foreground = mask.as_ref().map_or(true, |m| m[i] > MASK_THRESHOLD);
        kept.push((rgb, is_foreground));
    }

    if kept.is_empty() {
        return Err(ExtractionError::EmptyInput(
            "every sampled pixel fell outside the brightness gate".into(),
        ));
    }

    let mut foreground: Vec<Rgb8> = Vec::new();
    let mut background: Vec<Rgb8> = Vec::new();
    for (rgb, is_fg) in &kept {
        if *is_fg {
            foreground.push(*rgb);
        } else {
            background.push(*rgb);
        }
    }

    let degenerate = foreground.is_empty()
        || background.is_empty()
        || (foreground.len() as f64) < config.min_foreground_share * kept.len() as f64;

    let salience_split = if degenerate {
        debug!(
            fg = foreground.len(),
            bg = background.len(),
            "mask partition degenerate, using salience split"
        );
        let (fg, bg) = salience_partition(&kept, config.salience_foreground_share);
        foreground = fg;
        background = bg;
        true
    } else {
        false
    };

    debug!(
        sampled = kept.len(),
        fg = foreground.len(),
        bg = background.len(),
        sample_rate,
        "pixel extraction complete"
    );

    Ok(PixelSample {
        foreground,
        background,
        width: raw.width,
        height: raw.height,
        salience_split,
    })
}

/// Round-trip the mask through the decoder to resize it by fill.
fn resample_mask(
    decoder: &dyn ImageDecoder,
    mask: &crate::segmentation::ForegroundMask,
    width: u32,
    height: u32,
) -> Option<Vec<u8>> {
    let png = decoder
        .encode_png_gray(&mask.bytes, mask.width, mask.height)
        .map_err(|e| warn!(error = %e, "mask re-encode failed"))
        .ok()?;
    decoder
        .greyscale_resize(&png, width, height)
        .map_err(|e| warn!(error = %e, "mask resize failed"))
        .ok()
        .filter(|buf| buf.len() == (width as usize) * (height as usize))
}

/// Salience score split: `0.7·saturation + 0.3·|luma − 128|/255`, top
/// share by score becomes foreground. Stable ordering (score desc, then
/// original index) keeps the split deterministic.
fn salience_partition(kept: &[(Rgb8, bool)], fg_share: f64) -> (Vec<Rgb8>, Vec<Rgb8>) {
    let mut scored: Vec<(f64, usize)> = kept
        .iter()
        .enumerate()
        .map(|(idx, (rgb, _))| (salience_score(rgb), idx))
        .collect();

    scored.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.1.cmp(&b.1))
    });

    let fg_count = ((kept.len() as f64 * fg_share).round() as usize)
        .max(1)
        .min(kept.len());

    let mut foreground = Vec::with_capacity(fg_count);
    let mut background = Vec::with_capacity(kept.len() - fg_count);
    for (rank, &(_, idx)) in scored.iter().enumerate() {
        if rank < fg_count {
            foreground.push(kept[idx].0);
        } else {
            background.push(kept[idx].0);
        }
    }

    (foreground, background)
}

fn salience_score(rgb: &Rgb8) -> f64 {
    let r = f64::from(rgb[0]);
    let g = f64::from(rgb[1]);
    let b = f64::from(rgb[2]);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let saturation = if max > 0.0 { (max - min) / max } else { 0.0 };

    let luma = 0.299 * r + 0.587 * g + 0.114 * b;
    0.7 * saturation + 0.3 * (luma - 128.0).abs() / 255.0
}
