//! Capability traits for external collaborators.
//!
//! The engine consumes two capabilities and is agnostic to how they are
//! implemented: a [`SegmentationProvider`] (two remote vision models in
//! production, a stub in tests) and an [`ImageDecoder`]. Both may block
//! for seconds; the engine calls them only from the adapter layer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::CapabilityError;

/// Encoded PNG bytes.
pub type PngBytes = Vec<u8>;

/// One segment returned by a segmentation model.
#[derive(Debug, Clone)]
pub struct SegmentOut {
    /// Model label, e.g. `"person"`, `"sky"`
    pub label: String,
    /// Model confidence in [0, 1]
    pub score: f64,
    /// Binary mask for the segment, if the model produced one
    pub mask: Option<PngBytes>,
}

/// Segmentation capability: a panoptic segmenter for masks and a semantic
/// segmenter for scene categories.
pub trait SegmentationProvider {
    /// Ordered list of labeled segments with masks.
    ///
    /// # Errors
    ///
    /// [`CapabilityError::Unavailable`] on transport or model failure; the
    /// adapter retries once and then falls back.
    fn panoptic(&self, image: &[u8]) -> Result<Vec<SegmentOut>, CapabilityError>;

    /// Scene category labels (masks are ignored).
    ///
    /// # Errors
    ///
    /// Failures are non-fatal: the adapter yields empty categories.
    fn semantic(&self, image: &[u8]) -> Result<Vec<SegmentOut>, CapabilityError>;
}

/// A decoded raster.
#[derive(Debug, Clone)]
pub struct RawImage {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Interleaved channels per pixel (3 = RGB, 4 = RGBA)
    pub channels: u8,
    /// Row-major interleaved channel data
    pub data: Vec<u8>,
}

/// Image header information without a full decode.
#[derive(Debug, Clone)]
pub struct ImageMeta {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Container format label, e.g. `"png"`
    pub format: String,
}

/// Decoding capability.
pub trait ImageDecoder {
    /// Decode to a raw interleaved pixel buffer.
    ///
    /// # Errors
    ///
    /// [`CapabilityError::Decode`] on malformed input; surfaces as
    /// `InvalidImage`.
    fn decode_raw(&self, bytes: &[u8]) -> Result<RawImage, CapabilityError>;

    /// Decode a (mask) image, resize to `width × height` by fill, and
    /// return a single-channel greyscale buffer.
    ///
    /// # Errors
    ///
    /// [`CapabilityError::Decode`] on malformed input.
    fn greyscale_resize(
        &self,
        png: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, CapabilityError>;

    /// Encode a single-channel greyscale buffer as PNG.
    ///
    /// # Errors
    ///
    /// [`CapabilityError::Decode`] when the buffer does not match the
    /// dimensions.
    fn encode_png_gray(
        &self,
        buf: &[u8],
        width: u32,
        height: u32,
    ) -> Result<PngBytes, CapabilityError>;

    /// Header metadata without a full decode.
    ///
    /// # Errors
    ///
    /// [`CapabilityError::Decode`] on malformed input.
    fn metadata(&self, bytes: &[u8]) -> Result<ImageMeta, CapabilityError>;

    /// Resize a color image to fit inside `max_dim × max_dim`, preserving
    /// aspect ratio, and re-encode.
    ///
    /// # Errors
    ///
    /// [`CapabilityError::Decode`] on malformed input.
    fn resize_fit(&self, bytes: &[u8], max_dim: u32) -> Result<PngBytes, CapabilityError>;
}

/// Cooperative cancellation token.
///
/// Checked between pipeline stages and inside Lloyd iterations. Cloning
/// shares the underlying flag.
///
/// # Examples
///
/// ```
/// use hueforge_engine::capabilities::CancelToken;
///
/// let token = CancelToken::new();
/// let shared = token.clone();
/// assert!(!token.is_cancelled());
/// shared.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Fresh, untripped token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Trip the token. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Whether the token has been tripped.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_token_shared() {
        let token = CancelToken::new();
        let clone = token.clone();
        clone.cancel();
        assert!(token.is_cancelled());
        assert!(clone.is_cancelled());
    }
}
