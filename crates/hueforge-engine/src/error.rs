//! Error taxonomy.
//!
//! Recoverable kinds (`SegmentationUnavailable`, `MaskDecode`) are handled
//! inside their stage and never escape [`extract`](crate::extract); they
//! exist in the enum so logs and tests can speak the same taxonomy. Fatal
//! kinds surface as a single `ExtractionError`.

use thiserror::Error;

/// Errors surfaced by capability implementations.
#[derive(Debug, Clone, Error)]
pub enum CapabilityError {
    /// The remote capability could not be reached or answered abnormally.
    #[error("capability unavailable: {0}")]
    Unavailable(String),
    /// Input bytes could not be decoded.
    #[error("decode failed: {0}")]
    Decode(String),
}

/// The extraction error taxonomy.
#[derive(Debug, Clone, Error)]
pub enum ExtractionError {
    /// The input image could not be decoded. Fatal.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// The pixel stage produced zero usable pixels. Fatal.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// The segmentation provider stayed unavailable after one retry.
    /// Recovered in-stage via the luminance fallback; never surfaces.
    #[error("segmentation unavailable: {0}")]
    SegmentationUnavailable(String),

    /// One segment's mask could not be decoded. Recovered in-stage by
    /// skipping the segment; never surfaces.
    #[error("mask decode failed: {0}")]
    MaskDecode(String),

    /// The cancellation token tripped. Fatal; no partials were emitted.
    #[error("extraction cancelled")]
    Cancelled,

    /// A bug: an invariant the pipeline relies on did not hold. Fatal.
    #[error("internal invariant violated: {0}")]
    InternalInvariant(String),
}

impl ExtractionError {
    /// Stable snake_case kind label for logs and wire mapping.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidImage(_) => "invalid_image",
            Self::EmptyInput(_) => "empty_input",
            Self::SegmentationUnavailable(_) => "segmentation_unavailable",
            Self::MaskDecode(_) => "mask_decode",
            Self::Cancelled => "cancelled",
            Self::InternalInvariant(_) => "internal_invariant",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(
            ExtractionError::EmptyInput("x".into()).kind(),
            "empty_input"
        );
        assert_eq!(ExtractionError::Cancelled.kind(), "cancelled");
    }

    #[test]
    fn test_display_carries_context() {
        let err = ExtractionError::InvalidImage("truncated header".into());
        assert_eq!(err.to_string(), "invalid image: truncated header");
    }
}
