//! # Hueforge Core
//!
//! Canonical color foundation for the hueforge palette extraction engine.
//!
//! ## Design Principles
//!
//! 1. **Deterministic** - Pure functions, no randomness, no I/O
//! 2. **Round-trip safe** - sRGB ↔ OKLab ↔ OKLCh round-trips within ±1 per
//!    8-bit channel
//! 3. **Explicit precision** - All intermediate math is `f64`; display
//!    rounding happens only in the format builders
//! 4. **Testable** - Golden vectors and property-based tests
//!
//! ## Architecture
//!
//! - **[`color`]**: The `Color` type (sRGB + linear) and gamma transfer
//! - **[`space`]**: Color space transformations (OKLab/OKLCh, HSL/HSB,
//!   CMYK, CIE L\*a\*b\*/LCh)
//! - **[`luminance`]**: WCAG relative luminance
//! - **[`formats`]**: The eight-format display record with canonical CSS
//!   strings
//!
//! ## Quick Start
//!
//! ```rust
//! use hueforge_core::color::Color;
//! use hueforge_core::space::oklch::Oklch;
//!
//! let red = Color::from_srgb8(255, 0, 0);
//! let oklch = Oklch::from_color(&red);
//!
//! // Rotate hue 180° for the complementary color
//! let cyan = oklch.rotate_hue(180.0).to_color();
//! let [r, g, b] = cyan.to_srgb8();
//! assert!(g > r && b > r);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod color;
pub mod formats;
pub mod luminance;
pub mod space;

// ============================================================================
// Core Type Re-exports
// ============================================================================

pub use color::Color;
pub use formats::{build_color_formats, ColorFormats};
pub use luminance::relative_luminance;
pub use space::cielab::{CieLab, CieLch};
pub use space::cmyk::Cmyk;
pub use space::hsl::{Hsb, Hsl};
pub use space::oklch::{Oklab, Oklch};

/// sRGB gamma correction functions.
///
/// Provides the standard sRGB transfer functions for converting between
/// gamma-corrected sRGB and linear RGB values.
///
/// # Example
///
/// ```rust
/// use hueforge_core::gamma::{linear_to_srgb, srgb_to_linear};
///
/// let srgb = 0.5; // Mid gray in sRGB
/// let linear = srgb_to_linear(srgb);
/// assert!((linear - 0.214).abs() < 0.01); // NOT 0.5 in linear!
/// let back = linear_to_srgb(linear);
/// assert!((back - srgb).abs() < 0.0001);
/// ```
pub mod gamma {
    //! sRGB gamma correction transfer functions.

    pub use crate::color::gamma::{linear_to_srgb, srgb_to_linear};
}
