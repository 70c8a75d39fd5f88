//! # Hueforge Metrics
//!
//! Accessibility metrics and reference color tables for the hueforge
//! palette extraction engine.
//!
//! - **[`wcag`]**: WCAG 2.x contrast ratio with pass flags at the 3 / 4.5 / 7
//!   thresholds, plus text color suggestion
//! - **[`lum_delta`]**: the simplified luminance-delta contrast score
//!   (`round(|Y_text − Y_bg| · 100)`)
//! - **[`pantone`]**: fixed 28-entry Pantone reference table with sRGB
//!   nearest-neighbor lookup
//! - **[`css_named`]**: CSS named-color table with nearest-neighbor lookup
//!
//! All functions are pure and deterministic.

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod css_named;
pub mod lum_delta;
pub mod pantone;
pub mod wcag;

pub use css_named::nearest_css_color;
pub use lum_delta::luminance_delta;
pub use pantone::nearest_pantone;
pub use wcag::{contrast_ratio, suggested_text_color, Accessibility, ContrastCheck};
