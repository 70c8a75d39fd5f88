//! # Hueforge Palette
//!
//! Naming and formatting layer for the hueforge extraction engine.
//!
//! This crate turns a clustered color (an sRGB value plus its pixel weight
//! and segment tag) into the externally visible `ExtractedColor` record:
//!
//! 1. **[`names`]**: deterministic heuristic namer over fixed name tables,
//!    with per-extraction anti-collision and intensity prefixes
//! 2. **[`temperature`]**: warm / cool / neutral classification
//! 3. **[`scale`]**: four tints and four shades with adaptive lightness
//!    steps and chroma dampening near the luminance extremes
//! 4. **[`harmony`]**: complementary / analogous / triadic /
//!    split-complementary hue rotations at fixed lightness and chroma
//! 5. **[`extracted`]**: assembly of the full record (formats,
//!    accessibility, scales, harmony, metadata, confidence)
//!
//! Everything here is deterministic; the only state is the explicit
//! [`NameTracker`](names::NameTracker) created once per extraction.

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod extracted;
pub mod harmony;
pub mod names;
pub mod scale;
pub mod temperature;

pub use extracted::{ColorMeta, ColorSource, DerivedColor, ExtractedColor, PaletteBuilder, Segment};
pub use harmony::{build_harmony, HarmonySet};
pub use names::{NameTracker, Namer};
pub use scale::{shades, tints};
pub use temperature::{temperature_of, Temperature};
