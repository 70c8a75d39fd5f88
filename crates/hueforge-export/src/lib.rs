//! # Hueforge Export
//!
//! Developer-ready export artifacts for an extracted palette.
//!
//! Every emitter consumes the same uniform [`ColorScale`](scale::ColorScale)
//! model: an 11-step tonal ladder (50–950, 500 = base) stitched from the
//! color's tints and shades. The emitters themselves are plain string
//! builders, so output is deterministic byte-for-byte.
//!
//! Targets: CSS custom properties, SCSS variables, a Tailwind config
//! extension, Figma design tokens, a Swift `Color` extension, a Kotlin
//! Compose object, and a JSON palette mirror.

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod emitters;
pub mod scale;

pub use emitters::{generate_exports, PaletteExports};
pub use scale::{dedupe_names, ColorScale, SCALE_STEPS};
