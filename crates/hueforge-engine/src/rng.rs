//! Seeded pseudo-randomness for deterministic clustering.
//!
//! A plain 32-bit LCG (Numerical Recipes constants) seeded from a content
//! hash of the pixel data, so identical input pixels always produce the
//! identical centroid seeding sequence. Isolated here so tests can
//! substitute a known stream.

use hueforge_core::space::oklch::Oklab;

const LCG_MULTIPLIER: u32 = 1_664_525;
const LCG_INCREMENT: u32 = 1_013_904_223;

/// Up to this many pixels feed the content hash.
const HASH_SAMPLE_LIMIT: usize = 100;

/// Deterministic 32-bit linear congruential generator.
#[derive(Debug, Clone)]
pub struct SeededLcg {
    state: u32,
}

impl SeededLcg {
    /// Generator seeded with an explicit state.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next value in [0, 1).
    ///
    /// `state = state · 1664525 + 1013904223 (mod 2³²)`, then
    /// `state / 2³²`.
    pub fn next(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        f64::from(self.state) / 4_294_967_296.0
    }

    /// Next integer in `[lo, hi)`.
    pub fn next_int(&mut self, lo: usize, hi: usize) -> usize {
        debug_assert!(lo < hi);
        lo + (self.next() * (hi - lo) as f64) as usize
    }
}

/// Rolling 32-bit content hash over up to 100 evenly spaced points.
///
/// Each point contributes its 8-bit sRGB rendering (rounded from the
/// linear values) channel by channel:
/// `h = (h << 5) − h + x`, i.e. `h·31 + x`, wrapping.
#[must_use]
pub fn content_hash(points: &[Oklab]) -> u32 {
    if points.is_empty() {
        return 0;
    }

    let step = (points.len() / HASH_SAMPLE_LIMIT).max(1);
    let mut h: u32 = 0;

    for point in points.iter().step_by(step).take(HASH_SAMPLE_LIMIT) {
        let [r, g, b] = point.to_color().to_srgb8();
        for x in [r, g, b] {
            h = h.wrapping_shl(5).wrapping_sub(h).wrapping_add(u32::from(x));
        }
    }

    h
}
