//! Heuristic palette-indexed color namer.
//!
//! Classification ladder: achromatic colors name from the Neutral palette,
//! desaturated warm hues from Earth, everything else from the hue-family
//! palette covering its HSL hue. Within a palette, the tone bucket and a
//! deterministic seed pick the name; collisions advance linearly through
//! the bucket and finally fall back to a numeric suffix, so palette names
//! are always unique.

pub mod tables;
pub mod tracker;

pub use tables::{palette_for_hue, NamePalette, Tone, EARTH, HUE_PALETTES, NEUTRAL};
pub use tracker::NameTracker;

use hueforge_core::space::hsl::Hsl;

/// The intensity descriptors the namer may prefix.
pub const DESCRIPTORS: [&str; 8] = [
    "Soft", "Deep", "Muted", "Vivid", "Bright", "Rich", "Luminous", "Dusky",
];

/// Descriptor pairs that must not combine: `(prefix, conflicting words in
/// the base name)`.
const CONFLICTS: [(&str, &[&str]); 8] = [
    ("Vivid", &["muted", "soft", "dusky", "pale"]),
    ("Bright", &["muted", "dusky", "deep", "dark"]),
    ("Deep", &["bright", "luminous", "pale", "light"]),
    ("Muted", &["vivid", "bright", "luminous", "hot"]),
    ("Soft", &["vivid", "bright", "hot"]),
    ("Rich", &[]),
    ("Luminous", &["deep", "muted", "dusky", "dark"]),
    ("Dusky", &["vivid", "bright", "luminous"]),
];

/// Deterministic heuristic namer.
///
/// Stateless; all bookkeeping lives in the [`NameTracker`] threaded in by
/// the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct Namer;

impl Namer {
    /// Name a color from its HSL coordinates.
    ///
    /// The returned name is unique for the given tracker and is recorded
    /// in it before returning.
    ///
    /// # Examples
    ///
    /// ```
    /// use hueforge_core::color::Color;
    /// use hueforge_core::space::hsl::Hsl;
    /// use hueforge_palette::names::{Namer, NameTracker};
    ///
    /// let mut tracker = NameTracker::new();
    /// let red = Hsl::from_color(&Color::from_srgb8(220, 40, 50));
    /// let first = Namer::name(&red, &mut tracker);
    /// let second = Namer::name(&red, &mut tracker);
    /// assert_ne!(first, second);
    /// ```
    #[must_use]
    pub fn name(hsl: &Hsl, tracker: &mut NameTracker) -> String {
        let (palette, tone) = Self::classify(hsl);
        let base = Self::pick_base(palette, tone, hsl, tracker);

        let name = match Self::intensity_prefix(hsl.s, hsl.l, tone) {
            Some(prefix) if Self::prefix_allowed(prefix, &base, tracker) => {
                let candidate = format!("{prefix} {base}");
                if tracker.is_used(&candidate) {
                    base
                } else {
                    tracker.mark_descriptor(prefix);
                    candidate
                }
            }
            _ => base,
        };

        tracker.mark_used(&name);
        name
    }

    /// Palette and tone classification, in ladder order.
    fn classify(hsl: &Hsl) -> (&'static NamePalette, Tone) {
        let (h, s, l) = (hsl.h, hsl.s, hsl.l);

        let palette = if s <= 12.0 || (s <= 18.0 && (l <= 25.0 || l >= 85.0)) {
            &NEUTRAL
        } else if (10.0..=45.0).contains(&s) && (20.0..=70.0).contains(&h) {
            &EARTH
        } else {
            palette_for_hue(h)
        };

        let dark_cut = if s > 60.0 { 40.0 } else { 35.0 };
        let light_cut = if s > 60.0 { 65.0 } else { 70.0 };
        let tone = if l <= dark_cut {
            Tone::Dark
        } else if l >= light_cut {
            Tone::Light
        } else {
            Tone::Medium
        };

        (palette, tone)
    }

    /// Pick a base name: seed-indexed, advancing linearly on collision,
    /// falling back to a numeric suffix when the bucket is exhausted.
    fn pick_base(
        palette: &'static NamePalette,
        tone: Tone,
        hsl: &Hsl,
        tracker: &NameTracker,
    ) -> String {
        let bucket = palette.bucket(tone);
        let seed = (17.0 * hsl.h + 13.0 * hsl.s + 11.0 * hsl.l).round() as usize;

        for offset in 0..bucket.len() {
            let candidate = bucket[(seed + offset) % bucket.len()];
            if !tracker.is_used(candidate) {
                return candidate.to_owned();
            }
        }

        // Bucket exhausted: numeric suffix on the seeded name
        let base = bucket[seed % bucket.len()];
        let mut n = 2;
        loop {
            let candidate = format!("{base} {n}");
            if !tracker.is_used(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Intensity prefix selection ladder.
    fn intensity_prefix(s: f64, l: f64, tone: Tone) -> Option<&'static str> {
        if s <= 15.0 {
            return Some(match tone {
                Tone::Dark => "Deep",
                Tone::Light => "Soft",
                Tone::Medium => "Muted",
            });
        }
        if s <= 30.0 {
            return None;
        }
        if s >= 75.0 {
            return if l > 85.0 {
                Some("Bright")
            } else if l < 30.0 {
                Some("Deep")
            } else if (50.0..=75.0).contains(&l) {
                Some("Vivid")
            } else {
                None
            };
        }
        if s >= 50.0 {
            return if l < 30.0 {
                Some("Rich")
            } else if l > 80.0 {
                Some("Luminous")
            } else {
                None
            };
        }
        if s >= 35.0 && l < 25.0 {
            return Some("Dusky");
        }
        None
    }

    /// A prefix is allowed when the base carries neither the same word nor
    /// a conflicting descriptor, and its palette budget is not exhausted.
    fn prefix_allowed(prefix: &str, base: &str, tracker: &NameTracker) -> bool {
        if !tracker.descriptor_available(prefix) {
            return false;
        }

        let base_lower = base.to_lowercase();
        let has_word = |word: &str| base_lower.split_whitespace().any(|w| w == word);

        if has_word(&prefix.to_lowercase()) {
            return false;
        }

        CONFLICTS
            .iter()
            .find(|(p, _)| *p == prefix)
            .map_or(true, |(_, conflicting)| {
                !conflicting.iter().any(|word| has_word(word))
            })
    }
}
