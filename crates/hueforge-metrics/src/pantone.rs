//! Pantone reference table and nearest-neighbor lookup.
//!
//! A fixed 28-entry table of Pantone coated references with their sRGB
//! equivalents. Matching is plain Euclidean distance in sRGB; the table is
//! small enough that perceptual weighting buys nothing visible in the
//! human-readable approximation label.

use hueforge_core::color::Color;

/// The 28 Pantone references shipped with the engine: `(label, r, g, b)`.
pub const PANTONE_TABLE: [(&str, u8, u8, u8); 28] = [
    ("PANTONE Black 6 C", 16, 24, 32),
    ("PANTONE 11-0601 Bright White", 244, 249, 255),
    ("PANTONE Cool Gray 1 C", 217, 217, 214),
    ("PANTONE Cool Gray 6 C", 167, 168, 170),
    ("PANTONE Cool Gray 11 C", 83, 86, 90),
    ("PANTONE 186 C", 200, 16, 46),
    ("PANTONE 485 C", 218, 41, 28),
    ("PANTONE 1795 C", 210, 38, 48),
    ("PANTONE 165 C", 255, 103, 31),
    ("PANTONE 151 C", 255, 130, 0),
    ("PANTONE 137 C", 255, 163, 0),
    ("PANTONE 109 C", 255, 209, 0),
    ("PANTONE 102 C", 252, 227, 0),
    ("PANTONE 375 C", 151, 215, 0),
    ("PANTONE 361 C", 67, 176, 42),
    ("PANTONE 348 C", 0, 132, 61),
    ("PANTONE 341 C", 0, 122, 83),
    ("PANTONE 326 C", 0, 178, 169),
    ("PANTONE 3125 C", 0, 174, 199),
    ("PANTONE Process Blue C", 0, 133, 202),
    ("PANTONE 300 C", 0, 94, 184),
    ("PANTONE 286 C", 0, 51, 160),
    ("PANTONE 2685 C", 51, 0, 114),
    ("PANTONE Violet C", 68, 0, 153),
    ("PANTONE 2592 C", 159, 36, 180),
    ("PANTONE Magenta C", 208, 6, 126),
    ("PANTONE 213 C", 227, 28, 121),
    ("PANTONE 7421 C", 101, 29, 50),
];

/// Return the human-readable label of the nearest Pantone reference.
///
/// # Examples
///
/// ```
/// use hueforge_core::color::Color;
/// use hueforge_metrics::pantone::nearest_pantone;
///
/// let label = nearest_pantone(&Color::from_srgb8(200, 16, 46));
/// assert_eq!(label, "PANTONE 186 C");
/// ```
#[must_use]
pub fn nearest_pantone(color: &Color) -> &'static str {
    let [r, g, b] = color.to_srgb8();
    let mut best = PANTONE_TABLE[0].0;
    let mut best_dist = u32::MAX;

    for &(label, pr, pg, pb) in &PANTONE_TABLE {
        let dr = i32::from(r) - i32::from(pr);
        let dg = i32::from(g) - i32::from(pg);
        let db = i32::from(b) - i32::from(pb);
        let dist = (dr * dr + dg * dg + db * db) as u32;
        if dist < best_dist {
            best_dist = dist;
            best = label;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        for &(label, r, g, b) in &PANTONE_TABLE {
            assert_eq!(nearest_pantone(&Color::from_srgb8(r, g, b)), label);
        }
    }

    #[test]
    fn test_black_maps_to_black6() {
        assert_eq!(
            nearest_pantone(&Color::from_srgb8(0, 0, 0)),
            "PANTONE Black 6 C"
        );
    }

    #[test]
    fn test_white_maps_to_bright_white() {
        assert_eq!(
            nearest_pantone(&Color::from_srgb8(255, 255, 255)),
            "PANTONE 11-0601 Bright White"
        );
    }

    #[test]
    fn test_table_size() {
        assert_eq!(PANTONE_TABLE.len(), 28);
    }
}
