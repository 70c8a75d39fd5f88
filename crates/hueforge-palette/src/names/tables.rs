//! Name tables for the heuristic namer.
//!
//! Thirteen palettes (Neutral, Earth, and eleven hue families), each with
//! three tone buckets of five names. The namer treats every string here as
//! opaque data: changing a name changes output but never behavior, and the
//! strings below are part of the output contract.

/// One name palette: three tone buckets of five names each.
#[derive(Debug, Clone, Copy)]
pub struct NamePalette {
    /// Palette identifier (also used in collision diagnostics)
    pub family: &'static str,
    /// Names for dark tones
    pub dark: [&'static str; 5],
    /// Names for medium tones
    pub medium: [&'static str; 5],
    /// Names for light tones
    pub light: [&'static str; 5],
}

/// Tone bucket within a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Low lightness
    Dark,
    /// Mid lightness
    Medium,
    /// High lightness
    Light,
}

impl NamePalette {
    /// The names of one tone bucket.
    #[must_use]
    pub fn bucket(&self, tone: Tone) -> &[&'static str; 5] {
        match tone {
            Tone::Dark => &self.dark,
            Tone::Medium => &self.medium,
            Tone::Light => &self.light,
        }
    }
}

/// Names for achromatic and near-achromatic colors.
pub static NEUTRAL: NamePalette = NamePalette {
    family: "Neutral",
    dark: ["Charcoal", "Graphite", "Onyx", "Basalt", "Obsidian"],
    medium: ["Stone", "Pewter", "Ash", "Dove Gray", "Cement"],
    light: ["Ivory", "Alabaster", "Mist", "Porcelain", "Chalk"],
};

/// Names for low-saturation warm hues (browns and tans).
pub static EARTH: NamePalette = NamePalette {
    family: "Earth",
    dark: ["Umber", "Walnut", "Espresso", "Peat", "Russet"],
    medium: ["Clay", "Ochre", "Caramel", "Saddle", "Hazel"],
    light: ["Sand", "Fawn", "Buff", "Parchment", "Biscuit"],
};

/// The eleven hue-family palettes with their wheel ranges, ordered by the
/// lower bound of each range. Crimson wraps across 0°.
pub static HUE_PALETTES: [(f64, f64, NamePalette); 11] = [
    (
        345.0,
        20.0,
        NamePalette {
            family: "Crimson",
            dark: ["Garnet", "Oxblood", "Merlot", "Brick", "Mahogany"],
            medium: ["Crimson", "Scarlet", "Cherry", "Ruby", "Vermilion"],
            light: ["Rose", "Blush", "Coral Pink", "Salmon", "Watermelon"],
        },
    ),
    (
        20.0,
        45.0,
        NamePalette {
            family: "Copper",
            dark: ["Auburn", "Chestnut", "Cinnamon", "Rust", "Sienna"],
            medium: ["Copper", "Amber", "Tangerine", "Pumpkin", "Marmalade"],
            light: ["Apricot", "Peach", "Melon", "Cantaloupe", "Nectarine"],
        },
    ),
    (
        45.0,
        75.0,
        NamePalette {
            family: "Solar",
            dark: ["Bronze", "Mustard", "Dijon", "Brass", "Turmeric"],
            medium: ["Solar", "Goldenrod", "Saffron", "Honey", "Marigold"],
            light: ["Lemon", "Butter", "Daffodil", "Flax", "Citrine"],
        },
    ),
    (
        75.0,
        110.0,
        NamePalette {
            family: "Lime",
            dark: ["Olive", "Moss", "Fern", "Juniper", "Artichoke"],
            medium: ["Lime", "Chartreuse", "Pear", "Pistachio", "Verdure"],
            light: ["Celery", "Tea Green", "Willow", "Sprout", "Limeade"],
        },
    ),
    (
        110.0,
        150.0,
        NamePalette {
            family: "Verdant",
            dark: ["Forest", "Hunter", "Pine", "Evergreen", "Ivy"],
            medium: ["Verdant", "Kelly Green", "Shamrock", "Clover", "Meadow"],
            light: ["Mint", "Celadon", "Sage", "Spearmint", "Pea Green"],
        },
    ),
    (
        150.0,
        185.0,
        NamePalette {
            family: "Emerald",
            dark: ["Malachite", "Spruce", "Bottle Green", "Viridian", "Jungle"],
            medium: ["Emerald", "Jade", "Sea Green", "Eucalyptus", "Laurel"],
            light: ["Seafoam", "Opal", "Pale Jade", "Spindrift", "Aloe"],
        },
    ),
    (
        185.0,
        210.0,
        NamePalette {
            family: "Lagoon",
            dark: ["Teal", "Petrol", "Marine", "Peacock", "Kingfisher"],
            medium: ["Lagoon", "Turquoise", "Caribbean", "Capri", "Tide"],
            light: ["Aqua", "Robin Egg", "Celeste", "Glacier", "Surf"],
        },
    ),
    (
        210.0,
        240.0,
        NamePalette {
            family: "Azure",
            dark: ["Navy", "Midnight", "Sapphire", "Cobalt", "Prussian Blue"],
            medium: ["Azure", "Cerulean", "Sky Blue", "Denim", "Harbor"],
            light: ["Baby Blue", "Powder Blue", "Ice Blue", "Cloud Blue", "Crystal Blue"],
        },
    ),
    (
        240.0,
        275.0,
        NamePalette {
            family: "Indigo",
            dark: ["Indigo", "Ink Blue", "Ultramarine", "Twilight", "Eclipse"],
            medium: ["Iris", "Blue Violet", "Royal Blue", "Lupine", "Gentian"],
            light: ["Periwinkle", "Lavender Blue", "Hyacinth", "Pale Iris", "Mistral"],
        },
    ),
    (
        275.0,
        305.0,
        NamePalette {
            family: "Violet",
            dark: ["Aubergine", "Plum", "Eggplant", "Grape", "Mulberry"],
            medium: ["Violet", "Amethyst", "Orchid", "Heliotrope", "Byzantium"],
            light: ["Lavender", "Lilac", "Thistle", "Mauve", "Wisteria"],
        },
    ),
    (
        305.0,
        345.0,
        NamePalette {
            family: "Magenta",
            dark: ["Boysenberry", "Raspberry", "Wine", "Berry", "Sangria"],
            medium: ["Magenta", "Fuchsia", "Cerise", "Hot Pink", "Flamingo"],
            light: ["Pink", "Carnation", "Bubblegum", "Peony", "Cotton Candy"],
        },
    ),
];

/// Select the hue-family palette for a hue in degrees, wrap-aware.
#[must_use]
pub fn palette_for_hue(h: f64) -> &'static NamePalette {
    let h = h.rem_euclid(360.0);
    for (lo, hi, palette) in &HUE_PALETTES {
        let inside = if lo > hi {
            // Wrapping range (Crimson: 345–20)
            h >= *lo || h < *hi
        } else {
            h >= *lo && h < *hi
        };
        if inside {
            return palette;
        }
    }
    // Unreachable for finite hues: the ranges tile the wheel
    &HUE_PALETTES[0].2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_tile_the_wheel() {
        for h in 0..360 {
            // Must not fall through to the unreachable default in a gap
            let p = palette_for_hue(f64::from(h));
            assert!(!p.family.is_empty());
        }
    }

    #[test]
    fn test_wrap_aware_crimson() {
        assert_eq!(palette_for_hue(350.0).family, "Crimson");
        assert_eq!(palette_for_hue(0.0).family, "Crimson");
        assert_eq!(palette_for_hue(19.9).family, "Crimson");
        assert_eq!(palette_for_hue(20.0).family, "Copper");
    }

    #[test]
    fn test_family_boundaries() {
        assert_eq!(palette_for_hue(45.0).family, "Solar");
        assert_eq!(palette_for_hue(110.0).family, "Verdant");
        assert_eq!(palette_for_hue(209.9).family, "Lagoon");
        assert_eq!(palette_for_hue(210.0).family, "Azure");
        assert_eq!(palette_for_hue(344.9).family, "Magenta");
    }

    #[test]
    fn test_all_names_unique_within_bucket() {
        let mut all = vec![NEUTRAL, EARTH];
        all.extend(HUE_PALETTES.iter().map(|(_, _, p)| *p));
        for palette in all {
            for bucket in [palette.dark, palette.medium, palette.light] {
                let mut seen = std::collections::HashSet::new();
                for name in bucket {
                    assert!(seen.insert(name), "duplicate {name} in {}", palette.family);
                }
            }
        }
    }
}
