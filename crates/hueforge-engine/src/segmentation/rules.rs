//! Label classification rule ladder.
//!
//! Each panoptic segment label is classified foreground / background /
//! uncertain by the first matching rule, in priority order. The ladder is
//! plain data (an ordered array of named predicates), so a new rule is a
//! table entry plus a test, never a change to the classifier core.

/// Classification verdict for one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Composite this segment into the foreground mask.
    Foreground,
    /// Leave this segment out of the mask.
    Background,
    /// Ambiguous; composited as foreground.
    Uncertain,
}

/// Everything a rule predicate may look at.
#[derive(Debug, Clone, Copy)]
pub struct RuleCtx<'a> {
    /// Lowercased segment label
    pub label: &'a str,
    /// Model confidence for this segment
    pub score: f64,
    /// Mean confidence over all segments in the image
    pub mean_score: f64,
    /// 0-based rank of this segment when sorted by descending score
    pub rank: usize,
    /// Total number of segments in the image
    pub total: usize,
}

/// One ladder entry.
pub struct Rule {
    /// Diagnostic name, logged when the rule fires
    pub name: &'static str,
    /// Verdict when the predicate matches
    pub verdict: Verdict,
    /// Match predicate
    pub applies: fn(&RuleCtx<'_>) -> bool,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("verdict", &self.verdict)
            .finish()
    }
}

// ============================================================================
// Label keyword sets
// ============================================================================

const SURFACES: &[&str] = &[
    "sky", "cloud", "ground", "road", "pavement", "floor", "ceiling", "sidewalk", "path",
];

const LIVING: &[&str] = &[
    "person", "people", "man", "woman", "child", "rider", "dog", "cat", "bird", "horse", "cow",
    "sheep", "elephant", "bear", "zebra", "giraffe", "deer", "animal", "wildlife",
];

const VEHICLES: &[&str] = &[
    "car", "bike", "bicycle", "motorcycle", "bus", "truck", "boat", "ship", "aircraft",
    "airplane", "train",
];

const PORTABLE: &[&str] = &[
    "bag", "backpack", "handbag", "suitcase", "umbrella", "bottle", "cup", "phone", "laptop",
    "book", "ball", "kite", "skateboard", "surfboard", "frisbee",
];

const SIGNS: &[&str] = &["sign", "banner", "billboard", "poster", "traffic light", "info"];

const FURNITURE: &[&str] = &[
    "furniture", "chair", "couch", "sofa", "bed", "table", "desk", "bench", "cabinet", "shelf",
    "lamp", "fixture",
];

const ARCHITECTURAL: &[&str] = &[
    "building", "house", "bridge", "tower", "column", "arch", "roof", "window", "door", "stairs",
];

const NATURAL_FOREGROUND: &[&str] = &["tree", "rock", "fountain", "statue", "bush", "flower", "plant"];

const WALLS: &[&str] = &["wall", "fence", "railing"];

const WATER_TERRAIN: &[&str] = &[
    "water", "sea", "ocean", "lake", "river", "terrain", "mountain", "hill", "sand", "snow",
    "field", "gravel",
];

fn matches_any(label: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| label.contains(k))
}

// ============================================================================
// The ladder
// ============================================================================

/// The classification ladder, priority descending. The first matching rule
/// wins; an unmatched segment is background.
pub const RULES: &[Rule] = &[
    Rule {
        name: "surface-background",
        verdict: Verdict::Background,
        applies: |ctx| matches_any(ctx.label, SURFACES),
    },
    Rule {
        name: "living-entity",
        verdict: Verdict::Foreground,
        applies: |ctx| matches_any(ctx.label, LIVING),
    },
    Rule {
        name: "vehicle",
        verdict: Verdict::Foreground,
        applies: |ctx| matches_any(ctx.label, VEHICLES),
    },
    Rule {
        name: "portable-object",
        verdict: Verdict::Foreground,
        applies: |ctx| matches_any(ctx.label, PORTABLE),
    },
    Rule {
        name: "sign",
        verdict: Verdict::Foreground,
        applies: |ctx| matches_any(ctx.label, SIGNS),
    },
    Rule {
        name: "prominent-furniture",
        verdict: Verdict::Foreground,
        applies: |ctx| {
            matches_any(ctx.label, FURNITURE) && ctx.score >= ctx.mean_score * 1.2 && ctx.total >= 3
        },
    },
    Rule {
        name: "confident-architecture",
        verdict: Verdict::Uncertain,
        applies: |ctx| {
            matches_any(ctx.label, ARCHITECTURAL) && ctx.score > 0.9 && ctx.total >= 4
        },
    },
    Rule {
        name: "dominant-natural",
        verdict: Verdict::Foreground,
        applies: |ctx| {
            matches_any(ctx.label, NATURAL_FOREGROUND)
                && (ctx.score > ctx.mean_score * 1.3 || ctx.total <= 3)
        },
    },
    Rule {
        name: "wall-or-low-fence",
        verdict: Verdict::Background,
        applies: |ctx| {
            matches_any(ctx.label, WALLS) && (!ctx.label.contains("fence") || ctx.score < 0.85)
        },
    },
    Rule {
        name: "water-terrain",
        verdict: Verdict::Background,
        applies: |ctx| matches_any(ctx.label, WATER_TERRAIN) && ctx.score <= ctx.mean_score * 1.5,
    },
    Rule {
        name: "high-score-fallback",
        verdict: Verdict::Uncertain,
        applies: |ctx| ctx.score > 0.95 && ctx.rank < 3 && ctx.total >= 5,
    },
];

/// Classify one segment through the ladder.
#[must_use]
pub fn classify(ctx: &RuleCtx<'_>) -> (Verdict, &'static str) {
    for rule in RULES {
        if (rule.applies)(ctx) {
            return (rule.verdict, rule.name);
        }
    }
    (Verdict::Background, "default-background")
}
