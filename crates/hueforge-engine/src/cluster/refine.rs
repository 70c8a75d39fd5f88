//! Candidate refinement: perceptual deduplication, hue-diversity
//! enforcement, final cleanup, and pool backfill.
//!
//! The dedup metric is the weighted OKLab distance
//! `√(2Δl² + 8Δa² + 8Δb²)`; the a/b axes carry most of the weight because
//! lightness differences alone rarely make two swatches read as distinct
//! colors. Neutrals get their own ladder: hue is meaningless at low
//! saturation, so they compare on HSL lightness instead.

use hueforge_core::color::Color;
use hueforge_core::space::hsl::Hsl;
use hueforge_core::space::oklch::{hue_difference, Oklab};

/// Dedup metric weights.
const DEDUP_WL: f64 = 2.0;
const DEDUP_WAB: f64 = 8.0;

/// Backfill metric weights: `√(Δl² + 6Δa² + 6Δb²)`.
const BACKFILL_WL: f64 = 1.0;
const BACKFILL_WAB: f64 = 6.0;

/// A cluster candidate with cached coordinate representations.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub color: Color,
    pub weight: f64,
    pub oklab: Oklab,
    pub hsl: Hsl,
}

impl Candidate {
    pub(crate) fn new(color: Color, weight: f64) -> Self {
        Self {
            oklab: Oklab::from_color(&color),
            hsl: Hsl::from_color(&color),
            color,
            weight,
        }
    }

    fn dedup_distance(&self, other: &Self) -> f64 {
        self.oklab
            .weighted_distance(&other.oklab, DEDUP_WL, DEDUP_WAB)
    }
}

/// Perceptual deduplication. Candidates must arrive weight-descending;
/// a duplicate's weight folds into the accepted entry it matched.
pub(crate) fn dedup(candidates: Vec<Candidate>, threshold: f64) -> Vec<Candidate> {
    let mut accepted: Vec<Candidate> = Vec::with_capacity(candidates.len());

    'candidates: for candidate in candidates {
        for existing in accepted.iter_mut() {
            if is_duplicate(&candidate, existing, threshold) {
                existing.weight += candidate.weight;
                continue 'candidates;
            }
        }
        accepted.push(candidate);
    }

    accepted
}

/// The three-way duplicate ladder: very-neutral, neutral, chromatic.
fn is_duplicate(a: &Candidate, b: &Candidate, threshold: f64) -> bool {
    let dl = (a.hsl.l - b.hsl.l).abs();
    let ds = (a.hsl.s - b.hsl.s).abs();
    let dh = hue_difference(a.hsl.h, b.hsl.h);

    let very_neutral = a.hsl.s < 10.0 || b.hsl.s < 10.0;
    let neutral = a.hsl.s < 20.0 || b.hsl.s < 20.0;

    let effective_threshold = if very_neutral {
        if dl < 22.0 {
            return true;
        }
        0.7 * threshold
    } else if neutral {
        if dl < 15.0 && ds < 20.0 {
            return true;
        }
        0.85 * threshold
    } else {
        if dh < 32.0 && ds < 25.0 && dl < 20.0 {
            return true;
        }
        threshold
    };

    a.dedup_distance(b) < effective_threshold
}

/// Hue diversity: accept in weight-desc order only if no accepted color
/// shares hue within `min_gap` degrees, unless both sides are
/// low-saturation (hue is moot for neutrals). Rejects land in the pool.
pub(crate) fn enforce_hue_diversity(
    candidates: Vec<Candidate>,
    min_gap: f64,
) -> (Vec<Candidate>, Vec<Candidate>) {
    let mut accepted: Vec<Candidate> = Vec::with_capacity(candidates.len());
    let mut pool = Vec::new();

    for candidate in candidates {
        let conflicts = accepted.iter().any(|existing| {
            hue_difference(candidate.hsl.h, existing.hsl.h) < min_gap
                && !(candidate.hsl.s < 20.0 && existing.hsl.s < 20.0)
        });
        if conflicts {
            pool.push(candidate);
        } else {
            accepted.push(candidate);
        }
    }

    (accepted, pool)
}

/// Stricter post-slice cleanup: metric distance below `threshold` *or*
/// all three HSL channel deltas below `channel_delta` merges the later
/// candidate into the closest earlier one.
pub(crate) fn final_cleanup(
    candidates: Vec<Candidate>,
    threshold: f64,
    channel_delta: f64,
) -> Vec<Candidate> {
    let mut accepted: Vec<Candidate> = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let mut closest: Option<(usize, f64)> = None;
        for (idx, existing) in accepted.iter().enumerate() {
            let d = candidate.dedup_distance(existing);
            let dl = (candidate.hsl.l - existing.hsl.l).abs();
            let ds = (candidate.hsl.s - existing.hsl.s).abs();
            let dh = hue_difference(candidate.hsl.h, existing.hsl.h);

            let triggers =
                d < threshold || (dh < channel_delta && ds < channel_delta && dl < channel_delta);
            if triggers && closest.map_or(true, |(_, best)| d < best) {
                closest = Some((idx, d));
            }
        }

        match closest {
            Some((idx, _)) => accepted[idx].weight += candidate.weight,
            None => accepted.push(candidate),
        }
    }

    accepted
}

/// Append pool candidates (already weight-descending) that sit farther
/// than `min_distance` from every accepted entry, until `target` entries
/// exist or the pool runs dry.
pub(crate) fn backfill(
    accepted: &mut Vec<Candidate>,
    pool: &[Candidate],
    target: usize,
    min_distance: f64,
) {
    for candidate in pool {
        if accepted.len() >= target {
            break;
        }
        let far_enough = accepted.iter().all(|existing| {
            candidate
                .oklab
                .weighted_distance(&existing.oklab, BACKFILL_WL, BACKFILL_WAB)
                > min_distance
        });
        if far_enough {
            accepted.push(candidate.clone());
        }
    }
}
