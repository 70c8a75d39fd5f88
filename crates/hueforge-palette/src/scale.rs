//! Tonal tints and shades.
//!
//! Four tints and four shades per color, generated as lightness-only moves
//! in OKLCh. The nominal step is 0.1, but near the luminance extremes the
//! step compresses so the ladder stays inside the displayable range, and
//! chroma is dampened so extreme steps do not collapse into neon or mud.

use hueforge_core::space::oklch::Oklch;

/// Number of tints and of shades generated per color.
pub const STEPS: usize = 4;

/// Lightness ceiling for tints and floor offset for shades.
const L_MAX: f64 = 0.99;
const L_MIN: f64 = 0.01;

/// Degenerate-step guard for bases already at a luminance extreme.
const MIN_STEP: f64 = 0.0025;

/// Per-step plan: lightness step size and total chroma fade at the final
/// step (1.0 = no fade).
fn tint_plan(l: f64) -> (f64, f64) {
    if l > 0.85 {
        (((L_MAX - l) / 4.0).min(0.02).max(MIN_STEP), 0.5)
    } else if l > 0.7 {
        (((L_MAX - l) / 4.0).min(0.05).max(MIN_STEP), 0.7)
    } else {
        (((L_MAX - l) / 4.0).min(0.1).max(MIN_STEP), 1.0)
    }
}

fn shade_plan(l: f64) -> (f64, f64) {
    if l < 0.25 {
        (((l - L_MIN) / 4.0).min(0.02).max(MIN_STEP), 0.5)
    } else if l < 0.4 {
        (((l - L_MIN) / 4.0).min(0.05).max(MIN_STEP), 0.7)
    } else {
        (((l - L_MIN) / 4.0).min(0.1).max(MIN_STEP), 1.0)
    }
}

/// One step of the ladder: lightness moved by `step · index`, chroma faded
/// linearly toward `fade` at the fourth step.
fn ladder(base: &Oklch, step: f64, fade: f64, count: usize) -> Vec<Oklch> {
    (1..=count)
        .map(|i| {
            let t = i as f64 / STEPS as f64;
            let chroma = base.c * (1.0 - (1.0 - fade) * t);
            Oklch::new(base.l + step * i as f64, chroma, base.h)
        })
        .collect()
}

/// Four tints, strictly increasing in lightness.
///
/// # Examples
///
/// ```
/// use hueforge_core::space::oklch::Oklch;
/// use hueforge_palette::scale::tints;
///
/// let base = Oklch::new(0.5, 0.12, 30.0);
/// let tints = tints(&base);
/// assert_eq!(tints.len(), 4);
/// assert!(tints[0].l > base.l);
/// assert!(tints[3].l > tints[0].l);
/// ```
#[must_use]
pub fn tints(base: &Oklch) -> Vec<Oklch> {
    let (step, fade) = tint_plan(base.l);
    ladder(base, step, fade, STEPS)
}

/// Four shades, strictly decreasing in lightness.
#[must_use]
pub fn shades(base: &Oklch) -> Vec<Oklch> {
    let (step, fade) = shade_plan(base.l);
    ladder(base, -step, fade, STEPS)
}

/// One further half-step beyond the fourth tint, for the 50 endpoint of
/// the export scale. Always strictly lighter than the fourth tint.
#[must_use]
pub fn extend_tint(base: &Oklch) -> Oklch {
    let (step, fade) = tint_plan(base.l);
    let top = base.l + step * STEPS as f64;
    let l = top + (0.995 - top).max(0.0) * 0.5;
    Oklch::new(l, base.c * fade * 0.9, base.h)
}

/// One further half-step beyond the fourth shade, for the 950 endpoint of
/// the export scale. Always strictly darker than the fourth shade.
#[must_use]
pub fn extend_shade(base: &Oklch) -> Oklch {
    let (step, fade) = shade_plan(base.l);
    let bottom = base.l - step * STEPS as f64;
    let l = bottom - (bottom - 0.005).max(0.0) * 0.5;
    Oklch::new(l, base.c * fade * 0.9, base.h)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_strictly_monotone(colors: &[Oklch], increasing: bool) {
        for pair in colors.windows(2) {
            if increasing {
                assert!(pair[1].l > pair[0].l, "{} !> {}", pair[1].l, pair[0].l);
            } else {
                assert!(pair[1].l < pair[0].l, "{} !< {}", pair[1].l, pair[0].l);
            }
        }
    }

    #[test]
    fn test_mid_lightness_uses_adaptive_full_steps() {
        let base = Oklch::new(0.5, 0.15, 200.0);
        let t = tints(&base);
        assert_strictly_monotone(&t, true);
        assert!(t[0].l > base.l);
        // (0.99 - 0.5) / 4 = 0.1225, capped at 0.1
        assert!((t[0].l - 0.6).abs() < 1e-9);
        // Chroma unchanged away from the extremes
        assert!((t[3].c - base.c).abs() < 1e-9);
    }

    #[test]
    fn test_light_base_compresses_and_fades() {
        let base = Oklch::new(0.9, 0.1, 100.0);
        let t = tints(&base);
        assert_strictly_monotone(&t, true);
        assert!(t[3].l <= 0.99 + 1e-9);
        // Chroma fades to 50% by the fourth tint
        assert!((t[3].c - base.c * 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_dark_base_shades_compress() {
        let base = Oklch::new(0.15, 0.08, 300.0);
        let s = shades(&base);
        assert_strictly_monotone(&s, false);
        assert!(s[3].l >= 0.0);
        assert!((s[3].c - base.c * 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_tints_lighter_shades_darker() {
        for l in [0.2, 0.35, 0.5, 0.65, 0.8, 0.92] {
            let base = Oklch::new(l, 0.1, 45.0);
            for t in tints(&base) {
                assert!(t.l > base.l, "tint {} !> base {}", t.l, base.l);
            }
            for s in shades(&base) {
                assert!(s.l < base.l, "shade {} !< base {}", s.l, base.l);
            }
        }
    }

    #[test]
    fn test_hue_is_held() {
        let base = Oklch::new(0.6, 0.2, 123.4);
        for c in tints(&base).iter().chain(shades(&base).iter()) {
            assert!((c.h - 123.4).abs() < 1e-9);
        }
    }

    #[test]
    fn test_extended_endpoints_stay_beyond_ladder() {
        let base = Oklch::new(0.55, 0.12, 80.0);
        let t = tints(&base);
        let s = shades(&base);
        assert!(extend_tint(&base).l > t[3].l);
        assert!(extend_shade(&base).l < s[3].l);
    }
}
