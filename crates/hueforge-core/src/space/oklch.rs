//! OKLab / OKLCh color space implementation.
//!
//! OKLab is a perceptually uniform color space by Björn Ottosson; OKLCh is
//! its cylindrical form (L, a, b → L, C, H). Hue rotations and lightness
//! steps in this space yield visually even tonal progressions, which is why
//! the clustering, scale, and harmony stages all operate here.
//!
//! # Properties
//!
//! - **L (Lightness)**: 0.0 (black) to 1.0 (white) for displayable sRGB
//! - **C (Chroma)**: 0.0 (gray) to ~0.4 (practical maximum, varies by hue)
//! - **H (Hue)**: 0.0 to 360.0 degrees
//!
//! # References
//!
//! - [Oklab Color Space](https://bottosson.github.io/posts/oklab/)
//! - [OKLCH in CSS Color 4](https://www.w3.org/TR/css-color-4/#ok-lab)

use crate::color::Color;

// ============================================================================
// OKLab Transformation Matrices (from Björn Ottosson's paper)
// ============================================================================

/// Linear RGB to LMS matrix (cone response).
pub const RGB_TO_LMS: [[f64; 3]; 3] = [
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
];

/// Cube-root LMS to OKLab matrix.
pub const LMS_TO_LAB: [[f64; 3]; 3] = [
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
];

/// OKLab to cube-root LMS matrix (inverse).
pub const LAB_TO_LMS: [[f64; 3]; 3] = [
    [1.0, 0.3963377774, 0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
];

/// Linear LMS to linear RGB matrix (inverse of `RGB_TO_LMS`).
pub const LMS_TO_RGB: [[f64; 3]; 3] = [
    [4.0767416621, -3.3077115913, 0.2309699292],
    [-1.2684380046, 2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147, 1.7076147010],
];

// ============================================================================
// OKLab (Cartesian)
// ============================================================================

/// OKLab color representation (Cartesian coordinates).
///
/// The clustering stage runs entirely in this space: centroid means are
/// arithmetic means of `l`/`a`/`b`, and all candidate distances are weighted
/// Euclidean distances over these components.
///
/// # Examples
///
/// ```
/// use hueforge_core::color::Color;
/// use hueforge_core::space::oklch::Oklab;
///
/// let red = Color::from_srgb8(255, 0, 0);
/// let lab = Oklab::from_color(&red);
/// assert!(lab.l > 0.6 && lab.l < 0.7);
/// assert!(lab.a > 0.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    /// Lightness (0.0 to 1.0 for displayable sRGB)
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Oklab {
    /// Create new OKLab color.
    #[inline]
    #[must_use]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert from sRGB color.
    ///
    /// # Examples
    ///
    /// ```
    /// use hueforge_core::color::Color;
    /// use hueforge_core::space::oklch::Oklab;
    ///
    /// let white = Color::from_srgb8(255, 255, 255);
    /// let lab = Oklab::from_color(&white);
    /// assert!((lab.l - 1.0).abs() < 0.01);
    /// assert!(lab.a.abs() < 0.01);
    /// assert!(lab.b.abs() < 0.01);
    /// ```
    #[must_use]
    pub fn from_color(color: &Color) -> Self {
        let r = color.linear[0];
        let g = color.linear[1];
        let b = color.linear[2];

        // RGB to LMS (cone response)
        let l = RGB_TO_LMS[0][0] * r + RGB_TO_LMS[0][1] * g + RGB_TO_LMS[0][2] * b;
        let m = RGB_TO_LMS[1][0] * r + RGB_TO_LMS[1][1] * g + RGB_TO_LMS[1][2] * b;
        let s = RGB_TO_LMS[2][0] * r + RGB_TO_LMS[2][1] * g + RGB_TO_LMS[2][2] * b;

        // Cube root (perceptual transformation)
        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        Self {
            l: LMS_TO_LAB[0][0] * l_ + LMS_TO_LAB[0][1] * m_ + LMS_TO_LAB[0][2] * s_,
            a: LMS_TO_LAB[1][0] * l_ + LMS_TO_LAB[1][1] * m_ + LMS_TO_LAB[1][2] * s_,
            b: LMS_TO_LAB[2][0] * l_ + LMS_TO_LAB[2][1] * m_ + LMS_TO_LAB[2][2] * s_,
        }
    }

    /// Convert to sRGB color.
    ///
    /// Linear RGB is clamped to [0, 1] before gamma encoding, so
    /// out-of-gamut inputs land on the gamut boundary.
    #[must_use]
    pub fn to_color(&self) -> Color {
        let l_ = LAB_TO_LMS[0][0] * self.l + LAB_TO_LMS[0][1] * self.a + LAB_TO_LMS[0][2] * self.b;
        let m_ = LAB_TO_LMS[1][0] * self.l + LAB_TO_LMS[1][1] * self.a + LAB_TO_LMS[1][2] * self.b;
        let s_ = LAB_TO_LMS[2][0] * self.l + LAB_TO_LMS[2][1] * self.a + LAB_TO_LMS[2][2] * self.b;

        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        let r = LMS_TO_RGB[0][0] * l + LMS_TO_RGB[0][1] * m + LMS_TO_RGB[0][2] * s;
        let g = LMS_TO_RGB[1][0] * l + LMS_TO_RGB[1][1] * m + LMS_TO_RGB[1][2] * s;
        let b = LMS_TO_RGB[2][0] * l + LMS_TO_RGB[2][1] * m + LMS_TO_RGB[2][2] * s;

        Color::from_linear(r, g, b)
    }

    /// Plain Euclidean distance over (l, a, b).
    ///
    /// Lloyd assignment in the clustering stage uses this unweighted form.
    #[inline]
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }

    /// Weighted Euclidean distance `√(wl·Δl² + wab·Δa² + wab·Δb²)`.
    ///
    /// The extraction pipeline uses three weightings of this metric:
    /// (1, 4) for centroid seeding, (2, 8) for perceptual deduplication,
    /// and (1, 6) for pool backfill.
    #[inline]
    #[must_use]
    pub fn weighted_distance(&self, other: &Self, wl: f64, wab: f64) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (wl * dl * dl + wab * da * da + wab * db * db).sqrt()
    }
}

// ============================================================================
// OKLCh (Cylindrical)
// ============================================================================

/// OKLCh color representation (cylindrical coordinates).
///
/// Perceptually uniform color space with intuitive controls:
/// lightness (how light/dark), chroma (how colorful/gray), hue (which color).
///
/// # Examples
///
/// ```
/// use hueforge_core::color::Color;
/// use hueforge_core::space::oklch::Oklch;
///
/// let rgb = Color::from_srgb8(255, 0, 0);
/// let oklch = Oklch::from_color(&rgb);
///
/// let lighter = oklch.with_lightness(oklch.l + 0.1);
/// let complementary = oklch.rotate_hue(180.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// Lightness: 0.0 (black) to 1.0 (white)
    pub l: f64,
    /// Chroma: 0.0 (gray) to ~0.4 (practical max)
    pub c: f64,
    /// Hue: 0.0 to 360.0 degrees
    pub h: f64,
}

impl Oklch {
    /// Create new OKLCh color.
    ///
    /// Values are clamped/normalized: L to [0.0, 1.0], C to [0.0, ∞),
    /// H to [0.0, 360.0).
    #[must_use]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self {
            l: l.clamp(0.0, 1.0),
            c: c.max(0.0),
            h: normalize_hue(h),
        }
    }

    /// Convert from sRGB color.
    #[must_use]
    pub fn from_color(color: &Color) -> Self {
        Self::from_oklab(&Oklab::from_color(color))
    }

    /// Convert from Cartesian OKLab.
    ///
    /// `c = √(a² + b²)`, `h = atan2(b, a)` wrapped to [0, 360).
    #[must_use]
    pub fn from_oklab(lab: &Oklab) -> Self {
        let c = (lab.a * lab.a + lab.b * lab.b).sqrt();
        let h = lab.b.atan2(lab.a).to_degrees();
        Self::new(lab.l, c, h)
    }

    /// Convert to Cartesian OKLab.
    #[must_use]
    pub fn to_oklab(&self) -> Oklab {
        let h_rad = self.h.to_radians();
        Oklab {
            l: self.l,
            a: self.c * h_rad.cos(),
            b: self.c * h_rad.sin(),
        }
    }

    /// Convert to sRGB color.
    ///
    /// Out-of-gamut results are clamped in linear RGB before gamma encoding.
    #[must_use]
    pub fn to_color(&self) -> Color {
        self.to_oklab().to_color()
    }

    /// Create new OKLCh with modified lightness.
    #[inline]
    #[must_use]
    pub fn with_lightness(self, l: f64) -> Self {
        Self::new(l, self.c, self.h)
    }

    /// Create new OKLCh with modified chroma.
    #[inline]
    #[must_use]
    pub fn with_chroma(self, c: f64) -> Self {
        Self::new(self.l, c, self.h)
    }

    /// Rotate hue by degrees, wrapping at 360°. Lightness and chroma are
    /// held fixed, which is exactly the harmony contract.
    #[inline]
    #[must_use]
    pub fn rotate_hue(self, degrees: f64) -> Self {
        Self::new(self.l, self.c, self.h + degrees)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Normalize hue to [0.0, 360.0).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    ((h % 360.0) + 360.0) % 360.0
}

/// Absolute hue difference on the wheel, wrap-aware, in [0, 180].
#[inline]
#[must_use]
pub fn hue_difference(a: f64, b: f64) -> f64 {
    let d = (normalize_hue(a) - normalize_hue(b)).abs();
    if d > 180.0 {
        360.0 - d
    } else {
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red_to_oklch() {
        let red = Color::from_srgb8(255, 0, 0);
        let oklch = Oklch::from_color(&red);

        assert!(oklch.l > 0.5 && oklch.l < 0.7, "Red L: {}", oklch.l);
        assert!(oklch.c > 0.2, "Red C: {}", oklch.c);
        assert!(oklch.h > 20.0 && oklch.h < 40.0, "Red H: {}", oklch.h);
    }

    #[test]
    fn test_roundtrip() {
        let original = Color::from_srgb8(128, 64, 192);
        let oklch = Oklch::from_color(&original);
        let [r, g, b] = oklch.to_color().to_srgb8();

        assert!((i16::from(r) - 128).abs() <= 2);
        assert!((i16::from(g) - 64).abs() <= 2);
        assert!((i16::from(b) - 192).abs() <= 2);
    }

    #[test]
    fn test_hue_normalization() {
        assert!((normalize_hue(390.0) - 30.0).abs() < 0.001);
        assert!((normalize_hue(-30.0) - 330.0).abs() < 0.001);
        assert!((normalize_hue(720.0) - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_hue_difference_wraps() {
        assert!((hue_difference(350.0, 10.0) - 20.0).abs() < 0.001);
        assert!((hue_difference(10.0, 350.0) - 20.0).abs() < 0.001);
        assert!((hue_difference(0.0, 180.0) - 180.0).abs() < 0.001);
    }

    #[test]
    fn test_rotate_hue() {
        let base = Oklch::new(0.6, 0.2, 350.0);
        let rotated = base.rotate_hue(30.0);
        assert!((rotated.h - 20.0).abs() < 0.001);
        assert_eq!(rotated.l, base.l);
        assert_eq!(rotated.c, base.c);
    }

    #[test]
    fn test_weighted_distance_degenerates_to_euclidean() {
        let a = Oklab::new(0.5, 0.1, -0.05);
        let b = Oklab::new(0.6, -0.02, 0.08);
        let plain = a.distance(&b);
        let weighted = a.weighted_distance(&b, 1.0, 1.0);
        assert!((plain - weighted).abs() < 1e-12);
    }

    // ============================================
    // Golden Vector Tests
    // ============================================

    #[test]
    fn golden_white_black() {
        let white = Oklch::from_color(&Color::from_srgb8(255, 255, 255));
        assert!((white.l - 1.0).abs() < 0.01, "White L: {}", white.l);
        assert!(white.c < 0.01, "White C: {}", white.c);

        let black = Oklch::from_color(&Color::from_srgb8(0, 0, 0));
        assert!(black.l < 0.01, "Black L: {}", black.l);
        assert!(black.c < 0.01, "Black C: {}", black.c);
    }

    #[test]
    fn golden_primary_colors() {
        let red = Oklch::from_color(&Color::from_srgb8(255, 0, 0));
        assert!((red.l - 0.628).abs() < 0.01, "Red L: {}", red.l);
        assert!((red.c - 0.257).abs() < 0.01, "Red C: {}", red.c);
        assert!((red.h - 29.2).abs() < 2.0, "Red H: {}", red.h);

        let green = Oklch::from_color(&Color::from_srgb8(0, 255, 0));
        assert!((green.l - 0.866).abs() < 0.01, "Green L: {}", green.l);
        assert!((green.h - 142.5).abs() < 5.0, "Green H: {}", green.h);

        let blue = Oklch::from_color(&Color::from_srgb8(0, 0, 255));
        assert!((blue.l - 0.452).abs() < 0.01, "Blue L: {}", blue.l);
        assert!((blue.h - 264.0).abs() < 5.0, "Blue H: {}", blue.h);
    }

    #[test]
    fn golden_grayscale_has_no_chroma() {
        for v in [32, 64, 128, 200] {
            let gray = Oklch::from_color(&Color::from_srgb8(v, v, v));
            assert!(gray.c < 0.01, "Gray {v} chroma: {}", gray.c);
        }
    }

    #[test]
    fn golden_roundtrip_precision() {
        let colors = [
            (255, 0, 0),
            (0, 255, 0),
            (0, 0, 255),
            (255, 255, 0),
            (255, 0, 255),
            (0, 255, 255),
            (128, 128, 128),
            (59, 130, 246),
        ];

        for (r, g, b) in colors {
            let oklch = Oklch::from_color(&Color::from_srgb8(r, g, b));
            let [r2, g2, b2] = oklch.to_color().to_srgb8();

            assert!((i16::from(r2) - i16::from(r)).abs() <= 2, "R: {r} → {r2}");
            assert!((i16::from(g2) - i16::from(g)).abs() <= 2, "G: {g} → {g2}");
            assert!((i16::from(b2) - i16::from(b)).abs() <= 2, "B: {b} → {b2}");
        }
    }

    #[test]
    fn golden_complementary_of_red_is_cyan() {
        let red = Oklch::from_color(&Color::from_srgb8(255, 0, 0));
        let [r, g, b] = red.rotate_hue(180.0).to_color().to_srgb8();
        // Complement of pure red lands in the cyan region
        assert!(g > 150 && b > 150 && r < 120, "got rgb({r}, {g}, {b})");
    }
}
