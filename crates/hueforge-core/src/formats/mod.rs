//! Display format builders.
//!
//! [`build_color_formats`] aggregates one color into the eight-format wire
//! record. Rounding happens here and only here: the underlying space
//! conversions stay at full `f64` precision, and the contract below fixes
//! the displayed precision per format.
//!
//! Rounding contract:
//! - `hex`: uppercase `#RRGGBB`
//! - `rgb`: 8-bit integers
//! - `oklch`: `l` and `c` to 4 decimals, `h` to 2
//! - `hsl` / `hsb`: integer degrees and percents
//! - `cmyk`: integer percents
//! - `lab` / `lch`: integers

use crate::color::Color;
use crate::space::cielab::CieLab;
use crate::space::cmyk::Cmyk;
use crate::space::hsl::{Hsb, Hsl};
use crate::space::oklch::Oklch;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One displayed format: a canonical CSS string plus structured values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatEntry<T> {
    /// Canonical CSS string (e.g. `rgb(255, 0, 0)`)
    pub css: String,
    /// Structured component values
    pub values: T,
}

/// `rgb` component values (8-bit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RgbValues {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

/// `oklch` component values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OklchValues {
    /// Lightness, 4 decimals
    pub l: f64,
    /// Chroma, 4 decimals
    pub c: f64,
    /// Hue in degrees, 2 decimals
    pub h: f64,
}

/// `hsl` component values (integer display form).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HslValues {
    /// Hue in degrees [0, 360]
    pub h: u16,
    /// Saturation percent [0, 100]
    pub s: u8,
    /// Lightness percent [0, 100]
    pub l: u8,
}

/// `hsb` component values (integer display form).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HsbValues {
    /// Hue in degrees [0, 360]
    pub h: u16,
    /// Saturation percent [0, 100]
    pub s: u8,
    /// Brightness percent [0, 100]
    pub b: u8,
}

/// `cmyk` component values (integer percents).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CmykValues {
    /// Cyan percent
    pub c: u8,
    /// Magenta percent
    pub m: u8,
    /// Yellow percent
    pub y: u8,
    /// Key (black) percent
    pub k: u8,
}

/// `lab` component values (CIE L\*a\*b\*, integers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LabValues {
    /// Lightness L\*
    pub l: i32,
    /// Green-red axis a\*
    pub a: i32,
    /// Blue-yellow axis b\*
    pub b: i32,
}

/// `lch` component values (CIE LCh(ab), integers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LchValues {
    /// Lightness L\*
    pub l: i32,
    /// Chroma C\*
    pub c: i32,
    /// Hue angle in degrees
    pub h: i32,
}

/// The eight-format display record for one color.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorFormats {
    /// Uppercase `#RRGGBB` (css and values are the same string)
    pub hex: FormatEntry<String>,
    /// `rgb(r, g, b)`
    pub rgb: FormatEntry<RgbValues>,
    /// `oklch(l% c h)`
    pub oklch: FormatEntry<OklchValues>,
    /// `hsl(h, s%, l%)`
    pub hsl: FormatEntry<HslValues>,
    /// `hsb(h, s%, b%)`
    pub hsb: FormatEntry<HsbValues>,
    /// `cmyk(c%, m%, y%, k%)`
    pub cmyk: FormatEntry<CmykValues>,
    /// `lab(l a b)`
    pub lab: FormatEntry<LabValues>,
    /// `lch(l c h)`
    pub lch: FormatEntry<LchValues>,
}

/// Round to `digits` decimal places.
#[inline]
fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

/// Build the eight-format record for a color.
///
/// Deterministic: identical input bytes produce identical strings.
///
/// # Examples
///
/// ```
/// use hueforge_core::color::Color;
/// use hueforge_core::formats::build_color_formats;
///
/// let formats = build_color_formats(&Color::from_srgb8(255, 0, 0));
/// assert_eq!(formats.hex.css, "#FF0000");
/// assert_eq!(formats.rgb.css, "rgb(255, 0, 0)");
/// assert_eq!(formats.hsl.css, "hsl(0, 100%, 50%)");
/// ```
#[must_use]
pub fn build_color_formats(color: &Color) -> ColorFormats {
    let [r, g, b] = color.to_srgb8();
    let hex = color.to_hex();

    let oklch = Oklch::from_color(color);
    let ol = round_to(oklch.l, 4);
    let oc = round_to(oklch.c, 4);
    let oh = round_to(oklch.h, 2);

    let hsl = Hsl::from_color(color);
    let hsl_h = hsl.h.round() as u16;
    let hsl_s = hsl.s.round() as u8;
    let hsl_l = hsl.l.round() as u8;

    let hsb = Hsb::from_color(color);
    let hsb_h = hsb.h.round() as u16;
    let hsb_s = hsb.s.round() as u8;
    let hsb_b = hsb.b.round() as u8;

    let cmyk = Cmyk::from_color(color);
    let (cc, cm, cy, ck) = (
        cmyk.c.round() as u8,
        cmyk.m.round() as u8,
        cmyk.y.round() as u8,
        cmyk.k.round() as u8,
    );

    let lab = CieLab::from_color(color);
    let lch = lab.to_lch();
    let (lab_l, lab_a, lab_b) = (
        lab.l.round() as i32,
        lab.a.round() as i32,
        lab.b.round() as i32,
    );
    let (lch_l, lch_c, lch_h) = (
        lch.l.round() as i32,
        lch.c.round() as i32,
        lch.h.round() as i32,
    );

    ColorFormats {
        hex: FormatEntry {
            css: hex.clone(),
            values: hex,
        },
        rgb: FormatEntry {
            css: format!("rgb({r}, {g}, {b})"),
            values: RgbValues { r, g, b },
        },
        oklch: FormatEntry {
            css: format!("oklch({:.2}% {:.4} {:.2})", ol * 100.0, oc, oh),
            values: OklchValues {
                l: ol,
                c: oc,
                h: oh,
            },
        },
        hsl: FormatEntry {
            css: format!("hsl({hsl_h}, {hsl_s}%, {hsl_l}%)"),
            values: HslValues {
                h: hsl_h,
                s: hsl_s,
                l: hsl_l,
            },
        },
        hsb: FormatEntry {
            css: format!("hsb({hsb_h}, {hsb_s}%, {hsb_b}%)"),
            values: HsbValues {
                h: hsb_h,
                s: hsb_s,
                b: hsb_b,
            },
        },
        cmyk: FormatEntry {
            css: format!("cmyk({cc}%, {cm}%, {cy}%, {ck}%)"),
            values: CmykValues {
                c: cc,
                m: cm,
                y: cy,
                k: ck,
            },
        },
        lab: FormatEntry {
            css: format!("lab({lab_l} {lab_a} {lab_b})"),
            values: LabValues {
                l: lab_l,
                a: lab_a,
                b: lab_b,
            },
        },
        lch: FormatEntry {
            css: format!("lch({lch_l} {lch_c} {lch_h})"),
            values: LchValues {
                l: lch_l,
                c: lch_c,
                h: lch_h,
            },
        },
    }
}
