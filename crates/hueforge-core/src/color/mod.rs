//! Color representation and conversion.
//!
//! This module provides the core `Color` type which represents colors
//! in both sRGB (gamma-corrected) and linear RGB spaces.

/// sRGB gamma correction transfer functions.
///
/// # Background
///
/// The sRGB color space uses a non-linear transfer function (gamma curve)
/// that approximates human visual perception. Displays emit light linearly,
/// but human vision perceives brightness logarithmically; the sRGB gamma
/// curve compensates so that perceptual steps appear uniform.
///
/// # Mathematical Specification (IEC 61966-2-1:1999)
///
/// ```text
/// sRGB → Linear:
///   if sRGB ≤ 0.04045:  linear = sRGB / 12.92
///   else:               linear = ((sRGB + 0.055) / 1.055)^2.4
///
/// Linear → sRGB:
///   if linear ≤ 0.0031308:  sRGB = linear × 12.92
///   else:                   sRGB = 1.055 × linear^(1/2.4) - 0.055
/// ```
pub mod gamma {
    /// Converts an sRGB channel value (0.0-1.0) to linear RGB.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hueforge_core::gamma::srgb_to_linear;
    ///
    /// assert_eq!(srgb_to_linear(0.0), 0.0);
    /// assert!((srgb_to_linear(1.0) - 1.0).abs() < 0.0001);
    /// // Mid gray (sRGB 0.5) → linear ~0.214
    /// assert!((srgb_to_linear(0.5) - 0.214).abs() < 0.01);
    /// ```
    #[inline]
    #[must_use]
    pub fn srgb_to_linear(channel: f64) -> f64 {
        if channel <= 0.04045 {
            channel / 12.92
        } else {
            ((channel + 0.055) / 1.055).powf(2.4)
        }
    }

    /// Converts a linear RGB channel value (0.0-1.0) to sRGB.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hueforge_core::gamma::linear_to_srgb;
    ///
    /// assert_eq!(linear_to_srgb(0.0), 0.0);
    /// assert!((linear_to_srgb(1.0) - 1.0).abs() < 0.0001);
    /// assert!((linear_to_srgb(0.214) - 0.5).abs() < 0.01);
    /// ```
    #[inline]
    #[must_use]
    pub fn linear_to_srgb(channel: f64) -> f64 {
        if channel <= 0.0031308 {
            channel * 12.92
        } else {
            1.055 * channel.powf(1.0 / 2.4) - 0.055
        }
    }
}

use core::fmt;

/// A color represented in both sRGB and linear RGB color spaces.
///
/// All channels are stored as `f64` in the range [0.0, 1.0].
///
/// # Design
///
/// Both the sRGB and linear representations are stored to avoid repeated
/// gamma conversions. Colors are created once per cluster candidate and
/// read many times by the naming, accessibility, and export stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// sRGB channels (gamma-corrected, 0.0-1.0)
    pub srgb: [f64; 3],
    /// Linear RGB channels (0.0-1.0)
    pub linear: [f64; 3],
}

impl Color {
    /// Creates a color from 8-bit sRGB values (0-255).
    ///
    /// # Examples
    ///
    /// ```
    /// use hueforge_core::color::Color;
    ///
    /// let orange = Color::from_srgb8(255, 128, 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_srgb8(r: u8, g: u8, b: u8) -> Self {
        let srgb = [
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        ];

        let linear = [
            gamma::srgb_to_linear(srgb[0]),
            gamma::srgb_to_linear(srgb[1]),
            gamma::srgb_to_linear(srgb[2]),
        ];

        Self { srgb, linear }
    }

    /// Creates a color from normalized sRGB values (0.0-1.0).
    #[inline]
    #[must_use]
    pub fn from_srgb(r: f64, g: f64, b: f64) -> Self {
        let srgb = [r, g, b];
        let linear = [
            gamma::srgb_to_linear(r),
            gamma::srgb_to_linear(g),
            gamma::srgb_to_linear(b),
        ];

        Self { srgb, linear }
    }

    /// Creates a color from linear RGB values.
    ///
    /// Channels are clamped to [0.0, 1.0] before gamma encoding, so slightly
    /// out-of-gamut results from color space inversions land on the gamut
    /// boundary instead of producing invalid sRGB.
    #[inline]
    #[must_use]
    pub fn from_linear(r: f64, g: f64, b: f64) -> Self {
        let linear = [r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)];
        let srgb = [
            gamma::linear_to_srgb(linear[0]),
            gamma::linear_to_srgb(linear[1]),
            gamma::linear_to_srgb(linear[2]),
        ];

        Self { srgb, linear }
    }

    /// Returns the sRGB representation as 8-bit values (0-255).
    ///
    /// # Examples
    ///
    /// ```
    /// use hueforge_core::color::Color;
    ///
    /// let color = Color::from_srgb(0.5, 0.25, 0.75);
    /// let [r, g, b] = color.to_srgb8();
    /// assert_eq!(r, 128);
    /// assert_eq!(g, 64);
    /// assert_eq!(b, 191);
    /// ```
    #[inline]
    #[must_use]
    pub fn to_srgb8(&self) -> [u8; 3] {
        [
            (self.srgb[0].clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.srgb[1].clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.srgb[2].clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }

    /// Creates a color from a hex string (e.g., "#FF8000" or "FF8000").
    ///
    /// Accepts 6-character hex strings with or without the leading `#`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hueforge_core::color::Color;
    ///
    /// let orange = Color::from_hex("#FF8000").unwrap();
    /// assert_eq!(orange.to_srgb8(), [255, 128, 0]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string (after stripping `#`) is not exactly
    /// 6 hexadecimal characters.
    pub fn from_hex(hex: &str) -> Result<Self, String> {
        let hex = hex.trim_start_matches('#');

        if hex.len() != 6 {
            return Err(format!("Hex color must be 6 characters, got {}", hex.len()));
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|_| format!("Invalid hex color: bad red channel '{}'", &hex[0..2]))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|_| format!("Invalid hex color: bad green channel '{}'", &hex[2..4]))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|_| format!("Invalid hex color: bad blue channel '{}'", &hex[4..6]))?;

        Ok(Self::from_srgb8(r, g, b))
    }

    /// Converts the color to an uppercase hex string (e.g., "#FF8000").
    ///
    /// # Examples
    ///
    /// ```
    /// use hueforge_core::color::Color;
    ///
    /// let orange = Color::from_srgb8(255, 128, 0);
    /// assert_eq!(orange.to_hex(), "#FF8000");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_srgb8();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// Converts to OKLCh color space.
    #[must_use]
    pub fn to_oklch(&self) -> crate::space::oklch::Oklch {
        crate::space::oklch::Oklch::from_color(self)
    }

    /// Creates a color from OKLCh coordinates.
    #[must_use]
    pub fn from_oklch(l: f64, c: f64, h: f64) -> Self {
        crate::space::oklch::Oklch::new(l, c, h).to_color()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_srgb8();
        write!(f, "rgb({r}, {g}, {b})")
    }
}
