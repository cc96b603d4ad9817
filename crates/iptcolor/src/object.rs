use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    adjust, format, from_24bit, in_gamut, ipt_to_rgb, maximize_chroma, parse, rgb_to_ipt,
    to_24bit, to_eq_channels, Notation,
};
use crate::{Float, PackedIpt};

/// A high-resolution IPT color with alpha.
///
/// IPT is an opponent color space with one intensity axis, I, and two
/// chroma axes, P for protan or red-green and T for tritan or yellow-blue.
/// Every color object has four channels, all stored with unit range:
///
///   * **Intensity** is perceptual lightness, with 0 for black and 1 for
///     white.
///   * **Chroma A** and **chroma B** are the P and T axes, with 0.5 as
///     neutral. Arithmetic on chroma uses the *recentered* range `-1..=1`
///     instead, with 0 as neutral.
///   * **Alpha** is opacity, with 0 for fully transparent and 1 for fully
///     opaque.
///
/// # Gamut
///
/// Only a small part of the four-dimensional unit cube corresponds to
/// displayable RGB colors. Colors converted from RGB are in gamut, as are
/// colors returned by [`Ipt::limit_to_gamut`] and all editors that change
/// chroma. Constructing a color with [`Ipt::new`] or editing only intensity
/// with [`Ipt::lighten`] or [`Ipt::darken`] may produce an out-of-gamut
/// color, which converts to RGB by clamping.
///
/// # Equality and Hashing
///
/// Colors implement `Eq` and `Hash` by replacing not-a-numbers with zero,
/// rounding away floating point noise, and comparing the resulting bits.
///
/// # Packing
///
/// [`PackedIpt`] stores a color in 32 bits. The conversion in either
/// direction is available through `From`.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, sequence, module = "iptcolor")
)]
#[derive(Clone, Copy)]
pub struct Ipt {
    channels: [Float; 4],
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Ipt {
    // The following constructors come in pairs, once for pyffi and once without
    // pyffi, since #[new] and #[staticmethod] do not work with #[cfg_attr()].

    /// Instantiate a new color with the given intensity, chroma A, chroma B,
    /// and alpha, all stored with unit range.
    ///
    /// ```
    /// # use iptcolor::Ipt;
    /// let gray = Ipt::new(0.5, 0.5, 0.5, 1.0);
    /// assert_eq!(gray.as_ref(), &[0.5, 0.5, 0.5, 1.0]);
    /// assert!(gray.in_gamut());
    /// ```
    #[cfg(feature = "pyffi")]
    #[new]
    #[inline]
    pub const fn new(intensity: Float, chroma_a: Float, chroma_b: Float, alpha: Float) -> Self {
        Self {
            channels: [intensity, chroma_a, chroma_b, alpha],
        }
    }

    /// Instantiate a new color with the given intensity, chroma A, chroma B,
    /// and alpha, all stored with unit range.
    ///
    /// ```
    /// # use iptcolor::Ipt;
    /// let gray = Ipt::new(0.5, 0.5, 0.5, 1.0);
    /// assert_eq!(gray.as_ref(), &[0.5, 0.5, 0.5, 1.0]);
    /// assert!(gray.in_gamut());
    /// ```
    #[cfg(not(feature = "pyffi"))]
    #[inline]
    pub const fn new(intensity: Float, chroma_a: Float, chroma_b: Float, alpha: Float) -> Self {
        Self {
            channels: [intensity, chroma_a, chroma_b, alpha],
        }
    }

    /// Parse a color from its string representation. <i
    /// class=python-only>Python only!</i>
    ///
    /// This method implements the same functionality as `Ipt`'s `FromStr`
    /// implementation and is available in Python only.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Ipt, crate::error::ColorFormatError> {
        Ipt::from_str(s)
    }

    /// Convert gamma-corrected red, green, blue, and alpha, each with unit
    /// range, to a new IPT color.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_rgb(r: Float, g: Float, b: Float, alpha: Float) -> Self {
        Self::from_channels(adjust::to_channels(&rgb_to_ipt(&[r, g, b]), alpha))
    }

    /// Convert gamma-corrected red, green, blue, and alpha, each with unit
    /// range, to a new IPT color.
    ///
    /// ```
    /// # use iptcolor::Ipt;
    /// let white = Ipt::from_rgb(1.0, 1.0, 1.0, 1.0);
    /// assert_eq!(white, Ipt::new(1.0, 0.5, 0.5, 1.0));
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn from_rgb(r: Float, g: Float, b: Float, alpha: Float) -> Self {
        Self::from_channels(adjust::to_channels(&rgb_to_ipt(&[r, g, b]), alpha))
    }

    /// Convert 24-bit gamma-corrected RGB to a new, fully opaque IPT color.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        let [r, g, b] = from_24bit(r, g, b);
        Self::from_rgb(r, g, b, 1.0)
    }

    /// Convert 24-bit gamma-corrected RGB to a new, fully opaque IPT color.
    ///
    /// ```
    /// # use iptcolor::Ipt;
    /// let teal = Ipt::from_24bit(0, 127, 127);
    /// assert!(teal.in_gamut());
    /// assert_eq!(teal.to_24bit(), [0, 127, 127]);
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        let [r, g, b] = from_24bit(r, g, b);
        Self::from_rgb(r, g, b, 1.0)
    }

    /// Convert an RGBA word with red in the most significant byte and alpha
    /// in the least significant byte to a new IPT color.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_rgba8888(rgba: u32) -> Self {
        Self::from_rgba_bytes(rgba.to_be_bytes())
    }

    /// Convert an RGBA word with red in the most significant byte and alpha
    /// in the least significant byte to a new IPT color.
    ///
    /// ```
    /// # use iptcolor::Ipt;
    /// let orange = Ipt::from_rgba8888(0xff93_00ff);
    /// assert_eq!(orange.to_rgba8888(), 0xff93_00ff);
    /// assert_eq!(orange.alpha(), 1.0);
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn from_rgba8888(rgba: u32) -> Self {
        Self::from_rgba_bytes(rgba.to_be_bytes())
    }

    /// Convert hue in turns, saturation, lightness, and alpha to a new IPT
    /// color.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_hsl(hue: Float, saturation: Float, lightness: Float, alpha: Float) -> Self {
        Self::from_channels(adjust::from_hsl(&[hue, saturation, lightness], alpha))
    }

    /// Convert hue in turns, saturation, lightness, and alpha to a new IPT
    /// color.
    ///
    /// Hue wraps around, with red at 0, green at 1/3, and blue at 2/3.
    ///
    /// ```
    /// # use iptcolor::Ipt;
    /// let red = Ipt::from_hsl(1.0, 1.0, 0.5, 1.0);
    /// assert_eq!(red.to_24bit(), [255, 0, 0]);
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn from_hsl(hue: Float, saturation: Float, lightness: Float, alpha: Float) -> Self {
        Self::from_channels(adjust::from_hsl(&[hue, saturation, lightness], alpha))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Access the intensity.
    #[inline]
    pub fn intensity(&self) -> Float {
        self.channels[0]
    }

    /// Access chroma A, i.e., the stored P axis.
    #[inline]
    pub fn chroma_a(&self) -> Float {
        self.channels[1]
    }

    /// Access chroma B, i.e., the stored T axis.
    #[inline]
    pub fn chroma_b(&self) -> Float {
        self.channels[2]
    }

    /// Access alpha.
    #[inline]
    pub fn alpha(&self) -> Float {
        self.channels[3]
    }

    /// Get all four channels. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn channels(&self) -> [Float; 4] {
        self.channels
    }

    /// Get the number of channels, which is 4. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __len__(&self) -> usize {
        4
    }

    /// Get the channel at the given index. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __getitem__(&self, index: isize) -> PyResult<Float> {
        match index {
            -4..=-1 => Ok(self.channels[(4 + index) as usize]),
            0..=3 => Ok(self.channels[index as usize]),
            _ => Err(pyo3::exceptions::PyIndexError::new_err(
                "Index out of bounds",
            )),
        }
    }

    /// Determine the magnitude of the recentered chroma vector.
    ///
    /// Neutral colors have chroma 0.
    pub fn chroma(&self) -> Float {
        let ([_, p, t], _) = adjust::to_coordinates(&self.channels);
        p.hypot(t)
    }

    /// Determine the angle of the recentered chroma vector in turns.
    ///
    /// The result has range `0..1`. Neutral colors have opponent hue 0.
    pub fn opponent_hue(&self) -> Float {
        let ([_, p, t], _) = adjust::to_coordinates(&self.channels);
        (t.atan2(p) / std::f64::consts::TAU as Float).rem_euclid(1.0)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to gamma-corrected RGB, clamping out-of-gamut
    /// values.
    pub fn to_rgb(&self) -> [Float; 3] {
        let (coordinates, _) = adjust::to_coordinates(&self.channels);
        ipt_to_rgb(&coordinates)
    }

    /// Convert this color to gamma-corrected RGB plus alpha.
    pub fn to_rgba(&self) -> [Float; 4] {
        let [r, g, b] = self.to_rgb();
        [r, g, b, self.alpha().clamp(0.0, 1.0)]
    }

    /// Convert this color to 24-bit gamma-corrected RGB.
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(&self.to_rgb())
    }

    /// Convert this color to 32-bit gamma-corrected RGB plus alpha.
    pub fn to_32bit(&self) -> [u8; 4] {
        let [r, g, b] = self.to_24bit();
        let a = (self.alpha().clamp(0.0, 1.0) * 255.0).round() as u8;
        [r, g, b, a]
    }

    /// Convert this color to an RGBA word with red in the most significant
    /// byte and alpha in the least significant byte.
    pub fn to_rgba8888(&self) -> u32 {
        u32::from_be_bytes(self.to_32bit())
    }

    /// Convert this color to hashed hexadecimal notation with alpha.
    ///
    /// ```
    /// # use iptcolor::Ipt;
    /// assert_eq!(Ipt::from_24bit(255, 0, 0).to_hex_format(), "#ff0000ff");
    /// ```
    pub fn to_hex_format(&self) -> String {
        format!("#{:08x}", self.to_rgba8888())
    }

    /// Pack this color into 32 bits.
    pub fn to_packed(&self) -> PackedIpt {
        PackedIpt::from(*self)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Determine whether this color is in gamut.
    ///
    /// A color is in gamut if its linear RGB coordinates all fall into the
    /// unit range, give or take 2<sup>-16</sup> of floating point noise.
    /// Alpha plays no role.
    ///
    /// ```
    /// # use iptcolor::Ipt;
    /// assert!(Ipt::new(0.5, 0.5, 0.5, 1.0).in_gamut());
    /// assert!(!Ipt::new(0.5, 1.0, 1.0, 1.0).in_gamut());
    /// ```
    pub fn in_gamut(&self) -> bool {
        let (coordinates, _) = adjust::to_coordinates(&self.channels);
        in_gamut(&coordinates)
    }

    /// Limit this color to the gamut.
    ///
    /// This method clamps intensity and alpha to the unit range and, if the
    /// color still is out of gamut, scales the recentered chroma toward
    /// neutral in 32 fixed steps, returning the most saturated step that fits.
    /// Intensity and alpha never change beyond the clamping.
    ///
    /// ```
    /// # use iptcolor::Ipt;
    /// let vivid = Ipt::new(0.5, 1.0, 1.0, 1.0);
    /// let limited = vivid.limit_to_gamut();
    /// assert!(limited.in_gamut());
    /// assert_eq!(limited.intensity(), 0.5);
    /// assert_eq!(limited.alpha(), 1.0);
    /// assert!(limited.chroma() < vivid.chroma());
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn limit_to_gamut(&self) -> Self {
        Self::from_channels(adjust::limit_channels(&self.channels))
    }

    /// Determine whether this color's packed version is the same color,
    /// i.e., whether packing loses no information.
    pub fn is_packable(&self) -> bool {
        Ipt::from(self.to_packed()) == *self
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Lighten this color by moving intensity toward 1 by the given fraction
    /// of the distance.
    ///
    /// Since this method only touches intensity, it does not limit the
    /// result to the gamut.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn lighten(&self, change: Float) -> Self {
        let [i, a, b, alpha] = self.channels;
        Self::new(adjust::toward(i, 1.0, change), a, b, alpha)
    }

    /// Darken this color by moving intensity toward 0 by the given fraction
    /// of the distance.
    ///
    /// Since this method only touches intensity, it does not limit the
    /// result to the gamut.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn darken(&self, change: Float) -> Self {
        let [i, a, b, alpha] = self.channels;
        Self::new(adjust::toward(i, 0.0, change), a, b, alpha)
    }

    /// Make this color more opaque by moving alpha toward 1 by the given
    /// fraction of the distance.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn blot(&self, change: Float) -> Self {
        let [i, a, b, alpha] = self.channels;
        Self::new(i, a, b, adjust::toward(alpha, 1.0, change))
    }

    /// Make this color more transparent by moving alpha toward 0 by the given
    /// fraction of the distance.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn fade(&self, change: Float) -> Self {
        let [i, a, b, alpha] = self.channels;
        Self::new(i, a, b, adjust::toward(alpha, 0.0, change))
    }

    /// Move chroma A toward its upper end, which is more red, by the given
    /// fraction of the distance, then limit the result.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn chroma_a_up(&self, change: Float) -> Self {
        let [i, a, b, alpha] = self.channels;
        Self::new(i, adjust::toward(a, 1.0, change), b, alpha).limit_to_gamut()
    }

    /// Move chroma A toward its lower end, which is more green, by the given
    /// fraction of the distance, then limit the result.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn chroma_a_down(&self, change: Float) -> Self {
        let [i, a, b, alpha] = self.channels;
        Self::new(i, adjust::toward(a, 0.0, change), b, alpha).limit_to_gamut()
    }

    /// Move chroma B toward its upper end, which is more yellow, by the given
    /// fraction of the distance, then limit the result.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn chroma_b_up(&self, change: Float) -> Self {
        let [i, a, b, alpha] = self.channels;
        Self::new(i, a, adjust::toward(b, 1.0, change), alpha).limit_to_gamut()
    }

    /// Move chroma B toward its lower end, which is more blue, by the given
    /// fraction of the distance, then limit the result.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn chroma_b_down(&self, change: Float) -> Self {
        let [i, a, b, alpha] = self.channels;
        Self::new(i, a, adjust::toward(b, 0.0, change), alpha).limit_to_gamut()
    }

    /// Make this color more colorful by scaling the recentered chroma by
    /// `1 + change`, then limit the result.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn enrich(&self, change: Float) -> Self {
        Self::from_channels(adjust::scale_chroma(&self.channels, 1.0 + change))
    }

    /// Make this color less colorful by scaling the recentered chroma by
    /// `1 - change`, then limit the result.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn dullen(&self, change: Float) -> Self {
        Self::from_channels(adjust::scale_chroma(&self.channels, 1.0 - change))
    }

    /// Make this color as colorful as the gamut allows without changing
    /// intensity or opponent hue.
    ///
    /// Since the limiter desaturates in steps of 1/32, a color already on
    /// the gamut surface may come out slightly less colorful.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn maximize_chroma(&self) -> Self {
        let (coordinates, alpha) = adjust::to_coordinates(&self.channels);
        Self::from_channels(adjust::to_channels(
            &maximize_chroma(&coordinates),
            alpha.clamp(0.0, 1.0),
        ))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Determine the hue in turns of this color's gamma-corrected RGB.
    pub fn hue(&self) -> Float {
        adjust::to_hsl(&self.channels)[0]
    }

    /// Determine the HSL saturation of this color's gamma-corrected RGB.
    pub fn saturation(&self) -> Float {
        adjust::to_hsl(&self.channels)[1]
    }

    /// Determine the HSL lightness of this color's gamma-corrected RGB.
    pub fn lightness(&self) -> Float {
        adjust::to_hsl(&self.channels)[2]
    }

    /// Edit this color's hue, saturation, lightness, and opacity by adding
    /// the given changes, then limit the result.
    ///
    /// Hue is measured in turns and wraps around, so that a change of 1 has
    /// no effect. Saturation, lightness, and opacity clamp to the unit range.
    /// Colors with an intensity of 0.001 or less become black with neutral
    /// chroma and the edited alpha.
    ///
    /// ```
    /// # use iptcolor::Ipt;
    /// let red = Ipt::from_24bit(255, 0, 0);
    /// let green = red.edit_hsl(1.0 / 3.0, 0.0, 0.0, 0.0);
    /// assert_eq!(green.to_24bit(), [0, 255, 0]);
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn edit_hsl(
        &self,
        hue: Float,
        saturation: Float,
        lightness: Float,
        opacity: Float,
    ) -> Self {
        Self::from_channels(adjust::edit_hsl(
            &self.channels,
            &[hue, saturation, lightness, opacity],
        ))
    }

    /// Rotate this color's hue by the given number of turns, then limit the
    /// result.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn rotate_hue(&self, turns: Float) -> Self {
        self.edit_hsl(turns, 0.0, 0.0, 0.0)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Move this color's intensity into the half of the range opposite to the
    /// contrasting color's, then limit the result.
    ///
    /// Against a dark color, intensity `i` becomes `0.55 + 0.45 * i`. Against
    /// a light one, it becomes `0.45 * i`.
    ///
    /// ```
    /// # use iptcolor::Ipt;
    /// let text = Ipt::new(0.3, 0.5, 0.5, 1.0);
    /// let background = Ipt::new(0.1, 0.5, 0.5, 1.0);
    /// assert!(text.inverse_lightness(&background).intensity() > 0.55);
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn inverse_lightness(&self, contrasting: &Self) -> Self {
        Self::from_channels(adjust::inverse_lightness(
            &self.channels,
            contrasting.intensity(),
        ))
    }

    /// Average this color's intensity with the contrasting color's intensity
    /// shifted by half the range, then limit the result.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn differentiate_lightness(&self, contrasting: &Self) -> Self {
        Self::from_channels(adjust::differentiate_lightness(
            &self.channels,
            contrasting.intensity(),
        ))
    }

    /// Differentiate this color's intensity against itself, then limit the
    /// result.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn offset_lightness(&self) -> Self {
        Self::from_channels(adjust::offset_lightness(&self.channels))
    }

    /// Weaken this color's tint so that only the given fraction of its
    /// deviation from neutral gray at intensity 0.5 remains, then limit the
    /// result.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn lessen_change(&self, fraction: Float) -> Self {
        Self::from_channels(adjust::lessen_change(&self.channels, fraction))
    }

    /// Interpolate between this and the other color channel by channel, then
    /// limit the result.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn lerp(&self, other: &Self, fraction: Float) -> Self {
        Self::from_channels(adjust::lerp(&self.channels, &other.channels, fraction))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color to its `ipt()` string representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

// --------------------------------------------------------------------------------------------------------------------

impl Ipt {
    /// Create a new color from the stored channels.
    #[inline]
    pub(crate) const fn from_channels(channels: [Float; 4]) -> Self {
        Self { channels }
    }

    /// Create a new color from gamma-corrected RGBA bytes.
    fn from_rgba_bytes(bytes: [u8; 4]) -> Self {
        let [r, g, b, a] = bytes;
        let [r, g, b] = from_24bit(r, g, b);
        Self::from_rgb(r, g, b, a as Float / 255.0)
    }
}

impl Default for Ipt {
    /// Create an instance of the default color, which is opaque black.
    #[inline]
    fn default() -> Self {
        Self::new(0.0, 0.5, 0.5, 1.0)
    }
}

impl FromStr for Ipt {
    type Err = crate::error::ColorFormatError;

    /// Instantiate a color from its string representation.
    ///
    /// Before parsing the string slice, this method trims any leading and
    /// trailing white space while also converting ASCII letters to lower case.
    ///
    /// The *hashed notation* has three, four, six, or eight hexadecimal
    /// digits, e.g., `#123` or `#cafe00ff`. It specifies gamma-corrected RGB
    /// with optional alpha, which is converted to IPT. The short forms repeat
    /// every digit, so the red coordinate in `#123` is 0x11/0xff.
    ///
    /// The *functional notation* `ipt(i a b)` or `ipt(i a b / alpha)` specifies
    /// the stored channels directly.
    ///
    /// ```
    /// # use iptcolor::{Ipt, error::ColorFormatError};
    /// # use std::str::FromStr;
    /// let gray = Ipt::from_str("ipt(0.5 0.5 0.5 / 0.25)")?;
    /// assert_eq!(gray, Ipt::new(0.5, 0.5, 0.5, 0.25));
    ///
    /// let red: Ipt = "#f00".parse()?;
    /// assert_eq!(red.to_24bit(), [255, 0, 0]);
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (notation, [c1, c2, c3, c4]) = parse(s)?;
        Ok(match notation {
            Notation::Rgb => Self::from_rgb(c1, c2, c3, c4),
            Notation::Ipt => Self::new(c1, c2, c3, c4),
        })
    }
}

impl TryFrom<&str> for Ipt {
    type Error = crate::error::ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ipt::from_str(value)
    }
}

impl AsRef<[Float; 4]> for Ipt {
    fn as_ref(&self) -> &[Float; 4] {
        &self.channels
    }
}

impl std::ops::Index<usize> for Ipt {
    type Output = Float;

    /// Access the channel with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `3 < index`.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.channels[index]
    }
}

impl std::hash::Hash for Ipt {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        to_eq_channels(&self.channels).hash(state);
    }
}

impl PartialEq for Ipt {
    /// Determine whether this color equals the other color.
    ///
    /// Both this method and [`Ipt::hash`](struct.Ipt.html#method.hash)
    /// replace not-a-numbers with zero, round away the least significant
    /// digits, and drop the sign of negative zero before comparing bits.
    fn eq(&self, other: &Self) -> bool {
        self.channels == other.channels
            || to_eq_channels(&self.channels) == to_eq_channels(&other.channels)
    }
}

impl Eq for Ipt {}

impl std::fmt::Debug for Ipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [c1, c2, c3, c4] = self.channels;
        f.write_fmt(format_args!("Ipt([{}, {}, {}, {}])", c1, c2, c3, c4))
    }
}

impl std::fmt::Display for Ipt {
    /// Format this color with the `ipt()` function.
    ///
    /// This method respects the formatter's precision, defaulting to 5 digits
    /// past the decimal, and omits alpha for opaque colors.
    ///
    /// ```
    /// # use iptcolor::Ipt;
    /// let color = Ipt::new(0.5, 0.123456, 0.5, 0.25);
    /// assert_eq!(format!("{}", color), "ipt(0.5 0.12346 0.5 / 0.25)");
    /// assert_eq!(format!("{:.2}", color), "ipt(0.5 0.12 0.5 / 0.25)");
    /// assert_eq!(Ipt::default().to_string(), "ipt(0 0.5 0.5)");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format(&self.channels, f)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::Ipt;
    use crate::assert_same_ipt;
    use crate::error::ColorFormatError;
    use crate::Float;
    use approx::assert_abs_diff_eq;
    use std::str::FromStr;

    fn assert_rgb_within_one(actual: [u8; 3], expected: [u8; 3]) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!(
                a.abs_diff(*e) <= 1,
                "{:?} differs from {:?} by more than 1",
                actual,
                expected
            );
        }
    }

    #[test]
    fn test_teal() {
        let teal = Ipt::from_24bit(0, 127, 127);
        assert!(teal.in_gamut(), "teal should be in gamut");
        assert_rgb_within_one(teal.to_24bit(), [0, 127, 127]);
        assert_eq!(teal.alpha(), 1.0);
        assert_eq!(teal.limit_to_gamut(), teal);
    }

    #[test]
    fn test_round_trip() {
        for r in (0..=255).step_by(17) {
            for g in (0..=255).step_by(17) {
                for b in (0..=255).step_by(17) {
                    let color = Ipt::from_24bit(r, g, b);
                    assert!(color.in_gamut(), "{:?} should be in gamut", [r, g, b]);
                    assert_eq!(color.to_24bit(), [r, g, b]);
                }
            }
        }
    }

    #[test]
    fn test_limit_scenario() {
        let limited = Ipt::new(0.5, 1.0, 1.0, 1.0).limit_to_gamut();
        assert!(limited.in_gamut(), "limited color should be in gamut");
        assert_eq!(limited.intensity(), 0.5);
        assert_eq!(limited.alpha(), 1.0);
        assert_same_ipt!(limited, Ipt::new(0.5, 0.71875, 0.71875, 1.0));
    }

    #[test]
    fn test_neutral_grays() {
        for step in 0..=100 {
            let gray = Ipt::new(step as Float / 100.0, 0.5, 0.5, 1.0);
            assert!(gray.in_gamut(), "{:?} should be in gamut", gray);
            assert_eq!(gray.limit_to_gamut(), gray);
            assert_eq!(gray.chroma(), 0.0);
        }
    }

    #[test]
    fn test_alpha_preservation() {
        let color = Ipt::from_rgb(0.8, 0.3, 0.1, 0.4);
        let other = Ipt::from_rgb(0.1, 0.1, 0.6, 0.4);

        for edited in [
            color.lighten(0.3),
            color.darken(0.3),
            color.chroma_a_up(0.5),
            color.chroma_a_down(0.5),
            color.chroma_b_up(0.5),
            color.chroma_b_down(0.5),
            color.enrich(0.5),
            color.dullen(0.5),
            color.maximize_chroma(),
            color.edit_hsl(0.3, -0.2, 0.1, 0.0),
            color.rotate_hue(0.5),
            color.inverse_lightness(&other),
            color.differentiate_lightness(&other),
            color.offset_lightness(),
            color.lessen_change(0.5),
            color.lerp(&other, 0.7),
        ] {
            assert_eq!(edited.alpha(), 0.4, "{:?} should have same alpha", edited);
        }

        assert_abs_diff_eq!(color.blot(0.5).alpha(), 0.7, epsilon = 1e-12);
        assert_abs_diff_eq!(color.fade(0.5).alpha(), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_limiting_editors() {
        let color = Ipt::from_24bit(40, 160, 90);
        for edited in [
            color.chroma_a_up(1.0),
            color.chroma_a_down(1.0),
            color.chroma_b_up(1.0),
            color.chroma_b_down(1.0),
            color.enrich(3.0),
            color.maximize_chroma(),
            color.rotate_hue(0.37),
            color.inverse_lightness(&Ipt::default()),
            color.differentiate_lightness(&color),
        ] {
            assert!(edited.in_gamut(), "{:?} should be in gamut", edited);
        }

        assert!(color.dullen(0.5).chroma() < color.chroma());
        assert_eq!(color.dullen(1.0).chroma(), 0.0);
        assert!(color.chroma_a_up(0.5).chroma_a() > color.chroma_a());
        assert!(color.chroma_b_down(0.5).chroma_b() < color.chroma_b());
    }

    #[test]
    fn test_hue_wrap() {
        for rgb in [
            [0_u8, 127, 127],
            [255, 147, 0],
            [200, 30, 60],
            [20, 20, 220],
            [128, 128, 128],
            [250, 250, 240],
        ] {
            let color = Ipt::from_24bit(rgb[0], rgb[1], rgb[2]);
            assert_rgb_within_one(color.rotate_hue(1.0).to_24bit(), rgb);
            assert_rgb_within_one(color.rotate_hue(-3.0).to_24bit(), rgb);
        }
    }

    #[test]
    fn test_hsl() {
        let red = Ipt::from_24bit(255, 0, 0);
        // Noise may put red's hue just below a full turn.
        let hue = red.hue();
        assert!(hue.min(1.0 - hue) < 1e-6, "red has hue {}", hue);
        assert_abs_diff_eq!(red.saturation(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(red.lightness(), 0.5, epsilon = 1e-6);

        let blue = red.rotate_hue(2.0 / 3.0);
        assert_rgb_within_one(blue.to_24bit(), [0, 0, 255]);

        let gray = red.edit_hsl(0.0, -1.0, 0.0, 0.0);
        assert_rgb_within_one(gray.to_24bit(), [128, 128, 128]);

        let black = Ipt::new(0.0005, 0.7, 0.3, 1.0);
        assert_eq!(
            black.edit_hsl(0.2, 0.2, 0.2, -0.5),
            Ipt::new(0.0, 0.5, 0.5, 0.5)
        );
    }

    #[test]
    fn test_rgba() {
        let color = Ipt::from_rgba8888(0x336699cc);
        assert_eq!(color.to_rgba8888(), 0x336699cc);
        assert_eq!(color.to_32bit(), [0x33, 0x66, 0x99, 0xcc]);
        assert_eq!(color.to_hex_format(), "#336699cc");
        assert_abs_diff_eq!(color.alpha(), 0.8, epsilon = 1e-12);

        let [r, g, b, a] = color.to_rgba();
        assert_abs_diff_eq!(r, 0.2, epsilon = 1e-9);
        assert_abs_diff_eq!(g, 0.4, epsilon = 1e-9);
        assert_abs_diff_eq!(b, 0.6, epsilon = 1e-9);
        assert_abs_diff_eq!(a, 0.8, epsilon = 1e-9);
    }

    #[test]
    fn test_opponent_hue() {
        assert_eq!(Ipt::new(0.5, 0.5, 0.5, 1.0).opponent_hue(), 0.0);
        assert_abs_diff_eq!(
            Ipt::new(0.5, 0.5, 0.75, 1.0).opponent_hue(),
            0.25,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            Ipt::new(0.5, 0.25, 0.5, 1.0).opponent_hue(),
            0.5,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            Ipt::new(0.5, 0.5, 0.25, 1.0).chroma(),
            0.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_parse_and_format() -> Result<(), ColorFormatError> {
        let color = Ipt::from_str("ipt(0.4 0.55 0.45 / 0.5)")?;
        assert_eq!(color, Ipt::new(0.4, 0.55, 0.45, 0.5));
        assert_eq!(color.to_string(), "ipt(0.4 0.55 0.45 / 0.5)");
        assert_eq!(Ipt::from_str(&color.to_string())?, color);

        let hex = Ipt::try_from("#0080ff80")?;
        assert_eq!(hex.to_32bit(), [0x00, 0x80, 0xff, 0x80]);
        assert_eq!(Ipt::from_str("#0f8")?.to_24bit(), [0x00, 0xff, 0x88]);

        assert_eq!(
            Ipt::from_str("lab(1 2 3)"),
            Err(ColorFormatError::UnknownFormat)
        );
        Ok(())
    }

    #[test]
    fn test_equality() {
        use std::collections::HashSet;

        let one = Ipt::new(0.1 + 0.2, 0.5, 0.5, 1.0);
        let two = Ipt::new(0.3, 0.5, 0.5, 1.0);
        assert_eq!(one, two);

        let mut set = HashSet::new();
        set.insert(one);
        assert!(set.contains(&two), "equal colors should hash the same");
        assert_eq!(
            Ipt::new(Float::NAN, 0.5, 0.5, 1.0),
            Ipt::new(0.0, 0.5, 0.5, 1.0)
        );
        assert_ne!(two, Ipt::new(0.3, 0.5, 0.5, 0.9));
    }
}
