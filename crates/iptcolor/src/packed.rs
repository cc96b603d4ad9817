use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{pack, packed_in_gamut, settle_in_gamut, unpack, RESERVED_BIT};
use crate::{Float, Ipt};

/// An IPT color packed into 32 bits.
///
/// The four byte lanes hold, starting with the least significant byte:
///
///   * intensity, rounded to one of 256 levels;
///   * chroma A, with 128 as neutral;
///   * chroma B, with 128 as neutral;
///   * alpha, with bit 24 always clear and the seven bits 25–31 holding one of
///     128 levels, so that the lane's byte value is always even and opaque is
///     0xfe.
///
/// Since bit 24 is the least significant exponent bit of an IEEE 754 single
/// precision number, [`PackedIpt::to_float_bits`] never produces a
/// not-a-number or infinity. That makes it safe to store packed colors in
/// float-typed vertex attributes.
///
/// Unpacking and then repacking a color is exact. Packing a high-resolution
/// color rounds it to the lattice of representable colors, which may move a
/// color on the gamut surface slightly out of gamut. [`PackedIpt::limit_to_gamut`]
/// always returns an in-gamut word.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "iptcolor")
)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct PackedIpt(u32);

#[cfg_attr(feature = "pyffi", pymethods)]
impl PackedIpt {
    /// Create a new packed color from its bits, clearing the reserved bit 24.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & !RESERVED_BIT)
    }

    /// Create a new packed color from its bits, clearing the reserved bit 24.
    ///
    /// ```
    /// # use iptcolor::PackedIpt;
    /// let color = PackedIpt::from_bits(0xff80_80ff);
    /// assert_eq!(color.to_bits(), 0xfe80_80ff);
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & !RESERVED_BIT)
    }

    /// Reinterpret a float-typed storage slot as a packed color.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_float_bits(value: f32) -> Self {
        Self::from_bits(value.to_bits())
    }

    /// Reinterpret a float-typed storage slot as a packed color.
    #[cfg(not(feature = "pyffi"))]
    pub fn from_float_bits(value: f32) -> Self {
        Self::from_bits(value.to_bits())
    }

    /// Convert an RGBA word with red in the most significant byte to a packed
    /// color.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_rgba8888(rgba: u32) -> Self {
        Self::from(Ipt::from_rgba8888(rgba))
    }

    /// Convert an RGBA word with red in the most significant byte to a packed
    /// color.
    ///
    /// ```
    /// # use iptcolor::PackedIpt;
    /// let black = PackedIpt::from_rgba8888(0x0000_00ff);
    /// assert_eq!(black.to_bits(), 0xfe80_8000);
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn from_rgba8888(rgba: u32) -> Self {
        Self::from(Ipt::from_rgba8888(rgba))
    }

    /// Parse a color from its string representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Self, crate::error::ColorFormatError> {
        Self::from_str(s)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the bits.
    #[inline]
    pub const fn to_bits(&self) -> u32 {
        self.0
    }

    /// Reinterpret the bits as a single precision floating point number.
    ///
    /// The result is never a not-a-number or infinity.
    ///
    /// ```
    /// # use iptcolor::PackedIpt;
    /// let color = PackedIpt::from_bits(u32::MAX);
    /// assert!(color.to_float_bits().is_finite());
    /// assert_eq!(PackedIpt::from_float_bits(color.to_float_bits()), color);
    /// ```
    #[inline]
    pub fn to_float_bits(&self) -> f32 {
        f32::from_bits(self.0)
    }

    /// Get the intensity lane.
    #[inline]
    pub const fn intensity_byte(&self) -> u8 {
        self.0 as u8
    }

    /// Get the chroma A lane.
    #[inline]
    pub const fn chroma_a_byte(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Get the chroma B lane.
    #[inline]
    pub const fn chroma_b_byte(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Get the alpha lane, which always is even.
    #[inline]
    pub const fn alpha_byte(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Convert this packed color to an RGBA word with red in the most
    /// significant byte.
    pub fn to_rgba8888(&self) -> u32 {
        Ipt::from(*self).to_rgba8888()
    }

    /// Unpack this color.
    pub fn to_ipt(&self) -> Ipt {
        Ipt::from(*self)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Determine whether the unpacked color is in gamut.
    pub fn in_gamut(&self) -> bool {
        packed_in_gamut(self.0)
    }

    /// Limit the unpacked color to the gamut and pack the result again.
    ///
    /// Rounding the limited color to 8-bit lanes may put it a hair outside
    /// the gamut. In that case, both chroma lanes step toward neutral until
    /// the word is in gamut. Since intensity 0xff has no in-gamut word, it
    /// comes back as 0xfe. Otherwise, intensity and alpha are preserved.
    ///
    /// ```
    /// # use iptcolor::PackedIpt;
    /// let white = PackedIpt::from_bits(0xfe80_80ff);
    /// assert!(!white.in_gamut());
    /// let limited = white.limit_to_gamut();
    /// assert!(limited.in_gamut());
    /// assert_eq!(limited.intensity_byte(), 0xfe);
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn limit_to_gamut(&self) -> Self {
        let limited = Ipt::from(*self).limit_to_gamut();
        Self(settle_in_gamut(pack(limited.as_ref())))
    }

    /// Lighten by moving the intensity lane toward 255 by the given fraction
    /// of the distance.
    ///
    /// ```
    /// # use iptcolor::PackedIpt;
    /// let gray = PackedIpt::from_bits(0xfe80_8040);
    /// assert_eq!(gray.lighten(0.5).intensity_byte(), 0xa0);
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn lighten(&self, change: Float) -> Self {
        let lane = self.0 & 0xff;
        Self(self.0 & !0xff | toward(lane, 0xff, change))
    }

    /// Darken by moving the intensity lane toward 0 by the given fraction of
    /// the distance.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn darken(&self, change: Float) -> Self {
        let lane = self.0 & 0xff;
        Self(self.0 & !0xff | toward(lane, 0, change))
    }

    /// Make more opaque by moving alpha toward its maximum by the given
    /// fraction of the distance.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn blot(&self, change: Float) -> Self {
        let lane = self.0 >> 25;
        Self(self.0 & 0x00ff_ffff | toward(lane, 0x7f, change) << 25)
    }

    /// Make more transparent by moving alpha toward 0 by the given fraction
    /// of the distance.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn fade(&self, change: Float) -> Self {
        let lane = self.0 >> 25;
        Self(self.0 & 0x00ff_ffff | toward(lane, 0, change) << 25)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color to hashed hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

/// Move the lane value toward the target by the given fraction of the
/// distance, rounding to the nearest level.
#[inline]
fn toward(lane: u32, target: u32, change: Float) -> u32 {
    let lane = lane as Float;
    let moved = change.mul_add(target as Float - lane, lane).round();
    moved.clamp(0.0, lane.max(target as Float)) as u32
}

// --------------------------------------------------------------------------------------------------------------------

impl From<Ipt> for PackedIpt {
    fn from(value: Ipt) -> Self {
        Self(pack(value.as_ref()))
    }
}

impl From<PackedIpt> for Ipt {
    fn from(value: PackedIpt) -> Self {
        Ipt::from_channels(unpack(value.0))
    }
}

impl FromStr for PackedIpt {
    type Err = crate::error::ColorFormatError;

    /// Parse a color in any notation recognized by [`Ipt`] and pack it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(Ipt::from_str(s)?))
    }
}

impl std::fmt::Debug for PackedIpt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("PackedIpt({:#010x})", self.0))
    }
}

impl std::fmt::Display for PackedIpt {
    /// Format the unpacked color in hashed hexadecimal notation with alpha.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&Ipt::from(*self).to_hex_format())
    }
}
