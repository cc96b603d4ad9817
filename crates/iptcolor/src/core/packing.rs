use super::gamut::in_gamut;
use crate::Float;

/// Map a stored chroma channel in `0..=1` to the recentered range `-1..=1`.
#[inline]
pub(crate) fn recenter(c: Float) -> Float {
    c.mul_add(2.0, -1.0)
}

/// Map a recentered chroma coordinate in `-1..=1` to the stored range `0..=1`.
#[inline]
pub(crate) fn uncenter(c: Float) -> Float {
    c.mul_add(0.5, 0.5)
}

/// Mask for the bit that stays clear so that the packed word never is a
/// floating point not-a-number or infinity.
pub(crate) const RESERVED_BIT: u32 = 1 << 24;

/// Convert one channel in `0..=1` to an 8-bit lane. The scaled value is
/// rounded to the nearest level, not truncated. Values outside the unit range
/// wrap around.
#[inline]
fn to_lane(c: Float) -> u32 {
    (c * 255.0).round() as i32 as u32 & 0xff
}

/// Pack the stored channels into a 32-bit word.
///
/// Intensity, chroma A, and chroma B occupy the three lower bytes, rounded to
/// the nearest of 256 levels. Alpha is scaled by 254 and its lowest bit, bit
/// 24 of the word, is cleared. That leaves seven bits, with opaque as 0xfe.
pub(crate) fn pack(channels: &[Float; 4]) -> u32 {
    let [i, a, b, alpha] = *channels;
    let alpha = (alpha * 254.0).round() as i32 as u32 & 0xfe;
    to_lane(i) | to_lane(a) << 8 | to_lane(b) << 16 | alpha << 24
}

/// Unpack a 32-bit word into the stored channels.
pub(crate) fn unpack(bits: u32) -> [Float; 4] {
    [
        (bits & 0xff) as Float / 255.0,
        (bits >> 8 & 0xff) as Float / 255.0,
        (bits >> 16 & 0xff) as Float / 255.0,
        (bits >> 24 & 0xfe) as Float / 254.0,
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// The chroma lanes next to neutral besides 0x80/0x80. Since 0.5 falls between
/// two levels, no pair of chroma lanes is exactly neutral.
const NEAR_NEUTRAL: [(u32, u32); 3] = [(0x7f, 0x7f), (0x7f, 0x80), (0x80, 0x7f)];

/// Determine whether the packed color is in gamut.
pub(crate) fn packed_in_gamut(bits: u32) -> bool {
    let [i, a, b, _] = unpack(bits);
    in_gamut(&[i, recenter(a), recenter(b)])
}

#[inline]
fn with_chroma_lanes(bits: u32, a: u32, b: u32) -> u32 {
    bits & 0xff00_00ff | a << 8 | b << 16
}

#[inline]
fn toward_neutral(lane: u32) -> u32 {
    match lane.cmp(&0x80) {
        std::cmp::Ordering::Less => lane + 1,
        std::cmp::Ordering::Equal => lane,
        std::cmp::Ordering::Greater => lane - 1,
    }
}

/// Move a packed color onto an in-gamut point of the packed lattice.
///
/// Rounding a limited color to 8-bit lanes may put it a hair past the gamut
/// boundary. This function steps both chroma lanes toward 0x80 one level at a
/// time until the color fits. If even the chroma lanes next to neutral do not
/// fit, the intensity lane drops by one level and the search continues. That
/// only happens at intensity 0xff, which has no in-gamut word at all. Alpha
/// never changes.
pub(crate) fn settle_in_gamut(bits: u32) -> u32 {
    let mut bits = bits;
    while !packed_in_gamut(bits) {
        let (a, b) = (bits >> 8 & 0xff, bits >> 16 & 0xff);
        if (a, b) != (0x80, 0x80) {
            bits = with_chroma_lanes(bits, toward_neutral(a), toward_neutral(b));
            continue;
        }

        if let Some(fit) = NEAR_NEUTRAL
            .iter()
            .map(|&(a, b)| with_chroma_lanes(bits, a, b))
            .find(|&candidate| packed_in_gamut(candidate))
        {
            return fit;
        }

        let intensity = bits & 0xff;
        if intensity == 0 {
            break;
        }
        tracing::trace!(intensity, "lowered packed intensity to fit gamut");
        bits = bits & !0xff | (intensity - 1);
    }
    bits
}
