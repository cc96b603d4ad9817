use super::conversion::{ipt_to_rgb, rgb_to_ipt};
use super::gamut::limit_to_gamut;
use super::hsl::{hsl_to_rgb, rgb_to_hsl};
use super::packing::{recenter, uncenter};
use crate::Float;

/// The intensity at or below which a color counts as black for editing hue,
/// saturation, and lightness.
pub(crate) const BLACK_THRESHOLD: Float = 0.001;

/// Split stored channels into IPT coordinates with recentered chroma and alpha.
#[inline]
pub(crate) fn to_coordinates(channels: &[Float; 4]) -> ([Float; 3], Float) {
    let [i, a, b, alpha] = *channels;
    ([i, recenter(a), recenter(b)], alpha)
}

/// Combine IPT coordinates with recentered chroma and alpha into stored
/// channels.
#[inline]
pub(crate) fn to_channels(coordinates: &[Float; 3], alpha: Float) -> [Float; 4] {
    let [i, p, t] = *coordinates;
    [i, uncenter(p), uncenter(t), alpha]
}

/// Limit the stored channels to the gamut, also clamping alpha.
///
/// Channels that already are in gamut come back bit for bit, so limiting is
/// idempotent.
pub(crate) fn limit_channels(channels: &[Float; 4]) -> [Float; 4] {
    let (coordinates, alpha) = to_coordinates(channels);
    let alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
    let limited = limit_to_gamut(&coordinates);
    if limited == coordinates {
        [channels[0], channels[1], channels[2], alpha]
    } else {
        to_channels(&limited, alpha)
    }
}

/// Move the value toward the target by the given fraction of the distance.
#[inline]
pub(crate) fn toward(value: Float, target: Float, change: Float) -> Float {
    change.mul_add(target - value, value)
}

// --------------------------------------------------------------------------------------------------------------------

/// Scale the recentered chroma by the factor and limit the result.
pub(crate) fn scale_chroma(channels: &[Float; 4], factor: Float) -> [Float; 4] {
    let ([i, p, t], alpha) = to_coordinates(channels);
    let factor = factor.max(0.0);
    limit_channels(&to_channels(
        &[
            i,
            (p * factor).clamp(-1.0, 1.0),
            (t * factor).clamp(-1.0, 1.0),
        ],
        alpha,
    ))
}

/// Apply a multiply-add edit to intensity, recentered chroma, and alpha.
///
/// Each channel `c` becomes `c * mul + add`. Intensity and alpha are clamped
/// to `0..=1`, chroma to `-1..=1`, and the result is limited to the gamut.
pub(crate) fn multiply_add(
    channels: &[Float; 4],
    add: &[Float; 4],
    mul: &[Float; 4],
) -> [Float; 4] {
    let ([i, p, t], alpha) = to_coordinates(channels);
    let edited = [
        i.mul_add(mul[0], add[0]).clamp(0.0, 1.0),
        p.mul_add(mul[1], add[1]).clamp(-1.0, 1.0),
        t.mul_add(mul[2], add[2]).clamp(-1.0, 1.0),
    ];
    let alpha = alpha.mul_add(mul[3], add[3]).clamp(0.0, 1.0);
    limit_channels(&to_channels(&edited, alpha))
}

/// Offset intensity and recentered chroma, then limit. Random edits use this
/// function.
pub(crate) fn jitter(channels: &[Float; 4], offsets: &[Float; 3]) -> [Float; 4] {
    multiply_add(
        channels,
        &[offsets[0], offsets[1], offsets[2], 0.0],
        &[1.0, 1.0, 1.0, 1.0],
    )
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine the hue in turns, saturation, and lightness of the stored
/// channels' gamma-corrected RGB.
pub(crate) fn to_hsl(channels: &[Float; 4]) -> [Float; 3] {
    let (coordinates, _) = to_coordinates(channels);
    rgb_to_hsl(&ipt_to_rgb(&coordinates))
}

/// Convert hue in turns, saturation, lightness, and alpha to stored channels.
pub(crate) fn from_hsl(hsl: &[Float; 3], alpha: Float) -> [Float; 4] {
    to_channels(&rgb_to_ipt(&hsl_to_rgb(hsl)), alpha)
}

/// Additively edit hue, saturation, lightness, and opacity.
///
/// Hue wraps around, the other three clamp to the unit range. Colors with an
/// intensity at or below [`BLACK_THRESHOLD`] have no meaningful hue or
/// saturation and become black with neutral chroma.
pub(crate) fn edit_hsl(channels: &[Float; 4], change: &[Float; 4]) -> [Float; 4] {
    let [i, _, _, alpha] = *channels;
    let alpha = (alpha + change[3]).clamp(0.0, 1.0);
    if i <= BLACK_THRESHOLD {
        return [0.0, 0.5, 0.5, alpha];
    }

    let [h, s, l] = to_hsl(channels);
    let hsl = [
        (h + change[0]).rem_euclid(1.0),
        (s + change[1]).clamp(0.0, 1.0),
        (l + change[2]).clamp(0.0, 1.0),
    ];
    limit_channels(&from_hsl(&hsl, alpha))
}

// --------------------------------------------------------------------------------------------------------------------

/// Replace the intensity and limit the result.
#[inline]
fn with_intensity(channels: &[Float; 4], intensity: Float) -> [Float; 4] {
    let [_, a, b, alpha] = *channels;
    limit_channels(&[intensity, a, b, alpha])
}

/// Move the intensity into the half of the range opposite to the contrasting
/// intensity. A dark contrast maps the intensity into `0.55..=1` and a light
/// contrast into `0..=0.45`.
pub(crate) fn inverse_lightness(channels: &[Float; 4], contrasting: Float) -> [Float; 4] {
    let i = channels[0];
    let i = if contrasting < 0.5 {
        i.mul_add(0.45, 0.55)
    } else {
        i * 0.45
    };
    with_intensity(channels, i)
}

/// Average the intensity with the contrasting intensity shifted by half the
/// range.
pub(crate) fn differentiate_lightness(channels: &[Float; 4], contrasting: Float) -> [Float; 4] {
    let i = channels[0];
    with_intensity(channels, ((contrasting + 0.5).rem_euclid(1.0) + i) / 2.0)
}

/// Move intensity away from 0.5 and toward the opposite half of the range.
/// Chroma and alpha are left alone.
pub(crate) fn offset_lightness(channels: &[Float; 4]) -> [Float; 4] {
    differentiate_lightness(channels, channels[0])
}

/// Weaken the tint so only the given fraction of the deviation from neutral
/// remains, for intensity as well as chroma.
pub(crate) fn lessen_change(channels: &[Float; 4], fraction: Float) -> [Float; 4] {
    let [i, a, b, alpha] = *channels;
    let change = 1.0 - fraction.clamp(0.0, 1.0);
    limit_channels(&[
        toward(i, 0.5, change),
        toward(a, 0.5, change),
        toward(b, 0.5, change),
        alpha,
    ])
}

/// Interpolate between two colors channel by channel, then limit the result.
pub(crate) fn lerp(start: &[Float; 4], end: &[Float; 4], fraction: Float) -> [Float; 4] {
    limit_channels(&[
        toward(start[0], end[0], fraction),
        toward(start[1], end[1], fraction),
        toward(start[2], end[2], fraction),
        toward(start[3], end[3], fraction),
    ])
}
