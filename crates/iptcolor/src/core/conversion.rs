use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert the gamma-corrected RGB coordinates to 24-bit representation.
///
/// Coordinates are clamped to `0..=1` before scaling, so out-of-range values
/// saturate instead of wrapping.
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = *coordinates;
    [
        (r.clamp(0.0, 1.0) * 255.0).round() as u8,
        (g.clamp(0.0, 1.0) * 255.0).round() as u8,
        (b.clamp(0.0, 1.0) * 255.0).round() as u8,
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Linearize a gamma-corrected RGB coordinate. The display gamma is a plain
/// square law.
#[inline]
pub(crate) fn forward_gamma(value: Float) -> Float {
    value * value
}

/// Reapply the display gamma to a linear RGB coordinate. Callers clamp the
/// value to `0..=1` first.
#[inline]
pub(crate) fn reverse_gamma(value: Float) -> Float {
    value.sqrt()
}

const COMPRESSION: Float = 0.43;
const EXPANSION: Float = 2.3256;

/// Compress a linear LMS coordinate into LMS'. Negative inputs keep their
/// sign.
#[inline]
pub(crate) fn forward_compress(value: Float) -> Float {
    value.abs().powf(COMPRESSION).copysign(value)
}

/// Expand an LMS' coordinate back into linear LMS. Slightly negative values
/// show up near the gamut boundary and keep their sign.
#[inline]
pub(crate) fn reverse_compress(value: Float) -> Float {
    value.abs().powf(EXPANSION).copysign(value)
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
pub(crate) fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;
    [dot(row1, vector), dot(row2, vector), dot(row3, vector)]
}

/// Compute the dot product of a matrix row and a vector.
#[inline]
pub(crate) fn dot(row: &[Float; 3], vector: &[Float; 3]) -> Float {
    row[0].mul_add(vector[0], row[1].mul_add(vector[1], row[2] * vector[2]))
}

// --------------------------------------------------------------------------------------------------------------------
// Hunt-Pointer-Estevez for D65 after linear sRGB to XYZ, with rows normalized
// so that white maps to (1, 1, 1).

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const LINEAR_RGB_TO_LMS: [[Float; 3]; 3] = [
    [ 0.31396787331039416, 0.6394472140177627,  0.04658491267184321 ],
    [ 0.15172772989238917, 0.7482450923675307,  0.10002717774008016 ],
    [ 0.017756582753965265, 0.10946796102238182, 0.8727754562236529 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const LMS_TO_LINEAR_RGB: [[Float; 3]; 3] = [
    [  5.431810919445582,   -4.678024475030384,    0.24621355558480112 ],
    [ -1.1052103483389515,   2.311088674518297,   -0.2058783261793458  ],
    [  0.028111151686862505, -0.19469433405095793, 1.1665831823640953  ],
];

// https://doi.org/10.2352/CIC.1998.6.1.art00003

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const LMS_TO_IPT: [[Float; 3]; 3] = [
    [ 0.4000,  0.4000,  0.2000 ],
    [ 4.4550, -4.8510,  0.3960 ],
    [ 0.8056,  0.3572, -1.1628 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const IPT_TO_LMS: [[Float; 3]; 3] = [
    [ 1.0000000000000000,  0.09756893051461392,  0.2052264331645916  ],
    [ 1.0000000000000000, -0.11387648547314712,  0.13321715836999806 ],
    [ 1.0000000000000000,  0.03261510991706641, -0.6768871830691794  ],
];

// --------------------------------------------------------------------------------------------------------------------

/// Convert gamma-corrected RGB coordinates to IPT. The result has intensity
/// in `0..=1` for in-gamut inputs and chroma axes centered on zero.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn rgb_to_ipt(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let linear = [forward_gamma(r), forward_gamma(g), forward_gamma(b)];
    let [l, m, s] = multiply(&LINEAR_RGB_TO_LMS, &linear);
    multiply(
        &LMS_TO_IPT,
        &[forward_compress(l), forward_compress(m), forward_compress(s)],
    )
}

/// Convert IPT coordinates to linear LMS. This is the shared prefix of the
/// reverse conversion and the gamut test.
#[inline]
pub(crate) fn ipt_to_lms(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&IPT_TO_LMS, value);
    [reverse_compress(l), reverse_compress(m), reverse_compress(s)]
}

/// Convert IPT coordinates to linear RGB without any clamping.
#[inline]
pub(crate) fn ipt_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    multiply(&LMS_TO_LINEAR_RGB, &ipt_to_lms(value))
}

/// Convert IPT coordinates to gamma-corrected RGB. Linear coordinates are
/// clamped to `0..=1` before the display gamma is reapplied.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn ipt_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = ipt_to_linear_rgb(value);
    [
        reverse_gamma(r.clamp(0.0, 1.0)),
        reverse_gamma(g.clamp(0.0, 1.0)),
        reverse_gamma(b.clamp(0.0, 1.0)),
    ]
}
