use crate::Float;

/// Convert gamma-corrected RGB coordinates to hue, saturation, and lightness.
///
/// Hue is measured in turns, i.e., `0..1`, with red at 0, green at 1/3, and
/// blue at 2/3. Grays have hue and saturation 0.
pub(crate) fn rgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;
    let delta = max - min;

    if delta <= 0.0 {
        return [0.0, 0.0, lightness];
    }

    let hue = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    let denominator = 1.0 - (2.0 * lightness - 1.0).abs();
    let saturation = if denominator <= 0.0 {
        0.0
    } else {
        (delta / denominator).min(1.0)
    };

    [(hue / 6.0).rem_euclid(1.0), saturation, lightness]
}

/// Convert hue in turns, saturation, and lightness to gamma-corrected RGB.
pub(crate) fn hsl_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [hue, saturation, lightness] = *value;
    let hue = hue.rem_euclid(1.0);
    let a = saturation * lightness.min(1.0 - lightness);

    let f = |n: Float| {
        let k = hue.mul_add(12.0, n).rem_euclid(12.0);
        a.mul_add(-(k - 3.0).min(9.0 - k).clamp(-1.0, 1.0), lightness)
    };

    [f(0.0), f(8.0), f(4.0)]
}

#[cfg(test)]
mod test {
    use super::{hsl_to_rgb, rgb_to_hsl};
    use crate::Float;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_primaries() {
        assert_eq!(rgb_to_hsl(&[1.0, 0.0, 0.0]), [0.0, 1.0, 0.5]);
        assert_abs_diff_eq!(
            rgb_to_hsl(&[0.0, 1.0, 0.0]).as_slice(),
            [1.0 / 3.0, 1.0, 0.5].as_slice(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            rgb_to_hsl(&[0.0, 0.0, 1.0]).as_slice(),
            [2.0 / 3.0, 1.0, 0.5].as_slice(),
            epsilon = 1e-12
        );
        assert_eq!(rgb_to_hsl(&[0.25, 0.25, 0.25]), [0.0, 0.0, 0.25]);
        assert_eq!(hsl_to_rgb(&[0.0, 1.0, 0.5]), [1.0, 0.0, 0.0]);
        assert_eq!(hsl_to_rgb(&[0.7, 0.0, 0.3]), [0.3, 0.3, 0.3]);
    }

    #[test]
    fn test_round_trip() {
        for r in 0..=10 {
            for g in 0..=10 {
                for b in 0..=10 {
                    let rgb = [r as Float / 10.0, g as Float / 10.0, b as Float / 10.0];
                    let [h, s, l] = rgb_to_hsl(&rgb);
                    assert_abs_diff_eq!(
                        hsl_to_rgb(&[h, s, l]).as_slice(),
                        rgb.as_slice(),
                        epsilon = 1e-9
                    );

                    // A full turn changes nothing.
                    assert_abs_diff_eq!(
                        hsl_to_rgb(&[h + 1.0, s, l]).as_slice(),
                        rgb.as_slice(),
                        epsilon = 1e-9
                    );
                }
            }
        }
    }
}
