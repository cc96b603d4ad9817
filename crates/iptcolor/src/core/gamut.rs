use crate::core::conversion::{dot, ipt_to_lms, LMS_TO_LINEAR_RGB};
use crate::Float;

/// The tolerance beyond the unit range accepted by the gamut test. Without
/// it, pure white fails the test because of floating point noise.
pub(crate) const EPSILON: Float = 1.0 / 65536.0;

/// The number of steps taken by the gamut limiter.
pub(crate) const LIMIT_STEPS: usize = 32;

/// Determine whether the IPT coordinates with recentered chroma are in gamut.
///
/// This function converts the coordinates to linear LMS and then tests each
/// linear RGB channel against the unit range, stopping at the first channel
/// that falls outside. Since the display gamma is monotonic, testing linear
/// values gives the same answer as testing gamma-corrected ones.
pub(crate) fn in_gamut(coordinates: &[Float; 3]) -> bool {
    let lms = ipt_to_lms(coordinates);
    LMS_TO_LINEAR_RGB.iter().all(|row| {
        let c = dot(row, &lms);
        -EPSILON <= c && c <= 1.0 + EPSILON
    })
}

/// Clamp intensity to the unit range and zero out not-a-numbers.
#[inline]
fn normalize(coordinates: &[Float; 3]) -> [Float; 3] {
    let [i, p, t] = *coordinates;
    let fix = |c: Float| if c.is_nan() { 0.0 } else { c };
    [fix(i).clamp(0.0, 1.0), fix(p), fix(t)]
}

/// Limit the IPT coordinates with recentered chroma to the gamut.
///
/// If the coordinates are out of gamut, this function scales both chroma axes
/// toward neutral in fixed steps of 1/32, starting at 31/32, and returns the
/// first scaled version that passes the gamut test. The scan only ever
/// desaturates and never touches intensity. When no step passes, the result
/// is the gray of the same intensity, which always is in gamut.
///
/// The scan deliberately is linear instead of a bisection. The boundary of the
/// gamut need not be monotonic along a line of constant hue, and a linear scan
/// from full saturation always accepts the most saturated passing step.
pub(crate) fn limit_to_gamut(coordinates: &[Float; 3]) -> [Float; 3] {
    let [i, p, t] = normalize(coordinates);
    if in_gamut(&[i, p, t]) {
        return [i, p, t];
    }

    let denominator = LIMIT_STEPS as Float;
    (1..LIMIT_STEPS)
        .rev()
        .map(|step| {
            let progress = step as Float / denominator;
            (step, [i, progress * p, progress * t])
        })
        .find(|(_, candidate)| in_gamut(candidate))
        .map_or([i, 0.0, 0.0], |(step, candidate)| {
            tracing::trace!(step, intensity = i, "desaturated color to fit gamut");
            candidate
        })
}

/// Maximize the chroma of the IPT coordinates with recentered chroma while
/// preserving intensity and the direction of the chroma vector.
///
/// This function stretches the chroma vector until one axis reaches the edge
/// of the chroma square and then limits the result to the gamut. Gray stays
/// gray.
pub(crate) fn maximize_chroma(coordinates: &[Float; 3]) -> [Float; 3] {
    let [i, p, t] = normalize(coordinates);
    let extent = p.abs().max(t.abs());
    if extent <= 0.0 {
        return limit_to_gamut(&[i, 0.0, 0.0]);
    }

    limit_to_gamut(&[i, p / extent, t / extent])
}

#[cfg(test)]
mod test {
    use super::{in_gamut, limit_to_gamut, maximize_chroma, LIMIT_STEPS};
    use crate::core::conversion::{from_24bit, rgb_to_ipt};
    use crate::Float;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn chroma(coordinates: &[Float; 3]) -> Float {
        coordinates[1].hypot(coordinates[2])
    }

    #[test]
    fn test_in_gamut() {
        for intensity in [0.0, 0.001, 0.25, 0.5, 0.75, 0.999, 1.0] {
            assert!(
                in_gamut(&[intensity, 0.0, 0.0]),
                "gray with intensity {} should be in gamut",
                intensity
            );
        }

        for rgb in [
            [0_u8, 0, 0],
            [255, 255, 255],
            [255, 0, 0],
            [0, 255, 0],
            [0, 0, 255],
            [0, 127, 127],
            [255, 147, 0],
        ] {
            let ipt = rgb_to_ipt(&from_24bit(rgb[0], rgb[1], rgb[2]));
            assert!(in_gamut(&ipt), "{:?} as {:?} should be in gamut", rgb, ipt);
        }

        assert!(!in_gamut(&[0.5, 1.0, 1.0]), "corner of chroma square");
        assert!(!in_gamut(&[0.5, -1.0, 0.0]), "edge of chroma square");
        assert!(!in_gamut(&[1.2, 0.0, 0.0]), "too bright");
        assert!(!in_gamut(&[-0.2, 0.0, 0.0]), "too dark");
    }

    #[test]
    fn test_limit_idempotent() {
        for r in (0..=255).step_by(15) {
            for g in (0..=255).step_by(15) {
                for b in (0..=255).step_by(15) {
                    let ipt = rgb_to_ipt(&from_24bit(r, g, b));
                    assert_eq!(
                        limit_to_gamut(&ipt),
                        ipt,
                        "in-gamut {:?} should not change",
                        [r, g, b]
                    );
                }
            }
        }
    }

    #[test]
    fn test_limit_scan() {
        let limited = limit_to_gamut(&[0.5, 1.0, 1.0]);
        assert!(in_gamut(&limited), "limited color should be in gamut");
        assert_eq!(limited[0], 0.5);
        assert_eq!(limited, [0.5, 14.0 / 32.0, 14.0 / 32.0]);

        // The next more saturated step really is out of gamut.
        let step = 15.0 / LIMIT_STEPS as Float;
        assert!(!in_gamut(&[0.5, step, step]), "15/32 should be out of gamut");
    }

    #[test]
    fn test_limit_desaturates() {
        let mut rng = StdRng::seed_from_u64(665);
        let mut next = || rng.random::<Float>();

        for _ in 0..2_000 {
            let original = [next(), 2.0 * next() - 1.0, 2.0 * next() - 1.0];
            let limited = limit_to_gamut(&original);
            assert!(in_gamut(&limited), "{:?} should be in gamut", limited);
            assert_eq!(limited[0], original[0], "intensity must not change");
            assert!(
                chroma(&limited) <= chroma(&original),
                "{:?} is more saturated than {:?}",
                limited,
                original
            );
        }
    }

    #[test]
    fn test_limit_extremes() {
        assert_eq!(limit_to_gamut(&[1.5, 0.0, 0.0]), [1.0, 0.0, 0.0]);
        let black = limit_to_gamut(&[-1.0, 0.3, 0.3]);
        assert_eq!(black[0], 0.0);
        assert!(in_gamut(&black), "{:?} should be in gamut", black);
        assert_eq!(limit_to_gamut(&[Float::NAN, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert!(
            in_gamut(&limit_to_gamut(&[0.5, 40.0, -40.0])),
            "huge chroma falls back on gray"
        );
    }

    #[test]
    fn test_maximize_chroma() {
        let dull = rgb_to_ipt(&from_24bit(100, 120, 120));
        let vivid = maximize_chroma(&dull);
        assert!(in_gamut(&vivid), "maximized color should be in gamut");
        assert_eq!(vivid[0], dull[0]);
        assert!(
            chroma(&vivid) > 3.0 * chroma(&dull),
            "{:?} should be far more saturated than {:?}",
            vivid,
            dull
        );

        // Same direction
        let cross = vivid[1] * dull[2] - vivid[2] * dull[1];
        assert!(cross.abs() < 1e-9, "hue should be preserved");
        assert!(vivid[1] * dull[1] > 0.0, "hue should not flip");

        // Teal already sits on the gamut surface, so the 1/32 steps may land
        // slightly inside of it.
        let teal = rgb_to_ipt(&from_24bit(0, 127, 127));
        let vivid = maximize_chroma(&teal);
        assert!(in_gamut(&vivid), "maximized teal should be in gamut");
        assert!(chroma(&vivid) > 0.15, "maximized teal is too dull");

        assert_eq!(maximize_chroma(&[0.3, 0.0, 0.0]), [0.3, 0.0, 0.0]);
    }
}
