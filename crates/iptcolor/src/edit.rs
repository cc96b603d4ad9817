//! Multiply-add and randomized channel edits.
//!
//! Most editors are methods on [`Ipt`] and also available from Python. The
//! two editors in this module take arguments that do not cross the language
//! boundary, a [`ChannelEdit`] and a random number generator, and hence are
//! Rust only.

use rand::Rng;

use crate::core::adjust;
use crate::{Float, Ipt};

/// A multiply-add edit for all four channels.
///
/// Applying the edit maps each channel `c` to `c * mul + add`. Chroma uses
/// the recentered range `-1..=1`, so that multiplication scales chroma
/// toward or away from neutral. The default edit is the identity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelEdit {
    /// The change added to intensity, recentered chroma A, recentered chroma
    /// B, and alpha.
    pub add: [Float; 4],
    /// The factor for intensity, recentered chroma A, recentered chroma B,
    /// and alpha.
    pub mul: [Float; 4],
}

impl ChannelEdit {
    /// Create a new edit that only adds.
    pub const fn adding(add: [Float; 4]) -> Self {
        Self {
            add,
            mul: [1.0; 4],
        }
    }

    /// Create a new edit that only multiplies.
    pub const fn multiplying(mul: [Float; 4]) -> Self {
        Self { add: [0.0; 4], mul }
    }
}

impl Default for ChannelEdit {
    fn default() -> Self {
        Self::adding([0.0; 4])
    }
}

impl Ipt {
    /// Apply the multiply-add edit, then limit the result.
    ///
    /// Intensity and alpha are clamped to the unit range, recentered chroma to
    /// `-1..=1`, before the result is limited to the gamut.
    ///
    /// ```
    /// # use iptcolor::{ChannelEdit, Ipt};
    /// let orange = Ipt::from_24bit(0xff, 0x93, 0x00);
    /// let gray = orange.edit(&ChannelEdit::multiplying([1.0, 0.0, 0.0, 1.0]));
    /// assert_eq!(gray.chroma(), 0.0);
    /// assert_eq!(gray.intensity(), orange.intensity());
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn edit(&self, edit: &ChannelEdit) -> Self {
        Self::from_channels(adjust::multiply_add(self.as_ref(), &edit.add, &edit.mul))
    }

    /// Randomly jitter intensity and both recentered chroma axes by up to the
    /// given variance in either direction, then limit the result.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn random_edit<R: Rng + ?Sized>(&self, rng: &mut R, variance: Float) -> Self {
        let mut offset = || variance * rng.random::<Float>().mul_add(2.0, -1.0);
        let offsets = [offset(), offset(), offset()];
        Self::from_channels(adjust::jitter(self.as_ref(), &offsets))
    }
}

#[cfg(test)]
mod test {
    use super::ChannelEdit;
    use crate::Ipt;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_identity() {
        let color = Ipt::from_24bit(0x80, 0x40, 0xc0).fade(0.25);
        assert_abs_diff_eq!(
            color.edit(&ChannelEdit::default()).as_ref().as_slice(),
            color.as_ref().as_slice(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_edit() {
        let color = Ipt::from_24bit(0x80, 0x40, 0xc0);

        let darker = color.edit(&ChannelEdit::adding([-0.2, 0.0, 0.0, 0.0]));
        assert!(darker.in_gamut(), "{:?} should be in gamut", darker);
        assert!(darker.intensity() < color.intensity());
        assert_eq!(darker.alpha(), 1.0);

        let saturated = color.edit(&ChannelEdit::multiplying([1.0, 4.0, 4.0, 1.0]));
        assert!(saturated.in_gamut(), "{:?} should be in gamut", saturated);
        assert!(saturated.chroma() > color.chroma());

        let clear = color.edit(&ChannelEdit {
            add: [0.0, 0.0, 0.0, -2.0],
            mul: [1.0; 4],
        });
        assert_eq!(clear.alpha(), 0.0);
    }

    #[test]
    fn test_random_edit() {
        let mut rng = StdRng::seed_from_u64(0xdecaf);
        let color = Ipt::from_24bit(0x30, 0x90, 0x60).fade(0.5);
        for _ in 0..1_000 {
            let edited = color.random_edit(&mut rng, 0.1);
            assert!(edited.in_gamut(), "{:?} should be in gamut", edited);
            assert_eq!(edited.alpha(), color.alpha());
            assert!((edited.intensity() - color.intensity()).abs() <= 0.1);
        }

        assert_abs_diff_eq!(
            color.random_edit(&mut rng, 0.0).as_ref().as_slice(),
            color.as_ref().as_slice(),
            epsilon = 1e-12
        );
    }
}
