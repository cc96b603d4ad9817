//! Random in-gamut colors.
//!
//! Both functions draw intensity and chroma uniformly from the 256 levels of
//! a [`PackedIpt`] lane and reject candidates outside the gamut. Roughly one
//! in twelve candidates passes, so rejection sampling terminates quickly in
//! practice. Since every candidate already sits on the packed lattice,
//! packing an accepted color is lossless and keeps it in gamut.

use rand::Rng;

use crate::{Ipt, PackedIpt};

/// Draw one fully opaque candidate from the packed lattice.
fn candidate<R: Rng + ?Sized>(rng: &mut R) -> Ipt {
    let [i, a, b] = [rng.random::<u8>(), rng.random::<u8>(), rng.random::<u8>()];
    let bits = u32::from_le_bytes([i, a, b, 0xfe]);
    Ipt::from(PackedIpt::from_bits(bits))
}

/// Generate a random, fully opaque color that is in gamut.
///
/// This function keeps drawing candidates until one is in gamut. It has no
/// upper bound on the number of attempts. Use [`try_random_color`] for a
/// bounded version.
///
/// ```
/// # use iptcolor::random_color;
/// # use rand::SeedableRng;
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let color = random_color(&mut rng);
/// assert!(color.in_gamut());
/// assert_eq!(color.alpha(), 1.0);
/// ```
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Ipt {
    let mut attempts: usize = 0;
    loop {
        attempts += 1;
        let color = candidate(rng);
        if color.in_gamut() {
            tracing::trace!(attempts, "accepted random color");
            return color;
        }
    }
}

/// Try to generate a random, fully opaque color that is in gamut with at most
/// the given number of attempts.
///
/// This function returns `None` if all attempts draw out-of-gamut candidates,
/// including when `max_attempts` is zero.
pub fn try_random_color<R: Rng + ?Sized>(rng: &mut R, max_attempts: usize) -> Option<Ipt> {
    let result = (1..=max_attempts).find_map(|attempts| {
        let color = candidate(rng);
        color.in_gamut().then(|| {
            tracing::trace!(attempts, "accepted random color");
            color
        })
    });

    if result.is_none() {
        tracing::debug!(max_attempts, "gave up on random color");
    }
    result
}

#[cfg(test)]
mod test {
    use super::{random_color, try_random_color};
    use crate::PackedIpt;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_color() {
        let mut rng = StdRng::seed_from_u64(0x1badcafe);
        for _ in 0..10_000 {
            let color = random_color(&mut rng);
            assert!(color.in_gamut(), "{:?} should be in gamut", color);
            assert_eq!(color.alpha(), 1.0);
            assert!(color.is_packable(), "{:?} should be packable", color);
            assert!(PackedIpt::from(color).in_gamut(), "{:?} packed", color);
        }
    }

    #[test]
    fn test_try_random_color() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(try_random_color(&mut rng, 0), None);

        let mut found = 0;
        for _ in 0..100 {
            if let Some(color) = try_random_color(&mut rng, 200) {
                assert!(color.in_gamut(), "{:?} should be in gamut", color);
                assert_eq!(color.alpha(), 1.0);
                found += 1;
            }
        }

        // Failing 200 times in a row with a 1 in 12 acceptance rate is
        // vanishingly unlikely.
        assert_eq!(found, 100);
    }

    #[test]
    fn test_reproducible() {
        let mut rng1 = StdRng::seed_from_u64(665);
        let mut rng2 = StdRng::seed_from_u64(665);
        for _ in 0..10 {
            assert_eq!(random_color(&mut rng1), random_color(&mut rng2));
        }
    }
}
