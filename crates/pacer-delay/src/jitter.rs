use pacer_rand::BoundedRandom;
use rand::RngCore;

/// `base_ms` shifted by up to half of `variance_ms` either way, drawn from
/// `generator`.
///
/// Zero variance returns `base_ms` unchanged without drawing. The result
/// saturates at both ends instead of wrapping.
pub fn jittered_delay_ms<R: RngCore>(
    generator: &mut BoundedRandom<R>,
    base_ms: u64,
    variance_ms: u64,
) -> u64 {
    if variance_ms == 0 {
        return base_ms;
    }

    let jitter = generator.random_up_to(variance_ms);
    base_ms.saturating_sub(variance_ms / 2).saturating_add(jitter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pacer_rand::Sampling;

    #[test]
    fn zero_variance_is_exact() {
        let mut generator = BoundedRandom::seeded(1, Sampling::Uniform);
        assert_eq!(jittered_delay_ms(&mut generator, 250, 0), 250);
    }

    #[test]
    fn jitter_stays_within_the_window() {
        let mut generator = BoundedRandom::from_entropy(Sampling::Uniform);
        for _ in 0..10_000 {
            let delay = jittered_delay_ms(&mut generator, 1_000, 200);
            assert!((900..=1_100).contains(&delay), "{delay}");
        }
    }

    #[test]
    fn small_base_saturates_at_zero() {
        let mut generator = BoundedRandom::seeded(2, Sampling::Uniform);
        for _ in 0..1_000 {
            assert!(jittered_delay_ms(&mut generator, 10, 100) <= 100);
        }
    }

    #[test]
    fn huge_inputs_do_not_overflow() {
        let mut generator = BoundedRandom::seeded(3, Sampling::Uniform);
        assert!(jittered_delay_ms(&mut generator, u64::MAX, u64::MAX) >= u64::MAX / 2);
    }

    #[test]
    fn full_variance_reaches_the_upper_half() {
        let mut generator = BoundedRandom::seeded(4, Sampling::ModuloAbs);
        let high = (0..2_000)
            .filter(|_| jittered_delay_ms(&mut generator, 0, u64::MAX) > i64::MAX as u64)
            .count();
        assert!(high > 0, "delays never exceeded i64::MAX ms");
    }

    #[test]
    fn same_seed_gives_same_delays() {
        let mut first = BoundedRandom::seeded(42, Sampling::Uniform);
        let mut second = BoundedRandom::seeded(42, Sampling::Uniform);
        for _ in 0..100 {
            assert_eq!(
                jittered_delay_ms(&mut first, 500, 400),
                jittered_delay_ms(&mut second, 500, 400)
            );
        }
    }
}
