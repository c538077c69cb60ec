use std::time::{Duration, Instant};

use pacer_rand::BoundedRandom;
use rand::RngCore;

use crate::cancel::CancelToken;
use crate::error::DelayError;
use crate::jitter::jittered_delay_ms;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepOutcome {
    /// The full duration elapsed.
    Completed,
    /// The token was cancelled before the duration elapsed.
    Cancelled { elapsed: Duration },
}

impl SleepOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, SleepOutcome::Completed)
    }
}

/// Blocks the calling thread, waking early when its [`CancelToken`] fires.
#[derive(Clone, Debug, Default)]
pub struct Sleeper {
    token: CancelToken,
}

impl Sleeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: CancelToken) -> Self {
        Self { token }
    }

    pub fn token(&self) -> &CancelToken {
        &self.token
    }

    pub fn sleep(&self, duration: Duration) -> SleepOutcome {
        let started = Instant::now();
        tracing::trace!(
            target: "pacer_delay",
            requested_ms = duration.as_millis() as u64,
            "suspending thread"
        );

        if !self.token.wait(duration) {
            return SleepOutcome::Completed;
        }

        let elapsed = started.elapsed();
        tracing::debug!(
            target: "pacer_delay",
            requested_ms = duration.as_millis() as u64,
            elapsed_ms = elapsed.as_millis() as u64,
            "sleep cancelled"
        );
        SleepOutcome::Cancelled { elapsed }
    }

    pub fn sleep_millis(&self, millis: i64) -> Result<SleepOutcome, DelayError> {
        let millis = u64::try_from(millis).map_err(|_| DelayError::NegativeDuration(millis))?;
        Ok(self.sleep(Duration::from_millis(millis)))
    }

    /// Delegates to [`Sleeper::sleep_millis`]. Second counts whose millisecond
    /// value does not fit in an `i64` are clamped rather than overflowing.
    pub fn sleep_secs(&self, secs: i64) -> Result<SleepOutcome, DelayError> {
        self.sleep_millis(secs_to_millis(secs))
    }

    /// Sleeps for [`jittered_delay_ms`] drawn from `generator`. Returns the
    /// planned delay alongside the outcome.
    pub fn sleep_jittered<R: RngCore>(
        &self,
        generator: &mut BoundedRandom<R>,
        base_ms: u64,
        variance_ms: u64,
    ) -> (Duration, SleepOutcome) {
        let planned = Duration::from_millis(jittered_delay_ms(generator, base_ms, variance_ms));
        (planned, self.sleep(planned))
    }
}

/// Sleeps without any way to be woken early.
pub fn sleep_millis(millis: i64) -> Result<SleepOutcome, DelayError> {
    Sleeper::new().sleep_millis(millis)
}

pub fn sleep_secs(secs: i64) -> Result<SleepOutcome, DelayError> {
    Sleeper::new().sleep_secs(secs)
}

fn secs_to_millis(secs: i64) -> i64 {
    secs.min(i64::MAX / 1000).saturating_mul(1000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn zero_millis_returns_promptly() {
        let started = Instant::now();
        assert_eq!(sleep_millis(0), Ok(SleepOutcome::Completed));
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn fifty_millis_takes_at_least_fifty_millis() {
        let started = Instant::now();
        assert_eq!(sleep_millis(50), Ok(SleepOutcome::Completed));
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn one_second_sleep_is_roughly_one_second() {
        let started = Instant::now();
        assert_eq!(sleep_secs(1), Ok(SleepOutcome::Completed));
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(1_000), "{elapsed:?}");
        assert!(elapsed < Duration::from_secs(10), "{elapsed:?}");
    }

    #[test]
    fn negative_durations_are_rejected() {
        assert_eq!(sleep_millis(-1), Err(DelayError::NegativeDuration(-1)));
        assert_eq!(sleep_secs(-2), Err(DelayError::NegativeDuration(-2_000)));
        assert_eq!(
            sleep_secs(i64::MIN),
            Err(DelayError::NegativeDuration(i64::MIN))
        );
    }

    #[test]
    fn seconds_are_clamped_before_scaling() {
        assert_eq!(secs_to_millis(3), 3_000);
        assert_eq!(secs_to_millis(i64::MAX), (i64::MAX / 1000) * 1000);
        assert_eq!(secs_to_millis(i64::MAX / 1000 + 1), (i64::MAX / 1000) * 1000);
    }

    #[test]
    fn cancel_mid_sleep_returns_early() {
        let sleeper = Sleeper::new();
        let canceller = {
            let token = sleeper.token().clone();
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(50));
                token.cancel();
            })
        };

        let started = Instant::now();
        let outcome = sleeper.sleep_secs(30).unwrap();
        canceller.join().unwrap();

        match outcome {
            SleepOutcome::Cancelled { elapsed } => {
                assert!(elapsed < Duration::from_secs(10), "{elapsed:?}");
            }
            SleepOutcome::Completed => panic!("sleep was not cancelled"),
        }
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[test]
    fn cancelled_sleeper_stays_cancelled() {
        let sleeper = Sleeper::new();
        sleeper.token().cancel();
        assert!(!sleeper.sleep(Duration::from_secs(30)).is_completed());
        assert!(!sleeper.sleep_millis(0).unwrap().is_completed());
    }

    #[test]
    fn jittered_sleep_completes() {
        let mut generator = BoundedRandom::seeded(6, pacer_rand::Sampling::Uniform);
        let started = Instant::now();
        let (planned, outcome) = Sleeper::new().sleep_jittered(&mut generator, 20, 10);
        assert!(outcome.is_completed());
        assert!((15..=25).contains(&planned.as_millis()), "{planned:?}");
        assert!(started.elapsed() >= planned);
    }
}
