use std::time::{Duration, Instant};

use crate::sleep::{SleepOutcome, Sleeper};

/// Runs `block(iteration, started_at)` then sleeps for `interval`, `iterations`
/// times over.
///
/// Returns the number of iterations whose block ran. Anything short of
/// `iterations` means the sleeper's token was cancelled.
pub fn repeat_with_sleep<F>(
    sleeper: &Sleeper,
    iterations: usize,
    interval: Duration,
    mut block: F,
) -> usize
where
    F: FnMut(usize, Instant),
{
    let started_at = Instant::now();
    for iteration in 0..iterations {
        if sleeper.token().is_cancelled() {
            return iteration;
        }
        block(iteration, started_at);
        if let SleepOutcome::Cancelled { .. } = sleeper.sleep(interval) {
            tracing::debug!(target: "pacer_delay", iteration, iterations, "repeat loop cancelled");
            return iteration + 1;
        }
    }
    iterations
}
