use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Wakes threads sleeping on it and keeps them from sleeping again.
///
/// Cancellation is sticky: there is no way to reset a token, so a caller that
/// wants to sleep again after a cancel needs a new one.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        let (_, wake) = &*self.inner;
        let mut cancelled = self.flag();
        if !*cancelled {
            *cancelled = true;
            tracing::debug!(target: "pacer_delay", "cancel token fired");
        }
        wake.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        *self.flag()
    }

    /// Blocks for `duration` or until cancelled. Returns `true` when the wait
    /// ended because of a cancel.
    pub(crate) fn wait(&self, duration: Duration) -> bool {
        let (_, wake) = &*self.inner;
        // Durations past the platform's Instant range wait on the cancel alone.
        let deadline = Instant::now().checked_add(duration);
        let mut cancelled = self.flag();
        while !*cancelled {
            match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        return false;
                    }
                    cancelled = wake
                        .wait_timeout(cancelled, deadline - now)
                        .unwrap_or_else(PoisonError::into_inner)
                        .0;
                }
                None => {
                    cancelled = wake.wait(cancelled).unwrap_or_else(PoisonError::into_inner);
                }
            }
        }
        true
    }

    fn flag(&self) -> MutexGuard<'_, bool> {
        self.inner.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
