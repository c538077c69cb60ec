use std::cell::RefCell;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rand::rngs::StdRng;
use rand::RngCore;

use crate::{BoundError, BoundedRandom, Sampling};

thread_local! {
    static THREAD_RANDOM: RefCell<BoundedRandom<StdRng>> =
        RefCell::new(BoundedRandom::from_entropy(Sampling::Uniform));
}

/// Draws from this thread's generator. See [`BoundedRandom::random_int`].
pub fn random_int(upper: i32) -> Result<i32, BoundError> {
    THREAD_RANDOM.with(|rng| rng.borrow_mut().random_int(upper))
}

pub fn random_long(upper: i64) -> Result<i64, BoundError> {
    THREAD_RANDOM.with(|rng| rng.borrow_mut().random_long(upper))
}

pub fn random_id(length: usize) -> String {
    THREAD_RANDOM.with(|rng| rng.borrow_mut().random_id(length))
}

/// A generator that several threads draw from, serialized by a mutex.
#[derive(Debug)]
pub struct SharedRandom<R = StdRng> {
    inner: Arc<Mutex<BoundedRandom<R>>>,
}

impl<R> Clone for SharedRandom<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: RngCore> SharedRandom<R> {
    pub fn new(generator: BoundedRandom<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(generator)),
        }
    }

    pub fn random_int(&self, upper: i32) -> Result<i32, BoundError> {
        self.lock().random_int(upper)
    }

    pub fn random_long(&self, upper: i64) -> Result<i64, BoundError> {
        self.lock().random_long(upper)
    }

    pub fn random_id(&self, length: usize) -> String {
        self.lock().random_id(length)
    }

    // A panic while holding the lock cannot leave the generator half-updated.
    fn lock(&self) -> MutexGuard<'_, BoundedRandom<R>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
