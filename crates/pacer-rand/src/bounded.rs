use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{check_upper, BoundError};

/// How a raw draw is reduced into `[0, upper)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sampling {
    /// `abs(draw % upper)` over a full-width signed draw.
    ///
    /// Values near zero come up slightly more often, because the generator's
    /// range is not a multiple of `upper`. Use it only when a caller depends on
    /// the exact sequence this reduction produces.
    ModuloAbs,
    /// Rejection sampling. Every value in range is equally likely.
    #[default]
    Uniform,
}

impl std::fmt::Display for Sampling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Sampling::ModuloAbs => "modulo_abs",
            Sampling::Uniform => "uniform",
        };
        write!(f, "{label}")
    }
}

/// Draws non-negative integers below a caller supplied bound.
///
/// Each instance owns its generator. Nothing is cached between draws, so two
/// calls with the same bound are independent apart from the generator state
/// advancing.
#[derive(Debug, Clone)]
pub struct BoundedRandom<R = StdRng> {
    pub(crate) rng: R,
    sampling: Sampling,
}

impl BoundedRandom<StdRng> {
    pub fn from_entropy(sampling: Sampling) -> Self {
        tracing::debug!(target: "pacer_rand", %sampling, "seeding generator from OS entropy");
        Self::new(StdRng::from_entropy(), sampling)
    }

    /// Same seed and sampling give the same sequence of draws.
    pub fn seeded(seed: u64, sampling: Sampling) -> Self {
        tracing::debug!(target: "pacer_rand", seed, %sampling, "seeding generator");
        Self::new(StdRng::seed_from_u64(seed), sampling)
    }
}

impl Default for BoundedRandom<StdRng> {
    fn default() -> Self {
        Self::from_entropy(Sampling::default())
    }
}

impl<R: RngCore> BoundedRandom<R> {
    pub fn new(rng: R, sampling: Sampling) -> Self {
        Self { rng, sampling }
    }

    pub fn sampling(&self) -> Sampling {
        self.sampling
    }

    /// Returns a value in `[0, upper)`.
    ///
    /// # Errors
    /// [`BoundError::DivisionByZero`] when `upper` is zero and
    /// [`BoundError::InvalidArgument`] when it is negative.
    pub fn random_int(&mut self, upper: i32) -> Result<i32, BoundError> {
        check_upper(upper.into())?;
        let value = match self.sampling {
            // The residue lies in (-upper, upper), so wrapping_abs never wraps
            // for a positive bound.
            Sampling::ModuloAbs => (self.rng.gen::<i32>() % upper).wrapping_abs(),
            Sampling::Uniform => self.rng.gen_range(0..upper),
        };
        Ok(value)
    }

    /// 64-bit counterpart of [`BoundedRandom::random_int`].
    pub fn random_long(&mut self, upper: i64) -> Result<i64, BoundError> {
        check_upper(upper)?;
        let value = match self.sampling {
            Sampling::ModuloAbs => (self.rng.gen::<i64>() % upper).wrapping_abs(),
            Sampling::Uniform => self.rng.gen_range(0..upper),
        };
        Ok(value)
    }

    /// Uniform value in `[0, max]` over the full `u64` range.
    ///
    /// Always uniform regardless of [`Sampling`]; there is no bound to reject.
    pub fn random_up_to(&mut self, max: u64) -> u64 {
        self.rng.gen_range(0..=max)
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}
