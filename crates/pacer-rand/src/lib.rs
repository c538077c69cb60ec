//! Bounded random values over an explicitly owned generator.
//!
//! [`BoundedRandom`] is the main entry point. The free functions in [`shared`]
//! draw from a per-thread generator for callers that do not want to carry one
//! around, and [`SharedRandom`] hands a single generator to several threads.

pub mod bounded;
pub mod error;
pub mod id;
pub mod shared;

pub use bounded::{BoundedRandom, Sampling};
pub use error::BoundError;
pub use id::DEFAULT_ID_LENGTH;
pub use shared::{random_id, random_int, random_long, SharedRandom};
