use rand::{Rng, RngCore};

use crate::BoundedRandom;

const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub const DEFAULT_ID_LENGTH: usize = 10;

impl<R: RngCore> BoundedRandom<R> {
    /// Alphanumeric identifier of `length` characters.
    ///
    /// Characters are always picked uniformly, whatever [`crate::Sampling`]
    /// the generator was built with.
    pub fn random_id(&mut self, length: usize) -> String {
        (0..length)
            .map(|_| char::from(ID_ALPHABET[self.rng.gen_range(0..ID_ALPHABET.len())]))
            .collect()
    }
}
