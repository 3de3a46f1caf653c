//! # Random Strings
//!
//! Builds strings whose characters are drawn uniformly from a charset.
//! None of this is suitable for secrets: the generators are fast, not
//! cryptographically secure.
//!
//! Three entry points, depending on who owns the generator:
//! - [`random_string`] uses the thread-local generator.
//! - [`random_string_with`] takes any [`rand::Rng`], e.g. a seeded one in tests.
//! - [`Entropy`] is a shareable source that can live in a `static` or an `Arc`.
use log::trace;
use parking_lot::Mutex;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Default charset: ASCII letters and digits.
pub const BASE62: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Draws `length` characters of `charset` from `rng`. An empty charset gives an empty string.
pub fn random_string_with<R: Rng>(rng: &mut R, length: usize, charset: &str) -> String {
    let pool: Vec<char> = charset.chars().collect();
    if pool.is_empty() {
        return String::new();
    }

    trace!("drawing {} chars from a pool of {}", length, pool.len());
    (0..length)
        .map(|_| pool[rng.random_range(0..pool.len())])
        .collect()
}

/// Draws `length` characters of `charset` using the calling thread's generator.
pub fn random_string(length: usize, charset: &str) -> String {
    random_string_with(&mut rand::rng(), length, charset)
}

/// A generator that can be shared between threads.
///
/// Concurrent callers are serialized on an internal lock; no ordering between
/// them is promised.
///
/// ```rust
/// use stringkit::random::{Entropy, BASE62};
///
/// let a = Entropy::seeded(7).string(12, BASE62);
/// let b = Entropy::seeded(7).string(12, BASE62);
/// assert_eq!(a, b);
/// ```
#[derive(Debug)]
pub struct Entropy {
    rng: Mutex<SmallRng>,
}

impl Entropy {
    /// Seeds a new source from the thread-local generator.
    pub fn new() -> Self {
        let mut thread_rng = rand::rng();
        Self {
            rng: Mutex::new(SmallRng::from_rng(&mut thread_rng)),
        }
    }

    /// Deterministic source: the same seed yields the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }

    pub fn string(&self, length: usize, charset: &str) -> String {
        let mut rng = self.rng.lock();
        random_string_with(&mut *rng, length, charset)
    }
}

impl Default for Entropy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::*;

    #[test]
    fn test_random_length_and_charset() {
        assert_eq!(random_string(5, BASE62).chars().count(), 5);
        assert_eq!(random_string(0, BASE62), "");

        let result = random_string(100, BASE62);
        assert!(result.chars().all(|c| c.is_ascii_alphanumeric()));

        let custom = random_string(10, "abc");
        assert_eq!(custom.len(), 10);
        assert!(custom.chars().all(|c| "abc".contains(c)));
    }

    #[test]
    fn test_random_single_char_charset() {
        assert_eq!(random_string(5, "x"), "xxxxx");
        assert_eq!(random_string(3, "é"), "ééé");
    }

    #[test]
    fn test_random_empty_charset() {
        assert_eq!(random_string(8, ""), "");
    }

    #[test]
    fn test_random_differs_between_calls() {
        assert_ne!(random_string(20, BASE62), random_string(20, BASE62));
    }

    #[test]
    fn test_random_seeded_is_deterministic() {
        let mut a = SmallRng::seed_from_u64(42);
        let mut b = SmallRng::seed_from_u64(42);
        assert_eq!(
            random_string_with(&mut a, 16, BASE62),
            random_string_with(&mut b, 16, BASE62)
        );
    }

    #[test]
    fn test_random_entropy_shared_across_threads() {
        let entropy = Arc::new(Entropy::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let entropy = Arc::clone(&entropy);
                thread::spawn(move || entropy.string(32, "01"))
            })
            .collect();

        for handle in handles {
            let value = handle.join().unwrap();
            assert_eq!(value.len(), 32);
            assert!(value.chars().all(|c| c == '0' || c == '1'));
        }
    }
}
