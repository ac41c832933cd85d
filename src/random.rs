//! Random string generation.

use rand::Rng;
use rand::distributions::Alphanumeric;

/// `length` characters drawn uniformly from `[a-zA-Z0-9]` with the thread
/// RNG.
#[must_use]
pub fn random_alphanumeric(length: usize) -> String {
    random_alphanumeric_with(&mut rand::thread_rng(), length)
}

/// Same as [`random_alphanumeric`] with a caller-supplied RNG, for
/// reproducible output.
pub fn random_alphanumeric_with<R: Rng>(rng: &mut R, length: usize) -> String {
    rng.sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_length_and_alphabet() {
        for length in [0, 1, 16, 257] {
            let s = random_alphanumeric(length);
            assert_eq!(s.len(), length);
            assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = random_alphanumeric_with(&mut ChaCha8Rng::seed_from_u64(7), 32);
        let b = random_alphanumeric_with(&mut ChaCha8Rng::seed_from_u64(7), 32);
        let c = random_alphanumeric_with(&mut ChaCha8Rng::seed_from_u64(8), 32);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_covers_alphabet() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let s = random_alphanumeric_with(&mut rng, 20_000);
        for c in ('a'..='z').chain('A'..='Z').chain('0'..='9') {
            assert!(s.contains(c), "missing {c}");
        }
    }
}
