//! Seedable random source threaded through every operator.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the run's random number generator from a seed.
///
/// The same seed reproduces the same initial population, selections, cut
/// points and mutations.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        let xs: Vec<u64> = (0..8).map(|_| a.random()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.random()).collect();
        assert_eq!(xs, ys);
    }
}
