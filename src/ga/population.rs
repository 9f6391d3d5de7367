//! Initial population generation.

use super::tour::Tour;
use rand::seq::SliceRandom;
use rand::Rng;

/// Creates `size` tours, each an independent random shuffle of `locations`.
pub fn generate_population<L: Clone, R: Rng>(
    locations: &[L],
    size: usize,
    rng: &mut R,
) -> Vec<Tour<L>> {
    (0..size)
        .map(|_| {
            let mut stops = locations.to_vec();
            stops.shuffle(rng);
            Tour::new(stops)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::MINAS_GERAIS_CITIES;
    use crate::random::create_rng;

    #[test]
    fn test_every_tour_is_a_permutation() {
        let mut rng = create_rng(42);
        let population = generate_population(&MINAS_GERAIS_CITIES, 30, &mut rng);

        assert_eq!(population.len(), 30);
        for tour in &population {
            assert!(
                tour.is_permutation_of(&MINAS_GERAIS_CITIES),
                "not a permutation: {tour:?}"
            );
        }
    }

    #[test]
    fn test_shuffles_differ() {
        let mut rng = create_rng(42);
        let locations: Vec<usize> = (0..10).collect();
        let population = generate_population(&locations, 20, &mut rng);
        let distinct: std::collections::HashSet<_> = population.iter().collect();
        assert!(distinct.len() > 1, "expected diverse initial tours");
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let locations: Vec<usize> = (0..8).collect();
        let a = generate_population(&locations, 5, &mut create_rng(3));
        let b = generate_population(&locations, 5, &mut create_rng(3));
        assert_eq!(a, b);
    }
}
