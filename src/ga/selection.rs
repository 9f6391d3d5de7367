//! Inverse-distance Bernoulli selection.
//!
//! Each tour is kept as a candidate parent independently with probability
//! `1 / fitness`, so shorter tours are more likely to breed. The parent set
//! may be empty and has no fixed size.
//!
//! The probability is deliberately left unclamped: any tour with total
//! distance `<= 1` is always selected, and a zero-length tour has infinite
//! weight. Distance models whose tours can be that short should be rescaled.

use super::tour::{fitness, Tour};
use crate::distance::DistanceOracle;
use crate::error::Result;
use rand::Rng;

/// Selection probability for a tour of the given total distance.
///
/// Not clamped to `[0, 1]`; values `>= 1` mean "always selected".
pub fn selection_probability(fitness: f64) -> f64 {
    1.0 / fitness
}

/// Selects candidate parents from `population`.
///
/// Exactly one uniform draw is consumed per tour, in population order, and
/// the result keeps population order. With a seeded `rng` the output is
/// reproducible.
///
/// # Errors
/// Propagates fitness lookup errors.
pub fn select<'a, L, O, R>(
    population: &'a [Tour<L>],
    oracle: &O,
    rng: &mut R,
) -> Result<Vec<&'a Tour<L>>>
where
    O: DistanceOracle<L> + ?Sized,
    R: Rng,
{
    let mut parents = Vec::new();
    for tour in population {
        let p = selection_probability(fitness(tour, oracle)?);
        if rng.random::<f64>() < p {
            parents.push(tour);
        }
    }
    Ok(parents)
}
