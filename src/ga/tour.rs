//! Tour representation and fitness evaluation.

use crate::distance::DistanceOracle;
use crate::error::{Result, TspError};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// A closed route: an ordered sequence of locations.
///
/// Tours built by shuffling are permutations of the location set. Splice
/// recombination may produce sequences with repeated locations; those are
/// still evaluated as-is (see [`fitness`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour<L> {
    stops: Vec<L>,
}

impl<L> Tour<L> {
    pub fn new(stops: Vec<L>) -> Self {
        Self { stops }
    }

    pub fn stops(&self) -> &[L] {
        &self.stops
    }

    pub(crate) fn stops_mut(&mut self) -> &mut Vec<L> {
        &mut self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

impl<L: Clone> Tour<L> {
    /// Same cycle, starting `k` positions later.
    pub fn rotated(&self, k: usize) -> Self {
        let mut stops = self.stops.clone();
        if !stops.is_empty() {
            let k = k % stops.len();
            stops.rotate_left(k);
        }
        Self { stops }
    }

    /// Same cycle, travelled backwards.
    pub fn reversed(&self) -> Self {
        let mut stops = self.stops.clone();
        stops.reverse();
        Self { stops }
    }
}

impl<L: Eq + Hash> Tour<L> {
    /// Returns `true` if every location appears exactly once and nothing
    /// else appears.
    pub fn is_permutation_of(&self, locations: &[L]) -> bool {
        if self.stops.len() != locations.len() {
            return false;
        }
        let expected: HashSet<&L> = locations.iter().collect();
        let mut seen = HashSet::with_capacity(self.stops.len());
        self.stops
            .iter()
            .all(|stop| expected.contains(stop) && seen.insert(stop))
    }
}

impl<L> From<Vec<L>> for Tour<L> {
    fn from(stops: Vec<L>) -> Self {
        Self::new(stops)
    }
}

impl<L: fmt::Display> fmt::Display for Tour<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stop) in self.stops.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{stop}")?;
        }
        Ok(())
    }
}

/// Total round-trip distance of `tour`: every consecutive leg plus the
/// closing leg from the last stop back to the first. Lower is better.
///
/// Each leg is looked up as the ordered pair it travels, so asymmetric
/// tables are honoured.
///
/// # Errors
/// - [`TspError::TourLength`] if the tour does not have exactly
///   `oracle.len()` stops.
/// - Any lookup error from the oracle.
pub fn fitness<L, O>(tour: &Tour<L>, oracle: &O) -> Result<f64>
where
    O: DistanceOracle<L> + ?Sized,
{
    let expected = oracle.len();
    if tour.len() != expected {
        return Err(TspError::TourLength {
            expected,
            actual: tour.len(),
        });
    }
    let (first, last) = match (tour.stops.first(), tour.stops.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Ok(0.0),
    };

    let mut total = 0.0;
    for leg in tour.stops.windows(2) {
        total += oracle.distance(&leg[0], &leg[1])?;
    }
    total += oracle.distance(last, first)?;
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{minas_gerais, unit_square};
    use crate::distance::DistanceMatrix;
    use proptest::prelude::*;

    #[test]
    fn test_unit_square_optimum() {
        let table = unit_square();
        let tour = Tour::new(vec!["A", "B", "C", "D"]);
        assert_eq!(fitness(&tour, &table), Ok(4.0));

        let crossed = Tour::new(vec!["A", "C", "B", "D"]);
        assert_eq!(fitness(&crossed, &table), Ok(6.0));
    }

    #[test]
    fn test_closing_leg_uses_ordered_pair() {
        let table = minas_gerais();
        // Montes Claros -> Ouro Preto is 513, the reverse is 60.
        let cities = vec![
            "Ouro Preto",
            "Itaúna",
            "Divinópolis",
            "Belo Horizonte",
            "Viçosa",
            "Lavras",
            "Janaúba",
            "Monte Verde",
            "Governador Valadares",
            "Montes Claros",
        ];
        let tour = Tour::new(cities);
        let expected = 169.0 + 41.1 + 124.0 + 226.0 + 296.0 + 762.0 + 1180.0 + 793.0 + 497.0 + 513.0;
        let got = fitness(&tour, &table).unwrap();
        assert!((got - expected).abs() < 1e-9, "got {got}, expected {expected}");
    }

    #[test]
    fn test_duplicates_are_evaluated_as_is() {
        let table = unit_square();
        let tour = Tour::new(vec!["A", "B", "B", "D"]);
        // A-B 1, B-B 0, B-D 2, D-A 1
        assert_eq!(fitness(&tour, &table), Ok(4.0));
    }

    #[test]
    fn test_wrong_length_fails() {
        let table = unit_square();
        let tour = Tour::new(vec!["A", "B", "C"]);
        assert_eq!(
            fitness(&tour, &table),
            Err(TspError::TourLength {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_unknown_location_fails() {
        let table = unit_square();
        let tour = Tour::new(vec!["A", "B", "C", "Z"]);
        assert!(matches!(
            fitness(&tour, &table),
            Err(TspError::MissingDistance { .. })
        ));
    }

    #[test]
    fn test_is_permutation_of() {
        let locations = ["A", "B", "C"];
        assert!(Tour::new(vec!["C", "A", "B"]).is_permutation_of(&locations));
        assert!(!Tour::new(vec!["C", "C", "B"]).is_permutation_of(&locations));
        assert!(!Tour::new(vec!["C", "A"]).is_permutation_of(&locations));
        assert!(!Tour::new(vec!["C", "A", "Z"]).is_permutation_of(&locations));
    }

    #[test]
    fn test_rotation_and_display() {
        let tour = Tour::new(vec!["A", "B", "C", "D"]);
        assert_eq!(tour.rotated(1).stops(), &["B", "C", "D", "A"]);
        assert_eq!(tour.rotated(4), tour);
        assert_eq!(tour.reversed().stops(), &["D", "C", "B", "A"]);
        assert_eq!(tour.to_string(), "A -> B -> C -> D");
    }

    fn instance() -> impl Strategy<Value = (Vec<(f64, f64)>, Vec<usize>, usize)> {
        prop::collection::vec((0.0..100.0f64, 0.0..100.0f64), 2..12).prop_flat_map(|points| {
            let n = points.len();
            (
                Just(points),
                Just((0..n).collect::<Vec<_>>()).prop_shuffle(),
                0..n,
            )
        })
    }

    proptest! {
        #[test]
        fn prop_fitness_invariant_under_rotation((points, order, k) in instance()) {
            let matrix = DistanceMatrix::from_points(&points);
            let tour = Tour::new(order);
            let a = fitness(&tour, &matrix).unwrap();
            let b = fitness(&tour.rotated(k), &matrix).unwrap();
            prop_assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
        }

        #[test]
        fn prop_fitness_invariant_under_reversal((points, order, _k) in instance()) {
            let matrix = DistanceMatrix::from_points(&points);
            let tour = Tour::new(order);
            let a = fitness(&tour, &matrix).unwrap();
            let b = fitness(&tour.reversed(), &matrix).unwrap();
            prop_assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
        }
    }
}
