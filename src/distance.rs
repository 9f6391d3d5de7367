//! Distance oracles.
//!
//! The GA never owns distance data; it queries a [`DistanceOracle`] for the
//! ordered pair it needs. Two implementations are provided:
//!
//! - [`DistanceTable`]: nested map keyed by arbitrary location identifiers
//!   (city names, codes, ...).
//! - [`DistanceMatrix`]: dense matrix keyed by `usize` index.
//!
//! Neither implementation assumes symmetry. `distance(a, b)` always reads the
//! `a → b` entry.

use crate::error::{Result, TspError};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Source of pairwise distances between locations.
pub trait DistanceOracle<L> {
    /// Distance travelled from `from` to `to`.
    ///
    /// Fails with [`TspError::MissingDistance`] or
    /// [`TspError::UnknownLocation`] instead of substituting a default.
    fn distance(&self, from: &L, to: &L) -> Result<f64>;

    /// All locations known to the oracle, in a stable order.
    fn locations(&self) -> Vec<L>;

    /// Number of locations (`N`).
    fn len(&self) -> usize;

    /// Returns `true` if the oracle has no locations.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Distance table keyed by location identifiers.
///
/// # Examples
///
/// ```
/// use tsp_ga::{DistanceOracle, DistanceTable};
///
/// let mut table = DistanceTable::new();
/// table.insert_symmetric("A", "B", 3.0);
/// table.insert("A", "A", 0.0);
/// table.insert("B", "B", 0.0);
///
/// assert_eq!(table.distance(&"B", &"A").unwrap(), 3.0);
/// assert!(table.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceTable<L: Eq + Hash> {
    order: Vec<L>,
    rows: HashMap<L, HashMap<L, f64>>,
}

impl<L: Eq + Hash + Clone + Debug> DistanceTable<L> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            rows: HashMap::new(),
        }
    }

    /// Builds a table from `(from, [(to, distance), ...])` rows.
    pub fn from_rows<R, N>(rows: R) -> Self
    where
        R: IntoIterator<Item = (L, N)>,
        N: IntoIterator<Item = (L, f64)>,
    {
        let mut table = Self::new();
        for (from, neighbours) in rows {
            table.register(&from);
            for (to, d) in neighbours {
                table.insert(from.clone(), to, d);
            }
        }
        table
    }

    /// Sets the distance for the ordered pair `from → to`.
    pub fn insert(&mut self, from: L, to: L, distance: f64) {
        self.register(&from);
        self.register(&to);
        self.rows.entry(from).or_default().insert(to, distance);
    }

    /// Sets the same distance for `a → b` and `b → a`.
    pub fn insert_symmetric(&mut self, a: L, b: L, distance: f64) {
        self.insert(a.clone(), b.clone(), distance);
        self.insert(b, a, distance);
    }

    fn register(&mut self, location: &L) {
        if !self.rows.contains_key(location) {
            self.rows.insert(location.clone(), HashMap::new());
            self.order.push(location.clone());
        }
    }

    /// Returns `true` if every defined `a → b` has an equal `b → a`.
    pub fn is_symmetric(&self) -> bool {
        self.rows.iter().all(|(from, row)| {
            row.iter().all(|(to, d)| {
                self.rows
                    .get(to)
                    .and_then(|back| back.get(from))
                    .is_some_and(|back| (back - d).abs() < 1e-12)
            })
        })
    }

    /// Checks that the table is complete over its locations, that
    /// self-distances are zero and that no distance is negative.
    pub fn validate(&self) -> Result<()> {
        for from in &self.order {
            for to in &self.order {
                let d = self.distance(from, to)?;
                if d < 0.0 || d.is_nan() {
                    return Err(TspError::InvalidConfig(format!(
                        "distance {from:?} -> {to:?} must be non-negative, got {d}"
                    )));
                }
                if from == to && d != 0.0 {
                    return Err(TspError::InvalidConfig(format!(
                        "self-distance of {from:?} must be zero, got {d}"
                    )));
                }
            }
        }
        Ok(())
    }
}

impl<L: Eq + Hash + Clone + Debug> Default for DistanceTable<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Eq + Hash + Clone + Debug> DistanceOracle<L> for DistanceTable<L> {
    fn distance(&self, from: &L, to: &L) -> Result<f64> {
        let row = self.rows.get(from).ok_or_else(|| TspError::UnknownLocation {
            location: format!("{from:?}"),
        })?;
        row.get(to).copied().ok_or_else(|| TspError::MissingDistance {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        })
    }

    fn locations(&self) -> Vec<L> {
        self.order.clone()
    }

    fn len(&self) -> usize {
        self.order.len()
    }
}

/// Dense distance matrix over locations `0..n`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    distances: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Wraps a square matrix.
    ///
    /// # Panics
    /// Panics if the matrix is not square.
    pub fn new(distances: Vec<Vec<f64>>) -> Self {
        let n = distances.len();
        assert!(
            distances.iter().all(|row| row.len() == n),
            "distance matrix must be square"
        );
        Self { distances }
    }

    /// Euclidean distances between 2-D points.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let distances = points
            .iter()
            .map(|&(x1, y1)| {
                points
                    .iter()
                    .map(|&(x2, y2)| ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt())
                    .collect()
            })
            .collect();
        Self { distances }
    }
}

impl DistanceOracle<usize> for DistanceMatrix {
    fn distance(&self, from: &usize, to: &usize) -> Result<f64> {
        let row = self
            .distances
            .get(*from)
            .ok_or_else(|| TspError::UnknownLocation {
                location: from.to_string(),
            })?;
        row.get(*to).copied().ok_or_else(|| TspError::UnknownLocation {
            location: to.to_string(),
        })
    }

    fn locations(&self) -> Vec<usize> {
        (0..self.distances.len()).collect()
    }

    fn len(&self) -> usize {
        self.distances.len()
    }
}
