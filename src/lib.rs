//! Genetic-algorithm heuristic solver for small Traveling Salesman instances.
//!
//! The solver searches for a short closed tour visiting every location
//! exactly once. It is a best-effort metaheuristic: no optimality or
//! convergence guarantee.
//!
//! - [`distance`]: the [`DistanceOracle`] trait and two table types
//! - [`ga`]: tours, fitness, selection, recombination, mutation and the
//!   evolutionary loop
//! - [`dataset`]: built-in instances
//!
//! All randomness flows from one seedable generator ([`random::create_rng`]),
//! so a fixed seed reproduces a run exactly.

pub mod dataset;
pub mod distance;
mod error;
pub mod ga;
pub mod random;

pub use distance::{DistanceMatrix, DistanceOracle, DistanceTable};
pub use error::{Result, TspError};
