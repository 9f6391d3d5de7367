//! Genetic algorithm for the Traveling Salesman Problem.
//!
//! A tour is an ordered sequence of locations; its fitness is the total
//! round-trip distance (lower is better). Each generation:
//!
//! 1. [`select`]: keep each tour as a parent with probability `1 / fitness`
//! 2. [`Recombination::recombine`]: one child per ordered group of
//!    `mixing_number` parents, spliced at shared random cut points
//! 3. [`MutationPolicy::apply`]: swap two distinct stops of each child
//! 4. [`evolve`]: merge children with the whole previous population, sort by
//!    fitness and keep the best `population_size`
//!
//! # Key Types
//!
//! - [`Tour`]: candidate route
//! - [`GaConfig`]: algorithm parameters
//! - [`GaRunner`]: executes the loop for a fixed number of generations
//! - [`GaResult`]: best tour, history and timing of a run

mod config;
pub mod operators;
mod population;
mod runner;
mod selection;
mod tour;

pub use config::GaConfig;
pub use operators::{swap_mutation, MutationPolicy, Recombination};
pub use population::generate_population;
pub use runner::{best_of, evolve, GaResult, GaRunner, GenerationReport, MaybeSend, MaybeSync};
pub use selection::{select, selection_probability};
pub use tour::{fitness, Tour};
