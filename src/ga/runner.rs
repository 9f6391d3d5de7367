//! GA evolutionary loop execution.
//!
//! [`evolve`] performs one generation:
//! selection → recombination → mutation → elitist merge-and-truncate.
//! [`GaRunner`] owns the loop state (population, generation counter, random
//! source, timer) and calls [`evolve`] a fixed number of times.

use super::config::GaConfig;
use super::population::generate_population;
use super::selection::select;
use super::tour::{fitness, Tour};
use crate::distance::DistanceOracle;
use crate::error::{Result, TspError};
use crate::random::create_rng;
use rand::Rng;
use std::hash::Hash;
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Thread-safety required of locations. `Send` with the `parallel` feature,
/// nothing otherwise.
#[cfg(feature = "parallel")]
pub trait MaybeSend: Send {}
#[cfg(feature = "parallel")]
impl<T: Send + ?Sized> MaybeSend for T {}

#[cfg(not(feature = "parallel"))]
pub trait MaybeSend {}
#[cfg(not(feature = "parallel"))]
impl<T: ?Sized> MaybeSend for T {}

/// Thread-safety required of oracles. `Sync` with the `parallel` feature,
/// nothing otherwise.
#[cfg(feature = "parallel")]
pub trait MaybeSync: Sync {}
#[cfg(feature = "parallel")]
impl<T: Sync + ?Sized> MaybeSync for T {}

#[cfg(not(feature = "parallel"))]
pub trait MaybeSync {}
#[cfg(not(feature = "parallel"))]
impl<T: ?Sized> MaybeSync for T {}

/// Best tour of a generation, reported before that generation evolves.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport<L> {
    /// Generation number, starting at 0 for the initial population.
    pub generation: usize,

    /// Shortest tour in the population.
    pub best: Tour<L>,

    /// Total distance of `best`.
    pub best_fitness: f64,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult<L> {
    /// Shortest tour of the final population.
    pub best: Tour<L>,

    /// Total distance of `best`.
    pub best_fitness: f64,

    /// Number of evolution steps executed.
    pub generations: usize,

    /// Best fitness of the initial population and after each step.
    pub fitness_history: Vec<f64>,

    /// Final population, sorted by ascending distance when at least one
    /// step ran.
    pub population: Vec<Tour<L>>,

    /// Wall-clock time spent in the loop.
    pub elapsed: Duration,
}

/// Runs one generation and returns the next population.
///
/// Children are merged with the whole previous population before the
/// truncation to `config.population_size`, so the best tour is never lost.
/// If selection yields fewer than `config.mixing_number` parents no children
/// are produced and the result is the sorted previous population.
///
/// The result holds `min(config.population_size, children + population)`
/// tours. Ties keep children ahead of older tours.
pub fn evolve<L, O, R>(
    population: Vec<Tour<L>>,
    oracle: &O,
    config: &GaConfig,
    rng: &mut R,
) -> Result<Vec<Tour<L>>>
where
    L: Clone + Eq + Hash + MaybeSend,
    O: DistanceOracle<L> + MaybeSync + ?Sized,
    R: Rng,
{
    let parents = select(&population, oracle, rng)?;
    let mut offspring = config
        .recombination
        .recombine(&parents, config.mixing_number, rng)?;

    tracing::debug!(
        parents = parents.len(),
        offspring = offspring.len(),
        "recombination done"
    );

    for child in &mut offspring {
        config
            .mutation_policy
            .apply(child, config.mutation_rate, rng);
    }

    let mut merged = offspring;
    merged.extend(population);

    let mut scored = score_all(merged, oracle, config.parallel)?;
    scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(config.population_size);

    Ok(scored.into_iter().map(|(_, tour)| tour).collect())
}

/// Returns the shortest tour and its distance. Ties go to the earliest tour.
pub fn best_of<'a, L, O>(population: &'a [Tour<L>], oracle: &O) -> Result<(&'a Tour<L>, f64)>
where
    O: DistanceOracle<L> + ?Sized,
{
    let mut best: Option<(&Tour<L>, f64)> = None;
    for tour in population {
        let f = fitness(tour, oracle)?;
        if best.map_or(true, |(_, best_f)| f < best_f) {
            best = Some((tour, f));
        }
    }
    best.ok_or(TspError::EmptyPopulation)
}

#[cfg(feature = "parallel")]
fn score_all<L, O>(tours: Vec<Tour<L>>, oracle: &O, parallel: bool) -> Result<Vec<(f64, Tour<L>)>>
where
    L: Send,
    O: DistanceOracle<L> + Sync + ?Sized,
{
    if parallel {
        tours
            .into_par_iter()
            .map(|tour| fitness(&tour, oracle).map(|f| (f, tour)))
            .collect()
    } else {
        score_sequential(tours, oracle)
    }
}

#[cfg(not(feature = "parallel"))]
fn score_all<L, O>(tours: Vec<Tour<L>>, oracle: &O, _parallel: bool) -> Result<Vec<(f64, Tour<L>)>>
where
    O: DistanceOracle<L> + ?Sized,
{
    score_sequential(tours, oracle)
}

fn score_sequential<L, O>(tours: Vec<Tour<L>>, oracle: &O) -> Result<Vec<(f64, Tour<L>)>>
where
    O: DistanceOracle<L> + ?Sized,
{
    tours
        .into_iter()
        .map(|tour| fitness(&tour, oracle).map(|f| (f, tour)))
        .collect()
}

/// Executes the GA loop.
///
/// # Usage
///
/// ```
/// use tsp_ga::dataset::minas_gerais;
/// use tsp_ga::ga::{GaConfig, GaRunner};
///
/// let table = minas_gerais();
/// let config = GaConfig::default().with_max_generations(20).with_seed(42);
/// let result = GaRunner::run(&table, &config).unwrap();
/// assert_eq!(result.fitness_history.len(), 21);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA over all of the oracle's locations.
    pub fn run<L, O>(oracle: &O, config: &GaConfig) -> Result<GaResult<L>>
    where
        L: Clone + Eq + Hash + MaybeSend,
        O: DistanceOracle<L> + MaybeSync + ?Sized,
    {
        Self::run_with_observer(oracle, config, |_| {})
    }

    /// Runs the GA, calling `observer` with the best tour of each generation
    /// before that generation evolves.
    ///
    /// The loop stops after exactly `config.max_generations` steps. Any
    /// error aborts the run.
    pub fn run_with_observer<L, O, F>(
        oracle: &O,
        config: &GaConfig,
        mut observer: F,
    ) -> Result<GaResult<L>>
    where
        L: Clone + Eq + Hash + MaybeSend,
        O: DistanceOracle<L> + MaybeSync + ?Sized,
        F: FnMut(&GenerationReport<L>),
    {
        let locations = oracle.locations();
        config.validate_for(locations.len())?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);
        tracing::debug!(
            seed,
            locations = locations.len(),
            population_size = config.population_size,
            "starting GA run"
        );

        let start = Instant::now();
        let mut population = generate_population(&locations, config.population_size, &mut rng);
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);

        for generation in 0..config.max_generations {
            let (best, best_fitness) = best_of(&population, oracle)?;
            tracing::debug!(generation, best_fitness, "generation");
            observer(&GenerationReport {
                generation,
                best: best.clone(),
                best_fitness,
            });
            fitness_history.push(best_fitness);

            population = evolve(population, oracle, config, &mut rng)?;
        }

        let (best, best_fitness) = best_of(&population, oracle)?;
        let best = best.clone();
        fitness_history.push(best_fitness);
        let elapsed = start.elapsed();

        tracing::info!(
            generations = config.max_generations,
            best_fitness,
            elapsed_ms = elapsed.as_millis() as u64,
            "GA run finished"
        );

        Ok(GaResult {
            best,
            best_fitness,
            generations: config.max_generations,
            fitness_history,
            population,
            elapsed,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
