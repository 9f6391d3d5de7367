//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::operators::{MutationPolicy, Recombination};
use crate::error::{Result, TspError};

/// Configuration for the TSP genetic algorithm.
///
/// # Defaults
///
/// ```
/// use tsp_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 30);
/// assert_eq!(config.mixing_number, 2);
/// assert_eq!(config.max_generations, 1);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_ga::ga::{GaConfig, MutationPolicy, Recombination};
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_max_generations(200)
///     .with_mutation_policy(MutationPolicy::Gated)
///     .with_recombination(Recombination::OrderedSplice)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of tours kept after every generation.
    pub population_size: usize,

    /// Parents combined into each child. Must be at least 2 and at most the
    /// number of locations.
    pub mixing_number: usize,

    /// Mutation probability, read only under [`MutationPolicy::Gated`].
    pub mutation_rate: f64,

    /// Whether every child is mutated or only a `mutation_rate` share.
    pub mutation_policy: MutationPolicy,

    /// Crossover strategy.
    pub recombination: Recombination,

    /// Number of evolution steps to run. The only stopping condition.
    pub max_generations: usize,

    /// Whether to evaluate fitness in parallel (requires the `parallel`
    /// feature; ignored otherwise).
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            mixing_number: 2,
            mutation_rate: 0.05,
            mutation_policy: MutationPolicy::default(),
            recombination: Recombination::default(),
            max_generations: 1,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of parents per child.
    pub fn with_mixing_number(mut self, n: usize) -> Self {
        self.mixing_number = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation gating policy.
    pub fn with_mutation_policy(mut self, policy: MutationPolicy) -> Self {
        self.mutation_policy = policy;
        self
    }

    /// Sets the crossover strategy.
    pub fn with_recombination(mut self, recombination: Recombination) -> Self {
        self.recombination = recombination;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration on its own.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(TspError::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        if self.mixing_number < 2 {
            return Err(TspError::InvalidConfig(
                "mixing_number must be at least 2".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TspError::InvalidConfig(
                "mutation_rate must be within [0, 1]".into(),
            ));
        }
        Ok(())
    }

    /// Validates the configuration against a problem with `locations`
    /// locations.
    pub fn validate_for(&self, locations: usize) -> Result<()> {
        self.validate()?;
        if locations < 2 {
            return Err(TspError::InvalidConfig(format!(
                "at least 2 locations are required, got {locations}"
            )));
        }
        if self.mixing_number > locations {
            return Err(TspError::NotEnoughCutPoints {
                mixing_number: self.mixing_number,
                locations,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 30);
        assert_eq!(config.mixing_number, 2);
        assert!((config.mutation_rate - 0.05).abs() < 1e-12);
        assert_eq!(config.mutation_policy, MutationPolicy::Always);
        assert_eq!(config.recombination, Recombination::Splice);
        assert_eq!(config.max_generations, 1);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(80)
            .with_mixing_number(3)
            .with_mutation_rate(0.2)
            .with_mutation_policy(MutationPolicy::Gated)
            .with_recombination(Recombination::OrderedSplice)
            .with_max_generations(500)
            .with_parallel(true)
            .with_seed(7);

        assert_eq!(config.population_size, 80);
        assert_eq!(config.mixing_number, 3);
        assert!((config.mutation_rate - 0.2).abs() < 1e-12);
        assert_eq!(config.mutation_policy, MutationPolicy::Gated);
        assert_eq!(config.recombination, Recombination::OrderedSplice);
        assert_eq!(config.max_generations, 500);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_clamp_mutation_rate() {
        assert!((GaConfig::default().with_mutation_rate(1.5).mutation_rate - 1.0).abs() < 1e-12);
        assert!(GaConfig::default().with_mutation_rate(-1.0).mutation_rate.abs() < 1e-12);
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
        assert!(GaConfig::default().validate_for(10).is_ok());
    }

    #[test]
    fn test_zero_generations_is_valid() {
        assert!(GaConfig::default().with_max_generations(0).validate().is_ok());
    }

    #[test]
    fn test_validate_empty_population() {
        let config = GaConfig::default().with_population_size(0);
        assert!(matches!(config.validate(), Err(TspError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_mixing_number() {
        let config = GaConfig::default().with_mixing_number(1);
        assert!(matches!(config.validate(), Err(TspError::InvalidConfig(_))));

        let config = GaConfig::default().with_mixing_number(5);
        assert!(config.validate_for(5).is_ok());
        assert_eq!(
            config.validate_for(4),
            Err(TspError::NotEnoughCutPoints {
                mixing_number: 5,
                locations: 4
            })
        );
    }

    #[test]
    fn test_validate_too_few_locations() {
        assert!(matches!(
            GaConfig::default().validate_for(1),
            Err(TspError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rate_set_directly() {
        let config = GaConfig {
            mutation_rate: 2.0,
            ..GaConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
