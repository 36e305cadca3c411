use serde::{Deserialize, Serialize};

use roomplan::InvalidInput;
use roomplan::eval::FitnessConfig;

/// Configuration for the GLO optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct GLOConfig {
    /// Seed for the PRNG. If undefined, the algorithm will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Number of layouts in every generation
    pub pop_size: usize,
    /// Number of generations to evolve, the only stopping condition
    pub generations: usize,
    /// Probability that a new layout is bred from two parents instead of placed at random
    pub crossover_rate: f64,
    /// Probability with which every piece of a new layout is nudged
    pub mutation_rate: f64,
    /// Standard deviation (in room units) of the gaussian nudge applied during mutation
    pub mutation_std_dev: f64,
    /// Weights of the fitness function
    #[serde(default)]
    pub fitness: FitnessConfig,
}

impl GLOConfig {
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if self.pop_size == 0 {
            return Err(InvalidInput::PopulationSize(self.pop_size));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(InvalidInput::CrossoverRate(self.crossover_rate));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(InvalidInput::MutationRate(self.mutation_rate));
        }
        if !(self.mutation_std_dev.is_finite() && self.mutation_std_dev >= 0.0) {
            return Err(InvalidInput::MutationStdDev(self.mutation_std_dev));
        }
        Ok(())
    }

    /// Number of best layouts carried over unchanged to the next generation
    pub fn n_elites(&self) -> usize {
        usize::max(1, self.pop_size / 5)
    }
}

impl Default for GLOConfig {
    fn default() -> Self {
        Self {
            prng_seed: Some(0),
            pop_size: 50,
            generations: 50,
            crossover_rate: 0.7,
            mutation_rate: 0.3,
            mutation_std_dev: 0.5,
            fitness: FitnessConfig::default(),
        }
    }
}
