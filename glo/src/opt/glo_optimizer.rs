use std::sync::Arc;
use std::time::{Duration, Instant};

use itertools::Itertools;
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand::prelude::SmallRng;
use rand::seq::IndexedRandom;
use thousands::Separable;

use roomplan::InvalidInput;
use roomplan::entities::{FurnitureSpec, Instance, Layout, RoomBounds};
use roomplan::eval::{Evaluator, Fitness, ScoreBreakdown};
use roomplan::util::assertions;

use crate::config::GLOConfig;
use crate::error::GLOError;
use crate::opt::crossover::crossover;
use crate::opt::mutation::Mutator;
use crate::opt::population::{Population, RankedPopulation};
use crate::samplers::uniform_placement_sampler::place_random;

/// Genetic Layout Optimizer (GLO).
///
/// Evolves a population of random layouts for a fixed number of generations through elitism,
/// uniform crossover and gaussian mutation, and returns the best layout of the final generation.
pub struct GLOptimizer {
    pub instance: Instance,
    pub config: GLOConfig,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
    pub evaluator: Evaluator,
    pub mutator: Mutator,
    pub eval_counter: usize,
}

impl GLOptimizer {
    pub fn new(instance: Instance, config: GLOConfig, rng: SmallRng) -> Result<Self, InvalidInput> {
        config.validate()?;
        let mutator = Mutator::new(config.mutation_rate, config.mutation_std_dev)?;
        Ok(Self {
            instance,
            config,
            rng,
            evaluator: Evaluator::new(config.fitness),
            mutator,
            eval_counter: 0,
        })
    }

    pub fn solve(&mut self) -> GLOSolution {
        let start = Instant::now();
        let GLOConfig {
            pop_size,
            generations,
            ..
        } = self.config;

        info!(
            "[GLO] placing {} pieces in a {:.2} x {:.2} room (pop. size: {pop_size}, generations: {generations})",
            self.instance.n_pieces(),
            self.instance.room().length,
            self.instance.room().width,
        );

        let mut population = Population::random(&self.instance, pop_size, &mut self.rng);

        for generation in 0..generations {
            let ranked = self.rank(&population);
            debug!(
                "[GLO] generation {}/{}: best fitness {}",
                generation + 1,
                generations,
                ranked.best().fitness
            );
            // elites are selected from the sorted generation before any child is bred
            population = self.next_generation(&ranked);
        }

        let ranked = self.rank(&population);
        let best = ranked.best();
        let breakdown = self
            .evaluator
            .evaluate_detailed(&best.layout, self.instance.room());
        debug_assert_eq!(best.fitness, breakdown.fitness);

        let elapsed = start.elapsed();
        info!(
            "[GLO] optimization finished in {:.3}ms ({} evaluations)",
            elapsed.as_secs_f64() * 1000.0,
            self.eval_counter.separate_with_commas()
        );
        info!(
            "[GLO] best layout scored {} ({} overlapping pairs, {} out of bounds, {} wall contacts, balanced: {})",
            breakdown.fitness,
            breakdown.overlapping_pairs,
            breakdown.out_of_bounds,
            breakdown.wall_contacts,
            breakdown.balanced
        );

        GLOSolution {
            layout: best.layout.as_ref().clone(),
            breakdown,
            generations,
            n_evaluations: self.eval_counter,
            elapsed,
        }
    }

    fn rank(&mut self, population: &Population) -> RankedPopulation {
        self.eval_counter += population.len();
        population.rank(&self.instance, &self.evaluator)
    }

    /// Breeds a completely new population from a ranked one.
    /// The best layouts survive unchanged, the rest is filled with mutated children.
    fn next_generation(&mut self, ranked: &RankedPopulation) -> Population {
        let pop_size = self.config.pop_size;
        let mut next = Vec::with_capacity(pop_size);
        next.extend(ranked.elites(self.config.n_elites()).cloned());

        let parent_pool = ranked.parent_pool(pop_size / 2);

        while next.len() < pop_size {
            let child = match self.rng.random_bool(self.config.crossover_rate) {
                true => match parent_pool
                    .choose_multiple(&mut self.rng, 2)
                    .collect_vec()
                    .as_slice()
                {
                    [a, b] => crossover(&a.layout, &b.layout, &mut self.rng),
                    //too few distinct parents in the pool
                    _ => place_random(&self.instance, &mut self.rng),
                },
                false => place_random(&self.instance, &mut self.rng),
            };
            let child = self
                .mutator
                .mutate(&child, self.instance.room(), &mut self.rng);

            debug_assert!(assertions::layout_matches_instance(&child, &self.instance));
            debug_assert!(assertions::layout_within_sampling_range(
                &child,
                &self.instance
            ));
            next.push(Arc::new(child));
        }

        Population::new(next)
    }
}

/// Best layout found by a [`GLOptimizer`] run
#[derive(Clone, Debug)]
pub struct GLOSolution {
    /// One placement per piece, index-aligned with the furniture of the instance
    pub layout: Layout,
    pub breakdown: ScoreBreakdown,
    pub generations: usize,
    pub n_evaluations: usize,
    pub elapsed: Duration,
}

impl GLOSolution {
    pub fn fitness(&self) -> Fitness {
        self.breakdown.fitness
    }
}

/// Seeds a [`SmallRng`] from `prng_seed`, or from OS entropy if no seed is given.
pub fn init_rng(prng_seed: Option<u64>) -> Result<SmallRng, GLOError> {
    match prng_seed {
        Some(seed) => Ok(SmallRng::seed_from_u64(seed)),
        None => SmallRng::try_from_os_rng().map_err(|e| GLOError::RandomSource(e.to_string())),
    }
}

/// Searches for the best placement of `furniture` in `room` with the default operator rates.
///
/// Fails with [`InvalidInput`] before any generation is run if the room or any piece has a non-positive
/// dimension, if `furniture` is empty or if `pop_size` is 0.
pub fn optimize(
    furniture: Vec<FurnitureSpec>,
    room: RoomBounds,
    pop_size: usize,
    generations: usize,
    rng: SmallRng,
) -> Result<GLOSolution, GLOError> {
    let instance = Instance::new(room, furniture)?;
    let config = GLOConfig {
        prng_seed: None,
        pop_size,
        generations,
        ..GLOConfig::default()
    };
    let mut optimizer = GLOptimizer::new(instance, config, rng)?;
    Ok(optimizer.solve())
}
