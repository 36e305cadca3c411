use std::sync::Arc;

use rand::Rng;
use rayon::prelude::*;

use roomplan::entities::{Instance, Layout};
use roomplan::eval::{Evaluator, Fitness};

use crate::samplers::uniform_placement_sampler::place_random;

/// All layouts of a single generation.
///
/// Layouts are shared through [`Arc`] and never modified, so elites can be carried over to the
/// next generation without copying while the previous generation is still being read.
#[derive(Clone, Debug)]
pub struct Population {
    layouts: Vec<Arc<Layout>>,
}

impl Population {
    pub fn new(layouts: Vec<Arc<Layout>>) -> Self {
        Self { layouts }
    }

    /// A population of `size` layouts, each placed uniformly at random.
    pub fn random(instance: &Instance, size: usize, rng: &mut impl Rng) -> Self {
        let layouts = (0..size)
            .map(|_| Arc::new(place_random(instance, rng)))
            .collect();
        Self { layouts }
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Evaluates every layout (in parallel) and sorts them by descending fitness.
    /// The sort is stable: layouts with equal fitness keep their relative order.
    pub fn rank(&self, instance: &Instance, evaluator: &Evaluator) -> RankedPopulation {
        let mut ranked = self
            .layouts
            .par_iter()
            .map(|layout| ScoredLayout {
                fitness: evaluator.evaluate(layout, instance.room()),
                layout: layout.clone(),
            })
            .collect::<Vec<_>>();

        ranked.sort_by(|a, b| b.fitness.cmp(&a.fitness));

        RankedPopulation { ranked }
    }
}

#[derive(Clone, Debug)]
pub struct ScoredLayout {
    pub layout: Arc<Layout>,
    pub fitness: Fitness,
}

/// A [`Population`] sorted from best to worst.
#[derive(Clone, Debug)]
pub struct RankedPopulation {
    ranked: Vec<ScoredLayout>,
}

impl RankedPopulation {
    /// The highest scoring layout.
    ///
    /// # Panics
    /// If the population is empty.
    pub fn best(&self) -> &ScoredLayout {
        &self.ranked[0]
    }

    /// The `n` best layouts, best first.
    pub fn elites(&self, n: usize) -> impl Iterator<Item = &Arc<Layout>> {
        self.ranked.iter().take(n).map(|sl| &sl.layout)
    }

    /// The `n` best scored layouts, from which parents are drawn.
    pub fn parent_pool(&self, n: usize) -> &[ScoredLayout] {
        &self.ranked[..usize::min(n, self.ranked.len())]
    }

    pub fn scored_layouts(&self) -> &[ScoredLayout] {
        &self.ranked
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}
