use std::sync::Arc;

use rand::Rng;

use roomplan::entities::{FurnitureSpec, Instance, Layout, PlacedFurniture, RoomBounds};

use crate::samplers::rotation_distr::UniformRotDistr;

/// Samples a [`PlacedFurniture`] uniformly over the positions where its spec fits in the room.
///
/// The lower-left corner is drawn from `[0, max_x) x [0, max_y)`, see [`RoomBounds::sampling_range`].
/// No attempt is made to avoid other pieces.
pub struct UniformPlacementSampler {
    pub spec: Arc<FurnitureSpec>,
    pub max_x: f64,
    pub max_y: f64,
    pub uniform_r: UniformRotDistr,
}

impl UniformPlacementSampler {
    pub fn new(spec: Arc<FurnitureSpec>, room: &RoomBounds) -> Self {
        let (max_x, max_y) = room.sampling_range(spec.length, spec.width);
        Self {
            spec,
            max_x,
            max_y,
            uniform_r: UniformRotDistr,
        }
    }

    pub fn sample(&self, rng: &mut impl Rng) -> PlacedFurniture {
        //ranges are never empty, sampling_range() has a strictly positive floor
        let x = rng.random_range(0.0..self.max_x);
        let y = rng.random_range(0.0..self.max_y);
        let r = self.uniform_r.sample(rng);

        PlacedFurniture::new(self.spec.clone(), x, y, r)
    }
}

/// Builds a layout by placing every piece of `instance` uniformly at random.
pub fn place_random(instance: &Instance, rng: &mut impl Rng) -> Layout {
    instance
        .furniture()
        .iter()
        .map(|spec| UniformPlacementSampler::new(spec.clone(), instance.room()).sample(rng))
        .collect()
}
