use rand::Rng;

use roomplan::entities::Rotation;

/// Samples a [`Rotation`] uniformly from all four orientations.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformRotDistr;

impl UniformRotDistr {
    pub fn sample(&self, rng: &mut impl Rng) -> Rotation {
        Rotation::ALL[rng.random_range(0..Rotation::ALL.len())]
    }
}
