use rand::Rng;
use rand_distr::{Distribution, Normal};

use roomplan::InvalidInput;
use roomplan::entities::{Layout, RoomBounds};

/// Nudges the pieces of a layout with gaussian noise.
#[derive(Clone, Copy, Debug)]
pub struct Mutator {
    /// Probability with which each piece is nudged
    pub rate: f64,
    noise: Normal<f64>,
}

impl Mutator {
    pub fn new(rate: f64, std_dev: f64) -> Result<Self, InvalidInput> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(InvalidInput::MutationRate(rate));
        }
        if !(std_dev.is_finite() && std_dev >= 0.0) {
            return Err(InvalidInput::MutationStdDev(std_dev));
        }
        let noise = Normal::new(0.0, std_dev).map_err(|_| InvalidInput::MutationStdDev(std_dev))?;
        Ok(Self { rate, noise })
    }

    /// Returns a mutated copy of `layout`.
    ///
    /// Each piece is, with probability `rate`, moved by independent gaussian noise along x and y and clamped
    /// back into its sampling range. Rotations are left untouched, as are the pieces which are not selected.
    pub fn mutate(&self, layout: &Layout, room: &RoomBounds, rng: &mut impl Rng) -> Layout {
        layout
            .iter()
            .map(|pf| match rng.random_bool(self.rate) {
                true => {
                    let (max_x, max_y) = room.sampling_range(pf.length(), pf.width());
                    let x = (pf.x + self.noise.sample(rng)).clamp(0.0, max_x);
                    let y = (pf.y + self.noise.sample(rng)).clamp(0.0, max_y);
                    pf.moved_to(x, y)
                }
                false => pf.clone(),
            })
            .collect()
    }
}
