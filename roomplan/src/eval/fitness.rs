use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::entities::{Layout, RoomBounds};
use crate::eval::overlap::{DEFAULT_SPACING, overlaps};

/// Score of a layout, higher is better. Never negative.
#[derive(PartialEq, PartialOrd, Copy, Clone, Debug, Eq, Ord, Hash)]
pub struct Fitness(OrderedFloat<f64>);

impl Fitness {
    pub fn new(value: f64) -> Self {
        Fitness(OrderedFloat(value))
    }

    pub fn value(&self) -> f64 {
        self.0.into_inner()
    }
}

impl Display for Fitness {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}", self.value())
    }
}

/// Weights and thresholds of the layout fitness function
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct FitnessConfig {
    /// Score of a layout before any penalty or bonus is applied
    pub base_score: f64,
    /// Subtracted for every unordered pair of overlapping pieces
    pub overlap_penalty: f64,
    /// Subtracted for every piece not completely inside the room
    pub out_of_bounds_penalty: f64,
    /// Added per axis for every piece close to one of the two walls perpendicular to that axis
    pub wall_bonus: f64,
    /// Maximum distance to a wall to be considered close to it
    pub wall_tolerance: f64,
    /// Added once if the pieces are neither clustered in the center nor pushed to the extremes
    pub balance_bonus: f64,
    /// Open interval, as fractions of the room length, in which the mean distance of the pieces' centers
    /// to the room center must lie to earn the balance bonus
    pub balance_band: (f64, f64),
    /// Required clearance between two pieces, see [`overlaps`]
    pub spacing: f64,
}

impl Default for FitnessConfig {
    fn default() -> Self {
        Self {
            base_score: 100.0,
            overlap_penalty: 30.0,
            out_of_bounds_penalty: 25.0,
            wall_bonus: 5.0,
            wall_tolerance: 0.5,
            balance_bonus: 10.0,
            balance_band: (0.2, 0.4),
            spacing: DEFAULT_SPACING,
        }
    }
}

/// Contribution of every term of the fitness function for a single layout
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreBreakdown {
    /// Number of unordered pairs of pieces which overlap
    pub overlapping_pairs: usize,
    /// Number of pieces not completely inside the room
    pub out_of_bounds: usize,
    /// Number of (piece, axis) combinations in which the piece is close to a wall
    pub wall_contacts: usize,
    /// Whether the balance bonus was earned
    pub balanced: bool,
    /// Score before clamping to 0
    pub raw_score: f64,
    pub fitness: Fitness,
}

/// Scores layouts. Deterministic: the same layout and room always yield the same score.
#[derive(Clone, Copy, Debug, Default)]
pub struct Evaluator {
    pub config: FitnessConfig,
}

impl Evaluator {
    pub fn new(config: FitnessConfig) -> Self {
        Self { config }
    }

    pub fn evaluate(&self, layout: &Layout, room: &RoomBounds) -> Fitness {
        self.evaluate_detailed(layout, room).fitness
    }

    pub fn evaluate_detailed(&self, layout: &Layout, room: &RoomBounds) -> ScoreBreakdown {
        let FitnessConfig {
            base_score,
            overlap_penalty,
            out_of_bounds_penalty,
            wall_bonus,
            wall_tolerance,
            balance_bonus,
            balance_band,
            spacing,
        } = self.config;

        let overlapping_pairs = layout
            .iter()
            .tuple_combinations()
            .filter(|(a, b)| overlaps(a, b, spacing))
            .count();

        let room_rect = room.rect();
        let out_of_bounds = layout
            .iter()
            .filter(|pf| !room_rect.contains_rect(&pf.footprint()))
            .count();

        let wall_contacts = layout
            .iter()
            .map(|pf| {
                let fp = pf.footprint();
                let near_x_wall =
                    fp.x_min <= wall_tolerance || fp.x_max >= room.length - wall_tolerance;
                let near_y_wall =
                    fp.y_min <= wall_tolerance || fp.y_max >= room.width - wall_tolerance;
                near_x_wall as usize + near_y_wall as usize
            })
            .sum::<usize>();

        let balanced = match layout.is_empty() {
            true => false,
            false => {
                let center = room.center();
                let mean_dist = layout
                    .iter()
                    .map(|pf| pf.center().distance(&center))
                    .sum::<f64>()
                    / layout.len() as f64;
                let (lower, upper) = balance_band;
                room.length * lower < mean_dist && mean_dist < room.length * upper
            }
        };

        let raw_score = base_score - overlapping_pairs as f64 * overlap_penalty
            - out_of_bounds as f64 * out_of_bounds_penalty
            + wall_contacts as f64 * wall_bonus
            + if balanced { balance_bonus } else { 0.0 };

        ScoreBreakdown {
            overlapping_pairs,
            out_of_bounds,
            wall_contacts,
            balanced,
            raw_score,
            fitness: Fitness::new(f64::max(0.0, raw_score)),
        }
    }
}

/// Scores `layout` with the default [`FitnessConfig`].
pub fn evaluate(layout: &Layout, room: &RoomBounds) -> Fitness {
    Evaluator::default().evaluate(layout, room)
}
