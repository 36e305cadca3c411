/// Input that is rejected before any search is started.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInput {
    #[error("room dimensions must be positive and finite, got {length} x {width}")]
    RoomDimensions { length: f64, width: f64 },
    #[error("furniture '{name}' must have positive and finite dimensions, got {length} x {width}")]
    FurnitureDimensions {
        name: String,
        length: f64,
        width: f64,
    },
    #[error("nothing to place: the furniture list is empty")]
    NothingToPlace,
    #[error("population size must be positive, got {0}")]
    PopulationSize(usize),
    #[error("mutation rate must be between 0.0 and 1.0, got {0}")]
    MutationRate(f64),
    #[error("mutation standard deviation must be non-negative and finite, got {0}")]
    MutationStdDev(f64),
    #[error("crossover rate must be between 0.0 and 1.0, got {0}")]
    CrossoverRate(f64),
}

impl InvalidInput {
    pub(crate) fn furniture_dimensions(name: &str, length: f64, width: f64) -> Self {
        Self::FurnitureDimensions {
            name: name.to_string(),
            length,
            width,
        }
    }
}

/// Whether `value` is usable as a dimension: finite and strictly positive.
pub(crate) fn is_valid_dimension(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
