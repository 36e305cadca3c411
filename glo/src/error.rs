use roomplan::InvalidInput;

/// Reasons for which an optimization run cannot produce a layout.
#[derive(Debug, thiserror::Error)]
pub enum GLOError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
    /// The source of entropy could not be read. Not retried, retries are up to the caller.
    #[error("random source failure: {0}")]
    RandomSource(String),
}
