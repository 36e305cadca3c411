mod fitness;
mod overlap;

#[doc(inline)]
pub use fitness::Evaluator;
#[doc(inline)]
pub use fitness::Fitness;
#[doc(inline)]
pub use fitness::FitnessConfig;
#[doc(inline)]
pub use fitness::ScoreBreakdown;
#[doc(inline)]
pub use fitness::evaluate;

#[doc(inline)]
pub use overlap::DEFAULT_SPACING;
#[doc(inline)]
pub use overlap::overlaps;
