use std::sync::LazyLock;
use std::time::Instant;

pub mod config;
pub mod error;
pub mod io;
pub mod opt;
pub mod samplers;

#[doc(inline)]
pub use error::GLOError;
#[doc(inline)]
pub use opt::glo_optimizer::{GLOSolution, GLOptimizer, init_rng, optimize};

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
