pub mod crossover;
pub mod glo_optimizer;
pub mod mutation;
pub mod population;
