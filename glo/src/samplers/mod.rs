pub mod rotation_distr;
pub mod uniform_placement_sampler;
