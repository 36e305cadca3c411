use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::config::GLOConfig;

/// Places the furniture of a room instance with the Genetic Layout Optimizer
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Instance JSON: `room`, explicit `furniture` and/or recommender `catalog_items`
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder in which `sol_<stem>.json` is written, created if missing
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// JSON serialized `GLOConfig`, defaults are used if absent
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Overrides the population size of the config
    #[arg(short, long)]
    pub pop_size: Option<usize>,
    /// Overrides the number of generations of the config
    #[arg(short, long)]
    pub generations: Option<usize>,
    /// Overrides the PRNG seed of the config
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

impl Cli {
    /// `config` with every override given on the command line applied.
    pub fn apply_overrides(&self, config: GLOConfig) -> GLOConfig {
        GLOConfig {
            pop_size: self.pop_size.unwrap_or(config.pop_size),
            generations: self.generations.unwrap_or(config.generations),
            prng_seed: self.seed.or(config.prng_seed),
            ..config
        }
    }
}
