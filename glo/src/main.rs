use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};

use glo::config::GLOConfig;
use glo::io;
use glo::io::cli::Cli;
use glo::io::output::GLOOutput;
use glo::{GLOptimizer, init_rng};
use roomplan::io::import::import_instance;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            GLOConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file).with_context(|| {
                format!("could not open config file: {}", config_file.display())
            })?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };
    let config = args.apply_overrides(config);

    info!("[MAIN] Successfully parsed GLOConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid file stem")?
        .to_owned();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_instance = io::read_instance(&args.input_file)?;
    let instance = import_instance(&ext_instance)?;
    let rng = init_rng(config.prng_seed)?;

    let solution = GLOptimizer::new(instance, config, rng)?.solve();

    for (i, pf) in solution.layout.iter().enumerate() {
        info!("[MAIN] #{i}: {pf}");
    }

    let output = GLOOutput::new(ext_instance, &solution, config);
    let solution_path = args
        .solution_folder
        .join(format!("sol_{input_file_stem}.json"));
    io::write_json(&output, &solution_path)?;

    Ok(())
}
