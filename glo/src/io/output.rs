use serde::{Deserialize, Serialize};

use roomplan::io::export::export_solution;
use roomplan::io::ext_repr::{ExtInstance, ExtSolution};

use crate::config::GLOConfig;
use crate::opt::glo_optimizer::GLOSolution;

/// Everything needed to reproduce and inspect a run
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GLOOutput {
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub run: ExtRunStats,
    pub config: GLOConfig,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtRunStats {
    pub generations: usize,
    pub n_evaluations: usize,
    pub run_time_ms: f64,
}

impl GLOOutput {
    pub fn new(instance: ExtInstance, solution: &GLOSolution, config: GLOConfig) -> Self {
        Self {
            instance,
            solution: export_solution(&solution.layout, &solution.breakdown),
            run: ExtRunStats {
                generations: solution.generations,
                n_evaluations: solution.n_evaluations,
                run_time_ms: solution.elapsed.as_secs_f64() * 1000.0,
            },
            config,
        }
    }
}
