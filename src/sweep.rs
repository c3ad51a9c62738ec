//! Runs several annealing configurations against one instance.
//!
//! Each run is an independent Markov chain, so with the `parallel` feature
//! the runs are spread over the rayon thread pool. Results keep the order
//! of the configurations either way.

use crate::instance::Instance;
use crate::packing::Solution;
use crate::report::PackingReport;
use crate::sa::{BinPackingProblem, SaConfig, SaResult, SaRunner};
use log::info;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Outcome of one configuration in a sweep.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SweepRun {
    pub config: SaConfig,
    pub result: SaResult<Solution>,
    pub report: PackingReport,
}

/// Anneals `instance` once per configuration.
///
/// # Panics
///
/// Panics if any configuration fails [`SaConfig::validate`].
pub fn sweep(instance: &Instance, configs: &[SaConfig]) -> Vec<SweepRun> {
    let problem = BinPackingProblem::new(instance.weights(), instance.capacity());

    run_all(&problem, configs)
}

#[cfg(feature = "parallel")]
fn run_all(problem: &BinPackingProblem<'_>, configs: &[SaConfig]) -> Vec<SweepRun> {
    configs
        .par_iter()
        .map(|config| run_one(problem, config))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn run_all(problem: &BinPackingProblem<'_>, configs: &[SaConfig]) -> Vec<SweepRun> {
    configs
        .iter()
        .map(|config| run_one(problem, config))
        .collect()
}

fn run_one(problem: &BinPackingProblem<'_>, config: &SaConfig) -> SweepRun {
    let result = SaRunner::run(problem, config);
    let report = PackingReport::new(&result.solution, problem.capacity());
    info!(
        "T0 = {}, r = {}, L = {}, E = {}: {} containers, {:.2}% average fill",
        config.initial_temperature,
        config.cooling_ratio,
        config.steps_per_temperature,
        config.stall_limit,
        report.container_count,
        report.average_fill_percent
    );
    SweepRun {
        config: *config,
        result,
        report,
    }
}
