use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use u_binpack::instance::Instance;
use u_binpack::sa::SaConfig;
use u_binpack::sweep::{sweep, SweepRun};

/// Packs items into as few fully used containers as possible.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Instance file: capacity, item count, then one weight per line
    #[arg(value_name = "FILE")]
    input_file: PathBuf,

    /// Initial temperature (T0)
    #[arg(short = 't', long)]
    temperature: Option<f64>,

    /// Cooling ratio in (0, 1) (r)
    #[arg(short = 'r', long)]
    cooling: Option<f64>,

    /// Steps per temperature (L)
    #[arg(short = 'l', long)]
    steps: Option<usize>,

    /// Unchanged temperature phases before stopping (E)
    #[arg(short = 'e', long)]
    stall_limit: Option<usize>,

    /// Seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop each run after this many steps (0 = no limit)
    #[arg(long, value_name = "STEPS")]
    max_iterations: Option<usize>,

    /// Print the runs as JSON instead of text
    #[arg(long)]
    json: bool,

    #[arg(
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    log_level: LevelFilter,
}

impl Cli {
    fn configs(&self) -> Result<Vec<SaConfig>> {
        let configs = match (self.temperature, self.cooling, self.steps, self.stall_limit) {
            (None, None, None, None) => SaConfig::presets().to_vec(),
            (Some(t), Some(r), Some(l), Some(e)) => vec![SaConfig::new(t, r, l, e)],
            _ => bail!("--temperature, --cooling, --steps and --stall-limit must be given together"),
        };

        configs
            .into_iter()
            .map(|config| {
                let config = match self.seed {
                    Some(seed) => config.with_seed(seed),
                    None => config,
                };
                let config = match self.max_iterations {
                    Some(budget) => config.with_max_iterations(budget),
                    None => config,
                };
                config.validate().map_err(anyhow::Error::msg)?;
                Ok(config)
            })
            .collect()
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level)
        .init();

    let configs = args.configs()?;
    let instance = Instance::from_path(&args.input_file)?;
    info!(
        "loaded {} items with capacity {} from {}",
        instance.len(),
        instance.capacity(),
        args.input_file.display()
    );

    let runs = sweep(&instance, &configs);

    if args.json {
        let out = serde_json::to_string_pretty(&runs).context("could not serialize runs")?;
        println!("{out}");
    } else {
        for run in &runs {
            print_run(&instance, run);
        }
    }

    Ok(())
}

fn print_run(instance: &Instance, run: &SweepRun) {
    let config = &run.config;
    println!("capacity (W) = {}", instance.capacity());
    println!("items (n) = {}", instance.len());
    println!("total weight = {}", instance.total_weight());
    if let Some(bound) = instance.lower_bound() {
        println!("lower bound = {bound}");
    }
    println!();
    println!("temperature (T) = {}", config.initial_temperature);
    println!("cooling ratio (r) = {}", config.cooling_ratio);
    println!("steps per temperature (L) = {}", config.steps_per_temperature);
    println!("stall limit (E) = {}", config.stall_limit);
    if config.max_iterations > 0 {
        println!("step budget = {}", config.max_iterations);
    }
    println!(
        "phases = {}, final temperature = {:e}",
        run.result.phases, run.result.final_temperature
    );
    println!("{}", run.report);
    println!();
    println!();
}
