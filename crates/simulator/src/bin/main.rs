//! Lifegrid simulator CLI
//!
//! Runs the distributed Game of Life once, or over several worker counts to
//! measure how it scales.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use lifegrid_simulator::{Simulator, SimulatorConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lifegrid-sim")]
#[command(about = "Distributed Game of Life simulator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one simulation and print the final population
    Run {
        #[command(flatten)]
        grid: GridArgs,

        /// Number of workers
        #[arg(short, long)]
        workers: Option<usize>,
    },

    /// Run the same simulation over several worker counts
    Scaling {
        #[command(flatten)]
        grid: GridArgs,

        /// Worker counts to measure (comma-separated); the first is the baseline
        #[arg(short, long, value_delimiter = ',', default_value = "1,2,4,8")]
        workers: Vec<usize>,
    },
}

/// Settings shared by every subcommand. Flags override the config file.
#[derive(Args)]
struct GridArgs {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of grid rows
    #[arg(long)]
    rows: Option<usize>,

    /// Number of grid columns
    #[arg(long)]
    cols: Option<usize>,

    /// Number of generations
    #[arg(short, long)]
    iterations: Option<u64>,

    /// Seed for the initial grid
    #[arg(long)]
    seed: Option<u64>,

    /// Probability that a cell starts alive (0.0 to 1.0)
    #[arg(long)]
    density: Option<f64>,
}

impl GridArgs {
    fn load(&self) -> anyhow::Result<SimulatorConfig> {
        let mut config = match &self.config {
            Some(path) => SimulatorConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => SimulatorConfig::default(),
        };

        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(iterations) = self.iterations {
            config = config.with_iterations(iterations);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(density) = self.density {
            config = config.with_density(density);
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { grid, workers } => {
            let mut config = grid.load()?;
            if let Some(workers) = workers {
                config = config.with_workers(workers);
            }

            let simulator = Simulator::new(config).context("invalid simulation setup")?;
            let report = simulator.run().context("simulation failed")?;

            println!("Alive cells: {}", report.alive_cells);
            for worker in &report.workers {
                println!(
                    "Elapsed time: {:.6} sec rank {}",
                    worker.elapsed.as_secs_f64(),
                    worker.rank.get()
                );
            }
        }

        Commands::Scaling { grid, workers } => {
            let config = grid.load()?;
            let baseline = workers.first().copied().unwrap_or(1);

            // Validate against the baseline count; the others are checked
            // per run.
            let simulator = Simulator::new(config.with_workers(baseline))
                .context("invalid simulation setup")?;
            let report = simulator
                .scaling(&workers)
                .context("scaling study failed")?;

            report.print();
        }
    }

    Ok(())
}
