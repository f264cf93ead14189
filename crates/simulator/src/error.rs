//! Error types for the simulator.

use lifegrid_simulation::SimulationError;
use lifegrid_types::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from configuring or running the simulator.
#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Simulation(#[from] SimulationError),

    #[error("failed to read config file {}", path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ParseConfig(#[from] toml::de::Error),

    /// A scaling study was asked to run with no worker counts.
    #[error("scaling study needs at least one worker count")]
    NoWorkerCounts,

    /// Runs of the same configuration ended with different populations.
    #[error(
        "{workers} workers ended with {alive_cells} alive cells, \
         but {baseline_workers} workers ended with {baseline_alive_cells}"
    )]
    InconsistentResults {
        baseline_workers: usize,
        baseline_alive_cells: u64,
        workers: usize,
        alive_cells: u64,
    },
}
