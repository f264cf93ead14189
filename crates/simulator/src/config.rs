//! Configuration types for the simulator.

use crate::SimulatorError;
use lifegrid_types::{ConfigError, SimulationParams};
use serde::Deserialize;
use std::path::Path;

/// Configuration for a simulation run.
///
/// Can be built in code with the `with_*` methods or read from TOML, where
/// every key is optional and falls back to the default:
///
/// ```toml
/// rows = 96
/// cols = 1000
/// iterations = 1000
/// workers = 4
/// seed = 42
/// density = 0.5
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulatorConfig {
    /// Number of grid rows.
    pub rows: usize,

    /// Number of grid columns.
    pub cols: usize,

    /// Number of generations to evolve.
    pub iterations: u64,

    /// Number of workers the rows are split across.
    pub workers: usize,

    /// Seed for the initial grid.
    pub seed: u64,

    /// Probability that a cell starts alive.
    pub density: f64,
}

impl SimulatorConfig {
    /// Create a configuration for a `rows x cols` grid with default
    /// iterations, workers, seed and density.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            iterations: 1000,
            workers: 4,
            seed: 42,
            density: 0.5,
        }
    }

    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, SimulatorError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self, SimulatorError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| SimulatorError::ConfigFile {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml_str(&contents)
    }

    /// Set the number of generations.
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the number of workers.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the initial alive probability.
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Check every field, including the ones `SimulationParams` does not
    /// carry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.to_params().validate()?;
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::InvalidDensity(self.density));
        }
        Ok(())
    }

    /// Convert to parameters for the underlying simulation.
    pub fn to_params(&self) -> SimulationParams {
        SimulationParams::new(self.rows, self.cols, self.iterations, self.workers)
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self::new(96, 1000)
    }
}
