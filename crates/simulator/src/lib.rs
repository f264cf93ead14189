//! Lifegrid Simulator
//!
//! Configuration and reporting on top of `lifegrid-simulation`.
//!
//! - **Configuration**: grid size, step count, workers, seed and density,
//!   from code or a TOML file
//! - **Single runs**: final population and per-worker timing
//! - **Scaling studies**: the same run over several worker counts, with
//!   speedup and efficiency against the first
//!
//! # Example
//!
//! ```ignore
//! use lifegrid_simulator::{Simulator, SimulatorConfig};
//!
//! let config = SimulatorConfig::new(96, 1000).with_iterations(100);
//! let simulator = Simulator::new(config)?;
//!
//! let report = simulator.scaling(&[1, 2, 4, 8])?;
//! report.print();
//! ```

pub mod config;
pub mod error;
pub mod runner;
pub mod scaling;

pub use config::SimulatorConfig;
pub use error::SimulatorError;
pub use runner::Simulator;
pub use scaling::{ScalingPoint, ScalingReport};
