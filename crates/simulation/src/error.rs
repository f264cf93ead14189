//! Error types for a simulation run.

use lifegrid_node::NodeError;
use lifegrid_types::{ConfigError, Rank};
use thiserror::Error;

/// Errors from [`SimulationRunner`](crate::SimulationRunner).
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Initial grid does not have the configured dimensions.
    #[error("initial grid is {got_rows}x{got_cols}, expected {rows}x{cols}")]
    InitialGridShape {
        rows: usize,
        cols: usize,
        got_rows: usize,
        got_cols: usize,
    },

    #[error("failed to spawn worker thread for {rank}")]
    Spawn {
        rank: Rank,
        #[source]
        source: std::io::Error,
    },

    #[error("worker {rank} failed: {source}")]
    Worker {
        rank: Rank,
        #[source]
        source: NodeError,
    },

    #[error("worker {0} panicked")]
    WorkerPanicked(Rank),

    /// Every worker finished but the coordinator returned no grid.
    #[error("coordinator finished without a collected grid")]
    MissingCoordinatorResult,
}
