//! Error types for a worker node.

use lifegrid_core::TransportError;
use lifegrid_types::{ConfigError, Generation, Rank};
use thiserror::Error;

/// Errors while running a worker.
#[derive(Debug, Error)]
pub enum NodeError {
    /// Rank/size from the communicator cannot split this grid.
    #[error("invalid worker setup: {0}")]
    Config(#[from] ConfigError),

    /// The communicator reported a rank outside its own group.
    #[error("communicator reports {rank} in a group of {size}")]
    RankOutOfRange { rank: Rank, size: usize },

    /// Initial grid does not match the dimensions the topology was built for.
    #[error("initial grid has {got} rows, topology expects {expected}")]
    GridShapeMismatch { expected: usize, got: usize },

    /// Boundary exchange failed while producing a generation.
    #[error("boundary exchange for {generation} failed: {source}")]
    Exchange {
        generation: Generation,
        #[source]
        source: TransportError,
    },

    /// Final row collection failed.
    #[error("result collection failed: {0}")]
    Collect(#[source] TransportError),
}

impl NodeError {
    /// True when the failure only reflects a partner that went away first.
    ///
    /// When one worker fails its neighbors usually fail right after with a
    /// disconnect; this lets callers report the worker that failed first.
    pub fn is_peer_disconnect(&self) -> bool {
        matches!(
            self,
            NodeError::Exchange {
                source: TransportError::Disconnected { .. },
                ..
            } | NodeError::Collect(TransportError::Disconnected { .. })
        )
    }
}
