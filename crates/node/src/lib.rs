//! Worker node for the distributed Game of Life.
//!
//! A [`WorkerNode`] is one rank of an SPMD group. Each step it:
//!
//! - Updates its own band of rows (`lifegrid-engine`)
//! - Swaps edge rows of the new generation with its ring neighbors
//! - Swaps its grid buffers
//!
//! After the last step every rank takes part in collection, which leaves the
//! full grid on the coordinator. All communication goes through a
//! [`lifegrid_core::Communicator`].

mod collect;
mod error;
mod exchange;
mod state;

#[cfg(test)]
mod test_comm;

pub use collect::{collect_rows, CollectedGrid};
pub use error::NodeError;
pub use exchange::exchange_boundaries;
pub use state::WorkerNode;
