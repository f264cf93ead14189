//! Transport contract for Game of Life workers.
//!
//! The simulation core never talks to threads, channels or sockets
//! directly. It only sees a [`Communicator`]: a rank, a group size, and
//! blocking point-to-point row transfers.

mod error;
mod traits;

pub use error::TransportError;
pub use traits::{deliver, Communicator};
