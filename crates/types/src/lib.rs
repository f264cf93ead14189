//! Core types for the distributed Game of Life.
//!
//! Everything here is pure data plus arithmetic: no I/O and no transport.
//! The grid, the partitioning of its rows across ranks, and the ring that
//! connects those ranks for the boundary exchange.

mod band;
mod grid;
mod identifiers;
mod params;
mod topology;

pub use band::{partition, RowBand};
pub use grid::{Cell, Grid, GridError};
pub use identifiers::{Generation, Rank};
pub use params::{ConfigError, SimulationParams};
pub use topology::{Neighbor, RingTopology};
