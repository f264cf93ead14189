//! Local update engine.
//!
//! Pure, synchronous computation of the next generation for the rows a
//! rank owns. No I/O and no knowledge of other ranks: the caller is
//! responsible for keeping the rows just outside the band current.

mod rules;
mod update;

pub use rules::{neighbor_count, next_state};
pub use update::{step_grid, update_band, BandUpdate};
