//! Final result collection.

use lifegrid_core::{Communicator, TransportError};
use lifegrid_messages::Tag;
use lifegrid_types::{Grid, Rank, RingTopology};
use tracing::{debug, info};

/// Full grid assembled on the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedGrid {
    /// Every row, as computed by the rank that owns it.
    pub grid: Grid,

    /// Alive cells over the whole grid.
    pub alive_cells: u64,
}

/// Gather every band onto the coordinator.
///
/// The coordinator receives each other rank's rows in rank order and then
/// row order, writing them at their global index, and returns the full
/// grid with its alive count. Every other rank sends its band to the
/// coordinator in row order and returns `None`.
pub fn collect_rows<C>(
    topology: &RingTopology,
    mut grid: Grid,
    comm: &C,
) -> Result<Option<CollectedGrid>, TransportError>
where
    C: Communicator + ?Sized,
{
    let local = topology.local_rank();

    if !local.is_coordinator() {
        for row in topology.local_band().rows() {
            comm.send(Rank::COORDINATOR, Tag::Collect(row), grid.row(row))?;
        }
        debug!(
            rank = %local,
            rows = topology.local_band().len(),
            "Sent band to coordinator"
        );
        return Ok(None);
    }

    for rank in (1..topology.size()).map(Rank) {
        let band = topology.band_for(rank);
        for row in band.rows() {
            comm.recv(rank, Tag::Collect(row), grid.row_mut(row))?;
        }
        debug!(from = %rank, rows = band.len(), "Received band");
    }

    let alive_cells = grid.alive_count();
    info!(
        alive_cells,
        rows = grid.rows(),
        cols = grid.cols(),
        "Collected final grid"
    );

    Ok(Some(CollectedGrid { grid, alive_cells }))
}
