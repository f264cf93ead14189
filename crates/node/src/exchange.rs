//! Boundary (halo) row exchange between ring neighbors.

use lifegrid_core::{Communicator, TransportError};
use lifegrid_messages::Tag;
use lifegrid_types::{Grid, RingTopology};
use tracing::debug;

/// Swap edge rows with both ring neighbors.
///
/// Sends the first and last rows of the local band to the predecessor and
/// successor, and overwrites the rows just outside the band with what they
/// send back. Even ranks talk to their predecessor first, odd ranks to their
/// successor first.
///
/// A ring of one has no ghost rows and returns immediately.
pub fn exchange_boundaries<C>(
    topology: &RingTopology,
    grid: &mut Grid,
    comm: &C,
) -> Result<(), TransportError>
where
    C: Communicator + ?Sized,
{
    if topology.is_alone() {
        return Ok(());
    }

    for which in topology.exchange_order() {
        let peer = topology.neighbor(which);
        let edge_row = topology.edge_row_for(which);
        let ghost_row = topology.ghost_row_for(which);

        let (send_row, recv_row) = grid.split_rows(edge_row, ghost_row);
        comm.send_recv(
            send_row,
            peer,
            Tag::Halo(edge_row),
            recv_row,
            peer,
            Tag::Halo(ghost_row),
        )?;

        debug!(
            rank = %topology.local_rank(),
            peer = %peer,
            neighbor = ?which,
            sent = edge_row,
            received = ghost_row,
            "Exchanged boundary row"
        );
    }

    Ok(())
}
