//! The transport contract between workers.

use crate::TransportError;
use lifegrid_messages::{RowMessage, Tag};
use lifegrid_types::{Cell, Rank};

/// Point-to-point, blocking message passing between ranks.
///
/// This is the only way workers interact. Implementations must provide:
///
/// - **Identity**: the local rank and the group size
/// - **Blocking send/recv**: each call returns only once the partner has
///   performed the matching call
/// - **Paired exchange**: `send_recv` completes both directions before
///   returning and never deadlocks against a partner doing the same
///
/// Messages between any ordered pair of ranks are delivered in the order
/// they were sent.
///
/// # Example
///
/// ```ignore
/// // Swap edge rows with the rank below us.
/// let (edge, ghost) = grid.split_rows(band.end_row(), ghost_below);
/// comm.send_recv(
///     edge, successor, Tag::Halo(band.end_row()),
///     ghost, successor, Tag::Halo(ghost_below),
/// )?;
/// ```
pub trait Communicator {
    /// Rank of the calling worker.
    fn rank(&self) -> Rank;

    /// Number of ranks in the group.
    fn size(&self) -> usize;

    /// Send one row to `dest`, blocking until it is received.
    fn send(&self, dest: Rank, tag: Tag, row: &[Cell]) -> Result<(), TransportError>;

    /// Receive one row from `source` into `row`, blocking until it arrives.
    ///
    /// Fails if the next message from `source` does not carry `tag`.
    fn recv(&self, source: Rank, tag: Tag, row: &mut [Cell]) -> Result<(), TransportError>;

    /// Send `send_row` to `dest` and receive into `recv_row` from `source`
    /// as a single operation.
    fn send_recv(
        &self,
        send_row: &[Cell],
        dest: Rank,
        send_tag: Tag,
        recv_row: &mut [Cell],
        source: Rank,
        recv_tag: Tag,
    ) -> Result<(), TransportError>;
}

/// Check an incoming message against what the receiver expects and copy its
/// cells into the receive buffer.
///
/// Shared by transport implementations so every one of them rejects stray
/// tags and mismatched widths the same way.
pub fn deliver(
    message: RowMessage,
    expected: Tag,
    into: &mut [Cell],
) -> Result<(), TransportError> {
    if message.tag != expected {
        return Err(TransportError::UnexpectedMessage {
            expected,
            got: message.tag,
            from: message.source,
        });
    }
    if message.cells.len() != into.len() {
        return Err(TransportError::LengthMismatch {
            expected: into.len(),
            got: message.cells.len(),
        });
    }
    into.copy_from_slice(&message.cells);
    Ok(())
}
