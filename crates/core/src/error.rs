//! Error types for the transport.

use lifegrid_messages::Tag;
use lifegrid_types::Rank;
use thiserror::Error;

/// Errors during a point-to-point transfer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The partner's endpoint is gone (its worker exited or panicked).
    #[error("peer {peer} disconnected")]
    Disconnected { peer: Rank },

    /// The partner sent something other than the row we were waiting for.
    #[error("expected {expected} from {from}, got {got}")]
    UnexpectedMessage { expected: Tag, got: Tag, from: Rank },

    /// Payload and buffer disagree on row width.
    #[error("row length mismatch: expected {expected} cells, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    /// Rank outside the process group.
    #[error("unknown rank {0}")]
    UnknownRank(Rank),

    /// A rank addressed itself; there is no channel to its own rank.
    #[error("{0} cannot transfer to itself")]
    SelfTransfer(Rank),
}
