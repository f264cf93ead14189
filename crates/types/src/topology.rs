//! Ring topology over ranks.
//!
//! Ranks form a cycle: each has one predecessor (owning the band above) and
//! one successor (owning the band below). Row adjacency wraps, so the row
//! above row 0 is row `R - 1`.

use crate::band::partition;
use crate::{Rank, RowBand};

/// Which ring neighbor an exchange targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Neighbor {
    /// The rank owning the band above ours.
    Predecessor,
    /// The rank owning the band below ours.
    Successor,
}

/// Static ring topology as seen from one rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingTopology {
    local_rank: Rank,
    size: usize,
    total_rows: usize,
    local_band: RowBand,
}

impl RingTopology {
    /// Create the topology for `local_rank` out of `size` ranks over
    /// `total_rows` grid rows.
    ///
    /// # Panics
    ///
    /// Panics unless `0 < size <= total_rows` and `local_rank < size`.
    /// `SimulationParams::validate` checks the first condition for
    /// configured runs.
    pub fn new(local_rank: Rank, size: usize, total_rows: usize) -> Self {
        assert!(
            size > 0 && size <= total_rows,
            "{size} ranks cannot split {total_rows} rows"
        );
        assert!(
            local_rank.get() < size,
            "{local_rank} outside a ring of {size}"
        );
        Self {
            local_rank,
            size,
            total_rows,
            local_band: partition(total_rows, local_rank, size),
        }
    }

    pub fn local_rank(&self) -> Rank {
        self.local_rank
    }

    /// Total number of ranks.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Band owned by the local rank.
    pub fn local_band(&self) -> RowBand {
        self.local_band
    }

    /// Band owned by an arbitrary rank.
    pub fn band_for(&self, rank: Rank) -> RowBand {
        partition(self.total_rows, rank, self.size)
    }

    /// `(rank - 1 + size) mod size`.
    pub fn predecessor(&self) -> Rank {
        Rank((self.local_rank.get() + self.size - 1) % self.size)
    }

    /// `(rank + 1) mod size`.
    pub fn successor(&self) -> Rank {
        Rank((self.local_rank.get() + 1) % self.size)
    }

    /// Rank for a ring neighbor.
    pub fn neighbor(&self, which: Neighbor) -> Rank {
        match which {
            Neighbor::Predecessor => self.predecessor(),
            Neighbor::Successor => self.successor(),
        }
    }

    /// Whether the local rank is its own neighbor (a ring of one).
    pub fn is_alone(&self) -> bool {
        self.size == 1
    }

    /// Row directly above the local band, wrapping at the top edge.
    pub fn ghost_row_above(&self) -> usize {
        (self.local_band.start_row() + self.total_rows - 1) % self.total_rows
    }

    /// Row directly below the local band, wrapping at the bottom edge.
    pub fn ghost_row_below(&self) -> usize {
        (self.local_band.end_row() + 1) % self.total_rows
    }

    /// Order in which the two boundary exchanges happen.
    ///
    /// Even ranks go predecessor first, odd ranks successor first, so that
    /// on every adjacent pair one side is sending while the other receives.
    pub fn exchange_order(&self) -> [Neighbor; 2] {
        if self.local_rank.is_even() {
            [Neighbor::Predecessor, Neighbor::Successor]
        } else {
            [Neighbor::Successor, Neighbor::Predecessor]
        }
    }

    /// Local edge row sent to a neighbor.
    pub fn edge_row_for(&self, which: Neighbor) -> usize {
        match which {
            Neighbor::Predecessor => self.local_band.start_row(),
            Neighbor::Successor => self.local_band.end_row(),
        }
    }

    /// Ghost row slot filled by a neighbor.
    pub fn ghost_row_for(&self, which: Neighbor) -> usize {
        match which {
            Neighbor::Predecessor => self.ghost_row_above(),
            Neighbor::Successor => self.ghost_row_below(),
        }
    }
}
