//! Domain partitioning into contiguous row bands.
//!
//! Every rank gets `rows / size` rows starting at `rank * (rows / size)`.
//! When the division is uneven the last rank also takes the trailing
//! `rows % size` rows, so bands always cover `[0, rows)` exactly.

use crate::Rank;
use std::ops::RangeInclusive;

/// Contiguous, inclusive range of rows owned by one rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowBand {
    start_row: usize,
    end_row: usize,
}

impl RowBand {
    /// Create a band covering `start_row..=end_row`.
    pub fn new(start_row: usize, end_row: usize) -> Self {
        debug_assert!(start_row <= end_row, "empty row band");
        Self { start_row, end_row }
    }

    /// First owned row.
    pub fn start_row(&self) -> usize {
        self.start_row
    }

    /// Last owned row (inclusive).
    pub fn end_row(&self) -> usize {
        self.end_row
    }

    /// Number of owned rows.
    pub fn len(&self) -> usize {
        self.end_row - self.start_row + 1
    }

    /// Bands are never empty; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check if a row lies inside the band.
    pub fn contains(&self, row: usize) -> bool {
        (self.start_row..=self.end_row).contains(&row)
    }

    /// Iterate over owned row indices in ascending order.
    pub fn rows(&self) -> RangeInclusive<usize> {
        self.start_row..=self.end_row
    }
}

/// Compute the row band owned by `rank` out of `size` ranks.
///
/// Requires `0 < size <= total_rows` and `rank < size`; configuration
/// validation guarantees both before any band is computed.
pub fn partition(total_rows: usize, rank: Rank, size: usize) -> RowBand {
    debug_assert!(size > 0 && size <= total_rows, "invalid worker count");
    debug_assert!(rank.get() < size, "rank out of range");

    let rows_per_rank = total_rows / size;
    let start_row = rank.get() * rows_per_rank;
    let end_row = if rank.get() + 1 == size {
        total_rows - 1
    } else {
        (rank.get() + 1) * rows_per_rank - 1
    };

    RowBand::new(start_row, end_row)
}
