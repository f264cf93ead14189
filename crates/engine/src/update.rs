//! Band update: compute the next generation for a range of rows.

use crate::rules::{neighbor_count, next_state};
use lifegrid_types::{Grid, RowBand};

/// What changed while updating one band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BandUpdate {
    /// Dead cells that became alive.
    pub births: u64,
    /// Alive cells that died.
    pub deaths: u64,
    /// Alive cells in the band after the update.
    pub alive: u64,
}

/// Write the next generation of every row in `band` into `next`.
///
/// Reads `current` (including the rows just outside the band, which must
/// hold the neighbors' latest rows) and writes only the band's rows of
/// `next`. All other rows of `next` are left as they are.
pub fn update_band(current: &Grid, next: &mut Grid, band: RowBand) -> BandUpdate {
    debug_assert!(current.same_shape(next), "grid buffers differ in shape");

    let mut stats = BandUpdate::default();
    for row in band.rows() {
        let out = next.row_mut(row);
        for (col, slot) in out.iter_mut().enumerate() {
            let cell = current.get(row, col);
            let new_cell = next_state(cell, neighbor_count(current, row, col));
            match (cell.is_alive(), new_cell.is_alive()) {
                (false, true) => stats.births += 1,
                (true, false) => stats.deaths += 1,
                _ => {}
            }
            if new_cell.is_alive() {
                stats.alive += 1;
            }
            *slot = new_cell;
        }
    }
    stats
}

/// Advance a whole grid by one generation on a single rank.
///
/// Equivalent to `update_band` over every row followed by a buffer swap.
pub fn step_grid(grid: &Grid) -> Grid {
    let mut next = Grid::new(grid.rows(), grid.cols());
    update_band(grid, &mut next, RowBand::new(0, grid.rows() - 1));
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifegrid_test_helpers::{grid_from_ascii, patterns};
    use lifegrid_types::Cell;

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = grid_from_ascii(&[
            ".....", //
            ".....", //
            ".###.", //
            ".....", //
            ".....",
        ]);
        let vertical = grid_from_ascii(&[
            ".....", //
            "..#..", //
            "..#..", //
            "..#..", //
            ".....",
        ]);
        assert_eq!(step_grid(&horizontal), vertical);
        assert_eq!(step_grid(&vertical), horizontal);
    }

    #[test]
    fn test_update_touches_only_band_rows() {
        let current = patterns::block(6, 6, 2, 2);
        let mut next = Grid::new(6, 6);
        next.row_mut(0).fill(Cell::Alive);
        next.row_mut(5).fill(Cell::Alive);

        let stats = update_band(&current, &mut next, RowBand::new(1, 3));

        // Rows outside the band keep their previous contents.
        assert!(next.row(0).iter().all(|c| c.is_alive()));
        assert!(next.row(5).iter().all(|c| c.is_alive()));
        // Row 2 and 3 hold the block; row 1 stays dead.
        assert_eq!(next.row(2), current.row(2));
        assert_eq!(next.row(3), current.row(3));
        assert!(next.row(1).iter().all(|c| !c.is_alive()));
        assert_eq!(
            stats,
            BandUpdate {
                births: 0,
                deaths: 0,
                alive: 4
            }
        );
    }

    #[test]
    fn test_stats_count_births_and_deaths() {
        let grid = grid_from_ascii(&[
            "...", //
            "###", //
            "...",
        ]);
        let mut next = Grid::new(3, 3);
        let stats = update_band(&grid, &mut next, RowBand::new(0, 2));
        assert_eq!(stats.births, 2);
        assert_eq!(stats.deaths, 2);
        assert_eq!(stats.alive, 3);
    }

    #[test]
    fn test_isolated_cell_dies() {
        let grid = Grid::with_alive(5, 5, &[(2, 2)]);
        assert_eq!(step_grid(&grid).alive_count(), 0);
    }
}
