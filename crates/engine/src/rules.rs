//! Neighbor counting and the life/death rule.

use lifegrid_types::{Cell, Grid};

/// Count alive cells among the up-to-eight neighbors of `(row, col)`.
///
/// The window is clamped to the grid: edge cells simply have fewer
/// neighbors. Nothing wraps, so row 0 never sees row `R - 1` and column 0
/// never sees column `C - 1`.
pub fn neighbor_count(grid: &Grid, row: usize, col: usize) -> u8 {
    let row_lo = row.saturating_sub(1);
    let row_hi = (row + 1).min(grid.rows() - 1);
    let col_lo = col.saturating_sub(1);
    let col_hi = (col + 1).min(grid.cols() - 1);

    let mut count = 0u8;
    for r in row_lo..=row_hi {
        for cell in &grid.row(r)[col_lo..=col_hi] {
            count += cell.value();
        }
    }

    count - grid.get(row, col).value()
}

/// Next state of a cell given its current state and alive neighbor count.
pub fn next_state(cell: Cell, neighbors: u8) -> Cell {
    match (cell, neighbors) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
        (Cell::Dead, 3) => Cell::Alive,                     // Birth
        _ => Cell::Dead,                                    // Death or stays dead
    }
}
