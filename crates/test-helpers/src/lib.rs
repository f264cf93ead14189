//! Test helpers for lifegrid.
//!
//! Grid fixtures built from ASCII art, plus a handful of well-known
//! patterns placed at explicit coordinates.

use lifegrid_types::{Cell, Grid};

/// Build a grid from rows of `#` (alive) and `.` (dead).
///
/// Panics on ragged rows or any other character.
pub fn grid_from_ascii(rows: &[&str]) -> Grid {
    assert!(!rows.is_empty(), "pattern needs at least one row");
    let cols = rows[0].len();

    let mut cells = Vec::with_capacity(rows.len() * cols);
    for row in rows {
        assert_eq!(row.len(), cols, "row width must match grid width");
        for byte in row.bytes() {
            cells.push(match byte {
                b'#' => Cell::Alive,
                b'.' => Cell::Dead,
                other => panic!("pattern rows may only contain '.' or '#', got {:?}", other as char),
            });
        }
    }

    Grid::from_cells(rows.len(), cols, cells).expect("dimensions computed from rows")
}

/// Well-known patterns placed on an otherwise dead grid.
pub mod patterns {
    use lifegrid_types::Grid;

    /// 2×2 still life with its top-left corner at `(top, left)`.
    pub fn block(rows: usize, cols: usize, top: usize, left: usize) -> Grid {
        Grid::with_alive(
            rows,
            cols,
            &[
                (top, left),
                (top, left + 1),
                (top + 1, left),
                (top + 1, left + 1),
            ],
        )
    }

    /// Horizontal period-2 oscillator centred on `(row, col)`.
    pub fn blinker(rows: usize, cols: usize, row: usize, col: usize) -> Grid {
        Grid::with_alive(rows, cols, &[(row, col - 1), (row, col), (row, col + 1)])
    }

    /// South-east travelling glider in the 3×3 box at `(top, left)`.
    pub fn glider(rows: usize, cols: usize, top: usize, left: usize) -> Grid {
        Grid::with_alive(
            rows,
            cols,
            &[
                (top, left + 1),
                (top + 1, left + 2),
                (top + 2, left),
                (top + 2, left + 1),
                (top + 2, left + 2),
            ],
        )
    }

    /// A single alive cell.
    pub fn single_cell(rows: usize, cols: usize, row: usize, col: usize) -> Grid {
        Grid::with_alive(rows, cols, &[(row, col)])
    }
}
