//! Cell and grid storage.
//!
//! A [`Grid`] is a dense R×C matrix stored row-major in a single buffer so
//! that a whole row can be handed to the transport as one contiguous slice.

use std::fmt;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    /// Check if the cell is alive.
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Numeric value of the cell (0 or 1).
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

/// Errors constructing a grid from raw cells.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Buffer length does not match `rows * cols`.
    #[error("grid of {rows}x{cols} needs {expected} cells, got {got}")]
    SizeMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        got: usize,
    },
}

/// Full R×C cell matrix.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Create a grid from a row-major cell buffer.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        let expected = rows * cols;
        if cells.len() != expected {
            return Err(GridError::SizeMismatch {
                rows,
                cols,
                expected,
                got: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Create a grid with the given cells alive and everything else dead.
    pub fn with_alive(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Self {
        let mut grid = Self::new(rows, cols);
        for &(row, col) in alive {
            grid.set(row, col, Cell::Alive);
        }
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `other` has the same dimensions.
    pub fn same_shape(&self, other: &Grid) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Get the cell at `(row, col)`.
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Set the cell at `(row, col)`.
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    /// Borrow one full row.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Mutably borrow one full row.
    pub fn row_mut(&mut self, row: usize) -> &mut [Cell] {
        let start = row * self.cols;
        &mut self.cells[start..start + self.cols]
    }

    /// Borrow row `read` immutably and row `write` mutably at the same time.
    ///
    /// Panics if `read == write`.
    pub fn split_rows(&mut self, read: usize, write: usize) -> (&[Cell], &mut [Cell]) {
        assert_ne!(read, write, "cannot read and write row {read} at once");
        assert!(read < self.rows && write < self.rows, "row outside grid");
        let cols = self.cols;
        if read < write {
            let (head, tail) = self.cells.split_at_mut(write * cols);
            (&head[read * cols..(read + 1) * cols], &mut tail[..cols])
        } else {
            let (head, tail) = self.cells.split_at_mut(read * cols);
            (&tail[..cols], &mut head[write * cols..(write + 1) * cols])
        }
    }

    /// Total number of alive cells.
    pub fn alive_count(&self) -> u64 {
        self.cells.iter().map(|c| u64::from(c.value())).sum()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.rows, self.cols)?;
        for row in 0..self.rows {
            for cell in self.row(row) {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
