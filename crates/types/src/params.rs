//! Validated simulation parameters.

/// Errors in simulation parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid must have at least one row")]
    ZeroRows,

    #[error("grid must have at least one column")]
    ZeroCols,

    #[error("at least one worker is required")]
    ZeroWorkers,

    /// More workers than rows would leave some band empty.
    #[error("{workers} workers cannot split {rows} rows; every worker needs at least one row")]
    TooManyWorkers { workers: usize, rows: usize },

    /// `rows * cols` cells cannot be held in one buffer.
    #[error("a {rows}x{cols} grid is too large to allocate")]
    GridTooLarge { rows: usize, cols: usize },

    #[error("initial density must be within [0, 1], got {0}")]
    InvalidDensity(f64),
}

/// Grid dimensions, step count and worker count for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationParams {
    /// Number of grid rows (R).
    pub rows: usize,

    /// Number of grid columns (C).
    pub cols: usize,

    /// Number of steps to evolve.
    pub iterations: u64,

    /// Number of ranks the rows are split across.
    pub workers: usize,
}

impl SimulationParams {
    /// Create parameters without validating them.
    pub fn new(rows: usize, cols: usize, iterations: u64, workers: usize) -> Self {
        Self {
            rows,
            cols,
            iterations,
            workers,
        }
    }

    /// Check the parameters describe a runnable simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.cols == 0 {
            return Err(ConfigError::ZeroCols);
        }
        let fits = self
            .rows
            .checked_mul(self.cols)
            .is_some_and(|cells| cells <= isize::MAX as usize);
        if !fits {
            return Err(ConfigError::GridTooLarge {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.workers == 0 {
            return Err(ConfigError::ZeroWorkers);
        }
        if self.workers > self.rows {
            return Err(ConfigError::TooManyWorkers {
                workers: self.workers,
                rows: self.rows,
            });
        }
        Ok(())
    }

    /// Same parameters with a different worker count.
    pub fn with_workers(self, workers: usize) -> Self {
        Self { workers, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_params() {
        assert_eq!(SimulationParams::new(96, 1000, 1000, 4).validate(), Ok(()));
        // Zero iterations is a valid (if trivial) run.
        assert_eq!(SimulationParams::new(4, 4, 0, 1).validate(), Ok(()));
    }

    #[test]
    fn test_rejects_degenerate_params() {
        assert_eq!(
            SimulationParams::new(0, 4, 1, 1).validate(),
            Err(ConfigError::ZeroRows)
        );
        assert_eq!(
            SimulationParams::new(4, 0, 1, 1).validate(),
            Err(ConfigError::ZeroCols)
        );
        assert_eq!(
            SimulationParams::new(4, 4, 1, 0).validate(),
            Err(ConfigError::ZeroWorkers)
        );
        assert_eq!(
            SimulationParams::new(4, 4, 1, 5).validate(),
            Err(ConfigError::TooManyWorkers {
                workers: 5,
                rows: 4
            })
        );
    }

    #[test]
    fn test_rejects_grid_that_overflows_cell_count() {
        assert_eq!(
            SimulationParams::new(1 << 33, 1 << 31, 1, 1).validate(),
            Err(ConfigError::GridTooLarge {
                rows: 1 << 33,
                cols: 1 << 31
            })
        );
        assert_eq!(
            SimulationParams::new(usize::MAX, 2, 1, 1).validate(),
            Err(ConfigError::GridTooLarge {
                rows: usize::MAX,
                cols: 2
            })
        );
        // Fits in usize but not in a single allocation.
        assert_eq!(
            SimulationParams::new(usize::MAX / 2, 2, 1, 1).validate(),
            Err(ConfigError::GridTooLarge {
                rows: usize::MAX / 2,
                cols: 2
            })
        );
    }

    #[test]
    fn test_with_workers() {
        let params = SimulationParams::new(8, 8, 3, 1).with_workers(4);
        assert_eq!(params.workers, 4);
        assert_eq!(params.rows, 8);
    }
}
