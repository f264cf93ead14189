//! Seeded initial grid.

use lifegrid_types::{Cell, ConfigError, Grid};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Fill a `rows x cols` grid where each cell is alive with probability
/// `density`, drawn in row-major order from a ChaCha8 stream seeded with
/// `seed`.
///
/// The same arguments always produce the same grid, on any platform.
pub fn random_grid(
    rows: usize,
    cols: usize,
    seed: u64,
    density: f64,
) -> Result<Grid, ConfigError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(ConfigError::InvalidDensity(density));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid = Grid::new(rows, cols);
    for row in 0..rows {
        for cell in grid.row_mut(row) {
            *cell = Cell::from(rng.gen_bool(density));
        }
    }
    Ok(grid)
}
