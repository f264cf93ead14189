//! Worker scaling study: speedup and efficiency over worker counts.

use std::fmt;
use std::time::Duration;

/// One measured run of a scaling study.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalingPoint {
    pub workers: usize,

    /// Time the slowest worker needed.
    pub elapsed: Duration,

    pub alive_cells: u64,
}

/// Runs of one configuration over several worker counts.
///
/// The first point is the baseline: speedup is `t_baseline / t_p` and
/// efficiency is `speedup / (p / p_baseline)`, which for a single-worker
/// baseline reduces to `speedup / p`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScalingReport {
    points: Vec<ScalingPoint>,
}

impl ScalingReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: ScalingPoint) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[ScalingPoint] {
        &self.points
    }

    pub fn baseline(&self) -> Option<&ScalingPoint> {
        self.points.first()
    }

    /// Speedup of `point` relative to the baseline.
    pub fn speedup(&self, point: &ScalingPoint) -> f64 {
        match self.baseline() {
            Some(base) if !point.elapsed.is_zero() => {
                base.elapsed.as_secs_f64() / point.elapsed.as_secs_f64()
            }
            _ => 0.0,
        }
    }

    /// Speedup per unit of added workers, relative to the baseline.
    pub fn efficiency(&self, point: &ScalingPoint) -> f64 {
        match self.baseline() {
            Some(base) if point.workers > 0 => {
                self.speedup(point) * base.workers as f64 / point.workers as f64
            }
            _ => 0.0,
        }
    }

    /// Print the report as a table on stdout.
    pub fn print(&self) {
        print!("{self}");
    }
}

impl fmt::Display for ScalingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>8}  {:>12}  {:>8}  {:>10}  {:>12}",
            "workers", "elapsed (s)", "speedup", "efficiency", "alive cells"
        )?;
        for point in &self.points {
            writeln!(
                f,
                "{:>8}  {:>12.4}  {:>8.2}  {:>10.2}  {:>12}",
                point.workers,
                point.elapsed.as_secs_f64(),
                self.speedup(point),
                self.efficiency(point),
                point.alive_cells
            )?;
        }
        Ok(())
    }
}
