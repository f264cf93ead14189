//! Simulator entry points.

use crate::scaling::{ScalingPoint, ScalingReport};
use crate::{SimulatorConfig, SimulatorError};
use lifegrid_simulation::{SimulationReport, SimulationRunner};
use tracing::info;

/// Runs configured simulations.
///
/// Draws the initial grid once from the configured seed, so every run from
/// the same `Simulator` starts from the same grid whatever the worker count.
pub struct Simulator {
    config: SimulatorConfig,
    runner: SimulationRunner,
}

impl Simulator {
    pub fn new(config: SimulatorConfig) -> Result<Self, SimulatorError> {
        config.validate()?;
        let runner = SimulationRunner::seeded(config.to_params(), config.seed, config.density)?;
        Ok(Self { config, runner })
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Run once with the configured worker count.
    pub fn run(&self) -> Result<SimulationReport, SimulatorError> {
        Ok(self.runner.run()?)
    }

    /// Run once per entry of `worker_counts`, in order.
    ///
    /// Fails if any run ends with a different alive count than the first,
    /// since the result must not depend on how the rows are split.
    pub fn scaling(&self, worker_counts: &[usize]) -> Result<ScalingReport, SimulatorError> {
        if worker_counts.is_empty() {
            return Err(SimulatorError::NoWorkerCounts);
        }

        let mut report = ScalingReport::new();
        for &workers in worker_counts {
            let run = self.runner.with_workers(workers)?.run()?;
            let point = ScalingPoint {
                workers,
                elapsed: run.parallel_time(),
                alive_cells: run.alive_cells,
            };

            if let Some(base) = report.baseline() {
                if base.alive_cells != point.alive_cells {
                    return Err(SimulatorError::InconsistentResults {
                        baseline_workers: base.workers,
                        baseline_alive_cells: base.alive_cells,
                        workers,
                        alive_cells: point.alive_cells,
                    });
                }
            }

            info!(
                workers,
                elapsed_ms = point.elapsed.as_millis() as u64,
                speedup = report.speedup(&point),
                "Scaling point measured"
            );
            report.push(point);
        }

        Ok(report)
    }
}
