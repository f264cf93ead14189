//! Multi-threaded simulation runner.

use crate::network::{ChannelCommunicator, ChannelNetwork};
use crate::seed::random_grid;
use crate::SimulationError;
use lifegrid_core::Communicator;
use lifegrid_node::{CollectedGrid, NodeError, WorkerNode};
use lifegrid_types::{Grid, Rank, RowBand, SimulationParams};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Timing and ownership for one worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerReport {
    pub rank: Rank,

    /// Rows this worker computed.
    pub band: RowBand,

    /// Wall-clock time from the first step to the end of collection.
    pub elapsed: Duration,
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub params: SimulationParams,

    /// Full grid after the last step, as assembled on the coordinator.
    pub final_grid: Grid,

    /// Alive cells in `final_grid`.
    pub alive_cells: u64,

    /// One entry per rank, in rank order.
    pub workers: Vec<WorkerReport>,

    /// Time from spawning the first worker to joining the last.
    pub wall_time: Duration,
}

impl SimulationReport {
    /// Elapsed time of the slowest worker.
    ///
    /// Workers run in lockstep, so this is the time the group as a whole
    /// needed to finish.
    pub fn parallel_time(&self) -> Duration {
        self.workers
            .iter()
            .map(|w| w.elapsed)
            .max()
            .unwrap_or_default()
    }
}

/// What one worker thread hands back when it succeeds.
struct WorkerOutcome {
    report: WorkerReport,
    collected: Option<CollectedGrid>,
}

/// Runs one simulation with one OS thread per worker.
///
/// Every worker gets its own copy of the initial grid and a
/// [`ChannelCommunicator`] wired to every other worker. The runner itself
/// only spawns, joins and assembles the report; all coordination between
/// workers happens over the channels.
#[derive(Debug, Clone)]
pub struct SimulationRunner {
    params: SimulationParams,
    initial: Grid,
}

impl SimulationRunner {
    /// Create a runner for an explicit initial grid.
    pub fn new(params: SimulationParams, initial: Grid) -> Result<Self, SimulationError> {
        params.validate()?;
        if initial.rows() != params.rows || initial.cols() != params.cols {
            return Err(SimulationError::InitialGridShape {
                rows: params.rows,
                cols: params.cols,
                got_rows: initial.rows(),
                got_cols: initial.cols(),
            });
        }
        Ok(Self { params, initial })
    }

    /// Create a runner whose initial grid is drawn from `seed`.
    pub fn seeded(
        params: SimulationParams,
        seed: u64,
        density: f64,
    ) -> Result<Self, SimulationError> {
        params.validate()?;
        let initial = random_grid(params.rows, params.cols, seed, density)?;
        Self::new(params, initial)
    }

    /// Same initial grid and step count with a different worker count.
    pub fn with_workers(&self, workers: usize) -> Result<Self, SimulationError> {
        Self::new(self.params.with_workers(workers), self.initial.clone())
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn initial(&self) -> &Grid {
        &self.initial
    }

    /// Run every worker to completion and collect the result.
    ///
    /// If any worker fails the whole run fails. The reported error is the
    /// lowest-ranked failure that is not just a partner disconnecting,
    /// since those follow from the first failure.
    pub fn run(&self) -> Result<SimulationReport, SimulationError> {
        let SimulationParams {
            rows,
            cols,
            iterations,
            workers,
        } = self.params;

        info!(rows, cols, iterations, workers, "Starting simulation");

        let started = Instant::now();
        let comms = ChannelNetwork::build(workers);

        let results: Vec<Result<WorkerOutcome, SimulationError>> = thread::scope(|scope| {
            let mut handles = Vec::with_capacity(workers);
            for comm in comms {
                let rank = comm.rank();
                let initial = self.initial.clone();
                let spawned = thread::Builder::new()
                    .name(format!("worker-{}", rank.get()))
                    .spawn_scoped(scope, move || run_worker(comm, initial, iterations));
                handles.push((rank, spawned));
            }

            handles
                .into_iter()
                .map(|(rank, spawned)| match spawned {
                    Err(source) => Err(SimulationError::Spawn { rank, source }),
                    Ok(handle) => match handle.join() {
                        Ok(Ok(outcome)) => Ok(outcome),
                        Ok(Err(source)) => Err(SimulationError::Worker { rank, source }),
                        Err(_) => Err(SimulationError::WorkerPanicked(rank)),
                    },
                })
                .collect()
        });

        let wall_time = started.elapsed();

        let mut reports = Vec::with_capacity(workers);
        let mut collected = None;
        let mut errors = Vec::new();
        for result in results {
            match result {
                Ok(outcome) => {
                    if outcome.collected.is_some() {
                        collected = outcome.collected;
                    }
                    reports.push(outcome.report);
                }
                Err(err) => errors.push(err),
            }
        }

        if !errors.is_empty() {
            let err = first_failure(errors);
            warn!(error = %err, "Simulation failed");
            return Err(err);
        }

        let CollectedGrid { grid, alive_cells } =
            collected.ok_or(SimulationError::MissingCoordinatorResult)?;

        info!(
            alive_cells,
            wall_time_ms = wall_time.as_millis() as u64,
            "Simulation complete"
        );

        Ok(SimulationReport {
            params: self.params,
            final_grid: grid,
            alive_cells,
            workers: reports,
            wall_time,
        })
    }
}

/// Body of one worker thread.
fn run_worker(
    comm: ChannelCommunicator,
    initial: Grid,
    iterations: u64,
) -> Result<WorkerOutcome, NodeError> {
    let mut node = WorkerNode::for_communicator(&comm, initial)?;
    let rank = node.topology().local_rank();
    let band = node.topology().local_band();

    let started = Instant::now();
    node.run(&comm, iterations)?;
    let collected = node.collect(&comm)?;
    let elapsed = started.elapsed();

    info!(
        rank = %rank,
        elapsed_ms = elapsed.as_millis() as u64,
        "Worker finished"
    );

    Ok(WorkerOutcome {
        report: WorkerReport {
            rank,
            band,
            elapsed,
        },
        collected,
    })
}

/// Pick the error to report from a failed run.
///
/// `errors` is in rank order and non-empty.
fn first_failure(errors: Vec<SimulationError>) -> SimulationError {
    let is_secondary = |err: &SimulationError| {
        matches!(err, SimulationError::Worker { source, .. } if source.is_peer_disconnect())
    };

    let mut fallback = None;
    for err in errors {
        if !is_secondary(&err) {
            return err;
        }
        fallback.get_or_insert(err);
    }
    fallback.unwrap_or(SimulationError::MissingCoordinatorResult)
}
