//! Worker node state machine.

use crate::collect::{collect_rows, CollectedGrid};
use crate::exchange::exchange_boundaries;
use crate::NodeError;
use lifegrid_core::Communicator;
use lifegrid_engine::{update_band, BandUpdate};
use lifegrid_types::{ConfigError, Generation, Grid, RingTopology};
use tracing::{info, trace};

/// One worker's view of the simulation.
///
/// Holds the full grid twice: `current` is the generation being read and
/// `next` the one being written. Only the local band of `next` is computed;
/// the two rows just outside it are refreshed by the boundary exchange and
/// everything else is never read.
pub struct WorkerNode {
    /// Ring position and band ownership.
    topology: RingTopology,

    /// Generation being read this step.
    current: Grid,

    /// Generation being written this step.
    next: Grid,

    /// Generation held in `current`.
    generation: Generation,
}

impl WorkerNode {
    /// Create a worker from an explicit topology and the shared initial grid.
    pub fn new(topology: RingTopology, initial: Grid) -> Result<Self, NodeError> {
        if initial.rows() != topology.total_rows() {
            return Err(NodeError::GridShapeMismatch {
                expected: topology.total_rows(),
                got: initial.rows(),
            });
        }

        Ok(Self {
            topology,
            next: initial.clone(),
            current: initial,
            generation: Generation::INITIAL,
        })
    }

    /// Create a worker whose rank and group size come from `comm`.
    pub fn for_communicator<C>(comm: &C, initial: Grid) -> Result<Self, NodeError>
    where
        C: Communicator + ?Sized,
    {
        let size = comm.size();
        if size == 0 {
            return Err(ConfigError::ZeroWorkers.into());
        }
        if size > initial.rows() {
            return Err(ConfigError::TooManyWorkers {
                workers: size,
                rows: initial.rows(),
            }
            .into());
        }

        let rank = comm.rank();
        if rank.get() >= size {
            return Err(NodeError::RankOutOfRange { rank, size });
        }

        let topology = RingTopology::new(rank, size, initial.rows());
        Self::new(topology, initial)
    }

    pub fn topology(&self) -> &RingTopology {
        &self.topology
    }

    /// The most recent generation.
    ///
    /// Only the local band and its two ghost rows are authoritative.
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Advance one generation: update the local band, exchange boundary rows
    /// of the new generation with both neighbors, then swap buffers.
    pub fn step<C>(&mut self, comm: &C) -> Result<BandUpdate, NodeError>
    where
        C: Communicator + ?Sized,
    {
        let band = self.topology.local_band();
        let stats = update_band(&self.current, &mut self.next, band);

        let generation = self.generation.next();
        exchange_boundaries(&self.topology, &mut self.next, comm)
            .map_err(|source| NodeError::Exchange { generation, source })?;

        std::mem::swap(&mut self.current, &mut self.next);
        self.generation = generation;

        trace!(
            rank = %self.topology.local_rank(),
            generation = generation.0,
            births = stats.births,
            deaths = stats.deaths,
            alive = stats.alive,
            "Step complete"
        );

        Ok(stats)
    }

    /// Run `iterations` steps.
    pub fn run<C>(&mut self, comm: &C, iterations: u64) -> Result<(), NodeError>
    where
        C: Communicator + ?Sized,
    {
        let band = self.topology.local_band();
        info!(
            rank = %self.topology.local_rank(),
            size = self.topology.size(),
            start_row = band.start_row(),
            end_row = band.end_row(),
            iterations,
            "Worker starting"
        );

        for _ in 0..iterations {
            self.step(comm)?;
        }

        Ok(())
    }

    /// Consume the worker and take part in final collection.
    ///
    /// Returns the full grid on the coordinator and `None` elsewhere.
    pub fn collect<C>(self, comm: &C) -> Result<Option<CollectedGrid>, NodeError>
    where
        C: Communicator + ?Sized,
    {
        collect_rows(&self.topology, self.current, comm).map_err(NodeError::Collect)
    }
}
