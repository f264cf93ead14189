//! In-process runtime for the distributed Game of Life.
//!
//! Runs every rank of the SPMD group as its own OS thread and connects them
//! with rendezvous channels, so the worker code runs unchanged from how it
//! would run over a real message-passing runtime.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                  SimulationRunner                       │
//! │                                                         │
//! │   seed ──► initial Grid (cloned into every worker)      │
//! │                                                         │
//! │  ┌──────────┐   ┌──────────┐          ┌──────────┐      │
//! │  │ worker-0 │◄─►│ worker-1 │◄─► ... ◄─►│ worker-N │      │
//! │  └────┬─────┘   └──────────┘          └────┬─────┘      │
//! │       ▲              ring (wraps N ◄─► 0)  │            │
//! │       └────────────────────────────────────┘            │
//! │                                                         │
//! │  ChannelNetwork: one bounded(0) channel per rank pair   │
//! │                           │                             │
//! │                           ▼                             │
//! │  join ──► SimulationReport (final grid, per-rank times) │
//! └─────────────────────────────────────────────────────────┘
//! ```

mod error;
mod network;
mod runner;
mod seed;

pub use error::SimulationError;
pub use network::{ChannelCommunicator, ChannelNetwork};
pub use runner::{SimulationReport, SimulationRunner, WorkerReport};
pub use seed::random_grid;
