// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persistent background worker with consumer-thread event delivery

mod handle;
mod phase;
mod registry;

/// An event produced on a worker thread and delivered on the consumer thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerEvent {
    /// Periodic counter tick, starting at 0
    Tick { count: u64 },
}

pub use handle::{EventHandler, WorkerConfig, WorkerHandle};
pub use phase::{PhaseCell, WorkerPhase};
pub use registry::WorkerRegistry;
