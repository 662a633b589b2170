// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Atomic lifecycle phase shared between a worker thread and its owner.

use std::sync::atomic::{AtomicU8, Ordering};

/// Lifecycle phase of a persistent worker thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerPhase {
    /// The loop is producing ticks.
    Running,
    /// A stop has been requested; the loop exits at its next poll.
    StopRequested,
    /// The loop has exited.
    Stopped,
}

impl WorkerPhase {
    fn from_raw(raw: u8) -> Self {
        match raw {
            0 => WorkerPhase::Running,
            1 => WorkerPhase::StopRequested,
            _ => WorkerPhase::Stopped,
        }
    }

    fn as_raw(self) -> u8 {
        match self {
            WorkerPhase::Running => 0,
            WorkerPhase::StopRequested => 1,
            WorkerPhase::Stopped => 2,
        }
    }
}

/// Lock-free cell holding a [`WorkerPhase`].
///
/// The stop request is the only datum touched by both the worker thread and
/// its owner outside the dispatcher; acquire/release ordering makes the
/// request visible at the loop's next poll.
#[derive(Debug)]
pub struct PhaseCell(AtomicU8);

impl PhaseCell {
    pub fn new() -> Self {
        Self(AtomicU8::new(WorkerPhase::Running.as_raw()))
    }

    pub fn get(&self) -> WorkerPhase {
        WorkerPhase::from_raw(self.0.load(Ordering::Acquire))
    }

    pub fn set(&self, phase: WorkerPhase) {
        self.0.store(phase.as_raw(), Ordering::Release);
    }

    /// True until a stop has been requested or completed.
    pub fn is_running(&self) -> bool {
        self.get() == WorkerPhase::Running
    }

    /// Move `Running` to `StopRequested`; a loop that already stopped stays
    /// `Stopped`.
    pub fn request_stop(&self) {
        let _ = self.0.compare_exchange(
            WorkerPhase::Running.as_raw(),
            WorkerPhase::StopRequested.as_raw(),
            Ordering::AcqRel,
            Ordering::Acquire,
        );
    }
}

impl Default for PhaseCell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "phase_tests.rs"]
mod tests;
