// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host-owned slot holding at most one live persistent worker.

use std::sync::Mutex;

use crate::dispatch::Dispatcher;
use crate::error::WorkerError;
use crate::worker::handle::{WorkerConfig, WorkerHandle};
use crate::worker::WorkerEvent;

/// A slot for at most one live [`WorkerHandle`].
///
/// The check-and-set of the slot runs under a mutex, so two concurrent
/// `start` calls cannot both succeed. Hosts that need several independent
/// workers own several registries; there is no process-wide state.
pub struct WorkerRegistry {
    dispatcher: Dispatcher,
    config: WorkerConfig,
    slot: Mutex<Option<WorkerHandle>>,
}

impl WorkerRegistry {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self::with_config(dispatcher, WorkerConfig::default())
    }

    pub fn with_config(dispatcher: Dispatcher, config: WorkerConfig) -> Self {
        Self {
            dispatcher,
            config,
            slot: Mutex::new(None),
        }
    }

    /// Start the worker; each event reaches `on_event` on the consumer
    /// thread in production order.
    ///
    /// Fails with [`WorkerError::AlreadyRunning`] while the slot is occupied.
    pub fn start<F>(&self, on_event: F) -> Result<(), WorkerError>
    where
        F: FnMut(WorkerEvent) + Send + 'static,
    {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        if slot.is_some() {
            return Err(WorkerError::AlreadyRunning);
        }
        let handle = WorkerHandle::spawn(
            self.dispatcher.clone(),
            Box::new(on_event),
            self.config.clone(),
        )?;
        *slot = Some(handle);
        Ok(())
    }

    /// Stop the worker and block until its thread has fully joined, then
    /// clear the slot.
    ///
    /// Fails with [`WorkerError::NotRunning`] when the slot is empty; a
    /// second stop is an error, not a silent no-op. Callers uncertain of the
    /// state check [`WorkerRegistry::is_running`] first.
    pub fn stop(&self) -> Result<(), WorkerError> {
        let mut handle = {
            let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
            slot.take().ok_or(WorkerError::NotRunning)?
        };
        // Join outside the slot lock so is_running stays callable meanwhile.
        handle.stop();
        Ok(())
    }

    /// True iff the slot is occupied and the thread has not begun stopping.
    pub fn is_running(&self) -> bool {
        let slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        slot.as_ref().is_some_and(WorkerHandle::is_running)
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
