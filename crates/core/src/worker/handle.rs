// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Owned background worker thread with join-on-stop lifecycle.

use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::dispatch::{DeliveryStatus, Dispatcher};
use crate::worker::phase::{PhaseCell, WorkerPhase};
use crate::worker::WorkerEvent;

/// How long a blocked hand-off waits before re-checking the phase.
const STOP_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Persistent worker configuration
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Delay between ticks
    pub interval: Duration,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
        }
    }
}

/// Callback invoked on the consumer thread for each worker event.
pub type EventHandler = Box<dyn FnMut(WorkerEvent) + Send + 'static>;

/// A live persistent worker: one background thread producing ticks.
///
/// At most one live thread exists per handle, and the thread never outlives
/// the handle: both [`WorkerHandle::stop`] and `Drop` block until the thread
/// has fully joined. An un-joined thread that calls back into a torn-down
/// host is the failure mode this type exists to rule out.
pub struct WorkerHandle {
    phase: Arc<PhaseCell>,
    thread: Option<JoinHandle<()>>,
}

impl WorkerHandle {
    /// Spawn the worker thread and start the tick loop.
    pub(crate) fn spawn(
        dispatcher: Dispatcher,
        on_event: EventHandler,
        config: WorkerConfig,
    ) -> std::io::Result<Self> {
        let phase = Arc::new(PhaseCell::new());
        let loop_phase = Arc::clone(&phase);
        let interval_ms = config.interval.as_millis() as u64;
        let thread = thread::Builder::new()
            .name("weft-worker".to_string())
            .spawn(move || run_loop(&dispatcher, on_event, &config, &loop_phase))?;

        tracing::info!(interval_ms, "worker started");
        Ok(Self {
            phase,
            thread: Some(thread),
        })
    }

    /// True iff the thread has started and has not yet begun stopping.
    pub fn is_running(&self) -> bool {
        self.thread.is_some() && self.phase.is_running()
    }

    /// Request stop and block until the thread has fully terminated.
    ///
    /// Safe to call on an already-joined handle; lifecycle misuse is the
    /// registry's concern, not this type's.
    pub fn stop(&mut self) {
        self.phase.request_stop();
        if let Some(thread) = self.thread.take() {
            tracing::debug!("joining worker thread");
            if thread.join().is_err() {
                tracing::warn!("worker thread panicked before join");
            }
            tracing::info!("worker stopped");
        }
        self.phase.set(WorkerPhase::Stopped);
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        // Host teardown takes the same stop-and-join path as stop().
        self.stop();
    }
}

fn run_loop(
    dispatcher: &Dispatcher,
    on_event: EventHandler,
    config: &WorkerConfig,
    phase: &PhaseCell,
) {
    let handler = Arc::new(Mutex::new(on_event));
    let mut count: u64 = 0;

    while phase.is_running() {
        thread::sleep(config.interval);
        if !phase.is_running() {
            break;
        }

        let event = WorkerEvent::Tick { count };
        count += 1;

        let handler = Arc::clone(&handler);
        let delivery = match dispatcher.enqueue_tracked(move || {
            let mut handler = handler.lock().unwrap_or_else(|e| e.into_inner());
            (*handler)(event);
        }) {
            Ok(delivery) => delivery,
            Err(_) => {
                tracing::warn!("dispatcher closed, worker loop exiting");
                break;
            }
        };

        // Back-pressure: at most one undelivered tick in flight. The timed
        // wait keeps the stop request observable while the consumer is slow.
        loop {
            match delivery.wait_timeout(STOP_POLL_INTERVAL) {
                DeliveryStatus::Delivered | DeliveryStatus::Dropped => break,
                DeliveryStatus::Pending => {
                    if !phase.is_running() {
                        break;
                    }
                }
            }
        }
    }

    phase.set(WorkerPhase::Stopped);
    tracing::debug!(ticks = count, "worker loop exited");
}

#[cfg(test)]
#[path = "handle_tests.rs"]
mod tests;
