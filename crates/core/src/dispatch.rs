// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hand-off queue from producer threads to a single consumer thread.
//!
//! Any thread may enqueue a unit of work; the consumer thread pops and runs
//! queued units in arrival order by calling [`Drain::drain`] from its own
//! event loop. Units from the same producer are delivered in submission
//! order; no ordering is promised across producers.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use crate::error::DispatcherClosed;

/// A packaged operation handed from a producer thread to the consumer thread.
///
/// The queue owns the unit exclusively until it is consumed; ownership then
/// transfers to the consumer-thread invocation and the unit is discarded
/// after it runs.
pub type DispatchUnit = Box<dyn FnOnce() + Send + 'static>;

struct Queued {
    unit: DispatchUnit,
    ack: Option<Sender<()>>,
}

/// Producer handle. Cloneable and usable from any thread, including the
/// consumer thread itself.
#[derive(Clone)]
pub struct Dispatcher {
    tx: Sender<Queued>,
}

/// Consumer handle, owned by the designated consumer thread.
///
/// Draining takes `&mut self`, so two drains can never run concurrently and
/// unit execution is never reentrant with respect to another drain.
pub struct Drain {
    rx: Receiver<Queued>,
}

/// Create a connected dispatcher/drain pair.
pub fn channel() -> (Dispatcher, Drain) {
    let (tx, rx) = mpsc::channel();
    (Dispatcher { tx }, Drain { rx })
}

impl Dispatcher {
    /// Push a unit onto the queue without waiting for it to run.
    ///
    /// Fails once the [`Drain`] has been dropped.
    pub fn enqueue(&self, unit: impl FnOnce() + Send + 'static) -> Result<(), DispatcherClosed> {
        self.tx
            .send(Queued {
                unit: Box::new(unit),
                ack: None,
            })
            .map_err(|_| DispatcherClosed)
    }

    /// Push a unit and return a [`Delivery`] that resolves once the consumer
    /// thread has executed it.
    pub fn enqueue_tracked(
        &self,
        unit: impl FnOnce() + Send + 'static,
    ) -> Result<Delivery, DispatcherClosed> {
        let (ack_tx, ack_rx) = mpsc::channel();
        self.tx
            .send(Queued {
                unit: Box::new(unit),
                ack: Some(ack_tx),
            })
            .map_err(|_| DispatcherClosed)?;
        Ok(Delivery { ack: ack_rx })
    }

    /// Push a unit and block until the consumer thread has executed it.
    ///
    /// Must not be called from the consumer thread: the unit can only run
    /// from a drain this call would be blocking.
    pub fn enqueue_blocking(
        &self,
        unit: impl FnOnce() + Send + 'static,
    ) -> Result<(), DispatcherClosed> {
        self.enqueue_tracked(unit)?.wait()
    }
}

/// Tracks one enqueued unit until the consumer thread has executed it.
pub struct Delivery {
    ack: Receiver<()>,
}

/// Outcome of a bounded wait on a [`Delivery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    /// The unit ran on the consumer thread.
    Delivered,
    /// The unit was still queued when the wait timed out.
    Pending,
    /// The queue was torn down before the unit ran.
    Dropped,
}

impl Delivery {
    /// Block until the unit has run.
    ///
    /// Fails if the queue is torn down with the unit still pending.
    pub fn wait(self) -> Result<(), DispatcherClosed> {
        self.ack.recv().map_err(|_| DispatcherClosed)
    }

    /// Wait up to `timeout` for the unit to run.
    pub fn wait_timeout(&self, timeout: Duration) -> DeliveryStatus {
        match self.ack.recv_timeout(timeout) {
            Ok(()) => DeliveryStatus::Delivered,
            Err(RecvTimeoutError::Timeout) => DeliveryStatus::Pending,
            Err(RecvTimeoutError::Disconnected) => DeliveryStatus::Dropped,
        }
    }
}

impl Drain {
    /// Pop and run every unit currently queued, in arrival order.
    ///
    /// Each execution is fully synchronous; a unit that takes unbounded time
    /// stalls the host loop, so unit bodies must be short. Returns the number
    /// of units executed.
    pub fn drain(&mut self) -> usize {
        let mut executed = 0;
        while let Ok(queued) = self.rx.try_recv() {
            (queued.unit)();
            if let Some(ack) = queued.ack {
                // The waiter may have given up; a dead ack channel is fine.
                let _ = ack.send(());
            }
            executed += 1;
        }
        executed
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
