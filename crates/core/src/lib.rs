// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! weft-core: cross-thread execution bridge for single-threaded hosts
//!
//! This crate provides:
//! - A multi-producer hand-off queue drained on one designated consumer thread
//! - One-shot background tasks with exactly-once completion delivery
//! - Persistent tick workers with blocking back-pressure and joined shutdown
//!
//! The host couples [`Drain::drain`] to its own event loop; every callback
//! handed to this crate runs on the thread doing the draining, never on a
//! background thread.

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod clock;
pub mod dispatch;
pub mod error;
pub mod task;
pub mod worker;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use dispatch::{channel, Delivery, DeliveryStatus, DispatchUnit, Dispatcher, Drain};
pub use error::{DispatcherClosed, WorkerError};
pub use task::{TaskHandle, TaskRunner, TaskStatus};
pub use worker::{WorkerConfig, WorkerEvent, WorkerHandle, WorkerPhase, WorkerRegistry};
