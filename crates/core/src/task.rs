// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One-shot background tasks with consumer-thread completion delivery.
//!
//! Each submission pays full thread-creation cost; there is no pooling.
//! Submissions are expected to be infrequent and individually expensive,
//! dominated by the computation itself.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::thread;

use crate::dispatch::Dispatcher;

/// Observable lifecycle of a submitted task.
///
/// Created `Pending` at submission, moves to `Running` when the background
/// thread begins, then to exactly one terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

impl TaskStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Failed)
    }

    fn from_raw(raw: u8) -> Self {
        match raw {
            0 => TaskStatus::Pending,
            1 => TaskStatus::Running,
            2 => TaskStatus::Completed,
            _ => TaskStatus::Failed,
        }
    }

    fn as_raw(self) -> u8 {
        match self {
            TaskStatus::Pending => 0,
            TaskStatus::Running => 1,
            TaskStatus::Completed => 2,
            TaskStatus::Failed => 3,
        }
    }
}

/// Lock-free status cell shared between the background thread and observers.
#[derive(Debug)]
struct StatusCell(AtomicU8);

impl StatusCell {
    fn new() -> Self {
        Self(AtomicU8::new(TaskStatus::Pending.as_raw()))
    }

    fn set(&self, status: TaskStatus) {
        self.0.store(status.as_raw(), Ordering::Release);
    }

    fn get(&self) -> TaskStatus {
        TaskStatus::from_raw(self.0.load(Ordering::Acquire))
    }
}

/// Handle for observing a submitted task.
///
/// Dropping the handle does not cancel the task; there is no mid-flight
/// cancellation. Once submitted, the background thread runs to completion.
pub struct TaskHandle {
    status: Arc<StatusCell>,
}

impl TaskHandle {
    /// Last status the background thread published.
    pub fn status(&self) -> TaskStatus {
        self.status.get()
    }
}

/// Runs blocking work on fresh background threads, one per submission.
#[derive(Clone)]
pub struct TaskRunner {
    dispatcher: Dispatcher,
}

impl TaskRunner {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Spawn `work` on a new thread and deliver its outcome to `on_done` on
    /// the consumer thread.
    ///
    /// `on_done` is invoked exactly once, with the success value or the
    /// failure, never both. Errors raised by `work` are captured as data and
    /// cross the thread boundary through the same channel as success.
    pub fn submit<V, E, W, F>(&self, work: W, on_done: F) -> std::io::Result<TaskHandle>
    where
        V: Send + 'static,
        E: Send + 'static,
        W: FnOnce() -> Result<V, E> + Send + 'static,
        F: FnOnce(Result<V, E>) + Send + 'static,
    {
        let status = Arc::new(StatusCell::new());
        let cell = Arc::clone(&status);
        let dispatcher = self.dispatcher.clone();

        thread::Builder::new()
            .name("weft-task".to_string())
            .spawn(move || {
                cell.set(TaskStatus::Running);
                let outcome = work();
                cell.set(if outcome.is_ok() {
                    TaskStatus::Completed
                } else {
                    TaskStatus::Failed
                });
                if dispatcher.enqueue(move || on_done(outcome)).is_err() {
                    tracing::warn!("task outcome dropped: dispatcher closed before delivery");
                }
            })?;

        tracing::debug!("task submitted");
        Ok(TaskHandle { status })
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
