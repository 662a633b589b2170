// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the cross-thread bridge

use thiserror::Error;

/// Hand-off attempted after the consumer side was torn down.
///
/// This indicates a programming error in the host: a producer outlived the
/// drain loop it was feeding.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("dispatcher closed: consumer side no longer draining")]
pub struct DispatcherClosed;

/// Persistent worker lifecycle errors
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("worker already running")]
    AlreadyRunning,
    #[error("no worker running")]
    NotRunning,
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),
}
