// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the hashing boundary

use thiserror::Error;

/// Errors surfaced by the hashing API
#[derive(Debug, Error)]
pub enum HashError {
    /// A caller-supplied value violated a precondition. Detected
    /// synchronously on the calling thread; never spawns a thread.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The hashing library reported failure; its message passes through
    /// verbatim.
    #[error("hash computation failed: {0}")]
    Computation(String),

    /// The background thread could not be spawned.
    #[error("failed to spawn hash thread: {0}")]
    Spawn(#[from] std::io::Error),
}
