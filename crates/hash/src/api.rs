// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Synchronous and background hashing entry points

use weft_core::task::{TaskHandle, TaskRunner};

use crate::digest;
use crate::error::HashError;
use crate::params::HashRequest;

/// Hash on the calling thread.
///
/// Blocks for the full cost of the derivation (hundreds of milliseconds at
/// the compiled-in cost parameters).
pub fn hash_sync(request: &HashRequest) -> Result<String, HashError> {
    request.validate()?;
    digest::hash_hex(request)
}

/// Hash on a fresh background thread.
///
/// `on_done` runs on the consumer thread exactly once, with the hex digest
/// or the failure. Validation happens here, synchronously, before any
/// thread is spawned; a request that fails validation returns immediately
/// and `on_done` is never invoked.
pub fn hash_async<F>(
    runner: &TaskRunner,
    request: HashRequest,
    on_done: F,
) -> Result<TaskHandle, HashError>
where
    F: FnOnce(Result<String, HashError>) + Send + 'static,
{
    request.validate()?;
    tracing::debug!(output_len = request.output_len, "submitting hash task");
    let handle = runner.submit(move || digest::hash_hex(&request), on_done)?;
    Ok(handle)
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
