// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking sleep and call-timing helpers

use std::thread;
use std::time::Duration;

use weft_core::clock::Clock;

use crate::error::HashError;

/// Result of a timed call: the callee's value plus wall-clock elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed_ms: u64,
}

/// Block the calling thread for `ms` milliseconds.
///
/// The signed argument mirrors the boundary contract: negative durations
/// are a caller error, not a clamp-to-zero.
pub fn sleep_ms(ms: i64) -> Result<(), HashError> {
    if ms < 0 {
        return Err(HashError::InvalidArgument(format!(
            "sleep duration must be non-negative, got {}",
            ms
        )));
    }
    thread::sleep(Duration::from_millis(ms as u64));
    Ok(())
}

/// Run `f` to completion on the calling thread, measuring elapsed wall-clock
/// milliseconds. A failure from `f` propagates unchanged, untimed.
pub fn time_call<C, T, E, F>(clock: &C, f: F) -> Result<Timed<T>, E>
where
    C: Clock,
    F: FnOnce() -> Result<T, E>,
{
    let start = clock.now();
    let value = f()?;
    let elapsed = clock.now().duration_since(start);
    Ok(Timed {
        value,
        elapsed_ms: elapsed.as_millis() as u64,
    })
}

#[cfg(test)]
#[path = "bench_tests.rs"]
mod tests;
