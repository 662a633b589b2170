// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for behavioral specs.

use std::time::{Duration, Instant};

use weft_core::Drain;

/// Drain the host queue repeatedly for `window`, simulating an event loop.
pub fn pump_for(drain: &mut Drain, window: Duration) {
    let deadline = Instant::now() + window;
    while Instant::now() < deadline {
        drain.drain();
        std::thread::sleep(Duration::from_millis(5));
    }
}

/// Drain until `done` reports true or `timeout` elapses. Returns whether
/// the condition was met.
pub fn pump_until(drain: &mut Drain, timeout: Duration, mut done: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    loop {
        drain.drain();
        if done() {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
}
