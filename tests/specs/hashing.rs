// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hashing boundary: determinism, validation, and timing.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use weft_core::{channel, SystemClock, TaskRunner};
use weft_hash::{hash_async, hash_sync, sleep_ms, time_call, HashError, HashRequest};

use crate::prelude::pump_until;

#[test]
fn sync_and_async_agree_and_length_matches() {
    let (dispatcher, mut drain) = channel();
    let runner = TaskRunner::new(dispatcher);
    let request = HashRequest::new("swordfish", "a-salt-of-14-b", 32);

    let sync_digest = hash_sync(&request).unwrap();
    assert_eq!(sync_digest.len(), 2 * 32);

    let delivered: Arc<Mutex<Option<Result<String, HashError>>>> = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&delivered);
    hash_async(&runner, request, move |outcome| {
        *sink.lock().unwrap() = Some(outcome);
    })
    .unwrap();

    assert!(pump_until(&mut drain, Duration::from_secs(10), || {
        delivered.lock().unwrap().is_some()
    }));
    let async_digest = delivered.lock().unwrap().take().unwrap().unwrap();
    assert_eq!(async_digest, sync_digest);
}

#[test]
fn invalid_output_lengths_fail_both_entry_points_without_delivery() {
    let (dispatcher, mut drain) = channel();
    let runner = TaskRunner::new(dispatcher);

    for output_len in [0, 1025] {
        let request = HashRequest::new("pw", "longsalt", output_len);
        assert!(matches!(
            hash_sync(&request),
            Err(HashError::InvalidArgument(_))
        ));

        let called = Arc::new(Mutex::new(false));
        let sink = Arc::clone(&called);
        let result = hash_async(&runner, request, move |_| *sink.lock().unwrap() = true);
        assert!(matches!(result, Err(HashError::InvalidArgument(_))));

        // Rejected synchronously: no thread, no eventual delivery.
        std::thread::sleep(Duration::from_millis(20));
        drain.drain();
        assert!(!*called.lock().unwrap());
    }
}

#[test]
fn short_salt_fails_both_entry_points() {
    let (dispatcher, _drain) = channel();
    let runner = TaskRunner::new(dispatcher);
    let request = HashRequest::new("pw", "1234567", 32);

    assert!(matches!(
        hash_sync(&request),
        Err(HashError::InvalidArgument(_))
    ));
    assert!(matches!(
        hash_async(&runner, request, |_| {}),
        Err(HashError::InvalidArgument(_))
    ));
}

#[test]
fn timed_sleep_reports_plausible_elapsed_time() {
    let clock = SystemClock;
    let timed = time_call(&clock, || sleep_ms(50)).unwrap();
    assert!(timed.elapsed_ms >= 50, "got {} ms", timed.elapsed_ms);
    assert!(timed.elapsed_ms < 500, "got {} ms", timed.elapsed_ms);
}
