// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Demo host: a single-threaded loop driving every entry point.
//!
//! Run with `cargo run -p weft-hash --example playground`.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use weft_core::{channel, Drain, SystemClock, TaskRunner, WorkerEvent, WorkerRegistry};
use weft_hash::{hash_async, hash_sync, time_call, HashRequest};

/// Simulate the host event loop for `window`, draining queued callbacks.
fn pump(drain: &mut Drain, window: Duration) {
    let deadline = Instant::now() + window;
    while Instant::now() < deadline {
        drain.drain();
        std::thread::sleep(Duration::from_millis(10));
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let (dispatcher, mut drain) = channel();
    let runner = TaskRunner::new(dispatcher.clone());
    let clock = SystemClock;

    // 1. Synchronous hash, timed.
    let request = HashRequest::new("hunter2", "demo-salt-demo", 32);
    match time_call(&clock, || hash_sync(&request)) {
        Ok(timed) => println!("sync digest ({} ms): {}", timed.elapsed_ms, timed.value),
        Err(e) => eprintln!("sync hash failed: {}", e),
    }

    // 2. Background hash delivered to this thread.
    let done = Arc::new(Mutex::new(false));
    let flag = Arc::clone(&done);
    let submitted = hash_async(
        &runner,
        HashRequest::new("hunter2", "demo-salt-demo", 32),
        move |outcome| {
            match outcome {
                Ok(digest) => println!("async digest: {}", digest),
                Err(e) => eprintln!("async hash failed: {}", e),
            }
            *flag.lock().unwrap_or_else(|e| e.into_inner()) = true;
        },
    );
    match submitted {
        Ok(_handle) => {
            while !*done.lock().unwrap_or_else(|e| e.into_inner()) {
                drain.drain();
                std::thread::sleep(Duration::from_millis(10));
            }
        }
        Err(e) => eprintln!("submit failed: {}", e),
    }

    // 3. Periodic worker ticks for ~3.5 seconds.
    let registry = WorkerRegistry::new(dispatcher);
    let started = registry.start(|WorkerEvent::Tick { count }| {
        println!("tick {}", count);
    });
    if let Err(e) = started {
        eprintln!("worker start failed: {}", e);
    }
    pump(&mut drain, Duration::from_millis(3500));
    if let Err(e) = registry.stop() {
        eprintln!("worker stop failed: {}", e);
    }
    println!("worker running: {}", registry.is_running());
}
