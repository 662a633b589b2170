// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hand-off queue ordering and teardown behavior.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use weft_core::{channel, DispatcherClosed};

use crate::prelude::pump_until;

#[test]
fn per_producer_order_is_preserved_under_contention() {
    let (dispatcher, mut drain) = channel();
    let log: Arc<Mutex<Vec<(usize, u32)>>> = Arc::new(Mutex::new(Vec::new()));

    let producers: Vec<_> = (0..4)
        .map(|producer| {
            let dispatcher = dispatcher.clone();
            let log = Arc::clone(&log);
            thread::spawn(move || {
                for seq in 0..50 {
                    let log = Arc::clone(&log);
                    dispatcher
                        .enqueue(move || log.lock().unwrap().push((producer, seq)))
                        .unwrap();
                    thread::sleep(Duration::from_micros(100));
                }
            })
        })
        .collect();

    let expected = 4 * 50;
    assert!(pump_until(&mut drain, Duration::from_secs(5), || {
        log.lock().unwrap().len() == expected
    }));
    for producer in producers {
        producer.join().unwrap();
    }

    // Per producer, sequence numbers arrive strictly ascending; interleaving
    // across producers is unconstrained.
    let seen = log.lock().unwrap();
    for producer in 0..4 {
        let sequence: Vec<u32> = seen
            .iter()
            .filter(|(p, _)| *p == producer)
            .map(|(_, s)| *s)
            .collect();
        assert_eq!(sequence, (0..50).collect::<Vec<_>>());
    }
}

#[test]
fn enqueue_after_teardown_reports_closed() {
    let (dispatcher, drain) = channel();
    drop(drain);

    assert_eq!(dispatcher.enqueue(|| {}), Err(DispatcherClosed));
    assert_eq!(dispatcher.enqueue_blocking(|| {}), Err(DispatcherClosed));
}

#[test]
fn consumer_thread_executes_every_unit() {
    let (dispatcher, mut drain) = channel();
    let host_thread = thread::current().id();
    let foreign = Arc::new(Mutex::new(0u32));
    let total = Arc::new(Mutex::new(0u32));

    for _ in 0..3 {
        let dispatcher = dispatcher.clone();
        let foreign = Arc::clone(&foreign);
        let total = Arc::clone(&total);
        thread::spawn(move || {
            dispatcher
                .enqueue(move || {
                    if thread::current().id() != host_thread {
                        *foreign.lock().unwrap() += 1;
                    }
                    *total.lock().unwrap() += 1;
                })
                .unwrap();
        });
    }

    assert!(pump_until(&mut drain, Duration::from_secs(2), || {
        *total.lock().unwrap() == 3
    }));
    assert_eq!(*foreign.lock().unwrap(), 0);
}
