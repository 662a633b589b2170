// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! weft-hash: argon2id hashing surface for the weft bridge
//!
//! This crate provides:
//! - `hash_sync` / `hash_async` password hashing (argon2id, hex output)
//! - Request validation that runs before any thread is spawned
//! - Blocking sleep and call-timing helpers for host benchmarking

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod api;
pub mod bench;
pub mod digest;
pub mod error;
pub mod params;

// Re-exports
pub use api::{hash_async, hash_sync};
pub use bench::{sleep_ms, time_call, Timed};
pub use error::HashError;
pub use params::HashRequest;
