// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hash request parameters and validation

use crate::error::HashError;

/// Number of argon2id passes
pub const PASSES: u32 = 2;
/// Memory cost in KiB (64 MiB)
pub const MEMORY_KIB: u32 = 64 * 1024;
/// Lanes used by the computation
pub const PARALLELISM: u32 = 1;

/// Smallest accepted salt, in bytes
pub const MIN_SALT_LEN: usize = 8;
/// Smallest accepted output, in bytes
pub const MIN_OUTPUT_LEN: usize = 1;
/// Largest accepted output, in bytes
pub const MAX_OUTPUT_LEN: usize = 1024;

/// A request to derive `output_len` digest bytes from a password and salt.
///
/// Cost parameters are compiled in (`PASSES`, `MEMORY_KIB`, `PARALLELISM`),
/// not configurable per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashRequest {
    pub password: String,
    pub salt: String,
    pub output_len: usize,
}

impl HashRequest {
    pub fn new(password: impl Into<String>, salt: impl Into<String>, output_len: usize) -> Self {
        Self {
            password: password.into(),
            salt: salt.into(),
            output_len,
        }
    }

    /// Check preconditions on the calling thread, so malformed requests
    /// never consume a background thread.
    pub fn validate(&self) -> Result<(), HashError> {
        if self.output_len < MIN_OUTPUT_LEN || self.output_len > MAX_OUTPUT_LEN {
            return Err(HashError::InvalidArgument(format!(
                "output length must be between {} and {} bytes, got {}",
                MIN_OUTPUT_LEN, MAX_OUTPUT_LEN, self.output_len
            )));
        }
        if self.salt.len() < MIN_SALT_LEN {
            return Err(HashError::InvalidArgument(format!(
                "salt must be at least {} bytes, got {}",
                MIN_SALT_LEN,
                self.salt.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
