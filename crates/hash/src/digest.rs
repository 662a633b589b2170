// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Raw argon2id derivation and hex encoding

use argon2::{Algorithm, Argon2, Params, Version};

use crate::error::HashError;
use crate::params::{HashRequest, MEMORY_KIB, PARALLELISM, PASSES};

/// Derive the raw digest for a validated request and hex-encode it
/// (lowercase, two characters per byte).
///
/// The library still enforces its own bounds (argon2 requires a tag of at
/// least 4 bytes); those rejections surface as [`HashError::Computation`]
/// with the library message passed through.
pub fn hash_hex(request: &HashRequest) -> Result<String, HashError> {
    let params = Params::new(MEMORY_KIB, PASSES, PARALLELISM, Some(request.output_len))
        .map_err(|e| HashError::Computation(e.to_string()))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut out = vec![0u8; request.output_len];
    argon2
        .hash_password_into(
            request.password.as_bytes(),
            request.salt.as_bytes(),
            &mut out,
        )
        .map_err(|e| HashError::Computation(e.to_string()))?;

    Ok(hex::encode(out))
}

#[cfg(test)]
#[path = "digest_tests.rs"]
mod tests;
