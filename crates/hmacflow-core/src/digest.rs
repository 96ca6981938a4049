// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use hmacflow_util::{bytes_to_hex, constant_time_eq, fast_zeroize_vec};

/// Output of one hash or HMAC computation, zeroized on drop.
///
/// Equality is constant-time.
#[derive(Clone)]
pub struct Digest(Vec<u8>);

impl Digest {
    /// Takes ownership of digest bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Copies digest bytes
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    /// Digest bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` for a zero-length digest
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Releases the bytes; the caller becomes responsible for wiping them
    pub fn into_vec(mut self) -> Vec<u8> {
        core::mem::take(&mut self.0)
    }

    /// Lowercase hex encoding
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.0)
    }

    /// Constant-time comparison against raw bytes
    pub fn ct_eq(&self, other: &[u8]) -> bool {
        constant_time_eq(&self.0, other)
    }
}

impl Drop for Digest {
    fn drop(&mut self) {
        fast_zeroize_vec(&mut self.0);
    }
}

impl PartialEq for Digest {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(&other.0)
    }
}

impl Eq for Digest {}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Digest {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}
