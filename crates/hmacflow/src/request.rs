// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use hmacflow_util::fast_zeroize_vec;

/// Key bytes, wiped on drop.
pub(crate) struct KeyBytes(Vec<u8>);

impl KeyBytes {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Drop for KeyBytes {
    fn drop(&mut self) {
        fast_zeroize_vec(&mut self.0);
    }
}

/// One owned (key, message) pair of a batch.
///
/// The key is wiped when the request, or the stage holding its key, is dropped.
pub struct HmacRequest {
    pub(crate) key: KeyBytes,
    pub(crate) message: Vec<u8>,
}

impl HmacRequest {
    /// Takes ownership of key and message
    pub fn new(key: Vec<u8>, message: Vec<u8>) -> Self {
        Self {
            key: KeyBytes(key),
            message,
        }
    }

    /// Copies key and message
    pub fn from_slices(key: &[u8], message: &[u8]) -> Self {
        Self::new(key.to_vec(), message.to_vec())
    }

    /// Key bytes
    pub fn key(&self) -> &[u8] {
        self.key.as_bytes()
    }

    /// Message bytes
    pub fn message(&self) -> &[u8] {
        &self.message
    }
}

impl fmt::Debug for HmacRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacRequest")
            .field("key_len", &self.key.0.len())
            .field("message_len", &self.message.len())
            .finish()
    }
}
