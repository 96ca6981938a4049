// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use hmacflow_core::{Digest, WordStream, WordWidth};

use crate::config::Strategy;
use crate::error::HmacError;
use crate::request::HmacRequest;

/// Common surface of the sequential and pipelined engines.
///
/// Object safe, so [`crate::Hmac`] can hold either behind one pointer.
pub trait HmacEngine: Send + Sync {
    /// Execution topology
    fn strategy(&self) -> Strategy;

    /// Name of the hash primitive
    fn primitive(&self) -> &'static str;

    /// Digest length in bytes (`D`)
    fn digest_len(&self) -> usize;

    /// Block length in bytes (`B`)
    fn block_len(&self) -> usize;

    /// Width of the words fed to the primitive
    fn word_width(&self) -> WordWidth;

    /// HMAC of one (key, message) pair
    fn compute(&self, key: &[u8], message: &[u8]) -> Result<Digest, HmacError>;

    /// HMACs of a batch, in request order.
    ///
    /// On the first failure the whole batch fails with that error.
    fn compute_batch(&self, requests: Vec<HmacRequest>) -> Result<Vec<Digest>, HmacError>;

    /// HMAC of a key and message supplied as word streams.
    ///
    /// # Errors
    /// - `HmacError::InvalidArgument` if a stream's width differs from
    ///   [`Self::word_width`]
    /// - `HmacError::InvalidLength` if a declared length disagrees with the
    ///   stream's word count
    fn compute_words(
        &self,
        key: &WordStream,
        key_len: usize,
        message: &WordStream,
        message_len: usize,
    ) -> Result<Digest, HmacError> {
        let width = self.word_width();
        if key.width() != width {
            return Err(HmacError::InvalidArgument("key word width differs from engine"));
        }
        if message.width() != width {
            return Err(HmacError::InvalidArgument(
                "message word width differs from engine",
            ));
        }

        let key = key
            .meaningful(key_len)
            .map_err(|e| HmacError::from_length("key", e))?;
        let message = message
            .meaningful(message_len)
            .map_err(|e| HmacError::from_length("message", e))?;

        self.compute(key.as_bytes(), message.as_bytes())
    }
}
