// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::marker::PhantomData;

use hmacflow_core::{Digest, HashPrimitive, WordStream, WordWidth};
use hmacflow_util::constant_time_eq;

use crate::config::{HmacConfig, Strategy};
use crate::engine::HmacEngine;
use crate::error::HmacError;
use crate::pipeline::PipelinedHmac;
use crate::request::HmacRequest;
use crate::sequential::SequentialHmac;

/// Shortest truncated tag accepted by [`Hmac::verify_truncated`]
/// (RFC 2104 §5): half the digest, and never under 80 bits.
pub const fn min_truncated_len(digest_len: usize) -> usize {
    let half = digest_len / 2;
    let floor = if half > 10 { half } else { 10 };
    if floor < digest_len { floor } else { digest_len }
}

/// HMAC over primitive `H`, with the execution strategy picked from an
/// [`HmacConfig`].
///
/// # Example
///
/// ```
/// use hmacflow::{HmacConfig, HmacSha256, Sha256, Strategy};
///
/// let config = HmacConfig::default().with_strategy(Strategy::Pipelined);
/// let mac = HmacSha256::new(Sha256, &config)?;
///
/// let tag = mac.compute(b"key", b"message")?;
/// mac.verify(b"key", b"message", tag.as_bytes())?;
/// # Ok::<(), hmacflow::HmacError>(())
/// ```
pub struct Hmac<H> {
    engine: Box<dyn HmacEngine>,
    _hash: PhantomData<fn() -> H>,
}

impl<H: HashPrimitive + 'static> Hmac<H> {
    /// Builds the engine selected by `config.strategy`.
    ///
    /// # Errors
    /// See [`HmacConfig::validate`].
    pub fn new(hash: H, config: &HmacConfig) -> Result<Self, HmacError> {
        let engine: Box<dyn HmacEngine> = match config.strategy {
            Strategy::Sequential => Box::new(SequentialHmac::new(hash, config)?),
            Strategy::Pipelined => Box::new(PipelinedHmac::new(hash, config)?),
        };
        Ok(Self {
            engine,
            _hash: PhantomData,
        })
    }

    /// Execution strategy in use
    pub fn strategy(&self) -> Strategy {
        self.engine.strategy()
    }

    /// Word width in use
    pub fn word_width(&self) -> WordWidth {
        self.engine.word_width()
    }

    /// Tag length in bytes
    pub fn digest_len(&self) -> usize {
        H::DIGEST_LEN
    }

    /// HMAC of one (key, message) pair
    pub fn compute(&self, key: &[u8], message: &[u8]) -> Result<Digest, HmacError> {
        self.engine.compute(key, message)
    }

    /// HMAC of a key and message already packed into words.
    ///
    /// # Errors
    /// See [`HmacEngine::compute_words`].
    pub fn compute_words(
        &self,
        key: &WordStream,
        key_len: usize,
        message: &WordStream,
        message_len: usize,
    ) -> Result<Digest, HmacError> {
        self.engine.compute_words(key, key_len, message, message_len)
    }

    /// HMACs of a batch, in request order
    pub fn compute_batch(&self, requests: Vec<HmacRequest>) -> Result<Vec<Digest>, HmacError> {
        self.engine.compute_batch(requests)
    }

    /// Checks a full-length tag in constant time.
    ///
    /// # Errors
    /// - `HmacError::InvalidTagLength` unless `tag` is exactly `D` bytes
    /// - `HmacError::TagMismatch` if the tag is wrong
    pub fn verify(&self, key: &[u8], message: &[u8], tag: &[u8]) -> Result<(), HmacError> {
        if tag.len() != H::DIGEST_LEN {
            return Err(HmacError::InvalidTagLength {
                len: tag.len(),
                min: H::DIGEST_LEN,
                max: H::DIGEST_LEN,
            });
        }
        let expected = self.compute(key, message)?;
        if expected.ct_eq(tag) {
            Ok(())
        } else {
            Err(HmacError::TagMismatch)
        }
    }

    /// Checks a tag truncated to its leftmost bytes.
    ///
    /// # Errors
    /// - `HmacError::InvalidTagLength` unless
    ///   `min_truncated_len(D) <= tag.len() <= D`
    /// - `HmacError::TagMismatch` if the tag is wrong
    pub fn verify_truncated(
        &self,
        key: &[u8],
        message: &[u8],
        tag: &[u8],
    ) -> Result<(), HmacError> {
        let min = min_truncated_len(H::DIGEST_LEN);
        if tag.len() < min || tag.len() > H::DIGEST_LEN {
            return Err(HmacError::InvalidTagLength {
                len: tag.len(),
                min,
                max: H::DIGEST_LEN,
            });
        }
        let expected = self.compute(key, message)?;
        if constant_time_eq(&expected.as_bytes()[..tag.len()], tag) {
            Ok(())
        } else {
            Err(HmacError::TagMismatch)
        }
    }
}

impl<H: HashPrimitive> fmt::Debug for Hmac<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hmac")
            .field("primitive", &H::NAME)
            .field("strategy", &self.engine.strategy())
            .field("width_bits", &self.engine.word_width().bits())
            .finish()
    }
}

/// One-shot HMAC with the default configuration.
///
/// # Example
///
/// ```
/// use hmacflow::{Md5, hmac};
///
/// let tag = hmac::<Md5>(b"Jefe", b"what do ya want for nothing?")?;
/// assert_eq!(tag.to_hex(), "750c783e6ab0b503eaa86e310a5db738");
/// # Ok::<(), hmacflow::HmacError>(())
/// ```
pub fn hmac<H: HashPrimitive + Default>(key: &[u8], message: &[u8]) -> Result<Digest, HmacError> {
    SequentialHmac::new(H::default(), &HmacConfig::default())?.compute(key, message)
}
