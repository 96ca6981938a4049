// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use hmacflow_core::{Digest, HashPrimitive, WordWidth};
use tracing::{debug, warn};

use crate::config::{HmacConfig, Strategy, validate_primitive};
use crate::engine::HmacEngine;
use crate::error::HmacError;
use crate::pads::compute_pads;
use crate::request::HmacRequest;
use crate::stages::{inner_hash, outer_hash};

/// HMAC engine that finishes each request before starting the next.
///
/// # Example
///
/// ```
/// use hmacflow::{HmacConfig, Sha256, SequentialHmac};
///
/// let engine = SequentialHmac::new(Sha256, &HmacConfig::default())?;
/// let tag = engine.compute(b"key", b"The quick brown fox jumps over the lazy dog")?;
/// assert_eq!(
///     tag.to_hex(),
///     "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
/// );
/// # Ok::<(), hmacflow::HmacError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SequentialHmac<H> {
    hash: H,
    width: WordWidth,
}

impl<H: HashPrimitive> SequentialHmac<H> {
    /// Builds the engine; the config's strategy and queue depth are ignored.
    ///
    /// # Errors
    /// See [`HmacConfig::validate`].
    pub fn new(hash: H, config: &HmacConfig) -> Result<Self, HmacError> {
        let width = config.validate::<H>()?;
        debug!(
            primitive = H::NAME,
            strategy = %Strategy::Sequential,
            width_bits = width.bits(),
            "sequential hmac engine ready"
        );
        Ok(Self { hash, width })
    }

    /// Builds the engine at `width`.
    ///
    /// # Errors
    /// `HmacError::EmptyBlock` / `HmacError::DigestExceedsBlock` when `H`
    /// cannot carry HMAC.
    pub fn with_width(hash: H, width: WordWidth) -> Result<Self, HmacError> {
        validate_primitive::<H>()?;
        Ok(Self { hash, width })
    }

    /// The hash primitive
    pub fn hash(&self) -> &H {
        &self.hash
    }

    /// HMAC of one (key, message) pair
    pub fn compute(&self, key: &[u8], message: &[u8]) -> Result<Digest, HmacError> {
        let (ipad, opad) = compute_pads(&self.hash, self.width, key)?.split();
        let inner = inner_hash(&self.hash, self.width, &ipad, message)?;
        drop(ipad);
        Ok(outer_hash(&self.hash, self.width, &opad, &inner)?)
    }

    /// HMACs of a batch, in request order
    pub fn compute_batch(&self, requests: Vec<HmacRequest>) -> Result<Vec<Digest>, HmacError> {
        let count = requests.len();
        let mut out = Vec::with_capacity(count);

        for (index, request) in requests.into_iter().enumerate() {
            match self.compute(request.key(), request.message()) {
                Ok(digest) => out.push(digest),
                Err(err) => {
                    warn!(primitive = H::NAME, index, error = %err, "hmac batch failed");
                    return Err(err);
                }
            }
        }

        debug!(primitive = H::NAME, count, "hmac batch complete");
        Ok(out)
    }
}

impl<H: HashPrimitive> HmacEngine for SequentialHmac<H> {
    fn strategy(&self) -> Strategy {
        Strategy::Sequential
    }

    fn primitive(&self) -> &'static str {
        H::NAME
    }

    fn digest_len(&self) -> usize {
        H::DIGEST_LEN
    }

    fn block_len(&self) -> usize {
        H::BLOCK_LEN
    }

    fn word_width(&self) -> WordWidth {
        self.width
    }

    fn compute(&self, key: &[u8], message: &[u8]) -> Result<Digest, HmacError> {
        SequentialHmac::compute(self, key, message)
    }

    fn compute_batch(&self, requests: Vec<HmacRequest>) -> Result<Vec<Digest>, HmacError> {
        SequentialHmac::compute_batch(self, requests)
    }
}
