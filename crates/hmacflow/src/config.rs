// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Construction-time configuration of an HMAC engine

use core::fmt;

use hmacflow_core::{HashPrimitive, WordWidth};

use crate::error::HmacError;

/// Execution topology. Both produce identical digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Strategy {
    /// One request fully completes before the next starts
    #[default]
    Sequential,
    /// Key folding, inner hash and outer hash run as overlapping stages
    Pipelined,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => f.write_str("sequential"),
            Self::Pipelined => f.write_str("pipelined"),
        }
    }
}

/// HMAC engine configuration.
///
/// Fixed once an engine is built.
///
/// # Example
///
/// ```
/// use hmacflow::{HmacConfig, Sha256, Strategy};
///
/// let config = HmacConfig::default()
///     .with_strategy(Strategy::Pipelined)
///     .with_queue_depth(8);
/// assert!(config.validate::<Sha256>().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct HmacConfig {
    /// Width of the words key and message bytes travel in
    pub word_width_bits: usize,
    /// Execution topology
    pub strategy: Strategy,
    /// Capacity of every inter-stage queue (pipelined only)
    pub queue_depth: usize,
}

impl HmacConfig {
    /// Default word width
    pub const DEFAULT_WORD_WIDTH_BITS: usize = 64;
    /// Default inter-stage queue depth
    pub const DEFAULT_QUEUE_DEPTH: usize = 4;

    /// Sets the word width in bits
    pub fn with_word_width_bits(mut self, bits: usize) -> Self {
        self.word_width_bits = bits;
        self
    }

    /// Sets the execution topology
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the inter-stage queue depth
    pub fn with_queue_depth(mut self, depth: usize) -> Self {
        self.queue_depth = depth;
        self
    }

    /// Checks the configuration against primitive `H`.
    ///
    /// Returns the validated word width.
    ///
    /// # Errors
    /// - `HmacError::Hash(HashError::InvalidWordWidth)` for an unusable width
    /// - `HmacError::InvalidQueueDepth` for a zero queue depth
    /// - `HmacError::EmptyBlock` / `HmacError::DigestExceedsBlock` when `H`
    ///   itself cannot carry HMAC
    pub fn validate<H: HashPrimitive>(&self) -> Result<WordWidth, HmacError> {
        validate_primitive::<H>()?;
        let width = WordWidth::new(self.word_width_bits)?;
        if self.queue_depth == 0 {
            return Err(HmacError::InvalidQueueDepth);
        }
        Ok(width)
    }
}

impl Default for HmacConfig {
    fn default() -> Self {
        Self {
            word_width_bits: Self::DEFAULT_WORD_WIDTH_BITS,
            strategy: Strategy::default(),
            queue_depth: Self::DEFAULT_QUEUE_DEPTH,
        }
    }
}

/// Rejects primitives whose digest cannot be folded into one block.
pub(crate) fn validate_primitive<H: HashPrimitive>() -> Result<(), HmacError> {
    if H::BLOCK_LEN == 0 {
        return Err(HmacError::EmptyBlock { primitive: H::NAME });
    }
    if H::DIGEST_LEN > H::BLOCK_LEN {
        return Err(HmacError::DigestExceedsBlock {
            primitive: H::NAME,
            digest_len: H::DIGEST_LEN,
            block_len: H::BLOCK_LEN,
        });
    }
    Ok(())
}
