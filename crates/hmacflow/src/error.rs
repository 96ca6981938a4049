// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use hmacflow_core::HashError;
use thiserror::Error;

use crate::pipeline::Stage;

/// HMAC error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HmacError {
    /// Digest wider than the block; the folded key would not fit
    #[error("{primitive}: digest of {digest_len} bytes exceeds block of {block_len} bytes")]
    DigestExceedsBlock {
        /// Primitive name
        primitive: &'static str,
        /// Digest length in bytes
        digest_len: usize,
        /// Block length in bytes
        block_len: usize,
    },

    /// Primitive declares a zero-length block
    #[error("{primitive}: block length is zero")]
    EmptyBlock {
        /// Primitive name
        primitive: &'static str,
    },

    /// Pipelined queues need room for at least one item
    #[error("queue depth must be at least 1")]
    InvalidQueueDepth,

    /// Caller supplied an argument the engine cannot use
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Declared key or message length disagrees with the words supplied
    #[error(
        "{field} length of {declared} bytes does not match {words} words of {width_bits} bits"
    )]
    InvalidLength {
        /// `"key"` or `"message"`
        field: &'static str,
        /// Declared length in bytes
        declared: usize,
        /// Words supplied
        words: usize,
        /// Word width in bits
        width_bits: usize,
    },

    /// Tag to verify is too short or longer than the digest
    #[error("tag length {len} outside {min}..={max}")]
    InvalidTagLength {
        /// Supplied tag length
        len: usize,
        /// Shortest accepted tag
        min: usize,
        /// Digest length
        max: usize,
    },

    /// Computed MAC differs from the supplied tag
    #[error("tag mismatch")]
    TagMismatch,

    /// A stage stopped because a neighbouring stage went away
    #[error("pipeline aborted at stage {stage}")]
    PipelineAborted {
        /// Stage that observed the abort
        stage: Stage,
    },

    /// A stage thread panicked
    #[error("pipeline stage {stage} panicked")]
    StagePanicked {
        /// Stage that panicked
        stage: Stage,
    },

    /// Failure of the hash primitive, passed through unchanged
    #[error(transparent)]
    Hash(#[from] HashError),
}

impl HmacError {
    /// Attributes a word-stream length mismatch to `field`.
    pub(crate) fn from_length(field: &'static str, err: HashError) -> Self {
        match err {
            HashError::LengthMismatch {
                declared,
                words,
                width_bits,
            } => Self::InvalidLength {
                field,
                declared,
                words,
                width_bits,
            },
            other => Self::Hash(other),
        }
    }

    /// `true` for errors that only echo a failure elsewhere in the pipeline
    pub(crate) fn is_abort(&self) -> bool {
        matches!(self, Self::PipelineAborted { .. })
    }
}
