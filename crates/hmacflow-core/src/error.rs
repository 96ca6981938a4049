// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Hash primitive error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    /// Word width is zero, not a whole number of bytes, or wider than 512 bits
    #[error("invalid word width: {bits} bits")]
    InvalidWordWidth {
        /// Requested width in bits
        bits: usize,
    },

    /// Declared byte length does not match the number of words supplied
    #[error(
        "declared length of {declared} bytes needs a different word count than the {words} words of {width_bits} bits supplied"
    )]
    LengthMismatch {
        /// Declared length in bytes
        declared: usize,
        /// Words actually supplied
        words: usize,
        /// Word width in bits
        width_bits: usize,
    },

    /// Pre-packed word buffer is not a whole number of words
    #[error("buffer of {len} bytes is not a multiple of the {width_bits}-bit word width")]
    MisalignedWords {
        /// Buffer length in bytes
        len: usize,
        /// Word width in bits
        width_bits: usize,
    },

    /// Message length does not fit the primitive's length field
    #[error("message too long for the hash length field")]
    MessageTooLong,

    /// Failure reported by a primitive backend
    #[error("hash backend failure: {0}")]
    Backend(String),
}
