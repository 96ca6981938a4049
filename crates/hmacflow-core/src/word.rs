// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-width word transport for key, pad and message bytes.
//!
//! Byte `k` of a logical stream sits in lane `k % W` of word `k / W`, with
//! lane 0 holding the earliest byte. The last word is zero-filled past the
//! final meaningful byte. How many of those bytes count is never inferred
//! from the words: it always travels alongside as an explicit byte length.

use core::fmt;
use core::slice::Chunks;

use hmacflow_util::fast_zeroize_vec;

use crate::error::HashError;

/// Width of one transport word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordWidth {
    bytes: usize,
}

impl WordWidth {
    /// Widest supported word, in bits
    pub const MAX_BITS: usize = 512;

    /// 32-bit words
    pub const W32: Self = Self { bytes: 4 };
    /// 64-bit words
    pub const W64: Self = Self { bytes: 8 };
    /// 128-bit words
    pub const W128: Self = Self { bytes: 16 };
    /// 256-bit words
    pub const W256: Self = Self { bytes: 32 };
    /// 512-bit words
    pub const W512: Self = Self { bytes: 64 };

    /// Creates a width from a bit count.
    ///
    /// # Errors
    /// `HashError::InvalidWordWidth` unless `bits` is a non-zero multiple of 8
    /// no larger than [`WordWidth::MAX_BITS`].
    pub fn new(bits: usize) -> Result<Self, HashError> {
        if bits == 0 || bits % 8 != 0 || bits > Self::MAX_BITS {
            return Err(HashError::InvalidWordWidth { bits });
        }
        Ok(Self { bytes: bits / 8 })
    }

    /// Width in bits
    pub const fn bits(self) -> usize {
        self.bytes * 8
    }

    /// Width in bytes
    pub const fn bytes(self) -> usize {
        self.bytes
    }

    /// Number of words needed to carry `len_bytes` bytes
    pub const fn words_for(self, len_bytes: usize) -> usize {
        len_bytes.div_ceil(self.bytes)
    }
}

impl Default for WordWidth {
    fn default() -> Self {
        Self::W64
    }
}

/// Sequence of fixed-width words, zeroized on drop.
#[derive(Clone)]
pub struct WordStream {
    width: WordWidth,
    buf: Vec<u8>,
    filled: usize,
}

impl WordStream {
    /// Empty stream of the given width
    pub fn new(width: WordWidth) -> Self {
        Self {
            width,
            buf: Vec::new(),
            filled: 0,
        }
    }

    /// Empty stream with room for `len_bytes` bytes without reallocating
    pub fn with_capacity(width: WordWidth, len_bytes: usize) -> Self {
        Self {
            width,
            buf: Vec::with_capacity(width.words_for(len_bytes) * width.bytes()),
            filled: 0,
        }
    }

    /// Packs `bytes` into words
    pub fn from_bytes(width: WordWidth, bytes: &[u8]) -> Self {
        let mut stream = Self::with_capacity(width, bytes.len());
        stream.push_bytes(bytes);
        stream
    }

    /// Wraps words that were packed by the caller.
    ///
    /// `words` is the flat concatenation of whole words, lane 0 first.
    ///
    /// # Errors
    /// `HashError::MisalignedWords` if `words.len()` is not a multiple of the width.
    pub fn from_words(width: WordWidth, words: &[u8]) -> Result<Self, HashError> {
        if words.len() % width.bytes() != 0 {
            return Err(HashError::MisalignedWords {
                len: words.len(),
                width_bits: width.bits(),
            });
        }
        Ok(Self {
            width,
            buf: words.to_vec(),
            filled: words.len(),
        })
    }

    /// Appends bytes directly after the last byte pushed so far.
    ///
    /// A partially filled last word keeps filling before a new word starts.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }

        let end = self.filled + bytes.len();
        let padded = self.width.words_for(end) * self.width.bytes();
        if padded > self.buf.len() {
            if padded > self.buf.capacity() {
                self.grow(padded);
            }
            self.buf.resize(padded, 0);
        }

        self.buf[self.filled..end].copy_from_slice(bytes);
        self.filled = end;
    }

    // Moves to a larger allocation, wiping the old one instead of leaving
    // it to the allocator.
    fn grow(&mut self, min_capacity: usize) {
        let mut next = Vec::with_capacity(min_capacity.max(self.buf.capacity() * 2));
        next.extend_from_slice(&self.buf);
        fast_zeroize_vec(&mut self.buf);
        self.buf = next;
    }

    /// Word width
    pub fn width(&self) -> WordWidth {
        self.width
    }

    /// Number of words carried
    pub fn word_count(&self) -> usize {
        self.buf.len() / self.width.bytes()
    }

    /// Iterates over whole words, lane 0 first
    pub fn words(&self) -> Chunks<'_, u8> {
        self.buf.chunks(self.width.bytes())
    }

    /// Selects the first `total_len` bytes as the message.
    ///
    /// # Errors
    /// `HashError::LengthMismatch` unless the stream carries exactly
    /// `ceil(total_len / W)` words.
    pub fn meaningful(&self, total_len: usize) -> Result<Meaningful<'_>, HashError> {
        let words = self.word_count();
        if words != self.width.words_for(total_len) {
            return Err(HashError::LengthMismatch {
                declared: total_len,
                words,
                width_bits: self.width.bits(),
            });
        }
        Ok(Meaningful {
            bytes: &self.buf[..total_len],
            width: self.width,
        })
    }
}

impl Drop for WordStream {
    fn drop(&mut self) {
        fast_zeroize_vec(&mut self.buf);
    }
}

impl fmt::Debug for WordStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordStream")
            .field("width_bits", &self.width.bits())
            .field("words", &self.word_count())
            .finish_non_exhaustive()
    }
}

/// Meaningful bytes of a [`WordStream`] under a declared length.
#[derive(Clone, Copy)]
pub struct Meaningful<'a> {
    bytes: &'a [u8],
    width: WordWidth,
}

impl<'a> Meaningful<'a> {
    /// Declared length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` for a zero-length message
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Words in arrival order; the last one stops at the declared length
    pub fn words(&self) -> Chunks<'a, u8> {
        self.bytes.chunks(self.width.bytes())
    }

    /// All meaningful bytes as one slice
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}
