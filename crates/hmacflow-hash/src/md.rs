// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Merkle-Damgard buffering and padding shared by every primitive

use hmacflow_core::{Digest, HashError, WordStream};
use hmacflow_util::fast_zeroize_slice;

/// Largest block among the supported primitives (SHA-512)
const MAX_BLOCK_LEN: usize = 128;

/// Compression function of one primitive.
pub(crate) trait Compressor {
    /// Block size in bytes
    const BLOCK_LEN: usize;
    /// Size of the trailing bit-length field in bytes
    const LEN_FIELD: usize;
    /// Whether the bit length is encoded big-endian
    const BIG_ENDIAN_LEN: bool;

    /// Absorbs exactly one `BLOCK_LEN` block
    fn compress(&mut self, block: &[u8]);

    /// Writes the first `out.len()` bytes of the chaining value
    fn write_digest(&self, out: &mut [u8]);

    /// Clears the chaining value
    fn wipe(&mut self);
}

/// Streaming state: chaining value plus a partial block.
pub(crate) struct MdState<C: Compressor> {
    core: C,
    buffer: [u8; MAX_BLOCK_LEN],
    buffer_len: usize,
    total_len: u128,
}

impl<C: Compressor> MdState<C> {
    pub fn new(core: C) -> Self {
        debug_assert!(C::BLOCK_LEN <= MAX_BLOCK_LEN);
        Self {
            core,
            buffer: [0u8; MAX_BLOCK_LEN],
            buffer_len: 0,
            total_len: 0,
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        let block_len = C::BLOCK_LEN;
        let mut offset = 0;
        self.total_len += data.len() as u128;

        // Top up a partial block first
        if self.buffer_len > 0 {
            let copy_len = core::cmp::min(block_len - self.buffer_len, data.len());
            self.buffer[self.buffer_len..self.buffer_len + copy_len]
                .copy_from_slice(&data[..copy_len]);
            self.buffer_len += copy_len;
            offset = copy_len;

            if self.buffer_len == block_len {
                self.core.compress(&self.buffer[..block_len]);
                fast_zeroize_slice(&mut self.buffer);
                self.buffer_len = 0;
            }
        }

        while offset + block_len <= data.len() {
            self.core.compress(&data[offset..offset + block_len]);
            offset += block_len;
        }

        if offset < data.len() {
            let remaining = data.len() - offset;
            self.buffer[..remaining].copy_from_slice(&data[offset..]);
            self.buffer_len = remaining;
        }
    }

    /// Pads, absorbs the final block(s) and writes the digest.
    ///
    /// # Errors
    /// `HashError::MessageTooLong` if the bit length overflows the length field.
    pub fn finalize(mut self, out: &mut [u8]) -> Result<(), HashError> {
        let block_len = C::BLOCK_LEN;
        let len_start = block_len - C::LEN_FIELD;

        let bit_len = self
            .total_len
            .checked_mul(8)
            .ok_or(HashError::MessageTooLong)?;
        let overflow = bit_len.checked_shr((C::LEN_FIELD * 8) as u32).unwrap_or(0);
        if overflow != 0 {
            return Err(HashError::MessageTooLong);
        }

        self.buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        // No room left for the length field
        if self.buffer_len > len_start {
            self.buffer[self.buffer_len..block_len].fill(0);
            self.core.compress(&self.buffer[..block_len]);
            self.buffer_len = 0;
        }

        self.buffer[self.buffer_len..len_start].fill(0);

        if C::BIG_ENDIAN_LEN {
            let encoded = bit_len.to_be_bytes();
            self.buffer[len_start..block_len].copy_from_slice(&encoded[16 - C::LEN_FIELD..]);
        } else {
            let encoded = bit_len.to_le_bytes();
            self.buffer[len_start..block_len].copy_from_slice(&encoded[..C::LEN_FIELD]);
        }

        self.core.compress(&self.buffer[..block_len]);
        self.core.write_digest(out);
        Ok(())
    }
}

impl<C: Compressor> Drop for MdState<C> {
    fn drop(&mut self) {
        fast_zeroize_slice(&mut self.buffer);
        self.buffer_len = 0;
        self.total_len = 0;
        self.core.wipe();
    }
}

/// Runs one primitive over the meaningful words of `message`.
pub(crate) fn digest_words<C: Compressor>(
    core: C,
    digest_len: usize,
    message: &WordStream,
    total_len: usize,
) -> Result<Digest, HashError> {
    let meaningful = message.meaningful(total_len)?;

    let mut state = MdState::new(core);
    for word in meaningful.words() {
        state.update(word);
    }

    let mut out = vec![0u8; digest_len];
    state.finalize(&mut out)?;
    Ok(Digest::new(out))
}
