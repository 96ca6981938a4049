// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::digest::Digest;
use crate::error::HashError;
use crate::word::{WordStream, WordWidth};

/// A one-shot hash function that HMAC can be built on.
///
/// Implementations are stateless between calls, so one instance may be
/// shared by every stage of a pipeline.
///
/// # Contract
/// - `message` carries exactly `ceil(total_len / W)` words, checked with
///   [`WordStream::meaningful`]; anything else is rejected
/// - Exactly one digest of `DIGEST_LEN` bytes is produced per call
/// - The digest depends on the meaningful bytes only, never on `W`
pub trait HashPrimitive: Send + Sync {
    /// Short algorithm name, used in logs
    const NAME: &'static str;

    /// Compression block size in bytes (`B`)
    const BLOCK_LEN: usize;

    /// Digest size in bytes (`hshW / 8`)
    const DIGEST_LEN: usize;

    /// Hashes the first `total_len` bytes carried by `message`.
    ///
    /// # Errors
    /// `HashError::LengthMismatch` when `total_len` disagrees with the word
    /// count, or any failure of the primitive itself.
    fn hash(&self, message: &WordStream, total_len: usize) -> Result<Digest, HashError>;

    /// Packs `bytes` at `width` and hashes all of them.
    fn hash_bytes(&self, width: WordWidth, bytes: &[u8]) -> Result<Digest, HashError> {
        let stream = WordStream::from_bytes(width, bytes);
        self.hash(&stream, bytes.len())
    }
}
