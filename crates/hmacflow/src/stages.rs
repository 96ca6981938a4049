// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The two hash invocations shared by both engines.

use hmacflow_core::{Digest, HashError, HashPrimitive, WordStream, WordWidth};

use crate::pads::Pad;

/// `H((K' ⊕ ipad) || message)`, declared length `B + message.len()`.
pub(crate) fn inner_hash<H: HashPrimitive>(
    hash: &H,
    width: WordWidth,
    ipad: &Pad,
    message: &[u8],
) -> Result<Digest, HashError> {
    let total = ipad.len() + message.len();
    let mut stream = WordStream::with_capacity(width, total);
    stream.push_bytes(ipad.as_bytes());
    stream.push_bytes(message);
    hash.hash(&stream, total)
}

/// `H((K' ⊕ opad) || inner)`, declared length `B + D`.
pub(crate) fn outer_hash<H: HashPrimitive>(
    hash: &H,
    width: WordWidth,
    opad: &Pad,
    inner: &Digest,
) -> Result<Digest, HashError> {
    let total = opad.len() + inner.len();
    let mut stream = WordStream::with_capacity(width, total);
    stream.push_bytes(opad.as_bytes());
    stream.push_bytes(inner.as_bytes());
    hash.hash(&stream, total)
}
