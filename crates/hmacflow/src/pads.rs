// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Key folding (RFC 2104 §2, steps 1-2 and 5).

use core::fmt;

use hmacflow_core::{HashPrimitive, WordWidth};
use hmacflow_util::fast_zeroize_vec;

use crate::error::HmacError;

/// Inner pad byte
pub const IPAD: u8 = 0x36;
/// Outer pad byte
pub const OPAD: u8 = 0x5c;

/// One block-sized padded key. Wiped on drop.
pub struct Pad(Vec<u8>);

impl Pad {
    /// Padded key bytes (`B` of them)
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` only for a zero-block primitive, which never validates
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Drop for Pad {
    fn drop(&mut self) {
        fast_zeroize_vec(&mut self.0);
    }
}

impl fmt::Debug for Pad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pad")
            .field("len", &self.0.len())
            .finish_non_exhaustive()
    }
}

/// `K' ⊕ ipad` and `K' ⊕ opad` for one key.
#[derive(Debug)]
pub struct PaddedKeys {
    ipad: Pad,
    opad: Pad,
}

impl PaddedKeys {
    /// `K' ⊕ ipad`
    pub fn ipad(&self) -> &Pad {
        &self.ipad
    }

    /// `K' ⊕ opad`
    pub fn opad(&self) -> &Pad {
        &self.opad
    }

    /// Hands each pad to the stage that consumes it
    pub fn split(self) -> (Pad, Pad) {
        (self.ipad, self.opad)
    }
}

/// Derives both padded keys from a raw key.
///
/// Keys longer than `H::BLOCK_LEN` are replaced by their hash first; shorter
/// keys are right-padded with zeros.
///
/// # Errors
/// - Any failure of `hash` while folding a long key
/// - `HmacError::DigestExceedsBlock` if the folded key does not fit a block
///
/// # Example
///
/// ```
/// use hmacflow::{IPAD, OPAD, Sha256, WordWidth, compute_pads};
///
/// let pads = compute_pads(&Sha256, WordWidth::W64, b"key")?;
/// assert_eq!(pads.ipad().len(), 64);
/// assert_eq!(pads.ipad().as_bytes()[0], b'k' ^ IPAD);
/// assert_eq!(pads.opad().as_bytes()[63], OPAD);
/// # Ok::<(), hmacflow::HmacError>(())
/// ```
pub fn compute_pads<H: HashPrimitive>(
    hash: &H,
    width: WordWidth,
    key: &[u8],
) -> Result<PaddedKeys, HmacError> {
    let block_len = H::BLOCK_LEN;

    let mut folded = if key.len() > block_len {
        hash.hash_bytes(width, key)?.into_vec()
    } else {
        key.to_vec()
    };

    if folded.len() > block_len {
        let digest_len = folded.len();
        fast_zeroize_vec(&mut folded);
        return Err(HmacError::DigestExceedsBlock {
            primitive: H::NAME,
            digest_len,
            block_len,
        });
    }

    let mut ipad = vec![IPAD; block_len];
    let mut opad = vec![OPAD; block_len];
    for (i, &k) in folded.iter().enumerate() {
        ipad[i] ^= k;
        opad[i] ^= k;
    }
    fast_zeroize_vec(&mut folded);

    Ok(PaddedKeys {
        ipad: Pad(ipad),
        opad: Pad(opad),
    })
}
