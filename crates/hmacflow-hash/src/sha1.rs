// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-1 per RFC 3174 (kept for HMAC-SHA1 interoperability only)

use hmacflow_core::{Digest, HashError, HashPrimitive, WordStream};
use hmacflow_util::{fast_zeroize_slice, load_u32_be, store_u32_be};

use crate::md::{Compressor, digest_words};

const H0: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

const K: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];

pub(crate) struct Sha1Core {
    h: [u32; 5],
}

impl Compressor for Sha1Core {
    const BLOCK_LEN: usize = 64;
    const LEN_FIELD: usize = 8;
    const BIG_ENDIAN_LEN: bool = true;

    fn compress(&mut self, block: &[u8]) {
        let mut w = [0u32; 80];

        for (t, word) in w.iter_mut().take(16).enumerate() {
            *word = load_u32_be(block, t * 4);
        }
        for t in 16..80 {
            w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
        }

        let [mut a, mut b, mut c, mut d, mut e] = self.h;

        for (t, wt) in w.iter().enumerate() {
            let (f, k) = match t / 20 {
                0 => ((b & c) | (!b & d), K[0]),
                1 => (b ^ c ^ d, K[1]),
                2 => ((b & c) | (b & d) | (c & d), K[2]),
                _ => (b ^ c ^ d, K[3]),
            };

            let temp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(k)
                .wrapping_add(*wt);

            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }

        for (hi, v) in self.h.iter_mut().zip([a, b, c, d, e]) {
            *hi = hi.wrapping_add(v);
        }

        fast_zeroize_slice(&mut w);
    }

    fn write_digest(&self, out: &mut [u8]) {
        for (i, word) in self.h.iter().take(out.len() / 4).enumerate() {
            store_u32_be(out, i * 4, *word);
        }
    }

    fn wipe(&mut self) {
        fast_zeroize_slice(&mut self.h);
    }
}

/// SHA-1: 64-byte blocks, 20-byte digest
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha1;

impl HashPrimitive for Sha1 {
    const NAME: &'static str = "sha1";
    const BLOCK_LEN: usize = 64;
    const DIGEST_LEN: usize = 20;

    fn hash(&self, message: &WordStream, total_len: usize) -> Result<Digest, HashError> {
        digest_words(Sha1Core { h: H0 }, Self::DIGEST_LEN, message, total_len)
    }
}
