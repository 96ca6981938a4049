// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-224 and SHA-256 per RFC 6234 Section 6.2

use hmacflow_core::{Digest, HashError, HashPrimitive, WordStream};
use hmacflow_util::{fast_zeroize_slice, load_u32_be, store_u32_be};

use crate::md::{Compressor, digest_words};

/// SHA-256 constants K per RFC 6234 Section 5.1
const K256: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// SHA-256 initial hash value H(0) per RFC 6234 Section 6.1
const H0_256: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// SHA-224 initial hash value H(0) per RFC 6234 Section 6.1
const H0_224: [u32; 8] = [
    0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939, 0xffc00b31, 0x68581511, 0x64f98fa7, 0xbefa4fa4,
];

const BLOCK_LEN: usize = 64;

#[inline(always)]
const fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
const fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
const fn bsig0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
const fn bsig1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
const fn ssig0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
const fn ssig1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// SHA-256 chaining value; SHA-224 differs only in H(0) and truncation.
pub(crate) struct Sha256Core {
    h: [u32; 8],
}

impl Sha256Core {
    fn with_iv(iv: [u32; 8]) -> Self {
        Self { h: iv }
    }
}

impl Compressor for Sha256Core {
    const BLOCK_LEN: usize = BLOCK_LEN;
    const LEN_FIELD: usize = 8;
    const BIG_ENDIAN_LEN: bool = true;

    fn compress(&mut self, block: &[u8]) {
        let mut w = [0u32; 64];

        // W[0..15] from block (big-endian)
        for (t, word) in w.iter_mut().take(16).enumerate() {
            *word = load_u32_be(block, t * 4);
        }
        // W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
        for t in 16..64 {
            w[t] = ssig1(w[t - 2])
                .wrapping_add(w[t - 7])
                .wrapping_add(ssig0(w[t - 15]))
                .wrapping_add(w[t - 16]);
        }

        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = self.h;

        for (k, wt) in K256.iter().zip(w.iter()) {
            let t1 = h
                .wrapping_add(bsig1(e))
                .wrapping_add(ch(e, f, g))
                .wrapping_add(*k)
                .wrapping_add(*wt);
            let t2 = bsig0(a).wrapping_add(maj(a, b, c));

            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(t1);
            d = c;
            c = b;
            b = a;
            a = t1.wrapping_add(t2);
        }

        for (hi, v) in self.h.iter_mut().zip([a, b, c, d, e, f, g, h]) {
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

/// SHA-256: 64-byte blocks, 32-byte digest
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256;

impl HashPrimitive for Sha256 {
    const NAME: &'static str = "sha256";
    const BLOCK_LEN: usize = BLOCK_LEN;
    const DIGEST_LEN: usize = 32;

    fn hash(&self, message: &WordStream, total_len: usize) -> Result<Digest, HashError> {
        digest_words(
            Sha256Core::with_iv(H0_256),
            Self::DIGEST_LEN,
            message,
            total_len,
        )
    }
}

/// SHA-224: 64-byte blocks, 28-byte digest
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha224;

impl HashPrimitive for Sha224 {
    const NAME: &'static str = "sha224";
    const BLOCK_LEN: usize = BLOCK_LEN;
    const DIGEST_LEN: usize = 28;

    fn hash(&self, message: &WordStream, total_len: usize) -> Result<Digest, HashError> {
        digest_words(
            Sha256Core::with_iv(H0_224),
            Self::DIGEST_LEN,
            message,
            total_len,
        )
    }
}
