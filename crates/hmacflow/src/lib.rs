// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC per RFC 2104 over any [`HashPrimitive`].
//!
//! `HMAC(K, m) = H((K' ⊕ opad) || H((K' ⊕ ipad) || m))`, where `K'` is the
//! key zero-padded to the block size, or the hash of the key when the key
//! is longer than one block.
//!
//! Two engines compute the same function:
//! - [`SequentialHmac`] runs key folding, inner hash and outer hash for one
//!   request at a time
//! - [`PipelinedHmac`] runs the three steps as concurrent stages linked by
//!   bounded queues, overlapping consecutive requests of a batch
//!
//! [`Hmac`] picks one from an [`HmacConfig`] at construction time.
//!
//! Key bytes, padded keys and inner digests are wiped as soon as they are
//! consumed.
//!
//! References:
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>
//! - RFC 4231: Identifiers and Test Vectors for HMAC-SHA-224, HMAC-SHA-256,
//!   HMAC-SHA-384, and HMAC-SHA-512
//!   <https://datatracker.ietf.org/doc/html/rfc4231>

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod config;
mod engine;
mod error;
mod mac;
mod pads;
mod pipeline;
mod request;
mod sequential;
mod stages;

pub use config::{HmacConfig, Strategy};
pub use engine::HmacEngine;
pub use error::HmacError;
pub use mac::{Hmac, hmac, min_truncated_len};
pub use pads::{IPAD, OPAD, Pad, PaddedKeys, compute_pads};
pub use pipeline::{PipelinedHmac, Stage};
pub use request::HmacRequest;
pub use sequential::SequentialHmac;

pub use hmacflow_core::{Digest, HashError, HashPrimitive, WordStream, WordWidth};
pub use hmacflow_hash::{Md5, Sha1, Sha224, Sha256, Sha384, Sha512};

/// HMAC-MD5 (RFC 2104)
pub type HmacMd5 = Hmac<Md5>;
/// HMAC-SHA1 (RFC 2104)
pub type HmacSha1 = Hmac<Sha1>;
/// HMAC-SHA224 (RFC 4231)
pub type HmacSha224 = Hmac<Sha224>;
/// HMAC-SHA256 (RFC 4231)
pub type HmacSha256 = Hmac<Sha256>;
/// HMAC-SHA384 (RFC 4231)
pub type HmacSha384 = Hmac<Sha384>;
/// HMAC-SHA512 (RFC 4231)
pub type HmacSha512 = Hmac<Sha512>;
