// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Mock hash primitives for hmacflow tests.
//!
//! All mocks honor the word-stream length contract, so a length bug in
//! the code under test surfaces as `HashError::LengthMismatch` instead of a
//! silently wrong digest.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use hmacflow_core::{Digest, HashError, HashPrimitive, WordStream};

/// Sum of all message bytes modulo 2^128, as 16 big-endian bytes.
pub fn sum_digest(bytes: &[u8]) -> [u8; 16] {
    bytes
        .iter()
        .fold(0u128, |acc, &b| acc.wrapping_add(b as u128))
        .to_be_bytes()
}

/// Toy primitive: `B = 64`, 128-bit digest, `H(m) = sum(m) mod 2^128`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SumHash;

impl HashPrimitive for SumHash {
    const NAME: &'static str = "sum128";
    const BLOCK_LEN: usize = 64;
    const DIGEST_LEN: usize = 16;

    fn hash(&self, message: &WordStream, total_len: usize) -> Result<Digest, HashError> {
        let m = message.meaningful(total_len)?;
        Ok(Digest::from_slice(&sum_digest(m.as_bytes())))
    }
}

/// Returns [`FixedHash::OUTPUT`] for every input and counts invocations.
#[derive(Debug, Default)]
pub struct FixedHash {
    calls: AtomicUsize,
}

impl FixedHash {
    /// The digest every call returns
    pub const OUTPUT: [u8; 16] = [
        0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
        0x10,
    ];

    /// Number of `hash` calls so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl HashPrimitive for FixedHash {
    const NAME: &'static str = "fixed128";
    const BLOCK_LEN: usize = 64;
    const DIGEST_LEN: usize = 16;

    fn hash(&self, message: &WordStream, total_len: usize) -> Result<Digest, HashError> {
        message.meaningful(total_len)?;
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Digest::from_slice(&Self::OUTPUT))
    }
}

/// [`SumHash`] that fails with `HashError::Backend` on selected inputs.
#[derive(Debug, Clone, Copy)]
pub struct FailingHash {
    on_length: Option<usize>,
}

impl FailingHash {
    /// Message used in the injected `HashError::Backend`
    pub const REASON: &'static str = "injected failure";

    /// Fails every call
    pub fn always() -> Self {
        Self { on_length: None }
    }

    /// Fails only calls whose declared length is `len` bytes
    pub fn on_length(len: usize) -> Self {
        Self {
            on_length: Some(len),
        }
    }

    /// The error this mock produces
    pub fn error() -> HashError {
        HashError::Backend(Self::REASON.to_string())
    }
}

impl Default for FailingHash {
    fn default() -> Self {
        Self::always()
    }
}

impl HashPrimitive for FailingHash {
    const NAME: &'static str = "failing";
    const BLOCK_LEN: usize = 64;
    const DIGEST_LEN: usize = 16;

    fn hash(&self, message: &WordStream, total_len: usize) -> Result<Digest, HashError> {
        match self.on_length {
            Some(len) if len != total_len => SumHash.hash(message, total_len),
            _ => Err(Self::error()),
        }
    }
}

/// [`SumHash`] that records the meaningful bytes of every call.
#[derive(Debug, Default)]
pub struct RecordingHash {
    inputs: Mutex<Vec<Vec<u8>>>,
}

impl RecordingHash {
    /// Inputs seen so far, in call order
    pub fn inputs(&self) -> Vec<Vec<u8>> {
        self.inputs
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl HashPrimitive for RecordingHash {
    const NAME: &'static str = "recording-sum128";
    const BLOCK_LEN: usize = 64;
    const DIGEST_LEN: usize = 16;

    fn hash(&self, message: &WordStream, total_len: usize) -> Result<Digest, HashError> {
        let m = message.meaningful(total_len)?;
        self.inputs
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(m.as_bytes().to_vec());
        Ok(Digest::from_slice(&sum_digest(m.as_bytes())))
    }
}

/// Misconfigured primitive whose digest is wider than its block.
#[derive(Debug, Clone, Copy, Default)]
pub struct OversizedHash;

impl HashPrimitive for OversizedHash {
    const NAME: &'static str = "oversized";
    const BLOCK_LEN: usize = 16;
    const DIGEST_LEN: usize = 32;

    fn hash(&self, message: &WordStream, total_len: usize) -> Result<Digest, HashError> {
        message.meaningful(total_len)?;
        Ok(Digest::new(vec![0u8; Self::DIGEST_LEN]))
    }
}

/// Misconfigured primitive with a zero-length block.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyBlockHash;

impl HashPrimitive for EmptyBlockHash {
    const NAME: &'static str = "empty-block";
    const BLOCK_LEN: usize = 0;
    const DIGEST_LEN: usize = 0;

    fn hash(&self, message: &WordStream, total_len: usize) -> Result<Digest, HashError> {
        message.meaningful(total_len)?;
        Ok(Digest::new(Vec::new()))
    }
}
