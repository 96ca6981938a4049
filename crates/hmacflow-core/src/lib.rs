// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core contract between HMAC and the hash primitive it is built on.
//!
//! A primitive receives its message as a [`WordStream`] of fixed-width words
//! plus an explicit byte length, and answers with exactly one [`Digest`].
//! Lengths are always byte counts; word counts are derived from them.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod digest;
mod error;
mod traits;
mod word;

pub use digest::Digest;
pub use error::HashError;
pub use traits::HashPrimitive;
pub use word::{Meaningful, WordStream, WordWidth};
