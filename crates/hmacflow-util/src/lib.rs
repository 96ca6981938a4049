// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte helpers shared by the hmacflow crates.
//!
//! - Bulk zeroization that the optimizer cannot elide
//! - Constant-time slice comparison for tag verification
//! - Hex encoding/decoding for digests and test vectors
//! - Endian-explicit word loads and stores used by the hash cores

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// Fast bulk zeroization that can be vectorized.
///
/// Uses `write_bytes` (memset) + volatile read to prevent the optimizer
/// from removing the zeroization.
///
/// # Example
///
/// ```
/// use hmacflow_util::fast_zeroize_slice;
///
/// let mut pad = [0x36u8; 64];
/// fast_zeroize_slice(&mut pad);
/// assert!(pad.iter().all(|&b| b == 0));
/// ```
#[inline(always)]
pub fn fast_zeroize_slice<T: Copy>(slice: &mut [T]) {
    if slice.is_empty() {
        return;
    }

    let byte_len = core::mem::size_of_val(slice);
    unsafe {
        core::ptr::write_bytes(slice.as_mut_ptr() as *mut u8, 0, byte_len);
        // Volatile read prevents the optimizer from removing the write_bytes
        core::ptr::read_volatile(slice.as_ptr() as *const u8);
    }
}

/// Fast bulk zeroization of a `Vec` including spare capacity.
///
/// Buffers that grew by pushing (message packing, batch queues) may have
/// left copies of earlier contents past `len`, so the whole allocation is
/// cleared, not only the active elements.
///
/// # Example
///
/// ```
/// use hmacflow_util::{fast_zeroize_vec, is_slice_zeroized};
///
/// let mut key = vec![0xAAu8; 100];
/// key.truncate(10);
///
/// fast_zeroize_vec(&mut key);
/// assert!(is_slice_zeroized(&key));
/// ```
#[inline(always)]
pub fn fast_zeroize_vec<T: Copy>(vec: &mut Vec<T>) {
    if vec.capacity() == 0 {
        return;
    }

    let byte_len = vec.capacity() * core::mem::size_of::<T>();
    unsafe {
        core::ptr::write_bytes(vec.as_mut_ptr() as *mut u8, 0, byte_len);
        core::ptr::read_volatile(vec.as_ptr() as *const u8);
    }
}

/// Returns `true` if every byte of `slice` is zero.
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Constant-time equality comparison for byte slices.
///
/// The comparison time depends only on the lengths, never on where the
/// first difference occurs. Slices of different lengths compare unequal.
///
/// # Example
///
/// ```
/// use hmacflow_util::constant_time_eq;
///
/// assert!(constant_time_eq(&[1, 2, 3], &[1, 2, 3]));
/// assert!(!constant_time_eq(&[1, 2, 3], &[1, 2, 4]));
/// assert!(!constant_time_eq(&[1, 2, 3], &[1, 2]));
/// ```
#[inline(never)]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let diff = a
        .iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y));

    // Keep the accumulator opaque so the fold is not short-circuited
    unsafe { core::ptr::read_volatile(&diff) == 0 }
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Encodes bytes as lowercase hex.
///
/// # Example
///
/// ```
/// use hmacflow_util::bytes_to_hex;
///
/// assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
/// ```
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(HEX_DIGITS[(b >> 4) as usize] as char);
        out.push(HEX_DIGITS[(b & 0x0f) as usize] as char);
    }
    out
}

#[inline(always)]
fn hex_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parses a hexadecimal string into bytes.
///
/// Returns `None` on odd length or on any non-hex character.
///
/// # Example
///
/// ```
/// use hmacflow_util::try_hex_to_bytes;
///
/// assert_eq!(try_hex_to_bytes("0b0B"), Some(vec![0x0b, 0x0b]));
/// assert_eq!(try_hex_to_bytes("abc"), None);
/// assert_eq!(try_hex_to_bytes("zz"), None);
/// ```
pub fn try_hex_to_bytes(hex: &str) -> Option<Vec<u8>> {
    let raw = hex.as_bytes();
    if raw.len() % 2 != 0 {
        return None;
    }

    raw.chunks_exact(2)
        .map(|pair| Some((hex_nibble(pair[0])? << 4) | hex_nibble(pair[1])?))
        .collect()
}

/// Parses a hexadecimal string into bytes.
///
/// Meant for test vectors embedded in source.
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or has odd length.
///
/// # Example
///
/// ```
/// use hmacflow_util::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("deadbeef"), vec![0xde, 0xad, 0xbe, 0xef]);
/// ```
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    match try_hex_to_bytes(hex) {
        Some(bytes) => bytes,
        None => panic!("invalid hex string: {hex:?}"),
    }
}

/// Generates endian-explicit load/store helpers for a word type.
///
/// Loads read `$size` bytes starting at `offset`; stores write `$size`
/// bytes starting at `offset`. Out-of-range offsets panic like slice
/// indexing does.
macro_rules! impl_word_conversions {
    ($type:ty, $size:expr, $load_be:ident, $load_le:ident, $store_be:ident, $store_le:ident) => {
        #[doc = concat!("Reads a big-endian `", stringify!($type), "` from `bytes[offset..offset + ", stringify!($size), "]`.")]
        #[inline(always)]
        pub fn $load_be(bytes: &[u8], offset: usize) -> $type {
            let src = &bytes[offset..offset + $size];
            let mut value: $type = 0;
            for &b in src {
                value = (value << 8) | b as $type;
            }
            value
        }

        #[doc = concat!("Reads a little-endian `", stringify!($type), "` from `bytes[offset..offset + ", stringify!($size), "]`.")]
        #[inline(always)]
        pub fn $load_le(bytes: &[u8], offset: usize) -> $type {
            let src = &bytes[offset..offset + $size];
            let mut value: $type = 0;
            for (i, &b) in src.iter().enumerate() {
                value |= (b as $type) << (8 * i);
            }
            value
        }

        #[doc = concat!("Writes `value` big-endian into `out[offset..offset + ", stringify!($size), "]`.")]
        #[inline(always)]
        pub fn $store_be(out: &mut [u8], offset: usize, value: $type) {
            let dst = &mut out[offset..offset + $size];
            for (i, byte) in dst.iter_mut().enumerate() {
                *byte = (value >> (8 * ($size - 1 - i))) as u8;
            }
        }

        #[doc = concat!("Writes `value` little-endian into `out[offset..offset + ", stringify!($size), "]`.")]
        #[inline(always)]
        pub fn $store_le(out: &mut [u8], offset: usize, value: $type) {
            let dst = &mut out[offset..offset + $size];
            for (i, byte) in dst.iter_mut().enumerate() {
                *byte = (value >> (8 * i)) as u8;
            }
        }
    };
}

impl_word_conversions!(u32, 4, load_u32_be, load_u32_le, store_u32_be, store_u32_le);
impl_word_conversions!(u64, 8, load_u64_be, load_u64_le, store_u64_be, store_u64_le);
