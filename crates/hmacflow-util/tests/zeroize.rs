// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod zeroize_tests {
    use hmacflow_util::{fast_zeroize_slice, fast_zeroize_vec, is_slice_zeroized};

    #[test]
    fn test_fast_zeroize_slice_bytes() {
        let mut ipad = [0x36u8; 128];
        fast_zeroize_slice(&mut ipad);
        assert!(is_slice_zeroized(&ipad));
    }

    #[test]
    fn test_fast_zeroize_slice_words() {
        let mut state = [0xdead_beefu32; 8];
        fast_zeroize_slice(&mut state);
        assert!(state.iter().all(|&w| w == 0));
    }

    #[test]
    fn test_fast_zeroize_slice_empty() {
        let mut empty: [u8; 0] = [];
        fast_zeroize_slice(&mut empty);
        assert!(is_slice_zeroized(&empty));
    }

    #[test]
    fn test_fast_zeroize_vec_clears_spare_capacity() {
        let mut key = vec![0xAAu8; 64];
        key.truncate(3);
        fast_zeroize_vec(&mut key);

        assert!(is_slice_zeroized(&key));
        // Re-expose the former tail without reallocating
        unsafe { key.set_len(64) };
        assert!(is_slice_zeroized(&key));
    }

    #[test]
    fn test_fast_zeroize_vec_unallocated() {
        let mut empty: Vec<u8> = Vec::new();
        fast_zeroize_vec(&mut empty);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_is_slice_zeroized_single_nonzero() {
        assert!(!is_slice_zeroized(&[0, 0, 1, 0]));
    }
}
