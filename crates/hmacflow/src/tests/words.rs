// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use hmacflow_core::{HashError, WordStream, WordWidth};
use hmacflow_hash::Sha256;
use hmacflow_test_utils::SumHash;

use crate::config::{HmacConfig, Strategy};
use crate::error::HmacError;
use crate::mac::Hmac;

fn sum_mac(bits: usize, strategy: Strategy) -> Hmac<SumHash> {
    let config = HmacConfig::default()
        .with_word_width_bits(bits)
        .with_strategy(strategy);
    Hmac::new(SumHash, &config).expect("Failed to Hmac::new(..)")
}

#[test]
fn test_word_input_matches_byte_input() {
    for strategy in [Strategy::Sequential, Strategy::Pipelined] {
        let mac = sum_mac(32, strategy);
        let key = WordStream::from_bytes(WordWidth::W32, &[1, 2, 3]);
        let message = WordStream::from_bytes(WordWidth::W32, &[0xAA, 0xBB, 0xCC, 0xDD, 0xEE]);

        let tag = mac
            .compute_words(&key, 3, &message, 5)
            .expect("Failed to compute_words(..)");

        assert_eq!(&tag.as_bytes()[14..], &[0x17, 0x91]);
        assert_eq!(
            tag,
            mac.compute(&[1, 2, 3], &[0xAA, 0xBB, 0xCC, 0xDD, 0xEE])
                .expect("Failed to compute(..)")
        );
    }
}

#[test]
fn test_trailing_lanes_ignored() {
    let mac = sum_mac(64, Strategy::Sequential);
    // Garbage past the declared length must not reach the hash
    let mut raw = vec![0u8; 8];
    raw[..5].copy_from_slice(&[0xAA, 0xBB, 0xCC, 0xDD, 0xEE]);
    raw[5..].fill(0xFF);
    let message = WordStream::from_words(WordWidth::W64, &raw).expect("Failed to from_words(..)");
    let mut key_raw = vec![0xFFu8; 8];
    key_raw[..3].copy_from_slice(&[1, 2, 3]);
    let key = WordStream::from_words(WordWidth::W64, &key_raw).expect("Failed to from_words(..)");

    let tag = mac
        .compute_words(&key, 3, &message, 5)
        .expect("Failed to compute_words(..)");

    assert_eq!(&tag.as_bytes()[14..], &[0x17, 0x91]);
}

#[test]
fn test_trailing_lanes_across_words() {
    let mac = sum_mac(32, Strategy::Pipelined);
    // 6 meaningful bytes fill one word and half of the next
    let mut raw = vec![0xFFu8; 8];
    raw[..6].copy_from_slice(b"abcdef");
    let message = WordStream::from_words(WordWidth::W32, &raw).expect("Failed to from_words(..)");
    let key = WordStream::from_bytes(WordWidth::W32, b"key");

    let tag = mac
        .compute_words(&key, 3, &message, 6)
        .expect("Failed to compute_words(..)");

    assert_eq!(tag, mac.compute(b"key", b"abcdef").expect("Failed to compute(..)"));
}

#[test]
fn test_extra_whole_word_rejected() {
    let mac = sum_mac(64, Strategy::Sequential);
    let message = WordStream::from_words(WordWidth::W64, &[0u8; 16]).expect("Failed to from_words(..)");
    let key = WordStream::from_bytes(WordWidth::W64, b"key");

    assert_eq!(
        mac.compute_words(&key, 3, &message, 5),
        Err(HmacError::InvalidLength {
            field: "message",
            declared: 5,
            words: 2,
            width_bits: 64,
        })
    );
}

#[test]
fn test_message_length_mismatch_rejected() {
    let mac = sum_mac(64, Strategy::Pipelined);
    let key = WordStream::from_bytes(WordWidth::W64, b"key");
    let message = WordStream::from_bytes(WordWidth::W64, &[0u8; 16]);

    assert_eq!(
        mac.compute_words(&key, 3, &message, 17),
        Err(HmacError::InvalidLength {
            field: "message",
            declared: 17,
            words: 2,
            width_bits: 64,
        })
    );
}

#[test]
fn test_key_length_mismatch_rejected() {
    let mac = sum_mac(32, Strategy::Sequential);
    let key = WordStream::from_bytes(WordWidth::W32, &[7u8; 9]);
    let message = WordStream::new(WordWidth::W32);

    assert_eq!(
        mac.compute_words(&key, 4, &message, 0),
        Err(HmacError::InvalidLength {
            field: "key",
            declared: 4,
            words: 3,
            width_bits: 32,
        })
    );
}

#[test]
fn test_width_mismatch_rejected() {
    let mac = Hmac::new(Sha256, &HmacConfig::default()).expect("Failed to Hmac::new(..)");
    let key = WordStream::from_bytes(WordWidth::W32, b"key");
    let message = WordStream::from_bytes(WordWidth::W64, b"message");

    assert!(matches!(
        mac.compute_words(&key, 3, &message, 7),
        Err(HmacError::InvalidArgument(_))
    ));
}

#[test]
fn test_empty_message_stream() {
    let mac = sum_mac(128, Strategy::Pipelined);
    let key = WordStream::from_bytes(WordWidth::W128, b"key");
    let message = WordStream::new(WordWidth::W128);

    let tag = mac
        .compute_words(&key, 3, &message, 0)
        .expect("Failed to compute_words(..)");
    assert_eq!(tag, mac.compute(b"key", b"").expect("Failed to compute(..)"));
}

#[test]
fn test_length_error_attribution_keeps_other_errors() {
    let err = HmacError::from_length("key", HashError::MessageTooLong);
    assert_eq!(err, HmacError::Hash(HashError::MessageTooLong));
}
