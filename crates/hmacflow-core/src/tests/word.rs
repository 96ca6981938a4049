// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::HashError;
use crate::word::{WordStream, WordWidth};

#[test]
fn test_word_width_accepts_byte_multiples() {
    for bits in [8, 32, 64, 128, 256, 512] {
        let width = WordWidth::new(bits).expect("Failed to WordWidth::new(..)");
        assert_eq!(width.bits(), bits);
        assert_eq!(width.bytes(), bits / 8);
    }
}

#[test]
fn test_word_width_rejects_invalid() {
    for bits in [0, 7, 12, 520, 1024] {
        assert_eq!(
            WordWidth::new(bits),
            Err(HashError::InvalidWordWidth { bits })
        );
    }
}

#[test]
fn test_words_for_rounds_up() {
    let w = WordWidth::W32;
    assert_eq!(w.words_for(0), 0);
    assert_eq!(w.words_for(1), 1);
    assert_eq!(w.words_for(4), 1);
    assert_eq!(w.words_for(5), 2);
    assert_eq!(WordWidth::W512.words_for(64 + 5), 2);
}

#[test]
fn test_from_bytes_packs_lane_zero_first() {
    let stream = WordStream::from_bytes(WordWidth::W32, &[1, 2, 3, 4, 5, 6]);
    let words: Vec<&[u8]> = stream.words().collect();

    assert_eq!(stream.word_count(), 2);
    assert_eq!(words[0], &[1, 2, 3, 4]);
    // Last word zero-filled
    assert_eq!(words[1], &[5, 6, 0, 0]);
}

#[test]
fn test_push_bytes_continues_partial_word() {
    let mut stream = WordStream::new(WordWidth::W64);
    stream.push_bytes(&[0x36; 3]);
    stream.push_bytes(&[0xAA; 7]);

    assert_eq!(stream.word_count(), 2);
    let m = stream.meaningful(10).expect("Failed to meaningful(..)");
    assert_eq!(m.as_bytes(), &[0x36, 0x36, 0x36, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA]);
}

#[test]
fn test_push_empty_is_noop() {
    let mut stream = WordStream::new(WordWidth::W64);
    stream.push_bytes(&[]);
    assert_eq!(stream.word_count(), 0);
    assert!(stream.meaningful(0).expect("Failed to meaningful(..)").is_empty());
}

#[test]
fn test_meaningful_truncates_last_word() {
    let stream = WordStream::from_bytes(WordWidth::W32, &[9; 6]);
    let m = stream.meaningful(6).expect("Failed to meaningful(..)");
    let words: Vec<&[u8]> = m.words().collect();

    assert_eq!(m.len(), 6);
    assert_eq!(words, vec![&[9u8, 9, 9, 9][..], &[9u8, 9][..]]);
}

#[test]
fn test_meaningful_accepts_any_length_within_last_word() {
    // Two 32-bit words carry 5..=8 bytes
    let stream = WordStream::from_bytes(WordWidth::W32, &[1; 8]);
    for len in 5..=8 {
        assert_eq!(stream.meaningful(len).map(|m| m.len()), Ok(len));
    }
}

#[test]
fn test_meaningful_rejects_length_needing_more_words() {
    let stream = WordStream::from_bytes(WordWidth::W32, &[1; 8]);
    assert_eq!(
        stream.meaningful(9).map(|m| m.len()),
        Err(HashError::LengthMismatch {
            declared: 9,
            words: 2,
            width_bits: 32
        })
    );
}

#[test]
fn test_meaningful_rejects_length_needing_fewer_words() {
    let stream = WordStream::from_bytes(WordWidth::W32, &[1; 8]);
    assert!(matches!(
        stream.meaningful(4),
        Err(HashError::LengthMismatch { declared: 4, .. })
    ));
}

#[test]
fn test_from_words_rejects_misaligned_buffer() {
    assert_eq!(
        WordStream::from_words(WordWidth::W64, &[0u8; 12]).map(|s| s.word_count()),
        Err(HashError::MisalignedWords {
            len: 12,
            width_bits: 64
        })
    );
}

#[test]
fn test_from_words_then_push_appends_after_last_word() {
    let mut stream =
        WordStream::from_words(WordWidth::W32, &[1, 2, 3, 4]).expect("Failed to from_words(..)");
    stream.push_bytes(&[5]);

    assert_eq!(stream.word_count(), 2);
    assert_eq!(
        stream.meaningful(5).expect("Failed to meaningful(..)").as_bytes(),
        &[1, 2, 3, 4, 5]
    );
}

#[test]
fn test_debug_hides_contents() {
    let stream = WordStream::from_bytes(WordWidth::W32, b"secret key");
    let shown = format!("{stream:?}");
    assert!(shown.contains("width_bits: 32"));
    assert!(!shown.contains("115")); // 's'
}
