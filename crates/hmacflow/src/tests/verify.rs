// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use hmacflow_hash::{Md5, Sha1, Sha256, Sha512};

use crate::config::{HmacConfig, Strategy};
use crate::error::HmacError;
use crate::mac::{Hmac, min_truncated_len};

fn sha256(strategy: Strategy) -> Hmac<Sha256> {
    Hmac::new(Sha256, &HmacConfig::default().with_strategy(strategy)).expect("Failed to Hmac::new(..)")
}

#[test]
fn test_verify_accepts_correct_tag() {
    for strategy in [Strategy::Sequential, Strategy::Pipelined] {
        let mac = sha256(strategy);
        let tag = mac.compute(b"key", b"payload").expect("Failed to compute(..)");
        mac.verify(b"key", b"payload", tag.as_bytes()).expect("Failed to verify(..)");
    }
}

#[test]
fn test_verify_rejects_flipped_bit() {
    let mac = sha256(Strategy::Sequential);
    let mut tag = mac.compute(b"key", b"payload").expect("Failed to compute(..)").into_vec();

    for i in [0, 15, 31] {
        tag[i] ^= 0x01;
        assert_eq!(mac.verify(b"key", b"payload", &tag), Err(HmacError::TagMismatch));
        tag[i] ^= 0x01;
    }
    assert_eq!(mac.verify(b"key", b"payload", &tag), Ok(()));
}

#[test]
fn test_verify_rejects_other_key_and_message() {
    let mac = sha256(Strategy::Pipelined);
    let tag = mac.compute(b"key", b"payload").expect("Failed to compute(..)");

    assert_eq!(mac.verify(b"kez", b"payload", tag.as_bytes()), Err(HmacError::TagMismatch));
    assert_eq!(mac.verify(b"key", b"payloae", tag.as_bytes()), Err(HmacError::TagMismatch));
}

#[test]
fn test_verify_requires_full_length() {
    let mac = sha256(Strategy::Sequential);
    let tag = mac.compute(b"key", b"payload").expect("Failed to compute(..)");

    assert_eq!(
        mac.verify(b"key", b"payload", &tag.as_bytes()[..31]),
        Err(HmacError::InvalidTagLength { len: 31, min: 32, max: 32 })
    );
}

#[test]
fn test_min_truncated_len() {
    assert_eq!(min_truncated_len(64), 32);
    assert_eq!(min_truncated_len(32), 16);
    assert_eq!(min_truncated_len(20), 10);
    assert_eq!(min_truncated_len(16), 10);
    assert_eq!(min_truncated_len(8), 8);
    assert_eq!(min_truncated_len(0), 0);
}

#[test]
fn test_verify_truncated_bounds() {
    let mac = sha256(Strategy::Sequential);
    let tag = mac.compute(b"key", b"payload").expect("Failed to compute(..)");

    mac.verify_truncated(b"key", b"payload", &tag.as_bytes()[..16])
        .expect("Failed to verify_truncated(..)");
    mac.verify_truncated(b"key", b"payload", tag.as_bytes())
        .expect("Failed to verify_truncated(..)");

    assert_eq!(
        mac.verify_truncated(b"key", b"payload", &tag.as_bytes()[..15]),
        Err(HmacError::InvalidTagLength { len: 15, min: 16, max: 32 })
    );

    let mut long = tag.as_bytes().to_vec();
    long.push(0);
    assert_eq!(
        mac.verify_truncated(b"key", b"payload", &long),
        Err(HmacError::InvalidTagLength { len: 33, min: 16, max: 32 })
    );
}

#[test]
fn test_verify_truncated_rejects_wrong_prefix() {
    let mac = sha256(Strategy::Pipelined);
    let tag = mac.compute(b"key", b"payload").expect("Failed to compute(..)");
    let mut prefix = tag.as_bytes()[..20].to_vec();
    prefix[19] ^= 0x80;

    assert_eq!(mac.verify_truncated(b"key", b"payload", &prefix), Err(HmacError::TagMismatch));
}

#[test]
fn test_truncation_floor_for_short_digests() {
    let md5 = Hmac::new(Md5, &HmacConfig::default()).expect("Failed to Hmac::new(..)");
    let tag = md5.compute(b"k", b"m").expect("Failed to compute(..)");
    md5.verify_truncated(b"k", b"m", &tag.as_bytes()[..10])
        .expect("Failed to verify_truncated(..)");
    assert!(matches!(
        md5.verify_truncated(b"k", b"m", &tag.as_bytes()[..9]),
        Err(HmacError::InvalidTagLength { min: 10, max: 16, .. })
    ));

    let sha1 = Hmac::new(Sha1, &HmacConfig::default()).expect("Failed to Hmac::new(..)");
    assert!(matches!(
        sha1.verify_truncated(b"k", b"m", &[0u8; 9]),
        Err(HmacError::InvalidTagLength { min: 10, max: 20, .. })
    ));

    let sha512 = Hmac::new(Sha512, &HmacConfig::default()).expect("Failed to Hmac::new(..)");
    assert!(matches!(
        sha512.verify_truncated(b"k", b"m", &[0u8; 31]),
        Err(HmacError::InvalidTagLength { min: 32, max: 64, .. })
    ));
}

#[test]
fn test_facade_debug_names_primitive() {
    let mac = sha256(Strategy::Pipelined);
    let shown = format!("{mac:?}");

    assert!(shown.contains("sha256"));
    assert!(shown.contains("Pipelined"));
    assert_eq!(mac.digest_len(), 32);
}
