// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use hmacflow::{HmacConfig, HmacSha256, HmacSha512, Sha256, Sha512};

fn benchmark_hmac_sha256(c: &mut Criterion) {
    let mut group = c.benchmark_group("hmac_sha256");
    let mac = HmacSha256::new(Sha256, &HmacConfig::default()).expect("hmac setup failed");

    for msg_len in [64, 256, 1024, 4096, 16384].iter() {
        group.throughput(Throughput::Bytes(*msg_len as u64));
        group.bench_with_input(format!("{} bytes", msg_len), msg_len, |b, &msg_len| {
            let key = b"benchmark-key-material";
            let msg = vec![0x5au8; msg_len];

            b.iter(|| {
                mac.compute(black_box(key), black_box(&msg))
                    .expect("hmac failed")
            });
        });
    }
    group.finish();
}

fn benchmark_hmac_sha512(c: &mut Criterion) {
    let mut group = c.benchmark_group("hmac_sha512");
    let mac = HmacSha512::new(Sha512, &HmacConfig::default()).expect("hmac setup failed");

    for msg_len in [64, 256, 1024, 4096, 16384].iter() {
        group.throughput(Throughput::Bytes(*msg_len as u64));
        group.bench_with_input(format!("{} bytes", msg_len), msg_len, |b, &msg_len| {
            let key = b"benchmark-key-material";
            let msg = vec![0x5au8; msg_len];

            b.iter(|| {
                mac.compute(black_box(key), black_box(&msg))
                    .expect("hmac failed")
            });
        });
    }
    group.finish();
}

// Word width only changes packing, so these should stay flat
fn benchmark_word_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("hmac_sha256_word_width");
    let msg = vec![0x5au8; 4096];
    group.throughput(Throughput::Bytes(msg.len() as u64));

    for bits in [32, 64, 128, 512].iter() {
        let config = HmacConfig::default().with_word_width_bits(*bits);
        let mac = HmacSha256::new(Sha256, &config).expect("hmac setup failed");

        group.bench_function(format!("{} bit words", bits), |b| {
            b.iter(|| {
                mac.compute(black_box(b"key"), black_box(&msg))
                    .expect("hmac failed")
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_hmac_sha256,
    benchmark_hmac_sha512,
    benchmark_word_width
);
criterion_main!(benches);
