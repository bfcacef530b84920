use textdigest::hash::sha256::core::sha256;
use textdigest::sha256_hex;

use criterion::{Criterion, criterion_group, criterion_main};
use sha2::{Digest, Sha256};
use std::hint::black_box;

const PHRASE: &str = "The quick brown fox jumps over the lazy dog";

pub fn bench_sha256(c: &mut Criterion) {
    c.bench_function("sha256 64 bytes", |b| {
        b.iter(|| sha256(black_box(&[0u8; 64])))
    });

    c.bench_function("sha256_hex phrase", |b| b.iter(|| sha256_hex(black_box(PHRASE))));

    let text = "x".repeat(16 * 1024);
    c.bench_function("sha256_hex 16 KiB", |b| b.iter(|| sha256_hex(black_box(&text))));
}

pub fn bench_sha2_ref(c: &mut Criterion) {
    c.bench_function("sha2::Sha256 64 bytes", |b| {
        b.iter(|| {
            let mut hasher = Sha256::new();
            hasher.update(black_box(&[0u8; 64]));
            let _ = hasher.finalize();
        })
    });
}

criterion_group!(benches, bench_sha256, bench_sha2_ref);
criterion_main!(benches);
