use textdigest::hash::md5::core::md5;
use textdigest::md5_hex;

use criterion::{Criterion, criterion_group, criterion_main};
use ::md5::{Digest, Md5};
use std::hint::black_box;

const PHRASE: &str = "The quick brown fox jumps over the lazy dog";

pub fn bench_md5(c: &mut Criterion) {
    c.bench_function("md5 64 bytes", |b| b.iter(|| md5(black_box(&[0u8; 64]))));

    c.bench_function("md5_hex phrase", |b| b.iter(|| md5_hex(black_box(PHRASE))));

    let text = "x".repeat(16 * 1024);
    c.bench_function("md5_hex 16 KiB", |b| b.iter(|| md5_hex(black_box(&text))));
}

pub fn bench_md5_ref(c: &mut Criterion) {
    c.bench_function("md-5::Md5 64 bytes", |b| {
        b.iter(|| {
            let mut hasher = Md5::new();
            hasher.update(black_box(&[0u8; 64]));
            let _ = hasher.finalize();
        })
    });
}

criterion_group!(benches, bench_md5, bench_md5_ref);
criterion_main!(benches);
