//! Criterion micro-benchmarks for blob allocation, copy, and containment.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use radix_blob::{Blob, WindowPolicy};

fn bench_alloc(c: &mut Criterion) {
    c.bench_function("blob_alloc_4k", |b| {
        b.iter(|| Blob::alloc(black_box(4096)).unwrap());
    });
    // Inline-capacity path: no heap allocation expected.
    c.bench_function("blob_alloc_inline", |b| {
        b.iter(|| Blob::alloc(black_box(8)).unwrap());
    });
}

fn bench_copy(c: &mut Criterion) {
    let data = vec![0xA5u8; 4096];
    let source = Blob::view(&data);
    c.bench_function("blob_to_owned_4k", |b| {
        b.iter(|| black_box(&source).to_owned_blob());
    });

    c.bench_function("blob_write_at_4k", |b| {
        let mut target = Blob::alloc(8192).unwrap();
        b.iter(|| target.write_at(black_box(1024), &source).unwrap());
    });
}

fn bench_containment(c: &mut Criterion) {
    let mut haystack = vec![0u8; 4096];
    haystack[4000..4008].copy_from_slice(b"needle!!");
    let hay = Blob::view(&haystack);
    let needle = Blob::view(b"needle!!");

    c.bench_function("blob_contains_exact_4k", |b| {
        b.iter(|| hay.contains(black_box(&needle), 8, WindowPolicy::Exact));
    });
    c.bench_function("blob_contains_prefix_4k", |b| {
        b.iter(|| hay.contains(black_box(&needle), 16, WindowPolicy::Prefix));
    });
}

criterion_group!(benches, bench_alloc, bench_copy, bench_containment);
criterion_main!(benches);
