//! Criterion micro-benchmarks for list append, query, and removal.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use radix_blob::Blob;
use radix_list::{List, Query, Side};

fn filled_list(n: usize) -> List {
    let mut list = List::new();
    for i in 0..n {
        let bytes = (i as u32).to_le_bytes();
        list.append_value(Side::Right, &Blob::view(&bytes));
    }
    list
}

fn bench_append(c: &mut Criterion) {
    c.bench_function("list_append_right_256", |b| {
        b.iter(|| filled_list(black_box(256)));
    });

    c.bench_function("list_append_left_256", |b| {
        b.iter(|| {
            let mut list = List::new();
            let bytes = [0u8; 4];
            for _ in 0..black_box(256) {
                list.append_value(Side::Left, &Blob::view(&bytes));
            }
            list
        });
    });
}

fn bench_query(c: &mut Criterion) {
    let list = filled_list(256);
    let last = 255u32.to_le_bytes();
    let target = Blob::view(&last);

    c.bench_function("list_query_value_worst_case_256", |b| {
        b.iter(|| list.query(black_box(&Query::by_value(&target))));
    });

    c.bench_function("list_get_mid_256", |b| {
        b.iter(|| list.get(black_box(128)).unwrap());
    });
}

fn bench_remove(c: &mut Criterion) {
    c.bench_function("list_drain_from_head_256", |b| {
        b.iter_batched(
            || filled_list(256),
            |mut list| {
                while list.remove(0) {}
                list
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_append, bench_query, bench_remove);
criterion_main!(benches);
