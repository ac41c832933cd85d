//! Ring indexing benchmarks: bounded and wrapped reads, chunking.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ringtext::RingText;
use std::hint::black_box;

fn construction(c: &mut Criterion) {
    let ascii = "abcdefghij".repeat(100);
    let mixed = "ab e\u{301} 👍🏽 中".repeat(100);

    c.bench_function("ring_new_ascii_1000", |b| {
        b.iter(|| RingText::new(black_box(&ascii)));
    });

    c.bench_function("ring_new_mixed", |b| {
        b.iter(|| RingText::new(black_box(&mixed)));
    });
}

fn bounded_reads(c: &mut Criterion) {
    let text = "abcdefghij".repeat(100);
    let ring = RingText::new(&text);

    c.bench_function("substring_bounded_forward", |b| {
        b.iter(|| ring.substring(black_box(-50..=500), false));
    });

    c.bench_function("substring_bounded_reversed", |b| {
        b.iter(|| ring.substring(black_box(500..=-50), false));
    });

    c.bench_function("character_at_bounded", |b| {
        b.iter(|| ring.character_at(black_box(731), false));
    });
}

fn wrapped_reads(c: &mut Criterion) {
    let ring = RingText::new("abcdefghij");
    let mut group = c.benchmark_group("substring_infinite");

    for span in [10isize, 100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("forward", span), &span, |b, &span| {
            b.iter(|| ring.substring(black_box(-3..=span), true));
        });
        group.bench_with_input(BenchmarkId::new("reversed", span), &span, |b, &span| {
            b.iter(|| ring.substring(black_box(span..=-3), true));
        });
    }

    group.finish();
}

fn chunking(c: &mut Criterion) {
    let text = "ab e\u{301} 👍🏽 中".repeat(100);
    let ring = RingText::new(&text);

    for size in [1usize, 3, 16] {
        c.bench_function(&format!("chunks_{size}"), |b| {
            b.iter(|| ring.chunks(black_box(size), 0..=isize::MAX));
        });
    }
}

criterion_group!(benches, construction, bounded_reads, wrapped_reads, chunking);
criterion_main!(benches);
