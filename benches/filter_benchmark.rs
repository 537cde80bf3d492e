//! Filter throughput benchmarks.
//!
//! Every keystroke rescans the whole list, so per-query cost bounds typing
//! latency. Measures the real screens and a much larger synthetic list.
//!
//! Run with: cargo bench

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use resdir::catalog::ScreenKind;
use resdir::filter::FilterableList;
use resdir::model::Item;

fn synthetic_list(len: usize) -> FilterableList<usize> {
    const CATEGORIES: [&str; 3] = ["Firefighter Unit", "Medical Supplies", "Emergency Shelter"];
    (0..len)
        .map(|idx| Item::new(idx, format!("{} #{}", CATEGORIES[idx % 3], idx)))
        .collect()
}

fn bench_catalog_screens(c: &mut Criterion) {
    let screen = ScreenKind::Extended.build();
    let list = screen.list();

    c.bench_function("extended_empty_query", |b| {
        b.iter(|| black_box(list.set_query(black_box(""))).len())
    });
    c.bench_function("extended_substring_query", |b| {
        b.iter(|| black_box(list.set_query(black_box("shelter #"))).len())
    });
}

fn bench_large_list(c: &mut Criterion) {
    let list = synthetic_list(10_000);

    c.bench_function("10k_ascii_query", |b| {
        b.iter(|| black_box(list.set_query(black_box("SUPPLIES #99"))).len())
    });
    c.bench_function("10k_unicode_query", |b| {
        b.iter(|| black_box(list.set_query(black_box("Éclair"))).len())
    });
}

criterion_group!(benches, bench_catalog_screens, bench_large_list);
criterion_main!(benches);
