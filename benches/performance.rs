// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadgen Team

//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scadgen::dsl::*;
use scadgen::{render, Bundle, Node};

fn long_chain(len: usize) -> Bundle {
    let mut chain = cube([1, 1, 1]) >> up(1.0);
    for i in 1..len {
        chain = chain >> translate([i as f64, 0.0, 0.0]);
    }
    chain
}

fn wide_union(width: usize) -> Node {
    let mut model = sphere(1.0) >> right(0.0);
    let mut node = model.resolve();
    for i in 1..width {
        model = sphere(1.0) >> right(i as f64);
        node = node + model;
    }
    node
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    for len in [10usize, 100, 1000] {
        let chain = long_chain(len);
        group.bench_with_input(BenchmarkId::new("chain", len), &chain, |b, chain| {
            b.iter(|| black_box(chain).resolve());
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let chain = long_chain(200);
    group.bench_with_input(BenchmarkId::new("deep_chain", 200), &chain, |b, chain| {
        b.iter(|| render(black_box(chain).clone()));
    });

    let wide = wide_union(64);
    group.bench_with_input(BenchmarkId::new("wide_union", 64), &wide, |b, wide| {
        b.iter(|| render(black_box(wide).clone()));
    });

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    group.bench_function("chain_1000", |b| {
        b.iter(|| long_chain(black_box(1000)));
    });

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_render, bench_build);
criterion_main!(benches);
