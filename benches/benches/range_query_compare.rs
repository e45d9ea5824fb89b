// Copyright 2025 the Grabit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use grabit_range_tree::{LinearScan, Point, RangeQuery, RangeTree};

/// Characters laid out like a page of text: `rows` lines of `cols` glyphs.
fn gen_page(rows: i64, cols: i64, advance: i64, line_height: i64) -> Vec<Point<u32, 2>> {
    let mut out = Vec::with_capacity((rows * cols) as usize);
    for row in 0..rows {
        for col in 0..cols {
            let id = (row * cols + col) as u32;
            out.push(Point::new([col * advance, row * line_height], id));
        }
    }
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, n: i64) -> i64 {
        (self.next_u64() % n as u64) as i64
    }
}

fn gen_scattered(count: usize, extent: i64) -> Vec<Point<u32, 2>> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|i| Point::new([rng.below(extent), rng.below(extent)], i as u32))
        .collect()
}

fn gen_queries(count: usize, extent: i64, size: i64) -> Vec<([i64; 2], [i64; 2])> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    (0..count)
        .map(|_| {
            let x = rng.below(extent - size);
            let y = rng.below(extent - size);
            ([x, y], [x + size, y + size])
        })
        .collect()
}

fn run_queries<Q: RangeQuery<u32, 2>>(index: &Q, queries: &[([i64; 2], [i64; 2])]) -> usize {
    queries
        .iter()
        .map(|&(lo, hi)| index.range_query(lo, hi).map(|v| v.len()).unwrap_or(0))
        .sum()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &(rows, cols) in &[(20_i64, 80_i64), (60, 160)] {
        let page = gen_page(rows, cols, 9, 18);
        group.throughput(Throughput::Elements(page.len() as u64));
        group.bench_function(format!("range_tree_page_{}x{}", rows, cols), |b| {
            b.iter_batched(
                || page.clone(),
                |pts| black_box(RangeTree::build(pts)),
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("linear_scan_page_{}x{}", rows, cols), |b| {
            b.iter_batched(
                || page.clone(),
                |pts| black_box(LinearScan::new(pts)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    for &n in &[1_000_usize, 10_000] {
        let pts = gen_scattered(n, 4000);
        let tree = RangeTree::build(pts.clone());
        let scan = LinearScan::new(pts);
        let queries = gen_queries(256, 4000, 200);
        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_function(format!("range_tree_scattered_n{}", n), |b| {
            b.iter(|| black_box(run_queries(&tree, &queries)))
        });
        group.bench_function(format!("linear_scan_scattered_n{}", n), |b| {
            b.iter(|| black_box(run_queries(&scan, &queries)))
        });
    }

    // A drag selection over a few lines of a dense page.
    let page = gen_page(60, 160, 9, 18);
    let tree = RangeTree::build(page.clone());
    let scan = LinearScan::new(page);
    let selection = [([90, 180], [900, 360])];
    group.throughput(Throughput::Elements(1));
    group.bench_function("range_tree_page_selection", |b| {
        b.iter(|| black_box(run_queries(&tree, &selection)))
    });
    group.bench_function("linear_scan_page_selection", |b| {
        b.iter(|| black_box(run_queries(&scan, &selection)))
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_query);
criterion_main!(benches);
