// Copyright 2025 the Grabit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use grabit_range_tree::{Point, RangeTree};

use rstar::primitives::GeomWithData;
use rstar::{AABB, RTree};

fn gen_page(rows: i64, cols: i64) -> Vec<Point<u32, 2>> {
    let mut out = Vec::with_capacity((rows * cols) as usize);
    for row in 0..rows {
        for col in 0..cols {
            out.push(Point::new([col * 9, row * 18], (row * cols + col) as u32));
        }
    }
    out
}

fn to_rstar(pts: &[Point<u32, 2>]) -> Vec<GeomWithData<[i64; 2], u32>> {
    pts.iter()
        .map(|p| GeomWithData::new(*p.coords(), *p.payload()))
        .collect()
}

fn bench_rstar_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_compare");
    for &(rows, cols) in &[(20_i64, 80_i64), (60, 160)] {
        let page = gen_page(rows, cols);
        let (lower, upper) = ([90_i64, 36_i64], [450_i64, 180_i64]);
        group.throughput(Throughput::Elements(page.len() as u64));

        group.bench_function(format!("range_tree_build_query_{}x{}", rows, cols), |b| {
            b.iter_batched(
                || page.clone(),
                |pts| {
                    let tree = RangeTree::build(pts);
                    let hits = tree.range_query(lower, upper).map(|v| v.len()).unwrap_or(0);
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_{}x{}", rows, cols), |b| {
            b.iter_batched(
                || to_rstar(&page),
                |items| {
                    let tree = RTree::bulk_load(items);
                    // rstar does not sort; include the reading-order sort for parity.
                    let mut hits: Vec<_> = tree
                        .locate_in_envelope(&AABB::from_corners(lower, upper))
                        .map(|g| (g.geom()[1], g.geom()[0], g.data))
                        .collect();
                    hits.sort_unstable();
                    black_box(hits.len());
                },
                BatchSize::SmallInput,
            )
        });

        let tree = RangeTree::build(page.clone());
        let rtree = RTree::bulk_load(to_rstar(&page));
        group.bench_function(format!("range_tree_query_{}x{}", rows, cols), |b| {
            b.iter(|| black_box(tree.range_query(lower, upper).map(|v| v.len())))
        });
        group.bench_function(format!("rstar_query_{}x{}", rows, cols), |b| {
            b.iter(|| {
                let hits = rtree
                    .locate_in_envelope(&AABB::from_corners(lower, upper))
                    .count();
                black_box(hits)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rstar_compare);
criterion_main!(benches);
