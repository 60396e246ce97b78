// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_kdtree::{FlatTable, KdTree, PointTable};

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
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_points(count: usize, max_w: f64, max_h: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        out.push(Point::new(rng.next_f64() * max_w, rng.next_f64() * max_h));
    }
    out
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() * 2000.0, rng.next_f64() * 2000.0));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new(cx + dx, cy + dy));
        }
    }
    out
}

/// Points on a diagonal in sorted order: the degenerate, list-shaped tree.
fn gen_sorted_points(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| Point::new(i as f64, i as f64))
        .collect()
}

fn fill<T: PointTable<u32>>(table: &mut T, points: &[Point]) {
    for (i, p) in points.iter().copied().enumerate() {
        let _ = table.put(p, i as u32);
    }
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[1_000usize, 10_000] {
        let points = gen_random_points(n, 2000.0, 2000.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("kdtree_random_n{}", n), |b| {
            b.iter_batched(
                KdTree::<u32>::new,
                |mut t| {
                    fill(&mut t, &points);
                    black_box(t.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    let points = gen_sorted_points(2_000);
    group.bench_function("kdtree_sorted_n2000", |b| {
        b.iter_batched(
            KdTree::<u32>::new,
            |mut t| {
                fill(&mut t, &points);
                black_box(t.height());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("range");
    let query = Rect::new(800.0, 800.0, 900.0, 900.0);
    for (label, points) in [
        ("random", gen_random_points(10_000, 2000.0, 2000.0)),
        ("clustered", gen_clustered_points(50, 200, 120.0)),
    ] {
        let mut tree = KdTree::new();
        let mut flat = FlatTable::new();
        fill(&mut tree, &points);
        fill(&mut flat, &points);
        group.bench_function(format!("kdtree_{}", label), |b| {
            b.iter(|| black_box(tree.range(query).map(|v| v.len())))
        });
        group.bench_function(format!("flat_{}", label), |b| {
            b.iter(|| black_box(flat.range(query).map(|v| v.len())))
        });
    }
    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest");
    let points = gen_random_points(10_000, 2000.0, 2000.0);
    let queries = gen_random_points(64, 2000.0, 2000.0);
    let mut tree = KdTree::new();
    let mut flat = FlatTable::new();
    fill(&mut tree, &points);
    fill(&mut flat, &points);
    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("kdtree_random_n10000", |b| {
        b.iter(|| {
            for q in &queries {
                black_box(tree.nearest(*q).ok());
            }
        })
    });
    group.bench_function("flat_random_n10000", |b| {
        b.iter(|| {
            for q in &queries {
                black_box(flat.nearest(*q).ok());
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_range, bench_nearest);
criterion_main!(benches);
