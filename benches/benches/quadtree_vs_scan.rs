// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{Point, Region, StaticQuadTree};

type Tree = StaticQuadTree<(Point, u32), 1024, 8>;

const ROOT: Region = Region::from_width_height(4095, 4095);

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
    fn next_coord(&mut self) -> u32 {
        (self.next_u64() & 0xFFF) as u32
    }
}

fn gen_random_points(count: usize) -> Vec<(Point, u32)> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|i| (Point::new(rng.next_coord(), rng.next_coord()), i as u32))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: u32) -> Vec<(Point, u32)> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for _ in 0..n_clusters {
        let cx = rng.next_coord().clamp(spread, 4095 - spread);
        let cy = rng.next_coord().clamp(spread, 4095 - spread);
        for _ in 0..per_cluster {
            let dx = (rng.next_u64() % u64::from(2 * spread)) as u32;
            let dy = (rng.next_u64() % u64::from(2 * spread)) as u32;
            out.push((Point::new(cx - spread + dx, cy - spread + dy), out.len() as u32));
        }
    }
    out
}

fn gen_queries(count: usize, size: u32) -> Vec<Region> {
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    (0..count)
        .map(|_| {
            let x = rng.next_coord().min(4095 - size);
            let y = rng.next_coord().min(4095 - size);
            Region::new(x, y, x + size, y + size)
        })
        .collect()
}

fn build(points: &[(Point, u32)]) -> Tree {
    let mut tree = Tree::with_bounds(ROOT);
    for &p in points {
        let _ = tree.insert(p);
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for (name, points) in [
        ("random", gen_random_points(4096)),
        ("clustered", gen_clustered_points(16, 256, 200)),
    ] {
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_function(name, |b| {
            b.iter_batched(
                || Tree::with_bounds(ROOT),
                |mut tree| {
                    let mut rejected = 0_usize;
                    for &p in &points {
                        rejected += usize::from(tree.insert(p).is_err());
                    }
                    black_box((tree.len(), rejected));
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_range");
    let points = gen_random_points(4096);
    let tree = build(&points);
    for &size in &[64_u32, 256, 1024] {
        let queries = gen_queries(256, size);
        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_function(format!("quadtree_{size}"), |b| {
            b.iter(|| {
                let mut total = 0_usize;
                for q in &queries {
                    total += tree.query_range(*q).count();
                }
                black_box(total);
            })
        });
        group.bench_function(format!("linear_scan_{size}"), |b| {
            b.iter(|| {
                let mut total = 0_usize;
                for q in &queries {
                    total += points.iter().filter(|(p, _)| q.contains(*p)).count();
                }
                black_box(total);
            })
        });
    }
    group.finish();
}

fn bench_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_point");
    let points = gen_random_points(4096);
    let tree = build(&points);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("hits", |b| {
        b.iter(|| {
            let mut found = 0_usize;
            for (p, _) in &points {
                found += usize::from(tree.query_point(*p).is_some());
            }
            black_box(found);
        })
    });
    group.finish();
}

fn bench_remove_reinsert(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_reinsert");
    let points = gen_random_points(2048);
    let tree = build(&points);
    group.bench_function("churn", |b| {
        b.iter_batched(
            || tree.clone(),
            |mut tree| {
                for p in &points {
                    if let Ok(e) = tree.remove(p) {
                        let _ = tree.insert(e);
                    }
                }
                black_box(tree.len());
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_range,
    bench_point,
    bench_remove_reinsert
);
criterion_main!(benches);
