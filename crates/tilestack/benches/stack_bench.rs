//! Benchmarks for point queries and restructuring on deep stacks.
//!
//! Run with:
//! `cargo bench -p tilestack --bench stack_bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tilestack::{Tile, TileStack};

const DEPTHS: [usize; 3] = [16, 256, 4096];

/// Staircase of 8x8 tiles; tile `i` sits at (i, i), so (0, 0) is only in the
/// backmost tile and deep probes scan most of the chain.
fn staircase(depth: usize) -> TileStack {
    (0..depth)
        .map(|i| {
            let offset = i32::try_from(i % 512).unwrap_or(0);
            Tile::new(offset, offset, 8, 8, "grey").unwrap()
        })
        .rev()
        .collect()
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack/find_tile");
    for depth in DEPTHS {
        let stack = staircase(depth);
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_with_input(BenchmarkId::new("miss", depth), &stack, |b, stack| {
            b.iter(|| black_box(stack.find_tile(black_box(-1), black_box(-1))));
        });
        group.bench_with_input(BenchmarkId::new("front_hit", depth), &stack, |b, stack| {
            let front = stack.front().map_or((0, 0), |t| (t.x(), t.y()));
            b.iter(|| black_box(stack.find_tile(black_box(front.0), black_box(front.1))));
        });
    }
    group.finish();
}

fn bench_raise_lower(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack/raise_lower");
    for depth in DEPTHS {
        let mut stack = staircase(depth);
        group.bench_function(BenchmarkId::new("cycle", depth), |b| {
            b.iter(|| {
                // Topmost tile over the back tile's origin: to the front, then back down.
                let back = stack.back().map_or((0, 0), |t| (t.x(), t.y()));
                black_box(stack.raise(back.0, back.1));
                black_box(stack.lower(back.0, back.1));
            });
        });
    }
    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack/merge");
    for depth in DEPTHS {
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_function(BenchmarkId::new("all_overlapping", depth), |b| {
            b.iter_batched(
                || {
                    (0..depth)
                        .map(|_| Tile::new(0, 0, 4, 4, "red").unwrap())
                        .collect::<TileStack>()
                },
                |mut stack| black_box(stack.merge(1, 1)),
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_find, bench_raise_lower, bench_merge);
criterion_main!(benches);
