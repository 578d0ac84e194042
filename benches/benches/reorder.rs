// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size, Vec2};
use understory_reorder::{
    DisplacementCache, GridLayout, GridProjection, Reorder, ReorderConfig, move_item,
};

const ITEM: Size = Size::new(92.0, 32.0);

fn projection(columns: usize, len: usize) -> GridProjection {
    GridProjection::new(
        GridLayout::new(columns, len),
        Point::ZERO,
        ITEM,
        ReorderConfig::DEFAULT_GUTTER,
    )
}

/// A lifted machine holding item 0 of a `columns`-wide grid.
fn lifted(columns: usize, len: usize) -> (Reorder, GridProjection, Point) {
    let grid = projection(columns, len);
    let mut reorder = Reorder::new(ReorderConfig::new().with_columns(columns), len);
    let start = grid.rest_bounds(0).map_or(Point::ZERO, |r| r.center());
    reorder.on_pointer_down(0, start, &grid);
    reorder.on_lift_transition_end(0);
    (reorder, grid, start)
}

/// Diagonal sweep from the first slot to the last, one frame per pixel row.
fn sweep(columns: usize, len: usize) -> Vec<Vec2> {
    let rows = len.div_ceil(columns);
    let extent = ITEM + ReorderConfig::DEFAULT_GUTTER;
    let height = rows as f64 * extent.height;
    let width = columns as f64 * extent.width;
    let frames = height.max(width) as usize;
    (0..frames)
        .map(|i| {
            let t = i as f64 / frames as f64;
            Vec2::new(t * width, t * height)
        })
        .collect()
}

fn bench_pointer_move_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/pointer_move_sweep");

    for (columns, len) in [(1usize, 64usize), (1, 1_024), (8, 1_024), (32, 16_384)] {
        let path = sweep(columns, len);
        group.throughput(Throughput::Elements(path.len() as u64));

        group.bench_with_input(
            BenchmarkId::new(format!("{columns}x"), len),
            &path,
            |b, path| {
                b.iter_batched(
                    || lifted(columns, len),
                    |(mut reorder, grid, start)| {
                        for delta in path {
                            let measure = grid.lifted(0, *delta, reorder.config().lift_scale());
                            black_box(reorder.on_pointer_move(start + *delta, &measure));
                        }
                        black_box(reorder);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_cache_refresh(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/cache_refresh");

    for len in [256usize, 4_096, 65_536] {
        let columns = 16;
        let path = sweep(columns, len);
        group.throughput(Throughput::Elements(path.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &path, |b, path| {
            b.iter_batched(
                || {
                    let (reorder, grid, start) = lifted(columns, len);
                    let mut cache = DisplacementCache::new();
                    cache.refresh(&reorder);
                    (reorder, grid, start, cache)
                },
                |(mut reorder, grid, start, mut cache)| {
                    let mut touched = 0usize;
                    for delta in path {
                        let measure = grid.lifted(0, *delta, reorder.config().lift_scale());
                        reorder.on_pointer_move(start + *delta, &measure);
                        touched += cache.refresh(&reorder).len();
                    }
                    black_box(touched);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_commit(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/move_item");

    for len in [1_024usize, 65_536] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                || (0..len as u32).collect::<Vec<_>>(),
                |mut items| {
                    black_box(move_item(&mut items, 0, len - 1).is_ok());
                    black_box(items);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_pointer_move_sweep,
    bench_cache_refresh,
    bench_commit
);
criterion_main!(benches);
