use core::hint::black_box;
use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use splitseq::{Concat, RangeI32, RangeI64, SequenceBuilder, Splittable};
use std::{sync::Barrier, thread::scope, time::Instant};

// Number of elements traversed per benchmark iteration (per-thread for
// multi-threaded).
const TOTAL_ELEMS: usize = 1 << 16;

/// Splits `seq` until every piece holds at most `leaf` elements, preserving
/// sequence order.
fn split_to_leaves<S: Splittable>(seq: S, leaf: u64) -> Vec<S> {
    let mut pending = vec![seq];
    let mut leaves = Vec::new();
    while let Some(mut seq) = pending.pop() {
        if seq.estimate_size() <= leaf {
            leaves.push(seq);
            continue;
        }
        match seq.try_split() {
            Some(prefix) => {
                pending.push(seq);
                pending.push(prefix);
            }
            None => leaves.push(seq),
        }
    }
    leaves
}

/// Compares bulk draining with element-at-a-time traversal on the same
/// sequence type.
fn bench_traversal<S>(c: &mut Criterion, group_name: &str, factory: impl Fn() -> S)
where
    S: Splittable,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_ELEMS as u64));

    group.bench_function(format!("drain_remaining/{TOTAL_ELEMS}"), |b| {
        b.iter_batched(
            &factory,
            |mut seq| seq.drain_remaining(|i| _ = black_box(i)),
            BatchSize::SmallInput,
        );
    });

    group.bench_function(format!("try_advance/{TOTAL_ELEMS}"), |b| {
        b.iter_batched(
            &factory,
            |mut seq| while seq.try_advance(|i| _ = black_box(i)) {},
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

/// Splits a range into one piece per worker and drains the pieces on scoped
/// threads, synchronized to start together.
fn bench_split_fanout(c: &mut Criterion) {
    let threads = num_cpus::get();
    let total = (TOTAL_ELEMS * threads) as i64;

    let mut group = c.benchmark_group("range/fanout");
    group.throughput(Throughput::Elements(total as u64));

    group.bench_function(format!("threads/{threads}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();
            for _ in 0..iters {
                let leaves = split_to_leaves(RangeI64::range(0, total), TOTAL_ELEMS as u64);
                let barrier = Barrier::new(leaves.len());
                scope(|s| {
                    for mut leaf in leaves {
                        let barrier = &barrier;
                        s.spawn(move || {
                            barrier.wait();
                            let mut sum = 0_i64;
                            leaf.drain_remaining(|i| sum = sum.wrapping_add(i));
                            black_box(sum);
                        });
                    }
                });
            }
            start.elapsed()
        });
    });

    group.finish();
}

fn bench_recursive_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("range/split");
    group.bench_function("to_singletons/4096", |b| {
        b.iter(|| black_box(split_to_leaves(RangeI32::range(0, 4096), 1).len()));
    });
    group.bench_function("skewed/i32_full", |b| {
        b.iter(|| {
            black_box(split_to_leaves(
                RangeI32::range_closed(i32::MIN, i32::MAX),
                1 << 24,
            ))
        });
    });
    group.finish();
}

fn bench_builder(c: &mut Criterion) {
    let mut group = c.benchmark_group("builder");
    group.throughput(Throughput::Elements(TOTAL_ELEMS as u64));

    group.bench_function(format!("accept_build_drain/{TOTAL_ELEMS}"), |b| {
        b.iter(|| {
            let mut builder = SequenceBuilder::new();
            builder.extend(0..TOTAL_ELEMS as u64);
            let Ok(mut seq) = builder.build() else {
                unreachable!()
            };
            seq.drain_remaining(|i| _ = black_box(i));
        });
    });

    group.finish();
}

fn benchmarks(c: &mut Criterion) {
    bench_traversal(c, "range/i32", || RangeI32::range(0, TOTAL_ELEMS as i32));
    bench_traversal(c, "range/i64", || RangeI64::range(0, TOTAL_ELEMS as i64));
    bench_traversal(c, "concat/i64", || {
        let half = TOTAL_ELEMS as i64 / 2;
        Concat::new(RangeI64::range(0, half), RangeI64::range(half, 2 * half))
    });
    bench_split_fanout(c);
    bench_recursive_split(c);
    bench_builder(c);
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
