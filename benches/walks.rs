use criterion::{criterion_group, criterion_main, Criterion};

use gray_walks::{combination_swaps, partition_moves, plain_changes, subset_flips};

fn bench_engines(c: &mut Criterion) {
    c.bench_function("combination_swaps 20 10", |b| {
        b.iter(|| combination_swaps(20, 10).fold(0usize, |acc, (x, y)| acc ^ x ^ y))
    });
    c.bench_function("partition_moves 12 4", |b| {
        b.iter(|| partition_moves(12, 4).fold(0usize, |acc, (pos, block)| acc ^ pos ^ block))
    });
    c.bench_function("subset_flips 16", |b| {
        b.iter(|| subset_flips(16).fold(0usize, |acc, pos| acc ^ pos))
    });
    c.bench_function("plain_changes 9", |b| {
        b.iter(|| plain_changes(9).fold(0usize, |acc, x| acc ^ x))
    });
}

criterion_group!(benches, bench_engines);
criterion_main!(benches);
