use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fmsort::msort::{sort_parallel, sort_sequential};

const SIZES: [usize; 3] = [10_000, 100_000, 1_000_000];
const THREAD_COUNTS: [usize; 3] = [2, 4, 8];

fn generate_input(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random()).collect()
}

fn bench_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_sequential");
    for size in SIZES {
        let input = generate_input(size, 0xf00d);
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter_batched(
                || input.clone(),
                |mut data| {
                    sort_sequential(black_box(&mut data));
                    data
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_parallel");
    for size in SIZES {
        let input = generate_input(size, 0xf00d);
        for threads in THREAD_COUNTS {
            group.bench_with_input(
                BenchmarkId::new(format!("{threads}threads"), size),
                &input,
                |b, input| {
                    b.iter_batched(
                        || input.clone(),
                        |mut data| {
                            sort_parallel(black_box(&mut data), threads).unwrap();
                            data
                        },
                        criterion::BatchSize::LargeInput,
                    )
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_sequential, bench_parallel);
criterion_main!(benches);
