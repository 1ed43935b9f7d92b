use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use subspan::{max_subarray_bruteforce, max_subarray_divide_and_conquer};

fn seeded_input(n: usize) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    (0..n).map(|_| rng.gen_range(-100..=100)).collect()
}

fn bench_max_subarray(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_subarray");
    for n in [64, 256, 1024, 4096] {
        let values = seeded_input(n);
        group.bench_with_input(BenchmarkId::new("bruteforce", n), &values, |b, values| {
            b.iter(|| max_subarray_bruteforce(black_box(values)))
        });
        group.bench_with_input(
            BenchmarkId::new("divide_and_conquer", n),
            &values,
            |b, values| b.iter(|| max_subarray_divide_and_conquer(black_box(values))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_max_subarray);
criterion_main!(benches);
