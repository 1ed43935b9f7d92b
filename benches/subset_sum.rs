use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use subspan::{subset_sum_bruteforce, subset_sum_bruteforce_parallel};

fn seeded_input(n: usize) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    (0..n)
        .map(|_| rng.gen_range(-1_000_000_000..=1_000_000_000))
        .collect()
}

fn bench_subset_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("subset_sum");
    group.sample_size(10);
    for n in [16, 20, 24] {
        let values = seeded_input(n);
        // Target 1 is almost never reachable with values this large, so the
        // searches scan the whole mask range.
        group.bench_with_input(BenchmarkId::new("bruteforce", n), &values, |b, values| {
            b.iter(|| subset_sum_bruteforce(black_box(values), black_box(1)))
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &values, |b, values| {
            b.iter(|| subset_sum_bruteforce_parallel(black_box(values), black_box(1)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_subset_sum);
criterion_main!(benches);
