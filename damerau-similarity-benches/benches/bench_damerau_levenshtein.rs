use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{distributions::Alphanumeric, Rng};

use damerau_similarity::distance::damerau_levenshtein;

fn generate(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("DamerauLevenshtein");

    for i in (2..128).step_by(2) {
        let s1 = generate(i);
        let s2 = generate(i);

        group.bench_with_input(BenchmarkId::new("chars", i), &(&s1, &s2), |b, val| {
            b.iter(|| {
                black_box(damerau_levenshtein::distance(
                    val.0.chars(),
                    val.1.chars(),
                ));
            })
        });

        group.bench_with_input(BenchmarkId::new("bytes", i), &(&s1, &s2), |b, val| {
            b.iter(|| {
                black_box(damerau_levenshtein::distance(
                    val.0.bytes(),
                    val.1.bytes(),
                ));
            })
        });

        group.bench_with_input(BenchmarkId::new("strsim", i), &(&s1, &s2), |b, val| {
            b.iter(|| {
                black_box(strsim::damerau_levenshtein(val.0, val.1));
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
