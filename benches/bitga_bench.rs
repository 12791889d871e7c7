//! Criterion benchmarks for the binary GA.
//!
//! Measures the full driver on the reference cubic objective at several
//! population sizes and bit precisions, plus the individual operators.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_bitga::ga::operators::{bit_flip_mutation, elitism, two_point_crossover};
use u_bitga::ga::{Chromosome, GaConfig, GaRunner};
use u_bitga::random::create_rng;

fn bench_ga_cubic(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_cubic");
    group.sample_size(10);

    for (bits, pop, gen) in [(16usize, 10usize, 100usize), (32, 100, 100), (64, 200, 50)] {
        let config = GaConfig::default()
            .with_bits(bits)
            .with_population_size(pop)
            .with_generations(gen)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("b{}_p{}_g{}", bits, pop, gen), bits),
            &config,
            |b, c| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(c)).expect("valid config");
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("operators");
    let mut rng = create_rng(7);
    let p1 = Chromosome::random(64, &mut rng);
    let p2 = Chromosome::random(64, &mut rng);

    group.bench_function("two_point_crossover_64", |b| {
        b.iter(|| black_box(two_point_crossover(&p1, &p2, &mut rng)))
    });
    group.bench_function("bit_flip_mutation_64", |b| {
        b.iter(|| black_box(bit_flip_mutation(&p1, 0.01, &mut rng)))
    });

    let population: Vec<Chromosome> = (0..200).map(|_| Chromosome::random(64, &mut rng)).collect();
    let fitness: Vec<f64> = (0..200).map(|i| ((i * 37) % 200) as f64).collect();
    group.bench_function("elitism_200", |b| {
        b.iter(|| black_box(elitism(&population, &fitness, 0.1)))
    });
    group.finish();
}

criterion_group!(benches, bench_ga_cubic, bench_operators);
criterion_main!(benches);
