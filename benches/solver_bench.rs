//! Criterion benchmarks for the GA solver and roulette selection.
//!
//! Uses a synthetic Sphere problem to measure pure algorithm overhead
//! independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ga_solver::ga::{build_roulette, roulette_draw, FitnessMap, GaConfig, GaProblem, GaSolver};
use ga_solver::random::create_rng;
use rand::Rng;

// ===========================================================================
// Sphere function: maximize 1 / (1 + sum(x_i^2))
// ===========================================================================

struct SphereProblem {
    dim: usize,
}

impl GaProblem for SphereProblem {
    type Individual = Vec<f64>;
    type Fitness = f64;

    fn evaluate(&self, genes: &Vec<f64>) -> f64 {
        1.0 / (1.0 + genes.iter().map(|x| x * x).sum::<f64>())
    }

    fn crossover<R: Rng>(&self, p1: &Vec<f64>, p2: &Vec<f64>, rng: &mut R) -> Vec<f64> {
        let point = rng.random_range(0..self.dim);
        let mut child = p1.clone();
        child[point..].copy_from_slice(&p2[point..]);
        child
    }

    fn mutate<R: Rng>(&self, mut genes: Vec<f64>, rng: &mut R) -> Vec<f64> {
        let i = rng.random_range(0..self.dim);
        genes[i] += rng.random_range(-0.5..0.5);
        genes
    }
}

fn initial_population(dim: usize, size: usize) -> Vec<Vec<f64>> {
    let mut rng = create_rng(42);
    (0..size)
        .map(|_| (0..dim).map(|_| rng.random_range(-5.0..5.0)).collect())
        .collect()
}

fn bench_ga_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_sphere");
    group.sample_size(10);

    for &(dim, pop, steps) in &[(5, 50, 50), (10, 100, 50)] {
        let population = initial_population(dim, pop);
        // Unreachable target: every run spends its full step budget.
        let config = GaConfig::new(2.0).with_prob_mutation(0.3).with_max_steps(steps);
        group.bench_with_input(
            BenchmarkId::new(format!("d{}_p{}_s{}", dim, pop, steps), dim),
            &(population, config),
            |b, (p, c)| {
                b.iter(|| {
                    let mut solver =
                        GaSolver::new(SphereProblem { dim }, p.clone(), c.clone()).unwrap();
                    black_box(solver.run().unwrap())
                })
            },
        );
    }
    group.finish();
}

fn bench_roulette(c: &mut Criterion) {
    let mut group = c.benchmark_group("roulette");

    for &n in &[100usize, 1_000] {
        let mapping: FitnessMap<usize, f64> = (0..n).map(|i| (i, (i + 1) as f64)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &mapping, |b, m| {
            let mut rng = create_rng(42);
            b.iter(|| {
                let wheel = build_roulette(black_box(m)).unwrap();
                black_box(roulette_draw(&wheel, n, &mut rng).unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ga_sphere, bench_roulette);
criterion_main!(benches);
