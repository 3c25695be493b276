use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use physics::{PairStrategy, ParticleSim, SceneConfig};

fn bench_candidate_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("candidate_pairs");

    for count in [250_usize, 1000, 4000] {
        let mut config = SceneConfig::collision_test();
        config.particles.count = count;
        let mut rng = fastrand::Rng::with_seed(count as u64);
        let mut sim = ParticleSim::from_config(&config, &mut rng).unwrap();

        for strategy in [PairStrategy::Grid, PairStrategy::BruteForce] {
            sim.strategy = strategy;
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), count),
                &count,
                |b, _| b.iter(|| sim.detect().contacts.len()),
            );
        }
    }

    group.finish();
}

fn bench_step(c: &mut Criterion) {
    let mut rng = fastrand::Rng::with_seed(5);
    let mut sim = ParticleSim::from_config(&SceneConfig::node_garden(), &mut rng).unwrap();
    c.bench_function("node_garden_step", |b| b.iter(|| sim.step(1.0 / 30.0).checks));
}

criterion_group!(benches, bench_candidate_pairs, bench_step);
criterion_main!(benches);
