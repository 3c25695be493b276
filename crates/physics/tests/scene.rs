use physics::{
    Boundary, PairStrategy, Particle, ParticleSim, ParticleSpawn, PhysicsError, SceneConfig,
};
use std::collections::BTreeSet;

fn data(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn sorted(pairs: &[(usize, usize)]) -> BTreeSet<(usize, usize)> {
    pairs.iter().map(|&(a, b)| (a.min(b), a.max(b))).collect()
}

#[test]
fn empty_object_is_collision_test_scene() {
    let config = SceneConfig::from_json("{}").unwrap();
    assert_eq!(config, SceneConfig::collision_test());
    assert_eq!(config.particles.count, 1000);
    assert_eq!(config.boundary, Boundary::Bounce);
}

#[test]
fn parse_node_garden_file() {
    let config = SceneConfig::from_path(data("node_garden.json")).unwrap();
    assert_eq!(config.width, 1280.0);
    assert_eq!(config.cell_size, 200.0);
    assert_eq!(config.boundary, Boundary::Wrap);
    assert_eq!(config.particles.count, 250);
    assert_eq!(config.particles.speed, [-50.0, 50.0]);
}

#[test]
fn partial_spawn_section_keeps_defaults() {
    let config = SceneConfig::from_json(r#"{ "particles": { "count": 12 } }"#).unwrap();
    assert_eq!(config.particles.count, 12);
    assert_eq!(config.particles.radius, [5.0, 10.0]);
}

#[test]
fn zero_cell_size_is_rejected() {
    let err = SceneConfig::from_path(data("bad_cell_size.json")).unwrap_err();
    assert!(matches!(err, PhysicsError::Config(_)), "got {err:?}");
}

#[test]
fn unknown_fields_are_rejected() {
    let err = SceneConfig::from_json(r#"{ "cellsize": 10.0 }"#).unwrap_err();
    assert!(matches!(err, PhysicsError::Config(_)));
}

#[test]
fn inverted_ranges_are_rejected() {
    assert!(SceneConfig::from_json(r#"{ "particles": { "radius": [4.0, 1.0] } }"#).is_err());
    assert!(SceneConfig::from_json(r#"{ "particles": { "speed": [1.0, -1.0] } }"#).is_err());
}

#[test]
fn missing_file_is_io_error() {
    let err = SceneConfig::from_path(data("does_not_exist.json")).unwrap_err();
    assert!(matches!(err, PhysicsError::Io(_)));
}

#[test]
fn sim_from_config_spawns_particles() {
    let mut rng = fastrand::Rng::with_seed(1);
    let sim = ParticleSim::from_config(&SceneConfig::node_garden(), &mut rng).unwrap();
    assert_eq!(sim.particles.len(), 250);
    assert_eq!(sim.grid().columns(), 7);
    assert_eq!(sim.grid().rows(), 4);
}

#[test]
fn grid_and_brute_force_find_the_same_contacts() {
    let mut rng = fastrand::Rng::with_seed(2024);
    let mut sim = ParticleSim::from_config(&SceneConfig::collision_test(), &mut rng).unwrap();

    for _ in 0..20 {
        sim.advance(1.0);

        sim.strategy = PairStrategy::Grid;
        let grid = sim.detect();
        sim.strategy = PairStrategy::BruteForce;
        let brute = sim.detect();

        assert_eq!(sorted(&grid.contacts), sorted(&brute.contacts));
        assert!(grid.checks < brute.checks);
        assert_eq!(brute.checks, 1000 * 999 / 2);
    }
}

#[test]
fn step_advances_then_detects() {
    let mut sim = ParticleSim::new(100.0, 100.0, 10.0).unwrap();
    sim.add_particle(Particle::new(20.0, 50.0, 2.5).with_velocity(1.0, 0.0));
    sim.add_particle(Particle::new(26.0, 50.0, 2.5).with_velocity(-1.0, 0.0));

    assert!(sim.detect().contacts.is_empty());

    let detection = sim.step(1.0);
    assert_eq!(sim.particles[0].pos.x, 21.0);
    assert_eq!(sim.particles[1].pos.x, 25.0);
    assert_eq!(sim.candidate_pairs(), &[(0, 1)]);
    assert_eq!(detection.checks, 1);
    assert_eq!(detection.contacts, vec![(0, 1)]);
    assert_eq!(detection.colliding_mask(2), vec![true, true]);
}

#[test]
fn contacts_leave_particles_untouched() {
    let mut sim = ParticleSim::new(100.0, 100.0, 10.0).unwrap();
    sim.add_particle(Particle::new(50.0, 50.0, 3.0));
    sim.add_particle(Particle::new(51.0, 50.0, 3.0));
    let before = sim.particles.clone();

    let detection = sim.detect();

    assert_eq!(detection.contacts.len(), 1);
    assert_eq!(sim.particles, before);
}

#[test]
fn particle_bytes_cover_the_buffer() {
    let mut sim = ParticleSim::new(10.0, 10.0, 5.0).unwrap();
    sim.add_particle(Particle::new(1.0, 2.0, 0.5));
    sim.add_particle(Particle::new(3.0, 4.0, 0.5));
    assert_eq!(sim.particle_bytes().len(), 2 * std::mem::size_of::<Particle>());
    assert_eq!(std::mem::size_of::<Particle>(), 5 * 4);
}

#[test]
fn particles_added_between_steps_join_the_same_grid() {
    let mut sim = ParticleSim::new(200.0, 200.0, 20.0).unwrap();
    sim.add_particle(Particle::new(50.0, 50.0, 5.0));
    sim.add_particle(Particle::new(150.0, 150.0, 5.0));

    let before = sim.detect();
    assert_eq!(before.checks, 0);
    assert_eq!(sim.grid().stats().total_entries, 2);

    let added = sim.add_particle(Particle::new(53.0, 50.0, 5.0));
    let after = sim.detect();

    assert_eq!(added, 2);
    assert_eq!(after.contacts, vec![(0, 2)]);
    assert!(sim.candidate_pairs().contains(&(0, added)));
    assert_eq!(sim.grid().stats().total_entries, sim.particles.len());
}

#[test]
fn spawned_batches_are_bucketed_on_next_query() {
    let mut rng = fastrand::Rng::with_seed(77);
    let mut sim = ParticleSim::new(300.0, 300.0, 20.0).unwrap();
    let spawn = ParticleSpawn {
        count: 0,
        radius: [5.0, 10.0],
        speed: [-1.0, 1.0],
        margin: 10.0,
    };

    for batch in 1..=3 {
        sim.spawn(&spawn, 100, &mut rng);
        let grid_contacts = sim.detect().contacts.len();
        assert_eq!(sim.grid().stats().total_entries, batch * 100);

        sim.strategy = PairStrategy::BruteForce;
        assert_eq!(sim.detect().contacts.len(), grid_contacts);
        sim.strategy = PairStrategy::Grid;
    }
}
