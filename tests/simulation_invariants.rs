use fluid2d_engine::{SimConfig, SimulationCore, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn randomized_runs_keep_particles_in_bounds() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..8 {
        let mut cfg = SimConfig::new(
            rng.gen_range(1..300),
            rng.gen_range(1..80),
            rng.gen_range(1..80),
        );
        cfg.gravity = rng.gen_range(-150.0..150.0);
        cfg.drag = rng.gen_range(0.0..1.0);
        cfg.initial_velocity_jitter = rng.gen_range(0.0..50.0);
        cfg.collision_tolerance = rng.gen_range(0.0..0.5);
        cfg.spawn_on_grid = rng.gen_bool(0.5);
        cfg.seed = rng.gen();

        let mut sim = SimulationCore::new(cfg).expect("valid config");
        let domain = sim.domain();
        for _ in 0..200 {
            sim.step(rng.gen_range(0.0..0.1)).expect("valid dt");
            for (pos, vel) in sim.read_positions_and_velocities() {
                assert!(domain.contains(pos), "{pos:?} outside {domain:?}");
                assert!(vel.is_finite());
            }
        }
    }
}

#[test]
fn pair_velocity_sum_is_conserved_by_collision() {
    let mut cfg = SimConfig::new(2, 32, 32);
    cfg.gravity = 0.0;
    let mut sim = SimulationCore::new(cfg).expect("valid config");
    for p in sim.particles_mut() {
        p.position = Vec2::new(8.0, 8.0);
        p.velocity = Vec2::new(0.5, -0.25);
    }

    sim.step(0.0).expect("valid dt");

    let particles = sim.particles();
    assert_eq!(particles[0].velocity + particles[1].velocity, Vec2::new(1.0, -0.5));
    assert_eq!(particles[0].velocity, Vec2::new(0.5, 0.75));
}

#[test]
fn density_falls_off_with_distance_from_cluster() {
    let mut cfg = SimConfig::new(3, 64, 64);
    cfg.gravity = 0.0;
    let mut sim = SimulationCore::new(cfg).expect("valid config");
    for p in sim.particles_mut() {
        p.position = Vec2::new(20.0, 20.0);
        p.velocity = Vec2::ZERO;
    }

    let near = sim.query_density(Vec2::new(20.0, 20.0), 8.0).expect("valid query");
    let mid = sim.query_density(Vec2::new(24.0, 20.0), 8.0).expect("valid query");
    let far = sim.query_density(Vec2::new(40.0, 20.0), 8.0).expect("valid query");
    assert!(near > mid && mid > 0.0);
    assert_eq!(far, 0.0);

    let gradient = sim.query_gradient(Vec2::new(24.0, 20.0), 8.0).expect("valid query");
    assert!(gradient.x < 0.0, "gradient should point back to the cluster");
}
