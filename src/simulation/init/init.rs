use log::info;

use crate::core::Result;
use crate::domain::{Domain, Material, Particle, SimConfig};
use crate::spatial::ParticleIndex;

use super::perf_stats::PerfStats;
use super::random;
use super::{SimulationCore, TransferBuffers};

pub(super) fn create_simulation_core(config: SimConfig) -> Result<SimulationCore> {
    config.validate()?;
    let domain = Domain::new(config.domain_width, config.domain_height)?;
    let count = config.particle_count as usize;

    let mut rng_state = random::seed_state(config.seed);
    let material = Material::from_config(&config);
    let particles: Vec<Particle> = (0..count)
        .map(|_| {
            let (position, velocity) = random::spawn(&mut rng_state, &domain, &config);
            Particle::new(position, velocity, material)
        })
        .collect();

    let mut core = SimulationCore {
        index: ParticleIndex::new(domain.width(), domain.height()),
        impulses: Vec::with_capacity(count),
        frame: 0,
        elapsed: 0.0,
        since_reset: 0.0,
        rng_state,
        transfer: TransferBuffers {
            positions: vec![0.0; count * 2],
            velocities: vec![0.0; count * 2],
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        config,
        domain,
        particles,
    };
    core.refresh_transfer_buffers();

    info!(
        "simulation ready: {} particles in {}x{}",
        count,
        domain.width(),
        domain.height()
    );
    Ok(core)
}
