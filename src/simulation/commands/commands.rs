use log::info;

use super::random;
use super::SimulationCore;

/// Re-seed every particle at a random in-domain position.
pub(super) fn reset(world: &mut SimulationCore) {
    reseed_particles(world);
    world.since_reset = 0.0;
    world.refresh_transfer_buffers();
    info!("simulation reset at frame {}", world.frame);
}

/// Consumes the RNG stream in buffer order.
pub(super) fn reseed_particles(world: &mut SimulationCore) {
    let domain = world.domain;
    for p in world.particles.iter_mut() {
        let (position, velocity) = random::spawn(&mut world.rng_state, &domain, &world.config);
        p.reset(position, velocity);
    }
    if world.perf_enabled {
        world.perf_stats.resets = world.perf_stats.resets.saturating_add(1);
    }
}
