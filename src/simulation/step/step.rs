use log::debug;

use crate::core::{Error, Result};

use super::commands;
use super::perf_timer::elapsed_or_zero;
use super::{PerfTimer, SimulationCore};

pub(super) fn step(world: &mut SimulationCore, dt: f32) -> Result<()> {
    if !dt.is_finite() || dt < 0.0 {
        return Err(Error::InvalidTimestep(dt));
    }

    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.particle_count = world.particles.len() as u32;
        // rough estimate: particle (position+velocity+material) + two index ids + transfer buffers
        world.perf_stats.memory_bytes = (world.particles.len() as u32).saturating_mul(60);
    }
    let step_start = PerfTimer::start_if(perf_on);

    // === INDEX: rebuild once per frame, read-only afterwards ===
    let t0 = PerfTimer::start_if(perf_on);
    world.rebuild_index();
    let index_ms = elapsed_or_zero(t0);

    // === COLLISIONS: detect against the fresh index, then apply impulses ===
    let t0 = PerfTimer::start_if(perf_on);
    let collisions = world.process_collisions();
    let collision_ms = elapsed_or_zero(t0);
    if collisions > 0 {
        debug!("frame {}: {} collisions", world.frame, collisions);
    }

    // === PHYSICS: gravity, motion, walls, floor friction ===
    let t0 = PerfTimer::start_if(perf_on);
    let totals = world.process_physics(dt);
    let physics_ms = elapsed_or_zero(t0);

    world.elapsed += dt as f64;
    world.since_reset += dt;

    // Periodic auto-reset: first fire after one full interval
    if let Some(interval) = world.config.reset_interval_seconds {
        if world.since_reset >= interval {
            debug!("auto-reset after {:.2}s at frame {}", world.since_reset, world.frame);
            commands::reseed_particles(world);
            world.since_reset = 0.0;
        }
    }

    world.refresh_transfer_buffers();

    if perf_on {
        let stats = &mut world.perf_stats;
        stats.index_ms = index_ms;
        stats.collision_ms = collision_ms;
        stats.physics_ms = physics_ms;
        stats.collisions = collisions as u32;
        stats.particles_processed = totals.particles;
        stats.wall_bounces = totals.wall_bounces;
        stats.floor_contacts = totals.floor_contacts;
        stats.step_ms = elapsed_or_zero(step_start);
    }

    world.frame += 1;
    Ok(())
}
