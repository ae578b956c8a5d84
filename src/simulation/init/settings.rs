use log::warn;

use crate::core::{Error, Result};
use crate::domain::config::{check_finite, check_non_negative};

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn enable_perf_metrics(world: &mut SimulationCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &SimulationCore) -> PerfStats {
    world.perf_stats.clone()
}

/// Log and pass through a rejected setting
fn rejected(err: Error) -> Error {
    warn!("setting rejected: {}", err);
    err
}

pub(super) fn set_gravity(world: &mut SimulationCore, gravity: f32) -> Result<()> {
    check_finite("gravity", gravity).map_err(rejected)?;
    world.config.gravity = gravity;
    for p in world.particles.iter_mut() {
        p.material.gravity = gravity;
    }
    Ok(())
}

pub(super) fn set_drag(world: &mut SimulationCore, drag: f32) -> Result<()> {
    check_non_negative("drag", drag).map_err(rejected)?;
    world.config.drag = drag;
    for p in world.particles.iter_mut() {
        p.material.drag = drag;
    }
    Ok(())
}

pub(super) fn set_friction(world: &mut SimulationCore, friction: f32) -> Result<()> {
    check_non_negative("friction", friction).map_err(rejected)?;
    world.config.friction = friction;
    for p in world.particles.iter_mut() {
        p.material.friction = friction;
    }
    Ok(())
}

pub(super) fn set_collision_tolerance(world: &mut SimulationCore, tolerance: f32) -> Result<()> {
    check_non_negative("collisionTolerance", tolerance).map_err(rejected)?;
    world.config.collision_tolerance = tolerance;
    Ok(())
}

pub(super) fn set_predictive_collisions(world: &mut SimulationCore, enabled: bool) {
    world.config.predictive_collisions = enabled;
}

pub(super) fn set_reset_interval(world: &mut SimulationCore, seconds: Option<f32>) -> Result<()> {
    if let Some(s) = seconds {
        if !s.is_finite() || s <= 0.0 {
            return Err(rejected(Error::InvalidConfig(
                "resetIntervalSeconds must be finite and > 0".into(),
            )));
        }
    }
    world.config.reset_interval_seconds = seconds;
    world.since_reset = 0.0;
    Ok(())
}
