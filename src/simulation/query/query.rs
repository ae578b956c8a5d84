use crate::core::{Result, Vec2};
use crate::systems::density;

use super::SimulationCore;

pub(super) fn positions(world: &SimulationCore) -> Vec<Vec2> {
    world.particles.iter().map(|p| p.position).collect()
}

pub(super) fn query_density(world: &SimulationCore, point: Vec2, radius: f32) -> Result<f32> {
    density::density(point, radius, &positions(world))
}

pub(super) fn query_gradient(world: &SimulationCore, point: Vec2, radius: f32) -> Result<Vec2> {
    density::density_gradient(point, radius, &positions(world))
}

pub(super) fn query_property(
    world: &SimulationCore,
    point: Vec2,
    radius: f32,
    values: &[f32],
) -> Result<f32> {
    density::property(point, radius, &positions(world), values)
}
