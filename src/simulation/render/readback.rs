use crate::core::Vec2;

use super::SimulationCore;

pub(super) fn read_positions_and_velocities(world: &SimulationCore) -> Vec<(Vec2, Vec2)> {
    world
        .particles
        .iter()
        .map(|p| (p.position, p.velocity))
        .collect()
}

/// Copy particle state into the interleaved buffers the host reads through
/// `positions_ptr` / `velocities_ptr`. Buffer length is fixed at 2 * count.
pub(super) fn refresh_transfer_buffers(world: &mut SimulationCore) {
    let positions = &mut world.transfer.positions;
    let velocities = &mut world.transfer.velocities;

    for (i, p) in world.particles.iter().enumerate() {
        let o = i * 2;
        positions[o] = p.position.x;
        positions[o + 1] = p.position.y;
        velocities[o] = p.velocity.x;
        velocities[o + 1] = p.velocity.y;
    }
}
