#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::systems::collision::{apply_impulses, collect_impulses};

use super::SimulationCore;

/// Fresh index from current positions; ids are buffer indices.
pub(super) fn rebuild_index(world: &mut SimulationCore) {
    let (width, height) = (world.domain.width(), world.domain.height());
    world
        .index
        .rebuild_from(width, height, world.particles.iter().map(|p| p.position));
}

/// Detect every colliding pair, then apply the impulses serially.
/// Returns the number of pairs.
pub(super) fn process_collisions(world: &mut SimulationCore) -> usize {
    let policy = world.config.collision_policy();
    let particles = &world.particles;
    let index = &world.index;

    world.impulses.clear();

    #[cfg(feature = "parallel")]
    {
        world.impulses.par_extend((0..particles.len()).into_par_iter().flat_map_iter(|id| {
            let mut found = Vec::new();
            collect_impulses(id, particles, index, &policy, &mut found);
            found
        }));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for id in 0..particles.len() {
            collect_impulses(id, particles, index, &policy, &mut world.impulses);
        }
    }

    apply_impulses(&mut world.particles, &world.impulses);
    world.impulses.len()
}
