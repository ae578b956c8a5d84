#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::systems::integrator::integrate;
use crate::systems::IntegrationTotals;

use super::SimulationCore;

/// Integrate every particle once. Each particle is owned by exactly one
/// task, so the parallel and sequential paths produce identical state.
pub(super) fn process_physics(world: &mut SimulationCore, dt: f32) -> IntegrationTotals {
    let domain = world.domain;
    let friction_model = world.config.friction_model;

    #[cfg(feature = "parallel")]
    {
        world
            .particles
            .par_iter_mut()
            .map(|p| integrate(p, &domain, friction_model, dt))
            .fold(IntegrationTotals::default, IntegrationTotals::record)
            .reduce(IntegrationTotals::default, IntegrationTotals::combine)
    }

    #[cfg(not(feature = "parallel"))]
    {
        world
            .particles
            .iter_mut()
            .map(|p| integrate(p, &domain, friction_model, dt))
            .fold(IntegrationTotals::default(), IntegrationTotals::record)
    }
}
