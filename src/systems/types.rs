use crate::core::Vec2;
use crate::domain::ParticleId;

/// What happened to a single particle during one integration step
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IntegrationResult {
    /// Number of walls the particle was reflected off (0..=2)
    pub bounces: u32,
    /// Particle ended the step on the floor and had friction applied
    pub floor_contact: bool,
}

/// Aggregate of every `IntegrationResult` in a pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntegrationTotals {
    pub particles: u32,
    pub wall_bounces: u32,
    pub floor_contacts: u32,
}

impl IntegrationTotals {
    #[inline]
    pub fn record(mut self, result: IntegrationResult) -> Self {
        self.particles += 1;
        self.wall_bounces += result.bounces;
        if result.floor_contact {
            self.floor_contacts += 1;
        }
        self
    }

    #[inline]
    pub fn combine(self, other: Self) -> Self {
        Self {
            particles: self.particles + other.particles,
            wall_bounces: self.wall_bounces + other.wall_bounces,
            floor_contacts: self.floor_contacts + other.floor_contacts,
        }
    }
}

/// Equal-and-opposite velocity change for one colliding pair.
/// `force` is added to `a` and subtracted from `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Impulse {
    pub a: ParticleId,
    pub b: ParticleId,
    pub force: Vec2,
}
