//! Collision Resolver - pairwise impulses between index neighbours
//!
//! Candidates for particle `i` are the particles in its row, then in its
//! column (see `ParticleIndex`). A candidate collides when its position
//! matches `i`'s position within the policy tolerance. In predictive mode
//! the pair collides when either particle's position + velocity lands on
//! the other's position. Tolerance 0 means exact float equality,
//! which almost never fires for continuously moving particles.
//!
//! Detection only reads state, so it can run for all particles at once;
//! the resulting impulses are applied afterwards in a single serial pass.

use crate::core::Vec2;
use crate::domain::{CollisionMode, CollisionPolicy, Particle, ParticleId};
use crate::spatial::ParticleIndex;

use super::types::Impulse;

/// Impulse for a pair matched through the shared row
pub const ROW_IMPULSE: Vec2 = Vec2::UP;
/// Impulse for a pair matched through the shared column only
pub const COLUMN_IMPULSE: Vec2 = Vec2::RIGHT;

/// Symmetric in `query` and `other`, so testing a pair from one side is enough.
#[inline]
fn collides(query: &Particle, other: &Particle, policy: &CollisionPolicy) -> bool {
    let tolerance = policy.tolerance;
    match policy.mode {
        CollisionMode::Current => other.position.approx_eq(query.position, tolerance),
        CollisionMode::Predictive => {
            (other.position + other.velocity).approx_eq(query.position, tolerance)
                || (query.position + query.velocity).approx_eq(other.position, tolerance)
        }
    }
}

/// Append every impulse particle `id` takes part in as the lower id.
///
/// Each unordered pair is therefore tested exactly once per frame, and a
/// pair sharing both row and column is resolved once, through the row.
pub fn collect_impulses(
    id: ParticleId,
    particles: &[Particle],
    index: &ParticleIndex,
    policy: &CollisionPolicy,
    out: &mut Vec<Impulse>,
) {
    let query = &particles[id];
    let (bin_x, bin_y) = index.bin_of(query.position);

    for &other in index.row(bin_y) {
        if other <= id {
            continue;
        }
        if collides(query, &particles[other], policy) {
            out.push(Impulse { a: id, b: other, force: ROW_IMPULSE });
        }
    }

    for &other in index.column(bin_x) {
        if other <= id {
            continue;
        }
        // Already tested through the row
        if index.bin_of(particles[other].position).1 == bin_y {
            continue;
        }
        if collides(query, &particles[other], policy) {
            out.push(Impulse { a: id, b: other, force: COLUMN_IMPULSE });
        }
    }
}

/// Convenience wrapper returning the impulses for one particle.
pub fn resolve(
    id: ParticleId,
    particles: &[Particle],
    index: &ParticleIndex,
    policy: &CollisionPolicy,
) -> Vec<Impulse> {
    let mut out = Vec::new();
    collect_impulses(id, particles, index, policy, &mut out);
    out
}

/// Apply impulses in order: `+force` on `a`, `-force` on `b`.
pub fn apply_impulses(particles: &mut [Particle], impulses: &[Impulse]) {
    for impulse in impulses {
        particles[impulse.a].velocity += impulse.force;
        particles[impulse.b].velocity -= impulse.force;
    }
}
