//! Integrator - explicit Euler step with reflecting walls
//!
//! Per particle and step:
//! 1. velocity += DOWN * gravity * dt
//! 2. position += velocity * dt
//! 3. clamp to the domain, reflecting the velocity component that hit a wall
//! 4. friction on the floor (y == 0) for that frame only

use crate::core::Vec2;
use crate::domain::{Domain, FrictionModel, Particle};

use super::types::IntegrationResult;

/// Advance one particle by `dt` seconds.
#[inline]
pub fn integrate(
    particle: &mut Particle,
    domain: &Domain,
    friction_model: FrictionModel,
    dt: f32,
) -> IntegrationResult {
    particle.velocity += Vec2::DOWN * particle.material.gravity * dt;
    particle.position += particle.velocity * dt;
    clamp_to_boundaries(particle, domain, friction_model)
}

/// Keep the particle inside `[0, width] x [0, height]` (upper bound inclusive).
///
/// Walls reflect the normal velocity component scaled by `drag`. The ceiling
/// keeps the legacy rule `vy = -y` computed from the overshooting position.
pub fn clamp_to_boundaries(
    particle: &mut Particle,
    domain: &Domain,
    friction_model: FrictionModel,
) -> IntegrationResult {
    let drag = particle.material.drag;
    let max_x = domain.max_x();
    let max_y = domain.max_y();
    let pos = &mut particle.position;
    let vel = &mut particle.velocity;
    let mut result = IntegrationResult::default();

    // Side walls
    if pos.x < 0.0 {
        vel.x = -vel.x * drag;
        pos.x = 0.0;
        result.bounces += 1;
    } else if pos.x > max_x {
        vel.x = -vel.x * drag;
        pos.x = max_x;
        result.bounces += 1;
    }

    // Floor and ceiling
    if pos.y < 0.0 {
        vel.y = -vel.y * drag;
        pos.y = 0.0;
        result.bounces += 1;
    } else if pos.y > max_y {
        vel.y = -pos.y * drag;
        pos.y = max_y;
        result.bounces += 1;
    }

    // NaN compares false above; pin it to the origin so the invariant holds
    if !pos.x.is_finite() || !pos.y.is_finite() {
        *pos = Vec2::new(
            if pos.x.is_finite() { pos.x } else { 0.0 },
            if pos.y.is_finite() { pos.y } else { 0.0 },
        );
        *vel = Vec2::ZERO;
    }

    if pos.y == 0.0 {
        vel.x = apply_floor_friction(vel.x, particle.material.friction, friction_model);
        result.floor_contact = true;
    }

    result
}

#[inline]
fn apply_floor_friction(vx: f32, friction: f32, model: FrictionModel) -> f32 {
    match model {
        // Never flips direction: a particle at rest stays at rest
        FrictionModel::Subtract => {
            if vx.abs() <= friction {
                0.0
            } else {
                vx - friction * vx.signum()
            }
        }
        FrictionModel::Scale => vx * friction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Material;

    fn material(gravity: f32) -> Material {
        Material { gravity, drag: 1.0, friction: 1.0 }
    }

    fn domain() -> Domain {
        Domain::new(256, 256).expect("valid domain")
    }

    #[test]
    fn gravity_pulls_towards_floor() {
        let mut p = Particle::at_rest(Vec2::new(100.0, 100.0), material(10.0));
        integrate(&mut p, &domain(), FrictionModel::Subtract, 0.5);
        assert_eq!(p.velocity, Vec2::new(0.0, -5.0));
        assert_eq!(p.position, Vec2::new(100.0, 97.5));
    }

    #[test]
    fn ceiling_overshoot_reflects_with_position() {
        let d = domain();
        let mut p = Particle::new(Vec2::new(10.0, 250.0), Vec2::new(0.0, 5.0), material(0.0));

        let r = integrate(&mut p, &d, FrictionModel::Subtract, 1.0);
        assert_eq!(p.position, Vec2::new(10.0, 255.0));
        assert_eq!(r.bounces, 0);

        let r = integrate(&mut p, &d, FrictionModel::Subtract, 1.0);
        assert_eq!(p.velocity.y, -260.0);
        assert_eq!(p.position.y, 256.0);
        assert_eq!(r.bounces, 1);
    }

    #[test]
    fn side_walls_reflect_and_clamp() {
        let d = domain();
        let mut left = Particle::new(Vec2::new(1.0, 50.0), Vec2::new(-4.0, 0.0), material(0.0));
        integrate(&mut left, &d, FrictionModel::Subtract, 1.0);
        assert_eq!(left.position.x, 0.0);
        assert_eq!(left.velocity.x, 4.0);

        let mut right = Particle::new(Vec2::new(255.0, 50.0), Vec2::new(4.0, 0.0), material(0.0));
        integrate(&mut right, &d, FrictionModel::Subtract, 1.0);
        assert_eq!(right.position.x, 256.0);
        assert_eq!(right.velocity.x, -4.0);
    }

    #[test]
    fn drag_damps_reflection() {
        let d = domain();
        let m = Material { gravity: 0.0, drag: 0.5, friction: 0.0 };
        let mut p = Particle::new(Vec2::new(1.0, 50.0), Vec2::new(-4.0, 0.0), m);
        integrate(&mut p, &d, FrictionModel::Subtract, 1.0);
        assert_eq!(p.velocity.x, 2.0);
    }

    #[test]
    fn floor_hit_reflects_and_applies_friction() {
        let d = domain();
        let mut p = Particle::new(Vec2::new(50.0, 2.0), Vec2::new(3.0, -5.0), material(0.0));
        let r = integrate(&mut p, &d, FrictionModel::Subtract, 1.0);
        assert_eq!(p.position.y, 0.0);
        assert_eq!(p.velocity.y, 5.0);
        assert_eq!(p.velocity.x, 2.0);
        assert!(r.floor_contact);
    }

    #[test]
    fn subtract_friction_stops_without_reversing() {
        assert_eq!(apply_floor_friction(0.5, 1.0, FrictionModel::Subtract), 0.0);
        assert_eq!(apply_floor_friction(-3.0, 1.0, FrictionModel::Subtract), -2.0);
        assert_eq!(apply_floor_friction(0.0, 1.0, FrictionModel::Subtract), 0.0);
    }

    #[test]
    fn scale_friction_multiplies() {
        assert!((apply_floor_friction(4.0, 0.9, FrictionModel::Scale) - 3.6).abs() < 1e-6);
    }

    #[test]
    fn resting_particle_without_gravity_stays_put() {
        let d = domain();
        for start in [Vec2::new(0.0, 0.0), Vec2::new(128.0, 0.0), Vec2::new(256.0, 256.0), Vec2::new(7.0, 9.0)] {
            let mut p = Particle::at_rest(start, material(0.0));
            for _ in 0..100 {
                integrate(&mut p, &d, FrictionModel::Subtract, 1.0 / 60.0);
            }
            assert_eq!(p.position, start);
            assert_eq!(p.velocity, Vec2::ZERO);
        }
    }

    #[test]
    fn non_finite_state_is_pinned_inside() {
        let d = domain();
        let mut p = Particle::new(Vec2::new(f32::NAN, 10.0), Vec2::new(f32::NAN, 0.0), material(0.0));
        integrate(&mut p, &d, FrictionModel::Subtract, 1.0);
        assert!(d.contains(p.position));
        assert_eq!(p.velocity, Vec2::ZERO);
    }
}
