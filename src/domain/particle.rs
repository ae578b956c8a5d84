use serde::{Deserialize, Serialize};

use crate::core::{Error, Result, Vec2};

use super::config::{valid_side, SimConfig};

/// Index of a particle inside the simulation's fixed buffer
pub type ParticleId = usize;

/// Simulated region `[0, width] x [0, height]`.
///
/// Shared by every particle; the upper bound is inclusive, so a particle may
/// rest exactly on `width` or `height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    width: u32,
    height: u32,
}

impl Domain {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if !valid_side(width) || !valid_side(height) {
            return Err(Error::InvalidDomain { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn max_x(&self) -> f32 { self.width as f32 }

    #[inline]
    pub fn max_y(&self) -> f32 { self.height as f32 }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.max_x() && p.y >= 0.0 && p.y <= self.max_y()
    }
}

/// Per-particle physical constants (uniform across a run in practice)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub gravity: f32,
    pub drag: f32,
    pub friction: f32,
}

impl Material {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            gravity: config.gravity,
            drag: config.drag,
            friction: config.friction,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub material: Material,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, material: Material) -> Self {
        Self { position, velocity, material }
    }

    /// Place at rest at `position`
    pub fn at_rest(position: Vec2, material: Material) -> Self {
        Self::new(position, Vec2::ZERO, material)
    }

    /// Re-seed in place; material survives a reset
    pub fn reset(&mut self, position: Vec2, velocity: Vec2) {
        self.position = position;
        self.velocity = velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_rejects_zero_sides() {
        assert!(Domain::new(0, 10).is_err());
        assert!(Domain::new(10, 0).is_err());
        assert!(Domain::new(1, 1).is_ok());
        assert!(Domain::new(u32::MAX, 1).is_err());
    }

    #[test]
    fn domain_upper_bound_is_inclusive() {
        let d = Domain::new(256, 128).expect("valid domain");
        assert!(d.contains(Vec2::new(256.0, 128.0)));
        assert!(!d.contains(Vec2::new(256.1, 0.0)));
        assert!(!d.contains(Vec2::new(0.0, -0.1)));
    }

    #[test]
    fn reset_keeps_material() {
        let material = Material { gravity: 1.0, drag: 0.5, friction: 0.2 };
        let mut p = Particle::new(Vec2::new(3.0, 4.0), Vec2::new(1.0, 1.0), material);
        p.reset(Vec2::new(7.0, 8.0), Vec2::ZERO);
        assert_eq!(p.position, Vec2::new(7.0, 8.0));
        assert_eq!(p.velocity, Vec2::ZERO);
        assert_eq!(p.material, material);
    }
}
