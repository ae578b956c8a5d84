use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

pub const DEFAULT_PARTICLE_COUNT: u32 = 256;
pub const DEFAULT_DOMAIN_SIZE: u32 = 256;
pub const DEFAULT_GRAVITY: f32 = 96.2;
/// Legacy auto-reset period (seconds); auto-reset is off unless configured.
pub const LEGACY_RESET_INTERVAL: f32 = 10.0;
pub const DEFAULT_SEED: u32 = 12345;
/// Largest accepted domain side; the index allocates one bucket per unit.
pub const MAX_DOMAIN_SIDE: u32 = 1 << 16;
pub const MAX_PARTICLE_COUNT: u32 = 1 << 22;

/// How floor contact bleeds horizontal velocity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FrictionModel {
    /// `vx -= friction` every frame spent on the floor
    #[default]
    Subtract,
    /// `vx *= friction` every frame spent on the floor
    Scale,
}

/// Which position of the other particle is compared during collision tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollisionMode {
    #[default]
    Current,
    /// Compare against where the other particle will be after one velocity step
    Predictive,
}

/// Neighbor/collision policy handed to the resolver.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CollisionPolicy {
    /// Per-axis match tolerance; 0.0 reproduces exact float equality.
    pub tolerance: f32,
    pub mode: CollisionMode,
}

/// Simulation configuration. Every field has a default so a partial JSON
/// object (or `{}`) is a valid config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimConfig {
    pub particle_count: u32,
    pub domain_width: u32,
    pub domain_height: u32,
    pub gravity: f32,
    /// Restitution multiplier applied to the reflected velocity component
    pub drag: f32,
    pub friction: f32,
    pub friction_model: FrictionModel,
    /// Seconds of simulated time between automatic resets; `None` disables.
    pub reset_interval_seconds: Option<f32>,
    pub collision_tolerance: f32,
    pub predictive_collisions: bool,
    /// Spawn on whole-number coordinates
    pub spawn_on_grid: bool,
    /// Half-width of the random initial X velocity range
    pub initial_velocity_jitter: f32,
    pub seed: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            domain_width: DEFAULT_DOMAIN_SIZE,
            domain_height: DEFAULT_DOMAIN_SIZE,
            gravity: DEFAULT_GRAVITY,
            drag: 1.0,
            friction: 1.0,
            friction_model: FrictionModel::Subtract,
            reset_interval_seconds: None,
            collision_tolerance: 0.0,
            predictive_collisions: false,
            spawn_on_grid: true,
            initial_velocity_jitter: 0.0,
            seed: DEFAULT_SEED,
        }
    }
}

impl SimConfig {
    pub fn new(particle_count: u32, domain_width: u32, domain_height: u32) -> Self {
        Self {
            particle_count,
            domain_width,
            domain_height,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<()> {
        if !valid_side(self.domain_width) || !valid_side(self.domain_height) {
            return Err(Error::InvalidDomain {
                width: self.domain_width,
                height: self.domain_height,
            });
        }
        if self.particle_count > MAX_PARTICLE_COUNT {
            return Err(Error::InvalidConfig(format!(
                "particleCount must be <= {}, got {}",
                MAX_PARTICLE_COUNT, self.particle_count
            )));
        }
        check_finite("gravity", self.gravity)?;
        check_non_negative("drag", self.drag)?;
        check_non_negative("friction", self.friction)?;
        check_non_negative("collisionTolerance", self.collision_tolerance)?;
        check_non_negative("initialVelocityJitter", self.initial_velocity_jitter)?;
        if let Some(interval) = self.reset_interval_seconds {
            if !interval.is_finite() || interval <= 0.0 {
                return Err(Error::InvalidConfig(
                    "resetIntervalSeconds must be finite and > 0".into(),
                ));
            }
        }
        Ok(())
    }

    pub fn collision_policy(&self) -> CollisionPolicy {
        CollisionPolicy {
            tolerance: self.collision_tolerance,
            mode: if self.predictive_collisions {
                CollisionMode::Predictive
            } else {
                CollisionMode::Current
            },
        }
    }
}

#[inline]
pub(crate) fn valid_side(side: u32) -> bool {
    (1..=MAX_DOMAIN_SIDE).contains(&side)
}

pub(crate) fn check_finite(name: &str, value: f32) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::InvalidConfig(format!("{} must be finite", name)));
    }
    Ok(())
}

pub(crate) fn check_non_negative(name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidConfig(format!("{} must be finite and >= 0", name)));
    }
    Ok(())
}
