pub mod config;
pub mod particle;

pub use config::{CollisionMode, CollisionPolicy, FrictionModel, SimConfig};
pub use particle::{Domain, Material, Particle, ParticleId};
