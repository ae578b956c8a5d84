//! Per-particle systems: integration, collision response, density queries.

pub mod collision;
pub mod density;
pub mod integrator;
pub mod types;

pub use collision::{apply_impulses, collect_impulses, resolve};
pub use density::{density, density_gradient, property, property_gradient, smoothing_kernel};
pub use integrator::{clamp_to_boundaries, integrate};
pub use types::{Impulse, IntegrationResult, IntegrationTotals};
