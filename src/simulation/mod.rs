//! Simulation - owns the particle buffer and drives one frame at a time
//!
//! Frame order (see `step/step.rs`):
//! 1. rebuild the particle index from current positions
//! 2. detect collisions (read-only, parallel) and apply impulses (serial)
//! 3. integrate every particle (parallel, one task per particle)
//! 4. auto-reset bookkeeping, refresh host transfer buffers
//!
//! Density/gradient queries are independent of the frame loop.

use crate::core::{Result, Vec2};
use crate::domain::{Domain, Particle, SimConfig};
use crate::spatial::ParticleIndex;
use crate::systems::Impulse;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "step/step_collisions.rs"]
mod step_collisions;
#[path = "step/step_physics.rs"]
mod step_physics;
#[path = "query/query.rs"]
mod query;
#[path = "render/readback.rs"]
mod readback;
mod facade;

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

pub use facade::{AbiLayout, Simulation};
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Host-side transfer buffers, interleaved `[x0, y0, x1, y1, ...]`
pub(crate) struct TransferBuffers {
    pub(crate) positions: Vec<f32>,
    pub(crate) velocities: Vec<f32>,
}

pub(crate) struct AbiLayoutData {
    pub(crate) positions_ptr: *const f32,
    pub(crate) velocities_ptr: *const f32,
    pub(crate) len_elements: usize,
    pub(crate) len_bytes: usize,
}

/// The simulation state
pub struct SimulationCore {
    config: SimConfig,
    domain: Domain,
    particles: Vec<Particle>,

    // Rebuilt every frame, kept to reuse allocations
    index: ParticleIndex,
    impulses: Vec<Impulse>,

    // State
    frame: u64,
    elapsed: f64,
    since_reset: f32,
    rng_state: u32,

    transfer: TransferBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Create a simulation with random particle placement (Initialize)
    pub fn new(config: SimConfig) -> Result<Self> {
        init::create_simulation_core(config)
    }

    /// Shorthand for the legacy `(particleCount, width, height)` entry point
    pub fn with_size(particle_count: u32, width: u32, height: u32) -> Result<Self> {
        Self::new(SimConfig::new(particle_count, width, height))
    }

    pub fn from_config_json(json: &str) -> Result<Self> {
        Self::new(SimConfig::from_json(json)?)
    }

    pub fn config(&self) -> &SimConfig { &self.config }

    pub fn domain(&self) -> Domain { self.domain }

    pub fn width(&self) -> u32 { self.domain.width() }

    pub fn height(&self) -> u32 { self.domain.height() }

    pub fn particle_count(&self) -> usize { self.particles.len() }

    pub fn frame(&self) -> u64 { self.frame }

    /// Simulated seconds since construction
    pub fn elapsed(&self) -> f64 { self.elapsed }

    pub fn particles(&self) -> &[Particle] { &self.particles }

    /// Mutable access for hosts that place particles themselves
    pub fn particles_mut(&mut self) -> &mut [Particle] { &mut self.particles }

    /// Index as built at the start of the last frame
    pub fn index(&self) -> &ParticleIndex { &self.index }

    // === Settings ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn set_gravity(&mut self, gravity: f32) -> Result<()> {
        settings::set_gravity(self, gravity)
    }

    pub fn set_drag(&mut self, drag: f32) -> Result<()> {
        settings::set_drag(self, drag)
    }

    pub fn set_friction(&mut self, friction: f32) -> Result<()> {
        settings::set_friction(self, friction)
    }

    pub fn set_collision_tolerance(&mut self, tolerance: f32) -> Result<()> {
        settings::set_collision_tolerance(self, tolerance)
    }

    pub fn set_predictive_collisions(&mut self, enabled: bool) {
        settings::set_predictive_collisions(self, enabled);
    }

    pub fn set_reset_interval(&mut self, seconds: Option<f32>) -> Result<()> {
        settings::set_reset_interval(self, seconds)
    }

    // === Commands ===

    /// Re-seed every particle at a random in-domain position (Reset)
    pub fn reset(&mut self) {
        commands::reset(self);
    }

    // === Step ===

    /// Advance one frame by `dt` seconds (Step)
    pub fn step(&mut self, dt: f32) -> Result<()> {
        step::step(self, dt)
    }

    fn rebuild_index(&mut self) {
        step_collisions::rebuild_index(self);
    }

    fn process_collisions(&mut self) -> usize {
        step_collisions::process_collisions(self)
    }

    fn process_physics(&mut self, dt: f32) -> crate::systems::IntegrationTotals {
        step_physics::process_physics(self, dt)
    }

    // === Queries ===

    /// Kernel density at `point` over current positions (QueryDensity)
    pub fn query_density(&self, point: Vec2, radius: f32) -> Result<f32> {
        query::query_density(self, point, radius)
    }

    /// Density gradient at `point` (QueryGradient)
    pub fn query_gradient(&self, point: Vec2, radius: f32) -> Result<Vec2> {
        query::query_gradient(self, point, radius)
    }

    /// Kernel-weighted sum of one scalar per particle at `point`
    pub fn query_property(&self, point: Vec2, radius: f32, values: &[f32]) -> Result<f32> {
        query::query_property(self, point, radius, values)
    }

    pub fn positions(&self) -> Vec<Vec2> {
        query::positions(self)
    }

    // === Read-back ===

    /// (position, velocity) per particle, in buffer order
    pub fn read_positions_and_velocities(&self) -> Vec<(Vec2, Vec2)> {
        readback::read_positions_and_velocities(self)
    }

    fn refresh_transfer_buffers(&mut self) {
        readback::refresh_transfer_buffers(self);
    }

    pub fn positions_ptr(&self) -> *const f32 {
        self.transfer.positions.as_ptr()
    }

    pub fn velocities_ptr(&self) -> *const f32 {
        self.transfer.velocities.as_ptr()
    }

    pub fn transfer_len_elements(&self) -> usize {
        self.transfer.positions.len()
    }

    pub fn transfer_len_bytes(&self) -> usize {
        self.transfer.positions.len() * std::mem::size_of::<f32>()
    }

    pub(crate) fn abi_layout_data(&self) -> AbiLayoutData {
        AbiLayoutData {
            positions_ptr: self.positions_ptr(),
            velocities_ptr: self.velocities_ptr(),
            len_elements: self.transfer_len_elements(),
            len_bytes: self.transfer_len_bytes(),
        }
    }
}
