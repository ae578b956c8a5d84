//! Fluid2D Engine - particle field simulation with kernel density queries
//!
//! Architecture:
//! - core/        - Vec2, errors, console logging
//! - domain/      - config, domain bounds, particles
//! - spatial/     - row/column particle index
//! - systems/     - integrator, collisions, density kernel
//! - simulation/  - orchestration and the wasm facade

pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook and console logger
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    crate::core::logging::init_console_logger(log::LevelFilter::Info);

    log::info!("fluid2d engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{Error, Result, Vec2};
pub use domain::{Domain, Particle, SimConfig};
pub use simulation::{AbiLayout, PerfStats, Simulation, SimulationCore};
