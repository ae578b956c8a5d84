use wasm_bindgen::prelude::*;

use crate::core::{Error, Vec2};

use super::perf_stats::PerfStats;
use super::SimulationCore;

fn js_err(e: Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Zero-copy view of the transfer buffers for the host renderer
#[wasm_bindgen]
pub struct AbiLayout {
    positions_ptr: u32,
    velocities_ptr: u32,
    len_elements: u32,
    len_bytes: u32,
}

#[wasm_bindgen]
impl AbiLayout {
    #[wasm_bindgen(getter)]
    pub fn positions_ptr(&self) -> u32 { self.positions_ptr }
    #[wasm_bindgen(getter)]
    pub fn velocities_ptr(&self) -> u32 { self.velocities_ptr }
    #[wasm_bindgen(getter)]
    pub fn len_elements(&self) -> u32 { self.len_elements }
    #[wasm_bindgen(getter)]
    pub fn len_bytes(&self) -> u32 { self.len_bytes }
}

#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Create a simulation with default physics for the given size
    #[wasm_bindgen(constructor)]
    pub fn new(particle_count: u32, width: u32, height: u32) -> Result<Simulation, JsValue> {
        let core = SimulationCore::with_size(particle_count, width, height).map_err(js_err)?;
        Ok(Self { core })
    }

    /// Create from a JSON config (camelCase keys, all optional)
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String) -> Result<Simulation, JsValue> {
        let core = SimulationCore::from_config_json(&json).map_err(js_err)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn elapsed(&self) -> f64 { self.core.elapsed() }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_gravity(&mut self, gravity: f32) -> Result<(), JsValue> {
        self.core.set_gravity(gravity).map_err(js_err)
    }

    pub fn set_drag(&mut self, drag: f32) -> Result<(), JsValue> {
        self.core.set_drag(drag).map_err(js_err)
    }

    pub fn set_friction(&mut self, friction: f32) -> Result<(), JsValue> {
        self.core.set_friction(friction).map_err(js_err)
    }

    pub fn set_collision_tolerance(&mut self, tolerance: f32) -> Result<(), JsValue> {
        self.core.set_collision_tolerance(tolerance).map_err(js_err)
    }

    pub fn set_predictive_collisions(&mut self, enabled: bool) {
        self.core.set_predictive_collisions(enabled);
    }

    /// Seconds between automatic resets; pass `undefined` to disable
    pub fn set_reset_interval(&mut self, seconds: Option<f32>) -> Result<(), JsValue> {
        self.core.set_reset_interval(seconds).map_err(js_err)
    }

    /// Advance one frame by `dt` seconds; transfer buffers are refreshed
    /// before this returns
    pub fn step(&mut self, dt: f32) -> Result<(), JsValue> {
        self.core.step(dt).map_err(js_err)
    }

    /// Re-seed every particle at a random position with zero velocity
    pub fn reset(&mut self) {
        self.core.reset();
    }

    pub fn query_density(&self, x: f32, y: f32, radius: f32) -> Result<f32, JsValue> {
        self.core.query_density(Vec2::new(x, y), radius).map_err(js_err)
    }

    /// Returns `[gx, gy]`
    pub fn query_gradient(&self, x: f32, y: f32, radius: f32) -> Result<Vec<f32>, JsValue> {
        let g = self.core.query_gradient(Vec2::new(x, y), radius).map_err(js_err)?;
        Ok(vec![g.x, g.y])
    }

    // === TRANSFER BUFFERS ===

    /// Pointer to interleaved `[x, y]` positions (for JS rendering)
    pub fn positions_ptr(&self) -> *const f32 {
        self.core.positions_ptr()
    }

    /// Pointer to interleaved `[vx, vy]` velocities
    pub fn velocities_ptr(&self) -> *const f32 {
        self.core.velocities_ptr()
    }

    pub fn transfer_len_elements(&self) -> usize {
        self.core.transfer_len_elements()
    }

    pub fn transfer_len_bytes(&self) -> usize {
        self.core.transfer_len_bytes()
    }

    pub fn abi_layout(&self) -> AbiLayout {
        let data = self.core.abi_layout_data();
        AbiLayout {
            positions_ptr: data.positions_ptr as u32,
            velocities_ptr: data.velocities_ptr as u32,
            len_elements: data.len_elements as u32,
            len_bytes: data.len_bytes as u32,
        }
    }
}

impl Simulation {
    /// Borrow the core for native callers and tests
    pub fn core(&self) -> &SimulationCore {
        &self.core
    }
}
