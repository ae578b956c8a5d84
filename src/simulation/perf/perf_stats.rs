use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) index_ms: f64,
    pub(super) collision_ms: f64,
    pub(super) physics_ms: f64,
    pub(super) particles_processed: u32,
    pub(super) collisions: u32,
    pub(super) wall_bounces: u32,
    pub(super) floor_contacts: u32,
    pub(super) resets: u32,
    pub(super) particle_count: u32,
    pub(super) memory_bytes: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn index_ms(&self) -> f64 { self.index_ms }
    #[wasm_bindgen(getter)]
    pub fn collision_ms(&self) -> f64 { self.collision_ms }
    #[wasm_bindgen(getter)]
    pub fn physics_ms(&self) -> f64 { self.physics_ms }
    #[wasm_bindgen(getter)]
    pub fn particles_processed(&self) -> u32 { self.particles_processed }
    #[wasm_bindgen(getter)]
    pub fn collisions(&self) -> u32 { self.collisions }
    #[wasm_bindgen(getter)]
    pub fn wall_bounces(&self) -> u32 { self.wall_bounces }
    #[wasm_bindgen(getter)]
    pub fn floor_contacts(&self) -> u32 { self.floor_contacts }
    #[wasm_bindgen(getter)]
    pub fn resets(&self) -> u32 { self.resets }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn memory_bytes(&self) -> u32 { self.memory_bytes }
}
