#![cfg(target_arch = "wasm32")]

use fluid2d_engine::Simulation;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn facade_steps_and_exposes_buffers() {
    fluid2d_engine::init();
    let mut sim = Simulation::new(64, 32, 32).expect("valid size");
    sim.step(1.0 / 60.0).expect("valid dt");
    assert_eq!(sim.transfer_len_elements(), 128);
    assert!(!sim.positions_ptr().is_null());
    assert_eq!(sim.abi_layout().len_bytes(), 512);
}

#[wasm_bindgen_test]
fn facade_reports_errors_as_strings() {
    let mut sim = Simulation::new(4, 8, 8).expect("valid size");
    let err = sim.step(-1.0).err().unwrap_or(JsValue::NULL);
    assert!(err.as_string().unwrap_or_default().contains("timestep"));
    assert!(Simulation::new(4, 0, 8).is_err());
    assert_eq!(sim.query_gradient(4.0, 4.0, 2.0).expect("valid query").len(), 2);
}
