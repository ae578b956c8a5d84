//! Console logger - routes `log` records to the browser console
//!
//! Native builds (tests, benches) never install it; `log` macros are no-ops
//! there unless the embedding binary installs its own logger.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}", record.target(), record.args());
        let msg = JsValue::from(line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger once; later calls only adjust the level.
pub fn init_console_logger(level: LevelFilter) {
    // set_logger fails if a logger is already installed, which is fine
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
