#[cfg(target_arch = "wasm32")]
use js_sys;

/// Wall-clock stopwatch: `Date.now()` in the browser, `Instant` natively.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    start_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            PerfTimer { start_ms: js_sys::Date::now() }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            PerfTimer { start: std::time::Instant::now() }
        }
    }

    /// Only start a timer when metrics are on
    pub(crate) fn start_if(enabled: bool) -> Option<Self> {
        if enabled { Some(Self::start()) } else { None }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() - self.start_ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.start.elapsed().as_secs_f64() * 1000.0
        }
    }
}

/// Elapsed ms of an optional timer (0 when metrics are off)
pub(crate) fn elapsed_or_zero(timer: Option<PerfTimer>) -> f64 {
    timer.map(|t| t.elapsed_ms()).unwrap_or(0.0)
}
