use js_sys::Date;
use wasm_bindgen::JsCast;
use web_sys::{Performance, WorkerGlobalScope};

use crate::global::get_global_scope;
use crate::ports::ClockPort;

/// Wall clock for WASM. `Date.now()` supplies unix time; availability probes
/// the Performance API that backs the console timing brackets, whether the
/// module runs in a worker or on the main thread.
#[derive(Clone, Copy)]
pub struct Clock;

impl Clock {
    pub fn new() -> Self {
        Self
    }
}

fn performance() -> Option<Performance> {
    let scope = get_global_scope().ok()?;
    if let Ok(worker) = scope.clone().dyn_into::<WorkerGlobalScope>() {
        worker.performance()
    } else {
        scope.dyn_into::<web_sys::Window>().ok()?.performance()
    }
}

impl ClockPort for Clock {
    fn unix_seconds(&self) -> i64 {
        (Date::now() / 1_000.0) as i64
    }

    fn is_available(&self) -> bool {
        performance().is_some()
    }
}
