use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;

/// When set, `time_it!` wraps its expression in a named timing bracket.
pub static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

/// Host toggle for the timing brackets; off by default.
#[wasm_bindgen]
pub fn set_debug_mode(enabled: bool) {
    DEBUG_MODE.store(enabled, Ordering::SeqCst);
}

#[macro_export]
macro_rules! time_it {
    ($label:expr, $work:expr) => {{
        let bracket = $crate::measure::DEBUG_MODE.load(std::sync::atomic::Ordering::SeqCst)
            && $crate::adapters::clock().is_available();
        if bracket {
            $crate::adapters::logger().time($label);
        }
        let value = $work;
        if bracket {
            $crate::adapters::logger().time_end($label);
        }
        value
    }};
}

pub use crate::time_it;
