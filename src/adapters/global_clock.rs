use once_cell::sync::Lazy;

use crate::ports::ClockPort;

#[cfg(not(target_arch = "wasm32"))]
use super::native::Clock;
#[cfg(target_arch = "wasm32")]
use super::wasm::Clock;

static CLOCK: Lazy<Clock> = Lazy::new(Clock::new);

/// The process-wide wall clock.
#[inline]
pub fn clock() -> &'static dyn ClockPort {
    &*CLOCK
}
