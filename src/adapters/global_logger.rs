use once_cell::sync::Lazy;

use crate::ports::LoggerPort;

#[cfg(not(target_arch = "wasm32"))]
use super::native::ConsoleLogger;
#[cfg(target_arch = "wasm32")]
use super::wasm::ConsoleLogger;

static LOGGER: Lazy<ConsoleLogger> = Lazy::new(ConsoleLogger::new);

/// The process-wide logger. Target selection happens at compile time; the
/// instance is built lazily on first use.
#[inline]
pub fn logger() -> &'static dyn LoggerPort {
    &*LOGGER
}
