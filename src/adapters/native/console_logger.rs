use std::collections::HashMap;
use std::time::Instant;

use parking_lot::Mutex;

use crate::ports::LoggerPort;

/// Stdout/stderr logger. The browser console measures `console.time`
/// brackets itself; here the open brackets are tracked so `time_end` can
/// report a real elapsed duration.
pub struct ConsoleLogger {
    open_brackets: Mutex<HashMap<String, Instant>>,
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self {
            open_brackets: Mutex::new(HashMap::new()),
        }
    }
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, message: &str) {
        println!("[INFO] {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("[ERROR] {message}");
    }

    fn warn(&self, message: &str) {
        eprintln!("[WARN] {message}");
    }

    fn time(&self, label: &str) {
        self.open_brackets
            .lock()
            .insert(label.to_string(), Instant::now());
    }

    fn time_end(&self, label: &str) {
        match self.open_brackets.lock().remove(label) {
            Some(started) => {
                let elapsed_ms = started.elapsed().as_secs_f64() * 1_000.0;
                println!("[TIMER] {label}: {elapsed_ms:.3}ms");
            }
            None => self.warn(&format!("timer '{label}' was never started")),
        }
    }
}
