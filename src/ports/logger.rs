/// Port for the process-wide logger.
///
/// The browse flows log through this instead of binding a console directly,
/// so the same code reports to the browser console on WASM and to
/// stdout/stderr natively.
pub trait LoggerPort: Send + Sync {
    fn log(&self, message: &str);

    fn error(&self, message: &str);

    fn warn(&self, message: &str);

    /// Open a named timing bracket.
    fn time(&self, label: &str);

    /// Close a bracket opened with the same label and report the elapsed
    /// time.
    fn time_end(&self, label: &str);
}
