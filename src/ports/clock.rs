/// Port for wall-clock access.
///
/// The share flow reads it to log the absolute expiry deadline of a granted
/// link; availability gates the `time_it!` brackets.
pub trait ClockPort: Send + Sync {
    /// Current wall-clock time in whole unix seconds.
    fn unix_seconds(&self) -> i64;

    /// Whether the target exposes a usable timing facility.
    fn is_available(&self) -> bool;
}
