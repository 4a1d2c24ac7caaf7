/// Domain module - pure business logic, platform-agnostic.

pub mod browse;
