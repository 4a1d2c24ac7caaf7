use serde::{Deserialize, Serialize};

/// Events posted to the host shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventType {
    Toast,
}

/// Envelope for every message crossing the module boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message<T> {
    pub event: EventType,
    pub data: T,
}

/// Transient notification rendered by the host shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub message: String,
    pub duration_ms: u32,
}
