//! Boundary event hooks. No-ops unless the `tracing` feature is on.

use crate::ErrorCode;

#[cfg(feature = "tracing")]
pub fn handle_allocated(kind: &str, handle: u64) {
    tracing::trace!(kind, handle, "handle allocated");
}

#[cfg(not(feature = "tracing"))]
pub fn handle_allocated(_kind: &str, _handle: u64) {}

#[cfg(feature = "tracing")]
pub fn handle_released(kind: &str, handle: u64) {
    tracing::trace!(kind, handle, "handle released");
}

#[cfg(not(feature = "tracing"))]
pub fn handle_released(_kind: &str, _handle: u64) {}

#[cfg(feature = "tracing")]
pub fn error_translated(op: &str, code: ErrorCode, message: &str) {
    tracing::debug!(op, code = ?code, message, "boundary call failed");
}

#[cfg(not(feature = "tracing"))]
pub fn error_translated(_op: &str, _code: ErrorCode, _message: &str) {}
