//! Operator event hooks.
//!
//! Compiled to no-ops unless the `tracing` feature is on; the host installs
//! whatever subscriber it wants.

#[cfg(feature = "tracing")]
pub fn emit_op(op: &str, rows_in: usize, rows_out: usize, cols: usize) {
    tracing::debug!(op, rows_in, rows_out, cols, "operator evaluated");
}

#[cfg(not(feature = "tracing"))]
pub fn emit_op(_op: &str, _rows_in: usize, _rows_out: usize, _cols: usize) { /* no-op */
}
