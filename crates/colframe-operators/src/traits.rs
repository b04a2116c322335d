//! Operator trait shared by every unary Table → Table transform.

use colframe_core::prelude::{Result, Table};

use crate::metrics::emit_op;

/// Invariants:
/// - `eval` must not observe or mutate anything but `input`;
/// - `eval` must be deterministic given the same input.
pub trait Operator {
    /// Human-readable operator name (stable).
    fn name(&self) -> &'static str;

    /// Produce a new table from `input`.
    fn eval(&self, input: &Table) -> Result<Table>;

    /// `eval` plus the operator event.
    fn run(&self, input: &Table) -> Result<Table> {
        let out = self.eval(input)?;
        emit_op(
            self.name(),
            input.num_rows(),
            out.num_rows(),
            out.num_columns(),
        );
        Ok(out)
    }
}
