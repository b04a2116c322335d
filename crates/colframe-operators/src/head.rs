//! First-`n`-rows operator. `n` past the end is clamped.

use colframe_core::prelude::{Result, Table};

use crate::traits::Operator;

#[derive(Debug, Clone, Copy)]
pub struct Head {
    pub n: usize,
}

impl Operator for Head {
    fn name(&self) -> &'static str {
        "head"
    }

    fn eval(&self, input: &Table) -> Result<Table> {
        Ok(input.head(self.n))
    }
}
