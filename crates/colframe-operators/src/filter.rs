//! Filter operator: keep the rows selected by a boolean mask.
//!
//! The mask is either a standalone column (`filter_by_mask`) or a boolean
//! column of the input table itself (`Filter`). Row order is preserved and the
//! mask column, if it lives in the table, is kept in the output.

use colframe_core::prelude::{Column, DataType, Error, Result, Table};

use crate::traits::Operator;

/// Rows of `table` where `mask` is true.
pub fn filter_by_mask(table: &Table, mask: &Column) -> Result<Table> {
    let Column::Boolean(bits) = mask else {
        return Err(Error::Schema(format!(
            "filter mask must be bool, got {}",
            mask.data_type()
        )));
    };
    if bits.len() != table.num_rows() {
        return Err(Error::Schema(format!(
            "filter mask has length {}, table has {} rows",
            bits.len(),
            table.num_rows()
        )));
    }
    Ok(table.filter_rows(bits))
}

#[derive(Debug, Clone)]
pub struct Filter {
    /// Name of a boolean column in the input table.
    pub mask: String,
}

impl Filter {
    pub fn new(mask: impl Into<String>) -> Self {
        Self { mask: mask.into() }
    }
}

impl Operator for Filter {
    fn name(&self) -> &'static str {
        "filter"
    }

    fn eval(&self, input: &Table) -> Result<Table> {
        let mask = input
            .column(&self.mask)
            .ok_or_else(|| Error::column_not_found(&self.mask))?;
        if mask.data_type() != DataType::Boolean {
            return Err(Error::Schema(format!(
                "mask column '{}' is {}, expected bool",
                self.mask,
                mask.data_type()
            )));
        }
        filter_by_mask(input, mask)
    }
}
