//! Table → table transforms. Each returns a new handle, or `0` on failure;
//! the source handle is never modified.

use std::os::raw::c_char;
use std::slice;

use colframe_core::prelude::Error;
use colframe_operators::{
    Describe, Filter, Head, Operator, Select, SortByColumn, SortByIndex,
};

use super::table_ffi::{lookup, publish};
use crate::marshal::c_str_arg;
use crate::panic_guard::ffi_or;
use crate::state;

fn run_op(op: &dyn Operator, h: u64) -> colframe_core::Result<u64> {
    let table = lookup(h)?;
    publish(op.run(&table)?)
}

/// Stable sort by one column. `ascending` is a C boolean.
///
/// # Safety
/// `name` must be a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn colframe_sort_by_column(
    h: u64,
    name: *const c_char,
    ascending: i32,
) -> u64 {
    ffi_or("sort_by_column", 0, || {
        let name = c_str_arg(name, "name")?;
        let op = SortByColumn::new(name, ascending != 0)
            .with_radix_threshold(state::config().radix_sort_threshold);
        run_op(&op, h)
    })
}

/// Identity (ascending) or reversed (descending) row order.
#[no_mangle]
pub extern "C" fn colframe_sort_by_index(h: u64, ascending: i32) -> u64 {
    ffi_or("sort_by_index", 0, || {
        run_op(&SortByIndex { ascending: ascending != 0 }, h)
    })
}

/// First `n` rows; `n` beyond the row count is clamped, negative `n` fails.
#[no_mangle]
pub extern "C" fn colframe_head(h: u64, n: i64) -> u64 {
    ffi_or("head", 0, || {
        let n = usize::try_from(n)
            .map_err(|_| Error::Type(format!("head count must be non-negative, got {n}")))?;
        run_op(&Head { n }, h)
    })
}

/// Rows where the boolean column `mask_column` is true.
///
/// # Safety
/// `mask_column` must be a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn colframe_filter(h: u64, mask_column: *const c_char) -> u64 {
    ffi_or("filter", 0, || {
        let mask = c_str_arg(mask_column, "mask column")?;
        run_op(&Filter::new(mask), h)
    })
}

/// The `n` named columns, in the order given. Buffers are shared with the
/// source. `n == 0` yields an empty table.
///
/// # Safety
/// `names` must point to `n` NUL-terminated strings when `n > 0`.
#[no_mangle]
pub unsafe extern "C" fn colframe_select(h: u64, names: *const *const c_char, n: i64) -> u64 {
    ffi_or("select", 0, || {
        let count = usize::try_from(n)
            .map_err(|_| Error::Type(format!("column count must be non-negative, got {n}")))?;
        let columns = if count == 0 {
            Vec::new()
        } else {
            if names.is_null() {
                return Err(Error::Type("column name list must not be null".into()));
            }
            slice::from_raw_parts(names, count)
                .iter()
                .map(|&p| c_str_arg(p, "column name"))
                .collect::<colframe_core::Result<Vec<&str>>>()?
        };
        run_op(&Select::new(columns), h)
    })
}

/// Summary statistics, one float64 column per input column and eight
/// labeled rows.
#[no_mangle]
pub extern "C" fn colframe_describe(h: u64) -> u64 {
    ffi_or("describe", 0, || run_op(&Describe, h))
}
