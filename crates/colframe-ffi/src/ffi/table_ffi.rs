//! Table lifecycle, ingestion, shape and rendering.

use std::ffi::c_void;
use std::os::raw::c_char;
use std::ptr;
use std::sync::Arc;

use colframe_core::prelude::{DataType, EngineConfig, Error, Table, TableHandle};
use colframe_operators::Renderer;

use crate::events;
use crate::marshal::{c_str_arg, ingest, string_to_c_str, write_out};
use crate::panic_guard::{ffi_or, ffi_status};
use crate::state::{self, TABLES};

/// Register `table` and return its raw handle.
pub(crate) fn publish(table: Table) -> colframe_core::Result<u64> {
    let handle = TABLES.insert(Arc::new(table))?.get();
    events::handle_allocated("table", handle);
    Ok(handle)
}

pub(crate) fn lookup(h: u64) -> colframe_core::Result<Arc<Table>> {
    TABLES.get(TableHandle::new(h))
}

/// Create an empty table. Returns `0` on failure.
#[no_mangle]
pub extern "C" fn colframe_new() -> u64 {
    ffi_or("new", 0, || publish(Table::new()))
}

/// Append a column copied from `data[0..len]`.
///
/// `dtype` is `0` (int64), `1` (float64) or `2` (bool, one byte per value).
/// The dtype is checked before `data` is read. On failure the table is left
/// unchanged and a non-zero `ErrorCode` is returned.
///
/// # Safety
/// `name` must be a NUL-terminated string; when `len > 0`, `data` must point
/// to `len` values of `dtype`.
#[no_mangle]
pub unsafe extern "C" fn colframe_add_series(
    h: u64,
    name: *const c_char,
    dtype: i32,
    data: *const c_void,
    len: i64,
) -> i32 {
    ffi_status("add_series", || {
        let dtype = DataType::from_code(dtype)?;
        let name = c_str_arg(name, "name")?;
        let column = ingest(dtype, data, len, state::config().max_ingest_rows)?;
        TABLES.update(TableHandle::new(h), |table| {
            let mut next = table.clone();
            next.add_column(name, column)?;
            Ok(next)
        })
    })
}

/// Write `(rows, cols)` into the out-pointers.
///
/// # Safety
/// `rows` and `cols` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn colframe_shape(h: u64, rows: *mut i64, cols: *mut i64) -> i32 {
    ffi_status("shape", || {
        if rows.is_null() || cols.is_null() {
            return Err(Error::Boundary("shape out-pointer is null".into()));
        }
        let (r, c) = lookup(h)?.shape();
        write_out(rows, r as i64, "rows")?;
        write_out(cols, c as i64, "cols")
    })
}

/// Number of columns, or `-1` on failure.
#[no_mangle]
pub extern "C" fn colframe_get_column_count(h: u64) -> i64 {
    ffi_or("get_column_count", -1, || Ok(lookup(h)?.num_columns() as i64))
}

/// Name of column `index` in insertion order, or null.
/// Free with `colframe_free_string`.
#[no_mangle]
pub extern "C" fn colframe_get_column(h: u64, index: i64) -> *mut c_char {
    ffi_or("get_column", ptr::null_mut(), || {
        let table = lookup(h)?;
        let name = usize::try_from(index)
            .ok()
            .and_then(|i| table.column_name(i))
            .ok_or_else(|| {
                Error::Lookup(format!(
                    "column index {index} out of range for {} columns",
                    table.num_columns()
                ))
            })?;
        string_to_c_str(name)
    })
}

/// Label of row `index` (tables from `colframe_describe`), or null.
/// Free with `colframe_free_string`.
#[no_mangle]
pub extern "C" fn colframe_get_row_label(h: u64, index: i64) -> *mut c_char {
    ffi_or("get_row_label", ptr::null_mut(), || {
        let table = lookup(h)?;
        let labels = table
            .row_labels()
            .ok_or_else(|| Error::Lookup("table has no row labels".into()))?;
        let label = usize::try_from(index)
            .ok()
            .and_then(|i| labels.get(i))
            .ok_or_else(|| Error::Lookup(format!("row index {index} out of range")))?;
        string_to_c_str(label)
    })
}

/// Tab-separated text form of the table. Free with `colframe_free_string`.
#[no_mangle]
pub extern "C" fn colframe_render(h: u64) -> *mut c_char {
    ffi_or("render", ptr::null_mut(), || {
        let table = lookup(h)?;
        let text = Renderer::from_config(&state::config()).render(&table);
        string_to_c_str(&text)
    })
}

/// Release a table handle. Views obtained from it become invalid.
#[no_mangle]
pub extern "C" fn colframe_free_table(h: u64) -> i32 {
    ffi_status("free_table", || {
        TABLES.remove(TableHandle::new(h))?;
        events::handle_released("table", h);
        Ok(())
    })
}

/// Replace the engine config with a (partial) JSON object; omitted fields
/// take their defaults.
///
/// # Safety
/// `json` must be a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn colframe_configure(json: *const c_char) -> i32 {
    ffi_status("configure", || {
        let json = c_str_arg(json, "config")?;
        state::set_config(EngineConfig::from_json(json)?);
        Ok(())
    })
}
