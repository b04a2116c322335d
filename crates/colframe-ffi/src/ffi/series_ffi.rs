//! Zero-copy column read-out.

use std::ffi::c_void;
use std::os::raw::c_char;
use std::ptr;

use colframe_core::prelude::Error;

use super::table_ffi::lookup;
use crate::marshal::{c_str_arg, column_buffer, write_out};
use crate::panic_guard::ffi_or;

/// Borrow the buffer of column `name`.
///
/// On success writes the dtype code and element count and returns a pointer
/// to the first value (booleans are one byte each, `0` or `1`). The pointer
/// stays valid while the table handle is alive and must not be freed or
/// written through. Returns null on failure.
///
/// # Safety
/// `name` must be a NUL-terminated string; `dtype` and `len` must be valid
/// for writes.
#[no_mangle]
pub unsafe extern "C" fn colframe_get_series(
    h: u64,
    name: *const c_char,
    dtype: *mut i32,
    len: *mut i64,
) -> *const c_void {
    ffi_or("get_series", ptr::null(), || {
        if dtype.is_null() || len.is_null() {
            return Err(Error::Boundary("get_series out-pointer is null".into()));
        }
        let name = c_str_arg(name, "name")?;
        let table = lookup(h)?;
        let series = table.series(name)?;
        let (data, count) = column_buffer(series.column());
        write_out(dtype, series.data_type().code(), "dtype")?;
        write_out(len, count as i64, "len")?;
        Ok(data)
    })
}
