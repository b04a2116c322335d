//! Conversions between host memory and engine values.
//!
//! Ingestion copies: nothing here keeps a pointer into caller memory after
//! the call returns. Read-out hands back pointers into engine-owned buffers.

use std::ffi::{c_void, CStr, CString};
use std::os::raw::c_char;
use std::{mem, ptr, slice};

use colframe_core::prelude::{Column, DataType, Error, Result};

/// Borrow a C string argument as UTF-8.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that outlives `'a`.
pub unsafe fn c_str_arg<'a>(ptr: *const c_char, what: &str) -> Result<&'a str> {
    if ptr.is_null() {
        return Err(Error::Type(format!("{what} must not be null")));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|e| Error::Type(format!("{what} is not valid UTF-8: {e}")))
}

/// Copy a Rust string into a newly allocated C string.
///
/// The caller releases it with [`colframe_free_string`].
pub fn string_to_c_str(s: &str) -> Result<*mut c_char> {
    CString::new(s)
        .map(CString::into_raw)
        .map_err(|_| Error::Invariant("string contains an interior NUL".into()))
}

/// Free a string returned by this library. Null is ignored.
///
/// # Safety
/// `ptr` must come from this library and must not be used afterwards.
#[no_mangle]
pub unsafe extern "C" fn colframe_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Checked element count for an ingested buffer.
pub fn ingest_len(len: i64, data_is_null: bool, max_rows: usize) -> Result<usize> {
    if len < 0 {
        return Err(Error::Type(format!("length must be non-negative, got {len}")));
    }
    let n = usize::try_from(len)
        .map_err(|_| Error::Type(format!("length {len} does not fit in memory")))?;
    if n > max_rows {
        return Err(Error::Type(format!(
            "length {n} exceeds the ingestion limit of {max_rows} rows"
        )));
    }
    if data_is_null && n > 0 {
        return Err(Error::Type("data must not be null for a non-empty column".into()));
    }
    Ok(n)
}

/// Copy `len` host values of kind `dtype` into a new column.
///
/// Booleans are read as bytes; any non-zero byte is `true`.
///
/// # Safety
/// When `len > 0`, `data` must point to `len` readable values of `dtype`.
pub unsafe fn ingest(
    dtype: DataType,
    data: *const c_void,
    len: i64,
    max_rows: usize,
) -> Result<Column> {
    let n = ingest_len(len, data.is_null(), max_rows)?;
    if n == 0 {
        return Ok(match dtype {
            DataType::Int64 => Column::Int64(Vec::new()),
            DataType::Float64 => Column::Float64(Vec::new()),
            DataType::Boolean => Column::Boolean(Vec::new()),
        });
    }
    Ok(match dtype {
        DataType::Int64 => Column::Int64(copy_aligned::<i64>(data, n)?),
        DataType::Float64 => Column::Float64(copy_aligned::<f64>(data, n)?),
        DataType::Boolean => {
            let bytes = slice::from_raw_parts(data as *const u8, n);
            Column::Boolean(bytes.iter().map(|&b| b != 0).collect())
        }
    })
}

unsafe fn copy_aligned<T: Copy>(data: *const c_void, n: usize) -> Result<Vec<T>> {
    if (data as usize) % mem::align_of::<T>() != 0 {
        return Err(Error::Type(format!(
            "data pointer {data:p} is not aligned to {} bytes",
            mem::align_of::<T>()
        )));
    }
    Ok(slice::from_raw_parts(data as *const T, n).to_vec())
}

/// Engine-owned buffer of a column: `(pointer, element count)`.
///
/// Booleans are exposed as one byte per value, `0` or `1`.
pub fn column_buffer(column: &Column) -> (*const c_void, usize) {
    match column {
        Column::Int64(v) => (v.as_ptr() as *const c_void, v.len()),
        Column::Float64(v) => (v.as_ptr() as *const c_void, v.len()),
        Column::Boolean(v) => (v.as_ptr() as *const c_void, v.len()),
    }
}

/// Write through an out-pointer supplied by the host.
///
/// # Safety
/// `out` must be null or valid for a write of `T`.
pub unsafe fn write_out<T>(out: *mut T, value: T, what: &str) -> Result<()> {
    if out.is_null() {
        return Err(Error::Boundary(format!("{what} out-pointer is null")));
    }
    ptr::write(out, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_checks_precede_reads() {
        assert!(matches!(ingest_len(-1, false, 10), Err(Error::Type(_))));
        assert!(matches!(ingest_len(11, false, 10), Err(Error::Type(_))));
        assert!(matches!(ingest_len(1, true, 10), Err(Error::Type(_))));
        assert_eq!(ingest_len(0, true, 10), Ok(0));
        assert_eq!(ingest_len(10, false, 10), Ok(10));
    }

    #[test]
    fn copies_and_normalises_bools() {
        let raw: [u8; 4] = [0, 1, 7, 255];
        let col =
            unsafe { ingest(DataType::Boolean, raw.as_ptr() as *const c_void, 4, 100) }.unwrap();
        assert_eq!(col, Column::Boolean(vec![false, true, true, true]));

        let ints = [3i64, -4];
        let col =
            unsafe { ingest(DataType::Int64, ints.as_ptr() as *const c_void, 2, 100) }.unwrap();
        assert_eq!(col, Column::Int64(vec![3, -4]));
        let (p, n) = column_buffer(&col);
        assert_ne!(p, ints.as_ptr() as *const c_void);
        assert_eq!(n, 2);
    }

    #[test]
    fn empty_column_accepts_null_data() {
        let col = unsafe { ingest(DataType::Float64, ptr::null(), 0, 100) }.unwrap();
        assert_eq!(col, Column::Float64(vec![]));
    }

    #[test]
    fn strings_round_trip_through_c() {
        let p = string_to_c_str("abc").unwrap();
        let back = unsafe { c_str_arg(p, "name") }.unwrap().to_string();
        unsafe { colframe_free_string(p) };
        assert_eq!(back, "abc");
        assert!(matches!(unsafe { c_str_arg(ptr::null(), "name") }, Err(Error::Type(_))));
        assert!(string_to_c_str("a\0b").is_err());
    }
}
