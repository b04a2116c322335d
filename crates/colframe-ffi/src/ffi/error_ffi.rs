//! Last-error access for the host.

use std::os::raw::c_char;
use std::ptr;

use crate::error::{clear_last_error, last_error_code, last_error_message};

/// Code of the calling thread's last failed call, or `0`.
#[no_mangle]
pub extern "C" fn colframe_last_error_code() -> i32 {
    last_error_code() as i32
}

/// Copy the last error message (NUL-terminated) into `buffer`.
///
/// Returns the number of bytes written excluding the terminator, `0` when
/// there is no error, `-1` for a null or empty buffer, and `-(needed)` when
/// `buffer_len` is too small.
///
/// # Safety
/// `buffer` must be valid for `buffer_len` bytes.
#[no_mangle]
pub unsafe extern "C" fn colframe_last_error_message(
    buffer: *mut c_char,
    buffer_len: usize,
) -> i32 {
    if buffer.is_null() || buffer_len == 0 {
        return -1;
    }
    let Some(message) = last_error_message() else {
        return 0;
    };
    let bytes = message.as_bytes();
    let needed = bytes.len() + 1;
    if needed > buffer_len {
        return -(needed.min(i32::MAX as usize) as i32);
    }
    ptr::copy_nonoverlapping(bytes.as_ptr(), buffer as *mut u8, bytes.len());
    *buffer.add(bytes.len()) = 0;
    bytes.len() as i32
}

#[no_mangle]
pub extern "C" fn colframe_clear_error() {
    clear_last_error();
}
