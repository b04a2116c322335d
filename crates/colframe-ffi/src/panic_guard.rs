//! Panic containment for exported functions.
//!
//! A Rust panic must never unwind into the host. Every `extern "C"` entry
//! point runs its body through one of these guards, which also maintain the
//! last-error slot: cleared on success, set on failure.

use std::panic::{self, AssertUnwindSafe};

use colframe_core::prelude::Result;

use crate::error::{clear_last_error, record_error, set_last_error};
use crate::ErrorCode;

/// Run `f`, returning its value or the translated error code.
pub fn ffi_guard<R, F>(op: &str, f: F) -> std::result::Result<R, ErrorCode>
where
    F: FnOnce() -> Result<R>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => {
            clear_last_error();
            Ok(value)
        }
        Ok(Err(e)) => Err(record_error(op, &e)),
        Err(payload) => {
            let detail = if let Some(s) = payload.downcast_ref::<&str>() {
                (*s).to_string()
            } else if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "unknown panic".to_string()
            };
            set_last_error(ErrorCode::PanicPrevented, format!("panic in {op}: {detail}"));
            Err(ErrorCode::PanicPrevented)
        }
    }
}

/// Guard for calls that return a status code (`0` on success).
pub fn ffi_status<F>(op: &str, f: F) -> i32
where
    F: FnOnce() -> Result<()>,
{
    match ffi_guard(op, f) {
        Ok(()) => ErrorCode::Success as i32,
        Err(code) => code as i32,
    }
}

/// Guard for calls that return a value or a failure sentinel.
pub fn ffi_or<R, F>(op: &str, sentinel: R, f: F) -> R
where
    F: FnOnce() -> Result<R>,
{
    ffi_guard(op, f).unwrap_or(sentinel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{last_error_code, last_error_message};
    use colframe_core::prelude::Error;

    #[test]
    fn success_clears_previous_error() {
        set_last_error(ErrorCode::Type, "old");
        assert_eq!(ffi_guard("ok", || Ok(42)), Ok(42));
        assert_eq!(last_error_code(), ErrorCode::Success);
    }

    #[test]
    fn errors_become_codes() {
        let status = ffi_status("bad", || Err(Error::Aggregation("code 9".into())));
        assert_eq!(status, ErrorCode::Aggregation as i32);
        assert_eq!(last_error_message().as_deref(), Some("Aggregation: code 9"));
    }

    #[test]
    fn panics_are_contained() {
        let handle = ffi_or("boom", 0u64, || -> Result<u64> { panic!("kaboom") });
        assert_eq!(handle, 0);
        assert_eq!(last_error_code(), ErrorCode::PanicPrevented);
        let msg = last_error_message().unwrap();
        assert!(msg.starts_with("PanicPrevented: panic in boom"), "{msg}");
        assert!(msg.contains("kaboom"));
    }
}
