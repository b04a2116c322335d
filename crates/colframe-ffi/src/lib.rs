//! C boundary for colframe.
//!
//! Tables and grouped tables live in process-wide generational arenas and are
//! addressed by opaque `u64` handles. Every exported function:
//! - validates its arguments before touching the engine;
//! - runs under a panic guard;
//! - reports failure through a sentinel return plus a thread-local last-error
//!   slot (`colframe_last_error_code` / `colframe_last_error_message`).
//!
//! Buffers passed in are always copied. Buffers handed out by
//! `colframe_get_series` are borrowed and live as long as the table handle.

pub mod error;
pub mod events;
pub mod ffi;
pub mod handle;
pub mod marshal;
pub mod panic_guard;
pub mod state;

pub use ffi::{error_ffi::*, group_ffi::*, series_ffi::*, table_ffi::*, transform_ffi::*};
pub use marshal::colframe_free_string;

/// Status codes returned across the boundary.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,
    Schema = 1,
    Type = 2,
    Lookup = 3,
    Aggregation = 4,
    Boundary = 5,
    Config = 6,
    Internal = 7,
    PanicPrevented = 8,
}

impl ErrorCode {
    pub fn from_i32(code: i32) -> Option<Self> {
        Some(match code {
            0 => ErrorCode::Success,
            1 => ErrorCode::Schema,
            2 => ErrorCode::Type,
            3 => ErrorCode::Lookup,
            4 => ErrorCode::Aggregation,
            5 => ErrorCode::Boundary,
            6 => ErrorCode::Config,
            7 => ErrorCode::Internal,
            8 => ErrorCode::PanicPrevented,
            _ => return None,
        })
    }
}
