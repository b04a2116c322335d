pub mod error_ffi;
pub mod group_ffi;
pub mod series_ffi;
pub mod table_ffi;
pub mod transform_ffi;
