//! Kept in its own test binary: `colframe_configure` changes process-wide state.

use std::ffi::{c_void, CStr, CString};

use colframe_ffi::{
    colframe_add_series, colframe_configure, colframe_free_string, colframe_free_table,
    colframe_last_error_code, colframe_new, colframe_render, ErrorCode,
};

#[test]
fn configure_controls_rendering_and_ingestion() {
    let cfg = CString::new(r#"{"render_max_rows": 2, "float_precision": 3, "max_ingest_rows": 4}"#)
        .unwrap();
    assert_eq!(unsafe { colframe_configure(cfg.as_ptr()) }, 0);

    let h = colframe_new();
    let name = CString::new("f").unwrap();
    let values = [3.14159f64, 2.71828, 1.41421];
    let status = unsafe {
        colframe_add_series(h, name.as_ptr(), 1, values.as_ptr() as *const c_void, 3)
    };
    assert_eq!(status, 0);

    let text = colframe_render(h);
    let rendered = unsafe { CStr::from_ptr(text) }.to_str().unwrap().to_string();
    unsafe { colframe_free_string(text) };
    assert_eq!(rendered, "f\n3.14\n2.72\n... (1 more rows)");

    let big = [0i64; 5];
    let other = CString::new("big").unwrap();
    let status = unsafe {
        colframe_add_series(h, other.as_ptr(), 0, big.as_ptr() as *const c_void, 5)
    };
    assert_eq!(status, ErrorCode::Type as i32);

    let bad = CString::new(r#"{"float_precision": 0}"#).unwrap();
    assert_eq!(unsafe { colframe_configure(bad.as_ptr()) }, ErrorCode::Config as i32);
    let junk = CString::new("not json").unwrap();
    assert_eq!(unsafe { colframe_configure(junk.as_ptr()) }, ErrorCode::Config as i32);
    assert_eq!(colframe_last_error_code(), ErrorCode::Config as i32);

    let reset = CString::new("{}").unwrap();
    assert_eq!(unsafe { colframe_configure(reset.as_ptr()) }, 0);
    colframe_free_table(h);
}
