//! colframe: a columnar tabular-data engine with a handle-based C boundary.
//!
//! - [`colframe_core`]: columns, tables, order keys, errors, config.
//! - [`colframe_operators`]: sort, group/aggregate, describe, filter, head, select,
//!   render.
//! - [`colframe_ffi`]: the `extern "C"` surface (also built as a `cdylib`).

pub use colframe_core;
pub use colframe_ffi;
pub use colframe_operators;

pub use colframe_core::prelude::*;
pub use colframe_operators::{
    group_by, Describe, Filter, GroupBy, GroupedTable, Head, Operator, Renderer, Select,
    SortByColumn, SortByIndex,
};
