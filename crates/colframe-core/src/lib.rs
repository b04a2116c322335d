#![forbid(unsafe_code)]
//! colframe-core: typed columns, tables, order keys, errors and configuration.
//!
//! Design intent:
//! - Pure data and pure functions; no IO, no threads, no global state.
//! - Columns are immutable once constructed. Tables share them through `Arc`
//!   so transforms that leave a column untouched never copy it.
//! - Every algorithm matches exhaustively on `Column` so a new kind cannot be
//!   added without the compiler pointing at each site.

pub mod config;
pub mod error;
pub mod id;
pub mod order;
pub mod prelude;
pub mod schema;
pub mod table;
pub mod types;

pub use error::{Error, Result};
pub use table::{Series, Table};
pub use types::{Column, Scalar};
