//! Convenient re-exports for downstream crates.

pub use crate::config::EngineConfig;
pub use crate::error::{Error, Result};
pub use crate::id::{GroupHandle, TableHandle};
pub use crate::schema::{AggKind, DataType};
pub use crate::table::{Series, Table};
pub use crate::types::{Column, Scalar};
