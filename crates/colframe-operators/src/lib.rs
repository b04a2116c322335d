#![forbid(unsafe_code)]
//! colframe-operators: sort, group/aggregate, describe, filter, head, select,
//! render.
//!
//! Design intent:
//! - Every operator is a pure function from `&Table` to a new `Table`; inputs
//!   are never mutated, so a failed call leaves nothing half-applied.
//! - Synchronous and single-threaded; scratch space is O(n) (permutations,
//!   group ids, partition index lists).
//! - Unary transforms implement `Operator` so the boundary can run them
//!   uniformly. Grouping is two-phase (`GroupBy` then `GroupedTable::aggregate`).

pub mod metrics;
pub mod traits;

pub mod filter;
pub mod group;
pub mod head;
pub mod render;
pub mod select;
pub mod sort;
pub mod stats;

pub use filter::{filter_by_mask, Filter};
pub use group::{group_by, GroupBy, GroupedTable, Partition};
pub use head::Head;
pub use render::{format_float, Renderer, EMPTY_MARKER};
pub use select::Select;
pub use sort::{sort_permutation, SortByColumn, SortByIndex};
pub use stats::{Describe, DESCRIBE_LABELS};
pub use traits::Operator;
