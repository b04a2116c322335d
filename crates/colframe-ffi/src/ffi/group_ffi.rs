//! Grouping and aggregation.

use std::os::raw::c_char;
use std::slice;
use std::sync::Arc;

use colframe_core::prelude::{AggKind, Error, GroupHandle};
use colframe_operators::GroupBy;

use super::table_ffi::{lookup, publish};
use crate::events;
use crate::marshal::c_str_arg;
use crate::panic_guard::{ffi_or, ffi_status};
use crate::state::GROUPS;

/// Partition a table by `names[0..n]`. Returns a grouped handle or `0`.
///
/// # Safety
/// `names` must point to `n` NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn colframe_group_by(h: u64, names: *const *const c_char, n: i64) -> u64 {
    ffi_or("group_by", 0, || {
        if n <= 0 {
            return Err(Error::Type(format!(
                "group_by needs at least one key column, got {n}"
            )));
        }
        if names.is_null() {
            return Err(Error::Type("key name list must not be null".into()));
        }
        let count = usize::try_from(n).map_err(|_| Error::Type(format!("bad key count {n}")))?;
        let keys = slice::from_raw_parts(names, count)
            .iter()
            .map(|&p| c_str_arg(p, "key name"))
            .collect::<colframe_core::Result<Vec<&str>>>()?;

        let table = lookup(h)?;
        let grouped = GroupBy::new(keys).apply(&table)?;
        let handle = GROUPS.insert(Arc::new(grouped))?.get();
        events::handle_allocated("grouped", handle);
        Ok(handle)
    })
}

/// Reduce `column` per group. `agg` is `0` SUM, `1` MEAN, `2` COUNT,
/// `3` MIN, `4` MAX. Returns a table handle or `0`.
///
/// # Safety
/// `column` must be a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn colframe_aggregate(g: u64, column: *const c_char, agg: i32) -> u64 {
    ffi_or("aggregate", 0, || {
        let kind = AggKind::from_code(agg)?;
        let column = c_str_arg(column, "column")?;
        let grouped = GROUPS.get(GroupHandle::new(g))?;
        publish(grouped.aggregate(column, kind)?)
    })
}

/// Number of groups, or `-1` on failure.
#[no_mangle]
pub extern "C" fn colframe_group_count(g: u64) -> i64 {
    ffi_or("group_count", -1, || {
        Ok(GROUPS.get(GroupHandle::new(g))?.num_groups() as i64)
    })
}

#[no_mangle]
pub extern "C" fn colframe_free_grouped(g: u64) -> i32 {
    ffi_status("free_grouped", || {
        GROUPS.remove(GroupHandle::new(g))?;
        events::handle_released("grouped", g);
        Ok(())
    })
}
