//! Per-group reductions.
//!
//! - SUM: int and bool (as 0/1) to int64, wrapping on overflow; float to float64.
//! - MEAN: float64 `sum / count`; integer sums accumulate in i128 first.
//! - COUNT: rows in the group, int64.
//! - MIN/MAX: input kind, engine total order (NaN is the largest float).
//!
//! Partitions are never empty, so every group has a first row.

use std::cmp::Ordering;

use colframe_core::order::cmp_f64;
use colframe_core::prelude::{AggKind, Column};

use super::Partition;

pub fn reduce(column: &Column, groups: &[Partition], kind: AggKind) -> Column {
    match kind {
        AggKind::Count => Column::Int64(groups.iter().map(|g| g.rows.len() as i64).collect()),
        AggKind::Sum => sum(column, groups),
        AggKind::Mean => mean(column, groups),
        AggKind::Min => extreme(column, groups, Ordering::Less),
        AggKind::Max => extreme(column, groups, Ordering::Greater),
    }
}

fn sum(column: &Column, groups: &[Partition]) -> Column {
    match column {
        Column::Int64(v) => Column::Int64(
            groups
                .iter()
                .map(|g| g.rows.iter().fold(0i64, |acc, &r| acc.wrapping_add(v[r])))
                .collect(),
        ),
        Column::Float64(v) => {
            Column::Float64(groups.iter().map(|g| g.rows.iter().map(|&r| v[r]).sum()).collect())
        }
        Column::Boolean(v) => Column::Int64(
            groups
                .iter()
                .map(|g| g.rows.iter().filter(|&&r| v[r]).count() as i64)
                .collect(),
        ),
    }
}

fn mean(column: &Column, groups: &[Partition]) -> Column {
    let means = groups.iter().map(|g| {
        let count = g.rows.len() as f64;
        let total = match column {
            Column::Int64(v) => g.rows.iter().map(|&r| v[r] as i128).sum::<i128>() as f64,
            Column::Float64(v) => g.rows.iter().map(|&r| v[r]).sum::<f64>(),
            Column::Boolean(v) => g.rows.iter().filter(|&&r| v[r]).count() as f64,
        };
        total / count
    });
    Column::Float64(means.collect())
}

/// Smallest (`want == Less`) or largest (`want == Greater`) value per group.
fn extreme(column: &Column, groups: &[Partition], want: Ordering) -> Column {
    fn pick<T: Copy>(
        values: &[T],
        rows: &[usize],
        want: Ordering,
        cmp: impl Fn(T, T) -> Ordering,
    ) -> T {
        let mut best = values[rows[0]];
        for &r in &rows[1..] {
            if cmp(values[r], best) == want {
                best = values[r];
            }
        }
        best
    }

    match column {
        Column::Int64(v) => Column::Int64(
            groups
                .iter()
                .map(|g| pick(v, &g.rows, want, |a: i64, b| a.cmp(&b)))
                .collect(),
        ),
        Column::Float64(v) => Column::Float64(
            groups
                .iter()
                .map(|g| pick(v, &g.rows, want, cmp_f64))
                .collect(),
        ),
        Column::Boolean(v) => Column::Boolean(
            groups
                .iter()
                .map(|g| pick(v, &g.rows, want, |a: bool, b| a.cmp(&b)))
                .collect(),
        ),
    }
}
