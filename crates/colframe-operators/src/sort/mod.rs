//! Sorter: stable permutations by one column or by position.
//!
//! Ascending order is the engine's total order (`false < true`, NaN last).
//! Descending reverses the order of distinct keys only: rows sharing a key
//! stay in their original relative order in both directions.

pub mod radix;

use colframe_core::config::EngineConfig;
use colframe_core::prelude::{Column, Error, Result, Table};

use crate::traits::Operator;

/// Stable permutation of `0..column.len()` ordering rows by `column`.
///
/// Numeric columns with at least `radix_threshold` rows go through the radix
/// path; smaller ones use a stable comparison sort over the same keys. Both
/// produce the same permutation.
pub fn sort_permutation(column: &Column, ascending: bool, radix_threshold: usize) -> Vec<usize> {
    match column {
        Column::Boolean(values) => partition_bools(values, ascending),
        Column::Int64(_) | Column::Float64(_) => {
            let keys = column.order_keys();
            if keys.len() >= radix_threshold {
                radix::argsort(&keys, ascending)
            } else {
                comparison_argsort(&keys, ascending)
            }
        }
    }
}

fn comparison_argsort(keys: &[u64], ascending: bool) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..keys.len()).collect();
    // `sort_by` is stable.
    if ascending {
        perm.sort_by(|&a, &b| keys[a].cmp(&keys[b]));
    } else {
        perm.sort_by(|&a, &b| keys[b].cmp(&keys[a]));
    }
    perm
}

fn partition_bools(values: &[bool], ascending: bool) -> Vec<usize> {
    let first = !ascending;
    let mut perm = Vec::with_capacity(values.len());
    perm.extend((0..values.len()).filter(|&i| values[i] == first));
    perm.extend((0..values.len()).filter(|&i| values[i] != first));
    perm
}

#[derive(Debug, Clone)]
pub struct SortByColumn {
    pub by: String,
    pub ascending: bool,
    pub radix_threshold: usize,
}

impl SortByColumn {
    pub fn new(by: impl Into<String>, ascending: bool) -> Self {
        Self {
            by: by.into(),
            ascending,
            radix_threshold: EngineConfig::default().radix_sort_threshold,
        }
    }

    pub fn with_radix_threshold(mut self, threshold: usize) -> Self {
        self.radix_threshold = threshold;
        self
    }
}

impl Operator for SortByColumn {
    fn name(&self) -> &'static str {
        "sort_by_column"
    }

    fn eval(&self, input: &Table) -> Result<Table> {
        let column = input
            .column(&self.by)
            .ok_or_else(|| Error::column_not_found(&self.by))?;
        let perm = sort_permutation(column, self.ascending, self.radix_threshold);
        Ok(input.take_rows(&perm))
    }
}

/// Order by current row position: identity when ascending, full reversal otherwise.
#[derive(Debug, Clone, Copy)]
pub struct SortByIndex {
    pub ascending: bool,
}

impl Operator for SortByIndex {
    fn name(&self) -> &'static str {
        "sort_by_index"
    }

    fn eval(&self, input: &Table) -> Result<Table> {
        if self.ascending {
            return Ok(input.clone());
        }
        let perm: Vec<usize> = (0..input.num_rows()).rev().collect();
        Ok(input.take_rows(&perm))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colframe_core::prelude::Scalar;

    fn table() -> Table {
        Table::from_columns([
            ("x", Column::from(vec![3i64, 1, 2])),
            ("y", Column::from(vec![30.0, 10.0, 20.0])),
            ("z", Column::from(vec![true, false, true])),
        ])
        .unwrap()
    }

    #[test]
    fn sorts_and_permutes_companions() {
        let out = SortByColumn::new("x", true).eval(&table()).unwrap();
        assert_eq!(out.column("x"), Some(&Column::Int64(vec![1, 2, 3])));
        assert_eq!(out.column("y"), Some(&Column::Float64(vec![10.0, 20.0, 30.0])));
        assert_eq!(out.column("z"), Some(&Column::Boolean(vec![false, true, true])));
        assert_eq!(out.shape(), (3, 3));
    }

    #[test]
    fn missing_column_is_lookup_error() {
        let err = SortByColumn::new("nope", true).eval(&table()).unwrap_err();
        assert!(matches!(err, Error::Lookup(_)));
    }

    #[test]
    fn descending_keeps_equal_keys_in_original_order() {
        let keys = Column::from(vec![1i64, 2, 1, 2, 1]);
        assert_eq!(sort_permutation(&keys, false, usize::MAX), vec![1, 3, 0, 2, 4]);
        assert_eq!(sort_permutation(&keys, false, 0), vec![1, 3, 0, 2, 4]);
        assert_eq!(sort_permutation(&keys, true, 0), vec![0, 2, 4, 1, 3]);
    }

    #[test]
    fn bool_partition_is_stable() {
        let c = Column::from(vec![true, false, true, false]);
        assert_eq!(sort_permutation(&c, true, 0), vec![1, 3, 0, 2]);
        assert_eq!(sort_permutation(&c, false, 0), vec![0, 2, 1, 3]);
    }

    #[test]
    fn nan_sorts_last_on_both_paths() {
        let c = Column::from(vec![f64::NAN, -1.0, 2.0, -0.0, 0.0]);
        let small = sort_permutation(&c, true, usize::MAX);
        let radix = sort_permutation(&c, true, 0);
        assert_eq!(small, vec![1, 3, 4, 2, 0]);
        assert_eq!(small, radix);
    }

    #[test]
    fn sort_by_index_reverses() {
        let t = table();
        let rev = SortByIndex { ascending: false }.eval(&t).unwrap();
        assert_eq!(
            rev.row(0),
            Some(vec![
                Scalar::Int64(2),
                Scalar::Float64(20.0),
                Scalar::Boolean(true)
            ])
        );
        let back = SortByIndex { ascending: false }.eval(&rev).unwrap();
        assert_eq!(back, t);
        assert_eq!(SortByIndex { ascending: true }.eval(&t).unwrap(), t);
    }
}
