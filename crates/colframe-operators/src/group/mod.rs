//! Group engine: partition rows by key-tuple equality, then reduce per group.
//!
//! Partition entries are ordered by the first row at which each distinct key
//! tuple appears. Key equality is order-key equality (see
//! `colframe_core::order`), so `0.0`/`-0.0` share a group and so do all NaNs.

pub mod reduce;

use std::collections::HashMap;
use std::sync::Arc;

use colframe_core::prelude::{AggKind, Error, Result, Scalar, Table};

use crate::metrics::emit_op;

/// One distinct key tuple and the rows (ascending) that carry it.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    pub key: Vec<Scalar>,
    pub rows: Vec<usize>,
}

impl Partition {
    /// First row of the group in the source table.
    pub fn first_row(&self) -> usize {
        self.rows[0]
    }
}

#[derive(Debug, Clone)]
pub struct GroupBy {
    pub keys: Vec<String>,
}

impl GroupBy {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn apply(&self, table: &Arc<Table>) -> Result<GroupedTable> {
        if self.keys.is_empty() {
            return Err(Error::Type("group_by needs at least one key column".into()));
        }
        let mut key_indices = Vec::with_capacity(self.keys.len());
        for (i, key) in self.keys.iter().enumerate() {
            let idx = table
                .index_of(key)
                .ok_or_else(|| Error::Lookup(format!("key column '{key}' not found")))?;
            if self.keys[..i].contains(key) {
                return Err(Error::Type(format!("key column '{key}' listed twice")));
            }
            key_indices.push(idx);
        }

        let groups = partition(table, &key_indices);
        emit_op("group_by", table.num_rows(), groups.len(), key_indices.len());

        Ok(GroupedTable {
            table: Arc::clone(table),
            keys: self.keys.clone(),
            groups,
        })
    }
}

/// Shorthand for `GroupBy::new(keys).apply(table)`.
pub fn group_by<S: AsRef<str>>(table: &Arc<Table>, keys: &[S]) -> Result<GroupedTable> {
    GroupBy::new(keys.iter().map(|k| k.as_ref().to_string())).apply(table)
}

/// Refine group ids one key column at a time. Ids are handed out in row
/// order, so id `k` is the `k`-th distinct tuple by first appearance.
fn partition(table: &Table, key_indices: &[usize]) -> Vec<Partition> {
    let n = table.num_rows();
    let mut ids = vec![0usize; n];

    for &col_idx in key_indices {
        let Some(column) = table.column_at(col_idx) else {
            continue;
        };
        let keys = column.order_keys();
        let mut seen: HashMap<(usize, u64), usize> = HashMap::new();
        for (id, key) in ids.iter_mut().zip(keys) {
            let next = seen.len();
            *id = *seen.entry((*id, key)).or_insert(next);
        }
    }

    let mut groups: Vec<Partition> = Vec::new();
    for (row, &id) in ids.iter().enumerate() {
        if id == groups.len() {
            let key = key_indices
                .iter()
                .filter_map(|&c| table.column_at(c).and_then(|col| col.get(row)))
                .collect();
            groups.push(Partition {
                key,
                rows: Vec::new(),
            });
        }
        groups[id].rows.push(row);
    }
    groups
}

/// A table plus its partition by key columns. Transient and read-only.
#[derive(Debug, Clone)]
pub struct GroupedTable {
    table: Arc<Table>,
    keys: Vec<String>,
    groups: Vec<Partition>,
}

impl GroupedTable {
    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn key_names(&self) -> &[String] {
        &self.keys
    }

    pub fn groups(&self) -> &[Partition] {
        &self.groups
    }

    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    /// One row per group, in partition order: the key columns followed by
    /// `column` reduced with `kind`. If `column` is itself a key, the reduced
    /// column is named `<column>_<kind>` (numbered if that is a key too).
    pub fn aggregate(&self, column: &str, kind: AggKind) -> Result<Table> {
        let values = self
            .table
            .column(column)
            .ok_or_else(|| Error::column_not_found(column))?;

        let first_rows: Vec<usize> = self.groups.iter().map(Partition::first_row).collect();
        let mut out = Table::new();
        for key in &self.keys {
            let key_column = self
                .table
                .column(key)
                .ok_or_else(|| Error::Invariant(format!("key column '{key}' vanished")))?;
            out.add_column(key.clone(), key_column.take(&first_rows))?;
        }

        let reduced = reduce::reduce(values, &self.groups, kind);
        let name = output_name(&out, column, kind);
        out.add_column(name, reduced)?;

        emit_op("aggregate", self.table.num_rows(), out.num_rows(), out.num_columns());
        Ok(out)
    }
}

/// `column` itself unless a key column already has that name, then
/// `<column>_<kind>`, then `<column>_<kind>_1`, `_2`, ... until unused.
fn output_name(out: &Table, column: &str, kind: AggKind) -> String {
    if out.index_of(column).is_none() {
        return column.to_string();
    }
    let base = format!("{column}_{kind}");
    let mut name = base.clone();
    let mut n = 0;
    while out.index_of(&name).is_some() {
        n += 1;
        name = format!("{base}_{n}");
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use colframe_core::prelude::Column;

    fn table() -> Arc<Table> {
        Arc::new(
            Table::from_columns([
                ("A", Column::from(vec![1i64, 2, 3, 4, 5])),
                ("B", Column::from(vec![1.0, 1.0, 2.0, 2.0, 1.0])),
                ("C", Column::from(vec![true, false, true, false, true])),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn groups_in_encounter_order() {
        let out = group_by(&table(), &["C"]).unwrap().aggregate("A", AggKind::Sum).unwrap();
        assert_eq!(out.column("C"), Some(&Column::Boolean(vec![true, false])));
        assert_eq!(out.column("A"), Some(&Column::Int64(vec![9, 6])));
    }

    #[test]
    fn multi_key_partition() {
        let g = group_by(&table(), &["B", "C"]).unwrap();
        let rows: Vec<Vec<usize>> = g.groups().iter().map(|p| p.rows.clone()).collect();
        assert_eq!(rows, vec![vec![0, 4], vec![1], vec![2], vec![3]]);
        assert_eq!(g.groups()[0].key, vec![Scalar::Float64(1.0), Scalar::Boolean(true)]);
        let out = g.aggregate("A", AggKind::Count).unwrap();
        assert_eq!(out.column_names().collect::<Vec<_>>(), vec!["B", "C", "A"]);
        assert_eq!(out.column("A"), Some(&Column::Int64(vec![2, 1, 1, 1])));
    }

    #[test]
    fn key_validation() {
        let t = table();
        let empty: [&str; 0] = [];
        assert!(matches!(group_by(&t, &empty), Err(Error::Type(_))));
        assert!(matches!(group_by(&t, &["Z"]), Err(Error::Lookup(_))));
        assert!(matches!(group_by(&t, &["C", "C"]), Err(Error::Type(_))));
        let g = group_by(&t, &["C"]).unwrap();
        assert!(matches!(g.aggregate("Z", AggKind::Sum), Err(Error::Lookup(_))));
    }

    #[test]
    fn aggregating_a_key_column_renames_it() {
        let out = group_by(&table(), &["C"]).unwrap().aggregate("C", AggKind::Count).unwrap();
        assert_eq!(out.column_names().collect::<Vec<_>>(), vec!["C", "C_count"]);
        assert_eq!(out.column("C_count"), Some(&Column::Int64(vec![3, 2])));
    }

    #[test]
    fn renamed_column_skips_names_taken_by_keys() {
        let t = Arc::new(
            Table::from_columns([
                ("C", Column::from(vec![1i64, 1, 2])),
                ("C_sum", Column::from(vec![5i64, 5, 6])),
                ("C_sum_1", Column::from(vec![0i64, 0, 0])),
            ])
            .unwrap(),
        );
        let out = group_by(&t, &["C", "C_sum"])
            .unwrap()
            .aggregate("C", AggKind::Sum)
            .unwrap();
        assert_eq!(
            out.column_names().collect::<Vec<_>>(),
            vec!["C", "C_sum", "C_sum_1"]
        );
        assert_eq!(out.column("C_sum_1"), Some(&Column::Int64(vec![2, 2])));

        let out = group_by(&t, &["C", "C_sum", "C_sum_1"])
            .unwrap()
            .aggregate("C", AggKind::Sum)
            .unwrap();
        assert_eq!(out.column("C_sum_2"), Some(&Column::Int64(vec![2, 2])));
    }

    #[test]
    fn signed_zero_and_nan_group_together() {
        let keys = Column::from(vec![0.0, f64::NAN, -0.0, f64::NAN]);
        let t = Arc::new(Table::from_columns([("k", keys)]).unwrap());
        let g = group_by(&t, &["k"]).unwrap();
        assert_eq!(g.num_groups(), 2);
        assert_eq!(g.groups()[0].rows, vec![0, 2]);
        assert_eq!(g.groups()[1].rows, vec![1, 3]);
    }

    #[test]
    fn empty_table_has_no_groups() {
        let t = Arc::new(Table::from_columns([("k", Column::Int64(vec![]))]).unwrap());
        let g = group_by(&t, &["k"]).unwrap();
        assert_eq!(g.num_groups(), 0);
        let out = g.aggregate("k", AggKind::Sum).unwrap();
        assert_eq!(out.shape(), (0, 2));
    }
}
