//! `Table`: an ordered mapping of unique names to equal-length columns.
//!
//! Invariants:
//! - names are unique (case-sensitive) and keep insertion order;
//! - every column has exactly `num_rows` values; the first insertion fixes it;
//! - row labels, when present, have exactly `num_rows` entries.
//!
//! Tables are built by repeated `add_column` and then treated as immutable:
//! the row-level transforms below return new tables and share untouched
//! column buffers through `Arc`.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::schema::DataType;
use crate::types::{Column, Scalar};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Arc<Column>>,
    num_rows: usize,
    row_labels: Option<Arc<[String]>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(name, column)` pairs, inserted in order.
    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Column)>,
        S: Into<String>,
    {
        let mut table = Table::new();
        for (name, column) in columns {
            table.add_column(name, column)?;
        }
        Ok(table)
    }

    /// Insert a column. On error the table is left exactly as it was.
    pub fn add_column(&mut self, name: impl Into<String>, column: Column) -> Result<()> {
        self.push_shared(name, Arc::new(column))
    }

    /// Insert a column that may already be owned by another table.
    pub fn push_shared(&mut self, name: impl Into<String>, column: Arc<Column>) -> Result<()> {
        let name = name.into();
        if self.index_of(&name).is_some() {
            return Err(Error::Schema(format!("column '{name}' already exists")));
        }
        if !self.columns.is_empty() && column.len() != self.num_rows {
            return Err(Error::Schema(format!(
                "column '{name}' has length {}, expected {}",
                column.len(),
                self.num_rows
            )));
        }
        if self.columns.is_empty() {
            if let Some(labels) = &self.row_labels {
                if labels.len() != column.len() {
                    return Err(Error::Schema(format!(
                        "column '{name}' has length {}, row labels have {}",
                        column.len(),
                        labels.len()
                    )));
                }
            }
            self.num_rows = column.len();
        }
        self.names.push(name);
        self.columns.push(column);
        Ok(())
    }

    /// Attach one label per row.
    pub fn with_row_labels<I, S>(mut self, labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Arc<[String]> = labels.into_iter().map(Into::into).collect();
        if !self.columns.is_empty() && labels.len() != self.num_rows {
            return Err(Error::Schema(format!(
                "{} row labels for {} rows",
                labels.len(),
                self.num_rows
            )));
        }
        if self.columns.is_empty() {
            self.num_rows = 0;
        }
        self.row_labels = Some(labels);
        Ok(self)
    }

    /// `(row_count, column_count)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.columns.len())
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// True when the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Name of the `i`-th column in insertion order.
    pub fn column_name(&self, i: usize) -> Option<&str> {
        self.names.get(i).map(String::as_str)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.shared_column(name).map(|c| c.as_ref())
    }

    pub fn column_at(&self, i: usize) -> Option<&Column> {
        self.columns.get(i).map(|c| c.as_ref())
    }

    pub fn shared_column(&self, name: &str) -> Option<&Arc<Column>> {
        self.index_of(name).map(|i| &self.columns[i])
    }

    /// Read-only view of a named column.
    pub fn series(&self, name: &str) -> Result<Series<'_>> {
        let i = self
            .index_of(name)
            .ok_or_else(|| Error::column_not_found(name))?;
        Ok(Series {
            name: &self.names[i],
            column: &self.columns[i],
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter().map(|c| c.as_ref()))
    }

    pub fn row_labels(&self) -> Option<&[String]> {
        self.row_labels.as_deref()
    }

    /// Values of one row, in column order.
    pub fn row(&self, row: usize) -> Option<Vec<Scalar>> {
        if row >= self.num_rows {
            return None;
        }
        self.columns.iter().map(|c| c.get(row)).collect()
    }

    /// New table whose row `i` is row `indices[i]` of this one.
    pub fn take_rows(&self, indices: &[usize]) -> Table {
        Table {
            names: self.names.clone(),
            columns: self
                .columns
                .iter()
                .map(|c| Arc::new(c.take(indices)))
                .collect(),
            num_rows: indices.len(),
            row_labels: self
                .row_labels
                .as_ref()
                .map(|l| indices.iter().map(|&i| l[i].clone()).collect()),
        }
    }

    /// New table with the rows where `mask` is true. Caller checks the mask length.
    pub fn filter_rows(&self, mask: &[bool]) -> Table {
        let selected = mask.iter().filter(|m| **m).count();
        if selected == self.num_rows {
            return self.clone();
        }
        Table {
            names: self.names.clone(),
            columns: self
                .columns
                .iter()
                .map(|c| Arc::new(c.filter(mask, selected)))
                .collect(),
            num_rows: selected,
            row_labels: self.row_labels.as_ref().map(|l| {
                l.iter()
                    .zip(mask)
                    .filter(|(_, m)| **m)
                    .map(|(s, _)| s.clone())
                    .collect()
            }),
        }
    }

    /// Project onto `names`, in the given order, sharing the column buffers.
    ///
    /// Unknown names are a `Lookup` error and repeated names a `Schema` error.
    /// Row labels are kept unless the projection has no columns.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Table> {
        let mut out = Table::new();
        for name in names {
            let name = name.as_ref();
            let column = self
                .shared_column(name)
                .ok_or_else(|| Error::column_not_found(name))?;
            out.push_shared(name, Arc::clone(column))?;
        }
        if !out.is_empty() {
            out.row_labels = self.row_labels.clone();
        }
        Ok(out)
    }

    /// First `n` rows; shares every buffer when `n` covers the whole table.
    pub fn head(&self, n: usize) -> Table {
        if n >= self.num_rows {
            return self.clone();
        }
        Table {
            names: self.names.clone(),
            columns: self.columns.iter().map(|c| Arc::new(c.head(n))).collect(),
            num_rows: n,
            row_labels: self.row_labels.as_ref().map(|l| l[..n].iter().cloned().collect()),
        }
    }
}

/// Read-only view of one column bound to its owning table.
#[derive(Debug, Clone, Copy)]
pub struct Series<'a> {
    name: &'a str,
    column: &'a Column,
}

impl<'a> Series<'a> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn data_type(&self) -> DataType {
        self.column.data_type()
    }

    pub fn len(&self) -> usize {
        self.column.len()
    }

    pub fn is_empty(&self) -> bool {
        self.column.is_empty()
    }

    pub fn column(&self) -> &'a Column {
        self.column
    }

    pub fn get(&self, row: usize) -> Option<Scalar> {
        self.column.get(row)
    }
}
