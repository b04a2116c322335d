//! Typed column storage and single values.
//!
//! A `Column` is one of three primitive kinds over a contiguous buffer. It is
//! never mutated after construction; transforms build new columns.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::order;
use crate::schema::DataType;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    Int64(i64),
    Float64(f64),
    Boolean(bool),
}

impl Scalar {
    pub fn data_type(&self) -> DataType {
        match self {
            Scalar::Int64(_) => DataType::Int64,
            Scalar::Float64(_) => DataType::Float64,
            Scalar::Boolean(_) => DataType::Boolean,
        }
    }

    /// Numeric view with booleans promoted to 0/1.
    pub fn as_f64(&self) -> f64 {
        match self {
            Scalar::Int64(v) => *v as f64,
            Scalar::Float64(v) => *v,
            Scalar::Boolean(v) => *v as i64 as f64,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int64(v) => write!(f, "{v}"),
            Scalar::Float64(v) => write!(f, "{v}"),
            Scalar::Boolean(v) => write!(f, "{v}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Column {
    Int64(Vec<i64>),
    Float64(Vec<f64>),
    Boolean(Vec<bool>),
}

impl Column {
    pub fn data_type(&self) -> DataType {
        match self {
            Column::Int64(_) => DataType::Int64,
            Column::Float64(_) => DataType::Float64,
            Column::Boolean(_) => DataType::Boolean,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Int64(v) => v.len(),
            Column::Float64(v) => v.len(),
            Column::Boolean(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, row: usize) -> Option<Scalar> {
        match self {
            Column::Int64(v) => v.get(row).copied().map(Scalar::Int64),
            Column::Float64(v) => v.get(row).copied().map(Scalar::Float64),
            Column::Boolean(v) => v.get(row).copied().map(Scalar::Boolean),
        }
    }

    pub fn as_i64(&self) -> Option<&[i64]> {
        match self {
            Column::Int64(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<&[f64]> {
        match self {
            Column::Float64(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<&[bool]> {
        match self {
            Column::Boolean(v) => Some(v),
            _ => None,
        }
    }

    /// Gather rows by position. Every index must be `< len()`.
    pub fn take(&self, indices: &[usize]) -> Column {
        match self {
            Column::Int64(v) => Column::Int64(indices.iter().map(|&i| v[i]).collect()),
            Column::Float64(v) => Column::Float64(indices.iter().map(|&i| v[i]).collect()),
            Column::Boolean(v) => Column::Boolean(indices.iter().map(|&i| v[i]).collect()),
        }
    }

    /// Keep the rows where `mask` is true. `mask.len()` must equal `len()`.
    pub fn filter(&self, mask: &[bool], selected: usize) -> Column {
        fn keep<T: Copy>(values: &[T], mask: &[bool], selected: usize) -> Vec<T> {
            let mut out = Vec::with_capacity(selected);
            out.extend(
                values
                    .iter()
                    .zip(mask)
                    .filter(|(_, m)| **m)
                    .map(|(&v, _)| v),
            );
            out
        }
        match self {
            Column::Int64(v) => Column::Int64(keep(v, mask, selected)),
            Column::Float64(v) => Column::Float64(keep(v, mask, selected)),
            Column::Boolean(v) => Column::Boolean(keep(v, mask, selected)),
        }
    }

    /// First `n` rows (clamped to `len()`).
    pub fn head(&self, n: usize) -> Column {
        let n = n.min(self.len());
        match self {
            Column::Int64(v) => Column::Int64(v[..n].to_vec()),
            Column::Float64(v) => Column::Float64(v[..n].to_vec()),
            Column::Boolean(v) => Column::Boolean(v[..n].to_vec()),
        }
    }

    /// Total-order keys for every row (see [`crate::order`]).
    pub fn order_keys(&self) -> Vec<u64> {
        match self {
            Column::Int64(v) => v.iter().map(|&x| order::i64_key(x)).collect(),
            Column::Float64(v) => v.iter().map(|&x| order::f64_key(x)).collect(),
            Column::Boolean(v) => v.iter().map(|&x| order::bool_key(x)).collect(),
        }
    }

    /// Values as floats with booleans promoted to 0/1.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match self {
            Column::Int64(v) => v.iter().map(|&x| x as f64).collect(),
            Column::Float64(v) => v.clone(),
            Column::Boolean(v) => v.iter().map(|&x| x as i64 as f64).collect(),
        }
    }
}

impl From<Vec<i64>> for Column {
    fn from(v: Vec<i64>) -> Self {
        Column::Int64(v)
    }
}

impl From<Vec<f64>> for Column {
    fn from(v: Vec<f64>) -> Self {
        Column::Float64(v)
    }
}

impl From<Vec<bool>> for Column {
    fn from(v: Vec<bool>) -> Self {
        Column::Boolean(v)
    }
}
