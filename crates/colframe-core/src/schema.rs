//! The closed set of column kinds and reduction operators.
//!
//! Both travel across the C boundary as small integer codes; the conversions
//! live here so every layer agrees on them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Int64,
    Float64,
    Boolean,
}

impl DataType {
    pub const fn code(self) -> i32 {
        match self {
            DataType::Int64 => 0,
            DataType::Float64 => 1,
            DataType::Boolean => 2,
        }
    }

    /// Decode a boundary dtype code; anything outside the whitelist is a `Type` error.
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(DataType::Int64),
            1 => Ok(DataType::Float64),
            2 => Ok(DataType::Boolean),
            other => Err(Error::Type(format!(
                "unsupported dtype code {other} (expected 0=int64, 1=float64, 2=bool)"
            ))),
        }
    }

    /// Width in bytes of one element in the host buffer.
    pub const fn element_size(self) -> usize {
        match self {
            DataType::Int64 => 8,
            DataType::Float64 => 8,
            DataType::Boolean => 1,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DataType::Int64 => "int64",
            DataType::Float64 => "float64",
            DataType::Boolean => "bool",
        })
    }
}

/// Per-group reduction applied by `aggregate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AggKind {
    Sum,
    Mean,
    Count,
    Min,
    Max,
}

impl AggKind {
    pub const ALL: [AggKind; 5] = [
        AggKind::Sum,
        AggKind::Mean,
        AggKind::Count,
        AggKind::Min,
        AggKind::Max,
    ];

    pub const fn code(self) -> i32 {
        match self {
            AggKind::Sum => 0,
            AggKind::Mean => 1,
            AggKind::Count => 2,
            AggKind::Min => 3,
            AggKind::Max => 4,
        }
    }

    pub fn from_code(code: i32) -> Result<Self> {
        AggKind::ALL
            .into_iter()
            .find(|k| k.code() == code)
            .ok_or_else(|| {
                Error::Aggregation(format!(
                    "unknown aggregation code {code} \
                     (expected 0=SUM, 1=MEAN, 2=COUNT, 3=MIN, 4=MAX)"
                ))
            })
    }

    /// Output kind of the reduced column for an input of kind `input`.
    pub const fn output_type(self, input: DataType) -> DataType {
        match (self, input) {
            (AggKind::Mean, _) => DataType::Float64,
            (AggKind::Count, _) => DataType::Int64,
            (AggKind::Sum, DataType::Float64) => DataType::Float64,
            (AggKind::Sum, _) => DataType::Int64,
            (AggKind::Min | AggKind::Max, dt) => dt,
        }
    }
}

impl fmt::Display for AggKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AggKind::Sum => "sum",
            AggKind::Mean => "mean",
            AggKind::Count => "count",
            AggKind::Min => "min",
            AggKind::Max => "max",
        })
    }
}
