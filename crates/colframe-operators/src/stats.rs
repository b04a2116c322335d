//! `describe`: per-column summary statistics.
//!
//! Output has one float64 column per input column and exactly eight rows,
//! labeled by [`DESCRIBE_LABELS`]. Booleans count as 0/1. The standard
//! deviation divides by `n`; quartiles interpolate linearly between order
//! statistics at position `p * (n - 1)`.

use colframe_core::order::cmp_f64;
use colframe_core::prelude::{Column, Result, Table};

use crate::traits::Operator;

pub const DESCRIBE_LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

#[derive(Debug, Clone, Copy, Default)]
pub struct Describe;

impl Operator for Describe {
    fn name(&self) -> &'static str {
        "describe"
    }

    fn eval(&self, input: &Table) -> Result<Table> {
        if input.is_empty() {
            return Ok(Table::new());
        }
        let mut out = Table::new();
        for (name, column) in input.iter() {
            out.add_column(name, Column::Float64(summary(column.to_f64_vec()).to_vec()))?;
        }
        out.with_row_labels(DESCRIBE_LABELS)
    }
}

fn summary(mut values: Vec<f64>) -> [f64; 8] {
    let n = values.len();
    if n == 0 {
        let mut empty = [f64::NAN; 8];
        empty[0] = 0.0;
        return empty;
    }
    values.sort_by(|a, b| cmp_f64(*a, *b));

    let count = n as f64;
    let mean = values.iter().sum::<f64>() / count;
    let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / count;

    [
        count,
        mean,
        var.sqrt(),
        values[0],
        percentile(&values, 0.25),
        percentile(&values, 0.50),
        percentile(&values, 0.75),
        values[n - 1],
    ]
}

/// Linear interpolation over sorted, non-empty `sorted`.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let idx = p * (sorted.len() - 1) as f64;
    let lo = idx.floor() as usize;
    let hi = idx.ceil() as usize;
    let frac = idx - lo as f64;
    if frac == 0.0 {
        return sorted[lo];
    }
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(t: &Table, name: &str) -> Vec<f64> {
        t.column(name).and_then(Column::as_f64).unwrap().to_vec()
    }

    #[test]
    fn quartiles_interpolate() {
        let t = Table::from_columns([("x", Column::from(vec![4i64, 1, 3, 2]))]).unwrap();
        let out = Describe.eval(&t).unwrap();
        assert_eq!(out.shape(), (8, 1));
        let s = stats(&out, "x");
        assert_eq!(s[0], 4.0);
        assert_eq!(s[1], 2.5);
        assert!((s[2] - 1.25f64.sqrt()).abs() < 1e-12);
        assert_eq!(&s[3..], &[1.0, 1.75, 2.5, 3.25, 4.0]);
        assert_eq!(
            out.row_labels().unwrap().to_vec(),
            DESCRIBE_LABELS.iter().map(|s| s.to_string()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn bools_promote_and_every_column_is_float() {
        let t = Table::from_columns([
            ("b", Column::from(vec![true, false, true, true])),
            ("i", Column::from(vec![7i64, 7, 7, 7])),
        ])
        .unwrap();
        let out = Describe.eval(&t).unwrap();
        let b = stats(&out, "b");
        assert_eq!(b[1], 0.75);
        assert_eq!(b[3], 0.0);
        assert_eq!(b[7], 1.0);
        let i = stats(&out, "i");
        assert_eq!(i[2], 0.0);
        assert_eq!(i[5], 7.0);
    }

    #[test]
    fn zero_rows_and_zero_columns() {
        let t = Table::from_columns([("x", Column::Float64(vec![]))]).unwrap();
        let s = stats(&Describe.eval(&t).unwrap(), "x");
        assert_eq!(s[0], 0.0);
        assert!(s[1..].iter().all(|v| v.is_nan()));

        let empty = Describe.eval(&Table::new()).unwrap();
        assert_eq!(empty.shape(), (0, 0));
    }

    #[test]
    fn single_value() {
        let t = Table::from_columns([("x", Column::from(vec![3.5]))]).unwrap();
        let s = stats(&Describe.eval(&t).unwrap(), "x");
        assert_eq!(s, vec![1.0, 3.5, 0.0, 3.5, 3.5, 3.5, 3.5, 3.5]);
    }
}
