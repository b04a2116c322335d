//! Tab-separated text form of a table, for display and debugging.
//!
//! Layout: a header line of column names, then one line per row. Row labels
//! (if any) come first under an empty header cell. Lines are joined with
//! `\n` and there is no trailing newline.

use std::fmt::Write as _;

use colframe_core::prelude::{EngineConfig, Scalar, Table};

/// Rendered form of a table with no columns.
pub const EMPTY_MARKER: &str = "(empty table)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    /// Body rows to print before the `... (k more rows)` line.
    pub max_rows: Option<usize>,
    /// Significant digits for floats.
    pub precision: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl Renderer {
    pub fn from_config(cfg: &EngineConfig) -> Self {
        Self {
            max_rows: cfg.render_max_rows,
            precision: cfg.float_precision.max(1),
        }
    }

    pub fn render(&self, table: &Table) -> String {
        if table.is_empty() {
            return EMPTY_MARKER.to_string();
        }
        let labels = table.row_labels();
        let rows = table.num_rows();
        let shown = self.max_rows.map_or(rows, |m| m.min(rows));

        let mut lines = Vec::with_capacity(shown + 2);
        let mut header = Vec::with_capacity(table.num_columns() + 1);
        if labels.is_some() {
            header.push("");
        }
        header.extend(table.column_names());
        lines.push(header.join("\t"));

        let columns: Vec<_> = table.iter().map(|(_, c)| c).collect();
        for row in 0..shown {
            let mut line = String::new();
            if let Some(labels) = labels {
                line.push_str(&labels[row]);
            }
            for (i, column) in columns.iter().enumerate() {
                if i > 0 || labels.is_some() {
                    line.push('\t');
                }
                if let Some(value) = column.get(row) {
                    self.write_scalar(&mut line, value);
                }
            }
            lines.push(line);
        }
        if shown < rows {
            lines.push(format!("... ({} more rows)", rows - shown));
        }
        lines.join("\n")
    }

    fn write_scalar(&self, out: &mut String, value: Scalar) {
        match value {
            Scalar::Int64(v) => {
                let _ = write!(out, "{v}");
            }
            Scalar::Float64(v) => out.push_str(&format_float(v, self.precision)),
            Scalar::Boolean(v) => out.push_str(if v { "true" } else { "false" }),
        }
    }
}

/// `%g`-style float formatting with `digits` significant digits.
pub fn format_float(v: f64, digits: usize) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let digits = digits.max(1);
    if v == 0.0 {
        return if v.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Round to `digits` significant digits first; the exponent is taken after
    // rounding so that 999999.5 becomes 1e+06 rather than 1000000.
    let sci = format!("{:.*e}", digits - 1, v);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= digits as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{v:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
