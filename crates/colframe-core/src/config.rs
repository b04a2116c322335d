//! Engine configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Significant digits a float can be rendered with.
const PRECISION_RANGE: std::ops::RangeInclusive<usize> = 1..=17;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Largest column (in rows) accepted at ingestion.
    pub max_ingest_rows: usize,

    /// Numeric sorts switch from comparison sort to radix sort at this many rows.
    pub radix_sort_threshold: usize,

    /// Optional cap on rendered body rows.
    pub render_max_rows: Option<usize>,

    /// Significant digits used when rendering floats.
    pub float_precision: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_ingest_rows: i32::MAX as usize,
            radix_sort_threshold: 1024,
            render_max_rows: None,
            float_precision: 6,
        }
    }
}

impl EngineConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `COLFRAME_MAX_INGEST_ROWS`: largest accepted column length
    /// - `COLFRAME_RADIX_SORT_THRESHOLD`: row count where radix sort kicks in
    /// - `COLFRAME_RENDER_MAX_ROWS`: rendered body row cap
    /// - `COLFRAME_FLOAT_PRECISION`: significant digits for floats
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("COLFRAME_MAX_INGEST_ROWS") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.max_ingest_rows = v;
            }
        }

        if let Ok(s) = std::env::var("COLFRAME_RADIX_SORT_THRESHOLD") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.radix_sort_threshold = v;
            }
        }

        if let Ok(s) = std::env::var("COLFRAME_RENDER_MAX_ROWS") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.render_max_rows = Some(v);
            }
        }

        if let Ok(s) = std::env::var("COLFRAME_FLOAT_PRECISION") {
            if let Ok(v) = s.parse::<usize>() {
                if PRECISION_RANGE.contains(&v) {
                    cfg.float_precision = v;
                }
            }
        }

        cfg
    }

    /// Parse a (possibly partial) JSON object; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: EngineConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if !PRECISION_RANGE.contains(&self.float_precision) {
            return Err(Error::Config(format!(
                "float_precision must be in 1..=17, got {}",
                self.float_precision
            )));
        }
        Ok(())
    }
}
