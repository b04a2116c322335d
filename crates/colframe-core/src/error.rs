use thiserror::Error;

/// Canonical result for the engine.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Duplicate column name, length mismatch, mask of the wrong kind or length.
    #[error("Schema error: {0}")]
    Schema(String),

    /// Unsupported dtype or an argument of the wrong shape.
    #[error("Type error: {0}")]
    Type(String),

    /// Unknown column or key name.
    #[error("Lookup error: {0}")]
    Lookup(String),

    /// Unknown reduction operator.
    #[error("Aggregation error: {0}")]
    Aggregation(String),

    /// A boundary call failed without further detail (stale handle, null out-pointer).
    #[error("Boundary error: {0}")]
    Boundary(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Internal invariant failed: {0}")]
    Invariant(String),
}

impl Error {
    pub fn column_not_found(name: &str) -> Self {
        Error::Lookup(format!("column '{name}' not found"))
    }

    /// Detail text without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Error::Schema(m)
            | Error::Type(m)
            | Error::Lookup(m)
            | Error::Aggregation(m)
            | Error::Boundary(m)
            | Error::Config(m)
            | Error::Invariant(m) => m,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}
