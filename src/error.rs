//! Crate-wide error type.

/// Errors raised by sampling, ranking, searching and the config/report layers.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// The function identifier is not registered in the oracle.
    #[error("unknown function ID {id}; valid function IDs: {valid}")]
    UnknownFunctionId {
        /// The offending identifier, as read from the input.
        id: i64,
        /// Human-readable list of the registered identifiers.
        valid: String,
    },

    #[error("invalid matrix dimensions {rows}x{columns}: rows and columns must be positive")]
    InvalidDimensionConfig { rows: usize, columns: usize },

    #[error("invalid bounds [{min}, {max}]: bounds must be finite and min <= max")]
    InvalidBounds { min: f64, max: f64 },

    #[error("invalid search configuration: {0}")]
    InvalidSearchConfig(String),

    /// A parallel payload does not line up with the fitness values.
    #[error("fitness has {fitness} entries but the payload has {payload}")]
    LengthMismatch { fitness: usize, payload: usize },

    #[error("cannot summarize an empty sample")]
    EmptySample,

    #[error("malformed config input on line {line}: {message}")]
    MalformedConfig { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BenchError>;
