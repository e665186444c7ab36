//! Error types for dataset generation, configuration and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// A required numeric range is missing, malformed, or yields an invalid draw
    Range {
        /// Canonical name of the range key
        key: &'static str,
        /// Explanation of what is wrong with the range
        reason: String,
    },

    /// No registered generator matches the requested name
    NotFound {
        /// The name that failed to resolve
        name: String,
        /// Names that would have resolved
        available: Vec<&'static str>,
    },

    /// Structural parameter validation failed
    ///
    /// Raised for drawn values that cannot shape a dataset, e.g.
    /// a negative refinement depth or a layer count of zero.
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Generated arrays do not form a rectangular dataset
    Shape {
        /// Description of the mismatch
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range { key, reason } => {
                write!(f, "Invalid range '{key}': {reason}")
            }
            Self::NotFound { name, available } => {
                write!(
                    f,
                    "No generator named '{name}' (available: {})",
                    available.join(", ")
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Shape { reason } => {
                write!(f, "Invalid dataset shape: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a range error
pub fn range_error(key: &'static str, reason: &impl ToString) -> GenerationError {
    GenerationError::Range {
        key,
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a shape error
pub fn shape_error(reason: &impl ToString) -> GenerationError {
    GenerationError::Shape {
        reason: reason.to_string(),
    }
}
