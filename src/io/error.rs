//! Error types for chain construction, numerical solvers and output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all analysis operations
#[derive(Debug)]
pub enum MazeMarkovError {
    /// A transition matrix row does not sum to one
    ///
    /// Raised immediately instead of renormalising, since it means the
    /// oracle or a supplied matrix is inconsistent.
    Construction {
        /// Flat index of the offending state
        state: usize,
        /// Observed sum of the row
        row_sum: f64,
    },

    /// A supplied matrix has the wrong shape or invalid entries
    InvalidMatrix {
        /// Description of what's wrong with the matrix
        reason: String,
    },

    /// Numerical computation produced no usable result
    Numerical {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Caller-supplied parameter failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
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

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for MazeMarkovError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Construction { state, row_sum } => {
                write!(
                    f,
                    "Transition row for state {state} sums to {row_sum} instead of 1"
                )
            }
            Self::InvalidMatrix { reason } => {
                write!(f, "Invalid transition matrix: {reason}")
            }
            Self::Numerical { operation, reason } => {
                write!(f, "Numerical error in {operation}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MazeMarkovError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for analysis results
pub type Result<T> = std::result::Result<T, MazeMarkovError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeMarkovError {
    MazeMarkovError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a numerical error
pub fn numerical_error(operation: &'static str, reason: &impl ToString) -> MazeMarkovError {
    MazeMarkovError::Numerical {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a file system error for a specific path and operation
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> MazeMarkovError {
    MazeMarkovError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
