//! Error types for grid sizing and cell access

use std::fmt;

/// Main error type for all grid operations
///
/// Every failure is raised synchronously at the point of invalid input and
/// before any mutation, so a grid that returns an error is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A sizing operation received a zero or negative dimension
    NonPositiveValue {
        /// Name of the rejected dimension
        dimension: &'static str,
        /// Provided value that failed validation
        value: i32,
    },

    /// A cell access fell outside the current grid bounds
    IndexOutOfBounds {
        /// Axis of the offending index
        axis: &'static str,
        /// The invalid index
        index: i32,
        /// Number of valid positions along the axis
        extent: i32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveValue { dimension, value } => {
                write!(f, "Number of {dimension} must be positive (got {value})")
            }
            Self::IndexOutOfBounds {
                axis,
                index,
                extent,
            } => {
                write!(f, "Tile {axis} {index} is out of bounds (extent: {extent})")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

/// Create a non-positive dimension error
pub const fn non_positive(dimension: &'static str, value: i32) -> GridError {
    GridError::NonPositiveValue { dimension, value }
}

/// Create an out-of-bounds access error
pub const fn out_of_bounds(axis: &'static str, index: i32, extent: i32) -> GridError {
    GridError::IndexOutOfBounds {
        axis,
        index,
        extent,
    }
}
