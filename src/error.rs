//! Error handling for the orderly library
//!
//! Every recoverable failure in the crate is reported through [`OrderlyError`].
//! Corrupt internal state (for example a broken node chain) is not an error
//! value: it is a logic bug and panics.

use thiserror::Error;

/// Main error type for the orderly library
#[derive(Error, Debug)]
pub enum OrderlyError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Index out of bounds access
    #[error("Out of bounds: index {index}, size {size}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// The valid size/length
        size: usize,
    },

    /// A coordinate pair outside the declared dimensions of a matrix
    #[error("Out of range: ({row}, {col}) outside {rows}x{cols} matrix")]
    OutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Declared number of rows
        rows: usize,
        /// Declared number of columns
        cols: usize,
    },

    /// Memory allocation failures
    #[error("Memory allocation failed: requested {size} bytes")]
    OutOfMemory {
        /// Number of bytes requested
        size: usize,
    },

    /// An operation was called on data that does not satisfy its contract
    #[error("Precondition violated: {message}")]
    PreconditionViolation {
        /// Description of the violated precondition
        message: String,
    },

    /// Matrix operands with incompatible shapes
    #[error("Dimension mismatch in {operation}: {left:?} vs {right:?}")]
    DimensionMismatch {
        /// Operation that was attempted
        operation: &'static str,
        /// Shape (rows, cols) of the left operand
        left: (usize, usize),
        /// Shape (rows, cols) of the right operand
        right: (usize, usize),
    },

    /// A fixed-capacity container is full
    #[error("Capacity exceeded: container holds at most {capacity} items")]
    CapacityExceeded {
        /// The fixed capacity
        capacity: usize,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },
}

impl OrderlyError {
    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::OutOfBounds { index, size }
    }

    /// Create an out of range error for a matrix coordinate
    pub fn out_of_range(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        Self::OutOfRange {
            row,
            col,
            rows,
            cols,
        }
    }

    /// Create an out of memory error
    pub fn out_of_memory(size: usize) -> Self {
        Self::OutOfMemory { size }
    }

    /// Create a precondition violation error
    pub fn precondition<S: Into<String>>(message: S) -> Self {
        Self::PreconditionViolation {
            message: message.into(),
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    ) -> Self {
        Self::DimensionMismatch {
            operation,
            left,
            right,
        }
    }

    /// Create a capacity exceeded error
    pub fn capacity_exceeded(capacity: usize) -> Self {
        Self::CapacityExceeded { capacity }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(_) => true,
            Self::OutOfMemory { .. } => true,
            Self::OutOfRange { .. } => true,
            Self::CapacityExceeded { .. } => true,
            Self::OutOfBounds { .. } => false,
            Self::PreconditionViolation { .. } => false,
            Self::DimensionMismatch { .. } => false,
            Self::Configuration { .. } => false,
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::OutOfBounds { .. } => "bounds",
            Self::OutOfRange { .. } => "range",
            Self::OutOfMemory { .. } => "memory",
            Self::PreconditionViolation { .. } => "precondition",
            Self::DimensionMismatch { .. } => "dimension",
            Self::CapacityExceeded { .. } => "capacity",
            Self::Configuration { .. } => "config",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, OrderlyError>;

/// Assert that an index is within bounds
#[inline]
pub fn check_bounds(index: usize, size: usize) -> Result<()> {
    if index >= size {
        Err(OrderlyError::out_of_bounds(index, size))
    } else {
        Ok(())
    }
}

/// Assert that a range is within bounds
#[inline]
pub fn check_range(start: usize, end: usize, size: usize) -> Result<()> {
    if start > end {
        return Err(OrderlyError::precondition(format!(
            "invalid range: start {} > end {}",
            start, end
        )));
    }
    if end > size {
        return Err(OrderlyError::out_of_bounds(end, size));
    }
    Ok(())
}
