//! Error types for line integral convolution.

use thiserror::Error;

/// Errors produced while building fields or preparing a convolution run.
///
/// Every variant is detected before any streamline is traced. Numeric edge
/// cases inside advection (stalls, boundary exits, zero weights) are not
/// errors and never surface here.
#[derive(Debug, Error)]
pub enum LicError {
    /// A grid extent was zero or `rows * cols` overflowed.
    #[error("invalid dimensions: rows and cols must be non-zero")]
    InvalidDimensions,

    /// The vector field did not have exactly three dimensions.
    #[error("vector field must have {expected} dimensions, but got {got}")]
    RankMismatch { expected: usize, got: usize },

    /// The leading dimension of the vector field was not the component count.
    #[error("vector field must have {expected} components in its first dimension, but got {got}")]
    ComponentMismatch { expected: usize, got: usize },

    /// A grid did not match the spatial extent of the vector field.
    #[error("expected shape ({expected_rows}, {expected_cols}), but got ({rows}, {cols})")]
    ShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    /// A flat buffer held a different number of values than its shape implies.
    #[error("buffer holds {got} values, but its shape requires {expected}")]
    BufferLength { expected: usize, got: usize },

    /// A vector-field source name was not recognized.
    #[error("unknown source: {0}")]
    UnknownSource(String),

    /// Axis bounds were empty, inverted, or not finite.
    #[error("invalid bounds: {0}")]
    InvalidBounds(String),

    /// A dedicated worker pool could not be created.
    #[error("thread pool: {0}")]
    ThreadPool(String),
}

impl LicError {
    /// True for errors that describe input arrays of the wrong shape.
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(
            self,
            LicError::RankMismatch { .. }
                | LicError::ComponentMismatch { .. }
                | LicError::ShapeMismatch { .. }
                | LicError::BufferLength { .. }
        )
    }
}
