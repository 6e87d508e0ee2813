//! Error types for the protocell crates.
//!
//! Both variants are structural: a cell that rejects a step stays usable
//! and can be stepped again once the caller fixes its input.

use crate::data::network::NetworkKind;
use thiserror::Error;

/// Main error type for cell operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CellError {
    /// A vector going into or out of a network had the wrong width.
    #[error("{network} network shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        network: NetworkKind,
        expected: usize,
        actual: usize,
    },

    /// An environment value was negative or not finite.
    #[error("{field} out of range: {value}")]
    InvalidRange { field: &'static str, value: f32 },
}

/// Result type alias for cell operations.
pub type Result<T> = std::result::Result<T, CellError>;

impl CellError {
    /// Creates a new shape mismatch error.
    #[must_use]
    pub fn shape_mismatch(network: NetworkKind, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            network,
            expected,
            actual,
        }
    }

    /// Creates a new range error.
    #[must_use]
    pub fn invalid_range(field: &'static str, value: f32) -> Self {
        Self::InvalidRange { field, value }
    }

    /// Short label used as a metrics counter key.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ShapeMismatch { .. } => "shape_mismatch",
            Self::InvalidRange { .. } => "invalid_range",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_display() {
        let err = CellError::shape_mismatch(NetworkKind::Metabolism, 4, 5);
        assert_eq!(
            err.to_string(),
            "metabolism network shape mismatch: expected 4, got 5"
        );
    }

    #[test]
    fn test_invalid_range_display() {
        let err = CellError::invalid_range("temperature", -1.0);
        assert!(err.to_string().contains("temperature"));
        assert_eq!(err.kind(), "invalid_range");
    }
}
