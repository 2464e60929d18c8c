//! # Error Types
//!
//! Error types for hull construction. Every failure is detected before any
//! output is produced, so a caller either receives a complete hull or one of
//! these errors.
//!
//! ## Status Codes
//!
//! Each variant maps to a stable negative status code for callers on the
//! other side of a foreign boundary:
//!
//! | Variant              | Code |
//! |----------------------|------|
//! | `InsufficientInput`  | -1   |
//! | `DegenerateInput`    | -2   |
//! | `CapacityExceeded`   | -3   |
//! | `InvalidStride`      | -4   |

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building a convex hull.
///
/// ## Example
///
/// ```rust
/// use convex_hull::{build_convex_hull, HullError};
///
/// let err = build_convex_hull(&[0.0; 9], 3).unwrap_err();
/// assert!(matches!(err, HullError::InsufficientInput { count: 3, min: 4 }));
/// assert_eq!(err.status_code(), -1);
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HullError {
    /// Fewer points than the configured minimum.
    #[error("Insufficient input: {count} points (min: {min})")]
    InsufficientInput {
        /// Number of complete points in the buffer
        count: usize,
        /// Configured minimum
        min: usize,
    },

    /// Every candidate seed quadruple is coplanar.
    #[error("Degenerate input: all points are coplanar")]
    DegenerateInput,

    /// Appending a face would exceed the configured face limit.
    #[error("Capacity exceeded: more than {max} faces required")]
    CapacityExceeded {
        /// Configured face limit
        max: usize,
    },

    /// Stride too small to hold a position.
    #[error("Invalid stride: {0} (must be >= 3)")]
    InvalidStride(usize),
}

impl HullError {
    /// Numeric status code reported across the foreign boundary.
    pub fn status_code(&self) -> i32 {
        match self {
            HullError::InsufficientInput { .. } => -1,
            HullError::DegenerateInput => -2,
            HullError::CapacityExceeded { .. } => -3,
            HullError::InvalidStride(_) => -4,
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for hull operations.
pub type HullResult<T> = Result<T, HullError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            HullError::InsufficientInput { count: 1, min: 4 }.status_code(),
            -1
        );
        assert_eq!(HullError::DegenerateInput.status_code(), -2);
        assert_eq!(HullError::CapacityExceeded { max: 4 }.status_code(), -3);
        assert_eq!(HullError::InvalidStride(2).status_code(), -4);
    }

    #[test]
    fn test_error_display() {
        let err = HullError::InsufficientInput { count: 2, min: 4 };
        assert!(err.to_string().contains("2 points"));

        let err = HullError::CapacityExceeded { max: 65_535 };
        assert!(err.to_string().contains("65535"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HullError>();
    }
}
