//! Error types for the usher library.
//!
//! This module provides the error hierarchy for seat allocation and
//! configuration handling, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with an usher error.
///
/// # Examples
///
/// ```
/// use usher::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(33)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the usher library.
///
/// Only two variants can escape the allocation engine itself:
/// [`Error::InvalidSeat`] and [`Error::RequestTooLarge`]. Both are
/// precondition violations detected before any state changes; a request
/// that simply finds no room is *not* an error (see
/// [`Placement::NotAvailable`](crate::engine::Placement)). The remaining
/// variants belong to the configuration layer.
#[derive(Debug, Error)]
pub enum Error {
    /// A pre-reservation targeted a seat that does not exist.
    #[error("invalid seat {seat}: {reason}")]
    InvalidSeat {
        /// The offending seat, as given by the caller.
        seat: String,
        /// The reason the seat is invalid.
        reason: String,
    },

    /// A group request exceeded the configured maximum.
    #[error("request for {requested} seats exceeds the maximum of {max}")]
    RequestTooLarge {
        /// The requested group size.
        requested: usize,
        /// The configured maximum group size.
        max: usize,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<crate::seat::InvalidSeatLabelError> for Error {
    fn from(err: crate::seat::InvalidSeatLabelError) -> Self {
        Self::InvalidSeat {
            seat: err.label,
            reason: err.reason,
        }
    }
}

impl Error {
    /// Check if error indicates an invalid pre-reservation target.
    ///
    /// # Examples
    ///
    /// ```
    /// use usher::Error;
    ///
    /// let err = Error::InvalidSeat {
    ///     seat: "R9C1".to_string(),
    ///     reason: "outside a 3x11 chart".to_string(),
    /// };
    /// assert!(err.is_invalid_seat());
    /// ```
    #[must_use]
    pub fn is_invalid_seat(&self) -> bool {
        matches!(self, Self::InvalidSeat { .. })
    }

    /// Check if error indicates an oversized group request.
    ///
    /// # Examples
    ///
    /// ```
    /// use usher::Error;
    ///
    /// let err = Error::RequestTooLarge { requested: 12, max: 10 };
    /// assert!(err.is_request_too_large());
    /// ```
    #[must_use]
    pub fn is_request_too_large(&self) -> bool {
        matches!(self, Self::RequestTooLarge { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_seat_error() {
        let err = Error::InvalidSeat {
            seat: "R4C2".to_string(),
            reason: "outside a 3x11 chart".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid seat"));
        assert!(display.contains("R4C2"));
        assert!(display.contains("3x11"));
    }

    #[test]
    fn test_request_too_large_error() {
        let err = Error::RequestTooLarge {
            requested: 12,
            max: 10,
        };
        let display = format!("{err}");
        assert!(display.contains("12 seats"));
        assert!(display.contains("maximum of 10"));
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "chart.rows".to_string(),
            message: "must be at least 1".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("chart.rows"));
        assert!(display.contains("must be at least 1"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
    }

    #[test]
    fn test_label_error_conversion() {
        let label_err = crate::seat::SeatLabel::parse("row one").unwrap_err();
        let err: Error = label_err.into();
        assert!(err.is_invalid_seat());
    }

    #[test]
    fn test_error_predicates() {
        let invalid = Error::InvalidSeat {
            seat: "R0C0".to_string(),
            reason: "seat numbers are 1-based".to_string(),
        };
        let too_large = Error::RequestTooLarge {
            requested: 4,
            max: 3,
        };
        assert!(invalid.is_invalid_seat());
        assert!(!invalid.is_request_too_large());
        assert!(too_large.is_request_too_large());
        assert!(!too_large.is_invalid_seat());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<usize> {
            Err(Error::RequestTooLarge {
                requested: 11,
                max: 10,
            })
        }

        assert!(returns_result().is_err());
    }
}
