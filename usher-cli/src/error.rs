//! Exit-code mapping for the usher binary.
//!
//! Every failure a command can hit lands in [`CliError`], and each variant
//! owns a process exit code: 1 for semantic failures (bad seats, oversized
//! groups, invalid config content), 4 for unusable arguments or scripts,
//! 5 for I/O, 6 for other engine errors, 7 for configuration assembly.

use std::fmt;
use std::io;

/// Failure of a CLI command, tagged with its exit code.
#[derive(Debug)]
pub enum CliError {
    /// The allocation engine rejected an operation.
    Engine(usher::Error),

    /// A flag value or script line could not be understood.
    InvalidArguments(String),

    /// Reading a script or writing output failed.
    Io(io::Error),

    /// The configuration could not be assembled or validated.
    Config(String),

    /// The command ran, but its subject failed the check.
    SemanticFailure(String),
}

impl CliError {
    /// The process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::SemanticFailure(_)
            | Self::Engine(
                usher::Error::InvalidSeat { .. } | usher::Error::RequestTooLarge { .. },
            ) => 1,
            Self::Engine(_) => 6,
            Self::InvalidArguments(_) => 4,
            Self::Io(_) => 5,
            Self::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Engine(e) => e.fmt(f),
            Self::InvalidArguments(msg) => write!(f, "invalid arguments: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Config(msg) => write!(f, "configuration error: {msg}"),
            Self::SemanticFailure(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Engine(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<usher::Error> for CliError {
    fn from(e: usher::Error) -> Self {
        Self::Engine(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_violations_exit_with_one() {
        let invalid_seat: CliError = usher::Error::InvalidSeat {
            seat: "R9C9".to_string(),
            reason: "outside a 3x11 chart".to_string(),
        }
        .into();
        assert_eq!(invalid_seat.exit_code(), 1);

        let too_large: CliError = usher::Error::RequestTooLarge {
            requested: 12,
            max: 10,
        }
        .into();
        assert_eq!(too_large.exit_code(), 1);

        assert_eq!(CliError::SemanticFailure("failed".into()).exit_code(), 1);
    }

    #[test]
    fn test_remaining_variants_have_distinct_codes() {
        let validation = CliError::Engine(usher::Error::Validation {
            field: "chart.rows".to_string(),
            message: "Must be greater than 0".to_string(),
        });
        assert_eq!(validation.exit_code(), 6);

        assert_eq!(CliError::InvalidArguments("line 2".into()).exit_code(), 4);

        let not_found = io::Error::new(io::ErrorKind::NotFound, "no such file");
        assert_eq!(CliError::from(not_found).exit_code(), 5);

        assert_eq!(CliError::Config("rows must be positive".into()).exit_code(), 7);
    }

    #[test]
    fn test_engine_messages_pass_through_unchanged() {
        let err: CliError = usher::Error::RequestTooLarge {
            requested: 12,
            max: 10,
        }
        .into();
        assert!(err.to_string().contains("exceeds the maximum of 10"));
    }
}
