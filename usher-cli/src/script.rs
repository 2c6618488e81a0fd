//! Allocation script parsing.
//!
//! A script drives one allocation session. The first line lists seat
//! labels to pre-reserve (it may be empty); every following non-empty
//! line holds one group size.

use crate::error::CliError;
use usher::SeatLabel;

/// A parsed allocation script.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Script {
    /// Seats to withhold before any request is served.
    pub pre_reservations: Vec<SeatLabel>,
    /// Group sizes, in request order.
    pub requests: Vec<usize>,
}

impl Script {
    /// Parse a script from text.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArguments` with the offending line number when a
    /// label does not parse or a size is not a positive integer.
    pub fn parse(input: &str) -> Result<Self, CliError> {
        let mut lines = input.lines();

        let pre_reservations = match lines.next() {
            Some(first) => first
                .split_whitespace()
                .map(|token| {
                    SeatLabel::parse(token).map_err(|e| {
                        CliError::InvalidArguments(format!("line 1: {e}"))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        let mut requests = Vec::new();
        for (index, line) in lines.enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let size: usize = line.parse().map_err(|_| {
                CliError::InvalidArguments(format!(
                    "line {}: expected a group size, got '{line}'",
                    index + 2
                ))
            })?;

            if size == 0 {
                return Err(CliError::InvalidArguments(format!(
                    "line {}: group size must be greater than 0",
                    index + 2
                )));
            }

            requests.push(size);
        }

        Ok(Self {
            pre_reservations,
            requests,
        })
    }
}
