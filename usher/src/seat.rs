//! Seat, seat state, and seat label types.
//!
//! This module provides the seat data model: a seat knows its position,
//! its precomputed desirability distance, and its reservation state. Seat
//! labels are the external, 1-based `R{row}C{column}` representation.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Reservation state of a single seat.
///
/// State only ever tightens: a seat goes from `Free` to `PreReserved` or
/// `Reserved` and never back. There is no release operation.
///
/// # Examples
///
/// ```
/// use usher::SeatState;
///
/// assert!(!SeatState::Free.is_taken());
/// assert!(SeatState::PreReserved.is_taken());
/// assert!(SeatState::Reserved.is_taken());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatState {
    /// The seat has not been claimed by anyone.
    Free,
    /// The seat was withheld before group requests were served.
    PreReserved,
    /// The seat was committed to a group request.
    Reserved,
}

impl SeatState {
    /// Returns `true` if the seat is no longer available.
    #[must_use]
    pub const fn is_taken(self) -> bool {
        !matches!(self, Self::Free)
    }

    /// Returns the chart-rendering symbol for this state.
    ///
    /// `-` for free seats, `X` for pre-reserved seats, `O` for seats
    /// committed to a group request.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Free => '-',
            Self::PreReserved => 'X',
            Self::Reserved => 'O',
        }
    }
}

/// A single seat in the seating chart.
///
/// Seats are owned exclusively by the chart and addressed by their
/// `(row, column)` position; they are never shared or aliased. The
/// desirability `distance` is computed once at chart construction and
/// never changes.
///
/// # Examples
///
/// ```
/// use usher::SeatingChart;
///
/// let chart = SeatingChart::new(3, 11);
/// let seat = chart.seat(0, 5).unwrap();
/// assert_eq!(seat.distance(), 0); // the best seat in the house
/// assert_eq!(seat.label().to_string(), "R1C6");
/// ```
#[derive(Debug, Clone)]
pub struct Seat {
    row: usize,
    column: usize,
    distance: usize,
    state: SeatState,
}

impl Seat {
    /// Creates a free seat at the given 0-based position.
    pub(crate) const fn new(row: usize, column: usize, distance: usize) -> Self {
        Self {
            row,
            column,
            distance,
            state: SeatState::Free,
        }
    }

    /// Returns the 0-based row of the seat.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Returns the 0-based column of the seat.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Returns the precomputed Manhattan distance from the best seat.
    #[must_use]
    pub const fn distance(&self) -> usize {
        self.distance
    }

    /// Returns the current reservation state.
    #[must_use]
    pub const fn state(&self) -> SeatState {
        self.state
    }

    /// Returns `true` if the seat can still be claimed.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        !self.state.is_taken()
    }

    /// Returns the external label of the seat.
    #[must_use]
    pub const fn label(&self) -> SeatLabel {
        SeatLabel::new(self.row, self.column)
    }

    /// Marks the seat pre-reserved.
    ///
    /// Returns `true` if the state actually changed. Seats that are
    /// already taken stay in their current state.
    pub(crate) fn pre_reserve(&mut self) -> bool {
        if self.state.is_taken() {
            return false;
        }
        self.state = SeatState::PreReserved;
        true
    }

    /// Marks the seat reserved for a group request.
    ///
    /// Returns `true` if the state actually changed.
    pub(crate) fn reserve(&mut self) -> bool {
        if self.state.is_taken() {
            return false;
        }
        self.state = SeatState::Reserved;
        true
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A seat's external identity, `R{row}C{column}` with 1-based numbers.
///
/// Internally the label stores the 0-based position; the 1-based form is
/// used in every external representation.
///
/// # Examples
///
/// ```
/// use usher::SeatLabel;
///
/// let label = SeatLabel::new(0, 5);
/// assert_eq!(label.to_string(), "R1C6");
///
/// let parsed: SeatLabel = "R1C6".parse().unwrap();
/// assert_eq!(parsed, label);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeatLabel {
    row: usize,
    column: usize,
}

impl SeatLabel {
    /// Creates a label from a 0-based `(row, column)` position.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Returns the 0-based row.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the 0-based column.
    #[must_use]
    pub const fn column(self) -> usize {
        self.column
    }

    /// Parses a label of the form `R<digits>C<digits>`.
    ///
    /// The markers are matched case-insensitively and non-digit characters
    /// adjacent to the numbers are stripped before parsing, so `"R1C4"`,
    /// `"r1c4"` and `"[R1]C4,"` all denote the same seat. Each number must
    /// be a single contiguous digit run; `"R1C2x3"` is rejected rather
    /// than misread as column 23. The numbers are 1-based.
    ///
    /// # Errors
    ///
    /// Returns an error if either marker is missing, a number segment is
    /// empty or split by other characters, or a number is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use usher::SeatLabel;
    ///
    /// let label = SeatLabel::parse("R2C10").unwrap();
    /// assert_eq!(label.row(), 1);
    /// assert_eq!(label.column(), 9);
    ///
    /// assert!(SeatLabel::parse("C4").is_err());
    /// assert!(SeatLabel::parse("R0C1").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, InvalidSeatLabelError> {
        let trimmed = s.trim();

        let r_pos = trimmed
            .find(|c: char| c == 'R' || c == 'r')
            .ok_or_else(|| InvalidSeatLabelError::new(s, "missing 'R' marker"))?;
        let c_pos = trimmed[r_pos..]
            .find(|c: char| c == 'C' || c == 'c')
            .map(|i| i + r_pos)
            .ok_or_else(|| InvalidSeatLabelError::new(s, "missing 'C' marker"))?;

        let row = Self::parse_segment(&trimmed[r_pos + 1..c_pos], s, "row")?;
        let column = Self::parse_segment(&trimmed[c_pos + 1..], s, "column")?;

        Ok(Self {
            row: row - 1,
            column: column - 1,
        })
    }

    /// Parses the 1-based number from a label segment.
    ///
    /// Takes the first contiguous digit run; noise before or after it is
    /// tolerated, a second digit run is not.
    fn parse_segment(
        segment: &str,
        label: &str,
        what: &str,
    ) -> Result<usize, InvalidSeatLabelError> {
        let start = segment
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| {
                InvalidSeatLabelError::new(label, format!("no digits in {what} segment"))
            })?;
        let end = segment[start..]
            .find(|c: char| !c.is_ascii_digit())
            .map_or(segment.len(), |i| i + start);

        if segment[end..].contains(|c: char| c.is_ascii_digit()) {
            return Err(InvalidSeatLabelError::new(
                label,
                format!("{what} number is split by other characters"),
            ));
        }

        let value: usize = segment[start..end]
            .parse()
            .map_err(|_| InvalidSeatLabelError::new(label, format!("{what} number too large")))?;

        if value == 0 {
            return Err(InvalidSeatLabelError::new(
                label,
                format!("{what} numbers are 1-based"),
            ));
        }

        Ok(value)
    }
}

impl fmt::Display for SeatLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.row + 1, self.column + 1)
    }
}

impl FromStr for SeatLabel {
    type Err = InvalidSeatLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for SeatLabel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Error type for unparseable seat labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSeatLabelError {
    /// The label that failed to parse.
    pub label: String,
    /// The reason parsing failed.
    pub reason: String,
}

impl InvalidSeatLabelError {
    fn new(label: &str, reason: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for InvalidSeatLabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid seat label '{}': {}", self.label, self.reason)
    }
}

impl std::error::Error for InvalidSeatLabelError {}
