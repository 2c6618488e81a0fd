//! The allocation engine: priority-guided contiguous-block search.
//!
//! This module implements the core allocation algorithm. Requests are
//! served by walking the chart's desirability ordering and, at each
//! candidate anchor seat, growing a block symmetrically outward within the
//! anchor's row until the group fits or the expansion hits a seat it
//! cannot use.

use std::collections::VecDeque;
use std::fmt;

use crate::chart::SeatingChart;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::seat::SeatLabel;

/// Outcome of a group request.
///
/// Finding no room is an expected outcome, not an error: callers get
/// [`Placement::NotAvailable`] rather than an `Err`. Only precondition
/// violations ([`Error::InvalidSeat`], [`Error::RequestTooLarge`]) are
/// errors.
///
/// # Examples
///
/// ```
/// use usher::{AllocationEngine, Placement};
///
/// let mut engine = AllocationEngine::new(1, 2, 10);
/// match engine.request(3).unwrap() {
///     Placement::Block { seats } => println!("seated at {:?}", seats),
///     Placement::NotAvailable => println!("Not Available"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// No contiguous block of the requested size exists.
    NotAvailable,
    /// The group was seated.
    Block {
        /// The committed seats, in left-to-right order within their row.
        seats: Vec<SeatLabel>,
    },
}

impl Placement {
    /// Returns `true` if the group was seated.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Block { .. })
    }

    /// Returns the committed seats, empty when nothing was available.
    #[must_use]
    pub fn seats(&self) -> &[SeatLabel] {
        match self {
            Self::NotAvailable => &[],
            Self::Block { seats } => seats,
        }
    }
}

impl fmt::Display for Placement {
    /// A single seat prints as its label, a larger block as
    /// `"<first> - <last>"`, and no placement as `"Not Available"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAvailable => write!(f, "Not Available"),
            Self::Block { seats } => match seats.as_slice() {
                [single] => write!(f, "{single}"),
                [first, .., last] => write!(f, "{first} - {last}"),
                // Blocks are never empty; render something sensible anyway.
                [] => write!(f, "Not Available"),
            },
        }
    }
}

/// The seat allocation engine.
///
/// Owns the seating chart and serves two operations: withholding specific
/// seats with pre-reservations, and finding contiguous blocks for group
/// requests. The engine is single-threaded and performs no I/O; callers
/// format and display its structured results.
///
/// # Examples
///
/// ```
/// use usher::AllocationEngine;
///
/// let mut engine = AllocationEngine::new(3, 11, 10);
/// engine.pre_reserve(1, 6).unwrap();
///
/// let placement = engine.request(2).unwrap();
/// assert_eq!(placement.to_string(), "R1C4 - R1C5");
/// assert_eq!(engine.available_count(), 30);
/// ```
#[derive(Debug, Clone)]
pub struct AllocationEngine {
    chart: SeatingChart,
    max_group_size: usize,
}

impl AllocationEngine {
    /// Creates an engine over a fresh `rows` x `seats_per_row` chart.
    ///
    /// `max_group_size` caps the size of a single request; larger
    /// requests fail with [`Error::RequestTooLarge`] without searching.
    #[must_use]
    pub fn new(rows: usize, seats_per_row: usize, max_group_size: usize) -> Self {
        Self {
            chart: SeatingChart::new(rows, seats_per_row),
            max_group_size,
        }
    }

    /// Creates an engine from a resolved configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use usher::{AllocationEngine, Config};
    ///
    /// let engine = AllocationEngine::from_config(&Config::default());
    /// assert_eq!(engine.available_count(), 33); // 3 x 11 by default
    /// assert_eq!(engine.max_group_size(), 10);
    /// ```
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.rows(), config.seats_per_row(), config.max_request())
    }

    /// Returns the seating chart, for rendering and inspection.
    #[must_use]
    pub const fn chart(&self) -> &SeatingChart {
        &self.chart
    }

    /// Returns the configured maximum group size.
    #[must_use]
    pub const fn max_group_size(&self) -> usize {
        self.max_group_size
    }

    /// Returns the number of seats not yet committed.
    #[must_use]
    pub const fn available_count(&self) -> usize {
        self.chart.available_count()
    }

    /// Pre-reserves the seat at the given 1-based row and column.
    ///
    /// Pre-reservations withhold seats before group requests are served;
    /// applying them first is the caller's contract. Pre-reserving a seat
    /// that is already taken succeeds without decrementing the available
    /// count a second time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSeat`] if the position is outside the
    /// chart; no state changes in that case.
    pub fn pre_reserve(&mut self, row: usize, column: usize) -> Result<()> {
        if row == 0
            || column == 0
            || row > self.chart.rows()
            || column > self.chart.seats_per_row()
        {
            return Err(Error::InvalidSeat {
                seat: format!("R{row}C{column}"),
                reason: format!(
                    "outside a {}x{} chart",
                    self.chart.rows(),
                    self.chart.seats_per_row()
                ),
            });
        }

        self.chart.mark_pre_reserved(row - 1, column - 1);
        Ok(())
    }

    /// Pre-reserves the seat named by a `R<digits>C<digits>` label.
    ///
    /// Delegates to [`pre_reserve`](Self::pre_reserve) after parsing; see
    /// [`SeatLabel::parse`] for the accepted label forms.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSeat`] if the label does not parse or
    /// names a seat outside the chart.
    pub fn pre_reserve_label(&mut self, label: &str) -> Result<()> {
        let parsed = SeatLabel::parse(label)?;
        self.pre_reserve(parsed.row() + 1, parsed.column() + 1)
    }

    /// Requests seats for a group of `total` people.
    ///
    /// Runs the contiguous-block search over the desirability ordering.
    /// On success every seat in the block is marked reserved and the
    /// available count drops by exactly `total`; when no block fits, the
    /// chart is left untouched and [`Placement::NotAvailable`] is
    /// returned. Requests for zero seats are answered with
    /// `NotAvailable` without searching.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestTooLarge`] if `total` exceeds the
    /// configured maximum; nothing is searched or mutated.
    pub fn request(&mut self, total: usize) -> Result<Placement> {
        if total > self.max_group_size {
            return Err(Error::RequestTooLarge {
                requested: total,
                max: self.max_group_size,
            });
        }
        if total == 0 {
            return Ok(Placement::NotAvailable);
        }

        let Some((row, columns)) = self.find_block(total) else {
            return Ok(Placement::NotAvailable);
        };

        let seats = columns
            .into_iter()
            .map(|column| {
                self.chart.mark_reserved(row, column);
                SeatLabel::new(row, column)
            })
            .collect();

        Ok(Placement::Block { seats })
    }

    /// Scans the priority order for the first anchor whose expansion
    /// yields a full block. Returns the row and the block's columns in
    /// left-to-right order.
    fn find_block(&self, total: usize) -> Option<(usize, VecDeque<usize>)> {
        for &(row, column) in self.chart.priority() {
            log::debug!("considering anchor R{}C{}", row + 1, column + 1);
            let block = self.expand_anchor(row, column, total);
            if block.len() == total {
                return Some((row, block));
            }
        }
        None
    }

    /// Grows a block around an anchor seat within its row.
    ///
    /// Probes alternate outward from the anchor column (offsets -1, +1,
    /// -2, +2, ...), prepending left hits and appending right hits so the
    /// block stays in left-to-right order. The first probe that lands out
    /// of bounds or on an unavailable seat ends the whole expansion; the
    /// search never skips over gaps. An unavailable anchor yields an
    /// empty block.
    fn expand_anchor(&self, row: usize, anchor: usize, total: usize) -> VecDeque<usize> {
        let mut block = VecDeque::with_capacity(total);
        if !self.chart.is_available(row, anchor) {
            return block;
        }
        block.push_back(anchor);

        let mut offset = 1;
        while block.len() < total {
            match anchor.checked_sub(offset) {
                Some(left) if self.chart.is_available(row, left) => block.push_front(left),
                _ => break,
            }
            if block.len() == total {
                break;
            }

            let right = anchor + offset;
            if self.chart.is_available(row, right) {
                block.push_back(right);
            } else {
                break;
            }

            offset += 1;
        }

        block
    }
}

#[cfg(all(test, feature = "property-tests"))]
mod proptests;
