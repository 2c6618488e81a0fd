//! The seating chart: seat arena, desirability ordering, and occupancy
//! bookkeeping.
//!
//! The chart owns every [`Seat`] in a row-major arena whose shape is fixed
//! at construction. Alongside the arena it keeps a static priority order
//! over all positions (ascending distance from the best seat, ties broken
//! by creation order) and a running count of available seats.

use crate::seat::{Seat, SeatState};

/// A rectangular grid of seats with a precomputed desirability ordering.
///
/// The best seat in the house is the front row, center column; every
/// seat's desirability is its Manhattan distance from there. The ordering
/// is computed once and never re-sorted; seat *states* change, the
/// sequence does not.
///
/// # Examples
///
/// ```
/// use usher::SeatingChart;
///
/// let chart = SeatingChart::new(3, 11);
/// assert_eq!(chart.available_count(), 33);
/// assert_eq!(chart.seat(0, 5).unwrap().distance(), 0);
/// assert_eq!(chart.seat(2, 0).unwrap().distance(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct SeatingChart {
    rows: usize,
    seats_per_row: usize,
    seats: Vec<Seat>,
    priority: Vec<(usize, usize)>,
    available: usize,
}

impl SeatingChart {
    /// Creates a chart of `rows` x `seats_per_row` free seats.
    ///
    /// Each seat's distance is computed here so it never has to be
    /// recalculated. Behavior for zero dimensions is undefined; the
    /// configuration validator rejects them before they reach this point.
    #[must_use]
    pub fn new(rows: usize, seats_per_row: usize) -> Self {
        let mut seats = Vec::with_capacity(rows * seats_per_row);
        for row in 0..rows {
            for column in 0..seats_per_row {
                seats.push(Seat::new(row, column, distance(seats_per_row, row, column)));
            }
        }

        // Stable sort: ties keep row-major creation order.
        let mut priority: Vec<(usize, usize)> =
            seats.iter().map(|s| (s.row(), s.column())).collect();
        priority.sort_by_key(|&(row, column)| distance(seats_per_row, row, column));

        Self {
            rows,
            seats_per_row,
            seats,
            priority,
            available: rows * seats_per_row,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of seats per row.
    #[must_use]
    pub const fn seats_per_row(&self) -> usize {
        self.seats_per_row
    }

    /// Returns the total number of seats in the chart.
    #[must_use]
    pub const fn total_seats(&self) -> usize {
        self.rows * self.seats_per_row
    }

    /// Returns the number of seats not yet pre-reserved or reserved.
    ///
    /// The counter starts at `rows * seats_per_row` and only ever
    /// decreases; there is no release operation.
    #[must_use]
    pub const fn available_count(&self) -> usize {
        self.available
    }

    /// Returns `true` if the 0-based position exists in the chart.
    #[must_use]
    pub const fn contains(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.seats_per_row
    }

    /// Returns the seat at the 0-based position, if it exists.
    #[must_use]
    pub fn seat(&self, row: usize, column: usize) -> Option<&Seat> {
        if self.contains(row, column) {
            Some(&self.seats[self.index(row, column)])
        } else {
            None
        }
    }

    /// Returns `true` if the position exists and the seat is still free.
    #[must_use]
    pub fn is_available(&self, row: usize, column: usize) -> bool {
        self.seat(row, column).is_some_and(Seat::is_available)
    }

    /// All positions, best first. Ascending distance, ties in row-major
    /// creation order.
    pub(crate) fn priority(&self) -> &[(usize, usize)] {
        &self.priority
    }

    /// Marks a seat pre-reserved, decrementing the counter on a real
    /// transition. Marking an already-taken seat is a no-op so the
    /// counter is never double-decremented.
    ///
    /// The position must be in bounds; the engine validates first.
    pub(crate) fn mark_pre_reserved(&mut self, row: usize, column: usize) -> bool {
        let index = self.index(row, column);
        let changed = self.seats[index].pre_reserve();
        if changed {
            self.available -= 1;
        }
        changed
    }

    /// Marks a seat reserved for a group, decrementing the counter on a
    /// real transition.
    pub(crate) fn mark_reserved(&mut self, row: usize, column: usize) -> bool {
        let index = self.index(row, column);
        let changed = self.seats[index].reserve();
        if changed {
            self.available -= 1;
        }
        changed
    }

    /// Renders the occupancy grid as text, one line per row.
    ///
    /// Free seats print as `-`, pre-reserved seats as `X`, and seats
    /// committed to group requests as `O`, separated by single spaces.
    ///
    /// # Examples
    ///
    /// ```
    /// use usher::SeatingChart;
    ///
    /// let chart = SeatingChart::new(2, 3);
    /// assert_eq!(chart.render(), "- - -\n- - -\n");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.total_seats() * 2 + self.rows);
        for row in 0..self.rows {
            for column in 0..self.seats_per_row {
                if column > 0 {
                    out.push(' ');
                }
                out.push(self.seats[self.index(row, column)].state().symbol());
            }
            out.push('\n');
        }
        out
    }

    const fn index(&self, row: usize, column: usize) -> usize {
        row * self.seats_per_row + column
    }
}

/// Manhattan distance from the front row, center column.
///
/// `distance(r, c) = |r - 0| + |seats_per_row/2 - c|` with integer
/// division, matching the single "best seat in the house".
const fn distance(seats_per_row: usize, row: usize, column: usize) -> usize {
    row + (seats_per_row / 2).abs_diff(column)
}
