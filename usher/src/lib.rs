#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # usher
//!
//! A library for allocating contiguous seat blocks in a fixed-size venue.
//!
//! The engine owns a rectangular seating chart, orders its seats by
//! desirability (Manhattan distance from the front-row center seat), and
//! serves group requests by searching for the contiguous block whose anchor
//! seat is the most desirable one still available. Seats can also be
//! withheld ahead of time with pre-reservations.
//!
//! ## Core Types
//!
//! - [`Seat`], [`SeatLabel`], and [`SeatState`]: the seat data model
//! - [`SeatingChart`]: the seat grid with its desirability ordering
//! - [`AllocationEngine`] and [`Placement`]: request handling
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use usher::{AllocationEngine, Placement};
//!
//! // A 3-row venue with 11 seats per row, groups of at most 10.
//! let mut engine = AllocationEngine::new(3, 11, 10);
//!
//! // Hold a seat before the doors open.
//! engine.pre_reserve_label("R1C6").unwrap();
//!
//! // Seat a party of three.
//! let placement = engine.request(3).unwrap();
//! assert!(placement.is_available());
//! assert_eq!(engine.available_count(), 3 * 11 - 1 - 3);
//! ```

pub mod chart;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod seat;

// Re-export key types at crate root for convenience
pub use chart::SeatingChart;
pub use config::{Config, ConfigBuilder};
pub use engine::{AllocationEngine, Placement};
pub use error::{Error, Result};
pub use logging::{LogLevel, Logger};
pub use seat::{Seat, SeatLabel, SeatState};
