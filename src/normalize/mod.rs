// src/normalize/mod.rs
//! Turning the dataset's loosely formatted strings into instants and offsets.
//!
//! Everything here is pure and best-effort: unreadable input yields `None`,
//! never an error. Callers decide whether a `None` is worth a log line.

pub mod date_range;
pub mod deadline;
pub mod timezone;

pub use date_range::{parse_date_range, DateRange};
pub use deadline::parse_deadline;
pub use timezone::{format_offset, parse_timezone};
