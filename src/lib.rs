//! Chronological expense-record sorting in Rust
//!
//! This crate orders expense records by their effective timestamp using a
//! linear-time LSD radix sort, and provides the strict date normalization
//! (calendar components, canonical `YYYY-MM-DD` strings, weekdays) that
//! display code layers on top of the same records.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

pub mod error;

// Core sorting implementation and its data model
pub mod date;
pub mod radix_sort;
pub mod record;

// Re-export commonly used types
pub use date::{DateComponents, DayOfWeek, WeekDay, WEEK_DAYS};
pub use error::{SortError, SortResult};
pub use radix_sort::{sort_by_date, SortOrder};
pub use record::Expense;

/// Exit codes matching the conventions of sort(1)
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const SORT_FAILURE: i32 = 2;
