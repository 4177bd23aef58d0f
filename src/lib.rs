//! Gamify - recurrence, invalid-date and time arithmetic for a habit tracker
//!
//! This library provides the pure calendar core behind the task forms and task
//! lists, including:
//! - Time-of-day encoding and 12-hour display
//! - Elapsed-time strings and calendar-aware epoch offsets
//! - Leap years, month lengths, ISO weeks and year-picker paging
//! - Recurrence rules and invalid-date resolution (skip or shift to last valid day)
//! - Auto-remove expiry
//! - Validation predicates for the task form
//!
//! Nothing here reads the clock; callers pass "now" explicitly.
//!
//! # Example
//!
//! ```
//! use gamify::models::{InvalidDateStrategy, MonthIndex, MonthlyRule};
//! use gamify::recur::resolve_monthly;
//!
//! let rule = MonthlyRule {
//!     dates: [30].into(),
//!     invalid_date_strategy: InvalidDateStrategy::ShiftToLastValid,
//! };
//! assert_eq!(resolve_monthly(&rule, 2023, MonthIndex::FEBRUARY), vec![28]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod expiry;
pub mod models;
pub mod recur;
pub mod utils;
pub mod validation;

pub use error::{CoreError, Result};
