//! Recurrence module
//!
//! Decides on which days a recurring task occurs. Rules never generate or
//! store instances; callers ask for a month, a year or a single day and get
//! the resolved occurrences back.

pub mod resolver;
pub mod selection;

pub use resolver::*;
pub use selection::*;
