//! Error type for the calendar core
//!
//! Unset values (an empty time picker, an empty selection) are not errors and
//! never reach this type. Only malformed input does: out-of-range months,
//! days, weekdays, times, or epochs chrono cannot represent.

use thiserror::Error;

/// Errors raised by the core when a caller passes malformed input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid time value: {0}. Expected HHMM with hour 0-23 and minute 0-59.")]
    InvalidTime(i64),

    #[error("Invalid 12-hour time: hour {hour}, minute {minute}. Expected hour 1-12 and minute 0-59.")]
    InvalidClockTime { hour: u8, minute: u8 },

    #[error("Cannot parse time: '{0}'. Expected a value like '9:30 PM'.")]
    UnparsableTime(String),

    #[error("Invalid month index: {0}. Expected 0 (January) to 11 (December).")]
    InvalidMonth(i64),

    #[error("Invalid day {day} for month index {month}.")]
    InvalidDay { month: u8, day: u8 },

    #[error("Invalid weekday index: {0}. Expected 0 (Sunday) to 6 (Saturday).")]
    InvalidWeekday(u8),

    #[error("Invalid yearly date code: {0}.")]
    InvalidYearlyCode(u16),

    #[error("Epoch out of range: {0} ms.")]
    EpochOutOfRange(i64),

    #[error("Invalid year page: anchor year {anchor} with page size {size}. Expected anchor >= 1, size 1-{max}, and a last year that fits.", max = crate::utils::calendar::MAX_YEAR_PAGE_SIZE)]
    InvalidYearPage { anchor: i32, size: u32 },

    #[error("Year out of range: {0}.")]
    YearOutOfRange(i32),
}

pub type Result<T> = std::result::Result<T, CoreError>;
