// Elapsed-time strings and calendar-aware epoch offsets

use chrono::{Duration, Months};
use log::trace;

use crate::error::{CoreError, Result};
use crate::models::{DurationUnit, TimeOfDay};
use crate::utils::calendar::epoch_to_datetime;

const MINUTES_PER_DAY: u32 = 24 * 60;
const MS_PER_MINUTE: i64 = 60 * 1000;

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// Join parts as `A`, `A and B`, or `A, B and C`
fn join_parts(parts: &[String]) -> String {
    match parts {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

/// Time from `start` to `end` as `1 hour and 30 minutes`
///
/// An `end` earlier than `start` is taken to be on the next day. Either side
/// unset, or a zero difference, gives `""`.
pub fn elapsed_between(start: Option<TimeOfDay>, end: Option<TimeOfDay>) -> String {
    let (Some(start), Some(end)) = (start, end) else {
        return String::new();
    };
    let start_min = start.minutes_since_midnight();
    let end_min = end.minutes_since_midnight();
    let diff = (end_min + MINUTES_PER_DAY - start_min) % MINUTES_PER_DAY;

    let hours = (diff / 60) as i64;
    let minutes = (diff % 60) as i64;
    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(plural(hours, "hour"));
    }
    if minutes > 0 {
        parts.push(plural(minutes, "minute"));
    }
    join_parts(&parts)
}

/// Absolute distance between two epochs as `2 days, 3 hours and 5 minutes`
///
/// Seconds are dropped; zero components are omitted.
pub fn elapsed_between_epochs(a_ms: i64, b_ms: i64) -> String {
    let total_minutes = (b_ms as i128 - a_ms as i128).unsigned_abs() / MS_PER_MINUTE as u128;
    let days = (total_minutes / MINUTES_PER_DAY as u128) as i64;
    let hours = ((total_minutes / 60) % 24) as i64;
    let minutes = (total_minutes % 60) as i64;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(plural(days, "day"));
    }
    if hours > 0 {
        parts.push(plural(hours, "hour"));
    }
    if minutes > 0 {
        parts.push(plural(minutes, "minute"));
    }
    join_parts(&parts)
}

/// Move `from_ms` by `count` units
///
/// Days and weeks are fixed 24-hour multiples. Months and years follow the
/// calendar and clamp to the last day of the target month when the day does
/// not exist there: Jan 31 2024 plus one month is Feb 29 2024, and Feb 29
/// 2024 plus one year is Feb 28 2025. Time of day is kept. Negative counts
/// move backwards.
pub fn offset_epoch(from_ms: i64, unit: DurationUnit, count: i32) -> Result<i64> {
    let out_of_range = || CoreError::EpochOutOfRange(from_ms);
    let from = epoch_to_datetime(from_ms)?;

    let shifted = match unit {
        DurationUnit::Day => from.checked_add_signed(Duration::days(count as i64)),
        DurationUnit::Week => from.checked_add_signed(Duration::weeks(count as i64)),
        DurationUnit::Month => add_months(from, count as i64),
        DurationUnit::Year => add_months(from, count as i64 * 12),
    }
    .ok_or_else(out_of_range)?;

    trace!("offset {} by {} {}(s) -> {}", from, count, unit.as_str(), shifted);
    Ok(shifted.timestamp_millis())
}

fn add_months(from: chrono::DateTime<chrono::Utc>, months: i64) -> Option<chrono::DateTime<chrono::Utc>> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        from.checked_add_months(magnitude)
    } else {
        from.checked_sub_months(magnitude)
    }
}

/// Preview text for a duration picker, e.g. `3 weeks`
pub fn duration_label(unit: DurationUnit, count: u32) -> String {
    plural(count as i64, unit.as_str())
}
