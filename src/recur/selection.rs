// Per-month editing of a yearly selection

use std::collections::BTreeSet;

use crate::models::{MonthAndDates, MonthIndex};

/// Days selected for `month`, ascending; empty when the month has none
pub fn extract_month_selection(month_and_dates: &MonthAndDates, month: MonthIndex) -> Vec<u8> {
    month_and_dates
        .get(&month)
        .map(|days| days.iter().copied().collect())
        .unwrap_or_default()
}

/// Copy of `month_and_dates` with `month` replaced by `days`
///
/// An empty `days` removes the month entirely. Other months are untouched and
/// the input map is not modified.
pub fn merge_month_selection(month_and_dates: &MonthAndDates, month: MonthIndex, days: &[u8]) -> MonthAndDates {
    let mut merged = month_and_dates.clone();
    if days.is_empty() {
        merged.remove(&month);
    } else {
        merged.insert(month, days.iter().copied().collect::<BTreeSet<u8>>());
    }
    merged
}
