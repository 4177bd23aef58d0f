//! Recurrence resolution
//!
//! Turns a recurrence rule into concrete occurrences for a month or a year,
//! applying the rule's invalid-date strategy whenever it names a day the
//! period does not have.
//!
//! # Monthly vs yearly
//!
//! A monthly rule treats any of 29, 30 and 31 as possibly missing, so a
//! strategy is needed as soon as one of them is selected. A yearly rule only
//! ever misses February 29 in non-leap years: the yearly picker never offers a
//! day a month cannot have. The two checks are intentionally different.
//!
//! # Contract
//!
//! Every function here is total over rules that pass
//! [`RecurrenceRule::validate`](crate::models::RecurrenceRule::validate).
//! Out-of-range values are not re-checked. Output lists are sorted ascending
//! without duplicates. A strategy left at `None` while a missing day applies
//! produces no occurrence for that day, the same as `Skip`.

use chrono::{Datelike, NaiveDate};
use log::debug;
use std::collections::BTreeSet;

use crate::models::{
    InvalidDateStrategy, MonthIndex, MonthlyRule, RecurrenceRule, YearlyDateCode, YearlyRule,
};
use crate::utils::calendar::{days_in_month, is_leap_year, pack_yearly_date};

/// Smallest day that can be missing from some month
const FIRST_POSSIBLY_INVALID_DAY: u8 = 29;
const FEB_29: YearlyDateCode = 129;
const FEB_28: YearlyDateCode = 128;

/// Whether the monthly selection contains 29, 30 or 31
pub fn requires_invalid_date_strategy(rule: &MonthlyRule) -> bool {
    rule.dates.iter().any(|&d| d >= FIRST_POSSIBLY_INVALID_DAY)
}

/// Whether the yearly selection contains February 29
pub fn requires_feb29_strategy(rule: &YearlyRule) -> bool {
    rule.month_and_dates
        .get(&MonthIndex::FEBRUARY)
        .map(|days| days.contains(&29))
        .unwrap_or(false)
}

/// Days of `month` in `year` on which a monthly rule occurs
pub fn resolve_monthly(rule: &MonthlyRule, year: i32, month: MonthIndex) -> Vec<u8> {
    let last_day = days_in_month(year, month) as u8;
    let mut resolved = BTreeSet::new();

    for &day in &rule.dates {
        if day <= last_day {
            resolved.insert(day);
            continue;
        }
        match rule.invalid_date_strategy {
            InvalidDateStrategy::ShiftToLastValid => {
                debug!("{}-{:02}: day {} shifted to {}", year, month.number(), day, last_day);
                resolved.insert(last_day);
            }
            InvalidDateStrategy::Skip | InvalidDateStrategy::None => {
                debug!("{}-{:02}: day {} skipped", year, month.number(), day);
            }
        }
    }

    resolved.into_iter().collect()
}

/// Packed month/day codes on which a yearly rule occurs in `year`
pub fn resolve_yearly(rule: &YearlyRule, year: i32) -> Vec<YearlyDateCode> {
    let leap = is_leap_year(year);
    let mut resolved = BTreeSet::new();

    for (month, days) in &rule.month_and_dates {
        for &day in days {
            let code = pack_yearly_date(*month, day);
            if code != FEB_29 || leap {
                resolved.insert(code);
                continue;
            }
            match rule.feb29_strategy {
                InvalidDateStrategy::ShiftToLastValid => {
                    debug!("{}: February 29 shifted to February 28", year);
                    resolved.insert(FEB_28);
                }
                InvalidDateStrategy::Skip | InvalidDateStrategy::None => {
                    debug!("{}: February 29 skipped", year);
                }
            }
        }
    }

    resolved.into_iter().collect()
}

/// Whether a rule's selection is complete enough to save
///
/// Daily is always complete. Weekly needs a weekday. Monthly and yearly need
/// at least one date, and a chosen strategy when the selection can hit a
/// missing day.
pub fn is_recurrence_selection_complete(rule: &RecurrenceRule) -> bool {
    match rule {
        RecurrenceRule::Daily => true,
        RecurrenceRule::Weekly(weekly) => !weekly.weekdays.is_empty(),
        RecurrenceRule::Monthly(monthly) => {
            !monthly.dates.is_empty()
                && (!requires_invalid_date_strategy(monthly) || monthly.invalid_date_strategy.is_chosen())
        }
        RecurrenceRule::Yearly(yearly) => {
            yearly.month_and_dates.values().any(|days| !days.is_empty())
                && (!requires_feb29_strategy(yearly) || yearly.feb29_strategy.is_chosen())
        }
    }
}

/// Whether the rule puts the task on `date`
pub fn occurs_on(rule: &RecurrenceRule, date: NaiveDate) -> bool {
    match rule {
        RecurrenceRule::Daily => true,
        RecurrenceRule::Weekly(weekly) => {
            weekly.weekdays.contains(&(date.weekday().num_days_from_sunday() as u8))
        }
        RecurrenceRule::Monthly(monthly) => {
            let Ok(month) = MonthIndex::from_number(date.month()) else {
                return false;
            };
            resolve_monthly(monthly, date.year(), month).contains(&(date.day() as u8))
        }
        RecurrenceRule::Yearly(yearly) => {
            let Ok(month) = MonthIndex::from_number(date.month()) else {
                return false;
            };
            let code = pack_yearly_date(month, date.day() as u8);
            resolve_yearly(yearly, date.year()).contains(&code)
        }
    }
}

/// Every date in `month` of `year` on which the rule puts the task
pub fn occurrences_in_month(rule: &RecurrenceRule, year: i32, month: MonthIndex) -> Vec<NaiveDate> {
    let days: Vec<u8> = match rule {
        RecurrenceRule::Monthly(monthly) => resolve_monthly(monthly, year, month),
        RecurrenceRule::Yearly(yearly) => resolve_yearly(yearly, year)
            .into_iter()
            .filter(|code| code / 100 == month.index() as u16)
            .map(|code| (code % 100) as u8)
            .collect(),
        RecurrenceRule::Daily | RecurrenceRule::Weekly(_) => {
            (1..=days_in_month(year, month) as u8).collect()
        }
    };

    days.into_iter()
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month.number(), day as u32))
        .filter(|date| occurs_on(rule, *date))
        .collect()
}
