// Locale-invariant English display strings for dates

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::Result;
use crate::models::{MonthIndex, YearlyDateCode};
use crate::utils::calendar::{epoch_to_date, unpack_yearly_date};

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const WEEKDAYS: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];

pub fn month_name(month: MonthIndex) -> &'static str {
    MONTHS[month.index() as usize]
}

pub fn month_short_name(month: MonthIndex) -> &'static str {
    &month_name(month)[..3]
}

/// Weekday name for index 0 (Sunday) to 6 (Saturday); `None` outside that range
pub fn weekday_name(weekday: u8) -> Option<&'static str> {
    WEEKDAYS.get(weekday as usize).copied()
}

pub fn weekday_short_name(weekday: u8) -> Option<&'static str> {
    weekday_name(weekday).map(|name| &name[..3])
}

fn weekday_index(weekday: Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}

fn format_date(date: NaiveDate, include_weekday: bool) -> String {
    let month = MONTHS[date.month0() as usize];
    let base = format!("{} {}, {}", &month[..3], date.day(), date.year());
    if include_weekday {
        let weekday = WEEKDAYS[weekday_index(date.weekday()) as usize];
        format!("{}, {}", &weekday[..3], base)
    } else {
        base
    }
}

/// `Jan 5, 2024`, or `Fri, Jan 5, 2024` with the weekday
pub fn date_string(epoch_ms: i64, include_weekday: bool) -> Result<String> {
    Ok(format_date(epoch_to_date(epoch_ms)?, include_weekday))
}

/// `Today`, `Tomorrow` or `Yesterday` relative to `now_ms`, otherwise `""`
pub fn relative_day_label(epoch_ms: i64, now_ms: i64) -> Result<&'static str> {
    let date = epoch_to_date(epoch_ms)?;
    let today = epoch_to_date(now_ms)?;
    let label = match date.signed_duration_since(today) {
        d if d == Duration::zero() => "Today",
        d if d == Duration::days(1) => "Tomorrow",
        d if d == Duration::days(-1) => "Yesterday",
        _ => "",
    };
    Ok(label)
}

/// Per-day cache key, `2024_01_05`
pub fn date_key(epoch_ms: i64) -> Result<String> {
    Ok(epoch_to_date(epoch_ms)?.format("%Y_%m_%d").to_string())
}

/// `February 29` for a packed yearly code
pub fn yearly_date_label(code: YearlyDateCode) -> Result<String> {
    let (month, day) = unpack_yearly_date(code)?;
    Ok(format!("{} {}", month_name(month), day))
}
