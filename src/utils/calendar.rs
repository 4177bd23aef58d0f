//! Calendar helpers
//!
//! Leap years, month lengths, ISO week numbering, packed yearly date codes and
//! the paging used by the year picker. Epochs are UTC milliseconds and every
//! calendar question is answered in UTC.

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use crate::error::{CoreError, Result};
use crate::models::{MonthAndDates, MonthIndex, YearlyDateCode};

/// Years shown per page by the year picker
pub const DEFAULT_YEAR_PAGE_SIZE: u32 = 18;
/// Largest page the year picker accepts
pub const MAX_YEAR_PAGE_SIZE: u32 = 1000;

/// Gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_in_month(year: i32, month: MonthIndex) -> u32 {
    match month.index() {
        1 => {
            if is_leap_year(year) { 29 } else { 28 }
        }
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// Days a yearly date picker offers for `month`
///
/// February always offers 29 since the rule applies to leap and non-leap
/// years alike; the other months offer exactly their length.
pub fn picker_days(month: MonthIndex) -> RangeInclusive<u8> {
    match month.index() {
        1 => 1..=29,
        3 | 5 | 8 | 10 => 1..=30,
        _ => 1..=31,
    }
}

pub(crate) fn epoch_to_datetime(epoch_ms: i64) -> Result<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(epoch_ms).ok_or(CoreError::EpochOutOfRange(epoch_ms))
}

pub(crate) fn epoch_to_date(epoch_ms: i64) -> Result<NaiveDate> {
    Ok(epoch_to_datetime(epoch_ms)?.date_naive())
}

/// ISO-8601 week number (1..=53) of the UTC day containing `epoch_ms`
pub fn iso_week_number(epoch_ms: i64) -> Result<u32> {
    Ok(epoch_to_date(epoch_ms)?.iso_week().week())
}

/// 53 when January 1 or December 31 falls on a Thursday, otherwise 52
///
/// Years chrono cannot represent are an error.
pub fn max_iso_weeks_in_year(year: i32) -> Result<u32> {
    let (Some(first), Some(last)) = (NaiveDate::from_ymd_opt(year, 1, 1), NaiveDate::from_ymd_opt(year, 12, 31)) else {
        return Err(CoreError::YearOutOfRange(year));
    };
    if first.weekday() == Weekday::Thu || last.weekday() == Weekday::Thu {
        Ok(53)
    } else {
        Ok(52)
    }
}

pub fn pack_yearly_date(month: MonthIndex, day: u8) -> YearlyDateCode {
    month.index() as u16 * 100 + day as u16
}

pub fn unpack_yearly_date(code: YearlyDateCode) -> Result<(MonthIndex, u8)> {
    let month = MonthIndex::new((code / 100) as u8).map_err(|_| CoreError::InvalidYearlyCode(code))?;
    let day = (code % 100) as u8;
    if !(1..=31).contains(&day) {
        return Err(CoreError::InvalidYearlyCode(code));
    }
    Ok((month, day))
}

/// Group a flat list of packed codes by month
pub fn group_yearly_codes(codes: &[YearlyDateCode]) -> Result<MonthAndDates> {
    let mut grouped = MonthAndDates::new();
    for &code in codes {
        let (month, day) = unpack_yearly_date(code)?;
        grouped.entry(month).or_insert_with(BTreeSet::new).insert(day);
    }
    Ok(grouped)
}

/// Flatten a per-month selection into packed codes, sorted by month then day
pub fn flatten_month_and_dates(month_and_dates: &MonthAndDates) -> Vec<YearlyDateCode> {
    month_and_dates
        .iter()
        .flat_map(|(month, days)| days.iter().map(move |&day| pack_yearly_date(*month, day)))
        .collect()
}

/// One page of the year picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearPage {
    pub start_year: i32,
    pub years: Vec<i32>,
}

/// The page of `page_size` years containing `anchor_year`
///
/// Pages are aligned to year 1: with 18 per page they start at 1, 19, 37, ...
/// A page whose last year would not fit in an `i32` is an error.
pub fn page_years(anchor_year: i32, page_size: u32) -> Result<YearPage> {
    let invalid = || CoreError::InvalidYearPage { anchor: anchor_year, size: page_size };
    if anchor_year < 1 || !(1..=MAX_YEAR_PAGE_SIZE).contains(&page_size) {
        return Err(invalid());
    }
    let size = page_size as i32;
    let start_year = ((anchor_year - 1) / size) * size + 1;
    let end_year = start_year.checked_add(size - 1).ok_or_else(invalid)?;
    Ok(YearPage { start_year, years: (start_year..=end_year).collect() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn month(index: u8) -> MonthIndex {
        MonthIndex::new(index).unwrap()
    }

    fn epoch(y: i32, m: u32, d: u32) -> i64 {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap().timestamp_millis()
    }

    #[test]
    fn test_leap_year() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2025));
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2000, MonthIndex::FEBRUARY), 29);
        assert_eq!(days_in_month(1900, MonthIndex::FEBRUARY), 28);
        assert_eq!(days_in_month(2024, MonthIndex::FEBRUARY), 29);
        assert_eq!(days_in_month(2023, MonthIndex::FEBRUARY), 28);
        assert_eq!(days_in_month(2023, MonthIndex::APRIL), 30);
        assert_eq!(days_in_month(2023, MonthIndex::DECEMBER), 31);
        let total: u32 = MonthIndex::all().map(|m| days_in_month(2023, m)).sum();
        assert_eq!(total, 365);
    }

    #[test]
    fn test_picker_days() {
        assert_eq!(picker_days(MonthIndex::FEBRUARY), 1..=29);
        assert_eq!(picker_days(MonthIndex::SEPTEMBER), 1..=30);
        assert_eq!(picker_days(MonthIndex::JULY), 1..=31);
    }

    #[test]
    fn test_iso_week_number() {
        // 2015 begins on a Thursday
        assert_eq!(iso_week_number(epoch(2015, 1, 1)).unwrap(), 1);
        // Jan 1 2021 is a Friday, still in week 53 of 2020
        assert_eq!(iso_week_number(epoch(2021, 1, 1)).unwrap(), 53);
        // Dec 29 2025 is a Monday, already week 1 of 2026
        assert_eq!(iso_week_number(epoch(2025, 12, 29)).unwrap(), 1);
        assert!(iso_week_number(i64::MAX).is_err());
    }

    #[test]
    fn test_max_iso_weeks() {
        assert_eq!(max_iso_weeks_in_year(2015).unwrap(), 53);
        assert_eq!(max_iso_weeks_in_year(2020).unwrap(), 53);
        assert_eq!(max_iso_weeks_in_year(2026).unwrap(), 53);
        assert_eq!(max_iso_weeks_in_year(2024).unwrap(), 52);
        assert_eq!(max_iso_weeks_in_year(2025).unwrap(), 52);
    }

    #[test]
    fn test_max_iso_weeks_outside_chrono_range() {
        assert_eq!(max_iso_weeks_in_year(300_000), Err(CoreError::YearOutOfRange(300_000)));
        assert!(max_iso_weeks_in_year(i32::MIN).is_err());
    }

    #[test]
    fn test_pack_unpack_yearly_date() {
        assert_eq!(pack_yearly_date(month(0), 31), 31);
        assert_eq!(pack_yearly_date(month(1), 5), 105);
        assert_eq!(pack_yearly_date(month(11), 25), 1125);
        assert_eq!(unpack_yearly_date(129).unwrap(), (MonthIndex::FEBRUARY, 29));
        assert_eq!(unpack_yearly_date(1200), Err(CoreError::InvalidYearlyCode(1200)));
        assert_eq!(unpack_yearly_date(100), Err(CoreError::InvalidYearlyCode(100)));
    }

    #[test]
    fn test_group_and_flatten_codes() {
        let grouped = group_yearly_codes(&[1125, 5, 129, 1]).unwrap();
        assert_eq!(grouped.len(), 3);
        assert_eq!(grouped[&MonthIndex::JANUARY].iter().copied().collect::<Vec<_>>(), vec![1, 5]);
        assert_eq!(flatten_month_and_dates(&grouped), vec![1, 5, 129, 1125]);
        assert!(group_yearly_codes(&[1300]).is_err());
    }

    #[test]
    fn test_page_years() {
        let page = page_years(2024, DEFAULT_YEAR_PAGE_SIZE).unwrap();
        assert_eq!(page.start_year, 2017);
        assert_eq!(page.years.len(), 18);
        assert!(page.years.contains(&2024));
        assert_eq!(*page.years.last().unwrap(), 2034);

        let next = page_years(2024 + 18, DEFAULT_YEAR_PAGE_SIZE).unwrap();
        assert_eq!(next.start_year, 2035);

        assert_eq!(page_years(1, 18).unwrap().start_year, 1);
        assert_eq!(page_years(18, 18).unwrap().start_year, 1);
        assert_eq!(page_years(19, 18).unwrap().start_year, 19);
        assert!(page_years(0, 18).is_err());
        assert!(page_years(2024, 0).is_err());
    }

    #[test]
    fn test_page_years_near_i32_max() {
        assert_eq!(
            page_years(i32::MAX, 18),
            Err(CoreError::InvalidYearPage { anchor: i32::MAX, size: 18 })
        );
        // page 1 of size 1 ends on i32::MAX itself
        let last = page_years(i32::MAX, 1).unwrap();
        assert_eq!(last.years, vec![i32::MAX]);
    }

    #[test]
    fn test_page_years_rejects_huge_pages() {
        assert!(page_years(2024, MAX_YEAR_PAGE_SIZE).is_ok());
        assert!(page_years(2024, MAX_YEAR_PAGE_SIZE + 1).is_err());
        assert!(page_years(2024, u32::MAX).is_err());
    }
}
