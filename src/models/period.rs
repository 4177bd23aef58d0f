use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::models::MonthIndex;
use crate::utils::calendar::{epoch_to_date, max_iso_weeks_in_year};
use crate::utils::format::month_name;

/// Granularity of the progress views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PeriodUnit {
    Week,
    Month,
    Year,
}

/// One week, month or year shown by the progress views
///
/// Weeks are ISO weeks, so `year` of a `Week` is the ISO week-year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum PeriodValue {
    Week { year: i32, week: u32 },
    Month { year: i32, month: MonthIndex },
    Year { year: i32 },
}

impl PeriodValue {
    /// The period of `unit` containing `now_ms`
    pub fn current(unit: PeriodUnit, now_ms: i64) -> Result<Self> {
        let today = epoch_to_date(now_ms)?;
        let period = match unit {
            PeriodUnit::Week => {
                let iso = today.iso_week();
                PeriodValue::Week { year: iso.year(), week: iso.week() }
            }
            PeriodUnit::Month => PeriodValue::Month {
                year: today.year(),
                month: MonthIndex::from_number(today.month())?,
            },
            PeriodUnit::Year => PeriodValue::Year { year: today.year() },
        };
        Ok(period)
    }

    pub fn unit(&self) -> PeriodUnit {
        match self {
            PeriodValue::Week { .. } => PeriodUnit::Week,
            PeriodValue::Month { .. } => PeriodUnit::Month,
            PeriodValue::Year { .. } => PeriodUnit::Year,
        }
    }

    /// The following period; fails past the years chrono can represent
    pub fn next(self) -> Result<Self> {
        let following = |year: i32| year.checked_add(1).ok_or(CoreError::YearOutOfRange(year));
        let period = match self {
            PeriodValue::Week { year, week } => {
                if week >= max_iso_weeks_in_year(year)? {
                    PeriodValue::Week { year: following(year)?, week: 1 }
                } else {
                    PeriodValue::Week { year, week: week + 1 }
                }
            }
            PeriodValue::Month { year, month } => {
                let year = if month == MonthIndex::DECEMBER { following(year)? } else { year };
                PeriodValue::Month { year, month: month.succ() }
            }
            PeriodValue::Year { year } => PeriodValue::Year { year: following(year)? },
        };
        Ok(period)
    }

    /// The preceding period; fails past the years chrono can represent
    pub fn prev(self) -> Result<Self> {
        let preceding = |year: i32| year.checked_sub(1).ok_or(CoreError::YearOutOfRange(year));
        let period = match self {
            PeriodValue::Week { year, week } => {
                if week <= 1 {
                    let year = preceding(year)?;
                    PeriodValue::Week { year, week: max_iso_weeks_in_year(year)? }
                } else {
                    PeriodValue::Week { year, week: week - 1 }
                }
            }
            PeriodValue::Month { year, month } => {
                let year = if month == MonthIndex::JANUARY { preceding(year)? } else { year };
                PeriodValue::Month { year, month: month.pred() }
            }
            PeriodValue::Year { year } => PeriodValue::Year { year: preceding(year)? },
        };
        Ok(period)
    }

    /// `Week 3, 2024`, `January, 2024` or `2024`
    pub fn label(&self) -> String {
        match self {
            PeriodValue::Week { year, week } => format!("Week {}, {}", week, year),
            PeriodValue::Month { year, month } => format!("{}, {}", month_name(*month), year),
            PeriodValue::Year { year } => year.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn ms(y: i32, m: u32, d: u32) -> i64 {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap().timestamp_millis()
    }

    #[test]
    fn test_current_period() {
        let now = ms(2024, 3, 15);
        assert_eq!(PeriodValue::current(PeriodUnit::Week, now).unwrap(), PeriodValue::Week { year: 2024, week: 11 });
        assert_eq!(
            PeriodValue::current(PeriodUnit::Month, now).unwrap(),
            PeriodValue::Month { year: 2024, month: MonthIndex::MARCH }
        );
        assert_eq!(PeriodValue::current(PeriodUnit::Year, now).unwrap(), PeriodValue::Year { year: 2024 });
    }

    #[test]
    fn test_current_week_uses_iso_year() {
        // Jan 1 2021 belongs to week 53 of 2020
        let value = PeriodValue::current(PeriodUnit::Week, ms(2021, 1, 1)).unwrap();
        assert_eq!(value, PeriodValue::Week { year: 2020, week: 53 });
    }

    #[test]
    fn test_week_rollover() {
        let last = PeriodValue::Week { year: 2020, week: 53 };
        assert_eq!(last.next().unwrap(), PeriodValue::Week { year: 2021, week: 1 });
        assert_eq!(PeriodValue::Week { year: 2021, week: 1 }.prev().unwrap(), last);
        let last_2024 = PeriodValue::Week { year: 2024, week: 52 };
        assert_eq!(last_2024.next().unwrap(), PeriodValue::Week { year: 2025, week: 1 });
        assert_eq!(PeriodValue::Week { year: 2025, week: 1 }.prev().unwrap(), last_2024);
    }

    #[test]
    fn test_month_rollover() {
        let dec = PeriodValue::Month { year: 2024, month: MonthIndex::DECEMBER };
        let jan = PeriodValue::Month { year: 2025, month: MonthIndex::JANUARY };
        assert_eq!(dec.next().unwrap(), jan);
        assert_eq!(jan.prev().unwrap(), dec);
        let year = PeriodValue::Year { year: 2024 };
        assert_eq!(year.next().and_then(PeriodValue::prev).unwrap(), year);
    }

    #[test]
    fn test_navigation_past_representable_years_fails() {
        assert_eq!(PeriodValue::Year { year: i32::MAX }.next(), Err(CoreError::YearOutOfRange(i32::MAX)));
        assert!(PeriodValue::Week { year: 300_000, week: 52 }.next().is_err());
        assert!(PeriodValue::Month { year: i32::MIN, month: MonthIndex::JANUARY }.prev().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(PeriodValue::Week { year: 2024, week: 3 }.label(), "Week 3, 2024");
        assert_eq!(PeriodValue::Month { year: 2024, month: MonthIndex::JANUARY }.label(), "January, 2024");
        assert_eq!(PeriodValue::Year { year: 2024 }.label(), "2024");
        assert_eq!(PeriodValue::Year { year: 2024 }.unit(), PeriodUnit::Year);
    }
}
