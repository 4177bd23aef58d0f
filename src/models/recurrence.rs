use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::{CoreError, Result};
use crate::models::MonthIndex;
use crate::utils::calendar::picker_days;

/// Month and day packed as `month * 100 + day` (January 31 is `31`, February 5 is `105`)
pub type YearlyDateCode = u16;

/// Selected days per month for a yearly rule; months with no days are absent
pub type MonthAndDates = BTreeMap<MonthIndex, BTreeSet<u8>>;

/// What to do when a rule names a day the target month or year does not have
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidDateStrategy {
    /// No strategy chosen; only valid while the selection has no such day
    #[default]
    #[serde(rename = "NONE")]
    None,
    /// The task does not occur in that month or year
    #[serde(rename = "SKIP")]
    Skip,
    /// The occurrence moves to the last day of that month
    #[serde(rename = "LAST_VALID", alias = "SHIFT", alias = "SHIFT_TO_LAST_VALID")]
    ShiftToLastValid,
}

impl InvalidDateStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidDateStrategy::None => "none",
            InvalidDateStrategy::Skip => "skip",
            InvalidDateStrategy::ShiftToLastValid => "shift to last valid date",
        }
    }

    pub fn is_chosen(&self) -> bool {
        !matches!(self, InvalidDateStrategy::None)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyRule {
    /// 0 = Sunday through 6 = Saturday
    #[serde(rename = "weekDays", alias = "weekdays")]
    pub weekdays: BTreeSet<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRule {
    /// Days of month, 1 to 31
    pub dates: BTreeSet<u8>,
    #[serde(default)]
    pub invalid_date_strategy: InvalidDateStrategy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyRule {
    pub month_and_dates: MonthAndDates,
    /// Only consulted for February 29 in non-leap years
    #[serde(default)]
    pub feb29_strategy: InvalidDateStrategy,
}

/// How a task repeats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum RecurrenceRule {
    Daily,
    Weekly(WeeklyRule),
    Monthly(MonthlyRule),
    Yearly(YearlyRule),
}

impl RecurrenceRule {
    pub fn kind(&self) -> &'static str {
        match self {
            RecurrenceRule::Daily => "daily",
            RecurrenceRule::Weekly(_) => "weekly",
            RecurrenceRule::Monthly(_) => "monthly",
            RecurrenceRule::Yearly(_) => "yearly",
        }
    }

    /// Check every selected value against the ranges the pickers allow
    ///
    /// Resolvers assume a rule that passes this check; they do not re-validate.
    pub fn validate(&self) -> Result<()> {
        match self {
            RecurrenceRule::Daily => Ok(()),
            RecurrenceRule::Weekly(rule) => {
                match rule.weekdays.iter().find(|&&d| d > 6) {
                    Some(&bad) => Err(CoreError::InvalidWeekday(bad)),
                    None => Ok(()),
                }
            }
            RecurrenceRule::Monthly(rule) => {
                match rule.dates.iter().find(|&&d| !(1..=31).contains(&d)) {
                    Some(&bad) => Err(CoreError::InvalidDay { month: 0, day: bad }),
                    None => Ok(()),
                }
            }
            RecurrenceRule::Yearly(rule) => {
                for (month, days) in &rule.month_and_dates {
                    let allowed = picker_days(*month);
                    if let Some(&bad) = days.iter().find(|d| !allowed.contains(d)) {
                        return Err(CoreError::InvalidDay { month: month.index(), day: bad });
                    }
                }
                Ok(())
            }
        }
    }
}
