// Validation predicates for the task form
//
// Each predicate answers one question about a selection. The `validate_*`
// variants return the message a form shows next to the field.

use crate::models::{AutoRemovePolicy, RecurrenceRule, Schedule};
use crate::recur::requires_feb29_strategy;
use crate::recur::requires_invalid_date_strategy;

pub use crate::recur::is_recurrence_selection_complete;
pub use crate::utils::time::is_valid_time;

const NAME_MAX_CHARS: usize = 100;
const DESCRIPTION_MAX_CHARS: usize = 500;

/// A timed schedule needs both ends set; an untimed one is always complete
pub fn is_schedule_complete(schedule: &Schedule) -> bool {
    match schedule {
        Schedule::NotTimed => true,
        Schedule::Timed { start, end } => start.is_some() && end.is_some(),
    }
}

/// A duration policy needs a count of at least one, a date policy needs a date
pub fn is_auto_remove_complete(policy: &AutoRemovePolicy) -> bool {
    validate_auto_remove(policy).is_ok()
}

/// Validate the recurrence step
pub fn validate_recurrence_selection(rule: &RecurrenceRule) -> Result<(), String> {
    match rule {
        RecurrenceRule::Daily => Ok(()),
        RecurrenceRule::Weekly(weekly) => {
            if weekly.weekdays.is_empty() {
                Err("Select at least one day to continue".to_string())
            } else {
                Ok(())
            }
        }
        RecurrenceRule::Monthly(monthly) => {
            if monthly.dates.is_empty() {
                Err("Select at least one date to continue".to_string())
            } else if requires_invalid_date_strategy(monthly) && !monthly.invalid_date_strategy.is_chosen() {
                Err("Choose what happens in months that don't have the selected date".to_string())
            } else {
                Ok(())
            }
        }
        RecurrenceRule::Yearly(yearly) => {
            if yearly.month_and_dates.values().all(|days| days.is_empty()) {
                Err("Select at least one date to continue".to_string())
            } else if requires_feb29_strategy(yearly) && !yearly.feb29_strategy.is_chosen() {
                Err("Choose what happens to February 29 in non-leap years".to_string())
            } else {
                Ok(())
            }
        }
    }
}

/// Validate the schedule step
pub fn validate_schedule(schedule: &Schedule) -> Result<(), String> {
    match schedule {
        Schedule::NotTimed => Ok(()),
        Schedule::Timed { start: None, .. } => Err("Start time is required".to_string()),
        Schedule::Timed { end: None, .. } => Err("End time is required".to_string()),
        Schedule::Timed { .. } => Ok(()),
    }
}

/// Validate the auto-remove step
pub fn validate_auto_remove(policy: &AutoRemovePolicy) -> Result<(), String> {
    match policy {
        AutoRemovePolicy::Never => Ok(()),
        AutoRemovePolicy::AfterGivenDuration { count: 0, .. } => Err("Duration must be at least 1".to_string()),
        AutoRemovePolicy::AfterGivenDuration { .. } => Ok(()),
        AutoRemovePolicy::AfterGivenDate { epoch: None } => Err("Remove date is required".to_string()),
        AutoRemovePolicy::AfterGivenDate { epoch: Some(_) } => Ok(()),
    }
}

/// Task name: required, at most 100 characters after trimming
pub fn validate_task_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name is required".to_string());
    }
    if trimmed.chars().count() > NAME_MAX_CHARS {
        return Err(format!("Name must be at most {} characters in length", NAME_MAX_CHARS));
    }
    Ok(())
}

/// Task description: optional, at most 500 characters after trimming
pub fn validate_task_description(description: &str) -> Result<(), String> {
    if description.trim().chars().count() > DESCRIPTION_MAX_CHARS {
        Err(format!("Description must be at most {} characters in length", DESCRIPTION_MAX_CHARS))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        DurationUnit, InvalidDateStrategy, MonthAndDates, MonthIndex, MonthlyRule, TimeOfDay, WeeklyRule, YearlyRule,
    };

    #[test]
    fn test_schedule_complete() {
        let nine = Some(TimeOfDay::new(900).unwrap());
        assert!(is_schedule_complete(&Schedule::NotTimed));
        assert!(is_schedule_complete(&Schedule::Timed { start: nine, end: nine }));
        assert!(!is_schedule_complete(&Schedule::Timed { start: nine, end: None }));
        assert_eq!(validate_schedule(&Schedule::Timed { start: None, end: nine }), Err("Start time is required".to_string()));
        assert_eq!(validate_schedule(&Schedule::Timed { start: nine, end: None }), Err("End time is required".to_string()));
    }

    #[test]
    fn test_auto_remove_complete() {
        assert!(is_auto_remove_complete(&AutoRemovePolicy::Never));
        assert!(is_auto_remove_complete(&AutoRemovePolicy::AfterGivenDate { epoch: Some(0) }));
        let zero = AutoRemovePolicy::AfterGivenDuration { unit: DurationUnit::Day, count: 0 };
        assert!(!is_auto_remove_complete(&zero));
        assert_eq!(validate_auto_remove(&zero), Err("Duration must be at least 1".to_string()));
    }

    #[test]
    fn test_remove_date_is_required() {
        let unpicked = AutoRemovePolicy::AfterGivenDate { epoch: None };
        assert!(!is_auto_remove_complete(&unpicked));
        assert_eq!(validate_auto_remove(&unpicked), Err("Remove date is required".to_string()));
    }

    #[test]
    fn test_validate_recurrence_messages() {
        assert!(validate_recurrence_selection(&RecurrenceRule::Daily).is_ok());
        assert_eq!(
            validate_recurrence_selection(&RecurrenceRule::Weekly(WeeklyRule::default())),
            Err("Select at least one day to continue".to_string())
        );
        let monthly = MonthlyRule { dates: [31].into(), invalid_date_strategy: InvalidDateStrategy::None };
        assert!(validate_recurrence_selection(&RecurrenceRule::Monthly(monthly))
            .unwrap_err()
            .contains("months"));

        let mut month_and_dates = MonthAndDates::new();
        month_and_dates.insert(MonthIndex::FEBRUARY, [29].into());
        let yearly = YearlyRule { month_and_dates, feb29_strategy: InvalidDateStrategy::None };
        assert!(validate_recurrence_selection(&RecurrenceRule::Yearly(yearly))
            .unwrap_err()
            .contains("February 29"));
    }

    #[test]
    fn test_validate_recurrence_agrees_with_predicate() {
        let rules = vec![
            RecurrenceRule::Daily,
            RecurrenceRule::Weekly(WeeklyRule::default()),
            RecurrenceRule::Monthly(MonthlyRule { dates: [30].into(), invalid_date_strategy: InvalidDateStrategy::Skip }),
            RecurrenceRule::Monthly(MonthlyRule { dates: [30].into(), invalid_date_strategy: InvalidDateStrategy::None }),
            RecurrenceRule::Yearly(YearlyRule::default()),
        ];
        for rule in rules {
            assert_eq!(validate_recurrence_selection(&rule).is_ok(), is_recurrence_selection_complete(&rule), "{:?}", rule);
        }
    }

    #[test]
    fn test_validate_task_name() {
        assert!(validate_task_name("Run 5k").is_ok());
        assert!(validate_task_name("   ").is_err());
        assert!(validate_task_name(&"x".repeat(101)).is_err());
        assert!(validate_task_name(&format!("  {}  ", "x".repeat(100))).is_ok());
    }

    #[test]
    fn test_validate_task_description() {
        assert!(validate_task_description("").is_ok());
        assert!(validate_task_description(&"y".repeat(500)).is_ok());
        assert!(validate_task_description(&"y".repeat(501)).is_err());
    }
}
