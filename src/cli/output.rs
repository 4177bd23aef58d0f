// Plain-text rendering for CLI commands
// Every formatter returns the full text, one item per line with a trailing newline

use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::error::Result;
use crate::models::{RecurrenceRule, YearlyDateCode};
use crate::recur::{requires_feb29_strategy, requires_invalid_date_strategy};
use crate::utils::{weekday_name, yearly_date_label, YearPage};
use crate::validation::validate_recurrence_selection;

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

pub fn format_weekdays(weekdays: &BTreeSet<u8>) -> String {
    weekdays
        .iter()
        .filter_map(|&d| weekday_name(d))
        .map(|name| format!("{}\n", name))
        .collect()
}

pub fn format_resolved_days(days: &[u8]) -> String {
    days.iter().map(|day| format!("{}\n", day)).collect()
}

pub fn format_yearly_codes(codes: &[YearlyDateCode]) -> Result<String> {
    let mut out = String::new();
    for &code in codes {
        out.push_str(&format!("{}\t{}\n", code, yearly_date_label(code)?));
    }
    Ok(out)
}

pub fn format_occurrences(dates: &[NaiveDate]) -> String {
    dates
        .iter()
        .map(|date| format!("{}\n", date.format("%Y-%m-%d %a")))
        .collect()
}

/// Completeness report for `gamify check`
pub fn format_check_report(rule: &RecurrenceRule) -> String {
    let mut out = format!("type: {}\n", rule.kind());

    let strategy = match rule {
        RecurrenceRule::Monthly(monthly) => {
            Some((requires_invalid_date_strategy(monthly), monthly.invalid_date_strategy))
        }
        RecurrenceRule::Yearly(yearly) => Some((requires_feb29_strategy(yearly), yearly.feb29_strategy)),
        RecurrenceRule::Daily | RecurrenceRule::Weekly(_) => None,
    };
    if let Some((required, chosen)) = strategy {
        out.push_str(&format!("strategy required: {}\n", yes_no(required)));
        out.push_str(&format!("strategy: {}\n", chosen.as_str()));
    }

    match validate_recurrence_selection(rule) {
        Ok(()) => out.push_str("complete: yes\n"),
        Err(message) => out.push_str(&format!("complete: no ({})\n", message)),
    }
    out
}

/// Year picker page laid out in rows of `columns`
pub fn format_year_page(page: &YearPage, columns: usize) -> String {
    page.years
        .chunks(columns.max(1))
        .map(|row| {
            let cells: Vec<String> = row.iter().map(|y| y.to_string()).collect();
            format!("{}\n", cells.join("  "))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InvalidDateStrategy, MonthlyRule, WeeklyRule};
    use crate::utils::page_years;

    #[test]
    fn test_format_weekdays() {
        assert_eq!(format_weekdays(&[1, 5].into()), "Monday\nFriday\n");
    }

    #[test]
    fn test_format_yearly_codes() {
        assert_eq!(format_yearly_codes(&[31, 128]).unwrap(), "31\tJanuary 31\n128\tFebruary 28\n");
    }

    #[test]
    fn test_format_check_report() {
        let rule = RecurrenceRule::Monthly(MonthlyRule { dates: [30].into(), invalid_date_strategy: InvalidDateStrategy::None });
        let report = format_check_report(&rule);
        assert!(report.contains("type: monthly\n"));
        assert!(report.contains("strategy required: yes\n"));
        assert!(report.contains("complete: no ("));

        let report = format_check_report(&RecurrenceRule::Weekly(WeeklyRule { weekdays: [2].into() }));
        assert_eq!(report, "type: weekly\ncomplete: yes\n");
    }

    #[test]
    fn test_format_year_page() {
        let page = page_years(2024, 18).unwrap();
        let text = format_year_page(&page, 6);
        assert_eq!(text.lines().count(), 3);
        assert!(text.starts_with("2017  2018"));
    }
}
