use serde::{Deserialize, Serialize};

/// Calendar unit for offsets and auto-remove durations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DurationUnit {
    Day,
    Week,
    Month,
    Year,
}

impl DurationUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationUnit::Day => "day",
            DurationUnit::Week => "week",
            DurationUnit::Month => "month",
            DurationUnit::Year => "year",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "d" | "day" | "days" => Some(DurationUnit::Day),
            "w" | "week" | "weeks" => Some(DurationUnit::Week),
            "m" | "month" | "months" => Some(DurationUnit::Month),
            "y" | "year" | "years" => Some(DurationUnit::Year),
            _ => None,
        }
    }
}

/// When a task stops being active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AutoRemovePolicy {
    Never,
    AfterGivenDuration {
        unit: DurationUnit,
        /// Number of units, at least 1 for a complete selection
        #[serde(alias = "nValue")]
        count: u32,
    },
    AfterGivenDate {
        /// UTC milliseconds; `None` until a date is picked
        #[serde(default, alias = "dateEpoch")]
        epoch: Option<i64>,
    },
}
