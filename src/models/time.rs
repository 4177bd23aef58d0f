use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, Result};

/// Time of day packed as `HH * 100 + MM` (e.g. `930` is 09:30)
///
/// Construction rejects anything above 2359 or with minutes above 59, so a
/// `TimeOfDay` in hand is always a real wall-clock time. An unset picker is
/// `Option::<TimeOfDay>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    pub fn new(raw: u16) -> Result<Self> {
        if raw <= 2359 && raw % 100 <= 59 {
            Ok(TimeOfDay(raw))
        } else {
            Err(CoreError::InvalidTime(raw as i64))
        }
    }

    pub fn from_hm(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(CoreError::InvalidTime(hour as i64 * 100 + minute as i64));
        }
        Ok(TimeOfDay(hour as u16 * 100 + minute as u16))
    }

    pub fn value(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u8 {
        (self.0 / 100) as u8
    }

    pub fn minute(self) -> u8 {
        (self.0 % 100) as u8
    }

    /// Minutes elapsed since midnight
    pub fn minutes_since_midnight(self) -> u32 {
        self.hour() as u32 * 60 + self.minute() as u32
    }
}

impl TryFrom<u16> for TimeOfDay {
    type Error = CoreError;

    fn try_from(raw: u16) -> Result<Self> {
        TimeOfDay::new(raw)
    }
}

impl From<TimeOfDay> for u16 {
    fn from(time: TimeOfDay) -> u16 {
        time.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "AM" => Some(Meridiem::Am),
            "PM" => Some(Meridiem::Pm),
            _ => None,
        }
    }
}

/// A time as the 12-hour picker shows it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour12: u8,
    pub minute: u8,
    pub meridiem: Meridiem,
}

/// How a task is placed within its day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Schedule {
    /// Anytime during the day
    NotTimed,
    /// At a specific time; either end may still be unset while editing
    Timed {
        start: Option<TimeOfDay>,
        end: Option<TimeOfDay>,
    },
}
