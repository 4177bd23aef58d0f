// Time-of-day codec: HHMM integers <-> 12-hour picker values and display strings

use chrono::{NaiveTime, Timelike};
use std::ops::RangeInclusive;

use crate::error::{CoreError, Result};
use crate::models::{ClockTime, Meridiem, TimeOfDay};

/// Zero-padding of the hour in 12-hour display strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HourPadding {
    /// `09:30 AM`
    #[default]
    Padded,
    /// `9:30 AM`
    Unpadded,
}

/// Whether `raw` is a valid HHMM time (0..=2359, minutes never above 59)
pub fn is_valid_time(raw: i64) -> bool {
    (0..=2359).contains(&raw) && raw % 100 <= 59
}

/// Split a 24-hour time into its 12-hour picker parts
pub fn decode_time(time: TimeOfDay) -> ClockTime {
    let hour = time.hour();
    let meridiem = if hour >= 12 { Meridiem::Pm } else { Meridiem::Am };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    ClockTime { hour12, minute: time.minute(), meridiem }
}

/// Combine 12-hour picker parts into a 24-hour time
///
/// 12 AM is hour 0 and 12 PM is hour 12; other hours map literally for AM and
/// gain 12 for PM.
pub fn encode_time(clock: ClockTime) -> Result<TimeOfDay> {
    if !(1..=12).contains(&clock.hour12) || clock.minute > 59 {
        return Err(CoreError::InvalidClockTime { hour: clock.hour12, minute: clock.minute });
    }
    let hour = match (clock.meridiem, clock.hour12) {
        (Meridiem::Am, 12) => 0,
        (Meridiem::Am, h) => h,
        (Meridiem::Pm, 12) => 12,
        (Meridiem::Pm, h) => h + 12,
    };
    TimeOfDay::from_hm(hour, clock.minute)
}

/// Format as `HH:MM AM|PM` with a zero-padded hour; unset gives `""`
pub fn format_time_12h(time: Option<TimeOfDay>) -> String {
    format_time_12h_with(time, HourPadding::Padded)
}

pub fn format_time_12h_with(time: Option<TimeOfDay>, padding: HourPadding) -> String {
    let Some(time) = time else {
        return String::new();
    };
    let clock = decode_time(time);
    match padding {
        HourPadding::Padded => {
            format!("{:02}:{:02} {}", clock.hour12, clock.minute, clock.meridiem.as_str())
        }
        HourPadding::Unpadded => {
            format!("{}:{:02} {}", clock.hour12, clock.minute, clock.meridiem.as_str())
        }
    }
}

/// Format as `HH:MM` in 24-hour form; unset gives `""`
pub fn format_time_24h(time: Option<TimeOfDay>) -> String {
    time.map(|t| t.to_string()).unwrap_or_default()
}

fn is_digits(s: &str, len: RangeInclusive<usize>) -> bool {
    len.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a 12-hour display string such as `9:30 PM`, `09:30 am` or `7pm`
///
/// The hour takes one or two digits and the minutes exactly two; signs and
/// other characters are rejected.
pub fn parse_time_12h(input: &str) -> Result<TimeOfDay> {
    let unparsable = || CoreError::UnparsableTime(input.to_string());
    let trimmed = input.trim();

    let (clock_part, meridiem_part) = match trimmed.rsplit_once(' ') {
        Some((clock, meridiem)) => (clock.trim(), meridiem),
        None if trimmed.len() > 2 && trimmed.is_char_boundary(trimmed.len() - 2) => {
            trimmed.split_at(trimmed.len() - 2)
        }
        None => return Err(unparsable()),
    };
    let meridiem = Meridiem::from_str(meridiem_part).ok_or_else(unparsable)?;

    let (hour_str, minute_str) = clock_part.split_once(':').unwrap_or((clock_part, "00"));
    if !is_digits(hour_str, 1..=2) || !is_digits(minute_str, 2..=2) {
        return Err(unparsable());
    }

    let normalized = format!("{}:{} {}", hour_str, minute_str, meridiem.as_str());
    let time = NaiveTime::parse_from_str(&normalized, "%I:%M %p").map_err(|_| unparsable())?;
    TimeOfDay::from_hm(time.hour() as u8, time.minute() as u8)
}

/// Floor a minute value to its 5-minute picker block
pub fn minute_block(minute: u8) -> u8 {
    (minute / 5) * 5
}

/// The five minute values starting at `start`, wrapping at 60
pub fn next_five_minutes(start: u8) -> [u8; 5] {
    let mut minutes = [0u8; 5];
    for (i, slot) in minutes.iter_mut().enumerate() {
        *slot = ((start as u16 + i as u16) % 60) as u8;
    }
    minutes
}
