use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, Result};

/// Zero-based month index (0 = January, 11 = December)
///
/// Deserializes from a number or a numeric string, since JSON object keys
/// (`monthAndDates`) are always strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct MonthIndex(u8);

impl MonthIndex {
    pub const JANUARY: MonthIndex = MonthIndex(0);
    pub const FEBRUARY: MonthIndex = MonthIndex(1);
    pub const MARCH: MonthIndex = MonthIndex(2);
    pub const APRIL: MonthIndex = MonthIndex(3);
    pub const MAY: MonthIndex = MonthIndex(4);
    pub const JUNE: MonthIndex = MonthIndex(5);
    pub const JULY: MonthIndex = MonthIndex(6);
    pub const AUGUST: MonthIndex = MonthIndex(7);
    pub const SEPTEMBER: MonthIndex = MonthIndex(8);
    pub const OCTOBER: MonthIndex = MonthIndex(9);
    pub const NOVEMBER: MonthIndex = MonthIndex(10);
    pub const DECEMBER: MonthIndex = MonthIndex(11);

    pub fn new(index: u8) -> Result<Self> {
        if index <= 11 {
            Ok(MonthIndex(index))
        } else {
            Err(CoreError::InvalidMonth(index as i64))
        }
    }

    /// Build from chrono's one-based month number
    pub fn from_number(month: u32) -> Result<Self> {
        match month {
            1..=12 => Ok(MonthIndex((month - 1) as u8)),
            _ => Err(CoreError::InvalidMonth(month as i64 - 1)),
        }
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// One-based month number as chrono expects it
    pub fn number(self) -> u32 {
        self.0 as u32 + 1
    }

    pub fn all() -> impl Iterator<Item = MonthIndex> {
        (0..12).map(MonthIndex)
    }

    /// Following month, wrapping December to January
    pub fn succ(self) -> MonthIndex {
        MonthIndex((self.0 + 1) % 12)
    }

    /// Preceding month, wrapping January to December
    pub fn pred(self) -> MonthIndex {
        MonthIndex((self.0 + 11) % 12)
    }
}

impl TryFrom<u8> for MonthIndex {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self> {
        MonthIndex::new(value)
    }
}

impl From<MonthIndex> for u8 {
    fn from(month: MonthIndex) -> u8 {
        month.0
    }
}

impl<'de> Deserialize<'de> for MonthIndex {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MonthIndexVisitor;

        impl<'de> Visitor<'de> for MonthIndexVisitor {
            type Value = MonthIndex;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a month index from 0 to 11")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<MonthIndex, E> {
                u8::try_from(value)
                    .ok()
                    .and_then(|index| MonthIndex::new(index).ok())
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(value), &self))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<MonthIndex, E> {
                match u64::try_from(value) {
                    Ok(value) => self.visit_u64(value),
                    Err(_) => Err(E::invalid_value(de::Unexpected::Signed(value), &self)),
                }
            }

            fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<MonthIndex, E> {
                match value.trim().parse::<u64>() {
                    Ok(index) => self.visit_u64(index),
                    Err(_) => Err(E::invalid_value(de::Unexpected::Str(value), &self)),
                }
            }
        }

        deserializer.deserialize_any(MonthIndexVisitor)
    }
}

impl fmt::Display for MonthIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_index_range() {
        assert!(MonthIndex::new(0).is_ok());
        assert!(MonthIndex::new(11).is_ok());
        assert_eq!(MonthIndex::new(12), Err(CoreError::InvalidMonth(12)));
    }

    #[test]
    fn test_month_number_conversion() {
        assert_eq!(MonthIndex::from_number(2).unwrap(), MonthIndex::FEBRUARY);
        assert_eq!(MonthIndex::FEBRUARY.number(), 2);
        assert!(MonthIndex::from_number(0).is_err());
        assert!(MonthIndex::from_number(13).is_err());
    }

    #[test]
    fn test_month_wrapping() {
        assert_eq!(MonthIndex::DECEMBER.succ(), MonthIndex::JANUARY);
        assert_eq!(MonthIndex::JANUARY.pred(), MonthIndex::DECEMBER);
        assert_eq!(MonthIndex::all().count(), 12);
    }

    #[test]
    fn test_month_index_serde() {
        let month: MonthIndex = serde_json::from_str("3").unwrap();
        assert_eq!(month, MonthIndex::APRIL);
        assert!(serde_json::from_str::<MonthIndex>("12").is_err());
        assert_eq!(serde_json::from_str::<MonthIndex>("\"11\"").unwrap(), MonthIndex::DECEMBER);
        assert_eq!(serde_json::to_string(&MonthIndex::MAY).unwrap(), "4");
    }
}
