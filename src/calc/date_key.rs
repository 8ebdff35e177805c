use crate::calc::month_grid::days_in_month;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateKeyError {
    #[error("'{0}' is not a YYYY-MM-DD date key")]
    Malformed(String),
    #[error("month {0} is out of range in date key")]
    MonthOutOfRange(u32),
    #[error("day {day} does not exist in month {month} of {year}")]
    DayOutOfRange { year: i32, month: u32, day: u32 },
}

/// Canonical `YYYY-MM-DD` identifier for a calendar date.
///
/// Stored as fields so ordering is chronological for every year; the string
/// form is what data files and lookups see.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey {
    year: i32,
    /// 0-based.
    month: u32,
    day: u32,
}

impl DateKey {
    /// `month` is 0-based.
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        DateKey { year, month, day }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 0-based month.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn from_date(date: NaiveDate) -> Self {
        DateKey::new(date.year(), date.month0(), date.day())
    }

    /// None when the year is outside chrono's supported range.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, self.day)
    }

    /// "Monday, January 1, 2024", falling back to the key itself.
    pub fn long_form(&self) -> String {
        match self.to_naive_date() {
            Some(d) => d.format("%A, %B %-d, %Y").to_string(),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month + 1, self.day)
    }
}

impl FromStr for DateKey {
    type Err = DateKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DateKeyError::Malformed(s.to_string());
        // Split from the right so a negative year keeps its sign.
        let mut parts = s.rsplitn(3, '-');
        let (Some(day), Some(month), Some(year)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };
        if day.len() != 2 || month.len() != 2 || !is_digits(day) || !is_digits(month) {
            return Err(malformed());
        }
        let year_text = year;
        let year: i32 = year.parse().map_err(|_| malformed())?;
        // Only the form `Display` produces: no `+`, no leading zeros.
        if year.to_string() != year_text {
            return Err(malformed());
        }
        let month: u32 = month.parse().map_err(|_| malformed())?;
        let day: u32 = day.parse().map_err(|_| malformed())?;
        if !(1..=12).contains(&month) {
            return Err(DateKeyError::MonthOutOfRange(month));
        }
        let month = month - 1;
        if day == 0 || day > days_in_month(year, month) {
            return Err(DateKeyError::DayOutOfRange {
                year,
                month: month + 1,
                day,
            });
        }
        Ok(DateKey::new(year, month, day))
    }
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

impl TryFrom<String> for DateKey {
    type Error = DateKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::month_grid::format_date_key;

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(DateKey::new(2024, 0, 5).to_string(), "2024-01-05");
        assert_eq!(DateKey::new(2024, 11, 25).to_string(), "2024-12-25");
    }

    #[test]
    fn test_parse_roundtrip_across_months() {
        for year in [1900, 2000, 2023, 2024] {
            for month in 0..12 {
                for day in 1..=days_in_month(year, month) {
                    let key = format_date_key(year, month, day);
                    let parsed: DateKey = key.to_string().parse().unwrap();
                    assert_eq!(
                        (parsed.year(), parsed.month(), parsed.day()),
                        (year, month, day)
                    );
                }
            }
        }
    }

    #[test]
    fn test_parse_roundtrip_negative_year() {
        let key = DateKey::new(-44, 2, 15);
        assert_eq!(key.to_string(), "-44-03-15");
        assert_eq!("-44-03-15".parse::<DateKey>().unwrap(), key);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!("2024-1-05".parse::<DateKey>(), Err(DateKeyError::Malformed(_))));
        assert!(matches!("2024/01/05".parse::<DateKey>(), Err(DateKeyError::Malformed(_))));
        assert!(matches!("hello".parse::<DateKey>(), Err(DateKeyError::Malformed(_))));
        assert!(matches!("x-01-05".parse::<DateKey>(), Err(DateKeyError::Malformed(_))));
        assert!(matches!("+2024-01-05".parse::<DateKey>(), Err(DateKeyError::Malformed(_))));
        assert!(matches!("02024-01-05".parse::<DateKey>(), Err(DateKeyError::Malformed(_))));
        assert!(matches!("-044-03-15".parse::<DateKey>(), Err(DateKeyError::Malformed(_))));
        assert!(matches!("-0-03-15".parse::<DateKey>(), Err(DateKeyError::Malformed(_))));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(
            "2024-13-01".parse::<DateKey>(),
            Err(DateKeyError::MonthOutOfRange(13))
        );
        assert_eq!(
            "2023-02-29".parse::<DateKey>(),
            Err(DateKeyError::DayOutOfRange { year: 2023, month: 2, day: 29 })
        );
        assert!("2024-02-29".parse::<DateKey>().is_ok());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = DateKey::new(2023, 11, 31);
        let b = DateKey::new(2024, 0, 1);
        let c = DateKey::new(2024, 0, 10);
        assert!(a < b && b < c);
        assert!(a.to_string() < b.to_string() && b.to_string() < c.to_string());
    }

    #[test]
    fn test_long_form() {
        assert_eq!(DateKey::new(2024, 0, 1).long_form(), "Monday, January 1, 2024");
    }

    #[test]
    fn test_serde_uses_string_form() {
        let key = DateKey::new(2024, 0, 9);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"2024-01-09\"");
        let back: DateKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
        assert!(serde_json::from_str::<DateKey>("\"2024-02-30\"").is_err());
    }

    #[test]
    fn test_from_date() {
        let d = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(DateKey::from_date(d).to_string(), "2024-06-15");
        assert_eq!(DateKey::from_date(d).to_naive_date(), Some(d));
    }
}
