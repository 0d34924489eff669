//! Leap-adjusted day-of-year arithmetic.
//!
//! Every month/day pair is placed on a leap reference year, so Feb 29 is
//! day 60 and Dec 31 is day 366 whatever year an observation falls in.
//! Phase arithmetic is therefore independent of year length.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::{DAYS_IN_YEAR, LEAP_REFERENCE_YEAR};
use crate::errors::ReferenceError;

/// A day of the leap-adjusted year, `1..=366`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct DayOfYear(u16);

impl DayOfYear {
    pub const FIRST: DayOfYear = DayOfYear(1);
    pub const LAST: DayOfYear = DayOfYear(DAYS_IN_YEAR);

    pub fn new(day: u16) -> Option<Self> {
        (1..=DAYS_IN_YEAR).contains(&day).then_some(Self(day))
    }

    /// Leap-adjusted day of a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        // A real date's month/day always exists in a leap year.
        Self::from_month_day(date.month(), date.day()).unwrap_or(Self::LAST)
    }

    pub fn from_month_day(month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(LEAP_REFERENCE_YEAR, month, day).map(|d| Self(d.ordinal() as u16))
    }

    pub fn get(self) -> u16 {
        self.0
    }

    /// The previous day, `None` on day 1.
    pub fn pred(self) -> Option<Self> {
        Self::new(self.0 - 1)
    }

    /// The next day, `None` on day 366.
    pub fn succ(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }
}

impl TryFrom<u16> for DayOfYear {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("day of year out of range: {value}"))
    }
}

impl From<DayOfYear> for u16 {
    fn from(day: DayOfYear) -> Self {
        day.0
    }
}

impl fmt::Display for DayOfYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A yearless calendar anchor written `MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    pub fn new(month: u32, day: u32) -> Result<Self, ReferenceError> {
        if DayOfYear::from_month_day(month, day).is_none() {
            return Err(ReferenceError::InvalidAnchor {
                value: format!("{month:02}-{day:02}"),
            });
        }
        Ok(Self { month, day })
    }

    pub fn parse(value: &str) -> Result<Self, ReferenceError> {
        let invalid = || ReferenceError::InvalidAnchor {
            value: value.to_string(),
        };
        let (m, d) = value.trim().split_once('-').ok_or_else(invalid)?;
        let month = m.parse::<u32>().map_err(|_| invalid())?;
        let day = d.parse::<u32>().map_err(|_| invalid())?;
        Self::new(month, day)
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }

    pub fn day_of_year(self) -> DayOfYear {
        DayOfYear::from_month_day(self.month, self.day).unwrap_or(DayOfYear::LAST)
    }
}

impl TryFrom<String> for MonthDay {
    type Error = ReferenceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MonthDay> for String {
    fn from(md: MonthDay) -> Self {
        md.to_string()
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}
