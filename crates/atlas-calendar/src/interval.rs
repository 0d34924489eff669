//! Inclusive day-of-year ranges.

use std::fmt;

use atlas_core::constants::DAYS_IN_YEAR;
use atlas_core::DayOfYear;

/// Inclusive range of days, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayRange {
    start: DayOfYear,
    end: DayOfYear,
}

impl DayRange {
    /// `None` when the bounds are outside `1..=366` or inverted.
    pub fn new(start: u16, end: u16) -> Option<Self> {
        if start > end || end > DAYS_IN_YEAR {
            return None;
        }
        Some(Self {
            start: DayOfYear::new(start)?,
            end: DayOfYear::new(end)?,
        })
    }

    pub fn start(&self) -> DayOfYear {
        self.start
    }

    pub fn end(&self) -> DayOfYear {
        self.end
    }

    pub fn len(&self) -> usize {
        usize::from(self.end.get() - self.start.get()) + 1
    }

    /// Never true; ranges hold at least one day.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, day: DayOfYear) -> bool {
        self.start <= day && day <= self.end
    }

    pub fn days(&self) -> impl Iterator<Item = u16> {
        self.start.get()..=self.end.get()
    }
}

impl fmt::Display for DayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{}]", self.start, self.end)
    }
}
