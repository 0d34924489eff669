//! Per-species calendar anchors.

use atlas_core::{DayOfYear, MonthDay};

use crate::rows::AnchorRow;

/// Safe breeding window plus the recorded extreme breeding dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonAnchors {
    pub breeding_start: MonthDay,
    pub breeding_end: MonthDay,
    pub earliest_breeding: Option<MonthDay>,
    pub latest_breeding: Option<MonthDay>,
}

impl SeasonAnchors {
    pub fn breeding_start_day(&self) -> DayOfYear {
        self.breeding_start.day_of_year()
    }

    pub fn breeding_end_day(&self) -> DayOfYear {
        self.breeding_end.day_of_year()
    }

    pub fn earliest_day(&self) -> Option<DayOfYear> {
        self.earliest_breeding.map(MonthDay::day_of_year)
    }

    pub fn latest_day(&self) -> Option<DayOfYear> {
        self.latest_breeding.map(MonthDay::day_of_year)
    }

    /// Safe dates span the year boundary.
    pub fn wraps(&self) -> bool {
        self.breeding_start_day() >= self.breeding_end_day()
    }
}

impl From<&AnchorRow> for SeasonAnchors {
    fn from(row: &AnchorRow) -> Self {
        Self {
            breeding_start: row.breeding_start,
            breeding_end: row.breeding_end,
            earliest_breeding: row.earliest_breeding,
            latest_breeding: row.latest_breeding,
        }
    }
}
