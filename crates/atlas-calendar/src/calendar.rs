//! SpeciesCalendar: one species' five-phase partition of the year.

use std::fmt;

use atlas_core::constants::DAYS_IN_YEAR;
use atlas_core::errors::CalendarError;
use atlas_core::types::collections::SmallVec;
use atlas_core::{DayOfYear, Phase};
use atlas_reference::SeasonAnchors;

use crate::interval::DayRange;

/// Ranges making up one phase. Empty means the phase is absent; only a
/// wrapped breeding phase holds two pieces.
pub type PhaseSpan = SmallVec<[DayRange; 2]>;

/// Five day ranges (possibly absent) that partition `1..=366` exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesCalendar {
    species: String,
    spans: [PhaseSpan; 5],
    wraps: bool,
}

impl SpeciesCalendar {
    /// Derive and validate a species' calendar from its anchors.
    pub fn from_anchors(species: &str, anchors: &SeasonAnchors) -> Result<Self, CalendarError> {
        let bs = anchors.breeding_start_day().get();
        let be = anchors.breeding_end_day().get();
        let earliest = anchors.earliest_day().map(DayOfYear::get);
        let latest = anchors.latest_day().map(DayOfYear::get);

        let spans = if bs < be {
            ordinary_spans(bs, be, earliest, latest)
        } else {
            wrapped_spans(bs, be, latest)
        };
        Self::from_spans(species, spans, bs >= be)
    }

    /// Validate explicit spans, indexed in [`Phase::ALL`] order.
    pub fn from_spans(
        species: &str,
        spans: [PhaseSpan; 5],
        wraps: bool,
    ) -> Result<Self, CalendarError> {
        let calendar = Self {
            species: species.to_string(),
            spans,
            wraps,
        };
        calendar.validate()?;
        Ok(calendar)
    }

    fn validate(&self) -> Result<(), CalendarError> {
        if self.spans.iter().all(|s| s.is_empty()) {
            return Err(CalendarError::EmptyCalendar {
                species: self.species.clone(),
            });
        }

        let mut hits = [0u8; DAYS_IN_YEAR as usize + 1];
        for range in self.spans.iter().flatten() {
            for day in range.days() {
                hits[usize::from(day)] = hits[usize::from(day)].saturating_add(1);
            }
        }
        let covered_once = hits[1..].iter().filter(|h| **h == 1).count();
        let total_len: usize = self.spans.iter().flatten().map(DayRange::len).sum();

        if covered_once != usize::from(DAYS_IN_YEAR) || total_len != usize::from(DAYS_IN_YEAR) {
            return Err(CalendarError::PartitionFault {
                species: self.species.clone(),
                covered: covered_once,
                intervals: self.to_string(),
            });
        }
        Ok(())
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    /// Safe dates span the year boundary.
    pub fn wraps(&self) -> bool {
        self.wraps
    }

    pub fn span(&self, phase: Phase) -> &[DayRange] {
        &self.spans[phase_index(phase)]
    }

    pub fn is_absent(&self, phase: Phase) -> bool {
        self.span(phase).is_empty()
    }

    /// Number of days in a phase.
    pub fn phase_len(&self, phase: Phase) -> usize {
        self.span(phase).iter().map(DayRange::len).sum()
    }

    /// The unique phase containing `day`. Always `Some` for a validated
    /// calendar.
    pub fn classify_day(&self, day: DayOfYear) -> Option<Phase> {
        Phase::ALL
            .into_iter()
            .find(|p| self.span(*p).iter().any(|r| r.contains(day)))
    }
}

impl fmt::Display for SpeciesCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, phase) in Phase::ALL.into_iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{phase}=")?;
            let span = self.span(phase);
            if span.is_empty() {
                f.write_str("absent")?;
            }
            for (j, range) in span.iter().enumerate() {
                if j > 0 {
                    f.write_str("+")?;
                }
                write!(f, "{range}")?;
            }
        }
        Ok(())
    }
}

fn phase_index(phase: Phase) -> usize {
    match phase {
        Phase::Early => 0,
        Phase::Pre => 1,
        Phase::Breeding => 2,
        Phase::Post => 3,
        Phase::Late => 4,
    }
}

fn span_of(range: Option<DayRange>) -> PhaseSpan {
    range.into_iter().collect()
}

/// `bs < be`: early, pre, breeding, post, late in calendar order.
fn ordinary_spans(bs: u16, be: u16, earliest: Option<u16>, latest: Option<u16>) -> [PhaseSpan; 5] {
    let pre = earliest
        .filter(|e| *e < bs)
        .and_then(|e| DayRange::new(e, bs - 1));
    let early_end = pre.map_or(bs, |p| p.start().get()) - 1;
    let early = DayRange::new(1, early_end);

    let breeding = DayRange::new(bs, be);

    let post = latest
        .filter(|l| *l > be)
        .and_then(|l| DayRange::new(be + 1, l));
    let late_start = post.map_or(be, |p| p.end().get()) + 1;
    let late = DayRange::new(late_start, DAYS_IN_YEAR);

    [
        span_of(early),
        span_of(pre),
        span_of(breeding),
        span_of(post),
        span_of(late),
    ]
}

/// `bs >= be`: breeding wraps across day 366/1; early and pre are absent.
/// Post and late fill the gap between `be` and `bs`.
fn wrapped_spans(bs: u16, be: u16, latest: Option<u16>) -> [PhaseSpan; 5] {
    // When bs == be the tail starts one day later so `be` is not counted twice.
    let tail_start = bs.max(be + 1);
    let mut breeding = PhaseSpan::new();
    breeding.extend(DayRange::new(1, be));
    breeding.extend(DayRange::new(tail_start, DAYS_IN_YEAR));

    let gap_end = tail_start - 1;
    let post = latest
        .filter(|l| *l > be)
        .map(|l| l.min(bs.saturating_sub(1)))
        .and_then(|bound| DayRange::new(be + 1, bound.min(gap_end)));
    let late_start = post.map_or(be, |p| p.end().get()) + 1;
    let late = DayRange::new(late_start, gap_end);

    [
        PhaseSpan::new(),
        PhaseSpan::new(),
        breeding,
        span_of(post),
        span_of(late),
    ]
}
