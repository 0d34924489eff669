//! # atlas-calendar
//!
//! Derives, per species, a partition of the 366 leap-adjusted days into
//! early-season, pre-breeding, core-breeding, post-breeding, and late-season
//! phases from the species' calendar anchors.
//!
//! Species whose safe dates span the year boundary (`breeding_start >=
//! breeding_end`) have no early or pre-breeding phase, and their breeding
//! phase is the two-piece union `[1, end] ∪ [start, 366]`.
//!
//! Every calendar is validated on construction: each day must fall in
//! exactly one phase. A failing species is a partition fault.

pub mod calendar;
pub mod interval;
pub mod season;

pub use calendar::SpeciesCalendar;
pub use interval::DayRange;
pub use season::SeasonCalendar;
