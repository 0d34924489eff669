//! Span definitions per pipeline stage: calendar, classify, tiers,
//! escalation, colony, adjudicate.
//!
//! Each span carries the number of records the stage touches.

/// Create a season-calendar span.
#[macro_export]
macro_rules! calendar_span {
    ($record_count:expr) => {
        tracing::info_span!("atlas.calendar", record_count = $record_count)
    };
}

/// Create a code-classification span.
#[macro_export]
macro_rules! classify_span {
    ($record_count:expr) => {
        tracing::info_span!("atlas.classify", record_count = $record_count)
    };
}

/// Create a tier-evaluation span.
#[macro_export]
macro_rules! tiers_span {
    ($record_count:expr) => {
        tracing::info_span!("atlas.tiers", record_count = $record_count)
    };
}

/// Create an escalation span.
#[macro_export]
macro_rules! escalation_span {
    ($record_count:expr) => {
        tracing::info_span!("atlas.escalation", record_count = $record_count)
    };
}

/// Create a colony-discovery span.
#[macro_export]
macro_rules! colony_span {
    ($record_count:expr) => {
        tracing::info_span!("atlas.colony", record_count = $record_count)
    };
}

/// Create an adjudication span.
#[macro_export]
macro_rules! adjudicate_span {
    ($record_count:expr) => {
        tracing::info_span!("atlas.adjudicate", record_count = $record_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const CALENDAR: &str = "atlas.calendar";
    pub const CLASSIFY: &str = "atlas.classify";
    pub const TIERS: &str = "atlas.tiers";
    pub const ESCALATION: &str = "atlas.escalation";
    pub const COLONY: &str = "atlas.colony";
    pub const ADJUDICATE: &str = "atlas.adjudicate";
}
