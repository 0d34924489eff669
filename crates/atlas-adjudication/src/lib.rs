//! # atlas-adjudication
//!
//! Final per-record resolution once tiers have settled:
//! - unlikely records resolve to the no-code sentinel with a timing reason;
//! - plausible records without evidence take the plausible adjustment;
//! - uncertain records without evidence resolve for insufficient evidence;
//! - anything left uncertain or plausible with evidence goes to review.
//!
//! The breeding category is then recomputed from the resolved code.

pub mod adjudicator;
pub mod category;
pub mod review;

pub use adjudicator::{AdjudicationReport, Adjudicator, Verdict};
pub use category::recompute_category;
pub use review::{ReviewCause, ReviewItem};
