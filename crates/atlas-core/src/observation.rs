//! The observation record and its forward-only state machine.
//!
//! Each derived field only moves toward a resolved state:
//! - `phase` is decided once.
//! - `expectation_tier`: unset → any, plausible/improbable → expected.
//! - `confidence_tier`: unset → any, uncertain/unlikely → confident.
//! - `resolution_reason` is written at most once. The code it explains may
//!   still be discarded to the no-code sentinel.
//!
//! Stages go through the transition methods below instead of assigning the
//! fields, so an illegal move surfaces as a [`TransitionError`].

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::codes::{BreedingCategory, BreedingCode};
use crate::day::DayOfYear;
use crate::errors::TransitionError;
use crate::reason::ResolutionReason;
use crate::tiers::{ConfidenceTier, ExpectationTier, Phase};
use crate::types::collections::SmallVec4;

/// One citizen-science observation with its derived classification fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Unique, stable identifier.
    pub id: String,
    pub species: String,
    pub reported_code: BreedingCode,
    pub date: NaiveDate,
    pub region: String,
    /// Finest-grained location unit.
    pub block: String,
    #[serde(default)]
    pub has_media: bool,
    #[serde(default)]
    pub has_comments: bool,

    #[serde(default)]
    pub expectation_tier: Option<ExpectationTier>,
    #[serde(default)]
    pub phase: Option<Phase>,
    /// Historical region expectation OR known colony at the block.
    #[serde(default)]
    pub expected_here: Option<bool>,
    #[serde(default)]
    pub confidence_tier: Option<ConfidenceTier>,
    #[serde(default)]
    pub resolved_code: Option<BreedingCode>,
    #[serde(default)]
    pub resolution_reason: Option<ResolutionReason>,
    #[serde(default)]
    pub breeding_category: Option<BreedingCategory>,
}

impl Observation {
    pub fn new(
        id: impl Into<String>,
        species: impl Into<String>,
        reported_code: impl Into<BreedingCode>,
        date: NaiveDate,
        region: impl Into<String>,
        block: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            species: species.into(),
            reported_code: reported_code.into(),
            date,
            region: region.into(),
            block: block.into(),
            has_media: false,
            has_comments: false,
            expectation_tier: None,
            phase: None,
            expected_here: None,
            confidence_tier: None,
            resolved_code: None,
            resolution_reason: None,
            breeding_category: None,
        }
    }

    pub fn with_evidence(mut self, has_media: bool, has_comments: bool) -> Self {
        self.has_media = has_media;
        self.has_comments = has_comments;
        self
    }

    /// Media or free-text comments back the report.
    pub fn has_supporting_evidence(&self) -> bool {
        self.has_media || self.has_comments
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn day_of_year(&self) -> DayOfYear {
        DayOfYear::from_date(self.date)
    }

    /// The code downstream stages reason about: the resolved code once set,
    /// the reported code before that.
    pub fn working_code(&self) -> &BreedingCode {
        self.resolved_code.as_ref().unwrap_or(&self.reported_code)
    }

    pub fn is_resolved(&self) -> bool {
        self.resolution_reason.is_some()
    }

    /// Names of required fields that are empty.
    pub fn missing_fields(&self) -> SmallVec4<&'static str> {
        let mut missing = SmallVec4::new();
        if self.id.trim().is_empty() {
            missing.push("id");
        }
        if self.species.trim().is_empty() {
            missing.push("species");
        }
        if self.region.trim().is_empty() {
            missing.push("region");
        }
        if self.block.trim().is_empty() {
            missing.push("block");
        }
        missing
    }

    /// Reset every derived field. Used when a species is quarantined.
    pub fn clear_derived(&mut self) {
        self.expectation_tier = None;
        self.phase = None;
        self.expected_here = None;
        self.confidence_tier = None;
        self.resolved_code = None;
        self.resolution_reason = None;
        self.breeding_category = None;
    }

    pub fn set_phase(&mut self, phase: Phase) -> Result<(), TransitionError> {
        match self.phase {
            Some(current) if current != phase => Err(self.illegal("phase", current, phase)),
            _ => {
                self.phase = Some(phase);
                Ok(())
            }
        }
    }

    pub fn set_expectation(&mut self, tier: ExpectationTier) -> Result<(), TransitionError> {
        match self.expectation_tier {
            Some(current) if !current.can_advance_to(tier) => {
                Err(self.illegal("expectation_tier", current, tier))
            }
            _ => {
                self.expectation_tier = Some(tier);
                Ok(())
            }
        }
    }

    /// Plausible/improbable → expected once a correction settles the record.
    pub fn promote_expectation(&mut self) -> Result<(), TransitionError> {
        self.set_expectation(ExpectationTier::Expected)
    }

    pub fn set_confidence(&mut self, tier: ConfidenceTier) -> Result<(), TransitionError> {
        match self.confidence_tier {
            Some(current) if !current.can_advance_to(tier) => {
                Err(self.illegal("confidence_tier", current, tier))
            }
            _ => {
                self.confidence_tier = Some(tier);
                Ok(())
            }
        }
    }

    /// Apply `candidate` only when it is a forward move. Returns whether the
    /// tier changed.
    pub fn advance_confidence(&mut self, candidate: ConfidenceTier) -> bool {
        let allowed = match self.confidence_tier {
            None => true,
            Some(current) => current != candidate && current.can_advance_to(candidate),
        };
        if allowed {
            self.confidence_tier = Some(candidate);
        }
        allowed
    }

    /// Seed the resolved code with the reported code. Leaves an existing
    /// resolved code alone.
    pub fn carry_reported_code(&mut self) {
        if self.resolved_code.is_none() {
            self.resolved_code = Some(self.reported_code.clone());
        }
    }

    /// Record a corrected code with its reason. A record is resolved at most
    /// once per run.
    pub fn resolve(
        &mut self,
        code: BreedingCode,
        reason: ResolutionReason,
    ) -> Result<(), TransitionError> {
        if let Some(existing) = &self.resolution_reason {
            return Err(TransitionError::AlreadyResolved {
                id: self.id.clone(),
                reason: existing.to_string(),
            });
        }
        self.resolved_code = Some(code);
        self.resolution_reason = Some(reason);
        Ok(())
    }

    /// Replace the code of an already-resolved record, keeping its reason.
    /// Only a resolved record can be revised.
    pub fn set_resolved_code(&mut self, code: BreedingCode) -> Result<(), TransitionError> {
        if !self.is_resolved() {
            return Err(TransitionError::NotResolved {
                id: self.id.clone(),
            });
        }
        self.resolved_code = Some(code);
        Ok(())
    }

    fn illegal(
        &self,
        field: &'static str,
        from: impl ToString,
        to: impl ToString,
    ) -> TransitionError {
        TransitionError::Illegal {
            id: self.id.clone(),
            field,
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}
