//! The ordered confidence rule table.
//!
//! Rules are data: each names the phases, location condition, and code
//! tiers it covers, plus optional species and code literals. Evaluation
//! walks the table in order and the first matching rule wins.

use atlas_core::constants::{VULTURE_EARLY_SEASON_CODE, VULTURE_SPECIES};
use atlas_core::{BreedingCode, CodeTier, ConfidenceTier, Phase};

/// Condition on whether the species is expected at the location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HereCondition {
    Any,
    Expected,
    NotExpected,
}

impl HereCondition {
    fn matches(self, expected_here: bool) -> bool {
        match self {
            Self::Any => true,
            Self::Expected => expected_here,
            Self::NotExpected => !expected_here,
        }
    }
}

/// One row of the rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierRule {
    pub name: &'static str,
    pub phases: Vec<Phase>,
    pub here: HereCondition,
    pub code_tiers: Vec<CodeTier>,
    /// When set, only these species match.
    pub species: Option<Vec<String>>,
    /// When set, only this working code matches.
    pub code: Option<BreedingCode>,
    pub result: ConfidenceTier,
}

impl TierRule {
    fn new(
        name: &'static str,
        phases: &[Phase],
        here: HereCondition,
        code_tiers: &[CodeTier],
        result: ConfidenceTier,
    ) -> Self {
        Self {
            name,
            phases: phases.to_vec(),
            here,
            code_tiers: code_tiers.to_vec(),
            species: None,
            code: None,
            result,
        }
    }

    fn for_species(mut self, species: &[&str]) -> Self {
        self.species = Some(species.iter().map(|s| s.to_string()).collect());
        self
    }

    fn for_code(mut self, code: BreedingCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn matches(&self, input: &RuleInput<'_>) -> bool {
        self.phases.contains(&input.phase)
            && self.here.matches(input.expected_here)
            && self.code_tiers.contains(&input.code_tier)
            && self
                .species
                .as_ref()
                .map_or(true, |list| list.iter().any(|s| s == input.species))
            && self.code.as_ref().map_or(true, |c| c == input.code)
    }
}

/// Everything a rule can look at.
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    pub species: &'a str,
    pub phase: Phase,
    pub expected_here: bool,
    pub code: &'a BreedingCode,
    pub code_tier: CodeTier,
}

/// Ordered rules, first match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<TierRule>,
}

impl RuleTable {
    pub fn new(rules: Vec<TierRule>) -> Self {
        Self { rules }
    }

    /// The standard atlas rules. `flyover_code` is the possible-tier code
    /// that stays uncertain in core breeding away from expected locations.
    pub fn standard(flyover_code: &BreedingCode) -> Self {
        use CodeTier::{Confirmed, NoCode, Possible, Probable};
        use ConfidenceTier::{Confident, Uncertain, Unlikely};
        use HereCondition::{Any, Expected, NotExpected};
        use Phase::{Breeding, Early, Late, Post, Pre};

        let all_phases = &Phase::ALL[..];
        let early_late = &[Early, Late][..];
        let pre_post = &[Pre, Post][..];

        Self::new(vec![
            TierRule::new("no-code", all_phases, Any, &[NoCode], Confident),
            TierRule::new("vulture-early-season", &[Early], Expected, &[Probable], Confident)
                .for_species(VULTURE_SPECIES)
                .for_code(BreedingCode::new(VULTURE_EARLY_SEASON_CODE)),
            TierRule::new("off-season-confirmed-expected", early_late, Expected, &[Confirmed], Confident),
            TierRule::new("off-season-confirmed-unexpected", early_late, NotExpected, &[Confirmed], Uncertain),
            TierRule::new("off-season-weak", early_late, Any, &[Possible, Probable], Unlikely),
            TierRule::new("shoulder-strong-expected", pre_post, Expected, &[Probable, Confirmed], Confident),
            TierRule::new("shoulder-strong-unexpected", pre_post, NotExpected, &[Probable, Confirmed], Uncertain),
            TierRule::new("shoulder-possible", pre_post, Any, &[Possible], Unlikely),
            TierRule::new("breeding-expected", &[Breeding], Expected, &[Possible, Probable, Confirmed], Confident),
            TierRule::new("breeding-flyover", &[Breeding], NotExpected, &[Possible], Uncertain)
                .for_code(flyover_code.clone()),
            TierRule::new("breeding-unexpected", &[Breeding], NotExpected, &[Possible, Confirmed], Confident),
            TierRule::new("breeding-unexpected-probable", &[Breeding], NotExpected, &[Probable], Uncertain),
        ])
    }

    /// The first rule matching `input`.
    pub fn find_applicable_rule(&self, input: &RuleInput<'_>) -> Option<&TierRule> {
        self.rules.iter().find(|r| r.matches(input))
    }

    pub fn rules(&self) -> &[TierRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
