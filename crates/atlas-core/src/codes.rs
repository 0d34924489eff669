//! Breeding codes, code-severity tiers, and the canonical code ladder.
//!
//! Severity is always decided by a code's rank on the [`CodeLadder`],
//! never by string order.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ReferenceError;
use crate::types::collections::FxHashMap;

/// A standardized breeding-behavior token such as `CN` or `S7`.
///
/// Codes are normalized to trimmed uppercase on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct BreedingCode(String);

impl BreedingCode {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for BreedingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for BreedingCode {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for BreedingCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<BreedingCode> for String {
    fn from(code: BreedingCode) -> Self {
        code.0
    }
}

/// Coarse grouping of breeding codes by strength of evidence.
///
/// Declaration order is severity order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeTier {
    /// The no-code sentinel.
    NoCode,
    Possible,
    Probable,
    Confirmed,
}

impl CodeTier {
    /// The breeding category a code of this tier maps to.
    pub fn category(self) -> BreedingCategory {
        match self {
            Self::NoCode => BreedingCategory::C1,
            Self::Possible => BreedingCategory::C2,
            Self::Probable => BreedingCategory::C3,
            Self::Confirmed => BreedingCategory::C4,
        }
    }
}

/// Denormalized breeding category derived from the final code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BreedingCategory {
    C1,
    C2,
    C3,
    C4,
}

impl BreedingCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::C1 => "C1",
            Self::C2 => "C2",
            Self::C3 => "C3",
            Self::C4 => "C4",
        }
    }
}

impl fmt::Display for BreedingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The canonical low→high code ordering, partitioned into tiers.
///
/// Rank 0 is always the no-code sentinel. Every other code is ranked by its
/// position in the ladder, so possible < probable < confirmed holds by
/// construction.
#[derive(Debug, Clone)]
pub struct CodeLadder {
    codes: Vec<(BreedingCode, CodeTier)>,
    index: FxHashMap<BreedingCode, usize>,
}

impl CodeLadder {
    /// Build a ladder from a sentinel and three tier lists, each low→high.
    pub fn from_tiers<S: AsRef<str>>(
        no_code: &str,
        possible: &[S],
        probable: &[S],
        confirmed: &[S],
    ) -> Result<Self, ReferenceError> {
        let mut ladder = Self {
            codes: Vec::new(),
            index: FxHashMap::default(),
        };
        ladder.push(BreedingCode::new(no_code), CodeTier::NoCode)?;
        for (tier, codes) in [
            (CodeTier::Possible, possible),
            (CodeTier::Probable, probable),
            (CodeTier::Confirmed, confirmed),
        ] {
            for code in codes {
                ladder.push(BreedingCode::new(code), tier)?;
            }
        }
        Ok(ladder)
    }

    /// The standard atlas ladder with `NC` as the sentinel.
    pub fn standard() -> Self {
        let mut codes = Vec::new();
        let mut index = FxHashMap::default();
        let tiers = [
            (CodeTier::NoCode, &[constants::DEFAULT_NO_CODE][..]),
            (CodeTier::Possible, constants::STANDARD_POSSIBLE_CODES),
            (CodeTier::Probable, constants::STANDARD_PROBABLE_CODES),
            (CodeTier::Confirmed, constants::STANDARD_CONFIRMED_CODES),
        ];
        for (tier, list) in tiers {
            for code in list {
                let code = BreedingCode::new(code);
                index.insert(code.clone(), codes.len());
                codes.push((code, tier));
            }
        }
        Self { codes, index }
    }

    fn push(&mut self, code: BreedingCode, tier: CodeTier) -> Result<(), ReferenceError> {
        if code.is_empty() {
            return Err(ReferenceError::InvalidLadder {
                reason: "empty code".to_string(),
            });
        }
        if self.index.contains_key(&code) {
            return Err(ReferenceError::InvalidLadder {
                reason: format!("duplicate code {code}"),
            });
        }
        self.index.insert(code.clone(), self.codes.len());
        self.codes.push((code, tier));
        Ok(())
    }

    /// The no-code sentinel.
    pub fn no_code(&self) -> &BreedingCode {
        &self.codes[0].0
    }

    pub fn is_no_code(&self, code: &BreedingCode) -> bool {
        code == self.no_code()
    }

    pub fn contains(&self, code: &BreedingCode) -> bool {
        self.index.contains_key(code)
    }

    /// Severity rank of a code; `None` when the code is not on the ladder.
    pub fn rank(&self, code: &BreedingCode) -> Option<usize> {
        self.index.get(code).copied()
    }

    pub fn tier(&self, code: &BreedingCode) -> Option<CodeTier> {
        self.rank(code).map(|r| self.codes[r].1)
    }

    /// Category for a code; `None` is an integrity fault for the caller.
    pub fn category(&self, code: &BreedingCode) -> Option<BreedingCategory> {
        self.tier(code).map(CodeTier::category)
    }

    /// Compare two codes by severity. Unknown codes are incomparable.
    pub fn compare(&self, a: &BreedingCode, b: &BreedingCode) -> Option<Ordering> {
        Some(self.rank(a)?.cmp(&self.rank(b)?))
    }

    /// The most severe known code of an iterator. Unknown codes are skipped.
    pub fn max_of<'a, I>(&self, codes: I) -> Option<&'a BreedingCode>
    where
        I: IntoIterator<Item = &'a BreedingCode>,
    {
        codes
            .into_iter()
            .filter_map(|c| self.rank(c).map(|r| (r, c)))
            .max_by_key(|(r, _)| *r)
            .map(|(_, c)| c)
    }

    /// Codes of one tier, low to high.
    pub fn codes_in(&self, tier: CodeTier) -> impl Iterator<Item = &BreedingCode> {
        self.codes
            .iter()
            .filter(move |(_, t)| *t == tier)
            .map(|(c, _)| c)
    }

    /// All codes, low to high, including the sentinel.
    pub fn iter(&self) -> impl Iterator<Item = (&BreedingCode, CodeTier)> {
        self.codes.iter().map(|(c, t)| (c, *t))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for CodeLadder {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_normalize_to_uppercase() {
        assert_eq!(BreedingCode::new(" cn "), BreedingCode::new("CN"));
    }

    #[test]
    fn standard_ladder_orders_tiers() {
        let ladder = CodeLadder::standard();
        let s = BreedingCode::new("S");
        let s7 = BreedingCode::new("S7");
        let pe = BreedingCode::new("PE");
        assert_eq!(ladder.compare(&s, &s7), Some(Ordering::Less));
        assert_eq!(ladder.compare(&s7, &pe), Some(Ordering::Less));
        assert_eq!(ladder.tier(&BreedingCode::new("NC")), Some(CodeTier::NoCode));
        assert_eq!(ladder.rank(&BreedingCode::new("ZZ")), None);
    }

    #[test]
    fn duplicate_code_is_rejected() {
        let err = CodeLadder::from_tiers("NC", &["H"], &["H"], &["NY"]).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }
}
