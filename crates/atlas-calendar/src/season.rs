//! SeasonCalendar: every species' calendar, built once per run.

use atlas_core::errors::{CalendarError, TransitionError};
use atlas_core::types::collections::FxHashMap;
use atlas_core::{DayOfYear, Observation, Phase};
use atlas_reference::ReferenceTables;
use tracing::{debug, error, info};

use crate::calendar::SpeciesCalendar;

/// Calendars for all species with configured anchors.
///
/// Species whose calendar failed validation are absent; their faults are
/// returned from [`SeasonCalendar::build`] so the caller can quarantine them.
#[derive(Debug, Clone, Default)]
pub struct SeasonCalendar {
    by_species: FxHashMap<String, SpeciesCalendar>,
}

impl SeasonCalendar {
    /// Derive one calendar per anchored species. Faulty species are skipped
    /// and reported, never silently dropped.
    pub fn build(tables: &ReferenceTables) -> (Self, Vec<CalendarError>) {
        let mut by_species = FxHashMap::default();
        let mut faults = Vec::new();

        for (species, anchors) in tables.anchors() {
            match SpeciesCalendar::from_anchors(species, anchors) {
                Ok(calendar) => {
                    debug!(species = %species, calendar = %calendar, "season calendar derived");
                    by_species.insert(species.clone(), calendar);
                }
                Err(e) => {
                    error!(species = %species, error = %e, "season calendar rejected");
                    faults.push(e);
                }
            }
        }

        info!(
            calendars = by_species.len(),
            faults = faults.len(),
            "season calendars built"
        );
        (Self { by_species }, faults)
    }

    /// Assemble from prebuilt calendars.
    pub fn from_calendars(calendars: impl IntoIterator<Item = SpeciesCalendar>) -> Self {
        Self {
            by_species: calendars
                .into_iter()
                .map(|c| (c.species().to_string(), c))
                .collect(),
        }
    }

    pub fn get(&self, species: &str) -> Option<&SpeciesCalendar> {
        self.by_species.get(species)
    }

    pub fn contains(&self, species: &str) -> bool {
        self.by_species.contains_key(species)
    }

    /// Phase of `day` for `species`. `None` only when the species has no
    /// calendar.
    pub fn classify_day(&self, species: &str, day: DayOfYear) -> Option<Phase> {
        self.get(species)?.classify_day(day)
    }

    /// Write the record's phase. Returns the phase, or `None` when the
    /// species has no calendar and the field stays unset.
    pub fn assign_phase(&self, obs: &mut Observation) -> Result<Option<Phase>, TransitionError> {
        let Some(phase) = self.classify_day(&obs.species, obs.day_of_year()) else {
            return Ok(None);
        };
        obs.set_phase(phase)?;
        Ok(Some(phase))
    }

    pub fn len(&self) -> usize {
        self.by_species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_species.is_empty()
    }

    /// Species names, sorted.
    pub fn species(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_species.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
