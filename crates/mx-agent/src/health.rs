//! Per-condition health state and the exposure log.
//!
//! `HealthStore` holds one row per (condition, person) pair, laid out
//! condition-major so a transmission pass over one condition reads a single
//! contiguous slice.

use mx_core::{ConditionId, Day, GroupId, PersonId};

/// Where a person stands with respect to one condition.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfectionState {
    #[default]
    Susceptible,
    /// Infected but not yet shedding.
    Exposed,
    Infectious,
    Recovered,
}

/// One committed transmission event.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exposure {
    pub infector:  PersonId,
    pub infectee:  PersonId,
    pub condition: ConditionId,
    pub source:    GroupId,
    pub day:       Day,
}

#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct HealthRecord {
    state:          InfectionState,
    infectivity:    f64,
    susceptibility: f64,
    symptomatic:    bool,
    exposure_day:   Option<Day>,
}

impl Default for HealthRecord {
    fn default() -> Self {
        Self {
            state:          InfectionState::Susceptible,
            infectivity:    0.0,
            susceptibility: 1.0,
            symptomatic:    false,
            exposure_day:   None,
        }
    }
}

// ── HealthStore ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthStore {
    conditions: usize,
    /// `records[condition][person]`.
    records: Vec<Vec<HealthRecord>>,
    exposures: Vec<Exposure>,
}

impl HealthStore {
    pub fn new(conditions: usize) -> Self {
        Self {
            conditions,
            records: vec![Vec::new(); conditions],
            exposures: Vec::new(),
        }
    }

    #[inline]
    pub fn condition_count(&self) -> usize {
        self.conditions
    }

    /// Grow every condition table by one default (susceptible) row.
    pub fn push_person(&mut self) {
        for table in &mut self.records {
            table.push(HealthRecord::default());
        }
    }

    #[inline]
    fn record(&self, person: PersonId, condition: ConditionId) -> Option<&HealthRecord> {
        self.records.get(condition.index())?.get(person.index())
    }

    #[inline]
    fn record_mut(&mut self, person: PersonId, condition: ConditionId) -> Option<&mut HealthRecord> {
        self.records.get_mut(condition.index())?.get_mut(person.index())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Unknown (person, condition) pairs read as susceptible.
    pub fn state(&self, person: PersonId, condition: ConditionId) -> InfectionState {
        self.record(person, condition).map_or(InfectionState::Susceptible, |r| r.state)
    }

    pub fn is_susceptible(&self, person: PersonId, condition: ConditionId) -> bool {
        self.record(person, condition)
            .is_some_and(|r| r.state == InfectionState::Susceptible && r.susceptibility > 0.0)
    }

    pub fn is_infectious(&self, person: PersonId, condition: ConditionId) -> bool {
        self.state(person, condition) == InfectionState::Infectious
    }

    pub fn is_symptomatic(&self, person: PersonId, condition: ConditionId) -> bool {
        self.record(person, condition).is_some_and(|r| r.symptomatic)
    }

    pub fn infectivity(&self, person: PersonId, condition: ConditionId) -> f64 {
        match self.record(person, condition) {
            Some(r) if r.state == InfectionState::Infectious => r.infectivity,
            _ => 0.0,
        }
    }

    pub fn susceptibility(&self, person: PersonId, condition: ConditionId) -> f64 {
        self.record(person, condition).map_or(0.0, |r| r.susceptibility)
    }

    pub fn exposure_day(&self, person: PersonId, condition: ConditionId) -> Option<Day> {
        self.record(person, condition).and_then(|r| r.exposure_day)
    }

    /// Every committed transmission, in commit order.
    pub fn exposures(&self) -> &[Exposure] {
        &self.exposures
    }

    // ── Setters ───────────────────────────────────────────────────────────

    /// Move `person` to `Infectious` with the given infectivity.
    pub fn set_infectious(&mut self, person: PersonId, condition: ConditionId, infectivity: f64) {
        if let Some(r) = self.record_mut(person, condition) {
            r.state = InfectionState::Infectious;
            r.infectivity = infectivity.max(0.0);
        }
    }

    pub fn set_symptomatic(&mut self, person: PersonId, condition: ConditionId, symptomatic: bool) {
        if let Some(r) = self.record_mut(person, condition) {
            r.symptomatic = symptomatic;
        }
    }

    pub fn set_susceptibility(&mut self, person: PersonId, condition: ConditionId, value: f64) {
        if let Some(r) = self.record_mut(person, condition) {
            r.susceptibility = value.clamp(0.0, 1.0);
        }
    }

    pub fn recover(&mut self, person: PersonId, condition: ConditionId) {
        if let Some(r) = self.record_mut(person, condition) {
            r.state = InfectionState::Recovered;
            r.infectivity = 0.0;
            r.symptomatic = false;
        }
    }

    /// Commit a transmission.  The infectee moves to `Exposed` and the event
    /// is appended to the exposure log.  A non-susceptible infectee is left
    /// untouched.
    pub fn expose(&mut self, exposure: Exposure) -> bool {
        let Some(r) = self.record_mut(exposure.infectee, exposure.condition) else {
            return false;
        };
        if r.state != InfectionState::Susceptible {
            return false;
        }
        r.state = InfectionState::Exposed;
        r.exposure_day = Some(exposure.day);
        log::trace!(
            "{} exposed {} to condition {} in {} on {}",
            exposure.infector, exposure.infectee, exposure.condition, exposure.source, exposure.day
        );
        self.exposures.push(exposure);
        true
    }
}
