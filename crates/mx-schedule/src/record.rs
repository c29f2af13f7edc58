//! The per-agent schedule record.

use mx_core::{ConditionId, Day, NetworkId, PlaceId};

use crate::{ActivitySlots, ActivityType, Profile, SlotSnapshot};

/// Paid sick-leave state of one employee.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SickLeave {
    pub available: bool,
    pub days_remaining: f64,
    /// Whether to stay home when symptomatic.  Drawn on first need and
    /// reused for the rest of the run.
    pub(crate) decision: Option<bool>,
}

impl SickLeave {
    pub fn decision(&self) -> Option<bool> {
        self.decision
    }
}

/// A joined network and this agent's position in its roster.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkMembership {
    pub network: NetworkId,
    pub(crate) enrollee_index: usize,
}

// ── Activities ────────────────────────────────────────────────────────────────

/// Everything the schedule manager knows about one agent.
///
/// Status flags are orthogonal: an agent may be traveling, hospitalized and
/// confined at once.  Evaluation precedence lives in
/// [`ActivityStore::update_schedule`][crate::ActivityStore::update_schedule].
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Activities {
    pub(crate) slots: ActivitySlots,
    /// Pre-travel slot places.  `Some` only while traveling to a host.
    pub(crate) stored: Option<SlotSnapshot>,
    pub(crate) networks: Vec<NetworkMembership>,
    pub(crate) home_neighborhood: Option<PlaceId>,
    pub(crate) profile: Profile,

    pub(crate) traveling: bool,
    pub(crate) traveling_outside: bool,
    pub(crate) return_from_travel: Option<Day>,

    pub(crate) hospitalized: bool,
    pub(crate) hospitalization_ends: Option<Day>,

    pub(crate) confined: Vec<bool>,
    pub(crate) contact_traced: bool,

    pub(crate) schedule_updated: Option<Day>,
    /// Set by every state change; cleared by `update_schedule`.
    pub(crate) stale: bool,

    pub(crate) last_school: Option<PlaceId>,
    pub(crate) grade: u8,
    pub(crate) sick_leave: SickLeave,
    pub(crate) terminated: bool,
}

impl Activities {
    pub(crate) fn new(conditions: usize) -> Self {
        Self {
            confined: vec![false; conditions],
            stale: true,
            ..Self::default()
        }
    }

    // ── Slots ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn slots(&self) -> &ActivitySlots {
        &self.slots
    }

    #[inline]
    pub fn place(&self, activity: ActivityType) -> Option<PlaceId> {
        self.slots.place(activity)
    }

    #[inline]
    pub fn is_on_schedule(&self, activity: ActivityType) -> bool {
        self.slots.is_on(activity)
    }

    pub fn household(&self) -> Option<PlaceId> {
        self.place(ActivityType::Household)
    }

    pub fn neighborhood(&self) -> Option<PlaceId> {
        self.place(ActivityType::Neighborhood)
    }

    pub fn school(&self) -> Option<PlaceId> {
        self.place(ActivityType::School)
    }

    pub fn classroom(&self) -> Option<PlaceId> {
        self.place(ActivityType::Classroom)
    }

    pub fn workplace(&self) -> Option<PlaceId> {
        self.place(ActivityType::Workplace)
    }

    pub fn office(&self) -> Option<PlaceId> {
        self.place(ActivityType::Office)
    }

    pub fn hospital(&self) -> Option<PlaceId> {
        self.place(ActivityType::Hospital)
    }

    pub fn ad_hoc(&self) -> Option<PlaceId> {
        self.place(ActivityType::AdHoc)
    }

    pub fn home_neighborhood(&self) -> Option<PlaceId> {
        self.home_neighborhood
    }

    /// The saved pre-travel slots, if any.
    pub fn stored_slots(&self) -> Option<&SlotSnapshot> {
        self.stored.as_ref()
    }

    pub fn networks(&self) -> impl Iterator<Item = NetworkId> + '_ {
        self.networks.iter().map(|m| m.network)
    }

    pub fn is_enrolled_in_network(&self, network: NetworkId) -> bool {
        self.networks.iter().any(|m| m.network == network)
    }

    // ── Profile ───────────────────────────────────────────────────────────

    #[inline]
    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn is_student(&self) -> bool {
        self.profile == Profile::Student
    }

    pub fn is_teacher(&self) -> bool {
        self.profile == Profile::Teacher
    }

    pub fn is_employed(&self) -> bool {
        self.workplace().is_some()
    }

    pub fn grade(&self) -> u8 {
        self.grade
    }

    pub fn last_school(&self) -> Option<PlaceId> {
        self.last_school
    }

    // ── Status ────────────────────────────────────────────────────────────

    pub fn is_traveling(&self) -> bool {
        self.traveling
    }

    pub fn is_traveling_outside(&self) -> bool {
        self.traveling_outside
    }

    pub fn return_from_travel_day(&self) -> Option<Day> {
        self.return_from_travel
    }

    pub fn is_hospitalized(&self) -> bool {
        self.hospitalized
    }

    pub fn hospitalization_ends(&self) -> Option<Day> {
        self.hospitalization_ends
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub fn schedule_updated(&self) -> Option<Day> {
        self.schedule_updated
    }

    pub fn sick_leave(&self) -> &SickLeave {
        &self.sick_leave
    }

    pub fn is_sick_leave_available(&self) -> bool {
        self.sick_leave.available
    }

    // ── Confinement ───────────────────────────────────────────────────────

    /// Confine to the household for `condition`.  Also raises the general
    /// contact-tracing flag.
    pub fn confine_to_household(&mut self, condition: ConditionId) {
        if let Some(flag) = self.confined.get_mut(condition.index()) {
            *flag = true;
        }
        self.contact_traced = true;
        self.stale = true;
    }

    /// Lift the confinement for `condition`.  The general flag drops only
    /// once no condition is confined.
    pub fn clear_confinement_to_household(&mut self, condition: ConditionId) {
        if let Some(flag) = self.confined.get_mut(condition.index()) {
            *flag = false;
        }
        if !self.confined.iter().any(|&c| c) {
            self.contact_traced = false;
        }
        self.stale = true;
    }

    pub fn is_confined_for(&self, condition: ConditionId) -> bool {
        self.confined.get(condition.index()).copied().unwrap_or(false)
    }

    /// `true` if confined for any reason.
    pub fn is_confined_to_household(&self) -> bool {
        self.contact_traced || self.confined.iter().any(|&c| c)
    }

    /// Raise only the general contact-tracing flag.
    pub fn set_contact_traced(&mut self) {
        self.contact_traced = true;
        self.stale = true;
    }
}
