//! Activity slots: `ActivityType`, `Slot`, and the fixed-size `ActivitySlots`.
//!
//! # Slot model
//!
//! Every agent has exactly one slot per `ActivityType`.  A slot pairs an
//! optional place reference with an "on schedule" flag and the agent's
//! position in that place's roster while present:
//!
//! ```text
//! slots[Household] = Slot { place: Some(PlaceId(12)), on_schedule: true,  enrollee_index: Some(3) }
//! slots[School]    = Slot { place: Some(PlaceId(40)), on_schedule: false, enrollee_index: None    }
//! slots[Hospital]  = Slot { place: None,              on_schedule: false, enrollee_index: None    }
//! ```
//!
//! `enrollee_index` is `Some` exactly when the agent is in the place's
//! roster.  It is kept in step with the roster by the store's presence
//! reconciliation, never written directly.

use std::fmt;
use std::ops::{Index, IndexMut};

use mx_core::PlaceId;
use mx_places::PlaceType;

use crate::ScheduleError;

// ── ActivityType ──────────────────────────────────────────────────────────────

/// The closed set of daily activity slots, in slot order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActivityType {
    Household,
    Neighborhood,
    School,
    Classroom,
    Workplace,
    Office,
    Hospital,
    AdHoc,
}

impl ActivityType {
    pub const COUNT: usize = 8;

    pub const ALL: [ActivityType; Self::COUNT] = [
        ActivityType::Household,
        ActivityType::Neighborhood,
        ActivityType::School,
        ActivityType::Classroom,
        ActivityType::Workplace,
        ActivityType::Office,
        ActivityType::Hospital,
        ActivityType::AdHoc,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityType::Household    => "Household",
            ActivityType::Neighborhood => "Neighborhood",
            ActivityType::School       => "School",
            ActivityType::Classroom    => "Classroom",
            ActivityType::Workplace    => "Workplace",
            ActivityType::Office       => "Office",
            ActivityType::Hospital     => "Hospital",
            ActivityType::AdHoc        => "Ad_hoc",
        }
    }

    /// The place type a slot of this kind normally points at.  The
    /// workplace slot may also point at a school (teachers) or a hospital
    /// (hospital staff).
    pub fn place_type(self) -> PlaceType {
        match self {
            ActivityType::Household    => PlaceType::Household,
            ActivityType::Neighborhood => PlaceType::Neighborhood,
            ActivityType::School       => PlaceType::School,
            ActivityType::Classroom    => PlaceType::Classroom,
            ActivityType::Workplace    => PlaceType::Workplace,
            ActivityType::Office       => PlaceType::Office,
            ActivityType::Hospital     => PlaceType::Hospital,
            ActivityType::AdHoc        => PlaceType::Community,
        }
    }
}

impl TryFrom<usize> for ActivityType {
    type Error = ScheduleError;

    fn try_from(n: usize) -> Result<Self, ScheduleError> {
        ActivityType::ALL.get(n).copied().ok_or(ScheduleError::InvalidSlot(n))
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Slot ──────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    pub place: Option<PlaceId>,
    pub on_schedule: bool,
    pub(crate) enrollee_index: Option<usize>,
}

impl Slot {
    /// `true` while the agent is in the place's roster.
    #[inline]
    pub fn is_present(&self) -> bool {
        self.enrollee_index.is_some()
    }

    #[inline]
    pub fn enrollee_index(&self) -> Option<usize> {
        self.enrollee_index
    }
}

/// The place references of all slots, saved while traveling.
pub type SlotSnapshot = [Option<PlaceId>; ActivityType::COUNT];

// ── ActivitySlots ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivitySlots([Slot; ActivityType::COUNT]);

impl ActivitySlots {
    #[inline]
    pub fn place(&self, activity: ActivityType) -> Option<PlaceId> {
        self.0[activity.index()].place
    }

    #[inline]
    pub fn is_on(&self, activity: ActivityType) -> bool {
        self.0[activity.index()].on_schedule
    }

    pub fn snapshot(&self) -> SlotSnapshot {
        self.0.map(|s| s.place)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActivityType, &Slot)> {
        ActivityType::ALL.into_iter().zip(self.0.iter())
    }

    /// Activity types whose slot references a place, in slot order.
    pub fn assigned(&self) -> impl Iterator<Item = (ActivityType, PlaceId)> + '_ {
        self.iter().filter_map(|(a, s)| s.place.map(|p| (a, p)))
    }
}

impl Index<ActivityType> for ActivitySlots {
    type Output = Slot;

    #[inline]
    fn index(&self, activity: ActivityType) -> &Slot {
        &self.0[activity.index()]
    }
}

impl IndexMut<ActivityType> for ActivitySlots {
    #[inline]
    fn index_mut(&mut self, activity: ActivityType) -> &mut Slot {
        &mut self.0[activity.index()]
    }
}
