//! Places: households, schools, workplaces and the rooms inside them.

use std::fmt;

use mx_core::{Day, PersonId, PlaceId};

use crate::roster::{Removal, Roster};

/// What kind of venue a place is.  One activity slot exists per type.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaceType {
    Household,
    Neighborhood,
    School,
    Classroom,
    Workplace,
    Office,
    Hospital,
    /// Ad-hoc venues visited outside the regular schedule.
    Community,
}

impl PlaceType {
    pub fn label(self) -> &'static str {
        match self {
            PlaceType::Household    => "household",
            PlaceType::Neighborhood => "neighborhood",
            PlaceType::School       => "school",
            PlaceType::Classroom    => "classroom",
            PlaceType::Workplace    => "workplace",
            PlaceType::Office       => "office",
            PlaceType::Hospital     => "hospital",
            PlaceType::Community    => "community",
        }
    }
}

impl fmt::Display for PlaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Group-quarters and facility subtypes.  They override the profile
/// normally derived from age.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaceSubtype {
    #[default]
    None,
    CollegeDorm,
    Prison,
    MilitaryBase,
    NursingHome,
    HealthcareClinic,
}

impl PlaceSubtype {
    /// `true` for the residential group-quarters subtypes.
    pub fn is_group_quarters(self) -> bool {
        matches!(
            self,
            PlaceSubtype::CollegeDorm
                | PlaceSubtype::Prison
                | PlaceSubtype::MilitaryBase
                | PlaceSubtype::NursingHome
        )
    }
}

// ── Place ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    pub id:         PlaceId,
    pub label:      String,
    pub place_type: PlaceType,
    pub subtype:    PlaceSubtype,

    /// Households only: the surrounding neighborhood.
    pub neighborhood: Option<PlaceId>,

    /// Households only: income quartile, 0 (lowest) to 3.
    pub income_quartile: Option<u8>,

    /// Classrooms only: the grade taught.
    pub grade: Option<u8>,

    /// Classrooms and offices only: the school or workplace containing it.
    pub parent: Option<PlaceId>,

    /// Schools and workplaces: classrooms or offices, in creation order.
    pub rooms: Vec<PlaceId>,
    pub(crate) next_room: usize,

    /// Closed on days in `[from, until)`.
    closure: Option<(Day, Day)>,

    /// People whose schedule points at this place, present today or not.
    assigned: u32,

    roster: Roster,
}

impl Place {
    pub fn new(id: PlaceId, label: impl Into<String>, place_type: PlaceType) -> Self {
        Self {
            id,
            label: label.into(),
            place_type,
            subtype: PlaceSubtype::None,
            neighborhood: None,
            income_quartile: None,
            grade: None,
            parent: None,
            rooms: Vec::new(),
            next_room: 0,
            closure: None,
            assigned: 0,
            roster: Roster::default(),
        }
    }

    // ── Open / closed ─────────────────────────────────────────────────────

    /// Households never close.
    pub fn is_open(&self, day: Day) -> bool {
        if self.place_type == PlaceType::Household {
            return true;
        }
        match self.closure {
            Some((from, until)) => !(from <= day && day < until),
            None => true,
        }
    }

    /// Close for `days` days starting at `from`.
    pub fn close(&mut self, from: Day, days: u32) {
        log::debug!("closing {} ({}) from {from} for {days} days", self.label, self.place_type);
        self.closure = Some((from, from + days));
    }

    pub fn reopen(&mut self) {
        self.closure = None;
    }

    // ── Presence ──────────────────────────────────────────────────────────

    pub fn enroll(&mut self, person: PersonId) -> usize {
        self.roster.enroll(person)
    }

    pub fn unenroll(&mut self, index: usize) -> Option<Removal> {
        self.roster.remove(index)
    }

    /// People present today.
    #[inline]
    pub fn members(&self) -> &[PersonId] {
        self.roster.as_slice()
    }

    #[inline]
    pub fn present(&self) -> usize {
        self.roster.len()
    }

    // ── Assignment count ──────────────────────────────────────────────────

    /// Number of people assigned here regardless of presence.  Used as the
    /// place size for sick-leave buckets and contact degree.
    #[inline]
    pub fn size(&self) -> usize {
        self.assigned as usize
    }

    pub fn add_assigned(&mut self) {
        self.assigned += 1;
    }

    pub fn remove_assigned(&mut self) {
        self.assigned = self.assigned.saturating_sub(1);
    }
}
