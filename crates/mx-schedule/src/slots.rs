//! Slot assignment operations on `ActivityStore`.

use mx_core::{PersonId, PlaceId};
use mx_places::{Groups, PlaceType};

use crate::{ActivityStore, ActivityType, Profile, ScheduleResult};

impl ActivityStore {
    /// Set slot number `index` directly.  An index outside the eight
    /// activity types is an error.
    pub fn set_daily_activity_location(
        &mut self,
        person: PersonId,
        index:  usize,
        place:  Option<PlaceId>,
        groups: &mut Groups,
    ) -> ScheduleResult<()> {
        let activity = ActivityType::try_from(index)?;
        self.set_slot(person, activity, place, groups)
    }

    /// Move to `household`.  The neighborhood follows the household and
    /// becomes the remembered home neighborhood.
    pub fn change_household(&mut self, person: PersonId, household: PlaceId, groups: &mut Groups) -> ScheduleResult<()> {
        let neighborhood = groups.place(household)?.neighborhood;
        self.set_slot(person, ActivityType::Household, Some(household), groups)?;
        self.set_slot(person, ActivityType::Neighborhood, neighborhood, groups)?;
        self.record_mut(person)?.home_neighborhood = neighborhood;
        Ok(())
    }

    /// Point the neighborhood slot back at the home neighborhood.
    pub fn reset_neighborhood(&mut self, person: PersonId, groups: &mut Groups) -> ScheduleResult<()> {
        let home = self.record(person)?.home_neighborhood;
        self.set_slot(person, ActivityType::Neighborhood, home, groups)
    }

    pub fn set_neighborhood(&mut self, person: PersonId, neighborhood: Option<PlaceId>, groups: &mut Groups) -> ScheduleResult<()> {
        self.set_slot(person, ActivityType::Neighborhood, neighborhood, groups)
    }

    // ── School ────────────────────────────────────────────────────────────

    /// Enroll in `school`, remember it as the last school, and pick a
    /// classroom for the current grade.
    pub fn assign_school(&mut self, person: PersonId, school: PlaceId, groups: &mut Groups) -> ScheduleResult<()> {
        self.set_slot(person, ActivityType::School, Some(school), groups)?;
        self.record_mut(person)?.last_school = Some(school);
        self.assign_classroom(person, groups)
    }

    /// Return to the last school attended.  Does nothing for people already
    /// in school or who never attended one.
    pub fn reenter_last_school(&mut self, person: PersonId, groups: &mut Groups) -> ScheduleResult<bool> {
        let rec = self.record(person)?;
        match (rec.school(), rec.last_school) {
            (None, Some(school)) => {
                self.change_school(person, Some(school), groups)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Pick a classroom of the assigned school matching the grade.
    pub fn assign_classroom(&mut self, person: PersonId, groups: &mut Groups) -> ScheduleResult<()> {
        let rec = self.record(person)?;
        let (Some(school), grade) = (rec.school(), rec.grade) else {
            return Ok(());
        };
        let room = groups.assign_room(school, Some(grade))?;
        if room.is_none() {
            log::debug!("no grade {grade} classroom in {school} for {person}");
        }
        self.set_slot(person, ActivityType::Classroom, room, groups)
    }

    /// Switch schools, or leave school with `None`.
    pub fn change_school(&mut self, person: PersonId, school: Option<PlaceId>, groups: &mut Groups) -> ScheduleResult<()> {
        let before = self.record(person)?.school();
        match (before, school) {
            (None, Some(_)) => self.stats.entered_school += 1,
            (Some(_), None) => self.stats.left_school += 1,
            _ => {}
        }
        self.set_slot(person, ActivityType::Classroom, None, groups)?;
        match school {
            Some(s) => self.assign_school(person, s, groups),
            None => self.set_slot(person, ActivityType::School, None, groups),
        }
    }

    // ── Work ──────────────────────────────────────────────────────────────

    /// Assign a workplace.  A school as workplace makes the person a teacher.
    pub fn assign_workplace(&mut self, person: PersonId, workplace: PlaceId, groups: &mut Groups) -> ScheduleResult<()> {
        let is_school = groups.place(workplace)?.place_type == PlaceType::School;
        self.set_slot(person, ActivityType::Workplace, Some(workplace), groups)?;
        if is_school {
            self.record_mut(person)?.profile = Profile::Teacher;
        }
        Ok(())
    }

    /// Pick an office of the assigned workplace.  A workplace without
    /// offices leaves the slot empty with a warning.
    pub fn assign_office(&mut self, person: PersonId, groups: &mut Groups) -> ScheduleResult<()> {
        let Some(workplace) = self.record(person)?.workplace() else {
            return Ok(());
        };
        if groups.place(workplace)?.place_type == PlaceType::School {
            return Ok(());
        }
        let office = groups.assign_room(workplace, None)?;
        if office.is_none() {
            log::warn!("no office to assign in {workplace} for {person}");
        }
        self.set_slot(person, ActivityType::Office, office, groups)
    }

    /// Switch workplaces, or stop working with `None`.  With `include_office`
    /// an office in the new workplace is assigned too.
    pub fn change_workplace(
        &mut self,
        person:         PersonId,
        workplace:      Option<PlaceId>,
        include_office: bool,
        groups:         &mut Groups,
    ) -> ScheduleResult<()> {
        self.set_slot(person, ActivityType::Office, None, groups)?;
        match workplace {
            Some(w) => {
                self.assign_workplace(person, w, groups)?;
                if include_office {
                    self.assign_office(person, groups)?;
                }
                Ok(())
            }
            None => self.set_slot(person, ActivityType::Workplace, None, groups),
        }
    }

    // ── Hospital / ad hoc ─────────────────────────────────────────────────

    /// The hospital used for admissions.  Only active while hospitalized.
    pub fn assign_hospital(&mut self, person: PersonId, hospital: Option<PlaceId>, groups: &mut Groups) -> ScheduleResult<()> {
        self.set_slot(person, ActivityType::Hospital, hospital, groups)
    }

    pub fn assign_ad_hoc_place(&mut self, person: PersonId, place: PlaceId, groups: &mut Groups) -> ScheduleResult<()> {
        self.set_slot(person, ActivityType::AdHoc, Some(place), groups)
    }

    pub fn unassign_ad_hoc_place(&mut self, person: PersonId, groups: &mut Groups) -> ScheduleResult<()> {
        self.set_slot(person, ActivityType::AdHoc, None, groups)
    }
}
