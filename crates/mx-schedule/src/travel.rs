//! Travel and hospitalization.
//!
//! # Travel snapshot
//!
//! Traveling to a host saves the slot places once, on the first start that
//! is not yet matched by a stop:
//!
//! ```text
//! start_traveling(Some(a))  stored = slots (home)    slots = a's context
//! start_traveling(Some(b))  stored unchanged         slots = b's context
//! stop_traveling()          slots = stored (home)    stored = None
//! ```
//!
//! Traveling outside the modeled area (`None`) keeps the slots but turns
//! every one of them off until return.
//!
//! # Hospitalization
//!
//! A hospital stay overrides the schedule rather than replacing it: the
//! workplace and school slots keep their places and only the hospital slot
//! is active until the stay ends.

use mx_core::{Day, PersonId};
use mx_places::Groups;

use crate::{ActivityStore, ActivityType, Profile, ScheduleError, ScheduleResult};

impl ActivityStore {
    /// Start a trip.  `Some(host)` stays in the host's household (and, for
    /// workers, works at the host's workplace); `None` leaves the area.
    pub fn start_traveling(&mut self, person: PersonId, visited: Option<PersonId>, groups: &mut Groups) -> ScheduleResult<()> {
        let Some(host) = visited else {
            let rec = self.live_mut(person)?;
            rec.traveling = true;
            rec.traveling_outside = true;
            rec.stale = true;
            log::trace!("{person} travels outside the area");
            return Ok(());
        };

        let host_rec = self.record(host)?;
        let household = host_rec.household();
        let neighborhood = host_rec.neighborhood();
        let workplace = host_rec.workplace();
        let office = host_rec.office();

        let rec = self.live_mut(person)?;
        if rec.stored.is_none() {
            rec.stored = Some(rec.slots.snapshot());
        }
        let is_worker = rec.profile == Profile::Worker;

        for activity in ActivityType::ALL {
            self.set_slot(person, activity, None, groups)?;
        }
        self.set_slot(person, ActivityType::Household, household, groups)?;
        self.set_slot(person, ActivityType::Neighborhood, neighborhood, groups)?;
        if is_worker {
            self.set_slot(person, ActivityType::Workplace, workplace, groups)?;
            self.set_slot(person, ActivityType::Office, office, groups)?;
        }

        let rec = self.record_mut(person)?;
        rec.traveling = true;
        rec.traveling_outside = false;
        log::trace!("{person} visits {host}");
        Ok(())
    }

    /// End the current trip and restore the saved slots exactly.
    pub fn stop_traveling(&mut self, person: PersonId, groups: &mut Groups) -> ScheduleResult<()> {
        let rec = self.live_mut(person)?;
        if !rec.traveling {
            return Ok(());
        }
        if let Some(snapshot) = rec.stored.take() {
            for activity in ActivityType::ALL {
                self.set_slot(person, activity, snapshot[activity.index()], groups)?;
            }
        }
        let rec = self.record_mut(person)?;
        rec.traveling = false;
        rec.traveling_outside = false;
        rec.return_from_travel = None;
        rec.stale = true;
        log::trace!("{person} returns from travel");
        Ok(())
    }

    /// Schedule the automatic end of the current trip.
    pub fn set_return_from_travel_day(&mut self, person: PersonId, day: Day) -> ScheduleResult<()> {
        self.live_mut(person)?.return_from_travel = Some(day);
        Ok(())
    }

    // ── Hospitalization ───────────────────────────────────────────────────

    /// Admit to the assigned hospital for `length_of_stay` days from `day`.
    /// Any trip ends first, so a traveler is admitted to their home hospital.
    pub fn start_hospitalization(
        &mut self,
        person:         PersonId,
        day:            Day,
        length_of_stay: u32,
        groups:         &mut Groups,
    ) -> ScheduleResult<()> {
        if length_of_stay == 0 {
            return Err(ScheduleError::EmptyHospitalStay(person));
        }
        let rec = self.record(person)?;
        let home_hospital = rec.stored.and_then(|s| s[ActivityType::Hospital.index()]);
        if rec.hospital().or(home_hospital).is_none() {
            log::warn!("{person} needs hospitalization but has no hospital assigned");
            return Ok(());
        }
        self.stop_traveling(person, groups)?;

        let rec = self.live_mut(person)?;
        rec.hospitalized = true;
        rec.hospitalization_ends = Some(day + length_of_stay);
        rec.stale = true;
        log::trace!("{person} hospitalized on {day} for {length_of_stay} days");
        Ok(())
    }

    /// Discharge.  The regular schedule resumes at the next update.
    pub fn end_hospitalization(&mut self, person: PersonId) -> ScheduleResult<()> {
        let rec = self.live_mut(person)?;
        rec.hospitalized = false;
        rec.hospitalization_ends = None;
        rec.stale = true;
        Ok(())
    }
}
