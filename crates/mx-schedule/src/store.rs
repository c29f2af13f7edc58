//! `ActivityStore`: schedule records for the whole population.
//!
//! # Daily cycle
//!
//! ```text
//! update(day)
//!   ├─ end hospital stays whose end day has arrived
//!   ├─ end trips whose return day has arrived
//!   └─ update_schedule(person, day)  for every live person, id order
//!        ├─ decide which slots are on today
//!        └─ reconcile presence: leave slots turned off, enter slots turned on
//! ```
//!
//! Only the reconciliation step touches place rosters.  Everything else
//! (slot assignment, travel, confinement) edits the record and marks it
//! stale; the next `update_schedule` brings rosters in line.
//!
//! # Determinism
//!
//! Every draw goes through the `&mut SimRng` passed in, in a fixed order
//! per person (weekend-worker draw at setup; work absenteeism, school
//! absenteeism, sick-leave decision, school stay-home draw in
//! `update_schedule`).  People are visited in id order.

use mx_agent::Hosts;
use mx_core::{ConditionId, Day, GroupId, PersonId, PlaceId, SimCalendar, SimRng};
use mx_network::LinkStore;
use mx_places::{Groups, PlaceType};

use crate::{
    Activities, ActivitiesConfig, ActivityStats, ActivityType, Profile, ScheduleError,
    ScheduleResult,
};

pub struct ActivityStore {
    pub(crate) records:    Vec<Activities>,
    pub(crate) links:      LinkStore,
    pub(crate) config:     ActivitiesConfig,
    pub(crate) calendar:   SimCalendar,
    pub(crate) conditions: usize,
    pub(crate) stats:      ActivityStats,
}

impl ActivityStore {
    /// Create an empty store for a run tracking `conditions` conditions.
    pub fn new(config: ActivitiesConfig, calendar: SimCalendar, conditions: usize) -> ScheduleResult<Self> {
        config.validate()?;
        Ok(Self {
            records: Vec::new(),
            links: LinkStore::new(),
            config,
            calendar,
            conditions,
            stats: ActivityStats::default(),
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn config(&self) -> &ActivitiesConfig {
        &self.config
    }

    pub fn calendar(&self) -> &SimCalendar {
        &self.calendar
    }

    pub fn stats(&self) -> &ActivityStats {
        &self.stats
    }

    pub fn links(&self) -> &LinkStore {
        &self.links
    }

    pub fn record(&self, person: PersonId) -> ScheduleResult<&Activities> {
        self.records.get(person.index()).ok_or(ScheduleError::UnknownPerson(person))
    }

    pub(crate) fn record_mut(&mut self, person: PersonId) -> ScheduleResult<&mut Activities> {
        self.records.get_mut(person.index()).ok_or(ScheduleError::UnknownPerson(person))
    }

    /// Mutable record of a person who has not been terminated.
    pub(crate) fn live_mut(&mut self, person: PersonId) -> ScheduleResult<&mut Activities> {
        let rec = self.record_mut(person)?;
        if rec.terminated {
            return Err(ScheduleError::Terminated(person));
        }
        Ok(rec)
    }

    // ── Setup ─────────────────────────────────────────────────────────────

    /// Create `person`'s record, assign the initial household, school and
    /// workplace, and derive the initial profile.
    pub fn setup(
        &mut self,
        person:    PersonId,
        household: Option<PlaceId>,
        school:    Option<PlaceId>,
        workplace: Option<PlaceId>,
        groups:    &mut Groups,
        hosts:     &dyn Hosts,
        rng:       &mut SimRng,
    ) -> ScheduleResult<()> {
        let idx = person.index();
        if idx >= self.records.len() {
            let conditions = self.conditions;
            self.records.resize_with(idx + 1, || Activities::new(conditions));
        }

        if let Some(h) = household {
            self.change_household(person, h, groups)?;
        }
        if let Some(s) = school {
            self.record_mut(person)?.grade = hosts.age(person);
            self.set_slot(person, ActivityType::School, Some(s), groups)?;
            self.record_mut(person)?.last_school = Some(s);
        }
        if let Some(w) = workplace {
            self.set_slot(person, ActivityType::Workplace, Some(w), groups)?;
        }
        self.assign_initial_profile(person, groups, hosts, rng)
    }

    /// Derive the profile from group quarters, age, and assigned places.
    pub fn assign_initial_profile(
        &mut self,
        person: PersonId,
        groups: &Groups,
        hosts:  &dyn Hosts,
        rng:    &mut SimRng,
    ) -> ScheduleResult<()> {
        let age = hosts.age(person);
        let rec = self.record(person)?;

        let quarters = match rec.household() {
            Some(h) => groups.place(h)?.subtype,
            None => mx_places::PlaceSubtype::None,
        };
        let workplace_type = match rec.workplace() {
            Some(w) => Some(groups.place(w)?.place_type),
            None => None,
        };

        use mx_places::PlaceSubtype as Q;
        let profile = match quarters {
            Q::CollegeDorm  => Profile::CollegeStudent,
            Q::Prison       => Profile::Prisoner,
            Q::MilitaryBase => Profile::Military,
            Q::NursingHome  => Profile::NursingHomeResident,
            _ if age == 0 => Profile::Infant,
            _ if rec.school().is_some() => Profile::Student,
            _ if age < self.config.school_age => Profile::Preschool,
            _ => match workplace_type {
                Some(PlaceType::School) => Profile::Teacher,
                Some(_) if rng.draw_random() < self.config.weekend_worker_prob => Profile::WeekendWorker,
                Some(_) => Profile::Worker,
                None if age < self.config.retirement_age => Profile::Unemployed,
                None => Profile::Retired,
            },
        };
        log::trace!("{person} starts with profile {profile}");
        let rec = self.record_mut(person)?;
        rec.profile = profile;
        rec.stale = true;
        Ok(())
    }

    /// Initialize sick leave for every person.  Call once after classrooms
    /// and offices are assigned.
    pub fn prepare(&mut self, groups: &Groups, rng: &mut SimRng) -> ScheduleResult<()> {
        for idx in 0..self.records.len() {
            if !self.records[idx].terminated {
                self.initialize_sick_leave(PersonId(idx as u32), groups, rng)?;
            }
        }
        log::debug!("prepared {} schedule records", self.records.len());
        Ok(())
    }

    /// Set the school grade used for classroom matching.
    pub fn set_grade(&mut self, person: PersonId, grade: u8) -> ScheduleResult<()> {
        let rec = self.live_mut(person)?;
        rec.grade = grade;
        rec.stale = true;
        Ok(())
    }

    pub fn set_profile(&mut self, person: PersonId, profile: Profile) -> ScheduleResult<()> {
        let rec = self.live_mut(person)?;
        rec.profile = profile;
        rec.stale = true;
        Ok(())
    }

    /// Age-driven profile transitions.  Call after the person's age changes.
    pub fn update_profile_based_on_age(
        &mut self,
        person: PersonId,
        groups: &mut Groups,
        hosts:  &dyn Hosts,
    ) -> ScheduleResult<()> {
        let age = hosts.age(person);
        let retirement_age = self.config.retirement_age;
        let rec = self.live_mut(person)?;
        match rec.profile {
            Profile::Infant if age >= 1 => {
                rec.profile = Profile::Preschool;
                rec.stale = true;
            }
            Profile::Worker | Profile::WeekendWorker | Profile::Unemployed if age >= retirement_age => {
                rec.profile = Profile::Retired;
                rec.stale = true;
                log::trace!("{person} retires at {age}");
                self.change_workplace(person, None, true, groups)?;
            }
            _ => {}
        }
        Ok(())
    }

    // ── Daily update ──────────────────────────────────────────────────────

    /// The per-day hook for the whole population.
    pub fn update(
        &mut self,
        day:    Day,
        groups: &mut Groups,
        hosts:  &dyn Hosts,
        rng:    &mut SimRng,
    ) -> ScheduleResult<()> {
        for idx in 0..self.records.len() {
            let person = PersonId(idx as u32);
            if self.records[idx].terminated {
                continue;
            }
            if !hosts.is_alive(person) {
                self.terminate(person, groups)?;
                continue;
            }
            let rec = &self.records[idx];
            if rec.hospitalized && rec.hospitalization_ends.is_some_and(|end| end <= day) {
                self.end_hospitalization(person)?;
            }
            let rec = &self.records[idx];
            if rec.traveling && rec.return_from_travel.is_some_and(|back| back <= day) {
                self.stop_traveling(person, groups)?;
            }
        }

        for idx in 0..self.records.len() {
            if !self.records[idx].terminated {
                self.update_schedule(PersonId(idx as u32), day, groups, hosts, rng)?;
            }
        }
        log::debug!("schedules updated for {day}");
        Ok(())
    }

    /// Recompute which of `person`'s slots are active on `day` and enroll or
    /// unenroll accordingly.  A second call for the same day with no state
    /// change in between does nothing.
    pub fn update_schedule(
        &mut self,
        person: PersonId,
        day:    Day,
        groups: &mut Groups,
        hosts:  &dyn Hosts,
        rng:    &mut SimRng,
    ) -> ScheduleResult<()> {
        let rec = self.record(person)?;
        if rec.terminated || (rec.schedule_updated == Some(day) && !rec.stale) {
            return Ok(());
        }

        let on = self.todays_slots(person, day, groups, hosts, rng)?;

        let rec = self.record_mut(person)?;
        for activity in ActivityType::ALL {
            let slot = &mut rec.slots[activity];
            slot.on_schedule = on[activity.index()] && slot.place.is_some();
        }
        self.reconcile_presence(person, groups)?;

        let rec = self.record_mut(person)?;
        rec.schedule_updated = Some(day);
        rec.stale = false;
        Ok(())
    }

    fn todays_slots(
        &mut self,
        person: PersonId,
        day:    Day,
        groups: &Groups,
        hosts:  &dyn Hosts,
        rng:    &mut SimRng,
    ) -> ScheduleResult<[bool; ActivityType::COUNT]> {
        use ActivityType as A;

        let mut on = [false; ActivityType::COUNT];
        let rec = self.record(person)?;
        let has = |a: ActivityType| rec.place(a).is_some();

        if rec.traveling_outside {
            return Ok(on);
        }
        if rec.hospitalized && rec.hospitalization_ends.is_none_or(|end| day < end) {
            on[A::Hospital.index()] = has(A::Hospital);
            return Ok(on);
        }
        if rec.is_confined_to_household() {
            on[A::Household.index()] = has(A::Household);
            return Ok(on);
        }

        on[A::Household.index()] = has(A::Household);
        on[A::Neighborhood.index()] = has(A::Neighborhood);
        if self.calendar.is_weekday(day) {
            for a in [A::School, A::Classroom, A::Workplace, A::Office] {
                on[a.index()] = has(a);
            }
        } else if rec.profile == Profile::WeekendWorker || self.is_hospital_staff(person, groups)? {
            on[A::Workplace.index()] = has(A::Workplace);
            on[A::Office.index()] = has(A::Office);
        }
        on[A::AdHoc.index()] = has(A::AdHoc);

        for a in ActivityType::ALL {
            if let (true, Some(place)) = (on[a.index()], rec.place(a)) {
                if !groups.place(place)?.is_open(day) {
                    on[a.index()] = false;
                }
            }
        }

        let work_absenteeism = self.config.work_absenteeism;
        if work_absenteeism > 0.0 && on[A::Workplace.index()] && rng.draw_random() < work_absenteeism {
            on[A::Workplace.index()] = false;
            on[A::Office.index()] = false;
        }
        let school_absenteeism = self.config.school_absenteeism;
        if school_absenteeism > 0.0 && on[A::School.index()] && rng.draw_random() < school_absenteeism {
            on[A::School.index()] = false;
            on[A::Classroom.index()] = false;
        }

        let symptomatic = (0..self.conditions)
            .any(|c| hosts.is_symptomatic(person, ConditionId(c as u16)));
        if symptomatic {
            if on[A::Workplace.index()] {
                if self.sick_leave_decision(person, rng)? {
                    on[A::Workplace.index()] = false;
                    on[A::Office.index()] = false;
                    self.use_sick_day(person)?;
                } else {
                    self.stats.sick_days_present += 1;
                }
            }
            if on[A::School.index()] && rng.draw_random() < self.config.sick_leave.school_stay_home_prob {
                on[A::School.index()] = false;
                on[A::Classroom.index()] = false;
                self.stats.school_sick_days_absent += 1;
            }
        }
        Ok(on)
    }

    /// `true` if `person` works at a hospital.
    pub fn is_hospital_staff(&self, person: PersonId, groups: &Groups) -> ScheduleResult<bool> {
        match self.record(person)?.workplace() {
            Some(w) => Ok(groups.place(w)?.place_type == PlaceType::Hospital),
            None => Ok(false),
        }
    }

    // ── Presence ──────────────────────────────────────────────────────────

    /// Bring place rosters in line with the on-schedule flags.
    pub(crate) fn reconcile_presence(&mut self, person: PersonId, groups: &mut Groups) -> ScheduleResult<()> {
        for activity in ActivityType::ALL {
            let slot = self.record(person)?.slots[activity];
            if !slot.on_schedule && slot.is_present() {
                self.leave(person, activity, groups)?;
            }
        }
        for activity in ActivityType::ALL {
            let slot = self.record(person)?.slots[activity];
            if let (true, None, Some(place)) = (slot.on_schedule, slot.enrollee_index, slot.place) {
                let index = groups.enroll(GroupId::Place(place), person)?;
                self.record_mut(person)?.slots[activity].enrollee_index = Some(index);
            }
        }
        Ok(())
    }

    /// Remove `person` from the roster of the place in `activity`, fixing
    /// the stored position of whoever was moved into the gap.
    pub(crate) fn leave(&mut self, person: PersonId, activity: ActivityType, groups: &mut Groups) -> ScheduleResult<()> {
        let slot = self.record(person)?.slots[activity];
        let (Some(place), Some(index)) = (slot.place, slot.enrollee_index) else {
            return Ok(());
        };
        let removal = groups.unenroll(GroupId::Place(place), index)?;
        self.record_mut(person)?.slots[activity].enrollee_index = None;

        if let Some(moved) = removal.moved {
            let old_index = groups.place(place)?.present();
            self.fix_moved_place_index(moved, place, old_index, index);
        }
        Ok(())
    }

    fn fix_moved_place_index(&mut self, moved: PersonId, place: PlaceId, from: usize, to: usize) {
        if let Some(rec) = self.records.get_mut(moved.index()) {
            for activity in ActivityType::ALL {
                let slot = &mut rec.slots[activity];
                if slot.place == Some(place) && slot.enrollee_index == Some(from) {
                    slot.enrollee_index = Some(to);
                    return;
                }
            }
        }
        log::warn!("{moved} moved to position {to} in {place} but holds no matching slot");
    }

    /// Point `activity` at `place`, leaving the old place first and keeping
    /// assigned counts current.  The slot starts off schedule.
    pub(crate) fn set_slot(
        &mut self,
        person:   PersonId,
        activity: ActivityType,
        place:    Option<PlaceId>,
        groups:   &mut Groups,
    ) -> ScheduleResult<()> {
        let old = self.live_mut(person)?.slots[activity].place;
        if old == place {
            return Ok(());
        }
        self.leave(person, activity, groups)?;
        if let Some(o) = old {
            groups.place_mut(o)?.remove_assigned();
        }
        if let Some(n) = place {
            groups.place_mut(n)?.add_assigned();
        }
        let rec = self.record_mut(person)?;
        rec.slots[activity].place = place;
        rec.slots[activity].on_schedule = false;
        rec.stale = true;
        Ok(())
    }

    // ── Confinement ───────────────────────────────────────────────────────

    fn check_condition(&self, condition: ConditionId) -> ScheduleResult<()> {
        if condition.index() < self.conditions {
            Ok(())
        } else {
            Err(ScheduleError::UnknownCondition { condition, tracked: self.conditions })
        }
    }

    /// Confine `person` to their household for `condition`.  An untracked
    /// condition is an error and leaves the record unchanged.
    pub fn confine_to_household(&mut self, person: PersonId, condition: ConditionId) -> ScheduleResult<()> {
        self.check_condition(condition)?;
        self.record_mut(person)?.confine_to_household(condition);
        Ok(())
    }

    pub fn clear_confinement_to_household(&mut self, person: PersonId, condition: ConditionId) -> ScheduleResult<()> {
        self.check_condition(condition)?;
        self.record_mut(person)?.clear_confinement_to_household(condition);
        Ok(())
    }

    pub fn is_confined_to_household(&self, person: PersonId) -> ScheduleResult<bool> {
        Ok(self.record(person)?.is_confined_to_household())
    }

    pub fn is_confined_for(&self, person: PersonId, condition: ConditionId) -> ScheduleResult<bool> {
        Ok(self.record(person)?.is_confined_for(condition))
    }

    // ── Termination ───────────────────────────────────────────────────────

    /// Remove `person` from every place and network and stop updating them.
    /// Irreversible.
    pub fn terminate(&mut self, person: PersonId, groups: &mut Groups) -> ScheduleResult<()> {
        if self.record(person)?.terminated {
            return Ok(());
        }
        for activity in ActivityType::ALL {
            self.set_slot(person, activity, None, groups)?;
        }
        let networks: Vec<_> = self.record(person)?.networks().collect();
        for network in networks {
            self.unenroll_network(person, network, groups)?;
        }

        let rec = self.record_mut(person)?;
        rec.stored = None;
        rec.traveling = false;
        rec.traveling_outside = false;
        rec.return_from_travel = None;
        rec.hospitalized = false;
        rec.hospitalization_ends = None;
        rec.confined.iter_mut().for_each(|c| *c = false);
        rec.contact_traced = false;
        rec.terminated = true;
        log::debug!("{person} terminated");
        Ok(())
    }

    // ── Degree ────────────────────────────────────────────────────────────

    /// Number of people assigned to the place in `activity`, 0 if none.
    pub fn get_group_size(&self, person: PersonId, activity: ActivityType, groups: &Groups) -> ScheduleResult<usize> {
        match self.record(person)?.place(activity) {
            Some(p) => Ok(groups.place(p)?.size()),
            None => Ok(0),
        }
    }

    /// Potential contacts across neighborhood, school and workplace.
    pub fn get_degree(&self, person: PersonId, groups: &Groups) -> ScheduleResult<usize> {
        let mut degree = 0;
        for activity in [ActivityType::Neighborhood, ActivityType::School, ActivityType::Workplace] {
            degree += self.get_group_size(person, activity, groups)?.saturating_sub(1);
        }
        Ok(degree)
    }

    /// One-line dump of `person`'s slots, e.g.
    /// `day 3 schedule for PersonId(4) profile W: Household(0)+ Workplace(7)-`.
    pub fn schedule_to_string(&self, person: PersonId, day: Day) -> ScheduleResult<String> {
        let rec = self.record(person)?;
        let mut out = format!("day {} schedule for {person} profile {}:", day.0, rec.profile);
        for (activity, slot) in rec.slots.iter() {
            if let Some(place) = slot.place {
                let mark = if slot.on_schedule { '+' } else { '-' };
                out.push_str(&format!(" {activity}({}){mark}", place.0));
            }
        }
        Ok(out)
    }
}
