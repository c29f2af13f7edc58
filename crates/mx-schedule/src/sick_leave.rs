//! Sick-leave state on `ActivityStore`.

use mx_core::{PersonId, SimRng};
use mx_places::Groups;

use crate::{ActivityStore, ScheduleResult, SickLeave, SickLeaveMethod};

impl ActivityStore {
    /// Draw whether `person` has paid sick leave and how many days.  People
    /// without a workplace get none and draw nothing.  A stay-home decision
    /// already made survives re-initialization.
    pub fn initialize_sick_leave(&mut self, person: PersonId, groups: &Groups, rng: &mut SimRng) -> ScheduleResult<()> {
        let rec = self.record(person)?;
        let decision = rec.sick_leave.decision;
        let Some(workplace) = rec.workplace() else {
            self.record_mut(person)?.sick_leave = SickLeave { decision, ..SickLeave::default() };
            return Ok(());
        };
        let household = rec.household();
        let cfg = &self.config.sick_leave;

        let (available, days) = match cfg.method {
            SickLeaveMethod::WorkplaceSize => {
                let bucket = cfg.size_bucket(groups.place(workplace)?.size());
                let available = rng.draw_random() < cfg.size_prob[bucket];
                (available, cfg.size_days[bucket])
            }
            SickLeaveMethod::IncomeQuartile => {
                let quartile = match household {
                    Some(h) => groups.place(h)?.income_quartile,
                    None => None,
                };
                match quartile.and_then(|q| cfg.quartile_prob.get(usize::from(q))) {
                    Some(&prob) => (rng.draw_random() < prob, cfg.quartile_mean_days),
                    None => {
                        log::warn!("{person} has no valid household income quartile ({quartile:?}); no sick leave");
                        (false, 0.0)
                    }
                }
            }
        };

        self.record_mut(person)?.sick_leave = SickLeave {
            available,
            days_remaining: if available { days } else { 0.0 },
            decision,
        };
        Ok(())
    }

    /// Whether `person` stays home from work when symptomatic.  Drawn the
    /// first time it is needed, then reused.
    pub fn sick_leave_decision(&mut self, person: PersonId, rng: &mut SimRng) -> ScheduleResult<bool> {
        let stay_with = self.config.sick_leave.stay_home_with_leave;
        let stay_without = self.config.sick_leave.stay_home_without_leave;
        let leave = &mut self.record_mut(person)?.sick_leave;
        if let Some(decision) = leave.decision {
            return Ok(decision);
        }
        let prob = if leave.available { stay_with } else { stay_without };
        let decision = rng.draw_random() < prob;
        leave.decision = Some(decision);
        Ok(decision)
    }

    /// Record one missed workday, paying it from sick leave if any remains.
    pub(crate) fn use_sick_day(&mut self, person: PersonId) -> ScheduleResult<()> {
        let leave = &mut self.record_mut(person)?.sick_leave;
        let paid = leave.days_remaining > 0.0;
        if paid {
            leave.days_remaining = (leave.days_remaining - 1.0).max(0.0);
        }
        self.stats.employees_missing_work += 1;
        if paid {
            self.stats.sick_days_used += 1;
        }
        Ok(())
    }
}
