//! The `Sim` struct and its daily loop.

use mx_agent::Population;
use mx_core::{ConditionId, Day, PersonId, SimCalendar, SimConfig, SimRng};
use mx_places::{Groups, MixingGroup, NetworkKind};
use mx_schedule::ActivityStore;
use mx_transmission::{
    Epidemic, InfectionContext, RespiratoryTransmission, SexualTransmission, Transmission,
};

use crate::{Condition, DayContext, SimObserver, SimResult, TransmissionMode};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim` holds all simulation state and drives the daily loop:
///
/// 1. **Reseed** the random stream if today is the configured reseed day.
/// 2. **Schedules**: [`ActivityStore::update`] moves everyone into today's
///    places.  This is the only phase that changes rosters.
/// 3. **Conditions**, in an order shuffled daily when there is more than
///    one: run the condition's [`update`][Condition::update], then its
///    transmission pass over every place (respiratory) or every sexual
///    network (sexual), in id order.  One pass finishes before the next
///    condition starts.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run length, seed, run number, reseed day.
    pub config: SimConfig,

    pub calendar: SimCalendar,

    /// The single random stream for the whole run.
    pub rng: SimRng,

    pub population: Population,

    /// Places and networks.
    pub groups: Groups,

    /// Per-person schedules and network links.
    pub activities: ActivityStore,

    /// Modeled conditions; index `i` is `ConditionId(i)`.
    pub conditions: Vec<Box<dyn Condition>>,

    pub respiratory: RespiratoryTransmission,

    pub sexual: SexualTransmission,

    pub(crate) current_day: Day,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// The next day to be simulated.
    pub fn current_day(&self) -> Day {
        self.current_day
    }

    /// Run the simulation from the current day to `config.end_day()`.
    ///
    /// Calls observer hooks at every day boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    /// The first error ends the run.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        log::info!(
            "run {} starting at {} with seed {}",
            self.config.run_number,
            self.current_day,
            self.config.simulation_seed()
        );
        while self.current_day < self.config.end_day() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.current_day);
        log::info!("run {} finished at {}", self.config.run_number, self.current_day);
        Ok(())
    }

    /// Run exactly `n` days from the current position (ignores `end_day`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_days<O: SimObserver>(&mut self, n: u32, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Simulate the current day and advance.  Returns the number of new
    /// infections across all conditions.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<usize> {
        let day = self.current_day;
        observer.on_day_start(day);

        if self.config.reseed_day == Some(day) {
            let seed = self.config.reseed_seed();
            self.rng.reseed(seed);
            log::info!("reseeded random stream with {seed} on {day}");
        }

        self.activities.update(day, &mut self.groups, &self.population, &mut self.rng)?;

        let mut order: Vec<usize> = (0..self.conditions.len()).collect();
        if order.len() > 1 {
            self.rng.shuffle(&mut order);
        }

        let mut total = 0;
        for idx in order {
            let condition = ConditionId(idx as u16);
            self.update_condition(idx, condition, day)?;
            let infections = self.transmission_pass(idx, condition, day)?;
            observer.on_condition_pass(day, condition, infections);
            total += infections;
        }

        log::debug!("{day}: {total} new infections");
        observer.on_day_end(day, &self.population, &self.activities);
        self.current_day = day + 1;
        Ok(total)
    }

    // ── Core day processing ───────────────────────────────────────────────

    fn update_condition(&mut self, idx: usize, condition: ConditionId, day: Day) -> SimResult<()> {
        let Sim { population, activities, groups, rng, conditions, .. } = self;
        let mut ctx = DayContext { day, condition, population, activities, groups, rng };
        conditions[idx].update(&mut ctx)
    }

    /// Spread `condition` through every mixing group its engine handles.
    fn transmission_pass(&mut self, idx: usize, condition: ConditionId, day: Day) -> SimResult<usize> {
        let weekend = self.calendar.is_weekend(day);
        let Sim { population, activities, groups, rng, conditions, respiratory, sexual, .. } = self;
        let target = conditions[idx].as_mut();
        let mode = target.mode();
        let mut epidemic = Notify(target);
        let mut ctx = InfectionContext::new(
            day,
            condition,
            weekend,
            population,
            &mut epidemic,
            rng,
            activities.links(),
        );

        let mut infections = 0;
        match mode {
            TransmissionMode::Respiratory => {
                for place in groups.places() {
                    infections += respiratory.spread_infection(MixingGroup::Place(place), &mut ctx)?;
                }
            }
            TransmissionMode::Sexual => {
                for network in groups.networks().iter().filter(|n| n.kind == NetworkKind::Sexual) {
                    infections += sexual.spread_infection(MixingGroup::Network(network), &mut ctx)?;
                }
            }
        }
        Ok(infections)
    }
}

/// Forwards exposures from a transmission pass to the owning condition.
struct Notify<'a>(&'a mut dyn Condition);

impl Epidemic for Notify<'_> {
    fn become_exposed(&mut self, person: PersonId, day: Day) {
        self.0.become_exposed(person, day);
    }
}
