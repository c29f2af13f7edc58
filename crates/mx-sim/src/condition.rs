//! Conditions: the natural-history side of each modeled disease.

use mx_agent::{InfectionState, Population};
use mx_core::{ConditionId, Day, PersonId, SimRng};
use mx_places::Groups;
use mx_schedule::ActivityStore;
use mx_transmission::Epidemic;

use crate::SimResult;

/// Which transmission engine carries a condition.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum TransmissionMode {
    /// Spread inside places by the respiratory engine.
    #[default]
    Respiratory,
    /// Spread along links of sexual networks.
    Sexual,
}

/// Mutable simulation state lent to [`Condition::update`].
pub struct DayContext<'a> {
    pub day:        Day,
    pub condition:  ConditionId,
    pub population: &'a mut Population,
    pub activities: &'a mut ActivityStore,
    pub groups:     &'a mut Groups,
    pub rng:        &'a mut SimRng,
}

/// A modeled condition.
///
/// The driver calls [`update`][Self::update] once per day, right before the
/// condition's transmission pass.  New exposures found by the pass arrive
/// through [`Epidemic::become_exposed`].
pub trait Condition: Epidemic {
    fn name(&self) -> &str;

    fn mode(&self) -> TransmissionMode {
        TransmissionMode::Respiratory
    }

    /// Advance natural history for `ctx.day`: progress infections, and apply
    /// any interventions (confinement, hospitalization) through
    /// `ctx.activities`.
    fn update(&mut self, _ctx: &mut DayContext<'_>) -> SimResult<()> {
        Ok(())
    }
}

// ── FixedCourse ───────────────────────────────────────────────────────────────

/// Every exposure follows the same course:
///
/// ```text
/// exposed ──latent_days──▶ infectious (+ symptomatic) ──infectious_days──▶ recovered
/// ```
#[derive(Clone, Debug)]
pub struct FixedCourse {
    pub name:            String,
    pub mode:            TransmissionMode,
    pub latent_days:     u32,
    pub infectious_days: u32,
    pub infectivity:     f64,
    pub symptomatic:     bool,
    /// Exposed or infectious people, in exposure order.
    active: Vec<(PersonId, Day)>,
}

impl FixedCourse {
    pub fn new(name: impl Into<String>, latent_days: u32, infectious_days: u32) -> Self {
        Self {
            name: name.into(),
            mode: TransmissionMode::Respiratory,
            latent_days,
            infectious_days,
            infectivity: 1.0,
            symptomatic: false,
            active: Vec::new(),
        }
    }

    pub fn with_mode(mut self, mode: TransmissionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_infectivity(mut self, infectivity: f64) -> Self {
        self.infectivity = infectivity;
        self
    }

    pub fn with_symptoms(mut self) -> Self {
        self.symptomatic = true;
        self
    }

    /// Make `person` an index case, infectious from `day`.
    pub fn seed_case(&mut self, population: &mut Population, condition: ConditionId, person: PersonId, day: Day) {
        population.health.set_infectious(person, condition, self.infectivity);
        population.health.set_symptomatic(person, condition, self.symptomatic);
        self.active.push((person, Day(day.0.saturating_sub(self.latent_days))));
    }

    /// People currently exposed or infectious.
    pub fn active(&self) -> usize {
        self.active.len()
    }
}

impl Epidemic for FixedCourse {
    fn become_exposed(&mut self, person: PersonId, day: Day) {
        self.active.push((person, day));
    }
}

impl Condition for FixedCourse {
    fn name(&self) -> &str {
        &self.name
    }

    fn mode(&self) -> TransmissionMode {
        self.mode
    }

    fn update(&mut self, ctx: &mut DayContext<'_>) -> SimResult<()> {
        let (c, day) = (ctx.condition, ctx.day);
        let health = &mut ctx.population.health;
        let (latent, infectious) = (self.latent_days, self.infectious_days);
        let (infectivity, symptomatic) = (self.infectivity, self.symptomatic);

        self.active.retain(|&(p, exposed)| {
            let elapsed = day.0.saturating_sub(exposed.0);
            if elapsed >= latent + infectious {
                health.recover(p, c);
                return false;
            }
            if elapsed >= latent && health.state(p, c) == InfectionState::Exposed {
                health.set_infectious(p, c, infectivity);
                health.set_symptomatic(p, c, symptomatic);
            }
            true
        });
        Ok(())
    }
}
