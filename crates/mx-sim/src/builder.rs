//! Fluent builder for constructing a [`Sim`].

use mx_agent::Population;
use mx_core::{Day, SimConfig, SimRng};
use mx_places::Groups;
use mx_schedule::ActivityStore;
use mx_transmission::{RespiratoryConfig, RespiratoryTransmission, SexualTransmission};

use crate::{Condition, Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: days, seed, run number, reseed day
/// - [`Population`]: people and their per-condition health
/// - [`Groups`]: places and networks
/// - [`ActivityStore`]: one schedule record per person, already set up
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                   |
/// |---------------------|-------------------------------------------|
/// | `.condition(c)`     | no conditions                             |
/// | `.respiratory(cfg)` | `RespiratoryConfig::default()` (no spread)|
/// | `.rng(r)`           | `SimRng::new(config.simulation_seed())`   |
///
/// Pass `.rng(r)` when the same stream was already used to set up
/// schedules, so the whole run stays one reproducible sequence.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, population, groups, activities)
///     .condition(FixedCourse::new("flu", 2, 5))
///     .respiratory(contacts)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:      SimConfig,
    population:  Population,
    groups:      Groups,
    activities:  ActivityStore,
    conditions:  Vec<Box<dyn Condition>>,
    respiratory: RespiratoryConfig,
    rng:         Option<SimRng>,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(
        config:     SimConfig,
        population: Population,
        groups:     Groups,
        activities: ActivityStore,
    ) -> Self {
        Self {
            config,
            population,
            groups,
            activities,
            conditions:  Vec::new(),
            respiratory: RespiratoryConfig::default(),
            rng:         None,
        }
    }

    /// Add the next condition.  The `i`-th call defines `ConditionId(i)`.
    pub fn condition(mut self, condition: impl Condition + 'static) -> Self {
        self.conditions.push(Box::new(condition));
        self
    }

    pub fn respiratory(mut self, config: RespiratoryConfig) -> Self {
        self.respiratory = config;
        self
    }

    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate inputs, draw sick-leave entitlements, and return a
    /// ready-to-run [`Sim`].
    pub fn build(mut self) -> SimResult<Sim> {
        // ── Validate ──────────────────────────────────────────────────────
        if self.activities.len() != self.population.len() {
            return Err(SimError::CountMismatch {
                expected: self.population.len(),
                got:      self.activities.len(),
                what:     "activity record",
            });
        }
        let tracked = self.population.health.condition_count();
        if self.conditions.len() != tracked {
            return Err(SimError::CountMismatch {
                expected: tracked,
                got:      self.conditions.len(),
                what:     "condition",
            });
        }
        if self.conditions.len() > usize::from(u16::MAX) {
            return Err(SimError::Config(format!("too many conditions: {}", self.conditions.len())));
        }
        for network in self.groups.networks() {
            network.validate()?;
        }
        if let Some(day) = self.config.reseed_day {
            if day >= self.config.end_day() {
                log::warn!("reseed day {day} is past the last simulated day");
            }
        }

        let respiratory = RespiratoryTransmission::new(self.respiratory)?;
        let mut rng = self.rng.unwrap_or_else(|| SimRng::new(self.config.simulation_seed()));

        // ── Prepare schedules ─────────────────────────────────────────────
        self.activities.prepare(&self.groups, &mut rng)?;

        log::info!(
            "built simulation: {} people, {} places, {} networks, {} conditions",
            self.population.len(),
            self.groups.place_count(),
            self.groups.network_count(),
            self.conditions.len()
        );
        Ok(Sim {
            calendar:    self.config.make_calendar(),
            config:      self.config,
            rng,
            population:  self.population,
            groups:      self.groups,
            activities:  self.activities,
            conditions:  self.conditions,
            respiratory,
            sexual:      SexualTransmission::new(),
            current_day: Day(0),
        })
    }
}
