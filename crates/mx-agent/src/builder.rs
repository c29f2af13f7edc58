//! `Population` and its fluent builder.
//!
//! # Usage
//!
//! ```rust
//! use mx_agent::{Hosts, PopulationBuilder, Sex};
//! use mx_core::{ConditionId, PersonId};
//!
//! let mut builder = PopulationBuilder::new(/*conditions=*/ 1);
//! let adult = builder.add_person(34, Sex::Female);
//! let child = builder.add_person(6,  Sex::Male);
//! let pop = builder.build();
//!
//! assert_eq!(pop.len(), 2);
//! assert_eq!(pop.age(child), 6);
//! assert!(pop.is_susceptible(adult, ConditionId(0)));
//! ```

use mx_core::{ConditionId, Day, GroupId, PersonId};

use crate::{Exposure, HealthStore, Hosts, PersonStore, Sex};

/// Demographics plus per-condition health.  The stock [`Hosts`]
/// implementation used by the simulation driver and by tests.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    pub people: PersonStore,
    pub health: HealthStore,
}

impl Population {
    #[inline]
    pub fn len(&self) -> usize {
        self.people.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn person_ids(&self) -> impl Iterator<Item = PersonId> + '_ {
        self.people.person_ids()
    }

    /// Add one person after construction (births, immigration).
    pub fn add_person(&mut self, age: u8, sex: Sex) -> PersonId {
        self.health.push_person();
        self.people.push(age, sex)
    }

    /// Advance every living person's age by one year, saturating at `u8::MAX`.
    pub fn age_one_year(&mut self) {
        for (age, alive) in self.people.age.iter_mut().zip(&self.people.alive) {
            if *alive {
                *age = age.saturating_add(1);
            }
        }
    }
}

impl Hosts for Population {
    fn age(&self, person: PersonId) -> u8 {
        self.people.age.get(person.index()).copied().unwrap_or(0)
    }

    fn is_alive(&self, person: PersonId) -> bool {
        self.people.alive.get(person.index()).copied().unwrap_or(false)
    }

    fn is_susceptible(&self, person: PersonId, condition: ConditionId) -> bool {
        self.is_alive(person) && self.health.is_susceptible(person, condition)
    }

    fn is_infectious(&self, person: PersonId, condition: ConditionId) -> bool {
        self.is_alive(person) && self.health.is_infectious(person, condition)
    }

    fn is_symptomatic(&self, person: PersonId, condition: ConditionId) -> bool {
        self.health.is_symptomatic(person, condition)
    }

    fn infectivity(&self, person: PersonId, condition: ConditionId) -> f64 {
        self.health.infectivity(person, condition)
    }

    fn susceptibility(&self, person: PersonId, condition: ConditionId) -> f64 {
        self.health.susceptibility(person, condition)
    }

    fn infect(
        &mut self,
        infector:  PersonId,
        infectee:  PersonId,
        condition: ConditionId,
        source:    GroupId,
        day:       Day,
    ) -> bool {
        self.health.expose(Exposure { infector, infectee, condition, source, day })
    }
}

// ── PopulationBuilder ─────────────────────────────────────────────────────────

/// Fluent builder for [`Population`].
pub struct PopulationBuilder {
    people: PersonStore,
    health: HealthStore,
}

impl PopulationBuilder {
    /// Create a builder tracking `conditions` independent conditions.
    pub fn new(conditions: usize) -> Self {
        Self {
            people: PersonStore::default(),
            health: HealthStore::new(conditions),
        }
    }

    /// Pre-allocate room for `n` people.
    pub fn with_capacity(mut self, n: usize) -> Self {
        self.people.age.reserve(n);
        self.people.sex.reserve(n);
        self.people.alive.reserve(n);
        self
    }

    pub fn add_person(&mut self, age: u8, sex: Sex) -> PersonId {
        self.health.push_person();
        self.people.push(age, sex)
    }

    pub fn build(self) -> Population {
        log::debug!(
            "built population of {} people tracking {} conditions",
            self.people.count,
            self.health.condition_count()
        );
        Population { people: self.people, health: self.health }
    }
}
