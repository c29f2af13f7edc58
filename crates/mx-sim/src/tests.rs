//! Integration tests for mx-sim.

use mx_agent::{Population, PopulationBuilder, Sex};
use mx_core::{ConditionId, Day, PersonId, PlaceId, SimCalendar, SimConfig, SimRng};
use mx_places::{Groups, PlaceType};
use mx_schedule::{ActivitiesConfig, ActivityStore};
use mx_transmission::{ContactEntry, ContactModel, ContactParams, RespiratoryConfig};

use crate::{FixedCourse, SimBuilder, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

const FLU: ConditionId = ConditionId(0);

fn test_config(days: u32) -> SimConfig {
    SimConfig { days, seed: 2024, ..SimConfig::default() }
}

/// Four households of two working adults and two schoolchildren, one
/// neighborhood, one school, one workplace.
struct Town {
    config:     SimConfig,
    pop:        Population,
    groups:     Groups,
    activities: ActivityStore,
    rng:        SimRng,
    homes:      Vec<PlaceId>,
    work:       PlaceId,
}

impl Town {
    fn new(config: SimConfig, conditions: usize) -> Self {
        let mut rng = SimRng::new(config.simulation_seed());
        let mut b = PopulationBuilder::new(conditions);
        let mut groups = Groups::new();
        let nb = groups.add_place("nb", PlaceType::Neighborhood);
        let school = groups.add_place("school", PlaceType::School);
        groups.add_room(school, Some(7)).unwrap();
        groups.add_room(school, Some(10)).unwrap();
        let work = groups.add_place("work", PlaceType::Workplace);
        groups.add_room(work, None).unwrap();

        let mut people = Vec::new();
        let mut homes = Vec::new();
        for h in 0..4 {
            let home = groups.add_household(format!("h{h}"), Some(nb), Some(h % 4));
            homes.push(home);
            for age in [40, 38, 10, 7] {
                people.push((b.add_person(age, Sex::Female), home, age));
            }
        }
        let pop = b.build();

        let cfg = ActivitiesConfig { weekend_worker_prob: 0.0, ..ActivitiesConfig::default() };
        let mut activities = ActivityStore::new(cfg, SimCalendar::new(config.start_weekday), conditions).unwrap();
        for (p, home, age) in people {
            let (school, workplace) = if age >= 18 { (None, Some(work)) } else { (Some(school), None) };
            activities.setup(p, Some(home), school, workplace, &mut groups, &pop, &mut rng).unwrap();
            activities.assign_classroom(p, &mut groups).unwrap();
            activities.assign_office(p, &mut groups).unwrap();
        }
        Self { config, pop, groups, activities, rng, homes, work }
    }

    fn builder(self) -> SimBuilder {
        SimBuilder::new(self.config, self.pop, self.groups, self.activities).rng(self.rng)
    }
}

fn contacts(entries: &[(PlaceType, ContactModel, f64, f64)]) -> RespiratoryConfig {
    RespiratoryConfig {
        transmissibility: vec![1.0; 2],
        contacts: entries
            .iter()
            .flat_map(|&(place_type, model, contacts_per_day, transmission_prob)| {
                (0..2).map(move |c| ContactEntry {
                    place_type,
                    condition: ConditionId(c),
                    params: ContactParams { model, contacts_per_day, transmission_prob, ..ContactParams::default() },
                })
            })
            .collect(),
    }
}

fn town_contacts() -> RespiratoryConfig {
    contacts(&[
        (PlaceType::Household, ContactModel::Pairwise, 0.0, 0.5),
        (PlaceType::Workplace, ContactModel::Default, 4.0, 0.1),
        (PlaceType::Classroom, ContactModel::Default, 6.0, 0.1),
        (PlaceType::Neighborhood, ContactModel::Density, 1.0, 0.05),
    ])
}

/// `(infector, infectee, day)` of every exposure so far.
fn exposures(pop: &Population) -> Vec<(PersonId, PersonId, Day)> {
    pop.health.exposures().iter().map(|e| (e.infector, e.infectee, e.day)).collect()
}

#[derive(Default)]
struct Recorder {
    starts:    Vec<Day>,
    passes:    Vec<(Day, ConditionId, usize)>,
    ends:      usize,
    final_day: Option<Day>,
}

impl SimObserver for Recorder {
    fn on_day_start(&mut self, day: Day) {
        self.starts.push(day);
    }

    fn on_condition_pass(&mut self, day: Day, condition: ConditionId, infections: usize) {
        self.passes.push((day, condition, infections));
    }

    fn on_day_end(&mut self, _day: Day, _population: &Population, _activities: &ActivityStore) {
        self.ends += 1;
    }

    fn on_sim_end(&mut self, final_day: Day) {
        self.final_day = Some(final_day);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SimError;

    #[test]
    fn builds_successfully() {
        let sim = Town::new(test_config(5), 1)
            .builder()
            .condition(FixedCourse::new("flu", 1, 3))
            .respiratory(town_contacts())
            .build()
            .unwrap();
        assert_eq!(sim.population.len(), 16);
        assert_eq!(sim.activities.len(), 16);
        assert_eq!(sim.current_day(), Day(0));
    }

    #[test]
    fn missing_schedule_records_error() {
        let mut town = Town::new(test_config(5), 1);
        town.pop.add_person(30, Sex::Male);
        let result = town.builder().condition(FixedCourse::new("flu", 1, 3)).build();
        assert!(matches!(result, Err(SimError::CountMismatch { what: "activity record", .. })));
    }

    #[test]
    fn condition_count_mismatch_errors() {
        let result = Town::new(test_config(5), 2)
            .builder()
            .condition(FixedCourse::new("flu", 1, 3))
            .build();
        assert!(matches!(result, Err(SimError::CountMismatch { what: "condition", .. })));
    }

    #[test]
    fn infinite_network_rate_errors() {
        let mut town = Town::new(test_config(5), 1);
        let net = town.groups.add_network("partners", mx_places::NetworkKind::Sexual);
        town.groups.network_mut(net).unwrap().contacts_per_day = f64::INFINITY;
        let result = town.builder().condition(FixedCourse::new("hiv", 30, 300)).build();
        assert!(matches!(result, Err(SimError::Place(_))));
    }

    #[test]
    fn invalid_contact_config_errors() {
        let mut cfg = town_contacts();
        cfg.contacts[0].params.transmission_prob = 2.0;
        let result = Town::new(test_config(5), 1)
            .builder()
            .condition(FixedCourse::new("flu", 1, 3))
            .respiratory(cfg)
            .build();
        assert!(matches!(result, Err(SimError::Transmission(_))));
    }
}

// ── Daily loop ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loop_tests {
    use super::*;
    use crate::NoopObserver;
    use mx_agent::{Hosts, InfectionState};

    #[test]
    fn household_contacts_are_exposed_then_progress() {
        let mut town = Town::new(test_config(10), 1);
        let mut flu = FixedCourse::new("flu", 1, 4);
        flu.seed_case(&mut town.pop, FLU, PersonId(0), Day(0));
        let mut sim = town
            .builder()
            .condition(flu)
            .respiratory(contacts(&[(PlaceType::Household, ContactModel::Pairwise, 0.0, 1.0)]))
            .build()
            .unwrap();

        sim.run_days(1, &mut NoopObserver).unwrap();
        let exposed: Vec<_> = exposures(&sim.population).iter().map(|e| e.1).collect();
        assert_eq!(exposed, vec![PersonId(1), PersonId(2), PersonId(3)]);

        sim.run_days(1, &mut NoopObserver).unwrap();
        for p in 1..4 {
            assert_eq!(sim.population.health.state(PersonId(p), FLU), InfectionState::Infectious);
        }

        sim.run_days(4, &mut NoopObserver).unwrap();
        assert_eq!(sim.population.health.state(PersonId(0), FLU), InfectionState::Recovered);
        assert!(!sim.population.is_infectious(PersonId(0), FLU));
    }

    #[test]
    fn same_seed_same_epidemic() {
        let run = || {
            let mut town = Town::new(test_config(20), 2);
            let mut flu = FixedCourse::new("flu", 2, 5).with_symptoms();
            let mut cold = FixedCourse::new("cold", 1, 3).with_infectivity(0.5);
            flu.seed_case(&mut town.pop, ConditionId(0), PersonId(0), Day(0));
            cold.seed_case(&mut town.pop, ConditionId(1), PersonId(6), Day(0));
            let mut sim = town
                .builder()
                .condition(flu)
                .condition(cold)
                .respiratory(town_contacts())
                .build()
                .unwrap();
            sim.run(&mut NoopObserver).unwrap();
            (exposures(&sim.population), sim.activities.stats().clone())
        };
        let (a, stats_a) = run();
        let (b, stats_b) = run();
        assert!(!a.is_empty());
        assert_eq!(a, b);
        assert_eq!(stats_a, stats_b);
    }

    #[test]
    fn observer_sees_every_day_and_condition() {
        let mut sim = Town::new(test_config(7), 2)
            .builder()
            .condition(FixedCourse::new("flu", 1, 3))
            .condition(FixedCourse::new("cold", 1, 3))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        assert_eq!(rec.starts, (0..7).map(Day).collect::<Vec<_>>());
        assert_eq!(rec.ends, 7);
        assert_eq!(rec.final_day, Some(Day(7)));
        assert_eq!(rec.passes.len(), 14);
        for d in 0..7 {
            let mut seen: Vec<_> = rec.passes.iter().filter(|p| p.0 == Day(d)).map(|p| p.1).collect();
            seen.sort();
            assert_eq!(seen, vec![ConditionId(0), ConditionId(1)]);
        }
        assert!(rec.passes.iter().all(|p| p.2 == 0));
    }

    #[test]
    fn reseeding_splits_replicates_at_the_reseed_day() {
        let sim_for = |run_number| {
            let config = SimConfig { run_number, reseed_day: Some(Day(3)), ..test_config(10) };
            Town::new(config, 1).builder().condition(FixedCourse::new("flu", 1, 3)).build().unwrap()
        };
        let mut a = sim_for(1);
        let mut b = sim_for(2);
        a.run_days(3, &mut NoopObserver).unwrap();
        b.run_days(3, &mut NoopObserver).unwrap();
        assert_eq!(a.rng.clone().draw_random().to_bits(), b.rng.clone().draw_random().to_bits());

        a.run_days(1, &mut NoopObserver).unwrap();
        b.run_days(1, &mut NoopObserver).unwrap();
        assert_ne!(a.rng.draw_random().to_bits(), b.rng.draw_random().to_bits());
    }

    #[test]
    fn weekends_keep_workers_home() {
        let town = Town::new(test_config(7), 1);
        let work = town.work;
        let mut sim = town.builder().condition(FixedCourse::new("flu", 1, 3)).build().unwrap();
        sim.run_days(1, &mut NoopObserver).unwrap();
        assert_eq!(sim.groups.place(work).unwrap().present(), 8);
        // Day(5) is a Saturday.
        sim.run_days(5, &mut NoopObserver).unwrap();
        assert_eq!(sim.groups.place(work).unwrap().present(), 0);
    }
}

// ── Sexual networks ───────────────────────────────────────────────────────────

#[cfg(test)]
mod network_tests {
    use super::*;
    use crate::{NoopObserver, TransmissionMode};
    use mx_places::NetworkKind;

    #[test]
    fn sexual_conditions_spread_along_links_only() {
        let mut town = Town::new(test_config(3), 1);
        let net = town.groups.add_network("partners", NetworkKind::Sexual);
        let net_mut = town.groups.network_mut(net).unwrap();
        net_mut.contacts_per_day = 1.0;
        net_mut.transmission_per_contact = 1.0;
        for p in [0, 4, 8, 12] {
            town.activities.join_network(PersonId(p), net, &mut town.groups).unwrap();
        }
        town.activities.create_network_link_to(PersonId(0), PersonId(4), net).unwrap();
        town.activities.create_network_link_to(PersonId(0), PersonId(8), net).unwrap();
        town.activities.create_network_link_to(PersonId(12), PersonId(0), net).unwrap();

        let mut hiv = FixedCourse::new("hiv", 30, 300).with_mode(TransmissionMode::Sexual);
        hiv.seed_case(&mut town.pop, FLU, PersonId(0), Day(0));
        let mut sim = town.builder().condition(hiv).respiratory(town_contacts()).build().unwrap();

        sim.run_days(1, &mut NoopObserver).unwrap();
        let found = exposures(&sim.population);
        assert!(!found.is_empty());
        for (infector, infectee, _) in found {
            assert_eq!(infector, PersonId(0));
            assert!(infectee == PersonId(4) || infectee == PersonId(8));
        }
    }
}

// ── Interventions ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod intervention_tests {
    use super::*;
    use crate::{Condition, DayContext, NoopObserver, SimResult};
    use mx_transmission::Epidemic;

    /// Confines one person on day 0 and releases them on day 3.
    struct Quarantine(PersonId);

    impl Epidemic for Quarantine {
        fn become_exposed(&mut self, _person: PersonId, _day: Day) {}
    }

    impl Condition for Quarantine {
        fn name(&self) -> &str {
            "quarantine"
        }

        fn update(&mut self, ctx: &mut DayContext<'_>) -> SimResult<()> {
            match ctx.day {
                Day(0) => ctx.activities.confine_to_household(self.0, ctx.condition)?,
                Day(3) => ctx.activities.clear_confinement_to_household(self.0, ctx.condition)?,
                _ => {}
            }
            Ok(())
        }
    }

    #[test]
    fn confinement_applies_from_the_next_day() {
        let town = Town::new(test_config(7), 1);
        let (work, home) = (town.work, town.homes[0]);
        let mut sim = town.builder().condition(Quarantine(PersonId(0))).build().unwrap();

        sim.run_days(1, &mut NoopObserver).unwrap();
        assert!(sim.groups.place(work).unwrap().members().contains(&PersonId(0)));

        sim.run_days(1, &mut NoopObserver).unwrap();
        assert!(!sim.groups.place(work).unwrap().members().contains(&PersonId(0)));
        assert!(sim.groups.place(home).unwrap().members().contains(&PersonId(0)));

        sim.run_days(3, &mut NoopObserver).unwrap();
        assert!(sim.groups.place(work).unwrap().members().contains(&PersonId(0)));
    }
}

// ── Logging ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod logging_tests {
    use crate::logging::{LevelFilter, disable_logging, remove_module_filter, set_log_level, set_module_filter};

    #[test]
    fn logging_can_be_reconfigured() {
        set_log_level(LevelFilter::Warn).unwrap();
        set_module_filter("mx_schedule", LevelFilter::Debug).unwrap();
        set_module_filter("mx_schedule", LevelFilter::Debug).unwrap();
        remove_module_filter("mx_schedule").unwrap();
        remove_module_filter("never_added").unwrap();
        disable_logging().unwrap();
    }
}
