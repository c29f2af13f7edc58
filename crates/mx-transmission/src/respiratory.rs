//! Respiratory transmission inside places.
//!
//! # Preconditions
//!
//! A pass does nothing, and draws nothing, when any of these hold:
//!
//! ```text
//! transmissibility[condition] == 0
//! place closed today
//! fewer than 2 members present
//! no parameters for (place type, condition)
//! no infectious member present
//! ```
//!
//! # Contact models
//!
//! ```text
//! Default    shuffle infectors; each makes stochastic_round(rate × infectivity)
//!            contacts with uniformly chosen members;
//!            p = transmission_prob × susceptibility
//! AgeBased   as Default, targets weighted by matrix[bin(infector)][bin(member)]
//! Pairwise   every infector × every susceptible other member;
//!            p = transmission_prob × infectivity × susceptibility
//! Density    c = min(1, rate / (N − 1)),  q = (1 − c × transmission_prob)^I
//!            k = stochastic_round(S × (1 − q)), capped by max_infectees;
//!            first k shuffled susceptibles, infector uniform, p = susceptibility
//! ```
//!
//! `N` is the number present, `S` the susceptible members present and `I`
//! the summed infectivity of the infectious members present.  Self-contacts
//! and contacts with people who are no longer susceptible are skipped
//! before the draw.

use mx_core::{ConditionId, GroupId, PersonId};
use mx_places::{MixingGroup, Place, PlaceType};
use rustc_hash::FxHashMap;

use crate::{
    ContactModel, ContactParams, InfectionContext, RespiratoryConfig, Transmission, TransmissionError,
    TransmissionResult, attempt_transmission,
};

pub struct RespiratoryTransmission {
    config: RespiratoryConfig,
    params: FxHashMap<(PlaceType, ConditionId), ContactParams>,
}

impl RespiratoryTransmission {
    pub fn new(config: RespiratoryConfig) -> TransmissionResult<Self> {
        config.validate()?;
        let params = config
            .contacts
            .iter()
            .map(|e| ((e.place_type, e.condition), e.params.clone()))
            .collect();
        Ok(Self { config, params })
    }

    pub fn config(&self) -> &RespiratoryConfig {
        &self.config
    }

    pub fn params(&self, place_type: PlaceType, condition: ConditionId) -> Option<&ContactParams> {
        self.params.get(&(place_type, condition))
    }

    /// Today's contact rate for `params` and `condition`.
    pub fn contact_rate(&self, params: &ContactParams, condition: ConditionId, weekend: bool) -> f64 {
        let rate = params.contacts_per_day * self.config.transmissibility(condition);
        if weekend { rate * params.weekend_multiplier } else { rate }
    }

    fn spread_in_place(&self, place: &Place, ctx: &mut InfectionContext<'_>) -> usize {
        let condition = ctx.condition;
        if self.config.transmissibility(condition) <= 0.0 || !place.is_open(ctx.day) || place.present() < 2 {
            return 0;
        }
        let Some(params) = self.params(place.place_type, condition) else {
            return 0;
        };
        let group = MixingGroup::Place(place);
        let infectious = group.infectious_members(condition, &*ctx.hosts);
        if infectious.is_empty() {
            return 0;
        }

        let rate = self.contact_rate(params, condition, ctx.weekend);
        let infections = match params.model {
            ContactModel::Default  => default_model(place, infectious, rate, params, ctx),
            ContactModel::AgeBased => age_based_model(place, infectious, rate, params, ctx),
            ContactModel::Pairwise => pairwise_model(place, &infectious, params, ctx),
            ContactModel::Density  => density_model(place, &infectious, rate, params, ctx),
        };
        if infections > 0 {
            log::debug!(
                "{} {}: {infections} new {condition} infections on {}",
                place.id,
                place.label,
                ctx.day
            );
        }
        infections
    }
}

impl Transmission for RespiratoryTransmission {
    fn name(&self) -> &'static str {
        "respiratory"
    }

    fn spread_infection(&self, group: MixingGroup<'_>, ctx: &mut InfectionContext<'_>) -> TransmissionResult<usize> {
        match group {
            MixingGroup::Place(place) => Ok(self.spread_in_place(place, ctx)),
            MixingGroup::Network(_) => Err(TransmissionError::UnsupportedGroup {
                engine: self.name(),
                group:  group.id(),
            }),
        }
    }
}

// ── Contact models ────────────────────────────────────────────────────────────

/// Try `target` if it is someone else and still susceptible.
fn contact(
    prob:     f64,
    infector: PersonId,
    target:   PersonId,
    source:   GroupId,
    ctx:      &mut InfectionContext<'_>,
) -> bool {
    if target == infector || !ctx.hosts.is_susceptible(target, ctx.condition) {
        return false;
    }
    let prob = prob * ctx.hosts.susceptibility(target, ctx.condition);
    attempt_transmission(prob, infector, target, source, ctx)
}

fn default_model(
    place:          &Place,
    mut infectious: Vec<PersonId>,
    rate:           f64,
    params:         &ContactParams,
    ctx:            &mut InfectionContext<'_>,
) -> usize {
    let source = GroupId::Place(place.id);
    let members = place.members();
    ctx.rng.shuffle(&mut infectious);

    let mut infections = 0;
    for infector in infectious {
        let contacts = ctx.rng.stochastic_round(rate * ctx.hosts.infectivity(infector, ctx.condition));
        for _ in 0..contacts {
            let Some(&target) = ctx.rng.choose(members) else { break };
            if contact(params.transmission_prob, infector, target, source, ctx) {
                infections += 1;
            }
        }
    }
    infections
}

fn age_based_model(
    place:          &Place,
    mut infectious: Vec<PersonId>,
    rate:           f64,
    params:         &ContactParams,
    ctx:            &mut InfectionContext<'_>,
) -> usize {
    let Some(matrix) = params.age_matrix.as_ref() else {
        return 0;
    };
    let source = GroupId::Place(place.id);
    let members = place.members();
    ctx.rng.shuffle(&mut infectious);

    let mut infections = 0;
    let mut cumulative = Vec::with_capacity(members.len());
    for infector in infectious {
        let infector_age = ctx.hosts.age(infector);
        cumulative.clear();
        let mut total = 0.0;
        for &m in members {
            if m != infector {
                total += matrix.weight(infector_age, ctx.hosts.age(m));
            }
            cumulative.push(total);
        }
        if total <= 0.0 {
            continue;
        }

        let contacts = ctx.rng.stochastic_round(rate * ctx.hosts.infectivity(infector, ctx.condition));
        for _ in 0..contacts {
            let r = ctx.rng.draw_random() * total;
            let i = cumulative.partition_point(|&c| c <= r).min(members.len() - 1);
            if contact(params.transmission_prob, infector, members[i], source, ctx) {
                infections += 1;
            }
        }
    }
    infections
}

fn pairwise_model(
    place:      &Place,
    infectious: &[PersonId],
    params:     &ContactParams,
    ctx:        &mut InfectionContext<'_>,
) -> usize {
    let source = GroupId::Place(place.id);
    let susceptible = MixingGroup::Place(place).susceptible_members(ctx.condition, &*ctx.hosts);

    let mut infections = 0;
    for &infector in infectious {
        let prob = params.transmission_prob * ctx.hosts.infectivity(infector, ctx.condition);
        for &target in &susceptible {
            if contact(prob, infector, target, source, ctx) {
                infections += 1;
            }
        }
    }
    infections
}

fn density_model(
    place:      &Place,
    infectious: &[PersonId],
    rate:       f64,
    params:     &ContactParams,
    ctx:        &mut InfectionContext<'_>,
) -> usize {
    let source = GroupId::Place(place.id);
    let mut susceptible = MixingGroup::Place(place).susceptible_members(ctx.condition, &*ctx.hosts);
    if susceptible.is_empty() {
        return 0;
    }
    let force: f64 = infectious.iter().map(|&p| ctx.hosts.infectivity(p, ctx.condition)).sum();
    let expected = expected_density_infections(
        susceptible.len(),
        force,
        place.present(),
        rate,
        params.transmission_prob,
    );

    let mut k = ctx.rng.stochastic_round(expected) as usize;
    if let Some(cap) = params.max_infectees {
        k = k.min(cap as usize);
    }
    k = k.min(susceptible.len());
    if k == 0 {
        return 0;
    }
    ctx.rng.shuffle(&mut susceptible);

    let mut infections = 0;
    for &target in &susceptible[..k] {
        let Some(&infector) = ctx.rng.choose(infectious) else { break };
        if contact(1.0, infector, target, source, ctx) {
            infections += 1;
        }
    }
    infections
}

/// Expected new infections under the density model.
pub fn expected_density_infections(
    susceptible:       usize,
    force:             f64,
    present:           usize,
    rate:              f64,
    transmission_prob: f64,
) -> f64 {
    if present < 2 {
        return 0.0;
    }
    let contact_prob = (rate / (present - 1) as f64).min(1.0);
    let escape = (1.0 - contact_prob * transmission_prob).powf(force);
    susceptible as f64 * (1.0 - escape)
}
