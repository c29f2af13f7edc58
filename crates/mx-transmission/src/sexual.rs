//! Sexual transmission over directed network links.
//!
//! # Algorithm
//!
//! ```text
//! infectious    = infectious members, roster order        (H of them)
//! link_sum[i]   = out_degree[0] + … + out_degree[i]
//! total_links   = link_sum[H − 1]
//! trials        = round(total_links × contacts_per_day × transmission_per_contact)
//!
//! repeat trials times:
//!     selected  = uniform int in [0, total_links − 1]
//!     i         = first index with link_sum[i] > selected
//!     local     = selected − link_sum[i − 1]   (selected when i == 0)
//!     infectee  = target of infector i's local-th outgoing link
//!     if infectee susceptible:
//!         attempt with p = infectivity(infector) × susceptibility(infectee)
//! ```
//!
//! Trials sample links with replacement.  `H == 0` or `total_links == 0` is
//! a no-op with no draws.  `round` is half away from zero, so 2.5 rounds
//! to 3.

use mx_core::GroupId;
use mx_places::{MixingGroup, Network, NetworkKind};

use crate::{InfectionContext, Transmission, TransmissionError, TransmissionResult, attempt_transmission};

#[derive(Copy, Clone, Debug, Default)]
pub struct SexualTransmission;

impl SexualTransmission {
    pub fn new() -> Self {
        Self
    }

    fn spread_in_network(&self, network: &Network, ctx: &mut InfectionContext<'_>) -> usize {
        let condition = ctx.condition;
        let infectious = MixingGroup::Network(network).infectious_members(condition, &*ctx.hosts);
        if infectious.is_empty() {
            return 0;
        }

        let mut link_sum = Vec::with_capacity(infectious.len());
        let mut total_links = 0usize;
        for &p in &infectious {
            total_links += ctx.links.out_degree(network.id, p);
            link_sum.push(total_links);
        }
        if total_links == 0 {
            log::trace!("{}: {} infectious members have no partners", network.name, infectious.len());
            return 0;
        }

        let trials = max_transmissions(total_links, network.contacts_per_day, network.transmission_per_contact);
        let source = GroupId::Network(network.id);
        let mut infections = 0;
        for _ in 0..trials {
            let selected = ctx.rng.draw_random_int(0, total_links as u64 - 1) as usize;
            let Some((i, local)) = select_link(&link_sum, selected) else { continue };
            let infector = infectious[i];
            let Some(infectee) = ctx.links.end_of_link(network.id, infector, local) else {
                log::warn!("{infector} has no link {local} in {}", network.id);
                continue;
            };
            if !ctx.hosts.is_susceptible(infectee, condition) {
                continue;
            }
            let prob = ctx.hosts.infectivity(infector, condition) * ctx.hosts.susceptibility(infectee, condition);
            if attempt_transmission(prob, infector, infectee, source, ctx) {
                infections += 1;
            }
        }
        log::debug!(
            "{}: {trials} trials over {total_links} links, {infections} new {condition} infections on {}",
            network.name,
            ctx.day
        );
        infections
    }
}

impl Transmission for SexualTransmission {
    fn name(&self) -> &'static str {
        "sexual"
    }

    fn spread_infection(&self, group: MixingGroup<'_>, ctx: &mut InfectionContext<'_>) -> TransmissionResult<usize> {
        match group {
            MixingGroup::Network(network) if network.kind == NetworkKind::Sexual => {
                network.validate()?;
                Ok(self.spread_in_network(network, ctx))
            }
            _ => Err(TransmissionError::UnsupportedGroup { engine: self.name(), group: group.id() }),
        }
    }
}

/// Number of link trials for one day.
pub fn max_transmissions(total_links: usize, contacts_per_day: f64, transmission_per_contact: f64) -> u64 {
    (total_links as f64 * contacts_per_day * transmission_per_contact).round().max(0.0) as u64
}

/// Map a global link index onto `(infector index, local link index)` using
/// the prefix sums of out-degrees.  `None` when `selected` is past the last
/// link.
pub fn select_link(link_sum: &[usize], selected: usize) -> Option<(usize, usize)> {
    let i = link_sum.partition_point(|&s| s <= selected);
    if i >= link_sum.len() {
        return None;
    }
    let base = if i == 0 { 0 } else { link_sum[i - 1] };
    Some((i, selected - base))
}
