//! Network membership and directed links on `ActivityStore`.
//!
//! Joining a network puts the person in the network's roster; links are
//! separate and live in the store's `LinkStore`.  Leaving a network drops
//! every link into or out of the person in that network.

use mx_core::{GroupId, NetworkId, PersonId};
use mx_places::Groups;

use crate::{ActivityStore, NetworkMembership, ScheduleResult};

impl ActivityStore {
    /// Join `network`.  `Ok(false)` if already a member.
    pub fn join_network(&mut self, person: PersonId, network: NetworkId, groups: &mut Groups) -> ScheduleResult<bool> {
        if self.live_mut(person)?.is_enrolled_in_network(network) {
            return Ok(false);
        }
        let enrollee_index = groups.enroll(GroupId::Network(network), person)?;
        let rec = self.record_mut(person)?;
        rec.networks.push(NetworkMembership { network, enrollee_index });
        rec.stale = true;
        Ok(true)
    }

    /// Leave `network` and drop all of the person's links in it.
    /// `Ok(false)` if not a member.
    pub fn unenroll_network(&mut self, person: PersonId, network: NetworkId, groups: &mut Groups) -> ScheduleResult<bool> {
        let rec = self.record_mut(person)?;
        let Some(pos) = rec.networks.iter().position(|m| m.network == network) else {
            return Ok(false);
        };
        let membership = rec.networks.remove(pos);
        rec.stale = true;

        let removal = groups.unenroll(GroupId::Network(network), membership.enrollee_index)?;
        if let Some(moved) = removal.moved {
            let from = groups.network(network)?.size();
            let to = membership.enrollee_index;
            match self
                .records
                .get_mut(moved.index())
                .and_then(|r| r.networks.iter_mut().find(|m| m.network == network && m.enrollee_index == from))
            {
                Some(m) => m.enrollee_index = to,
                None => log::warn!("{moved} moved in {network} roster but holds no membership"),
            }
        }
        let dropped = self.links.clear_person(network, person);
        log::trace!("{person} left {network}, dropping {dropped} links");
        Ok(true)
    }

    pub fn is_enrolled_in_network(&self, person: PersonId, network: NetworkId) -> ScheduleResult<bool> {
        Ok(self.record(person)?.is_enrolled_in_network(network))
    }

    // ── Links ─────────────────────────────────────────────────────────────

    /// Create `person → target`.  `Ok(false)` if it already exists.
    pub fn create_network_link_to(&mut self, person: PersonId, target: PersonId, network: NetworkId) -> ScheduleResult<bool> {
        self.record(person)?;
        self.record(target)?;
        Ok(self.links.add_link(network, person, target)?)
    }

    /// Create `source → person`.
    pub fn create_network_link_from(&mut self, person: PersonId, source: PersonId, network: NetworkId) -> ScheduleResult<bool> {
        self.create_network_link_to(source, person, network)
    }

    pub fn destroy_network_link_to(&mut self, person: PersonId, target: PersonId, network: NetworkId) -> bool {
        self.links.remove_link(network, person, target)
    }

    pub fn destroy_network_link_from(&mut self, person: PersonId, source: PersonId, network: NetworkId) -> bool {
        self.links.remove_link(network, source, person)
    }

    /// Drop every link into or out of `person` in `network`, keeping the
    /// membership.
    pub fn clear_network(&mut self, person: PersonId, network: NetworkId) -> usize {
        self.links.clear_person(network, person)
    }

    pub fn get_out_degree(&self, person: PersonId, network: NetworkId) -> usize {
        self.links.out_degree(network, person)
    }

    pub fn get_in_degree(&self, person: PersonId, network: NetworkId) -> usize {
        self.links.in_degree(network, person)
    }

    /// Target of `person`'s `n`-th outgoing link.
    pub fn get_end_of_link(&self, person: PersonId, n: usize, network: NetworkId) -> Option<PersonId> {
        self.links.end_of_link(network, person, n)
    }

    /// Source of `person`'s `n`-th incoming link.
    pub fn get_beginning_of_link(&self, person: PersonId, n: usize, network: NetworkId) -> Option<PersonId> {
        self.links.beginning_of_link(network, person, n)
    }

    pub fn is_connected_to(&self, person: PersonId, target: PersonId, network: NetworkId) -> bool {
        self.links.is_connected(network, person, target)
    }

    pub fn is_connected_from(&self, person: PersonId, source: PersonId, network: NetworkId) -> bool {
        self.links.is_connected(network, source, person)
    }
}
