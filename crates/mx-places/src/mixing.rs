//! `MixingGroup`: a borrowed view of either a place or a network.
//!
//! Transmission engines take a `MixingGroup` and match on the variant once
//! per call; an engine that does not handle a variant rejects it.

use mx_agent::Hosts;
use mx_core::{ConditionId, Day, GroupId, PersonId};

use crate::{Network, Place};

#[derive(Copy, Clone, Debug)]
pub enum MixingGroup<'a> {
    Place(&'a Place),
    Network(&'a Network),
}

impl<'a> MixingGroup<'a> {
    pub fn id(&self) -> GroupId {
        match self {
            MixingGroup::Place(p)   => GroupId::Place(p.id),
            MixingGroup::Network(n) => GroupId::Network(n.id),
        }
    }

    pub fn label(&self) -> &'a str {
        match self {
            MixingGroup::Place(p)   => &p.label,
            MixingGroup::Network(n) => &n.name,
        }
    }

    /// Members present today, in roster order.
    pub fn members(&self) -> &'a [PersonId] {
        match self {
            MixingGroup::Place(p)   => p.members(),
            MixingGroup::Network(n) => n.members(),
        }
    }

    /// Number of members present today.
    pub fn size(&self) -> usize {
        self.members().len()
    }

    /// Networks never close.
    pub fn is_open(&self, day: Day) -> bool {
        match self {
            MixingGroup::Place(p)   => p.is_open(day),
            MixingGroup::Network(_) => true,
        }
    }

    /// Present members infectious for `condition`, in roster order.
    pub fn infectious_members(&self, condition: ConditionId, hosts: &dyn Hosts) -> Vec<PersonId> {
        self.members()
            .iter()
            .copied()
            .filter(|&p| hosts.is_infectious(p, condition))
            .collect()
    }

    /// Present members susceptible to `condition`, in roster order.
    pub fn susceptible_members(&self, condition: ConditionId, hosts: &dyn Hosts) -> Vec<PersonId> {
        self.members()
            .iter()
            .copied()
            .filter(|&p| hosts.is_susceptible(p, condition))
            .collect()
    }
}
