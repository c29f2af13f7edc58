//! Mutable state borrowed by one transmission pass.

use mx_agent::Hosts;
use mx_core::{ConditionId, Day, SimRng};
use mx_network::LinkStore;

use crate::Epidemic;

/// Everything a [`Transmission`][crate::Transmission] engine may read or
/// change while spreading one condition through one mixing group.
///
/// Built by the driver once per condition pass and reused across every
/// group in that pass.
///
/// # Lifetimes
///
/// All borrows live for one condition pass.  Rosters are not reachable from
/// here: engines see membership only through the `MixingGroup` they are
/// handed, which is read-only.
pub struct InfectionContext<'a> {
    /// Current simulation day.
    pub day: Day,

    /// Condition being spread.
    pub condition: ConditionId,

    /// `true` on Saturdays and Sundays; respiratory contact rates apply the
    /// weekend multiplier.
    pub weekend: bool,

    /// Person state: susceptibility, infectivity, and infection commits.
    pub hosts: &'a mut dyn Hosts,

    /// Natural-history owner of `condition`, told about every new exposure.
    pub epidemic: &'a mut dyn Epidemic,

    /// The run's single random stream.
    pub rng: &'a mut SimRng,

    /// Directed network links, used by network engines.
    pub links: &'a LinkStore,
}

impl<'a> InfectionContext<'a> {
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        day:       Day,
        condition: ConditionId,
        weekend:   bool,
        hosts:     &'a mut dyn Hosts,
        epidemic:  &'a mut dyn Epidemic,
        rng:       &'a mut SimRng,
        links:     &'a LinkStore,
    ) -> Self {
        Self { day, condition, weekend, hosts, epidemic, rng, links }
    }
}
