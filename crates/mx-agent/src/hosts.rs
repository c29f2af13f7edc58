//! The `Hosts` trait: the person interface consumed by the core.

use mx_core::{ConditionId, Day, GroupId, PersonId};

/// Per-person queries and the single infection write-back used by the
/// schedule manager and the transmission engines.
///
/// The schedule manager only reads (`age`, `is_alive`, `is_symptomatic`);
/// transmission reads infectiousness and calls [`infect`][Self::infect] to
/// commit a new infection.
pub trait Hosts {
    fn age(&self, person: PersonId) -> u8;

    fn is_alive(&self, _person: PersonId) -> bool {
        true
    }

    /// `true` if `person` can currently acquire `condition`.
    fn is_susceptible(&self, person: PersonId, condition: ConditionId) -> bool;

    fn is_infectious(&self, person: PersonId, condition: ConditionId) -> bool;

    fn is_symptomatic(&self, person: PersonId, condition: ConditionId) -> bool;

    /// Infectivity scalar; 0 when the person is not infectious.
    fn infectivity(&self, person: PersonId, condition: ConditionId) -> f64;

    /// Susceptibility scalar in `[0, 1]`.
    fn susceptibility(&self, person: PersonId, condition: ConditionId) -> f64;

    /// Record a successful transmission from `infector` to `infectee` in the
    /// mixing group `source` on `day`.  Returns `false` when nothing was
    /// committed because the infectee could no longer acquire `condition`.
    fn infect(
        &mut self,
        infector:  PersonId,
        infectee:  PersonId,
        condition: ConditionId,
        source:    GroupId,
        day:       Day,
    ) -> bool;
}
