//! The `Transmission` trait and the shared attempt/commit step.

use mx_core::{GroupId, PersonId};
use mx_places::MixingGroup;

use crate::{InfectionContext, TransmissionResult};

/// A transmission strategy.
///
/// Implementations decide which contacts happen inside a mixing group and
/// with what probability, then route every contact through
/// [`attempt_transmission`] so all strategies draw and commit the same way.
///
/// # Contract
///
/// * Membership is read from `group` only; it is never changed.
/// * A group with no infectious member for `ctx.condition` produces no
///   state change and no random draw.
/// * A group variant the strategy does not model is rejected with
///   [`TransmissionError::UnsupportedGroup`][crate::TransmissionError::UnsupportedGroup].
///
/// Returns the number of committed infections.
pub trait Transmission {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    fn spread_infection(&self, group: MixingGroup<'_>, ctx: &mut InfectionContext<'_>) -> TransmissionResult<usize>;
}

/// Try to pass `ctx.condition` from `infector` to `infectee` in `source`.
///
/// Makes exactly one uniform draw and commits iff it is below `prob` and the
/// infectee is still susceptible.  A commit infects through `ctx.hosts` and
/// then notifies `ctx.epidemic`; returns `true` only for a commit.
pub fn attempt_transmission(
    prob:     f64,
    infector: PersonId,
    infectee: PersonId,
    source:   GroupId,
    ctx:      &mut InfectionContext<'_>,
) -> bool {
    let draw = ctx.rng.draw_random();
    if draw >= prob {
        log::trace!(
            "{infector} -> {infectee} in {source}: no transmission (draw {draw:.4} >= {prob:.4})"
        );
        return false;
    }
    if !ctx.hosts.infect(infector, infectee, ctx.condition, source, ctx.day) {
        log::trace!("{infector} -> {infectee} in {source}: infectee no longer susceptible");
        return false;
    }
    log::trace!(
        "{infector} -> {infectee} in {source}: transmission of {} on {}",
        ctx.condition,
        ctx.day
    );
    ctx.epidemic.become_exposed(infectee, ctx.day);
    true
}
