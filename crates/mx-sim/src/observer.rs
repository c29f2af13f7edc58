//! Simulation observer trait for progress reporting and data collection.

use mx_agent::Population;
use mx_core::{ConditionId, Day};
use mx_schedule::ActivityStore;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// daily loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: incidence counter
///
/// ```rust,ignore
/// struct Incidence(Vec<usize>);
///
/// impl SimObserver for Incidence {
///     fn on_condition_pass(&mut self, _day: Day, _c: ConditionId, infections: usize) {
///         self.0.push(infections);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each day, before schedules are updated.
    fn on_day_start(&mut self, _day: Day) {}

    /// Called after one condition's update and transmission pass.
    /// `infections` counts commits across every mixing group in the pass.
    fn on_condition_pass(&mut self, _day: Day, _condition: ConditionId, _infections: usize) {}

    /// Called at the end of each day with read-only access to population and
    /// schedule state, for output writers.
    fn on_day_end(&mut self, _day: Day, _population: &Population, _activities: &ActivityStore) {}

    /// Called once after the final day completes.
    fn on_sim_end(&mut self, _final_day: Day) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
