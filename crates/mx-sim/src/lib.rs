//! `mx-sim` — daily epidemic driver for the mixsim framework.
//!
//! # Daily loop
//!
//! ```text
//! for day in 0..config.days:
//!   ① Reseed      on config.reseed_day only, with config.reseed_seed().
//!   ② Schedules   ActivityStore::update: end hospital stays and trips,
//!                 then recompute everyone's slots and rosters.
//!   ③ Conditions  order shuffled with the run RNG (more than one only);
//!                 for each:
//!                    Condition::update      natural history, interventions
//!                    transmission pass      places in id order (respiratory)
//!                                           or sexual networks in id order
//! ```
//!
//! Rosters change only in ②; engines in ③ read them and change only
//! infection state.
//!
//! # Modules
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`sim`]       | `Sim` and the daily loop                              |
//! | [`builder`]   | `SimBuilder`                                          |
//! | [`condition`] | `Condition`, `TransmissionMode`, `DayContext`, `FixedCourse` |
//! | [`observer`]  | `SimObserver`, `NoopObserver`                         |
//! | [`logging`]   | `log4rs` console setup: `set_log_level`, module filters |
//! | [`error`]     | `SimError`, `SimResult<T>`                            |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mx_sim::{FixedCourse, NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(config, population, groups, activities)
//!     .condition(FixedCourse::new("flu", 2, 5))
//!     .respiratory(contacts)
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod condition;
pub mod error;
pub mod logging;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use condition::{Condition, DayContext, FixedCourse, TransmissionMode};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
