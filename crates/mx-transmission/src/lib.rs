//! `mx-transmission` — who infects whom inside a mixing group.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                        |
//! |-----------------|-----------------------------------------------------------------|
//! | [`context`]     | `InfectionContext<'a>`: day, condition, hosts, RNG and links for one pass |
//! | [`epidemic`]    | `Epidemic` trait (`become_exposed`), `ExposureLog`              |
//! | [`model`]       | `Transmission` trait, `attempt_transmission`                    |
//! | [`config`]      | `RespiratoryConfig`, `ContactParams`, `ContactModel`, `AgeMatrix` |
//! | [`respiratory`] | `RespiratoryTransmission`: place mixing, four contact models   |
//! | [`sexual`]      | `SexualTransmission`: weighted sampling over network links     |
//! | [`error`]       | `TransmissionError`, `TransmissionResult<T>`                    |
//!
//! # Design notes
//!
//! A pass is one call to [`Transmission::spread_infection`] for one
//! condition and one mixing group:
//!
//! 1. **Read** the group's present members and split out the infectious
//!    ones.  Rosters are never mutated here.
//!
//! 2. **Attempt** each modeled contact through [`attempt_transmission`]:
//!    exactly one uniform draw, commit iff the draw is below the
//!    probability.  A commit infects through `Hosts` and then notifies the
//!    condition's `Epidemic`.
//!
//! Engines match on the [`MixingGroup`][mx_places::MixingGroup] variant once
//! per call and reject variants they do not handle.

pub mod config;
pub mod context;
pub mod epidemic;
pub mod error;
pub mod model;
pub mod respiratory;
pub mod sexual;


pub use config::{AgeMatrix, ContactEntry, ContactModel, ContactParams, RespiratoryConfig};
pub use context::InfectionContext;
pub use epidemic::{Epidemic, ExposureLog};
pub use error::{TransmissionError, TransmissionResult};
pub use model::{Transmission, attempt_transmission};
pub use respiratory::RespiratoryTransmission;
pub use sexual::{SexualTransmission, max_transmissions, select_link};
