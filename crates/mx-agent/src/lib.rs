//! `mx-agent` — population storage and the person-facing `Hosts` interface.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`hosts`]   | `Hosts` trait: what the schedule and transmission code may ask of a person |
//! | [`store`]   | `PersonStore` (SoA demographics), `Sex`                         |
//! | [`health`]  | `HealthStore`, `InfectionState`, `Exposure`                     |
//! | [`builder`] | `PopulationBuilder`, `Population` (store + health, implements `Hosts`) |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types.     |
//!
//! Disease natural history (exposed → infectious → recovered timing) is not
//! modeled here; external condition models drive it through the
//! `HealthStore` setters.

pub mod builder;
pub mod health;
pub mod hosts;
pub mod store;


pub use builder::{Population, PopulationBuilder};
pub use health::{Exposure, HealthStore, InfectionState};
pub use hosts::Hosts;
pub use store::{PersonStore, Sex};
