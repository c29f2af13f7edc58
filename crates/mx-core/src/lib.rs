//! `mx-core` — foundational types for the `mixsim` epidemic framework.
//!
//! This crate is a dependency of every other `mx-*` crate.  It intentionally
//! has no `mx-*` dependencies and minimal external ones (`rand`,
//! `rand_chacha`, `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`ids`]         | `PersonId`, `PlaceId`, `NetworkId`, `ConditionId`, `LinkId`, `GroupId` |
//! | [`time`]        | `Day`, `Weekday`, `SimCalendar`, `SimConfig`                |
//! | [`rng`]         | `SimRng`: the single seeded random stream                  |
//! | [`error`]       | `MxError`, `MxResult`                                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and calendar types.  |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{MxError, MxResult};
pub use ids::{ConditionId, GroupId, LinkId, NetworkId, PersonId, PlaceId};
pub use rng::SimRng;
pub use time::{Day, SimCalendar, SimConfig, Weekday};
