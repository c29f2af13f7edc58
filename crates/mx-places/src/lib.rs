//! `mx-places` — the mixing groups people are enrolled in.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`roster`]  | `Roster`: present-member list with swap-remove indices         |
//! | [`place`]   | `Place`, `PlaceType`, `PlaceSubtype`                            |
//! | [`network`] | `Network`, `NetworkKind`                                        |
//! | [`groups`]  | `Groups` arena (all places and networks), room assignment       |
//! | [`mixing`]  | `MixingGroup`: borrowed place-or-network view                  |
//! | [`error`]   | `PlaceError`, `PlaceResult<T>`                                  |
//!
//! # Membership indices
//!
//! Every roster hands out a position on `enroll` and compacts with
//! `swap_remove` on `unenroll`.  The caller stores the position and, when
//! `unenroll` reports that another member was moved into the vacated slot,
//! updates that member's stored position.  The schedule manager is the only
//! caller that does this.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod groups;
pub mod mixing;
pub mod network;
pub mod place;
pub mod roster;

#[cfg(test)]
mod tests;

pub use error::{PlaceError, PlaceResult};
pub use groups::Groups;
pub use mixing::MixingGroup;
pub use network::{Network, NetworkKind};
pub use place::{Place, PlaceSubtype, PlaceType};
pub use roster::{Removal, Roster};
