//! `mx-network` — directed links between people, scoped per network.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                    |
//! |-----------|-------------------------------------------------------------|
//! | [`links`] | `LinkStore` (edge arena + per-person adjacency), `Link`     |
//! | [`error`] | `LinkError`, `LinkResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Link`.                 |

pub mod error;
pub mod links;


pub use error::{LinkError, LinkResult};
pub use links::{Link, LinkStore};
