//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `MxError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::{ConditionId, NetworkId, PersonId, PlaceId};

/// The top-level error type for `mx-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum MxError {
    #[error("person {0} not found")]
    PersonNotFound(PersonId),

    #[error("place {0} not found")]
    PlaceNotFound(PlaceId),

    #[error("network {0} not found")]
    NetworkNotFound(NetworkId),

    #[error("condition {0} not configured")]
    ConditionNotFound(ConditionId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `mx-*` crates.
pub type MxResult<T> = Result<T, MxError>;
