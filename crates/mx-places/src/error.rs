//! Mixing-group error type.

use thiserror::Error;

use mx_core::{GroupId, MxError, NetworkId, PlaceId};

#[derive(Debug, Error)]
pub enum PlaceError {
    #[error(transparent)]
    Core(#[from] MxError),

    #[error("no member at position {index} in {group}")]
    NotEnrolled { group: GroupId, index: usize },

    #[error("{0} cannot hold rooms")]
    NoRooms(PlaceId),

    #[error("{network}: {what} must be finite and non-negative, got {value}")]
    InvalidRate {
        network: NetworkId,
        what:    &'static str,
        value:   f64,
    },
}

pub type PlaceResult<T> = Result<T, PlaceError>;
