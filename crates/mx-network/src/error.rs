//! Link-store error type.

use thiserror::Error;

use mx_core::{NetworkId, PersonId};

/// Errors produced by `mx-network`.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("{person} cannot link to itself in {network}")]
    SelfLink { network: NetworkId, person: PersonId },

    #[error("link arena is full")]
    ArenaFull,
}

pub type LinkResult<T> = Result<T, LinkError>;
