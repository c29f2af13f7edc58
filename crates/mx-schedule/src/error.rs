use thiserror::Error;

use mx_core::{ConditionId, MxError, PersonId};
use mx_network::LinkError;
use mx_places::PlaceError;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("activity slot index {0} out of range")]
    InvalidSlot(usize),

    #[error("{0} has no activity record")]
    UnknownPerson(PersonId),

    #[error("{condition} is not tracked ({tracked} conditions)")]
    UnknownCondition {
        condition: ConditionId,
        tracked:   usize,
    },

    #[error("{0} has been terminated")]
    Terminated(PersonId),

    #[error("hospital stay for {0} must last at least one day")]
    EmptyHospitalStay(PersonId),

    #[error("invalid activities configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] MxError),

    #[error(transparent)]
    Place(#[from] PlaceError),

    #[error(transparent)]
    Link(#[from] LinkError),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
