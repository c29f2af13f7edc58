use mx_core::GroupId;
use mx_places::PlaceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransmissionError {
    /// The engine was handed a mixing group variant it does not model.
    #[error("{engine} transmission cannot run on {group}")]
    UnsupportedGroup { engine: &'static str, group: GroupId },

    #[error("transmission configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Place(#[from] PlaceError),
}

pub type TransmissionResult<T> = Result<T, TransmissionError>;
