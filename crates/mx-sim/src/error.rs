use mx_core::MxError;
use mx_places::PlaceError;
use mx_schedule::ScheduleError;
use mx_transmission::TransmissionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} count {got} does not match {expected}")]
    CountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error(transparent)]
    Core(#[from] MxError),

    #[error(transparent)]
    Place(#[from] PlaceError),

    #[error("schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("transmission error: {0}")]
    Transmission(#[from] TransmissionError),
}

pub type SimResult<T> = Result<T, SimError>;
