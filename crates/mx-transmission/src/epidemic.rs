//! The exposure notification hook.

use mx_core::{Day, PersonId};

/// Receiver of new exposures for one condition.
///
/// The condition's natural history (latent and infectious periods,
/// recovery) lives behind this trait; the transmission engines only report
/// that `person` was exposed on `day`.
pub trait Epidemic {
    fn become_exposed(&mut self, person: PersonId, day: Day);
}

/// An `Epidemic` that just records every notification, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExposureLog {
    pub events: Vec<(PersonId, Day)>,
}

impl ExposureLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn people(&self) -> impl Iterator<Item = PersonId> + '_ {
        self.events.iter().map(|&(p, _)| p)
    }
}

impl Epidemic for ExposureLog {
    fn become_exposed(&mut self, person: PersonId, day: Day) {
        self.events.push((person, day));
    }
}
