//! Persistent relationship networks.

use mx_core::{NetworkId, PersonId};

use crate::roster::{Removal, Roster};
use crate::{PlaceError, PlaceResult};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NetworkKind {
    #[default]
    Generic,
    /// Partner network; the only kind sexual transmission runs on.
    Sexual,
}

/// A named graph people join.  Edges live in the schedule manager's link
/// store; the network itself only tracks who has joined and the contact
/// parameters used by network transmission.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Network {
    pub id:   NetworkId,
    pub name: String,
    pub kind: NetworkKind,

    /// Expected contacts per link per day.
    pub contacts_per_day: f64,

    /// Probability that one contact transmits.
    pub transmission_per_contact: f64,

    roster: Roster,
}

impl Network {
    pub fn new(id: NetworkId, name: impl Into<String>, kind: NetworkKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            contacts_per_day: 0.0,
            transmission_per_contact: 0.0,
            roster: Roster::default(),
        }
    }

    pub fn with_contact_rates(mut self, contacts_per_day: f64, transmission_per_contact: f64) -> Self {
        self.contacts_per_day = contacts_per_day;
        self.transmission_per_contact = transmission_per_contact;
        self
    }

    /// Both contact rates must be finite and non-negative, and the
    /// per-contact probability at most 1.
    pub fn validate(&self) -> PlaceResult<()> {
        let rates = [
            ("contacts_per_day", self.contacts_per_day, f64::INFINITY),
            ("transmission_per_contact", self.transmission_per_contact, 1.0),
        ];
        for (what, value, max) in rates {
            if !(value.is_finite() && value >= 0.0 && value <= max) {
                return Err(PlaceError::InvalidRate { network: self.id, what, value });
            }
        }
        Ok(())
    }

    pub fn enroll(&mut self, person: PersonId) -> usize {
        self.roster.enroll(person)
    }

    pub fn unenroll(&mut self, index: usize) -> Option<Removal> {
        self.roster.remove(index)
    }

    #[inline]
    pub fn members(&self) -> &[PersonId] {
        self.roster.as_slice()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.roster.len()
    }
}
