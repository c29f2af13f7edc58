//! Contact-rate configuration for respiratory transmission.
//!
//! One [`ContactParams`] per (place type, condition) pair.  Place types
//! without an entry for a condition do not transmit it.
//!
//! ```text
//! contact_rate = contacts_per_day × transmissibility[condition]
//!                × weekend_multiplier   (Saturdays and Sundays only)
//! ```

use mx_core::ConditionId;
use mx_places::PlaceType;
use serde::{Deserialize, Serialize};

use crate::{TransmissionError, TransmissionResult};

/// How contacts inside a place are generated.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum ContactModel {
    /// Each infector makes `contact_rate × infectivity` contacts with
    /// uniformly chosen members.
    #[default]
    Default,
    /// Same contact counts as `Default`; targets weighted by an age matrix.
    AgeBased,
    /// Every infectious–susceptible pair is tried once.
    Pairwise,
    /// Infection count from local density, optionally capped per day.
    Density,
}

/// Age-by-age contact weights, rows indexed by the infector's age bin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgeMatrix {
    /// Width in years of each age bin.  The last bin is open-ended.
    pub bin_width: u8,
    pub values: Vec<Vec<f64>>,
}

impl AgeMatrix {
    pub fn bins(&self) -> usize {
        self.values.len()
    }

    pub fn bin(&self, age: u8) -> usize {
        let bin = (age / self.bin_width.max(1)) as usize;
        bin.min(self.bins().saturating_sub(1))
    }

    /// Contact weight from an infector of `from_age` to a member of `to_age`.
    pub fn weight(&self, from_age: u8, to_age: u8) -> f64 {
        self.values
            .get(self.bin(from_age))
            .and_then(|row| row.get(self.bin(to_age)))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn validate(&self) -> TransmissionResult<()> {
        if self.bin_width == 0 {
            return Err(TransmissionError::Config("age matrix bin width must be positive".into()));
        }
        let n = self.bins();
        if n == 0 || self.values.iter().any(|row| row.len() != n) {
            return Err(TransmissionError::Config(format!(
                "age matrix must be square and non-empty, got {n} rows"
            )));
        }
        if self.values.iter().flatten().any(|&w| !is_rate(w)) {
            return Err(TransmissionError::Config("age matrix weights must be finite and non-negative".into()));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactParams {
    pub model: ContactModel,

    /// Expected contacts per infector per day before transmissibility.
    pub contacts_per_day: f64,

    /// Probability that one contact transmits.
    pub transmission_prob: f64,

    /// Factor on `contacts_per_day` for weekend days.
    pub weekend_multiplier: f64,

    /// Required by [`ContactModel::AgeBased`].
    pub age_matrix: Option<AgeMatrix>,

    /// Daily cap on infections per place under [`ContactModel::Density`].
    pub max_infectees: Option<u32>,
}

impl Default for ContactParams {
    fn default() -> Self {
        Self {
            model:              ContactModel::Default,
            contacts_per_day:   0.0,
            transmission_prob:  1.0,
            weekend_multiplier: 1.0,
            age_matrix:         None,
            max_infectees:      None,
        }
    }
}

impl ContactParams {
    pub fn validate(&self) -> TransmissionResult<()> {
        if !is_rate(self.contacts_per_day) {
            return Err(TransmissionError::Config(format!(
                "contacts_per_day must be finite and non-negative, got {}",
                self.contacts_per_day
            )));
        }
        if !(0.0..=1.0).contains(&self.transmission_prob) {
            return Err(TransmissionError::Config(format!(
                "transmission_prob must be in [0, 1], got {}",
                self.transmission_prob
            )));
        }
        if !is_rate(self.weekend_multiplier) {
            return Err(TransmissionError::Config(format!(
                "weekend_multiplier must be finite and non-negative, got {}",
                self.weekend_multiplier
            )));
        }
        match (&self.age_matrix, self.model) {
            (Some(m), _) => m.validate(),
            (None, ContactModel::AgeBased) => {
                Err(TransmissionError::Config("age-based contact model needs an age matrix".into()))
            }
            (None, _) => Ok(()),
        }
    }
}

/// Contact parameters for one place type and condition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub place_type: PlaceType,
    pub condition:  ConditionId,
    #[serde(default)]
    pub params:     ContactParams,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RespiratoryConfig {
    /// Per-condition scale on every contact rate.  Missing conditions have
    /// transmissibility 0 and never spread by contact.
    pub transmissibility: Vec<f64>,
    pub contacts: Vec<ContactEntry>,
}

impl RespiratoryConfig {
    pub fn transmissibility(&self, condition: ConditionId) -> f64 {
        self.transmissibility.get(condition.index()).copied().unwrap_or(0.0)
    }

    pub fn validate(&self) -> TransmissionResult<()> {
        if let Some(t) = self.transmissibility.iter().find(|&&t| !is_rate(t)) {
            return Err(TransmissionError::Config(format!(
                "transmissibility must be finite and non-negative, got {t}"
            )));
        }
        for (i, entry) in self.contacts.iter().enumerate() {
            entry.params.validate()?;
            let duplicate = self.contacts[..i]
                .iter()
                .any(|e| e.place_type == entry.place_type && e.condition == entry.condition);
            if duplicate {
                return Err(TransmissionError::Config(format!(
                    "duplicate contact parameters for {} / {}",
                    entry.place_type, entry.condition
                )));
            }
        }
        Ok(())
    }
}

fn is_rate(x: f64) -> bool {
    x.is_finite() && x >= 0.0
}
