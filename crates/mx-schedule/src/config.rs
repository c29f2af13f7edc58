//! Static schedule configuration.
//!
//! Built once at setup and owned by the `ActivityStore`; never mutated
//! during a run.
//!
//! # Sick-leave distributions
//!
//! Whether an employee has paid sick leave is drawn once from one of two
//! tables, selected by [`SickLeaveMethod`]:
//!
//! ```text
//! WorkplaceSize:  bucket = first k with workplace.size() <= size_max[k]
//!                          (sizes above every maximum use the last bucket)
//!                 available with prob size_prob[bucket], days = size_days[bucket]
//!
//! IncomeQuartile: bucket = household income quartile (0..=3)
//!                 available with prob quartile_prob[bucket], days = quartile_mean_days
//! ```

use serde::{Deserialize, Serialize};

use crate::{ScheduleError, ScheduleResult};

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum SickLeaveMethod {
    #[default]
    WorkplaceSize,
    IncomeQuartile,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SickLeaveConfig {
    pub method: SickLeaveMethod,

    /// Upper size limit of each workplace-size bucket, ascending.  One
    /// extra overflow bucket follows the last limit.
    pub size_max: Vec<usize>,

    /// Probability of having sick leave, one per bucket (`size_max.len() + 1`).
    pub size_prob: Vec<f64>,

    /// Sick days granted, one per bucket (`size_max.len() + 1`).
    pub size_days: Vec<f64>,

    /// Probability of having sick leave by household income quartile.
    pub quartile_prob: [f64; 4],

    /// Sick days granted to every employee with leave under `IncomeQuartile`.
    pub quartile_mean_days: f64,

    /// Probability a symptomatic employee stays home when leave is available.
    pub stay_home_with_leave: f64,

    /// Probability a symptomatic employee stays home without leave.
    pub stay_home_without_leave: f64,

    /// Probability a symptomatic student stays home on a school day.
    pub school_stay_home_prob: f64,
}

impl Default for SickLeaveConfig {
    fn default() -> Self {
        Self {
            method:                  SickLeaveMethod::WorkplaceSize,
            size_max:                vec![49, 99, 499],
            size_prob:               vec![0.53, 0.58, 0.70, 0.85],
            size_days:               vec![5.0, 5.0, 7.0, 10.0],
            quartile_prob:           [0.31, 0.55, 0.73, 0.84],
            quartile_mean_days:      6.0,
            stay_home_with_leave:    0.7,
            stay_home_without_leave: 0.35,
            school_stay_home_prob:   0.5,
        }
    }
}

impl SickLeaveConfig {
    /// Bucket index for a workplace of `size`.
    pub fn size_bucket(&self, size: usize) -> usize {
        self.size_max.iter().position(|&max| size <= max).unwrap_or(self.size_max.len())
    }

    pub fn validate(&self) -> ScheduleResult<()> {
        let buckets = self.size_max.len() + 1;
        if self.size_prob.len() != buckets || self.size_days.len() != buckets {
            return Err(ScheduleError::Config(format!(
                "workplace-size sick leave needs {buckets} probabilities and day counts, got {} and {}",
                self.size_prob.len(),
                self.size_days.len()
            )));
        }
        if self.size_max.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ScheduleError::Config("workplace size limits must be ascending".into()));
        }
        let probs = self
            .size_prob
            .iter()
            .chain(&self.quartile_prob)
            .chain([&self.stay_home_with_leave, &self.stay_home_without_leave, &self.school_stay_home_prob]);
        for &p in probs {
            check_prob("sick-leave probability", p)?;
        }
        if self.size_days.iter().chain([&self.quartile_mean_days]).any(|&d| d < 0.0) {
            return Err(ScheduleError::Config("sick days must be non-negative".into()));
        }
        Ok(())
    }
}

// ── ActivitiesConfig ──────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivitiesConfig {
    /// Children younger than this with no school are preschoolers.
    pub school_age: u8,

    /// Age at which workers and the unemployed retire.
    pub retirement_age: u8,

    /// Minimum age of a household head.
    pub adult_age: u8,

    /// Probability that a new worker works weekends.
    pub weekend_worker_prob: f64,

    /// Daily probability that an on-shift worker skips work.
    pub work_absenteeism: f64,

    /// Daily probability that a student skips school.
    pub school_absenteeism: f64,

    pub sick_leave: SickLeaveConfig,
}

impl Default for ActivitiesConfig {
    fn default() -> Self {
        Self {
            school_age:          5,
            retirement_age:      67,
            adult_age:           18,
            weekend_worker_prob: 0.2,
            work_absenteeism:    0.0,
            school_absenteeism:  0.0,
            sick_leave:          SickLeaveConfig::default(),
        }
    }
}

impl ActivitiesConfig {
    pub fn validate(&self) -> ScheduleResult<()> {
        check_prob("weekend_worker_prob", self.weekend_worker_prob)?;
        check_prob("work_absenteeism", self.work_absenteeism)?;
        check_prob("school_absenteeism", self.school_absenteeism)?;
        if self.school_age >= self.retirement_age {
            return Err(ScheduleError::Config(format!(
                "school age {} must be below retirement age {}",
                self.school_age, self.retirement_age
            )));
        }
        self.sick_leave.validate()
    }
}

fn check_prob(name: &str, p: f64) -> ScheduleResult<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(ScheduleError::Config(format!("{name} must be in [0, 1], got {p}")))
    }
}
