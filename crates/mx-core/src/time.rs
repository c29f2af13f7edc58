//! Simulation time model.
//!
//! # Design
//!
//! The simulation advances in whole days.  `Day` is a plain counter from the
//! start of the run; the only calendar fact the core needs is the day of the
//! week (weekday schedules differ from weekend schedules), which
//! `SimCalendar` derives from the weekday of day 0:
//!
//!   weekday(day) = (start_weekday + day) mod 7
//!
//! Integer days keep all schedule arithmetic (hospital discharge, return from
//! travel, closure windows) exact.

use std::fmt;

// ── Day ──────────────────────────────────────────────────────────────────────

/// An absolute simulation day counter, starting at 0.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Day(pub u32);

impl Day {
    pub const ZERO: Day = Day(0);

    /// Return the day `n` days after `self`.
    #[inline]
    pub fn offset(self, n: u32) -> Day {
        Day(self.0 + n)
    }

    /// Days elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Day) -> u32 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u32> for Day {
    type Output = Day;
    #[inline]
    fn add(self, rhs: u32) -> Day {
        Day(self.0 + rhs)
    }
}

impl std::ops::Sub for Day {
    type Output = u32;
    #[inline]
    fn sub(self, rhs: Day) -> u32 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}", self.0)
    }
}

// ── Weekday ───────────────────────────────────────────────────────────────────

/// Day of the week, Sunday first.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weekday {
    Sunday,
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Index with Sunday = 0 … Saturday = 6.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(i: usize) -> Weekday {
        Self::ALL[i % 7]
    }

    /// Monday through Friday.
    #[inline]
    pub fn is_weekday(self) -> bool {
        !matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

// ── SimCalendar ───────────────────────────────────────────────────────────────

/// Maps simulation days to days of the week.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimCalendar {
    /// Weekday of `Day(0)`.
    pub start_weekday: Weekday,
}

impl SimCalendar {
    pub fn new(start_weekday: Weekday) -> Self {
        Self { start_weekday }
    }

    #[inline]
    pub fn weekday(&self, day: Day) -> Weekday {
        Weekday::from_index(self.start_weekday.index() + day.0 as usize)
    }

    #[inline]
    pub fn is_weekday(&self, day: Day) -> bool {
        self.weekday(day).is_weekday()
    }

    #[inline]
    pub fn is_weekend(&self, day: Day) -> bool {
        !self.is_weekday(day)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically loaded from a parameter file by the application crate and passed
/// to the simulation runner.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of days to simulate.
    pub days: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// 1-based run number within a batch of replicates.
    pub run_number: u32,

    /// Optional day on which the random stream is re-seeded, so replicates
    /// share an identical history up to that day and diverge afterwards.
    pub reseed_day: Option<Day>,

    /// Weekday of day 0.
    pub start_weekday: Weekday,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            days:          100,
            seed:          123_456,
            run_number:    1,
            reseed_day:    None,
            start_weekday: Weekday::Monday,
        }
    }
}

impl SimConfig {
    /// The seed used at the start of the run.
    ///
    /// Replicates without a reseed day get distinct seeds
    /// (`seed * 100 + run_number - 1`); with a reseed day every replicate
    /// starts from `seed` and diverges only at the reseed.
    pub fn simulation_seed(&self) -> u64 {
        if self.run_number > 1 && self.reseed_day.is_none() {
            self.seed
                .wrapping_mul(100)
                .wrapping_add(u64::from(self.run_number - 1))
        } else {
            self.seed
        }
    }

    /// The seed applied on `reseed_day`.
    pub fn reseed_seed(&self) -> u64 {
        self.simulation_seed()
            .wrapping_add(u64::from(self.run_number.saturating_sub(1)))
    }

    /// The exclusive final day.
    #[inline]
    pub fn end_day(&self) -> Day {
        Day(self.days)
    }

    /// Construct a `SimCalendar` pre-configured for this run.
    pub fn make_calendar(&self) -> SimCalendar {
        SimCalendar::new(self.start_weekday)
    }
}
