//! Run-level schedule counters.

/// Counters accumulated by the schedule manager over a run.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivityStats {
    pub entered_school: u64,
    pub left_school: u64,

    /// Paid sick days consumed by symptomatic employees staying home.
    pub sick_days_used: u64,

    /// Workdays on which a symptomatic employee went to work anyway.
    pub sick_days_present: u64,

    /// Workdays missed by symptomatic employees, paid or not.
    pub employees_missing_work: u64,

    /// School days missed by symptomatic students.
    pub school_sick_days_absent: u64,
}

/// Household-head age distribution produced by
/// [`ActivityStore::household_heads`][crate::ActivityStore::household_heads].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HouseholdHeads {
    /// Heads per 10-year age bin; the last bin holds everyone 90 and over.
    pub histogram: [u32; 10],
    /// Households with a head.
    pub total: u32,
    /// Households with no resident old enough to head them.
    pub skipped: u32,
}
