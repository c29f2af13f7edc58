//! Activity profiles.

use std::fmt;

/// Broad daily-routine category.  Drives which slots are active on weekdays
/// and weekends.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Profile {
    Infant,
    Preschool,
    Student,
    Teacher,
    Worker,
    WeekendWorker,
    Unemployed,
    Retired,
    Prisoner,
    CollegeStudent,
    Military,
    NursingHomeResident,
    #[default]
    Undefined,
}

impl Profile {
    /// Single-character code used in schedule dumps.
    pub fn code(self) -> char {
        match self {
            Profile::Infant              => 'I',
            Profile::Preschool           => 'P',
            Profile::Student             => 'S',
            Profile::Teacher             => 'T',
            Profile::Worker              => 'W',
            Profile::WeekendWorker       => 'Y',
            Profile::Unemployed          => 'U',
            Profile::Retired             => 'R',
            Profile::Prisoner            => 'J',
            Profile::CollegeStudent      => 'C',
            Profile::Military            => 'M',
            Profile::NursingHomeResident => 'L',
            Profile::Undefined           => 'X',
        }
    }

    pub fn from_code(code: char) -> Option<Profile> {
        Some(match code {
            'I' => Profile::Infant,
            'P' => Profile::Preschool,
            'S' => Profile::Student,
            'T' => Profile::Teacher,
            'W' => Profile::Worker,
            'Y' => Profile::WeekendWorker,
            'U' => Profile::Unemployed,
            'R' => Profile::Retired,
            'J' => Profile::Prisoner,
            'C' => Profile::CollegeStudent,
            'M' => Profile::Military,
            'L' => Profile::NursingHomeResident,
            'X' => Profile::Undefined,
            _ => return None,
        })
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
