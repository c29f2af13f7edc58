//! `mx-schedule` — where each person is each day, and why.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`activity`]   | `ActivityType`, `Slot`, `ActivitySlots`, `SlotSnapshot`   |
//! | [`profile`]    | `Profile`                                                 |
//! | [`record`]     | `Activities` (per-person record), `SickLeave`             |
//! | [`config`]     | `ActivitiesConfig`, `SickLeaveConfig`, `SickLeaveMethod`  |
//! | [`store`]      | `ActivityStore`: setup, daily update, presence, termination |
//! | `slots`        | slot assignment (`assign_*`, `change_*`)                  |
//! | `travel`       | travel snapshot/restore, hospitalization                  |
//! | `networks`     | network membership and directed links                     |
//! | `sick_leave`   | sick-leave initialization and the cached decision         |
//! | `quality`      | household-head check                                      |
//! | [`stats`]      | `ActivityStats`, `HouseholdHeads`                         |
//! | [`error`]      | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Status flags (summary)
//!
//! Status is a set of orthogonal flags, evaluated each day in precedence
//! order:
//!
//! ```text
//! traveling outside area   → nothing on
//! hospitalized             → hospital only
//! confined (any reason)    → household only
//! otherwise                → household, neighborhood, weekday or weekend
//!                            slots, ad hoc; closed places, absenteeism and
//!                            symptoms then switch slots off
//! ```

pub mod activity;
pub mod config;
pub mod error;
pub mod profile;
pub mod record;
pub mod stats;
pub mod store;

mod networks;
mod quality;
mod sick_leave;
mod slots;
mod travel;


pub use activity::{ActivitySlots, ActivityType, Slot, SlotSnapshot};
pub use config::{ActivitiesConfig, SickLeaveConfig, SickLeaveMethod};
pub use error::{ScheduleError, ScheduleResult};
pub use profile::Profile;
pub use record::{Activities, NetworkMembership, SickLeave};
pub use stats::{ActivityStats, HouseholdHeads};
pub use store::ActivityStore;
