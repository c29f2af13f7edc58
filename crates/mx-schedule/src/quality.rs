//! Population quality checks.

use mx_agent::Hosts;
use mx_core::PersonId;
use mx_places::{Groups, PlaceType};

use crate::{ActivityStore, HouseholdHeads};

impl ActivityStore {
    /// Find the head of every household: the oldest resident of at least
    /// `adult_age`, lowest id on ties.  Households without one are logged
    /// and skipped.
    pub fn household_heads(&self, groups: &Groups, hosts: &dyn Hosts) -> HouseholdHeads {
        let adult_age = self.config.adult_age;
        let mut heads: Vec<Option<(u8, PersonId)>> = vec![None; groups.place_count()];

        for (idx, rec) in self.records.iter().enumerate() {
            let person = PersonId(idx as u32);
            let Some(home) = rec.household() else { continue };
            if rec.terminated {
                continue;
            }
            let age = hosts.age(person);
            if age < adult_age {
                continue;
            }
            let Some(best) = heads.get_mut(home.index()) else { continue };
            if best.is_none_or(|(a, _)| age > a) {
                *best = Some((age, person));
            }
        }

        let mut out = HouseholdHeads::default();
        for place in groups.places().iter().filter(|p| p.place_type == PlaceType::Household) {
            match heads[place.id.index()] {
                Some((age, _)) => {
                    out.histogram[(age as usize / 10).min(9)] += 1;
                    out.total += 1;
                }
                None => {
                    log::warn!(
                        "no head of household found for {} ({}), group quarters: {}",
                        place.id,
                        place.label,
                        place.subtype.is_group_quarters()
                    );
                    out.skipped += 1;
                }
            }
        }
        out
    }
}
