//! Demographic storage: `PersonStore` (SoA arrays indexed by `PersonId`).

use mx_core::PersonId;

/// Biological sex as recorded in the synthetic population.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sex {
    #[default]
    Female,
    Male,
}

// ── PersonStore ───────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for person demographics.
///
/// Every `Vec` field has exactly `count` elements; the `PersonId` value is the
/// index into all of them:
///
/// ```ignore
/// let age = store.age[person.index()];  // O(1), cache-friendly
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonStore {
    /// Number of people.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Age in whole years.
    pub age: Vec<u8>,

    pub sex: Vec<Sex>,

    /// `false` once a person has died or left the population.
    pub alive: Vec<bool>,
}

impl PersonStore {
    /// `true` if there are no people.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `PersonId`s in ascending index order.
    pub fn person_ids(&self) -> impl Iterator<Item = PersonId> + '_ {
        (0..self.count as u32).map(PersonId)
    }

    /// Append a person and return their id.
    pub fn push(&mut self, age: u8, sex: Sex) -> PersonId {
        let id = PersonId(self.count as u32);
        self.age.push(age);
        self.sex.push(sex);
        self.alive.push(true);
        self.count += 1;
        id
    }

    #[inline]
    pub fn contains(&self, person: PersonId) -> bool {
        person.index() < self.count
    }

    /// Mark `person` as removed.  Storage is not compacted, so ids stay stable.
    pub fn remove(&mut self, person: PersonId) {
        self.alive[person.index()] = false;
    }
}
