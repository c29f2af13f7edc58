//! Present-member list shared by places and networks.

use mx_core::PersonId;

/// Outcome of removing the member at one position.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Removal {
    pub removed: PersonId,
    /// The former last member, now stored at the vacated position.
    pub moved: Option<PersonId>,
}

/// Ordered list of the people currently present in a group.
///
/// Order is insertion order except that removal moves the last member into
/// the vacated slot.  Enumeration is deterministic for a given sequence of
/// enroll/unenroll calls.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    members: Vec<PersonId>,
}

impl Roster {
    /// Append `person` and return the position they were stored at.
    pub fn enroll(&mut self, person: PersonId) -> usize {
        self.members.push(person);
        self.members.len() - 1
    }

    /// Remove the member at `index`.  `None` if the position is empty.
    pub fn remove(&mut self, index: usize) -> Option<Removal> {
        if index >= self.members.len() {
            return None;
        }
        let removed = self.members.swap_remove(index);
        let moved = self.members.get(index).copied();
        Some(Removal { removed, moved })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[PersonId] {
        &self.members
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<PersonId> {
        self.members.get(index).copied()
    }

    pub fn contains(&self, person: PersonId) -> bool {
        self.members.contains(&person)
    }
}
