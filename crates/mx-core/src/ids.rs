//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into SoA `Vec`s via `id.0 as usize`, but callers should
//! prefer the `.index()` helpers for clarity.
//!
//! There is no "invalid" sentinel: an absent reference is `Option<Id>`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a person in population storage.
    pub struct PersonId(u32);
}

typed_id! {
    /// Index of a place (household, school, workplace, …) in the `Groups` arena.
    pub struct PlaceId(u32);
}

typed_id! {
    /// Index of a relationship network in the `Groups` arena.
    pub struct NetworkId(u16);
}

typed_id! {
    /// Index of a modeled condition (disease process).
    pub struct ConditionId(u16);
}

typed_id! {
    /// Slot of a directed link in the link arena.
    pub struct LinkId(u32);
}

// ── GroupId ───────────────────────────────────────────────────────────────────

/// Identity of a mixing group: either a place or a network.
///
/// Used to tag where an infection happened and to address either arena
/// without knowing the concrete variant up front.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GroupId {
    Place(PlaceId),
    Network(NetworkId),
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupId::Place(p)   => p.fmt(f),
            GroupId::Network(n) => n.fmt(f),
        }
    }
}

impl From<PlaceId> for GroupId {
    fn from(id: PlaceId) -> Self {
        GroupId::Place(id)
    }
}

impl From<NetworkId> for GroupId {
    fn from(id: NetworkId) -> Self {
        GroupId::Network(id)
    }
}
