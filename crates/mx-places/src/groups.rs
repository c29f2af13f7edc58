//! `Groups`: the arena that owns every place and network.

use mx_core::{GroupId, MxError, NetworkId, PersonId, PlaceId};

use crate::{
    MixingGroup, Network, NetworkKind, Place, PlaceError, PlaceResult, PlaceType, Removal,
};

/// Owns all places and networks, indexed by `PlaceId` / `NetworkId`.
///
/// Ids are sequential from 0 in creation order, so iteration in id order is
/// iteration in creation order.
#[derive(Clone, Debug, Default)]
pub struct Groups {
    places:   Vec<Place>,
    networks: Vec<Network>,
}

impl Groups {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Add a place and return its id.
    pub fn add_place(&mut self, label: impl Into<String>, place_type: PlaceType) -> PlaceId {
        let id = PlaceId(self.places.len() as u32);
        self.places.push(Place::new(id, label, place_type));
        id
    }

    /// Add a household inside `neighborhood`.
    pub fn add_household(
        &mut self,
        label:           impl Into<String>,
        neighborhood:    Option<PlaceId>,
        income_quartile: Option<u8>,
    ) -> PlaceId {
        let id = self.add_place(label, PlaceType::Household);
        let place = &mut self.places[id.index()];
        place.neighborhood = neighborhood;
        place.income_quartile = income_quartile.map(|q| q.min(3));
        id
    }

    /// Add a classroom (inside a school) or an office (inside a workplace or
    /// hospital).  `grade` is only recorded for classrooms.
    pub fn add_room(&mut self, parent: PlaceId, grade: Option<u8>) -> PlaceResult<PlaceId> {
        let parent_place = self.place(parent)?;
        let room_type = match parent_place.place_type {
            PlaceType::School => PlaceType::Classroom,
            PlaceType::Workplace | PlaceType::Hospital => PlaceType::Office,
            _ => return Err(PlaceError::NoRooms(parent)),
        };
        let label = format!("{}-{}", parent_place.label, parent_place.rooms.len());

        let id = self.add_place(label, room_type);
        let room = &mut self.places[id.index()];
        room.parent = Some(parent);
        if room_type == PlaceType::Classroom {
            room.grade = grade;
        }
        self.places[parent.index()].rooms.push(id);
        Ok(id)
    }

    pub fn add_network(&mut self, name: impl Into<String>, kind: NetworkKind) -> NetworkId {
        let id = NetworkId(self.networks.len() as u16);
        self.networks.push(Network::new(id, name, kind));
        id
    }

    /// Pick a room of `parent` round-robin.  For schools only classrooms of
    /// `grade` are candidates.  `Ok(None)` if there is no candidate.
    pub fn assign_room(&mut self, parent: PlaceId, grade: Option<u8>) -> PlaceResult<Option<PlaceId>> {
        let parent_place = self.place(parent)?;
        let candidates: Vec<PlaceId> = if parent_place.place_type == PlaceType::School {
            parent_place
                .rooms
                .iter()
                .copied()
                .filter(|r| self.places[r.index()].grade == grade)
                .collect()
        } else {
            parent_place.rooms.clone()
        };
        if candidates.is_empty() {
            return Ok(None);
        }
        let parent_place = &mut self.places[parent.index()];
        let room = candidates[parent_place.next_room % candidates.len()];
        parent_place.next_room += 1;
        Ok(Some(room))
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn place(&self, id: PlaceId) -> PlaceResult<&Place> {
        self.places.get(id.index()).ok_or(PlaceError::Core(MxError::PlaceNotFound(id)))
    }

    pub fn place_mut(&mut self, id: PlaceId) -> PlaceResult<&mut Place> {
        self.places.get_mut(id.index()).ok_or(PlaceError::Core(MxError::PlaceNotFound(id)))
    }

    pub fn network(&self, id: NetworkId) -> PlaceResult<&Network> {
        self.networks.get(id.index()).ok_or(PlaceError::Core(MxError::NetworkNotFound(id)))
    }

    pub fn network_mut(&mut self, id: NetworkId) -> PlaceResult<&mut Network> {
        self.networks.get_mut(id.index()).ok_or(PlaceError::Core(MxError::NetworkNotFound(id)))
    }

    pub fn group(&self, id: GroupId) -> PlaceResult<MixingGroup<'_>> {
        match id {
            GroupId::Place(p)   => self.place(p).map(MixingGroup::Place),
            GroupId::Network(n) => self.network(n).map(MixingGroup::Network),
        }
    }

    #[inline]
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    #[inline]
    pub fn networks(&self) -> &[Network] {
        &self.networks
    }

    pub fn place_count(&self) -> usize {
        self.places.len()
    }

    pub fn network_count(&self) -> usize {
        self.networks.len()
    }

    // ── Presence ──────────────────────────────────────────────────────────

    pub fn enroll(&mut self, group: GroupId, person: PersonId) -> PlaceResult<usize> {
        match group {
            GroupId::Place(p)   => Ok(self.place_mut(p)?.enroll(person)),
            GroupId::Network(n) => Ok(self.network_mut(n)?.enroll(person)),
        }
    }

    pub fn unenroll(&mut self, group: GroupId, index: usize) -> PlaceResult<Removal> {
        let removal = match group {
            GroupId::Place(p)   => self.place_mut(p)?.unenroll(index),
            GroupId::Network(n) => self.network_mut(n)?.unenroll(index),
        };
        removal.ok_or(PlaceError::NotEnrolled { group, index })
    }
}
