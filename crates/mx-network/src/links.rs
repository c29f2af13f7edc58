//! Directed link storage.
//!
//! # Data layout
//!
//! Links live in a single arena indexed by `LinkId`.  Removed slots go on a
//! free list and are reused, so `LinkId`s are stable for the lifetime of the
//! link they name but not beyond it.
//!
//! Each `(network, person)` pair owns two adjacency lists of `LinkId`s:
//!
//! ```text
//! out_links[(net, p)] = [l0, l1, …]   // links p → *, in creation order
//! in_links [(net, p)] = [m0, m1, …]   // links * → p, in creation order
//! ```
//!
//! Removal preserves the order of the remaining entries, so a local index
//! `n` into `out_links[(net, p)]` names the same target until the next
//! mutation of that list.  Sexual transmission relies on this when it maps
//! a sampled link number back to a partner.

use rustc_hash::FxHashMap;

use mx_core::{LinkId, NetworkId, PersonId};

use crate::{LinkError, LinkResult};

/// One directed edge `from → to` inside `network`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    pub network: NetworkId,
    pub from:    PersonId,
    pub to:      PersonId,
}

type Adjacency = FxHashMap<(NetworkId, PersonId), Vec<LinkId>>;

// ── LinkStore ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct LinkStore {
    edges:     Vec<Option<Link>>,
    free:      Vec<LinkId>,
    out_links: Adjacency,
    in_links:  Adjacency,
    /// `(network, from, to)` → link, for idempotent creation.
    lookup:    FxHashMap<(NetworkId, PersonId, PersonId), LinkId>,
}

impl LinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live links across all networks.
    pub fn link_count(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.edges.get(id.index()).and_then(Option::as_ref)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Create `from → to` in `network`.
    ///
    /// Returns `Ok(false)` if the link already exists; nothing changes in
    /// that case.
    pub fn add_link(&mut self, network: NetworkId, from: PersonId, to: PersonId) -> LinkResult<bool> {
        if from == to {
            return Err(LinkError::SelfLink { network, person: from });
        }
        if self.lookup.contains_key(&(network, from, to)) {
            return Ok(false);
        }

        let link = Link { network, from, to };
        let id = match self.free.pop() {
            Some(id) => {
                self.edges[id.index()] = Some(link);
                id
            }
            None => {
                let id = LinkId::try_from(self.edges.len()).map_err(|_| LinkError::ArenaFull)?;
                self.edges.push(Some(link));
                id
            }
        };

        self.lookup.insert((network, from, to), id);
        self.out_links.entry((network, from)).or_default().push(id);
        self.in_links.entry((network, to)).or_default().push(id);
        log::trace!("link {id}: {from} -> {to} in {network}");
        Ok(true)
    }

    /// Remove `from → to` in `network`.  Returns `false` if there was no such
    /// link.
    pub fn remove_link(&mut self, network: NetworkId, from: PersonId, to: PersonId) -> bool {
        let Some(id) = self.lookup.remove(&(network, from, to)) else {
            return false;
        };
        detach(&mut self.out_links, (network, from), id);
        detach(&mut self.in_links, (network, to), id);
        self.edges[id.index()] = None;
        self.free.push(id);
        true
    }

    /// Drop every link into or out of `person` in `network`.  Returns the
    /// number of links removed.
    pub fn clear_person(&mut self, network: NetworkId, person: PersonId) -> usize {
        let targets: Vec<PersonId> = self.out_neighbors(network, person).collect();
        let sources: Vec<PersonId> = self.in_neighbors(network, person).collect();
        let mut removed = 0;
        for to in targets {
            removed += usize::from(self.remove_link(network, person, to));
        }
        for from in sources {
            removed += usize::from(self.remove_link(network, from, person));
        }
        self.out_links.remove(&(network, person));
        self.in_links.remove(&(network, person));
        removed
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn out_degree(&self, network: NetworkId, person: PersonId) -> usize {
        self.out_links.get(&(network, person)).map_or(0, Vec::len)
    }

    #[inline]
    pub fn in_degree(&self, network: NetworkId, person: PersonId) -> usize {
        self.in_links.get(&(network, person)).map_or(0, Vec::len)
    }

    /// Target of `person`'s `n`-th outgoing link in `network`.
    pub fn end_of_link(&self, network: NetworkId, person: PersonId, n: usize) -> Option<PersonId> {
        let id = *self.out_links.get(&(network, person))?.get(n)?;
        self.link(id).map(|l| l.to)
    }

    /// Source of `person`'s `n`-th incoming link in `network`.
    pub fn beginning_of_link(&self, network: NetworkId, person: PersonId, n: usize) -> Option<PersonId> {
        let id = *self.in_links.get(&(network, person))?.get(n)?;
        self.link(id).map(|l| l.from)
    }

    /// `true` if `from → to` exists in `network`.
    #[inline]
    pub fn is_connected(&self, network: NetworkId, from: PersonId, to: PersonId) -> bool {
        self.lookup.contains_key(&(network, from, to))
    }

    /// Targets of `person`'s outgoing links, in local-index order.
    pub fn out_neighbors(&self, network: NetworkId, person: PersonId) -> impl Iterator<Item = PersonId> + '_ {
        self.out_links
            .get(&(network, person))
            .into_iter()
            .flatten()
            .filter_map(|&id| self.link(id).map(|l| l.to))
    }

    /// Sources of `person`'s incoming links, in local-index order.
    pub fn in_neighbors(&self, network: NetworkId, person: PersonId) -> impl Iterator<Item = PersonId> + '_ {
        self.in_links
            .get(&(network, person))
            .into_iter()
            .flatten()
            .filter_map(|&id| self.link(id).map(|l| l.from))
    }
}

fn detach(adjacency: &mut Adjacency, key: (NetworkId, PersonId), id: LinkId) {
    if let Some(list) = adjacency.get_mut(&key) {
        if let Some(pos) = list.iter().position(|&l| l == id) {
            list.remove(pos);
        }
        if list.is_empty() {
            adjacency.remove(&key);
        }
    }
}
