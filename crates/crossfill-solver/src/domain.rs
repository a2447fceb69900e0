//! Candidate domains and the constraint propagator.

use std::sync::Arc;

use crossfill_core::{Neighbors, SlotId, SlotTopology, Word, WordSource};

use crate::{Assignment, EmptyDomain};

/// A shared, lexicographically ordered list of candidate words.
pub type Domain = Arc<[Word]>;

/// How propagation reacts to a neighbor domain becoming empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Strictness {
    /// Keep the empty domain; the slot becomes a dead end when it is chosen.
    Lenient,
    /// Fail with [`EmptyDomain`].
    Strict,
}

/// Candidate words and remaining crossings of every unassigned slot.
///
/// Assigned slots have no entry in either map. Cloning a model shares the
/// word lists, so a child node only pays for the domains its assignment
/// actually narrows.
#[derive(Debug, Clone)]
pub struct DomainModel {
    domains: Vec<Option<Domain>>,
    neighbors: Vec<Option<Neighbors>>,
    unassigned: usize,
}

impl DomainModel {
    /// Creates a model where every slot is unassigned and its domain is every
    /// word of the slot's length.
    #[must_use]
    pub fn new(topology: &SlotTopology, words: &WordSource) -> Self {
        let domains = topology
            .slots()
            .map(|(_, slot)| Some(words.words_of_length(slot.length())))
            .collect();
        let neighbors = topology
            .ids()
            .map(|id| Some(topology.neighbors(id).iter().copied().collect()))
            .collect();
        Self {
            domains,
            neighbors,
            unassigned: topology.len(),
        }
    }

    /// Returns `true` when every slot has been assigned.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unassigned == 0
    }

    /// Returns the number of unassigned slots.
    #[must_use]
    pub fn unassigned_count(&self) -> usize {
        self.unassigned
    }

    /// Returns `true` if `slot` is still unassigned.
    #[must_use]
    pub fn is_unassigned(&self, slot: SlotId) -> bool {
        self.domains.get(slot.index()).is_some_and(Option::is_some)
    }

    /// Returns the unassigned slots in canonical order.
    pub fn unassigned_slots(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.domains
            .iter()
            .enumerate()
            .filter(|(_, domain)| domain.is_some())
            .map(|(i, _)| SlotId::from_index(i))
    }

    /// Returns the candidates of an unassigned slot.
    #[must_use]
    pub fn domain(&self, slot: SlotId) -> Option<&[Word]> {
        self.domains.get(slot.index())?.as_deref()
    }

    /// Returns the candidate count of an unassigned slot.
    #[must_use]
    pub fn domain_size(&self, slot: SlotId) -> Option<usize> {
        self.domain(slot).map(<[Word]>::len)
    }

    /// Returns the unassigned crossing slots of an unassigned slot.
    #[must_use]
    pub fn unassigned_neighbors(&self, slot: SlotId) -> Option<&[SlotId]> {
        self.neighbors.get(slot.index())?.as_deref()
    }

    /// Derives the unassigned neighbors of `slot` from the topology.
    ///
    /// This always agrees with [`unassigned_neighbors`](Self::unassigned_neighbors),
    /// which is maintained incrementally instead.
    #[must_use]
    pub fn recompute_unassigned_neighbors(
        &self,
        topology: &SlotTopology,
        slot: SlotId,
    ) -> Vec<SlotId> {
        topology
            .neighbors(slot)
            .iter()
            .copied()
            .filter(|&neighbor| self.is_unassigned(neighbor))
            .collect()
    }

    /// Returns the first unassigned slot, in canonical order, with exactly
    /// one candidate, as an assignment of that candidate.
    #[must_use]
    pub fn forced_assignment(&self) -> Option<Assignment> {
        self.domains.iter().enumerate().find_map(|(i, domain)| {
            match domain.as_deref() {
                Some([word]) => Some(Assignment::from_domain(SlotId::from_index(i), word.clone())),
                _ => None,
            }
        })
    }

    /// Empties the domain of every unassigned slot, turning the model into a
    /// dead end.
    pub(crate) fn clear_candidates(&mut self) {
        let empty: Domain = Arc::from([]);
        for domain in self.domains.iter_mut().flatten() {
            *domain = Arc::clone(&empty);
        }
    }

    /// Removes the assigned slot from the model and narrows the domains of
    /// its unassigned neighbors to words agreeing on the shared letter.
    ///
    /// # Errors
    ///
    /// With [`Strictness::Strict`], returns [`EmptyDomain`] as soon as a
    /// neighbor is left without candidates. The model is then partially
    /// updated and must be discarded.
    ///
    /// # Panics
    ///
    /// Panics if the assigned slot is not an unassigned slot of this model.
    pub fn propagate(
        &mut self,
        topology: &SlotTopology,
        assignment: &Assignment,
        strictness: Strictness,
    ) -> Result<(), EmptyDomain> {
        let assigned = assignment.slot();
        let Some(neighbors) = self
            .neighbors
            .get_mut(assigned.index())
            .and_then(Option::take)
        else {
            panic!("slot {assigned} is not an unassigned slot of the domain model");
        };
        let geometry = topology.slot(assigned);
        let word = assignment.word();

        for &neighbor in &neighbors {
            let crossing = topology.slot(neighbor);
            let letter = word.letter(geometry.crossing_offset(crossing));
            let offset = crossing.crossing_offset(geometry);

            let Some(domain) = &self.domains[neighbor.index()] else {
                unreachable!("neighbor {neighbor} of {assigned} was already assigned");
            };
            if !domain.iter().all(|candidate| candidate.letter(offset) == letter) {
                let narrowed: Domain = domain
                    .iter()
                    .filter(|candidate| candidate.letter(offset) == letter)
                    .cloned()
                    .collect();
                if narrowed.is_empty() && strictness.is_strict() {
                    return Err(EmptyDomain { slot: neighbor });
                }
                self.domains[neighbor.index()] = Some(narrowed);
            }
            if let Some(list) = &mut self.neighbors[neighbor.index()] {
                list.retain(|slot| *slot != assigned);
            }
        }

        self.domains[assigned.index()] = None;
        self.unassigned -= 1;
        Ok(())
    }
}
