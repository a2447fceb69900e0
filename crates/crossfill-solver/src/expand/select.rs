use std::cmp::Reverse;

use crossfill_core::SlotId;

use crate::{SearchNode, SearchRng};

/// A variable-ordering filter.
///
/// Each filter keeps the candidate slots that score best on its measure, so
/// several filters can be chained and a [`TieBreak`] settles what is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableFilter {
    /// Keep the slots with the fewest remaining candidate words.
    MinimumRemainingValues,
    /// Keep the slots crossing the most unassigned slots.
    Degree,
}

impl VariableFilter {
    /// Returns the conventional abbreviation of the heuristic.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MinimumRemainingValues => "MRV",
            Self::Degree => "degree",
        }
    }

    /// Returns the slots of `candidates` that score best, in input order.
    ///
    /// # Panics
    ///
    /// Panics if a candidate is not an unassigned slot of `node`.
    #[must_use]
    pub fn filter(self, node: &SearchNode, candidates: &[SlotId]) -> Vec<SlotId> {
        let domains = node.domains();
        match self {
            Self::MinimumRemainingValues => keep_minimal_by_key(candidates, |slot| {
                domains
                    .domain_size(slot)
                    .unwrap_or_else(|| panic!("slot {slot} is already assigned"))
            }),
            Self::Degree => keep_minimal_by_key(candidates, |slot| {
                let neighbors = domains
                    .unassigned_neighbors(slot)
                    .unwrap_or_else(|| panic!("slot {slot} is already assigned"));
                Reverse(neighbors.len())
            }),
        }
    }
}

fn keep_minimal_by_key<K, F>(candidates: &[SlotId], mut key: F) -> Vec<SlotId>
where
    K: Ord,
    F: FnMut(SlotId) -> K,
{
    let keyed: Vec<_> = candidates.iter().map(|&slot| (key(slot), slot)).collect();
    let Some(best) = keyed.iter().map(|(k, _)| k).min() else {
        return vec![];
    };
    keyed
        .iter()
        .filter(|(k, _)| k == best)
        .map(|&(_, slot)| slot)
        .collect()
}

/// The final choice among slots the filters could not separate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Pick the slot closest to the origin in slot order.
    #[default]
    OriginClosest,
    /// Pick uniformly at random.
    Random,
}

impl TieBreak {
    /// Picks one of `candidates`, or `None` if there are none.
    pub fn pick(self, node: &SearchNode, candidates: &[SlotId], rng: &mut SearchRng) -> Option<SlotId> {
        match (self, candidates) {
            (_, []) => None,
            (_, [only]) => Some(*only),
            (Self::OriginClosest, _) => {
                let topology = node.topology();
                candidates.iter().copied().min_by_key(|&slot| topology.slot(slot))
            }
            (Self::Random, _) => rng.choose(candidates),
        }
    }
}

/// Chooses the next slot to fill.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use crossfill_core::{SlotId, WordSource};
/// use crossfill_solver::{
///     Propagation, SearchNode, SearchRng,
///     expand::{TieBreak, VariableFilter, VariableSelector},
/// };
///
/// // The down slot only has one candidate.
/// let words: WordSource = ["cat", "dog", "bare"].into_iter().collect();
/// let root = SearchNode::root(
///     Arc::new("0 0 3 A 1 -1 4 D".parse()?),
///     &words,
///     Propagation::Plain { forward_check: false },
/// );
///
/// let selector = VariableSelector::new(
///     [VariableFilter::MinimumRemainingValues],
///     TieBreak::OriginClosest,
/// );
/// let slot = selector.select(&root, &mut SearchRng::default());
/// assert_eq!(slot, Some(SlotId::from_index(1)));
/// # Ok::<(), crossfill_core::ParseTopologyError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableSelector {
    filters: Vec<VariableFilter>,
    tie_break: TieBreak,
}

impl VariableSelector {
    /// Creates a selector applying `filters` in order, then `tie_break`.
    pub fn new<I>(filters: I, tie_break: TieBreak) -> Self
    where
        I: IntoIterator<Item = VariableFilter>,
    {
        Self {
            filters: filters.into_iter().collect(),
            tie_break,
        }
    }

    /// Returns the filters in application order.
    #[must_use]
    pub fn filters(&self) -> &[VariableFilter] {
        &self.filters
    }

    /// Returns the final tie-break.
    #[must_use]
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Returns the slot to fill next, or `None` if every slot is assigned.
    pub fn select(&self, node: &SearchNode, rng: &mut SearchRng) -> Option<SlotId> {
        let mut candidates: Vec<_> = node.unassigned_slots().collect();
        for filter in &self.filters {
            candidates = filter.filter(node, &candidates);
        }
        self.tie_break.pick(node, &candidates, rng)
    }
}
