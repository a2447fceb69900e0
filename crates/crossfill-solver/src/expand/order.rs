use std::collections::BTreeMap;

use crossfill_core::{SlotId, Word};

use crate::{SearchNode, SearchRng};

/// Plain value ordering.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WordOrder {
    /// Try words in dictionary order.
    #[default]
    Lexicographic,
    /// Try words in a random order.
    Random,
}

impl WordOrder {
    /// Reorders `words` in place.
    pub fn arrange(self, words: &mut [Word], rng: &mut SearchRng) {
        match self {
            Self::Lexicographic => words.sort_unstable(),
            Self::Random => rng.shuffle(words),
        }
    }
}

/// How the candidates of the chosen slot are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOrdering {
    /// Plain ordering.
    Plain(WordOrder),
    /// [Least-constraining-value](least_constraining_order) ordering.
    LeastConstraining {
        /// Order among equally constraining words.
        tie_break: WordOrder,
        /// Drop words that leave some neighbor without candidates.
        forward_check: bool,
    },
}

impl Default for ValueOrdering {
    fn default() -> Self {
        Self::Plain(WordOrder::default())
    }
}

impl ValueOrdering {
    /// Returns the same ordering with forward checking switched on or off.
    ///
    /// Plain orderings are returned unchanged.
    #[must_use]
    pub const fn with_forward_check(self, forward_check: bool) -> Self {
        match self {
            Self::Plain(_) => self,
            Self::LeastConstraining { tie_break, .. } => Self::LeastConstraining {
                tie_break,
                forward_check,
            },
        }
    }

    /// Returns the candidates of `slot` in the order they should be tried.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not an unassigned slot of `node`.
    #[must_use]
    pub fn order(self, node: &SearchNode, slot: SlotId, rng: &mut SearchRng) -> Vec<Word> {
        let Some(words) = node.domain(slot) else {
            panic!("slot {slot} is already assigned");
        };
        match self {
            Self::Plain(order) => {
                let mut words = words.to_vec();
                order.arrange(&mut words, rng);
                words
            }
            Self::LeastConstraining {
                tie_break,
                forward_check,
            } => least_constraining_order(node, slot, words, tie_break, forward_check, rng),
        }
    }
}

/// Orders `words` for `slot` so that the words ruling out the fewest
/// candidates of the crossing slots come first.
///
/// For each word and each unassigned neighbor, the neighbor candidates that
/// agree on the shared letter survive. Words that leave some neighbor with
/// no survivor are dropped when `forward_check` is set and otherwise come
/// after every word that does not. The remaining ties are ranked by the total
/// number of eliminated candidates, then arranged by `plain`. A slot without
/// unassigned neighbors gets the plain order.
///
/// # Panics
///
/// Panics if `slot` is not an unassigned slot of `node`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use crossfill_core::{SlotId, Word, WordSource};
/// use crossfill_solver::{
///     Propagation, SearchNode, SearchRng,
///     expand::{WordOrder, least_constraining_order},
/// };
///
/// let words: WordSource = ["cab", "cat", "dog", "oxo", "bare", "care", "boot"]
///     .into_iter()
///     .collect();
/// let root = SearchNode::root(
///     Arc::new("0 0 3 A 1 -1 4 D".parse()?),
///     &words,
///     Propagation::Plain { forward_check: false },
/// );
/// let slot = SlotId::from_index(0);
/// let order = |forward_check| {
///     let domain = root.domain(slot).unwrap();
///     let mut rng = SearchRng::default();
///     least_constraining_order(&root, slot, domain, WordOrder::Lexicographic, forward_check, &mut rng)
///         .iter()
///         .map(Word::to_string)
///         .collect::<Vec<_>>()
/// };
///
/// // CAB and CAT rule out one down word, DOG two and OXO all three.
/// assert_eq!(order(true), ["CAB", "CAT", "DOG"]);
/// assert_eq!(order(false), ["CAB", "CAT", "DOG", "OXO"]);
/// # Ok::<(), crossfill_core::ParseTopologyError>(())
/// ```
pub fn least_constraining_order(
    node: &SearchNode,
    slot: SlotId,
    words: &[Word],
    plain: WordOrder,
    forward_check: bool,
    rng: &mut SearchRng,
) -> Vec<Word> {
    let Some(neighbors) = node.domains().unassigned_neighbors(slot) else {
        panic!("slot {slot} is already assigned");
    };
    if neighbors.is_empty() {
        let mut words = words.to_vec();
        plain.arrange(&mut words, rng);
        return words;
    }

    let topology = node.topology();
    let geometry = topology.slot(slot);
    let crossings: Vec<_> = neighbors
        .iter()
        .map(|&neighbor| {
            let crossing = topology.slot(neighbor);
            let candidates = node.domain(neighbor).unwrap_or_default();
            (
                geometry.crossing_offset(crossing),
                crossing.crossing_offset(geometry),
                candidates,
            )
        })
        .collect();

    let mut ranked = BTreeMap::<(bool, usize), Vec<Word>>::new();
    'words: for word in words {
        let mut empties_neighbor = false;
        let mut eliminated = 0;
        for &(own, theirs, candidates) in &crossings {
            let letter = word.letter(own);
            let survivors = candidates
                .iter()
                .filter(|candidate| candidate.letter(theirs) == letter)
                .count();
            if survivors == 0 {
                if forward_check {
                    continue 'words;
                }
                empties_neighbor = true;
            }
            eliminated += candidates.len() - survivors;
        }
        ranked
            .entry((empties_neighbor, eliminated))
            .or_default()
            .push(word.clone());
    }

    ranked
        .into_values()
        .flat_map(|mut group| {
            plain.arrange(&mut group, rng);
            group
        })
        .collect()
}
