//! Test fixtures and a harness for search strategies.
//!
//! [`SearchTester`] runs a search to exhaustion, checks every solution it
//! reports against the board, and compares the solution set with the
//! expected one or with a naive exhaustive enumeration.

use std::sync::Arc;

use crossfill_core::{SlotId, SlotTopology, Word, WordSource};
use proptest::prelude::*;

use crate::{Assignment, DepthFirstSearch, Expander, Propagation, SearchNode};

/// A three-letter across slot and a three-letter down slot crossing at their
/// middle letters.
pub(crate) fn crossing_pair() -> Arc<SlotTopology> {
    Arc::new("0 0 3 A 1 -1 3 D".parse().unwrap())
}

/// A single across slot crossing nothing.
pub(crate) fn single_slot(length: usize) -> Arc<SlotTopology> {
    Arc::new(format!("0 0 {length} A").parse().unwrap())
}

/// A fully checked 3×3 grid: three across and three down slots.
pub(crate) fn word_square() -> Arc<SlotTopology> {
    Arc::new(
        "0 0 3 A 0 1 3 A 0 2 3 A 0 0 3 D 1 0 3 D 2 0 3 D"
            .parse()
            .unwrap(),
    )
}

pub(crate) fn words<S>(list: &[S]) -> WordSource
where
    S: AsRef<str>,
{
    list.iter().collect()
}

/// Small word lists for [`word_square`] over a three-letter alphabet, with
/// arbitrary indices for picking candidates.
pub(crate) fn square_words_and_picks() -> impl Strategy<Value = (Vec<String>, Vec<usize>)> {
    (
        prop::collection::vec("[abc]{3}", 1..12),
        prop::collection::vec(any::<usize>(), 6),
    )
}

/// Every solution of the puzzle, found by trying all words slot by slot.
///
/// Each solution lists the words in slot id order; the list is sorted.
pub(crate) fn exhaustive_solutions(
    topology: &SlotTopology,
    words: &WordSource,
) -> Vec<Vec<String>> {
    fn fill(
        topology: &SlotTopology,
        words: &WordSource,
        chosen: &mut Vec<Word>,
        found: &mut Vec<Vec<String>>,
    ) {
        if chosen.len() == topology.len() {
            found.push(chosen.iter().map(Word::to_string).collect());
            return;
        }
        let id = SlotId::from_index(chosen.len());
        let slot = topology.slot(id);
        for word in words.words_of_length(slot.length()).iter() {
            let fits = topology
                .neighbors(id)
                .iter()
                .filter(|neighbor| neighbor.index() < chosen.len())
                .all(|&neighbor| {
                    let other = topology.slot(neighbor);
                    word.letter(slot.crossing_offset(other))
                        == chosen[neighbor.index()].letter(other.crossing_offset(slot))
                });
            if fits {
                chosen.push(word.clone());
                fill(topology, words, chosen, found);
                chosen.pop();
            }
        }
    }

    let mut found = vec![];
    fill(topology, words, &mut vec![], &mut found);
    found.sort();
    found
}

/// Checks that `node` is a complete, letter-consistent fill.
#[track_caller]
pub(crate) fn assert_valid_solution(node: &SearchNode) {
    let topology = node.topology();
    assert!(node.is_solution());

    let chain = node.assignment_chain();
    assert_eq!(chain.len(), topology.len(), "chain does not cover every slot");
    let mut slots: Vec<_> = chain.iter().map(Assignment::slot).collect();
    slots.sort();
    slots.dedup();
    assert_eq!(slots.len(), topology.len(), "a slot was assigned twice");

    let board = node.board_view();
    for assignment in &chain {
        let slot = topology.slot(assignment.slot());
        for ((x, y), &letter) in slot.cells().zip(assignment.word().letters()) {
            assert_eq!(
                board.get(x, y),
                Some(letter),
                "{assignment} disagrees with the board at ({x}, {y})"
            );
        }
    }
}

/// A harness running searches over one puzzle.
///
/// All methods return `self`, so checks chain fluently. Assertions panic
/// with the caller's location.
#[derive(Debug, Clone)]
pub(crate) struct SearchTester {
    topology: Arc<SlotTopology>,
    words: WordSource,
    propagation: Propagation,
}

impl SearchTester {
    /// Creates a tester using forward-checked plain propagation.
    pub(crate) fn new<S>(topology: Arc<SlotTopology>, words: &[S]) -> Self
    where
        S: AsRef<str>,
    {
        Self {
            topology,
            words: self::words(words),
            propagation: Propagation::Plain {
                forward_check: true,
            },
        }
    }

    #[track_caller]
    pub(crate) fn from_rules(rules: &str, words: &[&str]) -> Self {
        Self::new(Arc::new(rules.parse().unwrap()), words)
    }

    pub(crate) fn crossing_pair(words: &[&str]) -> Self {
        Self::new(crossing_pair(), words)
    }

    pub(crate) fn word_square<S>(words: &[S]) -> Self
    where
        S: AsRef<str>,
    {
        Self::new(word_square(), words)
    }

    /// Sets the propagation mode of the roots built from now on.
    pub(crate) fn propagation(mut self, propagation: Propagation) -> Self {
        self.propagation = propagation;
        self
    }

    pub(crate) fn root(&self) -> SearchNode {
        SearchNode::root(Arc::clone(&self.topology), &self.words, self.propagation)
    }

    /// Runs a search to exhaustion and returns every solution found, in
    /// the format of [`exhaustive_solutions`]. Duplicates are kept.
    #[track_caller]
    pub(crate) fn solutions<E>(&self, expander: E) -> Vec<Vec<String>>
    where
        E: Expander,
    {
        let mut search = DepthFirstSearch::new(self.root(), expander);
        let mut solutions = vec![];
        while let Some(node) = search.next_solution().unwrap() {
            assert_valid_solution(&node);
            let words = self
                .topology
                .ids()
                .map(|id| node.assigned_word(id).unwrap().to_string())
                .collect();
            solutions.push(words);
        }
        assert_eq!(search.stats().solutions(), solutions.len());
        solutions.sort();
        solutions
    }

    /// Asserts the exact solution set; each solution lists words in slot id
    /// order.
    #[track_caller]
    pub(crate) fn assert_solutions<E>(self, expander: E, expected: &[&[&str]]) -> Self
    where
        E: Expander,
    {
        let name = expander.name();
        let mut expected: Vec<Vec<String>> = expected
            .iter()
            .map(|solution| solution.iter().map(|w| Word::new(w).to_string()).collect())
            .collect();
        expected.sort();
        assert_eq!(self.solutions(expander), expected, "{name}");
        self
    }

    /// Asserts that the search finds exactly the solutions of an exhaustive
    /// enumeration, each once.
    #[track_caller]
    pub(crate) fn assert_matches_oracle<E>(self, expander: E) -> Self
    where
        E: Expander,
    {
        let name = expander.name();
        let expected = exhaustive_solutions(&self.topology, &self.words);
        assert_eq!(self.solutions(expander), expected, "{name} {:?}", self.propagation);
        self
    }

    /// Asserts which slot the expander fills at the root and the words it
    /// offers, in order.
    #[track_caller]
    pub(crate) fn assert_first_choice<E>(
        self,
        expander: &mut E,
        slot: SlotId,
        words: &[&str],
    ) -> Self
    where
        E: Expander,
    {
        let assignments = expander.assign(&self.root());
        assert!(
            assignments.iter().all(|a| a.slot() == slot),
            "{}: expected slot {slot}, got {assignments:?}",
            expander.name()
        );
        let offered: Vec<_> = assignments.iter().map(|a| a.word().to_string()).collect();
        assert_eq!(offered, words, "{}", expander.name());
        self
    }

    /// Asserts which slot the expander fills at the root.
    #[track_caller]
    pub(crate) fn assert_first_slot<E>(self, expander: &mut E, slot: SlotId) -> Self
    where
        E: Expander,
    {
        let assignments = expander.assign(&self.root());
        assert!(!assignments.is_empty(), "{}: no candidate", expander.name());
        assert!(
            assignments.iter().all(|a| a.slot() == slot),
            "{}: expected slot {slot}, got {assignments:?}",
            expander.name()
        );
        self
    }
}
