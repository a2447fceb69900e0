use crossfill_core::Board;
use log::{debug, trace};

use crate::{BoxedExpander, Expander, SearchError, SearchNode};

/// How a single [`DepthFirstSearch::step`] classified the node it visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum StepOutcome {
    /// The node assigns every slot.
    Solution,
    /// The node has no child: some slot has no acceptable word.
    Failure,
    /// The node was expanded and its children queued.
    Unknown,
}

/// Counters collected while searching.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    steps: usize,
    solutions: usize,
    failures: usize,
    max_stack_size: usize,
}

impl SearchStats {
    /// Returns the number of visited nodes.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the number of solutions found.
    #[must_use]
    pub fn solutions(&self) -> usize {
        self.solutions
    }

    /// Returns the number of dead ends visited.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Returns the largest frontier size seen.
    #[must_use]
    pub fn max_stack_size(&self) -> usize {
        self.max_stack_size
    }
}

/// A depth-first walk over the search tree.
///
/// The frontier is an explicit stack, so the search runs in constant native
/// stack depth and can be advanced one node at a time with
/// [`step`](Self::step), stopped at any point, or driven to the next
/// solution.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use crossfill_core::WordSource;
/// use crossfill_solver::{DepthFirstSearch, Propagation, SearchNode, expand::BasicExpander};
///
/// let words: WordSource = ["cat", "dog"].into_iter().collect();
/// let root = SearchNode::root(
///     Arc::new("0 0 3 A 1 -1 3 D".parse()?),
///     &words,
///     Propagation::Plain { forward_check: true },
/// );
/// let mut search = DepthFirstSearch::new(root, BasicExpander::new());
///
/// let first = search.next_solution()?.unwrap();
/// assert_eq!(first.board_view().to_string(), ".C.\nCAT\n.T.");
/// let second = search.next_solution()?.unwrap();
/// assert_eq!(second.board_view().to_string(), ".D.\nDOG\n.G.");
/// assert!(search.next_solution()?.is_none());
/// assert_eq!(search.stats().solutions(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct DepthFirstSearch<E = BoxedExpander> {
    expander: E,
    stack: Vec<SearchNode>,
    current: Option<SearchNode>,
    stats: SearchStats,
    stack_limit: Option<usize>,
}

impl<E> DepthFirstSearch<E>
where
    E: Expander,
{
    /// Creates a search starting at `root`.
    #[must_use]
    pub fn new(root: SearchNode, expander: E) -> Self {
        Self {
            expander,
            stack: vec![root],
            current: None,
            stats: SearchStats {
                max_stack_size: 1,
                ..SearchStats::default()
            },
            stack_limit: None,
        }
    }

    /// Aborts the search once the frontier holds more than `limit` nodes.
    #[must_use]
    pub fn with_stack_limit(mut self, limit: usize) -> Self {
        self.stack_limit = Some(limit);
        self
    }

    /// Returns the expander.
    #[must_use]
    pub fn expander(&self) -> &E {
        &self.expander
    }

    /// Returns `true` if some node is left to visit.
    #[must_use]
    pub fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Returns the number of nodes visited so far.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.stats.steps
    }

    /// Returns the current frontier size.
    #[must_use]
    pub fn stack_size(&self) -> usize {
        self.stack.len()
    }

    /// Returns the largest frontier size seen so far.
    #[must_use]
    pub fn max_stack_size(&self) -> usize {
        self.stats.max_stack_size
    }

    /// Returns the counters collected so far.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Returns the most recently visited node.
    #[must_use]
    pub fn current_node(&self) -> Option<&SearchNode> {
        self.current.as_ref()
    }

    /// Renders the most recently visited node.
    #[must_use]
    pub fn current_board(&self) -> Option<Board> {
        self.current.as_ref().map(SearchNode::board_view)
    }

    /// Visits the next node.
    ///
    /// The node is expanded; its children are queued so that the first
    /// candidate is visited next.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Exhausted`] if nothing is left to visit, and
    /// [`SearchError::StackLimitExceeded`] if queuing the children grew the
    /// frontier past the limit. The frontier is dropped in the latter case.
    pub fn step(&mut self) -> Result<StepOutcome, SearchError> {
        let node = self.stack.pop().ok_or(SearchError::Exhausted)?;
        self.stats.steps += 1;

        let children = self.expander.expand(&node);
        let outcome = if !children.is_empty() {
            self.stack.extend(children.into_iter().rev());
            StepOutcome::Unknown
        } else if node.is_solution() {
            self.stats.solutions += 1;
            debug!(
                "solution #{} at step {}: {:?}",
                self.stats.solutions,
                self.stats.steps,
                node.assignment()
            );
            StepOutcome::Solution
        } else {
            self.stats.failures += 1;
            StepOutcome::Failure
        };
        trace!(
            "step {}: depth {} {outcome:?}, {} queued",
            self.stats.steps,
            node.depth(),
            self.stack.len()
        );
        self.current = Some(node);

        let size = self.stack.len();
        self.stats.max_stack_size = self.stats.max_stack_size.max(size);
        if let Some(limit) = self.stack_limit
            && size > limit
        {
            self.stack.clear();
            return Err(SearchError::StackLimitExceeded { limit, size });
        }
        Ok(outcome)
    }

    fn next_matching<F>(
        &mut self,
        mut wanted: F,
    ) -> Result<Option<(StepOutcome, SearchNode)>, SearchError>
    where
        F: FnMut(StepOutcome) -> bool,
    {
        while self.has_next() {
            let outcome = self.step()?;
            if wanted(outcome) {
                let node = self.current.clone();
                return Ok(node.map(|node| (outcome, node)));
            }
        }
        Ok(None)
    }

    /// Searches for the next solution.
    ///
    /// Returns `Ok(None)` once the search space is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::StackLimitExceeded`] if the frontier outgrows
    /// the limit.
    pub fn next_solution(&mut self) -> Result<Option<SearchNode>, SearchError> {
        let found = self.next_matching(|outcome| outcome.is_solution())?;
        Ok(found.map(|(_, node)| node))
    }

    /// Searches for the next dead end.
    ///
    /// Returns `Ok(None)` once the search space is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::StackLimitExceeded`] if the frontier outgrows
    /// the limit.
    pub fn next_failure(&mut self) -> Result<Option<SearchNode>, SearchError> {
        let found = self.next_matching(|outcome| outcome.is_failure())?;
        Ok(found.map(|(_, node)| node))
    }

    /// Searches for the next solution or dead end.
    ///
    /// Returns `Ok(None)` once the search space is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::StackLimitExceeded`] if the frontier outgrows
    /// the limit.
    pub fn next_result(&mut self) -> Result<Option<(StepOutcome, SearchNode)>, SearchError> {
        self.next_matching(|outcome| !outcome.is_unknown())
    }

    /// Counts the remaining solutions, stopping early at `cap` if given.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::StackLimitExceeded`] if the frontier outgrows
    /// the limit.
    pub fn count_solutions(&mut self, cap: Option<usize>) -> Result<usize, SearchError> {
        let mut count = 0;
        while cap.is_none_or(|cap| count < cap) && self.next_solution()?.is_some() {
            count += 1;
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;

    use super::*;
    use crate::{
        Propagation, SearchSeed,
        expand::{self, BasicExpander},
        testing::{self, SearchTester},
    };

    #[test]
    fn test_single_slot_with_arc_consistent_root() {
        let root = SearchNode::root(
            testing::single_slot(4),
            &testing::words(&["word"]),
            Propagation::ArcConsistent,
        );
        let mut search = DepthFirstSearch::new(root, BasicExpander::new());
        assert_eq!(search.step(), Ok(StepOutcome::Solution));
        assert_eq!(search.current_board().unwrap().to_string(), "WORD");
        assert!(!search.has_next());
        assert_eq!(search.step(), Err(SearchError::Exhausted));
    }

    #[test]
    fn test_single_slot_with_plain_root() {
        let root = SearchNode::root(
            testing::single_slot(4),
            &testing::words(&["word"]),
            Propagation::Plain {
                forward_check: true,
            },
        );
        let mut search = DepthFirstSearch::new(root, BasicExpander::new());
        assert_eq!(search.step(), Ok(StepOutcome::Unknown));
        assert_eq!(search.stack_size(), 1);
        assert_eq!(search.step(), Ok(StepOutcome::Solution));
        assert_eq!(search.step_count(), 2);
        assert_eq!(search.max_stack_size(), 1);
    }

    #[test]
    fn test_children_are_visited_in_candidate_order() {
        let root = SearchNode::root(
            testing::crossing_pair(),
            &testing::words(&["cat", "dog", "axe"]),
            Propagation::Plain {
                forward_check: true,
            },
        );
        let mut search = DepthFirstSearch::new(root, BasicExpander::new());
        assert_eq!(search.step(), Ok(StepOutcome::Unknown));
        assert_eq!(search.stack_size(), 3);
        assert_eq!(search.max_stack_size(), 3);
        assert_eq!(search.step(), Ok(StepOutcome::Unknown));
        let visited = search.current_node().unwrap().assignment().unwrap();
        assert_eq!(visited.word().to_string(), "AXE");
    }

    #[test]
    fn test_dead_end_is_a_failure() {
        // Lenient propagation keeps the empty down domain until it is chosen.
        let root = SearchNode::root(
            Arc::new("0 0 3 A 1 -1 4 D".parse().unwrap()),
            &testing::words(&["oxo", "boot"]),
            Propagation::Plain {
                forward_check: false,
            },
        );
        let mut search = DepthFirstSearch::new(root, BasicExpander::new());
        let (outcome, node) = search.next_result().unwrap().unwrap();
        assert_eq!(outcome, StepOutcome::Failure);
        assert_eq!(node.depth(), 1);
        assert!(search.next_failure().unwrap().is_none());
        assert_eq!(search.stats().failures(), 1);
        assert_eq!(search.stats().solutions(), 0);
    }

    #[test]
    fn test_infeasible_arc_consistent_root_is_one_failure() {
        let root = SearchNode::root(
            testing::word_square(),
            &testing::words(&["aab"]),
            Propagation::ArcConsistent,
        );
        let mut search = DepthFirstSearch::new(root, BasicExpander::new());
        assert_eq!(search.step(), Ok(StepOutcome::Failure));
        assert_eq!(search.current_node().unwrap().depth(), 0);
        assert!(!search.has_next());
        assert!(search.next_solution().unwrap().is_none());
        assert_eq!(search.stats().failures(), 1);
    }

    #[test]
    fn test_stack_limit_aborts_search() {
        let root = SearchNode::root(
            testing::crossing_pair(),
            &testing::words(&["cat", "dog", "axe"]),
            Propagation::Plain {
                forward_check: false,
            },
        );
        let mut search = DepthFirstSearch::new(root, BasicExpander::new()).with_stack_limit(2);
        assert_eq!(
            search.step(),
            Err(SearchError::StackLimitExceeded { limit: 2, size: 3 })
        );
        assert!(!search.has_next());
        assert!(search.next_solution().unwrap().is_none());
    }

    #[test]
    fn test_count_solutions_respects_cap() {
        let tester = SearchTester::crossing_pair(&["cat", "dog", "axe"]);
        let mut search = DepthFirstSearch::new(tester.root(), BasicExpander::new());
        assert_eq!(search.count_solutions(Some(2)), Ok(2));
        assert_eq!(search.count_solutions(None), Ok(1));
        assert_eq!(search.count_solutions(None), Ok(0));
    }

    #[test]
    fn test_boxed_expanders_drive_the_same_search() {
        for expander in expand::all_expanders() {
            let name = expander.name();
            let tester = SearchTester::crossing_pair(&["cat", "dog"]);
            let mut search = DepthFirstSearch::new(tester.root(), expander);
            assert_eq!(search.count_solutions(None), Ok(2), "{name}");
            assert_eq!(search.stats().solutions(), 2, "{name}");
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn test_every_strategy_finds_every_solution_once(
            (words, _) in testing::square_words_and_picks(),
            seed in any::<u64>(),
        ) {
            for propagation in [
                Propagation::Plain { forward_check: false },
                Propagation::Plain { forward_check: true },
                Propagation::ArcConsistent,
            ] {
                let tester = SearchTester::word_square(&words).propagation(propagation);
                for expander in expand::all_expanders()
                    .into_iter()
                    .chain(expand::randomized_expanders(SearchSeed::from(seed)))
                {
                    tester.clone().assert_matches_oracle(expander);
                }
            }
        }
    }
}
