use std::sync::Arc;

use crossfill_core::{SlotTopology, WordSource};
use crossfill_solver::{DepthFirstSearch, Expander as _, Propagation, SearchNode, SearchSeed};
use log::info;

use crate::{args::Strategy, error::CliError, report::PuzzleReport};

/// Settings shared by the searches of one run.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchConfig {
    pub(crate) strategy: Strategy,
    pub(crate) propagation: Propagation,
    pub(crate) seed: Option<SearchSeed>,
    pub(crate) max_stack: Option<usize>,
    pub(crate) limit: Option<usize>,
}

impl SearchConfig {
    fn start(&self, topology: Arc<SlotTopology>, words: &WordSource) -> DepthFirstSearch {
        let root = SearchNode::root(topology, words, self.propagation);
        let search = DepthFirstSearch::new(root, self.strategy.expander(self.seed));
        match self.max_stack {
            Some(limit) => search.with_stack_limit(limit),
            None => search,
        }
    }

    /// Collects up to `limit` solution boards.
    pub(crate) fn solve(
        &self,
        puzzle: usize,
        topology: Arc<SlotTopology>,
        words: &WordSource,
    ) -> Result<PuzzleReport, CliError> {
        let mut search = self.start(topology, words);
        let mut boards = vec![];
        while self.limit.is_none_or(|limit| boards.len() < limit) {
            let found = search
                .next_solution()
                .map_err(|source| CliError::Search { puzzle, source })?;
            let Some(node) = found else {
                break;
            };
            info!(
                "puzzle {puzzle}: solution {} after {} steps",
                boards.len() + 1,
                search.step_count()
            );
            boards.push(node.board_view());
        }
        Ok(PuzzleReport {
            puzzle,
            strategy: search.expander().name(),
            solutions: boards.len(),
            boards,
            stats: *search.stats(),
        })
    }

    /// Counts up to `limit` solutions without keeping them.
    pub(crate) fn count(
        &self,
        puzzle: usize,
        topology: Arc<SlotTopology>,
        words: &WordSource,
    ) -> Result<PuzzleReport, CliError> {
        let mut search = self.start(topology, words);
        let solutions = search
            .count_solutions(self.limit)
            .map_err(|source| CliError::Search { puzzle, source })?;
        info!(
            "puzzle {puzzle}: {solutions} solution(s) in {} steps",
            search.step_count()
        );
        Ok(PuzzleReport {
            puzzle,
            strategy: search.expander().name(),
            boards: vec![],
            solutions,
            stats: *search.stats(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crossfill_solver::SearchError;

    use super::*;

    fn config(limit: Option<usize>) -> SearchConfig {
        SearchConfig {
            strategy: Strategy::Basic,
            propagation: Propagation::ArcConsistent,
            seed: None,
            max_stack: None,
            limit,
        }
    }

    fn crossing_pair() -> Arc<SlotTopology> {
        Arc::new("0 0 3 A 1 -1 3 D".parse().unwrap())
    }

    #[test]
    fn test_solve_stops_at_limit() {
        let words: WordSource = ["cat", "dog", "axe"].into_iter().collect();
        let report = config(Some(2)).solve(1, crossing_pair(), &words).unwrap();
        assert_eq!(report.solutions, 2);
        assert_eq!(report.boards[0].to_string(), ".A.\nAXE\n.E.");
        assert_eq!(report.strategy, "basic");

        let all = config(None).solve(1, crossing_pair(), &words).unwrap();
        assert_eq!(all.boards.len(), 3);
    }

    #[test]
    fn test_count_reports_no_solution() {
        let words: WordSource = ["cat", "ox"].into_iter().collect();
        let report = config(None).count(4, crossing_pair(), &words).unwrap();
        assert_eq!(report.solutions, 1);

        let words: WordSource = ["ox"].into_iter().collect();
        let report = config(None).count(4, crossing_pair(), &words).unwrap();
        assert!(!report.is_solved());
        assert!(report.boards.is_empty());
    }

    #[test]
    fn test_stack_limit_is_an_error() {
        let words: WordSource = ["cat", "dog", "axe"].into_iter().collect();
        let config = SearchConfig {
            max_stack: Some(1),
            ..config(None)
        };
        let err = config.solve(3, crossing_pair(), &words).unwrap_err();
        assert!(matches!(
            err,
            CliError::Search {
                puzzle: 3,
                source: SearchError::StackLimitExceeded { limit: 1, .. }
            }
        ));
    }
}
