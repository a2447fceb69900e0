use std::{num::NonZeroUsize, path::PathBuf};

use clap::{Parser, ValueEnum};
use crossfill_solver::{
    BoxedExpander, Propagation, SearchSeed,
    expand::{
        BasicExpander, DegreeHeuristic, LeastConstrainingValue, MinimumRemainingValues, Priority,
        ThreeInOne,
    },
};

/// Fill crossword-style puzzles from a word list.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub(crate) struct Args {
    /// Rule file: one puzzle per line, each slot written as `x y length direction`.
    #[arg(value_name = "RULES")]
    pub(crate) rules: PathBuf,

    /// Word list: one word per line.
    #[arg(short, long, value_name = "FILE")]
    pub(crate) words: PathBuf,

    /// Only solve the N-th puzzle of the rule file (1-based).
    #[arg(short, long, value_name = "N")]
    pub(crate) puzzle: Option<NonZeroUsize>,

    /// Variable and value ordering heuristics.
    #[arg(short, long, value_enum, default_value_t = Strategy::DegreeMrvLcv)]
    pub(crate) strategy: Strategy,

    /// Constraint propagation after each assignment.
    #[arg(long, value_enum, default_value_t = PropagationMode::Ac3)]
    pub(crate) propagation: PropagationMode,

    /// Break ties and order words randomly.
    #[arg(short, long)]
    pub(crate) random: bool,

    /// Seed for --random, as 64 hex digits. A fresh seed is drawn if omitted.
    #[arg(long, value_name = "HEX", requires = "random")]
    pub(crate) seed: Option<SearchSeed>,

    /// Stop after N solutions per puzzle [default: 1, unlimited with --count].
    #[arg(short = 'n', long, value_name = "N")]
    pub(crate) solutions: Option<usize>,

    /// Count solutions instead of printing them. Puzzles are counted in parallel.
    #[arg(short, long)]
    pub(crate) count: bool,

    /// Abort a search whose stack grows beyond N nodes.
    #[arg(long, value_name = "N")]
    pub(crate) max_stack: Option<usize>,
}

impl Args {
    /// Returns the per-puzzle solution cap, `None` meaning unlimited.
    pub(crate) fn solution_limit(&self) -> Option<usize> {
        match (self.solutions, self.count) {
            (Some(0), _) | (None, true) => None,
            (Some(n), _) => Some(n),
            (None, false) => Some(1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Strategy {
    /// Fill slots in board order, words in dictionary order.
    Basic,
    /// Fill the slot with the fewest candidates first.
    Mrv,
    /// Fill the slot with the most open crossings first.
    Degree,
    /// Try the words that rule out the fewest crossing words first.
    Lcv,
    /// MRV, then degree, then LCV.
    MrvDegreeLcv,
    /// Degree, then MRV, then LCV.
    DegreeMrvLcv,
}

impl Strategy {
    pub(crate) fn expander(self, seed: Option<SearchSeed>) -> BoxedExpander {
        match (self, seed) {
            (Self::Basic, None) => Box::new(BasicExpander::new()),
            (Self::Basic, Some(seed)) => Box::new(BasicExpander::randomized(seed)),
            (Self::Mrv, None) => Box::new(MinimumRemainingValues::new()),
            (Self::Mrv, Some(seed)) => Box::new(MinimumRemainingValues::randomized(seed)),
            (Self::Degree, None) => Box::new(DegreeHeuristic::new()),
            (Self::Degree, Some(seed)) => Box::new(DegreeHeuristic::randomized(seed)),
            (Self::Lcv, None) => Box::new(LeastConstrainingValue::new()),
            (Self::Lcv, Some(seed)) => Box::new(LeastConstrainingValue::randomized(seed)),
            (Self::MrvDegreeLcv, None) => {
                Box::new(ThreeInOne::new(Priority::MinimumRemainingValuesFirst))
            }
            (Self::MrvDegreeLcv, Some(seed)) => Box::new(ThreeInOne::randomized(
                Priority::MinimumRemainingValuesFirst,
                seed,
            )),
            (Self::DegreeMrvLcv, None) => Box::new(ThreeInOne::new(Priority::DegreeFirst)),
            (Self::DegreeMrvLcv, Some(seed)) => {
                Box::new(ThreeInOne::randomized(Priority::DegreeFirst, seed))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum PropagationMode {
    /// Narrow crossing domains but keep empty ones until they are reached.
    Lenient,
    /// Discard an assignment as soon as it empties a crossing domain.
    ForwardCheck,
    /// Forward checking plus immediate assignment of single-word slots.
    Ac3,
}

impl From<PropagationMode> for Propagation {
    fn from(mode: PropagationMode) -> Self {
        match mode {
            PropagationMode::Lenient => Self::Plain {
                forward_check: false,
            },
            PropagationMode::ForwardCheck => Self::Plain {
                forward_check: true,
            },
            PropagationMode::Ac3 => Self::ArcConsistent,
        }
    }
}
