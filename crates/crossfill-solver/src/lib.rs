//! Constraint-satisfaction search for crossword fill-in puzzles.
//!
//! Slots are variables, the words of matching length are their domains, and
//! every crossing is a constraint requiring both words to agree on the shared
//! letter. The search is a depth-first walk over a persistent tree of partial
//! assignments.
//!
//! # Overview
//!
//! 1. **Domains** - [`DomainModel`] holds the candidates of each unassigned
//!    slot and narrows them after each assignment
//!    ([`propagate`](DomainModel::propagate)), strictly or leniently
//! 2. **Tree** - [`SearchNode`] is an immutable node sharing its ancestors;
//!    its [`Propagation`] mode picks plain propagation, forward checking or
//!    AC-3 style propagation of forced assignments
//! 3. **Strategies** - an [`Expander`] chooses the next slot and the order
//!    of its words; see [`expand`] for the heuristics
//! 4. **Driver** - [`DepthFirstSearch`] walks the tree one node per
//!    [`step`](DepthFirstSearch::step)
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use crossfill_core::{SlotTopology, WordSource};
//! use crossfill_solver::{DepthFirstSearch, Propagation, SearchNode, expand::ThreeInOne};
//!
//! let topology: SlotTopology = "0 0 3 A 0 1 3 A 0 2 3 A 0 0 3 D 1 0 3 D 2 0 3 D".parse()?;
//! let words: WordSource = ["bat", "are", "ten", "dog", "ant"].into_iter().collect();
//!
//! let root = SearchNode::root(Arc::new(topology), &words, Propagation::ArcConsistent);
//! let mut search = DepthFirstSearch::new(root, ThreeInOne::default());
//!
//! let solution = search.next_solution()?.expect("the word square fills");
//! assert_eq!(solution.board_view().to_string(), "BAT\nARE\nTEN");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    assignment::Assignment,
    depth_first::{DepthFirstSearch, SearchStats, StepOutcome},
    domain::{Domain, DomainModel, Strictness},
    error::{AssignmentError, EmptyDomain, SearchError},
    expand::{BoxedExpander, Expander},
    node::{Propagation, SearchNode},
    random::{ParseSeedError, SearchRng, SearchSeed},
};

mod assignment;
mod depth_first;
mod domain;
mod error;
pub mod expand;
mod node;
mod random;
#[cfg(test)]
mod testing;
