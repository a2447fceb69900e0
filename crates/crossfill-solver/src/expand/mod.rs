//! Search-tree expansion strategies.
//!
//! An [`Expander`] decides which slot to fill next and in which order to try
//! its candidate words. Every expander here is assembled from the same small
//! parts:
//!
//! - [`VariableSelector`]: a chain of [`VariableFilter`]s narrowing the
//!   unassigned slots, then a [`TieBreak`] picking one of the survivors
//! - [`ValueOrdering`]: plain [`WordOrder`] or
//!   [least-constraining-value](least_constraining_order) ordering
//!
//! [`CustomExpander`] exposes the parts directly; the named expanders are
//! fixed combinations of them.

use std::fmt::Debug;

use log::debug;

pub use self::{
    basic::BasicExpander,
    custom::{CustomExpander, CustomExpanderBuilder},
    degree_heuristic::DegreeHeuristic,
    least_constraining_value::LeastConstrainingValue,
    minimum_remaining_values::MinimumRemainingValues,
    order::{ValueOrdering, WordOrder, least_constraining_order},
    select::{TieBreak, VariableFilter, VariableSelector},
    three_in_one::{Priority, ThreeInOne},
};
use crate::{Assignment, SearchNode, SearchSeed};

mod basic;
mod custom;
mod degree_heuristic;
mod least_constraining_value;
mod minimum_remaining_values;
mod order;
mod select;
mod three_in_one;

/// Returns the deterministic expanders, from the plainest to the most
/// informed.
///
/// # Examples
///
/// ```
/// use crossfill_solver::{Expander as _, expand};
///
/// let names: Vec<_> = expand::all_expanders().iter().map(|e| e.name()).collect();
/// assert_eq!(names[0], "basic");
/// assert_eq!(names.len(), 6);
/// ```
#[must_use]
pub fn all_expanders() -> Vec<BoxedExpander> {
    vec![
        Box::new(BasicExpander::new()),
        Box::new(MinimumRemainingValues::new()),
        Box::new(DegreeHeuristic::new()),
        Box::new(LeastConstrainingValue::new()),
        Box::new(ThreeInOne::new(Priority::MinimumRemainingValuesFirst)),
        Box::new(ThreeInOne::new(Priority::DegreeFirst)),
    ]
}

/// Returns the randomized counterparts of [`all_expanders`], all drawing
/// from streams seeded with `seed`.
#[must_use]
pub fn randomized_expanders(seed: SearchSeed) -> Vec<BoxedExpander> {
    vec![
        Box::new(BasicExpander::randomized(seed)),
        Box::new(MinimumRemainingValues::randomized(seed)),
        Box::new(DegreeHeuristic::randomized(seed)),
        Box::new(LeastConstrainingValue::randomized(seed)),
        Box::new(ThreeInOne::randomized(
            Priority::MinimumRemainingValuesFirst,
            seed,
        )),
        Box::new(ThreeInOne::randomized(Priority::DegreeFirst, seed)),
    ]
}

/// A strategy turning a search node into its children.
pub trait Expander: Debug + Send + Sync {
    /// Returns the name of the expander.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the expander.
    fn clone_box(&self) -> BoxedExpander;

    /// Chooses one unassigned slot and returns its candidate assignments in
    /// the order they should be tried.
    ///
    /// Returns an empty list when the node is complete or the chosen slot
    /// has no acceptable candidate.
    fn assign(&mut self, node: &SearchNode) -> Vec<Assignment>;

    /// Builds the children of `node`, first candidate first.
    ///
    /// Candidates whose propagation fails are dropped.
    fn expand(&mut self, node: &SearchNode) -> Vec<SearchNode> {
        self.assign(node)
            .into_iter()
            .filter_map(|assignment| match node.expand(assignment) {
                Ok(child) => Some(child),
                Err(err) => {
                    debug!("discarded infeasible child: {err}");
                    None
                }
            })
            .collect()
    }
}

/// A boxed expander.
pub type BoxedExpander = Box<dyn Expander>;

impl Clone for BoxedExpander {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl Expander for BoxedExpander {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn clone_box(&self) -> BoxedExpander {
        (**self).clone_box()
    }

    fn assign(&mut self, node: &SearchNode) -> Vec<Assignment> {
        (**self).assign(node)
    }

    fn expand(&mut self, node: &SearchNode) -> Vec<SearchNode> {
        (**self).expand(node)
    }
}
