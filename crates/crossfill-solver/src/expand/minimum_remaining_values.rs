use super::{
    BoxedExpander, CustomExpander, Expander, TieBreak, ValueOrdering, VariableFilter, WordOrder,
};
use crate::{Assignment, SearchNode, SearchSeed};

/// An expander that fills the most constrained slot first.
///
/// The slot with the fewest candidate words is chosen ("fail first"); ties
/// go to the slot closest to the origin, or to a random one in the
/// randomized variant.
#[derive(Debug, Clone)]
pub struct MinimumRemainingValues {
    inner: CustomExpander,
}

impl MinimumRemainingValues {
    /// Creates the deterministic variant.
    #[must_use]
    pub fn new() -> Self {
        let inner = CustomExpander::builder()
            .name("MRV")
            .filter(VariableFilter::MinimumRemainingValues)
            .build();
        Self { inner }
    }

    /// Creates the randomized variant.
    #[must_use]
    pub fn randomized(seed: SearchSeed) -> Self {
        let inner = CustomExpander::builder()
            .name("random MRV")
            .filter(VariableFilter::MinimumRemainingValues)
            .tie_break(TieBreak::Random)
            .ordering(ValueOrdering::Plain(WordOrder::Random))
            .seed(seed)
            .build();
        Self { inner }
    }
}

impl Default for MinimumRemainingValues {
    fn default() -> Self {
        Self::new()
    }
}

impl Expander for MinimumRemainingValues {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn clone_box(&self) -> BoxedExpander {
        Box::new(self.clone())
    }

    fn assign(&mut self, node: &SearchNode) -> Vec<Assignment> {
        self.inner.assign(node)
    }
}
