use super::{
    BoxedExpander, CustomExpander, Expander, TieBreak, ValueOrdering, VariableFilter, WordOrder,
};
use crate::{Assignment, SearchNode, SearchSeed};

/// An expander that fills the slot crossing the most unassigned slots first.
#[derive(Debug, Clone)]
pub struct DegreeHeuristic {
    inner: CustomExpander,
}

impl DegreeHeuristic {
    /// Creates the deterministic variant.
    #[must_use]
    pub fn new() -> Self {
        let inner = CustomExpander::builder()
            .name("degree")
            .filter(VariableFilter::Degree)
            .build();
        Self { inner }
    }

    /// Creates the randomized variant.
    #[must_use]
    pub fn randomized(seed: SearchSeed) -> Self {
        let inner = CustomExpander::builder()
            .name("random degree")
            .filter(VariableFilter::Degree)
            .tie_break(TieBreak::Random)
            .ordering(ValueOrdering::Plain(WordOrder::Random))
            .seed(seed)
            .build();
        Self { inner }
    }
}

impl Default for DegreeHeuristic {
    fn default() -> Self {
        Self::new()
    }
}

impl Expander for DegreeHeuristic {
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

#[cfg(test)]
mod tests {
    use crossfill_core::SlotId;

    use super::*;
    use crate::testing::SearchTester;

    #[test]
    fn test_prefers_most_crossed_slot() {
        // Two across slots hang off one down slot.
        //
        //     AAA
        //     .D.
        //     BBB
        SearchTester::from_rules("0 0 3 A 1 0 3 D 0 2 3 A", &["cat", "tat", "ant"])
            .assert_first_choice(
                &mut DegreeHeuristic::new(),
                SlotId::from_index(1),
                &["ANT", "CAT", "TAT"],
            );
    }

    #[test]
    fn test_agrees_with_exhaustive_search() {
        SearchTester::word_square(&["bat", "are", "ten", "tan", "ant", "ear", "net", "bee"])
            .assert_matches_oracle(DegreeHeuristic::new())
            .assert_matches_oracle(DegreeHeuristic::randomized(SearchSeed::from(9)));
    }
}
