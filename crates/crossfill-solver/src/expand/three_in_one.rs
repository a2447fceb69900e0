use super::{
    BoxedExpander, CustomExpander, CustomExpanderBuilder, Expander, TieBreak, ValueOrdering, VariableFilter, WordOrder,
};
use crate::{Assignment, SearchNode, SearchSeed};

/// Which variable filter [`ThreeInOne`] applies first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// Minimum remaining values, then degree among the ties.
    #[default]
    MinimumRemainingValuesFirst,
    /// Degree, then minimum remaining values among the ties.
    DegreeFirst,
}

impl Priority {
    const fn filters(self) -> [VariableFilter; 2] {
        match self {
            Self::MinimumRemainingValuesFirst => {
                [VariableFilter::MinimumRemainingValues, VariableFilter::Degree]
            }
            Self::DegreeFirst => [VariableFilter::Degree, VariableFilter::MinimumRemainingValues],
        }
    }
}

/// MRV and degree variable selection combined with LCV value ordering.
///
/// Unlike [`LeastConstrainingValue`](super::LeastConstrainingValue),
/// forward checking of the value ordering is off by default: words that
/// empty a crossing slot are ranked last instead of dropped.
///
/// # Examples
///
/// ```
/// use crossfill_solver::expand::{Expander, Priority, ThreeInOne};
///
/// assert_eq!(ThreeInOne::new(Priority::DegreeFirst).name(), "degree-MRV-LCV");
/// ```
#[derive(Debug, Clone)]
pub struct ThreeInOne {
    priority: Priority,
    inner: CustomExpander,
}

impl ThreeInOne {
    /// Creates the deterministic variant.
    #[must_use]
    pub fn new(priority: Priority) -> Self {
        let name = match priority {
            Priority::MinimumRemainingValuesFirst => "MRV-degree-LCV",
            Priority::DegreeFirst => "degree-MRV-LCV",
        };
        let builder = CustomExpander::builder()
            .name(name)
            .tie_break(TieBreak::OriginClosest);
        Self::build(priority, builder, WordOrder::Lexicographic)
    }

    /// Creates the randomized variant.
    #[must_use]
    pub fn randomized(priority: Priority, seed: SearchSeed) -> Self {
        let name = match priority {
            Priority::MinimumRemainingValuesFirst => "random MRV-degree-LCV",
            Priority::DegreeFirst => "random degree-MRV-LCV",
        };
        let builder = CustomExpander::builder()
            .name(name)
            .tie_break(TieBreak::Random)
            .seed(seed);
        Self::build(priority, builder, WordOrder::Random)
    }

    fn build(priority: Priority, builder: CustomExpanderBuilder, word_order: WordOrder) -> Self {
        let [first, second] = priority.filters();
        let inner = builder
            .filter(first)
            .filter(second)
            .ordering(ValueOrdering::LeastConstraining {
                tie_break: word_order,
                forward_check: false,
            })
            .build();
        Self { priority, inner }
    }

    /// Returns the filter priority.
    #[must_use]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Enables or disables dropping words that empty a crossing slot.
    #[must_use]
    pub fn with_forward_check(self, forward_check: bool) -> Self {
        let ordering = self.inner.ordering().with_forward_check(forward_check);
        Self {
            priority: self.priority,
            inner: self.inner.with_ordering(ordering),
        }
    }
}

impl Default for ThreeInOne {
    fn default() -> Self {
        Self::new(Priority::default())
    }
}

impl Expander for ThreeInOne {
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
    use crate::{Propagation, testing::SearchTester};

    // A four-letter across slot crossed by a long down slot and a short one.
    //
    //     .D.E
    //     AAAA
    //     .D.E
    //     .D..
    const RULES: &str = "0 1 4 A 1 0 4 D 3 0 3 D";
    const WORDS: [&str; 6] = ["oboe", "abbe", "bobs", "babe", "ebb", "obe"];

    #[test]
    fn test_priority_decides_first_filter() {
        // The across slot crosses both down slots; the short down slot has
        // the fewest words.
        SearchTester::from_rules(RULES, &WORDS)
            .propagation(Propagation::Plain {
                forward_check: false,
            })
            .assert_first_slot(
                &mut ThreeInOne::new(Priority::MinimumRemainingValuesFirst),
                SlotId::from_index(2),
            )
            .assert_first_slot(
                &mut ThreeInOne::new(Priority::DegreeFirst),
                SlotId::from_index(0),
            );
    }

    #[test]
    fn test_agrees_with_exhaustive_search() {
        SearchTester::word_square(&["bat", "are", "ten", "tan", "ant", "ear", "net", "bee"])
            .assert_matches_oracle(ThreeInOne::new(Priority::MinimumRemainingValuesFirst))
            .assert_matches_oracle(ThreeInOne::new(Priority::DegreeFirst))
            .assert_matches_oracle(ThreeInOne::default().with_forward_check(true))
            .assert_matches_oracle(ThreeInOne::randomized(Priority::DegreeFirst, SearchSeed::from(4)));
    }
}
