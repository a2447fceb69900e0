use super::{
    BoxedExpander, Expander, TieBreak, ValueOrdering, VariableFilter, VariableSelector, WordOrder,
};
use crate::{Assignment, SearchNode, SearchRng, SearchSeed};

const NAME: &str = "custom";

/// An expander assembled from a [`VariableSelector`] and a
/// [`ValueOrdering`].
///
/// # Examples
///
/// ```
/// use crossfill_solver::expand::{
///     CustomExpander, Expander, TieBreak, ValueOrdering, VariableFilter, WordOrder,
/// };
///
/// let expander = CustomExpander::builder()
///     .filter(VariableFilter::Degree)
///     .filter(VariableFilter::MinimumRemainingValues)
///     .tie_break(TieBreak::OriginClosest)
///     .ordering(ValueOrdering::LeastConstraining {
///         tie_break: WordOrder::Lexicographic,
///         forward_check: true,
///     })
///     .build();
/// assert_eq!(expander.name(), "custom");
/// ```
#[derive(Debug, Clone)]
pub struct CustomExpander {
    name: &'static str,
    selector: VariableSelector,
    ordering: ValueOrdering,
    rng: SearchRng,
}

impl CustomExpander {
    /// Returns a builder with no filter, the origin-closest tie-break and
    /// lexicographic word order.
    #[must_use]
    pub fn builder() -> CustomExpanderBuilder {
        CustomExpanderBuilder::default()
    }

    /// Returns the variable selector.
    #[must_use]
    pub fn selector(&self) -> &VariableSelector {
        &self.selector
    }

    /// Returns the value ordering.
    #[must_use]
    pub fn ordering(&self) -> ValueOrdering {
        self.ordering
    }

    /// Replaces the value ordering, keeping the selector and random stream.
    #[must_use]
    pub fn with_ordering(mut self, ordering: ValueOrdering) -> Self {
        self.ordering = ordering;
        self
    }
}

impl Expander for CustomExpander {
    fn name(&self) -> &'static str {
        self.name
    }

    fn clone_box(&self) -> BoxedExpander {
        Box::new(self.clone())
    }

    fn assign(&mut self, node: &SearchNode) -> Vec<Assignment> {
        let Some(slot) = self.selector.select(node, &mut self.rng) else {
            return vec![];
        };
        self.ordering
            .order(node, slot, &mut self.rng)
            .into_iter()
            .map(|word| Assignment::from_domain(slot, word))
            .collect()
    }
}

/// Builder for [`CustomExpander`].
#[derive(Debug, Clone)]
#[must_use]
pub struct CustomExpanderBuilder {
    name: &'static str,
    filters: Vec<VariableFilter>,
    tie_break: TieBreak,
    ordering: ValueOrdering,
    seed: SearchSeed,
}

impl Default for CustomExpanderBuilder {
    fn default() -> Self {
        Self {
            name: NAME,
            filters: vec![],
            tie_break: TieBreak::OriginClosest,
            ordering: ValueOrdering::Plain(WordOrder::Lexicographic),
            seed: SearchSeed::default(),
        }
    }
}

impl CustomExpanderBuilder {
    /// Sets the name reported by the expander.
    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Appends a variable filter.
    pub fn filter(mut self, filter: VariableFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Sets the final variable tie-break.
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Sets the value ordering.
    pub fn ordering(mut self, ordering: ValueOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Seeds the random stream used by random tie-breaks and word orders.
    pub fn seed(mut self, seed: SearchSeed) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the expander.
    pub fn build(self) -> CustomExpander {
        CustomExpander {
            name: self.name,
            selector: VariableSelector::new(self.filters, self.tie_break),
            ordering: self.ordering,
            rng: SearchRng::new(self.seed),
        }
    }
}
