use super::{BoxedExpander, CustomExpander, Expander, TieBreak, ValueOrdering, WordOrder};
use crate::{Assignment, SearchNode, SearchSeed};

/// An expander that tries the least constraining words first.
///
/// Slots are chosen like [`BasicExpander`](super::BasicExpander) does; the
/// words of the chosen slot are ordered by
/// [`least_constraining_order`](super::least_constraining_order). Forward
/// checking is on by default, so words that leave a crossing slot without
/// candidates are never offered.
#[derive(Debug, Clone)]
pub struct LeastConstrainingValue {
    inner: CustomExpander,
}

impl LeastConstrainingValue {
    /// Creates the deterministic variant.
    #[must_use]
    pub fn new() -> Self {
        let inner = CustomExpander::builder()
            .name("LCV")
            .ordering(ValueOrdering::LeastConstraining {
                tie_break: WordOrder::Lexicographic,
                forward_check: true,
            })
            .build();
        Self { inner }
    }

    /// Creates the randomized variant.
    #[must_use]
    pub fn randomized(seed: SearchSeed) -> Self {
        let inner = CustomExpander::builder()
            .name("random LCV")
            .tie_break(TieBreak::Random)
            .ordering(ValueOrdering::LeastConstraining {
                tie_break: WordOrder::Random,
                forward_check: true,
            })
            .seed(seed)
            .build();
        Self { inner }
    }

    /// Enables or disables dropping words that empty a crossing slot.
    #[must_use]
    pub fn with_forward_check(self, forward_check: bool) -> Self {
        let ordering = self.inner.ordering().with_forward_check(forward_check);
        Self {
            inner: self.inner.with_ordering(ordering),
        }
    }
}

impl Default for LeastConstrainingValue {
    fn default() -> Self {
        Self::new()
    }
}

impl Expander for LeastConstrainingValue {
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
