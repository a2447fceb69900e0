use super::{BoxedExpander, CustomExpander, Expander, TieBreak, ValueOrdering, WordOrder};
use crate::{Assignment, SearchNode, SearchSeed};

/// An uninformed expander.
///
/// Fills the slot closest to the origin first and tries its words in
/// dictionary order. The randomized variant picks any unassigned slot and
/// shuffles the words.
#[derive(Debug, Clone)]
pub struct BasicExpander {
    inner: CustomExpander,
}

impl BasicExpander {
    /// Creates the deterministic variant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: CustomExpander::builder().name("basic").build(),
        }
    }

    /// Creates the randomized variant.
    #[must_use]
    pub fn randomized(seed: SearchSeed) -> Self {
        let inner = CustomExpander::builder()
            .name("random basic")
            .tie_break(TieBreak::Random)
            .ordering(ValueOrdering::Plain(WordOrder::Random))
            .seed(seed)
            .build();
        Self { inner }
    }
}

impl Default for BasicExpander {
    fn default() -> Self {
        Self::new()
    }
}

impl Expander for BasicExpander {
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
