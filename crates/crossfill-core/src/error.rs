use crate::Slot;

/// Errors produced while reading a slot topology rule.
///
/// Every variant is an "invalid rule" failure: the rule text (or the builder
/// input derived from it) cannot describe a puzzle board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseTopologyError {
    /// The number of tokens is not a multiple of four.
    #[display("invalid rule: {count} tokens is not a multiple of four")]
    TokenCount {
        /// Number of whitespace-separated tokens found.
        count: usize,
    },
    /// A direction token is not one of `A`, `H`, `D`, `V`.
    #[display("invalid rule: unknown direction {token:?}")]
    InvalidDirection {
        /// The offending token.
        token: String,
    },
    /// A coordinate or length token is not an integer.
    #[display("invalid rule: {token:?} is not an integer")]
    InvalidNumber {
        /// The offending token.
        token: String,
    },
    /// A slot length is zero or negative.
    #[display("invalid rule: slot length {length} is not positive")]
    NonPositiveLength {
        /// The rejected length.
        length: i32,
    },
    /// The slots span more than [`SlotTopology::MAX_EXTENT`] cells along
    /// one axis.
    ///
    /// [`SlotTopology::MAX_EXTENT`]: crate::SlotTopology::MAX_EXTENT
    #[display("invalid rule: board extent {extent} exceeds {limit} cells")]
    CoordinateOutOfRange {
        /// Cells spanned along the longer axis.
        extent: i64,
        /// The largest accepted extent.
        limit: usize,
    },
    /// Two slots of the same direction share a cell.
    #[display("invalid rule: {first} overlaps {second}")]
    OverlappingSlots {
        /// The earlier slot in canonical order, in normalized coordinates.
        first: Slot,
        /// The later slot.
        second: Slot,
    },
    /// The rule contains no slot at all.
    #[display("invalid rule: topology has no slots")]
    Empty,
}

/// A [`ParseTopologyError`] located in a multi-line rule file.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("line {line}: {source}")]
pub struct ParseRulesError {
    /// 1-based line number of the rejected rule.
    pub line: usize,
    /// What was wrong with the rule.
    pub source: ParseTopologyError,
}
