use crossfill_core::SlotId;

/// Propagation emptied the domain of a slot.
///
/// Raised only by strict propagation. A candidate child that fails with this
/// error is infeasible and never enters the search tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no candidate word is left for slot {slot}")]
pub struct EmptyDomain {
    /// The slot whose domain became empty.
    pub slot: SlotId,
}

/// An error returned by [`Assignment::new`](crate::Assignment::new).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AssignmentError {
    /// The slot does not belong to the topology.
    #[display("slot {slot} is not part of the puzzle")]
    UnknownSlot {
        /// The offending slot id.
        slot: SlotId,
    },
    /// The word length differs from the slot length.
    #[display("slot {slot} takes {expected} letters, got {actual}")]
    LengthMismatch {
        /// The slot being assigned.
        slot: SlotId,
        /// The slot length.
        expected: usize,
        /// The word length.
        actual: usize,
    },
}

/// An error returned by [`DepthFirstSearch`](crate::DepthFirstSearch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SearchError {
    /// `step` was called with nothing left to explore.
    #[display("search space exhausted")]
    Exhausted,
    /// The frontier grew past the configured limit.
    #[display("search stack grew to {size} nodes, over the limit of {limit}")]
    StackLimitExceeded {
        /// The configured limit.
        limit: usize,
        /// The stack size that tripped the limit.
        size: usize,
    },
}
