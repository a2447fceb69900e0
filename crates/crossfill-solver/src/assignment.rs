use crossfill_core::{SlotId, SlotTopology, Word};

use crate::AssignmentError;

/// A word placed into a slot.
///
/// # Examples
///
/// ```
/// use crossfill_core::{SlotId, SlotTopology, Word};
/// use crossfill_solver::{Assignment, AssignmentError};
///
/// let topology: SlotTopology = "0 0 3 A".parse()?;
/// let slot = SlotId::from_index(0);
///
/// let assignment = Assignment::new(&topology, slot, Word::new("cat"))?;
/// assert_eq!(assignment.to_string(), "#0=CAT");
///
/// assert!(matches!(
///     Assignment::new(&topology, slot, Word::new("bird")),
///     Err(AssignmentError::LengthMismatch { expected: 3, actual: 4, .. })
/// ));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{slot}={word}")]
pub struct Assignment {
    slot: SlotId,
    word: Word,
}

impl Assignment {
    /// Creates an assignment, checking it against the topology.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::UnknownSlot`] if `slot` is not in the
    /// topology and [`AssignmentError::LengthMismatch`] if the word does not
    /// fit the slot.
    pub fn new(topology: &SlotTopology, slot: SlotId, word: Word) -> Result<Self, AssignmentError> {
        let Some(geometry) = topology.get(slot) else {
            return Err(AssignmentError::UnknownSlot { slot });
        };
        if geometry.length() != word.len() {
            return Err(AssignmentError::LengthMismatch {
                slot,
                expected: geometry.length(),
                actual: word.len(),
            });
        }
        Ok(Self { slot, word })
    }

    /// Creates an assignment for a word taken from the slot's own domain.
    pub(crate) fn from_domain(slot: SlotId, word: Word) -> Self {
        Self { slot, word }
    }

    /// Returns the assigned slot.
    #[must_use]
    #[inline]
    pub fn slot(&self) -> SlotId {
        self.slot
    }

    /// Returns the assigned word.
    #[must_use]
    #[inline]
    pub fn word(&self) -> &Word {
        &self.word
    }
}
