use std::cmp::Ordering;

use crate::Direction;

/// A word-shaped region of the board.
///
/// A slot is identified by its starting cell, its length and its orientation.
/// Coordinates are board coordinates after normalization by
/// [`SlotTopologyBuilder`](crate::SlotTopologyBuilder), so they are never
/// negative.
///
/// Slots are totally ordered by their "distance" from the origin (`x + y`),
/// then by `x`, then by direction (vertical first), then by length. This is
/// the canonical order used for [`SlotId`](crate::SlotId) assignment and for
/// the origin-closest tie-break.
///
/// # Examples
///
/// ```
/// use crossfill_core::{Direction, Slot};
///
/// let across = Slot::new(0, 1, 3, Direction::Horizontal);
/// let down = Slot::new(1, 0, 3, Direction::Vertical);
///
/// assert!(across.crosses(down));
/// assert_eq!(across.crossing_offset(down), 1);
/// assert_eq!(down.crossing_offset(across), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("({x}, {y}) {length}{direction}")]
pub struct Slot {
    x: usize,
    y: usize,
    length: usize,
    direction: Direction,
}

impl Slot {
    /// Creates a slot.
    ///
    /// # Panics
    ///
    /// Panics if `length` is zero.
    #[must_use]
    pub const fn new(x: usize, y: usize, length: usize, direction: Direction) -> Self {
        assert!(length > 0, "slot length must be positive");
        Self {
            x,
            y,
            length,
            direction,
        }
    }

    /// Returns the x coordinate of the first cell.
    #[must_use]
    #[inline]
    pub const fn x(self) -> usize {
        self.x
    }

    /// Returns the y coordinate of the first cell.
    #[must_use]
    #[inline]
    pub const fn y(self) -> usize {
        self.y
    }

    /// Returns the number of cells in the slot.
    #[must_use]
    #[inline]
    pub const fn length(self) -> usize {
        self.length
    }

    /// Returns the orientation of the slot.
    #[must_use]
    #[inline]
    pub const fn direction(self) -> Direction {
        self.direction
    }

    /// Returns `x + y`, the primary ordering key.
    #[must_use]
    #[inline]
    pub const fn distance_from_origin(self) -> usize {
        self.x + self.y
    }

    /// Returns the board cell holding the `i`-th letter.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not less than the slot length.
    #[must_use]
    pub fn cell(self, i: usize) -> (usize, usize) {
        assert!(i < self.length, "letter index {i} out of slot {self}");
        match self.direction {
            Direction::Horizontal => (self.x + i, self.y),
            Direction::Vertical => (self.x, self.y + i),
        }
    }

    /// Returns the board cells of the slot, first letter first.
    pub fn cells(self) -> impl Iterator<Item = (usize, usize)> {
        (0..self.length).map(move |i| self.cell(i))
    }

    /// Returns the cell one past the last letter on each axis.
    ///
    /// Used to compute board dimensions.
    #[must_use]
    pub const fn end(self) -> (usize, usize) {
        match self.direction {
            Direction::Horizontal => (self.x.saturating_add(self.length), self.y.saturating_add(1)),
            Direction::Vertical => (self.x.saturating_add(1), self.y.saturating_add(self.length)),
        }
    }

    /// Returns `true` if the two slots have opposite orientations and share
    /// exactly one cell.
    #[must_use]
    pub fn crosses(self, other: Self) -> bool {
        if other.direction != self.direction.crossing() {
            return false;
        }
        let (across, down) = match self.direction {
            Direction::Horizontal => (self, other),
            Direction::Vertical => (other, self),
        };
        across.y >= down.y
            && across.y < down.y + down.length
            && across.x <= down.x
            && across.x + across.length > down.x
    }

    /// Returns `true` if the two slots have the same orientation and share
    /// at least one cell.
    ///
    /// Such slots cannot be constrained by a single crossing letter, so
    /// [`SlotTopologyBuilder`](crate::SlotTopologyBuilder) rejects them.
    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        if self.direction != other.direction {
            return false;
        }
        let (line, other_line, start, other_start) = match self.direction {
            Direction::Horizontal => (self.y, other.y, self.x, other.x),
            Direction::Vertical => (self.x, other.x, self.y, other.y),
        };
        line == other_line
            && start < other_start + other.length
            && other_start < start + self.length
    }

    /// Returns the index into this slot's word of the cell shared with
    /// `other`.
    ///
    /// The result is only meaningful when the slots [cross](Self::crosses).
    #[must_use]
    pub fn crossing_offset(self, other: Self) -> usize {
        debug_assert!(self.crosses(other), "{self} does not cross {other}");
        match self.direction {
            Direction::Horizontal => other.x - self.x,
            Direction::Vertical => other.y - self.y,
        }
    }
}

impl PartialOrd for Slot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Slot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance_from_origin()
            .cmp(&other.distance_from_origin())
            .then(self.x.cmp(&other.x))
            .then(self.direction.cmp(&other.direction))
            .then(self.length.cmp(&other.length))
    }
}
