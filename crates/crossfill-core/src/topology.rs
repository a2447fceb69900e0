//! Slot topology: the immutable board layout consumed by the search.
//!
//! A [`SlotTopology`] owns every [`Slot`] of one puzzle, addressed by
//! [`SlotId`], together with each slot's crossing neighbors and the board
//! dimensions. Topologies are built either programmatically through
//! [`SlotTopologyBuilder`] or from rule text, one puzzle per line, where each
//! slot is the four tokens `x y length direction`.
//!
//! # Examples
//!
//! ```
//! use crossfill_core::SlotTopology;
//!
//! // A 3-letter across word crossed by a 3-letter down word in the middle.
//! let topology: SlotTopology = "0 0 3 A 1 -1 3 D".parse()?;
//!
//! assert_eq!(topology.len(), 2);
//! assert_eq!((topology.width(), topology.height()), (3, 3));
//! for id in topology.ids() {
//!     assert_eq!(topology.neighbors(id).len(), 1);
//! }
//! # Ok::<(), crossfill_core::ParseTopologyError>(())
//! ```

use std::str::FromStr;

use tinyvec::TinyVec;

use crate::{Direction, ParseRulesError, ParseTopologyError, Slot};

/// Index of a slot inside its [`SlotTopology`].
///
/// Ids follow the canonical slot order, so the smallest id is the slot
/// closest to the origin.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display,
)]
#[display("#{_0}")]
pub struct SlotId(u32);

impl SlotId {
    /// Returns the id as a container index.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Creates an id from a container index.
    #[must_use]
    #[inline]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_index(index: usize) -> Self {
        Self(index as u32)
    }
}

/// Neighbor list of a slot.
///
/// Most crossword slots cross only a handful of others, so short lists stay
/// inline.
pub type Neighbors = TinyVec<[SlotId; 8]>;

/// The immutable set of slots of one puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotTopology {
    slots: Vec<Slot>,
    neighbors: Vec<Neighbors>,
    width: usize,
    height: usize,
}

impl SlotTopology {
    /// The largest board width or height a topology may span.
    pub const MAX_EXTENT: usize = 4096;

    /// Starts building a topology.
    #[must_use]
    pub fn builder() -> SlotTopologyBuilder {
        SlotTopologyBuilder::default()
    }

    /// Returns the number of slots. Never zero.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`: an empty topology cannot be built.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the board width in cells.
    #[must_use]
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the board height in cells.
    #[must_use]
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns all slot ids in canonical order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = SlotId> + use<> {
        (0..self.slots.len()).map(SlotId::from_index)
    }

    /// Returns all slots with their ids, in canonical order.
    pub fn slots(&self) -> impl ExactSizeIterator<Item = (SlotId, Slot)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| (SlotId::from_index(i), *slot))
    }

    /// Returns the slot with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this topology.
    #[must_use]
    #[inline]
    pub fn slot(&self, id: SlotId) -> Slot {
        self.slots[id.index()]
    }

    /// Returns the slot with the given id, or `None` for a foreign id.
    #[must_use]
    pub fn get(&self, id: SlotId) -> Option<Slot> {
        self.slots.get(id.index()).copied()
    }

    /// Returns the slots crossing `id`, in canonical order.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this topology.
    #[must_use]
    #[inline]
    pub fn neighbors(&self, id: SlotId) -> &[SlotId] {
        &self.neighbors[id.index()]
    }

    /// Returns `true` if the two slots cross.
    #[must_use]
    pub fn are_neighbors(&self, a: SlotId, b: SlotId) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Parses a rule file holding one topology per line.
    ///
    /// Blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ParseRulesError`] carrying the 1-based line number of the
    /// first rejected rule.
    pub fn parse_rules(text: &str) -> Result<Vec<Self>, ParseRulesError> {
        text.lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                line.parse()
                    .map_err(|source| ParseRulesError { line: i + 1, source })
            })
            .collect()
    }
}

impl FromStr for SlotTopology {
    type Err = ParseTopologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = s.split_whitespace().collect::<Vec<_>>();
        if tokens.len() % 4 != 0 {
            return Err(ParseTopologyError::TokenCount {
                count: tokens.len(),
            });
        }
        let mut builder = Self::builder();
        for rule in tokens.chunks_exact(4) {
            let &[x, y, length, direction] = rule else {
                unreachable!()
            };
            builder.add_slot(
                parse_number(x)?,
                parse_number(y)?,
                parse_number(length)?,
                direction.parse()?,
            )?;
        }
        builder.build()
    }
}

fn parse_number(token: &str) -> Result<i32, ParseTopologyError> {
    token
        .parse()
        .map_err(|_| ParseTopologyError::InvalidNumber {
            token: token.to_owned(),
        })
}

/// Collects slots in raw (possibly negative) coordinates and turns them into
/// a [`SlotTopology`].
///
/// [`build`](Self::build) shifts every slot so that the minimum x and y
/// become zero, sorts the slots into canonical order and computes the
/// neighbor lists and board size.
///
/// # Examples
///
/// ```
/// use crossfill_core::{Direction, SlotTopology};
///
/// let mut builder = SlotTopology::builder();
/// builder
///     .add_slot(0, 0, 3, Direction::Horizontal)?
///     .add_slot(1, -1, 3, Direction::Vertical)?;
/// let topology = builder.build()?;
///
/// let (_, first) = topology.slots().next().unwrap();
/// assert_eq!((first.x(), first.y()), (0, 1));
/// # Ok::<(), crossfill_core::ParseTopologyError>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct SlotTopologyBuilder {
    raw: Vec<(i32, i32, i32, Direction)>,
}

impl SlotTopologyBuilder {
    /// Adds a slot in raw coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTopologyError::NonPositiveLength`] if `length` is not
    /// positive.
    pub fn add_slot(
        &mut self,
        x: i32,
        y: i32,
        length: i32,
        direction: Direction,
    ) -> Result<&mut Self, ParseTopologyError> {
        if length <= 0 {
            return Err(ParseTopologyError::NonPositiveLength { length });
        }
        self.raw.push((x, y, length, direction));
        Ok(self)
    }

    /// Builds the topology.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTopologyError::Empty`] if no slot was added,
    /// [`ParseTopologyError::CoordinateOutOfRange`] if the slots span more
    /// than [`SlotTopology::MAX_EXTENT`] cells along either axis, and
    /// [`ParseTopologyError::OverlappingSlots`] if two slots of the same
    /// direction share a cell.
    pub fn build(&self) -> Result<SlotTopology, ParseTopologyError> {
        let min_x = self.raw.iter().map(|&(x, ..)| x).min();
        let min_y = self.raw.iter().map(|&(_, y, ..)| y).min();
        let (Some(min_x), Some(min_y)) = (min_x, min_y) else {
            return Err(ParseTopologyError::Empty);
        };

        let mut slots = Vec::with_capacity(self.raw.len());
        for &(x, y, length, direction) in &self.raw {
            // Every operand fits in 33 bits, so i64 arithmetic cannot overflow.
            let x = i64::from(x) - i64::from(min_x);
            let y = i64::from(y) - i64::from(min_y);
            let length = i64::from(length);
            let extent = match direction {
                Direction::Horizontal => (x + length).max(y + 1),
                Direction::Vertical => (x + 1).max(y + length),
            };
            if !usize::try_from(extent).is_ok_and(|cells| cells <= SlotTopology::MAX_EXTENT) {
                return Err(ParseTopologyError::CoordinateOutOfRange {
                    extent,
                    limit: SlotTopology::MAX_EXTENT,
                });
            }
            // 0 <= x, y, length <= extent <= MAX_EXTENT
            #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let (x, y, length) = (x as usize, y as usize, length as usize);
            slots.push(Slot::new(x, y, length, direction));
        }
        slots.sort();

        for (i, &first) in slots.iter().enumerate() {
            if let Some(&second) = slots[i + 1..].iter().find(|&&other| first.overlaps(other)) {
                return Err(ParseTopologyError::OverlappingSlots { first, second });
            }
        }

        let neighbors = slots
            .iter()
            .map(|slot| {
                (0..slots.len())
                    .filter(|&j| slot.crosses(slots[j]))
                    .map(SlotId::from_index)
                    .collect::<Neighbors>()
            })
            .collect();

        let width = slots.iter().map(|slot| slot.end().0).max().unwrap_or(0);
        let height = slots.iter().map(|slot| slot.end().1).max().unwrap_or(0);

        Ok(SlotTopology {
            slots,
            neighbors,
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<SlotId> {
        raw.iter().map(|&i| SlotId(i)).collect()
    }

    #[test]
    fn test_parse_normalizes_negative_coordinates() {
        let topology: SlotTopology = "0 0 3 A 1 -1 3 D".parse().unwrap();
        let slots = topology.slots().map(|(_, s)| s).collect::<Vec<_>>();
        assert_eq!(
            slots,
            [
                Slot::new(0, 1, 3, Direction::Horizontal),
                Slot::new(1, 0, 3, Direction::Vertical),
            ]
        );
        assert_eq!(topology.width(), 3);
        assert_eq!(topology.height(), 3);
    }

    #[test]
    fn test_neighbors_are_symmetric() {
        // A small "#"-shaped grid: two across words, two down words.
        let topology: SlotTopology = "0 1 5 H 0 3 5 H 1 0 5 V 3 0 5 V".parse().unwrap();
        for a in topology.ids() {
            for &b in topology.neighbors(a) {
                assert!(topology.are_neighbors(b, a));
                assert_ne!(
                    topology.slot(a).direction(),
                    topology.slot(b).direction()
                );
            }
            assert_eq!(topology.neighbors(a).len(), 2);
        }
    }

    #[test]
    fn test_ids_follow_canonical_order() {
        let topology: SlotTopology = "3 0 5 V 0 3 5 H 1 0 5 V 0 1 5 H".parse().unwrap();
        let slots = topology.slots().map(|(_, s)| s).collect::<Vec<_>>();
        let mut sorted = slots.clone();
        sorted.sort();
        assert_eq!(slots, sorted);
        // (0,1)H and (1,0)V tie on distance; x breaks the tie.
        assert_eq!(topology.slot(SlotId(0)), Slot::new(0, 1, 5, Direction::Horizontal));
        assert_eq!(topology.neighbors(SlotId(0)), ids(&[1, 3]));
    }

    #[test]
    fn test_isolated_slot_has_no_neighbors() {
        let topology: SlotTopology = "0 0 4 A 0 2 4 A".parse().unwrap();
        assert!(topology.ids().all(|id| topology.neighbors(id).is_empty()));
        assert_eq!((topology.width(), topology.height()), (4, 3));
    }

    #[test]
    fn test_parse_token_count_error() {
        assert_eq!(
            "0 0 3".parse::<SlotTopology>(),
            Err(ParseTopologyError::TokenCount { count: 3 })
        );
    }

    #[test]
    fn test_parse_direction_error() {
        assert_eq!(
            "0 0 3 X".parse::<SlotTopology>(),
            Err(ParseTopologyError::InvalidDirection {
                token: "X".to_owned()
            })
        );
    }

    #[test]
    fn test_parse_number_error() {
        assert_eq!(
            "0 zero 3 A".parse::<SlotTopology>(),
            Err(ParseTopologyError::InvalidNumber {
                token: "zero".to_owned()
            })
        );
    }

    #[test]
    fn test_parse_length_error() {
        assert_eq!(
            "0 0 0 A".parse::<SlotTopology>(),
            Err(ParseTopologyError::NonPositiveLength { length: 0 })
        );
        assert_eq!(
            "0 0 -2 D".parse::<SlotTopology>(),
            Err(ParseTopologyError::NonPositiveLength { length: -2 })
        );
    }

    #[test]
    fn test_parse_rejects_coordinates_beyond_i32() {
        assert_eq!(
            "-9223372036854775808 0 1 A".parse::<SlotTopology>(),
            Err(ParseTopologyError::InvalidNumber {
                token: "-9223372036854775808".to_owned()
            })
        );
        assert!(matches!(
            "0 0 3 A 4000000000000 0 3 A".parse::<SlotTopology>(),
            Err(ParseTopologyError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_extreme_span() {
        let rules = format!("{} 0 1 A {} 0 1 A", i32::MIN, i32::MAX);
        assert_eq!(
            rules.parse::<SlotTopology>(),
            Err(ParseTopologyError::CoordinateOutOfRange {
                extent: 1 << 32,
                limit: SlotTopology::MAX_EXTENT,
            })
        );
        assert!(matches!(
            "0 0 3 A 2000000000 0 3 A".parse::<SlotTopology>(),
            Err(ParseTopologyError::CoordinateOutOfRange { .. })
        ));
        assert!(matches!(
            "0 0 5000 D".parse::<SlotTopology>(),
            Err(ParseTopologyError::CoordinateOutOfRange { extent: 5000, .. })
        ));
    }

    #[test]
    fn test_parse_accepts_maximum_extent() {
        let rules = format!("-1 0 {} A", SlotTopology::MAX_EXTENT);
        let topology: SlotTopology = rules.parse().unwrap();
        assert_eq!(topology.width(), SlotTopology::MAX_EXTENT);
    }

    #[test]
    fn test_build_rejects_overlapping_slots() {
        assert_eq!(
            "0 0 3 A 0 0 3 A".parse::<SlotTopology>(),
            Err(ParseTopologyError::OverlappingSlots {
                first: Slot::new(0, 0, 3, Direction::Horizontal),
                second: Slot::new(0, 0, 3, Direction::Horizontal),
            })
        );
        assert!(matches!(
            "0 0 4 D 2 0 3 A 0 2 2 D".parse::<SlotTopology>(),
            Err(ParseTopologyError::OverlappingSlots { .. })
        ));
        // Same line, touching end to start.
        assert!("0 0 3 A 3 0 2 A".parse::<SlotTopology>().is_ok());
    }

    #[test]
    fn test_neighbor_lists_grow_past_inline_capacity() {
        // One long across word crossed by ten down words.
        let mut rules = "0 0 10 A".to_owned();
        for x in 0..10 {
            rules.push_str(&format!(" {x} 0 2 D"));
        }
        let topology: SlotTopology = rules.parse().unwrap();
        let across = topology
            .ids()
            .find(|&id| topology.slot(id).direction() == Direction::Horizontal)
            .unwrap();
        assert_eq!(topology.neighbors(across).len(), 10);
    }

    #[test]
    fn test_parse_empty_error() {
        assert_eq!("   ".parse::<SlotTopology>(), Err(ParseTopologyError::Empty));
    }

    #[test]
    fn test_parse_rules_reports_line() {
        let rules = "0 0 3 A\n\n0 0 3 A 0 0 3 Q\n";
        let err = SlotTopology::parse_rules(rules).unwrap_err();
        assert_eq!(err.line, 3);
        assert!(matches!(
            err.source,
            ParseTopologyError::InvalidDirection { .. }
        ));
    }

    #[test]
    fn test_parse_rules_skips_blank_lines() {
        let rules = "0 0 3 A 1 -1 3 D\n\n  \n0 0 4 H\n";
        let topologies = SlotTopology::parse_rules(rules).unwrap();
        assert_eq!(topologies.len(), 2);
        assert_eq!(topologies[1].len(), 1);
    }
}
