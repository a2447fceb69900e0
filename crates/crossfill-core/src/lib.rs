//! Core data structures for crossword fill-in puzzles.
//!
//! This crate provides the inputs and outputs of the search engine in
//! `crossfill-solver`: the board layout, the word list, and the rendered
//! grid. None of these types carry search state.
//!
//! # Overview
//!
//! 1. **Layout** - where the words go
//!    - [`Direction`] and [`Slot`]: one word-shaped region of the board
//!    - [`SlotTopology`]: every slot of a puzzle with its crossing neighbors
//!      and the board dimensions, built with [`SlotTopologyBuilder`] or parsed
//!      from rule text (`x y length direction` per slot)
//!
//! 2. **Vocabulary** - what can go there
//!    - [`Word`]: an upper-cased letter sequence
//!    - [`WordSource`]: words indexed by length
//!
//! 3. **Rendering**
//!    - [`Board`]: a letter grid built from slot/word pairs
//!
//! # Examples
//!
//! ```
//! use crossfill_core::{Board, SlotTopology, WordSource};
//!
//! let topology: SlotTopology = "0 0 3 A 1 -1 3 D".parse()?;
//! let words: WordSource = ["cat", "dog"].into_iter().collect();
//!
//! let mut board = Board::new(topology.width(), topology.height());
//! for (_, slot) in topology.slots() {
//!     board.fill(slot, &words.words_of_length(slot.length())[0]);
//! }
//! assert_eq!(board.to_string(), ".C.\nCAT\n.T.");
//! # Ok::<(), crossfill_core::ParseTopologyError>(())
//! ```

pub use self::{
    board::Board,
    direction::Direction,
    error::{ParseRulesError, ParseTopologyError},
    slot::Slot,
    topology::{Neighbors, SlotId, SlotTopology, SlotTopologyBuilder},
    word::{Word, WordSource},
};

mod board;
mod direction;
mod error;
mod slot;
pub mod topology;
pub mod word;
