use std::fmt;

use crate::{Slot, Word};

/// A width×height letter grid.
///
/// Boards are a rendering view: they are rebuilt from a set of slot/word
/// pairs and carry no search state. Cells no word has been written to are
/// `None` and display as `.`.
///
/// # Examples
///
/// ```
/// use crossfill_core::{Board, Direction, Slot, Word};
///
/// let mut board = Board::new(3, 3);
/// board.fill(Slot::new(0, 1, 3, Direction::Horizontal), &Word::new("cat"));
/// board.fill(Slot::new(1, 0, 3, Direction::Vertical), &Word::new("bat"));
///
/// assert_eq!(board.to_string(), ".B.\nCAT\n.T.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Option<char>>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Returns the width in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height in cells.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the letter at `(x, y)`, or `None` if the cell is empty or
    /// outside the board.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[y * self.width + x]
    }

    /// Writes `word` into the cells of `slot`.
    ///
    /// # Panics
    ///
    /// Panics if the word length differs from the slot length or if the slot
    /// does not fit on the board.
    pub fn fill(&mut self, slot: Slot, word: &Word) {
        assert_eq!(slot.length(), word.len(), "{word} does not fit {slot}");
        for ((x, y), &letter) in slot.cells().zip(word.letters()) {
            assert!(x < self.width && y < self.height, "{slot} is off the board");
            self.cells[y * self.width + x] = Some(letter);
        }
    }

    /// Returns the number of non-empty cells.
    #[must_use]
    pub fn filled_cells(&self) -> usize {
        self.cells.iter().flatten().count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width.max(1)).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.unwrap_or('.'))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4, 2);
        assert_eq!(board.filled_cells(), 0);
        assert_eq!(board.to_string(), "....\n....");
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let mut board = Board::new(2, 2);
        board.fill(Slot::new(0, 0, 2, Direction::Horizontal), &Word::new("ab"));
        assert_eq!(board.get(1, 0), Some('B'));
        assert_eq!(board.get(2, 0), None);
        assert_eq!(board.get(0, 5), None);
    }

    #[test]
    fn test_fill_overwrites_shared_cell() {
        let mut board = Board::new(3, 3);
        board.fill(Slot::new(1, 0, 3, Direction::Vertical), &Word::new("bat"));
        board.fill(Slot::new(0, 1, 3, Direction::Horizontal), &Word::new("cot"));
        assert_eq!(board.get(1, 1), Some('O'));
        assert_eq!(board.filled_cells(), 5);
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn test_fill_rejects_length_mismatch() {
        let mut board = Board::new(3, 1);
        board.fill(Slot::new(0, 0, 3, Direction::Horizontal), &Word::new("ab"));
    }
}
