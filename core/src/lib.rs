#![no_std]

extern crate alloc;

use core::ops::{Index, IndexMut};
use serde::{Deserialize, Serialize};

pub use analysis::*;
pub use engine::*;
pub use error::*;
pub use square::*;
pub use types::*;

mod analysis;
mod engine;
mod error;
mod square;
mod types;

/// Fixed 3x3 board, squares stored row-major.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; SQUARE_COUNT],
}

impl Board {
    pub const fn new() -> Self {
        Self {
            squares: [Square::Empty; SQUARE_COUNT],
        }
    }

    /// Builds a board from nine squares in row-major order.
    pub const fn from_squares(squares: [Square; SQUARE_COUNT]) -> Self {
        Self { squares }
    }

    pub fn validate_index(index: SquareIndex) -> Result<SquareIndex> {
        if is_valid_index(index) {
            Ok(index)
        } else {
            Err(GameError::InvalidSquare)
        }
    }

    pub fn is_occupied(&self, index: SquareIndex) -> bool {
        !self[index].is_empty()
    }

    /// True when no square is empty.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|square| !square.is_empty())
    }

    /// Returns a copy of this board with `mark` placed at `index`.
    pub fn with_mark(&self, index: SquareIndex, mark: Mark) -> Self {
        let mut next = *self;
        next[index] = Square::Marked(mark);
        next
    }

    pub fn iter(&self) -> impl Iterator<Item = (SquareIndex, Square)> + '_ {
        iter_indices().map(|index| (index, self[index]))
    }
}

impl Index<SquareIndex> for Board {
    type Output = Square;

    fn index(&self, index: SquareIndex) -> &Self::Output {
        &self.squares[index as usize]
    }
}

impl IndexMut<SquareIndex> for Board {
    fn index_mut(&mut self, index: SquareIndex) -> &mut Self::Output {
        &mut self.squares[index as usize]
    }
}

impl Index<Coord2> for Board {
    type Output = Square;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self[coords.to_square_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    NoChange,
    Placed,
    Won(Win),
    Tied,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            NoChange => false,
            Placed => true,
            Won(_) => true,
            Tied => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_full_only_when_every_square_marked() {
        let mut board = Board::new();
        assert!(!board.is_full());

        for index in iter_indices() {
            assert!(!board.is_full());
            board[index] = Square::Marked(Mark::for_step(index as usize));
        }

        assert!(board.is_full());
    }

    #[test]
    fn single_empty_square_is_not_full() {
        let mut board = Board::from_squares([Square::Marked(Mark::O); SQUARE_COUNT]);
        board[4] = Square::Empty;

        assert!(!board.is_full());
    }

    #[test]
    fn with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(5, Mark::X);

        assert_eq!(board[5], Square::Empty);
        assert_eq!(next[5], Square::Marked(Mark::X));
        assert_eq!(next[(1, 2)], Square::Marked(Mark::X));
    }

    #[test]
    fn validate_index_rejects_out_of_range() {
        assert_eq!(Board::validate_index(8), Ok(8));
        assert_eq!(Board::validate_index(9), Err(GameError::InvalidSquare));
    }

    #[test]
    fn only_no_change_has_no_update() {
        assert!(!MoveOutcome::NoChange.has_update());
        assert!(MoveOutcome::Placed.has_update());
        assert!(MoveOutcome::Tied.has_update());
    }
}
