use serde::{Deserialize, Serialize};

use crate::*;

/// Three squares that win the game when they all carry the same mark.
pub type Line = [SquareIndex; 3];

/// Every winning line, rows first, then columns, then the two diagonals.
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    pub mark: Mark,
    pub line: Line,
}

impl Win {
    pub fn contains(&self, index: SquareIndex) -> bool {
        self.line.contains(&index)
    }
}

/// Returns the first line in [`LINES`] order fully held by one mark.
pub fn find_winner(board: &Board) -> Option<Win> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match board[a] {
            Square::Marked(mark) if board[b] == board[a] && board[c] == board[a] => {
                Some(Win { mark, line })
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_of(marks: &[(SquareIndex, Mark)]) -> Board {
        let mut board = Board::new();
        for &(index, mark) in marks {
            board[index] = Square::Marked(mark);
        }
        board
    }

    #[test]
    fn empty_board_has_no_winner() {
        assert_eq!(find_winner(&Board::new()), None);
    }

    #[test]
    fn every_line_is_detected_for_both_marks() {
        for line in LINES {
            for mark in [Mark::X, Mark::O] {
                let board = board_of(&line.map(|index| (index, mark)));
                assert_eq!(find_winner(&board), Some(Win { mark, line }));
            }
        }
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        let board = board_of(&[(0, Mark::X), (1, Mark::X), (2, Mark::O)]);
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn two_in_a_row_is_not_a_win() {
        let board = board_of(&[(2, Mark::O), (4, Mark::O)]);
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn first_line_in_order_wins_when_several_match() {
        // X holds the top row and the left column
        let board = board_of(&[
            (0, Mark::X),
            (1, Mark::X),
            (2, Mark::X),
            (3, Mark::X),
            (6, Mark::X),
        ]);

        let win = find_winner(&board).unwrap();
        assert_eq!(win.line, [0, 1, 2]);
        assert!(win.contains(1));
        assert!(!win.contains(3));
    }

    #[test]
    fn full_board_without_line_has_no_winner() {
        use Mark::*;
        // X O X
        // X O O
        // O X X
        let board = board_of(&[
            (0, X),
            (1, O),
            (2, X),
            (3, X),
            (4, O),
            (5, O),
            (6, O),
            (7, X),
            (8, X),
        ]);

        assert_eq!(find_winner(&board), None);
        assert!(board.is_full());
    }
}
