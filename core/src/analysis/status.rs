use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Won(Win),
    Tie,
    InProgress { next: Mark },
}

impl GameStatus {
    /// Derives the status of `board` when `next` is the mark to play.
    pub fn of(board: &Board, next: Mark) -> Self {
        if let Some(win) = find_winner(board) {
            Self::Won(win)
        } else if board.is_full() {
            Self::Tie
        } else {
            Self::InProgress { next }
        }
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won(_) | Self::Tie)
    }

    pub const fn winner(self) -> Option<Win> {
        match self {
            Self::Won(win) => Some(win),
            _ => None,
        }
    }
}
