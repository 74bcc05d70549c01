use alloc::vec;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// The square a move was played on and the mark placed there.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedMove {
    pub mark: Mark,
    pub coords: Coord2,
}

impl PlayedMove {
    pub const fn row(&self) -> Coord {
        self.coords.0
    }

    pub const fn col(&self) -> Coord {
        self.coords.1
    }
}

/// Board snapshot together with the move that produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub board: Board,
    /// `None` only for the initial empty board.
    pub last_move: Option<PlayedMove>,
}

impl MoveRecord {
    pub const fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }
}

/// History of board snapshots plus the step currently displayed.
///
/// Operations never mutate a state in place; they return the next state so
/// earlier snapshots stay valid for redisplay. The pending mark is derived from
/// step parity and never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    history: Vec<MoveRecord>,
    step: usize,
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<MoveRecord>,
    step: usize,
}

impl TryFrom<RawGameState> for GameState {
    type Error = GameError;

    fn try_from(RawGameState { history, step }: RawGameState) -> Result<Self> {
        if history.is_empty() {
            return Err(GameError::EmptyHistory);
        }
        if step >= history.len() {
            return Err(GameError::InvalidStep);
        }
        Ok(Self { history, step })
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            history: vec![MoveRecord::initial()],
            step: 0,
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn move_count(&self) -> usize {
        self.history.len() - 1
    }

    pub fn current(&self) -> &MoveRecord {
        &self.history[self.step]
    }

    pub fn board(&self) -> &Board {
        &self.current().board
    }

    pub fn next_player(&self) -> Mark {
        Mark::for_step(self.step)
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::of(self.board(), self.next_player())
    }

    pub fn winner(&self) -> Option<Win> {
        self.status().winner()
    }

    pub fn is_finished(&self) -> bool {
        self.status().is_finished()
    }

    /// Plays the pending mark on `index` of the displayed board.
    ///
    /// Any records after the current step are dropped before the new one is
    /// appended. Moves on an occupied square or a won board are ignored and
    /// return an unchanged copy with [`MoveOutcome::NoChange`].
    pub fn apply_move(&self, index: SquareIndex) -> Result<(Self, MoveOutcome)> {
        let index = Board::validate_index(index)?;
        let board = self.board();

        if let Some(win) = find_winner(board) {
            log::trace!("move at {} ignored, {} already won", index, win.mark);
            return Ok((self.clone(), MoveOutcome::NoChange));
        }
        if board.is_occupied(index) {
            log::trace!("move at {} ignored, square occupied", index);
            return Ok((self.clone(), MoveOutcome::NoChange));
        }

        let mark = self.next_player();
        let record = MoveRecord {
            board: board.with_mark(index, mark),
            last_move: Some(PlayedMove {
                mark,
                coords: index.to_coords(),
            }),
        };

        let mut history = Vec::with_capacity(self.step + 2);
        history.extend_from_slice(&self.history[..=self.step]);
        history.push(record);
        let next = Self {
            history,
            step: self.step + 1,
        };
        log::debug!("{} played {} at step {}", mark, index, next.step);

        let outcome = match next.status() {
            GameStatus::Won(win) => MoveOutcome::Won(win),
            GameStatus::Tie => MoveOutcome::Tied,
            GameStatus::InProgress { .. } => MoveOutcome::Placed,
        };
        Ok((next, outcome))
    }

    /// Moves the displayed step without touching the history.
    pub fn jump_to(&self, step: usize) -> Result<Self> {
        if step >= self.history.len() {
            return Err(GameError::InvalidStep);
        }

        log::debug!("jump to step {} of {}", step, self.move_count());
        Ok(Self {
            history: self.history.clone(),
            step,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
