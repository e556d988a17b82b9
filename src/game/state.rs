use log::{debug, warn};

use super::{Board, ColumnChoice, Player, Seat};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Drawn,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// What a completed turn led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Won { winner: Seat },
    Drawn,
    /// The move stood and the other seat is now to play.
    Continue,
}

/// Turn order and adjudication over one board and two players. This is the
/// only place committed moves are written to the board.
pub struct GameLogic {
    board: Board,
    players: [Box<dyn Player>; 2],
    current: Seat,
}

impl GameLogic {
    /// Start a game on `board`; `first` is to move.
    pub fn new(board: Board, first: Box<dyn Player>, second: Box<dyn Player>) -> Self {
        GameLogic {
            board,
            players: [first, second],
            current: Seat::First,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_seat(&self) -> Seat {
        self.current
    }

    pub fn current_player(&self) -> &dyn Player {
        self.player(self.current)
    }

    pub fn player(&self, seat: Seat) -> &dyn Player {
        self.players[seat.index()].as_ref()
    }

    /// Hand the turn to the other seat. Terminal states are not checked here.
    pub fn switch_player(&mut self) {
        self.current = self.current.other();
        debug!("{} seat to play", self.current.name());
    }

    /// Drop the current player's token into `col` and return the row it
    /// landed in. Invalid moves leave the board untouched. Neither turn order
    /// nor termination is touched.
    pub fn place_token_on_board(&mut self, col: usize) -> Result<usize, MoveError> {
        if !self.board.is_valid_move(col) {
            let err = if col < self.board.columns() {
                MoveError::ColumnFull(col)
            } else {
                MoveError::InvalidColumn(col)
            };
            warn!("Invalid move: {err}");
            return Err(err);
        }

        let token = self.current_player().token().clone();
        let row = self
            .board
            .first_available_row(col)
            .ok_or(MoveError::ColumnFull(col))?;
        debug!("{} placed at ({row}, {col})", token);
        self.board.set_token(row, col, token);
        Ok(row)
    }

    /// Four in a row anywhere on the board.
    pub fn is_game_over(&self) -> bool {
        self.board.has_four_in_a_row()
    }

    /// Board full with no line of four. A full board that also holds a line
    /// is a win, never a draw.
    pub fn is_draw(&self) -> bool {
        self.board.are_all_columns_full() && !self.is_game_over()
    }

    pub fn status(&self) -> GameStatus {
        if self.is_game_over() {
            GameStatus::Won
        } else if self.is_draw() {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress
        }
    }

    /// Ask the current player for a column, lending it the board.
    pub fn choose_column(&mut self) -> ColumnChoice {
        let player = &mut self.players[self.current.index()];
        player.choose_column(&mut self.board)
    }

    /// Place for the current seat, adjudicate, and pass the turn if play goes on.
    pub fn play_turn(&mut self, col: usize) -> Result<TurnOutcome, MoveError> {
        if self.status().is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.place_token_on_board(col)?;

        match self.status() {
            GameStatus::Won => Ok(TurnOutcome::Won {
                winner: self.current,
            }),
            GameStatus::Drawn => Ok(TurnOutcome::Drawn),
            GameStatus::InProgress => {
                self.switch_player();
                Ok(TurnOutcome::Continue)
            }
        }
    }
}
