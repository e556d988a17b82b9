//! Core Connect Four rules: tokens, the board with its four-in-a-row scans,
//! the player capability, and turn adjudication.

mod board;
mod player;
mod state;
mod token;

pub use board::{Board, Speculation, COLS, ROWS};
pub use player::{ColumnChoice, PassivePlayer, Player, PlayerKind, Seat};
pub use state::{GameLogic, GameStatus, TurnOutcome};
pub use token::Token;

pub use crate::error::MoveError;
