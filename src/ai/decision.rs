use log::debug;
use rand::Rng;

use crate::game::{Board, Token};

/// The column the one-ply procedure settled on, and the rule that picked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Playing here completes four in a row for us.
    Win(usize),
    /// The opponent would complete four in a row here next turn.
    Block(usize),
    /// No tactical move; uniformly chosen among open columns.
    Random(usize),
    NoLegalMove,
}

impl Decision {
    pub fn column(self) -> Option<usize> {
        match self {
            Decision::Win(col) | Decision::Block(col) | Decision::Random(col) => Some(col),
            Decision::NoLegalMove => None,
        }
    }
}

/// Choose a column for `own`, playing against `opponent`: win if possible,
/// otherwise block, otherwise play at random.
///
/// Candidate moves are tried on `board` and taken back before the next one,
/// so the board is unchanged when this returns. Nothing is committed.
pub fn decide<R: Rng + ?Sized>(
    board: &mut Board,
    own: &Token,
    opponent: &Token,
    rng: &mut R,
) -> Decision {
    if let Some(col) = find_winning_move(board, own) {
        return Decision::Win(col);
    }
    if let Some(col) = find_blocking_move(board, opponent) {
        return Decision::Block(col);
    }
    match random_move(board, rng) {
        Some(col) => Decision::Random(col),
        None => Decision::NoLegalMove,
    }
}

/// Lowest column where dropping `own` wins on the spot.
pub fn find_winning_move(board: &mut Board, own: &Token) -> Option<usize> {
    completing_move(board, own)
}

/// Lowest column where dropping `opponent` would win for them, i.e. the
/// column we must take to stop it.
pub fn find_blocking_move(board: &mut Board, opponent: &Token) -> Option<usize> {
    completing_move(board, opponent)
}

/// Uniform pick among the columns that are not full.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let open = board.legal_columns();
    if open.is_empty() {
        return None;
    }
    Some(open[rng.random_range(0..open.len())])
}

fn completing_move(board: &mut Board, token: &Token) -> Option<usize> {
    (0..board.columns()).find(|&col| {
        let wins = board
            .speculate(col, token.clone())
            .is_some_and(|trial| trial.has_four_in_a_row());
        if wins {
            debug!("{token} completes a line in column {col}");
        }
        wins
    })
}
