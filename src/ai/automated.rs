use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::decision::{decide, Decision};
use crate::game::{Board, ColumnChoice, Player, PlayerKind, Token};

/// A player that picks its own columns: win in one, block in one, else random.
pub struct AutomatedPlayer {
    token: Token,
    opponent: Token,
    rng: StdRng,
}

impl AutomatedPlayer {
    /// `opponent` is the token the other seat plays with; it is what the
    /// blocking search drops when looking for threats.
    pub fn new(token: Token, opponent: Token) -> Self {
        AutomatedPlayer {
            token,
            opponent,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(token: Token, opponent: Token, seed: u64) -> Self {
        AutomatedPlayer {
            token,
            opponent,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn opponent(&self) -> &Token {
        &self.opponent
    }

    /// Run the decision procedure without wrapping it in a [`ColumnChoice`].
    pub fn decide(&mut self, board: &mut Board) -> Decision {
        decide(board, &self.token, &self.opponent, &mut self.rng)
    }
}

impl Player for AutomatedPlayer {
    fn token(&self) -> &Token {
        &self.token
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Automated
    }

    fn choose_column(&mut self, board: &mut Board) -> ColumnChoice {
        match self.decide(board) {
            Decision::Win(col) => {
                info!("{}: winning move in column {col}", self.token);
                ColumnChoice::Column(col)
            }
            Decision::Block(col) => {
                info!("{}: blocking {} in column {col}", self.token, self.opponent);
                ColumnChoice::Column(col)
            }
            Decision::Random(col) => {
                info!("{}: no threats, moving at random to column {col}", self.token);
                ColumnChoice::Column(col)
            }
            Decision::NoLegalMove => {
                warn!("{}: no open column left", self.token);
                ColumnChoice::NoLegalMove
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameLogic, PassivePlayer, Seat, TurnOutcome};

    #[test]
    fn test_automated_player_identity() {
        let player = AutomatedPlayer::with_seed(Token::new("X"), Token::new("O"), 1);
        assert_eq!(player.token(), &Token::new("X"));
        assert_eq!(player.opponent(), &Token::new("O"));
        assert_eq!(player.kind(), PlayerKind::Automated);
    }

    #[test]
    fn test_chooses_open_column_on_empty_board() {
        let mut player = AutomatedPlayer::new(Token::new("X"), Token::new("O"));
        let mut board = Board::new();
        for _ in 0..20 {
            let col = player.choose_column(&mut board).column().unwrap();
            assert!(board.is_valid_move(col));
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_blocks_passive_player_through_game_logic() {
        let mut game = GameLogic::new(
            Board::new(),
            Box::new(PassivePlayer::new(Token::new("O"))),
            Box::new(AutomatedPlayer::with_seed(Token::new("X"), Token::new("O"), 3)),
        );
        // O builds 0, 1, 2 on the bottom row, X stacks on top of it
        for col in 0..2 {
            assert_eq!(game.play_turn(col), Ok(TurnOutcome::Continue));
            assert_eq!(game.play_turn(col), Ok(TurnOutcome::Continue));
        }
        assert_eq!(game.play_turn(2), Ok(TurnOutcome::Continue));
        assert_eq!(game.current_seat(), Seat::Second);

        let before = game.board().clone();
        assert_eq!(game.choose_column(), ColumnChoice::Column(3));
        assert_eq!(game.board(), &before);
    }
}
