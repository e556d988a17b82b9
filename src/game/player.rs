use super::board::Board;
use super::token::Token;

/// One of the two places at the table. The first seat moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Get the other seat
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    /// Get seat name for display
    pub fn name(self) -> &'static str {
        match self {
            Seat::First => "First",
            Seat::Second => "Second",
        }
    }
}

/// How a seat's moves are decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves come from outside the engine (a person, a script).
    Passive,
    /// Moves are computed by the win / block / random procedure.
    Automated,
}

/// Answer to "which column?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnChoice {
    Column(usize),
    /// The choice belongs to an external actor.
    Deferred,
    /// Every column is full.
    NoLegalMove,
}

impl ColumnChoice {
    pub fn column(self) -> Option<usize> {
        match self {
            ColumnChoice::Column(col) => Some(col),
            ColumnChoice::Deferred | ColumnChoice::NoLegalMove => None,
        }
    }
}

/// A side of the game: holds a token and can be asked for a column.
pub trait Player {
    fn token(&self) -> &Token;

    fn kind(&self) -> PlayerKind;

    /// Pick a column to play. The board is lent mutably so an implementation
    /// may try moves on it, but it must be left exactly as it was found.
    fn choose_column(&mut self, board: &mut Board) -> ColumnChoice;
}

/// A player whose moves are supplied by the driver.
#[derive(Debug, Clone)]
pub struct PassivePlayer {
    token: Token,
}

impl PassivePlayer {
    pub fn new(token: Token) -> Self {
        PassivePlayer { token }
    }
}

impl Player for PassivePlayer {
    fn token(&self) -> &Token {
        &self.token
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Passive
    }

    fn choose_column(&mut self, _board: &mut Board) -> ColumnChoice {
        ColumnChoice::Deferred
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_seat() {
        assert_eq!(Seat::First.other(), Seat::Second);
        assert_eq!(Seat::Second.other(), Seat::First);
    }

    #[test]
    fn test_seat_name() {
        assert_eq!(Seat::First.name(), "First");
        assert_eq!(Seat::Second.name(), "Second");
    }

    #[test]
    fn test_passive_player_defers() {
        let mut player = PassivePlayer::new(Token::new("O"));
        let mut board = Board::new();
        assert_eq!(player.choose_column(&mut board), ColumnChoice::Deferred);
        assert_eq!(player.token(), &Token::new("O"));
        assert_eq!(player.kind(), PlayerKind::Passive);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_column_choice_column() {
        assert_eq!(ColumnChoice::Column(4).column(), Some(4));
        assert_eq!(ColumnChoice::Deferred.column(), None);
        assert_eq!(ColumnChoice::NoLegalMove.column(), None);
    }
}
