use std::path::Path;

use log::warn;

use crate::ai::AutomatedPlayer;
use crate::error::ConfigError;
use crate::game::{Board, GameLogic, PassivePlayer, Player, PlayerKind, Token};

/// One seat at the table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SeatConfig {
    pub symbol: String,
    pub kind: PlayerKind,
}

/// Top-level game configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the automated players' random fallback. Fresh entropy when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Moves first.
    pub first: SeatConfig,
    pub second: SeatConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            seed: None,
            first: SeatConfig {
                symbol: "O".into(),
                kind: PlayerKind::Passive,
            },
            second: SeatConfig {
                symbol: "X".into(),
                kind: PlayerKind::Automated,
            },
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.first.symbol.trim().is_empty() {
            return Err(ConfigError::Validation(
                "first.symbol must not be empty".into(),
            ));
        }
        if self.second.symbol.trim().is_empty() {
            return Err(ConfigError::Validation(
                "second.symbol must not be empty".into(),
            ));
        }
        if self.first.symbol == self.second.symbol {
            return Err(ConfigError::Validation(format!(
                "first.symbol and second.symbol must differ (both '{}')",
                self.first.symbol
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }

    /// Set up a fresh game on an empty board. An automated seat is told the
    /// other seat's token as its opponent.
    pub fn build_game(&self) -> GameLogic {
        let first = Token::new(self.first.symbol.as_str());
        let second = Token::new(self.second.symbol.as_str());
        let first_seed = self.seed;
        let second_seed = self.seed.map(|seed| seed.wrapping_add(1));
        GameLogic::new(
            Board::new(),
            Self::make_player(self.first.kind, first.clone(), second.clone(), first_seed),
            Self::make_player(self.second.kind, second, first, second_seed),
        )
    }

    fn make_player(
        kind: PlayerKind,
        token: Token,
        opponent: Token,
        seed: Option<u64>,
    ) -> Box<dyn Player> {
        match (kind, seed) {
            (PlayerKind::Passive, _) => Box::new(PassivePlayer::new(token)),
            (PlayerKind::Automated, Some(seed)) => {
                Box::new(AutomatedPlayer::with_seed(token, opponent, seed))
            }
            (PlayerKind::Automated, None) => Box::new(AutomatedPlayer::new(token, opponent)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Seat;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
seed = 7

[second]
symbol = "R"
kind = "passive"
"#;
        let config: GameConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.second.symbol, "R");
        assert_eq!(config.second.kind, PlayerKind::Passive);
        // first seat untouched
        assert_eq!(config.first, GameConfig::default().first);
    }

    #[test]
    fn test_unknown_kind_is_a_parse_error() {
        let toml_str = r#"
[first]
symbol = "O"
kind = "remote"
"#;
        assert!(toml::from_str::<GameConfig>(toml_str).is_err());
    }

    #[test]
    fn test_validation_rejects_same_symbols() {
        let mut config = GameConfig::default();
        config.second.symbol = "O".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_symbol() {
        let mut config = GameConfig::default();
        config.first.symbol = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = GameConfig::load_or_default(Path::new("nonexistent_game.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[first]
symbol = "A"
kind = "automated"
"#
        )
        .unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.first.symbol, "A");
        assert_eq!(config.first.kind, PlayerKind::Automated);
        assert_eq!(config.second, GameConfig::default().second);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.toml");
        std::fs::write(&path, "[first]\nsymbol = \"X\"\nkind = \"passive\"\n").unwrap();
        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = GameConfig::default_toml();
        let config: GameConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_build_game_wires_seats() {
        let config = GameConfig {
            seed: Some(1),
            ..GameConfig::default()
        };
        let game = config.build_game();
        assert_eq!(game.current_seat(), Seat::First);
        assert_eq!(game.player(Seat::First).token(), &Token::new("O"));
        assert_eq!(game.player(Seat::First).kind(), PlayerKind::Passive);
        assert_eq!(game.player(Seat::Second).token(), &Token::new("X"));
        assert_eq!(game.player(Seat::Second).kind(), PlayerKind::Automated);
        assert_eq!(game.board(), &Board::new());
    }
}
