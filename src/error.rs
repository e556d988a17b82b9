use std::path::PathBuf;

/// A move the rules do not allow. Rejected moves leave the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is not on the board")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::InvalidColumn(9).to_string(),
            "column 9 is not on the board"
        );
        assert_eq!(MoveError::ColumnFull(2).to_string(), "column 2 is full");
        assert_eq!(MoveError::GameOver.to_string(), "the game is already over");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("symbols must differ".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: symbols must differ"
        );
    }

    #[test]
    fn test_file_read_error_display() {
        let err = ConfigError::FileRead {
            path: PathBuf::from("game.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read config file game.toml: missing"
        );
    }
}
