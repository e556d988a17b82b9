use std::fmt;

/// The mark a side leaves in a cell. Two tokens are equal iff their symbols are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Token {
    symbol: String,
}

impl Token {
    pub fn new(symbol: impl Into<String>) -> Self {
        Token {
            symbol: symbol.into(),
        }
    }

    /// Get the identifying symbol
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}
