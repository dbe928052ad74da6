//! Player intents
//!
//! Every line the player types is parsed into one of a closed set of intents
//! before it reaches the engine. Keywords are case-insensitive; symbol and
//! slot names are passed through untouched.

use std::str::FromStr;

/// Something the player asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// `load <utility> <chip>`
    PlaceSymbol { symbol: String, slot: String },
    ExecuteTurn,
    ShowHistory,
    ShowStatus,
    ShowSlots,
    ShowSymbols,
    ShowCommands,
    Quit,
}

/// Error type for unparseable input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntentError {
    #[error("invalid command.")]
    Unknown(String),
    #[error("usage: load <utility> <chip>")]
    PlaceUsage,
}

impl FromStr for Intent {
    type Err = IntentError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(keyword) = tokens.first().map(|t| t.to_lowercase()) else {
            return Err(IntentError::Unknown(line.to_string()));
        };

        let intent = match (keyword.as_str(), &tokens[1..]) {
            ("load" | "place", [symbol, slot]) => Self::PlaceSymbol {
                symbol: (*symbol).to_string(),
                slot: (*slot).to_string(),
            },
            ("load" | "place", _) => return Err(IntentError::PlaceUsage),
            ("execute" | "run", []) => Self::ExecuteTurn,
            ("history", []) => Self::ShowHistory,
            ("status", []) => Self::ShowStatus,
            ("commands" | "help", []) => Self::ShowCommands,
            ("quit" | "exit", []) => Self::Quit,
            ("show", [what]) => match what.to_lowercase().as_str() {
                "phases" | "history" => Self::ShowHistory,
                "chips" | "slots" => Self::ShowSlots,
                "utilities" | "symbols" => Self::ShowSymbols,
                "status" => Self::ShowStatus,
                _ => return Err(IntentError::Unknown(line.to_string())),
            },
            _ => return Err(IntentError::Unknown(line.to_string())),
        };

        Ok(intent)
    }
}
