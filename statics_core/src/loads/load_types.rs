//! Load symbol definitions
//!
//! The four characteristic action categories that load combinations factor.

use serde::{Deserialize, Serialize};

use crate::errors::{AnalysisError, StaticsResult};

/// Characteristic load categories
///
/// Each symbol is the standard abbreviation used in combination equations.
///
/// # Example
/// ```
/// use statics_core::loads::LoadSymbol;
///
/// let dead = LoadSymbol::G;
/// assert_eq!(dead.code(), "G");
/// assert_eq!(dead.description(), "Permanent (dead) load");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LoadSymbol {
    /// G - Permanent load (self-weight and fixed finishes)
    G,
    /// Q - Imposed (live) load
    Q,
    /// W - Wind load
    W,
    /// S - Snow load
    S,
}

impl LoadSymbol {
    /// All symbols in equation order
    pub const ALL: [LoadSymbol; 4] = [LoadSymbol::G, LoadSymbol::Q, LoadSymbol::W, LoadSymbol::S];

    pub fn code(&self) -> &'static str {
        match self {
            LoadSymbol::G => "G",
            LoadSymbol::Q => "Q",
            LoadSymbol::W => "W",
            LoadSymbol::S => "S",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            LoadSymbol::G => "Permanent (dead) load",
            LoadSymbol::Q => "Imposed (live) load",
            LoadSymbol::W => "Wind load",
            LoadSymbol::S => "Snow load",
        }
    }

    /// Whether this load is always present
    pub fn is_permanent(&self) -> bool {
        matches!(self, LoadSymbol::G)
    }

    /// Whether this load is an environmental action
    pub fn is_environmental(&self) -> bool {
        matches!(self, LoadSymbol::W | LoadSymbol::S)
    }
}

impl std::fmt::Display for LoadSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for LoadSymbol {
    type Err = AnalysisError;

    /// Accepts the symbol or the common name ("dead", "live", "wind", "snow")
    fn from_str(s: &str) -> StaticsResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "g" | "dead" | "permanent" => Ok(LoadSymbol::G),
            "q" | "live" | "imposed" => Ok(LoadSymbol::Q),
            "w" | "wind" => Ok(LoadSymbol::W),
            "s" | "snow" => Ok(LoadSymbol::S),
            _ => Err(AnalysisError::invalid_input(
                "load_symbol",
                s,
                "Expected one of G, Q, W, S",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_codes() {
        let codes: Vec<&str> = LoadSymbol::ALL.iter().map(LoadSymbol::code).collect();
        assert_eq!(codes, vec!["G", "Q", "W", "S"]);
    }

    #[test]
    fn test_classification() {
        assert!(LoadSymbol::G.is_permanent());
        assert!(!LoadSymbol::Q.is_permanent());
        assert!(LoadSymbol::W.is_environmental());
        assert!(LoadSymbol::S.is_environmental());
        assert!(!LoadSymbol::Q.is_environmental());
    }

    #[test]
    fn test_parse() {
        assert_eq!("dead".parse::<LoadSymbol>().unwrap(), LoadSymbol::G);
        assert_eq!(" q ".parse::<LoadSymbol>().unwrap(), LoadSymbol::Q);
        assert_eq!("Snow".parse::<LoadSymbol>().unwrap(), LoadSymbol::S);
        assert!("E".parse::<LoadSymbol>().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&LoadSymbol::W).unwrap();
        assert_eq!(json, "\"W\"");
        let parsed: LoadSymbol = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, LoadSymbol::W);
    }
}
