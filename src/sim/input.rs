//! Per-tick input symbols and action sets

use serde::{Deserialize, Serialize};

/// A single input a controller can assert during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputSymbol {
    MoveLeft,
    MoveRight,
    ActivateBoost,
    Launch,
    Quit,
    Reset,
}

impl InputSymbol {
    pub const ALL: [InputSymbol; 6] = [
        InputSymbol::MoveLeft,
        InputSymbol::MoveRight,
        InputSymbol::ActivateBoost,
        InputSymbol::Launch,
        InputSymbol::Quit,
        InputSymbol::Reset,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InputSymbol::MoveLeft => "left",
            InputSymbol::MoveRight => "right",
            InputSymbol::ActivateBoost => "boost",
            InputSymbol::Launch => "launch",
            InputSymbol::Quit => "quit",
            InputSymbol::Reset => "reset",
        }
    }

    /// Parse a token; accepts the key names ("space", "enter") as aliases
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" => Some(InputSymbol::MoveLeft),
            "right" | "r" => Some(InputSymbol::MoveRight),
            "boost" | "b" => Some(InputSymbol::ActivateBoost),
            "launch" | "space" => Some(InputSymbol::Launch),
            "quit" | "q" => Some(InputSymbol::Quit),
            "reset" | "enter" => Some(InputSymbol::Reset),
            _ => None,
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// The set of inputs asserted during one tick. Any combination is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actions(u8);

impl Actions {
    pub const NONE: Actions = Actions(0);

    pub fn new() -> Self {
        Self::NONE
    }

    /// Builder-style insert
    pub fn with(mut self, symbol: InputSymbol) -> Self {
        self.insert(symbol);
        self
    }

    pub fn insert(&mut self, symbol: InputSymbol) {
        self.0 |= symbol.bit();
    }

    pub fn remove(&mut self, symbol: InputSymbol) {
        self.0 &= !symbol.bit();
    }

    #[inline]
    pub fn contains(&self, symbol: InputSymbol) -> bool {
        self.0 & symbol.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = InputSymbol> + '_ {
        InputSymbol::ALL.into_iter().filter(|s| self.contains(*s))
    }

    /// Build a set from raw tokens, ignoring anything unrecognised
    pub fn parse_lossy<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Self {
        tokens.into_iter().filter_map(InputSymbol::parse).collect()
    }
}

impl From<InputSymbol> for Actions {
    fn from(symbol: InputSymbol) -> Self {
        Actions::NONE.with(symbol)
    }
}

impl FromIterator<InputSymbol> for Actions {
    fn from_iter<I: IntoIterator<Item = InputSymbol>>(iter: I) -> Self {
        let mut actions = Actions::NONE;
        for symbol in iter {
            actions.insert(symbol);
        }
        actions
    }
}
