//! Symbol definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// A reel symbol
///
/// Declaration order defines the total order used to cluster equal symbols
/// during payout evaluation. The order carries no other meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Bells,
    Flowers,
    Fruits,
    Hearts,
    Spades,
}

impl Symbol {
    /// All symbols in declaration order
    pub const ALL: [Symbol; 5] = [
        Symbol::Bells,
        Symbol::Flowers,
        Symbol::Fruits,
        Symbol::Hearts,
        Symbol::Spades,
    ];

    /// Display name shown in spin reports
    pub fn name(self) -> &'static str {
        match self {
            Symbol::Bells => "Bells",
            Symbol::Flowers => "Flowers",
            Symbol::Fruits => "Fruits",
            Symbol::Hearts => "Hearts",
            Symbol::Spades => "Spades",
        }
    }

    /// Multiple of the wager paid on a qualifying match
    pub fn payout_factor(self) -> u64 {
        match self {
            Symbol::Bells => 10,
            Symbol::Flowers => 5,
            Symbol::Fruits => 3,
            Symbol::Hearts => 2,
            Symbol::Spades => 1,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Join symbol names with single spaces, in the given order
pub fn display_names(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(|s| s.name())
        .collect::<Vec<_>>()
        .join(" ")
}
